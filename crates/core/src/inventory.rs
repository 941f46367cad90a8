//! Fixed five-slot inventory.

use crate::types::{Material, INVENTORY_SIZE};

/// One optional material per slot. Slots never stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Inventory {
    slots: [Option<Material>; INVENTORY_SIZE],
}

impl Inventory {
    pub fn new() -> Self {
        Self::default()
    }

    /// One of each collectible material, in `Material::ALL` order.
    pub fn starter() -> Self {
        let mut slots = [None; INVENTORY_SIZE];
        for (slot, material) in slots.iter_mut().zip(Material::ALL) {
            *slot = Some(material);
        }
        Self { slots }
    }

    pub fn from_slots(slots: [Option<Material>; INVENTORY_SIZE]) -> Self {
        Self { slots }
    }

    /// Put `material` into the first free slot.
    ///
    /// Returns false, leaving every slot untouched, when all slots are taken.
    pub fn add(&mut self, material: Material) -> bool {
        match self.slots.iter_mut().find(|slot| slot.is_none()) {
            Some(slot) => {
                *slot = Some(material);
                true
            }
            None => false,
        }
    }

    /// Content of `slot`; `None` for empty or out-of-range slots.
    pub fn get(&self, slot: usize) -> Option<Material> {
        self.slots.get(slot).copied().flatten()
    }

    /// Clear `slot` and return what it held.
    pub fn take(&mut self, slot: usize) -> Option<Material> {
        self.slots.get_mut(slot).and_then(Option::take)
    }

    pub fn is_full(&self) -> bool {
        self.slots.iter().all(Option::is_some)
    }

    /// Number of occupied slots
    pub fn filled(&self) -> usize {
        self.slots.iter().filter(|s| s.is_some()).count()
    }

    pub fn slots(&self) -> &[Option<Material>; INVENTORY_SIZE] {
        &self.slots
    }
}
