//! Frame loop state machine.
//!
//! One tick: drain discrete events in arrival order, then apply held movement
//! (up, down, left, right; each its own move call), then the caller renders.
//! The loop has a single live state and stops on a quit event.

use crate::core::World;
use crate::interact;
use crate::types::{HeldKeys, InputEvent, LoopState, ViewOptions};

#[derive(Debug, Clone)]
pub struct FrameLoop {
    world: World,
    view: ViewOptions,
    state: LoopState,
    ticks: u64,
}

impl FrameLoop {
    pub fn new(world: World) -> Self {
        Self {
            world,
            view: ViewOptions::default(),
            state: LoopState::Running,
            ticks: 0,
        }
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn view(&self) -> &ViewOptions {
        &self.view
    }

    pub fn state(&self) -> LoopState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state == LoopState::Running
    }

    /// Ticks advanced so far
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Ask the loop to stop (e.g. on a termination signal).
    pub fn stop(&mut self) {
        if self.state == LoopState::Running {
            log::info!("frame loop stopping after {} ticks", self.ticks);
        }
        self.state = LoopState::Stopped;
    }

    /// Advance one tick. A stopped loop ignores further ticks.
    pub fn tick<I>(&mut self, events: I, held: HeldKeys) -> LoopState
    where
        I: IntoIterator<Item = InputEvent>,
    {
        if !self.is_running() {
            return self.state;
        }

        for event in events {
            self.handle_event(event);
            if !self.is_running() {
                return self.state;
            }
        }

        for dir in held.iter() {
            let (dx, dy) = dir.delta();
            self.world.move_player(dx, dy);
        }

        self.ticks += 1;
        self.state
    }

    /// Apply a single discrete event.
    pub fn handle_event(&mut self, event: InputEvent) {
        match event {
            InputEvent::Quit => self.stop(),
            InputEvent::SelectSlot(slot) => {
                interact::select_slot(&mut self.world, slot as usize);
            }
            InputEvent::ToggleGrid => {
                interact::toggle_grid(&mut self.view);
            }
            InputEvent::PrimaryClick { x, y } => {
                let (tx, ty) = interact::tile_at(x, y);
                interact::place(&mut self.world, tx, ty);
            }
            InputEvent::SecondaryClick { x, y } => {
                let (tx, ty) = interact::tile_at(x, y);
                interact::collect(&mut self.world, tx, ty);
            }
        }
    }
}
