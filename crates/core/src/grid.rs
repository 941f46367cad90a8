//! Grid module - the tile world
//!
//! The grid is a fixed-size rectangle of materials stored row-major in a flat
//! vector. Coordinates: (x, y) where x grows left to right and y grows top to
//! bottom. Reads outside the grid see `Empty`; writes outside are ignored.

use crate::types::{Material, GRID_HEIGHT, GRID_WIDTH};

/// Fixed-size 2D array of material cells
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TileGrid {
    width: u32,
    height: u32,
    /// Flat array of cells, row-major order (y * width + x)
    cells: Vec<Material>,
}

impl TileGrid {
    /// Create an all-Empty grid of the given size
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            cells: vec![Material::Empty; (width as usize) * (height as usize)],
        }
    }

    /// Calculate flat index from (x, y) coordinates
    #[inline(always)]
    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if !self.in_bounds(x, y) {
            return None;
        }
        Some((y as usize) * (self.width as usize) + (x as usize))
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn in_bounds(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && (x as u32) < self.width && (y as u32) < self.height
    }

    /// Material at (x, y); `Empty` when out of bounds
    pub fn get(&self, x: i32, y: i32) -> Material {
        self.index(x, y)
            .map(|idx| self.cells[idx])
            .unwrap_or(Material::Empty)
    }

    /// Overwrite the cell at (x, y); no-op when out of bounds
    pub fn set(&mut self, x: i32, y: i32, material: Material) {
        if let Some(idx) = self.index(x, y) {
            self.cells[idx] = material;
        }
    }

    pub fn is_solid_at(&self, x: i32, y: i32) -> bool {
        self.get(x, y).is_solid()
    }

    /// Number of cells holding `material`
    pub fn count(&self, material: Material) -> usize {
        self.cells.iter().filter(|&&m| m == material).count()
    }

    pub fn cells(&self) -> &[Material] {
        &self.cells
    }

    /// Iterate `(x, y, material)` in scan order
    pub fn iter(&self) -> impl Iterator<Item = (i32, i32, Material)> + '_ {
        let width = self.width as usize;
        self.cells
            .iter()
            .enumerate()
            .map(move |(i, &m)| ((i % width) as i32, (i / width) as i32, m))
    }
}

impl Default for TileGrid {
    fn default() -> Self {
        Self::new(GRID_WIDTH, GRID_HEIGHT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_index_calculation() {
        let grid = TileGrid::new(25, 18);
        assert_eq!(grid.index(0, 0), Some(0));
        assert_eq!(grid.index(24, 0), Some(24));
        assert_eq!(grid.index(0, 1), Some(25));
        assert_eq!(grid.index(24, 17), Some(449));
        assert_eq!(grid.index(-1, 0), None);
        assert_eq!(grid.index(25, 0), None);
        assert_eq!(grid.index(0, 18), None);
    }

    #[test]
    fn test_grid_flat_array() {
        let mut grid = TileGrid::new(4, 3);
        grid.set(3, 2, Material::Wood);
        grid.set(1, 0, Material::Water);

        assert_eq!(grid.cells[2 * 4 + 3], Material::Wood);
        assert_eq!(grid.cells[1], Material::Water);
        assert_eq!(grid.count(Material::Empty), 10);
    }

    #[test]
    fn test_iter_yields_scan_order() {
        let mut grid = TileGrid::new(2, 2);
        grid.set(1, 1, Material::Stone);
        let cells: Vec<_> = grid.iter().collect();
        assert_eq!(
            cells,
            vec![
                (0, 0, Material::Empty),
                (1, 0, Material::Empty),
                (0, 1, Material::Empty),
                (1, 1, Material::Stone),
            ]
        );
    }
}
