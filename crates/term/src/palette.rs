//! Colours used by the sandbox view.

use crate::fb::Rgb;
use crate::types::Material;

pub const BACKGROUND: Rgb = Rgb::BLACK;
pub const PLAYER: Rgb = Rgb::new(255, 0, 0);
pub const PLAYER_FACE: Rgb = Rgb::BLACK;
pub const GRID_LINE: Rgb = Rgb::new(60, 60, 70);
pub const SLOT: Rgb = Rgb::new(100, 100, 100);
pub const SELECTED: Rgb = Rgb::new(255, 255, 0);
pub const HEALTH_FULL: Rgb = Rgb::new(0, 255, 0);
pub const HEALTH_EMPTY: Rgb = Rgb::new(255, 0, 0);
pub const BORDER: Rgb = Rgb::new(200, 200, 200);
pub const TEXT: Rgb = Rgb::WHITE;

pub fn material_color(material: Material) -> Rgb {
    match material {
        Material::Empty => Rgb::BLACK,
        Material::Dirt => Rgb::new(139, 69, 19),
        Material::Stone => Rgb::new(100, 100, 100),
        Material::Water => Rgb::new(0, 0, 255),
        Material::Wood => Rgb::new(139, 115, 85),
        Material::Plant => Rgb::new(0, 255, 0),
    }
}
