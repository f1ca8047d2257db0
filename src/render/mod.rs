pub mod avatar;
pub mod heatmap;
pub mod palette;
pub mod profile;

pub use avatar::{AvatarDisplay, KittyIcat};
pub use heatmap::format_heatmap;
pub use palette::Palette;
pub use profile::format_profile;

/// Left margin that keeps text clear of the 20-column avatar.
pub const INDENT: &str = "                      ";
