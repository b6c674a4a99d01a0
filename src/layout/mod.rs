//! Layout normalization for the board window.
//!
//! Turns arbitrary, possibly malformed input into complete, valid records:
//! a slot-to-kind mapping covering every slot of the active mode exactly
//! once, and a duplicate-free widget ordering covering every stackable kind.
//! Nothing here fails; malformed input degrades to built-in defaults,
//! observable through the [`Diagnostics`](crate::diag::Diagnostics) channel.

mod normalize;
mod order;
mod presets;

pub use normalize::{normalize_layout, LayoutMapping};
pub use order::{normalize_order, WidgetOrder};
pub use presets::{preset, preset_names};
