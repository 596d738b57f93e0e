//! Value decoders: pure string-to-value functions used by rule handlers.
//!
//! Every decoder is total. Unparseable input degrades to a pass-through
//! of the original string rather than an error; a malformed utility
//! class must never break a build.

mod color;
mod compose;
mod keywords;
mod length;

pub use color::color;
pub use compose::{FlexModifier, border, flex};
pub use keywords::{align, font_weight, justify};
pub use length::{px_to_rem, side_length, spacing};
