pub mod colors;

pub use colors::{language_color, FALLBACK_COLOR};
