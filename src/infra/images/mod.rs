//! Local image lookup for circuit and race pages.

mod map;

pub use map::{ImageMap, page_title};
