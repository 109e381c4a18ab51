//! Pagination Module
//!
//! Pure windowing over a sorted photo collection and sol-range navigation flags.

mod sol;
mod window;

pub use sol::SolBounds;
pub use window::{PageRequest, PageResult};
