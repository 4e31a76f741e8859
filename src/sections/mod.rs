//! Heuristic scoring sections
//!
//! Each section scores one aspect of the candidate password. Length and
//! variety contribute points; the deny-list section caps the total after
//! the contributions are summed.

mod denylist;
mod length;
mod variety;

pub use denylist::denylist_clamp;
pub use length::length_points;
pub use variety::variety_points;
