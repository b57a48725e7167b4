//! Query Builder Tests Module
//!
//! Covers the projection/builder/sort-parser contract through the public API:
//! exact SQL text, argument ordering, placeholder numbering, and the
//! guarantees shared by the count and page emission paths.

pub mod builder;
pub mod projection;
pub mod sort;
