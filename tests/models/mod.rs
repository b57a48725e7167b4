//! Model Tests Module
//!
//! Filter adapters and per-resource projections are pure, so these tests
//! assert the exact SQL each resource's list/lookup path hands to the
//! executor.
