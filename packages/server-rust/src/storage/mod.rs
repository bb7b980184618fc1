//! State store implementations for the land registry.
//!
//! The [`StateStore`](crate::traits::StateStore) trait lives in
//! [`crate::traits`]; this module provides concrete engines.

pub mod engines;

#[cfg(test)]
pub(crate) mod test_stores;

pub use engines::HashMapStore;
