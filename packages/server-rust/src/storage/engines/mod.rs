//! Concrete [`StateStore`](crate::traits::StateStore) engines.

mod hashmap;

pub use hashmap::HashMapStore;
