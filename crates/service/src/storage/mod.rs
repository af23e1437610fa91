//! Storage abstractions for service layer
//!
//! Process-local maps with no durability; everything is gone when the process exits.

pub mod memory_map_store;

pub use memory_map_store::MemoryMapStore;
