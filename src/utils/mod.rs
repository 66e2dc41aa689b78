//! Utility modules shared across the loader.

pub mod path;
pub mod plural;
pub mod slug;
