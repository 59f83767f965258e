//! Snippet store implementations.
//!
//! [`FsSnippetStore`] is the production store: one JSON file per
//! snippet in a single directory, the directory listing itself acting
//! as the index. [`InMemoryStore`] mirrors the same contract in memory
//! for testing service logic without filesystem I/O.

pub mod fs;
pub mod memory;

pub use fs::FsSnippetStore;
pub use memory::InMemoryStore;
