//! Core types and traits for the snipbin snippet sharing service.
//!
//! This crate provides the snippet record model, identifier type,
//! liveness policy, and the traits implemented by the storage and
//! service layers.

pub mod error;
pub mod pastebin;
pub mod policy;
pub mod snippet;
pub mod snippet_id;
pub mod store;

pub use error::{CoreError, PastebinError, StorageError};
pub use pastebin::{CreateParams, Pastebin};
pub use snippet::{Snippet, SnippetKind, FIELD_DEFAULT};
pub use snippet_id::SnippetId;
pub use store::{NewSnippet, SnippetStore};
