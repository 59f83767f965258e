//! The snippet service: validation, variant selection, and delegation
//! to a [`SnippetStore`](snipbin_core::SnippetStore).

mod service;

pub use service::PastebinService;
