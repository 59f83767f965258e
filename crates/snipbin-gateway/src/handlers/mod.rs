mod health;
mod snippets;

pub use health::health_handler;
pub use snippets::{
    create_snippet_handler, delete_snippet_handler, get_snippet_handler, latest_snippets_handler,
};
