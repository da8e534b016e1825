//! Services - create and update records, validating every assigned field
//! before anything reaches storage.

mod author;
mod post;

pub use author::{AuthorChanges, AuthorService, CreateAuthor};
pub use post::{CreatePost, PostChanges, PostService};
