//! Domain entities - the core business objects.
//!
//! Fields are private: the only ways in are the validated drafts, the
//! validated setters, and `hydrate` for rows coming back from storage.

mod author;

mod post;

pub use author::{Author, AuthorDraft, NewAuthor};
pub use post::{Category, NewPost, Post, PostDraft};
