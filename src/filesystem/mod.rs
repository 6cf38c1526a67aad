//! In-memory directory namespace.
//!
//! A rooted tree of named directories, the slash-separated paths that address
//! them, and the engine that creates, moves, deletes and lists them.

mod listing;
mod namespace;
mod path;
mod tree;

pub use listing::Listing;
pub use namespace::{CreateError, DeleteError, MoveError, Namespace};
pub use path::{NamespacePath, PathError};
pub use tree::{DirectoryNode, NotFound};
