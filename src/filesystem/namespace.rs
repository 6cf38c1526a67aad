//! The namespace engine: create, move, delete and list directories by path.
//!
//! Every mutating operation validates its input and resolves every path it
//! needs before touching the tree, so a failed operation leaves the tree as
//! it was.

use snafu::Snafu;
use tracing::{debug, warn};

use crate::filesystem::{DirectoryNode, Listing, NamespacePath, NotFound, PathError};

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Namespace {
    root: DirectoryNode,
}

impl Namespace {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn root(&self) -> &DirectoryNode {
        &self.root
    }

    /// Read-only lookup of a path.
    pub fn resolve(&self, path: &NamespacePath) -> Result<&DirectoryNode, NotFound> {
        self.root.resolve(path.as_slice())
    }

    /// Creates every missing directory along `path`.
    ///
    /// Creating a path that already exists is a no-op.
    pub fn create(&mut self, path: &str) -> Result<(), CreateError> {
        let path = NamespacePath::parse(path).map_err(|err| match err {
            PathError::Undefined => CreateError::Undefined,
            PathError::EmptySegment { path } => CreateError::EmptySegment { path },
        })?;

        let created = self.root.ensure_path(path.as_slice());
        debug!("Created {} directories for '{}'", created, path);
        Ok(())
    }

    /// Moves the directory at `from` (with its subtree) underneath the directory at `to`.
    ///
    /// The moved directory keeps its name. A directory of the same name
    /// already present under `to` is replaced.
    pub fn move_directory(&mut self, from: &str, to: &str) -> Result<(), MoveError> {
        if from.is_empty() {
            return Err(MoveError::FromUndefined);
        }
        if to.is_empty() {
            return Err(MoveError::ToUndefined);
        }
        let from = NamespacePath::parse(from).map_err(MoveError::from_path_error)?;
        let to = NamespacePath::parse(to).map_err(MoveError::from_path_error)?;

        self.resolve(&from)
            .map_err(|NotFound { segment }| MoveError::SourceNotFound { name: segment })?;
        self.resolve(&to)
            .map_err(|NotFound { segment }| MoveError::TargetNotFound { name: segment })?;

        if from.contains(&to) {
            return Err(MoveError::IntoItself {
                from: from.to_string(),
                to: to.to_string(),
            });
        }

        // Both endpoints resolved above and `to` lies outside the moved
        // subtree, so detaching cannot strand the target.
        let (source_parent, moved_name) = from.parent_and_name();
        let (moved, target) = self
            .root
            .take_child(source_parent, moved_name)
            .and_then(|moved| Ok((moved, self.root.resolve_mut(to.as_slice())?)))
            .map_err(|NotFound { segment }| MoveError::TargetNotFound { name: segment })?;

        if target.insert_child(moved_name, moved).is_some() {
            warn!("Moving '{}' replaced an existing '{}' in '{}'", from, moved_name, to);
        }
        debug!("Moved '{}' into '{}'", from, to);
        Ok(())
    }

    /// Deletes the directory at `path` together with everything beneath it.
    pub fn delete(&mut self, path: &str) -> Result<(), DeleteError> {
        let parsed = NamespacePath::parse(path).map_err(|err| match err {
            PathError::Undefined => DeleteError::Undefined,
            PathError::EmptySegment { path } => DeleteError::EmptySegment { path },
        })?;

        let (parent_segments, deleted_name) = parsed.parent_and_name();
        let removed = self
            .root
            .take_child(parent_segments, deleted_name)
            .map_err(|NotFound { segment }| DeleteError::NotFound {
                path: path.to_string(),
                missing: segment,
            })?;

        debug!(
            "Deleted '{}' (leaf: {}, direct children: {})",
            parsed,
            removed.is_leaf(),
            removed.len()
        );
        Ok(())
    }

    pub fn list(&self) -> Listing<'_> {
        Listing::new(&self.root)
    }
}

#[derive(Debug, Snafu, PartialEq, Eq)]
#[snafu(module)]
pub enum CreateError {
    #[snafu(display("directory path to be created is undefined"))]
    Undefined,
    #[snafu(display("directory path {} contains an empty segment", path))]
    EmptySegment { path: String },
}

#[derive(Debug, Snafu, PartialEq, Eq)]
#[snafu(module)]
pub enum MoveError {
    #[snafu(display("'from' parameter is undefined"))]
    FromUndefined,
    #[snafu(display("'to' parameter is undefined"))]
    ToUndefined,
    #[snafu(display("move: source directory {} does not exist", name))]
    SourceNotFound { name: String },
    #[snafu(display("move: target directory {} does not exist", name))]
    TargetNotFound { name: String },
    #[snafu(display(
        "move: cannot move {} into itself or its own subdirectory {}",
        from,
        to
    ))]
    IntoItself { from: String, to: String },
    #[snafu(display("move: path {} contains an empty segment", path))]
    EmptySegment { path: String },
}

impl MoveError {
    fn from_path_error(err: PathError) -> Self {
        match err {
            // Empty inputs are rejected before parsing
            PathError::Undefined => MoveError::FromUndefined,
            PathError::EmptySegment { path } => MoveError::EmptySegment { path },
        }
    }
}

#[derive(Debug, Snafu, PartialEq, Eq)]
#[snafu(module)]
pub enum DeleteError {
    #[snafu(display("'path' parameter is undefined"))]
    Undefined,
    #[snafu(display("Cannot delete {} - {} does not exist", path, missing))]
    NotFound { path: String, missing: String },
    #[snafu(display("Cannot delete {} - path contains an empty segment", path))]
    EmptySegment { path: String },
}
