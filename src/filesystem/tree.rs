use std::collections::{BTreeMap, btree_map};

use snafu::Snafu;
use tracing::debug;

/// A single directory of the namespace.
///
/// Every node is a container: a leaf is simply a node with no children.
/// Children are kept ordered by name, which is the order listings use.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DirectoryNode {
    children: BTreeMap<String, DirectoryNode>,
}

impl DirectoryNode {
    pub fn root() -> Self {
        Self::default()
    }

    pub fn child(&self, name: &str) -> Option<&DirectoryNode> {
        self.children.get(name)
    }

    pub fn children(&self) -> btree_map::Iter<'_, String, DirectoryNode> {
        self.children.iter()
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    pub fn len(&self) -> usize {
        self.children.len()
    }

    /// Attaches `node` under `name`, returning whatever was stored there before.
    pub fn insert_child(
        &mut self,
        name: impl Into<String>,
        node: DirectoryNode,
    ) -> Option<DirectoryNode> {
        self.children.insert(name.into(), node)
    }

    pub fn remove_child(&mut self, name: &str) -> Option<DirectoryNode> {
        self.children.remove(name)
    }

    /// Walks down from this node, one child lookup per segment.
    ///
    /// Fails on the first segment that has no matching child; an empty
    /// sequence resolves to this node.
    pub fn resolve<S: AsRef<str>>(&self, segments: &[S]) -> Result<&DirectoryNode, NotFound> {
        segments.iter().try_fold(self, |current, segment| {
            let segment = segment.as_ref();
            current.children.get(segment).ok_or_else(|| NotFound {
                segment: segment.to_string(),
            })
        })
    }

    pub fn resolve_mut<S: AsRef<str>>(
        &mut self,
        segments: &[S],
    ) -> Result<&mut DirectoryNode, NotFound> {
        segments.iter().try_fold(self, |current, segment| {
            let segment = segment.as_ref();
            current.children.get_mut(segment).ok_or_else(|| NotFound {
                segment: segment.to_string(),
            })
        })
    }

    /// Resolves `parent` and detaches its child `name`.
    ///
    /// Fails with the first missing segment, which may be `name` itself;
    /// nothing is detached on failure.
    pub fn take_child<S: AsRef<str>>(
        &mut self,
        parent: &[S],
        name: &str,
    ) -> Result<DirectoryNode, NotFound> {
        self.resolve_mut(parent)?
            .remove_child(name)
            .ok_or_else(|| NotFound {
                segment: name.to_string(),
            })
    }

    /// Walks down from this node, materializing every missing segment on the way.
    ///
    /// Returns the number of nodes that had to be created.
    pub fn ensure_path<S: AsRef<str>>(&mut self, segments: &[S]) -> usize {
        let mut current = self;
        let mut created = 0;

        for segment in segments {
            let name = segment.as_ref();
            if !current.children.contains_key(name) {
                debug!("Materializing directory '{}'", name);
                created += 1;
            }
            current = current.children.entry(name.to_string()).or_default();
        }

        created
    }
}

/// Resolution stopped at a segment with no matching child.
#[derive(Debug, Snafu, PartialEq, Eq)]
#[snafu(display("directory '{}' not found", segment))]
pub struct NotFound {
    pub segment: String,
}
