use std::collections::btree_map;

use crate::filesystem::DirectoryNode;

/// One visited directory of a listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListingEntry<'a> {
    pub depth: usize,
    pub name: &'a str,
}

impl ListingEntry<'_> {
    pub fn render(&self, indent: &str) -> String {
        format!("{}{}", indent.repeat(self.depth), self.name)
    }
}

/// Depth-first, pre-order walk over a tree, visiting siblings in name order.
///
/// Each call to [`crate::filesystem::Namespace::list`] starts a fresh walk of the live tree.
pub struct Listing<'a> {
    // One iterator per directory currently being walked; its index is the depth.
    stack: Vec<btree_map::Iter<'a, String, DirectoryNode>>,
}

impl<'a> Listing<'a> {
    pub fn new(root: &'a DirectoryNode) -> Self {
        Self {
            stack: vec![root.children()],
        }
    }
}

impl<'a> Iterator for Listing<'a> {
    type Item = ListingEntry<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let depth = self.stack.len().checked_sub(1)?;
            match self.stack.last_mut()?.next() {
                Some((name, node)) => {
                    self.stack.push(node.children());
                    return Some(ListingEntry { depth, name });
                }
                None => {
                    self.stack.pop();
                }
            }
        }
    }
}
