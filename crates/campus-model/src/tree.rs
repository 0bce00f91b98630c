//! Grouping of a flat reply list into a one-level-at-a-time tree view.

use std::collections::HashMap;

use crate::discussion::DiscussionReply;

/// Replies of one discussion grouped by parent.
///
/// Depth is unbounded in the data model; the view walks one level at a
/// time, so the tree only indexes direct children. Input order is kept
/// within each sibling group.
#[derive(Debug, Default)]
pub struct ReplyTree<'a> {
    top_level: Vec<&'a DiscussionReply>,
    children: HashMap<&'a str, Vec<&'a DiscussionReply>>,
}

impl<'a> ReplyTree<'a> {
    /// Group a flat reply list by `parent_reply_id`.
    pub fn build(replies: &'a [DiscussionReply]) -> Self {
        let mut tree = ReplyTree::default();
        for reply in replies {
            match reply.parent_reply_id.as_deref() {
                None => tree.top_level.push(reply),
                Some(parent) => tree.children.entry(parent).or_default().push(reply),
            }
        }
        tree
    }

    /// Replies attached directly to the discussion.
    pub fn top_level(&self) -> &[&'a DiscussionReply] {
        &self.top_level
    }

    /// Direct children of a reply; empty when none are loaded.
    pub fn children_of(&self, reply_id: &str) -> &[&'a DiscussionReply] {
        self.children
            .get(reply_id)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Total replies indexed in this tree.
    pub fn len(&self) -> usize {
        self.top_level.len() + self.children.values().map(Vec::len).sum::<usize>()
    }

    pub fn is_empty(&self) -> bool {
        self.top_level.is_empty() && self.children.is_empty()
    }
}
