use std::collections::BTreeSet;

use campus_model::{DiscussionFilter, DiscussionSort};

// ============================================================================
// Top-Level Discussion UI State
// ============================================================================

/// All discussion view state in one place.
#[derive(Debug, Default)]
pub struct DiscussionUiState {
    /// Discussions whose reply thread is expanded.
    expanded: BTreeSet<String>,
    /// The single active reply composer, if any.
    composer: Option<ReplyComposer>,
    /// Current list filter selection.
    pub filter: DiscussionFilter,
    /// Current list sort selection.
    pub sort: DiscussionSort,
    /// Draft for a new top-level discussion.
    pub new_discussion: NewDiscussionDraft,
}

impl DiscussionUiState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Toggle a thread's expansion; returns whether it is now expanded.
    /// Toggling twice restores the original membership.
    pub fn toggle_thread(&mut self, discussion_id: &str) -> bool {
        if self.expanded.remove(discussion_id) {
            false
        } else {
            self.expanded.insert(discussion_id.to_string());
            true
        }
    }

    /// Whether a thread is currently expanded.
    pub fn is_expanded(&self, discussion_id: &str) -> bool {
        self.expanded.contains(discussion_id)
    }

    /// Open the reply composer on a discussion, optionally under a parent
    /// reply. Replaces any previous target and clears the draft text.
    pub fn start_reply(&mut self, discussion_id: &str, parent_reply_id: Option<&str>) {
        self.composer = Some(ReplyComposer {
            target: ReplyTarget {
                discussion_id: discussion_id.to_string(),
                parent_reply_id: parent_reply_id.map(str::to_string),
            },
            draft: String::new(),
        });
    }

    /// Close the reply composer, dropping target and draft.
    pub fn cancel_reply(&mut self) {
        self.composer = None;
    }

    /// The active reply target, if a composer is open.
    pub fn active_reply_target(&self) -> Option<&ReplyTarget> {
        self.composer.as_ref().map(|c| &c.target)
    }

    /// Current reply draft text; empty when no composer is open.
    pub fn reply_draft(&self) -> &str {
        self.composer.as_ref().map(|c| c.draft.as_str()).unwrap_or("")
    }

    /// Update the reply draft. Ignored when no composer is open.
    pub fn set_reply_draft(&mut self, text: &str) {
        if let Some(composer) = self.composer.as_mut() {
            composer.draft = text.to_string();
        }
    }
}

// ============================================================================
// Reply Composer
// ============================================================================

/// Where a reply being composed will land.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReplyTarget {
    /// The discussion being replied to.
    pub discussion_id: String,
    /// Parent reply for nested replies; `None` for a top-level reply.
    pub parent_reply_id: Option<String>,
}

#[derive(Debug)]
struct ReplyComposer {
    target: ReplyTarget,
    draft: String,
}

// ============================================================================
// New Discussion Draft
// ============================================================================

/// Draft for a new top-level discussion. Title and content are settable
/// independently and reset as a unit.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewDiscussionDraft {
    pub title: String,
    pub content: String,
}

impl NewDiscussionDraft {
    pub fn set_title(&mut self, title: &str) {
        self.title = title.to_string();
    }

    pub fn set_content(&mut self, content: &str) {
        self.content = content.to_string();
    }

    /// Clear both fields.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn is_empty(&self) -> bool {
        self.title.is_empty() && self.content.is_empty()
    }
}
