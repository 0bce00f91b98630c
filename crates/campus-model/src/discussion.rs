use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Denormalized author summary embedded in discussions and replies.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserSummary {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
}

impl UserSummary {
    /// Display name as rendered next to a post ("First Last").
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// A top-level forum post attached to a course chapter.
///
/// Discussions are created via an authenticated POST and are immutable
/// afterwards; there is no edit or delete surface.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Discussion {
    pub id: String,
    pub title: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    /// Owning chapter.
    pub chapter_id: String,
    /// Authoring user summary.
    pub user: UserSummary,
    /// Total reply count, when the server includes it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reply_count: Option<u32>,
    /// Eagerly loaded replies, when the server includes them.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub replies: Option<Vec<DiscussionReply>>,
}

impl Discussion {
    /// Reply count with an absent count treated as zero.
    pub fn reply_count(&self) -> u32 {
        self.reply_count.unwrap_or(0)
    }

    /// True when no one has replied yet.
    pub fn is_unanswered(&self) -> bool {
        self.reply_count() == 0
    }
}

/// A threaded response to a discussion or to another reply.
///
/// Replies form a tree rooted at the discussion; `parent_reply_id` of
/// `None` marks a top-level reply. Every reply's `discussion_id` matches
/// the root discussion of its ancestor chain (guaranteed server-side, not
/// re-checked here).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiscussionReply {
    pub id: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub user: UserSummary,
    /// Root discussion this reply belongs to.
    pub discussion_id: String,
    /// Parent reply; `None` for top-level replies.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_reply_id: Option<String>,
    /// Direct-child count, when the server includes it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub child_count: Option<u32>,
    /// Eagerly loaded children, when the server includes them.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<DiscussionReply>>,
}

impl DiscussionReply {
    /// True for replies attached directly to the discussion.
    pub fn is_top_level(&self) -> bool {
        self.parent_reply_id.is_none()
    }

    /// Direct-child count with an absent count treated as zero.
    pub fn child_count(&self) -> u32 {
        self.child_count.unwrap_or(0)
    }
}

/// Payload for creating a discussion under a chapter.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewDiscussion {
    pub title: String,
    pub content: String,
}

/// Payload for creating a reply.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewReply {
    pub discussion_id: String,
    pub content: String,
    /// Parent reply for nested replies; omitted for top-level replies.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_reply_id: Option<String>,
}
