//! Gateway abstraction over the five discussion operations.

use campus_model::{Discussion, DiscussionReply, NewDiscussion, NewReply};

use crate::error::Result;

/// The discussion API surface.
///
/// The composition layer and tests program against this trait; the
/// production implementation is [`crate::HttpDiscussionApi`].
#[allow(async_fn_in_trait)]
pub trait DiscussionGateway {
    /// List the discussions of a chapter.
    async fn list_discussions(
        &self,
        course_id: &str,
        chapter_id: &str,
    ) -> Result<Vec<Discussion>>;

    /// Fetch one discussion.
    async fn get_discussion(
        &self,
        course_id: &str,
        chapter_id: &str,
        discussion_id: &str,
    ) -> Result<Discussion>;

    /// Create a discussion under a chapter. Requires credentials.
    async fn create_discussion(
        &self,
        course_id: &str,
        chapter_id: &str,
        payload: &NewDiscussion,
    ) -> Result<Discussion>;

    /// Create a reply. Requires credentials.
    async fn create_reply(&self, payload: &NewReply) -> Result<DiscussionReply>;

    /// Fetch the direct children of a reply. Requires credentials.
    async fn reply_children(&self, reply_id: &str) -> Result<Vec<DiscussionReply>>;
}
