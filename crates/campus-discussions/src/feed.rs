//! The read-through discussion feed.

use std::sync::Arc;

use campus_cache::{ChapterKey, DiscussionKey, QueryCache};
use campus_client::{DiscussionGateway, Result};
use campus_model::{Discussion, DiscussionReply, NewDiscussion, NewReply};

/// Discussion operations for one signed-in (or anonymous) session.
///
/// Reads answer from the cache when a fresh slot exists; mutations run
/// against the gateway and mark the affected slots stale afterwards, so
/// the next read refetches.
#[derive(Debug)]
pub struct DiscussionFeed<G> {
    gateway: G,
    cache: QueryCache,
}

impl<G: DiscussionGateway> DiscussionFeed<G> {
    pub fn new(gateway: G) -> Self {
        Self {
            gateway,
            cache: QueryCache::new(),
        }
    }

    /// The underlying cache, exposed for staleness inspection.
    pub fn cache(&self) -> &QueryCache {
        &self.cache
    }

    /// The discussions of a chapter, cached per (course, chapter).
    pub async fn discussions(
        &self,
        course_id: &str,
        chapter_id: &str,
    ) -> Result<Arc<Vec<Discussion>>> {
        let key = ChapterKey::new(course_id, chapter_id);
        self.cache
            .discussion_list(&key, || self.gateway.list_discussions(course_id, chapter_id))
            .await
    }

    /// One discussion, cached per (course, chapter, discussion).
    pub async fn discussion(
        &self,
        course_id: &str,
        chapter_id: &str,
        discussion_id: &str,
    ) -> Result<Arc<Discussion>> {
        let key = DiscussionKey::new(ChapterKey::new(course_id, chapter_id), discussion_id);
        self.cache
            .discussion(&key, || {
                self.gateway
                    .get_discussion(course_id, chapter_id, discussion_id)
            })
            .await
    }

    /// Create a discussion, then invalidate exactly that chapter's list.
    pub async fn create_discussion(
        &self,
        course_id: &str,
        chapter_id: &str,
        payload: &NewDiscussion,
    ) -> Result<Discussion> {
        let created = self
            .gateway
            .create_discussion(course_id, chapter_id, payload)
            .await?;

        let key = ChapterKey::new(course_id, chapter_id);
        self.cache.invalidate_discussion_list(&key);
        tracing::debug!("created discussion {} in {key}", created.id);

        Ok(created)
    }

    /// Create a reply, then invalidate every cached discussion list and,
    /// for nested replies, the parent's child list.
    pub async fn create_reply(&self, payload: &NewReply) -> Result<DiscussionReply> {
        let created = self.gateway.create_reply(payload).await?;

        self.cache.invalidate_all_discussion_lists();
        if let Some(parent_id) = created.parent_reply_id.as_deref() {
            self.cache.invalidate_reply_children(parent_id);
        }
        tracing::debug!(
            "created reply {} on discussion {}",
            created.id,
            created.discussion_id
        );

        Ok(created)
    }

    /// Direct children of a reply, fetched lazily.
    ///
    /// `enabled` carries the UI expansion state: a collapsed thread
    /// returns `Ok(None)` without any network I/O.
    pub async fn reply_children(
        &self,
        reply_id: &str,
        enabled: bool,
    ) -> Result<Option<Arc<Vec<DiscussionReply>>>> {
        if !enabled {
            return Ok(None);
        }
        self.cache
            .reply_children(reply_id, || self.gateway.reply_children(reply_id))
            .await
            .map(Some)
    }
}
