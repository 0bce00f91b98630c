//! Read-through slot maps with stale marking.

use std::collections::HashMap;
use std::hash::Hash;
use std::sync::{Arc, Mutex};

use campus_model::{Discussion, DiscussionReply};

use crate::key::{ChapterKey, DiscussionKey};

/// One cached value. A stale slot keeps its value but no longer answers
/// reads; the next read refetches and replaces it.
#[derive(Debug)]
struct Slot<V> {
    value: Arc<V>,
    stale: bool,
}

/// Query cache for the three discussion resource kinds.
///
/// Overlapping fetches for one key are last-write-wins; the surrounding
/// single-threaded event loop serializes reads, so no coalescing happens
/// here. Locks are never held across an await.
#[derive(Debug, Default)]
pub struct QueryCache {
    discussion_lists: Mutex<HashMap<ChapterKey, Slot<Vec<Discussion>>>>,
    discussions: Mutex<HashMap<DiscussionKey, Slot<Discussion>>>,
    reply_children: Mutex<HashMap<String, Slot<Vec<DiscussionReply>>>>,
}

impl QueryCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Read-through fetch of a chapter's discussion list.
    pub async fn discussion_list<F, Fut, E>(
        &self,
        key: &ChapterKey,
        fetch: F,
    ) -> Result<Arc<Vec<Discussion>>, E>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<Vec<Discussion>, E>>,
    {
        read_through(&self.discussion_lists, key, fetch).await
    }

    /// Read-through fetch of a single discussion.
    pub async fn discussion<F, Fut, E>(
        &self,
        key: &DiscussionKey,
        fetch: F,
    ) -> Result<Arc<Discussion>, E>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<Discussion, E>>,
    {
        read_through(&self.discussions, key, fetch).await
    }

    /// Read-through fetch of a reply's direct children.
    pub async fn reply_children<F, Fut, E>(
        &self,
        reply_id: &str,
        fetch: F,
    ) -> Result<Arc<Vec<DiscussionReply>>, E>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<Vec<DiscussionReply>, E>>,
    {
        read_through_str(&self.reply_children, reply_id, fetch).await
    }

    /// Mark one chapter's discussion list stale.
    pub fn invalidate_discussion_list(&self, key: &ChapterKey) {
        let mut lists = self.discussion_lists.lock().unwrap();
        if let Some(slot) = lists.get_mut(key) {
            slot.stale = true;
            tracing::debug!("invalidated discussion list {key}");
        }
    }

    /// Mark every cached discussion list stale.
    pub fn invalidate_all_discussion_lists(&self) {
        let mut lists = self.discussion_lists.lock().unwrap();
        for (key, slot) in lists.iter_mut() {
            slot.stale = true;
            tracing::debug!("invalidated discussion list {key}");
        }
    }

    /// Mark one cached discussion stale.
    pub fn invalidate_discussion(&self, key: &DiscussionKey) {
        let mut discussions = self.discussions.lock().unwrap();
        if let Some(slot) = discussions.get_mut(key) {
            slot.stale = true;
            tracing::debug!("invalidated discussion {key}");
        }
    }

    /// Mark one reply's cached child list stale.
    pub fn invalidate_reply_children(&self, reply_id: &str) {
        let mut children = self.reply_children.lock().unwrap();
        if let Some(slot) = children.get_mut(reply_id) {
            slot.stale = true;
            tracing::debug!("invalidated reply children {reply_id}");
        }
    }

    /// Drop every cached value (e.g. on sign-out).
    pub fn clear(&self) {
        self.discussion_lists.lock().unwrap().clear();
        self.discussions.lock().unwrap().clear();
        self.reply_children.lock().unwrap().clear();
    }

    /// Staleness of a cached discussion list; `None` when nothing is
    /// cached under the key.
    pub fn discussion_list_is_stale(&self, key: &ChapterKey) -> Option<bool> {
        self.discussion_lists
            .lock()
            .unwrap()
            .get(key)
            .map(|slot| slot.stale)
    }

    /// Staleness of a cached child list; `None` when nothing is cached.
    pub fn reply_children_is_stale(&self, reply_id: &str) -> Option<bool> {
        self.reply_children
            .lock()
            .unwrap()
            .get(reply_id)
            .map(|slot| slot.stale)
    }
}

/// Shared read-through: answer from a fresh slot, otherwise fetch and
/// replace. A failed fetch leaves the previous slot untouched.
async fn read_through<K, V, F, Fut, E>(
    map: &Mutex<HashMap<K, Slot<V>>>,
    key: &K,
    fetch: F,
) -> Result<Arc<V>, E>
where
    K: Eq + Hash + Clone,
    F: FnOnce() -> Fut,
    Fut: Future<Output = Result<V, E>>,
{
    {
        let slots = map.lock().unwrap();
        if let Some(slot) = slots.get(key) {
            if !slot.stale {
                return Ok(Arc::clone(&slot.value));
            }
        }
    }

    let value = Arc::new(fetch().await?);
    map.lock().unwrap().insert(
        key.clone(),
        Slot {
            value: Arc::clone(&value),
            stale: false,
        },
    );
    Ok(value)
}

/// Read-through for string-keyed maps without cloning the key on a hit.
async fn read_through_str<V, F, Fut, E>(
    map: &Mutex<HashMap<String, Slot<V>>>,
    key: &str,
    fetch: F,
) -> Result<Arc<V>, E>
where
    F: FnOnce() -> Fut,
    Fut: Future<Output = Result<V, E>>,
{
    {
        let slots = map.lock().unwrap();
        if let Some(slot) = slots.get(key) {
            if !slot.stale {
                return Ok(Arc::clone(&slot.value));
            }
        }
    }

    let value = Arc::new(fetch().await?);
    map.lock().unwrap().insert(
        key.to_string(),
        Slot {
            value: Arc::clone(&value),
            stale: false,
        },
    );
    Ok(value)
}
