//! Read-through and invalidation behavior of the query cache.

use std::sync::atomic::{AtomicUsize, Ordering};

use chrono::{TimeZone, Utc};

use campus_cache::{ChapterKey, DiscussionKey, QueryCache};
use campus_model::{Discussion, DiscussionReply, UserSummary};

fn author() -> UserSummary {
    UserSummary {
        id: "u1".to_string(),
        first_name: "Ada".to_string(),
        last_name: "Lovelace".to_string(),
        avatar_url: None,
    }
}

fn discussion(id: &str) -> Discussion {
    let at = Utc.with_ymd_and_hms(2024, 5, 1, 9, 0, 0).unwrap();
    Discussion {
        id: id.to_string(),
        title: format!("Topic {}", id),
        content: String::new(),
        created_at: at,
        updated_at: at,
        chapter_id: "ch1".to_string(),
        user: author(),
        reply_count: None,
        replies: None,
    }
}

fn reply(id: &str, parent: Option<&str>) -> DiscussionReply {
    let at = Utc.with_ymd_and_hms(2024, 5, 1, 10, 0, 0).unwrap();
    DiscussionReply {
        id: id.to_string(),
        content: format!("reply {}", id),
        created_at: at,
        updated_at: at,
        user: author(),
        discussion_id: "d1".to_string(),
        parent_reply_id: parent.map(str::to_string),
        child_count: None,
        children: None,
    }
}

async fn read_list(cache: &QueryCache, key: &ChapterKey, fetches: &AtomicUsize) -> Vec<String> {
    let list = cache
        .discussion_list(key, || async {
            fetches.fetch_add(1, Ordering::SeqCst);
            Ok::<_, String>(vec![discussion("d1"), discussion("d2")])
        })
        .await
        .expect("list fetch");
    list.iter().map(|d| d.id.clone()).collect()
}

#[tokio::test]
async fn serves_cached_list_without_refetching() {
    let cache = QueryCache::new();
    let key = ChapterKey::new("c1", "ch1");
    let fetches = AtomicUsize::new(0);

    assert_eq!(read_list(&cache, &key, &fetches).await, vec!["d1", "d2"]);
    assert_eq!(read_list(&cache, &key, &fetches).await, vec!["d1", "d2"]);
    assert_eq!(fetches.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn stale_list_refetches_on_next_read() {
    let cache = QueryCache::new();
    let key = ChapterKey::new("c1", "ch1");
    let fetches = AtomicUsize::new(0);

    read_list(&cache, &key, &fetches).await;
    cache.invalidate_discussion_list(&key);
    assert_eq!(cache.discussion_list_is_stale(&key), Some(true));

    read_list(&cache, &key, &fetches).await;
    assert_eq!(fetches.load(Ordering::SeqCst), 2);
    assert_eq!(cache.discussion_list_is_stale(&key), Some(false));
}

#[tokio::test]
async fn invalidation_is_scoped_to_the_exact_chapter() {
    let cache = QueryCache::new();
    let target = ChapterKey::new("c1", "ch1");
    let sibling = ChapterKey::new("c1", "ch2");
    let other_course = ChapterKey::new("c2", "ch1");
    let fetches = AtomicUsize::new(0);

    read_list(&cache, &target, &fetches).await;
    read_list(&cache, &sibling, &fetches).await;
    read_list(&cache, &other_course, &fetches).await;
    assert_eq!(fetches.load(Ordering::SeqCst), 3);

    cache.invalidate_discussion_list(&target);

    read_list(&cache, &target, &fetches).await;
    read_list(&cache, &sibling, &fetches).await;
    read_list(&cache, &other_course, &fetches).await;
    // Only the invalidated chapter refetched.
    assert_eq!(fetches.load(Ordering::SeqCst), 4);
}

#[tokio::test]
async fn invalidate_all_marks_every_cached_list() {
    let cache = QueryCache::new();
    let a = ChapterKey::new("c1", "ch1");
    let b = ChapterKey::new("c2", "ch7");
    let fetches = AtomicUsize::new(0);

    read_list(&cache, &a, &fetches).await;
    read_list(&cache, &b, &fetches).await;

    cache.invalidate_all_discussion_lists();
    assert_eq!(cache.discussion_list_is_stale(&a), Some(true));
    assert_eq!(cache.discussion_list_is_stale(&b), Some(true));

    read_list(&cache, &a, &fetches).await;
    read_list(&cache, &b, &fetches).await;
    assert_eq!(fetches.load(Ordering::SeqCst), 4);
}

#[tokio::test]
async fn failed_refetch_keeps_the_slot_stale() {
    let cache = QueryCache::new();
    let key = ChapterKey::new("c1", "ch1");
    let fetches = AtomicUsize::new(0);

    read_list(&cache, &key, &fetches).await;
    cache.invalidate_discussion_list(&key);

    let result = cache
        .discussion_list(&key, || async { Err::<Vec<Discussion>, _>("offline".to_string()) })
        .await;
    assert_eq!(result.unwrap_err(), "offline");
    assert_eq!(cache.discussion_list_is_stale(&key), Some(true));

    // A later successful read replaces the slot.
    read_list(&cache, &key, &fetches).await;
    assert_eq!(cache.discussion_list_is_stale(&key), Some(false));
}

#[tokio::test]
async fn reply_children_cache_round_trip() {
    let cache = QueryCache::new();
    let fetches = AtomicUsize::new(0);

    let children = cache
        .reply_children("r1", || async {
            fetches.fetch_add(1, Ordering::SeqCst);
            Ok::<_, String>(vec![reply("r2", Some("r1")), reply("r3", Some("r1"))])
        })
        .await
        .expect("children fetch");
    assert_eq!(children.len(), 2);

    cache
        .reply_children("r1", || async {
            fetches.fetch_add(1, Ordering::SeqCst);
            Ok::<_, String>(vec![])
        })
        .await
        .expect("cached children");
    assert_eq!(fetches.load(Ordering::SeqCst), 1);

    cache.invalidate_reply_children("r1");
    assert_eq!(cache.reply_children_is_stale("r1"), Some(true));
}

#[tokio::test]
async fn single_discussion_slot_invalidates_independently() {
    let cache = QueryCache::new();
    let key = DiscussionKey::new(ChapterKey::new("c1", "ch1"), "d1");
    let fetches = AtomicUsize::new(0);

    for _ in 0..2 {
        cache
            .discussion(&key, || async {
                fetches.fetch_add(1, Ordering::SeqCst);
                Ok::<_, String>(discussion("d1"))
            })
            .await
            .expect("discussion fetch");
    }
    assert_eq!(fetches.load(Ordering::SeqCst), 1);

    cache.invalidate_discussion(&key);
    cache
        .discussion(&key, || async {
            fetches.fetch_add(1, Ordering::SeqCst);
            Ok::<_, String>(discussion("d1"))
        })
        .await
        .expect("refetched discussion");
    assert_eq!(fetches.load(Ordering::SeqCst), 2);
}

#[tokio::test]
async fn clear_drops_all_slots() {
    let cache = QueryCache::new();
    let key = ChapterKey::new("c1", "ch1");
    let fetches = AtomicUsize::new(0);

    read_list(&cache, &key, &fetches).await;
    cache.clear();
    assert_eq!(cache.discussion_list_is_stale(&key), None);

    read_list(&cache, &key, &fetches).await;
    assert_eq!(fetches.load(Ordering::SeqCst), 2);
}
