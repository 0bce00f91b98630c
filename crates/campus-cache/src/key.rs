//! Cache key tuples.

use std::fmt;

/// Scope of a chapter's discussion list: (course, chapter).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ChapterKey {
    pub course_id: String,
    pub chapter_id: String,
}

impl ChapterKey {
    pub fn new(course_id: impl Into<String>, chapter_id: impl Into<String>) -> Self {
        Self {
            course_id: course_id.into(),
            chapter_id: chapter_id.into(),
        }
    }
}

impl fmt::Display for ChapterKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.course_id, self.chapter_id)
    }
}

/// Scope of a single discussion: (course, chapter, discussion).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DiscussionKey {
    pub chapter: ChapterKey,
    pub discussion_id: String,
}

impl DiscussionKey {
    pub fn new(chapter: ChapterKey, discussion_id: impl Into<String>) -> Self {
        Self {
            chapter,
            discussion_id: discussion_id.into(),
        }
    }
}

impl fmt::Display for DiscussionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.chapter, self.discussion_id)
    }
}
