//! Filter and sort selections for discussion lists.
//!
//! Selections are UI-only: they shape what the client renders and never
//! touch stored data. Filter and sort are independent inputs.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use crate::discussion::Discussion;

/// Which discussions to show.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum DiscussionFilter {
    /// Every discussion in the chapter.
    #[default]
    All,
    /// Only discussions without any reply.
    Unanswered,
}

impl DiscussionFilter {
    pub fn as_str(&self) -> &'static str {
        match self {
            DiscussionFilter::All => "all",
            DiscussionFilter::Unanswered => "unanswered",
        }
    }

    /// Whether a discussion passes this filter.
    pub fn matches(&self, discussion: &Discussion) -> bool {
        match self {
            DiscussionFilter::All => true,
            DiscussionFilter::Unanswered => discussion.is_unanswered(),
        }
    }
}

impl fmt::Display for DiscussionFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for DiscussionFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "all" => Ok(DiscussionFilter::All),
            "unanswered" => Ok(DiscussionFilter::Unanswered),
            _ => Err(format!("Unknown discussion filter: {}", s)),
        }
    }
}

/// How a discussion list is ordered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum DiscussionSort {
    /// Newest first.
    #[default]
    Recent,
    /// Oldest first.
    Oldest,
    /// Most replies first, newest as tiebreaker.
    Popular,
    /// Unanswered discussions first, newest within each group.
    Unanswered,
}

impl DiscussionSort {
    pub fn as_str(&self) -> &'static str {
        match self {
            DiscussionSort::Recent => "recent",
            DiscussionSort::Oldest => "oldest",
            DiscussionSort::Popular => "popular",
            DiscussionSort::Unanswered => "unanswered",
        }
    }

    fn compare(&self, a: &Discussion, b: &Discussion) -> Ordering {
        match self {
            DiscussionSort::Recent => b.created_at.cmp(&a.created_at),
            DiscussionSort::Oldest => a.created_at.cmp(&b.created_at),
            DiscussionSort::Popular => b
                .reply_count()
                .cmp(&a.reply_count())
                .then_with(|| b.created_at.cmp(&a.created_at)),
            DiscussionSort::Unanswered => b
                .is_unanswered()
                .cmp(&a.is_unanswered())
                .then_with(|| b.created_at.cmp(&a.created_at)),
        }
    }
}

impl fmt::Display for DiscussionSort {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for DiscussionSort {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "recent" => Ok(DiscussionSort::Recent),
            "oldest" => Ok(DiscussionSort::Oldest),
            "popular" => Ok(DiscussionSort::Popular),
            "unanswered" => Ok(DiscussionSort::Unanswered),
            _ => Err(format!("Unknown discussion sort: {}", s)),
        }
    }
}

/// Apply filter and sort to a discussion list for rendering.
///
/// Returns references into the input; the stable sort keeps the input
/// order for ties.
pub fn shape_discussions(
    discussions: &[Discussion],
    filter: DiscussionFilter,
    sort: DiscussionSort,
) -> Vec<&Discussion> {
    let mut shaped: Vec<&Discussion> = discussions
        .iter()
        .filter(|discussion| filter.matches(discussion))
        .collect();
    shaped.sort_by(|a, b| sort.compare(a, b));
    shaped
}
