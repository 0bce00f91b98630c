//! Composition of the discussion client and query cache.
//!
//! [`DiscussionFeed`] is what a view layer talks to: reads go through the
//! cache, mutations go to the gateway and then invalidate the affected
//! cache slots, and child-reply fetches are gated by the caller's
//! expansion state so collapsed threads never hit the network.

pub mod feed;

pub use feed::DiscussionFeed;
