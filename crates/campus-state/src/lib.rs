//! UI state for the discussion feature - completely separated from
//! fetched data.
//!
//! Everything here is ephemeral view state: which threads are expanded,
//! which reply box is active, current filter/sort selections, and the
//! in-progress drafts. Mutations are synchronous and last-write-wins;
//! nothing is persisted.

pub mod store;

pub use store::{DiscussionUiState, NewDiscussionDraft, ReplyTarget};
