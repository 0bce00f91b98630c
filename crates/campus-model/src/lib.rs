pub mod discussion;
pub mod selection;
pub mod tree;

pub use discussion::{Discussion, DiscussionReply, NewDiscussion, NewReply, UserSummary};
pub use selection::{DiscussionFilter, DiscussionSort, shape_discussions};
pub use tree::ReplyTree;
