//! REST client for the Campus discussion API.
//!
//! Each operation performs a single network round trip and surfaces
//! transport or server errors unchanged to its caller; there is no retry
//! or backoff at this layer. Mutating operations and the reply-children
//! read attach credentials, discussion reads do not.

pub mod config;
pub mod error;
pub mod gateway;
pub mod http;

pub use config::ApiConfig;
pub use error::{ClientError, Result};
pub use gateway::DiscussionGateway;
pub use http::HttpDiscussionApi;
