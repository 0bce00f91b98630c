//! CLI argument definitions for the campus terminal client.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

use campus_model::{DiscussionFilter, DiscussionSort};

#[derive(Parser)]
#[command(
    name = "campus",
    version,
    about = "Campus discussions - browse and post from the terminal",
    long_about = "Browse and post to Campus course discussions.\n\n\
                  Reads the API base URL from CAMPUS_API_URL and, for posting,\n\
                  a bearer token from CAMPUS_API_TOKEN."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// List the discussions of a chapter.
    Discussions(DiscussionsArgs),

    /// Show one discussion with its loaded replies.
    Show(ShowArgs),

    /// Post a new discussion to a chapter.
    Post(PostArgs),

    /// Reply to a discussion, optionally under an existing reply.
    Reply(ReplyArgs),

    /// List the direct children of a reply.
    Children(ChildrenArgs),
}

#[derive(Parser)]
pub struct DiscussionsArgs {
    /// Course identifier.
    #[arg(value_name = "COURSE")]
    pub course: String,

    /// Chapter identifier.
    #[arg(value_name = "CHAPTER")]
    pub chapter: String,

    /// Which discussions to show.
    #[arg(long = "filter", value_enum, default_value = "all")]
    pub filter: FilterArg,

    /// List ordering.
    #[arg(long = "sort", value_enum, default_value = "recent")]
    pub sort: SortArg,
}

#[derive(Parser)]
pub struct ShowArgs {
    /// Course identifier.
    #[arg(value_name = "COURSE")]
    pub course: String,

    /// Chapter identifier.
    #[arg(value_name = "CHAPTER")]
    pub chapter: String,

    /// Discussion identifier.
    #[arg(value_name = "DISCUSSION")]
    pub discussion: String,
}

#[derive(Parser)]
pub struct PostArgs {
    /// Course identifier.
    #[arg(value_name = "COURSE")]
    pub course: String,

    /// Chapter identifier.
    #[arg(value_name = "CHAPTER")]
    pub chapter: String,

    /// Discussion title.
    #[arg(long = "title")]
    pub title: String,

    /// Discussion body text.
    #[arg(long = "content")]
    pub content: String,
}

#[derive(Parser)]
pub struct ReplyArgs {
    /// Discussion identifier.
    #[arg(value_name = "DISCUSSION")]
    pub discussion: String,

    /// Reply body text.
    #[arg(long = "content")]
    pub content: String,

    /// Parent reply for a nested reply; omit for a top-level reply.
    #[arg(long = "parent", value_name = "REPLY")]
    pub parent: Option<String>,
}

#[derive(Parser)]
pub struct ChildrenArgs {
    /// Reply identifier.
    #[arg(value_name = "REPLY")]
    pub reply: String,
}

/// CLI filter choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum FilterArg {
    All,
    Unanswered,
}

impl From<FilterArg> for DiscussionFilter {
    fn from(arg: FilterArg) -> Self {
        match arg {
            FilterArg::All => DiscussionFilter::All,
            FilterArg::Unanswered => DiscussionFilter::Unanswered,
        }
    }
}

/// CLI sort choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum SortArg {
    Recent,
    Oldest,
    Popular,
    Unanswered,
}

impl From<SortArg> for DiscussionSort {
    fn from(arg: SortArg) -> Self {
        match arg {
            SortArg::Recent => DiscussionSort::Recent,
            SortArg::Oldest => DiscussionSort::Oldest,
            SortArg::Popular => DiscussionSort::Popular,
            SortArg::Unanswered => DiscussionSort::Unanswered,
        }
    }
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
