//! Command implementations for the campus CLI.

use anyhow::{Context, Result};
use tracing::debug;

use campus_client::{ApiConfig, HttpDiscussionApi};
use campus_discussions::DiscussionFeed;
use campus_model::{NewDiscussion, NewReply, shape_discussions};

use crate::cli::{ChildrenArgs, DiscussionsArgs, PostArgs, ReplyArgs, ShowArgs};
use crate::render::{discussions_table, print_discussion, replies_table};

fn build_feed() -> Result<DiscussionFeed<HttpDiscussionApi>> {
    let config = ApiConfig::from_env().context("read API configuration from environment")?;
    debug!("using API at {}", config.base_url);
    let api = HttpDiscussionApi::new(config).context("create API client")?;
    Ok(DiscussionFeed::new(api))
}

pub async fn run_discussions(args: &DiscussionsArgs) -> Result<()> {
    let feed = build_feed()?;
    let list = feed
        .discussions(&args.course, &args.chapter)
        .await
        .context("list discussions")?;

    let shaped = shape_discussions(list.as_slice(), args.filter.into(), args.sort.into());
    if shaped.is_empty() {
        println!("No discussions in this chapter.");
        return Ok(());
    }
    println!("{}", discussions_table(&shaped));
    Ok(())
}

pub async fn run_show(args: &ShowArgs) -> Result<()> {
    let feed = build_feed()?;
    let discussion = feed
        .discussion(&args.course, &args.chapter, &args.discussion)
        .await
        .context("fetch discussion")?;
    print_discussion(&discussion);
    Ok(())
}

pub async fn run_post(args: &PostArgs) -> Result<()> {
    let feed = build_feed()?;
    let created = feed
        .create_discussion(
            &args.course,
            &args.chapter,
            &NewDiscussion {
                title: args.title.clone(),
                content: args.content.clone(),
            },
        )
        .await
        .context("create discussion")?;
    println!("Posted discussion {} ({})", created.id, created.title);
    Ok(())
}

pub async fn run_reply(args: &ReplyArgs) -> Result<()> {
    let feed = build_feed()?;
    let created = feed
        .create_reply(&NewReply {
            discussion_id: args.discussion.clone(),
            content: args.content.clone(),
            parent_reply_id: args.parent.clone(),
        })
        .await
        .context("create reply")?;
    match created.parent_reply_id.as_deref() {
        Some(parent) => println!("Posted reply {} under {}", created.id, parent),
        None => println!(
            "Posted reply {} on discussion {}",
            created.id, created.discussion_id
        ),
    }
    Ok(())
}

pub async fn run_children(args: &ChildrenArgs) -> Result<()> {
    let feed = build_feed()?;
    let children = feed
        .reply_children(&args.reply, true)
        .await
        .context("fetch reply children")?
        .unwrap_or_default();

    if children.is_empty() {
        println!("No replies under {} yet.", args.reply);
        return Ok(());
    }
    println!("{}", replies_table(&children));
    Ok(())
}
