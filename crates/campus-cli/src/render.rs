//! Terminal rendering for discussions and replies.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{ContentArrangement, Table};

use campus_model::{Discussion, DiscussionReply, ReplyTree};

/// Longest content excerpt shown in list output.
const EXCERPT_LEN: usize = 60;

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
}

pub fn discussions_table(discussions: &[&Discussion]) -> Table {
    let mut table = Table::new();
    table.set_header(vec!["ID", "Title", "Author", "Replies", "Created"]);
    apply_table_style(&mut table);
    for discussion in discussions {
        table.add_row(vec![
            discussion.id.clone(),
            discussion.title.clone(),
            discussion.user.full_name(),
            discussion.reply_count().to_string(),
            discussion.created_at.format("%Y-%m-%d %H:%M").to_string(),
        ]);
    }
    table
}

pub fn replies_table(replies: &[DiscussionReply]) -> Table {
    let mut table = Table::new();
    table.set_header(vec!["ID", "Author", "Content", "Posted"]);
    apply_table_style(&mut table);
    for reply in replies {
        table.add_row(vec![
            reply.id.clone(),
            reply.user.full_name(),
            excerpt(&reply.content),
            reply.created_at.format("%Y-%m-%d %H:%M").to_string(),
        ]);
    }
    table
}

/// Print one discussion and whatever replies were loaded with it.
pub fn print_discussion(discussion: &Discussion) {
    println!("{}", discussion.title);
    println!(
        "by {} on {}",
        discussion.user.full_name(),
        discussion.created_at.format("%Y-%m-%d %H:%M")
    );
    println!();
    println!("{}", discussion.content);

    let Some(replies) = &discussion.replies else {
        return;
    };
    if replies.is_empty() {
        return;
    }

    println!();
    println!("Replies:");
    let tree = ReplyTree::build(replies);
    for reply in tree.top_level() {
        print_reply(reply, 1);
        for child in tree.children_of(&reply.id) {
            print_reply(child, 2);
        }
    }
}

fn print_reply(reply: &DiscussionReply, depth: usize) {
    let indent = "  ".repeat(depth);
    println!(
        "{indent}[{}] {}: {}",
        reply.id,
        reply.user.full_name(),
        excerpt(&reply.content)
    );
}

fn excerpt(text: &str) -> String {
    let flat = text.replace('\n', " ");
    let mut chars = flat.chars();
    let head: String = chars.by_ref().take(EXCERPT_LEN).collect();
    if chars.next().is_some() {
        format!("{head}…")
    } else {
        head
    }
}
