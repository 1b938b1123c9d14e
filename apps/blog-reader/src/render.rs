//! Plain-text rendering of the list/detail view.
//!
//! Every function here is pure: view state in, text out.

use std::fmt::Write;

use blog_core::domain::Post;
use blog_core::error::{BlogError, ErrorKind};
use blog_core::form::{CreatePostDialog, FormField};
use blog_core::view::{View, format_date};

const RULE: &str = "────────────────────────────────────────────────────────";
const DESCRIPTION_CLAMP: usize = 140;

pub fn render(view: &View<'_>) -> String {
    match view {
        View::Loading => "Loading Blog Data...\n".to_string(),
        View::Error(e) => render_error(e),
        View::Empty => "No blogs found.\n".to_string(),
        View::Loaded {
            posts,
            active,
            refreshing,
        } => {
            let mut out = render_list(posts, *active);
            if *refreshing {
                out.push_str("(refreshing...)\n");
            }
            out.push_str(RULE);
            out.push('\n');
            match active {
                Some(post) => out.push_str(&render_detail(post)),
                None => out.push_str("No blog found.\n"),
            }
            out
        }
    }
}

pub fn render_error(error: &BlogError) -> String {
    match error.kind() {
        ErrorKind::Network | ErrorKind::Server => {
            format!("Error: {error}. Is the JSON Server running?\n")
        }
        ErrorKind::Validation => format!("Error: {error}.\n"),
    }
}

/// Left pane: one card per post, the active one marked.
pub fn render_list(posts: &[Post], active: Option<&Post>) -> String {
    let mut out = String::from("Latest Articles\n\n");
    for post in posts {
        let marker = if active.is_some_and(|a| a.id == post.id) {
            '▶'
        } else {
            ' '
        };
        let badge = post.primary_category().unwrap_or("Uncategorized");
        let _ = writeln!(
            out,
            "{marker} [{}] {}  #{}",
            badge.to_uppercase(),
            format_date(&post.published_at),
            post.id
        );
        let _ = writeln!(out, "  {}", post.title);
        let _ = writeln!(out, "  {}", clamp(&post.description, DESCRIPTION_CLAMP));
        if let Some(secondary) = post.secondary_category() {
            let _ = writeln!(out, "  ({secondary})");
        }
        out.push('\n');
    }
    out
}

/// Right pane: cover, meta line, title, stats grid and body.
pub fn render_detail(post: &Post) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Cover: {}", post.cover_image);
    let _ = writeln!(
        out,
        "{} · {} read",
        post.categories.join(" & ").to_uppercase(),
        post.read_time_label()
    );
    let _ = writeln!(out, "\n{}\n", post.title);
    let _ = writeln!(
        out,
        "Category: {}  |  Read Time: {}  |  Date: {}\n",
        post.primary_category().unwrap_or("-"),
        post.read_time_label(),
        format_date(&post.published_at)
    );
    out.push_str(&strip_markup(&post.content));
    out.push('\n');
    out
}

/// Header of the create form, showing the submit control's current label.
pub fn render_dialog(dialog: &CreatePostDialog) -> String {
    let mut out = String::from("Create New Blog\nFill in the details below to post a new article.\n");
    if let Some(notice) = dialog.notice() {
        let _ = writeln!(out, "! {notice}");
    }
    let _ = writeln!(out, "[{}]", dialog.submit_label());
    out
}

/// Prompt for one form field, showing its current value or placeholder.
pub fn field_prompt(field: FormField, current: &str) -> String {
    let required = if field.is_required() { "*" } else { "" };
    let hint = if current.is_empty() {
        field.placeholder()
    } else {
        current
    };
    format!("{}{required} [{}]: ", field.label(), clamp(hint, 60))
}

/// Reduce HTML to readable text: tags removed, block ends become line
/// breaks, common entities decoded.
pub fn strip_markup(html: &str) -> String {
    let mut text = String::with_capacity(html.len());
    let mut tag = String::new();
    let mut in_tag = false;
    let mut quote: Option<char> = None;
    let mut chars = html.chars().peekable();

    while let Some(ch) = chars.next() {
        if !in_tag {
            // A `<` only opens a tag when a name, `/` or `!` follows it.
            let opens = ch == '<'
                && chars
                    .peek()
                    .is_some_and(|next| next.is_ascii_alphabetic() || matches!(next, '/' | '!'));
            if opens {
                in_tag = true;
                tag.clear();
            } else {
                text.push(ch);
            }
            continue;
        }
        match (quote, ch) {
            (Some(open), c) if c == open => {
                quote = None;
                tag.push(c);
            }
            (Some(_), c) => tag.push(c),
            (None, '"' | '\'') => {
                quote = Some(ch);
                tag.push(ch);
            }
            (None, '>') => {
                in_tag = false;
                if breaks_line(&tag) {
                    text.push('\n');
                }
            }
            (None, c) => tag.push(c),
        }
    }

    let decoded = text
        .replace("&nbsp;", " ")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&amp;", "&");

    let mut out = String::new();
    let mut blank_run = 0;
    for line in decoded.lines().map(str::trim) {
        if line.is_empty() {
            blank_run += 1;
            if blank_run > 1 || out.is_empty() {
                continue;
            }
        } else {
            blank_run = 0;
        }
        out.push_str(line);
        out.push('\n');
    }
    out.trim_end().to_string()
}

fn breaks_line(tag: &str) -> bool {
    let name = tag
        .trim_start_matches('/')
        .split(|c: char| c.is_whitespace() || c == '/')
        .next()
        .unwrap_or("")
        .to_ascii_lowercase();
    matches!(
        name.as_str(),
        "p" | "br" | "div" | "li" | "ul" | "ol" | "h1" | "h2" | "h3" | "h4" | "h5" | "h6"
            | "blockquote"
    )
}

fn clamp(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let cut: String = text.chars().take(max_chars.saturating_sub(1)).collect();
    format!("{}…", cut.trim_end())
}
