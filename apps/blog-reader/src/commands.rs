//! One-shot subcommands: list, show and create.

use std::io::Write;

use blog_core::BlogService;
use blog_core::domain::PostId;
use blog_core::form::{BlogForm, CreatePostDialog, FormError};
use blog_core::view::{BlogController, View};

use crate::render::{render, render_list};

/// Print the list pane. Returns `false` when the fetch failed.
pub async fn list<W: Write>(service: &BlogService, out: &mut W) -> anyhow::Result<bool> {
    let mut controller = BlogController::new();
    controller.load(service).await;

    match controller.view() {
        View::Loaded { posts, active, .. } => write!(out, "{}", render_list(posts, active))?,
        view => write!(out, "{}", render(&view))?,
    }
    Ok(!matches!(controller.view(), View::Error(_)))
}

/// Print list and detail, with `id` selected when given.
pub async fn show<W: Write>(
    service: &BlogService,
    id: Option<String>,
    out: &mut W,
) -> anyhow::Result<bool> {
    let mut controller = BlogController::new();
    controller.load(service).await;
    if let Some(id) = id {
        controller.select(PostId::new(id));
    }

    write!(out, "{}", render(&controller.view()))?;
    Ok(!matches!(controller.view(), View::Error(_)))
}

/// Submit one post. Returns `false` when validation or the store rejected it.
pub async fn create<W: Write>(
    service: &BlogService,
    form: BlogForm,
    out: &mut W,
) -> anyhow::Result<bool> {
    let mut dialog = CreatePostDialog::new();
    dialog.open();
    *dialog.form_mut() = form;

    match dialog.submit(service).await {
        Ok(post) => {
            writeln!(out, "Created \"{}\" (#{})", post.title, post.id)?;
            Ok(true)
        }
        Err(FormError::Store(e)) => {
            let notice = dialog.notice().map(str::to_string);
            writeln!(out, "{}", notice.unwrap_or_else(|| e.to_string()))?;
            Ok(false)
        }
        Err(e) => {
            writeln!(out, "{e}")?;
            Ok(false)
        }
    }
}
