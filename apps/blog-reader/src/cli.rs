//! Command-line arguments.

use clap::{Parser, Subcommand};

use blog_core::form::BlogForm;

#[derive(Debug, Parser)]
#[command(name = "blog-reader", version, about = "Read and write posts on a json-server blog")]
pub struct Args {
    /// Base URL of the blog store; overrides BLOG_API_URL
    #[arg(long, global = true)]
    pub base_url: Option<String>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Print the list of posts
    List,
    /// Print the list and one post's detail (the first post by default)
    Show {
        /// Post id to select
        id: Option<String>,
    },
    /// Create a post
    Create(CreateArgs),
    /// Interactive list/detail browser (default)
    Browse,
}

#[derive(Debug, clap::Args)]
pub struct CreateArgs {
    #[arg(long)]
    pub title: String,
    /// Comma-separated, e.g. "Tech, Finance"
    #[arg(long, default_value = "")]
    pub categories: String,
    #[arg(long)]
    pub description: String,
    /// HTML body
    #[arg(long)]
    pub content: String,
    #[arg(long, default_value = "")]
    pub cover_image: String,
    #[arg(long, default_value = "")]
    pub read_time: String,
}

impl CreateArgs {
    pub fn into_form(self) -> BlogForm {
        BlogForm {
            title: self.title,
            categories: self.categories,
            description: self.description,
            cover_image: self.cover_image,
            read_time: self.read_time,
            content: self.content,
        }
    }
}
