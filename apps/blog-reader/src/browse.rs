//! Interactive list/detail browser driven by line commands.

use std::io::Write;

use chrono::Utc;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, Lines};

use blog_core::BlogService;
use blog_core::domain::PostId;
use blog_core::form::{CreatePostDialog, FormField};
use blog_core::view::BlogController;

use crate::render::{field_prompt, render, render_dialog};

const HELP: &str = "\
Commands:
  select <id>   show a post           next | prev   move through the list
  new           open the create form  submit        retry the open form
  cancel        close the form        refresh       refetch the list
  list          redraw                quit          leave
";

/// One interactive session. Reads commands from `R`, writes frames to `W`.
pub struct Browser<'a, R, W> {
    service: &'a BlogService,
    controller: BlogController,
    dialog: CreatePostDialog,
    lines: Lines<R>,
    out: W,
}

impl<'a, R, W> Browser<'a, R, W>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    pub fn new(service: &'a BlogService, input: R, out: W) -> Self {
        Self {
            service,
            controller: BlogController::new(),
            dialog: CreatePostDialog::new(),
            lines: input.lines(),
            out,
        }
    }

    /// Run until `quit` or end of input; hands the writer back.
    pub async fn run(mut self) -> anyhow::Result<W> {
        self.reload().await?;

        loop {
            write!(self.out, "> ")?;
            self.out.flush()?;
            let Some(line) = self.lines.next_line().await? else {
                break;
            };
            let line = line.trim();
            let (command, arg) = line
                .split_once(char::is_whitespace)
                .map(|(command, arg)| (command, arg.trim()))
                .unwrap_or((line, ""));

            match command {
                "" => {}
                "q" | "quit" | "exit" => break,
                "h" | "help" => write!(self.out, "{HELP}")?,
                "l" | "list" => self.draw()?,
                "s" | "select" if arg.is_empty() => writeln!(self.out, "Usage: select <id>")?,
                "s" | "select" => {
                    self.controller.select(PostId::new(arg));
                    self.draw()?;
                }
                "n" | "next" => {
                    self.controller.select_next();
                    self.draw()?;
                }
                "p" | "prev" => {
                    self.controller.select_previous();
                    self.draw()?;
                }
                "r" | "refresh" => {
                    self.service.invalidate().await;
                    self.reload().await?;
                }
                "new" => {
                    if self.edit_form().await? {
                        self.submit().await?;
                    } else {
                        break;
                    }
                }
                "submit" if self.dialog.is_open() => self.submit().await?,
                "submit" => writeln!(self.out, "No form open. Type `new` to write a post.")?,
                "cancel" => {
                    self.dialog.cancel();
                    writeln!(self.out, "Form closed. Your input is kept for next time.")?;
                }
                other => writeln!(self.out, "Unknown command `{other}`. Type `help`.")?,
            }
        }

        Ok(self.out)
    }

    async fn reload(&mut self) -> anyhow::Result<()> {
        self.controller.begin_fetch();
        self.draw()?;
        let result = self.service.fetch_all().await;
        self.controller.finish_fetch(result);
        self.draw()
    }

    fn draw(&mut self) -> anyhow::Result<()> {
        write!(self.out, "{}", render(&self.controller.view()))?;
        Ok(())
    }

    /// Prompt for every field. Blank keeps the current value, `-` clears it.
    /// Returns `false` if input ended mid-form.
    async fn edit_form(&mut self) -> anyhow::Result<bool> {
        self.dialog.open();
        self.dialog.dismiss_notice();
        write!(self.out, "{}", render_dialog(&self.dialog))?;

        for field in FormField::ALL {
            write!(self.out, "{}", field_prompt(field, self.dialog.form().get(field)))?;
            self.out.flush()?;
            let Some(value) = self.lines.next_line().await? else {
                return Ok(false);
            };
            if value.trim() == "-" {
                self.dialog.form_mut().set(field, "");
            } else if !value.trim().is_empty() {
                self.dialog.form_mut().set(field, value);
            }
        }
        Ok(true)
    }

    async fn submit(&mut self) -> anyhow::Result<()> {
        let draft = match self.dialog.begin_submit(Utc::now()) {
            Ok(draft) => draft,
            Err(e) => {
                writeln!(self.out, "{e}. Type `new` to edit the form.")?;
                return Ok(());
            }
        };
        writeln!(self.out, "[{}]", self.dialog.submit_label())?;

        let result = self.service.create(&draft).await;
        match self.dialog.finish_submit(result) {
            Ok(post) => {
                writeln!(self.out, "Created \"{}\" (#{})", post.title, post.id)?;
                self.reload().await?;
            }
            Err(_) => {
                if let Some(notice) = self.dialog.notice() {
                    writeln!(self.out, "! {notice}")?;
                }
                writeln!(
                    self.out,
                    "Your input is kept: `submit` to retry, `new` to edit, `cancel` to close."
                )?;
            }
        }
        Ok(())
    }
}
