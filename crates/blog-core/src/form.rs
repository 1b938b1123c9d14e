//! Create-post form: raw input, normalization and submit lifecycle.

use chrono::{DateTime, Utc};
use thiserror::Error;

use crate::defaults::{DEFAULT_COVER_IMAGE, DEFAULT_READ_TIME};
use crate::domain::{Post, PostDraft};
use crate::error::BlogError;
use crate::service::BlogService;

/// Input fields of the form, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Title,
    Categories,
    ReadTime,
    Description,
    CoverImage,
    Content,
}

impl FormField {
    pub const ALL: [FormField; 6] = [
        FormField::Title,
        FormField::Categories,
        FormField::ReadTime,
        FormField::Description,
        FormField::CoverImage,
        FormField::Content,
    ];

    pub fn label(self) -> &'static str {
        match self {
            FormField::Title => "Title",
            FormField::Categories => "Categories (comma separated)",
            FormField::ReadTime => "Read Time",
            FormField::Description => "Short Description",
            FormField::CoverImage => "Cover Image URL",
            FormField::Content => "Full Content (HTML allowed)",
        }
    }

    pub fn placeholder(self) -> &'static str {
        match self {
            FormField::Title => "e.g. The Future of AI",
            FormField::Categories => "Tech, Finance",
            FormField::ReadTime => DEFAULT_READ_TIME,
            FormField::Description => "Summary of the post...",
            FormField::CoverImage => "https://...",
            FormField::Content => "<p>Write your article content here...</p>",
        }
    }

    pub fn is_required(self) -> bool {
        matches!(
            self,
            FormField::Title | FormField::Description | FormField::Content
        )
    }
}

/// Form submission errors.
#[derive(Debug, Error, PartialEq)]
pub enum FormError {
    #[error("Missing required fields: {}", .0.join(", "))]
    MissingFields(Vec<&'static str>),

    #[error("At least one category is required")]
    NoCategories,

    #[error("A submission is already in progress")]
    Busy,

    #[error(transparent)]
    Store(#[from] BlogError),
}

/// Raw, unnormalized form input.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BlogForm {
    pub title: String,
    /// Comma-separated category labels.
    pub categories: String,
    pub description: String,
    pub cover_image: String,
    pub read_time: String,
    pub content: String,
}

impl BlogForm {
    pub fn get(&self, field: FormField) -> &str {
        match field {
            FormField::Title => &self.title,
            FormField::Categories => &self.categories,
            FormField::ReadTime => &self.read_time,
            FormField::Description => &self.description,
            FormField::CoverImage => &self.cover_image,
            FormField::Content => &self.content,
        }
    }

    pub fn set(&mut self, field: FormField, value: impl Into<String>) {
        let slot = match field {
            FormField::Title => &mut self.title,
            FormField::Categories => &mut self.categories,
            FormField::ReadTime => &mut self.read_time,
            FormField::Description => &mut self.description,
            FormField::CoverImage => &mut self.cover_image,
            FormField::Content => &mut self.content,
        };
        *slot = value.into();
    }

    /// Labels of required fields that are still blank.
    pub fn missing_required(&self) -> Vec<&'static str> {
        FormField::ALL
            .into_iter()
            .filter(|field| field.is_required() && self.get(*field).trim().is_empty())
            .map(FormField::label)
            .collect()
    }

    /// Validate and normalize into a draft stamped with `now`.
    pub fn to_draft(&self, now: DateTime<Utc>) -> Result<PostDraft, FormError> {
        let missing = self.missing_required();
        if !missing.is_empty() {
            return Err(FormError::MissingFields(missing));
        }

        let categories = normalize_categories(&self.categories);
        if categories.is_empty() {
            return Err(FormError::NoCategories);
        }

        Ok(PostDraft {
            title: self.title.clone(),
            categories,
            description: self.description.clone(),
            published_at: now,
            cover_image: or_default(&self.cover_image, DEFAULT_COVER_IMAGE),
            content: self.content.clone(),
            read_time: or_default(&self.read_time, DEFAULT_READ_TIME),
        })
    }
}

/// Split on commas, trim each label and drop the empty ones.
pub fn normalize_categories(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|label| !label.is_empty())
        .map(str::to_string)
        .collect()
}

/// Blank (or whitespace-only) input takes the default; anything else is
/// sent exactly as typed.
fn or_default(value: &str, default: &str) -> String {
    if value.trim().is_empty() {
        default.to_string()
    } else {
        value.to_string()
    }
}

/// The create-post dialog: open/closed, field values and the in-flight flag.
#[derive(Debug, Default)]
pub struct CreatePostDialog {
    open: bool,
    form: BlogForm,
    pending: bool,
    notice: Option<String>,
}

impl CreatePostDialog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn open(&mut self) {
        self.open = true;
    }

    /// Close without submitting. Field values are kept for the next open.
    pub fn cancel(&mut self) {
        self.open = false;
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn is_pending(&self) -> bool {
        self.pending
    }

    pub fn form(&self) -> &BlogForm {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut BlogForm {
        &mut self.form
    }

    /// Error notification from the last failed submission.
    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    pub fn dismiss_notice(&mut self) {
        self.notice = None;
    }

    pub fn submit_label(&self) -> &'static str {
        if self.pending {
            "Creating..."
        } else {
            "Create Blog"
        }
    }

    /// Validate the form and mark a submission in flight.
    ///
    /// Rejected with [`FormError::Busy`] while a previous submission has not
    /// finished.
    pub fn begin_submit(&mut self, now: DateTime<Utc>) -> Result<PostDraft, FormError> {
        if self.pending {
            return Err(FormError::Busy);
        }
        let draft = self.form.to_draft(now)?;
        self.pending = true;
        self.notice = None;
        Ok(draft)
    }

    /// Apply the store's answer. Success resets and closes the dialog;
    /// failure keeps every field and raises a notice.
    pub fn finish_submit(&mut self, result: Result<Post, BlogError>) -> Result<Post, FormError> {
        self.pending = false;
        match result {
            Ok(post) => {
                self.form = BlogForm::default();
                self.open = false;
                Ok(post)
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to create blog");
                self.notice = Some(format!("Failed to create blog: {e}"));
                Err(FormError::Store(e))
            }
        }
    }

    /// Validate, create through the service and apply the outcome.
    ///
    /// Dropping the returned future before it completes clears the in-flight
    /// flag, so the dialog accepts the next submission. The store may still
    /// have created the post.
    pub async fn submit(&mut self, service: &BlogService) -> Result<Post, FormError> {
        let draft = self.begin_submit(Utc::now())?;
        let pending = PendingSubmit { dialog: self };
        let result = service.create(&draft).await;
        pending.finish(result)
    }
}

/// Clears `pending` if a submission is abandoned mid-flight.
struct PendingSubmit<'a> {
    dialog: &'a mut CreatePostDialog,
}

impl PendingSubmit<'_> {
    fn finish(mut self, result: Result<Post, BlogError>) -> Result<Post, FormError> {
        self.dialog.finish_submit(result)
    }
}

impl Drop for PendingSubmit<'_> {
    fn drop(&mut self) {
        if self.dialog.pending {
            tracing::warn!("Blog submission abandoned before the store answered");
            self.dialog.pending = false;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::PostId;

    fn filled() -> BlogForm {
        BlogForm {
            title: "Budget 2026".into(),
            categories: "Tax, Finance".into(),
            description: "What changed".into(),
            content: "<p>Slabs</p>".into(),
            ..Default::default()
        }
    }

    #[test]
    fn test_normalize_categories_trims_and_drops_empties() {
        assert_eq!(normalize_categories("Tech, Finance,  "), vec!["Tech", "Finance"]);
        assert_eq!(normalize_categories(" , ,"), Vec::<String>::new());
        assert_eq!(normalize_categories("Audit"), vec!["Audit"]);
    }

    #[test]
    fn test_blank_optionals_take_defaults() {
        let draft = filled().to_draft(Utc::now()).unwrap();
        assert_eq!(draft.cover_image, DEFAULT_COVER_IMAGE);
        assert_eq!(draft.read_time, DEFAULT_READ_TIME);
    }

    #[test]
    fn test_provided_optionals_override_defaults() {
        let mut form = filled();
        form.cover_image = "https://img.example/x.jpg".into();
        form.read_time = "12 Mins".into();
        let draft = form.to_draft(Utc::now()).unwrap();
        assert_eq!(draft.cover_image, "https://img.example/x.jpg");
        assert_eq!(draft.read_time, "12 Mins");
    }

    #[test]
    fn test_provided_optionals_are_sent_verbatim() {
        let mut form = filled();
        form.cover_image = " https://img.example/x.jpg ".into();
        form.read_time = "12 Mins ".into();
        let draft = form.to_draft(Utc::now()).unwrap();
        assert_eq!(draft.cover_image, " https://img.example/x.jpg ");
        assert_eq!(draft.read_time, "12 Mins ");

        form.read_time = "   ".into();
        assert_eq!(form.to_draft(Utc::now()).unwrap().read_time, DEFAULT_READ_TIME);
    }

    #[test]
    fn test_draft_is_stamped_with_submit_time() {
        let now: DateTime<Utc> = "2026-03-01T10:15:00.123Z".parse().unwrap();
        assert_eq!(filled().to_draft(now).unwrap().published_at, now);
    }

    #[test]
    fn test_required_fields_block_submission() {
        let form = BlogForm {
            categories: "Tech".into(),
            description: "   ".into(),
            ..Default::default()
        };
        assert_eq!(
            form.to_draft(Utc::now()),
            Err(FormError::MissingFields(vec![
                "Title",
                "Short Description",
                "Full Content (HTML allowed)"
            ]))
        );
    }

    #[test]
    fn test_blank_categories_are_rejected() {
        let mut form = filled();
        form.categories = " ,  ".into();
        assert_eq!(form.to_draft(Utc::now()), Err(FormError::NoCategories));
    }

    #[test]
    fn test_second_submit_while_pending_is_busy() {
        let mut dialog = CreatePostDialog::new();
        dialog.open();
        *dialog.form_mut() = filled();

        dialog.begin_submit(Utc::now()).unwrap();
        assert!(dialog.is_pending());
        assert_eq!(dialog.submit_label(), "Creating...");
        assert_eq!(dialog.begin_submit(Utc::now()), Err(FormError::Busy));
    }

    #[test]
    fn test_success_resets_and_closes() {
        let mut dialog = CreatePostDialog::new();
        dialog.open();
        *dialog.form_mut() = filled();

        let draft = dialog.begin_submit(Utc::now()).unwrap();
        let post = dialog
            .finish_submit(Ok(draft.into_post(PostId::from(10))))
            .unwrap();

        assert_eq!(post.id, PostId::from(10));
        assert!(!dialog.is_open());
        assert!(!dialog.is_pending());
        assert_eq!(dialog.form(), &BlogForm::default());
        assert_eq!(dialog.submit_label(), "Create Blog");
    }

    #[test]
    fn test_failure_keeps_fields_and_stays_open() {
        let mut dialog = CreatePostDialog::new();
        dialog.open();
        *dialog.form_mut() = filled();

        dialog.begin_submit(Utc::now()).unwrap();
        let err = dialog
            .finish_submit(Err(BlogError::Network("connection refused".into())))
            .unwrap_err();

        assert!(matches!(err, FormError::Store(BlogError::Network(_))));
        assert!(dialog.is_open());
        assert!(!dialog.is_pending());
        assert_eq!(dialog.form(), &filled());
        assert!(dialog.notice().unwrap().contains("connection refused"));
    }

    #[test]
    fn test_cancel_keeps_values() {
        let mut dialog = CreatePostDialog::new();
        dialog.open();
        dialog.form_mut().set(FormField::Title, "Draft title");
        dialog.cancel();
        assert!(!dialog.is_open());
        assert_eq!(dialog.form().get(FormField::Title), "Draft title");
    }
}
