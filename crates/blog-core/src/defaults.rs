//! Fixed values shared by the form, the query cache and the renderer.

/// Cache key of the full post collection.
pub const COLLECTION_KEY: &str = "blogs";

/// Cover image used when the form's cover image field is left blank.
pub const DEFAULT_COVER_IMAGE: &str =
    "https://images.unsplash.com/photo-1486312338219-ce68d2c6f44d";

/// Read-time label used when the form leaves it blank and when a stored
/// post carries none.
pub const DEFAULT_READ_TIME: &str = "5 Mins";
