//! Note naming and template rendering.
//!
//! A note is a plain file `YYYY-MM-DD_<title>.md` in the notes directory.
//! Nothing about a note is kept in memory between operations; this module
//! only knows how to build the name and the initial contents.

use crate::error::{NoteError, Result};
use chrono::{DateTime, Local, NaiveDate};

/// File extension for notes, without the dot.
pub const NOTE_EXTENSION: &str = "md";

/// Characters that are replaced in titles before building a file name.
///
/// Path separators would escape the notes directory; the rest are reserved
/// on Windows filesystems.
const RESERVED: &[char] = &['/', '\\', ':', '*', '?', '"', '<', '>', '|'];

/// Sanitize a user-supplied title into something safe for a file name.
///
/// The title is trimmed, and path separators, reserved characters, and
/// control characters are each replaced with `-`. An empty result is
/// rejected.
pub fn sanitize_title(raw: &str) -> Result<String> {
    let cleaned: String = raw
        .trim()
        .chars()
        .map(|c| {
            if RESERVED.contains(&c) || c.is_control() {
                '-'
            } else {
                c
            }
        })
        .collect();

    if cleaned.is_empty() {
        return Err(NoteError::InvalidTitle(
            "title must not be empty".to_string(),
        ));
    }

    Ok(cleaned)
}

/// Build the file name for a note created on `date` with a sanitized title.
pub fn note_filename(date: NaiveDate, title: &str) -> String {
    format!("{}_{}.{}", date.format("%Y-%m-%d"), title, NOTE_EXTENSION)
}

/// File name for a note created today.
pub fn today_filename(title: &str) -> String {
    note_filename(Local::now().date_naive(), title)
}

/// Render the initial contents of a new note.
///
/// Three-line template: title heading, blank line, creation timestamp.
pub fn render_template(title: &str, created: DateTime<Local>) -> String {
    format!(
        "# {}\n\nCreated: {}\n",
        title,
        created.format("%Y-%m-%d %H:%M:%S")
    )
}

/// Render the template stamped with the current time.
pub fn render_template_now(title: &str) -> String {
    render_template(title, Local::now())
}
