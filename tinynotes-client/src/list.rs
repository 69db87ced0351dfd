use time::OffsetDateTime;
use time::format_description::BorrowedFormatItem;
use time::macros::format_description;
use tinynotes::data::Note;
use tinynotes::util::StrExt;

/// How many characters of the first body line make it into a list row.
pub const TITLE_DISPLAY_LEN: usize = 45;

const UNTITLED: &str = "(untitled)";

const DATE_FORMAT: &[BorrowedFormatItem<'_>] =
    format_description!("[month padding:none]/[day padding:none]/[year]");

/// One list row: the derived title plus the day the note last changed.
pub fn summary_line(note: &Note) -> String {
    format!(
        "{:<width$}  {}",
        derived_title(&note.body),
        format_date(note.updated),
        width = TITLE_DISPLAY_LEN,
    )
}

/// The title is not stored anywhere; it is the first line of the body,
/// capped for display.
pub fn derived_title(body: &str) -> String {
    let first_line = body.lines().next().unwrap_or("");
    match first_line.nonblank_to_some() {
        None => UNTITLED.to_owned(),
        Some(_) => first_line.chars().take(TITLE_DISPLAY_LEN).collect(),
    }
}

fn format_date(updated: OffsetDateTime) -> String {
    updated.format(&DATE_FORMAT)
        .unwrap_or_else(|_| updated.to_string())
}
