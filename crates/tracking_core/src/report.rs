use crate::{format_timestamp, FormatError, TrackingResult};

/// One printable line for a tracked item, plus the date error if any.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportLine {
    pub text: String,
    pub format_error: Option<FormatError>,
}

/// Render the latest event of `item`.
///
/// Returns `None` when the item has no events. A malformed timestamp does not
/// suppress the line: the date field is left empty and the error is returned
/// alongside so the caller can log it.
pub fn describe(item: &TrackingResult) -> Option<ReportLine> {
    let event = item.latest_event()?;
    let (date, format_error) = match format_timestamp(&event.timestamp) {
        Ok(date) => (date, None),
        Err(err) => (String::new(), Some(err)),
    };
    let text = format!(
        "{}: {} {} {} {}",
        date, item.code, event.code, event.kind, event.description
    );
    Some(ReportLine { text, format_error })
}
