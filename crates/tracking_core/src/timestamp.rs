use chrono::NaiveDateTime;
use thiserror::Error;

/// Local date-time layout used by the tracking API (no timezone).
pub const API_LAYOUT: &str = "%Y-%m-%dT%H:%M:%S%.f";
/// Display layout: day/month/year hour:minute:second.
pub const DISPLAY_LAYOUT: &str = "%d/%m/%Y %H:%M:%S";

/// Fixed-width shape of an API timestamp; `d` stands for an ASCII digit.
const API_SHAPE: &[u8] = b"dddd-dd-ddTdd:dd:dd";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    #[error("timestamp {input:?} does not match YYYY-MM-DDTHH:MM:SS")]
    Layout { input: String },
    #[error("cannot format timestamp {input:?}: {source}")]
    Parse {
        input: String,
        #[source]
        source: chrono::ParseError,
    },
}

impl FormatError {
    /// The timestamp that could not be formatted.
    pub fn input(&self) -> &str {
        match self {
            FormatError::Layout { input } | FormatError::Parse { input, .. } => input,
        }
    }
}

/// Reformat an API timestamp for display. Fractional seconds are dropped.
///
/// Every field must be zero-padded to its full width; signs, whitespace and
/// short fields are rejected before the calendar check.
pub fn format_timestamp(raw: &str) -> Result<String, FormatError> {
    if !has_api_shape(raw.as_bytes()) {
        return Err(FormatError::Layout {
            input: raw.to_string(),
        });
    }
    let parsed = NaiveDateTime::parse_from_str(raw, API_LAYOUT).map_err(|source| {
        FormatError::Parse {
            input: raw.to_string(),
            source,
        }
    })?;
    Ok(parsed.format(DISPLAY_LAYOUT).to_string())
}

fn has_api_shape(bytes: &[u8]) -> bool {
    if bytes.len() < API_SHAPE.len() {
        return false;
    }
    let (head, fraction) = bytes.split_at(API_SHAPE.len());
    let head_ok = head
        .iter()
        .zip(API_SHAPE)
        .all(|(byte, expected)| match expected {
            b'd' => byte.is_ascii_digit(),
            _ => byte == expected,
        });
    let fraction_ok = match fraction {
        [] => true,
        [b'.', digits @ ..] => !digits.is_empty() && digits.iter().all(u8::is_ascii_digit),
        _ => false,
    };
    head_ok && fraction_ok
}
