/// Classification of one numeric cell from the QC table. The lab files
/// mix real counts with "", "NA", "nan" and the odd free-text note, so
/// the outcome is an explicit branch rather than a catch-all
/// conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumericValue {
    Parsed(i64),
    NullToken,
    Unparsable,
}

pub fn classify_int(raw: &str) -> NumericValue {
    // Thousands separators show up in hand-edited exports.
    let cleaned = raw.trim().replace(',', "");
    if cleaned.is_empty() || is_null_token(&cleaned) {
        return NumericValue::NullToken;
    }
    match cleaned.parse::<i64>() {
        Ok(value) => NumericValue::Parsed(value),
        Err(_) => NumericValue::Unparsable,
    }
}

/// Tolerant read-count parse: null tokens and unparsable values both
/// resolve to `None`; unparsable values are logged so the information
/// is not silently lost. Never fails.
pub fn parse_read_count(raw: Option<&str>) -> Option<i64> {
    let raw = raw?;
    match classify_int(raw) {
        NumericValue::Parsed(value) => Some(value),
        NumericValue::NullToken => None,
        NumericValue::Unparsable => {
            tracing::warn!(value = raw, "unparsable read count, storing NULL");
            None
        }
    }
}

/// Normalizes a free-text cell: trimmed, with empty strings and null
/// tokens mapped to `None`.
pub fn parse_text(raw: Option<&str>) -> Option<String> {
    let trimmed = raw?.trim();
    if trimmed.is_empty() || is_null_token(trimmed) {
        None
    } else {
        Some(trimmed.to_string())
    }
}

fn is_null_token(value: &str) -> bool {
    value.eq_ignore_ascii_case("nan") || value.eq_ignore_ascii_case("na")
}
