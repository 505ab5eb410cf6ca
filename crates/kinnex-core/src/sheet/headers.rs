/// Cleans a raw column label as exported from Excel: non-breaking
/// spaces become ordinary spaces, then outer whitespace is trimmed.
pub fn normalize_label(label: &str) -> String {
    label.replace('\u{00a0}', " ").trim().to_string()
}
