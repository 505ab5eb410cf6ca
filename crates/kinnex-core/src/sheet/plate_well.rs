use once_cell::sync::Lazy;
use regex::Regex;

// "Plate 1- A01", "plate 12 – H08" (hyphen or en-dash, loose spacing).
static PLATE_DASH_WELL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[Pp]late\s*(\d+)\s*[-–]\s*([A-H]\d{2})").expect("plate/well pattern is valid")
});

static ALREADY_CANONICAL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d+_[A-H]\d{2}$").expect("canonical plate/well pattern is valid"));

/// Classification of one plate/well cell. Unrecognized encodings are
/// passed through verbatim for manual review rather than aborting the
/// batch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlateWell {
    /// Rewritten from the lab's "Plate N - W##" spelling.
    Matched(String),
    /// Already in "<plate>_<well>" form.
    AlreadyCanonical(String),
    /// Did not match any recognized layout; trimmed original.
    Passthrough(String),
}

impl PlateWell {
    pub fn classify(raw: &str) -> Self {
        let trimmed = raw.trim();
        if let Some(caps) = PLATE_DASH_WELL.captures(trimmed) {
            return PlateWell::Matched(format!("{}_{}", &caps[1], &caps[2]));
        }
        if ALREADY_CANONICAL.is_match(trimmed) {
            return PlateWell::AlreadyCanonical(trimmed.to_string());
        }
        PlateWell::Passthrough(trimmed.to_string())
    }

    pub fn into_value(self) -> String {
        match self {
            PlateWell::Matched(value)
            | PlateWell::AlreadyCanonical(value)
            | PlateWell::Passthrough(value) => value,
        }
    }
}

/// Canonicalizes a (possibly missing) plate/well cell. Missing stays
/// missing; a passthrough is logged so it can be reviewed in the output.
pub fn canonicalize(value: Option<String>) -> Option<String> {
    let raw = value?;
    let outcome = PlateWell::classify(&raw);
    if let PlateWell::Passthrough(unrecognized) = &outcome {
        tracing::warn!(
            value = %unrecognized,
            "plate/well did not match any recognized layout, passing through"
        );
    }
    Some(outcome.into_value())
}
