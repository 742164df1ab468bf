//! Position-aware validation of a [`FormData`].
//!
//! Every rule runs independently and contributes at most one message. The
//! "required" half of a position-specific rule only fires for the position
//! that shows the field; a value that is filled in is still format-checked.

use std::sync::LazyLock;

use regex::Regex;
use tracing::{debug, trace};

use crate::domain::{
    entities::{ErrorMap, FormData},
    value_objects::{FieldName, Position},
};

pub mod messages {
    pub const FULL_NAME_REQUIRED: &str = "Full Name is required!!!";
    pub const EMAIL_REQUIRED: &str = "Email is required!!!";
    pub const EMAIL_INVALID: &str = "Email format is invalid!!!";
    pub const PHONE_REQUIRED: &str = "Phone Number is required!!!";
    pub const PHONE_INVALID: &str = "Phone Number must be a valid number!!!";
    pub const POSITION_REQUIRED: &str = "Position is required!!!";
    pub const EXPERIENCE_REQUIRED: &str = "Relevant Experience is required!!!";
    pub const EXPERIENCE_NOT_POSITIVE: &str = "Experience must be greater than 0!!!";
    pub const PORTFOLIO_REQUIRED: &str = "Portfolio URL is required!!!";
    pub const PORTFOLIO_INVALID: &str = "Portfolio URL format is invalid!!!";
    pub const MANAGEMENT_REQUIRED: &str = "Management Experience is required!!!";
    pub const MANAGEMENT_INVALID: &str = "It must be a valid number!!!";
    pub const SKILLS_REQUIRED: &str = "At least one skill must be selected!!!";
    pub const INTERVIEW_REQUIRED: &str = "Preferred Interview Time is required!!!";
}

static EMAIL_SHAPE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\S+@\S+\.\S+").expect("email pattern is valid"));

static DIGITS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]+$").expect("digits pattern is valid"));

static PORTFOLIO_URL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:https?|chrome)://[^\s$.?#]\S+$").expect("portfolio pattern is valid")
});

/// Validate the whole form. Pure and idempotent.
pub fn validate(form: &FormData) -> ErrorMap {
    let mut errors = ErrorMap::new();

    if form.full_name.is_empty() {
        errors.insert(FieldName::FullName, messages::FULL_NAME_REQUIRED);
    }

    if form.email.is_empty() {
        errors.insert(FieldName::Email, messages::EMAIL_REQUIRED);
    } else if !EMAIL_SHAPE.is_match(&form.email) {
        errors.insert(FieldName::Email, messages::EMAIL_INVALID);
    }

    if form.phone_number.is_empty() {
        errors.insert(FieldName::PhoneNumber, messages::PHONE_REQUIRED);
    } else if !is_digits(&form.phone_number) {
        errors.insert(FieldName::PhoneNumber, messages::PHONE_INVALID);
    }

    if form.position.is_none() {
        errors.insert(FieldName::Position, messages::POSITION_REQUIRED);
    }

    if let Some(message) = relevant_experience(form) {
        errors.insert(FieldName::RelevantExperience, message);
    }

    if let Some(message) = portfolio_url(form) {
        errors.insert(FieldName::PortfolioUrl, message);
    }

    if let Some(message) = management_experience(form) {
        errors.insert(FieldName::ManagementExperience, message);
    }

    if form.additional_skills.is_empty() {
        errors.insert(FieldName::AdditionalSkills, messages::SKILLS_REQUIRED);
    }

    if form.interview_time.is_empty() {
        errors.insert(FieldName::InterviewTime, messages::INTERVIEW_REQUIRED);
    }

    debug!(error_count = errors.len(), "validation pass complete");
    for (field, message) in errors.iter() {
        trace!(%field, reason = message, "field failed validation");
    }

    errors
}

// ── Position-dependent rules ──────────────────────────────────────────────────
//
// Each is an if / else-if pair: the second branch only runs when the first
// did not match, even if that leaves a bad value unreported.

fn relevant_experience(form: &FormData) -> Option<&'static str> {
    let required = matches!(
        form.position,
        Some(Position::Developer | Position::Designer)
    );
    let value = &form.relevant_experience;

    if required && value.is_empty() {
        Some(messages::EXPERIENCE_REQUIRED)
    } else if !value.is_empty() && loose_number(value) <= 0.0 {
        Some(messages::EXPERIENCE_NOT_POSITIVE)
    } else {
        None
    }
}

fn portfolio_url(form: &FormData) -> Option<&'static str> {
    let value = &form.portfolio_url;

    if form.position == Some(Position::Designer) && value.is_empty() {
        Some(messages::PORTFOLIO_REQUIRED)
    } else if !value.is_empty() && !PORTFOLIO_URL.is_match(value) {
        Some(messages::PORTFOLIO_INVALID)
    } else {
        None
    }
}

fn management_experience(form: &FormData) -> Option<&'static str> {
    if form.position != Some(Position::Manager) {
        return None;
    }
    let value = &form.management_experience;

    if value.is_empty() {
        Some(messages::MANAGEMENT_REQUIRED)
    } else if !is_digits(value) {
        Some(messages::MANAGEMENT_INVALID)
    } else {
        None
    }
}

fn is_digits(value: &str) -> bool {
    DIGITS.is_match(value)
}

/// Numeric value of a form string under loose (string → number) comparison.
///
/// Surrounding whitespace is ignored and a blank string is `0`. Unparseable
/// input is `NaN`, which compares false against everything.
pub(crate) fn loose_number(raw: &str) -> f64 {
    let s = raw.trim();
    if s.is_empty() {
        return 0.0;
    }

    let unsigned = s.strip_prefix(['+', '-']).unwrap_or(s);
    let negative = s.starts_with('-');
    if unsigned == "Infinity" {
        return if negative { f64::NEG_INFINITY } else { f64::INFINITY };
    }

    // Radix literals take no sign.
    for (prefix, radix) in [("0x", 16), ("0X", 16), ("0o", 8), ("0O", 8), ("0b", 2), ("0B", 2)] {
        if let Some(digits) = s.strip_prefix(prefix) {
            if digits.is_empty() || !digits.chars().all(|c| c.is_digit(radix)) {
                return f64::NAN;
            }
            return u64::from_str_radix(digits, radix).map_or(f64::NAN, |n| n as f64);
        }
    }

    // `f64::from_str` also takes "inf" / "nan" spellings that loose
    // comparison does not; only plain decimal forms get through.
    let plain = unsigned
        .chars()
        .all(|c| c.is_ascii_digit() || matches!(c, '.' | 'e' | 'E' | '+' | '-'));
    if !plain {
        return f64::NAN;
    }
    s.parse::<f64>().unwrap_or(f64::NAN)
}
