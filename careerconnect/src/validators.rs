use once_cell::sync::Lazy;
use regex::Regex;

use crate::errors::{ValidationError, ValidationIssue, ValidationResult};
use crate::profile::{NewProfile, Role};

/// Accepted username shape: 2 to 32 characters from letters, digits,
/// underscore, dot, and hyphen. No whitespace, no '@'.
static USERNAME_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z0-9_.-]{2,32}$").expect("username pattern compiles"));

/// Returns `true` if the provided string is an acceptable username.
pub fn is_valid_username(value: &str) -> bool {
    USERNAME_PATTERN.is_match(value)
}

/// Checks a registration payload and collects every problem found.
pub fn validate_new_profile(new: &NewProfile) -> ValidationResult<()> {
    let mut issues = Vec::new();

    if new.username.trim().is_empty() {
        issues.push(ValidationIssue::new("username", "required", "username must not be blank"));
    } else if !is_valid_username(&new.username) {
        issues.push(ValidationIssue::new(
            "username",
            "format",
            "username must be 2-32 characters from letters, digits, '_', '.', or '-'",
        ));
    }
    if new.password.is_empty() {
        issues.push(ValidationIssue::new("password", "required", "password must not be empty"));
    }
    require(&mut issues, "display_name", &new.display_name);

    match &new.role {
        Role::Student { university, major } => {
            require(&mut issues, "university", university);
            require(&mut issues, "major", major);
        }
        Role::Professional { company, title } => {
            require(&mut issues, "company", company);
            require(&mut issues, "title", title);
        }
        Role::Engineer { specialization } => require(&mut issues, "specialization", specialization),
        Role::Doctor { medical_field } => require(&mut issues, "medical_field", medical_field),
        Role::Artist { medium } => require(&mut issues, "medium", medium),
    }

    if issues.is_empty() { Ok(()) } else { Err(ValidationError::new(issues)) }
}

fn require(issues: &mut Vec<ValidationIssue>, field: &'static str, value: &str) {
    if value.trim().is_empty() {
        issues.push(ValidationIssue::new(field, "required", format!("{field} must not be blank")));
    }
}
