//! Field rules for user records entered by hand.

use crate::{CoreError, Result as CoreErrorResult, User};

use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

static EMAIL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$").expect("email pattern is valid")
});
static PHONE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[\d\s()+.-]+$").expect("phone pattern is valid"));
static USERNAME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-zA-Z0-9_-]{3,20}$").expect("username pattern is valid"));
static WEBSITE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(https?://)?(www\.)?[a-zA-Z0-9-]+(\.[a-zA-Z0-9-]+)+([/?].*)?$")
        .expect("website pattern is valid")
});
static ZIPCODE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{5}(-\d{4})?$").expect("zipcode pattern is valid"));
static COORDINATE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^-?\d+\.?\d*$").expect("coordinate pattern is valid"));

/// Whether required fields must be present
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Requirement {
    /// A full record: name, username and email must be set
    Complete,
    /// A partial change: only the fields that are set get checked
    Partial,
}

/// A single rule violation
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationIssue {
    pub field: &'static str,
    pub message: String,
}

struct FieldRule {
    field: &'static str,
    required: bool,
    min: Option<usize>,
    max: Option<usize>,
    pattern: Option<(&'static LazyLock<Regex>, &'static str)>,
}

impl FieldRule {
    const fn new(field: &'static str) -> Self {
        Self {
            field,
            required: false,
            min: None,
            max: None,
            pattern: None,
        }
    }

    const fn required(mut self) -> Self {
        self.required = true;
        self
    }

    const fn length(mut self, min: Option<usize>, max: usize) -> Self {
        self.min = min;
        self.max = Some(max);
        self
    }

    const fn pattern(mut self, regex: &'static LazyLock<Regex>, message: &'static str) -> Self {
        self.pattern = Some((regex, message));
        self
    }

    fn check(&self, value: Option<&str>, requirement: Requirement) -> Option<ValidationIssue> {
        let issue = |message: String| {
            Some(ValidationIssue {
                field: self.field,
                message,
            })
        };

        // An absent field is only required of complete records; a blank one
        // is never accepted for a required field.
        let required = |applies: bool| {
            if self.required && applies {
                issue(String::from("This field is required"))
            } else {
                None
            }
        };

        let Some(value) = value.map(str::trim) else {
            return required(requirement == Requirement::Complete);
        };
        if value.is_empty() {
            return required(true);
        }

        let length = value.chars().count();
        if let Some(min) = self.min
            && length < min
        {
            return issue(format!("Must be at least {min} characters"));
        }
        if let Some(max) = self.max
            && length > max
        {
            return issue(format!("Must not exceed {max} characters"));
        }

        match self.pattern {
            Some((regex, message)) if !regex.is_match(value) => issue(message.to_string()),
            _ => None,
        }
    }
}

static NAME: FieldRule = FieldRule::new("name").required().length(Some(2), 100);
static USERNAME_RULE: FieldRule = FieldRule::new("username")
    .required()
    .length(Some(3), 20)
    .pattern(
        &USERNAME,
        "Username must be 3-20 characters (letters, numbers, _ and - only)",
    );
static EMAIL_RULE: FieldRule = FieldRule::new("email")
    .required()
    .length(None, 100)
    .pattern(&EMAIL, "Please enter a valid email address");
static PHONE_RULE: FieldRule =
    FieldRule::new("phone").pattern(&PHONE, "Please enter a valid phone number");
static WEBSITE_RULE: FieldRule = FieldRule::new("website").length(None, 100).pattern(
    &WEBSITE,
    "Please enter a valid website URL (e.g., example.com or https://example.com)",
);
static STREET: FieldRule = FieldRule::new("street").length(None, 150);
static SUITE: FieldRule = FieldRule::new("suite").length(None, 50);
static CITY: FieldRule = FieldRule::new("city").length(None, 100);
static ZIPCODE_RULE: FieldRule = FieldRule::new("zipcode").length(None, 10).pattern(
    &ZIPCODE,
    "Please enter a valid zipcode (e.g., 12345 or 12345-6789)",
);
static LAT: FieldRule = FieldRule::new("lat").pattern(
    &COORDINATE,
    "Please enter a valid coordinate (e.g., -37.8136)",
);
static LNG: FieldRule = FieldRule::new("lng").pattern(
    &COORDINATE,
    "Please enter a valid coordinate (e.g., -37.8136)",
);
static COMPANY_NAME: FieldRule = FieldRule::new("companyName").length(None, 100);
static CATCH_PHRASE: FieldRule = FieldRule::new("catchPhrase").length(None, 200);
static BS: FieldRule = FieldRule::new("bs").length(None, 200);

/// Check a record against the field rules, collecting every violation.
///
/// Blank strings count as missing, except that a required field sent blank
/// is reported even in a partial change.
pub fn validate_user(user: &User, requirement: Requirement) -> CoreErrorResult<()> {
    let address = user.address.as_ref();
    let geo = address.and_then(|a| a.geo.as_ref());
    let company = user.company.as_ref();

    let checks: [(&FieldRule, Option<&str>); 14] = [
        (&NAME, user.name.as_deref()),
        (&USERNAME_RULE, user.username.as_deref()),
        (&EMAIL_RULE, user.email.as_deref()),
        (&PHONE_RULE, user.phone.as_deref()),
        (&WEBSITE_RULE, user.website.as_deref()),
        (&STREET, address.and_then(|a| a.street.as_deref())),
        (&SUITE, address.and_then(|a| a.suite.as_deref())),
        (&CITY, address.and_then(|a| a.city.as_deref())),
        (&ZIPCODE_RULE, address.and_then(|a| a.zipcode.as_deref())),
        (&LAT, geo.and_then(|g| g.lat.as_deref())),
        (&LNG, geo.and_then(|g| g.lng.as_deref())),
        (&COMPANY_NAME, company.and_then(|c| c.name.as_deref())),
        (&CATCH_PHRASE, company.and_then(|c| c.catch_phrase.as_deref())),
        (&BS, company.and_then(|c| c.bs.as_deref())),
    ];

    let issues: Vec<ValidationIssue> = checks
        .iter()
        .filter_map(|(rule, value)| rule.check(*value, requirement))
        .collect();

    if issues.is_empty() {
        Ok(())
    } else {
        Err(CoreError::validation(issues))
    }
}
