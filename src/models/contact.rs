use std::collections::BTreeMap;

use email_address::EmailAddress;
use serde::{Deserialize, Serialize};

/// Objective choices offered by the contact form. The pipeline itself treats
/// the field as free text.
pub static OBJECTIVE_OPTIONS: [&str; 4] = [
    "AI Strategy & Consulting",
    "Custom Model Development",
    "Infrastructure Engineering",
    "Other Inquiry",
];

/// Raw contact-form fields, exactly as posted by the browser.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InquiryForm {
    pub name: String,
    pub email: String,
    pub organization: String,
    pub objective: String,
    pub message: String,
}

/// Validation messages grouped by field name.
pub type FieldErrors = BTreeMap<String, Vec<String>>;

/// A validated, normalized inquiry. Only constructed via [`Inquiry::parse`],
/// so every instance is safe to turn into a spreadsheet row.
#[derive(Debug, Clone, PartialEq)]
pub struct Inquiry {
    pub name: String,
    pub email: String,
    pub organization: String,
    pub objective: String,
    pub message: String,
}

impl Inquiry {
    pub fn parse(form: InquiryForm) -> Result<Self, FieldErrors> {
        let mut errors = FieldErrors::new();

        let name = form.name.trim().to_owned();
        if name.is_empty() {
            add_error(&mut errors, "name", "Name is required");
        }

        let email = form.email.trim().to_owned();
        if email.is_empty() {
            add_error(&mut errors, "email", "Email is required");
        } else if !EmailAddress::is_valid(&email) {
            add_error(&mut errors, "email", "Enter a valid email address");
        }

        let message = form.message.trim().to_owned();
        if message.is_empty() {
            add_error(&mut errors, "message", "Message is required");
        }

        if !errors.is_empty() {
            return Err(errors);
        }

        Ok(Self {
            name,
            email,
            // Optional fields normalize to empty strings, never null
            organization: form.organization.trim().to_owned(),
            objective: form.objective.trim().to_owned(),
            message,
        })
    }
}

/// Outcome of one contact submission. Every call path of the pipeline
/// returns one of these; callers never see a thrown failure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum SubmissionOutcome {
    Accepted,
    Rejected { field_errors: FieldErrors },
    Failed { message: String },
}

fn add_error(errors: &mut FieldErrors, field: &str, message: &str) {
    errors
        .entry(field.to_owned())
        .or_default()
        .push(message.to_owned());
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_form() -> InquiryForm {
        InquiryForm {
            name: "Ada Lovelace".into(),
            email: "ada@example.com".into(),
            organization: String::new(),
            objective: "AI Strategy & Consulting".into(),
            message: "Hello".into(),
        }
    }

    #[test]
    fn accepts_a_valid_form() {
        let inquiry = Inquiry::parse(valid_form()).unwrap();
        assert_eq!(inquiry.name, "Ada Lovelace");
        assert_eq!(inquiry.email, "ada@example.com");
        assert_eq!(inquiry.organization, "");
        assert_eq!(inquiry.objective, "AI Strategy & Consulting");
        assert_eq!(inquiry.message, "Hello");
    }

    #[test]
    fn rejects_missing_required_fields() {
        let errors = Inquiry::parse(InquiryForm::default()).unwrap_err();
        for field in ["name", "email", "message"] {
            assert!(!errors[field].is_empty(), "expected errors for {field}");
        }
        assert!(!errors.contains_key("organization"));
        assert!(!errors.contains_key("objective"));
    }

    #[test]
    fn rejects_whitespace_only_required_fields() {
        let form = InquiryForm {
            name: "   ".into(),
            message: "\n\t".into(),
            ..valid_form()
        };
        let errors = Inquiry::parse(form).unwrap_err();
        assert!(errors.contains_key("name"));
        assert!(errors.contains_key("message"));
    }

    #[test]
    fn rejects_malformed_email() {
        for bad in ["not-an-email", "ada@", "@example.com", "ada at example.com"] {
            let form = InquiryForm {
                email: bad.into(),
                ..valid_form()
            };
            let errors = Inquiry::parse(form).unwrap_err();
            assert!(errors.contains_key("email"), "expected rejection of {bad:?}");
        }
    }

    #[test]
    fn trims_optional_fields_to_plain_text() {
        let form = InquiryForm {
            organization: "  Analytical Engines Ltd ".into(),
            objective: String::new(),
            ..valid_form()
        };
        let inquiry = Inquiry::parse(form).unwrap();
        assert_eq!(inquiry.organization, "Analytical Engines Ltd");
        assert_eq!(inquiry.objective, "");
    }
}
