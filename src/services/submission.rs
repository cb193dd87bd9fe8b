use chrono::{DateTime, SecondsFormat, Utc};

use crate::config::SheetsConfig;
use crate::models::contact::{Inquiry, InquiryForm, SubmissionOutcome};
use crate::services::sheets::SheetsClient;

/// Shown to submitters for every transport, auth, or config failure. The
/// underlying error goes to the operator log only.
const GENERIC_FAILURE: &str = "Failed to save submission. Please try again.";

/// Validates a contact-form post and appends it as one spreadsheet row.
///
/// One attempt per submission: no retries, no dedup, no state between calls.
/// A visitor who hits the generic failure simply resubmits.
pub struct SubmissionPipeline {
    sheets: Option<SheetsClient>,
}

impl SubmissionPipeline {
    pub fn new(sheets: Option<SheetsClient>) -> Self {
        Self { sheets }
    }

    /// Builds the pipeline from environment credentials. A missing credential
    /// doesn't stop the site from serving; the pipeline fails closed instead,
    /// reporting every submission as failed until the deployment is fixed.
    pub fn from_env() -> Self {
        match SheetsConfig::from_env() {
            Ok(config) => Self::new(Some(SheetsClient::new(config))),
            Err(e) => {
                tracing::warn!("contact form disabled: {e}");
                Self::new(None)
            }
        }
    }

    pub async fn submit(&self, form: InquiryForm) -> SubmissionOutcome {
        // Validation short-circuits before any network I/O
        let inquiry = match Inquiry::parse(form) {
            Ok(inquiry) => inquiry,
            Err(field_errors) => return SubmissionOutcome::Rejected { field_errors },
        };

        let Some(sheets) = &self.sheets else {
            tracing::error!("dropping contact submission: spreadsheet credentials not configured");
            return SubmissionOutcome::Failed {
                message: GENERIC_FAILURE.to_owned(),
            };
        };

        let row = build_row(&inquiry, Utc::now());
        match sheets.append_row(&row).await {
            Ok(range) => {
                tracing::info!("contact submission appended to {range}");
                SubmissionOutcome::Accepted
            }
            Err(e) => {
                tracing::error!("contact submission append failed: {e}");
                SubmissionOutcome::Failed {
                    message: GENERIC_FAILURE.to_owned(),
                }
            }
        }
    }
}

/// Six ordered columns: timestamp, name, email, organization, objective,
/// message. The timestamp is the only value the pipeline derives itself.
fn build_row(inquiry: &Inquiry, now: DateTime<Utc>) -> [String; 6] {
    [
        now.to_rfc3339_opts(SecondsFormat::Secs, true),
        inquiry.name.clone(),
        inquiry.email.clone(),
        inquiry.organization.clone(),
        inquiry.objective.clone(),
        inquiry.message.clone(),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::sheets::tests::{mock_token_exchange, test_config};

    fn valid_form() -> InquiryForm {
        InquiryForm {
            name: "Ada Lovelace".into(),
            email: "ada@example.com".into(),
            organization: String::new(),
            objective: "AI Strategy & Consulting".into(),
            message: "Hello".into(),
        }
    }

    fn pipeline_for(server: &mockito::Server) -> SubmissionPipeline {
        let token_url = format!("{}/token", server.url());
        SubmissionPipeline::new(Some(SheetsClient::with_base_urls(
            test_config(),
            &token_url,
            &server.url(),
        )))
    }

    #[test]
    fn builds_the_row_in_column_order() {
        let inquiry = Inquiry::parse(valid_form()).unwrap();
        let now = "2026-08-30T12:00:00Z".parse::<DateTime<Utc>>().unwrap();
        let row = build_row(&inquiry, now);
        assert_eq!(
            row,
            [
                "2026-08-30T12:00:00Z",
                "Ada Lovelace",
                "ada@example.com",
                "",
                "AI Strategy & Consulting",
                "Hello",
            ]
        );
    }

    #[test]
    fn row_timestamp_is_rfc3339_utc() {
        let inquiry = Inquiry::parse(valid_form()).unwrap();
        let row = build_row(&inquiry, Utc::now());
        let parsed = DateTime::parse_from_rfc3339(&row[0]).unwrap();
        assert_eq!(parsed.offset().local_minus_utc(), 0);
        assert!(row[0].ends_with('Z'));
    }

    #[tokio::test]
    async fn invalid_input_is_rejected_without_any_network_call() {
        let mut server = mockito::Server::new_async().await;
        let token = server.mock("POST", "/token").expect(0).create_async().await;

        let outcome = pipeline_for(&server)
            .submit(InquiryForm {
                name: String::new(),
                email: "not-an-email".into(),
                message: String::new(),
                ..valid_form()
            })
            .await;

        let SubmissionOutcome::Rejected { field_errors } = outcome else {
            panic!("expected rejection, got {outcome:?}");
        };
        for field in ["name", "email", "message"] {
            assert!(!field_errors[field].is_empty());
        }
        token.assert_async().await;
    }

    #[tokio::test]
    async fn valid_input_appends_exactly_one_row() {
        let mut server = mockito::Server::new_async().await;
        let _token = mock_token_exchange(&mut server).await;
        let append = server
            .mock("POST", "/v4/spreadsheets/sheet-123/values/Sheet1!A:F:append")
            .match_query(mockito::Matcher::Any)
            .with_status(200)
            .with_body(r#"{"updates":{"updatedRange":"Sheet1!A2:F2"}}"#)
            .expect(1)
            .create_async()
            .await;

        let outcome = pipeline_for(&server).submit(valid_form()).await;

        assert_eq!(outcome, SubmissionOutcome::Accepted);
        append.assert_async().await;
    }

    #[tokio::test]
    async fn duplicate_submissions_append_two_rows() {
        // No dedup on purpose: resubmitting is the visitor's retry mechanism
        let mut server = mockito::Server::new_async().await;
        let _token = mock_token_exchange(&mut server).await;
        let append = server
            .mock("POST", "/v4/spreadsheets/sheet-123/values/Sheet1!A:F:append")
            .match_query(mockito::Matcher::Any)
            .with_status(200)
            .with_body(r#"{"updates":{"updatedRange":"Sheet1!A2:F2"}}"#)
            .expect(2)
            .create_async()
            .await;

        let pipeline = pipeline_for(&server);
        assert_eq!(pipeline.submit(valid_form()).await, SubmissionOutcome::Accepted);
        assert_eq!(pipeline.submit(valid_form()).await, SubmissionOutcome::Accepted);
        append.assert_async().await;
    }

    #[tokio::test]
    async fn append_failure_maps_to_a_generic_message() {
        let mut server = mockito::Server::new_async().await;
        let _token = mock_token_exchange(&mut server).await;
        let _append = server
            .mock("POST", "/v4/spreadsheets/sheet-123/values/Sheet1!A:F:append")
            .match_query(mockito::Matcher::Any)
            .with_status(500)
            .with_body("internal explosion at /secret/endpoint")
            .create_async()
            .await;

        let outcome = pipeline_for(&server).submit(valid_form()).await;

        let SubmissionOutcome::Failed { message } = outcome else {
            panic!("expected failure, got {outcome:?}");
        };
        assert!(!message.is_empty());
        assert!(!message.contains("500"));
        assert!(!message.contains("explosion"));
        assert!(!message.contains("gserviceaccount"));
    }

    #[tokio::test]
    async fn missing_credentials_fail_closed() {
        let outcome = SubmissionPipeline::new(None).submit(valid_form()).await;
        let SubmissionOutcome::Failed { message } = outcome else {
            panic!("expected failure");
        };
        assert_eq!(message, GENERIC_FAILURE);
    }
}
