use leptos::prelude::*;

use crate::models::contact::SubmissionOutcome;

#[server]
pub async fn submit_inquiry(
    name: String,
    email: String,
    organization: String,
    objective: String,
    message: String,
) -> Result<SubmissionOutcome, ServerFnError> {
    use axum::Extension;
    use crate::models::contact::InquiryForm;
    use crate::state::AppState;
    use leptos_axum::extract;

    let Extension(state) = extract::<Extension<AppState>>()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    // Validation failures and transport failures both ride the Ok branch;
    // the outcome enum is the whole contract
    Ok(state
        .pipeline
        .submit(InquiryForm {
            name,
            email,
            organization,
            objective,
            message,
        })
        .await)
}
