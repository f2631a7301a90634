use crate::domain::WaitlistEmail;
use crate::email_client::EmailClient;
use crate::startup::OperatorEmail;
use actix_web::http::StatusCode;
use actix_web::{web, HttpResponse, ResponseError};
use anyhow::Context;
use serde_json::Value;
use std::fmt::Formatter;

#[derive(serde::Serialize)]
struct Acknowledgement {
    ok: bool,
}

#[derive(serde::Serialize)]
struct ErrorBody<'a> {
    error: &'a str,
}

#[derive(thiserror::Error)]
pub enum WaitlistError {
    #[error("{0}")]
    ValidationError(String),
    #[error("The email provider API key is not configured")]
    NotConfigured,
    #[error(transparent)]
    UnexpectedError(#[from] anyhow::Error),
}

impl WaitlistError {
    /// The only detail a caller ever gets to see.
    fn public_message(&self) -> &'static str {
        match self {
            WaitlistError::ValidationError(_) => "Invalid email",
            WaitlistError::NotConfigured => "Email service not configured",
            WaitlistError::UnexpectedError(_) => "Server error",
        }
    }
}

impl std::fmt::Debug for WaitlistError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        error_chain_fmt(self, f)
    }
}

impl ResponseError for WaitlistError {
    fn status_code(&self) -> StatusCode {
        match self {
            WaitlistError::ValidationError(_) => StatusCode::BAD_REQUEST,
            WaitlistError::NotConfigured | WaitlistError::UnexpectedError(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(ErrorBody {
            error: self.public_message(),
        })
    }
}

pub fn error_chain_fmt(
    e: &impl std::error::Error,
    f: &mut Formatter<'_>,
) -> std::fmt::Result {
    writeln!(f, "{}\n", e)?;
    let mut current = e.source();
    while let Some(cause) = current {
        writeln!(f, "Caused by:\n\t{}", cause)?;
        current = cause.source();
    }
    Ok(())
}

#[tracing::instrument(
    name = "Adding a new waitlist signup",
    skip(body, email_client, operator),
    fields(signup_email = tracing::field::Empty)
)]
pub async fn join_waitlist(
    body: web::Bytes,
    email_client: web::Data<Option<EmailClient>>,
    operator: web::Data<OperatorEmail>,
) -> Result<HttpResponse, WaitlistError> {
    let email = WaitlistEmail::parse(extract_email(&body))
        .map_err(WaitlistError::ValidationError)?;
    tracing::Span::current()
        .record("signup_email", &tracing::field::display(&email));

    let email_client = match email_client.get_ref() {
        Some(email_client) => email_client,
        None => {
            tracing::error!("Rejecting waitlist signup: no email provider API key is configured");
            return Err(WaitlistError::NotConfigured);
        }
    };

    send_confirmation_email(email_client, &email)
        .await
        .context("Failed to send the waitlist confirmation email")?;

    if let Some(operator) = &operator.0 {
        // The signup already got its confirmation, so this never fails the request.
        if let Err(e) = send_operator_notification(email_client, operator, &email)
            .await
            .context("Failed to send the operator notification")
        {
            tracing::error!(
                error.cause_chain = ?e,
                error.message = %e,
                "Operator was not notified about a new waitlist signup"
            );
        }
    }

    Ok(HttpResponse::Ok().json(Acknowledgement { ok: true }))
}

/// Missing fields, non-JSON bodies and non-scalar values all become an empty string.
fn extract_email(body: &[u8]) -> String {
    serde_json::from_slice::<Value>(body)
        .ok()
        .and_then(|payload| payload.get("email").map(coerce_to_string))
        .unwrap_or_default()
}

fn coerce_to_string(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(true) => "true".to_string(),
        _ => String::new(),
    }
}

#[tracing::instrument(
    name = "Send a waitlist confirmation email",
    skip(email_client, signup)
)]
pub async fn send_confirmation_email(
    email_client: &EmailClient,
    signup: &WaitlistEmail,
) -> Result<(), reqwest::Error> {
    let html_body = format!(
        r#"<div>
  <h1>Thanks for joining Rapid Jobs!</h1>
  <p>We've added <strong>{email}</strong> to our waiting list and will notify you when the apps launch.</p>
  <p>The Rapid Jobs Team</p>
</div>"#,
        email = htmlescape::encode_minimal(signup.as_ref())
    );
    let plain_body = format!(
        "Thanks for joining Rapid Jobs!\n\n\
         We've added {email} to our waiting list and will notify you when the apps launch.\n\n\
         The Rapid Jobs Team",
        email = signup
    );
    email_client
        .send_email(
            signup,
            "You're on the Rapid Jobs waitlist 🚀",
            &html_body,
            &plain_body,
        )
        .await
}

#[tracing::instrument(
    name = "Notify the operator about a waitlist signup",
    skip(email_client, operator, signup)
)]
pub async fn send_operator_notification(
    email_client: &EmailClient,
    operator: &WaitlistEmail,
    signup: &WaitlistEmail,
) -> Result<(), reqwest::Error> {
    let html_body = format!(
        "<p>{} joined the waitlist</p>",
        htmlescape::encode_minimal(signup.as_ref())
    );
    let plain_body = format!("{} joined the waitlist", signup);
    email_client
        .send_email(
            operator,
            &format!("New waitlist signup: {}", signup),
            &html_body,
            &plain_body,
        )
        .await
}
