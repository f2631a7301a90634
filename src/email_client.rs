use crate::domain::WaitlistEmail;
use reqwest::Client;
use secrecy::{ExposeSecret, Secret};
use std::time::Duration;

/// Thin client over the Resend transactional email API.
#[derive(Debug)]
pub struct EmailClient {
    http_client: Client,
    base_url: String,
    sender: String,
    authorization_token: Secret<String>,
}

impl EmailClient {
    pub fn new(
        base_url: String,
        sender: String,
        authorization_token: Secret<String>,
        timeout: Option<Duration>,
    ) -> Result<Self, reqwest::Error> {
        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        Ok(Self {
            http_client: builder.build()?,
            base_url,
            sender,
            authorization_token,
        })
    }

    #[tracing::instrument(
        name = "Send email through the provider",
        skip(self, recipient, subject, html_content, text_content),
        fields(recipient = %recipient)
    )]
    pub async fn send_email(
        &self,
        recipient: &WaitlistEmail,
        subject: &str,
        html_content: &str,
        text_content: &str,
    ) -> Result<(), reqwest::Error> {
        let url = format!("{}/emails", self.base_url.trim_end_matches('/'));
        let request_body = SendEmailRequest {
            from: &self.sender,
            to: recipient.as_ref(),
            subject,
            html: html_content,
            text: text_content,
        };
        self.http_client
            .post(&url)
            .bearer_auth(self.authorization_token.expose_secret())
            .json(&request_body)
            .send()
            .await?
            .error_for_status()?;
        Ok(())
    }
}

#[derive(serde::Serialize)]
struct SendEmailRequest<'a> {
    from: &'a str,
    to: &'a str,
    subject: &'a str,
    html: &'a str,
    text: &'a str,
}
