use crate::domain::WaitlistEmail;
use crate::email_client::EmailClient;
use secrecy::{ExposeSecret, Secret};
use serde_aux::field_attributes::{
    deserialize_number_from_string, deserialize_option_number_from_string,
};
use std::convert::{TryFrom, TryInto};

pub const DEFAULT_SENDER: &str = "Rapid Jobs <no-reply@emails.rapidjobs.app>";

/// Variable names used by the first deployment of the landing page.
/// They still win over everything else when set.
const LEGACY_OVERRIDES: [(&str, &str); 3] = [
    ("RESEND_API_KEY", "email_client.authorization_token"),
    ("FROM_EMAIL", "email_client.sender"),
    ("OWNER_EMAIL", "email_client.operator_email"),
];

#[derive(serde::Deserialize)]
pub struct Settings {
    pub application: ApplicationSettings,
    pub email_client: EmailClientSettings,
}

#[derive(serde::Deserialize)]
pub struct ApplicationSettings {
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub port: u16,
    pub host: String,
}

#[derive(serde::Deserialize)]
pub struct EmailClientSettings {
    pub base_url: String,
    #[serde(default = "default_sender")]
    pub sender: String,
    #[serde(default)]
    pub authorization_token: Option<Secret<String>>,
    #[serde(default)]
    pub operator_email: Option<String>,
    #[serde(default, deserialize_with = "deserialize_option_number_from_string")]
    pub timeout_milliseconds: Option<u64>,
}

fn default_sender() -> String {
    DEFAULT_SENDER.to_string()
}

impl EmailClientSettings {
    pub fn timeout(&self) -> Option<std::time::Duration> {
        self.timeout_milliseconds
            .map(std::time::Duration::from_millis)
    }

    /// `None` when no usable API key is configured: blank keys count as missing.
    pub fn client(&self) -> Result<Option<EmailClient>, reqwest::Error> {
        let token = match &self.authorization_token {
            Some(token) if !token.expose_secret().trim().is_empty() => token,
            _ => return Ok(None),
        };
        EmailClient::new(
            self.base_url.clone(),
            self.sender.clone(),
            Secret::new(token.expose_secret().trim().to_string()),
            self.timeout(),
        )
        .map(Some)
    }

    pub fn operator(&self) -> Result<Option<WaitlistEmail>, String> {
        match &self.operator_email {
            Some(email) if !email.trim().is_empty() => {
                WaitlistEmail::parse(email.clone()).map(Some)
            }
            _ => Ok(None),
        }
    }
}

#[derive(Debug)]
pub enum Environment {
    Local,
    Production,
}

impl Environment {
    pub fn as_str(&self) -> &'static str {
        match self {
            Environment::Local => "local",
            Environment::Production => "production",
        }
    }
}

impl TryFrom<String> for Environment {
    type Error = String;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        match s.to_lowercase().as_str() {
            "local" => Ok(Self::Local),
            "production" => Ok(Self::Production),
            other => Err(format!(
                "{} is not a supported environment. Use either `local` or `production`.",
                other
            )),
        }
    }
}

pub fn get_configuration() -> Result<Settings, config::ConfigError> {
    let mut settings = config::Config::default();

    let environment: Environment = std::env::var("APP_ENVIRONMENT")
        .unwrap_or_else(|_| "local".into())
        .try_into()
        .map_err(config::ConfigError::Message)?;

    settings.merge(config::File::with_name("configuration/base").required(true))?;
    settings.merge(
        config::File::with_name(&format!("configuration/{}", environment.as_str()))
            .required(true),
    )?;
    // e.g. `APP_APPLICATION__PORT=5001` sets `Settings.application.port`
    settings.merge(config::Environment::with_prefix("app").separator("__"))?;

    for (variable, key) in LEGACY_OVERRIDES {
        if let Ok(value) = std::env::var(variable) {
            if !value.trim().is_empty() {
                settings.set(key, value)?;
            }
        }
    }

    settings.try_into()
}
