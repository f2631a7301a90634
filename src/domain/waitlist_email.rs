use once_cell::sync::Lazy;
use regex::Regex;

/// Shared by the server-side check and the landing page script.
pub const EMAIL_PATTERN: &str = r"^\S+@\S+\.\S+$";

static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(EMAIL_PATTERN).expect("EMAIL_PATTERN is a valid regex")
});

/// A syntactically plausible email address, trimmed of surrounding whitespace.
#[derive(Debug, Clone, PartialEq)]
pub struct WaitlistEmail(String);

impl WaitlistEmail {
    pub fn parse(s: String) -> Result<WaitlistEmail, String> {
        let trimmed = s.trim();
        if EMAIL_REGEX.is_match(trimmed) {
            Ok(Self(trimmed.to_string()))
        } else {
            Err(format!("{} is not a valid email", s))
        }
    }
}

impl AsRef<str> for WaitlistEmail {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for WaitlistEmail {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}
