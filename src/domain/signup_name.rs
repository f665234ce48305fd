use serde::Serialize;

/// A name is optional on the signup form. Parsing trims the raw value and
/// treats the empty result as "no name given" rather than an error.
#[derive(Debug, Clone, Serialize)]
pub struct SignupName(String);

impl SignupName {
    pub fn parse(s: &str) -> Option<Self> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(Self(trimmed.to_string()))
        }
    }
}

impl AsRef<String> for SignupName {
    fn as_ref(&self) -> &String {
        &self.0
    }
}
