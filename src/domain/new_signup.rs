use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domain::{SignupEmail, SignupName};

/// One signup attempt, built fresh from the form's current values and never
/// mutated afterwards. Serializes to the store's wire shape: `name` is
/// omitted entirely when it was left blank.
#[derive(Debug, Serialize)]
pub struct NewSignup {
    pub email: SignupEmail,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<SignupName>,
    pub signed_up_at: DateTime<Utc>,
}

impl NewSignup {
    pub fn new(email: SignupEmail, name: Option<SignupName>) -> Self {
        Self {
            email,
            name,
            signed_up_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_is_omitted_from_the_wire_shape_when_absent() {
        let signup = NewSignup::new(SignupEmail::parse("a@b.com").unwrap(), None);
        let body = serde_json::to_value(&signup).unwrap();
        assert_eq!(body["email"], "a@b.com");
        assert!(body.get("name").is_none());
    }

    #[test]
    fn name_is_present_in_the_wire_shape_when_given() {
        let signup = NewSignup::new(
            SignupEmail::parse("a@b.com").unwrap(),
            SignupName::parse("Ada"),
        );
        let body = serde_json::to_value(&signup).unwrap();
        assert_eq!(body["name"], "Ada");
    }

    #[test]
    fn signed_up_at_serializes_as_a_timestamp_string() {
        let signup = NewSignup::new(SignupEmail::parse("a@b.com").unwrap(), None);
        let body = serde_json::to_value(&signup).unwrap();
        let stamp = body["signed_up_at"].as_str().unwrap();
        assert!(stamp.contains('T'));
    }
}
