use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct SignupEmail(String);

impl SignupEmail {
    /// Accepts `local@domain.tld`: exactly one `@`, no whitespace, and a `.`
    /// with something after it in the domain part.
    pub fn parse(s: &str) -> Result<Self, String> {
        if is_valid(s) {
            Ok(Self(s.to_string()))
        } else {
            Err(format!("{} is not a valid signup email", s))
        }
    }
}

fn is_valid(email: &str) -> bool {
    let (local, domain) = match email.split_once('@') {
        Some(parts) => parts,
        None => return false,
    };
    let (host, tld) = match domain.rsplit_once('.') {
        Some(parts) => parts,
        None => return false,
    };
    let clean =
        |part: &str| !part.is_empty() && !part.chars().any(|c| c.is_whitespace() || c == '@');
    clean(local) && clean(host) && clean(tld)
}

impl AsRef<String> for SignupEmail {
    fn as_ref(&self) -> &String {
        &self.0
    }
}
