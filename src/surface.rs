use std::time::Duration;

/// How long a success message stays up before the surface dismisses it.
/// Error messages persist until the next submission clears them.
pub const SUCCESS_MESSAGE_TTL: Duration = Duration::from_secs(6);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageKind {
    Success,
    Error,
}

/// The interactive side of the signup form: two text fields, a submit
/// control and a message region. The workflow drives it through this trait,
/// so tests can stand in a recording fake.
///
/// Methods take `&self`; implementations keep their state behind interior
/// mutability. That lets the loading guard hold the surface for the length
/// of a store call while messages are still shown through it.
pub trait FormSurface {
    fn name(&self) -> String;
    fn email(&self) -> String;

    /// Move input focus to a field, typically after rejecting its value.
    fn focus(&self, field: Field);

    /// Toggle the in-flight look: disable the submit control and swap its
    /// label for a progress indicator. While loading is on, the surface must
    /// not accept another submission.
    fn set_loading(&self, loading: bool);

    /// Show a message and make sure it is visible. Success messages should
    /// be dismissed after [`SUCCESS_MESSAGE_TTL`].
    fn show_message(&self, text: &str, kind: MessageKind);

    /// Hide whatever message is currently displayed.
    fn clear_message(&self);

    /// Empty both text fields.
    fn clear_fields(&self);
}

/// Everything the signup form ever says to a visitor.
pub mod messages {
    pub const EMAIL_REQUIRED: &str = "Please enter your email address";
    pub const EMAIL_INVALID: &str = "Please enter a valid email address";
    pub const NOT_CONFIGURED: &str = "Service is not configured. Please contact support.";
    pub const WELCOME: &str = "Welcome to Echoes! Check your email for next steps.";
    pub const ALREADY_SIGNED_UP: &str = "You're already on the list! We'll be in touch soon.";
    pub const STORE_ERROR_FALLBACK: &str = "Database error. Please contact support.";
    pub const TRY_AGAIN: &str = "Something went wrong. Please try again.";
}
