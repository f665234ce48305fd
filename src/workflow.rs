use crate::domain::{NewSignup, SignupEmail, SignupName};
use crate::store::{StoreClient, StoreError, StoreOutcome};
use crate::surface::{messages, Field, FormSurface, MessageKind};

/// Drives one signup submission from form values to user feedback.
///
/// The store is an explicit dependency; `None` means the backing service was
/// never configured, which the workflow reports instead of crashing.
pub struct SignupWorkflow {
    store: Option<StoreClient>,
}

/// Where a submission ended up. Every variant returns the surface to idle
/// with loading cleared.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmissionOutcome {
    /// Validation failed; no store call was made.
    Rejected,
    /// No store credentials for this session; no store call was made.
    Unconfigured,
    Succeeded,
    /// The email was already on the list. Treated as a success: the visitor
    /// got what they came for.
    AlreadySignedUp,
    Failed,
}

/// Holds the surface in its loading state for as long as the guard lives.
/// Dropping it re-enables the submit control, on every exit path.
struct LoadingGuard<'a, S: FormSurface + ?Sized> {
    surface: &'a S,
}

impl<'a, S: FormSurface + ?Sized> LoadingGuard<'a, S> {
    fn engage(surface: &'a S) -> Self {
        surface.set_loading(true);
        Self { surface }
    }
}

impl<S: FormSurface + ?Sized> Drop for LoadingGuard<'_, S> {
    fn drop(&mut self) {
        self.surface.set_loading(false);
    }
}

impl SignupWorkflow {
    pub fn new(store: Option<StoreClient>) -> Self {
        Self { store }
    }

    /// Handle one user-initiated submission: validate, insert, report back.
    ///
    /// A record only reaches the store once the email has passed validation,
    /// and the submit control stays disabled for the whole store call, which
    /// is what keeps a surface from firing two submissions at once.
    #[tracing::instrument(name = "Handling a signup submission", skip(self, surface))]
    pub async fn submit<S: FormSurface>(&self, surface: &S) -> SubmissionOutcome {
        let name = surface.name();
        let email = surface.email();
        let email = email.trim();

        surface.clear_message();

        if email.is_empty() {
            surface.show_message(messages::EMAIL_REQUIRED, MessageKind::Error);
            surface.focus(Field::Email);
            return SubmissionOutcome::Rejected;
        }
        let email = match SignupEmail::parse(email) {
            Ok(email) => email,
            Err(_) => {
                surface.show_message(messages::EMAIL_INVALID, MessageKind::Error);
                surface.focus(Field::Email);
                return SubmissionOutcome::Rejected;
            }
        };

        let store = match self.store.as_ref() {
            Some(store) => store,
            None => {
                tracing::error!(
                    "the signup store is not configured; check the store url and access key"
                );
                surface.show_message(messages::NOT_CONFIGURED, MessageKind::Error);
                return SubmissionOutcome::Unconfigured;
            }
        };

        // released on every path out of this function, failures included
        let _loading = LoadingGuard::engage(surface);

        let signup = NewSignup::new(email, SignupName::parse(&name));
        match store.insert_signup(&signup).await {
            Ok(StoreOutcome::Inserted(rows)) => {
                tracing::info!(rows = rows.len(), "new signup recorded");
                surface.show_message(messages::WELCOME, MessageKind::Success);
                surface.clear_fields();
                SubmissionOutcome::Succeeded
            }
            Ok(StoreOutcome::Duplicate) => {
                surface.show_message(messages::ALREADY_SIGNED_UP, MessageKind::Success);
                surface.clear_fields();
                SubmissionOutcome::AlreadySignedUp
            }
            Err(StoreError::Backend { code, message }) => {
                tracing::error!(%code, %message, "the store rejected the signup");
                let detail = if message.is_empty() {
                    messages::STORE_ERROR_FALLBACK
                } else {
                    message.as_str()
                };
                surface.show_message(&format!("Error: {}", detail), MessageKind::Error);
                // fields stay put so the visitor can try again
                SubmissionOutcome::Failed
            }
            Err(error) => {
                tracing::error!(error = ?error, "failed to submit the signup");
                surface.show_message(messages::TRY_AGAIN, MessageKind::Error);
                SubmissionOutcome::Failed
            }
        }
    }
}
