mod new_signup;
mod signup_email;
mod signup_name;

pub use new_signup::NewSignup;
pub use signup_email::SignupEmail;
pub use signup_name::SignupName;
