//! # Accounts
//!
//! Sign-up and passwordless login.
//!
//! ## Flows
//! ```text
//! sign_up(email)                        login(email)
//!      │                                     │
//!      ▼                                     ▼
//! validate_email ── invalid ──► false   codes.generate_code()  e.g. 482913
//!      │                                     │
//!      ▼ valid                               ▼
//! send_email(email, "Welcome aboard!")  send_email(email, "482913")
//!      │
//!      ▼
//!    true
//! ```
//!
//! Nothing is sent for an address that fails validation.

use std::sync::Arc;
use storefront_core::validation::validate_email;
use tracing::{debug, info};

use crate::collaborators::{CodeGenerator, EmailSender};

/// Subject of the message sent after a successful sign-up.
pub const WELCOME_SUBJECT: &str = "Welcome aboard!";

#[derive(Clone)]
pub struct Accounts {
    email: Arc<dyn EmailSender>,
    codes: Arc<dyn CodeGenerator>,
}

impl Accounts {
    pub fn new(email: Arc<dyn EmailSender>, codes: Arc<dyn CodeGenerator>) -> Self {
        Accounts { email, codes }
    }

    /// Registers `email`. Returns `false` without sending anything when the
    /// address is malformed. The welcome message goes to the trimmed address.
    pub async fn sign_up(&self, email: &str) -> bool {
        let email = match validate_email(email) {
            Ok(address) => address,
            Err(e) => {
                debug!(error = %e, "Rejected sign-up");
                return false;
            }
        };

        self.email.send_email(email, WELCOME_SUBJECT);
        info!(%email, "Sent welcome email");
        true
    }

    /// Emails a fresh one-time login code to `email`.
    pub async fn login(&self, email: &str) {
        let code = self.codes.generate_code();
        self.email.send_email(email, &code.to_string());
        info!(%email, "Sent one-time login code");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collaborators::{MockCodeGenerator, MockEmailSender};
    use mockall::predicate::eq;

    fn accounts(email: MockEmailSender) -> Accounts {
        Accounts::new(Arc::new(email), Arc::new(MockCodeGenerator::new()))
    }

    #[tokio::test]
    async fn test_sign_up_rejects_invalid_email() {
        let mut email = MockEmailSender::new();
        email.expect_send_email().never();

        assert!(!accounts(email).sign_up("a").await);
    }

    #[tokio::test]
    async fn test_sign_up_accepts_valid_email() {
        let mut email = MockEmailSender::new();
        email.expect_send_email().return_const(());

        assert!(accounts(email).sign_up("example@gmail.com").await);
    }

    #[tokio::test]
    async fn test_sign_up_sends_welcome_email() {
        let mut email = MockEmailSender::new();
        email
            .expect_send_email()
            .withf(|recipient, subject| {
                recipient == "example@gmail.com" && subject.to_lowercase().contains("welcome")
            })
            .times(1)
            .return_const(());

        accounts(email).sign_up("example@gmail.com").await;
    }

    #[tokio::test]
    async fn test_sign_up_sends_to_trimmed_address() {
        let mut email = MockEmailSender::new();
        email
            .expect_send_email()
            .withf(|recipient, _| recipient == "example@gmail.com")
            .times(1)
            .return_const(());

        assert!(accounts(email).sign_up("  example@gmail.com  ").await);
    }

    #[tokio::test]
    async fn test_login_emails_generated_code() {
        let mut codes = MockCodeGenerator::new();
        codes.expect_generate_code().times(1).return_const(482913u32);

        let mut email = MockEmailSender::new();
        email
            .expect_send_email()
            .with(eq("example@domain.com"), eq("482913"))
            .times(1)
            .return_const(());

        Accounts::new(Arc::new(email), Arc::new(codes))
            .login("example@domain.com")
            .await;
    }
}
