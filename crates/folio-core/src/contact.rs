//! Contact form submission policy.
//!
//! Submissions pass three gates before anything leaves the page:
//!
//! 1. **Honeypot**: a hidden field humans never fill. A non-empty value
//!    drops the submission silently, with no storage write and no relay call.
//! 2. **Cooldown**: one successful submission per window (60 s by
//!    default), tracked under [`keys::LAST_EMAIL_TIME`].
//! 3. **Validation**: name, email and message must be present.
//!
//! Delivery goes through a [`MailRelay`]. The cooldown timestamp is written
//! only after the relay reports success, so a failed send can be retried
//! immediately.

use std::future::Future;

use serde::{Deserialize, Serialize};

use crate::clock::Clock;
use crate::error::FolioResult;
use crate::storage::{keys, read_or_none, write_or_warn, KeyValueStore};

/// Raw form input
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
    /// Hidden field; must stay empty
    pub honeypot: String,
}

/// A validated message ready for the relay
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactMessage {
    pub from_name: String,
    pub from_email: String,
    pub message: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ContactField {
    Name,
    Email,
    Message,
}

impl ContactField {
    pub fn label(&self) -> &'static str {
        match self {
            ContactField::Name => "name",
            ContactField::Email => "email",
            ContactField::Message => "message",
        }
    }
}

impl ContactForm {
    /// Trim and check the visible fields.
    pub fn validate(&self) -> Result<ContactMessage, ContactField> {
        let name = self.name.trim();
        let email = self.email.trim();
        let message = self.message.trim();

        if name.is_empty() {
            return Err(ContactField::Name);
        }
        if !looks_like_email(email) {
            return Err(ContactField::Email);
        }
        if message.is_empty() {
            return Err(ContactField::Message);
        }
        Ok(ContactMessage {
            from_name: name.to_string(),
            from_email: email.to_string(),
            message: message.to_string(),
        })
    }

    pub fn honeypot_tripped(&self) -> bool {
        !self.honeypot.is_empty()
    }
}

/// `local@domain.tld` with no whitespace; the relay does the real check.
fn looks_like_email(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && domain.contains('.')
        && !domain.starts_with('.')
        && !domain.ends_with('.')
        && !email.chars().any(char::is_whitespace)
}

/// Hosted email delivery.
pub trait MailRelay {
    fn send(&self, message: &ContactMessage) -> impl Future<Output = FolioResult<()>>;
}

/// Outcome of one submission attempt
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    Sent,
    /// Dropped as automated; the user is told nothing
    HoneypotTripped,
    /// Inside the cooldown window
    Throttled { retry_after_secs: u64 },
    Invalid(ContactField),
    /// The relay failed; form and cooldown are left as they were
    Failed(String),
}

impl SubmitOutcome {
    /// Text for the blocking notification, `None` when nothing is shown
    pub fn user_message(&self) -> Option<String> {
        match self {
            SubmitOutcome::Sent => Some("Message sent successfully!".to_string()),
            SubmitOutcome::HoneypotTripped => None,
            SubmitOutcome::Throttled { retry_after_secs } => Some(format!(
                "Please wait {} seconds before sending another message.",
                retry_after_secs
            )),
            SubmitOutcome::Invalid(field) => {
                Some(format!("Please enter a valid {}.", field.label()))
            }
            SubmitOutcome::Failed(_) => {
                Some("Failed to send message. Please try again later.".to_string())
            }
        }
    }

    /// Whether the form inputs should be cleared
    pub fn should_reset_form(&self) -> bool {
        matches!(self, SubmitOutcome::Sent)
    }
}

/// Cooldown-enforcing submitter.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ContactPolicy {
    cooldown_ms: i64,
}

impl ContactPolicy {
    pub fn new(cooldown_ms: i64) -> Self {
        Self {
            cooldown_ms: cooldown_ms.max(0),
        }
    }

    /// Milliseconds left in the cooldown window, `None` when sending is allowed.
    pub fn remaining_ms(&self, store: &impl KeyValueStore, now_ms: i64) -> Option<i64> {
        let last = read_or_none(store, keys::LAST_EMAIL_TIME)?
            .trim()
            .parse::<i64>()
            .ok()?;
        let elapsed = now_ms - last;
        let remaining = (self.cooldown_ms - elapsed).min(self.cooldown_ms);
        (remaining > 0).then_some(remaining)
    }

    pub async fn submit(
        &self,
        form: &ContactForm,
        store: &impl KeyValueStore,
        relay: &impl MailRelay,
        clock: &impl Clock,
    ) -> SubmitOutcome {
        if form.honeypot_tripped() {
            tracing::warn!("Contact submission dropped: honeypot field filled");
            return SubmitOutcome::HoneypotTripped;
        }

        if let Some(remaining) = self.remaining_ms(store, clock.now_ms()) {
            let retry_after_secs = u64::try_from((remaining + 999) / 1000).unwrap_or(0);
            tracing::info!(retry_after_secs, "Contact submission throttled");
            return SubmitOutcome::Throttled { retry_after_secs };
        }

        let message = match form.validate() {
            Ok(message) => message,
            Err(field) => return SubmitOutcome::Invalid(field),
        };

        match relay.send(&message).await {
            Ok(()) => {
                let now = clock.now_ms();
                write_or_warn(store, keys::LAST_EMAIL_TIME, &now.to_string());
                tracing::info!("Contact message delivered");
                SubmitOutcome::Sent
            }
            Err(e) => {
                tracing::error!(error = %e, "Contact message delivery failed");
                SubmitOutcome::Failed(e.to_string())
            }
        }
    }
}

impl Default for ContactPolicy {
    fn default() -> Self {
        Self::new(60_000)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form() -> ContactForm {
        ContactForm {
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            message: "Hello there".to_string(),
            honeypot: String::new(),
        }
    }

    #[test]
    fn test_validate_trims() {
        let mut f = form();
        f.name = "  Ada  ".to_string();
        assert_eq!(f.validate().unwrap().from_name, "Ada");
    }

    #[test]
    fn test_validate_reports_first_bad_field() {
        let mut f = form();
        f.email = "not-an-address".to_string();
        assert_eq!(f.validate(), Err(ContactField::Email));

        f.name = " ".to_string();
        assert_eq!(f.validate(), Err(ContactField::Name));
    }

    #[test]
    fn test_email_shape() {
        assert!(looks_like_email("a@b.co"));
        assert!(!looks_like_email("a@b"));
        assert!(!looks_like_email("@b.co"));
        assert!(!looks_like_email("a b@c.co"));
        assert!(!looks_like_email("a@.co"));
    }

    #[test]
    fn test_user_messages() {
        assert!(SubmitOutcome::HoneypotTripped.user_message().is_none());
        assert_eq!(
            SubmitOutcome::Throttled { retry_after_secs: 42 }
                .user_message()
                .unwrap(),
            "Please wait 42 seconds before sending another message."
        );
        assert!(SubmitOutcome::Sent.should_reset_form());
        assert!(!SubmitOutcome::Failed("x".to_string()).should_reset_form());
    }

    #[test]
    fn test_remaining_ignores_garbage_timestamp() {
        let store = crate::storage::MemoryStore::with_entries([(keys::LAST_EMAIL_TIME, "soon")]);
        assert!(ContactPolicy::default().remaining_ms(&store, 0).is_none());
    }
}
