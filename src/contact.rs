use std::collections::BTreeMap;
use std::fmt;
use std::sync::{Arc, LazyLock};
use std::time::Duration;

use regex::Regex;
use thiserror::Error;

/// Deliberately loose: something@something.something, no whitespace or extra `@`.
static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid"));

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContactConfig {
    /// How long a submission stays "sending" before it is handed to the transport.
    pub submit_delay: Duration,
    /// How long the success notice stays up.
    pub success_window: Duration,
}

impl Default for ContactConfig {
    fn default() -> Self {
        Self {
            submit_delay: Duration::from_millis(1500),
            success_window: Duration::from_millis(5000),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    Name,
    Email,
    Message,
}

impl Field {
    pub const ALL: [Field; 3] = [Field::Name, Field::Email, Field::Message];

    pub fn as_str(self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Message => "message",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldError {
    #[error("Name is required")]
    NameRequired,
    #[error("Email is required")]
    EmailRequired,
    #[error("Email is invalid")]
    EmailInvalid,
    #[error("Message is required")]
    MessageRequired,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors(BTreeMap<Field, FieldError>);

impl FieldErrors {
    pub fn get(&self, field: Field) -> Option<FieldError> {
        self.0.get(&field).copied()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    fn insert(&mut self, field: Field, error: FieldError) {
        self.0.insert(field, error);
    }

    fn clear(&mut self, field: Field) {
        self.0.remove(&field);
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts = self
            .0
            .iter()
            .map(|(field, err)| format!("{field}: {err}"))
            .collect::<Vec<_>>();
        f.write_str(&parts.join(", "))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactMessage {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Message => &self.message,
        }
    }

    fn set(&mut self, field: Field, value: String) {
        match field {
            Field::Name => self.name = value,
            Field::Email => self.email = value,
            Field::Message => self.message = value,
        }
    }

    pub fn validate(&self) -> FieldErrors {
        let mut errors = FieldErrors::default();
        if self.name.trim().is_empty() {
            errors.insert(Field::Name, FieldError::NameRequired);
        }
        if self.email.trim().is_empty() {
            errors.insert(Field::Email, FieldError::EmailRequired);
        } else if !is_valid_email(&self.email) {
            errors.insert(Field::Email, FieldError::EmailInvalid);
        }
        if self.message.trim().is_empty() {
            errors.insert(Field::Message, FieldError::MessageRequired);
        }
        errors
    }
}

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TransportError {
    #[error("couldn't deliver message: {0}")]
    Delivery(String),
}

/// The step that actually ships a contact message somewhere.
pub trait ContactTransport: Send + Sync {
    fn send(&self, message: &ContactMessage) -> Result<(), TransportError>;
}

/// Accepts every message without sending it anywhere.
#[derive(Debug, Clone, Copy, Default)]
pub struct SimulatedTransport;

impl ContactTransport for SimulatedTransport {
    fn send(&self, message: &ContactMessage) -> Result<(), TransportError> {
        log::info!(
            "simulated contact message from {} ({} chars)",
            message.email,
            message.message.chars().count()
        );
        Ok(())
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ContactError {
    #[error("form has errors: {0}")]
    Invalid(FieldErrors),
    #[error("a message is already being sent")]
    InFlight,
}

/// Identifies one success notice so an old timer can't hide a newer one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SuccessTicket(u64);

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Delivery {
    Delivered {
        ticket: SuccessTicket,
        hide_after: Duration,
    },
    Failed(TransportError),
    /// Nothing was being sent.
    Idle,
}

/// State machine behind the contact form.
///
/// `submit` validates and enters the sending phase, returning how long to wait
/// before `deliver`. A successful delivery clears the fields and shows the
/// success notice until `dismiss_success` is called with the matching ticket.
#[derive(Clone)]
pub struct ContactForm {
    fields: ContactMessage,
    errors: FieldErrors,
    submitting: bool,
    submit_success: bool,
    delivery_error: Option<String>,
    pending: Option<ContactMessage>,
    generation: u64,
    config: ContactConfig,
    transport: Arc<dyn ContactTransport>,
}

impl fmt::Debug for ContactForm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ContactForm")
            .field("fields", &self.fields)
            .field("errors", &self.errors)
            .field("submitting", &self.submitting)
            .field("submit_success", &self.submit_success)
            .field("delivery_error", &self.delivery_error)
            .finish_non_exhaustive()
    }
}

impl Default for ContactForm {
    fn default() -> Self {
        Self::new(Arc::new(SimulatedTransport), ContactConfig::default())
    }
}

impl ContactForm {
    pub fn new(transport: Arc<dyn ContactTransport>, config: ContactConfig) -> Self {
        Self {
            fields: ContactMessage::default(),
            errors: FieldErrors::default(),
            submitting: false,
            submit_success: false,
            delivery_error: None,
            pending: None,
            generation: 0,
            config,
            transport,
        }
    }

    pub fn config(&self) -> ContactConfig {
        self.config
    }

    pub fn field(&self, field: Field) -> &str {
        self.fields.get(field)
    }

    /// Updates one field and drops that field's error, leaving the others.
    pub fn set_field(&mut self, field: Field, value: impl Into<String>) {
        self.fields.set(field, value.into());
        self.errors.clear(field);
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn error(&self, field: Field) -> Option<FieldError> {
        self.errors.get(field)
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    pub fn submit_success(&self) -> bool {
        self.submit_success
    }

    pub fn delivery_error(&self) -> Option<&str> {
        self.delivery_error.as_deref()
    }

    /// Validates every field at once. On success the form is sending and the
    /// returned delay says when to call [`ContactForm::deliver`].
    pub fn submit(&mut self) -> Result<Duration, ContactError> {
        if self.submitting {
            return Err(ContactError::InFlight);
        }
        self.delivery_error = None;
        self.errors = self.fields.validate();
        if !self.errors.is_empty() {
            return Err(ContactError::Invalid(self.errors.clone()));
        }
        self.submitting = true;
        self.pending = Some(self.fields.clone());
        Ok(self.config.submit_delay)
    }

    /// Hands the submitted message to the transport.
    pub fn deliver(&mut self) -> Delivery {
        if !self.submitting {
            return Delivery::Idle;
        }
        self.submitting = false;
        let Some(message) = self.pending.take() else {
            return Delivery::Idle;
        };
        match self.transport.send(&message) {
            Ok(()) => {
                self.fields = ContactMessage::default();
                self.submit_success = true;
                self.generation += 1;
                Delivery::Delivered {
                    ticket: SuccessTicket(self.generation),
                    hide_after: self.config.success_window,
                }
            }
            Err(e) => {
                log::warn!("contact message not delivered: {e}");
                self.delivery_error = Some(e.to_string());
                Delivery::Failed(e)
            }
        }
    }

    /// Hides the success notice if `ticket` belongs to the latest delivery.
    pub fn dismiss_success(&mut self, ticket: SuccessTicket) -> bool {
        if self.submit_success && ticket.0 == self.generation {
            self.submit_success = false;
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    #[derive(Default)]
    struct RecordingTransport {
        sent: Mutex<Vec<ContactMessage>>,
    }

    impl ContactTransport for RecordingTransport {
        fn send(&self, message: &ContactMessage) -> Result<(), TransportError> {
            self.sent.lock().unwrap().push(message.clone());
            Ok(())
        }
    }

    struct FailingTransport;

    impl ContactTransport for FailingTransport {
        fn send(&self, _message: &ContactMessage) -> Result<(), TransportError> {
            Err(TransportError::Delivery("offline".to_string()))
        }
    }

    fn filled(form: &mut ContactForm) {
        form.set_field(Field::Name, "Ada");
        form.set_field(Field::Email, "ada@example.com");
        form.set_field(Field::Message, "Hello there");
    }

    #[test]
    fn test_email_pattern() {
        assert!(is_valid_email("a@b.co"));
        assert!(is_valid_email("first.last+tag@sub.example.org"));
        // permissive on purpose
        assert!(is_valid_email("a@b.c.d"));
        assert!(is_valid_email("!!@??.##"));
        assert!(!is_valid_email("foo"));
        assert!(!is_valid_email("foo@bar"));
        assert!(!is_valid_email("a b@c.d"));
        assert!(!is_valid_email("a@@b.co"));
        assert!(!is_valid_email(" a@b.co"));
    }

    #[test]
    fn test_email_errors() {
        let mut msg = ContactMessage::default();
        assert_eq!(msg.validate().get(Field::Email), Some(FieldError::EmailRequired));
        msg.email = "   ".to_string();
        assert_eq!(msg.validate().get(Field::Email), Some(FieldError::EmailRequired));
        msg.email = "foo".to_string();
        assert_eq!(msg.validate().get(Field::Email), Some(FieldError::EmailInvalid));
        msg.email = "a@b.co".to_string();
        assert_eq!(msg.validate().get(Field::Email), None);
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(FieldError::NameRequired.to_string(), "Name is required");
        assert_eq!(FieldError::EmailRequired.to_string(), "Email is required");
        assert_eq!(FieldError::EmailInvalid.to_string(), "Email is invalid");
        assert_eq!(FieldError::MessageRequired.to_string(), "Message is required");
    }

    #[test]
    fn test_whitespace_only_fields_are_required() {
        let mut form = ContactForm::default();
        form.set_field(Field::Name, "  \t");
        form.set_field(Field::Email, "a@b.co");
        form.set_field(Field::Message, "\n");
        let err = form.submit().unwrap_err();
        assert!(matches!(err, ContactError::Invalid(_)));
        assert_eq!(form.error(Field::Name), Some(FieldError::NameRequired));
        assert_eq!(form.error(Field::Message), Some(FieldError::MessageRequired));
        assert_eq!(form.error(Field::Email), None);
        assert!(!form.is_submitting());
    }

    #[test]
    fn test_valid_submit_goes_straight_to_submitting() {
        let mut form = ContactForm::default();
        filled(&mut form);
        assert_eq!(form.submit(), Ok(Duration::from_millis(1500)));
        assert!(form.is_submitting());
        assert!(form.errors().is_empty());
    }

    #[test]
    fn test_editing_clears_only_that_error() {
        let mut form = ContactForm::default();
        form.set_field(Field::Message, "hi");
        assert!(form.submit().is_err());
        assert_eq!(form.errors().len(), 2);

        form.set_field(Field::Name, "A");
        assert_eq!(form.error(Field::Name), None);
        assert_eq!(form.error(Field::Email), Some(FieldError::EmailRequired));
    }

    #[test]
    fn test_submit_while_submitting_is_rejected() {
        let mut form = ContactForm::default();
        filled(&mut form);
        form.submit().unwrap();
        assert_eq!(form.submit(), Err(ContactError::InFlight));
        assert!(form.is_submitting());
    }

    #[test]
    fn test_end_to_end_submission() {
        let transport = Arc::new(RecordingTransport::default());
        let config = ContactConfig {
            submit_delay: Duration::from_millis(10),
            success_window: Duration::from_millis(20),
        };
        let mut form = ContactForm::new(transport.clone(), config);
        filled(&mut form);

        assert_eq!(form.submit(), Ok(Duration::from_millis(10)));
        assert!(form.is_submitting());
        assert!(!form.submit_success());

        let ticket = match form.deliver() {
            Delivery::Delivered { ticket, hide_after } => {
                assert_eq!(hide_after, Duration::from_millis(20));
                ticket
            }
            other => panic!("expected delivery, got {other:?}"),
        };
        assert!(!form.is_submitting());
        assert!(form.submit_success());
        for field in Field::ALL {
            assert_eq!(form.field(field), "");
        }

        let sent = transport.sent.lock().unwrap().clone();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].name, "Ada");

        assert!(form.dismiss_success(ticket));
        assert!(!form.submit_success());
        assert!(form.errors().is_empty());
    }

    #[test]
    fn test_message_is_captured_at_submit() {
        let transport = Arc::new(RecordingTransport::default());
        let mut form = ContactForm::new(transport.clone(), ContactConfig::default());
        filled(&mut form);
        form.submit().unwrap();
        form.set_field(Field::Message, "changed my mind");
        form.deliver();
        assert_eq!(transport.sent.lock().unwrap()[0].message, "Hello there");
    }

    #[test]
    fn test_deliver_without_submit_is_idle() {
        let mut form = ContactForm::default();
        assert_eq!(form.deliver(), Delivery::Idle);
        assert!(!form.submit_success());
    }

    #[test]
    fn test_stale_ticket_keeps_newer_success() {
        let mut form = ContactForm::default();
        filled(&mut form);
        form.submit().unwrap();
        let Delivery::Delivered { ticket: first, .. } = form.deliver() else {
            panic!("first delivery failed");
        };

        filled(&mut form);
        form.submit().unwrap();
        let Delivery::Delivered { ticket: second, .. } = form.deliver() else {
            panic!("second delivery failed");
        };

        assert!(!form.dismiss_success(first));
        assert!(form.submit_success());
        assert!(form.dismiss_success(second));
        assert!(!form.submit_success());
    }

    #[test]
    fn test_transport_failure_keeps_fields() {
        let mut form = ContactForm::new(Arc::new(FailingTransport), ContactConfig::default());
        filled(&mut form);
        form.submit().unwrap();
        assert!(matches!(form.deliver(), Delivery::Failed(_)));
        assert!(!form.is_submitting());
        assert!(!form.submit_success());
        assert_eq!(form.field(Field::Name), "Ada");
        assert!(form.delivery_error().is_some());

        // next attempt clears the old failure
        form.submit().unwrap();
        assert_eq!(form.delivery_error(), None);
    }
}
