//! Contact form state machine.
//!
//! ```text
//! Idle ──submit──▶ (validate) ──errors──▶ Invalid
//!                      │
//!                      ├── no action ──▶ Sent (demo)
//!                      └── action ─────▶ Submitting ──▶ Sent | Failed
//! ```
//!
//! `Invalid`, `Sent` and `Failed` behave like `Idle`: the next submit starts a
//! fresh validation pass.

use crate::config::FormMessages;
use crate::state::{Command, State};
use crate::validation::{FieldConfig, FieldErrors, FormValidator};

/// Field names read from the form, in validation order.
pub const FIELD_NAMES: [&str; 4] = ["name", "email", "service", "message"];

const NAME_MIN_CHARS: usize = 2;
const MESSAGE_MIN_CHARS: usize = 10;

/// Trimmed values of the contact form fields.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactFields {
    /// Sender name
    pub name: String,
    /// Reply address
    pub email: String,
    /// Selected service
    pub service: String,
    /// Message body
    pub message: String,
}

impl ContactFields {
    /// Build from raw field values, trimming each.
    pub fn new(name: &str, email: &str, service: &str, message: &str) -> Self {
        Self {
            name: name.trim().to_string(),
            email: email.trim().to_string(),
            service: service.trim().to_string(),
            message: message.trim().to_string(),
        }
    }

    /// Build by looking up each field in [`FIELD_NAMES`]; missing fields are
    /// empty.
    pub fn from_lookup<F>(mut lookup: F) -> Self
    where
        F: FnMut(&str) -> Option<String>,
    {
        let mut get = |field: &str| lookup(field).unwrap_or_default();
        let name = get("name");
        let email = get("email");
        let service = get("service");
        let message = get("message");
        Self::new(&name, &email, &service, &message)
    }

    /// Value of a field by name; unknown names are empty.
    pub fn get(&self, field: &str) -> &str {
        match field {
            "name" => &self.name,
            "email" => &self.email,
            "service" => &self.service,
            "message" => &self.message,
            _ => "",
        }
    }
}

/// Result of a network submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The server answered with a 2xx status.
    Accepted,
    /// The server answered with any other status.
    Rejected {
        /// HTTP status code
        status: u16,
    },
    /// The request never completed.
    NetworkError(String),
}

impl SubmitOutcome {
    /// Classify an HTTP status code.
    pub fn from_status(status: u16) -> Self {
        if (200..300).contains(&status) {
            Self::Accepted
        } else {
            Self::Rejected { status }
        }
    }

    /// Check if the submission succeeded.
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Accepted)
    }
}

/// Phase of the contact form.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FormPhase {
    /// Nothing submitted yet
    #[default]
    Idle,
    /// Last submit failed validation
    Invalid,
    /// Request in flight
    Submitting,
    /// Last submission succeeded (network or demo)
    Sent,
    /// Last submission failed
    Failed,
}

/// Messages driving the contact form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContactMessage {
    /// The user submitted the form.
    Submit {
        /// Field values
        fields: ContactFields,
        /// The form's `action` attribute, if any
        action: Option<String>,
    },
    /// The network submission finished.
    Completed(SubmitOutcome),
}

/// Contact form validator and submission state.
#[derive(Debug)]
pub struct ContactForm {
    validator: FormValidator,
    messages: FormMessages,
    phase: FormPhase,
    errors: FieldErrors,
}

impl Default for ContactForm {
    fn default() -> Self {
        Self::new(FormMessages::default())
    }
}

impl ContactForm {
    /// Create a contact form using the given user-facing text.
    pub fn new(messages: FormMessages) -> Self {
        let validator = FormValidator::new()
            .field(
                "name",
                FieldConfig::new().min_length(NAME_MIN_CHARS, &messages.name_invalid),
            )
            .field("email", FieldConfig::new().email(&messages.email_invalid))
            .field(
                "service",
                FieldConfig::new().required(&messages.service_missing),
            )
            .field(
                "message",
                FieldConfig::new().min_length(MESSAGE_MIN_CHARS, &messages.message_too_short),
            );
        Self {
            validator,
            messages,
            phase: FormPhase::Idle,
            errors: FieldErrors::new(),
        }
    }

    /// Current phase.
    pub fn phase(&self) -> FormPhase {
        self.phase
    }

    /// Errors from the most recent validation pass.
    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    /// Check whether a request is in flight.
    pub fn is_busy(&self) -> bool {
        self.phase == FormPhase::Submitting
    }

    /// Validate field values without changing state.
    pub fn validate(&self, fields: &ContactFields) -> FieldErrors {
        self.validator.validate(|field| fields.get(field))
    }

    fn submit(&mut self, fields: &ContactFields, action: Option<String>) -> Command {
        if self.is_busy() {
            return Command::None;
        }

        let mut commands = vec![Command::SetStatus(String::new()), Command::ClearErrors];

        self.errors = self.validate(fields);
        if !self.errors.is_empty() {
            self.phase = FormPhase::Invalid;
            commands.extend(self.errors.iter().map(|(field, message)| Command::ShowError {
                field: field.to_string(),
                message: message.to_string(),
            }));
            return Command::Batch(commands);
        }

        match action.filter(|a| !a.trim().is_empty()) {
            Some(action) => {
                self.phase = FormPhase::Submitting;
                commands.push(Command::SetStatus(self.messages.sending.clone()));
                commands.push(Command::Submit {
                    action: action.trim().to_string(),
                });
            }
            None => {
                self.phase = FormPhase::Sent;
                commands.push(Command::SetStatus(self.messages.demo_sent.clone()));
                commands.push(Command::ResetForm);
            }
        }
        Command::Batch(commands)
    }

    fn complete(&mut self, outcome: &SubmitOutcome) -> Command {
        if !self.is_busy() {
            return Command::None;
        }
        match outcome {
            SubmitOutcome::Accepted => {
                self.phase = FormPhase::Sent;
                Command::batch([
                    Command::SetStatus(self.messages.sent.clone()),
                    Command::ResetForm,
                ])
            }
            SubmitOutcome::Rejected { .. } => {
                self.phase = FormPhase::Failed;
                Command::SetStatus(self.messages.rejected.clone())
            }
            SubmitOutcome::NetworkError(_) => {
                self.phase = FormPhase::Failed;
                Command::SetStatus(self.messages.network_error.clone())
            }
        }
    }
}

impl State for ContactForm {
    type Message = ContactMessage;

    fn update(&mut self, msg: Self::Message) -> Command {
        match msg {
            ContactMessage::Submit { fields, action } => self.submit(&fields, action),
            ContactMessage::Completed(outcome) => self.complete(&outcome),
        }
    }
}
