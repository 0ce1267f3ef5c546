//! Elm-style state updates for page behaviours with side effects.
//!
//! `State + Message → (State, Command)`: the state machine stays pure and
//! testable, and the browser runtime performs the returned [`Command`]s.
//!
//! # Examples
//!
//! ```
//! use sitekit_core::{Command, State};
//!
//! #[derive(Default)]
//! struct Banner {
//!     dismissed: bool,
//! }
//!
//! enum BannerMessage {
//!     Dismiss,
//! }
//!
//! impl State for Banner {
//!     type Message = BannerMessage;
//!
//!     fn update(&mut self, msg: Self::Message) -> Command {
//!         match msg {
//!             BannerMessage::Dismiss => {
//!                 self.dismissed = true;
//!                 Command::SetStatus("Banner hidden".to_string())
//!             }
//!         }
//!     }
//! }
//!
//! let mut banner = Banner::default();
//! let cmd = banner.update(BannerMessage::Dismiss);
//! assert!(banner.dismissed);
//! assert!(!cmd.is_none());
//! ```

/// Behaviour state driven by messages.
pub trait State {
    /// Message type for state updates
    type Message;

    /// Update state in response to a message.
    ///
    /// Returns the side effects the runtime should perform.
    fn update(&mut self, msg: Self::Message) -> Command;
}

/// Side effects requested by a state update.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Command {
    /// No command
    #[default]
    None,
    /// Execute multiple commands, in order
    Batch(Vec<Command>),
    /// Replace the status message text
    SetStatus(String),
    /// Empty every field error slot
    ClearErrors,
    /// Write an error message into one field's error slot
    ShowError {
        /// Field name
        field: String,
        /// Message text
        message: String,
    },
    /// POST the form data to its submission target
    Submit {
        /// Declared submission target
        action: String,
    },
    /// Reset the form fields to their initial values
    ResetForm,
}

impl Command {
    /// Create a batch of commands.
    pub fn batch(commands: impl IntoIterator<Item = Self>) -> Self {
        Self::Batch(commands.into_iter().collect())
    }

    /// Check if this is the none command.
    #[must_use]
    pub const fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }

    /// Flatten nested batches into a list of leaf commands, dropping `None`.
    #[must_use]
    pub fn flatten(self) -> Vec<Self> {
        let mut out = Vec::new();
        self.flatten_into(&mut out);
        out
    }

    fn flatten_into(self, out: &mut Vec<Self>) {
        match self {
            Self::None => {}
            Self::Batch(cmds) => {
                for cmd in cmds {
                    cmd.flatten_into(out);
                }
            }
            other => out.push(other),
        }
    }
}
