//! Contact form state machine: `Editing → Submitting → Submitted`.
//!
//! Submission is simulated with a fixed delay; there is no failure state
//! and no path back to `Editing` short of remounting the section. The real
//! required-field guard is the browser's; the machine mirrors it so the
//! transition stays total and testable.

use std::time::Duration;

/// How long the simulated send takes before the success panel appears.
pub const SUBMIT_DELAY: Duration = Duration::from_millis(1800);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Name,
    Email,
    Subject,
    Message,
}

impl Field {
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Name => "Your Name",
            Self::Email => "Email Address",
            Self::Subject => "Subject",
            Self::Message => "Your Message",
        }
    }

    #[must_use]
    pub const fn input_id(self) -> &'static str {
        match self {
            Self::Name => "contact-name",
            Self::Email => "contact-email",
            Self::Subject => "contact-subject",
            Self::Message => "contact-message",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Editing,
    Submitting,
    /// Terminal: the form is replaced by the confirmation panel.
    Submitted,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    name: String,
    email: String,
    subject: String,
    message: String,
    focused: Option<Field>,
    phase: Phase,
}

impl ContactForm {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn field(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Subject => &self.subject,
            Field::Message => &self.message,
        }
    }

    /// Field edits only apply while editing; the inputs are gone once the
    /// submission starts.
    pub fn set_field(&mut self, field: Field, value: String) {
        if self.phase != Phase::Editing {
            return;
        }
        match field {
            Field::Name => self.name = value,
            Field::Email => self.email = value,
            Field::Subject => self.subject = value,
            Field::Message => self.message = value,
        }
    }

    #[must_use]
    pub fn focused(&self) -> Option<Field> {
        self.focused
    }

    pub fn focus(&mut self, field: Field) {
        self.focused = Some(field);
    }

    pub fn blur(&mut self) {
        self.focused = None;
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    #[must_use]
    pub fn is_submitting(&self) -> bool {
        self.phase == Phase::Submitting
    }

    #[must_use]
    pub fn is_submitted(&self) -> bool {
        self.phase == Phase::Submitted
    }

    /// All required fields carry a non-blank value.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        [&self.name, &self.email, &self.subject, &self.message]
            .iter()
            .all(|v| !v.trim().is_empty())
    }

    /// `Editing → Submitting`. Refused outside `Editing` or with a blank
    /// required field; returns whether the submission started, so the
    /// caller knows to schedule [`ContactForm::finish_submission`] after
    /// [`SUBMIT_DELAY`].
    pub fn submit(&mut self) -> bool {
        if self.phase != Phase::Editing || !self.is_complete() {
            return false;
        }
        self.phase = Phase::Submitting;
        self.focused = None;
        true
    }

    /// `Submitting → Submitted`; a no-op from any other phase.
    pub fn finish_submission(&mut self) {
        if self.phase == Phase::Submitting {
            self.phase = Phase::Submitted;
        }
    }
}
