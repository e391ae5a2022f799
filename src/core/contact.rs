//! Contact form model and submission flow
//!
//! The form lives only in memory for the current page visit. Submission is
//! simulated: `Idle -> Submitting` on submit, `Submitting -> Submitted`
//! after a fixed delay. `Submitted` is terminal.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Fixed delay of the simulated submission
pub const SIMULATED_DELAY_MS: u64 = 1500;

pub const SUBMIT_LABEL: &str = "Send Message";
pub const SUBMITTING_LABEL: &str = "Sending...";

pub const CONFIRMATION_TITLE: &str = "Message Sent Successfully!";
pub const CONFIRMATION_BODY: &str = "Thank you for your inquiry. We'll review your message and get back to you within one business day.";

/// What the visitor wants to talk about
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, derive_more::Display,
)]
#[serde(rename_all = "lowercase")]
pub enum Interest {
    #[default]
    #[display("Scheduling a demo")]
    Demo,
    #[display("Pricing information")]
    Pricing,
    #[display("Feature questions")]
    Features,
    #[display("Other inquiry")]
    Other,
}

impl Interest {
    pub const ALL: [Interest; 4] = [
        Interest::Demo,
        Interest::Pricing,
        Interest::Features,
        Interest::Other,
    ];

    /// `<option>` value
    pub fn as_str(&self) -> &'static str {
        match self {
            Interest::Demo => "demo",
            Interest::Pricing => "pricing",
            Interest::Features => "features",
            Interest::Other => "other",
        }
    }

    /// Parse an `<option>` value, falling back to the default
    pub fn from_value(value: &str) -> Self {
        Self::ALL
            .into_iter()
            .find(|i| i.as_str() == value)
            .unwrap_or_default()
    }
}

/// Form field identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display)]
pub enum FormField {
    #[display("Name")]
    Name,
    #[display("Email")]
    Email,
    #[display("Company")]
    Company,
    #[display("Phone")]
    Phone,
    #[display("Message")]
    Message,
    #[display("I'm interested in")]
    Interest,
}

impl FormField {
    pub fn is_required(&self) -> bool {
        matches!(self, FormField::Name | FormField::Email | FormField::Message)
    }

    /// HTML `name` attribute
    pub fn name(&self) -> &'static str {
        match self {
            FormField::Name => "name",
            FormField::Email => "email",
            FormField::Company => "company",
            FormField::Phone => "phone",
            FormField::Message => "message",
            FormField::Interest => "interest",
        }
    }
}

/// Validation failures shown inline under the form
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ContactError {
    #[error("{0} is required")]
    MissingField(FormField),

    #[error("Please enter a valid email address")]
    InvalidEmail,
}

impl ContactError {
    pub fn field(&self) -> FormField {
        match self {
            ContactError::MissingField(field) => *field,
            ContactError::InvalidEmail => FormField::Email,
        }
    }
}

/// In-memory form values
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub company: String,
    pub phone: String,
    pub message: String,
    pub interest: Interest,
}

impl ContactForm {
    pub fn get(&self, field: FormField) -> String {
        match field {
            FormField::Name => self.name.clone(),
            FormField::Email => self.email.clone(),
            FormField::Company => self.company.clone(),
            FormField::Phone => self.phone.clone(),
            FormField::Message => self.message.clone(),
            FormField::Interest => self.interest.as_str().to_string(),
        }
    }

    pub fn set(&mut self, field: FormField, value: impl Into<String>) {
        let value = value.into();
        match field {
            FormField::Name => self.name = value,
            FormField::Email => self.email = value,
            FormField::Company => self.company = value,
            FormField::Phone => self.phone = value,
            FormField::Message => self.message = value,
            FormField::Interest => self.interest = Interest::from_value(&value),
        }
    }

    /// Check required fields, in form order
    pub fn validate(&self) -> Result<(), ContactError> {
        for field in [FormField::Name, FormField::Email, FormField::Message] {
            if self.get(field).trim().is_empty() {
                return Err(ContactError::MissingField(field));
            }
        }

        if !is_plausible_email(self.email.trim()) {
            return Err(ContactError::InvalidEmail);
        }

        Ok(())
    }
}

/// Cheap shape check, mirroring `type="email"` in the browser
fn is_plausible_email(email: &str) -> bool {
    match email.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty() && !domain.is_empty() && !domain.contains('@') && !email.contains(' ')
        }
        None => false,
    }
}

/// Where the form is in its lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormPhase {
    #[default]
    Idle,
    Submitting,
    Submitted,
}

/// Submission state machine
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ContactFlow {
    phase: FormPhase,
}

impl ContactFlow {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> FormPhase {
        self.phase
    }

    /// Begin submitting `form`.
    ///
    /// Only valid forms leave `Idle`. Submitting twice, or after completion,
    /// is a no-op that reports `Ok(false)`.
    pub fn submit(&mut self, form: &ContactForm) -> Result<bool, ContactError> {
        if self.phase != FormPhase::Idle {
            return Ok(false);
        }
        form.validate()?;
        self.phase = FormPhase::Submitting;
        Ok(true)
    }

    /// Finish the in-flight submission
    pub fn complete(&mut self) {
        if self.phase == FormPhase::Submitting {
            self.phase = FormPhase::Submitted;
        }
    }

    pub fn is_submitting(&self) -> bool {
        self.phase == FormPhase::Submitting
    }

    pub fn button_label(&self) -> &'static str {
        if self.is_submitting() {
            SUBMITTING_LABEL
        } else {
            SUBMIT_LABEL
        }
    }

    /// Confirmation text, available only once submitted
    pub fn confirmation(&self) -> Option<&'static str> {
        (self.phase == FormPhase::Submitted).then_some(CONFIRMATION_BODY)
    }
}

/// Whether a floating label sits above its field
pub fn is_floated(focused: bool, value: &str) -> bool {
    focused || !value.is_empty()
}

/// Receiver of contact submissions.
///
/// The site ships only [`SimulatedSink`]; a real backend would implement
/// this seam with its own error handling.
pub trait ContactSink {
    /// Time the submission takes before it is considered delivered
    fn delay(&self) -> Duration;

    /// Accept a validated form
    fn accept(&self, form: &ContactForm);
}

/// Pretends to deliver after a fixed delay. Cannot fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SimulatedSink {
    delay: Duration,
}

impl Default for SimulatedSink {
    fn default() -> Self {
        Self::with_delay_ms(SIMULATED_DELAY_MS)
    }
}

impl SimulatedSink {
    pub fn with_delay_ms(delay_ms: u64) -> Self {
        Self {
            delay: Duration::from_millis(delay_ms),
        }
    }
}

impl ContactSink for SimulatedSink {
    fn delay(&self) -> Duration {
        self.delay
    }

    fn accept(&self, _form: &ContactForm) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> ContactForm {
        ContactForm {
            name: "Jane Builder".to_string(),
            email: "jane@example.com".to_string(),
            message: "We run six crews in Naples.".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_interest_round_trip_values() {
        for interest in Interest::ALL {
            assert_eq!(Interest::from_value(interest.as_str()), interest);
        }
        assert_eq!(Interest::from_value("bogus"), Interest::Demo);
    }

    #[test]
    fn test_interest_labels() {
        assert_eq!(Interest::Demo.to_string(), "Scheduling a demo");
        assert_eq!(Interest::Other.to_string(), "Other inquiry");
    }

    #[test]
    fn test_set_and_get_fields() {
        let mut form = ContactForm::default();
        form.set(FormField::Company, "Gulf Coast Homes");
        form.set(FormField::Phone, "(239) 555-0100");
        form.set(FormField::Interest, "pricing");

        assert_eq!(form.company, "Gulf Coast Homes");
        assert_eq!(form.get(FormField::Phone), "(239) 555-0100");
        assert_eq!(form.interest, Interest::Pricing);
    }

    #[test]
    fn test_validate_required_fields() {
        assert_eq!(
            ContactForm::default().validate(),
            Err(ContactError::MissingField(FormField::Name))
        );

        let mut form = filled();
        form.message = "   ".to_string();
        assert_eq!(
            form.validate(),
            Err(ContactError::MissingField(FormField::Message))
        );
    }

    #[test]
    fn test_optional_fields_not_required() {
        let form = filled();
        assert!(form.company.is_empty());
        assert!(form.phone.is_empty());
        assert!(form.validate().is_ok());
    }

    #[test]
    fn test_validate_email_shape() {
        for bad in ["jane", "@example.com", "jane@", "ja ne@example.com", "a@b@c"] {
            let mut form = filled();
            form.email = bad.to_string();
            assert_eq!(form.validate(), Err(ContactError::InvalidEmail), "{bad}");
        }
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            ContactError::MissingField(FormField::Email).to_string(),
            "Email is required"
        );
        assert_eq!(ContactError::InvalidEmail.field(), FormField::Email);
    }

    #[test]
    fn test_flow_happy_path() {
        let mut flow = ContactFlow::new();
        assert_eq!(flow.phase(), FormPhase::Idle);
        assert_eq!(flow.button_label(), SUBMIT_LABEL);
        assert!(flow.confirmation().is_none());

        assert_eq!(flow.submit(&filled()), Ok(true));
        assert_eq!(flow.phase(), FormPhase::Submitting);
        assert_eq!(flow.button_label(), SUBMITTING_LABEL);
        assert!(flow.confirmation().is_none());

        flow.complete();
        assert_eq!(flow.phase(), FormPhase::Submitted);
        assert_eq!(flow.confirmation(), Some(CONFIRMATION_BODY));
    }

    #[test]
    fn test_invalid_form_stays_idle() {
        let mut flow = ContactFlow::new();
        let result = flow.submit(&ContactForm::default());
        assert!(result.is_err());
        assert_eq!(flow.phase(), FormPhase::Idle);
    }

    #[test]
    fn test_double_submit_is_ignored() {
        let mut flow = ContactFlow::new();
        assert_eq!(flow.submit(&filled()), Ok(true));
        assert_eq!(flow.submit(&filled()), Ok(false));
        assert_eq!(flow.phase(), FormPhase::Submitting);
    }

    #[test]
    fn test_submitted_is_terminal() {
        let mut flow = ContactFlow::new();
        flow.submit(&filled()).unwrap();
        flow.complete();

        assert_eq!(flow.submit(&filled()), Ok(false));
        flow.complete();
        assert_eq!(flow.phase(), FormPhase::Submitted);
    }

    #[test]
    fn test_complete_from_idle_is_noop() {
        let mut flow = ContactFlow::new();
        flow.complete();
        assert_eq!(flow.phase(), FormPhase::Idle);
    }

    #[test]
    fn test_floating_label() {
        assert!(!is_floated(false, ""));
        assert!(is_floated(true, ""));
        assert!(is_floated(false, "x"));
    }

    #[test]
    fn test_simulated_sink_delay() {
        assert_eq!(SimulatedSink::default().delay(), Duration::from_millis(1500));
        assert_eq!(
            SimulatedSink::with_delay_ms(10).delay(),
            Duration::from_millis(10)
        );
    }

    #[test]
    fn test_form_serializes_interest_lowercase() {
        let json = serde_json::to_value(filled()).unwrap();
        assert_eq!(json["interest"], "demo");
        assert_eq!(json["name"], "Jane Builder");
    }
}
