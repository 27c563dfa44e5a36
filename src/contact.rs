//! Contact form draft, submission state machine and the email relay contract.

use serde::Serialize;
use serde_json::json;
use thiserror::Error;

use crate::config::{RelayConfig, SiteConfig};
use crate::log::{log_event, LogLevel};

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Field {
    Name,
    Email,
    Title,
    Message,
}

impl Field {
    pub const ALL: [Field; 4] = [Self::Name, Self::Email, Self::Title, Self::Message];

    /// Matches the form control's `name` attribute and the template parameter.
    pub fn name(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Title => "title",
            Self::Message => "message",
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct SubjectOption {
    pub value: &'static str,
    pub label: &'static str,
}

pub const SUBJECT_OPTIONS: &[SubjectOption] = &[
    SubjectOption {
        value: "Project collaboration",
        label: "Project collaboration",
    },
    SubjectOption {
        value: "Internship / job opportunity",
        label: "Internship / job opportunity",
    },
    SubjectOption {
        value: "Freelance opportunity / Custom work",
        label: "Freelance opportunity / Custom work",
    },
    SubjectOption {
        value: "Event / speaker invite",
        label: "Event / speaker invite",
    },
    SubjectOption {
        value: "General inquiry",
        label: "General inquiry",
    },
];

#[derive(Clone, PartialEq, Eq, Debug, Default, Serialize)]
pub struct ContactDraft {
    pub name: String,
    pub email: String,
    pub title: String,
    pub message: String,
}

impl ContactDraft {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Title => &self.title,
            Field::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: Field, value: String) {
        match field {
            Field::Name => self.name = value,
            Field::Email => self.email = value,
            Field::Title => self.title = value,
            Field::Message => self.message = value,
        }
    }

    /// Presence only, like the form's `required` attributes.
    pub fn first_missing(&self) -> Option<Field> {
        Field::ALL
            .into_iter()
            .find(|field| self.get(*field).is_empty())
    }

    pub fn is_empty(&self) -> bool {
        Field::ALL.iter().all(|field| self.get(*field).is_empty())
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum SubmissionStatus {
    Idle,
    Pending,
    Success,
    Error,
}

impl SubmissionStatus {
    /// Success and Error fall back to Idle after the reset delay.
    pub fn is_terminal(self) -> bool {
        matches!(self, Self::Success | Self::Error)
    }

    /// Delay before the status falls back to Idle; `None` means nothing is scheduled.
    pub fn reset_after_ms(self, config: &SiteConfig) -> Option<u32> {
        self.is_terminal().then_some(config.status_reset_ms)
    }

    pub fn button_label(self) -> &'static str {
        match self {
            Self::Idle => "Send Message",
            Self::Pending => "Sending...",
            Self::Success => "Message Sent Successfully!",
            Self::Error => "Failed to Send. Try Again.",
        }
    }

    pub fn notice(self) -> Option<&'static str> {
        match self {
            Self::Success => Some("Thank you for your message! I'll get back to you soon."),
            Self::Error => {
                Some("Something went wrong. Please try again later or email me directly.")
            }
            Self::Idle | Self::Pending => None,
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SubmitBlocked {
    #[error("a submission is already in flight")]
    InFlight,
    #[error("the previous message was just sent")]
    JustSent,
    #[error("the {} field is required", .0.name())]
    MissingField(Field),
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RelayError {
    #[error("relay is not configured: missing {0}")]
    NotConfigured(&'static str),
    #[error("relay request failed: {0}")]
    Transport(String),
    #[error("relay rejected the message (status {status}): {body}")]
    Rejected { status: u16, body: String },
}

/// Body of an EmailJS `email/send` call.
#[derive(Clone, PartialEq, Eq, Debug, Serialize)]
pub struct RelayRequest {
    pub service_id: String,
    pub template_id: String,
    pub user_id: String,
    pub template_params: ContactDraft,
}

impl RelayRequest {
    pub fn build(config: &RelayConfig, params: ContactDraft) -> Result<Self, RelayError> {
        let service_id = config
            .service_id
            .clone()
            .ok_or(RelayError::NotConfigured("EMAILJS_SERVICE_ID"))?;
        let template_id = config
            .template_id
            .clone()
            .ok_or(RelayError::NotConfigured("EMAILJS_TEMPLATE_ID"))?;
        let user_id = config
            .public_key
            .clone()
            .ok_or(RelayError::NotConfigured("EMAILJS_PUBLIC_KEY"))?;

        Ok(Self {
            service_id,
            template_id,
            user_id,
            template_params: params,
        })
    }
}

pub trait EmailRelay {
    async fn send(&self, request: &RelayRequest) -> Result<(), RelayError>;
}

#[derive(Clone, PartialEq, Eq, Debug)]
pub struct ContactForm {
    draft: ContactDraft,
    status: SubmissionStatus,
}

impl Default for ContactForm {
    fn default() -> Self {
        Self {
            draft: ContactDraft::default(),
            status: SubmissionStatus::Idle,
        }
    }
}

impl ContactForm {
    pub fn draft(&self) -> &ContactDraft {
        &self.draft
    }

    pub fn status(&self) -> SubmissionStatus {
        self.status
    }

    pub fn is_busy(&self) -> bool {
        self.status == SubmissionStatus::Pending
    }

    pub fn edit(&mut self, field: Field, value: String) {
        self.draft.set(field, value);
    }

    /// Moves Idle/Error to Pending and hands back the fields to relay.
    pub fn begin_submit(&mut self) -> Result<ContactDraft, SubmitBlocked> {
        match self.status {
            SubmissionStatus::Pending => return Err(SubmitBlocked::InFlight),
            SubmissionStatus::Success => return Err(SubmitBlocked::JustSent),
            SubmissionStatus::Idle | SubmissionStatus::Error => {}
        }
        if let Some(field) = self.draft.first_missing() {
            return Err(SubmitBlocked::MissingField(field));
        }

        self.status = SubmissionStatus::Pending;
        Ok(self.draft.clone())
    }

    /// Settles a pending submission; ignored in any other state.
    pub fn complete(&mut self, outcome: Result<(), RelayError>) {
        if self.status != SubmissionStatus::Pending {
            return;
        }

        match outcome {
            Ok(()) => {
                self.draft = ContactDraft::default();
                self.status = SubmissionStatus::Success;
                log_event(LogLevel::Info, "contact_submit_succeeded", json!({}));
            }
            Err(error) => {
                self.status = SubmissionStatus::Error;
                log_event(
                    LogLevel::Error,
                    "contact_submit_failed",
                    json!({ "error": error.to_string() }),
                );
            }
        }
    }

    /// Fired by the reset timer.
    pub fn reset_status(&mut self) {
        if self.status.is_terminal() {
            self.status = SubmissionStatus::Idle;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    struct FakeRelay {
        outcome: Result<(), RelayError>,
        sent: RefCell<Vec<RelayRequest>>,
    }

    impl FakeRelay {
        fn answering(outcome: Result<(), RelayError>) -> Self {
            Self {
                outcome,
                sent: RefCell::new(Vec::new()),
            }
        }
    }

    impl EmailRelay for FakeRelay {
        async fn send(&self, request: &RelayRequest) -> Result<(), RelayError> {
            self.sent.borrow_mut().push(request.clone());
            self.outcome.clone()
        }
    }

    fn relay_config() -> RelayConfig {
        RelayConfig {
            endpoint: "https://relay.test/send".to_string(),
            service_id: Some("service_1".to_string()),
            template_id: Some("template_1".to_string()),
            public_key: Some("public_1".to_string()),
        }
    }

    fn filled_form() -> ContactForm {
        let mut form = ContactForm::default();
        form.edit(Field::Name, "Ada".to_string());
        form.edit(Field::Email, "ada@example.com".to_string());
        form.edit(Field::Title, "General inquiry".to_string());
        form.edit(Field::Message, "Hello there".to_string());
        form
    }

    async fn submit(form: &mut ContactForm, relay: &FakeRelay) {
        let params = form.begin_submit().expect("form is ready");
        let outcome = match RelayRequest::build(&relay_config(), params) {
            Ok(request) => relay.send(&request).await,
            Err(error) => Err(error),
        };
        form.complete(outcome);
    }

    #[tokio::test]
    async fn successful_submission_clears_draft_then_resets() {
        let relay = FakeRelay::answering(Ok(()));
        let mut form = filled_form();

        submit(&mut form, &relay).await;

        assert_eq!(form.status(), SubmissionStatus::Success);
        assert!(form.draft().is_empty());

        form.reset_status();
        assert_eq!(form.status(), SubmissionStatus::Idle);

        let sent = relay.sent.borrow();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].template_params.name, "Ada");
        assert_eq!(sent[0].user_id, "public_1");
    }

    #[tokio::test]
    async fn failed_submission_keeps_draft_then_resets() {
        let relay = FakeRelay::answering(Err(RelayError::Rejected {
            status: 400,
            body: "The template ID is invalid".to_string(),
        }));
        let mut form = filled_form();
        let before = form.draft().clone();

        submit(&mut form, &relay).await;

        assert_eq!(form.status(), SubmissionStatus::Error);
        assert_eq!(form.draft(), &before);

        form.reset_status();
        assert_eq!(form.status(), SubmissionStatus::Idle);
        assert_eq!(form.draft(), &before);
    }

    #[tokio::test]
    async fn error_state_allows_resubmission() {
        let relay = FakeRelay::answering(Err(RelayError::Transport("offline".to_string())));
        let mut form = filled_form();
        submit(&mut form, &relay).await;
        assert_eq!(form.status(), SubmissionStatus::Error);

        let relay = FakeRelay::answering(Ok(()));
        submit(&mut form, &relay).await;
        assert_eq!(form.status(), SubmissionStatus::Success);
    }

    #[test]
    fn pending_form_refuses_reentrant_submission() {
        let mut form = filled_form();
        form.begin_submit().expect("first submit");

        assert_eq!(form.begin_submit(), Err(SubmitBlocked::InFlight));
        assert!(form.is_busy());
    }

    #[test]
    fn success_state_refuses_submission_until_reset() {
        let mut form = filled_form();
        form.begin_submit().expect("first submit");
        form.complete(Ok(()));

        assert_eq!(form.begin_submit(), Err(SubmitBlocked::JustSent));
    }

    #[test]
    fn empty_fields_block_submission() {
        let mut form = filled_form();
        form.edit(Field::Email, String::new());

        assert_eq!(
            form.begin_submit(),
            Err(SubmitBlocked::MissingField(Field::Email))
        );
        assert_eq!(form.status(), SubmissionStatus::Idle);
    }

    #[test]
    fn whitespace_message_is_present_and_submits() {
        let mut form = filled_form();
        form.edit(Field::Message, "  ".to_string());

        let params = form.begin_submit().expect("present fields are accepted");
        assert_eq!(params.message, "  ");
        assert_eq!(form.status(), SubmissionStatus::Pending);
    }

    /// Fires the reset only once `elapsed_ms` reaches the scheduled delay.
    fn advance(form: &mut ContactForm, config: &SiteConfig, elapsed_ms: u32) {
        if let Some(delay) = form.status().reset_after_ms(config) {
            if elapsed_ms >= delay {
                form.reset_status();
            }
        }
    }

    #[test]
    fn terminal_status_resets_after_configured_delay() {
        let config = SiteConfig::default();
        let mut form = filled_form();
        form.begin_submit().expect("first submit");
        form.complete(Ok(()));

        advance(&mut form, &config, 2_999);
        assert_eq!(form.status(), SubmissionStatus::Success);

        advance(&mut form, &config, 3_000);
        assert_eq!(form.status(), SubmissionStatus::Idle);
    }

    #[test]
    fn only_terminal_statuses_schedule_a_reset() {
        let config = SiteConfig::default();

        assert_eq!(SubmissionStatus::Idle.reset_after_ms(&config), None);
        assert_eq!(SubmissionStatus::Pending.reset_after_ms(&config), None);
        assert_eq!(SubmissionStatus::Success.reset_after_ms(&config), Some(3_000));
        assert_eq!(SubmissionStatus::Error.reset_after_ms(&config), Some(3_000));

        let mut pending = filled_form();
        pending.begin_submit().expect("first submit");
        advance(&mut pending, &config, 60_000);
        assert_eq!(pending.status(), SubmissionStatus::Pending);
    }

    #[test]
    fn completion_outside_pending_is_ignored() {
        let mut form = filled_form();
        form.complete(Ok(()));

        assert_eq!(form.status(), SubmissionStatus::Idle);
        assert_eq!(form.draft().name, "Ada");
    }

    #[test]
    fn missing_credentials_fail_before_any_network_call() {
        let mut config = relay_config();
        config.template_id = None;

        let result = RelayRequest::build(&config, ContactDraft::default());
        assert_eq!(
            result,
            Err(RelayError::NotConfigured("EMAILJS_TEMPLATE_ID"))
        );
    }

    #[test]
    fn request_serializes_as_emailjs_body() {
        let request = RelayRequest::build(&relay_config(), filled_form().draft().clone())
            .expect("configured relay");
        let body = serde_json::to_value(&request).expect("serializable");

        assert_eq!(body["service_id"], "service_1");
        assert_eq!(body["template_id"], "template_1");
        assert_eq!(body["user_id"], "public_1");
        assert_eq!(body["template_params"]["title"], "General inquiry");
        assert_eq!(body["template_params"]["message"], "Hello there");
    }

    #[test]
    fn subject_values_are_distinct() {
        let mut values: Vec<&str> = SUBJECT_OPTIONS.iter().map(|option| option.value).collect();
        values.sort_unstable();
        values.dedup();
        assert_eq!(values.len(), SUBJECT_OPTIONS.len());
    }
}
