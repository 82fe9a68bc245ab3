//! Contact form workflow: validation, the simulated send and the mailto
//! hand-off.
//!
//! FLOW
//! ====
//! submit -> validate -> (first error as banner) | (sending state,
//! `SubmitComplete` after 2s) -> restore control, success banner, reset
//! fields -> `OpenMailto` after 1s -> navigate to the mailto link.
//!
//! There is no real transport, so a draft that passes validation always
//! "succeeds". Timers are never cancelled once the send starts.

#[cfg(test)]
#[path = "form_test.rs"]
mod form_test;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::consts::{MAILTO_DELAY_MS, MESSAGE_MIN_CHARS, NAME_MIN_CHARS, SEND_DELAY_MS, SUBJECT_MIN_CHARS};
use crate::effect::{Effect, Timer};
use crate::feedback::{BannerKind, FeedbackSlot};

pub const SUCCESS_MESSAGE: &str = "Thank you for your message! I will get back to you soon.";

static EMAIL_RE: Lazy<Result<Regex, regex::Error>> = Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$"));

/// Values read from the form for one submit pass.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactDraft {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

/// One failed field check. `Display` is the text shown to the user.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum FieldError {
    #[error("Please enter a valid name (at least 2 characters)")]
    Name,
    #[error("Please enter a valid email address")]
    Email,
    #[error("Please enter a subject (at least 3 characters)")]
    Subject,
    #[error("Please enter a message (at least 10 characters)")]
    Message,
}

/// `local@domain.tld` with no whitespace and a single `@`.
#[must_use]
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.as_ref().is_ok_and(|re| re.is_match(email))
}

fn trimmed_len(value: &str) -> usize {
    value.trim().chars().count()
}

/// Run every field check and return the failures in field order.
#[must_use]
pub fn validate(draft: &ContactDraft) -> Vec<FieldError> {
    let checks = [
        (trimmed_len(&draft.name) >= NAME_MIN_CHARS, FieldError::Name),
        (is_valid_email(&draft.email), FieldError::Email),
        (trimmed_len(&draft.subject) >= SUBJECT_MIN_CHARS, FieldError::Subject),
        (trimmed_len(&draft.message) >= MESSAGE_MIN_CHARS, FieldError::Message),
    ];
    checks.into_iter().filter(|(ok, _)| !ok).map(|(_, err)| err).collect()
}

/// Build the `mailto:` URI that opens the visitor's mail client.
#[must_use]
pub fn mailto_link(recipient: &str, draft: &ContactDraft) -> String {
    let body = format!("From: {} ({})\n\n{}", draft.name, draft.email, draft.message);
    format!(
        "mailto:{recipient}?subject={}&body={}",
        urlencoding::encode(&draft.subject),
        urlencoding::encode(&body)
    )
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmitPhase {
    Idle,
    /// Control disabled, waiting for the simulated latency.
    Sending(ContactDraft),
}

#[derive(Clone, Debug)]
pub struct FormController {
    recipient: String,
    phase: SubmitPhase,
    /// Link waiting for the `OpenMailto` timer; independent of `phase`.
    pending_mailto: Option<String>,
    feedback: FeedbackSlot,
}

impl FormController {
    #[must_use]
    pub fn new(recipient: impl Into<String>) -> Self {
        Self {
            recipient: recipient.into(),
            phase: SubmitPhase::Idle,
            pending_mailto: None,
            feedback: FeedbackSlot::default(),
        }
    }

    #[must_use]
    pub fn phase(&self) -> &SubmitPhase {
        &self.phase
    }

    #[must_use]
    pub fn pending_mailto(&self) -> Option<&str> {
        self.pending_mailto.as_deref()
    }

    #[must_use]
    pub fn feedback(&self) -> &FeedbackSlot {
        &self.feedback
    }

    /// Handle a submit event. The host has already prevented the default.
    pub fn submit(&mut self, draft: ContactDraft) -> Vec<Effect> {
        if matches!(self.phase, SubmitPhase::Sending(_)) {
            log::debug!("submit ignored while sending");
            return Vec::new();
        }

        if let Some(first) = validate(&draft).into_iter().next() {
            return self.show_feedback(first.to_string(), BannerKind::Error);
        }

        self.phase = SubmitPhase::Sending(draft);
        vec![Effect::SetSubmitSending, Effect::schedule(Timer::SubmitComplete, SEND_DELAY_MS)]
    }

    pub fn show_feedback(&mut self, message: impl Into<String>, kind: BannerKind) -> Vec<Effect> {
        self.feedback.show(message, kind)
    }

    /// Route a fired timer that belongs to the form.
    pub fn on_timer(&mut self, timer: Timer) -> Vec<Effect> {
        match timer {
            Timer::SubmitComplete => self.complete_send(),
            Timer::OpenMailto => self.open_mail_client(),
            Timer::BannerExpire(id) => self.feedback.expire(id),
            Timer::BannerRemove(id) => self.feedback.remove(id),
            Timer::TypingTick | Timer::LinkRestore(_) => Vec::new(),
        }
    }

    fn complete_send(&mut self) -> Vec<Effect> {
        let SubmitPhase::Sending(draft) = std::mem::replace(&mut self.phase, SubmitPhase::Idle) else {
            return Vec::new();
        };
        self.pending_mailto = Some(mailto_link(&self.recipient, &draft));

        let mut effects = vec![Effect::RestoreSubmit];
        effects.extend(self.feedback.show(SUCCESS_MESSAGE, BannerKind::Success));
        effects.push(Effect::ResetForm);
        effects.push(Effect::schedule(Timer::OpenMailto, MAILTO_DELAY_MS));
        effects
    }

    fn open_mail_client(&mut self) -> Vec<Effect> {
        self.pending_mailto.take().map(Effect::Navigate).into_iter().collect()
    }
}
