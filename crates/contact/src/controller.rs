use std::{
    sync::{Arc, Mutex, MutexGuard, PoisonError},
    time::Duration,
};

use crate::{
    ApiReply, ContactApi, ContactForm, DraftMessage, FieldName, StatusMessage,
    error::Result,
};

/// How long "Message sent!" stays visible.
pub const DEFAULT_STATUS_CLEAR_DELAY: Duration = Duration::from_millis(5000);

/// What a call to [`ContactController::submit`] ended up doing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Submission {
    /// Accepted by the server. Draft and errors were cleared.
    Sent,
    /// Server reported field validation errors. Draft kept.
    Invalid,
    /// Transport failure, unexpected status or unreadable body. Draft kept.
    Failed,
    /// Another submission was already in flight. Nothing was sent.
    Busy,
    /// The form was reset while the request was in flight; its response
    /// was discarded.
    Stale,
}

#[derive(Default)]
struct Inner {
    form: ContactForm,
    /// Advanced by every accepted submit and by reset. A response only
    /// applies if its attempt is still the current one.
    attempt: u64,
    /// Advanced on every status write. A deferred clear only applies if
    /// its token is still the current one.
    status_token: u64,
}

impl Inner {
    fn set_status(&mut self, status: StatusMessage) -> u64 {
        self.status_token += 1;
        self.form.submission.status = Some(status);
        self.status_token
    }
}

fn lock(inner: &Mutex<Inner>) -> MutexGuard<'_, Inner> {
    inner.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Releases the in-flight flag if the submit future is dropped or panics
/// before it settles.
struct InFlight<'a> {
    inner: &'a Mutex<Inner>,
    attempt: u64,
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        let mut inner = lock(self.inner);
        if inner.attempt == self.attempt {
            inner.form.submission.disabled = false;
        }
    }
}

/// Owns the contact form state and drives the submit round-trip.
///
/// Cloning is cheap and every clone drives the same form, so a submit can
/// run on one task while another edits or resets.
pub struct ContactController<A> {
    api: Arc<A>,
    inner: Arc<Mutex<Inner>>,
    status_clear_delay: Duration,
}

impl<A> Clone for ContactController<A> {
    fn clone(&self) -> Self {
        Self {
            api: Arc::clone(&self.api),
            inner: Arc::clone(&self.inner),
            status_clear_delay: self.status_clear_delay,
        }
    }
}

impl<A: ContactApi + 'static> ContactController<A> {
    pub fn new(api: A) -> Self {
        Self {
            api: Arc::new(api),
            inner: Arc::default(),
            status_clear_delay: DEFAULT_STATUS_CLEAR_DELAY,
        }
    }

    pub fn with_status_clear_delay(mut self, delay: Duration) -> Self {
        self.status_clear_delay = delay;
        self
    }

    pub fn snapshot(&self) -> ContactForm {
        lock(&self.inner).form.clone()
    }

    pub fn draft(&self) -> DraftMessage {
        lock(&self.inner).form.draft.clone()
    }

    pub fn is_submitting(&self) -> bool {
        lock(&self.inner).form.submission.disabled
    }

    pub fn status_message(&self) -> String {
        lock(&self.inner)
            .form
            .submission
            .status_message()
            .to_owned()
    }

    pub fn errors_for(&self, field: FieldName) -> Vec<String> {
        lock(&self.inner)
            .form
            .errors_for(field)
            .map(ToOwned::to_owned)
            .collect()
    }

    /// Replaces one field of the draft. Allowed while a submit is in flight.
    pub fn update_field(&self, field: FieldName, value: impl Into<String>) {
        let mut inner = lock(&self.inner);
        let draft = std::mem::take(&mut inner.form.draft);
        inner.form.draft = draft.with(field, value);
    }

    /// Empties the draft and releases the in-flight flag. A request already
    /// sent is not cancelled, but its response will be ignored.
    pub fn reset(&self) {
        let mut inner = lock(&self.inner);
        if inner.form.submission.disabled {
            inner.attempt += 1;
            tracing::debug!(attempt = inner.attempt, "pending contact submission abandoned");
        }
        inner.form.submission.disabled = false;
        inner.form.draft = DraftMessage::default();
    }

    /// Sends the current draft and applies the server's verdict.
    ///
    /// Never fails: every outcome is folded into form state. The in-flight
    /// flag is held for the duration of the request and released on every
    /// exit path.
    #[tracing::instrument(skip(self))]
    pub async fn submit(&self) -> Submission {
        let Some((attempt, draft)) = self.begin() else {
            tracing::debug!("contact submission already in flight");
            return Submission::Busy;
        };

        let _in_flight = InFlight {
            inner: &self.inner,
            attempt,
        };

        let reply = self.api.send(&draft).await;

        self.settle(attempt, reply)
    }

    fn begin(&self) -> Option<(u64, DraftMessage)> {
        let mut inner = lock(&self.inner);
        if inner.form.submission.disabled {
            return None;
        }

        inner.attempt += 1;
        inner.form.submission.disabled = true;

        Some((inner.attempt, inner.form.draft.clone()))
    }

    fn settle(&self, attempt: u64, reply: Result<ApiReply>) -> Submission {
        let mut inner = lock(&self.inner);
        if inner.attempt != attempt {
            tracing::debug!(attempt, "discarding response of abandoned contact submission");
            return Submission::Stale;
        }

        inner.form.submission.disabled = false;

        match reply {
            Ok(ApiReply::Accepted) => {
                inner.form.errors.clear();
                inner.form.draft = DraftMessage::default();
                let token = inner.set_status(StatusMessage::Sent);
                drop(inner);

                tracing::info!("contact message sent");
                self.schedule_status_clear(token);

                Submission::Sent
            }
            Ok(ApiReply::Rejected(errors)) => {
                tracing::info!(errors = errors.len(), "contact message rejected by validation");
                inner.form.errors = errors;

                Submission::Invalid
            }
            Err(err) => {
                tracing::error!("contact submission failed: {err}");
                inner.form.errors.clear();
                inner.set_status(StatusMessage::Failed);

                Submission::Failed
            }
        }
    }

    fn schedule_status_clear(&self, token: u64) {
        let inner = Arc::clone(&self.inner);
        let delay = self.status_clear_delay;

        tokio::spawn(async move {
            tokio::time::sleep(delay).await;

            let mut inner = lock(&inner);
            if inner.status_token == token {
                inner.form.submission.status = None;
            }
        });
    }
}
