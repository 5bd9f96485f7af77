#![allow(dead_code)]

use std::{
    collections::VecDeque,
    sync::{
        Arc, Mutex,
        atomic::{AtomicUsize, Ordering},
    },
};

use async_trait::async_trait;
use portfolio_contact::{
    ApiReply, ContactApi, ContactController, ContactError, DraftMessage, FieldName,
    FieldValidationError,
};
use tokio::sync::Notify;

/// Replies with a scripted sequence and records every draft it was sent.
#[derive(Default)]
pub struct ScriptedApi {
    replies: Mutex<VecDeque<Scripted>>,
    sent: Mutex<Vec<DraftMessage>>,
}

pub enum Scripted {
    Accepted,
    Rejected(Vec<FieldValidationError>),
    Status(u16),
    Malformed,
}

impl ScriptedApi {
    pub fn new(replies: impl IntoIterator<Item = Scripted>) -> Arc<Self> {
        Arc::new(Self {
            replies: Mutex::new(replies.into_iter().collect()),
            sent: Mutex::default(),
        })
    }

    pub fn sent(&self) -> Vec<DraftMessage> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl ContactApi for ScriptedApi {
    async fn send(&self, draft: &DraftMessage) -> portfolio_contact::Result<ApiReply> {
        self.sent.lock().unwrap().push(draft.clone());

        let reply = self
            .replies
            .lock()
            .unwrap()
            .pop_front()
            .expect("no scripted reply left");

        match reply {
            Scripted::Accepted => Ok(ApiReply::Accepted),
            Scripted::Rejected(errors) => Ok(ApiReply::Rejected(errors)),
            Scripted::Status(status) => Err(ContactError::UnexpectedStatus(status)),
            Scripted::Malformed => Err(serde_json::from_str::<Vec<FieldValidationError>>(
                "{\"title\":\"oops\"}",
            )
            .unwrap_err()
            .into()),
        }
    }
}

/// Holds every request until [`GatedApi::open`] is called, then accepts.
#[derive(Default)]
pub struct GatedApi {
    gate: Notify,
    calls: AtomicUsize,
}

impl GatedApi {
    pub fn new() -> Arc<Self> {
        Arc::default()
    }

    pub fn open(&self) {
        self.gate.notify_one();
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ContactApi for GatedApi {
    async fn send(&self, _draft: &DraftMessage) -> portfolio_contact::Result<ApiReply> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.gate.notified().await;

        Ok(ApiReply::Accepted)
    }
}

pub fn fill<A: ContactApi + 'static>(controller: &ContactController<A>) -> DraftMessage {
    controller.update_field(FieldName::Name, "John Doe");
    controller.update_field(FieldName::Email, "john.doe@example.com");
    controller.update_field(FieldName::Message, "Hello there");

    controller.draft()
}

/// Lets spawned tasks run until `check` holds.
pub async fn wait_until(mut check: impl FnMut() -> bool) {
    for _ in 0..100 {
        if check() {
            return;
        }
        tokio::task::yield_now().await;
    }
    panic!("condition never became true");
}
