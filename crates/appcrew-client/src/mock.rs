use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;

use crate::{ClientError, ModelBackend};

/// One recorded `complete` call, for assertions.
#[derive(Debug, Clone)]
pub struct RecordedCall {
    pub prompt: String,
    pub max_tokens: u32,
}

/// A mock backend that replays scripted replies in order and records every
/// call it receives.
#[derive(Default)]
pub struct MockBackend {
    replies: Mutex<VecDeque<Result<String, String>>>,
    calls: Mutex<Vec<RecordedCall>>,
}

impl MockBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Script a successful reply.
    pub fn reply(self, text: &str) -> Self {
        self.replies
            .lock()
            .unwrap()
            .push_back(Ok(text.to_string()));
        self
    }

    /// Script a failed call.
    pub fn fail(self, message: &str) -> Self {
        self.replies
            .lock()
            .unwrap()
            .push_back(Err(message.to_string()));
        self
    }

    /// Calls received so far, in order.
    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl ModelBackend for MockBackend {
    fn name(&self) -> &str {
        "mock"
    }

    async fn complete(&self, prompt: &str, max_tokens: u32) -> Result<String, ClientError> {
        self.calls.lock().unwrap().push(RecordedCall {
            prompt: prompt.to_string(),
            max_tokens,
        });

        match self.replies.lock().unwrap().pop_front() {
            Some(Ok(text)) => Ok(text),
            Some(Err(message)) => Err(ClientError::Api {
                status: 500,
                message,
            }),
            None => Err(ClientError::EmptyResponse),
        }
    }
}
