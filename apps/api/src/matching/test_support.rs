//! Stub oracles shared by the matching and router tests.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::llm_client::{LlmError, TextGenerator};

enum Reply {
    Text(String),
    Fail { status: u16, message: String },
}

/// Returns a fixed reply and records the prompts it saw.
pub(crate) struct CannedOracle {
    reply: Reply,
    pub prompts: Mutex<Vec<String>>,
}

impl CannedOracle {
    pub(crate) fn replying(text: &str) -> Arc<Self> {
        Arc::new(Self {
            reply: Reply::Text(text.to_string()),
            prompts: Mutex::new(Vec::new()),
        })
    }

    pub(crate) fn failing(status: u16, message: &str) -> Arc<Self> {
        Arc::new(Self {
            reply: Reply::Fail {
                status,
                message: message.to_string(),
            },
            prompts: Mutex::new(Vec::new()),
        })
    }
}

#[async_trait]
impl TextGenerator for CannedOracle {
    async fn generate(&self, prompt: &str) -> Result<String, LlmError> {
        self.prompts.lock().unwrap().push(prompt.to_string());
        match &self.reply {
            Reply::Text(text) => Ok(text.clone()),
            Reply::Fail { status, message } => Err(LlmError::Api {
                status: *status,
                message: message.clone(),
            }),
        }
    }
}
