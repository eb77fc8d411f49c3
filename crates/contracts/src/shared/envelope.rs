use serde::{Deserialize, Serialize};

/// `{ message, payload }` wrapper of every successful API response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiEnvelope<T> {
    pub message: String,
    pub payload: T,
}

impl<T> ApiEnvelope<T> {
    pub fn new(message: impl Into<String>, payload: T) -> Self {
        Self {
            message: message.into(),
            payload,
        }
    }
}
