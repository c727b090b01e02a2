use std::sync::{Arc, Mutex};

use crate::domain::AppError;
use crate::ports::{CompletionRequest, CompletionResponse, ModelClient};

/// Records every request and answers with a fixed reply or error.
#[derive(Clone)]
pub struct FakeModelClient {
    pub requests: Arc<Mutex<Vec<CompletionRequest>>>,
    reply: Result<CompletionResponse, (String, Option<u16>)>,
}

impl FakeModelClient {
    pub fn replying(content: impl Into<String>, tokens_used: u32) -> Self {
        Self {
            requests: Arc::new(Mutex::new(vec![])),
            reply: Ok(CompletionResponse { content: content.into(), tokens_used }),
        }
    }

    pub fn failing(message: impl Into<String>, status: Option<u16>) -> Self {
        Self { requests: Arc::new(Mutex::new(vec![])), reply: Err((message.into(), status)) }
    }

    pub fn recorded_requests(&self) -> Vec<CompletionRequest> {
        self.requests.lock().unwrap().clone()
    }
}

impl ModelClient for FakeModelClient {
    fn complete(&self, request: CompletionRequest) -> Result<CompletionResponse, AppError> {
        self.requests.lock().unwrap().push(request);
        match &self.reply {
            Ok(response) => Ok(response.clone()),
            Err((message, status)) => {
                Err(AppError::ModelApiError { message: message.clone(), status: *status })
            }
        }
    }
}
