//! In-memory fetcher for unit tests.

use std::sync::Mutex;

use async_trait::async_trait;
use macroetl_fetch::{FetchError, SourceFetcher, SourceRequest};
use serde_json::Value;

type Script = Box<dyn Fn(&SourceRequest) -> Result<Value, FetchError> + Send + Sync>;

/// Answers requests from a closure and records every request it sees.
pub(crate) struct ScriptedFetcher {
    script: Script,
    requests: Mutex<Vec<SourceRequest>>,
}

impl ScriptedFetcher {
    pub(crate) fn new(script: impl Fn(&SourceRequest) -> Value + Send + Sync + 'static) -> Self {
        Self::fallible(move |request| Ok(script(request)))
    }

    pub(crate) fn fallible(
        script: impl Fn(&SourceRequest) -> Result<Value, FetchError> + Send + Sync + 'static,
    ) -> Self {
        Self {
            script: Box::new(script),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub(crate) fn calls(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    pub(crate) fn requests(&self) -> Vec<SourceRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl SourceFetcher for ScriptedFetcher {
    async fn fetch(&self, request: &SourceRequest) -> Result<Value, FetchError> {
        self.requests.lock().unwrap().push(request.clone());
        (self.script)(request)
    }
}
