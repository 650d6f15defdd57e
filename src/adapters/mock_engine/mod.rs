//! Scripted mock engine adapter
//!
//! Stands in for the real engine in tests: each `run` pops the next
//! scripted diagnostic sequence, and the virtual filesystem is an
//! in-memory map. Invocations are recorded for assertions.

use std::collections::{HashMap, VecDeque};
use std::sync::Mutex;

use async_trait::async_trait;

use crate::domain::errors::DomainError;
use crate::ports::EnginePort;

/// In-memory engine double with scripted diagnostics
#[derive(Default)]
pub struct MockEngineAdapter {
    scripted_runs: Mutex<VecDeque<Vec<String>>>,
    files: Mutex<HashMap<String, Vec<u8>>>,
    invocations: Mutex<Vec<Vec<String>>>,
}

impl MockEngineAdapter {
    /// Create a mock with no scripted runs
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue the diagnostic lines the next `run` call emits
    pub fn script_run<S: Into<String>>(&self, lines: Vec<S>) {
        self.scripted_runs
            .lock()
            .unwrap()
            .push_back(lines.into_iter().map(Into::into).collect());
    }

    /// Pre-populate a virtual file, as if the engine had written it
    pub fn preload_output(&self, name: &str, bytes: &[u8]) {
        self.files
            .lock()
            .unwrap()
            .insert(name.to_string(), bytes.to_vec());
    }

    /// Argument vectors of every `run` call, in order
    pub fn invocations(&self) -> Vec<Vec<String>> {
        self.invocations.lock().unwrap().clone()
    }

    /// Bytes staged or preloaded under a virtual name, if any
    pub fn staged_file(&self, name: &str) -> Option<Vec<u8>> {
        self.files.lock().unwrap().get(name).cloned()
    }
}

#[async_trait]
impl EnginePort for MockEngineAdapter {
    async fn stage_input(&self, name: &str, bytes: &[u8]) -> Result<(), DomainError> {
        self.files
            .lock()
            .unwrap()
            .insert(name.to_string(), bytes.to_vec());
        Ok(())
    }

    async fn run(&self, args: &[String]) -> Result<Vec<String>, DomainError> {
        self.invocations.lock().unwrap().push(args.to_vec());
        Ok(self
            .scripted_runs
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_default())
    }

    async fn read_output(&self, name: &str) -> Result<Vec<u8>, DomainError> {
        self.files
            .lock()
            .unwrap()
            .get(name)
            .cloned()
            .ok_or_else(|| DomainError::FsFail(format!("No such virtual file: {}", name)))
    }
}
