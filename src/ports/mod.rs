// Ports - Interface definitions (contracts)

use async_trait::async_trait;

use crate::domain::errors::DomainError;

/// Port for the black-box transcoding engine.
///
/// The engine is reached only through this contract: an argument vector in,
/// an ordered sequence of diagnostic text lines out, plus a virtual
/// filesystem for input staging and output retrieval. How the engine is
/// hosted (subprocess, in-process library, sandboxed runtime) is an adapter
/// concern.
///
/// The engine is not reentrant-safe across overlapping runs sharing files:
/// implementations must serialize `run` so at most one invocation is in
/// flight per virtual filesystem namespace.
#[async_trait]
pub trait EnginePort: Send + Sync {
    /// Write a virtual file the engine can later read under `name`
    async fn stage_input(&self, name: &str, bytes: &[u8]) -> Result<(), DomainError>;

    /// Invoke the engine with an argument vector and collect its diagnostic
    /// lines in emission order
    async fn run(&self, args: &[String]) -> Result<Vec<String>, DomainError>;

    /// Read a file the engine wrote into its virtual filesystem
    async fn read_output(&self, name: &str) -> Result<Vec<u8>, DomainError>;
}
