use anyhow::Result;
use async_trait::async_trait;

use super::Turn;

/// An owned snapshot staged by the session: the grounding instruction plus
/// the full transcript including the just-appended user turn. Never mutated
/// after dispatch.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CompletionRequest {
    pub system_instruction: String,
    pub history: Vec<Turn>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CompletionReply {
    pub text: String,
}

#[async_trait]
pub trait Backend {
    /// Used at startup to verify all configurations are available to work
    /// with the completion service. Diagnostics only; the assistant stays
    /// usable either way.
    async fn health_check(&self) -> Result<()>;

    /// Requests a single completion for a staged request. An empty reply text
    /// means the service answered without usable content; errors cover
    /// everything else (credentials, transport, malformed payloads).
    async fn complete(&self, request: CompletionRequest) -> Result<CompletionReply>;
}

pub type BackendBox = Box<dyn Backend + Send + Sync>;
