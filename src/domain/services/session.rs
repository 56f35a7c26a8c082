#[cfg(test)]
#[path = "session_test.rs"]
mod tests;

use anyhow::Result;

use super::content::ContentStore;
use crate::domain::models::Backend;
use crate::domain::models::CompletionReply;
use crate::domain::models::CompletionRequest;
use crate::domain::models::Language;
use crate::domain::models::Speaker;
use crate::domain::models::Transcript;
use crate::domain::models::Turn;

/// Shown in place of a reply when the completion call fails outright.
pub const UNAVAILABLE_NOTICE: &str =
    "The AI assistant is currently unavailable. Please reach out via LinkedIn or Email.";

/// Shown when the service answers cleanly but with no text to display.
pub const EMPTY_REPLY_NOTICE: &str = "I'm sorry, I encountered an issue processing your request.";

fn system_instruction(language: Language) -> String {
    let preamble = r#"
You are a professional AI representative for Shuo Pang, a Senior Technical Strategist and Researcher.
Answer questions about his career, skills, and background professionally and concisely.
Shuo Pang has deep expertise in Human-Computer Interaction (HCI), AI, Wearable technology, and Real-Time Rendering.
He has worked at Huawei Canada and held leadership roles at OVA and ShadeRealm.
    "#;

    return format!(
        "{}\nCurrent Language of the portfolio: {language}.\nResume data for context: {}",
        preamble.trim(),
        ContentStore::grounding(language)
    );
}

/// One visitor's conversation with the assistant. The session owns the
/// transcript and the single in-flight flag, nothing here touches the
/// network. Hosts either call [`AssistantSession::submit`] and block on the
/// reply, or split the exchange into [`AssistantSession::stage`] and
/// [`AssistantSession::settle`] around their own transport.
#[derive(Default)]
pub struct AssistantSession {
    transcript: Transcript,
    pending: bool,
}

impl AssistantSession {
    pub fn new() -> AssistantSession {
        return AssistantSession {
            transcript: Transcript::new(),
            pending: false,
        };
    }

    pub fn transcript(&self) -> &Transcript {
        return &self.transcript;
    }

    pub fn is_pending(&self) -> bool {
        return self.pending;
    }

    /// Records the visitor's turn and hands back the request to send. Blank
    /// input and input typed while a reply is still owed both stage nothing.
    pub fn stage(&mut self, input: &str, language: Language) -> Option<CompletionRequest> {
        if self.pending || input.trim().is_empty() {
            return None;
        }

        self.transcript.push(Turn::new(Speaker::User, input));
        self.pending = true;

        return Some(CompletionRequest {
            system_instruction: system_instruction(language),
            history: self.transcript.turns().to_vec(),
        });
    }

    /// Lands the outcome of a staged request as the assistant's turn. Failed
    /// and empty replies still produce a turn so the visitor is never left
    /// hanging.
    pub fn settle(&mut self, outcome: Result<CompletionReply>) -> &Turn {
        let text = match outcome {
            Ok(reply) => {
                if reply.text.is_empty() {
                    EMPTY_REPLY_NOTICE.to_string()
                } else {
                    reply.text
                }
            }
            Err(err) => {
                tracing::error!(error = ?err, "assistant completion failed");
                UNAVAILABLE_NOTICE.to_string()
            }
        };

        self.pending = false;
        self.transcript.push(Turn::new(Speaker::Assistant, &text));

        return self.transcript.last().unwrap();
    }

    /// Stages the input, waits on the backend, and settles the reply in one
    /// call. Returns `None` when the input staged nothing.
    pub async fn submit(
        &mut self,
        backend: &dyn Backend,
        input: &str,
        language: Language,
    ) -> Option<&Turn> {
        let request = self.stage(input, language)?;
        let outcome = backend.complete(request).await;

        return Some(self.settle(outcome));
    }
}
