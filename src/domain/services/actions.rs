#[cfg(test)]
#[path = "actions_test.rs"]
mod tests;

use anyhow::Result;
use tokio::sync::mpsc;

use crate::domain::models::Action;
use crate::domain::models::BackendBox;
use crate::domain::models::Event;
use crate::infrastructure::backends::gemini::Gemini;

pub struct ActionsService {}

impl ActionsService {
    /// Runs the completion worker until the action channel closes. Request
    /// failures ride back to the UI inside the settled event, only a dead
    /// event channel stops the loop early.
    pub async fn start(
        tx: mpsc::UnboundedSender<Event>,
        rx: &mut mpsc::UnboundedReceiver<Action>,
    ) -> Result<()> {
        let backend: BackendBox = Box::<Gemini>::default();

        tx.send(Event::BackendHealth(backend.health_check().await.is_ok()))?;

        loop {
            let action = rx.recv().await;
            if action.is_none() {
                // The UI side hung up.
                return Ok(());
            }

            match action.unwrap() {
                Action::CompletionRequest(request) => {
                    tx.send(Event::CompletionSettled(backend.complete(request).await))?;
                }
            }
        }
    }
}
