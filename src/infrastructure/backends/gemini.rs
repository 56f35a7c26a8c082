#[cfg(test)]
#[path = "gemini_test.rs"]
mod tests;

use std::time::Duration;

use anyhow::bail;
use anyhow::Result;
use async_trait::async_trait;
use serde::Deserialize;
use serde::Serialize;

use crate::configuration::Config;
use crate::configuration::ConfigKey;
use crate::domain::models::Backend;
use crate::domain::models::CompletionReply;
use crate::domain::models::CompletionRequest;
use crate::domain::models::Speaker;

// The "user"/"model" vocabulary is Gemini's; the rest of the program only
// knows Speaker.
fn wire_role(speaker: Speaker) -> String {
    match speaker {
        Speaker::User => return "user".to_string(),
        Speaker::Assistant => return "model".to_string(),
    }
}

#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
struct ContentPart {
    text: String,
}

#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
struct Content {
    role: String,
    parts: Vec<ContentPart>,
}

#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
struct SystemInstruction {
    parts: Vec<ContentPart>,
}

#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest {
    contents: Vec<Content>,
    system_instruction: SystemInstruction,
}

#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<ContentPart>,
}

#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
struct Candidate {
    #[serde(default)]
    content: CandidateContent,
}

// Every field defaults so a reply with no candidates parses to an empty
// text instead of an error; only type-level garbage fails deserialization.
#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

impl GenerateContentResponse {
    fn text(&self) -> String {
        return self
            .candidates
            .first()
            .map(|candidate| {
                return candidate
                    .content
                    .parts
                    .iter()
                    .map(|part| return part.text.as_str())
                    .collect::<Vec<_>>()
                    .join("");
            })
            .unwrap_or_default();
    }
}

pub struct Gemini {
    url: String,
    token: String,
    model: String,
    health_check_timeout: String,
    request_timeout: String,
}

impl Default for Gemini {
    fn default() -> Gemini {
        return Gemini {
            url: Config::get(ConfigKey::GeminiURL),
            token: Config::get(ConfigKey::GeminiToken),
            model: Config::get(ConfigKey::Model),
            health_check_timeout: Config::get(ConfigKey::HealthCheckTimeout),
            request_timeout: Config::get(ConfigKey::RequestTimeout),
        };
    }
}

#[async_trait]
impl Backend for Gemini {
    #[allow(clippy::implicit_return)]
    async fn health_check(&self) -> Result<()> {
        if self.url.is_empty() {
            bail!("Gemini URL is not defined");
        }
        if self.token.is_empty() {
            bail!("Gemini token is not defined");
        }

        let url = format!(
            "{url}/v1beta/{model}?key={key}",
            url = self.url,
            model = self.model,
            key = self.token
        );

        let res = reqwest::Client::new()
            .get(&url)
            .timeout(Duration::from_millis(
                self.health_check_timeout.parse::<u64>()?,
            ))
            .send()
            .await;

        if res.is_err() {
            tracing::error!(error = ?res.unwrap_err(), "Gemini is not reachable");
            bail!("Gemini is not reachable");
        }

        let status = res.unwrap().status().as_u16();
        if status >= 400 {
            tracing::error!(status = status, "Gemini health check failed");
            bail!("Gemini health check failed");
        }

        return Ok(());
    }

    #[allow(clippy::implicit_return)]
    async fn complete(&self, request: CompletionRequest) -> Result<CompletionReply> {
        if self.url.is_empty() {
            bail!("Gemini URL is not defined");
        }
        if self.token.is_empty() {
            bail!("Gemini token is not defined");
        }

        let contents = request
            .history
            .iter()
            .map(|turn| {
                return Content {
                    role: wire_role(turn.speaker),
                    parts: vec![ContentPart {
                        text: turn.text.clone(),
                    }],
                };
            })
            .collect::<Vec<Content>>();

        let req = GenerateContentRequest {
            contents,
            system_instruction: SystemInstruction {
                parts: vec![ContentPart {
                    text: request.system_instruction,
                }],
            },
        };

        let res = reqwest::Client::new()
            .post(format!(
                "{url}/v1beta/{model}:generateContent?key={key}",
                url = self.url,
                model = self.model,
                key = self.token,
            ))
            .timeout(Duration::from_millis(self.request_timeout.parse::<u64>()?))
            .json(&req)
            .send()
            .await?;

        if !res.status().is_success() {
            tracing::error!(
                status = res.status().as_u16(),
                "Failed to make completion request to Gemini"
            );
            bail!(format!(
                "Failed to make completion request to Gemini, {}",
                res.status().as_u16()
            ));
        }

        let body = res.json::<GenerateContentResponse>().await?;

        return Ok(CompletionReply { text: body.text() });
    }
}
