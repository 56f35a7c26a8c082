use super::CompletionRequest;

pub enum Action {
    CompletionRequest(CompletionRequest),
}
