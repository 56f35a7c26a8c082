use anyhow::Result;
use tui_textarea::Input;

use super::CompletionReply;

pub enum Event {
    BackendHealth(bool),
    CompletionSettled(Result<CompletionReply>),
    KeyboardCharInput(Input),
    KeyboardCTRLC(),
    KeyboardEnter(),
    KeyboardPaste(String),
    UIResize(),
    UIScrollDown(),
    UIScrollUp(),
    UIScrollPageDown(),
    UIScrollPageUp(),
    UITick(),
}
