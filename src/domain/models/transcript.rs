#[cfg(test)]
#[path = "transcript_test.rs"]
mod tests;

use super::Turn;

/// Append-only conversation history, insertion order is conversation order.
/// Owned exclusively by the assistant session; it grows for the lifetime of
/// the process and resets only by restarting.
#[derive(Clone, Debug, Default)]
pub struct Transcript {
    turns: Vec<Turn>,
}

impl Transcript {
    pub fn new() -> Transcript {
        return Transcript { turns: vec![] };
    }

    pub(crate) fn push(&mut self, turn: Turn) {
        self.turns.push(turn);
    }

    pub fn turns(&self) -> &[Turn] {
        return &self.turns;
    }

    pub fn len(&self) -> usize {
        return self.turns.len();
    }

    pub fn is_empty(&self) -> bool {
        return self.len() == 0;
    }

    pub fn last(&self) -> Option<&Turn> {
        return self.turns.last();
    }
}
