//! Short-term conversation memory
//!
//! A bounded window of the most recent (question, answer) pairs, used to
//! condition prompts on dialogue history. Memory is keyed by session so
//! concurrent callers never share history.

pub mod session;

pub use session::SessionStore;

use std::collections::VecDeque;

/// One (question, answer) exchange
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversationTurn {
    pub question: String,
    pub answer: String,
}

impl ConversationTurn {
    pub fn new(question: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            answer: answer.into(),
        }
    }
}

/// Bounded FIFO buffer of the last `window` turns.
/// Appending when full evicts the oldest turn first.
#[derive(Debug, Clone)]
pub struct ConversationMemory {
    turns: VecDeque<ConversationTurn>,
    window: usize,
}

impl ConversationMemory {
    pub const DEFAULT_WINDOW: usize = 5;

    pub fn new(window: usize) -> Self {
        Self {
            turns: VecDeque::with_capacity(window),
            window,
        }
    }

    pub fn append(&mut self, turn: ConversationTurn) {
        if self.window == 0 {
            return;
        }
        if self.turns.len() == self.window {
            self.turns.pop_front();
        }
        self.turns.push_back(turn);
    }

    /// Turns in order, most recent last
    pub fn recent(&self) -> Vec<ConversationTurn> {
        self.turns.iter().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.turns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }
}

impl Default for ConversationMemory {
    fn default() -> Self {
        Self::new(Self::DEFAULT_WINDOW)
    }
}
