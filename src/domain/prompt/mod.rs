//! Prompt composition
//!
//! A deterministic template merging retrieved context, the current question
//! and recent chat history into one prompt string. Same inputs always
//! produce the same prompt, so prompt construction is testable without a
//! generative model.

use crate::domain::memory::ConversationTurn;
use crate::domain::retrieval::RetrievedChunk;

const PERSONA: &str = "You are Nova, a friendly and engaging AI assistant. You're knowledgeable \
about the company and genuinely interested in helping people. Your responses should be thorough \
and warm, while maintaining professionalism.";

const GUIDELINES: &str = "Guidelines for your response:
- Start with a brief, natural acknowledgment (mix it up each time).
- Answer the question directly and stick to the point.
- Keep it short: 2-3 sentences or under ~60 words.
- Use a casual, friendly tone suited for quick chat.
- If unsure, say \"I'm not sure, but here's what I know...\"
- End with a quick offer to help them.";

/// Deterministic prompt template with context, question and chat_history
/// slots. All three slots are always present; any of them may be empty.
#[derive(Debug, Clone, Default)]
pub struct PromptComposer;

impl PromptComposer {
    pub fn new() -> Self {
        Self
    }

    pub fn compose(
        &self,
        context: &[RetrievedChunk],
        question: &str,
        history: &[ConversationTurn],
    ) -> String {
        format!(
            "{PERSONA}\n\nContext information: {}\n\nQuestion: {}\n\nPrevious chat: {}\n\n{GUIDELINES}\n\nResponse:",
            render_context(context),
            question,
            render_history(history),
        )
    }
}

fn render_context(context: &[RetrievedChunk]) -> String {
    context
        .iter()
        .map(|chunk| chunk.text.as_str())
        .collect::<Vec<_>>()
        .join("\n\n")
}

fn render_history(history: &[ConversationTurn]) -> String {
    history
        .iter()
        .map(|turn| format!("Human: {}\nNova: {}", turn.question, turn.answer))
        .collect::<Vec<_>>()
        .join("\n")
}
