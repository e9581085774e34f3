//! Chat command - interactive console loop
//!
//! Reads lines from the console, answers through the pipeline + guard, and
//! prints responses. `exit`/`quit` (any case) ends the session; empty lines
//! are skipped. One console session shares one conversation memory.

use std::io::{self, BufRead, Write};

use async_trait::async_trait;
use tracing::{error, info, warn};
use uuid::Uuid;

use crate::api::state::AppState;
use crate::config::AppConfig;
use crate::domain::guardrails::{FallbackPolicy, REFUSAL};
use crate::infrastructure::logging;

const GREETING: &str = "\nHi! I'm Nova, your friendly AI assistant. I'm here to help you with any \
questions you have about our company. Feel free to ask anything, and I'll do my best to provide \
thorough and helpful information!\n(Type 'exit' or 'quit' to end our chat)\n";

const FAREWELL: &str = "\nNova: Bye! Take care!";

const RETRY_PROMPT: &str = "Sorry, could you try asking that again?";

pub async fn run() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config = AppConfig::load().unwrap_or_default();
    logging::init_logging(&config.logging)?;
    info!("Starting Nova console chat");

    let state = crate::create_app_state(&config)?;
    let responder = SessionResponder::new(state);

    let stdin = io::stdin();
    let stdout = io::stdout();
    run_loop(stdin.lock(), stdout.lock(), &responder).await?;

    info!("Chat session ended by user");
    Ok(())
}

/// What to do with one console line
#[derive(Debug, PartialEq, Eq)]
enum LoopAction {
    Quit,
    Skip,
    Ask(String),
}

fn classify(line: &str) -> LoopAction {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        LoopAction::Skip
    } else if trimmed.eq_ignore_ascii_case("exit") || trimmed.eq_ignore_ascii_case("quit") {
        LoopAction::Quit
    } else {
        LoopAction::Ask(trimmed.to_string())
    }
}

/// Produces one answer per question; the loop never sees errors
#[async_trait]
trait Responder: Send + Sync {
    async fn respond(&self, question: &str) -> String;
}

/// Answers via the pipeline + guard within a single console session
struct SessionResponder {
    state: AppState,
    session_id: String,
}

impl SessionResponder {
    fn new(state: AppState) -> Self {
        Self {
            state,
            session_id: Uuid::new_v4().to_string(),
        }
    }
}

#[async_trait]
impl Responder for SessionResponder {
    async fn respond(&self, question: &str) -> String {
        info!(session_id = %self.session_id, "User input: {}", question);

        let raw = match self.state.pipeline.answer(&self.session_id, question).await {
            Ok(raw) => raw,
            Err(e) => {
                error!(error = %e, "Error in conversation loop");
                return RETRY_PROMPT.to_string();
            }
        };

        match self.state.guard.validate(&raw).await {
            Ok(validated) => validated,
            Err(e) => {
                warn!(error = %e, "Validation failed");
                match self.state.fallback_policy {
                    FallbackPolicy::FailOpen => raw,
                    FallbackPolicy::FailClosed => REFUSAL.to_string(),
                }
            }
        }
    }
}

async fn run_loop<R, W>(input: R, mut output: W, responder: &dyn Responder) -> io::Result<()>
where
    R: BufRead,
    W: Write,
{
    writeln!(output, "{GREETING}")?;

    for line in input.lines() {
        let line = line?;
        match classify(&line) {
            LoopAction::Quit => {
                writeln!(output, "{FAREWELL}")?;
                break;
            }
            LoopAction::Skip => continue,
            LoopAction::Ask(question) => {
                let answer = responder.respond(&question).await;
                writeln!(output, "Nova: {answer}\n")?;
            }
        }
    }

    Ok(())
}
