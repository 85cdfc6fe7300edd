// ABOUTME: Confirmation gate between the blue and green rollout halves.
// ABOUTME: Injected so the orchestrator core is testable without real stdin.

use async_trait::async_trait;
use parking_lot::Mutex;
use thiserror::Error;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::oneshot;

#[derive(Debug, Error)]
pub enum GateError {
    #[error("gate input closed before approval")]
    Closed,

    #[error("failed to read gate input: {0}")]
    Io(#[from] std::io::Error),
}

/// A blocking external signal: the green phase does not start until `wait`
/// returns. No timeout; cancellable only by process termination.
#[async_trait]
pub trait Gate: Send + Sync {
    async fn wait(&self) -> Result<(), GateError>;
}

/// Interactive gate: a line on stdin (typically just Enter) approves.
pub struct StdinGate {
    prompt: String,
}

impl StdinGate {
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
        }
    }
}

#[async_trait]
impl Gate for StdinGate {
    async fn wait(&self) -> Result<(), GateError> {
        println!("{}", self.prompt);

        let mut line = String::new();
        let mut reader = BufReader::new(tokio::io::stdin());
        let read = reader.read_line(&mut line).await?;
        if read == 0 {
            // EOF without input: nobody can approve anymore
            return Err(GateError::Closed);
        }
        Ok(())
    }
}

/// Non-interactive gate that approves immediately (`deploy --yes`).
pub struct AutoGate;

#[async_trait]
impl Gate for AutoGate {
    async fn wait(&self) -> Result<(), GateError> {
        tracing::debug!("confirmation gate auto-approved");
        Ok(())
    }
}

/// Gate driven by a oneshot channel; the test side holds the sender.
pub struct ChannelGate {
    receiver: Mutex<Option<oneshot::Receiver<()>>>,
}

impl ChannelGate {
    pub fn new() -> (Self, oneshot::Sender<()>) {
        let (sender, receiver) = oneshot::channel();
        (
            Self {
                receiver: Mutex::new(Some(receiver)),
            },
            sender,
        )
    }
}

#[async_trait]
impl Gate for ChannelGate {
    async fn wait(&self) -> Result<(), GateError> {
        let receiver = self.receiver.lock().take().ok_or(GateError::Closed)?;
        receiver.await.map_err(|_| GateError::Closed)
    }
}
