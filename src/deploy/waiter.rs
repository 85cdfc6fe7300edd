// ABOUTME: Readiness waiter: polls until a published version is terminal.
// ABOUTME: Bounded by the configured deadline; never retries past Failed.

use super::error::DeployError;
use crate::config::WaitConfig;
use crate::platform::{FunctionOps, FunctionState};
use crate::types::FunctionName;
use std::time::Instant;

/// Poll the platform at a fixed interval until the function reports Active.
///
/// Failed is terminal and aborts with the platform-supplied reason; an
/// intermediate state is logged and polled again. The wait never sleeps past
/// the deadline: when the next poll could not start before `wait.timeout`
/// elapses, the wait aborts with `ActivationTimeout`.
pub async fn await_active<P: FunctionOps>(
    platform: &P,
    function: &FunctionName,
    wait: &WaitConfig,
) -> Result<(), DeployError> {
    let start = Instant::now();

    loop {
        let status = platform
            .get_function(function)
            .await
            .map_err(|e| DeployError::StatusCheckFailed(e.to_string()))?;

        match status.state {
            FunctionState::Active => {
                tracing::debug!(%function, "function is active");
                return Ok(());
            }
            FunctionState::Failed => {
                let reason = status
                    .reason
                    .unwrap_or_else(|| "no reason reported".to_string());
                return Err(DeployError::ActivationFailed(reason));
            }
            _ => {
                if start.elapsed() + wait.interval >= wait.timeout {
                    return Err(DeployError::ActivationTimeout(wait.timeout.as_secs()));
                }
                tracing::info!(
                    %function,
                    state = %status.raw_state,
                    "function not ready yet, retrying"
                );
                tokio::time::sleep(wait.interval).await;
            }
        }
    }
}
