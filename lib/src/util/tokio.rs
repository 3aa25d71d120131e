use std::future::Future;
use std::time::Duration;

use thiserror::Error;

/// Why a task started with [`spawn_timeout`] produced no value.
#[derive(Debug, Error)]
pub enum SpawnError {
    #[error("tokio task timeout after {0:?}")]
    Timeout(Duration),
    #[error("tokio task failed to join: {0}")]
    Join(#[from] tokio::task::JoinError),
}

/// Spawns a future as a Tokio task and applies a timeout to it.
///
/// # Errors
///
/// - If the timeout is reached
/// - If the task fails to join
pub async fn spawn_timeout<T>(
    duration: Duration,
    future: impl Future<Output = T> + Send + 'static,
) -> Result<T, SpawnError>
where
    T: Send + 'static,
{
    let task = tokio::spawn(future);
    let t = tokio::time::timeout(duration, task)
        .await
        .map_err(|_elapsed| SpawnError::Timeout(duration))??;
    Ok(t)
}
