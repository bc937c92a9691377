//! Bounded retry with exponential backoff for remote assistant calls.

use super::types::{AssistantError, AssistantResult, RetryPolicy};
use std::future::Future;
use tracing::{info, warn};

/// Run `operation` under the given policy, re-invoking it on retryable
/// failures with an exponential delay between attempts.
///
/// The `is_retryable` predicate decides per error whether another attempt is
/// allowed; permanent rejections (see [`AssistantError::is_retryable`])
/// propagate immediately without any delay.
pub async fn with_retry<T, F, Fut, P>(
    policy: &RetryPolicy,
    is_retryable: P,
    mut operation: F,
) -> AssistantResult<T>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = AssistantResult<T>>,
    P: Fn(&AssistantError) -> bool,
{
    let max_attempts = policy.max_attempts.max(1);

    for attempt in 0..max_attempts {
        match operation().await {
            Ok(value) => {
                if attempt > 0 {
                    info!("call succeeded on attempt {}", attempt + 1);
                }
                return Ok(value);
            }
            Err(error) => {
                if attempt + 1 < max_attempts && is_retryable(&error) {
                    let delay = policy.delay(attempt);
                    warn!(
                        "call failed (attempt {}/{}): {}, retrying in {}ms",
                        attempt + 1,
                        max_attempts,
                        error,
                        delay.as_millis()
                    );
                    tokio::time::sleep(delay).await;
                    continue;
                }
                return Err(error);
            }
        }
    }

    // Not reachable with max_attempts >= 1, but keep the loop total.
    Err(AssistantError::Network(
        "retry loop completed without result".into(),
    ))
}
