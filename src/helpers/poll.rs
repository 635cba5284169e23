use std::future::Future;
use std::time::Duration;
use thiserror::Error;
use crate::config::constants::{
    DEFAULT_POLL_BACKOFF_FACTOR, DEFAULT_POLL_INITIAL_DELAY_MS, DEFAULT_POLL_MAX_ATTEMPTS,
    DEFAULT_POLL_MAX_DELAY_MS,
};
use crate::structs::config::poll_config::PollConfig;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PollError {
    #[error("condition not met after {attempts} attempts")]
    Timeout { attempts: u32 },

    #[error("invalid poll policy: {0}")]
    InvalidPolicy(String),
}

/// Exponential backoff schedule for [`wait_for_true`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PollPolicy {
    pub initial_delay: Duration,
    pub backoff_factor: f64,
    pub max_delay: Duration,
    pub max_attempts: u32,
}

impl Default for PollPolicy {
    fn default() -> Self {
        Self {
            initial_delay: Duration::from_millis(DEFAULT_POLL_INITIAL_DELAY_MS),
            backoff_factor: DEFAULT_POLL_BACKOFF_FACTOR,
            max_delay: Duration::from_millis(DEFAULT_POLL_MAX_DELAY_MS),
            max_attempts: DEFAULT_POLL_MAX_ATTEMPTS,
        }
    }
}

impl PollPolicy {
    pub fn validate(&self) -> Result<(), PollError> {
        if self.max_attempts == 0 {
            return Err(PollError::InvalidPolicy("max_attempts must be at least 1".to_string()));
        }
        if !self.backoff_factor.is_finite() || self.backoff_factor < 1.0 {
            return Err(PollError::InvalidPolicy(format!(
                "backoff_factor must be >= 1.0, got {}",
                self.backoff_factor
            )));
        }
        Ok(())
    }

    /// Delay to sleep after the given (0-based) failed attempt.
    // `scaled_ms` is finite, non-negative and below `max_delay` when cast back.
    #[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss, clippy::cast_sign_loss)]
    pub fn delay_for(&self, attempt: u32) -> Duration {
        let exponent = i32::try_from(attempt).unwrap_or(i32::MAX);
        let initial_ms = self.initial_delay.as_millis() as f64;
        let scaled_ms = initial_ms * self.backoff_factor.powi(exponent);
        if !scaled_ms.is_finite() || scaled_ms >= self.max_delay.as_millis() as f64 {
            self.max_delay
        } else {
            Duration::from_millis(scaled_ms.round() as u64)
        }
    }
}

impl From<&PollConfig> for PollPolicy {
    fn from(config: &PollConfig) -> Self {
        Self {
            initial_delay: Duration::from_millis(config.initial_delay_ms),
            backoff_factor: config.backoff_factor,
            max_delay: Duration::from_millis(config.max_delay_ms),
            max_attempts: config.max_attempts,
        }
    }
}

/// Calls `check` until it returns true, sleeping with exponential backoff in between.
/// Returns the number of attempts it took.
pub async fn wait_for_true<F, Fut>(mut check: F, policy: &PollPolicy) -> Result<u32, PollError>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = bool>,
{
    policy.validate()?;

    for attempt in 0..policy.max_attempts {
        if check().await {
            log::debug!("Poll condition met after {} attempt(s)", attempt + 1);
            return Ok(attempt + 1);
        }

        if attempt + 1 < policy.max_attempts {
            let delay = policy.delay_for(attempt);
            log::debug!("Poll attempt {} failed, retrying in {:?}", attempt + 1, delay);
            tokio::time::sleep(delay).await;
        }
    }

    Err(PollError::Timeout { attempts: policy.max_attempts })
}
