//! # Capability Readiness Gate
//!
//! Waits for an optional external capability to become ready, with a
//! bounded timeout, before the dependent action is allowed to run.
//!
//! ## Why a Gate?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  The templating facility is loaded lazily by the host application.      │
//! │  Generating a document the instant the user clicks would race that      │
//! │  load. The gate polls the capability's readiness probe on an interval   │
//! │  and gives up after a bounded timeout:                                  │
//! │                                                                         │
//! │  click ──► wait_until_ready(probe) ──┬── ready ──► render + save        │
//! │                                      └── timeout ──► Unavailable        │
//! │                                                      ("try again")      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The engines themselves are never gated — they are synchronous pure
//! functions callable before and after any of this.

use std::time::Duration;

use tracing::{debug, warn};

use crate::error::{ExportError, ExportResult};

// =============================================================================
// Settings
// =============================================================================

/// Readiness polling settings.
///
/// There is no configuration file for these — the host passes overrides
/// in-process if its load times warrant them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReadinessSettings {
    /// Give up after this long (milliseconds).
    pub timeout_ms: u64,

    /// Interval between probe polls (milliseconds).
    pub poll_interval_ms: u64,
}

impl Default for ReadinessSettings {
    fn default() -> Self {
        ReadinessSettings {
            timeout_ms: 3_000,
            poll_interval_ms: 100,
        }
    }
}

// =============================================================================
// Gate
// =============================================================================

/// Polls `probe` until it reports ready or the timeout elapses.
///
/// ## Errors
/// `ExportError::Unavailable` (naming `capability`) on timeout.
pub async fn wait_until_ready<F>(
    capability: &str,
    probe: F,
    settings: &ReadinessSettings,
) -> ExportResult<()>
where
    F: Fn() -> bool,
{
    let deadline = Duration::from_millis(settings.timeout_ms);
    let poll = Duration::from_millis(settings.poll_interval_ms);

    let waited = tokio::time::timeout(deadline, async {
        let mut polls: u32 = 0;
        while !probe() {
            polls += 1;
            tokio::time::sleep(poll).await;
        }
        polls
    })
    .await;

    match waited {
        Ok(polls) => {
            debug!(capability, polls, "capability ready");
            Ok(())
        }
        Err(_) => {
            warn!(
                capability,
                timeout_ms = settings.timeout_ms,
                "capability never became ready"
            );
            Err(ExportError::Unavailable {
                capability: capability.to_string(),
            })
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
