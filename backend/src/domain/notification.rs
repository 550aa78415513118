//! Toast notifications surfaced after state-changing actions.

use std::fmt;
use std::time::Duration;

use chrono::{DateTime, TimeDelta, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Lifetime applied when no override is configured.
pub const DEFAULT_NOTIFICATION_TTL: Duration = Duration::from_millis(3_000);

/// Longest lifetime a toast may be given.
pub const MAX_NOTIFICATION_TTL: Duration = Duration::from_secs(24 * 60 * 60);

/// Queue-issued identifier, unique and increasing for the queue's lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, ToSchema)]
#[serde(transparent)]
#[schema(value_type = u64, example = 1)]
pub struct NotificationId(u64);

impl NotificationId {
    /// Wrap a raw identifier, e.g. one taken from a request path.
    #[must_use]
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for NotificationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Visual weight of a toast.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Neutral feedback.
    #[default]
    Info,
    /// Confirmation of a completed action.
    Success,
}

/// A single toast.
///
/// Visible while the clock reads strictly before `expires_at`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    pub id: NotificationId,
    #[schema(example = "Identity Matrix Loaded: Architect / Creator")]
    pub message: String,
    pub severity: Severity,
    pub created_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}

impl Notification {
    /// Whether the toast is still within its lifetime at `now`.
    #[must_use]
    pub fn is_visible_at(&self, now: DateTime<Utc>) -> bool {
        now < self.expires_at
    }
}

/// Rejected notification lifetimes.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TtlError {
    /// A zero lifetime would hide every toast immediately.
    #[error("notification lifetime must be greater than zero")]
    Zero,
    /// Longer than [`MAX_NOTIFICATION_TTL`].
    #[error("notification lifetime of {millis} ms is out of range")]
    OutOfRange { millis: u128 },
}

/// Validated toast lifetime.
///
/// # Examples
/// ```
/// use std::time::Duration;
/// use ecosystem_shell::domain::NotificationTtl;
///
/// let ttl = NotificationTtl::from_millis(3_000).unwrap();
/// assert_eq!(ttl.as_duration(), Duration::from_secs(3));
/// assert!(NotificationTtl::from_millis(0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NotificationTtl {
    duration: Duration,
    delta: TimeDelta,
}

impl NotificationTtl {
    pub fn new(duration: Duration) -> Result<Self, TtlError> {
        if duration.is_zero() {
            return Err(TtlError::Zero);
        }
        let out_of_range = || TtlError::OutOfRange {
            millis: duration.as_millis(),
        };
        if duration > MAX_NOTIFICATION_TTL {
            return Err(out_of_range());
        }
        let delta = TimeDelta::from_std(duration).map_err(|_| out_of_range())?;
        Ok(Self { duration, delta })
    }

    pub fn from_millis(millis: u64) -> Result<Self, TtlError> {
        Self::new(Duration::from_millis(millis))
    }

    #[must_use]
    pub fn as_duration(&self) -> Duration {
        self.duration
    }

    pub(crate) fn as_delta(&self) -> TimeDelta {
        self.delta
    }
}

impl Default for NotificationTtl {
    fn default() -> Self {
        Self {
            duration: DEFAULT_NOTIFICATION_TTL,
            delta: TimeDelta::milliseconds(3_000),
        }
    }
}
