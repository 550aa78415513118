//! Session and notification store shared by every adapter.
//!
//! One [`DemoStore`] is built at startup and handed to adapters explicitly.
//! Session and queue live behind a single mutex so logins, logouts, and toast
//! appends/removals are applied one at a time.
//!
//! Each toast gets an expiry task on the tokio runtime. The tasks hold a weak
//! reference to the state and live in a `JoinSet` owned by the store, so
//! dropping the store cancels every pending removal.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError, Weak};

use mockable::{Clock, DefaultClock};
use tokio::runtime::Handle;
use tokio::task::JoinSet;
use tracing::{debug, info, trace};

use super::navigation::{self, NavigationItem};
use super::ports::{ExpirySleeper, TokioSleeper};
use super::{
    Notification, NotificationId, NotificationQueue, NotificationTtl, Role, Session, Severity,
    ShellProfile,
};

/// Message shown after signing out.
pub const LOGOUT_MESSAGE: &str = "Neural Link Severed.";

/// Rejected `trigger_action` input.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ActionError {
    #[error("action name must not be empty")]
    EmptyName,
}

/// Runtime services used by the store.
pub struct StoreRuntime {
    /// Source of toast timestamps.
    pub clock: Arc<dyn Clock + Send + Sync>,
    /// Delay before an expiry task removes its toast.
    pub sleeper: Arc<dyn ExpirySleeper>,
}

impl Default for StoreRuntime {
    fn default() -> Self {
        Self {
            clock: Arc::new(DefaultClock),
            sleeper: Arc::new(TokioSleeper),
        }
    }
}

struct StoreState {
    session: Option<Session>,
    queue: NotificationQueue,
}

impl StoreState {
    fn push(&mut self, message: impl Into<String>, severity: Severity) -> NotificationId {
        self.queue.purge_expired();
        self.queue.enqueue(message, severity)
    }
}

/// Process-wide session and notification state.
///
/// # Examples
/// ```
/// use ecosystem_shell::domain::{DemoStore, NotificationTtl, Role, StoreRuntime};
///
/// let store = DemoStore::new(StoreRuntime::default(), NotificationTtl::default());
/// store.login(Role::Architect);
/// assert_eq!(store.navigation()[0].target, "/studio");
/// assert_eq!(store.notifications().len(), 1);
/// ```
pub struct DemoStore {
    state: Arc<Mutex<StoreState>>,
    sleeper: Arc<dyn ExpirySleeper>,
    ttl: NotificationTtl,
    timers: Mutex<JoinSet<()>>,
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

impl DemoStore {
    pub fn new(runtime: StoreRuntime, ttl: NotificationTtl) -> Self {
        let StoreRuntime { clock, sleeper } = runtime;
        Self {
            state: Arc::new(Mutex::new(StoreState {
                session: None,
                queue: NotificationQueue::new(clock, ttl),
            })),
            sleeper,
            ttl,
            timers: Mutex::new(JoinSet::new()),
        }
    }

    /// Replace the current session with a fresh one for `role`.
    pub fn login(&self, role: Role) -> Session {
        let session = Session::new(role);
        let id = {
            let mut state = lock(&self.state);
            state.session = Some(session.clone());
            state.push(
                format!("Identity Matrix Loaded: {}", role.label()),
                Severity::Success,
            )
        };
        self.schedule_expiry(id);
        info!(role = %role, "session established");
        session
    }

    /// Sign in from an untyped role name; unknown names change nothing.
    pub fn login_by_id(&self, raw: &str) -> Option<Session> {
        match Role::parse(raw) {
            Ok(role) => Some(self.login(role)),
            Err(error) => {
                debug!(%error, "ignoring login for unknown role");
                None
            }
        }
    }

    /// Return to the guest state.
    pub fn logout(&self) {
        let (previous, id) = {
            let mut state = lock(&self.state);
            let previous = state.session.take();
            (previous, state.push(LOGOUT_MESSAGE, Severity::Info))
        };
        self.schedule_expiry(id);
        match previous {
            Some(session) => info!(role = %session.role(), "session cleared"),
            None => debug!("logout without an active session"),
        }
    }

    pub fn current_session(&self) -> Option<Session> {
        lock(&self.state).session.clone()
    }

    /// Menu for the current session.
    pub fn navigation(&self) -> &'static [NavigationItem] {
        navigation::resolve(lock(&self.state).session.as_ref())
    }

    /// Profile badge for the current session.
    pub fn profile(&self) -> ShellProfile {
        ShellProfile::for_session(lock(&self.state).session.as_ref())
    }

    /// Append a toast and schedule its removal.
    pub fn enqueue(&self, message: impl Into<String>, severity: Severity) -> NotificationId {
        let id = lock(&self.state).push(message, severity);
        self.schedule_expiry(id);
        id
    }

    /// Remove a toast early; `false` if it was already gone.
    pub fn dismiss(&self, id: NotificationId) -> bool {
        lock(&self.state).queue.dismiss(id)
    }

    /// Toasts currently visible, oldest first.
    pub fn notifications(&self) -> Vec<Notification> {
        lock(&self.state).queue.visible()
    }

    /// Echo a named UI command back as a success toast.
    pub fn trigger_action(&self, name: &str) -> Result<NotificationId, ActionError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(ActionError::EmptyName);
        }
        info!(action = name, "demo action");
        Ok(self.enqueue(format!("Command Executed: {name}"), Severity::Success))
    }

    fn schedule_expiry(&self, id: NotificationId) {
        let Ok(handle) = Handle::try_current() else {
            trace!(%id, "no runtime; toast expires by deadline only");
            return;
        };
        let state: Weak<Mutex<StoreState>> = Arc::downgrade(&self.state);
        let sleeper = Arc::clone(&self.sleeper);
        let ttl = self.ttl.as_duration();

        let mut timers = lock(&self.timers);
        while timers.try_join_next().is_some() {}
        timers.spawn_on(
            async move {
                sleeper.sleep(ttl).await;
                if let Some(state) = state.upgrade() {
                    let removed = lock(&state).queue.dismiss(id);
                    trace!(%id, removed, "toast expiry fired");
                }
            },
            &handle,
        );
    }
}

impl Drop for DemoStore {
    fn drop(&mut self) {
        let timers = self.timers.get_mut().unwrap_or_else(PoisonError::into_inner);
        timers.abort_all();
    }
}
