use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use chrono::{DateTime, Utc};
use tokio::sync::Mutex;
use crate::directory::UserPage;
use crate::session::flash::Notice;

/// Server side state of one signed in console session: the loaded page
/// snapshot the filter works on, the single delete latch and notices that
/// were not delivered yet.
#[derive(Debug)]
pub struct ConsoleSession {
    pub snapshot: Option<UserPage>,
    pub delete_busy: Arc<AtomicBool>,
    pub notices: Vec<Notice>,
    pub last_seen: DateTime<Utc>,
}

impl ConsoleSession {
    fn fresh() -> Self {
        ConsoleSession {
            snapshot: None,
            delete_busy: Arc::new(AtomicBool::new(false)),
            notices: Vec::new(),
            last_seen: Utc::now(),
        }
    }
}

/// Claim on the delete latch of one session. The latch stays shut for as
/// long as the permit lives and reopens in Drop, so a request dropped
/// mid flight releases it the same way a finished one does.
#[derive(Debug)]
pub struct DeletePermit {
    latch: Arc<AtomicBool>,
}

impl Drop for DeletePermit {
    fn drop(&mut self) {
        self.latch.store(false, Ordering::Release);
    }
}

/// All live sessions keyed by their opaque token. Clones share the map.
/// Unknown tokens get an empty session on first touch, so a console
/// restart only costs the cached snapshots, not the sign in.
#[derive(Debug, Clone, Default)]
pub struct SessionRegistry {
    inner: Arc<Mutex<HashMap<String, ConsoleSession>>>,
}

impl SessionRegistry {

    pub fn new() -> Self {
        SessionRegistry::default()
    }

    //every access runs through here so idle time restarts on use
    async fn with_session<T>(&self, token: &str, f: impl FnOnce(&mut ConsoleSession) -> T) -> T {
        let mut sessions = self.inner.lock().await;
        let session = sessions
            .entry(token.to_string())
            .or_insert_with(ConsoleSession::fresh);
        session.last_seen = Utc::now();
        f(session)
    }

    /// Replaces whatever was stored under this token with a clean session.
    pub async fn start_session(&self, token: &str) {
        let mut sessions = self.inner.lock().await;
        sessions.insert(token.to_string(), ConsoleSession::fresh());
    }

    pub async fn drop_session(&self, token: &str) {
        let mut sessions = self.inner.lock().await;
        sessions.remove(token);
    }

    pub async fn snapshot(&self, token: &str) -> Option<UserPage> {
        self.with_session(token, |session| session.snapshot.clone()).await
    }

    pub async fn store_snapshot(&self, token: &str, page: UserPage) {
        self.with_session(token, |session| session.snapshot = Some(page)).await
    }

    pub async fn clear_snapshot(&self, token: &str) {
        self.with_session(token, |session| session.snapshot = None).await
    }

    pub async fn push_notice(&self, token: &str, notice: Notice) {
        self.with_session(token, |session| session.notices.push(notice)).await
    }

    /// Hands out the undelivered notices and leaves the queue empty.
    pub async fn take_notices(&self, token: &str) -> Vec<Notice> {
        self.with_session(token, |session| std::mem::take(&mut session.notices)).await
    }

    /// Claims the delete latch. None means a delete of this session is
    /// still running and the caller must not start another one.
    pub async fn try_begin_delete(&self, token: &str) -> Option<DeletePermit> {
        self.with_session(token, |session| {
            session
                .delete_busy
                .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
                .is_ok()
                .then(|| DeletePermit { latch: session.delete_busy.clone() })
        })
        .await
    }

    pub async fn delete_busy(&self, token: &str) -> bool {
        self.with_session(token, |session| session.delete_busy.load(Ordering::Acquire)).await
    }

    /// Drops every session idle since before the cutoff, returns how many.
    pub async fn sweep_idle(&self, cutoff: DateTime<Utc>) -> usize {
        let mut sessions = self.inner.lock().await;
        let before = sessions.len();
        sessions.retain(|_, session| session.last_seen >= cutoff);
        before - sessions.len()
    }
}
