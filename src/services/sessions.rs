use std::collections::HashMap;
use std::sync::Mutex;

use chrono::{Duration, NaiveDateTime, Utc};

use crate::services::wizard::BookingDraft;

pub struct BookingSession {
    pub draft: BookingDraft,
    pub last_activity: NaiveDateTime,
}

/// Owner of every booking draft, keyed by session id.
///
/// The lock is never held across an `.await`; callers get a closure-scoped
/// `&mut BookingDraft` through [`BookingSessions::with_draft`].
#[derive(Default)]
pub struct BookingSessions {
    inner: Mutex<HashMap<String, BookingSession>>,
}

impl BookingSessions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn create(&self, draft: BookingDraft) -> String {
        let id = uuid::Uuid::new_v4().to_string();
        let session = BookingSession {
            draft,
            last_activity: Utc::now().naive_utc(),
        };
        self.lock().insert(id.clone(), session);
        id
    }

    /// Runs `f` against the draft for `id`, or returns `None` for an unknown session.
    pub fn with_draft<T>(&self, id: &str, f: impl FnOnce(&mut BookingDraft) -> T) -> Option<T> {
        let mut sessions = self.lock();
        let session = sessions.get_mut(id)?;
        let out = f(&mut session.draft);
        session.draft.debug_assert_invariants();
        session.last_activity = Utc::now().naive_utc();
        Some(out)
    }

    pub fn snapshot(&self, id: &str) -> Option<BookingDraft> {
        self.lock().get(id).map(|s| s.draft.clone())
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Drops sessions idle for longer than `ttl`. Returns how many were removed.
    pub fn expire_idle(&self, ttl: Duration) -> usize {
        let cutoff = Utc::now().naive_utc() - ttl;
        let mut sessions = self.lock();
        let before = sessions.len();
        sessions.retain(|_, s| s.last_activity > cutoff);
        before - sessions.len()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, HashMap<String, BookingSession>> {
        // Transitions never panic midway, so a poisoned map is still consistent
        self.inner.lock().unwrap_or_else(|e| e.into_inner())
    }
}
