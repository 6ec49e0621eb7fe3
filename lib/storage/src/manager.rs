use crate::session::{Session, SessionInfo};
use biobot_core::{Dataset, Error, QuestionTable, Record, Result};
use chrono::Utc;
use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;
use uuid::Uuid;

pub const DEFAULT_MAX_SESSIONS: usize = 1024;
pub const DEFAULT_SESSION_TTL: Duration = Duration::from_secs(60 * 60);

/// Bounds on the live session map
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionLimits {
    /// Sessions kept at most; the least recently used go first
    pub max_sessions: usize,
    /// Sessions idle for longer than this are dropped
    pub idle_ttl: Duration,
}

impl Default for SessionLimits {
    fn default() -> Self {
        Self {
            max_sessions: DEFAULT_MAX_SESSIONS,
            idle_ttl: DEFAULT_SESSION_TTL,
        }
    }
}

/// Built-in tables plus the live sessions
///
/// The built-in tables are fixed once the manager is built; sessions copy
/// them and merge uploads into their own copy.
pub struct SessionManager {
    builtins: HashMap<Dataset, Arc<QuestionTable>>,
    sessions: Arc<RwLock<HashMap<Uuid, Session>>>,
    limits: SessionLimits,
}

impl SessionManager {
    pub fn new() -> Self {
        Self::with_extra(Dataset::Mdcat, Vec::new())
    }

    /// Built-in tables with `extra` rows appended to `dataset`
    pub fn with_extra(dataset: Dataset, extra: Vec<Record>) -> Self {
        let mut builtins = HashMap::new();
        for ds in Dataset::ALL {
            let mut table = ds.table();
            if ds == dataset && !extra.is_empty() {
                let total = table.merge(extra.iter().cloned());
                tracing::info!(dataset = %ds, added = extra.len(), total, "extended built-in table");
            }
            builtins.insert(ds, Arc::new(table));
        }
        Self {
            builtins,
            sessions: Arc::new(RwLock::new(HashMap::new())),
            limits: SessionLimits::default(),
        }
    }

    pub fn with_limits(mut self, limits: SessionLimits) -> Self {
        self.limits = limits;
        self
    }

    pub fn limits(&self) -> SessionLimits {
        self.limits
    }

    pub fn builtin(&self, dataset: Dataset) -> Arc<QuestionTable> {
        self.builtins
            .get(&dataset)
            .cloned()
            .unwrap_or_else(|| Arc::new(dataset.table()))
    }

    /// (dataset, row count) for every built-in table
    pub fn datasets(&self) -> Vec<(Dataset, usize)> {
        Dataset::ALL
            .iter()
            .map(|&ds| (ds, self.builtin(ds).len()))
            .collect()
    }

    /// Create a session over a copy of a built-in table
    ///
    /// Idle sessions are dropped first; if the map is still full, the least
    /// recently used sessions make room for the new one.
    pub fn create_session(&self, dataset: Dataset) -> SessionInfo {
        let table = self.builtin(dataset).as_ref().clone();
        let session = Session::new(dataset, table);
        let info = session.info();

        let mut sessions = self.sessions.write();
        let mut evicted = evict_idle(&mut sessions, self.limits.idle_ttl);
        while !sessions.is_empty() && sessions.len() >= self.limits.max_sessions.max(1) {
            let oldest = sessions
                .iter()
                .min_by_key(|(_, s)| s.last_access())
                .map(|(id, _)| *id);
            match oldest {
                Some(id) => {
                    sessions.remove(&id);
                    evicted += 1;
                }
                None => break,
            }
        }
        sessions.insert(info.id, session);
        drop(sessions);

        if evicted > 0 {
            tracing::info!(evicted, "evicted sessions");
        }
        tracing::debug!(session = %info.id, %dataset, "created session");
        info
    }

    /// Drop sessions idle for longer than the TTL; returns how many went
    pub fn evict_idle(&self) -> usize {
        let evicted = evict_idle(&mut self.sessions.write(), self.limits.idle_ttl);
        if evicted > 0 {
            tracing::info!(evicted, "evicted idle sessions");
        }
        evicted
    }

    pub fn get(&self, id: Uuid) -> Option<SessionInfo> {
        self.sessions.read().get(&id).map(|session| {
            session.touch();
            session.info()
        })
    }

    pub fn contains(&self, id: Uuid) -> bool {
        self.sessions.read().contains_key(&id)
    }

    pub fn delete(&self, id: Uuid) -> bool {
        self.sessions.write().remove(&id).is_some()
    }

    pub fn list(&self) -> Vec<SessionInfo> {
        let mut infos: Vec<SessionInfo> = self.sessions.read().values().map(Session::info).collect();
        infos.sort_by_key(|info| info.created_at);
        infos
    }

    pub fn count(&self) -> usize {
        self.sessions.read().len()
    }

    /// Run `f` against a session under the read lock
    pub fn with_session<T>(&self, id: Uuid, f: impl FnOnce(&Session) -> T) -> Result<T> {
        let sessions = self.sessions.read();
        let session = sessions
            .get(&id)
            .ok_or_else(|| Error::SessionNotFound(id.to_string()))?;
        session.touch();
        Ok(f(session))
    }

    /// Run `f` against a session under the write lock
    pub fn with_session_mut<T>(&self, id: Uuid, f: impl FnOnce(&mut Session) -> Result<T>) -> Result<T> {
        let mut sessions = self.sessions.write();
        let session = sessions
            .get_mut(&id)
            .ok_or_else(|| Error::SessionNotFound(id.to_string()))?;
        session.touch();
        f(session)
    }
}

fn evict_idle(sessions: &mut HashMap<Uuid, Session>, ttl: Duration) -> usize {
    let now = Utc::now();
    let before = sessions.len();
    sessions.retain(|_, session| session.idle_for(now) <= ttl);
    before - sessions.len()
}

impl Default for SessionManager {
    fn default() -> Self {
        Self::new()
    }
}
