use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};

use tokio::sync::Mutex;
use tracing::info;
use uuid::Uuid;

use mindcheck_bedrock::analysis::ResultsAnalyst;
use mindcheck_bedrock::generator::TextGenerator;
use mindcheck_bedrock::suggest::SuggestionMatcher;
use mindcheck_instruments::catalog::Catalog;
use mindcheck_instruments::flow::QuestionFlow;
use mindcheck_storage::results::ResultStore;
use mindcheck_storage::session::MemorySessionStore;

use crate::error::ApiError;

/// Idle time after which a session and everything in it is dropped.
pub const DEFAULT_SESSION_TTL: Duration = Duration::from_secs(60 * 60);

pub type Run = QuestionFlow<MemorySessionStore>;

/// One visitor's session: a key-value store plus the runs in progress.
///
/// Completed runs are removed; their results live on in the store.
pub struct Session {
    pub store: MemorySessionStore,
    pub runs: HashMap<Uuid, Run>,
    last_seen: Instant,
}

impl Session {
    fn new() -> Self {
        Self {
            store: MemorySessionStore::new(),
            runs: HashMap::new(),
            last_seen: Instant::now(),
        }
    }

    pub fn results(&self) -> ResultStore<MemorySessionStore> {
        ResultStore::new(self.store.clone())
    }

    pub fn run_mut(&mut self, run_id: Uuid) -> Result<&mut Run, ApiError> {
        self.runs
            .get_mut(&run_id)
            .ok_or_else(|| ApiError::NotFound(format!("run not found: {run_id}")))
    }
}

/// Live sessions keyed by the client-chosen session id.
///
/// Only [`open`](Self::open) creates a session, so reads of unknown ids
/// leave the map unchanged. Every access first drops sessions idle for
/// longer than the TTL.
pub struct Sessions {
    entries: HashMap<Uuid, Session>,
    ttl: Duration,
}

impl Sessions {
    pub fn new(ttl: Duration) -> Self {
        Self {
            entries: HashMap::new(),
            ttl,
        }
    }

    /// The session for `id`, created if absent.
    pub fn open(&mut self, id: Uuid) -> &mut Session {
        self.evict_idle();
        let session = self.entries.entry(id).or_insert_with(Session::new);
        session.last_seen = Instant::now();
        session
    }

    /// The session for `id` if it exists.
    pub fn get_mut(&mut self, id: Uuid) -> Option<&mut Session> {
        self.evict_idle();
        let session = self.entries.get_mut(&id)?;
        session.last_seen = Instant::now();
        Some(session)
    }

    /// Like [`get_mut`](Self::get_mut), but a missing session is an error.
    pub fn existing(&mut self, id: Uuid) -> Result<&mut Session, ApiError> {
        self.get_mut(id)
            .ok_or_else(|| ApiError::NotFound(format!("session not found: {id}")))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn evict_idle(&mut self) {
        let ttl = self.ttl;
        let before = self.entries.len();
        self.entries.retain(|_, s| s.last_seen.elapsed() < ttl);
        let evicted = before - self.entries.len();
        if evicted > 0 {
            info!(evicted, remaining = self.len(), "idle sessions dropped");
        }
    }
}

/// Shared application state, injected into all route handlers via Axum state.
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<Catalog>,
    pub matcher: SuggestionMatcher,
    pub analyst: ResultsAnalyst,
    pub sessions: Arc<Mutex<Sessions>>,
}

impl AppState {
    pub fn new(
        catalog: Catalog,
        generator: Option<Arc<dyn TextGenerator>>,
        suggest_timeout: Duration,
    ) -> Self {
        let catalog = Arc::new(catalog);
        Self {
            matcher: SuggestionMatcher::new(Arc::clone(&catalog), generator.clone())
                .with_timeout(suggest_timeout),
            analyst: ResultsAnalyst::new(generator),
            catalog,
            sessions: Arc::new(Mutex::new(Sessions::new(DEFAULT_SESSION_TTL))),
        }
    }

    pub fn with_session_ttl(mut self, ttl: Duration) -> Self {
        self.sessions = Arc::new(Mutex::new(Sessions::new(ttl)));
        self
    }
}
