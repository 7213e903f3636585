//! Shared types for the triage API layer.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use uuid::Uuid;

use crate::config::ServerConfig;
use crate::i18n::Language;

/// Name of the cookie carrying the session id.
pub const SESSION_COOKIE: &str = "triage_session";

/// Sweep expired sessions once the store grows past this many entries.
const SWEEP_THRESHOLD: usize = 1000;

// ═══════════════════════════════════════════════════════════
// API context: shared state for the router
// ═══════════════════════════════════════════════════════════

/// Shared context for all API routes and middleware.
#[derive(Clone)]
pub struct ApiContext {
    pub config: Arc<ServerConfig>,
    pub sessions: Arc<Mutex<LanguageSessions>>,
}

impl ApiContext {
    pub fn new(config: ServerConfig) -> Self {
        let ttl = config.session_lifetime;
        Self {
            config: Arc::new(config),
            sessions: Arc::new(Mutex::new(LanguageSessions::new(ttl))),
        }
    }

    /// Stored language for `session`, or the configured default.
    pub fn language_for(&self, session: Option<Uuid>) -> Language {
        let stored = session.and_then(|id| match self.sessions.lock() {
            Ok(mut sessions) => sessions.get(&id),
            Err(_) => {
                tracing::error!("Session store lock poisoned");
                None
            }
        });
        stored.unwrap_or(self.config.default_language)
    }
}

// ═══════════════════════════════════════════════════════════
// Request session: injected by the session middleware
// ═══════════════════════════════════════════════════════════

/// Per-request view of the caller's session.
#[derive(Debug, Clone, Copy)]
pub struct RequestSession {
    /// Session id from a well-formed cookie, if any.
    pub id: Option<Uuid>,
    pub language: Language,
}

// ═══════════════════════════════════════════════════════════
// Language sessions: per-session preference with TTL
// ═══════════════════════════════════════════════════════════

/// In-memory language preference per session id. Entries expire `ttl`
/// after they were last written.
pub struct LanguageSessions {
    entries: HashMap<Uuid, (Language, Instant)>,
    ttl: Duration,
}

impl LanguageSessions {
    pub fn new(ttl: Duration) -> Self {
        Self {
            entries: HashMap::new(),
            ttl,
        }
    }

    pub fn get(&mut self, id: &Uuid) -> Option<Language> {
        self.get_at(id, Instant::now())
    }

    pub fn set(&mut self, id: Uuid, lang: Language) {
        self.set_at(id, lang, Instant::now());
    }

    fn get_at(&mut self, id: &Uuid, now: Instant) -> Option<Language> {
        let (lang, written) = *self.entries.get(id)?;
        if now.duration_since(written) >= self.ttl {
            self.entries.remove(id);
            return None;
        }
        Some(lang)
    }

    fn set_at(&mut self, id: Uuid, lang: Language, now: Instant) {
        if self.entries.len() > SWEEP_THRESHOLD {
            self.sweep(now);
        }
        self.entries.insert(id, (lang, now));
    }

    fn sweep(&mut self, now: Instant) {
        let ttl = self.ttl;
        self.entries
            .retain(|_, (_, written)| now.duration_since(*written) < ttl);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
