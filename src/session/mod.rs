use std::collections::HashMap;
use std::sync::Arc;

use axum::{
    extract::{Request, State},
    http::{header, HeaderMap},
    middleware::Next,
    response::Response,
};
use chrono::{DateTime, Duration, Utc};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tokio::sync::RwLock;
use tracing::{debug, warn};

use crate::config::SessionConfig;
use crate::server::AppState;

struct SessionData {
    values: HashMap<String, String>,
    last_seen: DateTime<Utc>,
}

/// In-memory, process-lifetime store of per-visitor sessions. Each session
/// is a string-keyed map of JSON text blobs. Nothing here survives a
/// restart; that is the intended persistence boundary.
pub struct SessionStore {
    sessions: RwLock<HashMap<String, SessionData>>,
    idle_ttl: Duration,
}

impl SessionStore {
    pub fn new(config: &SessionConfig) -> Arc<Self> {
        Arc::new(Self {
            sessions: RwLock::new(HashMap::new()),
            idle_ttl: Duration::minutes(config.idle_minutes),
        })
    }

    /// Resolve an id to a session handle, creating a fresh session when the
    /// id is absent or unknown. Returns the handle and whether it is new.
    pub async fn open(self: &Arc<Self>, id: Option<&str>) -> (Session, bool) {
        if let Some(id) = id {
            let mut sessions = self.sessions.write().await;
            if let Some(data) = sessions.get_mut(id) {
                data.last_seen = Utc::now();
                return (
                    Session {
                        id: id.to_string(),
                        store: self.clone(),
                    },
                    false,
                );
            }
        }

        let id = uuid::Uuid::new_v4().to_string();
        let mut sessions = self.sessions.write().await;
        sessions.insert(
            id.clone(),
            SessionData {
                values: HashMap::new(),
                last_seen: Utc::now(),
            },
        );
        debug!(session = %id, "created session");

        (
            Session {
                id,
                store: self.clone(),
            },
            true,
        )
    }

    pub fn start_sweep(self: Arc<Self>, interval_secs: u64) {
        let store = Arc::clone(&self);
        tokio::spawn(async move {
            let mut interval =
                tokio::time::interval(tokio::time::Duration::from_secs(interval_secs.max(1)));
            loop {
                interval.tick().await;
                store.sweep().await;
            }
        });
    }

    async fn sweep(&self) {
        let cutoff = Utc::now() - self.idle_ttl;
        let mut sessions = self.sessions.write().await;
        let before = sessions.len();
        sessions.retain(|_, data| data.last_seen >= cutoff);
        let dropped = before - sessions.len();
        if dropped > 0 {
            debug!(dropped, "swept idle sessions");
        }
    }

    async fn get_value(&self, id: &str, key: &str) -> Option<String> {
        let mut sessions = self.sessions.write().await;
        let data = sessions.get_mut(id)?;
        data.last_seen = Utc::now();
        data.values.get(key).cloned()
    }

    async fn set_value(&self, id: &str, key: &str, value: String) {
        let mut sessions = self.sessions.write().await;
        if let Some(data) = sessions.get_mut(id) {
            data.last_seen = Utc::now();
            data.values.insert(key.to_string(), value);
        }
    }
}

/// Handle to one visitor's session. Cheap to clone; passed explicitly to
/// whatever needs session state rather than living in a global.
#[derive(Clone)]
pub struct Session {
    id: String,
    store: Arc<SessionStore>,
}

impl Session {
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Load and deserialize a stored value. An absent key or a blob that no
    /// longer parses both come back as `None`; callers substitute their
    /// empty default.
    pub async fn get<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let raw = self.store.get_value(&self.id, key).await?;
        match serde_json::from_str(&raw) {
            Ok(value) => Some(value),
            Err(e) => {
                warn!(session = %self.id, key, error = %e, "discarding unreadable session value");
                None
            }
        }
    }

    /// Serialize and store a value, replacing whatever was there.
    pub async fn set<T: Serialize>(&self, key: &str, value: &T) {
        match serde_json::to_string(value) {
            Ok(json) => self.store.set_value(&self.id, key, json).await,
            Err(e) => warn!(session = %self.id, key, error = %e, "failed to serialize session value"),
        }
    }
}

/// Attaches a `Session` to every request. The session id travels in a
/// cookie; a Set-Cookie header goes out only when the session was created
/// on this request.
pub async fn session_middleware(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Response {
    let cookie_name = state.config.session.cookie.clone();
    let existing = cookie_value(req.headers(), &cookie_name).map(|s| s.to_string());

    let (session, is_new) = state.sessions.open(existing.as_deref()).await;
    let session_id = session.id().to_string();
    req.extensions_mut().insert(session);

    let mut response = next.run(req).await;

    if is_new {
        let cookie = format!(
            "{}={}; Path=/; HttpOnly; SameSite=Lax",
            cookie_name, session_id
        );
        if let Ok(value) = cookie.parse() {
            response.headers_mut().append(header::SET_COOKIE, value);
        }
    }

    response
}

fn cookie_value<'a>(headers: &'a HeaderMap, name: &str) -> Option<&'a str> {
    let raw = headers.get(header::COOKIE)?.to_str().ok()?;
    raw.split(';')
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(key, _)| *key == name)
        .map(|(_, value)| value)
}
