use std::collections::HashMap;
use std::sync::RwLock;

use axum::http::header::{HeaderMap, HeaderValue, COOKIE, SET_COOKIE};
use axum::response::Response;
use folio_auth::Session;
use uuid::Uuid;

/// Name of the session cookie.
pub const SESSION_COOKIE: &str = "folio_session";

/// In-memory session storage keyed by the cookie's session id.
///
/// Sessions are per-client and never shared across clients; the map itself
/// is `RwLock`-guarded for concurrent request handling. State lives only as
/// long as the process, which suits the single-process deployment the rest
/// of the system assumes.
#[derive(Default)]
pub struct SessionRegistry {
    sessions: RwLock<HashMap<Uuid, Session>>,
}

impl SessionRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of live sessions.
    pub fn len(&self) -> usize {
        self.sessions.read().expect("lock poisoned").len()
    }

    /// Returns `true` if no sessions exist.
    pub fn is_empty(&self) -> bool {
        self.sessions.read().expect("lock poisoned").is_empty()
    }

    fn get(&self, id: &Uuid) -> Option<Session> {
        self.sessions.read().expect("lock poisoned").get(id).cloned()
    }

    fn put(&self, id: Uuid, session: Session) {
        self.sessions.write().expect("lock poisoned").insert(id, session);
    }
}

/// One request's view of its session: loaded from the registry at the start
/// of the handler, mutated explicitly, written back exactly once when the
/// response is built.
pub struct RequestSession {
    id: Uuid,
    /// The session value threaded through gate and render calls.
    pub session: Session,
    fresh: bool,
}

impl RequestSession {
    /// Resolve the caller's session from the request cookies, creating a
    /// fresh anonymous session (and id) when none is presented or the
    /// presented id is unknown.
    pub fn load(registry: &SessionRegistry, headers: &HeaderMap) -> Self {
        if let Some(id) = cookie_session_id(headers) {
            if let Some(session) = registry.get(&id) {
                return Self {
                    id,
                    session,
                    fresh: false,
                };
            }
        }
        Self {
            id: Uuid::now_v7(),
            session: Session::new(),
            fresh: true,
        }
    }

    /// Store the session back and attach the cookie to the response when
    /// the session was created by this request.
    pub fn commit(self, registry: &SessionRegistry, mut response: Response) -> Response {
        registry.put(self.id, self.session);
        if self.fresh {
            let cookie = format!("{SESSION_COOKIE}={}; Path=/; HttpOnly", self.id);
            if let Ok(value) = HeaderValue::from_str(&cookie) {
                response.headers_mut().append(SET_COOKIE, value);
            }
        }
        response
    }
}

fn cookie_session_id(headers: &HeaderMap) -> Option<Uuid> {
    let cookies = headers.get(COOKIE)?.to_str().ok()?;
    cookies.split(';').find_map(|pair| {
        let value = pair.trim().strip_prefix(SESSION_COOKIE)?.strip_prefix('=')?;
        Uuid::parse_str(value).ok()
    })
}
