use serde::{Deserialize, Serialize};

/// Per-client session state: at most one signed-in username and at most one
/// pending flash message.
///
/// The session is an explicit value threaded through each request, mutated
/// by [`crate::SessionGate`] and by whoever renders the response. It is
/// never ambient state.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    username: Option<String>,
    flash: Option<String>,
}

impl Session {
    /// A fresh anonymous session.
    pub fn new() -> Self {
        Self::default()
    }

    /// A session already signed in as `username`. Intended for tests and
    /// trusted embedding.
    pub fn authenticated(username: impl Into<String>) -> Self {
        Self {
            username: Some(username.into()),
            flash: None,
        }
    }

    /// The signed-in username, if any.
    pub fn username(&self) -> Option<&str> {
        self.username.as_deref()
    }

    /// Whether the session is signed in.
    pub fn signed_in(&self) -> bool {
        self.username.is_some()
    }

    pub(crate) fn set_username(&mut self, username: &str) {
        self.username = Some(username.to_string());
    }

    pub(crate) fn clear_username(&mut self) {
        self.username = None;
    }

    /// Queue a one-shot message for the next rendered response.
    ///
    /// A new message replaces any pending one.
    pub fn set_flash(&mut self, message: impl Into<String>) {
        self.flash = Some(message.into());
    }

    /// Peek at the pending flash without consuming it.
    pub fn flash(&self) -> Option<&str> {
        self.flash.as_deref()
    }

    /// Consume the pending flash message.
    ///
    /// Called exactly once per rendered page; the message survives any
    /// number of redirects but only one render.
    pub fn take_flash(&mut self) -> Option<String> {
        self.flash.take()
    }
}
