//! Persisted client state
//!
//! Two small stores survive restarts: the authenticated session and the
//! last visited protected route. Both sit on [`JsonStore`], an explicit
//! load/save pair over a JSON file (or memory only when no path is set).

use std::marker::PhantomData;
use std::path::{Path, PathBuf};
use std::fs;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize, de::DeserializeOwned};
use shared::models::User;

use crate::error::ClientResult;

/// JSON file storage for a single value
#[derive(Debug, Clone)]
pub struct JsonStore<T> {
    path: Option<PathBuf>,
    _value: PhantomData<fn() -> T>,
}

impl<T: Serialize + DeserializeOwned> JsonStore<T> {
    /// Store backed by `path`
    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self {
            path: Some(path.into()),
            _value: PhantomData,
        }
    }

    /// Store that never touches disk
    pub fn memory() -> Self {
        Self {
            path: None,
            _value: PhantomData,
        }
    }

    /// Load the stored value
    ///
    /// A missing or unreadable file loads as `None`.
    pub fn load(&self) -> Option<T> {
        let path = self.path.as_ref()?;
        if !path.exists() {
            return None;
        }
        let json = fs::read_to_string(path).ok()?;
        match serde_json::from_str(&json) {
            Ok(value) => Some(value),
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "Discarding corrupt state file");
                None
            }
        }
    }

    /// Save the value, creating parent directories as needed
    pub fn save(&self, value: &T) -> ClientResult<()> {
        let Some(path) = &self.path else {
            return Ok(());
        };
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(value)?;
        fs::write(path, json)?;
        Ok(())
    }

    /// Remove the stored value
    pub fn clear(&self) -> ClientResult<()> {
        if let Some(path) = &self.path
            && path.exists()
        {
            fs::remove_file(path)?;
        }
        Ok(())
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }
}

// =============================================================================
// Session
// =============================================================================

/// Persisted session state
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionSnapshot {
    pub user: User,
    /// `Cookie` header value for the backend, restored into the cookie jar
    #[serde(default)]
    pub cookies: Option<String>,
    pub saved_at: DateTime<Utc>,
}

/// Authenticated-user state, written only by the auth flow
#[derive(Debug)]
pub struct SessionStore {
    store: JsonStore<SessionSnapshot>,
    current: Option<SessionSnapshot>,
}

impl SessionStore {
    /// Open the store at `path`, loading any saved session
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let store = JsonStore::at(path);
        let current = store.load();
        Self { store, current }
    }

    pub fn memory() -> Self {
        Self {
            store: JsonStore::memory(),
            current: None,
        }
    }

    pub fn user(&self) -> Option<&User> {
        self.current.as_ref().map(|s| &s.user)
    }

    pub fn snapshot(&self) -> Option<&SessionSnapshot> {
        self.current.as_ref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.current.is_some()
    }

    /// Record a signed-in user and the cookies that go with the session
    pub fn set(&mut self, user: User, cookies: Option<String>) -> ClientResult<()> {
        let snapshot = SessionSnapshot {
            user,
            cookies,
            saved_at: Utc::now(),
        };
        self.store.save(&snapshot)?;
        self.current = Some(snapshot);
        Ok(())
    }

    /// Replace the cookies of the current session, e.g. after a refresh
    pub fn update_cookies(&mut self, cookies: Option<String>) -> ClientResult<()> {
        match self.current.take() {
            Some(snapshot) => self.set(snapshot.user, cookies),
            None => Ok(()),
        }
    }

    pub fn clear(&mut self) -> ClientResult<()> {
        self.current = None;
        self.store.clear()
    }
}

// =============================================================================
// Route memory
// =============================================================================

/// Routes reachable without a session; never remembered
pub const PUBLIC_ROUTES: &[&str] = &["/login"];

/// Where to land after login when nothing was remembered
pub const DEFAULT_ROUTE: &str = "/";

#[derive(Debug, Clone, Serialize, Deserialize)]
struct RouteSnapshot {
    route: String,
}

/// Last visited protected route, for the post-login redirect
#[derive(Debug)]
pub struct RouteMemory {
    store: JsonStore<RouteSnapshot>,
    last: Option<String>,
}

impl RouteMemory {
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let store = JsonStore::at(path);
        let last = store.load().map(|s: RouteSnapshot| s.route);
        Self { store, last }
    }

    pub fn memory() -> Self {
        Self {
            store: JsonStore::memory(),
            last: None,
        }
    }

    /// Remember `route` if it is a protected route
    ///
    /// Returns whether the route was stored.
    pub fn remember(&mut self, route: &str) -> ClientResult<bool> {
        if !is_protected(route) {
            return Ok(false);
        }
        self.store.save(&RouteSnapshot {
            route: route.to_string(),
        })?;
        self.last = Some(route.to_string());
        Ok(true)
    }

    pub fn last(&self) -> Option<&str> {
        self.last.as_deref()
    }

    /// Route to open after login; clears the memory
    pub fn take_redirect(&mut self) -> ClientResult<String> {
        let route = self.last.take().unwrap_or_else(|| DEFAULT_ROUTE.to_string());
        self.store.clear()?;
        Ok(route)
    }
}

fn is_protected(route: &str) -> bool {
    let path = route.split(['?', '#']).next().unwrap_or(route);
    path.starts_with('/') && !PUBLIC_ROUTES.contains(&path.trim_end_matches('/'))
}
