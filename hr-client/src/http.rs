//! HTTP client for the HR backend
//!
//! Session identity travels in cookies. Any `401` on a request other than
//! login/refresh triggers exactly one `auth/refresh`; when that succeeds the
//! original request is sent once more, when it fails the session is cleared
//! and the caller gets [`ClientError::SessionExpired`].

use std::sync::Arc;
use std::time::Duration;

use reqwest::cookie::{CookieStore, Jar};
use reqwest::{Client, RequestBuilder, Response, StatusCode, Url};
use serde::Serialize;
use serde::de::DeserializeOwned;
use shared::models::User;
use tokio::sync::RwLock;

use crate::config::ClientConfig;
use crate::error::{ClientError, ClientResult};
use crate::store::SessionStore;

/// Endpoints whose `401` is final
const AUTH_ENDPOINTS: &[&str] = &["auth/login", "auth/refresh"];

/// HTTP client for the HR backend
///
/// Cheap to clone: clones share the connection pool, cookie jar and
/// session store.
#[derive(Debug, Clone)]
pub struct HrClient {
    http: Client,
    jar: Arc<Jar>,
    base_url: Url,
    session: Arc<RwLock<SessionStore>>,
}

impl HrClient {
    /// Create a client from configuration
    ///
    /// Loads the persisted session (if `state_dir` is set) and restores its
    /// cookies into the jar.
    pub fn new(config: &ClientConfig) -> ClientResult<Self> {
        let session = match config.session_path() {
            Some(path) => SessionStore::open(path),
            None => SessionStore::memory(),
        };
        Self::with_session(config, session)
    }

    /// Create a client around an existing session store
    pub fn with_session(config: &ClientConfig, session: SessionStore) -> ClientResult<Self> {
        let base_url = parse_base_url(&config.base_url)?;
        let jar = Arc::new(Jar::default());

        if let Some(cookies) = session.snapshot().and_then(|s| s.cookies.as_deref()) {
            for cookie in cookies.split(';').map(str::trim).filter(|c| !c.is_empty()) {
                jar.add_cookie_str(cookie, &base_url);
            }
            tracing::debug!("Restored session cookies");
        }

        let http = Client::builder()
            .cookie_provider(jar.clone())
            .timeout(Duration::from_secs(config.timeout))
            .build()?;

        Ok(Self {
            http,
            jar,
            base_url,
            session: Arc::new(RwLock::new(session)),
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Signed-in user, if any
    pub async fn current_user(&self) -> Option<User> {
        self.session.read().await.user().cloned()
    }

    pub async fn is_authenticated(&self) -> bool {
        self.session.read().await.is_authenticated()
    }

    fn url(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.as_str().trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    /// Current `Cookie` header value for the backend
    fn cookie_header(&self) -> Option<String> {
        self.jar
            .cookies(&self.base_url)
            .and_then(|v| v.to_str().ok().map(str::to_string))
    }

    // ========== Session bookkeeping ==========

    /// Record `user` as signed in, together with the current cookies
    pub(crate) async fn start_session(&self, user: User) -> ClientResult<()> {
        let cookies = self.cookie_header();
        self.session.write().await.set(user, cookies)
    }

    pub(crate) async fn end_session(&self) -> ClientResult<()> {
        self.session.write().await.clear()
    }

    async fn refresh(&self) -> ClientResult<()> {
        let response = self.http.post(self.url("auth/refresh")).send().await?;
        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            return Err(ClientError::from_status(status, &text));
        }

        let cookies = self.cookie_header();
        self.session.write().await.update_cookies(cookies)?;
        tracing::info!(target: "security", "Session refreshed");
        Ok(())
    }

    // ========== Transport ==========

    /// Send a request, re-authenticating once on `401`
    ///
    /// `build` is called again for the retransmission, so it must produce
    /// the same request each time.
    pub(crate) async fn send<F>(&self, path: &str, build: F) -> ClientResult<Response>
    where
        F: Fn(&Client, &str) -> RequestBuilder,
    {
        let url = self.url(path);
        let response = build(&self.http, &url).send().await?;

        if response.status() != StatusCode::UNAUTHORIZED || is_auth_endpoint(path) {
            return Ok(response);
        }

        tracing::debug!(path, "Request unauthorized, refreshing session");
        match self.refresh().await {
            Ok(()) => Ok(build(&self.http, &url).send().await?),
            Err(e) => {
                tracing::warn!(target: "security", path, error = %e, "Session refresh failed, signing out");
                if let Err(e) = self.end_session().await {
                    tracing::warn!(error = %e, "Failed to clear session state");
                }
                Err(ClientError::SessionExpired)
            }
        }
    }

    /// Decode a JSON response, mapping failures to [`ClientError`]
    pub(crate) async fn decode<T: DeserializeOwned>(response: Response) -> ClientResult<T> {
        let response = Self::check(response).await?;
        let bytes = response.bytes().await?;
        let body: &[u8] = if bytes.is_empty() { b"null" } else { &bytes };
        serde_json::from_slice(body).map_err(|e| ClientError::InvalidResponse(e.to_string()))
    }

    /// Fail on non-success status, passing the response through otherwise
    pub(crate) async fn check(response: Response) -> ClientResult<Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let text = response.text().await?;
        Err(ClientError::from_status(status, &text))
    }

    // ========== JSON helpers ==========

    pub(crate) async fn get<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        let response = self.send(path, |c, url| c.get(url)).await?;
        Self::decode(response).await
    }

    pub(crate) async fn get_query<T, Q>(&self, path: &str, query: &Q) -> ClientResult<T>
    where
        T: DeserializeOwned,
        Q: Serialize + ?Sized,
    {
        let response = self.send(path, |c, url| c.get(url).query(query)).await?;
        Self::decode(response).await
    }

    pub(crate) async fn post<T, B>(&self, path: &str, body: &B) -> ClientResult<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let response = self.send(path, |c, url| c.post(url).json(body)).await?;
        Self::decode(response).await
    }

    pub(crate) async fn post_empty<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        let response = self.send(path, |c, url| c.post(url)).await?;
        Self::decode(response).await
    }

    pub(crate) async fn put<T, B>(&self, path: &str, body: &B) -> ClientResult<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let response = self.send(path, |c, url| c.put(url).json(body)).await?;
        Self::decode(response).await
    }

    pub(crate) async fn patch<T, B>(&self, path: &str, body: &B) -> ClientResult<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let response = self.send(path, |c, url| c.patch(url).json(body)).await?;
        Self::decode(response).await
    }

    pub(crate) async fn delete(&self, path: &str) -> ClientResult<()> {
        let response = self.send(path, |c, url| c.delete(url)).await?;
        Self::check(response).await?;
        Ok(())
    }
}

fn parse_base_url(raw: &str) -> ClientResult<Url> {
    let url = Url::parse(raw).map_err(|e| ClientError::Config(format!("invalid base URL {raw}: {e}")))?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(ClientError::Config(format!(
            "unsupported URL scheme: {}",
            url.scheme()
        )));
    }
    Ok(url)
}

fn is_auth_endpoint(path: &str) -> bool {
    let path = path.trim_matches('/');
    AUTH_ENDPOINTS.contains(&path)
}
