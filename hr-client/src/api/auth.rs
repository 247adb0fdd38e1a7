//! Auth API

use serde::Deserialize;
use shared::LoginRequest;
use shared::models::User;
use validator::Validate;

use crate::error::{ClientError, ClientResult};
use crate::http::HrClient;

/// Login/me payload; some deployments wrap the user in `{ "user": ... }`
#[derive(Deserialize)]
#[serde(untagged)]
enum AuthPayload {
    Wrapped { user: User },
    Bare(User),
}

impl AuthPayload {
    fn into_user(self) -> User {
        match self {
            Self::Wrapped { user } | Self::Bare(user) => user,
        }
    }
}

/// Session endpoints
#[derive(Debug, Clone, Copy)]
pub struct AuthApi<'a> {
    client: &'a HrClient,
}

impl HrClient {
    pub fn auth(&self) -> AuthApi<'_> {
        AuthApi { client: self }
    }
}

impl AuthApi<'_> {
    /// Sign in and record the session
    pub async fn login(&self, credentials: &LoginRequest) -> ClientResult<User> {
        credentials.validate()?;

        let user = self
            .client
            .post::<AuthPayload, _>("auth/login", credentials)
            .await?
            .into_user();
        self.client.start_session(user.clone()).await?;

        tracing::info!(target: "security", user_id = %user.id, role = %user.role, "User logged in");
        Ok(user)
    }

    /// Fetch the signed-in user, refreshing the stored session
    pub async fn me(&self) -> ClientResult<User> {
        let user = self.client.get::<AuthPayload>("auth/me").await?.into_user();
        self.client.start_session(user.clone()).await?;
        Ok(user)
    }

    /// Sign out; local session state is cleared even if the call fails
    pub async fn logout(&self) -> ClientResult<()> {
        let result = self.client.post_empty::<serde_json::Value>("auth/logout").await;
        self.client.end_session().await?;
        tracing::info!(target: "security", "User logged out");
        match result {
            Ok(_) | Err(ClientError::SessionExpired) => Ok(()),
            Err(e) => Err(e),
        }
    }
}
