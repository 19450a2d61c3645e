//! Authentication endpoints

use async_trait::async_trait;
use tracing::info;

use crate::error::ClientResult;
use crate::http::HttpApi;
use crate::models::{AuthResponse, LoginRequest, RegisterRequest, User};
use crate::session::Session;

/// Authentication endpoint group
#[async_trait]
pub trait AuthApi: Send + Sync {
    /// POST /auth/register
    async fn register(&self, request: &RegisterRequest) -> ClientResult<AuthResponse>;

    /// POST /auth/login
    async fn login(&self, request: &LoginRequest) -> ClientResult<AuthResponse>;

    /// GET /auth/me
    async fn current_user(&self, session: &Session) -> ClientResult<User>;
}

#[async_trait]
impl AuthApi for HttpApi {
    async fn register(&self, request: &RegisterRequest) -> ClientResult<AuthResponse> {
        info!("Registering {}", request.email);
        self.execute(self.post("/auth/register").json(request)).await
    }

    async fn login(&self, request: &LoginRequest) -> ClientResult<AuthResponse> {
        info!("Login attempt for {}", request.email);
        self.execute(self.post("/auth/login").json(request)).await
    }

    async fn current_user(&self, session: &Session) -> ClientResult<User> {
        self.execute(self.get_authed("/auth/me", session)).await
    }
}
