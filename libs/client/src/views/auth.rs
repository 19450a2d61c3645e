//! Authentication view: sign-in and registration
//!
//! The email is checked against the institutional allow-list before any
//! request is issued; a rejected email never reaches the network. On
//! success the session is persisted and the caller moves on to the major
//! directory.

use std::sync::Arc;

use tracing::info;

use crate::api::AuthApi;
use crate::error::{ClientError, ClientResult};
use crate::models::{LoginRequest, RegisterRequest, User};
use crate::session::{Session, SessionStore};
use crate::validation;
use crate::views::FetchGate;

/// Which form the view is showing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthMode {
    SignIn,
    Register,
}

/// Form state shared by both modes; major and graduation year are only
/// consulted when registering
#[derive(Debug, Clone)]
pub struct AuthForm {
    pub email: String,
    pub password: String,
    pub major: String,
    pub grad_year: i32,
}

impl AuthForm {
    fn new(current_year: i32) -> Self {
        AuthForm {
            email: String::new(),
            password: String::new(),
            major: String::new(),
            grad_year: current_year + 1,
        }
    }
}

/// Controller for the sign-in / registration screen
pub struct AuthView {
    api: Arc<dyn AuthApi>,
    sessions: SessionStore,
    current_year: i32,
    pub mode: AuthMode,
    pub form: AuthForm,
    gate: FetchGate,
    error: Option<String>,
}

impl AuthView {
    pub fn new(api: Arc<dyn AuthApi>, sessions: SessionStore, current_year: i32) -> Self {
        AuthView {
            api,
            sessions,
            current_year,
            mode: AuthMode::SignIn,
            form: AuthForm::new(current_year),
            gate: FetchGate::default(),
            error: None,
        }
    }

    /// The inline error message, if the last submission failed
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn is_loading(&self) -> bool {
        self.gate.is_loading()
    }

    /// Submit the form in the current mode
    ///
    /// Returns `Ok(None)` when a submission is already in flight (the
    /// duplicate press is ignored). On success the session has been
    /// persisted and the signed-in user is returned.
    pub async fn submit(&mut self) -> ClientResult<Option<User>> {
        let Some(ticket) = self.gate.begin() else {
            return Ok(None);
        };
        self.error = None;

        if let Err(message) = self.validate() {
            self.gate.settle(ticket);
            self.error = Some(message.clone());
            return Err(ClientError::Validation(message));
        }

        let result = match self.mode {
            AuthMode::SignIn => {
                self.api
                    .login(&LoginRequest {
                        email: self.form.email.clone(),
                        password: self.form.password.clone(),
                    })
                    .await
            }
            AuthMode::Register => {
                self.api
                    .register(&RegisterRequest {
                        email: self.form.email.clone(),
                        password: self.form.password.clone(),
                        major: self.form.major.clone(),
                        grad_year: self.form.grad_year,
                    })
                    .await
            }
        };
        self.gate.settle(ticket);

        match result {
            Ok(auth) => {
                let session = Session {
                    token: auth.access_token,
                    user: auth.user,
                };
                self.sessions.save(&session)?;
                info!("Signed in as {}", session.user.email);
                self.form = AuthForm::new(self.current_year);
                Ok(Some(session.user))
            }
            Err(e) => {
                self.error = Some(e.to_string());
                Err(e)
            }
        }
    }

    /// Local guards, run before any network call
    fn validate(&self) -> Result<(), String> {
        validation::validate_unc_email(&self.form.email)?;

        if self.mode == AuthMode::Register {
            validation::validate_password(&self.form.password)?;
            validation::require("Major", &self.form.major)?;
            validation::validate_grad_year(self.form.grad_year, self.current_year)?;
        } else {
            validation::require("Password", &self.form.password)?;
        }

        Ok(())
    }
}
