//! Namespaced API client over any [`Transport`].
//!
//! SYSTEM CONTEXT
//! ==============
//! `Api::students()`, `Api::registrations()` and friends return an
//! [`Endpoint`] bound to one collection. Endpoints pass typed parameters
//! through to the request builders in [`crate::resource`] and decode the
//! JSON reply with serde. Resource-specific domain actions live on
//! `Endpoint<_, Registration>`, `Endpoint<_, VivaTeam>`, and so on.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use std::marker::PhantomData;

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::detail::ApiError;
use crate::model::{
    Assignment, ExtensionRequest, LoginRequest, Registration, ReviewDecision, Session, Student, Submission,
    Supervisor, User, Viva, VivaOutcome, VivaSchedule, VivaTeam,
};
use crate::query::ListQuery;
use crate::request::{API_PREFIX, ApiRequest, Transport};
use crate::resource::{self, Resource};

/// Backend client. Cheap to construct; holds only the transport.
#[derive(Clone, Debug, Default)]
pub struct Api<T> {
    transport: T,
}

impl<T: Transport> Api<T> {
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Send a prepared request and return the raw JSON reply.
    ///
    /// # Errors
    ///
    /// Propagates the transport's [`ApiError`].
    pub async fn send(&self, request: ApiRequest) -> Result<Value, ApiError> {
        self.transport.send(request).await
    }

    /// Send a prepared request and decode the reply as `O`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Decode`] if the body does not match `O`.
    pub async fn send_as<O: DeserializeOwned>(&self, request: ApiRequest) -> Result<O, ApiError> {
        let value = self.send(request).await?;
        Ok(serde_json::from_value(value)?)
    }

    /// Endpoint for any resource collection.
    pub fn endpoint<R: Resource>(&self) -> Endpoint<'_, T, R> {
        Endpoint { api: self, _resource: PhantomData }
    }

    pub fn users(&self) -> Endpoint<'_, T, User> {
        self.endpoint()
    }

    pub fn students(&self) -> Endpoint<'_, T, Student> {
        self.endpoint()
    }

    pub fn supervisors(&self) -> Endpoint<'_, T, Supervisor> {
        self.endpoint()
    }

    pub fn assignments(&self) -> Endpoint<'_, T, Assignment> {
        self.endpoint()
    }

    pub fn registrations(&self) -> Endpoint<'_, T, Registration> {
        self.endpoint()
    }

    pub fn viva_teams(&self) -> Endpoint<'_, T, VivaTeam> {
        self.endpoint()
    }

    pub fn vivas(&self) -> Endpoint<'_, T, Viva> {
        self.endpoint()
    }

    pub fn submissions(&self) -> Endpoint<'_, T, Submission> {
        self.endpoint()
    }

    // -------------------------------------------------------------------------
    // auth
    // -------------------------------------------------------------------------

    /// Exchange credentials for an access token via `POST /api/auth/login`.
    ///
    /// # Errors
    ///
    /// Returns the backend's rejection as [`ApiError::Status`].
    pub async fn login(&self, username: &str, password: &str) -> Result<Session, ApiError> {
        let body = to_body(&LoginRequest { username: username.to_owned(), password: password.to_owned() })?;
        self.send_as(ApiRequest::post(auth_path("login")).with_body(body)).await
    }

    /// Fetch the signed-in account from `GET /api/auth/me`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Status`] with 401 when no valid session exists.
    pub async fn current_user(&self) -> Result<User, ApiError> {
        self.send_as(ApiRequest::get(auth_path("me"))).await
    }

    /// End the session via `POST /api/auth/logout`.
    ///
    /// # Errors
    ///
    /// Propagates the transport's [`ApiError`].
    pub async fn logout(&self) -> Result<(), ApiError> {
        self.send(ApiRequest::post(auth_path("logout"))).await.map(|_| ())
    }
}

fn auth_path(name: &str) -> String {
    format!("{API_PREFIX}/auth/{name}")
}

fn to_body<S: Serialize>(payload: &S) -> Result<Value, ApiError> {
    Ok(serde_json::to_value(payload)?)
}

/// CRUD plus domain actions for one collection.
pub struct Endpoint<'a, T, R> {
    api: &'a Api<T>,
    _resource: PhantomData<fn() -> R>,
}

impl<T: Transport, R: Resource> Endpoint<'_, T, R> {
    /// # Errors
    ///
    /// Propagates transport failures and body decode failures.
    pub async fn list(&self, query: &ListQuery) -> Result<Vec<R>, ApiError> {
        self.api.send_as(resource::list_request::<R>(query.clone())).await
    }

    /// # Errors
    ///
    /// Propagates transport failures and body decode failures.
    pub async fn get(&self, key: &str) -> Result<R, ApiError> {
        self.api.send_as(resource::get_request::<R>(key)).await
    }

    /// # Errors
    ///
    /// Propagates transport failures and body decode failures.
    pub async fn create<P: Serialize>(&self, payload: &P) -> Result<R, ApiError> {
        self.api.send_as(resource::create_request::<R>(to_body(payload)?)).await
    }

    /// # Errors
    ///
    /// Propagates transport failures and body decode failures.
    pub async fn update<P: Serialize>(&self, key: &str, payload: &P) -> Result<R, ApiError> {
        self.api.send_as(resource::update_request::<R>(key, to_body(payload)?)).await
    }

    /// # Errors
    ///
    /// Propagates transport failures.
    pub async fn delete(&self, key: &str) -> Result<(), ApiError> {
        self.api.send(resource::delete_request::<R>(key)).await.map(|_| ())
    }

    /// `POST {item}/{action}`, decoding the updated record.
    ///
    /// # Errors
    ///
    /// Propagates transport failures and body decode failures.
    pub async fn action(&self, key: &str, action: &str, body: Option<Value>) -> Result<R, ApiError> {
        self.api.send_as(resource::action_request::<R>(key, action, body)).await
    }

    async fn action_with<P: Serialize>(&self, key: &str, action: &str, payload: &P) -> Result<R, ApiError> {
        self.action(key, action, Some(to_body(payload)?)).await
    }
}

impl<T: Transport> Endpoint<'_, T, User> {
    /// Enable or disable an account.
    ///
    /// # Errors
    ///
    /// Propagates transport failures and body decode failures.
    pub async fn set_active(&self, id: i64, active: bool) -> Result<User, ApiError> {
        let action = if active { "activate" } else { "deactivate" };
        self.action(&id.to_string(), action, None).await
    }
}

impl<T: Transport> Endpoint<'_, T, Registration> {
    /// # Errors
    ///
    /// Propagates transport failures and body decode failures.
    pub async fn request_extension(&self, id: i64, request: &ExtensionRequest) -> Result<Registration, ApiError> {
        self.action_with(&id.to_string(), "request-extension", request).await
    }

    /// # Errors
    ///
    /// Propagates transport failures and body decode failures.
    pub async fn approve_extension(&self, id: i64) -> Result<Registration, ApiError> {
        self.action(&id.to_string(), "approve-extension", None).await
    }
}

impl<T: Transport> Endpoint<'_, T, VivaTeam> {
    /// # Errors
    ///
    /// Propagates transport failures and body decode failures.
    pub async fn approve(&self, id: i64) -> Result<VivaTeam, ApiError> {
        self.action(&id.to_string(), "approve", None).await
    }

    /// # Errors
    ///
    /// Propagates transport failures and body decode failures.
    pub async fn reject(&self, id: i64) -> Result<VivaTeam, ApiError> {
        self.action(&id.to_string(), "reject", None).await
    }

    /// # Errors
    ///
    /// Propagates transport failures and body decode failures.
    pub async fn schedule(&self, id: i64, schedule: &VivaSchedule) -> Result<VivaTeam, ApiError> {
        self.action_with(&id.to_string(), "schedule", schedule).await
    }

    /// # Errors
    ///
    /// Propagates transport failures and body decode failures.
    pub async fn submit_outcome(&self, id: i64, outcome: &VivaOutcome) -> Result<VivaTeam, ApiError> {
        self.action_with(&id.to_string(), "outcome", outcome).await
    }
}

impl<T: Transport> Endpoint<'_, T, Submission> {
    /// # Errors
    ///
    /// Propagates transport failures and body decode failures.
    pub async fn approve(&self, id: i64, decision: &ReviewDecision) -> Result<Submission, ApiError> {
        self.action_with(&id.to_string(), "approve", decision).await
    }

    /// # Errors
    ///
    /// Propagates transport failures and body decode failures.
    pub async fn reject(&self, id: i64, decision: &ReviewDecision) -> Result<Submission, ApiError> {
        self.action_with(&id.to_string(), "reject", decision).await
    }

    /// # Errors
    ///
    /// Propagates transport failures and body decode failures.
    pub async fn request_revision(&self, id: i64, decision: &ReviewDecision) -> Result<Submission, ApiError> {
        self.action_with(&id.to_string(), "request-revision", decision).await
    }
}
