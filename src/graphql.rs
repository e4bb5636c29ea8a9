//! GraphQL Transport
//!
//! Operation documents plus the request/response envelope shared by every
//! remote call. Transport goes over the browser fetch API via `gloo-net`;
//! a stored session token is attached as a bearer header when present.

use gloo_net::http::Request;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::session;

// ========================
// Operation Documents
// ========================

pub const SIGN_UP: &str = "\
mutation Signup($email: String!, $password: String!) {
  signup(email: $email, password: $password) {
    access_token
  }
}";

pub const SIGN_IN: &str = "\
mutation Login($email: String!, $password: String!) {
  login(email: $email, password: $password) {
    access_token
  }
}";

pub const GET_TODOS: &str = "\
query GetTodos {
  getTodos {
    _id
    title
    description
    completed
  }
}";

pub const CREATE_TODO: &str = "\
mutation CreateTodo($title: String!, $description: String) {
  createTodo(createTodoInput: { title: $title, description: $description }) {
    _id
    title
  }
}";

pub const UPDATE_TODO: &str = "\
mutation UpdateTodo($id: String!, $completed: Boolean!) {
  updateTodo(id: $id, completed: $completed) {
    _id
    completed
  }
}";

pub const DELETE_TODO: &str = "\
mutation DeleteTodo($id: String!) {
  deleteTodo(id: $id) {
    _id
  }
}";

/// GraphQL endpoint, overridable at build time
pub fn endpoint() -> &'static str {
    option_env!("TODO_API_URL").unwrap_or("/graphql")
}

// ========================
// Envelope Types
// ========================

#[derive(Serialize)]
pub struct GraphqlRequest<'a, V: Serialize> {
    pub query: &'a str,
    pub variables: V,
}

/// Application-level error returned inside the response envelope
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct GraphqlError {
    pub message: String,
}

#[derive(Debug, Deserialize)]
pub struct GraphqlResponse<T> {
    // A missing `data` key deserializes as `None` without a default, which
    // keeps the derive free of a `T: Default` bound.
    pub data: Option<T>,
    #[serde(default)]
    pub errors: Vec<GraphqlError>,
}

impl<T> GraphqlResponse<T> {
    /// Split the envelope into data or the error kind it represents.
    ///
    /// Application errors win even when partial data arrived alongside them,
    /// so a flow never acts on data the server also flagged as failed.
    pub fn into_result(self) -> Result<T, ApiError> {
        if !self.errors.is_empty() {
            return Err(ApiError::Api(self.errors));
        }
        match self.data {
            Some(data) => Ok(data),
            None => Err(ApiError::Decode(
                "response carried neither data nor errors".to_string(),
            )),
        }
    }
}

// ========================
// Error Split
// ========================

/// Failure modes of a remote call, split the way the UI reacts to them
#[derive(Debug, Error)]
pub enum ApiError {
    /// Network/connection failure; the request never produced an envelope
    #[error("network error: {0}")]
    Transport(String),
    /// The server answered but flagged the operation as failed
    #[error("{}", first_message(.0))]
    Api(Vec<GraphqlError>),
    /// The answer did not match the expected shape
    #[error("bad response: {0}")]
    Decode(String),
}

fn first_message(errors: &[GraphqlError]) -> &str {
    errors.first().map_or("application error", |e| e.message.as_str())
}

impl ApiError {
    /// First application-level message, if the server sent one.
    /// Callers fall back to an operation-specific generic message.
    pub fn app_message(&self) -> Option<&str> {
        match self {
            ApiError::Api(errors) => errors.first().map(|e| e.message.as_str()),
            _ => None,
        }
    }
}

// ========================
// Transport
// ========================

/// POST one operation and decode its envelope
pub async fn execute<V, T>(query: &'static str, variables: V) -> Result<T, ApiError>
where
    V: Serialize,
    T: DeserializeOwned,
{
    let mut builder = Request::post(endpoint());
    if let Some(token) = session::token() {
        builder = builder.header("Authorization", &format!("Bearer {token}"));
    }

    let response = builder
        .json(&GraphqlRequest { query, variables })
        .map_err(|e| ApiError::Transport(e.to_string()))?
        .send()
        .await
        .map_err(|e| ApiError::Transport(e.to_string()))?;

    if !response.ok() {
        return Err(ApiError::Transport(format!(
            "HTTP {} from {}",
            response.status(),
            endpoint()
        )));
    }

    let envelope: GraphqlResponse<T> = response
        .json()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))?;
    envelope.into_result()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::AuthPayload;
    use serde::Deserialize;

    #[derive(Debug, Deserialize)]
    struct SignupData {
        signup: AuthPayload,
    }

    #[test]
    fn test_decode_data_only() {
        let body = r#"{"data":{"signup":{"access_token":"abc123"}}}"#;
        let envelope: GraphqlResponse<SignupData> = serde_json::from_str(body).unwrap();
        let data = envelope.into_result().expect("data-only response is Ok");
        assert_eq!(data.signup.access_token, "abc123");
    }

    #[test]
    fn test_decode_errors_only() {
        let body = r#"{"errors":[{"message":"Email already exists"},{"message":"second"}]}"#;
        let envelope: GraphqlResponse<SignupData> = serde_json::from_str(body).unwrap();
        let err = envelope.into_result().expect_err("errors means Err");
        assert_eq!(err.app_message(), Some("Email already exists"));
        assert_eq!(err.to_string(), "Email already exists");
    }

    #[test]
    fn test_errors_alongside_data_still_fail() {
        let body = r#"{"data":{"signup":{"access_token":"abc123"}},"errors":[{"message":"Email already exists"}]}"#;
        let envelope: GraphqlResponse<SignupData> = serde_json::from_str(body).unwrap();
        let err = envelope.into_result().expect_err("flagged data must not be used");
        assert_eq!(err.app_message(), Some("Email already exists"));
    }

    #[test]
    fn test_empty_envelope_is_decode_error() {
        let envelope: GraphqlResponse<SignupData> = serde_json::from_str("{}").unwrap();
        assert!(matches!(envelope.into_result(), Err(ApiError::Decode(_))));
    }

    #[test]
    fn test_transport_error_has_no_app_message() {
        let err = ApiError::Transport("connection refused".to_string());
        assert_eq!(err.app_message(), None);
    }
}
