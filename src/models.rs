//! Frontend Models
//!
//! Data structures matching the remote GraphQL schema.

use serde::Deserialize;

/// Todo data structure (matches the server's `getTodos` shape)
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Todo {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub completed: bool,
}

/// Payload returned by both `login` and `signup`
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AuthPayload {
    pub access_token: String,
}

/// Partial todo returned by `createTodo`
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CreatedTodo {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
}

/// Partial todo returned by `updateTodo`
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct UpdatedTodo {
    #[serde(rename = "_id")]
    pub id: String,
    pub completed: bool,
}

/// Partial todo returned by `deleteTodo`
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct DeletedTodo {
    #[serde(rename = "_id")]
    pub id: String,
}
