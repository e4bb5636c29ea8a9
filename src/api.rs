//! Remote Operation Wrappers
//!
//! One async function per server operation, pairing a variables struct with
//! its GraphQL document and unwrapping the operation's root field.

use serde::{Deserialize, Serialize};

use crate::graphql::{self, ApiError};
use crate::models::{AuthPayload, CreatedTodo, DeletedTodo, Todo, UpdatedTodo};

// ========================
// Variables Structs
// ========================

#[derive(Serialize)]
pub struct CredentialVars<'a> {
    pub email: &'a str,
    pub password: &'a str,
}

#[derive(Serialize)]
pub struct CreateTodoVars<'a> {
    pub title: &'a str,
    pub description: Option<&'a str>,
}

#[derive(Serialize)]
pub struct UpdateTodoVars<'a> {
    pub id: &'a str,
    pub completed: bool,
}

#[derive(Serialize)]
pub struct IdVars<'a> {
    pub id: &'a str,
}

// ========================
// Root-Field Wrappers
// ========================

#[derive(Deserialize)]
struct LoginData {
    login: AuthPayload,
}

#[derive(Deserialize)]
struct SignupData {
    signup: AuthPayload,
}

#[derive(Deserialize)]
struct GetTodosData {
    #[serde(rename = "getTodos")]
    get_todos: Vec<Todo>,
}

#[derive(Deserialize)]
struct CreateTodoData {
    #[serde(rename = "createTodo")]
    create_todo: CreatedTodo,
}

#[derive(Deserialize)]
struct UpdateTodoData {
    #[serde(rename = "updateTodo")]
    update_todo: UpdatedTodo,
}

#[derive(Deserialize)]
struct DeleteTodoData {
    #[serde(rename = "deleteTodo")]
    delete_todo: DeletedTodo,
}

// ========================
// Auth Operations
// ========================

pub async fn login(email: &str, password: &str) -> Result<AuthPayload, ApiError> {
    let data: LoginData =
        graphql::execute(graphql::SIGN_IN, CredentialVars { email, password }).await?;
    Ok(data.login)
}

pub async fn signup(email: &str, password: &str) -> Result<AuthPayload, ApiError> {
    let data: SignupData =
        graphql::execute(graphql::SIGN_UP, CredentialVars { email, password }).await?;
    Ok(data.signup)
}

// ========================
// Todo Operations
// ========================

pub async fn get_todos() -> Result<Vec<Todo>, ApiError> {
    let data: GetTodosData = graphql::execute(graphql::GET_TODOS, ()).await?;
    Ok(data.get_todos)
}

pub async fn create_todo(title: &str, description: Option<&str>) -> Result<CreatedTodo, ApiError> {
    let data: CreateTodoData =
        graphql::execute(graphql::CREATE_TODO, CreateTodoVars { title, description }).await?;
    Ok(data.create_todo)
}

pub async fn update_todo(id: &str, completed: bool) -> Result<UpdatedTodo, ApiError> {
    let data: UpdateTodoData =
        graphql::execute(graphql::UPDATE_TODO, UpdateTodoVars { id, completed }).await?;
    Ok(data.update_todo)
}

pub async fn delete_todo(id: &str) -> Result<DeletedTodo, ApiError> {
    let data: DeleteTodoData = graphql::execute(graphql::DELETE_TODO, IdVars { id }).await?;
    Ok(data.delete_todo)
}
