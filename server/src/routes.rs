//! HTTP handlers and route table for `/api/todos`.

use axum::{
    extract::{FromRequest, Path, Query, State},
    http::StatusCode,
    routing::{get, put},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::TodoError;
use crate::store::{SortDirection, Todo};
use crate::SharedStore;

/// `Json` extractor whose rejections render as [`TodoError::InvalidBody`].
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(TodoError))]
pub struct ApiJson<T>(pub T);

#[derive(Debug, Deserialize)]
pub struct CreateTodo {
    pub message: Option<String>,
    #[serde(default)]
    pub completed: bool,
}

/// Body shared by PUT and PATCH; which fields are required depends on the verb.
#[derive(Debug, Deserialize)]
pub struct TodoFields {
    pub message: Option<String>,
    pub completed: Option<bool>,
}

#[derive(Debug, Deserialize)]
pub struct SortQuery {
    pub k: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    pub query: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct TodosResponse {
    pub message: String,
    pub todos: Vec<Todo>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct TodoResponse {
    pub message: String,
    pub todo: Todo,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SearchResponse {
    pub message: String,
    pub results: Vec<Todo>,
}

pub fn router(store: SharedStore) -> Router {
    // Static segments win over `{id}` in axum's matcher, so ordering is free.
    Router::new()
        .route("/api/todos", get(list_todos).post(create_todo))
        .route("/api/todos/sort-by-id", get(sort_by_id))
        .route("/api/todos/sort-by-message", get(sort_by_message))
        .route("/api/todos/search", get(search_todos))
        .route("/api/todos/{id}", put(replace_todo).patch(patch_todo))
        .with_state(store)
}

/// Path ids that are not plain decimal integers (`1abc`, `1.5`, `-1`)
/// cannot match any todo.
fn parse_id(raw: &str) -> Result<u64, TodoError> {
    raw.parse().map_err(|_| TodoError::NotFound)
}

async fn list_todos(State(store): State<SharedStore>) -> Json<TodosResponse> {
    let store = store.read().await;
    Json(TodosResponse {
        message: "Todos fetched successfully".to_string(),
        todos: store.list().to_vec(),
    })
}

async fn create_todo(
    State(store): State<SharedStore>,
    ApiJson(input): ApiJson<CreateTodo>,
) -> Result<(StatusCode, Json<TodoResponse>), TodoError> {
    let todo = store.write().await.create(input.message, input.completed)?;
    Ok((
        StatusCode::CREATED,
        Json(TodoResponse {
            message: "Todo added successfully".to_string(),
            todo,
        }),
    ))
}

async fn replace_todo(
    State(store): State<SharedStore>,
    Path(id): Path<String>,
    ApiJson(input): ApiJson<TodoFields>,
) -> Result<Json<TodoResponse>, TodoError> {
    let id = parse_id(&id)?;
    let todo = store
        .write()
        .await
        .replace(id, input.message, input.completed)?;
    Ok(Json(TodoResponse {
        message: "Todo replaced successfully".to_string(),
        todo,
    }))
}

async fn patch_todo(
    State(store): State<SharedStore>,
    Path(id): Path<String>,
    ApiJson(input): ApiJson<TodoFields>,
) -> Result<Json<TodoResponse>, TodoError> {
    let id = parse_id(&id)?;
    let todo = store
        .write()
        .await
        .patch(id, input.message, input.completed)?;
    Ok(Json(TodoResponse {
        message: "Todo updated successfully".to_string(),
        todo,
    }))
}

async fn sort_by_id(
    State(store): State<SharedStore>,
    Query(params): Query<SortQuery>,
) -> Json<TodosResponse> {
    let k = params.k.unwrap_or_else(|| "asc".to_string());
    debug!(k = %k, "sorting by id");
    let todos = store.read().await.sort_by_id(SortDirection::from_param(&k));
    Json(TodosResponse {
        message: format!("Todos sorted by ID ({k})"),
        todos,
    })
}

async fn sort_by_message(
    State(store): State<SharedStore>,
    Query(params): Query<SortQuery>,
) -> Result<Json<TodosResponse>, TodoError> {
    let k = params.k.unwrap_or_else(|| "asc".to_string());
    debug!(k = %k, "sorting by message");
    let todos = store
        .read()
        .await
        .sort_by_message(SortDirection::from_param(&k))?;
    Ok(Json(TodosResponse {
        message: format!("Todos sorted by message ({k})"),
        todos,
    }))
}

async fn search_todos(
    State(store): State<SharedStore>,
    Query(params): Query<SearchQuery>,
) -> Result<Json<SearchResponse>, TodoError> {
    let results = store.read().await.search(params.query.as_deref())?;
    let query = params.query.unwrap_or_default();
    debug!(query = %query, matches = results.len(), "search");
    Ok(Json(SearchResponse {
        message: format!("Todos matching '{query}'"),
        results,
    }))
}
