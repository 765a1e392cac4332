//! Stateless HTTP request builder and response parser for the todo API.
//!
//! # Design
//! `TodoClient` holds only a `base_url` and carries no mutable state between
//! calls. Each endpoint is split into a `build_*` method that produces an
//! `HttpRequest` and a `parse_*` method that consumes an `HttpResponse`.
//! The caller executes the actual HTTP round-trip, keeping the core
//! deterministic and free of I/O dependencies.

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::types::{
    CreateTodo, ErrorEnvelope, PatchTodo, ReplaceTodo, SearchEnvelope, SortDirection, Todo,
    TodoEnvelope, TodosEnvelope,
};

/// Synchronous, stateless client for the todo API.
#[derive(Debug, Clone)]
pub struct TodoClient {
    base_url: String,
}

impl TodoClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn build_list_todos(&self) -> HttpRequest {
        self.get(format!("{}/api/todos", self.base_url))
    }

    pub fn build_create_todo(&self, input: &CreateTodo) -> Result<HttpRequest, ApiError> {
        self.with_json(HttpMethod::Post, format!("{}/api/todos", self.base_url), input)
    }

    pub fn build_replace_todo(&self, id: u64, input: &ReplaceTodo) -> Result<HttpRequest, ApiError> {
        self.with_json(HttpMethod::Put, format!("{}/api/todos/{id}", self.base_url), input)
    }

    pub fn build_patch_todo(&self, id: u64, input: &PatchTodo) -> Result<HttpRequest, ApiError> {
        self.with_json(HttpMethod::Patch, format!("{}/api/todos/{id}", self.base_url), input)
    }

    pub fn build_sort_by_id(&self, direction: SortDirection) -> HttpRequest {
        self.get(format!(
            "{}/api/todos/sort-by-id?k={}",
            self.base_url,
            direction.as_str()
        ))
    }

    pub fn build_sort_by_message(&self, direction: SortDirection) -> HttpRequest {
        self.get(format!(
            "{}/api/todos/sort-by-message?k={}",
            self.base_url,
            direction.as_str()
        ))
    }

    pub fn build_search(&self, query: &str) -> HttpRequest {
        self.get(format!(
            "{}/api/todos/search?query={}",
            self.base_url,
            urlencoding::encode(query)
        ))
    }

    pub fn parse_list_todos(&self, response: HttpResponse) -> Result<Vec<Todo>, ApiError> {
        check_status(&response, 200)?;
        decode::<TodosEnvelope>(&response.body).map(|e| e.todos)
    }

    pub fn parse_create_todo(&self, response: HttpResponse) -> Result<Todo, ApiError> {
        check_status(&response, 201)?;
        decode::<TodoEnvelope>(&response.body).map(|e| e.todo)
    }

    pub fn parse_replace_todo(&self, response: HttpResponse) -> Result<Todo, ApiError> {
        check_status(&response, 200)?;
        decode::<TodoEnvelope>(&response.body).map(|e| e.todo)
    }

    pub fn parse_patch_todo(&self, response: HttpResponse) -> Result<Todo, ApiError> {
        check_status(&response, 200)?;
        decode::<TodoEnvelope>(&response.body).map(|e| e.todo)
    }

    /// Parses the response of either `sort-by-*` endpoint.
    pub fn parse_sorted_todos(&self, response: HttpResponse) -> Result<Vec<Todo>, ApiError> {
        self.parse_list_todos(response)
    }

    pub fn parse_search(&self, response: HttpResponse) -> Result<Vec<Todo>, ApiError> {
        check_status(&response, 200)?;
        decode::<SearchEnvelope>(&response.body).map(|e| e.results)
    }

    fn get(&self, path: String) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Get,
            path,
            headers: Vec::new(),
            body: None,
        }
    }

    fn with_json<T: Serialize>(
        &self,
        method: HttpMethod,
        path: String,
        input: &T,
    ) -> Result<HttpRequest, ApiError> {
        let body = serde_json::to_string(input).map_err(|e| ApiError::SerializationError(e.to_string()))?;
        Ok(HttpRequest {
            method,
            path,
            headers: vec![("content-type".to_string(), "application/json".to_string())],
            body: Some(body),
        })
    }
}

fn decode<T: DeserializeOwned>(body: &str) -> Result<T, ApiError> {
    serde_json::from_str(body).map_err(|e| ApiError::DeserializationError(e.to_string()))
}

/// Map non-success status codes to the appropriate `ApiError` variant.
fn check_status(response: &HttpResponse, expected: u16) -> Result<(), ApiError> {
    match response.status {
        s if s == expected => Ok(()),
        404 => Err(ApiError::NotFound),
        400 => {
            let message = serde_json::from_str::<ErrorEnvelope>(&response.body)
                .map(|e| e.message)
                .unwrap_or_else(|_| response.body.clone());
            Err(ApiError::Validation(message))
        }
        status => Err(ApiError::HttpError {
            status,
            body: response.body.clone(),
        }),
    }
}
