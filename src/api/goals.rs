//! Typed goals API surface.
//!
//! Wire shapes mirror the backend's camelCase JSON exactly; nothing here
//! re-validates what the server already enforces.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::api::client::ApiClient;
use crate::api::error::RequestError;

/// Page envelope returned by the paginated list endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    pub content: Vec<T>,
    pub total_elements: i64,
    pub total_pages: i64,
    /// Zero-based page index.
    pub number: i64,
    pub size: i64,
}

/// Payload for creating or updating a goal.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GoalRequest {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// The backend requires at least one task per goal.
    pub tasks: Vec<TaskRequest>,
}

/// A goal as returned by the backend.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GoalResponse {
    pub id: i64,
    /// Display name; the backend serializes it under `goal`.
    #[serde(rename = "goal")]
    pub name: String,
    pub description: Option<String>,
    pub deletion_protected: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Payload for creating or updating a task.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completed: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub goal_id: Option<i64>,
}

/// A task as returned by the backend.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskResponse {
    pub id: i64,
    pub goal_id: i64,
    pub name: String,
    pub completed: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A search hit. `name_html` carries server-side highlight markup and is
/// treated as an opaque string here.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResult {
    pub id: i64,
    pub name_html: String,
    pub updated_at: DateTime<Utc>,
    #[serde(default)]
    pub tasks: Vec<SearchTaskHit>,
}

/// A task hit nested under a search result.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchTaskHit {
    pub id: i64,
    pub name_html: String,
    pub updated_at: DateTime<Utc>,
}

impl ApiClient {
    pub async fn list_goals(&self, page: u32, size: u32) -> Result<Page<GoalResponse>, RequestError> {
        self.get_query(
            "/goals",
            &[("page", page.to_string().as_str()), ("size", size.to_string().as_str())],
        )
        .await
    }

    pub async fn get_goal(&self, id: i64) -> Result<GoalResponse, RequestError> {
        self.get(&format!("/goals/{}", id)).await
    }

    pub async fn create_goal(&self, goal: &GoalRequest) -> Result<GoalResponse, RequestError> {
        self.post("/goals", goal).await
    }

    pub async fn update_goal(
        &self,
        id: i64,
        goal: &GoalRequest,
    ) -> Result<GoalResponse, RequestError> {
        self.put(&format!("/goals/{}", id), goal).await
    }

    pub async fn delete_goal(&self, id: i64) -> Result<(), RequestError> {
        self.delete(&format!("/goals/{}", id)).await
    }

    pub async fn list_goal_tasks(
        &self,
        goal_id: i64,
        page: u32,
        size: u32,
    ) -> Result<Page<TaskResponse>, RequestError> {
        self.get_query(
            &format!("/goals/{}/tasks", goal_id),
            &[("page", page.to_string().as_str()), ("size", size.to_string().as_str())],
        )
        .await
    }

    pub async fn list_unassigned_tasks(
        &self,
        page: u32,
        size: u32,
    ) -> Result<Page<TaskResponse>, RequestError> {
        self.get_query(
            "/tasks/unassigned",
            &[("page", page.to_string().as_str()), ("size", size.to_string().as_str())],
        )
        .await
    }

    pub async fn get_task(&self, id: i64) -> Result<TaskResponse, RequestError> {
        self.get(&format!("/tasks/{}", id)).await
    }

    pub async fn create_task(&self, task: &TaskRequest) -> Result<TaskResponse, RequestError> {
        self.post("/tasks", task).await
    }

    pub async fn create_task_under_goal(
        &self,
        goal_id: i64,
        task: &TaskRequest,
    ) -> Result<TaskResponse, RequestError> {
        self.post(&format!("/goals/{}/tasks", goal_id), task).await
    }

    pub async fn update_task(
        &self,
        id: i64,
        task: &TaskRequest,
    ) -> Result<TaskResponse, RequestError> {
        self.put(&format!("/tasks/{}", id), task).await
    }

    pub async fn delete_task(&self, id: i64) -> Result<(), RequestError> {
        // The backend registers the delete route under the singular /task
        // segment; every other task route uses /tasks.
        self.delete(&format!("/task/{}", id)).await
    }

    /// Full-text goal search. An empty query returns an empty list
    /// server-side, matching the list-fallback behavior of the UI.
    pub async fn search_goals(&self, query: &str) -> Result<Vec<SearchResult>, RequestError> {
        self.get_query("/search/goals", &[("q", query)]).await
    }
}
