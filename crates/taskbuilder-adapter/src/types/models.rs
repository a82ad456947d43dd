/*
[INPUT]:  API schema definitions and serde requirements
[OUTPUT]: Typed Rust request/response structs with serialization support
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When API schema changes or new types added
*/

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::serde_helpers;

/// Request envelope for the query API
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QueryRequest {
    pub data: Vec<QueryDescriptor>,
}

/// One query descriptor inside the request envelope
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QueryDescriptor {
    pub models: Vec<String>,
    /// Output column name -> model column path
    pub columns: Map<String, Value>,
    pub filter: String,
    pub distinct: bool,
    #[serde(rename = "getCount")]
    pub get_count: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inputs: Option<QueryInputs>,
}

/// Named inputs referenced by a query filter
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QueryInputs {
    #[serde(rename = "taskIds")]
    pub task_ids: Vec<String>,
}

/// Raw row returned by the task-type listing query
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TaskTypeRow {
    #[serde(
        default,
        deserialize_with = "serde_helpers::deserialize_opt_string_or_number"
    )]
    pub id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
}

/// Response envelope for the task-type listing query
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct TaskTypeListResponse {
    #[serde(default)]
    pub data: Vec<TaskTypeRow>,
}

/// A selectable task type
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskType {
    pub id: String,
    pub name: String,
}
