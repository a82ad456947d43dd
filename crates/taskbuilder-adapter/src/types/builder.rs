/*
[INPUT]:  Nested taskBuilderConfig JSON returned by the definition query
[OUTPUT]: Typed task-builder document records with lenient defaults
[POS]:    Data layer - task-builder document schema
[UPDATE]: When the task-builder document shape changes
*/

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeMap;
use tracing::warn;

use super::serde_helpers;

/// Response envelope for the definition query; one entry per selected task
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TaskDefinitionDocument {
    #[serde(default)]
    pub data: Vec<TaskEntry>,
}

/// One selected task's row in the definition response
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TaskEntry {
    #[serde(rename = "taskBuilderConfig", default)]
    pub task_builder_config: BuilderConfigEnvelope,
}

/// The doubly-nested `taskBuilderConfig.taskBuilderConfig` wrapper
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BuilderConfigEnvelope {
    #[serde(rename = "taskBuilderConfig", default)]
    pub task_builder_config: BuilderConfig,
}

/// Page and sub-page layout of one task
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BuilderConfig {
    /// Page id -> page, in document order
    #[serde(rename = "dynamicPages", default)]
    pub dynamic_pages: Map<String, Value>,
    /// Card key -> sub-page sequence
    #[serde(rename = "subPages", default)]
    pub sub_pages: BTreeMap<String, Vec<SubPage>>,
}

impl BuilderConfig {
    /// Pages in document order. A page entry that does not parse degrades
    /// to an empty page rather than failing the document.
    pub fn pages_in_order(&self) -> Vec<Page> {
        self.dynamic_pages
            .iter()
            .map(|(page_id, value)| match serde_json::from_value(value.clone()) {
                Ok(page) => page,
                Err(err) => {
                    warn!(page_id = %page_id, error = %err, "skipping malformed page entry");
                    Page::default()
                }
            })
            .collect()
    }
}

/// One dynamic page: a title and its ordered columns
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Page {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub cols: Vec<Col>,
}

/// One page column holding an ordered body of components
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Col {
    #[serde(default)]
    pub body: Vec<Component>,
}

/// One sub-page behind a card component
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SubPage {
    #[serde(default)]
    pub components: Vec<Component>,
}

/// One UI component definition
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Component {
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub heading: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(
        default,
        deserialize_with = "serde_helpers::deserialize_opt_string_or_number",
        skip_serializing_if = "Option::is_none"
    )]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}
