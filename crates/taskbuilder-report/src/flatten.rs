/*
[INPUT]:  Task-builder definition documents (pages, columns, sub-pages)
[OUTPUT]: Flat component rows in document traversal order
[POS]:    Core logic - recursive component flattening
[UPDATE]: When row fields or traversal rules change
*/

use serde::Serialize;
use std::collections::BTreeMap;
use taskbuilder_adapter::{Component, SubPage, TaskDefinitionDocument};
use tracing::warn;

/// Placeholder for fields the document does not provide
const PLACEHOLDER: &str = "-";

/// Display label for pages without a title
const UNNAMED_TASK: &str = "Unnamed Task";

/// Fixed label rewrite carried over from the production workflow; pages
/// titled "Check In" are reported as "Residential Install".
const CHECK_IN_TITLE: &str = "Check In";
const CHECK_IN_LABEL: &str = "Residential Install";

/// Card nesting depth at which expansion stops. Guards against
/// self-referential sub-page keys; legitimate documents stay far below it.
const MAX_CARD_DEPTH: usize = 32;

/// One flattened component row
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ComponentRow {
    #[serde(rename = "TaskType")]
    pub task_type: String,
    #[serde(rename = "Component")]
    pub component: String,
    #[serde(rename = "Title")]
    pub title: String,
    #[serde(rename = "Key in TaskBuilder")]
    pub key: String,
}

/// Flatten every task's pages into one row per component encountered.
///
/// Order follows the document: task order, then page order, then column
/// order, then body order, with card sub-pages expanded depth-first.
pub fn flatten_document(document: &TaskDefinitionDocument) -> Vec<ComponentRow> {
    let mut rows = Vec::new();

    for entry in &document.data {
        let config = &entry.task_builder_config.task_builder_config;
        for page in config.pages_in_order() {
            let label = page_label(page.title.as_deref());
            for col in &page.cols {
                for component in &col.body {
                    rows.extend(visit_component(component, &label, &config.sub_pages, 0));
                }
            }
        }
    }

    rows
}

fn page_label(title: Option<&str>) -> String {
    match title {
        Some(CHECK_IN_TITLE) => CHECK_IN_LABEL.to_string(),
        Some(title) => title.to_string(),
        None => UNNAMED_TASK.to_string(),
    }
}

fn non_empty(field: &Option<String>) -> Option<&str> {
    field.as_deref().filter(|text| !text.is_empty())
}

/// Key shown in the table: the component id when present, otherwise the
/// last dotted-path segment of `value`.
fn builder_key(component: &Component) -> String {
    if let Some(id) = non_empty(&component.id) {
        return id.to_string();
    }
    match non_empty(&component.value) {
        Some(value) => value.rsplit('.').next().unwrap_or(value).to_string(),
        None => PLACEHOLDER.to_string(),
    }
}

fn visit_component(
    component: &Component,
    label: &str,
    sub_pages: &BTreeMap<String, Vec<SubPage>>,
    depth: usize,
) -> Vec<ComponentRow> {
    let kind = component.kind.as_deref().unwrap_or(PLACEHOLDER);
    let title = non_empty(&component.heading)
        .or_else(|| non_empty(&component.title))
        .unwrap_or(PLACEHOLDER);
    let key = builder_key(component);

    let mut rows = vec![ComponentRow {
        task_type: label.to_string(),
        component: kind.to_string(),
        title: title.to_string(),
        key: key.clone(),
    }];

    if kind.eq_ignore_ascii_case("card") && !sub_pages.is_empty() {
        if depth >= MAX_CARD_DEPTH {
            warn!(key = %key, depth, "card nesting exceeds limit; not expanding");
            return rows;
        }
        if let Some(entries) = sub_pages.get(&key) {
            for sub_page in entries {
                for nested in &sub_page.components {
                    rows.extend(visit_component(nested, label, sub_pages, depth + 1));
                }
            }
        }
    }

    rows
}
