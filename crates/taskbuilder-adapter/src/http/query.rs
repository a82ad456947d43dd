/*
[INPUT]:  Selected task ids and fixed query payloads
[OUTPUT]: Task-type listings and task-builder definition documents
[POS]:    HTTP layer - query API endpoints
[UPDATE]: When query payloads or response mapping change
*/

use crate::http::{QueryClient, Result};
use crate::types::{
    QueryDescriptor, QueryInputs, QueryRequest, TaskDefinitionDocument, TaskType,
    TaskTypeListResponse,
};
use serde_json::{Map, Value};

/// Filter selecting task types that belong to the standard mobile workflow
const TASK_TYPE_LISTING_FILTER: &str =
    "{$taskType.mobileProcessId} = '__sys__standard_mobile_workflow'";

/// Filter selecting the task types named by the `taskIds` input
const TASK_DEFINITION_FILTER: &str = "{$id} in {@taskIds}";

/// Display name for task types the API returns without one
pub const UNNAMED_TASK: &str = "Unnamed Task";

fn column_map(entries: &[(&str, &str)]) -> Map<String, Value> {
    entries
        .iter()
        .map(|(name, path)| (name.to_string(), Value::String(path.to_string())))
        .collect()
}

fn task_type_listing_payload() -> QueryRequest {
    QueryRequest {
        data: vec![QueryDescriptor {
            models: vec!["taskType".to_string()],
            columns: column_map(&[("name", "taskType.name"), ("id", "taskType.id")]),
            filter: TASK_TYPE_LISTING_FILTER.to_string(),
            distinct: true,
            get_count: true,
            inputs: None,
        }],
    }
}

fn task_definition_payload(task_ids: &[String]) -> QueryRequest {
    QueryRequest {
        data: vec![QueryDescriptor {
            models: vec!["TaskType".to_string()],
            columns: column_map(&[
                ("taskBuilderConfig", "TaskType.taskBuilderConfig"),
                ("id", "TaskType.id"),
            ]),
            filter: TASK_DEFINITION_FILTER.to_string(),
            distinct: true,
            get_count: true,
            inputs: Some(QueryInputs {
                task_ids: task_ids.to_vec(),
            }),
        }],
    }
}

impl QueryClient {
    /// List the task types available for selection.
    ///
    /// Rows without an id are skipped; a missing name falls back to
    /// "Unnamed Task".
    pub async fn list_task_types(&self) -> Result<Vec<TaskType>> {
        let payload = task_type_listing_payload();
        let response: TaskTypeListResponse =
            self.send_json(self.query_request(&payload)).await?;

        let task_types = response
            .data
            .into_iter()
            .filter_map(|row| {
                let id = row.id.filter(|id| !id.is_empty())?;
                Some(TaskType {
                    id,
                    name: row.name.unwrap_or_else(|| UNNAMED_TASK.to_string()),
                })
            })
            .collect();

        Ok(task_types)
    }

    /// Fetch the task-builder documents for the selected task ids
    pub async fn fetch_task_definitions(
        &self,
        task_ids: &[String],
    ) -> Result<TaskDefinitionDocument> {
        let payload = task_definition_payload(task_ids);
        self.send_json(self.query_request(&payload)).await
    }
}

#[cfg(test)]
mod tests {
    use crate::http::{AdapterError, ApiCredentials, ClientConfig, QueryClient};
    use serde_json::json;
    use wiremock::matchers::{body_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn test_credentials() -> ApiCredentials {
        ApiCredentials {
            login_id: "ops@example.com".to_string(),
            password: "secret".to_string(),
            org_id: "org-1".to_string(),
        }
    }

    fn test_client(server: &MockServer) -> QueryClient {
        QueryClient::with_config(ClientConfig::default(), &server.uri(), test_credentials())
            .expect("client init")
    }

    #[tokio::test]
    async fn test_list_task_types_sends_fixed_payload() {
        let server = MockServer::start().await;
        let expected_payload = json!({
            "data": [{
                "models": ["taskType"],
                "columns": {"name": "taskType.name", "id": "taskType.id"},
                "filter": "{$taskType.mobileProcessId} = '__sys__standard_mobile_workflow'",
                "distinct": true,
                "getCount": true
            }]
        });

        let _mock = Mock::given(method("POST"))
            .and(path("/"))
            .and(header("loginId", "ops@example.com"))
            .and(header("password", "secret"))
            .and(header("orgId", "org-1"))
            .and(body_json(&expected_payload))
            .respond_with(
                ResponseTemplate::new(200)
                    .insert_header("content-type", "application/json")
                    .set_body_json(json!({
                        "data": [
                            {"id": "tt-1", "name": "Install"},
                            {"id": "tt-2"},
                            {"name": "Orphaned"},
                            {"id": 33, "name": "Numeric"}
                        ]
                    })),
            )
            .expect(1)
            .mount(&server)
            .await;

        let task_types = test_client(&server)
            .list_task_types()
            .await
            .expect("list_task_types failed");

        let summary: Vec<(&str, &str)> = task_types
            .iter()
            .map(|task| (task.id.as_str(), task.name.as_str()))
            .collect();
        assert_eq!(
            summary,
            vec![
                ("tt-1", "Install"),
                ("tt-2", "Unnamed Task"),
                ("33", "Numeric"),
            ]
        );
    }

    #[tokio::test]
    async fn test_list_task_types_error_status() {
        let server = MockServer::start().await;
        let _mock = Mock::given(method("POST"))
            .and(path("/"))
            .respond_with(
                ResponseTemplate::new(500)
                    .insert_header("content-type", "application/json")
                    .set_body_json(json!({"error": "boom"})),
            )
            .mount(&server)
            .await;

        let err = test_client(&server)
            .list_task_types()
            .await
            .expect_err("expected API error");
        match err {
            AdapterError::Api { status, .. } => assert_eq!(status, 500),
            other => panic!("unexpected error variant: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_fetch_task_definitions_sends_selected_ids() {
        let server = MockServer::start().await;
        let expected_payload = json!({
            "data": [{
                "models": ["TaskType"],
                "columns": {
                    "taskBuilderConfig": "TaskType.taskBuilderConfig",
                    "id": "TaskType.id"
                },
                "filter": "{$id} in {@taskIds}",
                "distinct": true,
                "getCount": true,
                "inputs": {"taskIds": ["tt-1", "tt-2"]}
            }]
        });

        let _mock = Mock::given(method("POST"))
            .and(path("/"))
            .and(body_json(&expected_payload))
            .respond_with(
                ResponseTemplate::new(200)
                    .insert_header("content-type", "application/json")
                    .set_body_json(json!({
                        "data": [{
                            "taskBuilderConfig": {"taskBuilderConfig": {
                                "dynamicPages": {
                                    "p1": {"title": "Survey", "cols": [{"body": [
                                        {"type": "field", "id": "q1"}
                                    ]}]}
                                }
                            }}
                        }]
                    })),
            )
            .expect(1)
            .mount(&server)
            .await;

        let ids = vec!["tt-1".to_string(), "tt-2".to_string()];
        let document = test_client(&server)
            .fetch_task_definitions(&ids)
            .await
            .expect("fetch_task_definitions failed");

        assert_eq!(document.data.len(), 1);
        let config = &document.data[0].task_builder_config.task_builder_config;
        let pages = config.pages_in_order();
        assert_eq!(pages.len(), 1);
        assert_eq!(pages[0].title.as_deref(), Some("Survey"));
        assert_eq!(pages[0].cols[0].body[0].id.as_deref(), Some("q1"));
    }

    #[tokio::test]
    async fn test_fetch_task_definitions_non_json_body() {
        let server = MockServer::start().await;
        let _mock = Mock::given(method("POST"))
            .and(path("/"))
            .respond_with(
                ResponseTemplate::new(200)
                    .insert_header("content-type", "text/html")
                    .set_body_string("<html>maintenance window</html>"),
            )
            .mount(&server)
            .await;

        let err = test_client(&server)
            .fetch_task_definitions(&["tt-1".to_string()])
            .await
            .expect_err("expected non-JSON error");
        match err {
            AdapterError::NonJsonResponse { status, body } => {
                assert_eq!(status, 200);
                assert_eq!(body, "<html>maintenance window</html>");
            }
            other => panic!("unexpected error variant: {other:?}"),
        }
    }
}
