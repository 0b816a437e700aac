use serde_json::Value;

use folio_client::ApiClient;
use folio_core::Project;

use super::types::{CreateProjectRequest, UpdateProjectRequest};
use crate::modules::system::with_query;

pub(crate) async fn list_projects(
    api: &ApiClient,
    featured: bool,
    limit: Option<i64>,
    offset: Option<i64>,
) -> anyhow::Result<Vec<Project>> {
    let url = with_query(
        "/projects",
        &[
            ("featured", featured.then(|| "true".to_string())),
            ("limit", limit.map(|value| value.to_string())),
            ("offset", offset.map(|value| value.to_string())),
        ],
    );
    Ok(api.get(&url).await?)
}

pub(crate) async fn get_project(api: &ApiClient, id: &str) -> anyhow::Result<Value> {
    Ok(api.get(&format!("/projects/{id}")).await?)
}

pub(crate) async fn create_project(
    api: &ApiClient,
    payload: CreateProjectRequest,
) -> anyhow::Result<Value> {
    Ok(api.post("/projects", serde_json::to_value(&payload)?).await?)
}

pub(crate) async fn update_project(
    api: &ApiClient,
    id: &str,
    payload: UpdateProjectRequest,
) -> anyhow::Result<Value> {
    Ok(api
        .put(&format!("/projects/{id}"), serde_json::to_value(&payload)?)
        .await?)
}

pub(crate) async fn delete_project(api: &ApiClient, id: &str) -> anyhow::Result<Value> {
    Ok(api.delete(&format!("/projects/{id}")).await?)
}
