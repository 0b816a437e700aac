use serde_json::Value;

use folio_client::ApiClient;
use folio_core::Experience;

use super::types::{CreateExperienceRequest, UpdateExperienceRequest};

pub(crate) async fn list_experiences(api: &ApiClient) -> anyhow::Result<Vec<Experience>> {
    Ok(api.get("/experiences").await?)
}

pub(crate) async fn create_experience(
    api: &ApiClient,
    payload: CreateExperienceRequest,
) -> anyhow::Result<Value> {
    Ok(api
        .post("/experiences", serde_json::to_value(&payload)?)
        .await?)
}

pub(crate) async fn update_experience(
    api: &ApiClient,
    id: &str,
    payload: UpdateExperienceRequest,
) -> anyhow::Result<Value> {
    Ok(api
        .put(&format!("/experiences/{id}"), serde_json::to_value(&payload)?)
        .await?)
}

pub(crate) async fn delete_experience(api: &ApiClient, id: &str) -> anyhow::Result<Value> {
    Ok(api.delete(&format!("/experiences/{id}")).await?)
}
