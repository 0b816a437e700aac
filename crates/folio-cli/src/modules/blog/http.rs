use serde_json::{json, Value};

use folio_client::ApiClient;
use folio_core::BlogPost;

use super::types::{CreatePostRequest, UpdatePostRequest};
use crate::modules::system::with_query;

pub(crate) async fn list_posts(
    api: &ApiClient,
    status: Option<String>,
    tag: Option<String>,
    limit: Option<i64>,
    offset: Option<i64>,
) -> anyhow::Result<Vec<BlogPost>> {
    let url = with_query(
        "/posts",
        &[
            ("status", status),
            ("tag", tag),
            ("limit", limit.map(|value| value.to_string())),
            ("offset", offset.map(|value| value.to_string())),
        ],
    );
    Ok(api.get(&url).await?)
}

pub(crate) async fn get_post(api: &ApiClient, id: &str) -> anyhow::Result<Value> {
    Ok(api.get(&format!("/posts/{id}")).await?)
}

pub(crate) async fn create_post(
    api: &ApiClient,
    payload: CreatePostRequest,
) -> anyhow::Result<Value> {
    Ok(api.post("/posts", serde_json::to_value(&payload)?).await?)
}

pub(crate) async fn update_post(
    api: &ApiClient,
    id: &str,
    payload: UpdatePostRequest,
) -> anyhow::Result<Value> {
    Ok(api
        .put(&format!("/posts/{id}"), serde_json::to_value(&payload)?)
        .await?)
}

pub(crate) async fn publish_post(api: &ApiClient, id: &str) -> anyhow::Result<BlogPost> {
    Ok(api.post(&format!("/posts/{id}/publish"), json!({})).await?)
}

pub(crate) async fn delete_post(api: &ApiClient, id: &str) -> anyhow::Result<Value> {
    Ok(api.delete(&format!("/posts/{id}")).await?)
}
