use serde_json::{json, Value};

use folio_client::ApiClient;
use folio_core::NewsletterSubscriber;

pub(crate) async fn list_subscribers(
    api: &ApiClient,
) -> anyhow::Result<Vec<NewsletterSubscriber>> {
    Ok(api.get("/newsletter/subscribers").await?)
}

pub(crate) async fn subscribe(api: &ApiClient, email: &str) -> anyhow::Result<Value> {
    Ok(api
        .post("/newsletter/subscribe", json!({ "email": email }))
        .await?)
}

pub(crate) async fn unsubscribe(api: &ApiClient, id: &str) -> anyhow::Result<Value> {
    Ok(api.delete(&format!("/newsletter/subscribers/{id}")).await?)
}
