use serde_json::{json, Value};

use folio_client::ApiClient;
use folio_core::Testimonial;

use crate::modules::system::with_query;

pub(crate) async fn list_testimonials(
    api: &ApiClient,
    status: Option<String>,
) -> anyhow::Result<Vec<Testimonial>> {
    let url = with_query("/testimonials", &[("status", status)]);
    Ok(api.get(&url).await?)
}

pub(crate) async fn set_testimonial_status(
    api: &ApiClient,
    id: &str,
    status: &str,
) -> anyhow::Result<Testimonial> {
    Ok(api
        .patch(&format!("/testimonials/{id}/status"), json!({ "status": status }))
        .await?)
}

pub(crate) async fn delete_testimonial(api: &ApiClient, id: &str) -> anyhow::Result<Value> {
    Ok(api.delete(&format!("/testimonials/{id}")).await?)
}
