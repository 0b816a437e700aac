use serde_json::{json, Value};

use folio_client::ApiClient;
use folio_core::Appointment;

use crate::modules::system::with_query;

pub(crate) async fn list_appointments(
    api: &ApiClient,
    status: Option<String>,
) -> anyhow::Result<Vec<Appointment>> {
    let url = with_query("/appointments", &[("status", status)]);
    Ok(api.get(&url).await?)
}

pub(crate) async fn get_appointment(api: &ApiClient, id: &str) -> anyhow::Result<Value> {
    Ok(api.get(&format!("/appointments/{id}")).await?)
}

pub(crate) async fn set_appointment_status(
    api: &ApiClient,
    id: &str,
    status: &str,
) -> anyhow::Result<Appointment> {
    Ok(api
        .patch(&format!("/appointments/{id}/status"), json!({ "status": status }))
        .await?)
}

pub(crate) async fn delete_appointment(api: &ApiClient, id: &str) -> anyhow::Result<Value> {
    Ok(api.delete(&format!("/appointments/{id}")).await?)
}
