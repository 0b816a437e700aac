use std::sync::Arc;

use mockito::{Matcher, Server, ServerGuard};
use serde_json::json;

use crate::cli_args::{LoginArgs, ProjectArgs, ProjectCommand, ProjectListArgs};
use crate::modules::auth::{handle_login, handle_logout};
use crate::modules::projects::handle_project;
use folio_client::{ApiClient, CredentialStore};

fn api_for(server: &ServerGuard) -> ApiClient {
    ApiClient::new(
        reqwest::Client::new(),
        server.url(),
        Arc::new(CredentialStore::in_memory()),
    )
}

#[tokio::test]
async fn login_stores_both_tokens() {
    let mut server = Server::new_async().await;
    let login_mock = server
        .mock("POST", "/auth/login")
        .match_body(Matcher::Json(json!({
            "email": "admin@example.com",
            "password": "hunter2"
        })))
        .with_status(200)
        .with_body(
            json!({
                "data": {
                    "accessToken": "access-1",
                    "refreshToken": "refresh-1"
                }
            })
            .to_string(),
        )
        .create_async()
        .await;

    let api = api_for(&server);
    handle_login(
        LoginArgs {
            email: "admin@example.com".to_string(),
            password: "hunter2".to_string(),
        },
        &api,
    )
    .await
    .expect("login ok");

    login_mock.assert_async().await;
    assert_eq!(api.credentials().access_token().as_deref(), Some("access-1"));
    assert_eq!(
        api.credentials().refresh_token().as_deref(),
        Some("refresh-1")
    );
}

#[tokio::test]
async fn logout_clears_credentials_even_when_revocation_fails() {
    let mut server = Server::new_async().await;
    let logout_mock = server
        .mock("POST", "/auth/logout")
        .match_body(Matcher::Json(json!({ "refreshToken": "refresh-1" })))
        .with_status(500)
        .with_body(json!({ "message": "revocation backend down" }).to_string())
        .create_async()
        .await;

    let api = api_for(&server);
    api.credentials().set_tokens("access-1", "refresh-1");

    handle_logout(&api).await.expect("logout ok");

    logout_mock.assert_async().await;
    assert!(api.credentials().access_token().is_none());
    assert!(api.credentials().refresh_token().is_none());
}

#[tokio::test]
async fn project_list_sends_bearer_token() {
    let mut server = Server::new_async().await;
    let list_mock = server
        .mock("GET", "/projects")
        .match_header("authorization", "Bearer access-1")
        .with_status(200)
        .with_body(
            json!({
                "data": [{
                    "id": "proj-1",
                    "title": "Folio",
                    "slug": "folio",
                    "description": "Portfolio site",
                    "featured": true,
                    "createdAt": "2024-01-01T00:00:00Z",
                    "updatedAt": "2024-01-02T00:00:00Z"
                }]
            })
            .to_string(),
        )
        .create_async()
        .await;

    let api = api_for(&server);
    api.credentials().set_tokens("access-1", "refresh-1");

    handle_project(
        ProjectArgs {
            command: ProjectCommand::List(ProjectListArgs {
                featured: false,
                limit: None,
                offset: None,
            }),
        },
        &api,
    )
    .await
    .expect("list ok");

    list_mock.assert_async().await;
}
