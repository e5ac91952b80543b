use eventcloud_store::{SchemaAdmin, StoreConfig, StoreError};
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn mock_config(server: &MockServer) -> StoreConfig {
    StoreConfig {
        server_url: server.uri(),
        app_id: "test_app".to_string(),
        master_key: "test_master".to_string(),
        ..Default::default()
    }
}

#[tokio::test]
async fn get_returns_schema_json() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/schemas/Event"))
        .and(header("X-Parse-Master-Key", "test_master"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "className": "Event",
            "fields": {"title": {"type": "String"}}
        })))
        .mount(&server)
        .await;

    let admin = SchemaAdmin::new(mock_config(&server));
    let schema = admin.get("Event").await.unwrap();
    assert_eq!(schema["className"], "Event");
}

#[tokio::test]
async fn get_failure_reads_as_absent() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/schemas/Nope"))
        .respond_with(ResponseTemplate::new(400).set_body_string("bad class"))
        .mount(&server)
        .await;

    let admin = SchemaAdmin::new(mock_config(&server));
    assert!(admin.get("Nope").await.is_none());
}

#[tokio::test]
async fn create_posts_schema() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/schemas/Event"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "className": "Event"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let admin = SchemaAdmin::new(mock_config(&server));
    admin
        .create(
            "Event",
            &serde_json::json!({"className": "Event", "fields": {}}),
        )
        .await
        .unwrap();
}

#[tokio::test]
async fn mutation_failure_surfaces_status() {
    let server = MockServer::start().await;

    Mock::given(method("PUT"))
        .and(path("/schemas/Event"))
        .respond_with(ResponseTemplate::new(403).set_body_string("denied"))
        .mount(&server)
        .await;

    let admin = SchemaAdmin::new(mock_config(&server));
    let err = admin
        .update("Event", &serde_json::json!({}))
        .await
        .unwrap_err();
    assert!(matches!(err, StoreError::Api { status: 403, .. }));
}

#[tokio::test]
async fn delete_requires_ok_status() {
    let server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/schemas/Old"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&server)
        .await;

    Mock::given(method("DELETE"))
        .and(path("/schemas/Busy"))
        .respond_with(ResponseTemplate::new(400).set_body_string("class not empty"))
        .mount(&server)
        .await;

    let admin = SchemaAdmin::new(mock_config(&server));
    admin.delete("Old").await.unwrap();
    assert!(admin.delete("Busy").await.is_err());
}
