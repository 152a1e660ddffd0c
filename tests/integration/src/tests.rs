//! Integration tests for the Dashboard Server
//!
//! A server is started in-process unless DASHBOARD_TEST_URL points at a
//! running one.

use dashboard_model::{EditorOptions, RouteParams, Validation, WorkspaceConfig};
use dashboard_server::Config;
use integration_tests::*;
use serde_json::{json, Value};

// ============================================================================
// Health Tests
// ============================================================================

#[tokio::test]
async fn test_health_check() {
    let config = TestConfig::new().await.expect("Failed to start test server");

    let response = config
        .client
        .get(config.api_url("/health"))
        .send()
        .await
        .expect("Failed to send health request");

    assert!(
        response.status().is_success(),
        "Health check failed with status: {}",
        response.status()
    );

    let health: HealthResponse = response.json().await.expect("Failed to parse health response");
    assert_eq!(health.status, "healthy");
    assert!(!health.version.is_empty());
}

// ============================================================================
// Schema Tests
// ============================================================================

#[tokio::test]
async fn test_list_document_kinds() {
    let config = TestConfig::new().await.unwrap();

    let kinds: ListKindsResponse = config
        .client
        .get(config.api_url("/schemas"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    assert_eq!(kinds.total, kinds.kinds.len());
    assert!(kinds.kinds.iter().any(|k| k == "workspace"));
    assert!(kinds.kinds.iter().any(|k| k == "import-project"));
}

#[tokio::test]
async fn test_workspace_schema() {
    let config = TestConfig::new().await.unwrap();

    let response = config
        .client
        .get(config.api_url("/schemas/workspace"))
        .send()
        .await
        .unwrap();
    assert!(response.status().is_success());

    let schema: Value = response.json().await.unwrap();
    assert_eq!(schema["required"], json!(["config"]));
}

#[tokio::test]
async fn test_unknown_schema_kind() {
    let config = TestConfig::new().await.unwrap();

    let response = config
        .client
        .get(config.api_url("/schemas/machine"))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status().as_u16(), 404);

    let error: ErrorResponse = response.json().await.unwrap();
    assert_eq!(error.code, 2001);
    assert!(error.message.contains("machine"));
}

// ============================================================================
// Validation Tests
// ============================================================================

async fn validate(config: &TestConfig, kind: &str, document: Value) -> Validation {
    let response = config
        .client
        .post(config.api_url(&format!("/validate/{}", kind)))
        .json(&document)
        .send()
        .await
        .expect("Failed to send validation request");

    assert!(
        response.status().is_success(),
        "Validation request failed: {}",
        response.status()
    );
    response.json().await.expect("Failed to parse validation")
}

#[tokio::test]
async fn test_minimal_workspace_is_valid() {
    let config = TestConfig::new().await.unwrap();

    let result = validate(&config, "workspace", json!({ "config": { "name": "ws1" } })).await;
    assert_eq!(result, Validation::valid());
}

#[tokio::test]
async fn test_workspace_without_config_is_rejected() {
    let config = TestConfig::new().await.unwrap();

    let result = validate(&config, "workspace", json!({ "id": "workspace1" })).await;
    assert!(!result.is_valid);
    assert_eq!(result.errors.len(), 1);
    assert!(result.errors[0].contains("config"));
}

#[tokio::test]
async fn test_workspace_config_rules() {
    let config = TestConfig::new().await.unwrap();

    let result = validate(
        &config,
        "workspace-config",
        json!({
            "name": "my workspace",
            "defaultEnv": "default",
            "environments": {
                "default": {
                    "machines": { "dev-machine": { "agents": ["org.eclipse.che.ws-agent"], "attributes": {} } },
                    "recipe": { "type": "dockerimage", "content": "eclipse/ubuntu_jdk8" }
                }
            }
        }),
    )
    .await;

    assert_eq!(
        result.errors,
        vec!["Workspace name may contain only letters, digits, '_', '-' and '.'"]
    );
}

#[tokio::test]
async fn test_import_project_rules() {
    let config = TestConfig::new().await.unwrap();

    let result = validate(
        &config,
        "import-project",
        json!({
            "source": { "type": "git", "location": "", "parameters": {} },
            "project": {
                "name": "petclinic",
                "type": "maven",
                "description": "",
                "commands": [],
                "attributes": [],
                "options": []
            }
        }),
    )
    .await;

    assert_eq!(result.errors, vec!["Project source location is required"]);
}

#[tokio::test]
async fn test_validate_unknown_kind() {
    let config = TestConfig::new().await.unwrap();

    let response = config
        .client
        .post(config.api_url("/validate/machine"))
        .json(&json!({}))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status().as_u16(), 404);
}

// ============================================================================
// Dashboard Settings Tests
// ============================================================================

#[tokio::test]
async fn test_editor_options_follow_config() {
    let server_config = Config {
        editor_mode: "application/x-yaml".to_string(),
        editor_line_wrapping: false,
        ..Config::default()
    };
    let config = TestConfig::with_config(server_config).await.unwrap();

    let options: EditorOptions = config
        .client
        .get(config.api_url("/editor-options"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    assert_eq!(options.mode, "application/x-yaml");
    assert!(!options.line_wrapping);
    assert!(options.line_numbers);
}

#[tokio::test]
async fn test_custom_api_prefix() {
    let server_config = Config {
        api_prefix: "/dashboard/api".to_string(),
        ..Config::default()
    };
    let config = TestConfig::with_config(server_config).await.unwrap();
    assert_eq!(config.api_url("/health"), format!("{}/dashboard/api/health", config.base_url));

    let health: HealthResponse = config
        .client
        .get(config.api_url("/health"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(health.status, "healthy");

    let response = config
        .client
        .get(format!("{}/api/v1/health", config.base_url))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 404);
}

#[tokio::test]
async fn test_route_params() {
    let config = TestConfig::new().await.unwrap();

    let params: RouteParams = config
        .client
        .get(config.api_url(
            "/route-params?namespace=che&workspaceName=ws1&ideParams=a&ideParams=b&showLogs=true",
        ))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    assert_eq!(params.namespace, "che");
    assert_eq!(params.workspace_name, "ws1");
    assert_eq!(params.ide_params_list(), vec!["a", "b"]);
    assert!(params.show_logs());
}

// ============================================================================
// Stack Tests
// ============================================================================

fn blank_stack() -> Value {
    json!({
        "id": "blank-default",
        "name": "Blank",
        "source": { "type": "image", "origin": "eclipse/ubuntu_jdk8" },
        "workspaceConfig": {
            "name": "default",
            "defaultEnv": "default",
            "environments": {
                "default": {
                    "machines": { "dev-machine": { "agents": ["org.eclipse.che.ws-agent"], "attributes": {} } },
                    "recipe": { "type": "dockerimage", "content": "eclipse/ubuntu_jdk8" }
                }
            }
        }
    })
}

#[tokio::test]
async fn test_instantiate_stack() {
    let config = TestConfig::new().await.unwrap();

    let response = config
        .client
        .post(config.api_url("/stacks/instantiate"))
        .json(&json!({ "stack": blank_stack(), "name": "wksp-blank" }))
        .send()
        .await
        .unwrap();
    assert!(response.status().is_success(), "{}", response.status());

    let workspace_config: WorkspaceConfig = response.json().await.unwrap();
    assert_eq!(workspace_config.name.as_deref(), Some("wksp-blank"));
    assert!(workspace_config.default_environment().is_some());
}

#[tokio::test]
async fn test_instantiate_stack_with_bad_name() {
    let config = TestConfig::new().await.unwrap();

    let response = config
        .client
        .post(config.api_url("/stacks/instantiate"))
        .json(&json!({ "stack": blank_stack(), "name": "ws" }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status().as_u16(), 400);

    let error: ErrorResponse = response.json().await.unwrap();
    assert_eq!(error.code, 2002);
    assert!(error.message.contains("between 3 and 100"));
}
