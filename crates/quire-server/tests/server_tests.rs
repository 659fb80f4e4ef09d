mod common;

use std::io::Write;

use quire_server::{load_resolver, ServerConfig, ServerError};

#[tokio::test]
async fn test_load_resolver_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(common::REPOSITORY_CONFIG.as_bytes()).unwrap();

    let config = ServerConfig {
        workflow_config_path: file.path().display().to_string(),
        strict_config: true,
        ..ServerConfig::default()
    };

    let resolver = load_resolver(&config).await.unwrap();
    assert!(resolver.exists_by_name("reviewflow"));
    assert!(resolver.is_default("defaultWorkflow"));
}

#[tokio::test]
async fn test_strict_loading_refuses_dangling_references() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    let yaml = common::REPOSITORY_CONFIG.replace("steps: [reviewstep]\n", "steps: [reviewstep, ghoststep]\n");
    file.write_all(yaml.as_bytes()).unwrap();

    let mut config = ServerConfig {
        workflow_config_path: file.path().display().to_string(),
        strict_config: true,
        ..ServerConfig::default()
    };

    let err = load_resolver(&config).await.unwrap_err();
    assert!(matches!(err, ServerError::WorkflowConfigError(_)));
    assert!(err.to_string().contains("ghoststep"));

    config.strict_config = false;
    let resolver = load_resolver(&config).await.unwrap();
    assert!(resolver.list_steps_for_workflow("reviewflow").is_err());
}

#[tokio::test]
async fn test_missing_workflow_config_file() {
    let config = ServerConfig {
        workflow_config_path: "/nonexistent/workflows.yaml".to_string(),
        ..ServerConfig::default()
    };

    let err = load_resolver(&config).await.unwrap_err();
    assert!(matches!(err, ServerError::WorkflowConfigError(_)));
}
