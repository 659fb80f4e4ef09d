use std::sync::Arc;

use async_trait::async_trait;
use mockall::mock;
use uuid::Uuid;

use quire_core::{
    Collection, CollectionCatalog, CoreError, QueryContext, StepDefinition, WorkflowConfigResolver,
    WorkflowConfiguration,
};

mock! {
    pub Catalog {}

    #[async_trait]
    impl CollectionCatalog for Catalog {
        async fn find_all(&self, ctx: &QueryContext) -> Result<Vec<Collection>, CoreError>;
        async fn find_by_handle(&self, ctx: &QueryContext, handle: &str) -> Result<Option<Collection>, CoreError>;
        async fn find_by_id(&self, ctx: &QueryContext, id: &Uuid) -> Result<Option<Collection>, CoreError>;
    }
}

fn configuration() -> Arc<WorkflowConfiguration> {
    Arc::new(
        WorkflowConfiguration::builder("default")
            .workflow("default", ["reviewstep"])
            .workflow("reviewflow", ["reviewstep"])
            .step(StepDefinition::new("reviewstep"))
            .map_collection("123456789/2", "reviewflow")
            .build(),
    )
}

#[tokio::test]
async fn test_context_is_passed_through_to_catalog() {
    let ctx = QueryContext::new("corr-42").with_locale("nl");
    let expected = ctx.clone();

    let mut catalog = MockCatalog::new();
    catalog
        .expect_find_all()
        .withf(move |ctx| *ctx == expected)
        .times(1)
        .returning(|_| Ok(vec![Collection::new("123456789/5", "Unmapped")]));

    let resolver = WorkflowConfigResolver::new(configuration(), Arc::new(catalog));
    let collections = resolver
        .list_collections_for_workflow(&ctx, "default")
        .await
        .unwrap();

    assert_eq!(collections.len(), 1);
    assert_eq!(collections[0].handle, "123456789/5");
}

#[tokio::test]
async fn test_named_workflow_looks_up_only_its_mapped_handles() {
    let mut catalog = MockCatalog::new();
    catalog.expect_find_all().never();
    catalog
        .expect_find_by_handle()
        .withf(|_, handle| handle == "123456789/2")
        .times(1)
        .returning(|_, handle| Ok(Some(Collection::new(handle, "Theses"))));

    let resolver = WorkflowConfigResolver::new(configuration(), Arc::new(catalog));
    let collections = resolver
        .list_collections_for_workflow(&QueryContext::default(), "reviewflow")
        .await
        .unwrap();

    assert_eq!(collections.len(), 1);
    assert_eq!(collections[0].name, "Theses");
}

#[tokio::test]
async fn test_unknown_workflow_never_touches_catalog() {
    let mut catalog = MockCatalog::new();
    catalog.expect_find_all().never();
    catalog.expect_find_by_handle().never();

    let resolver = WorkflowConfigResolver::new(configuration(), Arc::new(catalog));
    let result = resolver
        .list_collections_for_workflow(&QueryContext::default(), "nonexistent")
        .await;

    assert_eq!(result, Err(CoreError::UnknownWorkflow("nonexistent".to_string())));
}

#[tokio::test]
async fn test_catalog_failure_is_propagated_without_partial_results() {
    let mut catalog = MockCatalog::new();
    catalog
        .expect_find_all()
        .returning(|_| Err(CoreError::CatalogError("connection refused".to_string())));

    let resolver = WorkflowConfigResolver::new(configuration(), Arc::new(catalog));
    let result = resolver
        .list_collections_for_workflow(&QueryContext::default(), "default")
        .await;

    match result {
        Err(CoreError::CatalogError(msg)) => assert!(msg.contains("connection refused")),
        other => panic!("Expected CatalogError, got {:?}", other),
    }
}
