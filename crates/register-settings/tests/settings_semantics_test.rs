//! Cross-domain semantics of the settings service.
//!
//! Exercises the defaulting reads, the two write semantics (replace with
//! defaults vs merge), and backend selection against the in-memory store.

use std::sync::Arc;

use register_core::models::{LlmUpdate, RbacUpdate};
use register_core::Error;
use register_db::MemoryConfigStore;
use register_settings::SettingsService;

fn service() -> SettingsService {
    SettingsService::new(Arc::new(MemoryConfigStore::new()))
}

#[tokio::test]
async fn writing_defaults_is_idempotent_across_domains() {
    let svc = service();

    let rbac = svc.get_rbac().await.unwrap();
    let written = svc.update_rbac(RbacUpdate::default()).await.unwrap();
    assert_eq!(written, rbac);
    assert_eq!(svc.get_rbac().await.unwrap(), rbac);

    let llm = svc.get_llm().await.unwrap();
    let written = svc.update_llm(LlmUpdate::default()).await.unwrap();
    assert_eq!(written, llm);
    assert_eq!(svc.get_llm().await.unwrap(), llm);

    let retention = svc.get_retention().await.unwrap();
    svc.update_retention(Default::default()).await.unwrap();
    assert_eq!(svc.get_retention().await.unwrap(), retention);

    let solr = svc.get_solr().await.unwrap();
    svc.update_solr(Default::default()).await.unwrap();
    assert_eq!(svc.get_solr().await.unwrap(), solr);

    let tenancy = svc.get_tenancy().await.unwrap();
    svc.update_tenancy(Default::default()).await.unwrap();
    assert_eq!(svc.get_tenancy().await.unwrap(), tenancy);

    let files = svc.get_files().await.unwrap();
    svc.update_files(Default::default()).await.unwrap();
    assert_eq!(svc.get_files().await.unwrap(), files);

    let n8n = svc.get_n8n().await.unwrap();
    svc.update_n8n(Default::default()).await.unwrap();
    assert_eq!(svc.get_n8n().await.unwrap(), n8n);

    let objects = svc.get_objects().await.unwrap();
    svc.update_objects(Default::default()).await.unwrap();
    assert_eq!(svc.get_objects().await.unwrap(), objects);

    // Facets round-trip through the normalizer rather than an update struct.
    let facets = svc.get_facets().await.unwrap();
    let written = svc
        .update_facets(&serde_json::to_value(&facets).unwrap())
        .await
        .unwrap();
    assert_eq!(written, facets);
    assert_eq!(svc.get_facets().await.unwrap(), facets);
}

#[tokio::test]
async fn rbac_replaces_while_llm_merges() {
    let svc = service();

    // Stage non-default values in both domains.
    let rbac: RbacUpdate =
        serde_json::from_str(r#"{"anonymousGroup": "guests"}"#).unwrap();
    svc.update_rbac(rbac).await.unwrap();

    let llm: LlmUpdate =
        serde_json::from_str(r#"{"openaiConfig": {"apiKey": "sk-test"}}"#).unwrap();
    svc.update_llm(llm).await.unwrap();

    // Submit updates that do not mention the staged fields.
    let rbac: RbacUpdate = serde_json::from_str(r#"{"enabled": true}"#).unwrap();
    svc.update_rbac(rbac).await.unwrap();

    let llm: LlmUpdate = serde_json::from_str(r#"{"enabled": true}"#).unwrap();
    svc.update_llm(llm).await.unwrap();

    // RBAC reverted the unmentioned field; LLM kept it.
    assert_eq!(svc.get_rbac().await.unwrap().anonymous_group, "public");
    assert_eq!(svc.get_llm().await.unwrap().openai_config.api_key, "sk-test");
}

#[tokio::test]
async fn domains_do_not_interfere() {
    let svc = service();

    let rbac: RbacUpdate = serde_json::from_str(r#"{"enabled": true}"#).unwrap();
    svc.update_rbac(rbac).await.unwrap();

    // Other domains still read pure defaults.
    assert!(svc.get_tenancy().await.unwrap().enabled);
    assert!(!svc.get_solr().await.unwrap().enabled);
    assert_eq!(svc.get_search_backend().await.unwrap().active, "solr");
}

#[tokio::test]
async fn backend_selection_validates_then_persists() {
    let svc = service();

    assert!(matches!(
        svc.set_search_backend("opensearch").await,
        Err(Error::InvalidBackend(_))
    ));
    assert_eq!(svc.get_search_backend().await.unwrap().active, "solr");

    let config = svc.set_search_backend("elasticsearch").await.unwrap();
    assert_eq!(config.active, "elasticsearch");
    assert!(config.updated.is_some());
    assert_eq!(
        svc.get_search_backend().await.unwrap().active,
        "elasticsearch"
    );
}

#[tokio::test]
async fn corrupt_record_in_one_domain_is_isolated() {
    let store = Arc::new(MemoryConfigStore::new());
    store.seed("solr", "{broken").await;
    let svc = SettingsService::new(store);

    assert!(svc.get_solr().await.is_err());
    // Every other domain is unaffected.
    assert!(svc.get_rbac().await.is_ok());
    assert!(svc.get_llm().await.is_ok());
    assert!(svc.get_facets().await.is_ok());
}
