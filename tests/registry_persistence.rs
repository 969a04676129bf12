mod common;

use link_registry::domain::error::RegistryError;
use link_registry::infrastructure::persistence::JsonFileStore;
use link_registry::LinkRegistry;
use std::fs;
use std::sync::Arc;
use tempfile::TempDir;

#[tokio::test]
async fn test_create_lookup_delete_round() {
    let dir = TempDir::new().unwrap();
    let registry = common::create_registry(&dir);

    let code = registry.create(None, "https://a.test").await.unwrap();

    assert_eq!(code.len(), 8);
    assert!(code.chars().all(|c| c.is_ascii_hexdigit()));
    assert_eq!(
        registry.lookup(&code).await.unwrap().as_deref(),
        Some("https://a.test")
    );

    registry.delete(&code).await.unwrap();

    assert!(registry.lookup(&code).await.unwrap().is_none());
    assert!(common::read_links_file(&dir).is_empty());
}

#[tokio::test]
async fn test_created_link_survives_restart() {
    let dir = TempDir::new().unwrap();

    {
        let registry = common::create_registry(&dir);
        registry
            .create(Some("abc123".to_string()), "https://example.com")
            .await
            .unwrap();
    }

    let restarted = common::create_registry(&dir);

    assert_eq!(
        restarted.lookup("abc123").await.unwrap().as_deref(),
        Some("https://example.com")
    );
}

#[tokio::test]
async fn test_missing_file_is_created_on_first_use() {
    let dir = TempDir::new().unwrap();
    let registry = common::create_registry(&dir);

    assert!(!common::links_path(&dir).exists());
    assert!(registry.list_all().await.unwrap().is_empty());
    assert!(common::links_path(&dir).exists());
}

#[tokio::test]
async fn test_corrupt_file_resets_to_empty() {
    let dir = TempDir::new().unwrap();
    fs::write(common::links_path(&dir), "{\"half\": \"https://wri").unwrap();

    let registry = common::create_registry(&dir);

    assert!(registry.list_all().await.unwrap().is_empty());
    assert!(common::read_links_file(&dir).is_empty());

    let code = registry.create(None, "https://after.test").await.unwrap();
    let on_disk = common::read_links_file(&dir);
    assert_eq!(on_disk.len(), 1);
    assert_eq!(on_disk[&code], "https://after.test");
}

#[tokio::test]
async fn test_invalid_target_leaves_file_untouched() {
    let dir = TempDir::new().unwrap();
    common::seed_links(&dir, &[("keep", "https://keep.test")]);
    let before = fs::read(common::links_path(&dir)).unwrap();
    let registry = common::create_registry(&dir);
    let size_before = registry.len().await.unwrap();

    let result = registry.create(None, "not-a-url").await;

    assert!(matches!(result, Err(RegistryError::InvalidTarget { .. })));
    assert_eq!(registry.len().await.unwrap(), size_before);
    assert_eq!(fs::read(common::links_path(&dir)).unwrap(), before);
}

#[tokio::test]
async fn test_conflict_leaves_state_untouched() {
    let dir = TempDir::new().unwrap();
    common::seed_links(&dir, &[("taken", "https://first.test")]);
    let before = fs::read(common::links_path(&dir)).unwrap();
    let registry = common::create_registry(&dir);

    let result = registry
        .create(Some("taken".to_string()), "https://second.test")
        .await;

    assert!(matches!(result, Err(RegistryError::CodeConflict { .. })));
    assert_eq!(
        registry.lookup("taken").await.unwrap().as_deref(),
        Some("https://first.test")
    );
    assert_eq!(fs::read(common::links_path(&dir)).unwrap(), before);
}

#[tokio::test]
async fn test_hand_edit_is_picked_up_by_reload() {
    let dir = TempDir::new().unwrap();
    let registry = common::create_registry(&dir);
    registry
        .create(Some("first".to_string()), "https://first.test")
        .await
        .unwrap();

    common::seed_links(
        &dir,
        &[("first", "https://first.test"), ("manual", "https://manual.test")],
    );
    assert!(registry.lookup("manual").await.unwrap().is_none());

    assert_eq!(registry.reload().await.unwrap(), 2);
    assert_eq!(
        registry.lookup("manual").await.unwrap().as_deref(),
        Some("https://manual.test")
    );
}

#[tokio::test]
async fn test_mutation_keeps_hand_edits() {
    let dir = TempDir::new().unwrap();
    let registry = common::create_registry(&dir);
    assert!(registry.is_empty().await.unwrap());

    common::seed_links(&dir, &[("manual", "https://manual.test")]);

    registry
        .create(Some("api".to_string()), "https://api.test")
        .await
        .unwrap();

    let on_disk = common::read_links_file(&dir);
    assert_eq!(on_disk.len(), 2);
    assert!(on_disk.contains_key("manual"));
    assert_eq!(registry.list_all().await.unwrap(), on_disk);
}

#[tokio::test]
async fn test_unusable_path_is_storage_failure() {
    let dir = TempDir::new().unwrap();
    // The links "file" is a directory.
    let registry = LinkRegistry::new(Arc::new(JsonFileStore::new(dir.path())));

    assert!(matches!(
        registry.lookup("abc").await,
        Err(RegistryError::StorageFailure { .. })
    ));
    assert!(matches!(
        registry.create(None, "https://example.com").await,
        Err(RegistryError::StorageFailure { .. })
    ));
}

#[tokio::test]
async fn test_file_is_human_readable() {
    let dir = TempDir::new().unwrap();
    let registry = common::create_registry(&dir);
    registry
        .create(Some("abc123".to_string()), "https://example.com")
        .await
        .unwrap();

    let content = fs::read_to_string(common::links_path(&dir)).unwrap();

    assert_eq!(content, "{\n  \"abc123\": \"https://example.com\"\n}\n");
}
