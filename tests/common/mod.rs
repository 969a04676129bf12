#![allow(dead_code)]

use axum_test::TestServer;
use link_registry::LinkRegistry;
use link_registry::domain::entities::LinkMap;
use link_registry::infrastructure::persistence::JsonFileStore;
use link_registry::routes::router;
use link_registry::state::AppState;
use std::fs;
use std::path::PathBuf;
use std::sync::Arc;
use tempfile::TempDir;

pub const BASE_URL: &str = "https://s.example.com";

pub fn links_path(dir: &TempDir) -> PathBuf {
    dir.path().join("links.json")
}

pub fn create_registry(dir: &TempDir) -> Arc<LinkRegistry> {
    Arc::new(LinkRegistry::new(Arc::new(JsonFileStore::new(
        links_path(dir),
    ))))
}

pub fn seed_links(dir: &TempDir, pairs: &[(&str, &str)]) {
    let links: LinkMap = pairs
        .iter()
        .map(|(c, t)| (c.to_string(), t.to_string()))
        .collect();
    fs::write(links_path(dir), serde_json::to_string_pretty(&links).unwrap()).unwrap();
}

pub fn read_links_file(dir: &TempDir) -> LinkMap {
    let content = fs::read_to_string(links_path(dir)).unwrap();
    serde_json::from_str(&content).unwrap()
}

pub fn create_test_state(dir: &TempDir) -> AppState {
    AppState::new(create_registry(dir), BASE_URL)
}

/// Full router over a links file in `dir`; `dir` also serves as the static directory.
pub fn make_server(dir: &TempDir) -> TestServer {
    TestServer::new(router(create_test_state(dir), dir.path())).unwrap()
}
