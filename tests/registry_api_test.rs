//! Integration tests for the registry public API.

use agentrig::config::TemplateSourceConfig;
use agentrig::registry::{
    find_template, BundledStore, DirectoryStore, TemplateRegistry, INDEX_FILE,
};
use agentrig::AgentrigError;
use std::fs;
use tempfile::TempDir;

fn write_templates(dir: &std::path::Path) {
    fs::write(
        dir.join(INDEX_FILE),
        "\
# Templates

| ID | Name | Description | File |
|----|------|-------------|------|
| api | API | Service | api.md |
| web | Web | Frontend | nested/web.md |
| ghost | Ghost | No file | ghost.md |
",
    )
    .unwrap();
    fs::write(
        dir.join("api.md"),
        "---\nid: api\nversion: 1\n---\n## mcp_servers\n```json\n{\"db\": {\"command\": \"db-mcp\"}}\n```\n",
    )
    .unwrap();
    fs::create_dir_all(dir.join("nested")).unwrap();
    fs::write(
        dir.join("nested").join("web.md"),
        "---\nid: web\n---\n## agents\n### a11y\nCheck labels.\n",
    )
    .unwrap();
}

#[test]
fn bundled_registry_lists_and_finds() {
    let registry = TemplateRegistry::new(Box::new(BundledStore::new()));

    let entries = registry.list();
    assert!(entries.iter().any(|e| e.id == "python-api"));

    for entry in &entries {
        let doc = registry.find(&entry.id).unwrap().unwrap();
        assert_eq!(doc.meta.id(), Some(entry.id.as_str()));
        assert_eq!(doc.meta.name(), Some(entry.name.as_str()));
    }
}

#[test]
fn bundled_templates_detect_by_files() {
    let registry = TemplateRegistry::new(Box::new(BundledStore::new()));
    let doc = registry.require("nextjs").unwrap();

    let detection = doc.meta.detection().unwrap();
    let files = detection["files_any"].as_list().unwrap();
    assert!(files.contains(&"next.config.js".to_string()));
}

#[test]
fn directory_registry_resolves_nested_files() {
    let temp = TempDir::new().unwrap();
    write_templates(temp.path());
    let registry = TemplateRegistry::new(Box::new(DirectoryStore::new(temp.path())));

    let api = registry.find("api").unwrap().unwrap();
    assert_eq!(api.mcp_servers["db"]["command"], "db-mcp");

    let web = registry.find("web").unwrap().unwrap();
    assert_eq!(web.agents["a11y"], "Check labels.");
}

#[test]
fn directory_registry_distinguishes_missing_from_unreadable() {
    let temp = TempDir::new().unwrap();
    write_templates(temp.path());
    let registry = TemplateRegistry::new(Box::new(DirectoryStore::new(temp.path())));

    assert!(registry.find("nope").unwrap().is_none());
    assert!(matches!(
        registry.find("ghost"),
        Err(AgentrigError::TemplateRead { .. })
    ));
}

#[test]
fn missing_directory_is_empty_catalog() {
    let temp = TempDir::new().unwrap();
    let registry = TemplateRegistry::new(Box::new(DirectoryStore::new(temp.path().join("none"))));

    assert!(registry.list().is_empty());
    assert!(registry.find("api").unwrap().is_none());
}

#[test]
fn config_opens_directory_source() {
    let temp = TempDir::new().unwrap();
    write_templates(temp.path());

    let store = TemplateSourceConfig::Directory(temp.path().to_path_buf())
        .open()
        .unwrap();
    let registry = TemplateRegistry::new(store);
    assert_eq!(registry.list().len(), 3);
}

#[test]
fn find_template_with_closure_loader() {
    let index = "| id | name | description | file |\n| x | X | d | x.md |";
    let doc = find_template("x", index, |file| {
        Ok(format!("---\nid: {}\n---\n", file.trim_end_matches(".md")))
    })
    .unwrap()
    .unwrap();
    assert_eq!(doc.meta.id(), Some("x"));
}
