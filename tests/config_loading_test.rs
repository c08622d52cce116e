// Loading table options from JSON and YAML documents

use std::io::Write;
use tempfile::Builder;
use ztable_wasm::{render_page, render_table, Column, EscapePolicy, PageContext, RenderConfig, TableError};

const YAML_OPTIONS: &str = r#"
data:
  - { name: Ada, lang: Rust }
  - { name: Linus, lang: C }
headers:
  - [Name, Language]
headerColumnMap:
  Name: name
  Language: lang
props:
  table:
    - { key: class, value: langs }
escape: raw
"#;

fn write_temp(suffix: &str, contents: &str) -> tempfile::NamedTempFile {
    let mut file = Builder::new().suffix(suffix).tempfile().expect("temp file");
    file.write_all(contents.as_bytes()).expect("write options");
    file
}

#[test]
fn test_yaml_options() {
    let config = RenderConfig::from_yaml(YAML_OPTIONS).expect("yaml should parse");
    assert_eq!(config.escape, EscapePolicy::Raw);
    assert_eq!(
        config.resolved_columns(),
        vec![Column::new("Name", "name"), Column::new("Language", "lang")]
    );

    let html = render_table(&config);
    assert!(html.starts_with(r#"<table class="langs" >"#));
    assert!(html.contains("<tr><td>Ada</td><td>Rust</td></tr>"));
}

#[test]
fn test_from_path_yaml_and_json_agree() {
    let yaml = write_temp(".yaml", YAML_OPTIONS);
    let from_yaml = RenderConfig::from_path(yaml.path()).expect("yaml file should load");

    let json = write_temp(".json", &from_yaml.to_json().expect("serialize"));
    let from_json = RenderConfig::from_path(json.path()).expect("json file should load");

    assert_eq!(render_table(&from_yaml), render_table(&from_json));
}

#[test]
fn test_from_path_unknown_extension() {
    let file = write_temp(".toml", "data = []");
    let err = RenderConfig::from_path(file.path()).unwrap_err();
    assert!(matches!(err, TableError::UnsupportedFormat(ref ext) if ext == "toml"));
}

#[test]
fn test_from_path_missing_file() {
    let dir = tempfile::tempdir().expect("temp dir");
    let err = RenderConfig::from_path(dir.path().join("absent.json")).unwrap_err();
    assert!(matches!(err, TableError::Io(_)));
}

#[test]
fn test_malformed_json_is_an_error() {
    let err = RenderConfig::from_json(r#"{"data": "not rows"}"#).unwrap_err();
    assert!(err.to_string().starts_with("Invalid JSON options"));
}

#[test]
fn test_explicit_columns_from_json() {
    let config = RenderConfig::from_json(
        r#"{
            "headers": [["Full name"]],
            "columns": [{"label": "Full name", "sourceKey": "name"}],
            "data": [{"name": "Grace"}]
        }"#,
    )
    .unwrap();
    assert!(render_table(&config).contains("<th>Full name</th></tr></thead><tbody><tr><td>Grace</td>"));
}

#[test]
fn test_page_wraps_rendered_table() {
    let config = RenderConfig::from_yaml(YAML_OPTIONS).unwrap();
    let table = render_table(&config);
    let page = render_page(&table, &PageContext::new().title(Some("Languages".to_string())))
        .expect("page should render");

    assert!(page.contains("<title>Languages</title>"));
    assert!(page.contains(&table));
}
