//! Unit tests for document sources and format parsing.

use std::io::Write as _;

use anyhow::{Context, Result, anyhow, ensure};
use camino::Utf8Path;
use cap_std::{ambient_authority, fs_utf8::Dir as Utf8Dir};
use rstest::{fixture, rstest};
use serde_json::{Value, json};
use tempfile::TempDir;

use super::{DirSource, MemorySource, Source, SourceOptions, load_mapping, parse_mapping};
use crate::TreeError;

fn open_cap_utf8_dir(path: &std::path::Path) -> Result<Utf8Dir> {
    let utf8_path = Utf8Path::from_path(path)
        .ok_or_else(|| anyhow!("temporary directory path is not valid UTF-8: {path:?}"))?;
    Utf8Dir::open_ambient_dir(utf8_path, ambient_authority())
        .context("open temporary directory with cap-std")
}

fn write_cap_file(dir: &Utf8Dir, name: &str, contents: &str) -> Result<()> {
    let mut file = dir.create(name).with_context(|| format!("create {name}"))?;
    file.write_all(contents.as_bytes())
        .with_context(|| format!("write {name}"))?;
    Ok(())
}

#[fixture]
fn config_root() -> Result<TempDir> {
    let temp = tempfile::tempdir().context("create temporary directory")?;
    let dir = open_cap_utf8_dir(temp.path())?;
    dir.create_dir_all("shop/config").context("create config dir")?;
    write_cap_file(&dir, "shop/config/app.json", r#"{"db": {"host": "db.internal"}}"#)?;
    write_cap_file(&dir, "shop/config/list.json", "[1, 2, 3]")?;
    Ok(temp)
}

#[rstest]
#[case("", None, "")]
#[case("config", None, "config")]
#[case("deploy/v2/shop/config", Some("shop"), "shop/config")]
#[case("deploy/config", Some("shop"), "deploy/config")]
#[case("deploy/shop", Some("shop"), "deploy/shop")]
#[case("a/shop/b/shop/c", Some("shop"), "shop/b/shop/c")]
fn trims_directory_to_project(
    #[case] dir: &str,
    #[case] project: Option<&str>,
    #[case] expected: &str,
) {
    let base = SourceOptions::new().with_dir(dir);
    let options = match project {
        Some(name) => base.with_project_name(name),
        None => base,
    };
    assert_eq!(options.dir(), expected);
}

#[rstest]
#[case("", "app.json")]
#[case("config", "config/app.json")]
#[case("config/", "config/app.json")]
fn joins_object_keys(#[case] dir: &str, #[case] expected: &str) {
    let options = SourceOptions::new().with_dir(dir);
    assert_eq!(options.object_key("app.json"), expected);
}

#[rstest]
fn dir_source_reads_documents_under_the_prefix(config_root: Result<TempDir>) -> Result<()> {
    let temp = config_root?;
    let root = Utf8Path::from_path(temp.path()).ok_or_else(|| anyhow!("non UTF-8 temp dir"))?;
    let options = SourceOptions::new()
        .with_dir("shop/config")
        .with_project_name("shop");
    let source = DirSource::open(root, options).map_err(|e| anyhow!("{e}"))?;
    let tree = load_mapping(&source, "app.json").map_err(|e| anyhow!("{e}"))?;
    ensure!(
        Value::Object(tree) == json!({"db": {"host": "db.internal"}}),
        "unexpected document contents"
    );
    Ok(())
}

#[rstest]
fn dir_source_reports_missing_documents(config_root: Result<TempDir>) -> Result<()> {
    let temp = config_root?;
    let root = Utf8Path::from_path(temp.path()).ok_or_else(|| anyhow!("non UTF-8 temp dir"))?;
    let source = DirSource::open(root, SourceOptions::new().with_dir("shop/config"))
        .map_err(|e| anyhow!("{e}"))?;
    let Err(err) = source.read_file("missing.json") else {
        return Err(anyhow!("expected missing document to fail"));
    };
    ensure!(
        matches!(err.as_ref(), TreeError::Source { name, .. } if name == "shop/config/missing.json"),
        "unexpected error: {err}"
    );
    Ok(())
}

#[rstest]
fn dir_source_rejects_non_mapping_documents(config_root: Result<TempDir>) -> Result<()> {
    let temp = config_root?;
    let root = Utf8Path::from_path(temp.path()).ok_or_else(|| anyhow!("non UTF-8 temp dir"))?;
    let source = DirSource::open(root, SourceOptions::new().with_dir("shop/config"))
        .map_err(|e| anyhow!("{e}"))?;
    let Err(err) = load_mapping(&source, "list.json") else {
        return Err(anyhow!("expected array document to be rejected"));
    };
    ensure!(
        matches!(err.as_ref(), TreeError::Parse { .. }),
        "unexpected error: {err}"
    );
    Ok(())
}

#[test]
fn memory_source_serves_documents_through_trait_objects() -> Result<()> {
    let source: Box<dyn Source> = Box::new(
        MemorySource::new(SourceOptions::new().with_dir("cfg"))
            .with_document("app.json", r#"{"name": "svc"}"#),
    );
    let tree = load_mapping(&source, "app.json").map_err(|e| anyhow!("{e}"))?;
    ensure!(tree.get("name") == Some(&json!("svc")), "name not loaded");
    ensure!(source.read_file("other.json").is_err(), "unknown document served");
    Ok(())
}

#[cfg(feature = "toml")]
#[test]
fn parses_toml_documents() -> Result<()> {
    let tree = parse_mapping("app.TOML", b"[server]\nport = 8080\n").map_err(|e| anyhow!("{e}"))?;
    ensure!(
        Value::Object(tree) == json!({"server": {"port": 8080}}),
        "unexpected TOML contents"
    );
    Ok(())
}

#[cfg(feature = "toml")]
#[test]
fn toml_datetimes_become_strings() -> Result<()> {
    #[derive(serde::Deserialize)]
    struct Release {
        released: String,
    }

    let document = b"released = 1979-05-27\n[deploy]\nat = 1979-05-27T07:32:00Z\nwindows = [07:30:00]\n";
    let tree = parse_mapping("app.toml", document).map_err(|e| anyhow!("{e}"))?;
    ensure!(
        Value::Object(tree.clone())
            == json!({
                "released": "1979-05-27",
                "deploy": {"at": "1979-05-27T07:32:00Z", "windows": ["07:30:00"]},
            }),
        "unexpected TOML contents: {tree:?}"
    );
    let release: Release = crate::from_tree(tree).map_err(|e| anyhow!("{e}"))?;
    ensure!(release.released == "1979-05-27", "datetime not extracted as text");
    Ok(())
}

#[cfg(feature = "yaml")]
#[rstest]
#[case("app.yaml")]
#[case("app.yml")]
fn parses_yaml_documents(#[case] name: &str) -> Result<()> {
    let tree = parse_mapping(name, b"db:\n  port: 5432\n").map_err(|e| anyhow!("{e}"))?;
    ensure!(
        Value::Object(tree) == json!({"db": {"port": 5432}}),
        "unexpected YAML contents"
    );
    Ok(())
}

#[cfg(feature = "json5")]
#[test]
fn parses_json5_documents() -> Result<()> {
    let document = b"// database settings\n{db: {port: 5432,},}\n";
    let tree = parse_mapping("app.json5", document).map_err(|e| anyhow!("{e}"))?;
    ensure!(
        Value::Object(tree) == json!({"db": {"port": 5432}}),
        "unexpected JSON5 contents"
    );
    Ok(())
}

#[rstest]
#[case("app.ini")]
#[case("app")]
fn rejects_unknown_formats(#[case] name: &str) {
    let err = parse_mapping(name, b"key=value").expect_err("format is unsupported");
    assert!(matches!(err.as_ref(), TreeError::UnsupportedFormat { .. }));
}

#[test]
fn reports_malformed_json() {
    let err = parse_mapping("app.json", b"{not json").expect_err("malformed JSON");
    assert!(matches!(err.as_ref(), TreeError::Parse { name, .. } if name == "app.json"));
}
