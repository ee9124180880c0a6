//! End-to-end resolution: documents, records, composition and extraction.

use anyhow::{Result, anyhow, ensure};
use config_tree::source::{MemorySource, SourceOptions, load_mapping};
use config_tree::{
    CoercionPolicy, ConfigEntry, DataType, TreeComposer, TreeError, TreeProvider, from_tree,
    resolve_entries,
};
use figment::{Figment, providers::Serialized};
use rstest::{fixture, rstest};
use serde::Deserialize;
use serde_json::json;

#[derive(Debug, Deserialize, PartialEq)]
struct Database {
    host: String,
    port: u16,
    #[serde(default)]
    replicas: Vec<String>,
}

#[derive(Debug, Deserialize, PartialEq)]
struct AppConfig {
    name: String,
    debug: bool,
    database: Database,
}

#[fixture]
fn source() -> MemorySource {
    MemorySource::new(
        SourceOptions::new()
            .with_dir("releases/2024/shop/config")
            .with_project_name("shop"),
    )
    .with_document(
        "app.json",
        r#"{"name": "shop", "debug": false, "database": {"host": "db", "port": 5432}}"#,
    )
}

fn compose(source: &MemorySource, entries: &[ConfigEntry]) -> Result<config_tree::Mapping> {
    let mut composer = TreeComposer::new();
    composer.push_source("app.json", load_mapping(source, "app.json").map_err(|e| anyhow!("{e}"))?);
    composer.push_entries(resolve_entries(entries, ".", CoercionPolicy::Strict).map_err(|e| anyhow!("{e}"))?);
    Ok(composer.compose())
}

#[rstest]
fn records_override_documents(source: MemorySource) -> Result<()> {
    let entries = [
        ConfigEntry::new("database.port", "6543", DataType::Int),
        ConfigEntry::new("debug", "T", DataType::Bool),
    ];
    let config: AppConfig = from_tree(compose(&source, &entries)?).map_err(|e| anyhow!("{e}"))?;
    ensure!(
        config
            == AppConfig {
                name: "shop".into(),
                debug: true,
                database: Database {
                    host: "db".into(),
                    port: 6543,
                    replicas: Vec::new(),
                },
            },
        "unexpected config {config:?}"
    );
    Ok(())
}

#[rstest]
fn strict_records_surface_every_failure(source: MemorySource) -> Result<()> {
    let entries = [
        ConfigEntry::new("database.port", "five", DataType::Int),
        ConfigEntry::new("debug", "perhaps", DataType::Bool),
    ];
    let Err(err) = resolve_entries(&entries, ".", CoercionPolicy::Strict) else {
        return Err(anyhow!("expected strict resolution to fail"));
    };
    let TreeError::Aggregate(aggregate) = err.as_ref() else {
        return Err(anyhow!("expected aggregate error, got {err}"));
    };
    ensure!(aggregate.len() == 2, "expected two failures");
    ensure!(
        aggregate.keys().eq(["database.port", "debug"]),
        "failing keys not reported in record order"
    );
    ensure!(load_mapping(&source, "app.json").is_ok(), "source unaffected");
    Ok(())
}

#[rstest]
fn extraction_reports_type_mismatches(source: MemorySource) -> Result<()> {
    let entries = [ConfigEntry::new("database.port", "70000", DataType::Int)];
    let tree = compose(&source, &entries)?;
    let Err(err) = from_tree::<AppConfig>(tree) else {
        return Err(anyhow!("port outside u16 should not deserialise"));
    };
    ensure!(matches!(err.as_ref(), TreeError::Deserialize(_)), "unexpected error {err}");
    Ok(())
}

#[rstest]
fn tree_provider_joins_a_figment_chain(source: MemorySource) -> Result<()> {
    let tree = compose(&source, &[ConfigEntry::new("database.host", "primary", DataType::String)])?;
    let config: AppConfig = Figment::from(Serialized::defaults(json!({
        "database": {"replicas": ["r1"]},
    })))
    .merge(TreeProvider::new(tree).named("resolved"))
    .extract()
    .map_err(|e| anyhow!("{e}"))?;
    ensure!(config.database.host == "primary", "tree value not applied");
    ensure!(config.database.replicas == vec![String::from("r1")], "defaults lost");
    Ok(())
}

#[rstest]
fn tree_provider_targets_a_named_profile(source: MemorySource) -> Result<()> {
    let tree = compose(&source, &[])?;
    let figment = Figment::from(TreeProvider::new(tree).profile("staging"));
    ensure!(
        figment.extract::<AppConfig>().is_err(),
        "default profile should not see staging values"
    );
    let config: AppConfig = figment
        .select("staging")
        .extract()
        .map_err(|e| anyhow!("{e}"))?;
    ensure!(config.name == "shop", "staging profile not populated");
    ensure!(config.database.port == 5432, "staging profile lost nested values");
    Ok(())
}
