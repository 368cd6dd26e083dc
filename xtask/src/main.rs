//! Developer tasks (schema generation, fixture checks).
//!
//! Keeping this separate avoids bloating the end-user CLI.

use anyhow::{Context, bail};
use camino::Utf8PathBuf;
use schemars::schema_for;
use std::fs;
use std::path::PathBuf;

/// Get the project root (parent of xtask directory).
fn project_root() -> PathBuf {
    let manifest_dir = std::env::var("CARGO_MANIFEST_DIR")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("."));

    if manifest_dir.ends_with("xtask") {
        manifest_dir
            .parent()
            .map(PathBuf::from)
            .unwrap_or(manifest_dir)
    } else {
        manifest_dir
    }
}

fn schemas_dir() -> PathBuf {
    project_root().join("schemas")
}

fn fixtures_dir() -> PathBuf {
    project_root().join("tests").join("fixtures")
}

/// Schema definition with its target filename.
struct SchemaEntry {
    filename: &'static str,
    generate: fn() -> schemars::Schema,
}

fn generate_policy_schema() -> schemars::Schema {
    schema_for!(clew_settings::AgentPolicyV1)
}

fn generate_check_schema() -> schemars::Schema {
    schema_for!(clew_types::CheckResult)
}

fn schema_entries() -> Vec<SchemaEntry> {
    vec![
        SchemaEntry {
            filename: "clew.policy.v1.json",
            generate: generate_policy_schema,
        },
        SchemaEntry {
            filename: "clew.check.v1.json",
            generate: generate_check_schema,
        },
    ]
}

/// Serialize a schema to pretty-printed JSON with trailing newline.
fn serialize_schema(schema: &schemars::Schema) -> anyhow::Result<String> {
    let mut json = serde_json::to_string_pretty(schema).context("Failed to serialize schema")?;
    json.push('\n');
    Ok(json)
}

fn emit_schemas() -> anyhow::Result<()> {
    let dir = schemas_dir();
    fs::create_dir_all(&dir).context("Failed to create schemas directory")?;

    for entry in schema_entries() {
        let json = serialize_schema(&(entry.generate)())?;
        let path = dir.join(entry.filename);
        fs::write(&path, &json)
            .with_context(|| format!("Failed to write schema to {}", path.display()))?;
        println!("Wrote {}", path.display());
    }

    println!("\nSchemas emitted successfully.");
    Ok(())
}

/// Validate that schemas in the repo match what would be generated.
fn validate_schemas() -> anyhow::Result<()> {
    let dir = schemas_dir();
    let mut missing = Vec::new();
    let mut mismatched = Vec::new();

    for entry in schema_entries() {
        let path = dir.join(entry.filename);
        if !path.exists() {
            missing.push(entry.filename);
            continue;
        }

        // Compared as JSON values so key order does not depend on serde_json features.
        let expected =
            serde_json::to_value((entry.generate)()).context("Failed to serialize schema")?;
        let text = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        let actual: serde_json::Value = serde_json::from_str(&text)
            .with_context(|| format!("Failed to parse {}", path.display()))?;
        if expected != actual {
            mismatched.push(entry.filename);
        }
    }

    if missing.is_empty() && mismatched.is_empty() {
        println!("All schemas are up to date.");
        return Ok(());
    }

    for name in &missing {
        eprintln!("Missing schema: {name}");
    }
    for name in &mismatched {
        eprintln!("Schema out of date: {name}");
    }
    eprintln!("\nRun `cargo xtask emit-schemas` to regenerate.");
    bail!("Schema validation failed")
}

/// Load every fixture policy; `invalid_*` fixtures must fail, the rest must load.
fn check_fixtures() -> anyhow::Result<()> {
    let mut failures = Vec::new();

    let mut entries: Vec<PathBuf> = fs::read_dir(fixtures_dir())
        .context("Failed to read fixtures directory")?
        .filter_map(|e| e.ok().map(|e| e.path()))
        .filter(|p| p.is_dir())
        .collect();
    entries.sort();

    for dir in entries {
        let Ok(root) = Utf8PathBuf::from_path_buf(dir.clone()) else {
            failures.push(format!("{}: non-UTF-8 path", dir.display()));
            continue;
        };
        let name = root.file_name().unwrap_or_default().to_string();
        if !clew_settings::policy_path(&root).exists() {
            println!("skip  {name} (no policy file)");
            continue;
        }

        let expect_valid = !name.starts_with("invalid_");
        match (clew_settings::load_policy(&root), expect_valid) {
            (Ok(_), true) | (Err(_), false) => println!("ok    {name}"),
            (Ok(_), false) => failures.push(format!("{name}: expected an error, policy loaded")),
            (Err(err), true) => failures.push(format!("{name}: {err}")),
        }
    }

    if failures.is_empty() {
        println!("\nAll fixtures behave as expected.");
        return Ok(());
    }
    for f in &failures {
        eprintln!("FAIL  {f}");
    }
    bail!("{} fixture(s) misbehaved", failures.len())
}

fn print_help() {
    eprintln!("xtask commands:");
    eprintln!("  help              Show this message");
    eprintln!("  emit-schemas      Generate JSON schemas from Rust types to schemas/");
    eprintln!("  validate-schemas  Check if schemas/ matches generated output (for CI)");
    eprintln!("  print-schema-ids  Print known schema IDs");
    eprintln!("  check-fixtures    Load every policy under tests/fixtures/");
}

fn main() -> anyhow::Result<()> {
    let args: Vec<String> = std::env::args().collect();
    let cmd = args.get(1).map(|s| s.as_str()).unwrap_or("help");

    match cmd {
        "help" | "--help" | "-h" => {
            print_help();
            Ok(())
        }
        "emit-schemas" => emit_schemas(),
        "validate-schemas" => validate_schemas(),
        "check-fixtures" => check_fixtures(),
        "print-schema-ids" => {
            for entry in schema_entries() {
                println!("{}", entry.filename.trim_end_matches(".json"));
            }
            Ok(())
        }
        other => bail!("unknown xtask command: {other}\n\nRun `cargo xtask help` for usage."),
    }
    .context("xtask failed")
}
