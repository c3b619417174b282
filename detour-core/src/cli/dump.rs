use crate::cli::SourceArgs;
use crate::conf::load_redirects;
use serde::Serialize;

/// Print the merged redirects. JSON unless `yaml` is set.
pub fn dump(sources: &SourceArgs, json: bool, yaml: bool) -> anyhow::Result<()> {
    let options = sources.load_options()?;
    let loaded = load_redirects(&options)?;

    if loaded.report.has_errors() {
        tracing::warn!(
            errors = loaded.report.errors.len(),
            "some redirects were invalid and are not included"
        );
    }

    match (json, yaml) {
        (false, true) => dump_yaml(&loaded.redirects)?,
        _ => dump_json(&loaded.redirects)?,
    }

    Ok(())
}

fn dump_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    let s = serde_json::to_string_pretty(value)?;
    println!("{s}");
    Ok(())
}

fn dump_yaml<T: Serialize>(value: &T) -> anyhow::Result<()> {
    let s = serde_yaml::to_string(value)?;
    println!("{s}");
    Ok(())
}
