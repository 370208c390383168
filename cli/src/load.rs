use anyhow::{Context, Result};
use recipe_core::Record;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Load recipes from a `.json`/`.jsonl` file, or from every such file under a directory.
///
/// Directory entries are read in path order so record positions are stable.
pub fn load_records(input: &Path) -> Result<Vec<Record>> {
    let mut files: Vec<PathBuf> = Vec::new();
    if input.is_dir() {
        for entry in WalkDir::new(input).sort_by_file_name().into_iter().filter_map(|e| e.ok()) {
            let p = entry.path();
            if p.is_file() {
                if let Some(ext) = p.extension().and_then(|s| s.to_str()) {
                    if matches!(ext, "json" | "jsonl") {
                        files.push(p.to_path_buf());
                    }
                }
            }
        }
    } else if input.is_file() {
        files.push(input.to_path_buf());
    } else {
        anyhow::bail!("input path {} does not exist", input.display());
    }

    let mut records = Vec::new();
    for file in files {
        if file.extension().and_then(|s| s.to_str()) == Some("jsonl") {
            load_jsonl(&file, &mut records)?;
        } else {
            load_json(&file, &mut records)?;
        }
    }
    tracing::info!(num_records = records.len(), input = %input.display(), "loaded recipes");
    Ok(records)
}

fn load_jsonl(file: &Path, records: &mut Vec<Record>) -> Result<()> {
    let f = File::open(file).with_context(|| format!("opening {}", file.display()))?;
    let reader = BufReader::new(f);
    for (lineno, line) in reader.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() { continue; }
        let record: Record = serde_json::from_str(&line)
            .with_context(|| format!("{}:{}: invalid recipe", file.display(), lineno + 1))?;
        records.push(record);
    }
    Ok(())
}

fn load_json(file: &Path, records: &mut Vec<Record>) -> Result<()> {
    let f = File::open(file).with_context(|| format!("opening {}", file.display()))?;
    let reader = BufReader::new(f);
    let json: serde_json::Value = serde_json::from_reader(reader)
        .with_context(|| format!("{}: invalid JSON", file.display()))?;
    match json {
        serde_json::Value::Array(arr) => {
            for v in arr {
                let record: Record = serde_json::from_value(v)
                    .with_context(|| format!("{}: invalid recipe", file.display()))?;
                records.push(record);
            }
        }
        serde_json::Value::Object(_) => {
            let record: Record = serde_json::from_value(json)
                .with_context(|| format!("{}: invalid recipe", file.display()))?;
            records.push(record);
        }
        _ => tracing::warn!(file = %file.display(), "skipping JSON that is neither an object nor an array"),
    }
    Ok(())
}
