use std::{
    fs::{self, File},
    io::{BufWriter, Write},
    path::Path,
};

use anyhow::{Context, Result};

/// Render the template text: one `NAME=` line per entry, in order.
pub fn render_template(variables: &[String]) -> String {
    let mut out = String::with_capacity(variables.iter().map(|v| v.len() + 2).sum());
    for name in variables {
        out.push_str(name);
        out.push_str("=\n");
    }
    out
}

/// Create or truncate `path` and write the template to it, synced to disk.
///
/// On failure any partially written file is removed so no incomplete
/// template is left behind.
pub fn write_template(path: &Path, variables: &[String]) -> Result<()> {
    let result = write_synced(path, variables);
    if result.is_err() && path.is_file() {
        let _ = fs::remove_file(path);
    }
    result.with_context(|| format!("Failed to write {}", path.display()))
}

fn write_synced(path: &Path, variables: &[String]) -> Result<()> {
    let file = File::create(path).context("Failed to create file")?;
    let mut writer = BufWriter::new(file);
    writer.write_all(render_template(variables).as_bytes())?;
    let file = writer.into_inner().map_err(|e| e.into_error())?;
    file.sync_all().context("Failed to sync file to disk")?;
    Ok(())
}
