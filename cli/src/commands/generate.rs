use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

use crate::manifest;

/// Generate both artifacts and write them under `out_dir`.
///
/// Generation runs to completion before anything touches the filesystem:
/// an aborted session leaves no partial output behind.
pub fn generate_command(path: &str, out_dir: &str) -> Result<()> {
    let module = manifest::load(path)?;
    let artifacts = emit::generate(&module)
        .map_err(|e| anyhow::anyhow!("generation failed: {e}"))?;

    let out_dir = Path::new(out_dir);
    fs::create_dir_all(out_dir)
        .with_context(|| format!("failed to create output directory `{}`", out_dir.display()))?;

    for proxy in &artifacts.proxies {
        let file = out_dir.join(format!("{}.m", proxy.class_name));
        fs::write(&file, &proxy.text)
            .with_context(|| format!("failed to write `{}`", file.display()))?;
        println!("Wrote {}", file.display());
    }

    let wrapper_file = out_dir.join(format!("{}.cpp", module.wrapper_name));
    fs::write(&wrapper_file, &artifacts.wrapper)
        .with_context(|| format!("failed to write `{}`", wrapper_file.display()))?;
    println!("Wrote {}", wrapper_file.display());
    println!("{} native entries.", artifacts.table.len());

    Ok(())
}
