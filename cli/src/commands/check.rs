use anyhow::Result;

use crate::manifest;

/// Load the description and run a full generation pass, discarding the
/// output.
pub fn check_command(path: &str) -> Result<()> {
    let module = manifest::load(path)?;
    let artifacts = emit::generate(&module)
        .map_err(|e| anyhow::anyhow!("generation failed: {e}"))?;

    println!(
        "OK: {} classes, {} native entries.",
        module.classes.len(),
        artifacts.table.len()
    );
    Ok(())
}
