use std::path::Path;

use anyhow::{Context, Result};
use model::Dataset;
use tracing::{debug, info};

use crate::report::write_report;

pub fn export(output: &Path) -> Result<()> {
    info!("Exporting dashboard report to {}", output.display());
    let data = Dataset::superapp();
    debug!(badges = ?data.market_badges, "Loaded dataset");

    write_report(&data, output)
        .with_context(|| format!("export to {} failed", output.display()))?;

    info!("Open {} in a browser to view the dashboard", output.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_export_writes_every_panel() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("dashboard.html");

        export(&path).unwrap();

        let html = std::fs::read_to_string(&path).unwrap();
        for slug in ["overview", "revenue", "retention", "activation"] {
            assert!(html.contains(&format!("id=\"panel-{slug}\"")));
        }
    }
}
