use anyhow::{bail, Result};
use compute::validate_dataset;
use model::Dataset;
use tracing::{error, info, trace};

pub fn check() -> Result<()> {
    trace!("Entering check function");
    let data = Dataset::superapp();
    info!(
        products = data.products.len(),
        cohorts = data.cohorts.len(),
        "Validating dataset"
    );

    // Each violation is already logged by the validator.
    if let Err(report) = validate_dataset(&data) {
        error!("{}", report);
        bail!(report);
    }

    info!("Dataset is consistent");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_dataset_passes() {
        check().unwrap();
    }
}
