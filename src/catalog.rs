//! Conversion from catalog file records to validated `ThrusterSpec`s.

use std::path::Path;

use thiserror::Error;
use thruster_config::{ConfigError, ThrusterConfig, load_thruster_configs};
use thruster_core::units::mn_to_n;
use thruster_propulsion::{TechnologyFamily, ThrusterError, ThrusterSpec};
use tracing::debug;

/// Errors surfaced while loading or converting a catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("invalid thruster record #{index} ('{name}'): {source}")]
    InvalidRecord {
        index: usize,
        name: String,
        #[source]
        source: ThrusterError,
    },
}

/// Convert one catalog record into a runtime thruster, checking its invariants.
pub fn from_config(config: &ThrusterConfig) -> Result<ThrusterSpec, ThrusterError> {
    let family: TechnologyFamily = config.family.parse()?;
    let trl = u8::try_from(config.trl).map_err(|_| ThrusterError::TrlOutOfRange(config.trl))?;
    let id = if config.id.trim().is_empty() {
        slug(&config.name)
    } else {
        config.id.clone()
    };
    let spec = ThrusterSpec {
        id,
        name: config.name.clone(),
        manufacturer: config.manufacturer.clone(),
        family,
        propellant: config.propellant.clone(),
        isp_s: config.isp_s,
        thrust_n: mn_to_n(config.thrust_mn),
        power_w: config.power_w,
        dry_mass_kg: config.mass_kg,
        trl,
        thrust_efficiency: config.thrust_efficiency,
    };
    spec.validate()?;
    Ok(spec)
}

/// Convert every record, failing on the first malformed one.
pub fn from_configs(configs: &[ThrusterConfig]) -> Result<Vec<ThrusterSpec>, CatalogError> {
    configs
        .iter()
        .enumerate()
        .map(|(index, config)| {
            from_config(config).map_err(|source| CatalogError::InvalidRecord {
                index,
                name: config.name.clone(),
                source,
            })
        })
        .collect()
}

/// Load and validate a thruster catalog from disk.
pub fn load_catalog<P: AsRef<Path>>(path: P) -> Result<Vec<ThrusterSpec>, CatalogError> {
    let path = path.as_ref();
    let configs = load_thruster_configs(path)?;
    let catalog = from_configs(&configs)?;
    debug!(path = %path.display(), thrusters = catalog.len(), "loaded thruster catalog");
    Ok(catalog)
}

fn slug(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    for c in name.chars() {
        if c.is_ascii_alphanumeric() {
            out.push(c.to_ascii_lowercase());
        } else if !out.ends_with('-') {
            out.push('-');
        }
    }
    out.trim_matches('-').to_string()
}
