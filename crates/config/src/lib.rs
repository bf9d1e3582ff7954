//! Configuration models and loaders for thruster catalogs and mission files.

use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

/// Thruster record as stored in catalog files.
///
/// Units follow the catalog convention (thrust in millinewtons); conversion into the
/// runtime record happens in the façade crate.
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ThrusterConfig {
    #[serde(default)]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub manufacturer: String,
    #[serde(rename = "type", alias = "family")]
    pub family: String,
    #[serde(rename = "thrust_mN", alias = "thrust_mn")]
    pub thrust_mn: f64,
    pub isp_s: f64,
    #[serde(rename = "power_W", alias = "power_w")]
    pub power_w: f64,
    #[serde(alias = "dry_mass_kg")]
    pub mass_kg: f64,
    /// Kept wide so out-of-range values surface as invalid records, not parse errors.
    pub trl: i64,
    #[serde(default)]
    pub thrust_efficiency: Option<f64>,
    #[serde(default)]
    pub propellant: String,
}

/// Mission file contents. Every field is optional so command-line flags can fill the gaps.
#[derive(Debug, Deserialize, Clone, Default, PartialEq)]
pub struct MissionConfig {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default, alias = "delta_v_ms")]
    pub delta_v_m_s: Option<f64>,
    #[serde(default)]
    pub satellite_dry_mass_kg: Option<f64>,
    #[serde(default, alias = "available_power_W")]
    pub available_power_w: Option<f64>,
    #[serde(default)]
    pub mass_budget_kg: Option<f64>,
    #[serde(default)]
    pub min_trl: Option<u8>,
    #[serde(default)]
    pub duty_cycle: Option<f64>,
    #[serde(default)]
    pub weights: Option<WeightsConfig>,
}

/// Ranking weights block of a mission file.
#[derive(Debug, Deserialize, Clone, Copy, PartialEq)]
pub struct WeightsConfig {
    pub mass: f64,
    pub time: f64,
}

#[derive(Debug, Deserialize)]
struct CatalogFile {
    thrusters: Vec<ThrusterConfig>,
}

/// Errors that can occur while loading configuration files.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("failed to parse JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("failed to parse TOML: {0}")]
    Toml(#[from] toml::de::Error),
}

/// Load thruster records from a catalog file or a directory of TOML records.
///
/// * directory: every `*.toml` file holds one record, read in file-name order
/// * `.toml`: a `[[thrusters]]` array
/// * `.json`: an object with a `thrusters` list
/// * anything else: a YAML list of records
pub fn load_thruster_configs<P: AsRef<Path>>(path: P) -> Result<Vec<ThrusterConfig>, ConfigError> {
    let path = path.as_ref();
    if path.is_dir() {
        return read_dir_records(path);
    }
    match extension(path).as_deref() {
        Some("toml") => {
            let catalog: CatalogFile = toml::from_str(&read_string(path)?)?;
            Ok(catalog.thrusters)
        }
        Some("json") => {
            let catalog: CatalogFile = serde_json::from_reader(open(path)?)?;
            Ok(catalog.thrusters)
        }
        _ => Ok(serde_yaml::from_reader(open(path)?)?),
    }
}

/// Load a single mission description (TOML, JSON, or YAML by extension).
pub fn load_mission_config<P: AsRef<Path>>(path: P) -> Result<MissionConfig, ConfigError> {
    let path = path.as_ref();
    match extension(path).as_deref() {
        Some("toml") => Ok(toml::from_str(&read_string(path)?)?),
        Some("json") => Ok(serde_json::from_reader(open(path)?)?),
        _ => Ok(serde_yaml::from_reader(open(path)?)?),
    }
}

fn read_dir_records<T>(dir: &Path) -> Result<Vec<T>, ConfigError>
where
    T: for<'de> Deserialize<'de>,
{
    let mut records = Vec::new();
    let mut entries: Vec<PathBuf> = std::fs::read_dir(dir)
        .map_err(|source| io_error(dir, source))?
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|path| path.extension().map(|ext| ext == "toml").unwrap_or(false))
        .collect();
    entries.sort();
    for path in entries {
        let record: T = toml::from_str(&read_string(&path)?)?;
        records.push(record);
    }
    Ok(records)
}

fn extension(path: &Path) -> Option<String> {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_ascii_lowercase())
}

fn read_string(path: &Path) -> Result<String, ConfigError> {
    std::fs::read_to_string(path).map_err(|source| io_error(path, source))
}

fn open(path: &Path) -> Result<BufReader<File>, ConfigError> {
    File::open(path)
        .map(BufReader::new)
        .map_err(|source| io_error(path, source))
}

fn io_error(path: &Path, source: std::io::Error) -> ConfigError {
    ConfigError::Io {
        path: path.to_path_buf(),
        source,
    }
}
