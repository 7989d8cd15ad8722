//! Application configuration
//!
//! Reads server settings from environment variables and loads the zone table
//! from a JSON or YAML file.
//!
//! # Environment Variables
//!
//! - `HOST`: bind address (default: `0.0.0.0`)
//! - `PORT`: bind port (default: `8080`)
//! - `SHIPPING_ZONES_PATH`: zone file; when unset the built-in storefront
//!   table is used
//!
//! # Zone Files
//!
//! `.json`, `.yaml` and `.yml` files are accepted. The document is either a
//! list of zones or an object with a `zones` list
//! ([`ZoneFileDto`](crate::dto::ZoneFileDto)). Every record field except
//! `description`, `states`, `cities`, `postalCodes` and
//! `freeShippingThreshold` is required.

use std::env;
use std::fs;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::dto::{ShippingZoneDto, ZoneFileDto};
use crate::zone::{ConfigurationError, ZoneTable};

const DEFAULT_PORT: u16 = 8080;

// =============================================================================
// AppConfigError
// =============================================================================

/// Errors raised while configuring the application
#[derive(Debug, Error)]
pub enum AppConfigError {
    /// The zone records do not form a valid table
    #[error(transparent)]
    Zones(#[from] ConfigurationError),

    /// The zone file could not be read
    #[error("failed to read zone file {path}: {source}")]
    ReadZoneFile {
        /// File that was read
        path: PathBuf,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// The zone file is not valid JSON or YAML for a zone list
    #[error("failed to parse zone file {path}: {message}")]
    ParseZoneFile {
        /// File that was parsed
        path: PathBuf,
        /// Parser message
        message: String,
    },

    /// The zone file extension is neither JSON nor YAML
    #[error("unsupported zone file format: {0} (expected .json, .yaml or .yml)")]
    UnsupportedZoneFileFormat(PathBuf),

    /// `PORT` is not a valid port number
    #[error("invalid PORT value: {0}")]
    InvalidPort(String),

    /// `HOST` is not a valid IP address
    #[error("invalid HOST value: {0}")]
    InvalidHost(String),
}

// =============================================================================
// AppConfig
// =============================================================================

/// Server configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    host: IpAddr,
    port: u16,
    zones_path: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: DEFAULT_PORT,
            zones_path: None,
        }
    }
}

impl AppConfig {
    /// Reads configuration from the process environment
    ///
    /// # Errors
    ///
    /// Returns [`AppConfigError::InvalidHost`] or [`AppConfigError::InvalidPort`]
    /// when a variable is set to an unparsable value.
    pub fn from_env() -> Result<Self, AppConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Reads configuration through an arbitrary variable lookup
    ///
    /// Blank values count as unset.
    ///
    /// # Errors
    ///
    /// Same as [`AppConfig::from_env`].
    ///
    /// # Examples
    ///
    /// ```
    /// use shipping_zones::config::AppConfig;
    ///
    /// let config = AppConfig::from_lookup(|key| match key {
    ///     "PORT" => Some("3000".to_string()),
    ///     _ => None,
    /// })
    /// .unwrap();
    ///
    /// assert_eq!(config.socket_addr().to_string(), "0.0.0.0:3000");
    /// assert!(config.zones_path().is_none());
    /// ```
    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |key: &str| {
            lookup(key)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };
        let defaults = Self::default();

        let host = match read("HOST") {
            Some(value) => value
                .parse::<IpAddr>()
                .map_err(|_| AppConfigError::InvalidHost(value))?,
            None => defaults.host,
        };
        let port = match read("PORT") {
            Some(value) => value
                .parse::<u16>()
                .map_err(|_| AppConfigError::InvalidPort(value))?,
            None => defaults.port,
        };
        let zones_path = read("SHIPPING_ZONES_PATH").map(PathBuf::from);

        Ok(Self {
            host,
            port,
            zones_path,
        })
    }

    /// Replaces the zone file path
    #[must_use]
    pub fn with_zones_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.zones_path = Some(path.into());
        self
    }

    /// Address to bind the server to
    #[must_use]
    pub const fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }

    /// Configured zone file, if any
    #[must_use]
    pub fn zones_path(&self) -> Option<&Path> {
        self.zones_path.as_deref()
    }

    /// Builds the zone table this configuration points at
    ///
    /// # Errors
    ///
    /// Any [`AppConfigError`] from [`load_zone_table`], or
    /// [`AppConfigError::Zones`] if the built-in table is invalid.
    pub fn zone_table(&self) -> Result<ZoneTable, AppConfigError> {
        match &self.zones_path {
            Some(path) => load_zone_table(path),
            None => {
                tracing::info!("SHIPPING_ZONES_PATH not set, using built-in storefront zones");
                Ok(ZoneTable::storefront_default()?)
            }
        }
    }
}

// =============================================================================
// Zone file loading
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ZoneFileFormat {
    Json,
    Yaml,
}

impl ZoneFileFormat {
    fn detect(path: &Path) -> Option<Self> {
        let extension = path.extension()?.to_str()?.to_ascii_lowercase();
        match extension.as_str() {
            "json" => Some(Self::Json),
            "yaml" | "yml" => Some(Self::Yaml),
            _ => None,
        }
    }
}

/// Top-level layout of a zone file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ZoneFileShape {
    List,
    Document,
}

impl ZoneFileShape {
    const fn from_is_list(is_list: bool) -> Self {
        if is_list { Self::List } else { Self::Document }
    }
}

/// Deserializes the zone records, keeping the path to a failing field
fn read_records<'de, D>(
    deserializer: D,
    shape: ZoneFileShape,
) -> Result<Vec<ShippingZoneDto>, serde_path_to_error::Error<D::Error>>
where
    D: serde::Deserializer<'de>,
{
    match shape {
        ZoneFileShape::List => serde_path_to_error::deserialize(deserializer),
        ZoneFileShape::Document => {
            serde_path_to_error::deserialize(deserializer).map(|file: ZoneFileDto| file.zones)
        }
    }
}

/// Parses zone file contents into a validated table
///
/// The document is parsed once to find its shape, then deserialized directly
/// so errors name the failing record field and its position.
///
/// # Errors
///
/// Returns [`AppConfigError::ParseZoneFile`] for malformed documents and
/// [`AppConfigError::Zones`] when the records fail validation.
fn parse_zone_table(
    path: &Path,
    contents: &str,
    format: ZoneFileFormat,
) -> Result<ZoneTable, AppConfigError> {
    let parse_error = |message: String| AppConfigError::ParseZoneFile {
        path: path.to_path_buf(),
        message,
    };

    let zones = match format {
        ZoneFileFormat::Json => {
            let value: serde_json::Value =
                serde_json::from_str(contents).map_err(|error| parse_error(error.to_string()))?;
            let shape = ZoneFileShape::from_is_list(value.is_array());
            let mut deserializer = serde_json::Deserializer::from_str(contents);
            read_records(&mut deserializer, shape).map_err(|error| parse_error(error.to_string()))?
        }
        ZoneFileFormat::Yaml => {
            let value: serde_yaml::Value =
                serde_yaml::from_str(contents).map_err(|error| parse_error(error.to_string()))?;
            let shape = ZoneFileShape::from_is_list(value.is_sequence());
            read_records(serde_yaml::Deserializer::from_str(contents), shape)
                .map_err(|error| parse_error(error.to_string()))?
        }
    };

    let records = zones.iter().map(ShippingZoneDto::to_unvalidated_zone).collect();
    Ok(ZoneTable::from_unvalidated(records)?)
}

/// Loads and validates a zone table from a JSON or YAML file
///
/// # Errors
///
/// - [`AppConfigError::UnsupportedZoneFileFormat`] for other extensions
/// - [`AppConfigError::ReadZoneFile`] when the file cannot be read
/// - [`AppConfigError::ParseZoneFile`] when the document is malformed
/// - [`AppConfigError::Zones`] when the records fail validation
pub fn load_zone_table(path: &Path) -> Result<ZoneTable, AppConfigError> {
    let format = ZoneFileFormat::detect(path)
        .ok_or_else(|| AppConfigError::UnsupportedZoneFileFormat(path.to_path_buf()))?;

    let contents = fs::read_to_string(path).map_err(|source| AppConfigError::ReadZoneFile {
        path: path.to_path_buf(),
        source,
    })?;

    let table = parse_zone_table(path, &contents, format)?;
    tracing::info!(path = %path.display(), zones = table.len(), "loaded zone table");
    Ok(table)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("zones.json", Some(ZoneFileFormat::Json))]
    #[case("zones.JSON", Some(ZoneFileFormat::Json))]
    #[case("zones.yaml", Some(ZoneFileFormat::Yaml))]
    #[case("conf/zones.yml", Some(ZoneFileFormat::Yaml))]
    #[case("zones.toml", None)]
    #[case("zones", None)]
    fn test_detect_format(#[case] path: &str, #[case] expected: Option<ZoneFileFormat>) {
        assert_eq!(ZoneFileFormat::detect(Path::new(path)), expected);
    }

    #[rstest]
    fn test_from_lookup_defaults() {
        let config = AppConfig::from_lookup(|_| None).unwrap();

        assert_eq!(config, AppConfig::default());
        assert_eq!(config.socket_addr().to_string(), "0.0.0.0:8080");
    }

    #[rstest]
    fn test_from_lookup_blank_values_are_unset() {
        let config = AppConfig::from_lookup(|_| Some("  ".to_string())).unwrap();

        assert_eq!(config, AppConfig::default());
    }

    #[rstest]
    #[case("PORT", "not-a-port")]
    #[case("PORT", "70000")]
    #[case("HOST", "localhost:80")]
    fn test_from_lookup_rejects_invalid_values(#[case] key: &str, #[case] value: &str) {
        let result = AppConfig::from_lookup(|name| (name == key).then(|| value.to_string()));

        assert!(matches!(
            result,
            Err(AppConfigError::InvalidPort(_) | AppConfigError::InvalidHost(_))
        ));
    }

    #[rstest]
    fn test_parse_malformed_json() {
        let result = parse_zone_table(Path::new("zones.json"), "{ not json", ZoneFileFormat::Json);

        assert!(matches!(result, Err(AppConfigError::ParseZoneFile { .. })));
    }

    #[rstest]
    #[case(ZoneFileFormat::Json, r#"[{ "id": "a", "name": "A", "countries": ["MX"] }]"#)]
    #[case(ZoneFileFormat::Yaml, "zones:\n  - id: a\n    name: A\n    countries: [MX]\n")]
    fn test_parse_reports_missing_field_path(
        #[case] format: ZoneFileFormat,
        #[case] contents: &str,
    ) {
        let error = parse_zone_table(Path::new("zones"), contents, format).unwrap_err();

        let message = error.to_string();
        assert!(message.contains("[0]"), "{message}");
        assert!(message.contains("shippingCost"), "{message}");
    }

    #[rstest]
    fn test_parse_empty_list_gives_empty_table() {
        let table = parse_zone_table(Path::new("zones.json"), "[]", ZoneFileFormat::Json).unwrap();

        assert!(table.is_empty());
    }
}
