use crate::error::ConfigError;
use crate::lawyer::{AssignedMatter, Lawyer};
use serde::Deserialize;
use std::{fs, path::Path};
use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;

pub const DEFAULT_CONFIG_PATH: &str = ".config/wclist.toml";

#[derive(Deserialize)]
pub struct Config {
    #[serde(rename = "cause_list", default)]
    pub header: CauseListHeader,
    #[serde(default)]
    pub lawyers: Vec<Lawyer>,
}

/// Metadata printed on the cover page, which the parser never reads.
#[derive(Deserialize)]
pub struct CauseListHeader {
    #[serde(default = "default_jurisdiction")]
    pub jurisdiction: String,
    #[serde(default)]
    pub warden: String,
    /// RFC 3339; the current time when omitted.
    pub release_date: Option<String>,
}

fn default_jurisdiction() -> String {
    "Kalgoorlie".to_string()
}

impl Default for CauseListHeader {
    fn default() -> Self {
        Self {
            jurisdiction: default_jurisdiction(),
            warden: String::new(),
            release_date: None,
        }
    }
}

impl CauseListHeader {
    pub fn release_date(&self) -> Result<OffsetDateTime, ConfigError> {
        match &self.release_date {
            Some(value) => {
                OffsetDateTime::parse(value, &Rfc3339).map_err(|source| ConfigError::ReleaseDate {
                    value: value.clone(),
                    source,
                })
            }
            None => Ok(OffsetDateTime::now_utc()),
        }
    }
}

impl Config {
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_toml(&content)
    }

    /// Like `load`, but a missing file yields the defaults.
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        if path.exists() {
            Self::load(path)
        } else {
            Self::from_toml("")
        }
    }

    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Assigned matters of every lawyer, or of the named one only.
    pub fn assigned_matters(&self, lawyer: Option<&str>) -> Vec<AssignedMatter> {
        self.lawyers
            .iter()
            .filter(|l| lawyer.is_none_or(|name| l.name.eq_ignore_ascii_case(name)))
            .flat_map(|l| l.assigned.iter().cloned())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"
[cause_list]
jurisdiction = "Kalgoorlie"
warden = "John Doe"
release_date = "2025-03-14T09:30:00+08:00"

[[lawyers]]
name = "A. Counsel"
email = "counsel@example.com"

[[lawyers.assigned]]
client_name = "Karorra (Higginsville) Pty Ltd"
tenement_number = "E 15/2082"
other_party_names = ["XYZ Corp", "DEF Industries"]

[[lawyers]]
name = "B. Solicitor"

[[lawyers.assigned]]
client_name = "FOCUS MINERALS LTD"
"#;

    #[test]
    fn test_parse_sample() {
        let cfg = Config::from_toml(SAMPLE).unwrap();
        assert_eq!(cfg.header.warden, "John Doe");
        assert_eq!(cfg.lawyers.len(), 2);
        assert_eq!(cfg.lawyers[0].assigned[0].other_party_names.len(), 2);
        assert_eq!(cfg.lawyers[1].assigned[0].tenement_number, "");

        let date = cfg.header.release_date().unwrap();
        assert_eq!(date.year(), 2025);
        assert_eq!(date.offset().whole_hours(), 8);
    }

    #[test]
    fn test_assigned_matters_filter() {
        let cfg = Config::from_toml(SAMPLE).unwrap();
        assert_eq!(cfg.assigned_matters(None).len(), 2);

        let only = cfg.assigned_matters(Some("b. solicitor"));
        assert_eq!(only.len(), 1);
        assert_eq!(only[0].client_name, "FOCUS MINERALS LTD");

        assert!(cfg.assigned_matters(Some("nobody")).is_empty());
    }

    #[test]
    fn test_empty_config_uses_defaults() {
        let cfg = Config::from_toml("").unwrap();
        assert_eq!(cfg.header.jurisdiction, "Kalgoorlie");
        assert!(cfg.lawyers.is_empty());
        assert!(cfg.header.release_date().is_ok());
    }

    #[test]
    fn test_bad_release_date() {
        let cfg = Config::from_toml("[cause_list]\nrelease_date = \"next tuesday\"\n").unwrap();
        assert!(matches!(
            cfg.header.release_date(),
            Err(ConfigError::ReleaseDate { .. })
        ));
    }

    #[test]
    fn test_missing_file_with_defaults() {
        let cfg = Config::load_or_default("/nonexistent/wclist.toml").unwrap();
        assert!(cfg.lawyers.is_empty());
    }

    #[test]
    fn test_missing_file() {
        assert!(matches!(
            Config::load("/nonexistent/wclist.toml"),
            Err(ConfigError::Read { .. })
        ));
    }
}
