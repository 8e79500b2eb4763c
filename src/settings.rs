use std::path::PathBuf;

use anyhow::{Context, Result};
use config::{Config, Environment, File};
use serde::Deserialize;

use crate::sources::{alumni, faculty};

/// Runtime settings: `roster.toml` (optional), then `ROSTER_*` variables.
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,
    #[serde(default = "default_faculty_url")]
    pub faculty_url: String,
    #[serde(default = "default_alumni_url")]
    pub alumni_url: String,
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_output_dir() -> PathBuf {
    PathBuf::from(".")
}

fn default_faculty_url() -> String {
    faculty::URL.to_string()
}

fn default_alumni_url() -> String {
    alumni::URL.to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            output_dir: default_output_dir(),
            faculty_url: default_faculty_url(),
            alumni_url: default_alumni_url(),
            log_level: default_log_level(),
        }
    }
}

impl Settings {
    pub fn load() -> Result<Self> {
        Config::builder()
            .add_source(File::with_name("roster").required(false))
            .add_source(Environment::with_prefix("ROSTER"))
            .build()
            .and_then(|c| c.try_deserialize())
            .context("Failed to load settings")
    }

    /// Listing URL for `entity`, honoring overrides.
    pub fn url_for(&self, entity: &str) -> Option<&str> {
        match entity {
            "faculty" => Some(self.faculty_url.as_str()),
            "alumni" => Some(self.alumni_url.as_str()),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_point_at_department_pages() {
        let s = Settings::default();
        assert_eq!(s.output_dir, PathBuf::from("."));
        assert_eq!(s.url_for("faculty"), Some("https://cse.sds.bracu.ac.bd/faculty_list"));
        assert_eq!(s.url_for("alumni"), Some("https://cse.sds.bracu.ac.bd/alumni_list"));
        assert_eq!(s.url_for("staff"), None);
    }

    #[test]
    fn empty_config_deserializes_to_defaults() {
        let s: Settings = Config::builder().build().unwrap().try_deserialize().unwrap();
        assert_eq!(s.log_level, "info");
        assert_eq!(s.faculty_url, faculty::URL);
    }
}
