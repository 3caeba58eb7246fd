//! Host configuration for the native preview.
//!
//! Lookup order: an explicit `--config` path, then
//! `<config_dir>/claimsite/config.json`, then built-in defaults.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::content::PaperContent;
use crate::error::SiteError;
use crate::toggle_set::NodeId;

const APP_DIR: &str = "claimsite";
const CONFIG_FILE: &str = "config.json";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Default tracing filter; `RUST_LOG` and `--log` take precedence.
    pub log_filter: String,
    pub preview: PreviewConfig,
    pub content: PaperContent,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            log_filter: "info".to_string(),
            preview: PreviewConfig::default(),
            content: PaperContent::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PreviewConfig {
    pub duration_ms: u64,
    pub run_training: bool,
    pub toggle_nodes: Vec<NodeId>,
    pub dataset: usize,
}

impl Default for PreviewConfig {
    fn default() -> Self {
        Self {
            duration_ms: 10_000,
            run_training: true,
            toggle_nodes: vec![0, 1],
            dataset: 1,
        }
    }
}

impl SiteConfig {
    pub fn default_path() -> Result<PathBuf, SiteError> {
        let base = dirs::config_dir().ok_or(SiteError::NoConfigDir)?;
        Ok(base.join(APP_DIR).join(CONFIG_FILE))
    }

    pub fn from_json(text: &str, path: &Path) -> Result<Self, SiteError> {
        serde_json::from_str(text).map_err(|source| SiteError::ConfigParse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn load(path: &Path) -> Result<Self, SiteError> {
        let text = fs::read_to_string(path).map_err(|source| SiteError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        let cfg = Self::from_json(&text, path)?;
        info!("Loaded config from {:?}", path);
        Ok(cfg)
    }

    /// An explicit path must exist; the default location is optional.
    pub fn discover(explicit: Option<&Path>) -> Result<Self, SiteError> {
        if let Some(path) = explicit {
            return Self::load(path);
        }
        match Self::default_path() {
            Ok(path) if path.is_file() => Self::load(&path),
            Ok(path) => {
                debug!("No config at {:?}; using defaults", path);
                Ok(Self::default())
            }
            Err(_) => Ok(Self::default()),
        }
    }

    /// Like [`SiteConfig::save`], but refuses to replace an existing file unless
    /// `force` is set.
    pub fn write_new(&self, path: &Path, force: bool) -> Result<(), SiteError> {
        if path.exists() && !force {
            return Err(SiteError::ConfigExists {
                path: path.to_path_buf(),
            });
        }
        self.save(path)
    }

    /// Write this config as pretty JSON, creating parent directories.
    pub fn save(&self, path: &Path) -> Result<(), SiteError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|source| SiteError::ConfigWrite {
                path: parent.to_path_buf(),
                source,
            })?;
        }
        let text = serde_json::to_string_pretty(self)?;
        fs::write(path, text).map_err(|source| SiteError::ConfigWrite {
            path: path.to_path_buf(),
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_object_yields_defaults() {
        let cfg = SiteConfig::from_json("{}", Path::new("mem")).expect("parses");
        assert_eq!(cfg, SiteConfig::default());
        assert_eq!(cfg.preview.duration_ms, 10_000);
        assert_eq!(cfg.preview.dataset, 1);
    }

    #[test]
    fn partial_preview_section_is_merged() {
        let cfg = SiteConfig::from_json(
            r#"{ "log_filter": "debug", "preview": { "run_training": false } }"#,
            Path::new("mem"),
        )
        .expect("parses");
        assert_eq!(cfg.log_filter, "debug");
        assert!(!cfg.preview.run_training);
        assert_eq!(cfg.preview.toggle_nodes, vec![0, 1]);
    }

    #[test]
    fn content_override_merges_with_published_copy() {
        let cfg = SiteConfig::from_json(
            r#"{ "content": { "hero": { "title": "X" } } }"#,
            Path::new("mem"),
        )
        .expect("parses");
        let published = PaperContent::default();
        assert_eq!(cfg.content.hero.title, "X");
        assert_eq!(cfg.content.hero.subtitle, published.hero.subtitle);
        assert_eq!(cfg.content.hero.description, published.hero.description);
        assert_eq!(cfg.content.authors, published.authors);
    }

    #[test]
    fn malformed_json_reports_the_path() {
        let err = SiteConfig::from_json("{ nope", Path::new("/tmp/x.json")).unwrap_err();
        assert!(matches!(err, SiteError::ConfigParse { .. }));
        assert!(err.to_string().contains("/tmp/x.json"));
    }

    #[test]
    fn explicit_missing_file_is_an_error() {
        let dir = tempfile::tempdir().expect("tempdir");
        let missing = dir.path().join("absent.json");
        let err = SiteConfig::discover(Some(&missing)).unwrap_err();
        assert!(matches!(err, SiteError::ConfigRead { .. }));
    }

    #[test]
    fn write_new_keeps_an_existing_file_without_force() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join(CONFIG_FILE);
        fs::write(&path, "{}").expect("seed");

        let err = SiteConfig::default().write_new(&path, false).unwrap_err();
        assert!(matches!(err, SiteError::ConfigExists { .. }));
        assert_eq!(fs::read_to_string(&path).expect("read"), "{}");

        SiteConfig::default().write_new(&path, true).expect("forced");
        assert_eq!(SiteConfig::load(&path).expect("loads"), SiteConfig::default());
    }

    #[test]
    fn save_then_load_preserves_config() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("nested").join(CONFIG_FILE);

        let mut cfg = SiteConfig::default();
        cfg.preview.duration_ms = 2_500;
        cfg.content.hero.title = "Claims, extracted".to_string();
        cfg.save(&path).expect("saves");

        let loaded = SiteConfig::discover(Some(&path)).expect("loads");
        assert_eq!(loaded, cfg);
    }
}
