use crate::consts::DEFAULT_CACHE_EXTENSION;
use crate::errors::Result;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CacheConfig {
    #[serde(default = "default_enabled")]
    pub enabled: bool,
    #[serde(default = "default_extension")]
    pub extension: String,
}

fn default_enabled() -> bool { true }
fn default_extension() -> String { DEFAULT_CACHE_EXTENSION.to_string() }

impl Default for CacheConfig {
    fn default() -> Self {
        Self { enabled: default_enabled(), extension: default_extension() }
    }
}

/// Everything a [`Translator`](crate::Translator) needs; fixed for its lifetime.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranslatorConfig {
    pub base_dir: PathBuf,
    pub domain: String,
    pub locale: String,
    #[serde(default)]
    pub cache: CacheConfig,
}

impl Default for TranslatorConfig {
    fn default() -> Self {
        Self {
            base_dir: PathBuf::from("locale"),
            domain: "messages".to_string(),
            locale: "C".to_string(),
            cache: CacheConfig::default(),
        }
    }
}

impl TranslatorConfig {
    pub fn new(base_dir: impl Into<PathBuf>, domain: impl Into<String>, locale: impl Into<String>) -> Self {
        Self {
            base_dir: base_dir.into(),
            domain: domain.into(),
            locale: locale.into(),
            cache: CacheConfig::default(),
        }
    }

    /// Read a JSON config file. Omitted cache settings take their defaults.
    pub fn load(path: &Path) -> Result<Self> {
        let f = File::open(path)?;
        Ok(serde_json::from_reader(BufReader::new(f))?)
    }
}
