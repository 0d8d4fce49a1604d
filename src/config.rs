//! Configuration for docshelf.
//!
//! Configuration sources (highest priority first):
//! 1. Environment variables (DOCSHELF_SEED, DOCSHELF_TOAST_MS)
//! 2. Config file (.docshelf/config.yaml)
//! 3. Defaults (builtin seed table, 3000 ms toast delay)
//!
//! Config file discovery:
//! - Searches current directory and parents for .docshelf/config.yaml
//! - Paths in config file are relative to the config file's parent directory

use std::path::{Path, PathBuf};
use std::sync::OnceLock;
use std::time::Duration;

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::resolver::{DEFAULT_DOWNLOAD_HOST, DEFAULT_EXPORT_HOST};

/// Global cached configuration (stores Result to handle init errors)
static CONFIG: OnceLock<Result<ResolvedConfig, String>> = OnceLock::new();

/// Default toast auto-dismiss delay in milliseconds
const DEFAULT_TOAST_MS: u64 = 3000;

/// Raw config file schema (matches YAML structure)
#[derive(Debug, Clone, Deserialize)]
pub struct ConfigFile {
    pub version: String,
    #[serde(default)]
    pub paths: PathsConfig,
    #[serde(default)]
    pub notifications: Option<NotificationsConfig>,
    #[serde(default)]
    pub resolver: Option<ResolverConfig>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct PathsConfig {
    /// Seed JSON file (relative to config file parent); builtin table when unset
    pub seed: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NotificationsConfig {
    pub dismiss_ms: Option<u64>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ResolverConfig {
    pub export_host: Option<String>,
    pub download_host: Option<String>,
}

/// Resolved configuration with absolute paths
#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    /// Absolute path to the seed file, if any
    pub seed: Option<PathBuf>,
    /// Toast auto-dismiss delay
    pub toast_dismiss: Duration,
    /// Host for the document-export URL form
    pub export_host: String,
    /// Host for the file-download URL form
    pub download_host: String,
    /// Path to config file (if found)
    pub config_file: Option<PathBuf>,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        Self {
            seed: None,
            toast_dismiss: Duration::from_millis(DEFAULT_TOAST_MS),
            export_host: DEFAULT_EXPORT_HOST.to_string(),
            download_host: DEFAULT_DOWNLOAD_HOST.to_string(),
            config_file: None,
        }
    }
}

/// Find config file by searching current directory and parents
fn find_config_file() -> Option<PathBuf> {
    let mut current = std::env::current_dir().ok()?;

    loop {
        let config_path = current.join(".docshelf").join("config.yaml");
        if config_path.exists() {
            return Some(config_path);
        }

        if !current.pop() {
            break;
        }
    }

    None
}

/// Load and parse config file
fn load_config_file(path: &Path) -> Result<ConfigFile> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;

    serde_yaml::from_str(&content)
        .with_context(|| format!("Failed to parse config file: {}", path.display()))
}

/// Resolve a path that may be relative to the config file's parent
fn resolve_path(base: &Path, path_str: &str) -> PathBuf {
    let path = PathBuf::from(path_str);
    if path.is_absolute() {
        path
    } else {
        base.join(path)
            .canonicalize()
            .unwrap_or_else(|_| base.join(path_str))
    }
}

/// Load configuration from all sources
fn load_config() -> Result<ResolvedConfig> {
    let mut resolved = ResolvedConfig::default();

    if let Some(config_path) = find_config_file() {
        let config = load_config_file(&config_path)?;

        // Base directory is the parent of .docshelf/ (i.e., grandparent of config.yaml)
        let base_dir = config_path
            .parent()
            .and_then(|p| p.parent())
            .unwrap_or(Path::new("."))
            .to_path_buf();

        if let Some(ref seed) = config.paths.seed {
            resolved.seed = Some(resolve_path(&base_dir, seed));
        }
        if let Some(ms) = config.notifications.as_ref().and_then(|n| n.dismiss_ms) {
            resolved.toast_dismiss = Duration::from_millis(ms);
        }
        if let Some(ref r) = config.resolver {
            if let Some(ref host) = r.export_host {
                resolved.export_host = host.clone();
            }
            if let Some(ref host) = r.download_host {
                resolved.download_host = host.clone();
            }
        }

        resolved.config_file = Some(config_path);
    }

    // Env vars override the file
    if let Ok(seed) = std::env::var("DOCSHELF_SEED") {
        resolved.seed = Some(PathBuf::from(seed));
    }
    if let Ok(ms) = std::env::var("DOCSHELF_TOAST_MS") {
        let ms: u64 = ms
            .parse()
            .context("DOCSHELF_TOAST_MS must be an integer number of milliseconds")?;
        resolved.toast_dismiss = Duration::from_millis(ms);
    }

    Ok(resolved)
}

/// Get the global configuration (loads once, then cached)
pub fn config() -> Result<&'static ResolvedConfig> {
    let result = CONFIG.get_or_init(|| load_config().map_err(|e| e.to_string()));

    match result {
        Ok(config) => Ok(config),
        Err(e) => anyhow::bail!("{}", e),
    }
}

/// Force reload configuration (useful for testing)
pub fn reload_config() -> Result<ResolvedConfig> {
    load_config()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::TempDir;

    #[test]
    fn test_defaults_without_file() {
        let config = ResolvedConfig::default();

        assert!(config.seed.is_none());
        assert_eq!(config.toast_dismiss, Duration::from_millis(3000));
        assert_eq!(config.export_host, DEFAULT_EXPORT_HOST);
        assert_eq!(config.download_host, DEFAULT_DOWNLOAD_HOST);
        assert!(config.config_file.is_none());
    }

    #[test]
    fn test_config_file_parsing() {
        let temp = TempDir::new().unwrap();
        let docshelf_dir = temp.path().join(".docshelf");
        std::fs::create_dir_all(&docshelf_dir).unwrap();

        let config_path = docshelf_dir.join("config.yaml");
        let mut file = std::fs::File::create(&config_path).unwrap();
        writeln!(
            file,
            r#"
version: "1.0"
paths:
  seed: ./seed.json
notifications:
  dismiss_ms: 500
resolver:
  download_host: https://dl.example.test
"#
        )
        .unwrap();

        let config = load_config_file(&config_path).unwrap();
        assert_eq!(config.version, "1.0");
        assert_eq!(config.paths.seed, Some("./seed.json".to_string()));
        assert_eq!(config.notifications.unwrap().dismiss_ms, Some(500));

        let resolver = config.resolver.unwrap();
        assert_eq!(
            resolver.download_host,
            Some("https://dl.example.test".to_string())
        );
        assert_eq!(resolver.export_host, None);
    }

    #[test]
    fn test_resolve_relative_path() {
        let base = PathBuf::from("/home/user/project");

        assert_eq!(
            resolve_path(&base, "./seed.json"),
            PathBuf::from("/home/user/project/seed.json")
        );
        assert_eq!(
            resolve_path(&base, "/absolute/seed.json"),
            PathBuf::from("/absolute/seed.json")
        );
    }
}
