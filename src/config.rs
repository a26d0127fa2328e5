//! Configuration management for annotext.
//!
//! Environment-first: defaults, then an optional config file, then
//! environment overrides (DATABASE_URL, CORS_ORIGINS). A `.env` file is
//! loaded by `main` before any of this runs.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::repository::DbContext;

/// Default database filename.
pub const DEFAULT_DATABASE_FILENAME: &str = "annotext.db";

/// Application settings.
#[derive(Debug, Clone)]
pub struct Settings {
    /// Base data directory.
    pub data_dir: PathBuf,
    /// Database filename.
    pub database_filename: String,
    /// Database URL (overrides data_dir/database_filename if set).
    /// Set via DATABASE_URL env var or config.
    pub database_url: Option<String>,
    /// Allowed cross-origin hosts; a `*` entry is fully permissive.
    pub cors_origins: Vec<String>,
}

impl Default for Settings {
    fn default() -> Self {
        // Falls back gracefully: local data dir -> home dir -> current dir
        let data_dir = dirs::data_local_dir()
            .or_else(dirs::home_dir)
            .unwrap_or_else(|| PathBuf::from("."))
            .join("annotext");

        Self {
            data_dir,
            database_filename: DEFAULT_DATABASE_FILENAME.to_string(),
            database_url: None,
            cors_origins: vec!["*".to_string()],
        }
    }
}

impl Settings {
    /// Get the database URL, constructing from path if not explicitly set.
    pub fn database_url(&self) -> String {
        if let Some(ref url) = self.database_url {
            url.clone()
        } else {
            let path = self.data_dir.join(&self.database_filename);
            format!("sqlite:{}", path.display())
        }
    }

    /// Get the full path to the database file.
    pub fn database_path(&self) -> PathBuf {
        self.data_dir.join(&self.database_filename)
    }

    /// Ensure the data directory exists.
    pub fn ensure_directories(&self) -> std::io::Result<()> {
        std::fs::create_dir_all(&self.data_dir)
    }

    /// Create a database context using the configured database URL or path.
    pub fn create_db_context(&self) -> DbContext {
        DbContext::from_url(&self.database_url())
    }
}

/// Configuration file structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Data directory path.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_dir: Option<String>,
    /// Database filename.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub database: Option<String>,
    /// Allowed cross-origin hosts.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cors_origins: Option<Vec<String>>,
}

impl Config {
    /// Load configuration from a specific file path.
    /// Supports JSON, TOML, and YAML formats based on file extension.
    pub async fn load_from_path(path: &Path) -> Result<Self, String> {
        let contents = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| format!("Failed to read config file: {}", e))?;

        let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("json");

        let config: Config = match ext {
            "toml" => toml::from_str(&contents)
                .map_err(|e| format!("Failed to parse TOML config: {}", e))?,
            "yaml" | "yml" => serde_yaml::from_str(&contents)
                .map_err(|e| format!("Failed to parse YAML config: {}", e))?,
            _ => serde_json::from_str(&contents)
                .map_err(|e| format!("Failed to parse JSON config: {}", e))?,
        };

        Ok(config)
    }

    /// Apply configuration to settings.
    /// `base_dir` is used to resolve relative paths (the config file dir).
    pub fn apply_to_settings(&self, settings: &mut Settings, base_dir: &Path) {
        if let Some(ref data_dir) = self.data_dir {
            let path = Path::new(data_dir);
            settings.data_dir = if path.is_absolute() {
                path.to_path_buf()
            } else {
                base_dir.join(path)
            };
        }
        if let Some(ref database) = self.database {
            settings.database_filename = database.clone();
        }
        if let Some(ref origins) = self.cors_origins {
            settings.cors_origins = origins.clone();
        }
    }
}

/// Resolve a `--data` path: a .db file selects its parent as the data dir
/// and itself as the database filename, a directory is used as-is.
fn apply_data_path(settings: &mut Settings, path: &Path) {
    let path = if path.is_absolute() {
        path.to_path_buf()
    } else {
        std::env::current_dir()
            .unwrap_or_else(|_| PathBuf::from("."))
            .join(path)
    };

    let is_db_file = path
        .extension()
        .is_some_and(|ext| ext == "db" || ext == "sqlite" || ext == "sqlite3")
        || (path.exists() && path.is_file());

    if is_db_file {
        if let Some(name) = path.file_name().and_then(|n| n.to_str()) {
            settings.database_filename = name.to_string();
        }
        settings.data_dir = path.parent().unwrap_or(Path::new(".")).to_path_buf();
    } else {
        settings.data_dir = path;
    }
}

/// Load settings from defaults, an optional config file, and env overrides.
pub async fn load_settings(config_path: Option<&Path>, data: Option<&Path>) -> Settings {
    let mut settings = Settings::default();

    if let Some(path) = config_path {
        match Config::load_from_path(path).await {
            Ok(config) => {
                let base_dir = path
                    .parent()
                    .map(Path::to_path_buf)
                    .unwrap_or_else(|| PathBuf::from("."));
                config.apply_to_settings(&mut settings, &base_dir);
            }
            Err(e) => {
                tracing::warn!("Ignoring config file {}: {}", path.display(), e);
            }
        }
    }

    // --data flag takes precedence over the config file
    if let Some(data) = data {
        apply_data_path(&mut settings, data);
    }

    // DATABASE_URL environment variable takes highest precedence
    if let Some(url) = std::env::var("DATABASE_URL").ok().filter(|s| !s.is_empty()) {
        tracing::debug!("Using DATABASE_URL from environment");
        settings.database_url = Some(url);
    }

    // CORS_ORIGINS: comma-separated list of allowed origins
    if let Ok(origins) = std::env::var("CORS_ORIGINS") {
        let parsed: Vec<String> = origins
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();
        if !parsed.is_empty() {
            settings.cors_origins = parsed;
        }
    }

    settings
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_database_url_from_path() {
        let mut settings = Settings::default();
        settings.data_dir = PathBuf::from("/tmp/annotext-test");
        assert_eq!(
            settings.database_url(),
            "sqlite:/tmp/annotext-test/annotext.db"
        );

        settings.database_url = Some("sqlite:/elsewhere/db.sqlite".to_string());
        assert_eq!(settings.database_url(), "sqlite:/elsewhere/db.sqlite");
    }

    #[test]
    fn test_config_applies_relative_data_dir() {
        let config = Config {
            data_dir: Some("data".to_string()),
            database: Some("other.db".to_string()),
            cors_origins: Some(vec!["http://localhost:3000".to_string()]),
        };

        let mut settings = Settings::default();
        config.apply_to_settings(&mut settings, Path::new("/etc/annotext"));

        assert_eq!(settings.data_dir, PathBuf::from("/etc/annotext/data"));
        assert_eq!(settings.database_filename, "other.db");
        assert_eq!(settings.cors_origins, vec!["http://localhost:3000"]);
    }

    #[test]
    fn test_data_path_db_file() {
        let mut settings = Settings::default();
        apply_data_path(&mut settings, Path::new("/srv/annotext/custom.db"));
        assert_eq!(settings.data_dir, PathBuf::from("/srv/annotext"));
        assert_eq!(settings.database_filename, "custom.db");
    }

    #[test]
    fn test_data_path_directory() {
        let mut settings = Settings::default();
        apply_data_path(&mut settings, Path::new("/srv/annotext"));
        assert_eq!(settings.data_dir, PathBuf::from("/srv/annotext"));
        assert_eq!(settings.database_filename, DEFAULT_DATABASE_FILENAME);
    }
}
