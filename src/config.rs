use std::env;
use std::path::{Path, PathBuf};

use crate::constants::{
    DEFAULT_DATABASE_FILE, DEFAULT_PORT, DEV_FRONTEND_ORIGIN, DEV_SECRET_KEY,
};

/// Process-wide settings, resolved once at startup and immutable afterwards.
/// Constructed explicitly and passed by `Arc` into the application factory;
/// there is no global configuration state.
#[derive(Debug, Clone)]
pub struct Config {
    /// Base directory for the database default, the upload folder and
    /// static serving.
    pub app_root: PathBuf,
    pub port: u16,
    /// Session signing secret (SECRET_KEY env or a dev fallback).
    pub secret_key: String,
    /// CORS allow-list. Always contains the frontend dev origin; never a
    /// wildcard, since credentialed requests are enabled.
    pub allowed_origins: Vec<String>,
    /// SQLite database file, absolute.
    pub database_filename: PathBuf,
    /// Where photo uploads are written: `<app_root>/uploads/photos`.
    pub upload_folder: PathBuf,
}

impl Config {
    pub fn from_env() -> Self {
        let app_root = env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
        Self::resolve(|key| env::var(key).ok(), app_root)
    }

    /// Resolve all settings from a lookup function. Every value has a
    /// default, so resolution cannot fail. Tests pass a map-backed lookup
    /// instead of touching the process environment.
    pub fn resolve<F>(lookup: F, app_root: PathBuf) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let port = lookup("PORT")
            .and_then(|p| p.parse().ok())
            .unwrap_or(DEFAULT_PORT);

        let secret_key =
            lookup("SECRET_KEY").unwrap_or_else(|| DEV_SECRET_KEY.to_string());

        // The dev origin stays in the list even when FRONTEND_URL points at a
        // deployed frontend, so local development keeps working.
        let frontend_url =
            lookup("FRONTEND_URL").unwrap_or_else(|| DEV_FRONTEND_ORIGIN.to_string());
        let mut allowed_origins = vec![frontend_url];
        if !allowed_origins.contains(&DEV_FRONTEND_ORIGIN.to_string()) {
            allowed_origins.push(DEV_FRONTEND_ORIGIN.to_string());
        }

        let database_filename = match lookup("DATABASE_FILENAME") {
            Some(path) => absolutize(PathBuf::from(path), &app_root),
            None => app_root.join(DEFAULT_DATABASE_FILE),
        };

        let upload_folder = app_root.join("uploads").join("photos");

        Self {
            app_root,
            port,
            secret_key,
            allowed_origins,
            database_filename,
            upload_folder,
        }
    }

    /// Directory exposed at the `/uploads` URL prefix.
    pub fn uploads_root(&self) -> PathBuf {
        self.app_root.join("uploads")
    }
}

fn absolutize(path: PathBuf, app_root: &Path) -> PathBuf {
    if path.is_absolute() {
        path
    } else {
        app_root.join(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn resolve_with(vars: &[(&str, &str)]) -> Config {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::resolve(|key| map.get(key).cloned(), PathBuf::from("/srv/journitag"))
    }

    #[test]
    fn defaults_when_environment_is_empty() {
        let config = resolve_with(&[]);

        assert_eq!(config.port, DEFAULT_PORT);
        assert_eq!(config.secret_key, DEV_SECRET_KEY);
        assert_eq!(
            config.database_filename,
            PathBuf::from("/srv/journitag/sql/greetings.db")
        );
        assert_eq!(
            config.upload_folder,
            PathBuf::from("/srv/journitag/uploads/photos")
        );
        assert_eq!(config.allowed_origins, vec![DEV_FRONTEND_ORIGIN.to_string()]);
    }

    #[test]
    fn secret_key_prefers_environment() {
        let config = resolve_with(&[("SECRET_KEY", "prod-secret")]);
        assert_eq!(config.secret_key, "prod-secret");
    }

    #[test]
    fn frontend_url_extends_but_never_replaces_dev_origin() {
        let config = resolve_with(&[("FRONTEND_URL", "https://journitag.example")]);
        assert_eq!(
            config.allowed_origins,
            vec![
                "https://journitag.example".to_string(),
                DEV_FRONTEND_ORIGIN.to_string(),
            ]
        );
    }

    #[test]
    fn frontend_url_equal_to_dev_origin_is_not_duplicated() {
        let config = resolve_with(&[("FRONTEND_URL", DEV_FRONTEND_ORIGIN)]);
        assert_eq!(config.allowed_origins.len(), 1);
    }

    #[test]
    fn database_filename_absolute_override_is_kept() {
        let config = resolve_with(&[("DATABASE_FILENAME", "/var/lib/journitag/app.db")]);
        assert_eq!(
            config.database_filename,
            PathBuf::from("/var/lib/journitag/app.db")
        );
    }

    #[test]
    fn database_filename_relative_override_resolves_under_app_root() {
        let config = resolve_with(&[("DATABASE_FILENAME", "data/app.db")]);
        assert_eq!(
            config.database_filename,
            PathBuf::from("/srv/journitag/data/app.db")
        );
    }

    #[test]
    fn invalid_port_falls_back_to_default() {
        let config = resolve_with(&[("PORT", "not-a-port")]);
        assert_eq!(config.port, DEFAULT_PORT);
    }

    #[test]
    fn uploads_root_sits_above_the_photo_folder() {
        let config = resolve_with(&[]);
        assert_eq!(config.uploads_root(), PathBuf::from("/srv/journitag/uploads"));
        assert!(config.upload_folder.starts_with(config.uploads_root()));
    }
}
