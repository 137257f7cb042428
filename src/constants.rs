/// Application-wide constants
/// All magic numbers and constant values should be defined here

/// Maximum request body size in bytes (32 MB)
pub const MAX_CONTENT_LENGTH: usize = 32 * 1024 * 1024;

/// Photo file extensions accepted for upload (lowercase, no leading dot)
pub const ALLOWED_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "heic", "heif", "gif"];

/// Session secret fallback for development. Must be overridden with
/// SECRET_KEY in any real deployment.
pub const DEV_SECRET_KEY: &str = "journitag-secret-key-2024";

/// Frontend dev server origin, always present in the CORS allow-list
pub const DEV_FRONTEND_ORIGIN: &str = "http://localhost:5173";

/// Cookie name for the login session token
pub const SESSION_COOKIE_NAME: &str = "journitag_session";

/// Default database file, relative to the application root
pub const DEFAULT_DATABASE_FILE: &str = "sql/greetings.db";

/// URL prefix under which uploaded files are served
pub const UPLOADS_URL_PREFIX: &str = "/uploads";

/// Default listen port
pub const DEFAULT_PORT: u16 = 8000;

/// Check whether a file extension is accepted for photo uploads.
/// Comparison is case-insensitive; a leading dot is tolerated.
pub fn is_allowed_extension(ext: &str) -> bool {
    let ext = ext.trim_start_matches('.').to_ascii_lowercase();
    ALLOWED_EXTENSIONS.contains(&ext.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_known_extensions() {
        for ext in ALLOWED_EXTENSIONS {
            assert!(is_allowed_extension(ext), "{} should be allowed", ext);
        }
    }

    #[test]
    fn is_case_insensitive_and_tolerates_dot() {
        assert!(is_allowed_extension("JPG"));
        assert!(is_allowed_extension(".jpeg"));
        assert!(is_allowed_extension(".HEIC"));
    }

    #[test]
    fn rejects_unknown_extensions() {
        assert!(!is_allowed_extension("exe"));
        assert!(!is_allowed_extension("svg"));
        assert!(!is_allowed_extension(""));
    }

    #[test]
    fn extension_list_is_lowercase_without_dots() {
        for ext in ALLOWED_EXTENSIONS {
            assert_eq!(*ext, ext.to_ascii_lowercase());
            assert!(!ext.starts_with('.'));
        }
    }
}
