use crate::errors::AppError;
use crate::models::{AppData, UserProfile};
use std::{env, path::Path, path::PathBuf};
use tokio::fs;
use tracing::error;

pub const USERNAME_MAX: usize = 20;

pub fn resolve_data_path() -> Result<PathBuf, std::io::Error> {
    if let Ok(path) = env::var("APP_DATA_PATH") {
        return Ok(PathBuf::from(path));
    }

    Ok(PathBuf::from("data/state.json"))
}

/// A missing or corrupted store never stops the app; it just starts empty.
pub async fn load_data(path: &Path) -> AppData {
    match fs::read(path).await {
        Ok(bytes) => match serde_json::from_slice(&bytes) {
            Ok(data) => data,
            Err(err) => {
                error!("failed to parse data file, resetting store: {err}");
                AppData::default()
            }
        },
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => AppData::default(),
        Err(err) => {
            error!("failed to read data file: {err}");
            AppData::default()
        }
    }
}

pub async fn persist_data(path: &Path, data: &AppData) -> Result<(), AppError> {
    let payload = serde_json::to_vec_pretty(data).map_err(AppError::internal)?;
    fs::write(path, payload).await.map_err(AppError::internal)?;
    Ok(())
}

/// Returns the profile for `username`, inserting a fresh empty one on first
/// login.
pub fn ensure_profile<'a>(data: &'a mut AppData, username: &str) -> &'a mut UserProfile {
    data.users.entry(username.to_string()).or_default()
}

pub fn validate_username(raw: &str) -> Result<&str, AppError> {
    let username = raw.trim();
    if username.is_empty() {
        return Err(AppError::bad_request("please enter a username"));
    }
    if username.chars().count() > USERNAME_MAX {
        return Err(AppError::bad_request("username must be 20 characters or less"));
    }
    if !username
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
    {
        return Err(AppError::bad_request(
            "username can only contain letters, numbers, underscores, or hyphens",
        ));
    }
    Ok(username)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ensure_profile_starts_empty() {
        let mut data = AppData::default();
        let profile = ensure_profile(&mut data, "alice");
        assert_eq!(profile.streak, 0);
        assert_eq!(profile.last_login, None);
        assert!(profile.moods.is_empty());

        profile.streak = 4;
        assert_eq!(ensure_profile(&mut data, "alice").streak, 4);
        assert_eq!(data.users.len(), 1);
    }

    #[test]
    fn username_rules() {
        assert_eq!(validate_username("  alice_99 ").unwrap(), "alice_99");
        assert_eq!(validate_username("a-b").unwrap(), "a-b");
        assert!(validate_username("").is_err());
        assert!(validate_username("   ").is_err());
        assert!(validate_username("has space").is_err());
        assert!(validate_username("dot.name").is_err());
        assert!(validate_username(&"x".repeat(21)).is_err());
    }
}
