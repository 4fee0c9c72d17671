use crate::domain::profile::Profile;
use crate::utils::error::{AppError, Result};
use std::path::Path;
use std::sync::Arc;

const BUNDLED_PROFILE: &str = include_str!("../../data/profile.toml");

/// Loads the profile record once; the result is shared read-only.
pub struct ProfileStore;

impl ProfileStore {
    pub fn bundled() -> Result<Arc<Profile>> {
        Self::from_toml_str(BUNDLED_PROFILE)
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Arc<Profile>> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Arc<Profile>> {
        let profile: Profile = toml::from_str(content)?;

        if profile.personal.name.trim().is_empty() {
            return Err(AppError::ConfigValidationError {
                field: "personal.name".to_string(),
                message: "Profile must have a name".to_string(),
            });
        }

        tracing::debug!(
            "Loaded profile '{}' ({} education, {} skill groups, {} jobs, {} projects)",
            profile.personal.name,
            profile.education.len(),
            profile.skills.len(),
            profile.work_experience.len(),
            profile.projects.len()
        );

        Ok(Arc::new(profile))
    }

    /// 依設定載入，沒有指定路徑就使用內建資料
    pub fn load(path: Option<&str>) -> Result<Arc<Profile>> {
        match path {
            Some(path) => {
                tracing::info!("📁 Loading profile from: {}", path);
                Self::from_file(path)
            }
            None => {
                tracing::info!("📁 Using bundled profile");
                Self::bundled()
            }
        }
    }
}
