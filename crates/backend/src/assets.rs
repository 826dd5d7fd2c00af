use poshujan_shared::models::{self, AdministrativeIndex, ObservationPost};
use std::path::Path;

pub struct Assets {
    pub index: AdministrativeIndex,
    pub posts: Vec<ObservationPost>,
}

impl Assets {
    pub fn load(assets_dir: &Path) -> Result<Self, String> {
        let districts_path = assets_dir.join("districts.json");
        let posts_path = assets_dir.join("posts.json");

        let districts_data = std::fs::read_to_string(&districts_path)
            .map_err(|e| format!("Failed to read {}: {}", districts_path.display(), e))?;
        let posts_data = std::fs::read_to_string(&posts_path)
            .map_err(|e| format!("Failed to read {}: {}", posts_path.display(), e))?;

        let index: AdministrativeIndex = serde_json::from_str(&districts_data)
            .map_err(|e| format!("Failed to parse districts.json: {}", e))?;
        let posts: Vec<ObservationPost> = serde_json::from_str(&posts_data)
            .map_err(|e| format!("Failed to parse posts.json: {}", e))?;

        for problem in models::validate_posts(&index, &posts) {
            tracing::warn!(%problem, "Inconsistent observation post");
        }

        tracing::info!(
            districts = index.districts().len(),
            posts = posts.len(),
            "Loaded map assets"
        );

        Ok(Assets { index, posts })
    }
}
