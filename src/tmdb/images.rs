pub const DEFAULT_IMAGE_BASE_URL: &str = "https://image.tmdb.org/t/p";
pub const DEFAULT_PLACEHOLDER_URL: &str = "https://via.placeholder.com/1280x720?text=No+Image";

/// Builds TMDB image URLs, falling back to a placeholder for missing paths
#[derive(Debug, Clone, PartialEq)]
pub struct ImageUrls {
    pub base_url: String,
    pub placeholder_url: String,
}

impl Default for ImageUrls {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_IMAGE_BASE_URL.to_string(),
            placeholder_url: DEFAULT_PLACEHOLDER_URL.to_string(),
        }
    }
}

impl ImageUrls {
    /// Full-size backdrop for the detail overlay
    pub fn backdrop(&self, path: Option<&str>) -> String {
        self.sized("original", path)
    }

    /// Grid card poster
    pub fn poster(&self, path: Option<&str>) -> String {
        self.sized("w500", path)
    }

    fn sized(&self, size: &str, path: Option<&str>) -> String {
        match path.filter(|p| !p.is_empty()) {
            Some(path) => format!("{}/{}{}", self.base_url.trim_end_matches('/'), size, path),
            None => self.placeholder_url.clone(),
        }
    }
}
