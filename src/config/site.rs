//! Blog configuration (_config.yml)

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::content::loader::DEFAULT_EXTENSIONS;

/// Main blog configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BlogConfig {
    // Site
    pub title: String,

    // URL
    pub root: String,
    pub blog_path: String,

    // Directory
    pub posts_dir: String,

    // Writing
    pub extensions: Vec<String>,
}

impl Default for BlogConfig {
    fn default() -> Self {
        Self {
            title: "Blog".to_string(),

            root: "/".to_string(),
            blog_path: "blog".to_string(),

            posts_dir: "app/blog/posts".to_string(),

            extensions: DEFAULT_EXTENSIONS.iter().map(|e| e.to_string()).collect(),
        }
    }
}

impl BlogConfig {
    /// Load configuration from a file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        let config: BlogConfig = serde_yaml::from_str(&content)?;
        Ok(config)
    }

    /// Load `_config.yml` from a base directory, falling back to defaults when absent
    pub fn load_from_dir<P: AsRef<Path>>(base_dir: P) -> Result<Self> {
        let config_path = base_dir.as_ref().join("_config.yml");
        if config_path.exists() {
            tracing::debug!("Loading config from {:?}", config_path);
            Self::load(&config_path)
        } else {
            Ok(Self::default())
        }
    }

    /// URL of a single post, e.g. `/blog/hello-world`
    pub fn post_url(&self, slug: &str) -> String {
        let root = self.root.trim_end_matches('/');
        let blog_path = self.blog_path.trim_matches('/');

        if blog_path.is_empty() {
            format!("{}/{}", root, slug)
        } else {
            format!("{}/{}/{}", root, blog_path, slug)
        }
    }
}
