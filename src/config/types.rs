use serde::{Deserialize, Serialize};

/// Root configuration container.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub profile: Profile,
    #[serde(default)]
    pub resources: ResourcesConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

/// Content of the home page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Profile {
    /// Shown in the hero and in the page title.
    pub name: String,
    pub profession: String,
    /// About Me text.
    pub bio: String,
    /// Contact address.
    pub email: String,
    pub projects: Vec<Project>,
}

/// One card in the Projects section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub title: String,
    pub description: String,
    /// Technology stack tags.
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub project_url: Option<String>,
    #[serde(default)]
    pub source_url: Option<String>,
}

/// Coding resources view settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResourcesConfig {
    /// Listing endpoint (GET, JSON array).
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    /// Number of entries kept from the listing (default: 5).
    #[serde(default = "default_limit")]
    pub limit: usize,
}

/// Terminal UI settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UiConfig {
    /// Tick interval in milliseconds (default: 250).
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,
    /// View shown at startup.
    #[serde(default)]
    pub start_view: StartView,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum StartView {
    #[default]
    Home,
    Resources,
}

pub const DEFAULT_ENDPOINT: &str = "https://api.sampleapis.com/codingresources/codingResources";

fn default_endpoint() -> String {
    DEFAULT_ENDPOINT.to_string()
}

fn default_limit() -> usize {
    5
}

fn default_tick_rate_ms() -> u64 {
    250
}

impl Profile {
    /// Page title, e.g. `"Jane Doe - Portfolio"`.
    pub fn page_title(&self) -> String {
        format!("{} - Portfolio", self.name)
    }

    pub fn page_description(&self) -> String {
        format!("Portfolio of {}", self.name)
    }
}

impl Default for Profile {
    fn default() -> Self {
        Self {
            name: "[Your Name]".to_string(),
            profession: "[Your Profession]".to_string(),
            bio: "A brief bio about you, your skills, and interests.".to_string(),
            email: "email@example.com".to_string(),
            projects: vec![Project::default()],
        }
    }
}

impl Default for Project {
    fn default() -> Self {
        Self {
            title: "Project Title".to_string(),
            description: "Short description of the project and its key features.".to_string(),
            tags: vec![
                "React".to_string(),
                "TypeScript".to_string(),
                "Tailwind CSS".to_string(),
            ],
            project_url: Some("https://github.com".to_string()),
            source_url: Some("https://github.com".to_string()),
        }
    }
}

impl Default for ResourcesConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            limit: default_limit(),
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: default_tick_rate_ms(),
            start_view: StartView::default(),
        }
    }
}
