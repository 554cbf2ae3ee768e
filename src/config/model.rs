//! Settings struct definition and default implementation.

use std::path::PathBuf;
use std::time::Duration;

/// Image model used for every call.
pub const DEFAULT_MODEL: &str = "gemini-3-pro-image-preview";

/// Google Generative Language API base URL.
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Aspect ratio requested for every image, including both course panels.
pub const DEFAULT_ASPECT_RATIO: &str = "9:16";

/// Pause between the two course panel calls to stay under rate limits.
pub const DEFAULT_REQUEST_DELAY: Duration = Duration::from_secs(2);

/// Directory under the home directory that holds generated posters.
const DEFAULT_OUTPUT_DIR: &str = "Posters";

/// Settings for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Model identifier passed to the API.
    pub model: String,

    /// API base URL (no trailing slash required).
    pub base_url: String,

    /// Aspect ratio string sent with every request (e.g. "9:16").
    pub aspect_ratio: String,

    /// Delay between consecutive API calls of one run.
    pub request_delay: Duration,

    /// Root under which `<scenario>/<slug>/` directories are created.
    pub output_root: PathBuf,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            model: DEFAULT_MODEL.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
            aspect_ratio: DEFAULT_ASPECT_RATIO.to_string(),
            request_delay: DEFAULT_REQUEST_DELAY,
            output_root: default_output_root(),
        }
    }
}

impl Settings {
    /// Override the model when one was given on the command line.
    pub fn with_model(mut self, model: Option<String>) -> Self {
        if let Some(model) = model.filter(|m| !m.trim().is_empty()) {
            self.model = model.trim().to_string();
        }
        self
    }

    pub fn with_request_delay(mut self, delay: Duration) -> Self {
        self.request_delay = delay;
        self
    }

    pub fn with_output_root(mut self, root: PathBuf) -> Self {
        self.output_root = root;
        self
    }
}

fn default_output_root() -> PathBuf {
    dirs::home_dir()
        .map(|home| home.join(DEFAULT_OUTPUT_DIR))
        .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT_DIR))
}
