use std::path::{Path, PathBuf};

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};
use wordbank::Endpoints;

const PROJECT_CONFIG: &str = "spelling-bee.toml";
const ENV_PREFIX: &str = "SPELLING_BEE_";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub endpoints: Endpoints,
    /// Bearer token for the leveled catalog.
    pub token: Option<String>,
    /// Pause between lookups while screening a word list.
    pub delay_ms: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            endpoints: Endpoints::default(),
            token: None,
            delay_ms: 1500,
        }
    }
}

impl Settings {
    /// Priority, lowest first: defaults, `./spelling-bee.toml`, the explicit
    /// `config_path`, then `SPELLING_BEE_*` environment variables.
    pub fn load(config_path: Option<&Path>) -> Result<Self, Box<figment::Error>> {
        let mut figment = Figment::new().merge(Serialized::defaults(Settings::default()));

        let project = PathBuf::from(PROJECT_CONFIG);
        if project.exists() {
            figment = figment.merge(Toml::file(project));
        }
        if let Some(path) = config_path {
            figment = figment.merge(Toml::file(path));
        }

        figment
            .merge(Env::prefixed(ENV_PREFIX).split("__"))
            .extract()
            .map_err(Box::new)
    }
}
