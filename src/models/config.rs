//! Configuration model loaded from external sources.

use serde::Deserialize;

use crate::dto::search::SearchPageSettings;

#[derive(Clone, Debug, Deserialize)]
/// Server settings read from `config/*.yaml` and `APP_*` variables.
pub struct ServerConfig {
    pub address: String,
    pub port: u16,
    pub database_url: String,
    pub templates_dir: String,
    #[serde(default)]
    pub search: SearchPageSettings,
}
