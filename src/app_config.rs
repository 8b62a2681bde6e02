use crate::annotation::ParserProfile;
use config::{Config, ConfigError, Environment, File, Map};
use serde::Deserialize;
use std::path::Path;
use tracing::warn;

const ENV_FILE: &str = ".env";

#[derive(Debug, Deserialize)]
pub struct AppConfig {
    api_key: Option<String>,
    #[serde(default)]
    meraki: Meraki,
    #[serde(default)]
    report: Report,
    #[serde(default)]
    migration: Migration,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_with_env_file(Path::new(ENV_FILE))
    }

    fn load_with_env_file(env_file: &Path) -> Result<Self, ConfigError> {
        let mut variables = env_file_variables(env_file);
        variables.extend(std::env::vars());

        Config::builder()
            .add_source(File::with_name("config").required(false))
            .add_source(File::with_name("config_local").required(false))
            .add_source(Environment::default().source(Some(variables)))
            .build()?
            .try_deserialize()
    }

    /// The dashboard API key, `None` when `API_KEY` is unset or blank.
    pub fn api_key(&self) -> Option<&str> {
        self.api_key.as_deref().map(str::trim).filter(|key| !key.is_empty())
    }

    pub fn meraki(&self) -> &Meraki {
        &self.meraki
    }

    pub fn report(&self) -> &Report {
        &self.report
    }

    pub fn migration(&self) -> &Migration {
        &self.migration
    }
}

/// Variables of a dotenv file, empty when there is none. The process environment overrides them.
fn env_file_variables(path: &Path) -> Map<String, String> {
    match dotenvy::from_path_iter(path) {
        Ok(variables) => variables
            .filter_map(|variable| {
                variable
                    .inspect_err(|err| warn!("⚠️ Skipping a line of '{}': {}", path.display(), err))
                    .ok()
            })
            .collect(),
        Err(err) if err.not_found() => Map::new(),
        Err(err) => {
            warn!("⚠️ Could not read '{}': {}", path.display(), err);
            Map::new()
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct Meraki {
    url: String,
    per_page: usize,
    verify_tls: bool,
}

impl Default for Meraki {
    fn default() -> Self {
        Meraki {
            url: "https://api.meraki.com/api/v1".to_string(),
            per_page: 1000,
            verify_tls: true,
        }
    }
}

impl Meraki {
    pub fn url(&self) -> &str {
        self.url.trim_end_matches('/')
    }

    pub fn per_page(&self) -> usize {
        self.per_page.max(1)
    }

    pub fn verify_tls(&self) -> bool {
        self.verify_tls
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportKind {
    Wan,
    Organizations,
    Inventory,
}

impl ReportKind {
    pub fn default_output(&self) -> &'static str {
        match self {
            ReportKind::Wan => "devices_wan.xlsx",
            ReportKind::Organizations | ReportKind::Inventory => "meraki_organizacoes_dispositivos.xlsx",
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct Report {
    kind: ReportKind,
    models: Vec<String>,
    parser_profile: ParserProfile,
    wan_columns: usize,
    output: Option<String>,
}

impl Default for Report {
    fn default() -> Self {
        Report {
            kind: ReportKind::Wan,
            models: vec!["MX67".to_string(), "MX68".to_string()],
            parser_profile: ParserProfile::Full,
            wan_columns: 3,
            output: None,
        }
    }
}

impl Report {
    pub fn kind(&self) -> ReportKind {
        self.kind
    }

    pub fn models(&self) -> &[String] {
        &self.models
    }

    pub fn parser_profile(&self) -> ParserProfile {
        self.parser_profile
    }

    pub fn wan_columns(&self) -> usize {
        self.wan_columns
    }

    pub fn output(&self) -> &str {
        self.output.as_deref().unwrap_or_else(|| self.kind.default_output())
    }
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct Migration {
    reference_path: String,
}

impl Default for Migration {
    fn default() -> Self {
        Migration {
            reference_path: "migrados.xlsx".to_string(),
        }
    }
}

impl Migration {
    pub fn reference_path(&self) -> &str {
        &self.reference_path
    }
}

#[cfg(test)]
pub struct AppConfigBuilder {
    config: AppConfig,
}

#[cfg(test)]
impl AppConfigBuilder {
    pub fn new() -> Self {
        AppConfigBuilder {
            config: AppConfig {
                api_key: Some("key".to_string()),
                meraki: Meraki {
                    url: "https://api.meraki.url".to_string(),
                    per_page: 1000,
                    verify_tls: true,
                },
                report: Report::default(),
                migration: Migration::default(),
            },
        }
    }

    pub fn api_key(mut self, api_key: Option<&str>) -> Self {
        self.config.api_key = api_key.map(str::to_string);
        self
    }

    pub fn meraki_url(mut self, url: String) -> Self {
        self.config.meraki.url = url;
        self
    }

    pub fn verify_tls(mut self, verify_tls: bool) -> Self {
        self.config.meraki.verify_tls = verify_tls;
        self
    }

    pub fn per_page(mut self, per_page: usize) -> Self {
        self.config.meraki.per_page = per_page;
        self
    }

    pub fn kind(mut self, kind: ReportKind) -> Self {
        self.config.report.kind = kind;
        self
    }

    pub fn models(mut self, models: &[&str]) -> Self {
        self.config.report.models = models.iter().map(|model| model.to_string()).collect();
        self
    }

    pub fn parser_profile(mut self, profile: ParserProfile) -> Self {
        self.config.report.parser_profile = profile;
        self
    }

    pub fn output(mut self, output: String) -> Self {
        self.config.report.output = Some(output);
        self
    }

    pub fn reference_path(mut self, path: String) -> Self {
        self.config.migration.reference_path = path;
        self
    }

    pub fn build(self) -> AppConfig {
        self.config
    }
}
