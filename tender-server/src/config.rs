use {
    crate::kernel::entities::Address,
    anyhow::Result,
    clap::{
        crate_authors,
        crate_description,
        crate_name,
        crate_version,
        Args,
        Parser,
    },
    std::{
        fs,
        time::Duration,
    },
};

pub mod server;

#[derive(Parser, Debug)]
#[command(name = crate_name!())]
#[command(author = crate_authors!())]
#[command(about = crate_description!())]
#[command(version = crate_version!())]
pub enum Options {
    /// Run the tender server service.
    Run(RunOptions),
}

#[derive(Args, Clone, Debug)]
pub struct RunOptions {
    /// Server Options
    #[command(flatten)]
    pub server: server::Options,

    #[command(flatten)]
    pub config: ConfigOptions,
}

#[derive(Args, Clone, Debug)]
#[command(next_help_heading = "Config Options")]
#[group(id = "Config")]
pub struct ConfigOptions {
    /// Path to a configuration file with the non-secret service settings.
    #[arg(long = "config")]
    #[arg(env = "TENDER_CONFIG")]
    #[arg(default_value = "config.yaml")]
    pub config: String,
}

#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct Config {
    /// Address installed as admin at startup when the admin set is empty.
    pub bootstrap_admin: Address,

    /// URL of the content-addressed document gateway. Documents are held
    /// in memory when unset.
    #[serde(default)]
    pub document_gateway_url: Option<String>,

    /// Webhook URL notifications are posted to. Notifications are logged
    /// only when unset.
    #[serde(default)]
    pub notification_webhook_url: Option<String>,

    #[serde(default)]
    pub tender: TenderConfig,
}

#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct TenderConfig {
    /// How far in the future a tender deadline may be.
    #[serde(with = "humantime_serde", default = "default_max_deadline_ahead")]
    pub max_deadline_ahead: Duration,

    /// Upper bound applied to the `limit` query parameter of list endpoints.
    #[serde(default = "default_max_page_size")]
    pub max_page_size: u64,
}

impl Default for TenderConfig {
    fn default() -> Self {
        Self {
            max_deadline_ahead: default_max_deadline_ahead(),
            max_page_size:      default_max_page_size(),
        }
    }
}

fn default_max_deadline_ahead() -> Duration {
    Duration::from_secs(90 * 24 * 60 * 60)
}

fn default_max_page_size() -> u64 {
    100
}

impl Config {
    pub fn load(path: &str) -> Result<Config> {
        let yaml_content = fs::read_to_string(path)?;
        let config: Config = serde_yaml::from_str(&yaml_content)?;
        Ok(config)
    }
}
