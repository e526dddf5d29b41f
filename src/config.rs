use crate::vars::{main_conf_path, DEF_QUEUE_DELAY_SECS, DEF_QUEUE_TOPIC, DEF_TIMEZONE};

use anyhow::{anyhow, Result};
use log::warn;
use serde::Deserialize;

#[derive(Clone, Debug, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub mqtt: ConnectionConf,
    #[serde(default = "def_queue_topic")]
    pub queue_topic: String,
    #[serde(default = "def_queue_delay_secs")]
    pub queue_delay_secs: u16,
    #[serde(default = "def_timezone")]
    pub timezone: String,
}

fn def_queue_topic() -> String {
    DEF_QUEUE_TOPIC.to_string()
}

fn def_queue_delay_secs() -> u16 {
    DEF_QUEUE_DELAY_SECS
}

fn def_timezone() -> String {
    DEF_TIMEZONE.to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            mqtt: ConnectionConf::default(),
            queue_topic: def_queue_topic(),
            queue_delay_secs: def_queue_delay_secs(),
            timezone: def_timezone(),
        }
    }
}

#[derive(Clone, Debug, Deserialize)]
pub struct ConnectionConf {
    #[serde(default = "ConnectionConf::def_url_str")]
    pub url_str: String,

    #[serde(default = "ConnectionConf::def_name")]
    pub name: String,

    #[serde(default = "ConnectionConf::def_user_pass")]
    pub user_pass: Option<(String, String)>,
}

impl ConnectionConf {
    fn def_url_str() -> String {
        "localhost".into()
    }

    fn def_name() -> String {
        "dinebot".into()
    }

    fn def_user_pass() -> Option<(String, String)> {
        None
    }
}

impl Default for ConnectionConf {
    fn default() -> Self {
        Self {
            url_str: Self::def_url_str(),
            name: Self::def_name(),
            user_pass: Self::def_user_pass(),
        }
    }
}

pub fn get_conf() -> Config {
    load_conf().unwrap_or_else(|e| {
        warn!("Using default config: {}", e);
        Config::default()
    })
}

fn load_conf() -> Result<Config> {
    let conf_path = main_conf_path();
    if conf_path.is_file() {
        let conf_file = std::fs::File::open(conf_path)?;
        Ok(serde_yaml::from_reader(std::io::BufReader::new(conf_file))?)
    } else {
        Err(anyhow!("Config file not found"))
    }
}
