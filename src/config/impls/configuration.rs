use std::fs::File;
use std::io::Write;
use crate::common::common::parse_log_level;
use crate::config::enums::configuration_error::ConfigurationError;
use crate::config::structs::configuration::Configuration;
use crate::config::structs::store_config::StoreConfig;
use crate::config::structs::tracker_config::TrackerConfig;

impl Configuration {
    pub fn init() -> Configuration {
        Configuration {
            log_level: String::from("info"),
            whitelist: vec![],
            tracker_config: TrackerConfig::default(),
            store_config: StoreConfig::default(),
        }
    }

    pub fn load(data: &[u8]) -> Result<Configuration, toml::de::Error> {
        toml::from_str(&String::from_utf8_lossy(data))
    }

    pub fn load_file(path: &str) -> Result<Configuration, ConfigurationError> {
        let data = std::fs::read(path).map_err(ConfigurationError::IOError)?;
        let config = Self::load(data.as_slice()).map_err(ConfigurationError::ParseError)?;
        config.validate()?;
        Ok(config)
    }

    pub fn save_file(path: &str, data: String) -> Result<(), ConfigurationError> {
        let mut file = File::create(path).map_err(ConfigurationError::IOError)?;
        file.write_all(data.as_ref()).map_err(ConfigurationError::IOError)
    }

    pub fn save_from_config(path: &str, config: &Configuration) -> Result<(), ConfigurationError> {
        let config_toml = toml::to_string(config).map_err(ConfigurationError::SerializeError)?;
        Self::save_file(path, config_toml)
    }

    /// Loads `path`, or with `create` writes and returns the defaults when it is
    /// missing. Logging is not up yet at this point, so problems go to stderr.
    pub fn load_from_file(path: &str, create: bool) -> Result<Configuration, ConfigurationError> {
        match Configuration::load_file(path) {
            Ok(config) => Ok(config),
            Err(ConfigurationError::IOError(error)) if create && error.kind() == std::io::ErrorKind::NotFound => {
                eprintln!("No config file found at {}, creating one with defaults..", path);
                let config = Configuration::init();
                Configuration::save_from_config(path, &config)?;
                Ok(config)
            }
            Err(error) => {
                eprintln!("[ERROR] Config file {} could not be used: {}", path, error);
                Err(error)
            }
        }
    }

    pub fn validate(&self) -> Result<(), ConfigurationError> {
        let tracker = &self.tracker_config;
        let check_map = [
            ("log_level", parse_log_level(self.log_level.as_str()).is_some()),
            ("tracker_config.announce_interval", tracker.announce_interval > 0),
            ("tracker_config.active_interval_multiplier", tracker.active_interval_multiplier > 0),
            ("tracker_config.max_numwant", tracker.max_numwant > 0),
            ("tracker_config.default_numwant", tracker.default_numwant > 0 && tracker.default_numwant <= tracker.max_numwant),
            ("tracker_config.scrape_peer_limit", tracker.scrape_peer_limit > 0),
            ("tracker_config.peers_timeout", tracker.peers_timeout > 0),
            ("whitelist", self.whitelist.iter().all(|prefix| !prefix.is_empty())),
        ];

        for (name, valid) in check_map {
            if !valid {
                return Err(ConfigurationError::ValidationError(format!("{} is out of range", name)));
            }
        }
        Ok(())
    }
}
