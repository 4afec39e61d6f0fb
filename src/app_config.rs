use crate::domain::GeoLocation;
use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct AppConfig {
    server: Server,
    tracker: Tracker,
}

impl AppConfig {
    /// Loads the configuration from the built-in defaults, `config.toml`, `config_local.toml` and the environment,
    /// in that order. Environment variables look like `APP__SERVER__PORT=8080`.
    pub fn load() -> Result<Self, ConfigError> {
        Self::defaults()?
            .add_source(config::File::with_name("config").required(false))
            .add_source(config::File::with_name("config_local").required(false))
            .add_source(config::Environment::with_prefix("APP").prefix_separator("__").separator("__"))
            .build()?
            .try_deserialize()
    }

    fn defaults() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
        Config::builder()
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 5000_i64)?
            .set_default("server.static_dir", "static")?
            .set_default("tracker.device_id", "GPS-TRACKER-001")?
            .set_default("tracker.location_label", "Berlin, Deutschland")?
            .set_default("tracker.command_buffer_size", 32_i64)?
            .set_default("tracker.location.latitude", 52.520008)?
            .set_default("tracker.location.longitude", 13.404954)?
            .set_default("tracker.location.altitude_m", 34.0)
    }

    pub fn server(&self) -> &Server {
        &self.server
    }

    pub fn tracker(&self) -> &Tracker {
        &self.tracker
    }
}

#[derive(Debug, Deserialize)]
pub struct Server {
    host: String,
    port: u16,
    static_dir: String,
}

impl Server {
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn static_dir(&self) -> &str {
        &self.static_dir
    }
}

#[derive(Debug, Deserialize)]
pub struct Tracker {
    device_id: String,
    location_label: String,
    command_buffer_size: usize,
    seed: Option<u64>,
    location: GeoLocation,
}

impl Tracker {
    pub fn device_id(&self) -> &str {
        &self.device_id
    }

    pub fn location_label(&self) -> &str {
        &self.location_label
    }

    pub fn command_buffer_size(&self) -> usize {
        self.command_buffer_size
    }

    /// Fixed seed for reproducible mock data, the generator is seeded from the OS when absent.
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    pub fn location(&self) -> &GeoLocation {
        &self.location
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
                server: Server {
                    host: "127.0.0.1".to_string(),
                    port: 0,
                    static_dir: "static".to_string(),
                },
                tracker: Tracker {
                    device_id: "GPS-TRACKER-001".to_string(),
                    location_label: "Berlin, Deutschland".to_string(),
                    command_buffer_size: 1,
                    seed: None,
                    location: GeoLocation {
                        latitude: 52.520008,
                        longitude: 13.404954,
                        altitude: 34.0,
                    },
                },
            },
        }
    }

    pub fn seed(mut self, seed: u64) -> Self {
        self.config.tracker.seed = Some(seed);
        self
    }

    pub fn device_id(mut self, device_id: &str) -> Self {
        self.config.tracker.device_id = device_id.to_string();
        self
    }

    pub fn build(self) -> AppConfig {
        self.config
    }
}
