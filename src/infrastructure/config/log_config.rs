use serde::Deserialize;
use tracing_appender::rolling::Rotation;

use super::{default_true, default_directory, default_format, default_file_name, default_filter_level, default_rolling};


#[derive(Deserialize, Clone, Debug)]
pub struct LogConfig {
    /// Used when `RUST_LOG` is not set. Accepts directives like "info" or "news_gateway=debug".
    #[serde(default = "default_filter_level")]
    pub filter_level: String,
    #[serde(default = "default_true")]
    pub with_ansi: bool,
    /// Write to stdout instead of the rolling file.
    #[serde(default = "default_true")]
    pub stdout: bool,
    #[serde(default = "default_directory")]
    pub directory: String,
    #[serde(default = "default_file_name")]
    pub file_name: String,
    /// minutely | hourly | daily | never
    #[serde(default = "default_rolling")]
    pub rolling: String,
    /// pretty | compact | json | full
    #[serde(default = "default_format")]
    pub format: String,
    #[serde(default = "default_true")]
    pub with_level: bool,
    #[serde(default = "default_true")]
    pub with_target: bool,
    #[serde(default = "default_true")]
    pub with_thread_ids: bool,
    #[serde(default = "default_true")]
    pub with_thread_names: bool,
    #[serde(default = "default_true")]
    pub with_source_location: bool,
}


impl Default for LogConfig {
    fn default() -> Self {
        Self {
            filter_level: default_filter_level(),
            with_ansi: true,
            stdout: true,
            directory: default_directory(),
            file_name: default_file_name(),
            rolling: default_rolling(),
            format: default_format(),
            with_level: true,
            with_target: true,
            with_thread_ids: true,
            with_thread_names: true,
            with_source_location: true,
        }
    }
}

impl LogConfig {
    /// Unknown values fall back to a single never-rotated file.
    pub fn rotation(&self) -> Rotation {
        match &*self.rolling {
            "minutely" => Rotation::MINUTELY,
            "hourly" => Rotation::HOURLY,
            "daily" => Rotation::DAILY,
            _ => Rotation::NEVER,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rotation_follows_rolling_setting() {
        let mut config = LogConfig::default();
        assert_eq!(config.rotation(), Rotation::DAILY);
        config.rolling = "hourly".into();
        assert_eq!(config.rotation(), Rotation::HOURLY);
        config.rolling = "weekly".into();
        assert_eq!(config.rotation(), Rotation::NEVER);
    }
}
