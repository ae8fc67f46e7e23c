use serde::{Deserialize, Serialize};
use std::time::Duration;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub scanning: ScanningConfig,
    pub enumeration: EnumerationConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanningConfig {
    /// Per-probe ceiling in seconds; a probe that has not resolved within
    /// this window counts as a negative outcome.
    pub timeout: u64,
    /// Maximum simultaneous probes per stage.
    pub threads: usize,
    /// Candidate TCP ports checked on every live host.
    pub common_ports: Vec<u16>,
    pub tcp_connect_timeout: u64,    // milliseconds
    pub banner_connect_timeout: u64, // milliseconds
    pub banner_read_timeout: u64,    // milliseconds
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnumerationConfig {
    /// Deadline for external enumeration tools (smbclient, net view), seconds.
    pub tool_timeout: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            scanning: ScanningConfig {
                timeout: 5,
                threads: 50,
                common_ports: vec![
                    21, 22, 23, 25, 53, 80, 110, 111, 135, 139, 143, 443, 445, 993, 995, 1723,
                    3306, 3389, 5432, 5900, 8080,
                ],
                tcp_connect_timeout: 2000,
                banner_connect_timeout: 3000,
                banner_read_timeout: 3000,
            },
            enumeration: EnumerationConfig { tool_timeout: 10 },
        }
    }
}

impl Config {
    pub fn load_from_file(path: &str) -> crate::Result<Self> {
        let settings = config::Config::builder()
            .add_source(config::File::with_name(path))
            .build()?;

        Ok(settings.try_deserialize()?)
    }

    pub fn save_to_file(&self, path: &str) -> crate::Result<()> {
        let toml_string = toml::to_string_pretty(self)?;

        std::fs::write(path, toml_string)?;
        Ok(())
    }

    pub fn probe_timeout(&self) -> Duration {
        Duration::from_secs(self.scanning.timeout)
    }

    pub fn tcp_connect_timeout(&self) -> Duration {
        Duration::from_millis(self.scanning.tcp_connect_timeout)
    }

    pub fn banner_connect_timeout(&self) -> Duration {
        Duration::from_millis(self.scanning.banner_connect_timeout)
    }

    pub fn banner_read_timeout(&self) -> Duration {
        Duration::from_millis(self.scanning.banner_read_timeout)
    }

    pub fn tool_timeout(&self) -> Duration {
        Duration::from_secs(self.enumeration.tool_timeout)
    }
}
