use clap::Parser;

/// IPL 2024 season analytics dashboard
#[derive(Parser, Debug, Clone)]
#[command(name = "ipl-dashboard", version, about)]
pub struct Config {
    /// Path to the season dataset (CSV)
    #[arg(long, env = "DATASET_PATH", default_value = "data/ipl2024.csv")]
    pub dataset_path: String,

    /// Dashboard listen address
    #[arg(long, env = "DASHBOARD_ADDR", default_value = "0.0.0.0:8080")]
    pub dashboard_addr: String,
}

impl Config {
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.dataset_path.trim().is_empty() {
            anyhow::bail!("dataset path must not be empty");
        }
        if self.dashboard_addr.parse::<std::net::SocketAddr>().is_err() {
            anyhow::bail!(
                "dashboard address '{}' is not a valid host:port pair",
                self.dashboard_addr
            );
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = Config::parse_from(["ipl-dashboard"]);
        assert!(config.validate().is_ok());
        assert_eq!(config.dataset_path, "data/ipl2024.csv");
    }

    #[test]
    fn test_bad_addr_rejected() {
        let config = Config::parse_from(["ipl-dashboard", "--dashboard-addr", "not-an-addr"]);
        assert!(config.validate().is_err());
    }
}
