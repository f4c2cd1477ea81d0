use std::path::PathBuf;

use anyhow::Context;

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub host: String,
    pub port: u16,
    /// Optional JSON seed used instead of the built-in catalog.
    pub seed_file: Option<PathBuf>,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`Config::from_env`] but reads variables through `lookup`.
    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let seed_file = lookup("SEED_FILE")
            .filter(|s| !s.is_empty())
            .map(PathBuf::from);

        // ADDR wins over HOST/PORT; ":8080" binds every interface.
        if let Some(addr) = lookup("ADDR").filter(|s| !s.is_empty()) {
            let (host, port) = addr
                .rsplit_once(':')
                .context("ADDR must look like host:port or :port")?;
            return Ok(Self {
                host: if host.is_empty() { "0.0.0.0".to_string() } else { host.to_string() },
                port: port.parse().context("ADDR port must be a valid number")?,
                seed_file,
            });
        }

        Ok(Self {
            host: lookup("HOST").unwrap_or_else(|| "0.0.0.0".to_string()),
            port: lookup("PORT")
                .unwrap_or_else(|| "8080".to_string())
                .parse()
                .context("PORT must be a valid number")?,
            seed_file,
        })
    }

    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config(vars: &[(&str, &str)]) -> anyhow::Result<Config> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_listen_on_8080() {
        let cfg = config(&[]).unwrap();
        assert_eq!(cfg.addr(), "0.0.0.0:8080");
        assert_eq!(cfg.seed_file, None);
    }

    #[test]
    fn host_and_port_override_defaults() {
        let cfg = config(&[("HOST", "127.0.0.1"), ("PORT", "3000")]).unwrap();
        assert_eq!(cfg.addr(), "127.0.0.1:3000");
    }

    #[test]
    fn bare_port_addr_binds_all_interfaces() {
        let cfg = config(&[("ADDR", ":9090"), ("PORT", "1")]).unwrap();
        assert_eq!(cfg.addr(), "0.0.0.0:9090");
    }

    #[test]
    fn full_addr_is_used_verbatim() {
        let cfg = config(&[("ADDR", "localhost:7000")]).unwrap();
        assert_eq!(cfg.host, "localhost");
        assert_eq!(cfg.port, 7000);
    }

    #[test]
    fn invalid_port_is_an_error() {
        assert!(config(&[("PORT", "eighty")]).is_err());
        assert!(config(&[("ADDR", ":99999")]).is_err());
        assert!(config(&[("ADDR", "nocolon")]).is_err());
    }

    #[test]
    fn seed_file_is_read() {
        let cfg = config(&[("SEED_FILE", "/tmp/products.json")]).unwrap();
        assert_eq!(cfg.seed_file, Some(PathBuf::from("/tmp/products.json")));
    }
}
