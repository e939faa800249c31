//! Batch evaluation config: authority labels, scoring and matcher knobs.

use std::fmt;
use std::path::Path;

use serde::Deserialize;

use rankscore_core::DEFAULT_AUTHORITIES;

#[derive(Debug)]
pub enum ConfigError {
    Io(String),
    Parse(String),
    Validation(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(msg) => write!(f, "config: {msg}"),
            Self::Parse(msg) => write!(f, "config parse error: {msg}"),
            Self::Validation(msg) => write!(f, "config validation error: {msg}"),
        }
    }
}

impl std::error::Error for ConfigError {}

#[derive(Debug, Deserialize)]
pub struct EvalConfig {
    /// Labels recognized as authoritative, case-insensitive.
    #[serde(default = "default_authorities")]
    pub authorities: Vec<String>,
    /// RBO persistence parameter; absent means the per-pair default.
    #[serde(default)]
    pub p: Option<f64>,
    /// Matcher similarity cutoff; absent means the built-in default.
    #[serde(default)]
    pub cutoff: Option<f64>,
}

fn default_authorities() -> Vec<String> {
    DEFAULT_AUTHORITIES.iter().map(|s| s.to_string()).collect()
}

impl Default for EvalConfig {
    fn default() -> Self {
        Self { authorities: default_authorities(), p: None, cutoff: None }
    }
}

impl EvalConfig {
    pub fn from_toml(input: &str) -> Result<Self, ConfigError> {
        let config: EvalConfig =
            toml::from_str(input).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.authorities.is_empty() {
            return Err(ConfigError::Validation(
                "at least one authority label is required".into(),
            ));
        }
        if let Some(p) = self.p {
            if !(p > 0.0 && p < 1.0) {
                return Err(ConfigError::Validation(format!("p must be in (0,1), got {p}")));
            }
        }
        if let Some(cutoff) = self.cutoff {
            if !(cutoff > 0.0 && cutoff <= 1.0) {
                return Err(ConfigError::Validation(format!(
                    "cutoff must be in (0,1], got {cutoff}"
                )));
            }
        }
        Ok(())
    }
}

/// Read a config file, or fall back to the defaults when none is given.
pub fn load(path: Option<&Path>) -> Result<EvalConfig, ConfigError> {
    match path {
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .map_err(|e| ConfigError::Io(format!("cannot read {}: {e}", path.display())))?;
            EvalConfig::from_toml(&text)
        }
        None => Ok(EvalConfig::default()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn defaults_when_no_file() {
        let config = load(None).unwrap();
        assert_eq!(config.authorities, vec!["nba", "nfl", "nhl"]);
        assert!(config.p.is_none());
        assert!(config.cutoff.is_none());
    }

    #[test]
    fn parse_full_config() {
        let config = EvalConfig::from_toml(
            r#"
authorities = ["fifa", "uefa"]
p = 0.9
cutoff = 0.7
"#,
        )
        .unwrap();
        assert_eq!(config.authorities, vec!["fifa", "uefa"]);
        assert_eq!(config.p, Some(0.9));
        assert_eq!(config.cutoff, Some(0.7));
    }

    #[test]
    fn partial_config_keeps_defaults() {
        let config = EvalConfig::from_toml("p = 0.85\n").unwrap();
        assert_eq!(config.authorities, vec!["nba", "nfl", "nhl"]);
        assert_eq!(config.p, Some(0.85));
    }

    #[test]
    fn reject_out_of_range_p() {
        assert!(EvalConfig::from_toml("p = 1.0\n").is_err());
        assert!(EvalConfig::from_toml("p = 0.0\n").is_err());
    }

    #[test]
    fn reject_out_of_range_cutoff() {
        assert!(EvalConfig::from_toml("cutoff = 1.2\n").is_err());
    }

    #[test]
    fn reject_empty_authorities() {
        assert!(EvalConfig::from_toml("authorities = []\n").is_err());
    }

    #[test]
    fn load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "authorities = [\"mlb\"]").unwrap();
        let config = load(Some(file.path())).unwrap();
        assert_eq!(config.authorities, vec!["mlb"]);
    }

    #[test]
    fn missing_file_is_an_error() {
        let err = load(Some(Path::new("/no/such/config.toml"))).unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }
}
