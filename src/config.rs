use serde::Deserialize;
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub(crate) enum ConfigColorMode {
    Auto,
    Always,
    Never,
}

/// Optional user settings read from a TOML file
#[derive(Debug, Default, Deserialize)]
pub(crate) struct Config {
    /// Where the period state is stored
    #[serde(default)]
    pub(crate) data_file: Option<PathBuf>,
    #[serde(default)]
    pub(crate) timezone: Option<String>,
    #[serde(default)]
    pub(crate) color: Option<ConfigColorMode>,
    #[serde(default)]
    pub(crate) no_color: bool,
    #[serde(default)]
    pub(crate) debug: bool,
}

impl Config {
    pub(crate) fn load() -> Self {
        for path in Self::get_config_paths() {
            if path.exists()
                && let Ok(content) = fs::read_to_string(&path)
            {
                match Self::parse(&content) {
                    Ok(config) => return config,
                    Err(e) => {
                        eprintln!("Warning: Failed to parse {}: {}", path.display(), e);
                    }
                }
            }
        }

        Self::default()
    }

    fn parse(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    fn get_config_paths() -> Vec<PathBuf> {
        let mut paths = Vec::new();

        // 1. XDG config: ~/.config/periods/config.toml
        if let Some(home) = dirs::home_dir() {
            paths.push(home.join(".config").join("periods").join("config.toml"));
        }

        // 2. Platform config dir (macOS Application Support, Windows AppData)
        if let Some(config_dir) = dirs::config_dir() {
            let platform_path = config_dir.join("periods").join("config.toml");
            if !paths.contains(&platform_path) {
                paths.push(platform_path);
            }
        }

        // 3. Home directory: ~/.periods.toml
        if let Some(home) = dirs::home_dir() {
            paths.push(home.join(".periods.toml"));
        }

        paths
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_paths() {
        let paths = Config::get_config_paths();
        assert!(!paths.is_empty());
        assert!(paths.iter().all(|p| {
            p.to_string_lossy().contains("periods")
        }));
    }

    #[test]
    fn parse_full_config() {
        let config = Config::parse(
            r#"
data_file = "/srv/periods/state.json"
timezone = "Europe/Madrid"
color = "never"
debug = true
"#,
        )
        .unwrap();
        assert_eq!(
            config.data_file,
            Some(PathBuf::from("/srv/periods/state.json"))
        );
        assert_eq!(config.timezone.as_deref(), Some("Europe/Madrid"));
        assert_eq!(config.color, Some(ConfigColorMode::Never));
        assert!(config.debug);
        assert!(!config.no_color);
    }

    #[test]
    fn parse_empty_config_uses_defaults() {
        let config = Config::parse("").unwrap();
        assert!(config.data_file.is_none());
        assert!(config.color.is_none());
    }

    #[test]
    fn parse_rejects_unknown_color() {
        assert!(Config::parse(r#"color = "sometimes""#).is_err());
    }
}
