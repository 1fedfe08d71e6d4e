#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClipConfig {
    /// `clip.remote`, the remote `clip prune` works on when none is given
    pub default_remote: String,
    /// `clip.prefix`, only prune branches starting with it
    pub prefix: Option<String>,
}

impl Default for ClipConfig {
    fn default() -> Self {
        Self {
            default_remote: "origin".to_string(),
            prefix: None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    pub clip: ClipConfig,
}

impl Config {
    pub fn from_git(config: &git2::Config) -> Self {
        Self::from_lookup(|key| config.get_string(key).ok())
    }

    /// Build the config from a key lookup, blank values count as unset
    pub fn from_lookup<F: Fn(&str) -> Option<String>>(lookup: F) -> Self {
        let get = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());
        let defaults = ClipConfig::default();
        Self {
            clip: ClipConfig {
                default_remote: get("clip.remote").unwrap_or(defaults.default_remote),
                prefix: get("clip.prefix"),
            },
        }
    }
}
