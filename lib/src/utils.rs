use std::path::PathBuf;

/// Home directory of the current user, if it can be determined
pub fn home_dir() -> Option<PathBuf> {
    dirs::home_dir()
}

/// Directory holding `config.yml`.
///
/// `XDG_CONFIG_HOME` wins on every platform, then the platform config
/// directory, then the working directory.
pub fn get_config_dir() -> PathBuf {
    if let Some(path) = std::env::var_os("XDG_CONFIG_HOME").filter(|p| !p.is_empty()) {
        return PathBuf::from(path).join("bmhtml");
    }

    if let Some(config) = dirs::config_dir() {
        return config.join("bmhtml");
    }

    std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."))
}
