use std::fs;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use super::core::RoiConfig;
use crate::core::{Error, Result};

/// File name searched for in the working directory and its ancestors
pub const CONFIG_FILE_NAME: &str = ".kgsroi.toml";

const MAX_TRAVERSAL_DEPTH: usize = 10;

/// Pure function to read config file contents
pub(crate) fn read_config_file(path: &Path) -> std::result::Result<String, std::io::Error> {
    let file = fs::File::open(path)?;
    let mut reader = BufReader::new(file);
    let mut contents = String::new();
    reader.read_to_string(&mut contents)?;
    Ok(contents)
}

/// Pure function to parse and validate config from TOML string
pub fn parse_and_validate_config(contents: &str) -> Result<RoiConfig> {
    let config = toml::from_str::<RoiConfig>(contents)?;
    config.validate().map_err(Error::invalid_model)?;
    Ok(config)
}

/// Load an explicitly named config file. Any failure is an error.
pub fn load_config_from_path(config_path: &Path) -> Result<RoiConfig> {
    let contents = read_config_file(config_path).map_err(|e| {
        Error::file_system("Failed to read config file", config_path, e)
    })?;
    let config = parse_and_validate_config(&contents)
        .map_err(|e| Error::config(format!("{}: {}", config_path.display(), e)))?;
    debug!(path = %config_path.display(), "Loaded config");
    Ok(config)
}

/// Outcome of probing one candidate config location.
#[derive(Debug)]
pub(crate) enum Discovered {
    NotFound,
    Loaded(RoiConfig),
    Invalid,
}

/// Try loading a discovered config; problems degrade to a warning.
pub(crate) fn try_load_config_from_path(config_path: &Path) -> Discovered {
    let contents = match read_config_file(config_path) {
        Ok(contents) => contents,
        Err(e) => {
            handle_read_error(config_path, &e);
            return if e.kind() == std::io::ErrorKind::NotFound {
                Discovered::NotFound
            } else {
                Discovered::Invalid
            };
        }
    };

    match parse_and_validate_config(&contents) {
        Ok(config) => {
            debug!(path = %config_path.display(), "Loaded config");
            Discovered::Loaded(config)
        }
        Err(e) => {
            warn!(
                "Ignoring invalid config {}: {}. Using defaults.",
                config_path.display(),
                e
            );
            Discovered::Invalid
        }
    }
}

/// Handle file read errors with appropriate logging
pub(crate) fn handle_read_error(config_path: &Path, error: &std::io::Error) {
    // Only log actual errors, not "file not found"
    if error.kind() != std::io::ErrorKind::NotFound {
        warn!(
            "Failed to read config file {}: {}",
            config_path.display(),
            error
        );
    }
}

/// Pure function to generate directory ancestors up to a depth limit
pub fn directory_ancestors(start: PathBuf, max_depth: usize) -> impl Iterator<Item = PathBuf> {
    std::iter::successors(Some(start), |dir| {
        let mut parent = dir.clone();
        if parent.pop() {
            Some(parent)
        } else {
            None
        }
    })
    .take(max_depth)
}

/// Per-user config location, e.g. `~/.config/kgs-roi/config.toml`
pub fn user_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("kgs-roi").join("config.toml"))
}

/// Search `start` and its ancestors, then the user config, for a config file.
///
/// The first file that exists decides: an invalid one yields the defaults.
pub fn load_config_from(start: PathBuf) -> RoiConfig {
    let discovered = directory_ancestors(start, MAX_TRAVERSAL_DEPTH)
        .map(|dir| dir.join(CONFIG_FILE_NAME))
        .chain(user_config_path())
        .map(|path| try_load_config_from_path(&path))
        .find(|outcome| !matches!(outcome, Discovered::NotFound));

    match discovered {
        Some(Discovered::Loaded(config)) => config,
        Some(_) => RoiConfig::default(),
        None => {
            debug!(
                "No config found after checking {} directories. Using default config.",
                MAX_TRAVERSAL_DEPTH
            );
            RoiConfig::default()
        }
    }
}

pub fn load_config() -> RoiConfig {
    match std::env::current_dir() {
        Ok(dir) => load_config_from(dir),
        Err(e) => {
            warn!(
                "Failed to get current directory: {}. Using default config.",
                e
            );
            RoiConfig::default()
        }
    }
}

/// Explicit path when given, discovery otherwise.
pub fn resolve_config(explicit: Option<&Path>) -> Result<RoiConfig> {
    match explicit {
        Some(path) => load_config_from_path(path),
        None => Ok(load_config()),
    }
}
