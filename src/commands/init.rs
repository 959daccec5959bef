use crate::config::{RoiConfig, CONFIG_FILE_NAME};
use crate::io;
use anyhow::Result;
use std::path::{Path, PathBuf};

const HEADER: &str = "# kgs-roi configuration\n\
# Monetization rates per source, regional traffic mix, and input handling.\n\n";

/// Default configuration file contents
pub fn default_config_contents() -> crate::core::Result<String> {
    let body = toml::to_string_pretty(&RoiConfig::default())?;
    Ok(format!("{HEADER}{body}"))
}

pub fn init_config_at(config_path: &Path, force: bool) -> Result<()> {
    if io::file_exists(config_path) && !force {
        anyhow::bail!("Configuration file already exists. Use --force to overwrite.");
    }

    io::write_file(config_path, &default_config_contents()?)?;
    Ok(())
}

pub fn init_config(force: bool) -> Result<()> {
    let config_path = PathBuf::from(CONFIG_FILE_NAME);
    init_config_at(&config_path, force)?;
    println!("Created {CONFIG_FILE_NAME} configuration file");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::parse_and_validate_config;
    use tempfile::TempDir;

    #[test]
    fn test_default_contents_parse_back_to_defaults() {
        let contents = default_config_contents().unwrap();
        assert!(contents.starts_with("# kgs-roi configuration"));
        assert_eq!(
            parse_and_validate_config(&contents).unwrap(),
            RoiConfig::default()
        );
    }

    #[test]
    fn test_default_contents_error_type_is_crate_error() {
        let contents: crate::core::Result<String> = default_config_contents();
        assert!(contents.unwrap().contains("negative_values"));
    }

    #[test]
    fn test_init_refuses_to_overwrite() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);
        std::fs::write(&path, "# mine\n").unwrap();

        assert!(init_config_at(&path, false).is_err());
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "# mine\n");

        init_config_at(&path, true).unwrap();
        let written = std::fs::read_to_string(&path).unwrap();
        assert!(written.contains("linkedin"));
        assert!(written.contains("impression_rate"));
    }
}
