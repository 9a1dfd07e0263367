//! Config command - Locate, print or create the config file

use anyhow::{Context, Result};
use owo_colors::OwoColorize;
use std::fs;
use std::path::{Path, PathBuf};
use typecycle::config::{self, Config};

fn resolve(path: Option<&Path>) -> Result<PathBuf> {
    match path {
        Some(p) => Ok(p.to_path_buf()),
        None => config::default_config_path(),
    }
}

pub fn path(path: Option<&Path>) -> Result<()> {
    let path = resolve(path)?;
    let status = if path.exists() { "" } else { " (not created)" };
    println!("{}{}", path.display(), status.dimmed());
    Ok(())
}

/// Print the effective configuration as TOML
pub fn show(path: Option<&Path>) -> Result<()> {
    let config = Config::load(path)?;
    print!("{}", config.to_toml()?);
    Ok(())
}

/// Write the default configuration
pub fn init(path: Option<&Path>, force: bool) -> Result<PathBuf> {
    let path = resolve(path)?;

    if path.exists() && !force {
        anyhow::bail!(
            "Config already exists: {} (use --force to overwrite)",
            path.display()
        );
    }

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }

    fs::write(&path, Config::default().to_toml()?)
        .with_context(|| format!("Failed to write: {}", path.display()))?;

    tracing::info!(path = %path.display(), "Wrote default config");
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_init_writes_loadable_defaults() {
        let dir = TempDir::new().unwrap();
        let target = dir.path().join("nested").join("config.toml");

        let written = init(Some(&target), false).unwrap();
        assert_eq!(written, target);
        assert_eq!(Config::load(Some(&target)).unwrap(), Config::default());
    }

    #[test]
    fn test_init_refuses_overwrite_without_force() {
        let dir = TempDir::new().unwrap();
        let target = dir.path().join("config.toml");
        fs::write(&target, "words = [\"keep\"]\n").unwrap();

        assert!(init(Some(&target), false).is_err());
        assert_eq!(
            Config::load(Some(&target)).unwrap().words,
            vec!["keep".to_string()]
        );

        init(Some(&target), true).unwrap();
        assert_eq!(Config::load(Some(&target)).unwrap(), Config::default());
    }
}
