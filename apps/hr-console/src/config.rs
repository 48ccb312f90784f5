use std::path::PathBuf;

use anyhow::{Context, Result, anyhow};
use platform_db::StoreSettings;
use products_hr::DEFAULT_PAGE_SIZE;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppConfig {
    pub data_dir: PathBuf,
    /// Startup language signal; `None` means "not provided".
    pub language: Option<String>,
    pub page_size: usize,
}

impl AppConfig {
    pub fn load() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let data_dir = StoreSettings::from_lookup(&lookup).data_dir;

        let language = lookup("HR_LANG")
            .map(|lang| lang.trim().to_string())
            .filter(|lang| !lang.is_empty());

        let page_size = match lookup("HR_PAGE_SIZE") {
            Some(raw) => parse_page_size(&raw).context("invalid HR_PAGE_SIZE")?,
            None => DEFAULT_PAGE_SIZE,
        };

        Ok(Self {
            data_dir,
            language,
            page_size,
        })
    }

    /// Command-line flags take precedence over the environment.
    pub fn with_overrides(mut self, data_dir: Option<PathBuf>, language: Option<String>) -> Self {
        if let Some(dir) = data_dir {
            self.data_dir = dir;
        }
        if let Some(lang) = language {
            self.language = Some(lang);
        }
        self
    }

    pub fn store_settings(&self) -> StoreSettings {
        StoreSettings::new(&self.data_dir)
    }
}

pub fn parse_page_size(raw: &str) -> Result<usize> {
    let size: usize = raw
        .trim()
        .parse()
        .with_context(|| format!("{raw:?} is not a number"))?;
    if size == 0 {
        return Err(anyhow!("page size must be at least 1"));
    }
    Ok(size)
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_apply_when_environment_is_empty() {
        let config = AppConfig::from_lookup(env(&[])).unwrap();
        assert_eq!(config.data_dir, PathBuf::from(".hr-data"));
        assert_eq!(config.language, None);
        assert_eq!(config.page_size, 5);
    }

    #[test]
    fn environment_values_are_read() {
        let config = AppConfig::from_lookup(env(&[
            ("HR_DATA_DIR", "/tmp/hr"),
            ("HR_LANG", " tr "),
            ("HR_PAGE_SIZE", "10"),
        ]))
        .unwrap();
        assert_eq!(config.data_dir, PathBuf::from("/tmp/hr"));
        assert_eq!(config.language.as_deref(), Some("tr"));
        assert_eq!(config.page_size, 10);
    }

    #[test]
    fn invalid_page_size_is_an_error() {
        assert!(AppConfig::from_lookup(env(&[("HR_PAGE_SIZE", "0")])).is_err());
        assert!(AppConfig::from_lookup(env(&[("HR_PAGE_SIZE", "five")])).is_err());
    }

    #[test]
    fn flags_override_environment() {
        let config = AppConfig::from_lookup(env(&[("HR_LANG", "en")]))
            .unwrap()
            .with_overrides(Some(PathBuf::from("data")), Some("tr".into()));
        assert_eq!(config.data_dir, PathBuf::from("data"));
        assert_eq!(config.language.as_deref(), Some("tr"));
    }
}
