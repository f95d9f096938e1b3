use chrono::NaiveDate;
use leptos::prelude::*;
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct AppConfig {
    pub app: AppSection,
    pub lists: ListsSection,
    pub dates: DatesSection,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct AppSection {
    pub title: String,
    pub footer_text: String,
    /// Written to `created_by` on users added from the dashboard
    pub created_by: String,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ListsSection {
    pub default_page_size: usize,
    pub page_size_options: Vec<usize>,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct DatesSection {
    pub display_format: String,
    #[serde(default)]
    pub demo_today: Option<NaiveDate>,
}

/// Configuration compiled into the bundle
const DEFAULT_CONFIG: &str = include_str!("../../config.toml");

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            app: AppSection {
                title: "Community Admin".to_string(),
                footer_text: String::new(),
                created_by: "Admin".to_string(),
            },
            lists: ListsSection {
                default_page_size: 10,
                page_size_options: vec![10, 25, 50],
            },
            dates: DatesSection {
                display_format: "%Y-%m-%d".to_string(),
                demo_today: None,
            },
        }
    }
}

impl AppConfig {
    pub fn parse(source: &str) -> Result<Self, toml::de::Error> {
        let mut config: AppConfig = toml::from_str(source)?;
        if config.lists.page_size_options.is_empty() {
            config.lists.page_size_options = vec![config.lists.default_page_size.max(1)];
        }
        if !config
            .lists
            .page_size_options
            .contains(&config.lists.default_page_size)
        {
            config.lists.default_page_size = config.lists.page_size_options[0];
        }
        Ok(config)
    }

    /// Date used for "upcoming"/"past" splits and new records.
    pub fn today(&self) -> NaiveDate {
        self.dates
            .demo_today
            .unwrap_or_else(|| chrono::Local::now().date_naive())
    }

    pub fn format_date(&self, date: NaiveDate) -> String {
        date.format(&self.dates.display_format).to_string()
    }
}

pub fn load_config() -> AppConfig {
    match AppConfig::parse(DEFAULT_CONFIG) {
        Ok(config) => config,
        Err(e) => {
            log::warn!("config.toml is invalid ({e}), using defaults");
            AppConfig::default()
        }
    }
}

pub fn use_config() -> AppConfig {
    use_context::<AppConfig>().expect("AppConfig context not found")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config = AppConfig::parse(DEFAULT_CONFIG).unwrap();
        assert_eq!(config.lists.default_page_size, 10);
        assert!(config.lists.page_size_options.contains(&10));
        assert_eq!(
            config.dates.demo_today,
            NaiveDate::from_ymd_opt(2025, 1, 15)
        );
    }

    #[test]
    fn test_page_size_normalised() {
        let src = DEFAULT_CONFIG.replace("default_page_size = 10", "default_page_size = 7");
        let config = AppConfig::parse(&src).unwrap();
        assert_eq!(config.lists.default_page_size, 10);
    }

    #[test]
    fn test_missing_demo_date_is_none() {
        let src: String = DEFAULT_CONFIG
            .lines()
            .filter(|l| !l.starts_with("demo_today"))
            .collect::<Vec<_>>()
            .join("\n");
        let config = AppConfig::parse(&src).unwrap();
        assert_eq!(config.dates.demo_today, None);
    }

    #[test]
    fn test_broken_source_is_an_error() {
        assert!(AppConfig::parse("[app]\ntitle = 1").is_err());
    }

    #[test]
    fn test_format_date() {
        let config = AppConfig::parse(DEFAULT_CONFIG).unwrap();
        let d = NaiveDate::from_ymd_opt(2025, 3, 9).unwrap();
        assert_eq!(config.format_date(d), "09.03.2025");
    }
}
