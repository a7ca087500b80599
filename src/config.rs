use crate::cli::CommonArgs;
use crate::error::{CadenceError, Result};
use crate::model::Region;
use std::path::PathBuf;

pub const DEFAULT_REPO_PATH: &str = "covid_19";
pub const DEFAULT_REMOTE: &str = "https://github.com/openZH/covid_19.git";
pub const DEFAULT_WEEKS: u32 = 3;
pub const DEFAULT_PATH_TEMPLATE: &str =
    "fallzahlen_kanton_total_csv_v2/COVID19_Fallzahlen_Kanton_{region}_total.csv";
pub const DEFAULT_SCRAPER_NAME: &str = "GitHub Action Scraper";

const REGION_PLACEHOLDER: &str = "{region}";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub repo_path: PathBuf,
    pub remote: String,
    pub weeks: u32,
    pub path_template: String,
    pub scraper_name: String,
    pub offline: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            repo_path: PathBuf::from(DEFAULT_REPO_PATH),
            remote: DEFAULT_REMOTE.to_string(),
            weeks: DEFAULT_WEEKS,
            path_template: DEFAULT_PATH_TEMPLATE.to_string(),
            scraper_name: DEFAULT_SCRAPER_NAME.to_string(),
            offline: false,
        }
    }
}

impl Settings {
    pub fn from_args(args: &CommonArgs) -> Result<Self> {
        let defaults = Self::default();
        let settings = Self {
            repo_path: args.repo.clone().unwrap_or(defaults.repo_path),
            remote: args.remote.clone(),
            weeks: args.weeks,
            path_template: args.path_template.clone(),
            scraper_name: args.scraper_name.clone(),
            offline: args.offline,
        };
        settings.validate()?;
        Ok(settings)
    }

    pub fn validate(&self) -> Result<()> {
        if self.weeks == 0 {
            return Err(CadenceError::InvalidConfig(
                "window must span at least one week".to_string(),
            ));
        }
        if self.path_template.matches(REGION_PLACEHOLDER).count() != 1 {
            return Err(CadenceError::InvalidConfig(format!(
                "path template '{}' must contain {REGION_PLACEHOLDER} exactly once",
                self.path_template
            )));
        }
        Ok(())
    }

    /// Tracked file path for `region`.
    pub fn file_path(&self, region: Region) -> String {
        self.path_template
            .replace(REGION_PLACEHOLDER, region.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_template_resolves_canton_file() {
        let settings = Settings::default();
        let zh: Region = "ZH".parse().unwrap();
        assert_eq!(
            settings.file_path(zh),
            "fallzahlen_kanton_total_csv_v2/COVID19_Fallzahlen_Kanton_ZH_total.csv"
        );
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn rejects_empty_window() {
        let settings = Settings {
            weeks: 0,
            ..Settings::default()
        };
        assert!(matches!(settings.validate(), Err(CadenceError::InvalidConfig(_))));
    }

    #[test]
    fn rejects_template_without_single_placeholder() {
        for template in ["data/all.csv", "{region}/{region}.csv"] {
            let settings = Settings {
                path_template: template.to_string(),
                ..Settings::default()
            };
            assert!(matches!(settings.validate(), Err(CadenceError::InvalidConfig(_))));
        }
    }
}
