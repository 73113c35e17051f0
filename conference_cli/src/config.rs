use std::path::{Path, PathBuf};

use conference_entities::DEFAULT_GROUP_FIELD_NAME;
use conference_reports::{DepartmentInfo, DocumentGenerator, PageSize, ReportError, TemplateContext};


pub const CONFIG_ENV_VAR: &str = "CONFERENCE_DOCS_CONFIG";

#[derive(Debug, serde::Deserialize, Clone)]
#[serde(default)]
pub struct Config {
    pub logging_config: String,
    /// Directory overriding the builtin `word/*.xml` templates
    pub templates_path: Option<PathBuf>,
    pub page_size: PageSize,
    pub group_field_name: String,
    pub department: DepartmentInfo,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            logging_config: "warn,conference_reports=info,conference_cli=info".into(),
            templates_path: None,
            page_size: PageSize::default(),
            group_field_name: DEFAULT_GROUP_FIELD_NAME.into(),
            department: DepartmentInfo::default(),
        }
    }
}

impl Config {
    pub fn document_generator(&self) -> Result<DocumentGenerator, ReportError> {
        let templates = match &self.templates_path {
            Some(path) => TemplateContext::new(path)?,
            None => TemplateContext::builtin()?,
        };

        Ok(DocumentGenerator::new(templates)
            .with_department(self.department.clone())
            .with_page_size(self.page_size)
            .with_group_field_name(&self.group_field_name))
    }
}

pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("conference-docs").join("config.yaml"))
}

/// An explicit path wins over the environment, which wins over the per-user
/// default. The default is only used if the file exists.
pub fn config_path(explicit: Option<&Path>) -> Option<PathBuf> {
    if let Some(path) = explicit {
        return Some(path.to_path_buf());
    }
    if let Ok(path) = std::env::var(CONFIG_ENV_VAR) {
        return Some(path.into());
    }
    default_config_path().filter(|path| path.exists())
}

pub fn parse_config(content: &str) -> Result<Config, serde_yaml::Error> {
    serde_yaml::from_str::<Config>(content)
}

pub(crate) fn read_config_inner(path: &Path) -> Result<Config, anyhow::Error> {
    let config = std::fs::read_to_string(path)?;
    let config = parse_config(&config)?;
    Ok(config)
}

pub fn read_config(explicit: Option<&Path>) -> Config {
    let Some(path) = config_path(explicit) else {
        return Config::default();
    };

    match read_config_inner(&path) {
        Ok(config) => config,
        Err(e) => {
            //Print to stderr, since logging is set up in the config
            eprintln!("Warning: Failed to read config {}: {}", path.display(), e);
            Config::default()
        }
    }
}


#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_partial_config_keeps_defaults() {
        let config = parse_config("page_size: a4\ndepartment:\n  conference_name: МСНК СПб\n").unwrap();

        assert_eq!(config.page_size, PageSize::A4);
        assert_eq!(config.department.conference_name, "МСНК СПб");
        assert_eq!(config.department.venue_address, "ул. Б. Морская, д. 67");
        assert_eq!(config.group_field_name, DEFAULT_GROUP_FIELD_NAME);
        assert!(config.templates_path.is_none());
    }

    #[test]
    fn test_invalid_page_size_is_rejected() {
        assert!(parse_config("page_size: a5\n").is_err());
    }

    #[test]
    fn test_explicit_path_wins() {
        let path = Path::new("/tmp/custom.yaml");
        assert_eq!(config_path(Some(path)), Some(path.to_path_buf()));
    }

    #[test]
    fn test_unreadable_config_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.yaml");
        std::fs::write(&path, "page_size: [1, 2]\n").unwrap();

        let config = read_config(Some(&path));
        assert_eq!(config.page_size, PageSize::Letter);
        assert!(read_config_inner(&path).is_err());
    }
}
