use std::collections::BTreeMap;
use std::fmt;
use std::path;

use super::*;

/// Name of the project file searched for by [`SiteConfig::from_cwd`].
pub const PROJECT_FILE: &str = "_docsite.yml";

#[derive(Debug, Default, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "unstable", serde(deny_unknown_fields))]
#[cfg_attr(not(feature = "unstable"), non_exhaustive)]
pub struct SiteConfig {
    #[serde(skip)]
    pub root: path::PathBuf,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub theme: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub locales: BTreeMap<String, Locale>,
    /// URL path prefix of the generated site.
    ///
    /// Left unset, consumers fall back to `/`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base: Option<String>,
    pub theme_config: ThemeConfig,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub plugins: Vec<Plugin>,
}

impl SiteConfig {
    pub fn from_file<P: Into<path::PathBuf>>(path: P) -> Result<SiteConfig> {
        Self::from_file_internal(path.into())
    }

    fn from_file_internal(path: path::PathBuf) -> Result<SiteConfig> {
        let content = std::fs::read_to_string(&path).map_err(|e| {
            Status::new("Failed to read config")
                .with_source(e)
                .context_with(|c| c.insert("Path", path.display().to_string()))
        })?;

        let mut config = if content.trim().is_empty() {
            SiteConfig::default()
        } else {
            let format = Format::from_path(&path);
            Self::parse(&content, format)
                .map_err(|e| e.context_with(|c| c.insert("Path", path.display().to_string())))?
        };

        let mut root = path;
        root.pop(); // Remove filename
        if root == path::Path::new("") {
            root = path::Path::new(".").to_owned();
        }
        config.root = root;

        Ok(config)
    }

    pub fn parse(content: &str, format: Format) -> Result<SiteConfig> {
        let parsed = match format {
            Format::Yaml => serde_yaml::from_str(content)
                .map_err(|e| Status::new("Failed to parse config").with_source(e)),
            Format::Json => serde_json::from_str(content)
                .map_err(|e| Status::new("Failed to parse config").with_source(e)),
            Format::Toml => toml::from_str(content)
                .map_err(|e| Status::new("Failed to parse config").with_source(e)),
        };
        parsed.map_err(|e| e.context_with(|c| c.insert("Format", format.to_string())))
    }

    pub fn from_cwd<P: Into<path::PathBuf>>(cwd: P) -> Result<SiteConfig> {
        Self::from_cwd_internal(cwd.into())
    }

    fn from_cwd_internal(cwd: path::PathBuf) -> Result<SiteConfig> {
        let file_path = find_project_file(&cwd, PROJECT_FILE);
        let config = file_path
            .map(|p| {
                log::debug!("Using config file `{}`", p.display());
                Self::from_file(&p)
            })
            .unwrap_or_else(|| {
                log::warn!("No {PROJECT_FILE} file found in current directory, using default config.");
                let config = SiteConfig {
                    root: cwd,
                    ..Default::default()
                };
                Ok(config)
            })?;
        Ok(config)
    }

    pub fn to_string_as(&self, format: Format) -> Result<String> {
        let rendered = match format {
            Format::Yaml => serde_yaml::to_string(self)
                .map_err(|e| Status::new("Failed to serialize config").with_source(e))?,
            Format::Json => {
                let mut json = serde_json::to_string_pretty(self)
                    .map_err(|e| Status::new("Failed to serialize config").with_source(e))?;
                json.push('\n');
                json
            }
            Format::Toml => toml::to_string_pretty(self)
                .map_err(|e| Status::new("Failed to serialize config").with_source(e))?,
        };
        Ok(rendered)
    }

    pub fn plugin(&self, name: &str) -> Option<&Plugin> {
        self.plugins.iter().find(|p| p.name() == name)
    }

    /// Tracking identifier of the Google Analytics plugin, if configured.
    pub fn analytics_id(&self) -> Option<&str> {
        self.plugin(GOOGLE_ANALYTICS_PLUGIN)
            .and_then(|p| p.option("ga"))
            .and_then(|v| v.as_str())
    }
}

impl fmt::Display for SiteConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let converted = serde_yaml::to_string(self).map_err(|_| fmt::Error)?;
        let converted = converted.strip_prefix("---\n").unwrap_or(&converted);
        write!(f, "{converted}")
    }
}

#[derive(Debug, Default, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "unstable", serde(deny_unknown_fields))]
#[cfg_attr(not(feature = "unstable"), non_exhaustive)]
pub struct Locale {
    pub lang: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Source representation of a [`SiteConfig`].
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Format {
    #[default]
    Yaml,
    Json,
    Toml,
}

impl Format {
    /// Pick the format from a file extension, falling back to YAML.
    pub fn from_path(path: &path::Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some("json") => Self::Json,
            Some("toml") => Self::Toml,
            _ => Self::Yaml,
        }
    }

    pub fn extension(self) -> &'static str {
        match self {
            Self::Yaml => "yml",
            Self::Json => "json",
            Self::Toml => "toml",
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Yaml => "yaml",
            Self::Json => "json",
            Self::Toml => "toml",
        };
        f.write_str(name)
    }
}

fn find_project_file<P: Into<path::PathBuf>>(dir: P, name: &str) -> Option<path::PathBuf> {
    find_project_file_internal(dir.into(), name)
}

fn find_project_file_internal(dir: path::PathBuf, name: &str) -> Option<path::PathBuf> {
    let mut file_path = dir;
    file_path.push(name);
    while !file_path.exists() {
        file_path.pop(); // filename
        let hit_bottom = !file_path.pop();
        if hit_bottom {
            return None;
        }
        file_path.push(name);
    }
    Some(file_path)
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_from_file_ok() {
        let result = SiteConfig::from_file("tests/fixtures/config/_docsite.yml").unwrap();
        assert_eq!(
            result.root,
            path::Path::new("tests/fixtures/config").to_path_buf()
        );
        assert_eq!(result.title.as_deref(), Some("Ethermint Documentation"));
        assert_eq!(result.theme.as_deref(), Some("cosmos"));
        assert_eq!(result.locales["/"].lang, "en-US");
    }

    #[test]
    fn test_from_file_json() {
        let result = SiteConfig::from_file("tests/fixtures/config/docsite.json").unwrap();
        assert_eq!(result.base.as_deref(), Some("/docs/"));
        assert_eq!(result.theme_config.sidebar.nav.len(), 1);
    }

    #[test]
    fn test_from_file_toml() {
        let result = SiteConfig::from_file("tests/fixtures/config/docsite.toml").unwrap();
        assert_eq!(result.title.as_deref(), Some("Toml Docs"));
        assert_eq!(result.analytics_id(), Some("UA-51029217-2"));
    }

    #[test]
    fn test_from_file_empty() {
        let result = SiteConfig::from_file("tests/fixtures/config/empty.yml").unwrap();
        assert_eq!(
            result.root,
            path::Path::new("tests/fixtures/config").to_path_buf()
        );
        assert_eq!(result.title, None);
    }

    #[test]
    fn test_from_file_invalid_syntax() {
        let result = SiteConfig::from_file("tests/fixtures/config/invalid_syntax.yml");
        assert!(result.is_err());
    }

    #[test]
    fn test_from_file_not_found() {
        let result = SiteConfig::from_file("tests/fixtures/config/config_does_not_exist.yml");
        assert!(result.is_err());
    }

    #[test]
    fn test_from_cwd_ok() {
        let result = SiteConfig::from_cwd("tests/fixtures/config/child").unwrap();
        assert_eq!(
            result.root,
            path::Path::new("tests/fixtures/config").to_path_buf()
        );
    }

    #[test]
    fn test_from_cwd_not_found() {
        let result = SiteConfig::from_cwd("tests/fixtures").unwrap();
        assert_eq!(result.root, path::Path::new("tests/fixtures").to_path_buf());
        assert_eq!(result.base, None);
    }

    #[test]
    fn nav_keeps_authoring_order() {
        let config = SiteConfig::from_file("tests/fixtures/config/_docsite.yml").unwrap();
        let titles: Vec<_> = config.theme_config.sidebar.nav[0]
            .children
            .iter()
            .map(|i| i.title.as_str())
            .collect();
        assert_eq!(
            titles,
            ["Introduction", "Quickstart", "Basics", "Core Concepts", "Guides"]
        );
    }

    #[test]
    fn round_trip_yaml() {
        let config = SiteConfig::from_file("tests/fixtures/config/_docsite.yml").unwrap();
        let rendered = config.to_string_as(Format::Yaml).unwrap();
        let mut reparsed = SiteConfig::parse(&rendered, Format::Yaml).unwrap();
        reparsed.root = config.root.clone();
        assert_eq!(reparsed, config);
    }

    #[test]
    fn round_trip_json() {
        let config = SiteConfig::from_file("tests/fixtures/config/_docsite.yml").unwrap();
        let rendered = config.to_string_as(Format::Json).unwrap();
        let mut reparsed = SiteConfig::parse(&rendered, Format::Json).unwrap();
        reparsed.root = config.root.clone();
        assert_eq!(reparsed, config);
    }

    #[test]
    fn round_trip_toml() {
        for fixture in [
            "tests/fixtures/config/_docsite.yml",
            "tests/fixtures/config/docsite.toml",
        ] {
            let config = SiteConfig::from_file(fixture).unwrap();
            let rendered = config.to_string_as(Format::Toml).unwrap();
            let mut reparsed = SiteConfig::parse(&rendered, Format::Toml).unwrap();
            reparsed.root = config.root.clone();
            assert_eq!(reparsed, config, "{fixture}");
        }
    }

    #[test]
    fn round_trip_toml_mixed_plugins() {
        let config = SiteConfig::from_file("tests/fixtures/config/docsite.toml").unwrap();
        let mut options = serde_yaml::Mapping::new();
        options.insert("ga".into(), "UA-51029217-2".into());
        let config = SiteConfig {
            plugins: vec![
                Plugin::new("@vuepress/back-to-top"),
                Plugin::with_options(GOOGLE_ANALYTICS_PLUGIN, options),
            ],
            ..config
        };
        let rendered = config.to_string_as(Format::Toml).unwrap();
        let mut reparsed = SiteConfig::parse(&rendered, Format::Toml).unwrap();
        reparsed.root = config.root.clone();
        assert_eq!(reparsed.plugins, config.plugins);
        assert_eq!(reparsed.analytics_id(), Some("UA-51029217-2"));
    }

    #[test]
    fn display_omits_document_marker() {
        let config = SiteConfig {
            title: Some("Docs".to_owned()),
            ..Default::default()
        };
        let rendered = config.to_string();
        assert!(rendered.starts_with("title: Docs"), "{rendered}");
    }

    #[test]
    fn analytics_id_missing() {
        let config = SiteConfig::from_file("tests/fixtures/config/_docsite.yml").unwrap();
        assert_eq!(config.analytics_id(), None);
    }

    #[test]
    fn format_from_path() {
        assert_eq!(Format::from_path(path::Path::new("a.json")), Format::Json);
        assert_eq!(Format::from_path(path::Path::new("a.toml")), Format::Toml);
        assert_eq!(Format::from_path(path::Path::new("a.yaml")), Format::Yaml);
        assert_eq!(Format::from_path(path::Path::new("a")), Format::Yaml);
    }

    #[test]
    fn find_project_file_same_dir() {
        let actual = find_project_file("tests/fixtures/config", PROJECT_FILE).unwrap();
        let expected = path::Path::new("tests/fixtures/config/_docsite.yml");
        assert_eq!(actual, expected);
    }

    #[test]
    fn find_project_file_parent_dir() {
        let actual = find_project_file("tests/fixtures/config/child", PROJECT_FILE).unwrap();
        let expected = path::Path::new("tests/fixtures/config/_docsite.yml");
        assert_eq!(actual, expected);
    }

    #[test]
    fn find_project_file_doesnt_exist() {
        let expected = path::Path::new("<NOT FOUND>");
        let actual =
            find_project_file("tests/fixtures/", PROJECT_FILE).unwrap_or_else(|| expected.into());
        assert_eq!(actual, expected);
    }
}
