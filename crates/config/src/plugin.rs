/// Plugin reporting page views to Google Analytics, configured with a `ga` option.
pub const GOOGLE_ANALYTICS_PLUGIN: &str = "@vuepress/google-analytics";

/// Build-time plugin entry.
///
/// Written either as a bare name or as a `[name, options]` pair.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(untagged)]
pub enum Plugin {
    Name(String),
    WithOptions(String, serde_yaml::Value),
}

impl Plugin {
    pub fn new(name: impl Into<String>) -> Self {
        Self::Name(name.into())
    }

    pub fn with_options(name: impl Into<String>, options: serde_yaml::Mapping) -> Self {
        Self::WithOptions(name.into(), serde_yaml::Value::Mapping(options))
    }

    pub fn name(&self) -> &str {
        match self {
            Self::Name(name) | Self::WithOptions(name, _) => name,
        }
    }

    pub fn options(&self) -> Option<&serde_yaml::Value> {
        match self {
            Self::Name(_) => None,
            Self::WithOptions(_, options) => Some(options),
        }
    }

    pub fn option(&self, key: &str) -> Option<&serde_yaml::Value> {
        self.options().and_then(|o| o.get(key))
    }
}
