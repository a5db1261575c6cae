use super::*;

#[derive(Debug, Default, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "unstable", serde(deny_unknown_fields))]
#[cfg_attr(not(feature = "unstable"), non_exhaustive)]
pub struct Sidebar {
    /// Infer navigation from the docs file tree instead of `nav`.
    pub auto: bool,
    pub nav: Vec<NavSection>,
}

impl Sidebar {
    /// All navigation entries, section by section, in authoring order.
    pub fn items(&self) -> impl Iterator<Item = &NavItem> + '_ {
        self.nav.iter().flat_map(|s| s.children.iter())
    }
}

#[derive(Debug, Default, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "unstable", serde(deny_unknown_fields))]
#[cfg_attr(not(feature = "unstable"), non_exhaustive)]
pub struct NavSection {
    pub title: String,
    pub children: Vec<NavItem>,
}

#[derive(Debug, Default, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "unstable", serde(deny_unknown_fields))]
#[cfg_attr(not(feature = "unstable"), non_exhaustive)]
pub struct NavItem {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    /// Expand every file under `path`.
    #[serde(skip_serializing_if = "is_false")]
    pub directory: bool,
}

impl NavItem {
    pub fn is_external(&self) -> bool {
        self.path.as_deref().is_some_and(is_absolute_url)
    }
}

/// Parse `link` as an absolute URL.
///
/// `Ok(None)` means `link` is a relative path, e.g. `/intro` or `guides/setup.md`.
pub fn parse_link(link: &str) -> Result<Option<url::Url>, url::ParseError> {
    match url::Url::parse(link) {
        Ok(url) => Ok(Some(url)),
        Err(url::ParseError::RelativeUrlWithoutBase) => Ok(None),
        Err(e) => Err(e),
    }
}

/// Whether `link` carries a scheme, e.g. `https://` or `mailto:`.
pub fn is_absolute_url(link: &str) -> bool {
    !matches!(parse_link(link), Ok(None))
}
