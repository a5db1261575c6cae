use super::*;

#[derive(Debug, Default, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "unstable", serde(deny_unknown_fields))]
#[cfg_attr(not(feature = "unstable"), non_exhaustive)]
pub struct ThemeConfig {
    /// `owner/name` of the project repository.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub repo: Option<String>,
    /// `owner/name` of the repository holding the docs, for edit links.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub docs_repo: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub docs_dir: Option<crate::RelPath>,
    pub edit_links: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logo: Option<String>,
    /// Superseded by `sidebar.auto`; still read by older themes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auto_sidebar: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub algolia: Option<Algolia>,
    pub sidebar: Sidebar,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gutter: Option<Gutter>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub footer: Option<Footer>,
}

impl ThemeConfig {
    /// Repository edit links point at, preferring `docsRepo`.
    pub fn edit_repo(&self) -> Option<&str> {
        self.docs_repo.as_deref().or(self.repo.as_deref())
    }
}

/// Search-index credentials.
#[derive(Debug, Default, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "unstable", serde(deny_unknown_fields))]
#[cfg_attr(not(feature = "unstable"), non_exhaustive)]
pub struct Algolia {
    pub id: String,
    pub key: String,
    pub index: String,
}
