use std::fmt;

use docsite_config::parse_link;
use itertools::Itertools;

use super::Site;

#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Severity {
    Warning,
    Error,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Warning => f.write_str("warning"),
            Self::Error => f.write_str("error"),
        }
    }
}

/// A problem found in a site's configuration.
///
/// `location` is the dotted path of the offending field, e.g.
/// `themeConfig.footer.services[1].service`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Issue {
    pub severity: Severity,
    pub location: String,
    pub message: String,
}

impl Issue {
    fn error(location: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            location: location.into(),
            message: message.into(),
        }
    }

    fn warning(location: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warning,
            location: location.into(),
            message: message.into(),
        }
    }

    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}

impl fmt::Display for Issue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.location, self.message)
    }
}

pub(super) fn check_site(site: &Site) -> Vec<Issue> {
    let mut issues = Vec::new();
    let config = site.config();
    let theme = &config.theme_config;

    if !(site.base().starts_with('/') && site.base().ends_with('/')) {
        issues.push(Issue::error(
            "base",
            format!("`{}` must start and end with `/`", site.base()),
        ));
    }

    for path in config.locales.keys() {
        if !(path.starts_with('/') && path.ends_with('/')) {
            issues.push(Issue::warning(
                format!("locales.{path}"),
                "locale paths should start and end with `/`",
            ));
        }
    }

    if theme.edit_links && theme.edit_repo().is_none() {
        issues.push(Issue::warning(
            "themeConfig.editLinks",
            "edit links are enabled but neither `docsRepo` nor `repo` is set",
        ));
    }

    if let Some(auto) = theme.auto_sidebar {
        if auto != theme.sidebar.auto {
            issues.push(Issue::warning(
                "themeConfig.autoSidebar",
                format!(
                    "`{auto}` disagrees with `sidebar.auto` (`{}`)",
                    theme.sidebar.auto
                ),
            ));
        }
    }

    for (s, section) in theme.sidebar.nav.iter().enumerate() {
        for (i, item) in section.children.iter().enumerate() {
            let location = format!("themeConfig.sidebar.nav[{s}].children[{i}].path");
            match item.path.as_deref() {
                Some("") => issues.push(Issue::error(location, "path is empty")),
                Some(path) => check_link(&mut issues, location, path),
                None => {}
            }
        }
    }

    if let Some(gutter) = &theme.gutter {
        for (name, slot) in gutter.slots() {
            check_link(&mut issues, format!("themeConfig.gutter.{name}.url"), &slot.url);
        }
    }

    if let Some(footer) = &theme.footer {
        if let Some(text_link) = &footer.text_link {
            check_link(
                &mut issues,
                "themeConfig.footer.textLink.url".to_owned(),
                &text_link.url,
            );
        }
        for (i, service) in footer.services.iter().enumerate() {
            check_link(
                &mut issues,
                format!("themeConfig.footer.services[{i}].url"),
                &service.url,
            );
        }
        for name in footer
            .services
            .iter()
            .map(|s| s.service.as_str())
            .duplicates()
        {
            issues.push(Issue::error(
                "themeConfig.footer.services",
                format!("service `{name}` is listed more than once"),
            ));
        }
        for (g, group) in footer.links.iter().enumerate() {
            for (i, link) in group.children.iter().enumerate() {
                check_link(
                    &mut issues,
                    format!("themeConfig.footer.links[{g}].children[{i}].url"),
                    &link.url,
                );
            }
        }
    }

    for name in config.plugins.iter().map(|p| p.name()).duplicates() {
        issues.push(Issue::warning(
            "plugins",
            format!("plugin `{name}` is listed more than once"),
        ));
    }

    issues
}

fn check_link(issues: &mut Vec<Issue>, location: String, link: &str) {
    if link.is_empty() {
        issues.push(Issue::error(location, "link is empty"));
        return;
    }
    match parse_link(link) {
        Ok(Some(_)) => {}
        Ok(None) => {
            if link.chars().any(char::is_whitespace) {
                issues.push(Issue::error(
                    location,
                    format!("`{link}` is not a valid relative path"),
                ));
            }
        }
        Err(e) => {
            issues.push(Issue::error(location, format!("`{link}` is not a valid URL: {e}")));
        }
    }
}
