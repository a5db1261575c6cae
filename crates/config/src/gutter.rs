use super::*;

/// Help and support panel shown next to each page.
#[derive(Debug, Default, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "unstable", serde(deny_unknown_fields))]
#[cfg_attr(not(feature = "unstable"), non_exhaustive)]
pub struct Gutter {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "is_false")]
    pub edit_link: bool,
    pub chat: GutterSlot,
    pub forum: GutterSlot,
    pub github: GutterSlot,
}

impl Gutter {
    pub fn slots(&self) -> [(&'static str, &GutterSlot); 3] {
        [
            ("chat", &self.chat),
            ("forum", &self.forum),
            ("github", &self.github),
        ]
    }
}

#[derive(Debug, Default, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "unstable", serde(deny_unknown_fields))]
#[cfg_attr(not(feature = "unstable"), non_exhaustive)]
pub struct GutterSlot {
    pub title: String,
    pub text: String,
    pub url: String,
    /// CSS background, usually a `linear-gradient(..)`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bg: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logo: Option<String>,
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn slots_are_fixed() {
        let gutter: Gutter = serde_yaml::from_str(
            "
title: Help & Support
editLink: true
chat:
  title: Discord
  text: Chat with Cosmos developers on Discord.
  url: https://discordapp.com/channels/669268347736686612
  bg: linear-gradient(225.11deg, #2E3148 0%, #161931 95.68%)
forum:
  title: Cosmos Forum
  text: Join the Cosmos Developer Forum to learn more.
  url: https://forum.cosmos.network/
  logo: cosmos
github:
  title: Found an Issue?
  text: Help us improve this page by suggesting edits on GitHub.
  url: https://github.com/ChainSafe/ethermint/edit/development/docs/README.md
",
        )
        .unwrap();
        let names: Vec<_> = gutter.slots().iter().map(|(n, _)| *n).collect();
        assert_eq!(names, ["chat", "forum", "github"]);
        assert!(gutter.edit_link);
        assert_eq!(gutter.forum.logo.as_deref(), Some("cosmos"));
        assert_eq!(gutter.github.bg, None);
    }
}
