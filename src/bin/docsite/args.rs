use std::env;
use std::path;

use crate::error::*;

#[derive(Clone, Debug, PartialEq, Eq, clap::Args)]
pub(crate) struct ConfigArgs {
    /// Config file to use [default: _docsite.yml]
    #[arg(short, long, value_name = "FILE", help_heading = "Config")]
    pub(crate) config: Option<path::PathBuf>,

    /// URL path the site is served under [default: document's `base` or /]
    #[arg(long, value_name = "PATH", env = "DOCSITE_BASE", help_heading = "Config")]
    pub(crate) base: Option<String>,

    /// Base path set by existing VuePress deploy pipelines; `--base` wins
    #[arg(long, value_name = "PATH", env = "VUEPRESS_BASE", hide = true)]
    pub(crate) vuepress_base: Option<String>,
}

impl ConfigArgs {
    pub(crate) fn load_config(&self) -> Result<docsite::SiteConfig> {
        let config = if let Some(config_path) = self.config.as_deref() {
            debug!("Using config file `{}`", config_path.display());
            docsite::SiteConfig::from_file(config_path)?
        } else {
            let cwd = env::current_dir()?;
            docsite::SiteConfig::from_cwd(cwd)?
        };
        Ok(config)
    }

    pub(crate) fn load_site(&self) -> Result<docsite::Site> {
        let config = self.load_config()?;
        docsite::Site::from_config(config, self.base_override())
    }

    fn base_override(&self) -> Option<&str> {
        let base = self.base.as_deref().filter(|b| !b.is_empty());
        base.or_else(|| self.vuepress_base.as_deref().filter(|b| !b.is_empty()))
    }
}
