use crate::args;
use crate::error::*;

/// Check the configuration for malformed links and inconsistencies
#[derive(Clone, Debug, PartialEq, Eq, clap::Args)]
pub(crate) struct CheckArgs {
    /// Fail on warnings too
    #[arg(long)]
    pub(crate) strict: bool,

    #[command(flatten)]
    pub(crate) config: args::ConfigArgs,
}

impl CheckArgs {
    pub(crate) fn run(&self) -> Result<()> {
        let site = self.config.load_site()?;
        let issues = site.check();

        for issue in &issues {
            if issue.is_error() {
                error!("{issue}");
            } else {
                warn!("{issue}");
            }
        }

        let failures = issues
            .iter()
            .filter(|i| self.strict || i.is_error())
            .count();
        if failures != 0 {
            anyhow::bail!("{failures} problem(s) found in {}", site.root().display());
        }
        info!("No problems found in {}", site.root().display());

        Ok(())
    }
}
