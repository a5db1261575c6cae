use crate::args;
use crate::error::*;

/// Print site debug information
#[derive(Clone, Debug, PartialEq, Eq, clap::Subcommand)]
pub(crate) enum DebugCommands {
    /// Prints post-processed config
    Config {
        #[command(flatten)]
        config: args::ConfigArgs,
    },

    /// Prints the sidebar navigation, in order
    Nav {
        #[command(flatten)]
        config: args::ConfigArgs,
    },
}

impl DebugCommands {
    pub(crate) fn run(&self) -> Result<()> {
        match self {
            Self::Config { config } => {
                let site = config.load_site()?;
                println!("# root: {}", site.root().display());
                println!("# base: {}", site.base());
                print!("{}", site.config());
            }
            Self::Nav { config } => {
                let site = config.load_site()?;
                for section in &site.config().theme_config.sidebar.nav {
                    println!("{}", section.title);
                    for item in &section.children {
                        let path = item.path.as_deref().unwrap_or("");
                        let marker = if item.is_external() { " (external)" } else { "" };
                        println!("  {}: {path}{marker}", item.title);
                    }
                }
            }
        }

        Ok(())
    }
}
