use std::fs;
use std::io::Write;
use std::path;

use anyhow::Context as _;

use crate::args;
use crate::error::*;

/// Write the resolved configuration for the site builder
#[derive(Clone, Debug, PartialEq, Eq, clap::Args)]
pub(crate) struct ExportArgs {
    /// Output format
    #[arg(long, value_enum, default_value_t = ExportFormat::Json)]
    pub(crate) format: ExportFormat,

    /// Write to FILE instead of stdout
    #[arg(short, long, value_name = "FILE")]
    pub(crate) output: Option<path::PathBuf>,

    #[command(flatten)]
    pub(crate) config: args::ConfigArgs,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, clap::ValueEnum)]
pub(crate) enum ExportFormat {
    Yaml,
    Json,
    Toml,
}

impl From<ExportFormat> for docsite::Format {
    fn from(other: ExportFormat) -> Self {
        match other {
            ExportFormat::Yaml => Self::Yaml,
            ExportFormat::Json => Self::Json,
            ExportFormat::Toml => Self::Toml,
        }
    }
}

impl ExportArgs {
    pub(crate) fn run(&self) -> Result<()> {
        let site = self.config.load_site()?;
        let rendered = site.export(self.format.into())?;

        match self.output.as_deref() {
            Some(output) => {
                fs::write(output, rendered)
                    .with_context(|| format!("Failed to write {}", output.display()))?;
                info!("Exported configuration to {}", output.display());
            }
            None => {
                anstream::stdout().write_all(rendered.as_bytes())?;
            }
        }

        Ok(())
    }
}
