use std::io::Write;

use clap::Parser;

mod args;
mod check;
mod debug;
mod error;
mod export;
mod init;

use crate::error::*;

fn main() {
    human_panic::setup_panic!();
    let result = run();
    proc_exit::exit(result);
}

fn run() -> proc_exit::ExitResult {
    let cli = Cli::parse();

    cli.color.write_global();
    init_logging(&cli.verbose);

    cli.command
        .run()
        .map_err(|e| proc_exit::Code::FAILURE.with_message(format!("{e:#}")))
}

/// Author and check documentation site configuration
#[derive(Clone, Debug, clap::Parser)]
#[command(name = "docsite", version, about)]
#[command(propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    #[command(flatten)]
    verbose: clap_verbosity_flag::Verbosity<clap_verbosity_flag::InfoLevel>,

    #[command(flatten)]
    color: colorchoice_clap::Color,
}

#[derive(Clone, Debug, PartialEq, Eq, clap::Subcommand)]
enum Command {
    Init(init::InitArgs),
    Check(check::CheckArgs),
    Export(export::ExportArgs),
    #[command(subcommand)]
    Debug(debug::DebugCommands),
}

impl Command {
    fn run(&self) -> Result<()> {
        match self {
            Self::Init(cmd) => cmd.run(),
            Self::Check(cmd) => cmd.run(),
            Self::Export(cmd) => cmd.run(),
            Self::Debug(cmd) => cmd.run(),
        }
    }
}

fn init_logging(verbose: &clap_verbosity_flag::Verbosity<clap_verbosity_flag::InfoLevel>) {
    let mut builder = env_logger::Builder::new();
    builder.filter_level(verbose.log_level_filter());
    builder.target(env_logger::Target::Pipe(Box::new(anstream::stderr())));
    builder.format(|buf, record| {
        let level = format!("[{}]", record.level()).to_lowercase();
        writeln!(buf, "{level:8} {}", record.args())
    });
    builder.init();
}
