use clap::Args;
use log::LevelFilter;

#[derive(Args, Debug, Clone)]
pub(crate) struct UtilsArgs {
    #[arg(
        short,
        long,
        action = clap::ArgAction::Count,
        conflicts_with = "quiet",
        help = "Increase logging verbosity (-v info, -vv debug, -vvv trace)."
    )]
    verbose: u8,

    #[arg(short, long, help = "Only report errors.")]
    quiet: bool,
}

impl UtilsArgs {
    pub fn level(&self) -> LevelFilter {
        if self.quiet {
            return LevelFilter::Error;
        }
        match self.verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    }

    /// Installs the global logger. `RUST_LOG` directives are applied on top
    /// of the level picked from the flags.
    pub fn setup(&self) -> anyhow::Result<()> {
        let mut builder = pretty_env_logger::formatted_builder();
        builder.filter_level(self.level());
        if let Ok(filters) = std::env::var("RUST_LOG") {
            builder.parse_filters(&filters);
        }
        builder.try_init()?;
        Ok(())
    }
}
