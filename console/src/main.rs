mod convert;
mod utils;

use clap::Parser;
use console::style;
use convert::ConvertArgs;
use utils::UtilsArgs;
use wild::ArgsOs;

#[derive(Parser, Debug)]
#[command(
    author = env!("CARGO_PKG_AUTHORS"),
    version = env!("CARGO_PKG_VERSION"),
    about = env!("CARGO_PKG_DESCRIPTION"),
    long_about = None,)]
struct Cli {
    #[clap(flatten)]
    args:  ConvertArgs,
    #[clap(flatten)]
    utils: UtilsArgs,
}

fn run(cli: Cli) -> anyhow::Result<()> {
    cli.utils.setup()?;
    cli.args.run()
}

fn main() {
    let args: ArgsOs = wild::args_os();
    let cli = Cli::parse_from(args);

    if let Err(err) = run(cli) {
        eprintln!("{} {:#}", style("Error:").red().bold(), err);
        std::process::exit(1);
    }
}
