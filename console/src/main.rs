mod check;
mod loader;
mod regions;
mod utils;
mod writer;

use check::CheckArgs;
use clap::{
    Parser,
    Subcommand,
};
use regions::RegionsArgs;
use utils::UtilsArgs;

#[derive(Parser, Debug)]
#[command(
    author = env!("CARGO_PKG_AUTHORS"),
    version = env!("CARGO_PKG_VERSION"),
    about = env!("CARGO_PKG_DESCRIPTION"),
    long_about = None,)]
struct Cli {
    #[command(subcommand)]
    command: MainMenu,
}

#[derive(Subcommand, Debug)]
enum MainMenu {
    /// Write the non-overlapping coding regions of every record.
    Regions {
        #[clap(flatten)]
        utils: UtilsArgs,
        #[clap(flatten)]
        args:  RegionsArgs,
    },

    /// Summarize the coding features of every record.
    Check {
        #[clap(flatten)]
        utils: UtilsArgs,
        #[clap(flatten)]
        args:  CheckArgs,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        MainMenu::Regions { utils, args } => {
            utils.setup()?;
            args.run(&utils)?;
        },
        MainMenu::Check { utils, args } => {
            utils.setup()?;
            args.run(&utils)?;
        },
    }
    Ok(())
}
