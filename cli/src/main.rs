mod commands;
mod docs;
mod terminal;

use commands::{CommandLine, Commands, about, check, prompt};
use webcheck_common::config::Config;

use crate::terminal::{logging, print};

fn main() -> anyhow::Result<()> {
    let commands = CommandLine::parse_args();

    logging::init_logging();

    let cfg = Config {
        quiet: commands.quiet,
    };

    print::banner(&cfg);

    match commands.command {
        Commands::Check { address } => {
            print::header("checking address", cfg.quiet);
            check::check(&address, &cfg)
        }
        Commands::Prompt => {
            print::header("interactive check", cfg.quiet);
            prompt::prompt(&cfg)
        }
        Commands::About => {
            print::header("about the tool", cfg.quiet);
            about::about(&cfg)
        }
    }
}
