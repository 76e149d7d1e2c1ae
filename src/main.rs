use anyhow::Result;
use clap::Parser;

use keydesc::cli::CliArgs;

fn main() -> Result<()> {
    keydesc::tracing::init();

    let args = CliArgs::parse();
    tracing::debug!("Running {:?}", args.command);

    let stdout = std::io::stdout();
    args.run(&mut stdout.lock())
}
