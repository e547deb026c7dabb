mod platform;

use clap::Parser;

fn main() -> anyhow::Result<()> {
    let args = platform::cli::Args::parse();
    platform::logging::initialize(args.log.into(), args.level());
    platform::run_app(args)
}
