use clap::Parser;

mod platform;

fn main() -> anyhow::Result<()> {
    let args = platform::CliArgs::parse();
    platform::logging::initialize(args.log, args.log_level.into());
    platform::run_app(&args)
}
