use anyhow::Result;
use clap::Parser;
use megui_core::cli::Args;

fn main() -> Result<()> {
    let args = Args::parse();
    megui_core::logging::init(&args.log_level)?;
    megui_core::run_cli(&args)
}
