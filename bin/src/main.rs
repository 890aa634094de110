use std::{path::PathBuf, process::ExitCode};

use bidict_cli::{
    commands::{self, Command, Policy},
    input,
};
use clap::Parser;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Forward and inverse lookups over a JSON file of one-to-one pairs.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// JSON file holding the pairs. Reads stdin when omitted.
    #[arg(env = "BIDICT_FILE", long)]
    file: Option<PathBuf>,

    /// How colliding pairs in the input are handled.
    #[arg(env = "BIDICT_POLICY", long, value_enum, default_value_t = Policy::Default)]
    policy: Policy,

    #[command(subcommand)]
    command: Command,
}

fn main() -> ExitCode {
    if std::env::var_os("RUST_LOG").is_none() {
        std::env::set_var("RUST_LOG", "info");
    }
    let args: Args = Args::parse();
    tracing_subscriber::registry().with(fmt::layer().with_writer(std::io::stderr)).with(EnvFilter::from_default_env()).init();

    let result = input::read_pairs(args.file.as_deref()).and_then(|pairs| commands::run(&args.command, pairs, args.policy));
    match result {
        Ok(output) => {
            println!("{output}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            log::error!("[Main] {:?} failed: {err}", args.command);
            ExitCode::from(u8::from(err))
        }
    }
}
