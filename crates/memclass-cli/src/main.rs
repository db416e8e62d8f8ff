mod cli;
mod cli_utils;
mod commands;

use anyhow::Result;
use clap::Parser;
use cli::{Args, Command};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging (warn unless RUST_LOG says otherwise)
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("memclass=warn,memclass_core=warn"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let config = cli_utils::load_config(args.config.as_deref(), args.pointer_width)?;

    match args.command {
        Command::Decode { bytes, kind } => commands::decode::run(&config, &bytes, &kind),
        Command::Inspect {
            dump,
            base,
            address,
            name,
            fields,
            json,
        } => {
            let fields = cli_utils::parse_field_specs(&fields)?;
            commands::inspect::run(
                &config,
                &commands::inspect::InspectOptions {
                    dump: &dump,
                    base: &base,
                    address: address.as_deref(),
                    name: name.as_deref(),
                    fields: &fields,
                    json,
                },
            )
        }
        Command::Generate { name, lang, fields } => {
            let fields = cli_utils::parse_field_specs(&fields)?;
            commands::generate::run(&config, &name, lang.into(), &fields)
        }
    }
}
