// SPDX-License-Identifier: MPL-2.0
use inkfolio::app::{self, Flags};
use inkfolio::config::paths;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

const HELP: &str = "\
inkfolio - tattoo studio portfolio, budget estimator and contact desk

USAGE:
  inkfolio [OPTIONS]

OPTIONS:
  --lang <LOCALE>       Interface language (en-US, pt-BR)
  --config-dir <DIR>    Directory holding settings.toml
  --catalog <FILE>      Portfolio and budget data replacing the bundled one
  -h, --help            Print this help
";

fn main() -> iced::Result {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("inkfolio=info")),
        )
        .init();

    let mut args = pico_args::Arguments::from_env();
    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        return Ok(());
    }

    let flags = match parse_flags(&mut args) {
        Ok(flags) => flags,
        Err(err) => {
            eprintln!("error: {err}\n\n{HELP}");
            std::process::exit(2);
        }
    };

    let leftover = args.finish();
    if !leftover.is_empty() {
        tracing::warn!(?leftover, "ignoring unknown arguments");
    }

    paths::init_cli_override(flags.config_dir.clone());
    app::run(flags)
}

fn parse_flags(args: &mut pico_args::Arguments) -> Result<Flags, pico_args::Error> {
    Ok(Flags {
        lang: args.opt_value_from_str("--lang")?,
        catalog: args.opt_value_from_str::<_, PathBuf>("--catalog")?,
        config_dir: args.opt_value_from_str("--config-dir")?,
    })
}
