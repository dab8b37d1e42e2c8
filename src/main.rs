// SPDX-License-Identifier: MPL-2.0
use range_slider::app::{self, paths, Flags};
use tracing_subscriber::EnvFilter;

const HELP: &str = "\
RangeSlider - pick a numeric range with two draggable thumbs

USAGE:
  range_slider [OPTIONS]

OPTIONS:
  -h, --help              Print this help and exit
      --lang <LOCALE>     Interface language (e.g. en-US, fr)
      --config-dir <DIR>  Directory containing settings.toml

ENVIRONMENT:
  RANGE_SLIDER_CONFIG_DIR  Same as --config-dir
  RUST_LOG                 Log filter (default: info)
";

fn parse_flags() -> Result<Option<Flags>, pico_args::Error> {
    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        return Ok(None);
    }

    Ok(Some(Flags {
        lang: args.opt_value_from_str("--lang")?,
        config_dir: args.opt_value_from_str("--config-dir")?,
    }))
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

fn main() -> iced::Result {
    let flags = match parse_flags() {
        Ok(Some(flags)) => flags,
        Ok(None) => {
            print!("{HELP}");
            return Ok(());
        }
        Err(err) => {
            eprintln!("error: {err}\n\n{HELP}");
            std::process::exit(2);
        }
    };

    init_tracing();
    paths::init_cli_override(flags.config_dir.clone());

    app::run(flags)
}
