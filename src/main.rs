// SPDX-License-Identifier: MPL-2.0
use number2letter::app::{self, paths, Flags};
use tracing_subscriber::EnvFilter;

const HELP: &str = "\
Number2Letter - spell numbers out in words

USAGE:
  number2letter [OPTIONS]

OPTIONS:
  --lang <LANG>        Interface language (e.g. en-US, fr, mg)
  --locale <LOCALE>    Initial conversion locale: mg-MG, fr-FR or en-IN
  --config-dir <DIR>   Directory holding settings.toml
  --i18n-dir <DIR>     Directory with extra or replacement .ftl files
  -h, --help           Print this help and exit

ENVIRONMENT:
  NUMBER2LETTER_CONFIG_DIR   Config directory (overridden by --config-dir)
  RUST_LOG                   Log filter, e.g. number2letter=debug
";

fn parse_flags() -> Result<Option<Flags>, pico_args::Error> {
    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        return Ok(None);
    }

    let flags = Flags {
        lang: args.opt_value_from_str("--lang")?,
        locale: args.opt_value_from_str("--locale")?,
        i18n_dir: args.opt_value_from_str("--i18n-dir")?,
        config_dir: args.opt_value_from_str("--config-dir")?,
    };

    let remaining = args.finish();
    if !remaining.is_empty() {
        tracing::warn!(?remaining, "ignoring unexpected arguments");
    }

    Ok(Some(flags))
}

fn main() -> iced::Result {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let flags = match parse_flags() {
        Ok(Some(flags)) => flags,
        Ok(None) => {
            print!("{HELP}");
            return Ok(());
        }
        Err(error) => {
            eprintln!("error: {error}\n\n{HELP}");
            std::process::exit(2);
        }
    };

    paths::init_cli_overrides(flags.config_dir.clone());
    app::run(flags)
}
