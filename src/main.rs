// SPDX-License-Identifier: MPL-2.0
use claim_uploader::app::{self, config, paths, Flags};
use tracing_subscriber::{fmt, EnvFilter};

const HELP: &str = "\
Claim Uploader - submit an email address and photos to a claims webhook

USAGE:
  claim_uploader [OPTIONS]

OPTIONS:
  --lang <LOCALE>        UI language (e.g. en-US, fr)
  --endpoint <URL>       Upload endpoint, overrides [upload] endpoint
  --config-dir <PATH>    Directory holding settings.toml
                         (also CLAIM_UPLOADER_CONFIG_DIR)
  --init-config          Write the effective settings.toml and exit
  -h, --help             Print this help

ENVIRONMENT:
  RUST_LOG               Log filter, e.g. claim_uploader=debug
";

struct Args {
    flags: Flags,
    config_dir: Option<String>,
    init_config: bool,
}

/// Parses the command line. `Ok(None)` means help was requested.
///
/// Unknown options and stray values are errors.
fn parse_args(mut args: pico_args::Arguments) -> Result<Option<Args>, pico_args::Error> {
    if args.contains(["-h", "--help"]) {
        return Ok(None);
    }

    let parsed = Args {
        flags: Flags {
            lang: args.opt_value_from_str("--lang")?,
            endpoint: args.opt_value_from_str("--endpoint")?,
        },
        config_dir: args.opt_value_from_str("--config-dir")?,
        init_config: args.contains("--init-config"),
    };

    let remaining = args.finish();
    if !remaining.is_empty() {
        return Err(pico_args::Error::UnusedArgsLeft(
            remaining
                .into_iter()
                .map(|arg| arg.to_string_lossy().into_owned())
                .collect(),
        ));
    }

    Ok(Some(parsed))
}

/// Writes the settings currently in effect, with CLI overrides applied.
fn init_config(flags: &Flags) -> claim_uploader::error::Result<()> {
    let (mut config, warning) = config::load();
    if let Some(err) = warning {
        tracing::warn!(%err, "existing settings could not be read, starting from defaults");
    }
    if flags.lang.is_some() {
        config.general.language = flags.lang.clone();
    }
    config.upload.endpoint = Some(config.resolve_endpoint(flags.endpoint.as_deref()));

    match config::save(&config)? {
        Some(path) => println!("{}", path.display()),
        None => eprintln!("no config directory available on this platform"),
    }
    Ok(())
}

fn main() -> iced::Result {
    fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = match parse_args(pico_args::Arguments::from_env()) {
        Ok(Some(args)) => args,
        Ok(None) => {
            print!("{HELP}");
            return Ok(());
        }
        Err(err) => {
            eprintln!("error: {err}\n\n{HELP}");
            std::process::exit(2);
        }
    };

    paths::init_cli_overrides(args.config_dir);

    if args.init_config {
        if let Err(err) = init_config(&args.flags) {
            eprintln!("error: {err}");
            std::process::exit(1);
        }
        return Ok(());
    }

    app::run(args.flags)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::ffi::OsString;

    fn parse(args: &[&str]) -> Result<Option<Args>, pico_args::Error> {
        parse_args(pico_args::Arguments::from_vec(
            args.iter().map(OsString::from).collect(),
        ))
    }

    #[test]
    fn known_options_are_parsed() {
        let args = parse(&[
            "--lang",
            "fr",
            "--endpoint",
            "http://localhost:5678/hook",
            "--config-dir",
            "/tmp/claims",
            "--init-config",
        ])
        .expect("valid arguments")
        .expect("not a help request");

        assert_eq!(args.flags.lang.as_deref(), Some("fr"));
        assert_eq!(
            args.flags.endpoint.as_deref(),
            Some("http://localhost:5678/hook")
        );
        assert_eq!(args.config_dir.as_deref(), Some("/tmp/claims"));
        assert!(args.init_config);
    }

    #[test]
    fn help_short_circuits() {
        assert!(matches!(parse(&["--help"]), Ok(None)));
        assert!(matches!(parse(&["-h", "--bogus"]), Ok(None)));
    }

    #[test]
    fn leftover_arguments_are_rejected() {
        match parse(&["--lang", "fr", "--bogus", "stray"]) {
            Err(pico_args::Error::UnusedArgsLeft(left)) => {
                assert_eq!(left, vec!["--bogus".to_string(), "stray".to_string()]);
            }
            other => panic!("expected UnusedArgsLeft, got {:?}", other.map(|_| ())),
        }
    }

    #[test]
    fn missing_option_value_is_an_error() {
        assert!(parse(&["--endpoint"]).is_err());
    }
}
