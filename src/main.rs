// SPDX-License-Identifier: MPL-2.0
use showreel::app::{self, paths, Flags};

const HELP: &str = "\
showreel

USAGE:
  showreel [OPTIONS]

OPTIONS:
  --lang <ID>          Interface language (e.g. en-US, cs)
  --content <FILE>     Portfolio TOML file replacing the built-in content
  --config-dir <DIR>   Directory holding settings.toml
  -h, --help           Print this help
";

fn main() -> iced::Result {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn,showreel=info"))
        .init();

    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        return Ok(());
    }

    let flags = Flags {
        lang: parse_option(&mut args, "--lang"),
        content_path: parse_option(&mut args, "--content"),
        config_dir: parse_option(&mut args, "--config-dir"),
    };

    let remaining = args.finish();
    if !remaining.is_empty() {
        log::debug!("Ignoring extra arguments: {remaining:?}");
    }

    paths::init_cli_override(flags.config_dir.clone());
    app::run(flags)
}

fn parse_option(args: &mut pico_args::Arguments, key: &'static str) -> Option<String> {
    args.opt_value_from_str(key).unwrap_or_else(|err| {
        log::warn!("Ignoring invalid {key}: {err}");
        None
    })
}
