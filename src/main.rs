// SPDX-License-Identifier: MPL-2.0
use env_logger::Env;
use iced_feed::app::{self, Flags};

const HELP: &str = "\
iced_feed

USAGE:
  iced_feed [OPTIONS]

OPTIONS:
  --lang <ID>          UI language (e.g. en-US, fr)
  --config-dir <DIR>   Directory holding settings.toml
  --data-dir <DIR>     Directory receiving downscaled photos
  -h, --help           Print this help
";

fn main() -> iced::Result {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();

    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        return Ok(());
    }

    let flags = Flags {
        lang: opt_value(&mut args, "--lang"),
        config_dir: opt_value(&mut args, "--config-dir"),
        data_dir: opt_value(&mut args, "--data-dir"),
    };

    let remaining = args.finish();
    if !remaining.is_empty() {
        log::warn!("Ignoring unexpected arguments: {remaining:?}");
    }

    app::run(flags)
}

fn opt_value(args: &mut pico_args::Arguments, key: &'static str) -> Option<String> {
    match args.opt_value_from_str(key) {
        Ok(value) => value,
        Err(e) => {
            log::warn!("{key}: {e}");
            None
        }
    }
}
