// SPDX-License-Identifier: MPL-2.0
use iced_reveal::app::{self, paths, Flags};
use iced_reveal::logging;

fn main() -> iced::Result {
    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        print!("{}", app::USAGE);
        return Ok(());
    }

    let flags = match Flags::from_args(args) {
        Ok(flags) => flags,
        Err(message) => {
            eprintln!("error: {message}\n\n{}", app::USAGE);
            std::process::exit(2);
        }
    };

    if !logging::init() {
        eprintln!("warning: another tracing subscriber is already installed");
    }
    paths::init_cli_overrides(flags.config_dir.clone());

    app::run(flags)
}
