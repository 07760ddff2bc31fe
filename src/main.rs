use prooforia::app::{self, Flags};
use std::path::PathBuf;

fn main() -> iced::Result {
    let mut args = pico_args::Arguments::from_env();

    let flags = Flags {
        api_url: args.opt_value_from_str("--api-url").unwrap_or(None),
        config_path: args
            .opt_value_from_str::<_, PathBuf>("--config")
            .unwrap_or(None),
    };

    app::run(flags)
}
