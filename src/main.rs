// SPDX-License-Identifier: MPL-2.0
use photogrid::app::{self, Flags};
use std::path::PathBuf;

fn main() -> iced::Result {
    let args = pico_args::Arguments::from_env();

    let flags = Flags {
        album_dir: args
            .finish()
            .into_iter()
            .next()
            .map(PathBuf::from),
    };

    app::run(flags)
}
