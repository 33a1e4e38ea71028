mod app;
mod args;
mod config;
mod entry;
mod error;
mod logger;
mod positions;
mod replay;
mod shutdown;
mod ui;

use error::AppResult;

fn main() -> AppResult<()> {
    entry::run()
}
