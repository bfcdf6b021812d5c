use std::{env, io};

mod app;
mod cli;
mod clipboard;
mod constants;
mod domain;
mod storage;

fn main() -> Result<(), io::Error> {
    if env::args().len() > 1 {
        cli::run_cli();
        return Ok(());
    }

    app::run_ui()
}
