#[macro_use]
extern crate lazy_static;

use std::io;

use log::error;

use crate::calculator::Calculator;

mod calculator;
mod command;
mod config;
mod error;

fn main() {
    env_logger::init();

    let config: config::Config = config::figment()
        .extract()
        .expect("Failed to load config");

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut calculator = Calculator::new(stdin.lock(), stdout.lock(), config.session);

    if let Err(e) = calculator.run() {
        error!("Calculator failed: {}", e);
        std::process::exit(1);
    }
}
