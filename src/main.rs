//! pawlogger main entrypoint.

use pawlogger::run;

fn main() {
    println!();
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
