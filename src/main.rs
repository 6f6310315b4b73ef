//! rCareLog main entrypoint.

use rcarelog::run;
use rcarelog::ui::messages::status_error;

fn main() {
    if let Err(e) = run() {
        eprintln!("{}", status_error(&e));
        std::process::exit(1);
    }
}
