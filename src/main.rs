//! rWorkhours main entrypoint.

use rworkhours::run;
use rworkhours::ui::messages::error;

fn main() {
    if let Err(e) = run() {
        error(format!("Error: {}", e));
        std::process::exit(1);
    }
}
