//! TimeAfterTime main entrypoint.

use timeaftertime::run;
use timeaftertime::ui::messages::error;

fn main() {
    if let Err(e) = run() {
        error(format!("Error: {}", e));
        std::process::exit(1);
    }
}
