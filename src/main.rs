//! timecard main entrypoint.

use timecard::run;
use timecard::ui::messages;

fn main() {
    if let Err(e) = run() {
        messages::error(e);
        std::process::exit(1);
    }
}
