//! Prints whether `1` is in `[1, 2, 3]`, first as `i64` and then as `f64`.
//!
//! Set `MEMBERSCAN_LOG` to an `EnvFilter` directive to see diagnostics on stderr.

use memberscan::{demo, logging};
use tracing::error;

fn main() {
    if let Err(err) = logging::setup_logger() {
        eprintln!("failed to initialize logging: {err}");
    }

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    if let Err(err) = demo::run(&mut out) {
        error!("membership demonstration failed: {err}");
    }
}
