//! Logger setup shared by the runner and the demos.
//!
//! Library code only talks to the `log` facade. Binaries call [`init`] once;
//! the filter comes from `RUST_LOG` and defaults to `warn`, so demo output on
//! stdout is not interleaved with diagnostics (those go to stderr).

use env_logger::Env;

pub fn init() {
    // A second init (e.g. from a test harness) is not an error worth surfacing.
    let _ = env_logger::Builder::from_env(Env::default().default_filter_or("warn"))
        .format_timestamp(None)
        .try_init();
}
