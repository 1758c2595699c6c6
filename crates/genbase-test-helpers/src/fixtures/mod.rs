//! Test fixtures: randomized data helpers, an in-memory text environment and
//! the punctuation dataset used across the test suites.
pub mod environment;
pub mod punctuation;
pub mod random;

pub use environment::TextEnvironment;
pub use random::{corrupt, corrupt_all, random_combinations};

/// Route `log` output to the test harness. The filter is read from
/// `GENBASE_LOG` and defaults to `warn`. Safe to call from every test.
pub fn init_logging() {
    let _ = env_logger::Builder::default()
        .parse_env(env_logger::Env::default().filter_or("GENBASE_LOG", "warn"))
        .is_test(true)
        .try_init();
}
