use std::sync::Arc;

/// A logger type which is called with various information messages.
pub type InfoLogger = Arc<dyn Fn(&str) + Send + Sync>;

/// Keeps track of environment specific information which influences how ranking jobs are run.
#[derive(Clone)]
pub struct Environment {
    /// An information logger.
    pub logger: InfoLogger,

    /// Amount of jobs which are allowed to run in parallel.
    pub parallelism: usize,
}

impl Environment {
    /// Creates a new instance of `Environment`.
    pub fn new(logger: InfoLogger, parallelism: usize) -> Self {
        Self { logger, parallelism: parallelism.max(1) }
    }

    /// Creates an environment with a logger which discards all messages.
    pub fn silent(parallelism: usize) -> Self {
        Self::new(Arc::new(|_| {}), parallelism)
    }
}

impl Default for Environment {
    fn default() -> Self {
        Self::new(Arc::new(|msg| println!("{msg}")), get_cpus())
    }
}

/// Returns amount of logical cpus.
#[cfg(not(target_arch = "wasm32"))]
pub fn get_cpus() -> usize {
    num_cpus::get()
}

/// Returns amount of logical cpus.
#[cfg(target_arch = "wasm32")]
pub fn get_cpus() -> usize {
    1
}
