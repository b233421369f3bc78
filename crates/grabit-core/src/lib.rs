pub mod config;
pub mod logging;

pub mod console;
pub mod options;
pub mod pool;
pub mod progress;
pub mod queue;
pub mod resolver;
pub mod runner;
pub mod session;
pub mod target;
