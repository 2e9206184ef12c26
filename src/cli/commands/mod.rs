pub mod annotate;
pub mod calc;
pub mod config;
pub mod show;
pub mod watch;
