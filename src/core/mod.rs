pub mod augmenter;
pub mod driver;
pub mod logic;
pub mod mutation;
pub mod source;
pub mod view;
pub mod watcher;
