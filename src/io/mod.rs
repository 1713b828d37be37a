pub mod config_io;
pub mod loader;
pub mod paths;
