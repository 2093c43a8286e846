pub mod config;
pub mod load;
pub mod loader;
pub mod logging;
pub mod shutdown;
pub mod surface;
pub mod ui;
