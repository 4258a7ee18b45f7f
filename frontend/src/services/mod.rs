pub mod browser_storage;
pub mod config;
pub mod date_utils;
pub mod dialogs;
pub mod download;
pub mod logging;

pub use browser_storage::BrowserStorage;
