pub mod commands;
pub mod icon;
pub mod utils;

pub use commands::resize::{resize, resize_with_progress};
pub use icon::{icon_file_name, IconError, ProgressEvent};
pub use utils::config::IconConfig;
