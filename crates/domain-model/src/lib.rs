pub mod file_tree;
pub mod scan_result;
pub mod display_mode;

pub use file_tree::*;
pub use scan_result::*;
pub use display_mode::*;
