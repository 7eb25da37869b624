pub mod scanner;
pub mod filters;

pub use scanner::find_files;
pub use filters::*;
