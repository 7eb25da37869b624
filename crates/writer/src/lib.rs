pub mod write;

pub use write::*;
