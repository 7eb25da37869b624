pub mod label;
pub mod markdown;
pub mod pipeline;

pub use label::*;
pub use markdown::*;
pub use pipeline::*;
