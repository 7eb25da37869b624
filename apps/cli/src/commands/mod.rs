pub mod interactive;
pub mod outline;
