pub mod cli;
pub mod error;
pub mod preview;
pub mod request;
