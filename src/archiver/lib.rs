pub mod client;
pub(crate) mod config;
pub mod error;
pub mod fetch;
pub mod history;
pub mod sync;
pub mod writer;
