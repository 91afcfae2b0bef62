pub mod interface;
pub mod request;
pub mod types;
