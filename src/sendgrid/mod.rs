pub mod client;
pub mod mail;
