pub mod auth;
pub mod connection;
pub mod leads;
pub mod purchases;

pub use connection::Database;
