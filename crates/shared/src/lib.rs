pub mod boundary;
pub mod filter;
pub mod map;
pub mod models;
pub mod session;
pub mod toast;
