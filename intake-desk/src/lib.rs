pub mod config;
pub mod session;

pub use config::DeskConfig;
pub use session::{ReviewRow, Session, Welcome};
