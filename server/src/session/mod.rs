pub mod manager;

pub use manager::{SessionManager, DEFAULT_TOKEN_VALIDITY, TOKEN_LENGTH};
