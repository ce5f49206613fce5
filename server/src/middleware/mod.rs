pub mod token;

pub use token::{token_middleware, TOKEN_HEADER};
