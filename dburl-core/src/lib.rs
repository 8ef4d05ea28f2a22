#![forbid(unsafe_code)]

pub mod error;
pub mod parser;
pub mod rewrite;

pub use crate::error::{ParseError, RewriteError};
pub use crate::parser::{parse_connection_url, ConnectionParts};
pub use crate::rewrite::{
    local_proxy_url, rewrite_connection_url, DEFAULT_PROXY_PORT, PROXY_HOST, PROXY_SCHEME,
};
