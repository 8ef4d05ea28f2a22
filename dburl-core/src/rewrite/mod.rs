use crate::error::RewriteError;
use crate::parser::{parse_connection_url, ConnectionParts};

pub const PROXY_SCHEME: &str = "postgresql";
pub const PROXY_HOST: &str = "127.0.0.1";
pub const DEFAULT_PROXY_PORT: u16 = 5432;

/// Serializes `parts` against the local proxy target.
///
/// Credentials and path are copied verbatim, percent-encoding included.
/// An absent username or password renders as the literal text `None`.
pub fn local_proxy_url(parts: &ConnectionParts, port: u16) -> String {
    format!(
        "{PROXY_SCHEME}://{}:{}@{PROXY_HOST}:{port}{}",
        parts.username.as_deref().unwrap_or("None"),
        parts.password.as_deref().unwrap_or("None"),
        parts.path,
    )
}

/// Parses `input` and serializes it against the proxy target in one call.
pub fn rewrite_connection_url(input: &str, port: u16) -> Result<String, RewriteError> {
    let parts = parse_connection_url(input)?;
    Ok(local_proxy_url(&parts, port))
}
