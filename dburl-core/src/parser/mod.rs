use url::Url;

use crate::error::ParseError;

/// The fields of a connection URL that survive the rewrite.
///
/// Scheme, host, and port of the source URL are discarded at parse time;
/// the proxy target supplies its own.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConnectionParts {
    pub username: Option<String>,
    pub password: Option<String>,
    pub path: String,
}

pub fn parse_connection_url(input: &str) -> Result<ConnectionParts, ParseError> {
    let url = Url::parse(input)?;

    // `Url::username` yields "" when the authority has no userinfo section;
    // an empty username counts as absent.
    let username = match url.username() {
        "" => None,
        u => Some(u.to_string()),
    };
    let password = url.password().map(str::to_string);

    Ok(ConnectionParts {
        username,
        password,
        // Query and fragment do not carry over to the proxy URL.
        path: url.path().to_string(),
    })
}
