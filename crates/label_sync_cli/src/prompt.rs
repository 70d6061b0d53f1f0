//! Interactive prompts for values not given on the command line.

use std::io::{self, Write};

use label_sync_core::RepositoryId;
use secrecy::SecretString;

use crate::errors::Error;

#[cfg(test)]
#[path = "prompt_tests.rs"]
mod tests;

pub const TOKEN_PROMPT: &str = "GitHub API Token: ";
pub const REPOSITORY_PROMPT: &str = "GitHub Repo (owner/repo): ";

/// Prints `request` and reads one line from standard input.
pub fn ask_user_for_value(request: &str) -> Result<String, Error> {
    print!("{}", request);

    io::stdout().flush().map_err(|_| Error::StdOutFlushFailed)?;

    let mut temp = String::new();
    io::stdin().read_line(&mut temp).map_err(Error::ReadInput)?;
    Ok(temp.trim().to_string())
}

/// Returns the token from the command line or environment, asking for it otherwise.
pub fn resolve_token(
    given: Option<&str>,
    ask: &dyn Fn(&str) -> Result<String, Error>,
) -> Result<SecretString, Error> {
    let token = match given.map(str::trim).filter(|t| !t.is_empty()) {
        Some(token) => token.to_string(),
        None => ask(TOKEN_PROMPT)?,
    };

    if token.is_empty() {
        return Err(Error::InvalidArguments(
            "a GitHub API token is required".to_string(),
        ));
    }

    Ok(SecretString::from(token))
}

/// Returns the repository from the command line, asking for it otherwise.
pub fn resolve_repository(
    given: Option<&str>,
    ask: &dyn Fn(&str) -> Result<String, Error>,
) -> Result<RepositoryId, Error> {
    let value = match given {
        Some(value) => value.to_string(),
        None => ask(REPOSITORY_PROMPT)?,
    };

    Ok(value.parse()?)
}
