// This is extremely safe, it says so right here!
#![forbid(unsafe_code)]

use heck::ToKebabCase;
use securefmt::Debug;

use crate::{date::PostDate, error::DnblogError, helpers::MAX_LABEL_LEN};

/// A post as read from disk.
///
/// The file format is the title on one line, the date on the next, an
/// empty line, and then the post text:
///
/// ```text
/// My first post
/// 2019-08-30
///
/// Hello, world!
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostSource {
    pub title: String,
    pub date: Option<PostDate>,
    #[sensitive]
    pub text: String,
}

impl PostSource {
    /// Parse a post file with a title/date header.
    /// An empty date line leaves the date unset.
    ///
    /// # Errors
    /// This function will return an error if the header is missing or the date is invalid
    pub fn parse(content: &str) -> Result<Self, DnblogError> {
        let mut parts = content.splitn(3, '\n');
        let title = parts.next().map(str::trim).unwrap_or_default();
        let date = parts
            .next()
            .ok_or_else(|| DnblogError::InvalidPost("missing date line".into()))?
            .trim();
        let rest = parts
            .next()
            .ok_or_else(|| DnblogError::InvalidPost("missing empty line after header".into()))?;

        if title.is_empty() {
            return Err(DnblogError::InvalidPost("missing title".into()));
        }

        let text = rest
            .strip_prefix("\r\n")
            .or_else(|| rest.strip_prefix('\n'))
            .ok_or_else(|| DnblogError::InvalidPost("missing empty line after header".into()))?;

        let date = if date.is_empty() {
            None
        } else {
            Some(date.parse()?)
        };

        Ok(Self {
            title: title.to_string(),
            date,
            text: text.to_string(),
        })
    }

    /// Treat the whole file as post text, with the title supplied separately.
    #[must_use]
    pub fn raw(title: &str, text: &str) -> Self {
        Self {
            title: title.to_string(),
            date: None,
            text: text.to_string(),
        }
    }
}

/// Derive a post ID from its title: `My First Post!` becomes `my-first-post`.
///
/// # Errors
/// This function will return an error if the title has no usable characters
pub fn derive_id(title: &str) -> Result<String, DnblogError> {
    let id = title
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || c.is_whitespace() || *c == '-' || *c == '_')
        .collect::<String>()
        .to_kebab_case();

    if id.is_empty() {
        return Err(DnblogError::InvalidPost(format!(
            "cannot derive a post ID from title '{title}'"
        )));
    }

    validate_id(&id)?;
    Ok(id)
}

/// Check that a post ID can be used as a single DNS label: 1 to 63
/// characters of `a-z`, `0-9` and `-`, not starting or ending with `-`.
///
/// # Errors
/// This function will return an error if the ID is not a valid label
pub fn validate_id(id: &str) -> Result<(), DnblogError> {
    if id.is_empty() {
        return Err(DnblogError::InvalidPost("post ID must not be empty".into()));
    }
    if id.len() > MAX_LABEL_LEN {
        return Err(DnblogError::InvalidPost(format!(
            "post ID '{id}' is {} characters, at most {MAX_LABEL_LEN} allowed",
            id.len()
        )));
    }
    if let Some(c) = id
        .chars()
        .find(|c| !(c.is_ascii_lowercase() || c.is_ascii_digit() || *c == '-'))
    {
        return Err(DnblogError::InvalidPost(format!(
            "post ID '{id}' contains '{c}', only a-z, 0-9 and '-' are allowed"
        )));
    }
    if id.starts_with('-') || id.ends_with('-') {
        return Err(DnblogError::InvalidPost(format!(
            "post ID '{id}' must not start or end with '-'"
        )));
    }
    Ok(())
}
