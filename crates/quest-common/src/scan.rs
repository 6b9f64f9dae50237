use core::fmt;
use core::str::FromStr;

/// Errors produced while scanning solver input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScanError {
    /// The input ended before all expected tokens were read
    UnexpectedEof,
    /// A token could not be parsed as the expected type
    InvalidToken { token: String },
    /// Tokens were left over after the last expected one
    TrailingToken { token: String },
}

impl fmt::Display for ScanError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScanError::UnexpectedEof => write!(f, "unexpected end of input"),
            ScanError::InvalidToken { token } => write!(f, "invalid token {token:?}"),
            ScanError::TrailingToken { token } => write!(f, "trailing token {token:?} after input"),
        }
    }
}

impl std::error::Error for ScanError {}

/// A tokenizer over the whole input text of one solver invocation.
///
/// Judge input is whitespace-separated integers; the scanner hands them
/// out one at a time and reports a categorized error instead of faulting
/// on short or malformed input.
pub struct Scanner<'a> {
    tokens: core::str::SplitAsciiWhitespace<'a>,
}

impl<'a> Scanner<'a> {
    pub fn new(input: &'a str) -> Self {
        Self {
            tokens: input.split_ascii_whitespace(),
        }
    }

    /// Read the next whitespace-separated token and parse it.
    pub fn next<T>(&mut self) -> Result<T, ScanError>
    where
        T: FromStr,
    {
        let token = self.tokens.next().ok_or(ScanError::UnexpectedEof)?;
        token.parse().map_err(|_| ScanError::InvalidToken { token: token.into() })
    }

    /// Read `count` tokens into a vector.
    pub fn next_many<T>(&mut self, count: usize) -> Result<Vec<T>, ScanError>
    where
        T: FromStr,
    {
        (0..count).map(|_| self.next()).collect()
    }

    /// Consume the scanner, checking that no tokens remain.
    pub fn finish(mut self) -> Result<(), ScanError> {
        match self.tokens.next() {
            Some(token) => Err(ScanError::TrailingToken { token: token.into() }),
            None => Ok(()),
        }
    }
}
