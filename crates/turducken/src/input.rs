//! Fusion input -- raw text or an explicit token list, resolved once into
//! lowercase tokens.

use crate::error::{Result, TurduckenError};
use crate::words::{Tokenizer, Words};
use serde_json::Value;

/// Anything that can be fused: raw text to be split into words, or tokens
/// that are used as given.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Turduckenable {
    /// Raw text, split into words before fusion.
    Text(String),
    /// Tokens used as given, one per entry.
    Tokens(Vec<String>),
}

impl Turduckenable {
    /// Resolve into lowercase tokens, splitting `Text` with `tokenizer`.
    ///
    /// `Tokens` are never re-split; a token containing spaces stays one token.
    pub fn into_tokens_with<T: Tokenizer + ?Sized>(self, tokenizer: &T) -> Vec<String> {
        let tokens = match self {
            Turduckenable::Text(text) => tokenizer.tokenize(&text),
            Turduckenable::Tokens(tokens) => tokens,
        };
        tokens.iter().map(|token| token.to_lowercase()).collect()
    }

    /// Parse fusion input from a JSON document.
    ///
    /// # Errors
    ///
    /// Returns `TurduckenError::JsonParse` if `json` is not valid JSON, and
    /// `TurduckenError::InvalidArgument` if it is not a string or an array
    /// of strings.
    ///
    /// # Examples
    ///
    /// ```
    /// use turducken::Turduckenable;
    ///
    /// let input = Turduckenable::from_json(r#"["turkey","duck"]"#).unwrap();
    /// assert_eq!(input, Turduckenable::from(vec!["turkey", "duck"]));
    /// assert!(Turduckenable::from_json("42").is_err());
    /// ```
    pub fn from_json(json: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(json)?;
        Self::try_from(&value)
    }
}

impl TryFrom<&Value> for Turduckenable {
    type Error = TurduckenError;

    fn try_from(value: &Value) -> Result<Self> {
        match value {
            Value::String(text) => Ok(Turduckenable::Text(text.clone())),
            Value::Array(items) => items
                .iter()
                .enumerate()
                .map(|(index, item)| match item {
                    Value::String(token) => Ok(token.clone()),
                    other => Err(invalid(format!(
                        "expected a string at index {index}, got {}",
                        json_type(other)
                    ))),
                })
                .collect::<Result<Vec<_>>>()
                .map(Turduckenable::Tokens),
            other => Err(invalid(format!(
                "expected a string or an array of strings, got {}",
                json_type(other)
            ))),
        }
    }
}

fn invalid(message: String) -> TurduckenError {
    tracing::debug!(%message, "rejected fusion input");
    TurduckenError::InvalidArgument(message)
}

fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

impl From<&str> for Turduckenable {
    fn from(text: &str) -> Self {
        Turduckenable::Text(text.to_owned())
    }
}

impl From<String> for Turduckenable {
    fn from(text: String) -> Self {
        Turduckenable::Text(text)
    }
}

impl From<&String> for Turduckenable {
    fn from(text: &String) -> Self {
        Turduckenable::Text(text.clone())
    }
}

impl From<Vec<String>> for Turduckenable {
    fn from(tokens: Vec<String>) -> Self {
        Turduckenable::Tokens(tokens)
    }
}

impl From<Vec<&str>> for Turduckenable {
    fn from(tokens: Vec<&str>) -> Self {
        Self::from(tokens.as_slice())
    }
}

impl From<&[&str]> for Turduckenable {
    fn from(tokens: &[&str]) -> Self {
        Turduckenable::Tokens(tokens.iter().map(|&t| t.to_owned()).collect())
    }
}

impl From<&[String]> for Turduckenable {
    fn from(tokens: &[String]) -> Self {
        Turduckenable::Tokens(tokens.to_vec())
    }
}

impl<const N: usize> From<[&str; N]> for Turduckenable {
    fn from(tokens: [&str; N]) -> Self {
        Self::from(tokens.as_slice())
    }
}

/// Resolve `input` into lowercase tokens using the default [`Words`] tokenizer.
///
/// # Examples
///
/// ```
/// use turducken::normalize;
///
/// assert_eq!(normalize("Turkey-Duck chicken"), vec!["turkey", "duck", "chicken"]);
/// assert_eq!(normalize(["Big Bird"]), vec!["big bird"]);
/// assert!(normalize("").is_empty());
/// ```
pub fn normalize(input: impl Into<Turduckenable>) -> Vec<String> {
    input.into().into_tokens_with(&Words)
}
