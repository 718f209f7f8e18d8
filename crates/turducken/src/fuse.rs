//! Turducken fusion -- bisect every token and keep one half of each.
//!
//! Given `n` tokens, the token at index `i` keeps its front or back half
//! depending on where `i` falls relative to the real-valued midpoint `n / 2`:
//!
//! | Policy    | Front half kept when | Back half kept when |
//! |-----------|----------------------|---------------------|
//! | Forward   | `i < n/2`            | `i >= n/2`          |
//! | Inverse   | `i > n/2`            | `i <= n/2`          |
//!
//! The inverse boundary is configurable through [`InverseBoundary`]; the
//! default is the inclusive rule above. All comparisons are carried out on
//! doubled integers (`2 * i < n`), never on floats.
//!
//! # Example
//! ```
//! use turducken::{fuse_forward, fuse_inverse};
//!
//! assert_eq!(fuse_forward(["turkey", "duck", "chicken"]), "turducken");
//! assert_eq!(fuse_inverse(["turkey", "duck", "chicken"]), "keyckchi");
//! ```

use crate::error::Result;
use crate::input::Turduckenable;
use crate::words::{Tokenizer, Words};
use serde::{Deserialize, Serialize};

/// The two halves of a token, split at `floor(chars / 2)`.
///
/// `front` holds `floor(n / 2)` characters and `back` the remaining
/// `ceil(n / 2)`, so `front + back` is always the original token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TokenHalves<'a> {
    pub front: &'a str,
    pub back: &'a str,
}

impl<'a> TokenHalves<'a> {
    pub fn get(&self, half: Half) -> &'a str {
        match half {
            Half::Front => self.front,
            Half::Back => self.back,
        }
    }
}

/// Split `token` in half, counting Unicode scalar values.
///
/// # Examples
///
/// ```
/// use turducken::bisect;
///
/// let halves = bisect("chicken");
/// assert_eq!((halves.front, halves.back), ("chi", "cken"));
/// assert_eq!(bisect("").front, "");
/// ```
pub fn bisect(token: &str) -> TokenHalves<'_> {
    let mid = token.chars().count() / 2;
    let at = token
        .char_indices()
        .nth(mid)
        .map_or(token.len(), |(offset, _)| offset);
    let (front, back) = token.split_at(at);
    TokenHalves { front, back }
}

/// Which half of a token is kept.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Half {
    /// The first `floor(n / 2)` characters.
    Front,
    /// The remaining `ceil(n / 2)` characters.
    Back,
}

/// Half-selection policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fusion {
    /// Front halves before the midpoint, back halves after ("turducken").
    Forward,
    /// The opposite selection ("keyckchi").
    Inverse,
}

impl Fusion {
    /// The half kept by the token at `index` in a sequence of `len` tokens.
    pub fn select(self, index: usize, len: usize, options: &FuseOptions) -> Half {
        let doubled = 2 * index;
        let front = match (self, options.inverse_boundary) {
            (Fusion::Forward, _) => doubled < len,
            (Fusion::Inverse, InverseBoundary::Inclusive) => doubled > len,
            (Fusion::Inverse, InverseBoundary::Complement) => doubled >= len,
        };
        if front {
            Half::Front
        } else {
            Half::Back
        }
    }
}

/// Where the inverse fusion switches from back halves to front halves.
///
/// The rules only disagree for an even number of tokens, at index `n / 2`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InverseBoundary {
    /// Back half while `i <= n/2`. The midpoint token keeps its back half
    /// under both policies.
    #[default]
    Inclusive,
    /// Back half while `i < n/2`: every token keeps the opposite half from
    /// the forward fusion.
    Complement,
}

/// Fusion settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FuseOptions {
    pub inverse_boundary: InverseBoundary,
}

impl FuseOptions {
    /// Load options from JSON, e.g. `{"inverse_boundary": "complement"}`.
    /// Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

/// The full pipeline: tokenize, lowercase, bisect, select, join.
#[derive(Debug, Clone, Default)]
pub struct Fuser<T = Words> {
    tokenizer: T,
    options: FuseOptions,
}

impl Fuser<Words> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: FuseOptions) -> Self {
        Self {
            tokenizer: Words,
            options,
        }
    }
}

impl<T: Tokenizer> Fuser<T> {
    /// Use `tokenizer` for raw text input, keeping the current options.
    pub fn with_tokenizer<U: Tokenizer>(self, tokenizer: U) -> Fuser<U> {
        Fuser {
            tokenizer,
            options: self.options,
        }
    }

    pub fn options(&self) -> &FuseOptions {
        &self.options
    }

    /// Fuse `input` under `fusion`. Empty input yields an empty string.
    pub fn fuse(&self, fusion: Fusion, input: impl Into<Turduckenable>) -> String {
        let tokens = input.into().into_tokens_with(&self.tokenizer);
        let fused = self.fuse_tokens(fusion, &tokens);
        tracing::trace!(?fusion, tokens = tokens.len(), len = fused.len(), "fused tokens");
        fused
    }

    pub fn forward(&self, input: impl Into<Turduckenable>) -> String {
        self.fuse(Fusion::Forward, input)
    }

    pub fn inverse(&self, input: impl Into<Turduckenable>) -> String {
        self.fuse(Fusion::Inverse, input)
    }

    /// Join the selected halves of already-normalized tokens.
    fn fuse_tokens(&self, fusion: Fusion, tokens: &[String]) -> String {
        let len = tokens.len();
        tokens
            .iter()
            .enumerate()
            .map(|(index, token)| bisect(token).get(fusion.select(index, len, &self.options)))
            .collect()
    }
}

/// Fuse `input` into turducken case: front halves before the midpoint, back
/// halves after.
///
/// # Examples
///
/// ```
/// use turducken::fuse_forward;
///
/// assert_eq!(fuse_forward("Turkey duck CHICKEN"), "turducken");
/// assert_eq!(fuse_forward(Vec::<String>::new()), "");
/// ```
pub fn fuse_forward(input: impl Into<Turduckenable>) -> String {
    Fuser::new().forward(input)
}

/// Fuse `input` with the opposite selection of [`fuse_forward`], using the
/// default [`InverseBoundary::Inclusive`] rule.
pub fn fuse_inverse(input: impl Into<Turduckenable>) -> String {
    Fuser::new().inverse(input)
}

/// Parse fusion input from JSON (a string or an array of strings) and fuse it.
///
/// # Errors
///
/// Returns an error if `json` is not valid JSON or is neither a string nor an
/// array of strings.
///
/// # Examples
///
/// ```
/// use turducken::{fuse_json, Fusion};
///
/// let fused = fuse_json(r#"["turkey","duck","chicken"]"#, Fusion::Forward).unwrap();
/// assert_eq!(fused, "turducken");
/// assert!(fuse_json("{}", Fusion::Forward).is_err());
/// ```
pub fn fuse_json(json: &str, fusion: Fusion) -> Result<String> {
    let input = Turduckenable::from_json(json)?;
    Ok(Fuser::new().fuse(fusion, input))
}
