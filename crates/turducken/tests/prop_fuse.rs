//! Property-based tests for turducken fusion using proptest.
//!
//! These check invariants that hold for *any* token list, not just the worked
//! examples in `fuse_tests.rs`. Tokens are ASCII so that lowercasing never
//! changes their length.

use proptest::prelude::*;
use turducken::{
    bisect, fuse_forward, fuse_inverse, normalize, words, FuseOptions, Fuser, InverseBoundary,
};

// ---------------------------------------------------------------------------
// Strategies
// ---------------------------------------------------------------------------

fn arb_token() -> impl Strategy<Value = String> {
    "[a-zA-Z]{0,10}"
}

fn arb_tokens() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(arb_token(), 0..12)
}

fn arb_lowercase_words() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec("[a-z]{1,10}", 0..12)
}

fn complement() -> Fuser {
    Fuser::with_options(FuseOptions {
        inverse_boundary: InverseBoundary::Complement,
    })
}

fn total_len(tokens: &[String]) -> usize {
    tokens.iter().map(|t| t.chars().count()).sum()
}

// ---------------------------------------------------------------------------
// Properties
// ---------------------------------------------------------------------------

proptest! {
    /// Bisection is lossless and puts floor(n/2) chars in front.
    #[test]
    fn bisect_is_lossless(token in "\\PC{0,20}") {
        let halves = bisect(&token);
        prop_assert_eq!(format!("{}{}", halves.front, halves.back), token.clone());
        prop_assert_eq!(halves.front.chars().count(), token.chars().count() / 2);
    }

    /// Each token contributes exactly its selected half.
    #[test]
    fn forward_length_is_sum_of_selected_halves(tokens in arb_tokens()) {
        let n = tokens.len();
        let expected: usize = tokens
            .iter()
            .enumerate()
            .map(|(i, t)| {
                let len = t.len();
                if 2 * i < n { len / 2 } else { len - len / 2 }
            })
            .sum();
        prop_assert_eq!(fuse_forward(tokens).len(), expected);
    }

    /// Forward fusion ignores case.
    #[test]
    fn forward_is_case_insensitive(tokens in arb_tokens()) {
        let upper: Vec<String> = tokens.iter().map(|t| t.to_uppercase()).collect();
        let lower: Vec<String> = tokens.iter().map(|t| t.to_lowercase()).collect();
        prop_assert_eq!(fuse_forward(upper), fuse_forward(lower));
    }

    /// Inverse fusion ignores case.
    #[test]
    fn inverse_is_case_insensitive(tokens in arb_tokens()) {
        let upper: Vec<String> = tokens.iter().map(|t| t.to_uppercase()).collect();
        prop_assert_eq!(fuse_inverse(upper), fuse_inverse(tokens));
    }

    /// Space-joined lowercase words fuse the same as the word list.
    #[test]
    fn text_matches_tokens(tokens in arb_lowercase_words()) {
        let text = tokens.join(" ");
        prop_assert_eq!(normalize(text.as_str()), tokens.clone());
        prop_assert_eq!(fuse_forward(text.as_str()), fuse_forward(tokens.clone()));
        prop_assert_eq!(fuse_inverse(text), fuse_inverse(tokens));
    }

    /// With the complement boundary every token keeps opposite halves under
    /// the two policies, so together they account for every character.
    #[test]
    fn complement_selection_covers_every_char(tokens in arb_tokens()) {
        let fuser = complement();
        let forward = fuser.forward(tokens.clone());
        let inverse = fuser.inverse(tokens.clone());
        prop_assert_eq!(forward.len() + inverse.len(), total_len(&tokens));
    }

    /// The default inverse boundary agrees with the complement for odd counts.
    #[test]
    fn inclusive_matches_complement_for_odd_counts(
        tokens in prop::collection::vec(arb_token(), 0..6).prop_map(|mut t| {
            if t.len() % 2 == 0 {
                t.push("odd".to_string());
            }
            t
        })
    ) {
        prop_assert_eq!(fuse_inverse(tokens.clone()), complement().inverse(tokens.clone()));
        prop_assert_eq!(
            fuse_forward(tokens.clone()).len() + fuse_inverse(tokens.clone()).len(),
            total_len(&tokens)
        );
    }

    /// For even counts the midpoint token keeps its back half under both
    /// policies with the default boundary.
    #[test]
    fn inclusive_shares_midpoint_back_half(
        tokens in prop::collection::vec("[a-z]{0,10}", 1..6).prop_map(|mut t| {
            if t.len() % 2 == 1 {
                t.push("even".to_string());
            }
            t
        })
    ) {
        let mid = &tokens[tokens.len() / 2];
        let overlap = mid.len() - mid.len() / 2;
        let excess = mid.len() / 2;
        prop_assert_eq!(
            fuse_forward(tokens.clone()).len() + fuse_inverse(tokens.clone()).len(),
            total_len(&tokens) + overlap - excess
        );
    }

    /// Arbitrary text never panics and every word is non-empty.
    #[test]
    fn arbitrary_text_is_total(text in "\\PC{0,60}") {
        for word in words(&text) {
            prop_assert!(!word.is_empty());
        }
        let _ = fuse_forward(text.as_str());
        let _ = fuse_inverse(text.as_str());
    }

    /// Every extracted word is a slice of the input.
    #[test]
    fn words_are_substrings(text in "[a-zA-Z0-9 _'.,-]{0,40}") {
        for word in words(&text) {
            prop_assert!(text.contains(word));
        }
    }
}
