//! Word extraction -- splits raw text into word tokens.
//!
//! Text is first segmented on Unicode word boundaries (UAX #29), then each
//! segment is broken further the way "extract words" helpers usually do:
//!
//! - **Separators**: `_`, ASCII punctuation and general punctuation
//! - **Case transitions**: `fooBar` -> `foo`, `Bar`; `XMLHttp` -> `XML`, `Http`
//! - **Letter/digit boundaries**: `abc123def` -> `abc`, `123`, `def`
//! - **Ordinals** stay whole: `1st`, `2ND`, `23rd`
//! - **Contractions** stay attached: `don't`, `WE'RE`
//!
//! No case normalization happens here.

use unicode_segmentation::UnicodeSegmentation;

/// Splits raw text into an ordered list of tokens.
///
/// This is the only seam between fusion and segmentation rules. Any
/// `Fn(&str) -> Vec<String>` closure is a tokenizer too.
pub trait Tokenizer {
    fn tokenize(&self, text: &str) -> Vec<String>;
}

/// The default tokenizer, backed by [`words`].
#[derive(Debug, Clone, Copy, Default)]
pub struct Words;

impl Tokenizer for Words {
    fn tokenize(&self, text: &str) -> Vec<String> {
        words(text).into_iter().map(str::to_owned).collect()
    }
}

impl<F> Tokenizer for F
where
    F: Fn(&str) -> Vec<String>,
{
    fn tokenize(&self, text: &str) -> Vec<String> {
        self(text)
    }
}

/// Extract the words of `text`, in order, as slices of the input.
///
/// # Examples
///
/// ```
/// use turducken::words;
///
/// assert_eq!(words("turkeyDuck, chicken!"), vec!["turkey", "Duck", "chicken"]);
/// assert_eq!(words("XMLHttpRequest"), vec!["XML", "Http", "Request"]);
/// assert!(words("  \t ").is_empty());
/// ```
pub fn words(text: &str) -> Vec<&str> {
    let mut out = Vec::new();
    for segment in text.unicode_words() {
        split_segment(segment, &mut out);
    }
    out
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Class {
    Upper,
    /// Lowercase letters, and letters without case (CJK, etc.).
    Lower,
    Digit,
    Apostrophe,
    Break,
    /// Combining marks and anything else that rides along with its neighbour.
    Mark,
}

/// Non-ASCII punctuation that UAX #29 allows inside a word segment
/// (MidLetter, MidNum, MidNumLet, ExtendNumLet) outside General Punctuation.
const WORD_PUNCTUATION: [char; 28] = [
    '\u{00b7}', '\u{037e}', '\u{0387}', '\u{055f}', '\u{0589}', '\u{05f4}', '\u{060c}',
    '\u{060d}', '\u{066c}', '\u{07f8}', '\u{fe10}', '\u{fe13}', '\u{fe14}', '\u{fe33}',
    '\u{fe34}', '\u{fe4d}', '\u{fe4e}', '\u{fe4f}', '\u{fe50}', '\u{fe52}', '\u{fe54}',
    '\u{fe55}', '\u{ff07}', '\u{ff0c}', '\u{ff0e}', '\u{ff1a}', '\u{ff1b}', '\u{ff3f}',
];

fn classify(c: char) -> Class {
    if c.is_uppercase() {
        Class::Upper
    } else if c.is_numeric() {
        Class::Digit
    } else if c.is_alphabetic() {
        Class::Lower
    } else if c == '\'' || c == '\u{2019}' {
        Class::Apostrophe
    } else if c == '_'
        || c.is_ascii_punctuation()
        || ('\u{2000}'..='\u{206f}').contains(&c)
        || WORD_PUNCTUATION.contains(&c)
    {
        Class::Break
    } else {
        Class::Mark
    }
}

/// Letter case of a word, used to match ordinal and contraction suffixes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Case {
    Lower,
    Upper,
}

impl Case {
    fn matches(self, actual: char, expected: char) -> bool {
        match self {
            Case::Lower => actual == expected,
            Case::Upper => actual == expected.to_ascii_uppercase(),
        }
    }
}

const CONTRACTIONS: [&str; 7] = ["d", "ll", "m", "re", "s", "t", "ve"];

type Chars = [(usize, char)];

fn class_at(chars: &Chars, i: usize) -> Option<Class> {
    chars.get(i).map(|&(_, c)| classify(c))
}

/// Split one UAX #29 word segment into tokens, pushing them onto `out`.
fn split_segment<'a>(segment: &'a str, out: &mut Vec<&'a str>) {
    let chars: Vec<(usize, char)> = segment.char_indices().collect();
    let offset = |i: usize| chars.get(i).map_or(segment.len(), |&(o, _)| o);

    let mut i = 0;
    while i < chars.len() {
        let end = match classify(chars[i].1) {
            Class::Break | Class::Apostrophe => {
                i += 1;
                continue;
            }
            Class::Digit => {
                let run = run_end(&chars, i, Class::Digit);
                ordinal_end(&chars, run).unwrap_or(run)
            }
            Class::Upper => {
                let run = run_end(&chars, i, Class::Upper);
                let last_capital = (i..run)
                    .rev()
                    .find(|&j| class_at(&chars, j) == Some(Class::Upper))
                    .unwrap_or(i);
                if class_at(&chars, run) != Some(Class::Lower) {
                    contraction_end(&chars, run, Case::Upper).unwrap_or(run)
                } else if last_capital > i {
                    // The last capital starts the next word: "XMLHttp" -> "XML" + "Http".
                    last_capital
                } else {
                    lower_word_end(&chars, run)
                }
            }
            Class::Lower | Class::Mark => lower_word_end(&chars, i),
        };
        out.push(&segment[offset(i)..offset(end)]);
        i = end;
    }
}

/// End of the run of `class` characters starting at `from`. Marks extend any run.
fn run_end(chars: &Chars, from: usize, class: Class) -> usize {
    let mut end = from + 1;
    while let Some(next) = class_at(chars, end) {
        if next != class && next != Class::Mark {
            break;
        }
        end += 1;
    }
    end
}

fn lower_word_end(chars: &Chars, from: usize) -> usize {
    let run = run_end(chars, from, Class::Lower);
    contraction_end(chars, run, Case::Lower).unwrap_or(run)
}

/// Whether a suffix in `case` may end at `at`: the word must not continue in
/// that case afterwards.
fn suffix_boundary(chars: &Chars, at: usize, case: Case) -> bool {
    match class_at(chars, at) {
        None | Some(Class::Break) | Some(Class::Apostrophe) => true,
        Some(Class::Upper) => match case {
            Case::Lower => true,
            Case::Upper => class_at(chars, at + 1) == Some(Class::Lower),
        },
        Some(Class::Lower) | Some(Class::Digit) | Some(Class::Mark) => false,
    }
}

/// End of an ordinal suffix (`st`, `nd`, `rd`, `th`) following the digit run
/// that ends at `digits_end`, if the suffix agrees with the last digit.
fn ordinal_end(chars: &Chars, digits_end: usize) -> Option<usize> {
    let last = chars[digits_end - 1].1.to_digit(10)?;
    let suffix = match last {
        1 => "st",
        2 => "nd",
        3 => "rd",
        _ => "th",
    };
    let end = digits_end + suffix.len();
    let tail = chars.get(digits_end..end)?;

    [Case::Lower, Case::Upper].into_iter().find_map(|case| {
        let matches = tail
            .iter()
            .zip(suffix.chars())
            .all(|(&(_, actual), expected)| case.matches(actual, expected));
        // Lowercase ordinals may be followed by a capital, uppercase ones by a
        // lowercase letter ("1stPlace", "1STplace").
        let boundary = match class_at(chars, end) {
            None | Some(Class::Break) | Some(Class::Apostrophe) => true,
            Some(Class::Upper) => case == Case::Lower,
            Some(Class::Lower) => case == Case::Upper,
            Some(Class::Digit) | Some(Class::Mark) => false,
        };
        (matches && boundary).then_some(end)
    })
}

/// End of a contraction (`'d`, `'ll`, `'m`, `'re`, `'s`, `'t`, `'ve`) that
/// starts with the apostrophe at `at`.
fn contraction_end(chars: &Chars, at: usize, case: Case) -> Option<usize> {
    if class_at(chars, at)? != Class::Apostrophe {
        return None;
    }
    CONTRACTIONS.iter().find_map(|suffix| {
        let end = at + 1 + suffix.len();
        let tail = chars.get(at + 1..end)?;
        let matches = tail
            .iter()
            .zip(suffix.chars())
            .all(|(&(_, actual), expected)| case.matches(actual, expected));
        (matches && suffix_boundary(chars, end, case)).then_some(end)
    })
}
