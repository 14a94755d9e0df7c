use crate::Token;
use crate::engine::strip::strip_noise;
use crate::engine::tagger::Segment;
use crate::keywords::{is_numeral_word, numeral_value};

/// Convert tagged segments into the token stream the range builder walks.
///
/// Each text segment is one run, stripped of noise and trimmed:
/// - a run containing an ASCII digit is already numeric, and is usable only
///   if the whole run parses as one integer ("2024" yes, "2024 3" no;
///   mixed digit/numeral-word runs are likewise left unconverted and fall
///   out here);
/// - a run containing anything outside the numeral words (inner whitespace
///   included) is dropped;
/// - what remains is a pure numeral-word run, reconstructed into a decimal
///   value.
///
/// Runs whose value does not fit the number type are dropped, best-effort.
pub(crate) fn tokenize(segments: &[Segment<'_>]) -> Vec<Token> {
    let mut tokens = Vec::new();

    for segment in segments {
        match *segment {
            Segment::Keyword(keyword) => tokens.push(Token::Keyword(keyword)),
            Segment::Text(raw) => {
                let stripped = strip_noise(raw);
                let run = stripped.trim();
                if run.is_empty() {
                    continue;
                }
                if run.contains(|c: char| c.is_ascii_digit()) {
                    if let Ok(number) = run.parse::<i32>() {
                        tokens.push(Token::Number(number));
                    }
                    continue;
                }
                if run.chars().any(|c| !is_numeral_word(c)) {
                    continue;
                }
                if let Ok(number) = run_to_decimal(run).parse::<i32>() {
                    tokens.push(Token::Number(number));
                }
            }
        }
    }

    tokens
}

/// Positional reconstruction of a numeral-word run into a decimal string.
///
/// Digit words append their digit. A scale marker (십/백/천) starts the
/// accumulator at its own value when nothing has been read yet; in final
/// position it appends the zeros completing its scale; anywhere else it is
/// absorbed, the following digit word landing in the right position. This
/// is correct for descending-magnitude runs ("삼십" → 30, "삼백이십일" →
/// 321, "일천구백구십구" → 1999); out-of-order runs produce an undefined
/// value, which is a known limitation rather than an error.
fn run_to_decimal(run: &str) -> String {
    let chars: Vec<char> = run.chars().collect();
    let mut digits = String::new();

    for (position, &c) in chars.iter().enumerate() {
        let Some(value) = numeral_value(c) else { continue };
        let last = position + 1 == chars.len();
        match value {
            10 => {
                if digits.is_empty() {
                    digits.push_str("10");
                } else if last {
                    digits.push('0');
                }
            }
            100 => {
                if digits.is_empty() {
                    digits.push_str("100");
                } else if last {
                    digits.push_str("00");
                }
            }
            1000 => {
                if digits.is_empty() {
                    digits.push_str("1000");
                } else if last {
                    digits.push_str("000");
                }
            }
            digit => digits.push_str(&digit.to_string()),
        }
    }

    digits
}
