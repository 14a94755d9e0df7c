use crate::keywords::is_numeral_word;

/// Replace every character that is neither an ASCII digit nor a Korean
/// numeral word with a single space.
///
/// Applied only to text segments, never to keyword segments: surrounding
/// prose collapses to whitespace while digits and numeral words survive for
/// conversion.
pub(crate) fn strip_noise(text: &str) -> String {
    text.chars().map(|c| if c.is_ascii_digit() || is_numeral_word(c) { c } else { ' ' }).collect()
}
