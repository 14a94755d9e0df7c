//! The fixed inventory of date-bearing keywords and numeral words.
//!
//! Matching is purely literal: no stemming, no normalization. Overlapping
//! spellings are resolved by the longest-first ordering of
//! [`KEYWORD_REGEX`], so "지난 분기" wins over "분기" and "년치" over "년".

use std::cmp::Reverse;
use std::collections::HashMap;

use once_cell::sync::Lazy;
use regex::Regex;

/// Absolute unit markers that attach to a preceding number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) enum DateUnit {
    Year,
    Month,
    Day,
}

/// Relative/anchor phrases: resolved against the reference date, or expanded
/// into a fixed-boundary period (quarter, half-year, span).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) enum AnchorKind {
    LastYear,
    YearBeforeLast,
    LastMonth,
    ThisYear,
    ThisMonth,
    Today,
    Quarter,
    LastQuarter,
    FirstHalf,
    SecondHalf,
    MonthSpan,
    YearSpan,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) enum Keyword {
    Unit(DateUnit),
    Anchor(AnchorKind),
}

/// Every spelling the tagger recognizes.
///
/// "일" doubles as the numeral word for 1; the tagger always claims it as
/// the day marker, so numeral runs reaching the normalizer never contain it.
const KEYWORD_TABLE: &[(&str, Keyword)] = &[
    ("년", Keyword::Unit(DateUnit::Year)),
    ("월", Keyword::Unit(DateUnit::Month)),
    ("일", Keyword::Unit(DateUnit::Day)),
    ("작년", Keyword::Anchor(AnchorKind::LastYear)),
    ("지난 해", Keyword::Anchor(AnchorKind::LastYear)),
    ("재작년", Keyword::Anchor(AnchorKind::YearBeforeLast)),
    ("지난 달", Keyword::Anchor(AnchorKind::LastMonth)),
    ("전월", Keyword::Anchor(AnchorKind::LastMonth)),
    ("올해", Keyword::Anchor(AnchorKind::ThisYear)),
    ("이번 연도", Keyword::Anchor(AnchorKind::ThisYear)),
    ("이번 달", Keyword::Anchor(AnchorKind::ThisMonth)),
    ("금월", Keyword::Anchor(AnchorKind::ThisMonth)),
    ("당월", Keyword::Anchor(AnchorKind::ThisMonth)),
    ("현재", Keyword::Anchor(AnchorKind::Today)),
    ("오늘", Keyword::Anchor(AnchorKind::Today)),
    ("금일", Keyword::Anchor(AnchorKind::Today)),
    ("당일", Keyword::Anchor(AnchorKind::Today)),
    ("분기", Keyword::Anchor(AnchorKind::Quarter)),
    ("지난 분기", Keyword::Anchor(AnchorKind::LastQuarter)),
    ("상반기", Keyword::Anchor(AnchorKind::FirstHalf)),
    ("하반기", Keyword::Anchor(AnchorKind::SecondHalf)),
    ("개월", Keyword::Anchor(AnchorKind::MonthSpan)),
    ("개년", Keyword::Anchor(AnchorKind::YearSpan)),
    ("년치", Keyword::Anchor(AnchorKind::YearSpan)),
];

/// The twelve numeral-word characters, in value order: 일..구 are the digits
/// 1..9, then the scale markers 십 (10), 백 (100), 천 (1000).
const NUMERAL_WORDS: &[char] =
    &['일', '이', '삼', '사', '오', '육', '칠', '팔', '구', '십', '백', '천'];

pub(crate) fn is_numeral_word(c: char) -> bool {
    NUMERAL_WORDS.contains(&c)
}

/// Value of a numeral-word character: 1..=9, 10, 100 or 1000.
pub(crate) fn numeral_value(c: char) -> Option<u32> {
    let index = NUMERAL_WORDS.iter().position(|&word| word == c)?;
    Some(match index {
        9 => 10,
        10 => 100,
        11 => 1000,
        digit => digit as u32 + 1,
    })
}

/// Alternation over the keyword table, longest spelling first. The regex
/// engine prefers earlier alternatives, so a match at any position always
/// claims the longest keyword starting there.
pub(crate) static KEYWORD_REGEX: Lazy<Regex> = Lazy::new(|| {
    let mut spellings: Vec<&str> = KEYWORD_TABLE.iter().map(|&(spelling, _)| spelling).collect();
    spellings.sort_by_key(|spelling| Reverse(spelling.chars().count()));
    let pattern =
        spellings.iter().map(|spelling| regex::escape(spelling)).collect::<Vec<_>>().join("|");
    Regex::new(&pattern).unwrap()
});

static KEYWORD_MAP: Lazy<HashMap<&'static str, Keyword>> =
    Lazy::new(|| KEYWORD_TABLE.iter().copied().collect());

pub(crate) fn lookup(spelling: &str) -> Option<Keyword> {
    KEYWORD_MAP.get(spelling).copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_spelling_resolves_to_its_keyword() {
        for &(spelling, keyword) in KEYWORD_TABLE {
            assert_eq!(lookup(spelling), Some(keyword), "spelling: {spelling}");
        }
    }

    #[test]
    fn regex_prefers_longest_spelling() {
        let m = KEYWORD_REGEX.find("년치").unwrap();
        assert_eq!(m.as_str(), "년치");

        let m = KEYWORD_REGEX.find("지난 분기").unwrap();
        assert_eq!(m.as_str(), "지난 분기");

        let m = KEYWORD_REGEX.find("재작년").unwrap();
        assert_eq!(m.as_str(), "재작년");
    }

    #[test]
    fn numeral_values_cover_digits_and_scales() {
        assert_eq!(numeral_value('일'), Some(1));
        assert_eq!(numeral_value('구'), Some(9));
        assert_eq!(numeral_value('십'), Some(10));
        assert_eq!(numeral_value('백'), Some(100));
        assert_eq!(numeral_value('천'), Some(1000));
        assert_eq!(numeral_value('달'), None);
    }
}
