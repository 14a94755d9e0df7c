use crate::keywords::{self, Keyword};

/// A span of the input: a recognized date-bearing keyword, or the raw text
/// between keywords.
///
/// This is the marker-pair wrapping of the pipeline expressed as spans: a
/// `Keyword` segment is opaque to the later stages (its own characters are
/// never stripped or converted), while `Text` segments are subject to noise
/// stripping and numeral conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Segment<'a> {
    Keyword(Keyword),
    Text(&'a str),
}

/// Scan `text` for every literal keyword occurrence, longest spelling first.
pub(crate) fn tag(text: &str) -> Vec<Segment<'_>> {
    let mut segments = Vec::new();
    let mut cursor = 0;

    for found in keywords::KEYWORD_REGEX.find_iter(text) {
        if found.start() > cursor {
            segments.push(Segment::Text(&text[cursor..found.start()]));
        }
        if let Some(keyword) = keywords::lookup(found.as_str()) {
            segments.push(Segment::Keyword(keyword));
        }
        cursor = found.end();
    }
    if cursor < text.len() {
        segments.push(Segment::Text(&text[cursor..]));
    }

    segments
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keywords::{AnchorKind, DateUnit};

    #[test]
    fn plain_text_is_a_single_segment() {
        let segments = tag("아무 날짜도 없는 문장");
        assert_eq!(segments, vec![Segment::Text("아무 날짜도 없는 문장")]);
    }

    #[test]
    fn keywords_split_the_surrounding_text() {
        let segments = tag("2024년 1분기 매출");
        assert_eq!(
            segments,
            vec![
                Segment::Text("2024"),
                Segment::Keyword(Keyword::Unit(DateUnit::Year)),
                Segment::Text(" 1"),
                Segment::Keyword(Keyword::Anchor(AnchorKind::Quarter)),
                Segment::Text(" 매출"),
            ]
        );
    }

    #[test]
    fn longest_spelling_wins_over_contained_ones() {
        // "지난 달" must not decompose into loose characters, and "년치" must
        // not surrender its first character to the year marker.
        let segments = tag("지난 달 1년치");
        assert_eq!(
            segments,
            vec![
                Segment::Keyword(Keyword::Anchor(AnchorKind::LastMonth)),
                Segment::Text(" 1"),
                Segment::Keyword(Keyword::Anchor(AnchorKind::YearSpan)),
            ]
        );
    }

    #[test]
    fn day_marker_claims_the_numeral_word_for_one() {
        // "이십일" reads as twenty-one, but the tagger owns "일": the run
        // tokenizes as twenty followed by the day marker.
        let segments = tag("이십일");
        assert_eq!(
            segments,
            vec![Segment::Text("이십"), Segment::Keyword(Keyword::Unit(DateUnit::Day))]
        );
    }
}
