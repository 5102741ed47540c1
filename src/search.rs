/// Maximum number of characters a text buffer can hold
pub const TEXT_CAPACITY: usize = 80;

/// Maximum number of characters a pattern buffer can hold
pub const PAT_CAPACITY: usize = 10;

/// Returned when the declared text length exceeds [`TEXT_CAPACITY`]
pub const TEXT_TOO_LONG: i32 = -1;

/// Returned when the declared pattern length exceeds [`PAT_CAPACITY`]
pub const PATTERN_TOO_LONG: i32 = -2;

/// Returned when the pattern does not occur in the text (also covers empty text)
pub const NO_MATCH: i32 = 0;

/// Caller-owned text buffer, populated at positions `1..=textlen`.
///
/// Position 0 is reserved and never read.
pub type TextBuf = [u8; TEXT_CAPACITY + 1];

/// Caller-owned pattern buffer, populated at positions `1..=patlen`.
///
/// Position 0 is reserved and never read.
pub type PatternBuf = [u8; PAT_CAPACITY + 1];

/// Brute-force substring search over fixed-capacity, 1-indexed buffers.
///
/// The caller fills `text[1..=textlen]` and `pattern[1..=patlen]` and passes
/// the populated lengths; the routine trusts the counts and never reads past
/// them. All outcomes share the single integer return channel:
///
/// * [`TEXT_TOO_LONG`] (-1): `textlen` exceeds the text capacity
/// * [`PATTERN_TOO_LONG`] (-2): `patlen` exceeds the pattern capacity
/// * [`NO_MATCH`] (0): no occurrence, including the `textlen == 0` case
/// * `k >= 1`: first occurrence starts at 1-based text position `k`;
///   an empty pattern matches at position 1 by convention
///
/// The length checks short-circuit in the order listed, so an oversized text
/// is reported before the pattern length is ever inspected. The scan itself
/// restarts one position after the current window on any mismatch, and the
/// comparison loop is post-test: it runs its body once before checking the
/// continuation condition. Both properties are fixed parts of the contract.
///
/// Pure function of its four inputs. For `0 <= textlen` and `0 <= patlen` it
/// always terminates without panicking, doing at most
/// `TEXT_CAPACITY * PAT_CAPACITY` character comparisons.
pub fn search(pattern: &PatternBuf, text: &TextBuf, patlen: i32, textlen: i32) -> i32 {
    let mut patpos: i32 = 1;
    let mut textpos: i32 = 1;

    if textlen > TEXT_CAPACITY as i32 {
        return TEXT_TOO_LONG;
    } else if textlen == 0 {
        return NO_MATCH;
    }

    if patlen > PAT_CAPACITY as i32 {
        return PATTERN_TOO_LONG;
    } else if patlen == 0 {
        // an empty pattern matches at position 1 by convention
        return 1;
    }

    // post-test loop: the first comparison happens before any condition check
    loop {
        if byte_at(pattern, patpos) == byte_at(text, textpos) {
            textpos += 1;
            patpos += 1;
        } else {
            // restart one position after the current window's start
            textpos = (textpos - patpos) + 2;
            patpos = 1;
        }
        if patpos > patlen || textpos > textlen {
            break;
        }
    }

    if patpos > patlen {
        // the whole pattern matched; textpos sits one past its last character
        textpos - patlen
    } else {
        NO_MATCH
    }
}

/// 1-based read. The length checks above keep every position the loop can
/// reach inside the buffer, so the fallback byte is never observed.
fn byte_at(buf: &[u8], pos: i32) -> u8 {
    buf.get(pos as usize).copied().unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text_buf(s: &str) -> TextBuf {
        let mut buf = [0; TEXT_CAPACITY + 1];
        for (slot, byte) in buf.iter_mut().skip(1).zip(s.bytes()) {
            *slot = byte;
        }
        buf
    }

    fn pat_buf(s: &str) -> PatternBuf {
        let mut buf = [0; PAT_CAPACITY + 1];
        for (slot, byte) in buf.iter_mut().skip(1).zip(s.bytes()) {
            *slot = byte;
        }
        buf
    }

    fn run(pattern: &str, text: &str) -> i32 {
        search(
            &pat_buf(pattern),
            &text_buf(text),
            pattern.len() as i32,
            text.len() as i32,
        )
    }

    #[test]
    fn finds_match_at_position_one() {
        assert_eq!(run("abc", "abcabcabc"), 1);
    }

    #[test]
    fn finds_match_in_the_middle() {
        assert_eq!(run("abc", "xxabcxx"), 3);
    }

    #[test]
    fn reports_no_match() {
        assert_eq!(run("abc", "xyz"), 0);
    }

    #[test]
    fn rejects_oversized_text() {
        let result = search(&pat_buf("abc"), &text_buf("hello"), 3, 81);
        assert_eq!(result, TEXT_TOO_LONG);
    }

    #[test]
    fn rejects_oversized_pattern() {
        let result = search(&pat_buf("abc"), &text_buf("hello"), 11, 5);
        assert_eq!(result, PATTERN_TOO_LONG);
    }

    #[test]
    fn oversized_text_reported_before_oversized_pattern() {
        let result = search(&pat_buf(""), &text_buf(""), 11, 81);
        assert_eq!(result, TEXT_TOO_LONG);
    }

    #[test]
    fn empty_text_is_no_match() {
        let result = search(&pat_buf("abc"), &text_buf(""), 3, 0);
        assert_eq!(result, NO_MATCH);
    }

    #[test]
    fn empty_pattern_matches_at_position_one() {
        let result = search(&pat_buf(""), &text_buf("abc"), 0, 3);
        assert_eq!(result, 1);
    }

    #[test]
    fn restarts_after_partial_match_on_repeated_characters() {
        assert_eq!(run("aab", "aaab"), 2);
    }

    #[test]
    fn finds_occurrence_after_overlapping_near_match() {
        assert_eq!(run("abc", "ababc"), 3);
    }

    #[test]
    fn pattern_longer_than_text_is_no_match() {
        assert_eq!(run("aaaaa", "aaa"), 0);
    }

    #[test]
    fn finds_match_flush_against_text_capacity() {
        let mut text: TextBuf = [0; TEXT_CAPACITY + 1];
        for slot in text.iter_mut().skip(1).take(77) {
            *slot = b'x';
        }
        for (slot, byte) in text.iter_mut().skip(78).zip(*b"xyz") {
            *slot = byte;
        }
        let result = search(&pat_buf("xyz"), &text, 3, TEXT_CAPACITY as i32);
        assert_eq!(result, 78);
    }

    #[test]
    fn trusts_the_declared_text_length() {
        // the buffer holds "abcdef" but only the first 3 characters count
        let result = search(&pat_buf("def"), &text_buf("abcdef"), 3, 3);
        assert_eq!(result, NO_MATCH);
    }

    #[test]
    fn repeated_calls_agree() {
        let pattern = pat_buf("bca");
        let text = text_buf("abcabc");
        let first = search(&pattern, &text, 3, 6);
        assert_eq!(first, 2);
        assert_eq!(search(&pattern, &text, 3, 6), first);
    }
}
