mod proofs {
    use crate::{
        search, PatternBuf, TextBuf, NO_MATCH, PAT_CAPACITY, PATTERN_TOO_LONG, TEXT_CAPACITY,
        TEXT_TOO_LONG,
    };

    /// This proof mathematically verifies that `search` is total and panic-free.
    ///
    /// It plays the role of a non-deterministic driver: both buffers hold
    /// arbitrary bytes and both declared lengths are arbitrary non-negative
    /// integers, including lengths far beyond the buffer capacities. Kani
    /// proves that for every such input:
    /// 1. Every buffer access stays in bounds (`byte_at` goes through `get`,
    ///    and the capacity checks keep live positions inside the arrays).
    /// 2. The scan loop terminates; one comparison per iteration and at most
    ///    `TEXT_CAPACITY * PAT_CAPACITY` (800) comparisons bound the unwind.
    /// 3. No arithmetic in the loop or in the result computation overflows.
    #[kani::proof]
    #[kani::unwind(801)]
    fn prove_search_total_no_panic() {
        let text: TextBuf = kani::any();
        let pattern: PatternBuf = kani::any();
        let textlen: i32 = kani::any();
        let patlen: i32 = kani::any();
        kani::assume(textlen >= 0);
        kani::assume(patlen >= 0);

        // This call should NEVER panic, regardless of contents or lengths
        let _ = search(&pattern, &text, patlen, textlen);
    }

    /// An oversized text is rejected with -1 before the pattern length is
    /// even looked at, for every possible pattern.
    #[kani::proof]
    fn prove_oversized_text_rejected_first() {
        let text: TextBuf = kani::any();
        let pattern: PatternBuf = kani::any();
        let textlen: i32 = kani::any();
        let patlen: i32 = kani::any();
        kani::assume(textlen > TEXT_CAPACITY as i32);

        assert_eq!(search(&pattern, &text, patlen, textlen), TEXT_TOO_LONG);
    }

    /// Once the text length is admissible, an oversized pattern is rejected
    /// with -2 regardless of buffer contents.
    #[kani::proof]
    fn prove_oversized_pattern_rejected() {
        let text: TextBuf = kani::any();
        let pattern: PatternBuf = kani::any();
        let textlen: i32 = kani::any();
        let patlen: i32 = kani::any();
        kani::assume(textlen >= 1 && textlen <= TEXT_CAPACITY as i32);
        kani::assume(patlen > PAT_CAPACITY as i32);

        assert_eq!(search(&pattern, &text, patlen, textlen), PATTERN_TOO_LONG);
    }

    /// An empty text never matches anything, whatever the pattern claims.
    #[kani::proof]
    fn prove_empty_text_is_no_match() {
        let text: TextBuf = kani::any();
        let pattern: PatternBuf = kani::any();
        let patlen: i32 = kani::any();

        assert_eq!(search(&pattern, &text, patlen, 0), NO_MATCH);
    }

    /// An empty pattern matches at position 1 for every non-empty text.
    #[kani::proof]
    fn prove_empty_pattern_matches_at_one() {
        let text: TextBuf = kani::any();
        let pattern: PatternBuf = kani::any();
        let textlen: i32 = kani::any();
        kani::assume(textlen >= 1 && textlen <= TEXT_CAPACITY as i32);

        assert_eq!(search(&pattern, &text, 0, textlen), 1);
    }

    /// On in-bounds inputs the result is never a sentinel, and a positive
    /// result always leaves room for the whole pattern inside the text.
    ///
    /// Bounded to an 8-character text and a 3-character pattern to keep the
    /// state space tractable; the loop structure does not depend on the
    /// capacity constants, only the iteration count does.
    #[kani::proof]
    #[kani::unwind(32)]
    fn prove_result_range_on_valid_input() {
        let text: TextBuf = kani::any();
        let pattern: PatternBuf = kani::any();
        let textlen: i32 = kani::any();
        let patlen: i32 = kani::any();
        kani::assume(textlen >= 0 && textlen <= 8);
        kani::assume(patlen >= 0 && patlen <= 3);

        let result = search(&pattern, &text, patlen, textlen);

        assert!(result >= 0, "sentinel returned for in-bounds lengths");
        if result >= 1 && patlen >= 1 {
            assert!(
                result + patlen - 1 <= textlen,
                "reported match overruns the text"
            );
        }
    }

    /// A positive result is a genuine occurrence: the pattern bytes really
    /// appear in the text starting at the reported 1-based position.
    #[kani::proof]
    #[kani::unwind(32)]
    fn prove_reported_match_is_genuine() {
        let text: TextBuf = kani::any();
        let pattern: PatternBuf = kani::any();
        let textlen: i32 = kani::any();
        let patlen: i32 = kani::any();
        kani::assume(textlen >= 0 && textlen <= 8);
        kani::assume(patlen >= 1 && patlen <= 3);

        let result = search(&pattern, &text, patlen, textlen);

        if result >= 1 {
            for i in 0..patlen {
                let t = (result + i) as usize;
                let p = (1 + i) as usize;
                assert_eq!(text[t], pattern[p], "mismatch inside reported match");
            }
        }
    }
}
