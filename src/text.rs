//! Rune-accurate whitespace collapsing (§4.D), used to drive style-event
//! offsets while accumulating inline text.

/// A whitespace-collapsing text accumulator.
///
/// Tracks a deferred space boundary (`pending_space`) so that runs of
/// whitespace collapse to exactly one space, emitted only once real
/// content follows it — never at the start or end of the buffer.
#[derive(Debug, Clone, Default)]
pub struct NormalizingWriter {
    buffer: String,
    rune_count: usize,
    pending_space: bool,
    suppress_next_space: bool,
    preserve_ws: bool,
}

impl NormalizingWriter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enters or leaves verbatim mode, used for code/preformatted spans.
    pub fn set_preserve_ws(&mut self, preserve: bool) {
        self.preserve_ws = preserve;
    }

    pub fn preserve_ws(&self) -> bool {
        self.preserve_ws
    }

    pub fn as_str(&self) -> &str {
        &self.buffer
    }

    pub fn rune_count(&self) -> usize {
        self.rune_count
    }

    pub fn into_string(self) -> String {
        self.buffer
    }

    /// Writes `s` under the collapsing rules, or verbatim while
    /// `preserve_ws` is set (§4.D).
    pub fn write(&mut self, s: &str) {
        if self.preserve_ws {
            self.flush_pending();
            self.push_str_raw(s);
            self.pending_space = false;
            self.suppress_next_space = false;
            return;
        }
        for ch in s.chars() {
            if ch.is_whitespace() {
                if (!self.buffer.is_empty() || self.pending_space) && !self.suppress_next_space {
                    self.pending_space = true;
                }
            } else {
                self.flush_pending();
                self.push_char(ch);
                self.suppress_next_space = false;
            }
        }
    }

    /// Writes `s` verbatim at a structural boundary: discards any pending
    /// space and suppresses the next one, so the boundary itself never
    /// grows a leading/trailing space (§4.D).
    pub fn write_raw(&mut self, s: &str) {
        self.pending_space = false;
        self.push_str_raw(s);
        self.suppress_next_space = true;
    }

    fn flush_pending(&mut self) {
        if self.pending_space && !self.suppress_next_space {
            self.push_char(' ');
        }
        self.pending_space = false;
    }

    fn push_char(&mut self, ch: char) {
        self.buffer.push(ch);
        self.rune_count += 1;
    }

    fn push_str_raw(&mut self, s: &str) {
        self.buffer.push_str(s);
        self.rune_count += s.chars().count();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collapses_interior_runs_to_one_space() {
        let mut w = NormalizingWriter::new();
        w.write("  Hello   world  ");
        assert_eq!(w.as_str(), "Hello world");
    }

    #[test]
    fn no_leading_or_trailing_whitespace() {
        let mut w = NormalizingWriter::new();
        w.write("   padded text   ");
        assert!(!w.as_str().starts_with(' '));
        assert!(!w.as_str().ends_with(' '));
    }

    #[test]
    fn joins_across_writes_add_at_most_one_space() {
        let mut w = NormalizingWriter::new();
        w.write("  Hello   world  ");
        w.write(" again ");
        assert_eq!(w.as_str(), "Hello world again");
        assert!(!w.as_str().contains("  "));
    }

    #[test]
    fn rune_count_matches_scalar_values_in_buffer() {
        let mut w = NormalizingWriter::new();
        w.write("  Hello   world  ");
        w.write(" again ");
        assert_eq!(w.rune_count(), w.as_str().chars().count());
        assert_eq!(w.rune_count(), 17);
    }

    #[test]
    fn write_raw_suppresses_adjacent_space() {
        let mut w = NormalizingWriter::new();
        w.write("Title");
        w.write_raw("\u{2014}");
        w.write("  more");
        assert_eq!(w.as_str(), "Title\u{2014}more");
    }

    #[test]
    fn preserve_ws_writes_verbatim() {
        let mut w = NormalizingWriter::new();
        w.write("before ");
        w.set_preserve_ws(true);
        w.write("  code   here  ");
        assert_eq!(w.as_str(), "before   code   here  ");
    }

    #[test]
    fn pure_whitespace_input_produces_nothing() {
        let mut w = NormalizingWriter::new();
        w.write("   \t\n  ");
        assert_eq!(w.as_str(), "");
        assert_eq!(w.rune_count(), 0);
    }

    use proptest::prelude::*;

    proptest! {
        #[test]
        fn prop_write_collapses_whitespace_and_counts_runes(
            s in prop::collection::vec(
                prop_oneof![
                    prop::char::range('a', 'z'),
                    Just(' '),
                    Just('\t'),
                    Just('\n'),
                ],
                0..40
            )
        ) {
            let s: String = s.into_iter().collect();
            let mut w = NormalizingWriter::new();
            w.write(&s);
            let out = w.as_str();
            prop_assert!(!out.starts_with(' '));
            prop_assert!(!out.ends_with(' '));
            prop_assert!(!out.contains("  "));
            prop_assert_eq!(w.rune_count(), out.chars().count());
        }

        #[test]
        fn prop_writing_twice_adds_at_most_one_joining_space(
            a in prop::collection::vec(prop::char::range('a', 'z'), 1..10),
            b in prop::collection::vec(prop::char::range('a', 'z'), 1..10),
        ) {
            let a: String = a.into_iter().collect();
            let b: String = b.into_iter().collect();
            let mut w = NormalizingWriter::new();
            w.write(&a);
            w.write(&format!("  {b}  "));
            prop_assert_eq!(w.as_str(), format!("{a} {b}"));
        }
    }
}
