//! Command history with an arrow-key navigation cursor.
//!
//! Entries are kept newest first. The cursor is `None` while the user is
//! typing a fresh line and `Some(i)` while the line buffer mirrors entry `i`.
//! Navigation moves only the cursor and the buffer; entries are never
//! rewritten.

use std::collections::VecDeque;

use glassterm_types::input::Direction;

use crate::line_buffer::LineBuffer;

/// Submitted command lines plus the browsing cursor.
#[derive(Debug, Clone, Default)]
pub struct CommandHistory {
    entries: VecDeque<String>,
    cursor: Option<usize>,
    limit: Option<usize>,
}

impl CommandHistory {
    /// Unbounded history.
    pub fn new() -> Self {
        Self::default()
    }

    /// History that drops its oldest entries beyond `limit`.
    pub fn with_limit(limit: Option<usize>) -> Self {
        Self {
            limit,
            ..Self::default()
        }
    }

    /// Record a submitted line at the front and stop browsing.
    pub fn push(&mut self, line: &str) {
        self.entries.push_front(line.to_string());
        if let Some(limit) = self.limit {
            self.entries.truncate(limit);
        }
        self.cursor = None;
    }

    /// Apply one navigation step, mirroring the selected entry into `buf`.
    ///
    /// Returns `true` if the cursor moved. Whatever unsubmitted text was in
    /// `buf` is discarded when the cursor moves.
    pub fn navigate(&mut self, direction: Direction, buf: &mut LineBuffer) -> bool {
        match direction {
            Direction::Previous => self.previous(buf),
            Direction::Next => self.next(buf),
        }
    }

    fn previous(&mut self, buf: &mut LineBuffer) -> bool {
        let next_index = self.cursor.map_or(0, |i| i + 1);
        if next_index >= self.entries.len() {
            return false;
        }
        self.cursor = Some(next_index);
        buf.set(&self.entries[next_index]);
        true
    }

    fn next(&mut self, buf: &mut LineBuffer) -> bool {
        match self.cursor {
            None => false,
            Some(0) => {
                self.cursor = None;
                buf.clear();
                true
            },
            Some(i) => {
                self.cursor = Some(i - 1);
                buf.set(&self.entries[i - 1]);
                true
            },
        }
    }

    /// The browsing cursor (`None` = not browsing).
    pub fn cursor(&self) -> Option<usize> {
        self.cursor
    }

    /// Entry `i`, counting from the newest.
    pub fn get(&self, i: usize) -> Option<&str> {
        self.entries.get(i).map(String::as_str)
    }

    /// All entries, newest first.
    pub fn entries(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn history_of(lines: &[&str]) -> CommandHistory {
        let mut h = CommandHistory::new();
        for l in lines {
            h.push(l);
        }
        h
    }

    #[test]
    fn push_is_newest_first() {
        let h = history_of(&["a", "b", "c"]);
        let entries: Vec<&str> = h.entries().collect();
        assert_eq!(entries, vec!["c", "b", "a"]);
    }

    #[test]
    fn previous_walks_to_oldest_then_stops() {
        let mut h = history_of(&["a", "b"]);
        let mut buf = LineBuffer::new();
        assert!(h.navigate(Direction::Previous, &mut buf));
        assert_eq!(buf.as_str(), "b");
        assert!(h.navigate(Direction::Previous, &mut buf));
        assert_eq!(buf.as_str(), "a");
        assert!(!h.navigate(Direction::Previous, &mut buf));
        assert_eq!(buf.as_str(), "a");
        assert_eq!(h.cursor(), Some(1));
    }

    #[test]
    fn next_returns_to_live_line() {
        let mut h = history_of(&["a", "b"]);
        let mut buf = LineBuffer::new();
        h.navigate(Direction::Previous, &mut buf);
        h.navigate(Direction::Previous, &mut buf);
        assert!(h.navigate(Direction::Next, &mut buf));
        assert_eq!(buf.as_str(), "b");
        assert!(h.navigate(Direction::Next, &mut buf));
        assert_eq!(buf.as_str(), "");
        assert_eq!(h.cursor(), None);
        assert!(!h.navigate(Direction::Next, &mut buf));
    }

    #[test]
    fn next_when_not_browsing_keeps_typed_text() {
        let mut h = history_of(&["a"]);
        let mut buf = LineBuffer::new();
        buf.set("typing");
        assert!(!h.navigate(Direction::Next, &mut buf));
        assert_eq!(buf.as_str(), "typing");
    }

    #[test]
    fn previous_on_empty_history_is_noop() {
        let mut h = CommandHistory::new();
        let mut buf = LineBuffer::new();
        buf.set("draft");
        assert!(!h.navigate(Direction::Previous, &mut buf));
        assert_eq!(buf.as_str(), "draft");
        assert_eq!(h.cursor(), None);
    }

    #[test]
    fn previous_discards_unsubmitted_text() {
        let mut h = history_of(&["date"]);
        let mut buf = LineBuffer::new();
        buf.set("half-typed");
        h.navigate(Direction::Previous, &mut buf);
        h.navigate(Direction::Next, &mut buf);
        assert_eq!(buf.as_str(), "");
    }

    #[test]
    fn push_resets_cursor() {
        let mut h = history_of(&["a", "b"]);
        let mut buf = LineBuffer::new();
        h.navigate(Direction::Previous, &mut buf);
        h.push("c");
        assert_eq!(h.cursor(), None);
        h.navigate(Direction::Previous, &mut buf);
        assert_eq!(buf.as_str(), "c");
    }

    #[test]
    fn duplicates_are_kept() {
        let h = history_of(&["help", "help"]);
        assert_eq!(h.len(), 2);
    }

    #[test]
    fn limit_drops_oldest() {
        let mut h = CommandHistory::with_limit(Some(2));
        h.push("a");
        h.push("b");
        h.push("c");
        let entries: Vec<&str> = h.entries().collect();
        assert_eq!(entries, vec!["c", "b"]);
    }

    mod prop {
        use super::*;
        use proptest::prelude::*;

        fn arb_steps() -> impl Strategy<Value = Vec<Direction>> {
            proptest::collection::vec(
                prop_oneof![Just(Direction::Previous), Just(Direction::Next)],
                0..40,
            )
        }

        fn arb_lines() -> impl Strategy<Value = Vec<String>> {
            proptest::collection::vec("[a-z]{1,8}", 0..10)
        }

        proptest! {
            #[test]
            fn cursor_stays_in_bounds(lines in arb_lines(), steps in arb_steps()) {
                let mut h = CommandHistory::new();
                for l in &lines {
                    h.push(l);
                }
                let mut buf = LineBuffer::new();
                for step in steps {
                    h.navigate(step, &mut buf);
                    if let Some(i) = h.cursor() {
                        prop_assert!(i < h.len());
                    }
                    match h.cursor() {
                        Some(i) => prop_assert_eq!(Some(buf.as_str()), h.get(i)),
                        None => prop_assert_eq!(buf.as_str(), ""),
                    }
                }
            }

            #[test]
            fn navigation_never_mutates_entries(lines in arb_lines(), steps in arb_steps()) {
                let mut h = CommandHistory::new();
                for l in &lines {
                    h.push(l);
                }
                let before: Vec<String> = h.entries().map(str::to_string).collect();
                let mut buf = LineBuffer::new();
                for step in steps {
                    h.navigate(step, &mut buf);
                }
                let after: Vec<String> = h.entries().map(str::to_string).collect();
                prop_assert_eq!(before, after);
            }
        }
    }
}
