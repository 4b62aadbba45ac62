//! The visible transcript and the rule for turning output into lines.

/// Prefix written in front of every echoed input line.
pub const ECHO_PREFIX: &str = "> ";

/// Split handler output into transcript lines.
///
/// `None` yields no lines. `Some("")` yields one blank line. Embedded `\n`
/// characters split into separate lines; this is the only place multi-line
/// output is produced.
pub fn split_output(text: Option<&str>) -> Vec<String> {
    match text {
        Some(text) => text.split('\n').map(str::to_string).collect(),
        None => Vec::new(),
    }
}

/// Ordered transcript of echoed input and command output.
///
/// Besides the lines themselves it counts every line ever appended and every
/// wholesale clear, so a renderer can tell which lines are new even after a
/// limit has dropped old ones.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Scrollback {
    lines: Vec<String>,
    limit: Option<usize>,
    appended: u64,
    clears: u64,
}

impl Scrollback {
    /// Unbounded transcript.
    pub fn new() -> Self {
        Self::default()
    }

    /// Transcript that drops its oldest lines beyond `limit`.
    pub fn with_limit(limit: Option<usize>) -> Self {
        Self {
            limit,
            ..Self::default()
        }
    }

    /// Append the `> <line>` echo of a submitted command.
    pub fn echo(&mut self, line: &str) {
        self.push(format!("{ECHO_PREFIX}{line}"));
    }

    /// Append one line verbatim.
    pub fn push(&mut self, line: String) {
        self.lines.push(line);
        self.appended += 1;
        self.enforce_limit();
    }

    /// Append handler output after splitting it with [`split_output`].
    pub fn append_output(&mut self, text: Option<&str>) {
        self.extend(split_output(text));
    }

    /// Append already-split lines.
    pub fn extend<I: IntoIterator<Item = String>>(&mut self, lines: I) {
        for line in lines {
            self.lines.push(line);
            self.appended += 1;
        }
        self.enforce_limit();
    }

    /// Drop every line.
    pub fn clear(&mut self) {
        self.lines.clear();
        self.clears += 1;
    }

    /// Replace everything with a single line.
    pub fn reset_to(&mut self, sentinel: &str) {
        self.clear();
        self.push(sentinel.to_string());
    }

    /// Lines appended over the transcript's lifetime, including dropped ones.
    pub fn total_appended(&self) -> u64 {
        self.appended
    }

    /// How many times the transcript was cleared or reset.
    pub fn clear_count(&self) -> u64 {
        self.clears
    }

    /// Current lines, oldest first.
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    fn enforce_limit(&mut self) {
        if let Some(limit) = self.limit
            && self.lines.len() > limit
        {
            let excess = self.lines.len() - limit;
            self.lines.drain(..excess);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_none_is_empty() {
        assert!(split_output(None).is_empty());
    }

    #[test]
    fn split_empty_is_one_blank_line() {
        assert_eq!(split_output(Some("")), vec![String::new()]);
    }

    #[test]
    fn split_on_newlines() {
        assert_eq!(split_output(Some("a\nb\nc")), vec!["a", "b", "c"]);
    }

    #[test]
    fn split_keeps_trailing_blank() {
        assert_eq!(split_output(Some("a\n")), vec!["a", ""]);
    }

    #[test]
    fn echo_then_output_order() {
        let mut sb = Scrollback::new();
        sb.echo("whoami");
        sb.append_output(Some("guest"));
        assert_eq!(sb.lines(), ["> whoami", "guest"]);
    }

    #[test]
    fn reset_leaves_single_sentinel() {
        let mut sb = Scrollback::new();
        sb.echo("a");
        sb.echo("b");
        sb.reset_to("restarted");
        assert_eq!(sb.lines(), ["restarted"]);
    }

    #[test]
    fn counters_track_appends_and_clears() {
        let mut sb = Scrollback::new();
        sb.echo("help");
        sb.append_output(Some("a\nb"));
        assert_eq!(sb.total_appended(), 3);
        assert_eq!(sb.clear_count(), 0);
        sb.clear();
        sb.reset_to("restarted");
        assert_eq!(sb.total_appended(), 4);
        assert_eq!(sb.clear_count(), 2);
    }

    #[test]
    fn appended_count_survives_limit() {
        let mut sb = Scrollback::with_limit(Some(2));
        sb.append_output(Some("1\n2\n3"));
        assert_eq!(sb.len(), 2);
        assert_eq!(sb.total_appended(), 3);
    }

    #[test]
    fn limit_drops_oldest_lines() {
        let mut sb = Scrollback::with_limit(Some(3));
        sb.append_output(Some("1\n2\n3\n4\n5"));
        assert_eq!(sb.lines(), ["3", "4", "5"]);
        sb.push("6".to_string());
        assert_eq!(sb.lines(), ["4", "5", "6"]);
    }
}
