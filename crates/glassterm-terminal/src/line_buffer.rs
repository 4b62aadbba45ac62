//! The in-progress input line.

/// Text the user is typing, before it is submitted.
///
/// There is no cursor: characters are appended at the end and removed from
/// the end. History navigation replaces the whole contents.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LineBuffer {
    text: String,
}

impl LineBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one typed character.
    pub fn push(&mut self, ch: char) {
        self.text.push(ch);
    }

    /// Remove the last character, if any.
    pub fn backspace(&mut self) {
        self.text.pop();
    }

    /// Replace the contents (used when mirroring a history entry).
    pub fn set(&mut self, text: &str) {
        self.text.clear();
        self.text.push_str(text);
    }

    /// Empty the line.
    pub fn clear(&mut self) {
        self.text.clear();
    }

    /// Take the contents, leaving the buffer empty.
    pub fn take(&mut self) -> String {
        std::mem::take(&mut self.text)
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}
