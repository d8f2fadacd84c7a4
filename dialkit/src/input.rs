//! Single-line text input field.

/// Text content, cursor and selection of an input field.
///
/// `cursor` and `anchor` are character indices, not byte offsets.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InputField {
    /// Shown while the field is empty.
    pub placeholder: String,
    text: String,
    cursor: usize,
    /// Anchor position for selection. When Some and != cursor, text is selected.
    anchor: Option<usize>,
}

impl InputField {
    pub fn new(placeholder: impl Into<String>) -> Self {
        Self {
            placeholder: placeholder.into(),
            ..Default::default()
        }
    }

    /// Replace the text and place the cursor at its end.
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.set_text(text);
        self
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// The text to draw: the content, or the placeholder when empty.
    pub fn display(&self) -> &str {
        if self.text.is_empty() {
            &self.placeholder
        } else {
            &self.text
        }
    }

    /// Parse the trimmed content as a number.
    pub fn parse_value(&self) -> Option<f64> {
        self.text.trim().parse().ok()
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
        self.cursor = self.char_count();
        self.anchor = None;
    }

    /// Get the selection range as (start, end) where start <= end.
    pub fn selection(&self) -> Option<(usize, usize)> {
        self.anchor
            .filter(|&a| a != self.cursor)
            .map(|a| (a.min(self.cursor), a.max(self.cursor)))
    }

    pub fn selected_text(&self) -> Option<&str> {
        let (start, end) = self.selection()?;
        Some(&self.text[self.byte_index(start)..self.byte_index(end)])
    }

    pub fn clear_selection(&mut self) {
        self.anchor = None;
    }

    pub fn select_all(&mut self) {
        if !self.text.is_empty() {
            self.anchor = Some(0);
            self.cursor = self.char_count();
        }
    }

    /// Insert a character at the cursor, replacing the selection if any.
    pub fn insert_char(&mut self, c: char) {
        self.delete_selection();
        let at = self.byte_index(self.cursor);
        self.text.insert(at, c);
        self.cursor += 1;
    }

    /// Insert a string at the cursor, replacing the selection if any.
    pub fn insert_str(&mut self, s: &str) {
        self.delete_selection();
        let at = self.byte_index(self.cursor);
        self.text.insert_str(at, s);
        self.cursor += s.chars().count();
    }

    /// Delete the character before the cursor or the selection.
    /// Returns true if the text changed.
    pub fn backspace(&mut self) -> bool {
        if self.delete_selection() {
            return true;
        }
        if self.cursor == 0 {
            return false;
        }
        let start = self.byte_index(self.cursor - 1);
        let end = self.byte_index(self.cursor);
        self.text.replace_range(start..end, "");
        self.cursor -= 1;
        true
    }

    /// Delete the character after the cursor or the selection.
    /// Returns true if the text changed.
    pub fn delete(&mut self) -> bool {
        if self.delete_selection() {
            return true;
        }
        if self.cursor >= self.char_count() {
            return false;
        }
        let start = self.byte_index(self.cursor);
        let end = self.byte_index(self.cursor + 1);
        self.text.replace_range(start..end, "");
        true
    }

    /// Move the cursor by `delta` characters, optionally extending the selection.
    pub fn move_cursor(&mut self, delta: isize, extend_selection: bool) {
        if extend_selection {
            if self.anchor.is_none() {
                self.anchor = Some(self.cursor);
            }
        } else if let Some((start, end)) = self.selection() {
            // Collapse to the edge of the selection in the direction of travel
            self.cursor = if delta < 0 { start } else { end };
            self.anchor = None;
            return;
        } else {
            self.anchor = None;
        }
        self.cursor = self
            .cursor
            .saturating_add_signed(delta)
            .min(self.char_count());
    }

    pub fn move_to_start(&mut self, extend_selection: bool) {
        self.jump_to(0, extend_selection);
    }

    pub fn move_to_end(&mut self, extend_selection: bool) {
        self.jump_to(self.char_count(), extend_selection);
    }

    fn jump_to(&mut self, pos: usize, extend_selection: bool) {
        if extend_selection {
            if self.anchor.is_none() {
                self.anchor = Some(self.cursor);
            }
        } else {
            self.anchor = None;
        }
        self.cursor = pos;
    }

    fn delete_selection(&mut self) -> bool {
        let Some((start, end)) = self.selection() else {
            self.anchor = None;
            return false;
        };
        let range = self.byte_index(start)..self.byte_index(end);
        self.text.replace_range(range, "");
        self.cursor = start;
        self.anchor = None;
        true
    }

    fn char_count(&self) -> usize {
        self.text.chars().count()
    }

    fn byte_index(&self, char_index: usize) -> usize {
        self.text
            .char_indices()
            .nth(char_index)
            .map(|(i, _)| i)
            .unwrap_or(self.text.len())
    }
}
