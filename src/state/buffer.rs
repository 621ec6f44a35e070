use unicode_width::UnicodeWidthStr;

/// The editable text of one tab. The command layer touches it only through
/// `get_text`/`set_text`; the cursor-level editing operations exist for the
/// presentation layer. The cursor is a byte offset, always on a char
/// boundary. There is no edit history.
#[derive(Debug, Default)]
pub struct StringBuffer {
    text: String,
    cursor: usize,
}

impl StringBuffer {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            cursor: 0,
        }
    }

    pub fn get_text(&self) -> &str {
        &self.text
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
        self.cursor = 0;
    }

    pub fn insert_char(&mut self, ch: char) {
        self.text.insert(self.cursor, ch);
        self.cursor += ch.len_utf8();
    }

    pub fn insert_newline(&mut self) {
        self.insert_char('\n');
    }

    pub fn backspace(&mut self) {
        let Some(previous) = self.text[..self.cursor].chars().next_back() else {
            return;
        };
        self.cursor -= previous.len_utf8();
        self.text.remove(self.cursor);
    }

    pub fn move_left(&mut self) {
        if let Some(previous) = self.text[..self.cursor].chars().next_back() {
            self.cursor -= previous.len_utf8();
        }
    }

    pub fn move_right(&mut self) {
        if let Some(next) = self.text[self.cursor..].chars().next() {
            self.cursor += next.len_utf8();
        }
    }

    pub fn move_up(&mut self) {
        let line_start = self.current_line_start();
        if line_start == 0 {
            return;
        }
        let column = self.text[line_start..self.cursor].chars().count();
        let previous_end = line_start - 1;
        let previous_start = self.text[..previous_end]
            .rfind('\n')
            .map(|idx| idx + 1)
            .unwrap_or(0);
        self.cursor = Self::offset_at_column(&self.text, previous_start, previous_end, column);
    }

    pub fn move_down(&mut self) {
        let Some(newline) = self.text[self.cursor..].find('\n') else {
            return;
        };
        let next_start = self.cursor + newline + 1;
        let next_end = self.text[next_start..]
            .find('\n')
            .map(|idx| next_start + idx)
            .unwrap_or(self.text.len());
        let line_start = self.current_line_start();
        let column = self.text[line_start..self.cursor].chars().count();
        self.cursor = Self::offset_at_column(&self.text, next_start, next_end, column);
    }

    /// Zero-based line of the cursor and its display-cell column, for
    /// placing the terminal cursor.
    pub fn cursor_row_col(&self) -> (u16, u16) {
        let row = self.text[..self.cursor].matches('\n').count();
        let line_start = self.current_line_start();
        let col = self.text[line_start..self.cursor].width();
        (row as u16, col as u16)
    }

    fn current_line_start(&self) -> usize {
        self.text[..self.cursor]
            .rfind('\n')
            .map(|idx| idx + 1)
            .unwrap_or(0)
    }

    fn offset_at_column(text: &str, start: usize, end: usize, column: usize) -> usize {
        let mut offset = start;
        for (taken, ch) in text[start..end].chars().enumerate() {
            if taken == column {
                break;
            }
            offset += ch.len_utf8();
        }
        offset
    }
}
