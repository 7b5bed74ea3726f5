//! Text field model for the city input.

/// Edit operations the city field understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEdit {
    Char(char),
    Backspace,
    Delete,
    Left,
    Right,
    Home,
    End,
    Clear,
}

/// Value plus cursor. The cursor is a character index, so multibyte
/// input behaves like any other character.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchInput {
    value: String,
    cursor: usize,
}

impl SearchInput {
    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }

    pub fn apply(&mut self, edit: InputEdit) {
        match edit {
            InputEdit::Char(c) => {
                let at = self.byte_index();
                self.value.insert(at, c);
                self.cursor += 1;
            }
            InputEdit::Backspace => {
                if self.cursor > 0 {
                    self.cursor -= 1;
                    let at = self.byte_index();
                    self.value.remove(at);
                }
            }
            InputEdit::Delete => {
                if self.cursor < self.char_len() {
                    let at = self.byte_index();
                    self.value.remove(at);
                }
            }
            InputEdit::Left => self.cursor = self.cursor.saturating_sub(1),
            InputEdit::Right => self.cursor = (self.cursor + 1).min(self.char_len()),
            InputEdit::Home => self.cursor = 0,
            InputEdit::End => self.cursor = self.char_len(),
            InputEdit::Clear => {
                self.value.clear();
                self.cursor = 0;
            }
        }
    }

    fn char_len(&self) -> usize {
        self.value.chars().count()
    }

    fn byte_index(&self) -> usize {
        self.value
            .char_indices()
            .nth(self.cursor)
            .map(|(i, _)| i)
            .unwrap_or(self.value.len())
    }
}
