//! Player setup form: names and glyph choice for both marks.

use crate::games::tictactoe::{Mark, PlayerSetup};
use crossterm::event::KeyCode;

/// Focusable field of the setup form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    /// Display name entry.
    Name(Mark),
    /// Glyph picker.
    Glyph(Mark),
}

const FIELDS: [Field; 4] = [
    Field::Name(Mark::First),
    Field::Glyph(Mark::First),
    Field::Name(Mark::Second),
    Field::Glyph(Mark::Second),
];

/// Result of a key press on the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormEvent {
    /// Keep editing.
    Editing,
    /// The player asked to start.
    Submit,
    /// The player asked to leave.
    Cancel,
}

/// Editable player settings for both marks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SetupForm {
    first: PlayerSetup,
    second: PlayerSetup,
    focus: usize,
}

impl SetupForm {
    /// Creates a form pre-filled with the given values.
    pub fn new(first: PlayerSetup, second: PlayerSetup) -> Self {
        Self {
            first,
            second,
            focus: 0,
        }
    }

    /// Current values for `mark`.
    pub fn setup(&self, mark: Mark) -> &PlayerSetup {
        match mark {
            Mark::First => &self.first,
            Mark::Second => &self.second,
        }
    }

    fn setup_mut(&mut self, mark: Mark) -> &mut PlayerSetup {
        match mark {
            Mark::First => &mut self.first,
            Mark::Second => &mut self.second,
        }
    }

    /// The focused field.
    pub fn focus(&self) -> Field {
        FIELDS[self.focus]
    }

    /// Both setups, ready for the engine.
    pub fn values(&self) -> (PlayerSetup, PlayerSetup) {
        (self.first.clone(), self.second.clone())
    }

    /// Applies a key press.
    pub fn handle_key(&mut self, key: KeyCode) -> FormEvent {
        match (self.focus(), key) {
            (_, KeyCode::Enter) => return FormEvent::Submit,
            (_, KeyCode::Esc) => return FormEvent::Cancel,
            (_, KeyCode::Tab | KeyCode::Down) => self.focus = (self.focus + 1) % FIELDS.len(),
            (_, KeyCode::BackTab | KeyCode::Up) => {
                self.focus = (self.focus + FIELDS.len() - 1) % FIELDS.len()
            }
            (Field::Name(mark), KeyCode::Char(c)) => self.setup_mut(mark).display_name.push(c),
            (Field::Name(mark), KeyCode::Backspace) => {
                self.setup_mut(mark).display_name.pop();
            }
            (Field::Glyph(mark), KeyCode::Left) => self.cycle_glyph(mark, -1),
            (Field::Glyph(mark), KeyCode::Right | KeyCode::Char(' ')) => self.cycle_glyph(mark, 1),
            _ => {}
        }
        FormEvent::Editing
    }

    /// Index of the selected glyph in the mark's catalog, if it is one.
    pub fn glyph_index(&self, mark: Mark) -> Option<usize> {
        let glyph = &self.setup(mark).glyph;
        mark.glyph_options().iter().position(|o| o.glyph == glyph.as_str())
    }

    fn cycle_glyph(&mut self, mark: Mark, step: isize) {
        let options = mark.glyph_options();
        let len = options.len() as isize;
        let next = match self.glyph_index(mark) {
            Some(i) => (i as isize + step).rem_euclid(len),
            None => 0,
        };
        self.setup_mut(mark).glyph = options[next as usize].glyph.to_string();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form() -> SetupForm {
        SetupForm::new(
            PlayerSetup::default_for(Mark::First),
            PlayerSetup::default_for(Mark::Second),
        )
    }

    #[test]
    fn test_typing_edits_focused_name() {
        let mut form = form();
        for _ in 0.."Player 1".len() {
            form.handle_key(KeyCode::Backspace);
        }
        for c in "Ada".chars() {
            form.handle_key(KeyCode::Char(c));
        }
        assert_eq!(form.setup(Mark::First).display_name, "Ada");
        assert_eq!(form.setup(Mark::Second).display_name, "Player 2");
    }

    #[test]
    fn test_glyph_cycles_and_wraps() {
        let mut form = form();
        form.handle_key(KeyCode::Tab);
        assert_eq!(form.focus(), Field::Glyph(Mark::First));
        form.handle_key(KeyCode::Right);
        assert_eq!(form.setup(Mark::First).glyph, "🔥");
        form.handle_key(KeyCode::Left);
        form.handle_key(KeyCode::Left);
        assert_eq!(form.setup(Mark::First).glyph, "🎯");
    }

    #[test]
    fn test_focus_wraps_backwards() {
        let mut form = form();
        form.handle_key(KeyCode::BackTab);
        assert_eq!(form.focus(), Field::Glyph(Mark::Second));
    }

    #[test]
    fn test_enter_submits() {
        let mut form = form();
        assert_eq!(form.handle_key(KeyCode::Enter), FormEvent::Submit);
        assert_eq!(form.handle_key(KeyCode::Esc), FormEvent::Cancel);
    }
}
