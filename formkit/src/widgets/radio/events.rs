//! Event handling for the RadioControl.

use crate::events::{ControlEvents, EventResult};
use crate::keybinds::{Key, KeyCombo};

use super::RadioControl;

impl<T: Clone + PartialEq + Send + Sync + 'static> ControlEvents for RadioControl<T> {
    fn on_key(&self, key: &KeyCombo) -> EventResult {
        // Focus is leaving: touch, but let the host move focus
        if matches!(key.key, Key::Tab | Key::BackTab) {
            self.blur();
            return EventResult::Ignored;
        }

        if key.modifiers.any() || self.is_disabled() {
            return EventResult::Ignored;
        }

        let len = self.len();
        if len == 0 {
            return EventResult::Ignored;
        }

        let current = self.selected_index();
        let target = match key.key {
            Key::Space | Key::Enter => current.unwrap_or(0),
            Key::Up | Key::Left | Key::Char('k') | Key::Char('h') => match current {
                Some(0) | None => len - 1,
                Some(index) => index - 1,
            },
            Key::Down | Key::Right | Key::Char('j') | Key::Char('l') => match current {
                Some(index) if index + 1 < len => index + 1,
                _ => 0,
            },
            Key::Home => 0,
            Key::End => len - 1,
            _ => return EventResult::Ignored,
        };

        self.select(target);
        EventResult::Consumed
    }

    fn on_click(&self, x: u16, y: u16) -> EventResult {
        if self.is_disabled() {
            return EventResult::Ignored;
        }

        match self.layout().option_at(x, y) {
            Some(index) => {
                self.select(index);
                EventResult::Consumed
            }
            None => EventResult::Ignored,
        }
    }
}
