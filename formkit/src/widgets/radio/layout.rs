//! Where each part of a radio control lands, shared by rendering and hit
//! testing.

use unicode_width::UnicodeWidthStr;

use super::DisplayMode;
use crate::validation::ErrorDisplay;

/// Columns between options in inline mode.
pub(crate) const INLINE_GAP: u16 = 2;

/// A point-in-time copy of everything the view needs.
#[derive(Debug, Clone, Default)]
pub(crate) struct RadioSnapshot {
    pub label: String,
    /// (label, selected) per option, in display order
    pub options: Vec<(String, bool)>,
    pub help_text: Option<String>,
    pub error: Option<String>,
    pub error_display: ErrorDisplay,
    pub display: DisplayMode,
    pub disabled: bool,
    pub selected_char: char,
    pub unselected_char: char,
}

impl RadioSnapshot {
    pub fn option_text(&self, index: usize) -> String {
        match self.options.get(index) {
            Some((label, selected)) => {
                let indicator = if *selected {
                    self.selected_char
                } else {
                    self.unselected_char
                };
                format!("{indicator} {label}")
            }
            None => String::new(),
        }
    }

    /// The option keyboard focus sits on: the last selected one, else the first.
    pub fn focus_index(&self) -> usize {
        self.options
            .iter()
            .rposition(|(_, selected)| *selected)
            .unwrap_or(0)
    }

    fn help(&self) -> Option<&str> {
        self.help_text.as_deref().filter(|h| !h.is_empty())
    }

    fn inline_error(&self) -> bool {
        self.error.is_some() && self.error_display == ErrorDisplay::Inline && !self.label.is_empty()
    }

    fn error_below(&self) -> bool {
        self.error.is_some() && self.error_display != ErrorDisplay::None && !self.inline_error()
    }
}

/// Position of one option, relative to the control's origin.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Slot {
    pub x: u16,
    pub y: u16,
    pub width: u16,
}

impl Slot {
    fn contains(&self, x: u16, y: u16) -> bool {
        y == self.y && x >= self.x && x < self.x.saturating_add(self.width)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct RadioLayout {
    pub label_row: Option<u16>,
    /// Column where an inline error starts on the label row
    pub inline_error_x: Option<u16>,
    pub options: Vec<Slot>,
    pub help_row: Option<u16>,
    pub error_row: Option<u16>,
    pub width: u16,
    pub height: u16,
}

impl RadioLayout {
    pub fn compute(snapshot: &RadioSnapshot) -> Self {
        let mut layout = RadioLayout::default();
        let mut row = 0u16;

        if !snapshot.label.is_empty() {
            let mut width = text_width(&snapshot.label);
            if snapshot.inline_error() {
                let x = width.saturating_add(1);
                layout.inline_error_x = Some(x);
                width = x.saturating_add(text_width(snapshot.error.as_deref().unwrap_or("")));
            }
            layout.label_row = Some(row);
            layout.width = width;
            row += 1;
        }

        match snapshot.display {
            DisplayMode::Stacked => {
                for index in 0..snapshot.options.len() {
                    let width = text_width(&snapshot.option_text(index));
                    layout.options.push(Slot { x: 0, y: row, width });
                    layout.width = layout.width.max(width);
                    row = row.saturating_add(1);
                }
            }
            DisplayMode::Inline => {
                let mut x = 0u16;
                for index in 0..snapshot.options.len() {
                    if index > 0 {
                        x = x.saturating_add(INLINE_GAP);
                    }
                    let width = text_width(&snapshot.option_text(index));
                    layout.options.push(Slot { x, y: row, width });
                    x = x.saturating_add(width);
                }
                layout.width = layout.width.max(x);
                if !snapshot.options.is_empty() {
                    row += 1;
                }
            }
        }

        if let Some(help) = snapshot.help() {
            layout.help_row = Some(row);
            layout.width = layout.width.max(text_width(help));
            row = row.saturating_add(1);
        }

        if snapshot.error_below() {
            layout.error_row = Some(row);
            layout.width = layout
                .width
                .max(text_width(snapshot.error.as_deref().unwrap_or("")));
            row = row.saturating_add(1);
        }

        layout.height = row;
        layout
    }

    /// The option under a point relative to the control's origin.
    pub fn option_at(&self, x: u16, y: u16) -> Option<usize> {
        self.options.iter().position(|slot| slot.contains(x, y))
    }
}

fn text_width(text: &str) -> u16 {
    u16::try_from(text.width()).unwrap_or(u16::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot(display: DisplayMode) -> RadioSnapshot {
        RadioSnapshot {
            label: "Smoker".into(),
            options: vec![("No".into(), false), ("Yes".into(), true)],
            display,
            selected_char: '◉',
            unselected_char: '◯',
            ..Default::default()
        }
    }

    #[test]
    fn stacked_puts_each_option_on_its_own_row() {
        let layout = RadioLayout::compute(&snapshot(DisplayMode::Stacked));
        assert_eq!(layout.label_row, Some(0));
        assert_eq!(
            layout.options,
            vec![
                Slot { x: 0, y: 1, width: 4 },
                Slot { x: 0, y: 2, width: 5 },
            ]
        );
        assert_eq!(layout.height, 3);
        assert_eq!(layout.width, 6);
    }

    #[test]
    fn inline_separates_options_by_gap() {
        let layout = RadioLayout::compute(&snapshot(DisplayMode::Inline));
        assert_eq!(
            layout.options,
            vec![
                Slot { x: 0, y: 1, width: 4 },
                Slot { x: 6, y: 1, width: 5 },
            ]
        );
        assert_eq!(layout.option_at(5, 1), None);
        assert_eq!(layout.option_at(6, 1), Some(1));
        assert_eq!(layout.height, 2);
    }

    #[test]
    fn errors_follow_display_preference() {
        let mut snap = snapshot(DisplayMode::Stacked);
        snap.help_text = Some("Within the last year".into());
        snap.error = Some("Smoker is required.".into());

        let below = RadioLayout::compute(&snap);
        assert_eq!(below.help_row, Some(3));
        assert_eq!(below.error_row, Some(4));

        snap.error_display = ErrorDisplay::Inline;
        let inline = RadioLayout::compute(&snap);
        assert_eq!(inline.error_row, None);
        assert_eq!(inline.inline_error_x, Some(7));

        snap.error_display = ErrorDisplay::None;
        let hidden = RadioLayout::compute(&snap);
        assert_eq!(hidden.error_row, None);
        assert_eq!(hidden.inline_error_x, None);
    }
}
