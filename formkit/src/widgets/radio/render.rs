//! Radio control rendering.

use ratatui::Frame;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::Widget;

use super::RadioControl;
use super::layout::RadioLayout;

/// A ratatui widget drawing a [`RadioControl`].
///
/// Output is clipped to the render area; use
/// [`RadioControl::intrinsic_height`] to size it.
pub struct RadioGroupView<'a, T> {
    control: &'a RadioControl<T>,
    focused: bool,
    style: Style,
}

impl<'a, T> RadioGroupView<'a, T> {
    pub fn new(control: &'a RadioControl<T>) -> Self {
        Self {
            control,
            focused: false,
            style: Style::default(),
        }
    }

    /// Highlight the option under keyboard focus.
    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    /// Base style for every row.
    pub fn style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }
}

impl<T: Clone + PartialEq + Send + Sync + 'static> Widget for RadioGroupView<'_, T> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let area = area.intersection(buf.area);
        if area.is_empty() {
            return;
        }

        let snapshot = self.control.snapshot();
        let layout = RadioLayout::compute(&snapshot);

        let base = if snapshot.disabled {
            self.style.fg(Color::DarkGray)
        } else {
            self.style
        };
        let error_style = self.style.fg(Color::Red);

        let mut put = |x: u16, y: u16, text: &str, style: Style| {
            if x >= area.width || y >= area.height {
                return;
            }
            let max_width = usize::from(area.width - x);
            buf.set_stringn(area.x + x, area.y + y, text, max_width, style);
        };

        if let Some(row) = layout.label_row {
            put(0, row, &snapshot.label, base.add_modifier(Modifier::BOLD));
            if let (Some(x), Some(error)) = (layout.inline_error_x, snapshot.error.as_deref()) {
                put(x, row, error, error_style);
            }
        }

        let focus_index = snapshot.focus_index();
        for (index, slot) in layout.options.iter().enumerate() {
            // Highlight the focused option within the group
            let style = if self.focused && !snapshot.disabled && index == focus_index {
                base.bg(Color::Rgb(80, 80, 100)).add_modifier(Modifier::BOLD)
            } else {
                base
            };
            put(slot.x, slot.y, &snapshot.option_text(index), style);
        }

        if let (Some(row), Some(help)) = (layout.help_row, snapshot.help_text.as_deref()) {
            put(0, row, help, base.fg(Color::DarkGray));
        }

        if let (Some(row), Some(error)) = (layout.error_row, snapshot.error.as_deref()) {
            put(0, row, error, error_style);
        }
    }
}

/// Render `control` into `area` of the current frame.
pub fn render_radio_group<T: Clone + PartialEq + Send + Sync + 'static>(
    frame: &mut Frame,
    control: &RadioControl<T>,
    area: Rect,
    focused: bool,
) {
    frame.render_widget(RadioGroupView::new(control).focused(focused), area);
}
