//! Tests for drawing a RadioControl into a ratatui buffer.

use formkit::forms::{FormBinding, Validators};
use formkit::validation::{ErrorDisplay, Validatable};
use formkit::widgets::radio::{DisplayMode, RadioControl, RadioGroupView, RadioOption};
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier};
use ratatui::widgets::Widget;

fn smoker(display: DisplayMode) -> RadioControl<bool> {
    let radio = RadioControl::new(None);
    radio.configure(
        vec![RadioOption::new("No", false), RadioOption::new("Yes", true)],
        "Smoker",
        display,
        None,
    );
    radio
}

fn draw(view: RadioGroupView<'_, bool>, width: u16, height: u16) -> Buffer {
    let area = Rect::new(0, 0, width, height);
    let mut buf = Buffer::empty(area);
    view.render(area, &mut buf);
    buf
}

fn row(buf: &Buffer, y: u16) -> String {
    (0..buf.area.width)
        .map(|x| buf[(x, y)].symbol())
        .collect::<String>()
        .trim_end()
        .to_string()
}

#[test]
fn test_stacked_rows() {
    let radio = smoker(DisplayMode::Stacked);
    radio.set_value(true);

    let buf = draw(RadioGroupView::new(&radio), 12, 4);

    assert_eq!(row(&buf, 0), "Smoker");
    assert_eq!(row(&buf, 1), "◯ No");
    assert_eq!(row(&buf, 2), "◉ Yes");
    assert_eq!(row(&buf, 3), "");
    assert!(buf[(0, 0)].modifier.contains(Modifier::BOLD));
}

#[test]
fn test_inline_row() {
    let radio = smoker(DisplayMode::Inline);

    let buf = draw(RadioGroupView::new(&radio), 16, 2);

    assert_eq!(row(&buf, 0), "Smoker");
    assert_eq!(row(&buf, 1), "◯ No  ◯ Yes");
    assert_eq!(radio.intrinsic_width(), 11);
    assert_eq!(radio.intrinsic_height(), 2);
}

#[test]
fn test_help_and_error_rows() {
    let binding = FormBinding::new(None).with_validator(Validators::required());
    let radio = RadioControl::yes_no(Some(&binding));
    radio.configure(
        vec![RadioOption::new("No", false), RadioOption::new("Yes", true)],
        "Smoker",
        DisplayMode::Stacked,
        Some("In the last 12 months".to_string()),
    );
    binding.mark_as_touched();

    let buf = draw(RadioGroupView::new(&radio), 24, 5);

    assert_eq!(row(&buf, 3), "In the last 12 months");
    assert_eq!(row(&buf, 4), "Smoker is required.");
    assert_eq!(buf[(0, 3)].fg, Color::DarkGray);
    assert_eq!(buf[(0, 4)].fg, Color::Red);
}

#[test]
fn test_inline_error_on_label_row() {
    let radio = smoker(DisplayMode::Inline);
    radio.set_error_display(ErrorDisplay::Inline);
    radio.set_error("Pick one");

    let buf = draw(RadioGroupView::new(&radio), 20, 3);

    assert_eq!(row(&buf, 0), "Smoker Pick one");
    assert_eq!(row(&buf, 2), "");
    assert_eq!(buf[(7, 0)].fg, Color::Red);
}

#[test]
fn test_output_is_clipped_to_area() {
    let radio = smoker(DisplayMode::Stacked);

    let buf = draw(RadioGroupView::new(&radio), 3, 2);

    assert_eq!(row(&buf, 0), "Smo");
    assert_eq!(row(&buf, 1), "◯ N");
}

#[test]
fn test_focus_highlights_selected_option() {
    let radio = smoker(DisplayMode::Stacked);
    radio.set_value(true);

    let buf = draw(RadioGroupView::new(&radio).focused(true), 12, 3);

    assert!(buf[(0, 2)].modifier.contains(Modifier::BOLD));
    assert_eq!(buf[(0, 2)].bg, Color::Rgb(80, 80, 100));
    assert_eq!(buf[(0, 1)].bg, Color::Reset);
}

#[test]
fn test_focus_without_selection_highlights_first() {
    let radio = smoker(DisplayMode::Stacked);

    let buf = draw(RadioGroupView::new(&radio).focused(true), 12, 3);

    assert_eq!(buf[(0, 1)].bg, Color::Rgb(80, 80, 100));
}

#[test]
fn test_disabled_is_dimmed_and_never_highlighted() {
    let radio = smoker(DisplayMode::Stacked);
    formkit::forms::ValueAccessor::set_disabled_state(&radio, true);

    let buf = draw(RadioGroupView::new(&radio).focused(true), 12, 3);

    assert_eq!(buf[(0, 1)].fg, Color::DarkGray);
    assert_eq!(buf[(0, 1)].bg, Color::Reset);
}

#[test]
fn test_custom_indicators() {
    let radio = smoker(DisplayMode::Inline).with_indicators('x', ' ');
    radio.set_value(false);

    let buf = draw(RadioGroupView::new(&radio), 16, 2);

    assert_eq!(row(&buf, 1), "x No    Yes");
}

#[test]
fn test_duplicate_values_render_only_last_match_checked() {
    let radio: RadioControl<u8> = RadioControl::new(None);
    radio.configure(
        vec![
            RadioOption::new("One", 1),
            RadioOption::new("Uno", 1),
            RadioOption::new("Two", 2),
        ],
        "",
        DisplayMode::Stacked,
        None,
    );
    formkit::forms::ValueAccessor::write_value(&radio, Some(1));

    let area = Rect::new(0, 0, 8, 3);
    let mut buf = Buffer::empty(area);
    RadioGroupView::new(&radio).render(area, &mut buf);

    assert_eq!(row(&buf, 0), "◯ One");
    assert_eq!(row(&buf, 1), "◉ Uno");
    assert_eq!(row(&buf, 2), "◯ Two");
    assert_eq!(radio.selected_index(), Some(1));
}
