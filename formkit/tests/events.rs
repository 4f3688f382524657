//! Tests for keyboard and mouse handling on a RadioControl.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use formkit::events::{ControlEvents, EventResult};
use formkit::forms::{FormBinding, ValueAccessor};
use formkit::keybinds::{Key, KeyCombo, Modifiers};
use formkit::widgets::radio::{DisplayMode, RadioControl, RadioOption};

fn sizes(display: DisplayMode) -> RadioControl<&'static str> {
    let radio = RadioControl::new(None);
    radio.configure(
        vec![
            RadioOption::new("Small", "S"),
            RadioOption::new("Medium", "M"),
            RadioOption::new("Large", "L"),
        ],
        "Size",
        display,
        None,
    );
    radio
}

fn press(radio: &RadioControl<&'static str>, key: Key) -> EventResult {
    radio.on_key(&KeyCombo::key(key))
}

#[test]
fn test_space_selects_first_when_nothing_selected() {
    let radio = sizes(DisplayMode::Stacked);
    assert_eq!(press(&radio, Key::Space), EventResult::Consumed);
    assert_eq!(radio.value(), Some("S"));
}

#[test]
fn test_arrows_move_and_wrap() {
    let radio = sizes(DisplayMode::Stacked);

    press(&radio, Key::Down);
    assert_eq!(radio.value(), Some("S"));
    press(&radio, Key::Down);
    press(&radio, Key::Down);
    assert_eq!(radio.value(), Some("L"));
    press(&radio, Key::Down);
    assert_eq!(radio.value(), Some("S"));
    press(&radio, Key::Up);
    assert_eq!(radio.value(), Some("L"));
}

#[test]
fn test_up_with_nothing_selected_picks_last() {
    let radio = sizes(DisplayMode::Inline);
    press(&radio, Key::Left);
    assert_eq!(radio.value(), Some("L"));
}

#[test]
fn test_vim_keys_and_home_end() {
    let radio = sizes(DisplayMode::Stacked);

    press(&radio, Key::End);
    assert_eq!(radio.value(), Some("L"));
    press(&radio, Key::Char('k'));
    assert_eq!(radio.value(), Some("M"));
    press(&radio, Key::Char('j'));
    assert_eq!(radio.value(), Some("L"));
    press(&radio, Key::Home);
    assert_eq!(radio.value(), Some("S"));
}

#[test]
fn test_each_key_selection_notifies() {
    let radio = sizes(DisplayMode::Stacked);
    let count = Arc::new(AtomicUsize::new(0));
    let sink = Arc::clone(&count);
    radio.on_value_change(move |_| {
        sink.fetch_add(1, Ordering::SeqCst);
    });

    press(&radio, Key::Down);
    press(&radio, Key::Enter);

    assert_eq!(count.load(Ordering::SeqCst), 2);
}

#[test]
fn test_modified_and_unknown_keys_are_ignored() {
    let radio = sizes(DisplayMode::Stacked);
    let ctrl = Modifiers {
        ctrl: true,
        ..Modifiers::NONE
    };

    assert_eq!(
        radio.on_key(&KeyCombo::new(Key::Down, ctrl)),
        EventResult::Ignored
    );
    assert_eq!(press(&radio, Key::Char('x')), EventResult::Ignored);
    assert_eq!(press(&radio, Key::Escape), EventResult::Ignored);
    assert_eq!(radio.value(), None);
}

#[test]
fn test_tab_touches_and_passes_focus_on() {
    let binding = FormBinding::new(None);
    let radio: RadioControl<bool> = RadioControl::yes_no(Some(&binding));

    assert_eq!(radio.on_key(&KeyCombo::key(Key::Tab)), EventResult::Ignored);

    assert!(binding.touched());
    assert_eq!(radio.value(), None);
}

#[test]
fn test_disabled_ignores_input() {
    let radio = sizes(DisplayMode::Stacked);
    radio.set_disabled_state(true);

    assert_eq!(press(&radio, Key::Space), EventResult::Ignored);
    assert_eq!(radio.on_click(0, 1), EventResult::Ignored);
    assert_eq!(radio.value(), None);
}

#[test]
fn test_empty_group_ignores_input() {
    let radio: RadioControl<bool> = RadioControl::new(None);
    assert_eq!(radio.on_key(&KeyCombo::key(Key::Space)), EventResult::Ignored);
}

#[test]
fn test_click_selects_stacked_option() {
    let radio = sizes(DisplayMode::Stacked);

    assert_eq!(radio.on_click(2, 2), EventResult::Consumed);
    assert_eq!(radio.value(), Some("M"));

    // Label row and past the end of a row
    assert_eq!(radio.on_click(0, 0), EventResult::Ignored);
    assert_eq!(radio.on_click(20, 3), EventResult::Ignored);
    assert_eq!(radio.value(), Some("M"));
}

#[test]
fn test_click_selects_inline_option() {
    // "◯ Small  ◯ Medium  ◯ Large"
    let radio = sizes(DisplayMode::Inline);

    assert_eq!(radio.on_click(7, 1), EventResult::Ignored);
    assert_eq!(radio.on_click(9, 1), EventResult::Consumed);
    assert_eq!(radio.value(), Some("M"));
    assert_eq!(radio.on_click(19, 1), EventResult::Consumed);
    assert_eq!(radio.value(), Some("L"));
}
