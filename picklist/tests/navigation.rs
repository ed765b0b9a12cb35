mod common;

use common::{RecordingViewPort, ViewCall};
use picklist::navigation::{Highlight, Key, KeyCombo, NavCommand, NavState, Navigator, NoopViewPort};

fn open_navigator(index: usize) -> Navigator {
    let mut nav = Navigator::new();
    nav.open(index, false, &mut NoopViewPort);
    nav
}

#[test]
fn test_closed_down_opens() {
    let mut nav = Navigator::new();
    let command = nav.on_key(&KeyCombo::key(Key::Down), 3, &mut NoopViewPort);
    assert_eq!(command, NavCommand::Open);
    assert_eq!(nav.state(), NavState::Closed);
}

#[test]
fn test_closed_ignores_other_keys() {
    let mut nav = Navigator::new();
    assert_eq!(nav.on_key(&KeyCombo::key(Key::Up), 3, &mut NoopViewPort), NavCommand::Ignored);
    assert_eq!(nav.on_key(&KeyCombo::key(Key::Escape), 3, &mut NoopViewPort), NavCommand::Ignored);
}

#[test]
fn test_down_wraps_around() {
    common::init_logging();
    let count = 5;
    let mut nav = open_navigator(0);
    for _ in 0..count {
        nav.on_key(&KeyCombo::key(Key::Down), count, &mut NoopViewPort);
    }
    assert_eq!(nav.highlighted(), 0);
}

#[test]
fn test_up_wraps_to_last() {
    let mut nav = open_navigator(0);
    nav.on_key(&KeyCombo::key(Key::Up), 4, &mut NoopViewPort);
    assert_eq!(nav.highlighted(), 3);
    nav.on_key(&KeyCombo::key(Key::Up), 4, &mut NoopViewPort);
    assert_eq!(nav.highlighted(), 2);
}

#[test]
fn test_home_and_end() {
    let mut nav = open_navigator(2);
    nav.on_key(&KeyCombo::key(Key::End), 6, &mut NoopViewPort);
    assert_eq!(nav.highlighted(), 5);
    nav.on_key(&KeyCombo::key(Key::Home), 6, &mut NoopViewPort);
    assert_eq!(nav.highlighted(), 0);
}

#[test]
fn test_arrows_scroll_highlight_into_view() {
    let mut view = RecordingViewPort::new();
    let mut nav = Navigator::new();
    nav.open(1, true, &mut view);
    view.clear();

    nav.on_key(&KeyCombo::key(Key::Down), 3, &mut view);
    assert_eq!(view.calls(), vec![ViewCall::Highlight(Some(2)), ViewCall::Scroll(2)]);
}

#[test]
fn test_empty_list_navigation_is_harmless() {
    let mut nav = open_navigator(0);
    assert_eq!(nav.on_key(&KeyCombo::key(Key::Down), 0, &mut NoopViewPort), NavCommand::Handled);
    assert_eq!(nav.on_key(&KeyCombo::key(Key::Up), 0, &mut NoopViewPort), NavCommand::Handled);
    assert_eq!(nav.on_key(&KeyCombo::key(Key::Enter), 0, &mut NoopViewPort), NavCommand::Handled);
    assert_eq!(nav.highlighted(), 0);
}

#[test]
fn test_enter_commits_highlighted_row() {
    let mut nav = open_navigator(1);
    assert_eq!(nav.on_key(&KeyCombo::key(Key::Enter), 3, &mut NoopViewPort), NavCommand::Commit(1));
}

#[test]
fn test_enter_on_clear_control_is_noop() {
    let mut nav = open_navigator(1);
    nav.highlight_clear_control(&mut NoopViewPort);
    assert_eq!(nav.highlight(), Highlight::ClearControl);
    assert_eq!(nav.on_key(&KeyCombo::key(Key::Enter), 3, &mut NoopViewPort), NavCommand::Handled);
}

#[test]
fn test_escape_cancels() {
    let mut nav = open_navigator(0);
    assert_eq!(nav.on_key(&KeyCombo::key(Key::Escape), 3, &mut NoopViewPort), NavCommand::Cancel);
}

#[test]
fn test_tab_cancels_when_open() {
    let mut nav = open_navigator(0);
    assert_eq!(nav.on_key(&KeyCombo::key(Key::Tab), 3, &mut NoopViewPort), NavCommand::Cancel);

    let mut nav = Navigator::new();
    assert_eq!(nav.on_key(&KeyCombo::key(Key::Tab), 3, &mut NoopViewPort), NavCommand::Ignored);
}

#[test]
fn test_modified_keys_ignored() {
    let mut nav = open_navigator(0);
    assert_eq!(nav.on_key(&KeyCombo::key(Key::Down).ctrl(), 3, &mut NoopViewPort), NavCommand::Ignored);
    assert_eq!(nav.on_key(&KeyCombo::key(Key::Down).alt(), 3, &mut NoopViewPort), NavCommand::Ignored);
    assert_eq!(nav.highlighted(), 0);
}

#[test]
fn test_keyboard_open_suppresses_hover_until_pointer_moves() {
    let mut nav = Navigator::new();
    nav.open(0, true, &mut NoopViewPort);
    assert!(nav.hover_suppressed());
    assert!(!nav.hover(2, 3, false, &mut NoopViewPort));
    assert_eq!(nav.highlighted(), 0);

    nav.pointer_moved();
    assert!(nav.hover(2, 3, false, &mut NoopViewPort));
    assert_eq!(nav.highlighted(), 2);
}

#[test]
fn test_hover_ignored_in_multi_select() {
    let mut nav = open_navigator(0);
    assert!(!nav.hover(2, 3, true, &mut NoopViewPort));
    assert_eq!(nav.highlighted(), 0);
}

#[test]
fn test_hover_out_of_range_ignored() {
    let mut nav = open_navigator(0);
    assert!(!nav.hover(5, 3, false, &mut NoopViewPort));
}

#[test]
fn test_close_resets_transient_flags() {
    let mut nav = Navigator::new();
    nav.open(0, true, &mut NoopViewPort);
    nav.highlight_clear_control(&mut NoopViewPort);
    nav.close();
    assert!(!nav.is_open());
    assert!(!nav.hover_suppressed());
    assert_eq!(nav.highlight(), Highlight::Row(0));
}
