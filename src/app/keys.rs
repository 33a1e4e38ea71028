use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::replay::ReplayEvent;

use super::form::FormEdit;

#[derive(Debug, Clone, PartialEq)]
pub(crate) enum KeyAction {
    Quit,
    Replay(ReplayEvent),
    Show,
    Edit(FormEdit),
    Ignore,
}

/// Maps a key press to an action. While the filter panel is open, printable
/// keys edit the focused field; otherwise they drive playback.
pub(crate) fn map_key(key: &KeyEvent, panel_expanded: bool) -> KeyAction {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    if ctrl && matches!(key.code, KeyCode::Char('c')) {
        return KeyAction::Quit;
    }
    if matches!(key.code, KeyCode::Enter) {
        return KeyAction::Show;
    }
    if let Some(event) = slider_event(key.code) {
        return KeyAction::Replay(event);
    }
    if panel_expanded {
        panel_key(key.code, ctrl)
    } else {
        playback_key(key.code)
    }
}

fn slider_event(code: KeyCode) -> Option<ReplayEvent> {
    if matches!(code, KeyCode::Left) {
        Some(ReplayEvent::StepBackward)
    } else if matches!(code, KeyCode::Right) {
        Some(ReplayEvent::StepForward)
    } else if matches!(code, KeyCode::Home) {
        Some(ReplayEvent::SeekStart)
    } else if matches!(code, KeyCode::End) {
        Some(ReplayEvent::SeekEnd)
    } else {
        None
    }
}

fn panel_key(code: KeyCode, ctrl: bool) -> KeyAction {
    if matches!(code, KeyCode::Esc) {
        KeyAction::Replay(ReplayEvent::TogglePanel)
    } else if matches!(code, KeyCode::Tab) {
        KeyAction::Edit(FormEdit::FocusNext)
    } else if matches!(code, KeyCode::BackTab) {
        KeyAction::Edit(FormEdit::FocusPrev)
    } else if matches!(code, KeyCode::Up) {
        KeyAction::Edit(FormEdit::PrevDevice)
    } else if matches!(code, KeyCode::Down) {
        KeyAction::Edit(FormEdit::NextDevice)
    } else if matches!(code, KeyCode::Backspace) {
        KeyAction::Edit(FormEdit::Backspace)
    } else if let KeyCode::Char(ch) = code {
        if !ctrl {
            KeyAction::Edit(FormEdit::Insert(ch))
        } else if ch == 'p' {
            KeyAction::Edit(FormEdit::NextPeriod)
        } else {
            KeyAction::Ignore
        }
    } else {
        KeyAction::Ignore
    }
}

fn playback_key(code: KeyCode) -> KeyAction {
    if matches!(code, KeyCode::Esc | KeyCode::Char('q')) {
        KeyAction::Quit
    } else if matches!(code, KeyCode::Char(' ')) {
        KeyAction::Replay(ReplayEvent::TogglePlay)
    } else if matches!(code, KeyCode::Char('h')) {
        KeyAction::Replay(ReplayEvent::StepBackward)
    } else if matches!(code, KeyCode::Char('l')) {
        KeyAction::Replay(ReplayEvent::StepForward)
    } else if matches!(code, KeyCode::Char('c' | 'f')) {
        KeyAction::Replay(ReplayEvent::TogglePanel)
    } else {
        KeyAction::Ignore
    }
}
