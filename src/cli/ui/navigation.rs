use std::io;

use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind},
    terminal,
};

use crate::dashboard::SortKey;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavKey {
    Left,
    Right,
    Esc,
    Char(char),
    Unknown,
}

/// What a key press means while browsing the category tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BrowseAction {
    PreviousTable,
    NextTable,
    ClickHeader(SortKey),
    Reset,
    Quit,
}

pub fn read_nav_key() -> io::Result<NavKey> {
    match event::read()? {
        Event::Key(key) if key.kind != KeyEventKind::Release => Ok(match key.code {
            KeyCode::Left => NavKey::Left,
            KeyCode::Right | KeyCode::Tab => NavKey::Right,
            KeyCode::Esc => NavKey::Esc,
            KeyCode::Char(c) => NavKey::Char(c),
            _ => NavKey::Unknown,
        }),
        _ => Ok(NavKey::Unknown),
    }
}

/// Number keys click the column headers in display order.
pub fn browse_action(key: NavKey) -> Option<BrowseAction> {
    match key {
        NavKey::Left => Some(BrowseAction::PreviousTable),
        NavKey::Right => Some(BrowseAction::NextTable),
        NavKey::Esc | NavKey::Char('q') => Some(BrowseAction::Quit),
        NavKey::Char('r') => Some(BrowseAction::Reset),
        NavKey::Char(c) => c
            .to_digit(10)
            .and_then(|digit| (digit as usize).checked_sub(1))
            .and_then(|idx| SortKey::ALL.get(idx).copied())
            .map(BrowseAction::ClickHeader),
        NavKey::Unknown => None,
    }
}

/// Keeps the terminal in raw mode until dropped.
pub struct RawModeGuard {
    active: bool,
}

impl RawModeGuard {
    pub fn activate() -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        Ok(Self { active: true })
    }
}

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        if self.active {
            let _ = terminal::disable_raw_mode();
            self.active = false;
        }
    }
}
