use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::app::{App, Screen};

/// Input action that can be performed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Quit,
    NextScreen,
    PrevScreen,
    CarouselNext,
    CarouselPrev,
    CarouselGoTo(usize),
    ScrollDown,
    ScrollUp,
    CycleMatchFilter, // Matches page: all / upcoming / past
    CycleTeam,
    ToggleRosterTab,
    CycleYear,
    CycleMonth,
    CycleDays,
    CycleLimit,
    ResetFilters,
    OpenStream,
    OpenVlr,
    AcceptConsent,
    DeclineConsent,
    ResetConsent,
    Reload,
    None,
}

/// Handle a key event and return the corresponding action
pub fn handle_key_event(key: KeyEvent, app: &App) -> Action {
    // The consent banner takes the answer keys while it is open
    if app.show_consent_banner {
        match key.code {
            KeyCode::Char('a') => return Action::AcceptConsent,
            KeyCode::Char('e') => return Action::DeclineConsent,
            _ => {}
        }
    }

    match (key.code, key.modifiers) {
        // Quit
        (KeyCode::Char('q'), KeyModifiers::NONE) => Action::Quit,
        (KeyCode::Char('c'), KeyModifiers::CONTROL) => Action::Quit,

        // Pages
        (KeyCode::Tab, _) => Action::NextScreen,
        (KeyCode::BackTab, _) => Action::PrevScreen,

        // Page scroll
        (KeyCode::Char('j'), KeyModifiers::NONE) | (KeyCode::Down, _) => Action::ScrollDown,
        (KeyCode::Char('k'), KeyModifiers::NONE) | (KeyCode::Up, _) => Action::ScrollUp,

        // Carousel
        (KeyCode::Char('h'), KeyModifiers::NONE) | (KeyCode::Left, _)
            if app.screen == Screen::Schedule =>
        {
            Action::CarouselPrev
        }
        (KeyCode::Char('l'), KeyModifiers::NONE) | (KeyCode::Right, _)
            if app.screen == Screen::Schedule =>
        {
            Action::CarouselNext
        }
        (KeyCode::Char(c @ '1'..='9'), KeyModifiers::NONE) if app.screen == Screen::Schedule => {
            Action::CarouselGoTo(c as usize - '1' as usize)
        }
        (KeyCode::Char('o'), KeyModifiers::NONE) if app.screen == Screen::Schedule => {
            Action::OpenStream
        }
        (KeyCode::Char('v'), KeyModifiers::NONE) if app.screen == Screen::Schedule => {
            Action::OpenVlr
        }

        // Team page
        (KeyCode::Char('t'), KeyModifiers::NONE) if app.screen == Screen::Team => Action::CycleTeam,
        (KeyCode::Char('c'), KeyModifiers::NONE) if app.screen == Screen::Team => {
            Action::ToggleRosterTab
        }

        // Result filters
        (KeyCode::Char('f'), KeyModifiers::NONE) if app.screen == Screen::Matches => {
            Action::CycleMatchFilter
        }
        (KeyCode::Char('y'), KeyModifiers::NONE) => Action::CycleYear,
        (KeyCode::Char('m'), KeyModifiers::NONE) => Action::CycleMonth,
        (KeyCode::Char('d'), KeyModifiers::NONE) => Action::CycleDays,
        (KeyCode::Char('n'), KeyModifiers::NONE) => Action::CycleLimit,
        (KeyCode::Char('x'), KeyModifiers::NONE) => Action::ResetFilters,

        (KeyCode::Char('C'), KeyModifiers::SHIFT) => Action::ResetConsent,
        (KeyCode::Char('r'), KeyModifiers::NONE) => Action::Reload,

        _ => Action::None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bodax_core::prefs::MemoryPreferenceStore;
    use bodax_core::{AppConfig, AppContext};
    use chrono::Utc;

    use crate::theme::Theme;

    fn app() -> App {
        let ctx = AppContext::new(AppConfig::default(), Box::new(MemoryPreferenceStore::new())).unwrap();
        App::new(ctx, Theme::default(), 120, 40, 0, Utc::now())
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_carousel_keys_only_on_schedule() {
        let mut app = app();
        assert_eq!(handle_key_event(key(KeyCode::Right), &app), Action::CarouselNext);
        assert_eq!(handle_key_event(key(KeyCode::Char('h')), &app), Action::CarouselPrev);
        assert_eq!(handle_key_event(key(KeyCode::Char('3')), &app), Action::CarouselGoTo(2));

        app.screen = Screen::Home;
        assert_eq!(handle_key_event(key(KeyCode::Right), &app), Action::None);
    }

    #[test]
    fn test_consent_banner_keys() {
        let mut app = app();
        assert!(app.show_consent_banner);
        assert_eq!(handle_key_event(key(KeyCode::Char('a')), &app), Action::AcceptConsent);
        assert_eq!(handle_key_event(key(KeyCode::Char('e')), &app), Action::DeclineConsent);

        app.show_consent_banner = false;
        assert_eq!(handle_key_event(key(KeyCode::Char('a')), &app), Action::None);
    }

    #[test]
    fn test_quit_keys() {
        let app = app();
        assert_eq!(handle_key_event(key(KeyCode::Char('q')), &app), Action::Quit);
        assert_eq!(
            handle_key_event(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL), &app),
            Action::Quit
        );
    }

    #[test]
    fn test_team_keys_only_on_team_page() {
        let mut app = app();
        assert_eq!(handle_key_event(key(KeyCode::Char('t')), &app), Action::None);

        app.screen = Screen::Team;
        assert_eq!(handle_key_event(key(KeyCode::Char('t')), &app), Action::CycleTeam);
        assert_eq!(handle_key_event(key(KeyCode::Char('c')), &app), Action::ToggleRosterTab);
    }
}
