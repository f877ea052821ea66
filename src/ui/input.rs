use crate::ui::app::{App, View};
use crate::ui::resources::{ResourcesFocus, ResourcesIntent};
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Lines scrolled by PageUp/PageDown on the home page.
const PAGE_SCROLL: i32 = 10;

pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if is_ctrl_char(key, 'q') || is_ctrl_char(key, 'c') || key.code == KeyCode::Char('q') {
        app.request_quit();
        return;
    }

    match key.code {
        KeyCode::Char('1') | KeyCode::F(1) => {
            app.set_view(View::Home);
            return;
        }
        KeyCode::Char('2') | KeyCode::F(2) => {
            app.set_view(View::Resources);
            return;
        }
        _ => {}
    }

    match app.view() {
        View::Home => handle_home_key(app, key),
        View::Resources => handle_resources_key(app, key),
    }
}

fn handle_home_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Up | KeyCode::Char('k') => app.scroll_home(-1),
        KeyCode::Down | KeyCode::Char('j') => app.scroll_home(1),
        KeyCode::PageUp => app.scroll_home(-PAGE_SCROLL),
        KeyCode::PageDown => app.scroll_home(PAGE_SCROLL),
        KeyCode::Home => app.scroll_home(-(u16::MAX as i32)),
        _ => {}
    }
}

fn handle_resources_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Tab => {
            app.dispatch_resources(ResourcesIntent::FocusNext);
            return;
        }
        KeyCode::BackTab => {
            app.dispatch_resources(ResourcesIntent::FocusPrev);
            return;
        }
        KeyCode::Char('r') => {
            app.request_load_resources();
            return;
        }
        _ => {}
    }

    match app.resources().focus {
        ResourcesFocus::LoadButton => {
            if matches!(key.code, KeyCode::Enter | KeyCode::Char(' ')) {
                app.request_load_resources();
            }
        }
        ResourcesFocus::TopicFilter => match key.code {
            KeyCode::Right | KeyCode::Enter | KeyCode::Char(' ') => {
                app.dispatch_resources(ResourcesIntent::CycleTopic { forward: true })
            }
            KeyCode::Left => app.dispatch_resources(ResourcesIntent::CycleTopic { forward: false }),
            _ => {}
        },
        ResourcesFocus::LevelFilter => match key.code {
            KeyCode::Right | KeyCode::Enter | KeyCode::Char(' ') => {
                app.dispatch_resources(ResourcesIntent::CycleLevel { forward: true })
            }
            KeyCode::Left => app.dispatch_resources(ResourcesIntent::CycleLevel { forward: false }),
            _ => {}
        },
        ResourcesFocus::Cards => match key.code {
            KeyCode::Left => app.move_card(-1, 0),
            KeyCode::Right => app.move_card(1, 0),
            KeyCode::Up => app.move_card(0, -1),
            KeyCode::Down => app.move_card(0, 1),
            KeyCode::Enter | KeyCode::Char('o') => {
                app.open_selected_link();
            }
            _ => {}
        },
    }
}

fn is_ctrl_char(key: KeyEvent, needle: char) -> bool {
    matches!(key.code, KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&needle))
        && key.modifiers.contains(KeyModifiers::CONTROL)
}
