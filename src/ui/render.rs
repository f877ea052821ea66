use crate::ui::app::{App, View};
use crate::ui::footer::Footer;
use crate::ui::header::Header;
use crate::ui::home::render_home;
use crate::ui::layout::layout_regions;
use crate::ui::resources::render_resources;
use ratatui::widgets::Clear;
use ratatui::Frame;

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let area = frame.area();
    let (header, body, footer) = layout_regions(area);

    let profile = app.profile();
    let header_widget = Header::new(profile.page_title(), profile.page_description());
    frame.render_widget(header_widget.widget(app.view()), header);

    frame.render_widget(Clear, body);
    match app.view() {
        View::Home => render_home(frame, body, profile, app.home_scroll()),
        View::Resources => render_resources(frame, body, app.resources(), app.resource_limit()),
    }

    let footer_widget = Footer::new();
    frame.render_widget(footer_widget.widget(footer, app.view()), footer);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    fn screen_text(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(120, 40)).unwrap();
        terminal.draw(|frame| draw(frame, app)).unwrap();
        let buffer = terminal.backend().buffer();
        let mut text = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                text.push_str(buffer[(x, y)].symbol());
            }
            text.push('\n');
        }
        text
    }

    #[test]
    fn home_view_shows_title_and_hero() {
        let app = App::new(&Config::default());
        let text = screen_text(&app);
        assert!(text.contains("[Your Name] - Portfolio"));
        assert!(text.contains("Hi, I'm [Your Name]"));
        assert!(text.contains("Scroll"));
    }

    #[test]
    fn resources_view_shows_load_button() {
        let mut app = App::new(&Config::default());
        app.set_view(View::Resources);
        let text = screen_text(&app);
        assert!(text.contains("Load Top 5 Coding Resources"));
        assert!(text.contains("Tab: Focus"));
    }
}
