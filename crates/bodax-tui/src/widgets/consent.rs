use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::app::App;

pub struct ConsentBannerWidget;

impl ConsentBannerWidget {
    /// Cookie banner shown until the visitor answers
    pub fn render(frame: &mut Frame, app: &App) {
        let theme = &app.theme;
        let area = frame.area();

        let popup_width = 60u16.min(area.width.saturating_sub(4));
        let popup_height = 8u16.min(area.height.saturating_sub(2));
        let popup_area = centered_rect(popup_width, popup_height, area);

        frame.render_widget(Clear, popup_area);

        let block = Block::default()
            .title(" Cookie Settings ")
            .title_alignment(Alignment::Center)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.accent))
            .style(Style::default().bg(theme.bg1));
        let inner_area = block.inner(popup_area);
        frame.render_widget(block, popup_area);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(2),    // Message
                Constraint::Length(1), // Spacer
                Constraint::Length(1), // Hint
            ])
            .split(inner_area);

        let message = Paragraph::new(
            "We use cookies to give you the best experience. Some are required \
             for the site to work; analytics and marketing cookies are optional.",
        )
        .style(Style::default().fg(theme.fg0))
        .wrap(Wrap { trim: true });
        frame.render_widget(message, chunks[0]);

        let key_style = Style::default()
            .fg(theme.accent)
            .add_modifier(Modifier::BOLD);
        let hint = Paragraph::new(Line::from(vec![
            Span::styled("[", Style::default().fg(theme.muted)),
            Span::styled("a", key_style),
            Span::styled("]ccept all  [", Style::default().fg(theme.muted)),
            Span::styled("e", key_style),
            Span::styled("]ssential only", Style::default().fg(theme.muted)),
        ]))
        .alignment(Alignment::Center);
        frame.render_widget(hint, chunks[2]);
    }
}

/// Helper function to create a centered rect
fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width, height)
}
