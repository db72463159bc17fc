use bodax_core::countdown::time_left;
use bodax_core::models::Match;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::fit;
use crate::app::{App, CARD_HEIGHT, CAROUSEL_GUTTER_COLS};

/// Columns left empty between two cards
const CARD_GAP_COLS: i32 = 2;

/// Borders of a card whose edges may be cut off by the strip
fn card_borders(left_clipped: bool, right_clipped: bool) -> Borders {
    let mut borders = Borders::ALL;
    if left_clipped {
        borders.remove(Borders::LEFT);
    }
    if right_clipped {
        borders.remove(Borders::RIGHT);
    }
    borders
}

pub struct MatchCarouselWidget;

impl MatchCarouselWidget {
    pub fn render(frame: &mut Frame, area: Rect, app: &App) {
        let theme = &app.theme;
        let carousel = &app.carousel;

        if carousel.is_empty() {
            let empty = Paragraph::new("No upcoming games scheduled")
                .style(Style::default().fg(theme.muted))
                .alignment(Alignment::Center)
                .block(Block::default().borders(Borders::ALL).border_style(Style::default().fg(theme.bg2)));
            frame.render_widget(empty, Rect { height: area.height.min(3), ..area });
            return;
        }

        let strip = Rect {
            x: area.x + CAROUSEL_GUTTER_COLS,
            y: area.y,
            width: area.width.saturating_sub(CAROUSEL_GUTTER_COLS * 2),
            height: CARD_HEIGHT.min(area.height),
        };

        let cell_w = app.cell_width_px();
        let advance_cols = (carousel.metric().per_item_advance_px / cell_w).round() as i32;
        let card_cols = (advance_cols - CARD_GAP_COLS).max(1);
        let offset_cols = (carousel.visual_offset() / cell_w).round() as i32;

        let range = carousel.visible_range();
        let cards = carousel.render(&mut |m: &Match, active: bool| {
            (Self::card_lines(m, active, app, card_cols as usize), active)
        });

        for (idx, (lines, active)) in range.zip(cards) {
            let left = idx as i32 * advance_cols - offset_cols;
            let right = left + card_cols;
            let vis_left = left.max(0);
            let vis_right = right.min(i32::from(strip.width));
            if vis_right <= vis_left {
                continue;
            }
            let rect = Rect::new(
                strip.x + vis_left as u16,
                strip.y,
                (vis_right - vis_left) as u16,
                strip.height,
            );
            let clip = (vis_left - left) as u16;
            let border = if active { theme.accent } else { theme.bg2 };
            let block = Block::default()
                .borders(card_borders(clip > 0, right > vis_right))
                .border_style(Style::default().fg(border))
                .style(Style::default().bg(theme.bg1));
            // the cut-off border column accounts for one of the clipped columns
            let text_clip = clip.saturating_sub(1);
            frame.render_widget(Paragraph::new(lines).block(block).scroll((0, text_clip)), rect);
        }

        if area.height > CARD_HEIGHT {
            let controls = Rect {
                y: area.y + CARD_HEIGHT,
                height: (area.height - CARD_HEIGHT).min(2),
                ..area
            };
            frame.render_widget(Self::controls(app), controls);
        }
    }

    fn card_lines(m: &Match, active: bool, app: &App, width: usize) -> Vec<Line<'static>> {
        let theme = &app.theme;
        let inner = width.saturating_sub(4);

        let when = match m.time_label() {
            Some(time) => format!("{} · {}", m.date_label(), time),
            None => m.date_label(),
        };
        let countdown = match m.date {
            Some(date) => time_left(date, app.now).label(),
            None => String::new(),
        };

        let mut lines = vec![
            Line::from(Span::styled(
                fit(&m.tournament.to_uppercase(), inner),
                Style::default().fg(theme.muted),
            )),
            Line::from(vec![
                Span::styled(
                    format!("[{}] ", m.opponent_initials()),
                    Style::default().fg(theme.accent).add_modifier(Modifier::BOLD),
                ),
                Span::styled(
                    fit(&format!("vs {}", m.opponent), inner.saturating_sub(6)),
                    Style::default().fg(theme.fg0).add_modifier(Modifier::BOLD),
                ),
            ]),
            Line::from(Span::styled(fit(&when, inner), Style::default().fg(theme.fg0))),
            Line::from(Span::styled(fit(&countdown, inner), Style::default().fg(theme.accent))),
        ];
        if let Some(caster) = &m.caster {
            lines.push(Line::from(Span::styled(
                fit(&format!("Caster: {}", caster), inner),
                Style::default().fg(theme.muted),
            )));
        }
        if active {
            let mut links = Vec::new();
            if m.stream_link.is_some() {
                links.push("o: watch live");
            }
            if m.vlr_link.is_some() {
                links.push("v: VLR");
            }
            lines.push(Line::from(Span::styled(
                links.join("  "),
                Style::default().fg(theme.muted),
            )));
        }

        lines
    }

    /// Arrows with the position counter, then one dot per match
    fn controls(app: &App) -> Paragraph<'static> {
        let theme = &app.theme;
        let carousel = &app.carousel;
        let arrow = |enabled: bool, glyph: &'static str| {
            let fg = if enabled { theme.fg0 } else { theme.bg2 };
            Span::styled(glyph, Style::default().fg(fg).add_modifier(Modifier::BOLD))
        };

        let counter = Line::from(vec![
            arrow(carousel.can_go_previous(), "◀ "),
            Span::styled(carousel.counter_label(), Style::default().fg(theme.fg0)),
            arrow(carousel.can_go_next(), " ▶"),
        ]);
        let dots = Line::from(
            carousel
                .dots()
                .into_iter()
                .map(|dot| {
                    if dot.active {
                        Span::styled("● ", Style::default().fg(theme.accent))
                    } else {
                        Span::styled("○ ", Style::default().fg(theme.muted))
                    }
                })
                .collect::<Vec<_>>(),
        );

        Paragraph::new(vec![counter, dots]).alignment(Alignment::Center)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clipped_edges_drop_their_border() {
        assert_eq!(card_borders(false, false), Borders::ALL);
        assert_eq!(card_borders(true, false), Borders::TOP | Borders::RIGHT | Borders::BOTTOM);
        assert_eq!(card_borders(false, true), Borders::TOP | Borders::LEFT | Borders::BOTTOM);
        assert_eq!(card_borders(true, true), Borders::TOP | Borders::BOTTOM);
    }
}
