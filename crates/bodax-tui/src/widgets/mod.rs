mod consent;
mod hero;
mod match_carousel;
mod next_match;
mod page;
mod results;
mod roster;
mod section_title;
mod status_bar;
mod tabs;

pub use consent::ConsentBannerWidget;
pub use hero::HeroWidget;
pub use match_carousel::MatchCarouselWidget;
pub use next_match::NextMatchWidget;
pub use page::PageWidget;
pub use results::{MatchListWidget, RecentResultsWidget};
pub use roster::{PlayerListWidget, RosterWidget, StreamersWidget, TeamRosterWidget};
pub use section_title::SectionTitleWidget;
pub use status_bar::StatusBarWidget;
pub use tabs::TabsWidget;

use bodax_core::reveal::CursorState;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Cursor glyph drawn after typed text
pub(crate) fn cursor_glyph(cursor: CursorState) -> &'static str {
    match cursor {
        CursorState::Typing | CursorState::Blinking { on: true } => "▌",
        CursorState::Blinking { on: false } => " ",
        CursorState::Hidden => "",
    }
}

/// Cut `s` to at most `width` display columns, marking the cut with an ellipsis
pub(crate) fn fit(s: &str, width: usize) -> String {
    if s.width() <= width {
        return s.to_string();
    }
    if width == 0 {
        return String::new();
    }
    let mut out = String::new();
    let mut used = 0;
    for ch in s.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w + 1 > width {
            break;
        }
        out.push(ch);
        used += w;
    }
    out.push('…');
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fit() {
        assert_eq!(fit("Digital Storm", 20), "Digital Storm");
        assert_eq!(fit("Digital Storm", 8), "Digital…");
        assert_eq!(fit("ＡＢＣ", 4), "Ａ…");
        assert_eq!(fit("abc", 0), "");
    }

    #[test]
    fn test_cursor_glyph() {
        assert_eq!(cursor_glyph(CursorState::Typing), "▌");
        assert_eq!(cursor_glyph(CursorState::Blinking { on: false }), " ");
        assert_eq!(cursor_glyph(CursorState::Hidden), "");
    }
}
