use bodax_core::config::ThemeColors;
use ratatui::style::Color;

/// Runtime theme. Brand colors come from config, backgrounds are fixed.
#[derive(Debug, Clone)]
pub struct Theme {
    // Background colors
    pub bg0: Color,
    pub bg1: Color,
    pub bg2: Color,

    // Foreground colors
    pub fg0: Color,
    pub muted: Color,

    // Semantic colors
    pub accent: Color,
    pub victory: Color,
    pub defeat: Color,
    pub draw: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::from_config(&ThemeColors::default())
    }
}

impl Theme {
    /// Build from configured hex colors, keeping the built-in value for any
    /// entry that does not parse
    pub fn from_config(colors: &ThemeColors) -> Self {
        Self {
            bg0: Color::Rgb(0x0b, 0x0b, 0x0d),
            bg1: Color::Rgb(0x16, 0x16, 0x1a),
            bg2: Color::Rgb(0x24, 0x24, 0x2a),
            fg0: parse_hex_color(&colors.foreground).unwrap_or(Color::Rgb(0xf5, 0xf5, 0xf5)),
            muted: parse_hex_color(&colors.muted).unwrap_or(Color::Rgb(0x8a, 0x8a, 0x8a)),
            accent: parse_hex_color(&colors.accent).unwrap_or(Color::Rgb(0xe1, 0x06, 0x00)),
            victory: parse_hex_color(&colors.victory).unwrap_or(Color::Rgb(0x2e, 0xcc, 0x71)),
            defeat: parse_hex_color(&colors.defeat).unwrap_or(Color::Rgb(0xe7, 0x4c, 0x3c)),
            draw: Color::Rgb(0xd8, 0xa6, 0x57),
        }
    }
}

/// Parse a hex color string (e.g., "#ff0000", "ff0000", "#f00") into a ratatui Color
pub fn parse_hex_color(hex: &str) -> Option<Color> {
    let hex = hex.trim().trim_start_matches('#');
    if !hex.is_ascii() {
        return None;
    }

    match hex.len() {
        // Short form: RGB -> RRGGBB
        3 => {
            let r = u8::from_str_radix(&hex[0..1], 16).ok()? * 17;
            let g = u8::from_str_radix(&hex[1..2], 16).ok()? * 17;
            let b = u8::from_str_radix(&hex[2..3], 16).ok()? * 17;
            Some(Color::Rgb(r, g, b))
        }
        6 => {
            let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
            let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
            let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
            Some(Color::Rgb(r, g, b))
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_hex_color() {
        assert!(matches!(parse_hex_color("#e10600"), Some(Color::Rgb(0xe1, 0x06, 0x00))));
        assert!(matches!(parse_hex_color("f50"), Some(Color::Rgb(255, 85, 0))));
        assert!(parse_hex_color("#gg0000").is_none());
        assert!(parse_hex_color("ééé").is_none());
    }

    #[test]
    fn test_invalid_override_keeps_default() {
        let colors = ThemeColors {
            accent: "not-a-color".to_string(),
            victory: "#00ff00".to_string(),
            ..Default::default()
        };
        let theme = Theme::from_config(&colors);
        assert!(matches!(theme.accent, Color::Rgb(0xe1, 0x06, 0x00)));
        assert!(matches!(theme.victory, Color::Rgb(0, 255, 0)));
    }
}
