use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::geometry::{Breakpoint, BreakpointTier};
use crate::reveal::RevealOptions;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub schedule: ScheduleConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneralConfig {
    /// Data directory path
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,
    /// Snapshot file (matches, players, streamers) inside the data directory
    #[serde(default = "default_snapshot_file")]
    pub snapshot_file: String,
    /// Log level
    #[serde(default = "default_log_level")]
    pub log_level: String,
    /// Organization name shown in titles and match cards
    #[serde(default = "default_org_name")]
    pub org_name: String,
    /// Slogan typed under the main title
    #[serde(default = "default_slogan")]
    pub slogan: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            snapshot_file: default_snapshot_file(),
            log_level: default_log_level(),
            org_name: default_org_name(),
            slogan: default_slogan(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Tick rate in milliseconds while idle
    #[serde(default = "default_tick_rate")]
    pub tick_rate_ms: u64,
    /// Frame rate used while a slide or reveal is in progress
    #[serde(default = "default_animation_fps")]
    pub animation_fps: u32,
    /// Width of one terminal cell in pixels, used to map the terminal onto
    /// the pixel breakpoint table
    #[serde(default = "default_cell_width_px")]
    pub cell_width_px: f64,
    #[serde(default)]
    pub carousel: CarouselConfig,
    #[serde(default)]
    pub reveal: RevealConfig,
    #[serde(default)]
    pub theme: ThemeColors,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: default_tick_rate(),
            animation_fps: default_animation_fps(),
            cell_width_px: default_cell_width_px(),
            carousel: CarouselConfig::default(),
            reveal: RevealConfig::default(),
            theme: ThemeColors::default(),
        }
    }
}

/// Brand colors, each a hex string (e.g., "#e10600" or "e10600")
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ThemeColors {
    #[serde(default = "default_accent")]
    pub accent: String,
    #[serde(default = "default_foreground")]
    pub foreground: String,
    /// Secondary text (dates, tournaments)
    #[serde(default = "default_muted")]
    pub muted: String,
    #[serde(default = "default_victory")]
    pub victory: String,
    #[serde(default = "default_defeat")]
    pub defeat: String,
}

impl Default for ThemeColors {
    fn default() -> Self {
        Self {
            accent: default_accent(),
            foreground: default_foreground(),
            muted: default_muted(),
            victory: default_victory(),
            defeat: default_defeat(),
        }
    }
}

/// Easing curve used when the carousel slides to a new offset
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EasingType {
    /// Jump at the end of the slide
    None,
    Linear,
    /// 1 - (1-t)^3, close to the CSS `ease` the cards were designed with
    #[default]
    Cubic,
    Quintic,
    EaseOut,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CarouselConfig {
    /// Width thresholds mapped to the distance one card advances the strip
    #[serde(default = "default_breakpoints")]
    pub breakpoints: Vec<Breakpoint>,
    /// Space reserved on the trailing edge for the fade affordance
    #[serde(default = "default_fixed_padding")]
    pub fixed_padding_px: f64,
    /// Slide duration for navigation (0 = instant)
    #[serde(default = "default_slide_duration")]
    pub slide_duration_ms: u64,
    #[serde(default)]
    pub easing: EasingType,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            breakpoints: default_breakpoints(),
            fixed_padding_px: default_fixed_padding(),
            slide_duration_ms: default_slide_duration(),
            easing: EasingType::default(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RevealConfig {
    /// Page title ("BODAX GAMING", "GAME SCHEDULE")
    #[serde(default = "default_title_reveal")]
    pub title: RevealOptions,
    /// Section headings further down the page
    #[serde(default = "default_section_reveal")]
    pub section: RevealOptions,
    /// Slogan under the page title
    #[serde(default = "default_slogan_reveal")]
    pub slogan: RevealOptions,
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            title: default_title_reveal(),
            section: default_section_reveal(),
            slogan: default_slogan_reveal(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduleConfig {
    /// Number of recent results shown before the user changes the limit
    #[serde(default = "default_recent_limit")]
    pub default_limit: usize,
    /// Players shown per team on the home screen
    #[serde(default = "default_roster_limit")]
    pub home_roster_limit: usize,
}

impl Default for ScheduleConfig {
    fn default() -> Self {
        Self {
            default_limit: default_recent_limit(),
            home_roster_limit: default_roster_limit(),
        }
    }
}

fn default_data_dir() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("bodax")
}

fn default_snapshot_file() -> String {
    "snapshot.json".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_org_name() -> String {
    "BODAX GAMING".to_string()
}

fn default_slogan() -> String {
    "WHERE PERFORMANCE MEETS DESIGN.".to_string()
}

fn default_tick_rate() -> u64 {
    100
}

fn default_animation_fps() -> u32 {
    60
}

fn default_cell_width_px() -> f64 {
    10.0
}

fn default_accent() -> String {
    "#e10600".to_string()
}

fn default_foreground() -> String {
    "#f5f5f5".to_string()
}

fn default_muted() -> String {
    "#8a8a8a".to_string()
}

fn default_victory() -> String {
    "#2ecc71".to_string()
}

fn default_defeat() -> String {
    "#e74c3c".to_string()
}

fn default_breakpoints() -> Vec<Breakpoint> {
    vec![
        Breakpoint::new(BreakpointTier::NarrowPhone, Some(480.0), 300.0),
        Breakpoint::new(BreakpointTier::Phone, Some(768.0), 380.0),
        Breakpoint::new(BreakpointTier::Tablet, Some(1200.0), 520.0),
        Breakpoint::new(BreakpointTier::Desktop, None, 680.0),
    ]
}

fn default_fixed_padding() -> f64 {
    50.0
}

fn default_slide_duration() -> u64 {
    300
}

fn default_title_reveal() -> RevealOptions {
    RevealOptions {
        per_char_delay_ms: 50,
        initial_delay_ms: 100,
        use_viewport: false,
    }
}

fn default_section_reveal() -> RevealOptions {
    RevealOptions {
        per_char_delay_ms: 5,
        initial_delay_ms: 100,
        use_viewport: true,
    }
}

fn default_slogan_reveal() -> RevealOptions {
    RevealOptions {
        per_char_delay_ms: 80,
        initial_delay_ms: 800,
        use_viewport: false,
    }
}

fn default_recent_limit() -> usize {
    6
}

fn default_roster_limit() -> usize {
    5
}

/// Expand tilde (~) in path to user's home directory
fn expand_tilde(path: &std::path::Path) -> PathBuf {
    if let Some(path_str) = path.to_str() {
        if let Some(stripped) = path_str.strip_prefix("~/") {
            if let Some(home) = dirs::home_dir() {
                return home.join(stripped);
            }
        } else if path_str == "~" {
            if let Some(home) = dirs::home_dir() {
                return home;
            }
        }
    }
    path.to_path_buf()
}

impl AppConfig {
    /// Load configuration from file or return defaults
    pub fn load() -> crate::Result<Self> {
        Self::load_from(&Self::config_path())
    }

    /// Load configuration from an explicit path, falling back to defaults
    /// when the file does not exist
    pub fn load_from(path: &std::path::Path) -> crate::Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        let config: Self =
            toml::from_str(&content).map_err(|e| crate::Error::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Save configuration to file
    pub fn save(&self) -> crate::Result<()> {
        let config_path = Self::config_path();

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        std::fs::write(&config_path, self.to_toml()?)?;

        Ok(())
    }

    /// Render the configuration as pretty toml
    pub fn to_toml(&self) -> crate::Result<String> {
        toml::to_string_pretty(self).map_err(|e| crate::Error::Config(e.to_string()))
    }

    /// Reject breakpoint tables the carousel cannot use
    pub fn validate(&self) -> crate::Result<()> {
        let breakpoints = &self.ui.carousel.breakpoints;
        if breakpoints.is_empty() {
            return Err(crate::Error::Config(
                "ui.carousel.breakpoints must not be empty".to_string(),
            ));
        }
        if breakpoints.iter().any(|b| b.advance_px <= 0.0) {
            return Err(crate::Error::Config(
                "ui.carousel.breakpoints advance_px must be positive".to_string(),
            ));
        }
        if self.ui.cell_width_px <= 0.0 {
            return Err(crate::Error::Config(
                "ui.cell_width_px must be positive".to_string(),
            ));
        }
        Ok(())
    }

    /// Get the configuration file path
    /// Always uses ~/.config/bodax/config.toml on all platforms
    pub fn config_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".config")
            .join("bodax")
            .join("config.toml")
    }

    /// Get the data directory (with tilde expansion)
    pub fn data_dir(&self) -> PathBuf {
        expand_tilde(&self.general.data_dir)
    }

    /// Get the snapshot file path
    pub fn snapshot_path(&self) -> PathBuf {
        self.data_dir().join(&self.general.snapshot_file)
    }

    /// Get the persisted preferences path (cookie consent and friends)
    pub fn preferences_path(&self) -> PathBuf {
        self.data_dir().join("preferences.toml")
    }

    /// Get the log file used while the TUI owns the terminal
    pub fn log_path(&self) -> PathBuf {
        self.data_dir().join("bodax.log")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_have_four_tiers() {
        let config = AppConfig::default();
        let tiers: Vec<_> = config
            .ui
            .carousel
            .breakpoints
            .iter()
            .map(|b| b.tier)
            .collect();
        assert_eq!(
            tiers,
            vec![
                BreakpointTier::NarrowPhone,
                BreakpointTier::Phone,
                BreakpointTier::Tablet,
                BreakpointTier::Desktop,
            ]
        );
        assert_eq!(config.ui.carousel.fixed_padding_px, 50.0);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config: AppConfig = toml::from_str(
            r#"
            [ui]
            tick_rate_ms = 50

            [ui.reveal.section]
            per_char_delay_ms = 20
            initial_delay_ms = 0
            use_viewport = false
            "#,
        )
        .unwrap();

        assert_eq!(config.ui.tick_rate_ms, 50);
        assert_eq!(config.ui.reveal.section.per_char_delay_ms, 20);
        assert!(!config.ui.reveal.section.use_viewport);
        assert_eq!(config.ui.reveal.title.per_char_delay_ms, 50);
        assert_eq!(config.schedule.default_limit, 6);
        assert_eq!(config.ui.carousel.easing, EasingType::Cubic);
    }

    #[test]
    fn test_empty_breakpoints_rejected() {
        let mut config = AppConfig::default();
        config.ui.carousel.breakpoints.clear();
        assert!(matches!(config.validate(), Err(crate::Error::Config(_))));
    }

    #[test]
    fn test_round_trip_through_toml() {
        let config = AppConfig::default();
        let text = config.to_toml().unwrap();
        let parsed: AppConfig = toml::from_str(&text).unwrap();
        assert_eq!(parsed.ui.carousel.breakpoints, config.ui.carousel.breakpoints);
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let path = std::env::temp_dir().join(format!("bodax-missing-{}.toml", uuid::Uuid::new_v4()));
        let config = AppConfig::load_from(&path).unwrap();
        assert_eq!(config.general.snapshot_file, "snapshot.json");
    }
}
