use ratatui::style::{Color, Modifier, Style};

/// Whether the terminal canvas is dark or light.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackgroundType {
    Dark,
    Light,
}

/// Parse a `COLORFGBG` value (`"fg;bg"` or `"fg;default;bg"`).
///
/// ANSI background indices 0-6 and 8 are dark; 7 and 9-15 are light.
pub fn background_from_colorfgbg(value: &str) -> Option<BackgroundType> {
    let bg: u8 = value.rsplit(';').next()?.trim().parse().ok()?;
    match bg {
        0..=6 | 8 => Some(BackgroundType::Dark),
        7 | 9..=15 => Some(BackgroundType::Light),
        _ => None,
    }
}

/// Background of the current terminal, assuming dark when `COLORFGBG` is
/// unset or unparseable.
pub fn detect_background() -> BackgroundType {
    std::env::var("COLORFGBG")
        .ok()
        .and_then(|v| background_from_colorfgbg(&v))
        .unwrap_or(BackgroundType::Dark)
}

/// Styles for the chart view.
#[derive(Debug, Clone)]
pub struct Theme {
    // ── Text ─────────────────────────────────────────────────────────────────
    pub title: Style,
    pub dim: Style,
    pub warning: Style,

    // ── Bar chart ────────────────────────────────────────────────────────────
    /// Bars below half of the tallest bar.
    pub bar_low: Style,
    /// Bars between half and 80 % of the tallest bar.
    pub bar_medium: Style,
    /// Bars at or above 80 % of the tallest bar.
    pub bar_high: Style,
    /// Numeric value drawn inside each bar.
    pub bar_value: Style,
    pub bar_label: Style,
    pub axis_title: Style,
}

impl Theme {
    // ── Constructors ─────────────────────────────────────────────────────────

    /// Default theme, for dark terminals.
    pub fn dark() -> Self {
        Self {
            title: Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
            dim: Style::default().fg(Color::DarkGray),
            warning: Style::default().fg(Color::Yellow),

            bar_low: Style::default().fg(Color::Green),
            bar_medium: Style::default().fg(Color::Yellow),
            bar_high: Style::default().fg(Color::Red),
            bar_value: Style::default()
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
            bar_label: Style::default().fg(Color::Gray),
            axis_title: Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::ITALIC),
        }
    }

    /// Blue accents with dark bar labels for light terminals.
    pub fn light() -> Self {
        Self {
            title: Style::default()
                .fg(Color::Blue)
                .add_modifier(Modifier::BOLD),
            dim: Style::default().fg(Color::Gray),
            warning: Style::default().fg(Color::Yellow),

            bar_low: Style::default().fg(Color::Green),
            bar_medium: Style::default().fg(Color::Yellow),
            bar_high: Style::default().fg(Color::Red),
            bar_value: Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
            bar_label: Style::default().fg(Color::DarkGray),
            axis_title: Style::default()
                .fg(Color::Blue)
                .add_modifier(Modifier::ITALIC),
        }
    }

    /// Basic ANSI colours only, no modifiers.
    pub fn classic() -> Self {
        Self {
            title: Style::default().fg(Color::Cyan),
            dim: Style::default().fg(Color::DarkGray),
            warning: Style::default().fg(Color::Yellow),

            bar_low: Style::default().fg(Color::Green),
            bar_medium: Style::default().fg(Color::Yellow),
            bar_high: Style::default().fg(Color::Red),
            bar_value: Style::default().fg(Color::Black),
            bar_label: Style::default().fg(Color::White),
            axis_title: Style::default().fg(Color::Cyan),
        }
    }

    pub fn for_background(background: BackgroundType) -> Self {
        match background {
            BackgroundType::Dark => Self::dark(),
            BackgroundType::Light => Self::light(),
        }
    }

    pub fn auto_detect() -> Self {
        Self::for_background(detect_background())
    }

    /// Theme for a `--theme` value; `"auto"` and unknown names detect the
    /// background.
    pub fn from_name(name: &str) -> Self {
        match name.to_ascii_lowercase().as_str() {
            "dark" => Self::dark(),
            "light" => Self::light(),
            "classic" => Self::classic(),
            _ => Self::auto_detect(),
        }
    }

    // ── Style helpers ────────────────────────────────────────────────────────

    /// Bar fill style for a bar whose height is `percentage` of the tallest.
    ///
    /// * `< 50 %`  → `bar_low`
    /// * `50-80 %` → `bar_medium`
    /// * `≥ 80 %`  → `bar_high`
    pub fn bar_style(&self, percentage: f64) -> Style {
        if percentage >= 80.0 {
            self.bar_high
        } else if percentage >= 50.0 {
            self.bar_medium
        } else {
            self.bar_low
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    // ── Theme construction ───────────────────────────────────────────────────

    #[test]
    fn test_dark_theme_creation() {
        let t = Theme::dark();
        assert_eq!(t.title.fg, Some(Color::Cyan));
        assert_eq!(t.warning.fg, Some(Color::Yellow));
        assert_eq!(t.bar_low.fg, Some(Color::Green));
        assert_eq!(t.bar_high.fg, Some(Color::Red));
    }

    #[test]
    fn test_light_theme_creation() {
        let t = Theme::light();
        assert_eq!(t.title.fg, Some(Color::Blue));
        assert_eq!(t.bar_value.fg, Some(Color::White));
    }

    #[test]
    fn test_classic_theme_has_no_bold() {
        let t = Theme::classic();
        assert!(!t.title.add_modifier.contains(Modifier::BOLD));
        assert!(!t.bar_value.add_modifier.contains(Modifier::BOLD));
        assert_eq!(t.bar_value.fg, Some(Color::Black));
    }

    #[test]
    fn test_from_name() {
        assert_eq!(Theme::from_name("dark").title.fg, Some(Color::Cyan));
        assert_eq!(Theme::from_name("light").title.fg, Some(Color::Blue));
        assert!(!Theme::from_name("classic")
            .title
            .add_modifier
            .contains(Modifier::BOLD));
    }

    #[test]
    fn test_from_name_case_insensitive() {
        assert_eq!(Theme::from_name("Light").title.fg, Some(Color::Blue));
    }

    #[test]
    fn test_for_background() {
        assert_eq!(
            Theme::for_background(BackgroundType::Light).title.fg,
            Some(Color::Blue)
        );
        assert_eq!(
            Theme::for_background(BackgroundType::Dark).title.fg,
            Some(Color::Cyan)
        );
    }

    // ── COLORFGBG parsing ────────────────────────────────────────────────────

    #[test]
    fn test_colorfgbg_dark_and_light() {
        assert_eq!(background_from_colorfgbg("15;0"), Some(BackgroundType::Dark));
        assert_eq!(background_from_colorfgbg("0;15"), Some(BackgroundType::Light));
        assert_eq!(background_from_colorfgbg("0;7"), Some(BackgroundType::Light));
        assert_eq!(background_from_colorfgbg("7;8"), Some(BackgroundType::Dark));
    }

    #[test]
    fn test_colorfgbg_three_fields_uses_last() {
        assert_eq!(
            background_from_colorfgbg("0;default;15"),
            Some(BackgroundType::Light)
        );
    }

    #[test]
    fn test_colorfgbg_unparseable() {
        assert_eq!(background_from_colorfgbg(""), None);
        assert_eq!(background_from_colorfgbg("0;default"), None);
        assert_eq!(background_from_colorfgbg("0;99"), None);
    }

    #[test]
    fn test_from_name_auto_falls_back() {
        let t = Theme::from_name("auto");
        assert!(t.title.fg.is_some());
    }

    // ── bar_style thresholds ─────────────────────────────────────────────────

    #[test]
    fn test_bar_style_below_50() {
        let t = Theme::dark();
        assert_eq!(t.bar_style(0.0).fg, Some(Color::Green));
        assert_eq!(t.bar_style(49.9).fg, Some(Color::Green));
    }

    #[test]
    fn test_bar_style_50_to_80() {
        let t = Theme::dark();
        assert_eq!(t.bar_style(50.0).fg, Some(Color::Yellow));
        assert_eq!(t.bar_style(79.9).fg, Some(Color::Yellow));
    }

    #[test]
    fn test_bar_style_at_80_and_above() {
        let t = Theme::dark();
        assert_eq!(t.bar_style(80.0).fg, Some(Color::Red));
        assert_eq!(t.bar_style(100.0).fg, Some(Color::Red));
    }
}
