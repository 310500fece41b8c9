#![forbid(unsafe_code)]

//! Construction-time defaults for the widgets.
//!
//! There is no process-wide theme table. A widget is built from one of these
//! structs (or its `Default`), and the host is free to load them from its own
//! settings; with the `serde` feature every field is optional on input.

use crate::menu::Overflow;
use celltui_render::cell::{Attribute, Color};

/// Defaults for a [`Gauge`](crate::gauge::Gauge).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GaugeConfig {
    /// Fill color. Default: red.
    pub bar_color: Attribute,
    /// Foreground of the percent label and captions. Default: white.
    pub percent_color: Attribute,
    /// Columns kept free left of the bar. Default: 0.
    pub left_margin: u16,
    /// Columns kept free right of the bar. Default: 0.
    pub right_margin: u16,
}

impl Default for GaugeConfig {
    fn default() -> Self {
        Self {
            bar_color: Attribute::new(Color::Red),
            percent_color: Attribute::new(Color::White),
            left_margin: 0,
            right_margin: 0,
        }
    }
}

/// Defaults for a [`Menu`](crate::menu::Menu).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct MenuConfig {
    /// Overflow policy. Default: [`Overflow::TruncateScroll`].
    pub overflow: Overflow,
    /// Item foreground. Default: white.
    pub item_fg: Attribute,
    /// Item background. Default: terminal default.
    pub item_bg: Attribute,
    /// Active row foreground. Default: the item background.
    pub active_fg: Attribute,
    /// Active row background. Default: the item foreground.
    pub active_bg: Attribute,
}

impl Default for MenuConfig {
    fn default() -> Self {
        let item_fg = Attribute::new(Color::White);
        let item_bg = Attribute::DEFAULT;
        Self {
            overflow: Overflow::TruncateScroll,
            item_fg,
            item_bg,
            active_fg: item_bg,
            active_bg: item_fg,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gauge_defaults() {
        let cfg = GaugeConfig::default();
        assert_eq!(cfg.bar_color, Attribute::new(Color::Red));
        assert_eq!(cfg.percent_color, Attribute::new(Color::White));
        assert_eq!((cfg.left_margin, cfg.right_margin), (0, 0));
    }

    #[test]
    fn menu_active_colors_swap_item_colors() {
        let cfg = MenuConfig::default();
        assert_eq!(cfg.overflow, Overflow::TruncateScroll);
        assert_eq!(cfg.active_fg, cfg.item_bg);
        assert_eq!(cfg.active_bg, cfg.item_fg);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn partial_menu_config_fills_defaults() {
        let cfg: MenuConfig = serde_json::from_str(r#"{"overflow":"Wrap"}"#).unwrap();
        assert_eq!(cfg.overflow, Overflow::Wrap);
        assert_eq!(cfg.item_fg, MenuConfig::default().item_fg);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn gauge_config_round_trip() {
        let cfg = GaugeConfig {
            left_margin: 2,
            ..GaugeConfig::default()
        };
        let json = serde_json::to_string(&cfg).unwrap();
        let back: GaugeConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back, cfg);
    }
}
