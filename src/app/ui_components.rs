//! Shared widget styles
//!
//! Style helpers over the built-in iced themes. Severity colors are fixed so
//! banners read the same in light and dark mode.

use crate::app::notifications::Severity;
use iced::widget::{container, text_input};
use iced::{Border, Color, Shadow, Theme, Vector};

pub const SUCCESS: Color = Color::from_rgb(0.18, 0.55, 0.34);
pub const INFO: Color = Color::from_rgb(0.16, 0.42, 0.75);
pub const WARNING: Color = Color::from_rgb(0.80, 0.52, 0.04);
pub const ERROR: Color = Color::from_rgb(0.73, 0.22, 0.22);
pub const MUTED: Color = Color::from_rgb(0.55, 0.55, 0.58);

pub fn severity_color(severity: Severity) -> Color {
    match severity {
        Severity::Success => SUCCESS,
        Severity::Info => INFO,
        Severity::Warning => WARNING,
        Severity::Error => ERROR,
    }
}

/// Banner container: solid severity background, white text
pub fn banner_container(_theme: &Theme, severity: Severity) -> container::Style {
    container::Style {
        background: Some(severity_color(severity).into()),
        text_color: Some(Color::WHITE),
        border: Border {
            radius: 6.0.into(),
            ..Border::default()
        },
        ..Default::default()
    }
}

pub fn card_container(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();
    container::Style {
        background: Some(palette.background.weak.color.into()),
        border: Border {
            color: palette.background.strong.color,
            width: 1.0,
            radius: 8.0.into(),
        },
        shadow: Shadow {
            color: Color {
                a: 0.2,
                ..Color::BLACK
            },
            offset: Vector::new(0.0, 2.0),
            blur_radius: 3.0,
        },
        ..Default::default()
    }
}

/// Dimmed backdrop behind modal dialogs
pub fn modal_backdrop(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(
            Color {
                a: 0.6,
                ..Color::BLACK
            }
            .into(),
        ),
        ..Default::default()
    }
}

/// Input border reflecting field validity once it should show:
/// `Some(true)` valid, `Some(false)` invalid, `None` neutral
pub fn validated_input(
    theme: &Theme,
    status: text_input::Status,
    shown: Option<bool>,
) -> text_input::Style {
    let mut style = text_input::default(theme, status);
    match shown {
        Some(true) => style.border.color = SUCCESS,
        Some(false) => style.border.color = ERROR,
        None => {}
    }
    style
}

/// Bordered wrapper bundling an input with its adornments; carries the
/// validity border when the input sits inside a group
pub fn input_group(theme: &Theme, shown: Option<bool>) -> container::Style {
    let palette = theme.extended_palette();
    let border_color = match shown {
        Some(true) => SUCCESS,
        Some(false) => ERROR,
        None => palette.background.strong.color,
    };
    container::Style {
        background: Some(palette.background.base.color.into()),
        border: Border {
            color: border_color,
            width: 1.0,
            radius: 4.0.into(),
        },
        ..Default::default()
    }
}
