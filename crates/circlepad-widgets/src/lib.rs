//! Reusable egui widget helpers for the Circlepad UI.
//!
//! - **Buttons**: full-width text buttons, destructive-action buttons
//! - **Layout**: section labels, separators, panel frames

pub mod buttons;
pub mod layout;

pub use buttons::{danger_button, wide_button};
pub use layout::{panel_frame, section_label, separator};

/// Standard sizing constants used across widgets.
pub mod sizing {
    /// Height of full-width buttons.
    pub const BUTTON_HEIGHT: f32 = 30.0;
    /// Standard corner radius.
    pub const CORNER_RADIUS: u8 = 6;
    /// Panel corner radius.
    pub const PANEL_RADIUS: u8 = 10;
}

/// Standard colors used across widgets.
pub mod theme {
    use egui::Color32;

    /// Text color (dark gray).
    pub const TEXT: Color32 = Color32::from_rgb(55, 55, 55);
    /// Muted text color.
    pub const TEXT_MUTED: Color32 = Color32::from_rgb(125, 125, 125);
    /// Border color.
    pub const BORDER: Color32 = Color32::from_rgb(221, 221, 221);
    /// Destructive-action color (red).
    pub const DANGER: Color32 = Color32::from_rgb(200, 40, 40);
    /// Hover background.
    pub const HOVER_BG: Color32 = Color32::from_rgb(245, 245, 245);
    /// Panel background.
    pub const PANEL_BG: Color32 = Color32::from_rgb(252, 252, 253);
    /// Canvas surface background.
    pub const CANVAS_BG: Color32 = Color32::WHITE;
}
