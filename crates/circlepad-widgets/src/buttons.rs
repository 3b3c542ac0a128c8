//! Button components drawn with the painter for consistent styling.

use egui::{
    Align2, Color32, CornerRadius, CursorIcon, FontId, Sense, Stroke, StrokeKind, Ui, vec2,
};

use crate::{sizing, theme};

/// Full-width text button. Returns true when clicked.
pub fn wide_button(ui: &mut Ui, label: &str) -> bool {
    button_inner(ui, label, theme::TEXT, true)
}

/// Full-width destructive-action button; inert while disabled.
pub fn danger_button(ui: &mut Ui, label: &str, enabled: bool) -> bool {
    button_inner(ui, label, theme::DANGER, enabled)
}

fn button_inner(ui: &mut Ui, label: &str, accent: Color32, enabled: bool) -> bool {
    let size = vec2(ui.available_width(), sizing::BUTTON_HEIGHT);
    let (rect, response) = ui.allocate_exact_size(size, Sense::click());

    if ui.is_rect_visible(rect) {
        let (text_color, border) = if enabled {
            (accent, theme::BORDER)
        } else {
            (Color32::from_gray(185), Color32::from_gray(228))
        };
        let bg = if enabled && response.hovered() {
            theme::HOVER_BG
        } else {
            Color32::TRANSPARENT
        };

        let painter = ui.painter();
        let corner = CornerRadius::same(sizing::CORNER_RADIUS);
        painter.rect_filled(rect, corner, bg);
        painter.rect_stroke(rect, corner, Stroke::new(1.0, border), StrokeKind::Inside);
        painter.text(
            rect.center(),
            Align2::CENTER_CENTER,
            label,
            FontId::proportional(13.0),
            text_color,
        );
    }

    if enabled {
        response.on_hover_cursor(CursorIcon::PointingHand).clicked()
    } else {
        false
    }
}
