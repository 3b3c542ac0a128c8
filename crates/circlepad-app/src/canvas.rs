//! Canvas drawing surface: paints the circles and maps pointer input to
//! store calls.

use circlepad_widgets::{sizing, theme};
use egui::{
    Align2, Color32, CornerRadius, FontId, Pos2, Response, Sense, Stroke, StrokeKind, Ui, Vec2,
};
use kurbo::Point;

use crate::app::{CirclepadApp, DragState};

/// Circle fill, matching the classic board red.
const CIRCLE_FILL: Color32 = Color32::from_rgb(0xa9, 0x09, 0x09);

pub fn show_canvas(ui: &mut Ui, app: &mut CirclepadApp) {
    let bounds = app.store.bounds();
    let size = Vec2::new(bounds.width as f32, bounds.height as f32);
    let (rect, response) = ui.allocate_exact_size(size, Sense::click_and_drag());
    let origin = rect.min;

    handle_pointer(app, &response, origin);

    let painter = ui.painter_at(rect);
    let corner = CornerRadius::same(sizing::PANEL_RADIUS);
    painter.rect_filled(rect, corner, theme::CANVAS_BG);
    painter.rect_stroke(rect, corner, Stroke::new(1.0, theme::BORDER), StrokeKind::Inside);

    let selected = app.store.selected_id();
    for circle in app.store.circles() {
        let center = to_screen(origin, circle.center);
        let radius = circle.radius as f32;
        painter.circle_filled(center, radius, CIRCLE_FILL);
        if selected == Some(circle.id) {
            painter.circle_stroke(center, radius, Stroke::new(2.0, Color32::BLACK));
        }
        painter.text(
            center,
            Align2::CENTER_CENTER,
            &circle.label,
            FontId::proportional(13.0),
            Color32::WHITE,
        );
    }
}

fn handle_pointer(app: &mut CirclepadApp, response: &Response, origin: Pos2) {
    if response.clicked() || response.drag_started() {
        if let Some(pos) = response.interact_pointer_pos() {
            match app.store.circle_at(to_canvas(origin, pos)) {
                Some(id) => {
                    app.store.select(Some(id));
                    if response.drag_started() {
                        if let Some(circle) = app.store.get(id) {
                            app.drag = Some(DragState {
                                id,
                                grab_offset: pos - to_screen(origin, circle.center),
                            });
                        }
                    }
                }
                // Clicking empty canvas clears the selection.
                None => app.store.select(None),
            }
        }
    }

    if response.dragged() {
        if let (Some(drag), Some(pos)) = (&app.drag, response.interact_pointer_pos()) {
            let target = pos - drag.grab_offset;
            app.store.set_position(drag.id, to_canvas(origin, target));
        }
    }

    if response.drag_stopped() {
        app.drag = None;
    }
}

fn to_screen(origin: Pos2, point: Point) -> Pos2 {
    Pos2::new(origin.x + point.x as f32, origin.y + point.y as f32)
}

fn to_canvas(origin: Pos2, pos: Pos2) -> Point {
    Point::new(f64::from(pos.x - origin.x), f64::from(pos.y - origin.y))
}
