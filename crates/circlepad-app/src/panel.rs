//! Side panel: selection, radius control, create/delete, debug JSON.

use circlepad_core::{MAX_RADIUS, MIN_RADIUS, ShapeId};
use circlepad_widgets::{danger_button, section_label, separator, theme, wide_button};
use egui::{ComboBox, RichText, ScrollArea, Slider, Ui};

use crate::app::CirclepadApp;

pub fn show_panel(ui: &mut Ui, app: &mut CirclepadApp) {
    ui.add_space(8.0);
    ui.heading("Controls");
    ui.add_space(10.0);

    section_label(ui, "Select circle");
    let selected_text = app
        .store
        .selected()
        .map_or_else(|| "-".to_owned(), |c| c.label.clone());
    let mut picked: Option<ShapeId> = None;
    ComboBox::from_id_salt("circle_selector")
        .width(ui.available_width())
        .selected_text(selected_text)
        .show_ui(ui, |ui| {
            for circle in app.store.circles() {
                let checked = app.store.selected_id() == Some(circle.id);
                if ui.selectable_label(checked, &circle.label).clicked() {
                    picked = Some(circle.id);
                }
            }
        });
    if let Some(id) = picked {
        app.store.select(Some(id));
    }
    ui.add_space(10.0);

    // Copy out the selected circle's fields so the store can be mutated below.
    let selected = app.store.selected().map(|c| (c.id, c.center, c.radius));
    match selected {
        Some((id, center, radius)) => {
            ui.label(
                RichText::new(format!(
                    "Position: ({:.0}, {:.0})",
                    center.x.round(),
                    center.y.round()
                ))
                .color(theme::TEXT_MUTED)
                .size(13.0),
            );
            ui.add_space(6.0);

            let mut new_radius = radius;
            let slider = ui.add(
                Slider::new(&mut new_radius, MIN_RADIUS..=MAX_RADIUS)
                    .step_by(1.0)
                    .text("Radius"),
            );
            if slider.changed() {
                app.store.set_radius(id, new_radius);
            }
            ui.add_space(10.0);

            if wide_button(ui, "+ Add circle") {
                app.store.add_circle(None);
            }
            ui.add_space(6.0);
            if danger_button(ui, "Delete circle", true) {
                app.store.remove(id);
            }
        }
        None => {
            ui.label(RichText::new("Select a circle").color(theme::TEXT_MUTED));
            ui.add_space(10.0);

            if wide_button(ui, "+ Add circle") {
                app.store.add_circle(None);
            }
            ui.add_space(6.0);
            let _ = danger_button(ui, "Delete circle", false);
        }
    }

    separator(ui);

    egui::CollapsingHeader::new("Debug JSON")
        .default_open(false)
        .show(ui, |ui| {
            ScrollArea::vertical().max_height(280.0).show(ui, |ui| {
                ui.label(RichText::new(app.debug_json()).monospace().size(11.0));
            });
        });
}
