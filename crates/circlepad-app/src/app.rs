//! Application state: the shape store plus transient per-frame UI state.

use circlepad_core::{ShapeId, ShapeStore};
use egui::Vec2;

use crate::{canvas, panel};

/// An in-progress drag gesture. Owned by the presentation layer, never by the
/// store: the store only sees a stream of position updates.
pub struct DragState {
    /// Circle being dragged.
    pub id: ShapeId,
    /// Pointer offset from the circle center at grab time, in screen units.
    pub grab_offset: Vec2,
}

pub struct CirclepadApp {
    pub store: ShapeStore,
    pub drag: Option<DragState>,
    /// Pretty-printed store JSON, rebuilt when the store revision moves.
    debug_json: String,
    debug_revision: u64,
}

impl CirclepadApp {
    pub fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        Self {
            store: ShapeStore::seeded(),
            drag: None,
            debug_json: String::new(),
            debug_revision: 0,
        }
    }

    /// Debug JSON for the side panel, re-serialized only after a mutation.
    pub fn debug_json(&mut self) -> &str {
        let revision = self.store.revision();
        if self.debug_json.is_empty() || revision != self.debug_revision {
            self.debug_json = self
                .store
                .to_json()
                .unwrap_or_else(|e| format!("serialization failed: {e}"));
            self.debug_revision = revision;
        }
        &self.debug_json
    }
}

impl eframe::App for CirclepadApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::SidePanel::right("controls")
            .exact_width(320.0)
            .resizable(false)
            .frame(circlepad_widgets::panel_frame())
            .show(ctx, |ui| panel::show_panel(ui, self));

        egui::CentralPanel::default().show(ctx, |ui| canvas::show_canvas(ui, self));
    }
}
