//! Shape store: the single source of truth for circle geometry and selection.
//!
//! All mutations pass through the store so the boundary invariant is never
//! observably violated. The presentation layer polls [`ShapeStore::revision`]
//! to notice changes.

use kurbo::Point;

use crate::bounds::{CanvasBounds, clamp_radius};
use crate::shapes::{Circle, DEFAULT_RADIUS, ShapeId};

/// Circles present at startup: (label, x, y, radius).
const SEED_CIRCLES: [(&str, f64, f64, f64); 3] = [
    ("a", 150.0, 150.0, 25.0),
    ("b", 300.0, 220.0, 40.0),
    ("c", 500.0, 320.0, 18.0),
];

/// Ordered collection of circles plus the current selection.
///
/// Insertion order is display order (later circles draw on top). Unknown ids
/// are treated as no-ops rather than errors: the UI only ever supplies ids
/// drawn from the current circle list.
#[derive(Debug, Clone)]
pub struct ShapeStore {
    bounds: CanvasBounds,
    circles: Vec<Circle>,
    selected: Option<ShapeId>,
    /// Bumped on every observable mutation.
    revision: u64,
    /// Count of labels handed out so far, including the seeds.
    labels_issued: usize,
}

impl Default for ShapeStore {
    fn default() -> Self {
        Self::new(CanvasBounds::default())
    }
}

impl ShapeStore {
    /// Create an empty store for the given canvas.
    pub fn new(bounds: CanvasBounds) -> Self {
        Self {
            bounds,
            circles: Vec::new(),
            selected: None,
            revision: 0,
            labels_issued: 0,
        }
    }

    /// Create a store with the three seed circles, the first one selected.
    pub fn seeded() -> Self {
        let mut store = Self::new(CanvasBounds::default());
        for (label, x, y, radius) in SEED_CIRCLES {
            store.circles.push(Circle::new(label, Point::new(x, y), radius));
        }
        store.labels_issued = SEED_CIRCLES.len();
        store.selected = store.circles.first().map(|c| c.id);
        store
    }

    /// Append a new circle and select it. Always succeeds.
    ///
    /// With no explicit center the circle is staggered diagonally from the
    /// top-left corner; either way the center is clamped onto the canvas.
    pub fn add_circle(&mut self, center: Option<Point>) -> ShapeId {
        let n = self.circles.len() as f64;
        let center = center.unwrap_or_else(|| Point::new(100.0 + 50.0 * n, 100.0 + 30.0 * n));
        let label = next_label(self.labels_issued);
        self.labels_issued += 1;

        let mut circle = Circle::new(label, center, DEFAULT_RADIUS);
        circle.center = self.bounds.clamp_center(circle.center, circle.radius);
        let id = circle.id;
        log::debug!("added circle {} ({id})", circle.label);
        self.circles.push(circle);
        self.selected = Some(id);
        self.touch();
        id
    }

    /// Set the selection to the given circle, or clear it with `None`.
    /// An id with no matching circle leaves the store untouched.
    pub fn select(&mut self, id: Option<ShapeId>) {
        if let Some(id) = id {
            if self.index_of(id).is_none() {
                log::debug!("ignoring selection of unknown shape {id}");
                return;
            }
        }
        if self.selected != id {
            self.selected = id;
            self.touch();
        }
    }

    /// Move a circle, clamping the center against its current radius.
    ///
    /// Called for every intermediate position during a drag, so each step
    /// independently satisfies the boundary invariant.
    pub fn set_position(&mut self, id: ShapeId, center: Point) {
        let bounds = self.bounds;
        let Some(circle) = self.circle_mut(id) else {
            log::debug!("ignoring position update for unknown shape {id}");
            return;
        };
        circle.center = bounds.clamp_center(center, circle.radius);
        self.touch();
    }

    /// Resize a circle, saturating the radius into the legal range and then
    /// re-clamping the center against the new radius. Growing near an edge
    /// pushes the center inward; shrinking never moves a centered circle.
    pub fn set_radius(&mut self, id: ShapeId, radius: f64) {
        let bounds = self.bounds;
        let Some(circle) = self.circle_mut(id) else {
            log::debug!("ignoring radius update for unknown shape {id}");
            return;
        };
        circle.radius = clamp_radius(radius);
        circle.center = bounds.clamp_center(circle.center, circle.radius);
        self.touch();
    }

    /// Remove a circle. If it was selected, selection moves to the circle now
    /// occupying its former index (the successor in display order), else the
    /// circle immediately before it, else nothing.
    pub fn remove(&mut self, id: ShapeId) {
        let Some(index) = self.index_of(id) else {
            log::debug!("ignoring removal of unknown shape {id}");
            return;
        };
        let removed = self.circles.remove(index);
        if self.selected == Some(id) {
            self.selected = self
                .circles
                .get(index)
                .or_else(|| index.checked_sub(1).and_then(|i| self.circles.get(i)))
                .map(|c| c.id);
        }
        log::debug!("removed circle {} ({id})", removed.label);
        self.touch();
    }

    /// The canvas dimensions this store clamps against.
    pub fn bounds(&self) -> CanvasBounds {
        self.bounds
    }

    /// Circles in display order (back to front).
    pub fn circles(&self) -> &[Circle] {
        &self.circles
    }

    /// Get a circle by id.
    pub fn get(&self, id: ShapeId) -> Option<&Circle> {
        self.circles.iter().find(|c| c.id == id)
    }

    /// Id of the selected circle, if any.
    pub fn selected_id(&self) -> Option<ShapeId> {
        self.selected
    }

    /// The selected circle, if any.
    pub fn selected(&self) -> Option<&Circle> {
        self.selected.and_then(|id| self.get(id))
    }

    /// Topmost circle under a point, searching front to back.
    pub fn circle_at(&self, point: Point) -> Option<ShapeId> {
        self.circles
            .iter()
            .rev()
            .find(|c| c.hit_test(point))
            .map(|c| c.id)
    }

    /// Number of circles.
    pub fn len(&self) -> usize {
        self.circles.len()
    }

    /// Check if the store holds no circles.
    pub fn is_empty(&self) -> bool {
        self.circles.is_empty()
    }

    /// Change counter; strictly increases across observable mutations.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Serialize the circle list to pretty-printed JSON (debug view).
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(&self.circles)
    }

    fn touch(&mut self) {
        self.revision += 1;
    }

    fn index_of(&self, id: ShapeId) -> Option<usize> {
        self.circles.iter().position(|c| c.id == id)
    }

    fn circle_mut(&mut self, id: ShapeId) -> Option<&mut Circle> {
        self.circles.iter_mut().find(|c| c.id == id)
    }
}

/// Bijective base-26 label for the nth circle: 0 -> "a", 25 -> "z", 26 -> "aa".
fn next_label(issued: usize) -> String {
    let mut n = issued + 1;
    let mut label = String::new();
    while n > 0 {
        n -= 1;
        label.insert(0, (b'a' + (n % 26) as u8) as char);
        n /= 26;
    }
    label
}
