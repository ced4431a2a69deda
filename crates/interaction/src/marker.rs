use foundation::LonLat;

/// Handle to a marker created on a map surface.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct MarkerId(pub u64);

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum MarkerAnchor {
    Center,
    Bottom,
}

/// Fixed presentation parameters for the target marker.
#[derive(Debug, Clone, PartialEq)]
pub struct MarkerStyle {
    pub anchor: MarkerAnchor,
    pub color: &'static str,
    pub scale: f64,
    /// Pixel offset applied after anchoring, `(x, y)`.
    pub offset_px: (f64, f64),
}

impl Default for MarkerStyle {
    fn default() -> Self {
        Self {
            anchor: MarkerAnchor::Bottom,
            color: "#FF2400",
            scale: 1.5,
            offset_px: (0.0, 5.0),
        }
    }
}

/// Marker operations offered by a live map surface.
pub trait MarkerLayer {
    fn add_marker(&mut self, at: LonLat, style: &MarkerStyle) -> MarkerId;
    fn move_marker(&mut self, id: MarkerId, to: LonLat);
    fn remove_marker(&mut self, id: MarkerId);
    /// Raises the marker above data layers added or reordered after it.
    fn bring_to_front(&mut self, id: MarkerId);
}

/// Keeps exactly one target marker in step with the target location.
///
/// The presenter owns the marker handle, never the surface. When the
/// surface is replaced the stale handle is dropped and the next render
/// re-creates the marker on the new surface, so the logical marker
/// survives map-instance churn.
#[derive(Debug, Default)]
pub struct MarkerPresenter {
    marker: Option<MarkerId>,
    style: MarkerStyle,
}

impl MarkerPresenter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_style(style: MarkerStyle) -> Self {
        Self {
            marker: None,
            style,
        }
    }

    pub fn marker(&self) -> Option<MarkerId> {
        self.marker
    }

    /// Reconciles marker presence and position with the target location.
    ///
    /// An existing marker is repositioned in place rather than recreated,
    /// which avoids flicker and keeps its stacking slot. Foreground
    /// priority is reasserted on every render.
    pub fn render(&mut self, target: Option<LonLat>, layer: &mut dyn MarkerLayer) {
        match (target, self.marker) {
            (Some(at), Some(id)) => {
                layer.move_marker(id, at);
                layer.bring_to_front(id);
            }
            (Some(at), None) => {
                let id = layer.add_marker(at, &self.style);
                layer.bring_to_front(id);
                self.marker = Some(id);
            }
            (None, Some(id)) => {
                layer.remove_marker(id);
                self.marker = None;
            }
            (None, None) => {}
        }
    }

    /// Forgets the marker handle after the underlying surface went away.
    ///
    /// The next [`MarkerPresenter::render`] against the replacement surface
    /// re-creates the marker if a target is still set.
    pub fn surface_replaced(&mut self) {
        self.marker = None;
    }

    /// Re-asserts foreground stacking after the surface's data layers
    /// changed underneath the marker.
    pub fn reassert_front(&mut self, layer: &mut dyn MarkerLayer) {
        if let Some(id) = self.marker {
            layer.bring_to_front(id);
        }
    }
}
