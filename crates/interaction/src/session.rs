use catalog::ProductSelection;

use crate::basemap::BasemapState;
use crate::click::{ClickEvent, MapUnproject, resolve_click};
use crate::location::LocationState;
use crate::marker::{MarkerLayer, MarkerPresenter, MarkerStyle};
use crate::sync::{PointDataSink, PointDataSync};

/// Owner of the interaction state for one map view.
///
/// Joins the location store, the externally-owned product selection, the
/// synchronizer and the marker presenter, and runs exactly one flush per
/// mutation. That single flush is what turns several field updates from
/// one user action into one joined observation, and therefore at most one
/// point-data load.
///
/// Single-threaded by construction; every method runs to completion
/// synchronously and the session never awaits the loads it triggers.
pub struct MapSession<M, S> {
    location: LocationState,
    selection: Option<ProductSelection>,
    sync: PointDataSync,
    presenter: MarkerPresenter,
    basemap: BasemapState,
    map: Option<M>,
    sink: S,
}

impl<M, S> MapSession<M, S>
where
    M: MapUnproject + MarkerLayer,
    S: PointDataSink,
{
    pub fn new(sink: S) -> Self {
        Self {
            location: LocationState::new(),
            selection: None,
            sync: PointDataSync::start(),
            presenter: MarkerPresenter::new(),
            basemap: BasemapState::new(),
            map: None,
            sink,
        }
    }

    pub fn with_marker_style(sink: S, style: MarkerStyle) -> Self {
        Self {
            presenter: MarkerPresenter::with_style(style),
            ..Self::new(sink)
        }
    }

    pub fn location(&self) -> &LocationState {
        &self.location
    }

    pub fn basemap(&self) -> &BasemapState {
        &self.basemap
    }

    pub fn map(&self) -> Option<&M> {
        self.map.as_ref()
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    /// Installs or replaces the live map instance.
    ///
    /// A marker created on the previous instance is stale once the surface
    /// is replaced; presence logic re-runs against the new one immediately,
    /// so a target set before the map existed still gets its marker.
    pub fn set_map(&mut self, map: M) {
        if self.map.is_some() {
            self.presenter.surface_replaced();
        }
        self.map = Some(map);
        self.render_marker();
    }

    /// Removes the live map instance, e.g. while the view is torn down.
    pub fn take_map(&mut self) -> Option<M> {
        let map = self.map.take();
        if map.is_some() {
            self.presenter.surface_replaced();
        }
        map
    }

    /// Enters location-selection mode. Idempotent.
    pub fn start_selection(&mut self) {
        self.location.start_selection();
    }

    /// Leaves selection mode; the stored target is untouched.
    pub fn cancel_selection(&mut self) {
        self.location.cancel_selection();
    }

    /// Clears the target location. The marker disappears; no load fires.
    pub fn clear_target(&mut self) {
        self.location.clear_target();
        self.flush();
    }

    /// Entry point for pointer gestures from the rendering layer.
    ///
    /// Outside selection mode a click is ordinary map interaction and a
    /// silent no-op. A click that cannot be resolved is logged and dropped;
    /// selection mode stays active so the user can click again.
    pub fn handle_click(&mut self, event: &ClickEvent) {
        if !self.location.is_selecting() {
            tracing::debug!("click outside selection mode, ignoring");
            return;
        }

        let map = self.map.as_ref().map(|m| m as &dyn MapUnproject);
        match resolve_click(event, map) {
            Ok(at) => {
                tracing::info!(lon = at.lon, lat = at.lat, "target location picked");
                self.location.set_target(at);
                self.flush();
            }
            Err(err) => {
                tracing::warn!(%err, "dropping click");
            }
        }
    }

    /// Mirrors the externally-owned product selection into the session.
    ///
    /// Call whenever the product picker changes product or date; passing
    /// the same values again is harmless and dispatches nothing.
    pub fn set_product_selection(&mut self, selection: Option<ProductSelection>) {
        self.selection = selection;
        self.flush();
    }

    /// The map's data layers changed, which can reorder visual stacking;
    /// push the marker back to the foreground.
    pub fn map_layers_changed(&mut self) {
        if let Some(map) = self.map.as_mut() {
            self.presenter.reassert_front(map);
        }
    }

    pub fn set_basemap(&mut self, basemap_id: impl Into<String>) {
        self.basemap.set_basemap(basemap_id);
    }

    /// Tears down the synchronizer observation. Idempotent; the marker and
    /// stored state stay readable, but no further loads are dispatched.
    pub fn shutdown(&mut self) {
        self.sync.stop();
    }

    /// One joined observation plus one marker reconciliation — the single
    /// update cycle that follows every mutation.
    fn flush(&mut self) {
        self.sync
            .observe(self.location.target(), self.selection.as_ref(), &mut self.sink);
        self.render_marker();
    }

    fn render_marker(&mut self) {
        if let Some(map) = self.map.as_mut() {
            self.presenter.render(self.location.target(), map);
        }
    }
}
