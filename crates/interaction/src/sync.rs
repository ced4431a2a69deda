use catalog::ProductSelection;
use foundation::LonLat;

/// The joined `(location, product, date)` tuple as last dispatched.
///
/// Compared by value: the location is a compound that may be rebuilt on
/// every update, so reference identity would report spurious changes.
#[derive(Debug, Clone, PartialEq)]
pub struct SyncSnapshot {
    pub location: LonLat,
    pub product_id: String,
    pub date: String,
}

/// Downstream receiver of "coordinates are ready to query" triggers.
///
/// Dispatch is fire-and-forget: implementations kick off their own async
/// fetch and own its pending/error state. The synchronizer never awaits
/// or retries.
pub trait PointDataSink {
    fn load_point_data(&mut self, lon: f64, lat: f64);
}

/// Decides when a new point-data fetch is warranted.
///
/// Observes the joined tuple once per discrete change, compares it by value
/// against the previously dispatched tuple, and triggers at most one load.
/// Simultaneous changes to several inputs therefore collapse into a single
/// dispatch instead of one per field.
#[derive(Debug, Default)]
pub struct PointDataSync {
    last: Option<SyncSnapshot>,
    stopped: bool,
}

impl PointDataSync {
    /// Establishes the observation. Pair with [`PointDataSync::stop`].
    pub fn start() -> Self {
        Self::default()
    }

    pub fn is_stopped(&self) -> bool {
        self.stopped
    }

    /// The tuple of the most recent dispatch, if any.
    pub fn last_dispatched(&self) -> Option<&SyncSnapshot> {
        self.last.as_ref()
    }

    /// Tears down the observation.
    ///
    /// Idempotent, and safe to call before any observation fired. No
    /// dispatch ever happens after this returns; loads already dispatched
    /// are not recalled.
    pub fn stop(&mut self) {
        self.stopped = true;
    }

    /// Delivers one joined observation of the three inputs.
    ///
    /// Returns `true` if a load was dispatched. Absent inputs and unchanged
    /// tuples are normal and produce no dispatch.
    pub fn observe(
        &mut self,
        location: Option<LonLat>,
        selection: Option<&ProductSelection>,
        sink: &mut dyn PointDataSink,
    ) -> bool {
        if self.stopped {
            return false;
        }

        let (Some(location), Some(selection)) = (location, selection) else {
            tracing::debug!("point-query inputs not all present yet, skipping");
            return false;
        };
        if !selection.is_complete() {
            tracing::debug!("product selection incomplete, skipping");
            return false;
        }

        let snapshot = SyncSnapshot {
            location,
            product_id: selection.product_id.clone(),
            date: selection.date.clone(),
        };
        if self.last.as_ref() == Some(&snapshot) {
            tracing::debug!("joined inputs unchanged, suppressing duplicate load");
            return false;
        }

        tracing::info!(
            product_id = %snapshot.product_id,
            date = %snapshot.date,
            lon = snapshot.location.lon,
            lat = snapshot.location.lat,
            "dispatching point-data load"
        );
        sink.load_point_data(snapshot.location.lon, snapshot.location.lat);
        self.last = Some(snapshot);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::{PointDataSink, PointDataSync};
    use catalog::ProductSelection;
    use foundation::LonLat;

    #[derive(Debug, Default)]
    struct RecordingSink {
        loads: Vec<(f64, f64)>,
    }

    impl PointDataSink for RecordingSink {
        fn load_point_data(&mut self, lon: f64, lat: f64) {
            self.loads.push((lon, lat));
        }
    }

    fn selection() -> ProductSelection {
        ProductSelection::new("esi-4wk", "2024/01/15")
    }

    #[test]
    fn no_dispatch_while_any_input_is_absent() {
        let mut sync = PointDataSync::start();
        let mut sink = RecordingSink::default();
        let loc = LonLat::new(-100.5, 40.2);

        assert!(!sync.observe(None, None, &mut sink));
        assert!(!sync.observe(Some(loc), None, &mut sink));
        assert!(!sync.observe(None, Some(&selection()), &mut sink));
        assert!(sink.loads.is_empty());
    }

    #[test]
    fn incomplete_selection_counts_as_absent() {
        let mut sync = PointDataSync::start();
        let mut sink = RecordingSink::default();
        let empty_date = ProductSelection::new("esi-4wk", "");

        assert!(!sync.observe(Some(LonLat::new(1.0, 2.0)), Some(&empty_date), &mut sink));
        assert!(sink.loads.is_empty());
    }

    #[test]
    fn dispatches_once_when_all_inputs_become_present() {
        let mut sync = PointDataSync::start();
        let mut sink = RecordingSink::default();
        let loc = LonLat::new(-100.5, 40.2);

        assert!(sync.observe(Some(loc), Some(&selection()), &mut sink));
        assert_eq!(sink.loads, vec![(-100.5, 40.2)]);
    }

    #[test]
    fn identical_joined_updates_are_suppressed() {
        let mut sync = PointDataSync::start();
        let mut sink = RecordingSink::default();
        // Rebuild the location each time: equality must be by value.
        assert!(sync.observe(Some(LonLat::new(1.5, 2.5)), Some(&selection()), &mut sink));
        assert!(!sync.observe(Some(LonLat::new(1.5, 2.5)), Some(&selection()), &mut sink));
        assert!(!sync.observe(Some(LonLat::new(1.5, 2.5)), Some(&selection()), &mut sink));
        assert_eq!(sink.loads.len(), 1);
    }

    #[test]
    fn any_single_field_change_redispatches() {
        let mut sync = PointDataSync::start();
        let mut sink = RecordingSink::default();
        let loc = LonLat::new(1.0, 2.0);

        assert!(sync.observe(Some(loc), Some(&selection()), &mut sink));
        assert!(sync.observe(Some(LonLat::new(3.0, 4.0)), Some(&selection()), &mut sink));
        let other_product = ProductSelection::new("ndvi", "2024/01/15");
        assert!(sync.observe(Some(LonLat::new(3.0, 4.0)), Some(&other_product), &mut sink));
        let other_date = ProductSelection::new("ndvi", "2024/02/15");
        assert!(sync.observe(Some(LonLat::new(3.0, 4.0)), Some(&other_date), &mut sink));
        assert_eq!(sink.loads.len(), 4);
    }

    #[test]
    fn simultaneous_changes_collapse_into_one_dispatch() {
        let mut sync = PointDataSync::start();
        let mut sink = RecordingSink::default();
        assert!(sync.observe(Some(LonLat::new(1.0, 2.0)), Some(&selection()), &mut sink));

        // Location and product both changed since the last observation,
        // delivered as one joined update.
        let other = ProductSelection::new("ndvi", "2024/01/15");
        assert!(sync.observe(Some(LonLat::new(9.0, 9.0)), Some(&other), &mut sink));
        assert_eq!(sink.loads.len(), 2);
    }

    #[test]
    fn stop_is_idempotent_and_final() {
        let mut sync = PointDataSync::start();
        let mut sink = RecordingSink::default();

        sync.stop();
        sync.stop();
        assert!(sync.is_stopped());
        assert!(!sync.observe(Some(LonLat::new(1.0, 2.0)), Some(&selection()), &mut sink));
        assert!(sink.loads.is_empty());
    }

    #[test]
    fn stop_before_any_observation_is_safe() {
        let mut sync = PointDataSync::start();
        sync.stop();
        assert!(sync.last_dispatched().is_none());
    }
}
