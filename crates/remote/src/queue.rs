use interaction::PointDataSink;

/// Fire-and-forget bridge between the reactive core and the async fetcher.
///
/// The session pushes coordinates in synchronously; an async driver drains
/// them later and issues the actual point queries with
/// [`crate::DataApiClient::query_point_value`]. The queue never blocks and
/// never talks to the network itself.
#[derive(Debug, Default)]
pub struct PointQueryQueue {
    pending: Vec<(f64, f64)>,
}

impl PointQueryQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Takes all pending coordinates, oldest first.
    pub fn drain(&mut self) -> Vec<(f64, f64)> {
        std::mem::take(&mut self.pending)
    }
}

impl PointDataSink for PointQueryQueue {
    fn load_point_data(&mut self, lon: f64, lat: f64) {
        self.pending.push((lon, lat));
    }
}
