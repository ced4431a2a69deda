/// Geographic position in degrees.
///
/// Compared by value: two `LonLat`s built independently from the same
/// coordinates are equal, which is what change detection relies on.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct LonLat {
    pub lon: f64,
    pub lat: f64,
}

impl LonLat {
    pub fn new(lon: f64, lat: f64) -> Self {
        Self { lon, lat }
    }

    pub fn is_finite(self) -> bool {
        self.lon.is_finite() && self.lat.is_finite()
    }

    /// Wraps longitude into `[-180, 180)`.
    ///
    /// Values already in range are returned bit-for-bit unchanged, so
    /// wrapping never perturbs a coordinate that is already canonical.
    pub fn wrapped_lon(self) -> Self {
        if (-180.0..180.0).contains(&self.lon) {
            return self;
        }
        let mut lon = (self.lon + 180.0).rem_euclid(360.0) - 180.0;
        if lon == 180.0 {
            lon = -180.0;
        }
        Self::new(lon, self.lat)
    }
}
