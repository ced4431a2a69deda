use crate::lonlat::LonLat;
use crate::screen::ScreenPoint;

use std::f64::consts::PI;

/// Base world size in pixels at zoom 0 (512px tiles).
pub const WORLD_TILE_PX: f64 = 512.0;

/// Highest latitude representable in spherical Web Mercator (degrees).
pub const MERCATOR_MAX_LAT_DEG: f64 = 85.051_128_779_806_59;

/// A map viewport using spherical Web Mercator.
///
/// This is the projection a live map instance applies to its own screen;
/// tests and native embedders use it as the authoritative screen-to-geo
/// conversion for click resolution.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Viewport {
    pub center: LonLat,
    pub zoom: f64,
    pub width_px: f64,
    pub height_px: f64,
}

impl Viewport {
    pub fn new(center: LonLat, zoom: f64, width_px: f64, height_px: f64) -> Self {
        Self {
            center,
            zoom,
            width_px,
            height_px,
        }
    }

    /// World size in pixels at this viewport's zoom level.
    pub fn world_px(&self) -> f64 {
        WORLD_TILE_PX * self.zoom.exp2()
    }

    /// Projects geographic coordinates to screen space.
    pub fn project(&self, geo: LonLat) -> ScreenPoint {
        let p = world_px_of(geo, self.world_px());
        let c = world_px_of(self.center, self.world_px());
        ScreenPoint::new(
            p.x - c.x + self.width_px / 2.0,
            p.y - c.y + self.height_px / 2.0,
        )
    }

    /// Converts a screen-space point back to geographic coordinates.
    pub fn unproject(&self, screen: ScreenPoint) -> LonLat {
        let world = self.world_px();
        let c = world_px_of(self.center, world);
        let x = c.x + screen.x - self.width_px / 2.0;
        let y = c.y + screen.y - self.height_px / 2.0;

        let lon = x / world * 360.0 - 180.0;
        let merc_y = PI * (1.0 - 2.0 * y / world);
        let lat = (merc_y.exp().atan() * 2.0 - PI / 2.0).to_degrees();
        LonLat::new(lon, lat)
    }
}

fn world_px_of(geo: LonLat, world: f64) -> ScreenPoint {
    let lat = geo
        .lat
        .clamp(-MERCATOR_MAX_LAT_DEG, MERCATOR_MAX_LAT_DEG)
        .to_radians();
    let x = (geo.lon + 180.0) / 360.0 * world;
    let y = (1.0 - ((PI / 4.0 + lat / 2.0).tan().ln()) / PI) / 2.0 * world;
    ScreenPoint::new(x, y)
}
