use foundation::{LonLat, ScreenPoint};
use thiserror::Error;

/// A pointer gesture as delivered by the rendering layer.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ClickEvent {
    /// Screen-space pointer position, if the gesture carried one.
    pub screen: Option<ScreenPoint>,
    /// Geographic coordinate pre-projected by the rendering layer
    /// (`[lon, lat, ...]`). Less accurate than re-projecting through the
    /// live map itself.
    pub picked: Option<Vec<f64>>,
}

impl ClickEvent {
    pub fn at_screen(x: f64, y: f64) -> Self {
        Self {
            screen: Some(ScreenPoint::new(x, y)),
            picked: None,
        }
    }

    pub fn with_picked(mut self, coordinate: Vec<f64>) -> Self {
        self.picked = Some(coordinate);
        self
    }
}

/// Screen-to-geographic conversion owned by a live map instance.
pub trait MapUnproject {
    fn unproject(&self, screen: ScreenPoint) -> LonLat;
}

impl MapUnproject for foundation::Viewport {
    fn unproject(&self, screen: ScreenPoint) -> LonLat {
        foundation::Viewport::unproject(self, screen)
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ResolveError {
    /// The event carried neither usable screen coordinates nor a
    /// pre-projected coordinate pair.
    #[error("click event lacks usable coordinate data")]
    MissingCoordinateData,
}

/// Resolves a click to a canonical geographic coordinate.
///
/// Priority order:
/// 1. the live map's own projection of valid screen coordinates, which is
///    exactly what the user saw;
/// 2. the event's pre-projected coordinate pair (degraded accuracy);
/// 3. failure. Never guesses.
///
/// Longitude is wrapped into `[-180, 180)` on the way out: a click past the
/// antimeridian on a panned map unprojects to an out-of-range longitude,
/// and downstream queries expect the canonical form. In-range coordinates
/// pass through unchanged.
pub fn resolve_click(
    event: &ClickEvent,
    map: Option<&dyn MapUnproject>,
) -> Result<LonLat, ResolveError> {
    if let (Some(map), Some(screen)) = (map, event.screen) {
        if screen.is_finite() {
            return Ok(map.unproject(screen).wrapped_lon());
        }
    }

    if let Some(picked) = event.picked.as_deref() {
        if let [lon, lat, ..] = *picked {
            tracing::warn!(lon, lat, "no live map projection, using pre-projected coordinate");
            return Ok(LonLat::new(lon, lat).wrapped_lon());
        }
    }

    Err(ResolveError::MissingCoordinateData)
}

#[cfg(test)]
mod tests {
    use super::{ClickEvent, MapUnproject, ResolveError, resolve_click};
    use foundation::{LonLat, ScreenPoint, Viewport};

    #[test]
    fn live_map_projection_wins_over_picked_coordinate() {
        let vp = Viewport::new(LonLat::new(0.0, 0.0), 3.0, 800.0, 600.0);
        let event = ClickEvent::at_screen(400.0, 300.0).with_picked(vec![9.9, 9.9]);

        let got = resolve_click(&event, Some(&vp)).unwrap();
        let expected = vp.unproject(ScreenPoint::new(400.0, 300.0));
        assert_eq!(got, expected);
    }

    #[test]
    fn falls_back_to_picked_coordinate_without_a_map() {
        let event = ClickEvent::at_screen(10.0, 20.0).with_picked(vec![-100.5, 40.2, 0.0]);
        let got = resolve_click(&event, None).unwrap();
        assert_eq!(got, LonLat::new(-100.5, 40.2));
    }

    #[test]
    fn falls_back_when_screen_coordinates_are_not_finite() {
        let vp = Viewport::new(LonLat::new(0.0, 0.0), 3.0, 800.0, 600.0);
        let event = ClickEvent {
            screen: Some(ScreenPoint::new(f64::NAN, 300.0)),
            picked: Some(vec![12.0, 34.0]),
        };
        let got = resolve_click(&event, Some(&vp)).unwrap();
        assert_eq!(got, LonLat::new(12.0, 34.0));
    }

    #[test]
    fn short_picked_coordinate_is_not_enough() {
        let event = ClickEvent {
            screen: None,
            picked: Some(vec![12.0]),
        };
        assert_eq!(
            resolve_click(&event, None),
            Err(ResolveError::MissingCoordinateData)
        );
    }

    #[test]
    fn antimeridian_click_resolves_to_wrapped_longitude() {
        struct PannedPastDateline;
        impl MapUnproject for PannedPastDateline {
            fn unproject(&self, _screen: ScreenPoint) -> LonLat {
                LonLat::new(190.0, 10.0)
            }
        }

        let event = ClickEvent::at_screen(5.0, 5.0);
        let got = resolve_click(&event, Some(&PannedPastDateline)).unwrap();
        assert_eq!(got, LonLat::new(-170.0, 10.0));
    }

    #[test]
    fn picked_coordinate_is_also_wrapped() {
        let event = ClickEvent::default().with_picked(vec![-190.0, -5.0]);
        let got = resolve_click(&event, None).unwrap();
        assert_eq!(got, LonLat::new(170.0, -5.0));
    }

    #[test]
    fn empty_event_fails() {
        assert_eq!(
            resolve_click(&ClickEvent::default(), None),
            Err(ResolveError::MissingCoordinateData)
        );
    }

    #[test]
    fn map_without_screen_coordinates_uses_picked_pair() {
        struct Panics;
        impl MapUnproject for Panics {
            fn unproject(&self, _screen: ScreenPoint) -> LonLat {
                unreachable!("must not project without screen coordinates")
            }
        }

        let event = ClickEvent {
            screen: None,
            picked: Some(vec![1.0, 2.0]),
        };
        let got = resolve_click(&event, Some(&Panics)).unwrap();
        assert_eq!(got, LonLat::new(1.0, 2.0));
    }
}
