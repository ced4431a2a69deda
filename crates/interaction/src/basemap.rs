/// Basemap the viewer starts on.
pub const DEFAULT_BASEMAP: &str = "dark";

/// Which basemap the map renders beneath the data layers.
///
/// Read by the rendering layer only; nothing in the interaction core
/// depends on the chosen basemap.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BasemapState {
    selected: String,
}

impl Default for BasemapState {
    fn default() -> Self {
        Self {
            selected: DEFAULT_BASEMAP.to_owned(),
        }
    }
}

impl BasemapState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selected(&self) -> &str {
        &self.selected
    }

    pub fn set_basemap(&mut self, basemap_id: impl Into<String>) {
        self.selected = basemap_id.into();
    }
}
