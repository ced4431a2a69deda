use foundation::LonLat;

/// The point the user is interested in, plus whether a pick is in progress.
///
/// Ownership contract: this store exclusively mutates both fields; every
/// other component only reads them.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LocationState {
    target: Option<LonLat>,
    selecting: bool,
}

impl LocationState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn target(&self) -> Option<LonLat> {
        self.target
    }

    pub fn is_selecting(&self) -> bool {
        self.selecting
    }

    /// Stores the picked location and leaves selection mode in one step.
    ///
    /// Always overwrites. There is no same-value guard here; suppressing
    /// redundant downstream work is the synchronizer's job.
    pub fn set_target(&mut self, target: LonLat) {
        self.target = Some(target);
        self.selecting = false;
    }

    /// Resets the target to absent. Selection mode is untouched.
    pub fn clear_target(&mut self) {
        self.target = None;
    }

    /// Enters selection mode. Idempotent.
    pub fn start_selection(&mut self) {
        self.selecting = true;
    }

    /// Leaves selection mode without touching the stored location.
    pub fn cancel_selection(&mut self) {
        self.selecting = false;
    }
}
