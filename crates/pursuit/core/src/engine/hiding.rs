use super::PursuitEngine;

impl PursuitEngine {
    /// Enters or leaves a hiding spot. Progress restarts on every transition.
    pub fn toggle_hiding(&mut self, entering: bool) {
        if self.state.is_hiding == entering {
            return;
        }
        self.state.is_hiding = entering;
        self.state.hiding_progress = 0.0;
        tracing::debug!(entering, "hiding toggled");
    }

    pub(super) fn advance_hiding(&mut self, dt: f32) {
        if !self.state.is_hiding {
            return;
        }
        let step = dt / self.config.hiding_fill_duration;
        self.state.hiding_progress = (self.state.hiding_progress + step).min(1.0);
    }
}
