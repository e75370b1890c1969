//! Skips redraws while nothing on screen changes.

#[derive(Debug, Clone)]
pub struct RenderThrottle {
    idle_interval_ms: u64,
    /// `(time, fingerprint)` of the last frame drawn
    last: Option<(u64, u64)>,
}

impl RenderThrottle {
    pub fn new(idle_interval_ms: u64) -> Self {
        Self {
            idle_interval_ms,
            last: None,
        }
    }

    /// Whether to draw a frame now.
    ///
    /// Always while animating; otherwise when the fingerprint changed or the
    /// idle interval ran out (to repaint over terminal damage).
    pub fn should_render(&mut self, now_ms: u64, fingerprint: u64, animating: bool) -> bool {
        let due = match self.last {
            None => true,
            Some(_) if animating => true,
            Some((at, seen)) => {
                seen != fingerprint || now_ms.saturating_sub(at) >= self.idle_interval_ms
            }
        };
        if due {
            self.last = Some((now_ms, fingerprint));
        }
        due
    }

    /// Draw on the next call regardless
    pub fn reset(&mut self) {
        self.last = None;
    }
}
