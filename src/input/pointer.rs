use super::event::PointerSample;

/// Time-weighted pointer displacement between the two latest samples.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerDelta {
    /// Seconds between the two samples.
    pub dt: f64,
    /// Horizontal displacement scaled by `dt`.
    pub dx: f64,
    /// Vertical displacement scaled by `dt`.
    pub dy: f64,
}

impl PointerDelta {
    /// Whether both scaled components are exactly zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.dx == 0.0 && self.dy == 0.0
    }
}

/// Tracks the two most recent pointer samples.
///
/// `latest` is the newest sample, `previous` the one before it. Samples
/// are expected in chronological order.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PointerHistory {
    latest: Option<PointerSample>,
    previous: Option<PointerSample>,
}

impl PointerHistory {
    /// Create an empty history.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a new sample, shifting the current latest into `previous`.
    pub fn push(&mut self, sample: PointerSample) {
        self.previous = self.latest.replace(sample);
    }

    /// Newest recorded sample.
    #[must_use]
    pub fn latest(&self) -> Option<PointerSample> {
        self.latest
    }

    /// Displacement between the last two samples, or `None` until two
    /// samples have been recorded.
    #[must_use]
    pub fn delta(&self) -> Option<PointerDelta> {
        let (t0, t1) = (self.latest?, self.previous?);
        let dt = t0.time - t1.time;
        Some(PointerDelta {
            dt,
            dx: (t0.x - t1.x) * dt,
            dy: (t0.y - t1.y) * dt,
        })
    }

    /// Note that the pointer was warped to the view center: the latest
    /// sample keeps its time but moves to `(0, 0)`, so the next real
    /// sample measures its displacement from the center.
    pub fn recenter(&mut self) {
        if let Some(latest) = self.latest.as_mut() {
            latest.x = 0.0;
            latest.y = 0.0;
        }
    }

    /// Forget all samples.
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}
