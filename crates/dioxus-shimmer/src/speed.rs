/// Sweep period presets for the shimmer animation.
///
/// Four named speeds cover the usual range; [`Speed::Custom`] carries an
/// explicit period for anything else. The period is how long one full pass
/// of the highlight band takes, so smaller is faster.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Speed {
    /// A very fast sweep, 0.1 s per pass.
    Flash,
    /// A fast sweep, 1 s per pass.
    Fast,
    /// The default sweep, 2 s per pass.
    #[default]
    Medium,
    /// A slow sweep, 3 s per pass.
    Slow,
    /// A caller-supplied period in seconds.
    Custom(f64),
}

impl Speed {
    /// The sweep period in seconds.
    pub fn duration_secs(&self) -> f64 {
        match self {
            Speed::Flash => 0.1,
            Speed::Fast => 1.0,
            Speed::Medium => 2.0,
            Speed::Slow => 3.0,
            Speed::Custom(secs) => *secs,
        }
    }

    /// The period as a CSS time value, e.g. `"2s"` or `"0.1s"`.
    pub fn as_css(&self) -> String {
        format!("{}s", self.duration_secs())
    }
}
