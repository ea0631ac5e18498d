/// Rounding applied to every figure the engine reports.
pub const SCORE_ROUNDING: RoundingMode = RoundingMode::HalfUp;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundingMode {
    /// `floor(x + 0.5)`: ties round toward positive infinity (`-2.5` becomes `-2`).
    HalfUp,
    /// Ties round away from zero (`-2.5` becomes `-3`).
    HalfAwayFromZero,
}

impl RoundingMode {
    pub fn round(self, value: f64) -> f64 {
        match self {
            Self::HalfUp => (value + 0.5).floor(),
            Self::HalfAwayFromZero => value.round(),
        }
    }

    pub fn round_to(self, value: f64, decimals: u32) -> f64 {
        let factor = 10_f64.powi(decimals as i32);
        self.round(value * factor) / factor
    }
}
