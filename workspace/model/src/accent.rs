use serde::Serialize;

/// Dashboard palette. Every series, card and badge picks one of these instead of
/// carrying a free-form color string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Accent {
    Gold,
    Teal,
    Coral,
    Violet,
    Sea,
    Sand,
}

impl Accent {
    /// Cycle used for per-cohort retention lines.
    pub const SERIES_CYCLE: [Accent; 6] = [
        Accent::Teal,
        Accent::Gold,
        Accent::Coral,
        Accent::Violet,
        Accent::Sea,
        Accent::Sand,
    ];

    pub fn hex(self) -> &'static str {
        match self {
            Accent::Gold => "#E8B931",
            Accent::Teal => "#4ECDC4",
            Accent::Coral => "#FF6B6B",
            Accent::Violet => "#A78BFA",
            Accent::Sea => "#45B7AA",
            Accent::Sand => "#F7DC6F",
        }
    }

    fn rgb(self) -> (u8, u8, u8) {
        match self {
            Accent::Gold => (232, 185, 49),
            Accent::Teal => (78, 205, 196),
            Accent::Coral => (255, 107, 107),
            Accent::Violet => (167, 139, 250),
            Accent::Sea => (69, 183, 170),
            Accent::Sand => (247, 220, 111),
        }
    }

    /// `rgba(...)` form of the accent with the given alpha in `[0, 1]`.
    pub fn rgba(self, alpha: f32) -> String {
        let (r, g, b) = self.rgb();
        format!("rgba({}, {}, {}, {})", r, g, b, alpha.clamp(0.0, 1.0))
    }

    /// Accent assigned to the `index`-th series of a multi-series chart.
    pub fn for_series(index: usize) -> Accent {
        Self::SERIES_CYCLE[index % Self::SERIES_CYCLE.len()]
    }
}
