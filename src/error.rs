/// Rejected configuration, detected before any bars are generated.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("empty height range: min {min} is greater than max {max}")]
    EmptyRange { min: u32, max: u32 },

    #[error("cannot draw {count} distinct heights from {min}..={max} ({available} available)")]
    InfeasibleRange {
        count: usize,
        min: u32,
        max: u32,
        available: u64,
    },

    #[error("{count} bars need {needed}px of width but the canvas is {canvas}px")]
    TooWide { count: usize, needed: u32, canvas: u32 },

    #[error("max height {max}px does not fit the {canvas}px canvas")]
    TooTall { max: u32, canvas: u32 },

    #[error("speed {speed} is outside {min}..={max} steps per second")]
    SpeedOutOfRange { speed: f32, min: f32, max: f32 },
}

/// Misuse of a sort session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum SortError {
    #[error("sort session already finished")]
    Exhausted,
}
