use clap::Parser;

use crate::error::ConfigError;
use crate::generator::HeightRange;

/// Side of the square canvas in logical pixels.
pub const WINDOW_SIZE: u32 = 600;
/// Width of one bar slot.
pub const BAR_WIDTH: u32 = 20;
/// Empty slots left of the first bar.
pub const MARGIN_SLOTS: u32 = 5;
pub const FPS: u32 = 60;

pub const MIN_SPEED: f32 = 1.0;
pub const MAX_SPEED: f32 = 60.0;
pub const DEFAULT_SPEED: f32 = 30.0;

#[derive(Parser, Debug, Clone, PartialEq)]
#[command(name = "sort-viz", version, about = "Animate selection and bubble sort step by step")]
pub struct Config {
    /// Number of bars to sort
    #[arg(long, default_value_t = 20)]
    pub bars: usize,

    /// Smallest bar height in pixels
    #[arg(long, default_value_t = 20)]
    pub min_height: u32,

    /// Largest bar height in pixels
    #[arg(long, default_value_t = 500)]
    pub max_height: u32,

    /// Initial sort speed in steps per second
    #[arg(long, default_value_t = DEFAULT_SPEED)]
    pub speed: f32,

    /// Seed for the array generator; random when omitted
    #[arg(long)]
    pub seed: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bars: 20,
            min_height: 20,
            max_height: 500,
            speed: DEFAULT_SPEED,
            seed: None,
        }
    }
}

impl Config {
    pub fn heights(&self) -> HeightRange {
        HeightRange::new(self.min_height, self.max_height)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.heights().check(self.bars)?;

        let needed = (MARGIN_SLOTS as usize + self.bars) * BAR_WIDTH as usize;
        if needed > WINDOW_SIZE as usize {
            return Err(ConfigError::TooWide {
                count: self.bars,
                needed: needed.min(u32::MAX as usize) as u32,
                canvas: WINDOW_SIZE,
            });
        }
        if self.max_height > WINDOW_SIZE {
            return Err(ConfigError::TooTall {
                max: self.max_height,
                canvas: WINDOW_SIZE,
            });
        }
        if !(MIN_SPEED..=MAX_SPEED).contains(&self.speed) {
            return Err(ConfigError::SpeedOutOfRange {
                speed: self.speed,
                min: MIN_SPEED,
                max: MAX_SPEED,
            });
        }
        Ok(())
    }
}
