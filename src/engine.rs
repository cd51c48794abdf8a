use std::fmt;

use crate::algorithms::{BubbleCursor, Progress, SelectionCursor};
use crate::error::SortError;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BarState {
    Normal,
    Compared,
    CandidateMinimum,
    Sorted,
}

impl BarState {
    /// Compared and CandidateMinimum only last for the step that set them.
    pub fn is_transient(self) -> bool {
        matches!(self, BarState::Compared | BarState::CandidateMinimum)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Bar {
    pub slot: usize,
    pub height: u32,
    pub state: BarState,
}

/// Bars in slot order. `bars[k].slot == k` holds after every swap.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BarArray {
    bars: Vec<Bar>,
}

impl BarArray {
    pub fn from_heights(heights: impl IntoIterator<Item = u32>) -> Self {
        let bars = heights
            .into_iter()
            .enumerate()
            .map(|(slot, height)| Bar {
                slot,
                height,
                state: BarState::Normal,
            })
            .collect();
        Self { bars }
    }

    pub fn len(&self) -> usize {
        self.bars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bars.is_empty()
    }

    pub fn bars(&self) -> &[Bar] {
        &self.bars
    }

    pub fn heights(&self) -> Vec<u32> {
        self.bars.iter().map(|bar| bar.height).collect()
    }

    pub fn height(&self, slot: usize) -> u32 {
        self.bars[slot].height
    }

    /// Exchange the slots of two bars, keeping the container in slot order.
    pub fn swap(&mut self, a: usize, b: usize) {
        if a == b {
            return;
        }
        let slot_a = self.bars[a].slot;
        self.bars[a].slot = self.bars[b].slot;
        self.bars[b].slot = slot_a;
        self.bars.swap(a, b);
    }

    pub fn is_sorted(&self) -> bool {
        self.bars.windows(2).all(|w| w[0].height <= w[1].height)
    }

    pub fn all_sorted(&self) -> bool {
        self.bars.iter().all(|bar| bar.state == BarState::Sorted)
    }

    pub(crate) fn mark(&mut self, slot: usize, state: BarState) {
        if let Some(bar) = self.bars.get_mut(slot) {
            if bar.state != BarState::Sorted {
                bar.state = state;
            }
        }
    }

    pub(crate) fn mark_sorted(&mut self, slot: usize) {
        if let Some(bar) = self.bars.get_mut(slot) {
            bar.state = BarState::Sorted;
        }
    }

    pub(crate) fn mark_all_sorted(&mut self) {
        for bar in &mut self.bars {
            bar.state = BarState::Sorted;
        }
    }

    pub(crate) fn clear_transient(&mut self) {
        for bar in &mut self.bars {
            if bar.state.is_transient() {
                bar.state = BarState::Normal;
            }
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Algorithm {
    Selection,
    Bubble,
}

impl Algorithm {
    pub fn name(self) -> &'static str {
        match self {
            Algorithm::Selection => "Selection Sort",
            Algorithm::Bubble => "Bubble Sort",
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Stats {
    pub comparisons: usize,
    pub swaps: usize,
}

/// Outcome of one `advance` call.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Step {
    Compared(Stats),
    PassComplete(Stats),
    /// Returned once, after the last pass.
    Finished(Stats),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Cursor {
    Selection(SelectionCursor),
    Bubble(BubbleCursor),
    Exhausted,
}

/// A resumable sort run over a `BarArray` it does not own.
#[derive(Clone, Debug)]
pub struct SortSession {
    algorithm: Algorithm,
    stats: Stats,
    cursor: Cursor,
}

impl SortSession {
    pub fn new(algorithm: Algorithm) -> Self {
        let cursor = match algorithm {
            Algorithm::Selection => Cursor::Selection(SelectionCursor::new()),
            Algorithm::Bubble => Cursor::Bubble(BubbleCursor::new()),
        };
        Self {
            algorithm,
            stats: Stats::default(),
            cursor,
        }
    }

    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    pub fn stats(&self) -> Stats {
        self.stats
    }

    pub fn is_finished(&self) -> bool {
        self.cursor == Cursor::Exhausted
    }

    /// Perform one visual step on `bars`.
    pub fn advance(&mut self, bars: &mut BarArray) -> Result<Step, SortError> {
        // Marks from the previous step were visible for one frame
        bars.clear_transient();

        let progress = match &mut self.cursor {
            Cursor::Selection(cursor) => cursor.step(bars, &mut self.stats),
            Cursor::Bubble(cursor) => cursor.step(bars, &mut self.stats),
            Cursor::Exhausted => return Err(SortError::Exhausted),
        };

        let step = match progress {
            Progress::Compared => Step::Compared(self.stats),
            Progress::PassComplete => Step::PassComplete(self.stats),
            Progress::Done => {
                bars.mark_all_sorted();
                self.cursor = Cursor::Exhausted;
                tracing::info!(
                    algorithm = %self.algorithm,
                    comparisons = self.stats.comparisons,
                    swaps = self.stats.swaps,
                    "sort finished"
                );
                Step::Finished(self.stats)
            }
        };
        tracing::debug!(algorithm = %self.algorithm, ?step, "advanced");
        Ok(step)
    }

    /// Drive the session until it finishes, returning the final counters.
    pub fn run_to_end(&mut self, bars: &mut BarArray) -> Stats {
        while let Ok(step) = self.advance(bars) {
            if let Step::Finished(stats) = step {
                return stats;
            }
        }
        self.stats
    }
}
