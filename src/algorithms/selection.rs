use super::Progress;
use crate::engine::{BarArray, BarState, Stats};

/// Selection sort position: slot `i` is being filled, `j` is the next slot
/// to scan and `min` holds the smallest height seen in this pass.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SelectionCursor {
    i: usize,
    j: usize,
    min: usize,
}

impl SelectionCursor {
    pub fn new() -> Self {
        Self { i: 0, j: 1, min: 0 }
    }

    pub fn step(&mut self, bars: &mut BarArray, stats: &mut Stats) -> Progress {
        let n = bars.len();
        if self.i >= n {
            return Progress::Done;
        }

        if self.j < n {
            stats.comparisons += 1;
            if bars.height(self.j) < bars.height(self.min) {
                self.min = self.j;
            }
            bars.mark(self.j, BarState::Compared);
            bars.mark(self.min, BarState::CandidateMinimum);
            self.j += 1;
            return Progress::Compared;
        }

        if self.min != self.i {
            bars.swap(self.i, self.min);
            stats.swaps += 1;
        }
        bars.mark_sorted(self.i);

        self.i += 1;
        self.j = self.i + 1;
        self.min = self.i;
        Progress::PassComplete
    }
}

impl Default for SelectionCursor {
    fn default() -> Self {
        Self::new()
    }
}
