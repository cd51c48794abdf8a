use super::Progress;
use crate::engine::{BarArray, BarState, Stats};

/// Bubble sort position: pass `i`, comparing slots `j` and `j + 1`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BubbleCursor {
    i: usize,
    j: usize,
}

impl BubbleCursor {
    pub fn new() -> Self {
        Self { i: 0, j: 0 }
    }

    pub fn step(&mut self, bars: &mut BarArray, stats: &mut Stats) -> Progress {
        let n = bars.len();
        if self.i >= n {
            return Progress::Done;
        }

        if self.j + 1 < n - self.i {
            let j = self.j;
            stats.comparisons += 1;
            bars.mark(j, BarState::Compared);
            bars.mark(j + 1, BarState::Compared);
            if bars.height(j) > bars.height(j + 1) {
                bars.swap(j, j + 1);
                stats.swaps += 1;
            }
            self.j += 1;
            return Progress::Compared;
        }

        // Largest unsorted bar has bubbled into place
        bars.mark_sorted(n - 1 - self.i);
        self.i += 1;
        self.j = 0;
        Progress::PassComplete
    }
}

impl Default for BubbleCursor {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pass_marks_tail_sorted() {
        let mut bars = BarArray::from_heights([3, 1, 2]);
        let mut stats = Stats::default();
        let mut cursor = BubbleCursor::new();
        assert_eq!(cursor.step(&mut bars, &mut stats), Progress::Compared);
        assert_eq!(cursor.step(&mut bars, &mut stats), Progress::Compared);
        assert_eq!(cursor.step(&mut bars, &mut stats), Progress::PassComplete);
        assert_eq!(bars.heights(), vec![1, 2, 3]);
        assert_eq!(bars.bars()[2].state, BarState::Sorted);
        assert_eq!(stats, Stats { comparisons: 2, swaps: 2 });
    }

    #[test]
    fn reversed_input_swaps_on_every_comparison() {
        let mut bars = BarArray::from_heights([5, 4, 3, 2, 1]);
        let mut stats = Stats::default();
        let mut cursor = BubbleCursor::new();
        while cursor.step(&mut bars, &mut stats) != Progress::Done {}
        assert_eq!(stats, Stats { comparisons: 10, swaps: 10 });
        assert!(bars.is_sorted());
        assert!(bars.all_sorted());
    }
}
