//! Exclusive dataset choice behind the results bar chart.

#[cfg(feature = "serde")]
use serde::Serialize;

use crate::error::SiteError;

/// Upper bound of the chart axis. Scores are METEOR × 100.
pub const CHART_MAX: u32 = 60;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct Dataset {
    pub name: &'static str,
    pub baseline: u32,
    pub proposed: u32,
}

impl Dataset {
    pub fn baseline_height_pct(&self) -> f32 {
        bar_height_pct(self.baseline)
    }

    pub fn proposed_height_pct(&self) -> f32 {
        bar_height_pct(self.proposed)
    }
}

pub const DATASETS: [Dataset; 2] = [
    Dataset {
        name: "Validation Set",
        baseline: 24,
        proposed: 56,
    },
    Dataset {
        name: "Test Set",
        baseline: 23,
        proposed: 37,
    },
];

pub fn bar_height_pct(score: u32) -> f32 {
    (score.min(CHART_MAX) as f32 / CHART_MAX as f32) * 100.0
}

/// Renders a ×100 score back as a METEOR value, e.g. `56` → `"0.56"`.
pub fn score_label(score: u32) -> String {
    format!("0.{score:02}")
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DatasetSelector {
    index: usize,
}

impl DatasetSelector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn datasets(&self) -> &'static [Dataset] {
        &DATASETS
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn current(&self) -> &'static Dataset {
        &DATASETS[self.index]
    }

    /// Out-of-range indices leave the selection untouched.
    pub fn select(&mut self, index: usize) -> Result<&'static Dataset, SiteError> {
        if index >= DATASETS.len() {
            return Err(SiteError::DatasetOutOfRange {
                index,
                len: DATASETS.len(),
            });
        }
        self.index = index;
        Ok(self.current())
    }

    pub fn is_selected(&self, index: usize) -> bool {
        self.index == index
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_on_validation_set() {
        let s = DatasetSelector::new();
        assert_eq!(s.index(), 0);
        assert_eq!(s.current().name, "Validation Set");
        assert!(s.is_selected(0));
    }

    #[test]
    fn select_test_set_returns_exact_values() {
        let mut s = DatasetSelector::new();
        let d = s.select(1).expect("index 1 exists");
        assert_eq!(
            *d,
            Dataset {
                name: "Test Set",
                baseline: 23,
                proposed: 37
            }
        );
        assert_eq!(*s.current(), DATASETS[1]);
    }

    #[test]
    fn out_of_range_is_rejected_without_change() {
        let mut s = DatasetSelector::new();
        s.select(1).expect("index 1 exists");
        let err = s.select(2).unwrap_err();
        assert!(matches!(err, SiteError::DatasetOutOfRange { index: 2, len: 2 }));
        assert_eq!(s.index(), 1);
    }

    #[test]
    fn bars_scale_against_chart_max() {
        let v = DATASETS[0];
        assert!((v.proposed_height_pct() - 93.333_33).abs() < 1e-3);
        assert!((v.baseline_height_pct() - 40.0).abs() < 1e-3);
        assert_eq!(bar_height_pct(500), 100.0);
        assert_eq!(score_label(56), "0.56");
        assert_eq!(score_label(7), "0.07");
    }
}
