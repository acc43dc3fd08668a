//! Best-Implementation Selection

use crate::error::{DigestError, Result};
use crate::metrics::{AnalysisResult, DerivedMetrics};
use serde::{Deserialize, Serialize};

/// The implementation with the lowest average latency
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BestPick {
    /// Implementation name
    pub name: String,
    /// Its derived metrics
    pub metrics: DerivedMetrics,
}

/// Pick the entry with the minimum `avg_ms`.
///
/// Ties go to the earliest entry in insertion order: a later entry only
/// replaces the current pick when strictly faster.
///
/// # Errors
/// [`DigestError::EmptyResult`] when `result` has no entries.
pub fn pick_best(result: &AnalysisResult) -> Result<BestPick> {
    let mut best: Option<(&str, &DerivedMetrics)> = None;

    for (name, metrics) in result.iter() {
        let faster = match best {
            None => true,
            Some((_, current)) => metrics.avg_ms < current.avg_ms,
        };
        if faster {
            best = Some((name, metrics));
        }
    }

    best.map(|(name, metrics)| BestPick {
        name: name.to_string(),
        metrics: *metrics,
    })
    .ok_or(DigestError::EmptyResult)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AnalysisConfig;
    use crate::metrics::derive;
    use crate::record::MeasurementRecord;
    use proptest::prelude::*;

    fn result_from(avgs: &[f64]) -> AnalysisResult {
        let records: Vec<_> = avgs
            .iter()
            .enumerate()
            .map(|(i, &avg)| MeasurementRecord::new(format!("impl_{i}"), avg, avg, avg))
            .collect();
        derive(&records, &AnalysisConfig::default())
    }

    #[test]
    fn test_pick_hybrid() {
        let records = vec![
            MeasurementRecord::new("RocSOLVER", 2.1, 2.4, 2.3),
            MeasurementRecord::new("Hybrid", 1.5, 1.8, 1.6),
        ];
        let result = derive(&records, &AnalysisConfig::default());
        let best = pick_best(&result).unwrap();
        assert_eq!(best.name, "Hybrid");
        assert_eq!(best.metrics.avg_ms, 1.6);
        assert!(best.metrics.target_met);
    }

    #[test]
    fn test_empty_result() {
        let err = pick_best(&AnalysisResult::new()).unwrap_err();
        assert!(matches!(err, DigestError::EmptyResult));
    }

    #[test]
    fn test_tie_goes_to_first() {
        let best = pick_best(&result_from(&[3.0, 1.0, 2.0, 1.0])).unwrap();
        assert_eq!(best.name, "impl_1");
    }

    #[test]
    fn test_signed_zero_tie_goes_to_first() {
        let records = vec![
            MeasurementRecord::new("First", 0.0, 0.0, 0.0),
            MeasurementRecord::new("Second", -0.0, -0.0, -0.0),
        ];
        let result = derive(&records, &AnalysisConfig::default());
        let best = pick_best(&result).unwrap();
        assert_eq!(best.name, "First");
    }

    #[test]
    fn test_single_entry() {
        let best = pick_best(&result_from(&[42.0])).unwrap();
        assert_eq!(best.name, "impl_0");
    }

    proptest! {
        #[test]
        fn prop_pick_is_first_minimum(
            avgs in prop::collection::vec(
                prop::sample::select(vec![0.5f64, 1.0, 1.6, 2.3, 5.0, 7.25]),
                1..24,
            )
        ) {
            let result = result_from(&avgs);
            let best = pick_best(&result).unwrap();

            let min = avgs.iter().cloned().fold(f64::INFINITY, f64::min);
            let first_idx = avgs.iter().position(|&a| a == min).unwrap();

            prop_assert_eq!(best.metrics.avg_ms, min);
            prop_assert_eq!(best.name, format!("impl_{first_idx}"));
        }

        #[test]
        fn prop_pick_never_beaten(avgs in prop::collection::vec(0.001f64..100.0, 1..32)) {
            let result = result_from(&avgs);
            let best = pick_best(&result).unwrap();
            for (_, m) in result.iter() {
                prop_assert!(best.metrics.avg_ms <= m.avg_ms);
            }
        }
    }
}
