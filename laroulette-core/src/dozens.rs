use std::collections::BTreeSet;

use crate::models::{Dozen, Outcome};
use crate::observer::{BreakCause, DetectionEvent, DetectionObserver, PatternName};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DozenGap {
    /// Les deux douzaines sorties, par ordre croissant.
    pub present: [Dozen; 2],
    pub missing: Dozen,
    pub length: usize,
}

/// Série récente limitée à exactement deux douzaines.
///
/// Ne remonte que les `required` dernières sorties non spéciales ; un 0 ou un 00
/// avant d'atteindre ce compte annule le motif. Une seule douzaine ou les trois
/// douzaines présentes ne donnent aucun motif.
pub fn detect_dozen_gap(
    history: &[Outcome],
    required: usize,
    observer: &dyn DetectionObserver,
) -> Option<DozenGap> {
    let pattern = PatternName::Dozen;
    if history.len() < required {
        observer.on_event(&DetectionEvent::InsufficientHistory {
            pattern,
            len: history.len(),
            required,
        });
        return None;
    }

    let mut seen: Vec<Dozen> = Vec::with_capacity(required);
    for (index, outcome) in history.iter().enumerate().rev() {
        if seen.len() >= required {
            break;
        }
        match outcome.dozen() {
            Some(dozen) => seen.push(dozen),
            None => {
                observer.on_event(&DetectionEvent::RunBroken {
                    pattern,
                    index,
                    cause: BreakCause::Special,
                    length: seen.len(),
                });
                break;
            }
        }
    }

    let length = seen.len();
    if length == 0 || length < required {
        observer.on_event(&DetectionEvent::NoPattern { pattern, length, required });
        return None;
    }

    let distinct: BTreeSet<Dozen> = seen.into_iter().collect();
    let present: Vec<Dozen> = distinct.iter().copied().collect();
    let &[first, second] = present.as_slice() else {
        observer.on_event(&DetectionEvent::NoPattern { pattern, length, required });
        return None;
    };
    let missing = match (first, second) {
        (Dozen::First, Dozen::Second) => Dozen::Third,
        (Dozen::First, Dozen::Third) => Dozen::Second,
        _ => Dozen::First,
    };

    let gap = DozenGap {
        present: [first, second],
        missing,
        length,
    };
    observer.on_event(&DetectionEvent::PatternFound {
        pattern,
        value: missing.to_string(),
        length,
    });
    Some(gap)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::parse_history;
    use crate::observer::testing::RecordingObserver;
    use crate::observer::NoopObserver;

    fn history(values: &[i64]) -> Vec<Outcome> {
        parse_history(values).unwrap()
    }

    #[test]
    fn test_two_dozens_recommend_third() {
        let h = history(&[1, 13, 2, 14, 3]);
        let gap = detect_dozen_gap(&h, 5, &NoopObserver).unwrap();
        assert_eq!(gap.present, [Dozen::First, Dozen::Second]);
        assert_eq!(gap.missing, Dozen::Third);
        assert_eq!(gap.length, 5);
    }

    #[test]
    fn test_missing_first_dozen() {
        let h = history(&[30, 20, 25, 36, 13]);
        let gap = detect_dozen_gap(&h, 4, &NoopObserver).unwrap();
        assert_eq!(gap.present, [Dozen::Second, Dozen::Third]);
        assert_eq!(gap.missing, Dozen::First);
        assert_eq!(gap.length, 4);
    }

    #[test]
    fn test_missing_second_dozen() {
        let h = history(&[1, 25, 2, 26]);
        let gap = detect_dozen_gap(&h, 4, &NoopObserver).unwrap();
        assert_eq!(gap.present, [Dozen::First, Dozen::Third]);
        assert_eq!(gap.missing, Dozen::Second);
    }

    #[test]
    fn test_three_dozens_no_pattern() {
        let h = history(&[1, 13, 25, 2, 14]);
        assert_eq!(detect_dozen_gap(&h, 5, &NoopObserver), None);
    }

    #[test]
    fn test_single_dozen_no_pattern() {
        let h = history(&[1, 2, 3, 4, 5, 6]);
        assert_eq!(detect_dozen_gap(&h, 5, &NoopObserver), None);
    }

    #[test]
    fn test_only_required_tail_is_inspected() {
        // Le 25 plus ancien est hors de la fenêtre de 4
        let h = history(&[25, 1, 13, 2, 14]);
        let gap = detect_dozen_gap(&h, 4, &NoopObserver).unwrap();
        assert_eq!(gap.missing, Dozen::Third);
        assert_eq!(gap.length, 4);
    }

    #[test]
    fn test_special_breaks_run() {
        let obs = RecordingObserver::default();
        let h = history(&[1, 13, 2, 0, 14, 3]);
        assert_eq!(detect_dozen_gap(&h, 4, &obs), None);
        assert!(obs.events.borrow().contains(&DetectionEvent::RunBroken {
            pattern: PatternName::Dozen,
            index: 3,
            cause: BreakCause::Special,
            length: 2,
        }));
    }

    #[test]
    fn test_special_outside_tail_is_ignored() {
        let h = history(&[37, 1, 13, 2, 14]);
        let gap = detect_dozen_gap(&h, 4, &NoopObserver).unwrap();
        assert_eq!(gap.missing, Dozen::Third);
    }

    #[test]
    fn test_short_history() {
        assert_eq!(detect_dozen_gap(&history(&[1, 13]), 3, &NoopObserver), None);
        assert_eq!(detect_dozen_gap(&[], 1, &NoopObserver), None);
    }
}
