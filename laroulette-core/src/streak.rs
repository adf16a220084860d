use std::fmt;

use crate::models::{Color, Half, Outcome, Parity, PossibilitySet};
use crate::observer::{BreakCause, DetectionEvent, DetectionObserver, PatternName};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Streak<T> {
    pub value: T,
    pub length: usize,
}

/// Série en cours d'un attribut, lue depuis la sortie la plus récente.
///
/// `history` est dans l'ordre chronologique (dernier élément = plus récent).
/// `extract` renvoie `None` pour une sortie spéciale, ce qui arrête le parcours.
/// Le parcours s'arrête aussi au premier changement de valeur ; aucune fenêtre
/// ne borne la remontée.
pub fn detect_streak<T, F>(
    history: &[Outcome],
    required: usize,
    pattern: PatternName,
    extract: F,
    observer: &dyn DetectionObserver,
) -> Option<Streak<T>>
where
    T: Copy + PartialEq + fmt::Display,
    F: Fn(&Outcome) -> Option<T>,
{
    if history.len() < required {
        observer.on_event(&DetectionEvent::InsufficientHistory {
            pattern,
            len: history.len(),
            required,
        });
        return None;
    }

    let mut current: Option<T> = None;
    let mut length = 0;

    for (index, outcome) in history.iter().enumerate().rev() {
        let Some(value) = extract(outcome) else {
            observer.on_event(&DetectionEvent::RunBroken {
                pattern,
                index,
                cause: BreakCause::Special,
                length,
            });
            break;
        };
        match current {
            None => {
                current = Some(value);
                length = 1;
            }
            Some(run) if run == value => length += 1,
            Some(_) => {
                observer.on_event(&DetectionEvent::RunBroken {
                    pattern,
                    index,
                    cause: BreakCause::Mismatch,
                    length,
                });
                break;
            }
        }
    }

    match current {
        Some(value) if length >= required => {
            observer.on_event(&DetectionEvent::PatternFound {
                pattern,
                value: value.to_string(),
                length,
            });
            Some(Streak { value, length })
        }
        _ => {
            observer.on_event(&DetectionEvent::NoPattern {
                pattern,
                length,
                required,
            });
            None
        }
    }
}

pub fn color_streak(
    history: &[Outcome],
    required: usize,
    observer: &dyn DetectionObserver,
) -> Option<Streak<Color>> {
    detect_streak(
        history,
        required,
        PatternName::Color,
        |o| match o.color() {
            Color::Green => None,
            color => Some(color),
        },
        observer,
    )
}

pub fn parity_streak(
    history: &[Outcome],
    required: usize,
    observer: &dyn DetectionObserver,
) -> Option<Streak<Parity>> {
    detect_streak(history, required, PatternName::Parity, Outcome::parity, observer)
}

pub fn half_streak(
    history: &[Outcome],
    required: usize,
    observer: &dyn DetectionObserver,
) -> Option<Streak<Half>> {
    detect_streak(history, required, PatternName::Half, Outcome::half, observer)
}

pub fn possibility_streak(
    history: &[Outcome],
    required: usize,
    observer: &dyn DetectionObserver,
) -> Option<Streak<PossibilitySet>> {
    detect_streak(history, required, PatternName::Possibility, Outcome::possibility, observer)
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
    fn test_red_run() {
        let s = color_streak(&history(&[1, 3, 5]), 3, &NoopObserver).unwrap();
        assert_eq!(s, Streak { value: Color::Red, length: 3 });
    }

    #[test]
    fn test_black_run() {
        let s = color_streak(&history(&[2, 4, 6]), 3, &NoopObserver).unwrap();
        assert_eq!(s, Streak { value: Color::Black, length: 3 });
    }

    #[test]
    fn test_zero_breaks_run() {
        // 7 repart d'une série de 1 : le parcours ne franchit pas le 0
        assert_eq!(color_streak(&history(&[1, 3, 5, 0, 7]), 3, &NoopObserver), None);
        assert_eq!(color_streak(&history(&[1, 3, 5, 37, 7]), 2, &NoopObserver), None);
    }

    #[test]
    fn test_latest_special_means_no_pattern() {
        let obs = RecordingObserver::default();
        assert_eq!(color_streak(&history(&[1, 3, 5, 7, 0]), 3, &obs), None);
        let events = obs.events.borrow();
        assert_eq!(
            events[0],
            DetectionEvent::RunBroken {
                pattern: PatternName::Color,
                index: 4,
                cause: BreakCause::Special,
                length: 0,
            }
        );
    }

    #[test]
    fn test_run_counts_past_threshold() {
        // 2 (Noir) interrompt, puis 1 3 5 7 9 rouges
        let s = color_streak(&history(&[2, 1, 3, 5, 7, 9]), 3, &NoopObserver).unwrap();
        assert_eq!(s.length, 5);
        assert_eq!(s.value, Color::Red);
    }

    #[test]
    fn test_run_reaches_start_of_history() {
        let s = parity_streak(&history(&[2, 4, 6, 8, 10, 12]), 5, &NoopObserver).unwrap();
        assert_eq!(s, Streak { value: Parity::Even, length: 6 });
    }

    #[test]
    fn test_too_short_history() {
        let obs = RecordingObserver::default();
        assert_eq!(color_streak(&history(&[1, 3]), 3, &obs), None);
        assert_eq!(
            obs.events.borrow().as_slice(),
            &[DetectionEvent::InsufficientHistory {
                pattern: PatternName::Color,
                len: 2,
                required: 3,
            }]
        );
        assert_eq!(color_streak(&[], 1, &NoopObserver), None);
    }

    #[test]
    fn test_mismatch_below_threshold() {
        let obs = RecordingObserver::default();
        assert_eq!(half_streak(&history(&[1, 2, 30, 31]), 3, &obs), None);
        let events = obs.events.borrow();
        assert!(events.contains(&DetectionEvent::RunBroken {
            pattern: PatternName::Half,
            index: 1,
            cause: BreakCause::Mismatch,
            length: 2,
        }));
        assert_eq!(
            events.last(),
            Some(&DetectionEvent::NoPattern {
                pattern: PatternName::Half,
                length: 2,
                required: 3,
            })
        );
    }

    #[test]
    fn test_high_half_run() {
        let s = half_streak(&history(&[1, 19, 20, 36]), 3, &NoopObserver).unwrap();
        assert_eq!(s, Streak { value: Half::High, length: 3 });
    }

    #[test]
    fn test_possibility_run() {
        // 1, 2, 4 : Possibilité 1 seulement
        let s = possibility_streak(&history(&[3, 1, 2, 4]), 3, &NoopObserver).unwrap();
        assert_eq!(s, Streak { value: PossibilitySet::Set1, length: 3 });
    }

    #[test]
    fn test_generic_extractor() {
        let s = detect_streak(
            &history(&[13, 14, 15]),
            2,
            PatternName::Dozen,
            Outcome::dozen,
            &NoopObserver,
        )
        .unwrap();
        assert_eq!(s.length, 3);
    }

    #[test]
    fn test_found_event() {
        let obs = RecordingObserver::default();
        color_streak(&history(&[1, 3, 5]), 3, &obs);
        assert_eq!(
            obs.events.borrow().last(),
            Some(&DetectionEvent::PatternFound {
                pattern: PatternName::Color,
                value: "Rouge".to_string(),
                length: 3,
            })
        );
    }
}
