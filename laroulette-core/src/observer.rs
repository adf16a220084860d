//! Point d'observation des détecteurs.
//!
//! Les détecteurs signalent leurs étapes à un [`DetectionObserver`] sans que
//! celui-ci puisse influencer le résultat.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PatternName {
    Color,
    Parity,
    Half,
    Dozen,
    Possibility,
}

impl fmt::Display for PatternName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PatternName::Color => write!(f, "Couleur"),
            PatternName::Parity => write!(f, "Parité"),
            PatternName::Half => write!(f, "Moitié"),
            PatternName::Dozen => write!(f, "Douzaines"),
            PatternName::Possibility => write!(f, "Possibilités"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BreakCause {
    /// 0 ou 00
    Special,
    Mismatch,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DetectionEvent {
    InsufficientHistory {
        pattern: PatternName,
        len: usize,
        required: usize,
    },
    /// `index` est la position dans l'historique de la sortie qui a interrompu la série.
    RunBroken {
        pattern: PatternName,
        index: usize,
        cause: BreakCause,
        length: usize,
    },
    PatternFound {
        pattern: PatternName,
        value: String,
        length: usize,
    },
    NoPattern {
        pattern: PatternName,
        length: usize,
        required: usize,
    },
}

pub trait DetectionObserver {
    fn on_event(&self, event: &DetectionEvent);
}

/// Observateur par défaut : journalise chaque étape au niveau debug.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogObserver;

impl DetectionObserver for LogObserver {
    fn on_event(&self, event: &DetectionEvent) {
        match event {
            DetectionEvent::InsufficientHistory { pattern, len, required } => {
                log::debug!(target: "laroulette::detect", "{pattern}: historique trop court ({len} < {required})");
            }
            DetectionEvent::RunBroken { pattern, index, cause, length } => {
                log::debug!(target: "laroulette::detect", "{pattern}: série interrompue à l'index {index} ({cause:?}) après {length}");
            }
            DetectionEvent::PatternFound { pattern, value, length } => {
                log::debug!(target: "laroulette::detect", "{pattern}: motif {value} sur {length} sorties");
            }
            DetectionEvent::NoPattern { pattern, length, required } => {
                log::debug!(target: "laroulette::detect", "{pattern}: aucun motif ({length} < {required})");
            }
        }
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct NoopObserver;

impl DetectionObserver for NoopObserver {
    fn on_event(&self, _event: &DetectionEvent) {}
}

#[cfg(test)]
pub(crate) mod testing {
    use std::cell::RefCell;

    use super::*;

    #[derive(Default)]
    pub struct RecordingObserver {
        pub events: RefCell<Vec<DetectionEvent>>,
    }

    impl DetectionObserver for RecordingObserver {
        fn on_event(&self, event: &DetectionEvent) {
            self.events.borrow_mut().push(event.clone());
        }
    }
}
