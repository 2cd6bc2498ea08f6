use strum::{AsRefStr, Display};

#[derive(Display, AsRefStr, Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[strum(serialize_all = "lowercase")]
pub enum TransitionStatus {
    Unmounted,
    Entering,
    Entered,
    Exiting,
    Exited,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransitionTiming {
    pub enter_ms: u64,
    pub exit_ms: u64,
    /// Remove the element entirely once it has exited.
    pub unmount_on_exit: bool,
}

impl TransitionTiming {
    pub const fn new(enter_ms: u64, exit_ms: u64, unmount_on_exit: bool) -> Self {
        Self {
            enter_ms,
            exit_ms,
            unmount_on_exit,
        }
    }
}

/// Timed mount/unmount of one element, driven by a visibility predicate.
///
/// The predicate can flip at any point; a reversal restarts the opposite
/// phase from zero elapsed time.
#[derive(Debug, Clone)]
pub struct Transition {
    timing: TransitionTiming,
    predicate: bool,
    status: TransitionStatus,
    elapsed_ms: u64,
}

impl Transition {
    pub fn new(timing: TransitionTiming, predicate: bool) -> Self {
        Self {
            timing,
            predicate,
            status: if predicate {
                TransitionStatus::Entering
            } else {
                TransitionStatus::Unmounted
            },
            elapsed_ms: 0,
        }
    }

    pub fn current_state(&self) -> TransitionStatus {
        self.status
    }

    pub fn predicate(&self) -> bool {
        self.predicate
    }

    pub fn timing(&self) -> TransitionTiming {
        self.timing
    }

    pub fn is_mounted(&self) -> bool {
        self.status != TransitionStatus::Unmounted
    }

    pub fn is_settled(&self) -> bool {
        !matches!(
            self.status,
            TransitionStatus::Entering | TransitionStatus::Exiting
        )
    }

    pub fn set_predicate(&mut self, predicate: bool) {
        if predicate == self.predicate {
            return;
        }

        self.predicate = predicate;
        self.elapsed_ms = 0;

        let next = match (predicate, self.status) {
            (true, _) => TransitionStatus::Entering,
            (false, TransitionStatus::Unmounted) => TransitionStatus::Unmounted,
            (false, TransitionStatus::Exited) => TransitionStatus::Exited,
            (false, _) => TransitionStatus::Exiting,
        };

        self.move_to(next);
    }

    /// Advance the clock by `elapsed_ms` and return the resulting state.
    pub fn tick(&mut self, elapsed_ms: u64) -> TransitionStatus {
        self.elapsed_ms = self.elapsed_ms.saturating_add(elapsed_ms);

        match self.status {
            TransitionStatus::Entering if self.elapsed_ms >= self.timing.enter_ms => {
                self.move_to(TransitionStatus::Entered);
            }
            TransitionStatus::Exiting if self.elapsed_ms >= self.timing.exit_ms => {
                self.move_to(TransitionStatus::Exited);
                if self.timing.unmount_on_exit {
                    self.move_to(TransitionStatus::Unmounted);
                }
            }
            _ => {}
        }

        self.status
    }

    fn move_to(&mut self, status: TransitionStatus) {
        if status != self.status {
            tracing::trace!(from = %self.status, to = %status, "transition");
            self.status = status;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const UNMOUNTABLE: TransitionTiming = TransitionTiming::new(300, 200, true);
    const PERSISTENT: TransitionTiming = TransitionTiming::new(300, 200, false);

    #[test]
    fn initial_state_follows_predicate() {
        assert_eq!(
            Transition::new(UNMOUNTABLE, false).current_state(),
            TransitionStatus::Unmounted
        );
        assert_eq!(
            Transition::new(UNMOUNTABLE, true).current_state(),
            TransitionStatus::Entering
        );
    }

    #[test]
    fn enters_after_enter_duration() {
        let mut transition = Transition::new(UNMOUNTABLE, false);
        transition.set_predicate(true);

        assert_eq!(transition.tick(299), TransitionStatus::Entering);
        assert_eq!(transition.tick(1), TransitionStatus::Entered);
        assert!(transition.is_settled());
    }

    #[test]
    fn unmountable_element_unmounts_after_exit() {
        let mut transition = Transition::new(UNMOUNTABLE, true);
        transition.tick(300);

        transition.set_predicate(false);
        assert_eq!(transition.current_state(), TransitionStatus::Exiting);
        assert_eq!(transition.tick(199), TransitionStatus::Exiting);
        assert_eq!(transition.tick(1), TransitionStatus::Unmounted);
        assert!(!transition.is_mounted());
    }

    #[test]
    fn persistent_element_stays_exited_until_reentered() {
        let mut transition = Transition::new(PERSISTENT, true);
        transition.tick(300);
        transition.set_predicate(false);

        assert_eq!(transition.tick(200), TransitionStatus::Exited);
        assert_eq!(transition.tick(10_000), TransitionStatus::Exited);
        assert!(transition.is_mounted());

        transition.set_predicate(true);
        assert_eq!(transition.current_state(), TransitionStatus::Entering);
        assert_eq!(transition.tick(300), TransitionStatus::Entered);
    }

    #[test]
    fn reversal_restarts_the_opposite_phase() {
        let mut transition = Transition::new(UNMOUNTABLE, true);
        transition.tick(250);

        transition.set_predicate(false);
        assert_eq!(transition.current_state(), TransitionStatus::Exiting);
        transition.tick(100);

        transition.set_predicate(true);
        assert_eq!(transition.current_state(), TransitionStatus::Entering);
        assert_eq!(transition.tick(299), TransitionStatus::Entering);
        assert_eq!(transition.tick(1), TransitionStatus::Entered);
    }

    #[test]
    fn same_predicate_does_not_restart() {
        let mut transition = Transition::new(UNMOUNTABLE, true);
        transition.tick(200);
        transition.set_predicate(true);

        assert_eq!(transition.tick(100), TransitionStatus::Entered);
    }

    #[test]
    fn rapid_flips_stay_in_known_states() {
        for timing in [UNMOUNTABLE, PERSISTENT, TransitionTiming::new(0, 0, true)] {
            let mut transition = Transition::new(timing, false);
            for step in 0..200u64 {
                transition.set_predicate(step % 3 != 0);
                let status = transition.tick(step % 7 * 25);
                if transition.predicate() {
                    assert!(matches!(
                        status,
                        TransitionStatus::Entering | TransitionStatus::Entered
                    ));
                } else {
                    assert!(matches!(
                        status,
                        TransitionStatus::Exiting
                            | TransitionStatus::Exited
                            | TransitionStatus::Unmounted
                    ));
                }
            }

            transition.set_predicate(false);
            transition.tick(timing.exit_ms);
            let expected = if timing.unmount_on_exit {
                TransitionStatus::Unmounted
            } else {
                TransitionStatus::Exited
            };
            assert_eq!(transition.current_state(), expected);
        }
    }

    #[test]
    fn zero_duration_settles_on_first_tick() {
        let mut transition = Transition::new(TransitionTiming::new(0, 0, true), false);
        transition.set_predicate(true);
        assert_eq!(transition.tick(0), TransitionStatus::Entered);
        transition.set_predicate(false);
        assert_eq!(transition.tick(0), TransitionStatus::Unmounted);
    }
}
