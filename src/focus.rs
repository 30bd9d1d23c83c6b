// Focus cycle state machine
//
// Tracks the *intended* focus target as an index in [0, len], where len is
// the container-focused state. The delegation procedure in `form` confirms
// which item actually accepts focus; this module only moves the pointer.

use tracing::debug;

use crate::element::FinishKey;

/// What the container must do after a finish signal was applied
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// The intended target changed; delegation must re-run.
    Redelegate,
    /// Escape: the container resolves callback-vs-reset-to-first.
    Cancelled,
    /// No movement.
    Idle,
}

/// Linear focus cycle over `len` items plus the container itself
///
/// The last navigation key starts out as `Forward` so that a form whose
/// leading elements refuse focus skips over them on first delegation.
#[derive(Debug)]
pub struct FocusCycle {
    index: usize,
    last_key: FinishKey,
}

impl FocusCycle {
    pub fn new() -> Self {
        Self {
            index: 0,
            last_key: FinishKey::Forward,
        }
    }

    /// Intended focus target; `len` means the container itself.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Clamp the index into `[0, len]`.
    pub fn clamp(&mut self, len: usize) {
        if self.index > len {
            self.index = len;
        }
    }

    /// Point at `index`, clamped into `[0, len]`.
    pub fn set_index(&mut self, index: usize, len: usize) {
        self.index = index.min(len);
    }

    /// Reset the intended target to the first item.
    pub fn reset(&mut self) {
        self.index = 0;
    }

    /// Apply a finish signal from the focused item.
    ///
    /// Every key carrying information is recorded as the last key; the
    /// no-key sentinel replays the last recorded action instead, which is
    /// how items that refuse focus keep the cycle moving.
    pub fn apply(&mut self, key: FinishKey, len: usize) -> Transition {
        let key = match key {
            FinishKey::None => self.last_key,
            key => {
                self.last_key = key;
                key
            }
        };
        let transition = match key {
            FinishKey::Forward => {
                // Forward past the last item lands on the container-focused
                // state first; the next forward wraps to item 0. The full
                // cycle therefore has period len + 1.
                self.index = if self.index >= len { 0 } else { self.index + 1 };
                Transition::Redelegate
            }
            FinishKey::Backward => {
                self.index = if self.index == 0 {
                    len.saturating_sub(1)
                } else {
                    self.index - 1
                };
                Transition::Redelegate
            }
            FinishKey::Cancel => Transition::Cancelled,
            FinishKey::Other(_) | FinishKey::None => Transition::Idle,
        };
        debug!(?key, index = self.index, ?transition, "focus transition");
        transition
    }
}

impl Default for FocusCycle {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyCode;

    #[test]
    fn test_forward_cycle_totality() {
        // From any start, len + 1 forward steps return to the start,
        // passing through the container state (index == len) exactly once.
        let len = 4;
        for start in 0..=len {
            let mut cycle = FocusCycle::new();
            cycle.set_index(start, len);
            let mut container_visits = 0;
            for _ in 0..=len {
                assert_eq!(cycle.apply(FinishKey::Forward, len), Transition::Redelegate);
                if cycle.index() == len {
                    container_visits += 1;
                }
            }
            assert_eq!(cycle.index(), start);
            assert_eq!(container_visits, 1);
        }
    }

    #[test]
    fn test_backward_wraps_to_last_item() {
        let mut cycle = FocusCycle::new();
        cycle.apply(FinishKey::Backward, 3);
        assert_eq!(cycle.index(), 2);
        cycle.apply(FinishKey::Backward, 3);
        assert_eq!(cycle.index(), 1);
    }

    #[test]
    fn test_backward_from_container_state() {
        let mut cycle = FocusCycle::new();
        cycle.set_index(3, 3);
        cycle.apply(FinishKey::Backward, 3);
        assert_eq!(cycle.index(), 2);
    }

    #[test]
    fn test_cancel_does_not_move_index() {
        let mut cycle = FocusCycle::new();
        cycle.set_index(2, 5);
        assert_eq!(cycle.apply(FinishKey::Cancel, 5), Transition::Cancelled);
        assert_eq!(cycle.index(), 2);
    }

    #[test]
    fn test_no_key_replays_last_recorded() {
        let mut cycle = FocusCycle::new();
        cycle.apply(FinishKey::Backward, 3);
        assert_eq!(cycle.index(), 2);
        // The no-key sentinel repeats the backward step.
        assert_eq!(cycle.apply(FinishKey::None, 3), Transition::Redelegate);
        assert_eq!(cycle.index(), 1);
    }

    #[test]
    fn test_no_key_defaults_to_forward() {
        // Nothing recorded yet: the initial last key is Forward, so leading
        // refusals walk forward through the form.
        let mut cycle = FocusCycle::new();
        assert_eq!(cycle.apply(FinishKey::None, 3), Transition::Redelegate);
        assert_eq!(cycle.index(), 1);
    }

    #[test]
    fn test_other_key_recorded_without_movement() {
        let mut cycle = FocusCycle::new();
        assert_eq!(
            cycle.apply(FinishKey::Other(KeyCode::Char('x')), 3),
            Transition::Idle
        );
        assert_eq!(cycle.index(), 0);
        // Replay of a non-navigation key is also a no-op.
        assert_eq!(cycle.apply(FinishKey::None, 3), Transition::Idle);
        assert_eq!(cycle.index(), 0);
    }

    #[test]
    fn test_clamp_after_shrink() {
        let mut cycle = FocusCycle::new();
        cycle.set_index(5, 5);
        cycle.clamp(2);
        assert_eq!(cycle.index(), 2);
    }
}
