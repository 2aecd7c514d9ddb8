//! Circular index state shared by the hero title rotation and the services
//! carousel.
//!
//! States are `{running, paused} × index ∈ [0, total)`. Automatic ticks honour
//! `paused`; manual navigation (see `carousel`) never does.

/// Last movement direction. Only used to pick an enter/exit animation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    #[default]
    Forward,
    Backward,
}

impl Direction {
    pub fn sign(self) -> i32 {
        match self {
            Self::Forward => 1,
            Self::Backward => -1,
        }
    }

    pub fn css_modifier(self) -> &'static str {
        match self {
            Self::Forward => "forward",
            Self::Backward => "backward",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RotationState {
    index: usize,
    total: usize,
    paused: bool,
    direction: Direction,
}

impl RotationState {
    pub fn new(total: usize) -> Self {
        Self {
            index: 0,
            total,
            paused: false,
            direction: Direction::Forward,
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn total(&self) -> usize {
        self.total
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn is_empty(&self) -> bool {
        self.total == 0
    }

    /// One timer tick. Advances unless paused; returns whether the index moved.
    pub fn tick(&mut self) -> bool {
        if self.paused || self.total == 0 {
            return false;
        }
        self.step_forward();
        true
    }

    pub fn pause(&mut self) {
        self.paused = true;
    }

    pub fn resume(&mut self) {
        self.paused = false;
    }

    /// Replace the item count, clamping the index into the new range.
    pub fn set_total(&mut self, total: usize) {
        self.total = total;
        self.index = match total {
            0 => 0,
            _ => self.index.min(total - 1),
        };
    }

    pub(crate) fn step_forward(&mut self) {
        if self.total == 0 {
            return;
        }
        self.direction = Direction::Forward;
        self.index = (self.index + 1) % self.total;
    }

    pub(crate) fn step_backward(&mut self) {
        if self.total == 0 {
            return;
        }
        self.direction = Direction::Backward;
        self.index = (self.index + self.total - 1) % self.total;
    }

    pub(crate) fn set_index(&mut self, index: usize, direction: Direction) {
        if self.total == 0 {
            return;
        }
        self.direction = direction;
        self.index = index.min(self.total - 1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cycle_closes_after_total_ticks() {
        for total in 1..=7 {
            let mut state = RotationState::new(total);
            for _ in 0..total {
                assert!(state.tick());
            }
            assert_eq!(state.index(), 0, "total={total}");
        }
    }

    #[test]
    fn paused_ticks_do_not_move() {
        let mut state = RotationState::new(3);
        state.tick();
        state.pause();
        for _ in 0..10 {
            assert!(!state.tick());
        }
        assert_eq!(state.index(), 1);

        state.resume();
        assert!(state.tick());
        assert_eq!(state.index(), 2);
    }

    #[test]
    fn empty_rotation_is_inert() {
        let mut state = RotationState::new(0);
        assert!(!state.tick());
        state.step_backward();
        assert_eq!(state.index(), 0);
    }

    #[test]
    fn shrinking_total_clamps_index() {
        let mut state = RotationState::new(5);
        state.tick();
        state.tick();
        state.tick();
        assert_eq!(state.index(), 3);

        state.set_total(2);
        assert_eq!(state.index(), 1);

        state.set_total(0);
        assert_eq!(state.index(), 0);
        assert!(state.is_empty());
    }
}
