//! Manual navigation and the three-slot window on top of [`RotationState`].

use super::rotation::{Direction, RotationState};

/// One visible slot of the carousel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowSlot {
    /// Index into the item list.
    pub index: usize,
    /// Position relative to the focal item (-1, 0, +1).
    pub offset: i32,
    pub focal: bool,
}

/// Derived view: `{index-1, index, index+1} mod total`.
///
/// With fewer than three items every item appears once: the trailing slot is
/// dropped first, then the leading one.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CarouselWindow {
    pub slots: Vec<WindowSlot>,
}

impl CarouselWindow {
    pub fn focal(&self) -> Option<WindowSlot> {
        self.slots.iter().copied().find(|slot| slot.focal)
    }

    pub fn indices(&self) -> Vec<usize> {
        self.slots.iter().map(|slot| slot.index).collect()
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CarouselController {
    rotation: RotationState,
}

impl CarouselController {
    pub fn new(total: usize) -> Self {
        Self {
            rotation: RotationState::new(total),
        }
    }

    pub fn rotation(&self) -> &RotationState {
        &self.rotation
    }

    pub fn index(&self) -> usize {
        self.rotation.index()
    }

    pub fn total(&self) -> usize {
        self.rotation.total()
    }

    pub fn direction(&self) -> Direction {
        self.rotation.direction()
    }

    pub fn is_paused(&self) -> bool {
        self.rotation.is_paused()
    }

    /// Timer-driven advance; respects pause.
    pub fn tick(&mut self) -> bool {
        self.rotation.tick()
    }

    pub fn pause(&mut self) {
        self.rotation.pause();
    }

    pub fn resume(&mut self) {
        self.rotation.resume();
    }

    pub fn set_total(&mut self, total: usize) {
        self.rotation.set_total(total);
    }

    pub fn next(&mut self) {
        self.rotation.step_forward();
    }

    pub fn prev(&mut self) {
        self.rotation.step_backward();
    }

    /// Jump straight to `target` (clamped to the last item).
    pub fn jump_to(&mut self, target: usize) {
        let direction = if target >= self.rotation.index() {
            Direction::Forward
        } else {
            Direction::Backward
        };
        self.rotation.set_index(target, direction);
    }

    pub fn visible_window(&self) -> CarouselWindow {
        let total = self.rotation.total();
        let index = self.rotation.index();

        let offsets: &[i32] = match total {
            0 => &[],
            1 => &[0],
            2 => &[-1, 0],
            _ => &[-1, 0, 1],
        };

        let slots = offsets
            .iter()
            .map(|&offset| {
                let shifted = (index as i64 + offset as i64).rem_euclid(total as i64) as usize;
                WindowSlot {
                    index: shifted,
                    offset,
                    focal: offset == 0,
                }
            })
            .collect();

        CarouselWindow { slots }
    }
}
