#[cfg(test)]
#[path = "carousel_test.rs"]
mod carousel_test;

use std::ops::Range;
use std::rc::Rc;

use yew::prelude::*;

/// How the visible window moves over the item list.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Stepping {
    /// Non-overlapping pages of `per_view` items; the last page may be short.
    Paged,
    /// One item at a time; the window never runs past the last item.
    Sliding,
}

/// Cyclic window position over a static list.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Carousel {
    len: usize,
    per_view: usize,
    stepping: Stepping,
    index: usize,
    paused: bool,
}

pub enum CarouselAction {
    Tick,
    Next,
    Prev,
    GoTo(usize),
    Hover(bool),
}

impl Carousel {
    pub fn new(len: usize, per_view: usize, stepping: Stepping) -> Self {
        Self {
            len,
            per_view: per_view.max(1),
            stepping,
            index: 0,
            paused: false,
        }
    }

    /// Number of distinct windows, never less than one.
    pub fn windows(&self) -> usize {
        match self.stepping {
            Stepping::Paged => self.len.div_ceil(self.per_view).max(1),
            Stepping::Sliding => self.len.saturating_sub(self.per_view) + 1,
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Item range currently on screen.
    pub fn window(&self) -> Range<usize> {
        let start = match self.stepping {
            Stepping::Paged => self.index * self.per_view,
            Stepping::Sliding => self.index,
        };
        let start = start.min(self.len);
        start..(start + self.per_view).min(self.len)
    }

    /// Timer-driven advance; ignored while paused.
    pub fn tick(&mut self) {
        if !self.paused {
            self.next();
        }
    }

    pub fn next(&mut self) {
        self.index = (self.index + 1) % self.windows();
    }

    pub fn prev(&mut self) {
        self.index = match self.index {
            0 => self.windows() - 1,
            i => i - 1,
        };
    }

    pub fn go_to(&mut self, index: usize) {
        self.index = index.min(self.windows() - 1);
    }

    pub fn set_paused(&mut self, paused: bool) {
        self.paused = paused;
    }
}

impl Reducible for Carousel {
    type Action = CarouselAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            CarouselAction::Tick => next.tick(),
            CarouselAction::Next => next.next(),
            CarouselAction::Prev => next.prev(),
            CarouselAction::GoTo(index) => next.go_to(index),
            CarouselAction::Hover(hovered) => next.set_paused(hovered),
        }
        Rc::new(next)
    }
}
