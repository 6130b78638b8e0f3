//! Navigation state machine for one carousel instance.
//!
//! The controller owns the loaded assets, their layout, the active index and
//! the rotation tween. It has two states, idle and transitioning. A request
//! made while transitioning is dropped, not queued. Leaving the transitioning
//! state is driven only by the host's timer calling
//! [`CarouselController::finish_transition`]; the tween reaching its end value
//! has no say in it, because the two can drift apart when frames are dropped.

use crate::config::CarouselConfig;
use crate::error::Result;
use crate::layout::CarouselLayout;
use crate::source::ImageAsset;
use crate::tween::{Easing, RotationTween};
use instant::Instant;
use std::f64::consts::TAU;
use std::time::Duration;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Next,
    Previous,
}

impl Direction {
    /// Index reached by one step from `index` in a ring of `len` segments.
    #[inline]
    pub fn step(self, index: usize, len: usize) -> usize {
        match self {
            Self::Next => (index + 1) % len,
            Self::Previous => (index + len - 1) % len,
        }
    }
}

/// Identifies one transition so a late or repeated timer cannot end another.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TransitionTicket(u64);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Transitioning(TransitionTicket),
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transition {
    pub ticket: TransitionTicket,
    pub direction: Direction,
    pub from_index: usize,
    pub to_index: usize,
    /// Angle the active segment moves by; the assembly turns by its negation.
    pub delta_radians: f64,
    pub from_rotation: f64,
    pub to_rotation: f64,
    /// How long until the host must call `finish_transition`.
    pub duration: Duration,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum NavigateOutcome {
    Started(Transition),
    /// A transition was already in flight; nothing changed.
    Rejected,
}

impl NavigateOutcome {
    #[inline]
    pub fn is_rejected(&self) -> bool {
        matches!(self, Self::Rejected)
    }

    pub fn transition(&self) -> Option<&Transition> {
        match self {
            Self::Started(t) => Some(t),
            Self::Rejected => None,
        }
    }
}

/// Proportional angle between the centres of two segments, before any wrap fix.
pub fn raw_rotation_delta(layout: &CarouselLayout, from: usize, to: usize) -> f64 {
    let old_pos = layout.center_position(from);
    let new_pos = layout.center_position(to);
    ((new_pos - old_pos) / layout.total_width()) * TAU
}

/// Angle for one step in `direction`, corrected so crossing the seam between
/// the last and first segment goes the short way round.
pub fn rotation_delta(
    layout: &CarouselLayout,
    from: usize,
    to: usize,
    direction: Direction,
) -> f64 {
    let raw = raw_rotation_delta(layout, from, to);
    let last = layout.len() - 1;
    if last == 0 {
        return raw;
    }
    match direction {
        Direction::Next if from == last && to == 0 => raw + TAU,
        Direction::Previous if from == 0 && to == last => raw - TAU,
        _ => raw,
    }
}

pub struct CarouselController {
    assets: Vec<ImageAsset>,
    layout: CarouselLayout,
    current_index: usize,
    phase: Phase,
    tween: RotationTween,
    duration: Duration,
    easing: Easing,
    next_ticket: u64,
}

impl CarouselController {
    /// Lay out every asset and start idle on segment 0.
    ///
    /// Must only be called once all assets are known, since every segment's
    /// share of the turn depends on the total width.
    pub fn new(assets: Vec<ImageAsset>, config: &CarouselConfig, now: Instant) -> Result<Self> {
        config.validate()?;
        let layout = CarouselLayout::from_assets(&assets, config.gutter_fraction)?;
        let tween = RotationTween::at_rest(layout.assembly_offset(), now);
        Ok(Self {
            assets,
            layout,
            current_index: 0,
            phase: Phase::Idle,
            tween,
            duration: config.transition_duration(),
            easing: Easing::QuadraticInOut,
            next_ticket: 0,
        })
    }

    pub fn layout(&self) -> &CarouselLayout {
        &self.layout
    }

    pub fn assets(&self) -> &[ImageAsset] {
        &self.assets
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.layout.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.layout.is_empty()
    }

    #[inline]
    pub fn current_index(&self) -> usize {
        self.current_index
    }

    #[inline]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    #[inline]
    pub fn is_transitioning(&self) -> bool {
        matches!(self.phase, Phase::Transitioning(_))
    }

    pub fn current_caption(&self) -> &str {
        &self.assets[self.current_index].caption
    }

    pub fn caption(&self, index: usize) -> Option<&str> {
        self.assets.get(index).map(|a| a.caption.as_str())
    }

    /// Assembly rotation about Y at `now`. Read-only; safe to call every frame.
    #[inline]
    pub fn rotation_at(&self, now: Instant) -> f64 {
        self.tween.value_at(now)
    }

    /// Rotation the assembly settles on once the current tween ends.
    #[inline]
    pub fn rotation_target(&self) -> f64 {
        self.tween.to()
    }

    #[inline]
    pub fn tween(&self) -> &RotationTween {
        &self.tween
    }

    pub fn navigate(&mut self, direction: Direction, now: Instant) -> NavigateOutcome {
        if let Phase::Transitioning(ticket) = self.phase {
            log::debug!(
                "[cyl] {:?} dropped, transition {:?} still running",
                direction,
                ticket
            );
            return NavigateOutcome::Rejected;
        }

        let from_index = self.current_index;
        let to_index = direction.step(from_index, self.len());
        let delta_radians = rotation_delta(&self.layout, from_index, to_index, direction);

        let from_rotation = self.tween.value_at(now);
        let to_rotation = from_rotation - delta_radians;
        self.tween =
            RotationTween::start(from_rotation, to_rotation, self.duration, self.easing, now);

        let ticket = TransitionTicket(self.next_ticket);
        self.next_ticket += 1;
        self.current_index = to_index;
        self.phase = Phase::Transitioning(ticket);

        log::debug!(
            "[cyl] {:?} {} -> {} delta={:.4} rad rotation {:.4} -> {:.4}",
            direction,
            from_index,
            to_index,
            delta_radians,
            from_rotation,
            to_rotation
        );

        NavigateOutcome::Started(Transition {
            ticket,
            direction,
            from_index,
            to_index,
            delta_radians,
            from_rotation,
            to_rotation,
            duration: self.duration,
        })
    }

    /// Return to idle if `ticket` names the transition in flight.
    ///
    /// Returns `true` exactly once per transition; stale or repeated tickets
    /// are ignored and return `false`.
    pub fn finish_transition(&mut self, ticket: TransitionTicket) -> bool {
        match self.phase {
            Phase::Transitioning(active) if active == ticket => {
                self.phase = Phase::Idle;
                true
            }
            _ => false,
        }
    }
}
