// SPDX-License-Identifier: MPL-2.0
//! Show/hide transitions of portfolio cards.
//!
//! A filter change is applied in two steps per card. A card that passes the
//! filter is displayed at once and revealed (faded in) a little later. A card
//! that is filtered out is faded out at once and only removed from the layout
//! once its exit transition had time to play.

use crate::config::{FILTER_HIDE_DELAY_MS, FILTER_REVEAL_DELAY_MS};
use std::time::Duration;

/// Presentation state of one card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ItemVisibility {
    /// Takes part in the layout.
    pub displayed: bool,
    /// Fully opaque and at full scale.
    pub revealed: bool,
}

impl ItemVisibility {
    pub const SHOWN: Self = Self {
        displayed: true,
        revealed: true,
    };

    #[must_use]
    pub fn is_fading_out(self) -> bool {
        self.displayed && !self.revealed
    }
}

impl Default for ItemVisibility {
    fn default() -> Self {
        Self::SHOWN
    }
}

/// Deferred half of a card transition.
///
/// `generation` identifies the filter change that planned the effect. Effects
/// from an older generation are dropped so that a late hide never removes a
/// card that a newer filter brought back.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VisibilityEffect {
    Reveal { id: usize, generation: u64 },
    Hide { id: usize, generation: u64 },
}

impl VisibilityEffect {
    #[must_use]
    pub fn generation(self) -> u64 {
        match self {
            VisibilityEffect::Reveal { generation, .. }
            | VisibilityEffect::Hide { generation, .. } => generation,
        }
    }
}

/// An effect together with the delay after which it must be applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlannedEffect {
    pub delay: Duration,
    pub effect: VisibilityEffect,
}

/// Applies the immediate half of a transition and returns the deferred half.
pub(super) fn plan(
    id: usize,
    visible: bool,
    state: &mut ItemVisibility,
    generation: u64,
) -> PlannedEffect {
    if visible {
        state.displayed = true;
        PlannedEffect {
            delay: Duration::from_millis(FILTER_REVEAL_DELAY_MS),
            effect: VisibilityEffect::Reveal { id, generation },
        }
    } else {
        state.revealed = false;
        PlannedEffect {
            delay: Duration::from_millis(FILTER_HIDE_DELAY_MS),
            effect: VisibilityEffect::Hide { id, generation },
        }
    }
}

/// Applies a deferred effect unless it is stale.
///
/// Returns `true` if the card state changed.
pub(super) fn apply(
    effect: VisibilityEffect,
    states: &mut [ItemVisibility],
    current_generation: u64,
) -> bool {
    if effect.generation() != current_generation {
        return false;
    }
    match effect {
        VisibilityEffect::Reveal { id, .. } => states.get_mut(id).is_some_and(|state| {
            let changed = !state.revealed;
            state.revealed = true;
            changed
        }),
        VisibilityEffect::Hide { id, .. } => states.get_mut(id).is_some_and(|state| {
            let changed = state.displayed;
            state.displayed = false;
            changed
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn show_path_displays_first_then_reveals() {
        let mut state = ItemVisibility {
            displayed: false,
            revealed: false,
        };
        let planned = plan(3, true, &mut state, 1);
        assert!(state.displayed);
        assert!(!state.revealed);
        assert_eq!(planned.delay, Duration::from_millis(FILTER_REVEAL_DELAY_MS));

        let mut states = vec![ItemVisibility::SHOWN; 4];
        states[3] = state;
        assert!(apply(planned.effect, &mut states, 1));
        assert_eq!(states[3], ItemVisibility::SHOWN);
    }

    #[test]
    fn hide_path_fades_then_removes() {
        let mut state = ItemVisibility::SHOWN;
        let planned = plan(0, false, &mut state, 1);
        assert!(state.is_fading_out());
        assert_eq!(planned.delay, Duration::from_millis(FILTER_HIDE_DELAY_MS));

        let mut states = vec![state];
        assert!(apply(planned.effect, &mut states, 1));
        assert!(!states[0].displayed);
    }

    #[test]
    fn stale_effects_are_ignored() {
        let mut states = vec![ItemVisibility::SHOWN];
        let stale = VisibilityEffect::Hide {
            id: 0,
            generation: 1,
        };
        assert!(!apply(stale, &mut states, 2));
        assert!(states[0].displayed);
    }

    #[test]
    fn unknown_ids_are_ignored() {
        let mut states = vec![ItemVisibility::SHOWN];
        let effect = VisibilityEffect::Reveal {
            id: 9,
            generation: 0,
        };
        assert!(!apply(effect, &mut states, 0));
    }
}
