// SPDX-License-Identifier: MPL-2.0
//! Portfolio controller: filter state, filtered list, card visibility and the
//! lightbox, owned by one value and driven by [`PortfolioEvent`]s.
//!
//! The controller is synchronous. Deferred card transitions are returned as
//! [`PlannedEffect`]s for the presentation layer to schedule and feed back as
//! [`PortfolioEvent::ApplyVisibility`].

pub mod visibility;

pub use visibility::{ItemVisibility, PlannedEffect, VisibilityEffect};

use crate::application::lightbox::{Lightbox, LightboxEvent, LightboxState, LightboxView};
use crate::domain::gallery::{compute_filtered_list, Catalog, FilterTag, FilteredList};
use tracing::{debug, info};

/// Inputs of the portfolio controller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PortfolioEvent {
    SetFilter(FilterTag),
    Lightbox(LightboxEvent),
    ApplyVisibility(VisibilityEffect),
}

/// Owns everything the portfolio section needs.
#[derive(Debug, Clone)]
pub struct Portfolio {
    catalog: Catalog,
    filter: FilterTag,
    filtered: FilteredList,
    lightbox: Lightbox,
    visibility: Vec<ItemVisibility>,
    /// Incremented on every filter change; tags planned effects.
    generation: u64,
}

impl Portfolio {
    /// Creates a controller showing the whole catalog.
    #[must_use]
    pub fn new(catalog: Catalog) -> Self {
        let filter = FilterTag::All;
        let filtered = compute_filtered_list(&catalog, &filter);
        let visibility = vec![ItemVisibility::SHOWN; catalog.len()];
        Self {
            catalog,
            filter,
            filtered,
            lightbox: Lightbox::new(),
            visibility,
            generation: 0,
        }
    }

    /// Applies one event; returns the deferred effects it planned.
    pub fn dispatch(&mut self, event: PortfolioEvent) -> Vec<PlannedEffect> {
        match event {
            PortfolioEvent::SetFilter(tag) => {
                let (_, planned) = self.set_filter(tag);
                planned
            }
            PortfolioEvent::Lightbox(event) => {
                self.lightbox.dispatch(event, &self.filtered);
                Vec::new()
            }
            PortfolioEvent::ApplyVisibility(effect) => {
                visibility::apply(effect, &mut self.visibility, self.generation);
                Vec::new()
            }
        }
    }

    /// Switches the active filter and recomputes the filtered list.
    ///
    /// Returns the new list and the deferred card transitions. An open
    /// lightbox follows its image into the new list, falls back to the first
    /// item, or closes when nothing is left.
    pub fn set_filter(&mut self, tag: FilterTag) -> (&FilteredList, Vec<PlannedEffect>) {
        let previous_image = self.lightbox.current_image(&self.filtered).cloned();

        self.filtered = compute_filtered_list(&self.catalog, &tag);
        self.filter = tag;
        self.generation += 1;
        info!(
            filter = %self.filter,
            narrowed = self.filter.is_active(),
            matches = self.filtered.len(),
            "portfolio filter changed"
        );

        let generation = self.generation;
        let planned = self
            .catalog
            .items()
            .iter()
            .zip(self.visibility.iter_mut())
            .map(|(item, state)| {
                let visible = self.filtered.contains_id(item.id);
                visibility::plan(item.id, visible, state, generation)
            })
            .collect();

        self.lightbox
            .on_list_changed(previous_image.as_ref(), &self.filtered);
        if previous_image.is_some() && !self.lightbox.is_open() {
            debug!("lightbox closed by filter change");
        }

        (&self.filtered, planned)
    }

    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    #[must_use]
    pub fn filter(&self) -> &FilterTag {
        &self.filter
    }

    #[must_use]
    pub fn filtered(&self) -> &FilteredList {
        &self.filtered
    }

    /// Filter bar entries: `all` followed by each catalog category.
    #[must_use]
    pub fn filter_tags(&self) -> Vec<FilterTag> {
        std::iter::once(FilterTag::All)
            .chain(
                self.catalog
                    .category_tags()
                    .into_iter()
                    .map(|tag| FilterTag::Category(tag.to_string())),
            )
            .collect()
    }

    /// Card state of a catalog item.
    #[must_use]
    pub fn visibility(&self, id: usize) -> ItemVisibility {
        self.visibility.get(id).copied().unwrap_or_default()
    }

    #[must_use]
    pub fn lightbox_state(&self) -> LightboxState {
        self.lightbox.state()
    }

    #[must_use]
    pub fn lightbox_view(&self) -> Option<LightboxView<'_>> {
        self.lightbox.render(&self.filtered)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::lightbox::Direction;
    use crate::domain::gallery::item::sample_item;
    use crate::domain::gallery::ImageRef;

    fn portfolio() -> Portfolio {
        Portfolio::new(Catalog::new(vec![
            sample_item("0.jpg", "realism"),
            sample_item("1.jpg", "fineline"),
            sample_item("2.jpg", "realism"),
        ]))
    }

    fn open(portfolio: &mut Portfolio, image: &str) {
        portfolio.dispatch(PortfolioEvent::Lightbox(LightboxEvent::Open(
            ImageRef::new(image),
        )));
    }

    #[test]
    fn starts_with_everything_shown() {
        let portfolio = portfolio();
        assert_eq!(portfolio.filter(), &FilterTag::All);
        assert_eq!(portfolio.filtered().len(), 3);
        for id in 0..3 {
            assert_eq!(portfolio.visibility(id), ItemVisibility::SHOWN);
        }
    }

    #[test]
    fn filter_tags_start_with_all() {
        let tags: Vec<String> = portfolio()
            .filter_tags()
            .iter()
            .map(ToString::to_string)
            .collect();
        assert_eq!(tags, vec!["all", "realism", "fineline"]);
    }

    #[test]
    fn set_filter_returns_new_list_and_plans_every_card() {
        let mut portfolio = portfolio();
        let (list, planned) = portfolio.set_filter(FilterTag::parse("realism"));
        let ids: Vec<usize> = list.iter().map(|item| item.id).collect();
        assert_eq!(ids, vec![0, 2]);
        assert_eq!(planned.len(), 3);

        assert!(matches!(
            planned[1].effect,
            VisibilityEffect::Hide { id: 1, .. }
        ));
        assert!(portfolio.visibility(1).is_fading_out());
    }

    #[test]
    fn deferred_hide_removes_card_from_layout() {
        let mut portfolio = portfolio();
        let planned = portfolio.dispatch(PortfolioEvent::SetFilter(FilterTag::parse("realism")));
        for effect in planned {
            portfolio.dispatch(PortfolioEvent::ApplyVisibility(effect.effect));
        }
        assert!(!portfolio.visibility(1).displayed);
        assert_eq!(portfolio.visibility(0), ItemVisibility::SHOWN);
    }

    #[test]
    fn stale_hide_does_not_remove_reshown_card() {
        let mut portfolio = portfolio();
        let first = portfolio.dispatch(PortfolioEvent::SetFilter(FilterTag::parse("realism")));
        let second = portfolio.dispatch(PortfolioEvent::SetFilter(FilterTag::All));

        // The hide planned by the first change fires after the second change.
        for effect in first.into_iter().chain(second) {
            portfolio.dispatch(PortfolioEvent::ApplyVisibility(effect.effect));
        }
        assert_eq!(portfolio.visibility(1), ItemVisibility::SHOWN);
    }

    #[test]
    fn empty_filter_is_valid() {
        let mut portfolio = portfolio();
        let (list, _) = portfolio.set_filter(FilterTag::parse("watercolor"));
        assert!(list.is_empty());
    }

    #[test]
    fn open_lightbox_follows_its_image_across_filters() {
        let mut portfolio = portfolio();
        open(&mut portfolio, "2.jpg");
        portfolio.set_filter(FilterTag::parse("realism"));
        let view = portfolio.lightbox_view().expect("still open");
        assert_eq!(view.image, &ImageRef::new("2.jpg"));
        assert_eq!(view.position, 1);
    }

    #[test]
    fn open_lightbox_falls_back_to_first_when_filtered_out() {
        let mut portfolio = portfolio();
        open(&mut portfolio, "1.jpg");
        portfolio.set_filter(FilterTag::parse("realism"));
        let view = portfolio.lightbox_view().expect("still open");
        assert_eq!(view.image, &ImageRef::new("0.jpg"));
    }

    #[test]
    fn open_lightbox_closes_when_filter_matches_nothing() {
        let mut portfolio = portfolio();
        open(&mut portfolio, "1.jpg");
        portfolio.set_filter(FilterTag::parse("watercolor"));
        assert_eq!(portfolio.lightbox_state(), LightboxState::Closed);
    }

    #[test]
    fn lightbox_navigates_within_filtered_list() {
        let mut portfolio = portfolio();
        portfolio.set_filter(FilterTag::parse("realism"));
        open(&mut portfolio, "0.jpg");
        portfolio.dispatch(PortfolioEvent::Lightbox(LightboxEvent::Navigate(
            Direction::Next,
        )));
        let view = portfolio.lightbox_view().expect("open");
        assert_eq!(view.image, &ImageRef::new("2.jpg"));
    }
}
