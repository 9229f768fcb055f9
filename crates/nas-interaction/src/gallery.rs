//! Category filter over the fixed gallery collection.
//!
//! Each item carries the visibility it is heading towards plus whether the
//! deferred half of its transition has run. Deferred callbacks name the
//! transition they belong to, so one that lost a race to a newer selection
//! is ignored.

use crate::config::InteractionConfig;
use nas_types::CategoryFilter;
use tracing::debug;

pub type StyleSteps = &'static [(&'static str, &'static str)];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visibility {
    Visible,
    Hidden,
    Transitioning,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemTransition {
    Show,
    Hide,
}

impl ItemTransition {
    /// Inline styles applied as soon as the filter changes.
    pub fn immediate(self) -> StyleSteps {
        match self {
            ItemTransition::Show => &[("display", "block")],
            ItemTransition::Hide => &[("opacity", "0"), ("transform", "scale(0.8)")],
        }
    }

    /// Inline styles applied once the delay has passed.
    pub fn deferred(self) -> StyleSteps {
        match self {
            ItemTransition::Show => &[("opacity", "1"), ("transform", "scale(1)")],
            ItemTransition::Hide => &[("display", "none")],
        }
    }

    pub fn delay_ms(self, config: &InteractionConfig) -> u32 {
        match self {
            ItemTransition::Show => config.gallery_show_delay_ms,
            ItemTransition::Hide => config.gallery_hide_ms,
        }
    }
}

#[derive(Debug, Clone)]
pub struct GalleryItem {
    pub category: Option<String>,
    target: ItemTransition,
    settled: bool,
}

impl GalleryItem {
    pub fn visibility(&self) -> Visibility {
        match (self.settled, self.target) {
            (false, _) => Visibility::Transitioning,
            (true, ItemTransition::Show) => Visibility::Visible,
            (true, ItemTransition::Hide) => Visibility::Hidden,
        }
    }

    pub fn target(&self) -> ItemTransition {
        self.target
    }
}

#[derive(Debug, Clone)]
pub struct Gallery {
    active: CategoryFilter,
    items: Vec<GalleryItem>,
}

impl Gallery {
    /// Items start settled in the state the initial filter implies.
    pub fn new(categories: Vec<Option<String>>, initial: CategoryFilter) -> Self {
        let items = categories
            .into_iter()
            .map(|category| {
                let target = if initial.matches(category.as_deref()) {
                    ItemTransition::Show
                } else {
                    ItemTransition::Hide
                };
                GalleryItem {
                    category,
                    target,
                    settled: true,
                }
            })
            .collect();
        Self { active: initial, items }
    }

    pub fn active(&self) -> &CategoryFilter {
        &self.active
    }

    pub fn items(&self) -> &[GalleryItem] {
        &self.items
    }

    /// Switches the filter. Returns the items that must start a transition,
    /// or `None` when `filter` is already active.
    pub fn select(&mut self, filter: CategoryFilter) -> Option<Vec<(usize, ItemTransition)>> {
        if filter == self.active {
            return None;
        }
        debug!(from = self.active.as_str(), to = filter.as_str(), "gallery filter");

        let mut started = Vec::new();
        for (index, item) in self.items.iter_mut().enumerate() {
            let wanted = if filter.matches(item.category.as_deref()) {
                ItemTransition::Show
            } else {
                ItemTransition::Hide
            };
            if wanted != item.target {
                item.target = wanted;
                item.settled = false;
                started.push((index, wanted));
            }
        }
        self.active = filter;
        Some(started)
    }

    /// Completes a deferred step. Returns `false` for a stale step whose
    /// item has since been retargeted.
    pub fn settle(&mut self, index: usize, transition: ItemTransition) -> bool {
        match self.items.get_mut(index) {
            Some(item) if item.target == transition => {
                item.settled = true;
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Gallery {
        Gallery::new(
            vec![
                Some("gel".into()),
                Some("acrylic".into()),
                Some("gel".into()),
                Some("art".into()),
                None,
            ],
            CategoryFilter::All,
        )
    }

    fn settle_all(gallery: &mut Gallery, started: &[(usize, ItemTransition)]) {
        for (index, transition) in started {
            assert!(gallery.settle(*index, *transition));
        }
    }

    #[test]
    fn selecting_a_category_hides_the_rest() {
        let mut gallery = sample();
        let started = gallery.select(CategoryFilter::parse("gel")).expect("filter changed");
        assert_eq!(
            started,
            vec![
                (1, ItemTransition::Hide),
                (3, ItemTransition::Hide),
                (4, ItemTransition::Hide)
            ]
        );
        settle_all(&mut gallery, &started);

        for item in gallery.items() {
            if item.visibility() == Visibility::Visible {
                assert_eq!(item.category.as_deref(), Some("gel"));
            }
        }
    }

    #[test]
    fn all_shows_every_item() {
        let mut gallery = sample();
        let started = gallery.select(CategoryFilter::parse("art")).expect("changed");
        settle_all(&mut gallery, &started);
        let started = gallery.select(CategoryFilter::All).expect("changed");
        settle_all(&mut gallery, &started);
        assert!(gallery.items().iter().all(|item| item.visibility() == Visibility::Visible));
    }

    #[test]
    fn reselecting_is_a_no_op() {
        let mut gallery = sample();
        assert!(gallery.select(CategoryFilter::All).is_none());
        gallery.select(CategoryFilter::parse("gel")).expect("changed");
        assert!(gallery.select(CategoryFilter::parse("gel")).is_none());
        assert_eq!(gallery.active(), &CategoryFilter::parse("gel"));
    }

    #[test]
    fn stale_hide_does_not_win_over_newer_show() {
        let mut gallery = sample();
        gallery.select(CategoryFilter::parse("gel")).expect("changed");
        assert_eq!(gallery.items()[1].visibility(), Visibility::Transitioning);

        // Back to "all" before the 300ms hide completes.
        let started = gallery.select(CategoryFilter::All).expect("changed");
        assert!(started.contains(&(1, ItemTransition::Show)));

        assert!(!gallery.settle(1, ItemTransition::Hide));
        assert!(gallery.settle(1, ItemTransition::Show));
        assert_eq!(gallery.items()[1].visibility(), Visibility::Visible);
    }

    #[test]
    fn transition_steps_match_the_animation() {
        let config = InteractionConfig::default();
        assert_eq!(ItemTransition::Show.delay_ms(&config), 10);
        assert_eq!(ItemTransition::Hide.delay_ms(&config), 300);
        assert_eq!(ItemTransition::Hide.deferred(), &[("display", "none")]);
        assert_eq!(ItemTransition::Show.immediate(), &[("display", "block")]);
    }

    #[test]
    fn settle_ignores_unknown_index() {
        let mut gallery = sample();
        assert!(!gallery.settle(99, ItemTransition::Show));
    }
}
