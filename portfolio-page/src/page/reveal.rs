use constants::page::{ACTIVE_CLASS, REVEALED_CLASS};

use super::{ClassTarget, PageError};

/// Whether a section keeps being observed after its first reveal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RevealPolicy {
    /// Stop observing a section once it has been revealed.
    #[default]
    OneShot,
    /// Keep observing, so scrolling back re-activates the section's entry.
    Continuous,
}

/// One entry of an intersection batch. `region` is the position of the
/// observed element in the list the tracker was built from.
#[derive(Debug, Clone, Copy)]
pub struct IntersectionChange {
    pub region: usize,
    pub is_intersecting: bool,
}

/// What the caller should do to the DOM for one intersecting region.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RevealOutcome {
    pub region: usize,
    /// First time this region became visible
    pub newly_revealed: bool,
    /// Detach the observer from this region
    pub unobserve: bool,
}

#[derive(Debug)]
struct Region {
    id: String,
    visible: bool,
}

#[derive(Debug)]
struct NavEntry {
    target: String,
    active: bool,
}

#[derive(Debug)]
pub struct SectionRevealTracker {
    regions: Vec<Region>,
    entries: Vec<NavEntry>,
    policy: RevealPolicy,
}

/// Target identifier of a nav link: the fragment after `#`, or the whole href.
pub fn target_from_href(href: &str) -> &str {
    match href.rsplit_once('#') {
        Some((_, fragment)) => fragment,
        None => href,
    }
}

impl SectionRevealTracker {
    pub fn new<R, E>(region_ids: R, entry_hrefs: E, policy: RevealPolicy) -> Self
    where
        R: IntoIterator,
        R::Item: Into<String>,
        E: IntoIterator,
        E::Item: AsRef<str>,
    {
        Self {
            regions: region_ids
                .into_iter()
                .map(|id| Region {
                    id: id.into(),
                    visible: false,
                })
                .collect(),
            entries: entry_hrefs
                .into_iter()
                .map(|href| NavEntry {
                    target: target_from_href(href.as_ref()).to_string(),
                    active: false,
                })
                .collect(),
            policy,
        }
    }

    pub fn policy(&self) -> RevealPolicy {
        self.policy
    }

    pub fn is_visible(&self, region: usize) -> bool {
        self.regions.get(region).is_some_and(|region| region.visible)
    }

    /// Identifier of a region, used only to match nav entries.
    pub fn region_id(&self, region: usize) -> Option<&str> {
        self.regions.get(region).map(|region| region.id.as_str())
    }

    /// Index of the active nav entry, if any.
    pub fn active_entry(&self) -> Option<usize> {
        self.entries.iter().position(|entry| entry.active)
    }

    /// Process one intersection batch in order.
    pub fn observe(&mut self, changes: &[IntersectionChange]) -> Vec<RevealOutcome> {
        let mut outcomes = Vec::new();

        for change in changes.iter().filter(|change| change.is_intersecting) {
            let Some(region) = self.regions.get_mut(change.region) else {
                continue;
            };

            let newly_revealed = !region.visible;
            region.visible = true;

            // An id-less region matches no entry and clears the highlight.
            for entry in &mut self.entries {
                entry.active = !region.id.is_empty() && entry.target == region.id;
            }

            outcomes.push(RevealOutcome {
                region: change.region,
                newly_revealed,
                unobserve: self.policy == RevealPolicy::OneShot,
            });
        }

        outcomes
    }

    /// Mark a revealed region with the reveal class.
    pub fn apply_revealed<T: ClassTarget>(region: &T) -> Result<(), PageError> {
        region.set_class(REVEALED_CLASS, true)
    }

    /// Write the active class onto nav entries, in construction order.
    pub fn apply_active<T: ClassTarget>(&self, entries: &[T]) -> Result<(), PageError> {
        for (state, element) in self.entries.iter().zip(entries) {
            element.set_class(ACTIVE_CLASS, state.active)?;
        }
        Ok(())
    }
}
