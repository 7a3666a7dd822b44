//! # Navigation State
//!
//! Which section is showing. This is the only state the navigation
//! controller owns; cosmetic effects live in `effects.rs` and never write
//! back here.
//!
//! ```text
//! NavigationState
//! ├── slots: Vec<SectionSlot>     // one per section, in keyboard order
//! ├── lookup: HashMap<&str, usize> // id → slot, built once
//! ├── current_index: usize        // index of the active slot
//! └── title: &'static str         // derived display title
//! ```
//!
//! State changes only happen through `update(state, action)` in action.rs.

use std::collections::HashMap;

use crate::core::section::{InvalidTarget, ORDER, Section};

/// One section plus its activation flag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionSlot {
    pub section: Section,
    pub active: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationState {
    slots: Vec<SectionSlot>,
    lookup: HashMap<&'static str, usize>,
    current_index: usize,
    title: &'static str,
}

impl NavigationState {
    /// Landing active, index 0.
    pub fn new() -> Self {
        let slots: Vec<SectionSlot> = ORDER
            .iter()
            .map(|&section| SectionSlot {
                section,
                active: section == Section::Landing,
            })
            .collect();
        let lookup = slots
            .iter()
            .enumerate()
            .map(|(i, slot)| (slot.section.id(), i))
            .collect();
        Self {
            slots,
            lookup,
            current_index: 0,
            title: Section::Landing.title(),
        }
    }

    pub fn current(&self) -> Section {
        self.slots[self.current_index].section
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn last_index(&self) -> usize {
        self.slots.len() - 1
    }

    pub fn title(&self) -> &'static str {
        self.title
    }

    pub fn slots(&self) -> &[SectionSlot] {
        &self.slots
    }

    pub fn is_active(&self, section: Section) -> bool {
        self.slots
            .iter()
            .any(|slot| slot.section == section && slot.active)
    }

    pub fn active_count(&self) -> usize {
        self.slots.iter().filter(|slot| slot.active).count()
    }

    /// Resolve an identifier to its slot index.
    pub fn resolve(&self, id: &str) -> Result<usize, InvalidTarget> {
        self.lookup
            .get(id)
            .copied()
            .ok_or_else(|| InvalidTarget(id.to_string()))
    }

    pub fn section_at(&self, index: usize) -> Option<Section> {
        self.slots.get(index).map(|slot| slot.section)
    }

    /// Make `index` the single active slot. Callers resolve the index first,
    /// so an out-of-range index leaves everything untouched.
    pub(crate) fn activate(&mut self, index: usize) {
        if index >= self.slots.len() {
            return;
        }
        for slot in &mut self.slots {
            slot.active = false;
        }
        self.slots[index].active = true;
        self.current_index = index;
        self.title = self.slots[index].section.title();
    }
}

impl Default for NavigationState {
    fn default() -> Self {
        Self::new()
    }
}
