//! # Domain Entities
//!
//! Locations and the per-state city cache.

use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

/// A state offered by the directory.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct State {
    /// Display and lookup name.
    pub name: String,
}

impl State {
    /// Create a state.
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// A city within a state.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct City {
    /// Display name.
    pub name: String,
}

impl City {
    /// Create a city.
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// Collapse duplicate city names, keeping the first occurrence of each.
///
/// Matching is exact and case-sensitive.
pub fn unique_cities<I>(names: I) -> Vec<City>
where
    I: IntoIterator<Item = String>,
{
    let mut seen = HashSet::new();
    names
        .into_iter()
        .filter(|name| seen.insert(name.clone()))
        .map(City::new)
        .collect()
}

/// Lifecycle of a lazily fetched resource.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ResourceStatus {
    /// Never fetched.
    #[default]
    Absent,
    /// A request is in flight.
    Fetching,
    /// Fetched and cached.
    Present,
    /// The last fetch failed; a later call may retry.
    Failed,
}

/// Per-state city lists.
///
/// An absent entry means "not yet known". A present entry is authoritative
/// even when empty: that state has no cities.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CityCache {
    entries: HashMap<String, Vec<City>>,
}

impl CityCache {
    /// Create an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Cities cached for a state.
    pub fn get(&self, state_name: &str) -> Option<&[City]> {
        self.entries.get(state_name).map(Vec::as_slice)
    }

    /// True when the state has an entry, empty or not.
    pub fn contains(&self, state_name: &str) -> bool {
        self.entries.contains_key(state_name)
    }

    /// Store a state's city list.
    pub fn insert(&mut self, state_name: impl Into<String>, cities: Vec<City>) {
        self.entries.insert(state_name.into(), cities);
    }

    /// True iff the state is cached with zero cities.
    pub fn has_no_options(&self, state_name: &str) -> bool {
        self.get(state_name).is_some_and(<[City]>::is_empty)
    }

    /// City names for a state, empty when unknown.
    pub fn names(&self, state_name: &str) -> Vec<String> {
        self.get(state_name)
            .map(|cities| cities.iter().map(|c| c.name.clone()).collect())
            .unwrap_or_default()
    }

    /// Number of cached states.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when nothing is cached.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
