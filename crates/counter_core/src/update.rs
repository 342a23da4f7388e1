//! Per-cycle property change sets
//!
//! Property writes between two update cycles are coalesced into a single
//! [`PropertyValues`] map, which the widget hands to its post-update hook
//! once per cycle. The map keeps the value each property had when it first
//! changed in the cycle; later writes to the same property don't overwrite it.

use rustc_hash::FxHashMap;

/// Properties changed during one update cycle, keyed by name
///
/// The stored value is the property's previous value, or `None` when the
/// property had no value before (the first cycle after construction).
#[derive(Clone, Debug)]
pub struct PropertyValues<V> {
    changed: FxHashMap<&'static str, Option<V>>,
}

impl<V> Default for PropertyValues<V> {
    fn default() -> Self {
        Self {
            changed: FxHashMap::default(),
        }
    }
}

impl<V> PropertyValues<V> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record that `name` changed away from `old`
    ///
    /// Only the first change per cycle is kept.
    pub fn record(&mut self, name: &'static str, old: Option<V>) {
        self.changed.entry(name).or_insert(old);
    }

    /// Whether `name` changed in this cycle
    pub fn has(&self, name: &str) -> bool {
        self.changed.contains_key(name)
    }

    /// The value `name` had before this cycle, if it changed and had one
    pub fn old_value(&self, name: &str) -> Option<&V> {
        self.changed.get(name).and_then(|old| old.as_ref())
    }

    /// Names of all changed properties (unordered)
    pub fn keys(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.changed.keys().copied()
    }

    pub fn len(&self) -> usize {
        self.changed.len()
    }

    pub fn is_empty(&self) -> bool {
        self.changed.is_empty()
    }

    pub fn clear(&mut self) {
        self.changed.clear();
    }
}
