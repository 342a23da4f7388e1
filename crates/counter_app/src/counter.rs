//! The `counter-app` widget
//!
//! A bounded counter with a number display and `-`/`+` controls. Properties
//! live in reactive signals; an effect subscribed to them requests an update
//! cycle whenever one is written. The host drives cycles with
//! [`CounterApp::perform_update`] and drains deferred work from
//! [`CounterApp::tasks`].
//!
//! ```rust
//! use counter_app::CounterApp;
//!
//! let mut counter = CounterApp::new();
//! counter.perform_update();
//!
//! counter.increase();
//! counter.perform_update();
//! assert_eq!(counter.count(), 1);
//! assert_eq!(counter.attribute("count"), Some("1"));
//! ```

use crate::config::CounterConfig;
use crate::error::{CounterError, Result};
use crate::hax::{self, HaxProperties};
use crate::style::CounterStyles;
use crate::view::{el, Element, View};
use counter_confetti::{import, ConfettiContainer, ConfettiModule, SharedConfetti, POPPED};
use counter_core::{
    Derived, DirtyFlag, Effect, PropertyValues, ReactiveGraph, Signal, TaskQueue,
};
use rustc_hash::FxHashMap;
use std::str::FromStr;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

/// Property and attribute names
pub const COUNT: &str = "count";
pub const MIN: &str = "min";
pub const MAX: &str = "max";

pub const DEFAULT_COUNT: i32 = 0;
pub const DEFAULT_MIN: i32 = 0;
pub const DEFAULT_MAX: i32 = 10;

/// Count values that are always shown emphasized
const EMPHASIZED_VALUES: [i32; 2] = [18, 21];

/// Count value that sets off the confetti
const CELEBRATE_AT: i32 = 21;

/// A user action on one of the two controls
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Action {
    Decrease,
    Increase,
}

impl Action {
    /// Control label
    pub fn label(&self) -> &'static str {
        match self {
            Action::Decrease => "-",
            Action::Increase => "+",
        }
    }
}

impl FromStr for Action {
    type Err = CounterError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "-" | "dec" | "decrease" => Ok(Action::Decrease),
            "+" | "inc" | "increase" => Ok(Action::Increase),
            other => Err(CounterError::UnknownAction(other.to_string())),
        }
    }
}

/// The counter widget
pub struct CounterApp {
    graph: ReactiveGraph,
    count: Signal<i32>,
    min: Signal<i32>,
    max: Signal<i32>,
    decrement_disabled: Derived<bool>,
    increment_disabled: Derived<bool>,
    emphasized: Derived<bool>,
    /// Set by the property effect, cleared by `perform_update`
    needs_update: DirtyFlag,
    _request_update: Effect,
    changed: PropertyValues<i32>,
    /// Host attributes as last reflected or set
    attributes: FxHashMap<&'static str, String>,
    label_font_size: Option<f32>,
    confetti: SharedConfetti,
    tasks: TaskQueue,
    view: Option<Element>,
    updates: u64,
    celebrations: u32,
}

impl CounterApp {
    /// Element tag
    pub const TAG: &'static str = "counter-app";

    pub fn new() -> Self {
        let mut graph = ReactiveGraph::new();
        let count = graph.create_signal(DEFAULT_COUNT);
        let min = graph.create_signal(DEFAULT_MIN);
        let max = graph.create_signal(DEFAULT_MAX);

        let decrement_disabled = graph.create_derived(move |g| {
            g.get(count).unwrap_or_default() <= g.get(min).unwrap_or_default()
        });
        let increment_disabled = graph.create_derived(move |g| {
            g.get(count).unwrap_or_default() >= g.get(max).unwrap_or_default()
        });
        let emphasized = graph.create_derived(move |g| {
            let value = g.get(count).unwrap_or_default();
            value == g.get(min).unwrap_or_default()
                || value == g.get(max).unwrap_or_default()
                || EMPHASIZED_VALUES.contains(&value)
        });

        let needs_update: DirtyFlag = Arc::new(AtomicBool::new(false));
        let flag = needs_update.clone();
        let request_update = graph.create_effect(move |g| {
            let _ = (g.get(count), g.get(min), g.get(max));
            flag.store(true, Ordering::SeqCst);
        });

        // The first cycle reports every property as newly set
        let mut changed = PropertyValues::new();
        for name in [COUNT, MIN, MAX] {
            changed.record(name, None);
        }

        Self {
            graph,
            count,
            min,
            max,
            decrement_disabled,
            increment_disabled,
            emphasized,
            needs_update,
            _request_update: request_update,
            changed,
            attributes: FxHashMap::default(),
            label_font_size: None,
            confetti: ConfettiContainer::new("confetti")
                .with_class("wrapper")
                .into_shared(),
            tasks: TaskQueue::new(),
            view: None,
            updates: 0,
            celebrations: 0,
        }
    }

    /// Build a counter seeded from a config
    pub fn from_config(config: &CounterConfig) -> Self {
        let mut app = Self::new();
        app.batch(|app| {
            app.set_min(config.min);
            app.set_max(config.max);
            app.set_count(config.count);
        });
        app.label_font_size = config.label_font_size;
        app
    }

    /// Share a host's task queue instead of a private one
    pub fn with_task_queue(mut self, tasks: TaskQueue) -> Self {
        self.tasks = tasks;
        self
    }

    pub fn with_label_font_size(mut self, size: f32) -> Self {
        self.label_font_size = Some(size);
        self
    }

    // =========================================================================
    // PROPERTIES
    // =========================================================================

    pub fn count(&self) -> i32 {
        self.graph.get_untracked(self.count).unwrap_or(DEFAULT_COUNT)
    }

    pub fn min(&self) -> i32 {
        self.graph.get_untracked(self.min).unwrap_or(DEFAULT_MIN)
    }

    pub fn max(&self) -> i32 {
        self.graph.get_untracked(self.max).unwrap_or(DEFAULT_MAX)
    }

    pub fn set_count(&mut self, value: i32) {
        self.set_property(COUNT, self.count, value);
    }

    pub fn set_min(&mut self, value: i32) {
        self.set_property(MIN, self.min, value);
    }

    pub fn set_max(&mut self, value: i32) {
        self.set_property(MAX, self.max, value);
    }

    fn set_property(&mut self, name: &'static str, signal: Signal<i32>, value: i32) {
        let old = self.graph.get_untracked(signal).unwrap_or_default();
        if old == value {
            return;
        }
        tracing::debug!("{}: {} {} -> {}", Self::TAG, name, old, value);
        self.changed.record(name, Some(old));
        self.graph.set(signal, value);
    }

    /// Apply several property writes as one change
    pub fn batch<R>(&mut self, f: impl FnOnce(&mut Self) -> R) -> R {
        self.graph.batch_start();
        let result = f(self);
        self.graph.batch_end();
        result
    }

    pub fn is_decrement_disabled(&mut self) -> bool {
        self.graph
            .get_derived(self.decrement_disabled)
            .unwrap_or(true)
    }

    pub fn is_increment_disabled(&mut self) -> bool {
        self.graph
            .get_derived(self.increment_disabled)
            .unwrap_or(true)
    }

    /// Whether the number is drawn in the emphasis color
    pub fn is_emphasized(&mut self) -> bool {
        self.graph.get_derived(self.emphasized).unwrap_or(false)
    }

    pub fn label_font_size(&self) -> Option<f32> {
        self.label_font_size
    }

    // =========================================================================
    // OPERATIONS
    // =========================================================================

    /// Step up by one unless already at `max`
    pub fn increase(&mut self) {
        let count = self.count();
        if count < self.max() {
            self.set_count(count + 1);
        }
    }

    /// Step down by one unless already at `min`
    pub fn decrease(&mut self) {
        let count = self.count();
        if count > self.min() {
            self.set_count(count - 1);
        }
    }

    /// Handle a click on a control; disabled controls ignore it
    pub fn click(&mut self, action: Action) -> bool {
        let disabled = match action {
            Action::Decrease => self.is_decrement_disabled(),
            Action::Increase => self.is_increment_disabled(),
        };
        if disabled {
            tracing::trace!("{}: `{}` is disabled", Self::TAG, action.label());
            return false;
        }

        match action {
            Action::Decrease => self.decrease(),
            Action::Increase => self.increase(),
        }
        true
    }

    /// Check the bounds the widget assumes but never enforces
    pub fn validate(&self) -> Result<()> {
        let (count, min, max) = (self.count(), self.min(), self.max());
        if min > max {
            return Err(CounterError::InvalidBounds { min, max });
        }
        if count < min || count > max {
            return Err(CounterError::CountOutOfBounds { count, min, max });
        }
        Ok(())
    }

    // =========================================================================
    // UPDATE CYCLE
    // =========================================================================

    /// Whether a property changed since the last cycle
    pub fn needs_update(&self) -> bool {
        self.needs_update.load(Ordering::SeqCst)
    }

    /// Run one update cycle if one was requested
    ///
    /// Renders, reflects changed properties to attributes and then hands the
    /// cycle's change set to [`CounterApp::updated`]. Returns false when
    /// nothing had changed.
    pub fn perform_update(&mut self) -> bool {
        if !self.needs_update.swap(false, Ordering::SeqCst) {
            return false;
        }

        let changed = std::mem::take(&mut self.changed);
        self.updates += 1;
        tracing::trace!(
            "{}: update {} ({} changed)",
            Self::TAG,
            self.updates,
            changed.len()
        );

        if let Err(err) = self.validate() {
            tracing::warn!("{}: {}", Self::TAG, err);
        }

        let view = self.render();
        self.view = Some(view);
        self.reflect(&changed);
        self.updated(&changed);
        true
    }

    /// Post-update hook
    pub fn updated(&mut self, changed: &PropertyValues<i32>) {
        if changed.has(COUNT) && self.count() == CELEBRATE_AT {
            self.make_it_rain();
        }
    }

    /// Pop the confetti on a later turn
    ///
    /// The module is acquired on the first turn and the `popped` attribute is
    /// set on the next, which also requests a cycle so the view picks it up.
    /// Nothing happens if the widget is gone by then.
    pub fn make_it_rain(&mut self) {
        self.celebrations += 1;
        tracing::debug!("{}: celebrating {}", Self::TAG, self.count());

        let target = Arc::downgrade(&self.confetti);
        let needs_update = self.needs_update.clone();
        let tasks = self.tasks.clone();
        self.tasks.queue(move || {
            let module: &'static ConfettiModule = import();
            tasks.queue(move || match target.upgrade() {
                Some(confetti) => {
                    module.pop(&confetti);
                    needs_update.store(true, Ordering::SeqCst);
                }
                None => tracing::trace!("confetti target dropped before {}", POPPED),
            });
        });
    }

    fn reflect(&mut self, changed: &PropertyValues<i32>) {
        for name in [COUNT, MIN, MAX] {
            if changed.has(name) {
                let value = match name {
                    COUNT => self.count(),
                    MIN => self.min(),
                    _ => self.max(),
                };
                self.attributes.insert(name, value.to_string());
            }
        }
    }

    // =========================================================================
    // ATTRIBUTES
    // =========================================================================

    fn observed(name: &str) -> Result<&'static str> {
        match name {
            COUNT => Ok(COUNT),
            MIN => Ok(MIN),
            MAX => Ok(MAX),
            other => Err(CounterError::UnknownAttribute(other.to_string())),
        }
    }

    /// Set a host attribute, converting it to the matching property
    pub fn set_attribute(&mut self, name: &str, value: &str) -> Result<()> {
        let name = Self::observed(name)?;
        let parsed: i32 = value
            .trim()
            .parse()
            .map_err(|_| CounterError::InvalidAttribute {
                name: name.to_string(),
                value: value.to_string(),
            })?;

        self.attributes.insert(name, parsed.to_string());
        match name {
            COUNT => self.set_count(parsed),
            MIN => self.set_min(parsed),
            _ => self.set_max(parsed),
        }
        Ok(())
    }

    /// Remove a host attribute, resetting the property to its default
    pub fn remove_attribute(&mut self, name: &str) -> Result<()> {
        let name = Self::observed(name)?;
        self.attributes.remove(name);
        match name {
            COUNT => self.set_count(DEFAULT_COUNT),
            MIN => self.set_min(DEFAULT_MIN),
            _ => self.set_max(DEFAULT_MAX),
        }
        Ok(())
    }

    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }

    pub fn has_attribute(&self, name: &str) -> bool {
        self.attributes.contains_key(name)
    }

    // =========================================================================
    // RENDERING
    // =========================================================================

    /// Build the widget's view from current state
    pub fn render(&mut self) -> Element {
        let styles = CounterStyles::resolve(self.label_font_size);
        let count = self.count();
        let emphasized = self.is_emphasized();
        let decrement_disabled = self.is_decrement_disabled();
        let increment_disabled = self.is_increment_disabled();

        let (id, class, popped) = {
            let confetti = self.confetti.lock().unwrap();
            (
                confetti.id().to_string(),
                confetti.class().unwrap_or_default().to_string(),
                confetti.is_popped(),
            )
        };

        let counter_class = if emphasized {
            "counter emphasized"
        } else {
            "counter"
        };

        el(ConfettiModule::TAG)
            .attr("id", id)
            .attr("class", class)
            .flag(POPPED, popped)
            .attr("style", styles.wrapper_inline())
            .child(
                el("div")
                    .attr("class", counter_class)
                    .attr("style", styles.counter_inline(emphasized))
                    .child(View::text(count.to_string())),
            )
            .child(
                el("div")
                    .attr("class", "buttons")
                    .attr("style", styles.buttons_inline())
                    .child(Self::button(&styles, Action::Decrease, decrement_disabled))
                    .child(Self::button(&styles, Action::Increase, increment_disabled)),
            )
    }

    fn button(styles: &CounterStyles, action: Action, disabled: bool) -> Element {
        el("button")
            .flag("disabled", disabled)
            .attr("style", styles.button_inline(disabled))
            .child(View::text(action.label()))
    }

    /// The view from the last update cycle
    pub fn view(&self) -> Option<&Element> {
        self.view.as_ref()
    }

    /// Host element with reflected attributes around a fresh render
    pub fn to_html(&mut self) -> String {
        let styles = CounterStyles::resolve(self.label_font_size);
        let mut host = el(Self::TAG);
        for name in [COUNT, MIN, MAX] {
            if let Some(value) = self.attribute(name) {
                host = host.attr(name, value);
            }
        }
        host.attr("style", styles.host_inline())
            .child(self.render())
            .to_html()
    }

    // =========================================================================
    // HOST HOOKS
    // =========================================================================

    /// The nested effect element
    pub fn confetti(&self) -> &Mutex<ConfettiContainer> {
        &self.confetti
    }

    /// Queue for deferred continuations
    pub fn tasks(&self) -> &TaskQueue {
        &self.tasks
    }

    /// Advance the effect animation by `dt` seconds
    ///
    /// Requests a cycle when the effect settles and drops `popped`.
    pub fn tick(&self, dt: f32) {
        let mut confetti = self.confetti.lock().unwrap();
        let was_popped = confetti.is_popped();
        confetti.tick(dt);
        if was_popped && !confetti.is_popped() {
            self.needs_update.store(true, Ordering::SeqCst);
        }
    }

    /// Number of completed update cycles
    pub fn update_count(&self) -> u64 {
        self.updates
    }

    /// Number of times the celebration was triggered
    pub fn celebrations(&self) -> u32 {
        self.celebrations
    }

    /// Editor schema for the three settings
    pub fn hax_properties() -> Result<serde_json::Value> {
        hax::to_json(&HaxProperties::for_counter())
    }
}

impl Default for CounterApp {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for CounterApp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CounterApp")
            .field("count", &self.count())
            .field("min", &self.min())
            .field("max", &self.max())
            .field("updates", &self.updates)
            .field("celebrations", &self.celebrations)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mounted() -> CounterApp {
        let mut app = CounterApp::new();
        app.perform_update();
        app
    }

    fn buttons(app: &CounterApp) -> Vec<bool> {
        app.view()
            .unwrap()
            .find_all(&|e| e.tag() == "button")
            .iter()
            .map(|b| b.has_attr("disabled"))
            .collect()
    }

    fn counter_text(app: &CounterApp) -> String {
        app.view()
            .unwrap()
            .find_by_class("counter")
            .unwrap()
            .text_content()
    }

    #[test]
    fn test_defaults() {
        let mut app = mounted();
        assert_eq!((app.count(), app.min(), app.max()), (0, 0, 10));
        assert!(app.is_decrement_disabled());
        assert!(!app.is_increment_disabled());
        assert_eq!(buttons(&app), vec![true, false]);
        assert_eq!(counter_text(&app), "0");
        assert_eq!(app.attribute(COUNT), Some("0"));
        assert_eq!(app.attribute(MIN), Some("0"));
        assert_eq!(app.attribute(MAX), Some("10"));
    }

    #[test]
    fn test_rendered_structure() {
        let app = mounted();
        let root = app.view().unwrap();
        assert_eq!(root.tag(), "confetti-container");
        assert_eq!(root.get_attr("id"), Some("confetti"));
        assert!(root.has_class("wrapper"));
        assert!(root.find_by_class("buttons").is_some());

        let labels: Vec<String> = root
            .find_all(&|e| e.tag() == "button")
            .iter()
            .map(|b| b.text_content())
            .collect();
        assert_eq!(labels, vec!["-", "+"]);
    }

    #[test]
    fn test_increase_to_max() {
        let mut app = mounted();
        app.set_count(9);
        app.perform_update();

        app.increase();
        assert!(app.perform_update());
        assert_eq!(app.count(), 10);
        assert_eq!(buttons(&app), vec![false, true]);
        assert_eq!(counter_text(&app), "10");
    }

    #[test]
    fn test_boundaries_are_no_ops() {
        let mut app = mounted();
        app.set_count(10);
        app.perform_update();

        for _ in 0..3 {
            app.increase();
            assert_eq!(app.count(), 10);
        }
        // Nothing changed, so no cycle is requested
        assert!(!app.needs_update());
        assert!(!app.perform_update());

        app.set_count(1);
        app.decrease();
        assert_eq!(app.count(), 0);
        app.decrease();
        app.decrease();
        assert_eq!(app.count(), 0);
    }

    #[test]
    fn test_increase_enables_decrement() {
        let mut app = mounted();
        app.increase();
        app.perform_update();
        assert_eq!(app.count(), 1);
        assert!(!app.is_decrement_disabled());

        // Unless min equals max
        let mut pinned = mounted();
        pinned.batch(|app| {
            app.set_min(1);
            app.set_max(1);
        });
        pinned.increase();
        pinned.perform_update();
        assert_eq!(pinned.count(), 1);
        assert!(pinned.is_decrement_disabled());
        assert!(pinned.is_increment_disabled());
    }

    #[test]
    fn test_celebration_at_21() {
        let mut app = mounted();
        app.batch(|app| {
            app.set_max(25);
            app.set_count(20);
        });
        app.perform_update();
        assert_eq!(app.celebrations(), 0);

        app.increase();
        app.perform_update();
        assert_eq!(app.count(), 21);
        assert_eq!(app.celebrations(), 1);

        // Deferred: nothing popped until the queue is drained
        assert!(!app.confetti().lock().unwrap().is_popped());
        assert_eq!(app.tasks().run_until_idle(), 2);
        assert!(app.confetti().lock().unwrap().has_attribute(POPPED));
        assert!(counter_confetti::is_loaded());
    }

    #[test]
    fn test_celebration_needs_count_change() {
        let mut app = mounted();
        app.batch(|app| {
            app.set_max(25);
            app.set_count(21);
        });
        app.perform_update();
        assert_eq!(app.celebrations(), 1);

        // A cycle that only touches max does not celebrate again
        app.set_max(30);
        app.perform_update();
        assert_eq!(app.celebrations(), 1);
    }

    #[test]
    fn test_repeat_visits_are_not_deduplicated() {
        let mut app = mounted();
        app.batch(|app| {
            app.set_max(25);
            app.set_count(20);
        });
        app.perform_update();

        app.increase();
        app.perform_update();
        app.decrease();
        app.perform_update();
        app.increase();
        app.perform_update();

        assert_eq!(app.celebrations(), 2);
        assert_eq!(app.tasks().len(), 2);
        app.tasks().run_until_idle();
        assert_eq!(app.confetti().lock().unwrap().bursts(), 1);
    }

    #[test]
    fn test_batch_is_one_reaction() {
        let mut app = mounted();
        let before = app.update_count();
        app.batch(|app| {
            app.set_max(30);
            app.set_count(25);
            app.set_count(21);
        });
        assert!(app.perform_update());
        assert!(!app.perform_update());
        assert_eq!(app.update_count(), before + 1);
        assert_eq!(app.celebrations(), 1);
    }

    #[test]
    fn test_change_set_keeps_first_old_value() {
        let mut app = mounted();
        app.set_count(3);
        app.set_count(5);

        let changed = std::mem::take(&mut app.changed);
        assert_eq!(changed.old_value(COUNT), Some(&0));
        assert!(!changed.has(MIN));
    }

    #[test]
    fn test_equal_bounds() {
        let mut app = mounted();
        app.batch(|app| {
            app.set_min(5);
            app.set_max(5);
        });
        app.perform_update();
        // count is not clamped into the bounds
        assert_eq!(app.count(), 0);
        assert!(matches!(
            app.validate(),
            Err(CounterError::CountOutOfBounds {
                count: 0,
                min: 5,
                max: 5
            })
        ));

        app.set_count(5);
        app.perform_update();
        assert!(app.validate().is_ok());
        assert_eq!(buttons(&app), vec![true, true]);
    }

    #[test]
    fn test_inverted_bounds() {
        let mut app = mounted();
        app.batch(|app| {
            app.set_min(8);
            app.set_max(3);
            app.set_count(5);
        });
        app.perform_update();
        assert!(matches!(
            app.validate(),
            Err(CounterError::InvalidBounds { min: 8, max: 3 })
        ));
        assert_eq!(buttons(&app), vec![true, true]);

        app.increase();
        app.decrease();
        assert_eq!(app.count(), 5);
    }

    #[test]
    fn test_bound_changes_rerender_disabled_state() {
        let mut app = mounted();
        assert_eq!(buttons(&app), vec![true, false]);

        app.set_min(-5);
        assert!(app.perform_update());
        assert_eq!(buttons(&app), vec![false, false]);

        app.set_max(0);
        app.perform_update();
        assert_eq!(buttons(&app), vec![false, true]);

        app.set_min(0);
        app.perform_update();
        assert_eq!(buttons(&app), vec![true, true]);
        assert_eq!(app.count(), 0);
    }

    #[test]
    fn test_emphasis() {
        let mut app = mounted();
        app.set_max(30);
        app.perform_update();

        let mut emphasized = Vec::new();
        for value in [0, 5, 17, 18, 19, 21, 30] {
            app.set_count(value);
            app.perform_update();
            emphasized.push(app.is_emphasized());
        }
        assert_eq!(
            emphasized,
            vec![true, false, false, true, false, true, true]
        );

        let counter = app.view().unwrap().find_by_class("counter").unwrap();
        assert!(counter.has_class("emphasized"));
    }

    #[test]
    fn test_click_ignores_disabled() {
        let mut app = mounted();
        assert!(!app.click(Action::Decrease));
        assert!(!app.needs_update());

        assert!(app.click(Action::Increase));
        assert_eq!(app.count(), 1);
        assert!("-".parse::<Action>().unwrap() == Action::Decrease);
        assert!("x".parse::<Action>().is_err());
    }

    #[test]
    fn test_attributes() {
        let mut app = mounted();
        app.set_attribute("max", "25").unwrap();
        app.set_attribute("count", " 20 ").unwrap();
        assert_eq!(app.max(), 25);
        assert_eq!(app.count(), 20);

        let err = app.set_attribute("count", "twenty").unwrap_err();
        assert!(matches!(err, CounterError::InvalidAttribute { .. }));
        assert_eq!(app.count(), 20);
        assert!(matches!(
            app.set_attribute("step", "2"),
            Err(CounterError::UnknownAttribute(_))
        ));

        app.perform_update();
        assert_eq!(app.attribute(COUNT), Some("20"));

        app.remove_attribute("max").unwrap();
        assert_eq!(app.max(), DEFAULT_MAX);
        app.perform_update();
        assert_eq!(app.attribute(MAX), Some("10"));

        // Removing at the default leaves the attribute absent
        app.remove_attribute("min").unwrap();
        app.perform_update();
        assert!(!app.has_attribute(MIN));
    }

    #[test]
    fn test_from_config() {
        let config = CounterConfig {
            count: 20,
            min: 0,
            max: 25,
            label_font_size: Some(64.0),
        };
        let mut app = CounterApp::from_config(&config);
        app.perform_update();
        assert_eq!((app.count(), app.min(), app.max()), (20, 0, 25));
        assert_eq!(app.label_font_size(), Some(64.0));

        let html = app.to_html();
        assert!(html.starts_with(r#"<counter-app count="20" min="0" max="25""#));
        assert!(html.contains("font-size: 64px"));
    }

    #[derive(Clone, Default)]
    struct LogBuffer(Arc<Mutex<Vec<u8>>>);

    impl std::io::Write for LogBuffer {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_dropped_widget_skips_pop() {
        let logs = LogBuffer::default();
        let writer = logs.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::TRACE)
            .with_ansi(false)
            .with_writer(move || writer.clone())
            .finish();

        let tasks = TaskQueue::new();
        let mut app = CounterApp::new().with_task_queue(tasks.clone());
        app.set_max(25);
        app.set_count(21);
        app.perform_update();
        assert_eq!(app.celebrations(), 1);

        let target = Arc::downgrade(&app.confetti);
        drop(app);
        assert!(target.upgrade().is_none());

        tracing::subscriber::with_default(subscriber, || {
            assert_eq!(tasks.run_until_idle(), 2);
        });
        assert!(tasks.is_empty());

        let output = String::from_utf8(logs.0.lock().unwrap().clone()).unwrap();
        assert!(output.contains("confetti target dropped"));
        assert!(!output.contains("burst"));
    }

    #[test]
    fn test_pop_requests_update() {
        let mut app = mounted();
        app.batch(|app| {
            app.set_max(25);
            app.set_count(21);
        });
        app.perform_update();
        assert!(!app.view().unwrap().has_attr(POPPED));

        app.tasks().run_until_idle();
        assert!(app.needs_update());
        assert!(app.perform_update());
        assert!(app.view().unwrap().has_attr(POPPED));
        // Only the effect changed, so no second celebration
        assert_eq!(app.celebrations(), 1);

        for _ in 0..600 {
            app.tick(1.0 / 60.0);
        }
        assert!(app.perform_update());
        assert!(!app.view().unwrap().has_attr(POPPED));
    }

    #[test]
    fn test_attribute_value_is_normalized() {
        let mut app = mounted();
        app.set_attribute("count", " 0 ").unwrap();
        assert!(!app.needs_update());
        assert_eq!(app.attribute(COUNT), Some("0"));

        app.set_attribute("max", "+12").unwrap();
        assert_eq!(app.attribute(MAX), Some("12"));
    }

    #[test]
    fn test_confetti_settles_after_ticks() {
        let mut app = mounted();
        app.batch(|app| {
            app.set_max(21);
            app.set_count(21);
        });
        app.perform_update();
        app.tasks().run_until_idle();
        assert!(app.confetti().lock().unwrap().is_popped());

        for _ in 0..600 {
            app.tick(1.0 / 60.0);
        }
        assert!(!app.confetti().lock().unwrap().is_popped());
    }
}
