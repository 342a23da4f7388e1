//! Signals, derived values and effects
//!
//! Writes push: setting a signal marks every observer stale and queues the
//! stale effects. Reads pull: a derived value recomputes only when read after
//! one of its inputs changed. Observers discover their inputs by reading them;
//! whatever a closure read on its last run is what it is subscribed to.
//!
//! ```rust
//! use counter_core::reactive::ReactiveGraph;
//! use std::sync::atomic::{AtomicBool, Ordering};
//! use std::sync::Arc;
//!
//! let mut graph = ReactiveGraph::new();
//! let count = graph.create_signal(0i32);
//!
//! let dirty = Arc::new(AtomicBool::new(false));
//! let flag = dirty.clone();
//! graph.create_effect(move |g| {
//!     let _ = g.get(count);
//!     flag.store(true, Ordering::SeqCst);
//! });
//!
//! dirty.store(false, Ordering::SeqCst);
//! graph.set(count, 1);
//! assert!(dirty.load(Ordering::SeqCst));
//! ```

use slotmap::{new_key_type, SlotMap};
use smallvec::SmallVec;
use std::any::Any;
use std::cell::{Cell, RefCell};
use std::marker::PhantomData;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

new_key_type! {
    pub struct SignalId;
    pub struct DerivedId;
    pub struct EffectId;
}

/// Shared dirty flag for requesting an update cycle
pub type DirtyFlag = Arc<AtomicBool>;

type Inputs = SmallVec<[SignalId; 4]>;
type Value = Box<dyn Any + Send>;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Observer {
    Derived(DerivedId),
    Effect(EffectId),
}

/// Typed handle to a signal
pub struct Signal<T> {
    id: SignalId,
    _marker: PhantomData<fn() -> T>,
}

/// Typed handle to a derived value
pub struct Derived<T> {
    id: DerivedId,
    _marker: PhantomData<fn() -> T>,
}

/// Handle to a registered effect
#[derive(Clone, Copy, Debug)]
pub struct Effect {
    id: EffectId,
}

macro_rules! copy_handle {
    ($handle:ident, $id:ty) => {
        impl<T> Clone for $handle<T> {
            fn clone(&self) -> Self {
                *self
            }
        }

        impl<T> Copy for $handle<T> {}

        impl<T> std::fmt::Debug for $handle<T> {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.debug_tuple(stringify!($handle)).field(&self.id).finish()
            }
        }

        impl<T> $handle<T> {
            pub fn id(&self) -> $id {
                self.id
            }
        }
    };
}

copy_handle!(Signal, SignalId);
copy_handle!(Derived, DerivedId);

impl Effect {
    pub fn id(&self) -> EffectId {
        self.id
    }
}

struct SignalSlot {
    value: Value,
    observers: SmallVec<[Observer; 4]>,
}

struct DerivedSlot {
    compute: Box<dyn Fn(&ReactiveGraph) -> Value + Send>,
    cached: Option<Value>,
    inputs: Inputs,
    stale: Cell<bool>,
}

struct EffectSlot {
    run: Box<dyn FnMut(&ReactiveGraph) + Send>,
    inputs: Inputs,
    stale: Cell<bool>,
}

/// Owner of every signal, derived value and effect of one widget
pub struct ReactiveGraph {
    signals: SlotMap<SignalId, SignalSlot>,
    derived: SlotMap<DerivedId, DerivedSlot>,
    effects: SlotMap<EffectId, EffectSlot>,
    queued: RefCell<Vec<EffectId>>,
    batch_depth: Cell<u32>,
    /// Inputs read by the observer currently running, if any
    reads: RefCell<Option<Inputs>>,
}

impl ReactiveGraph {
    pub fn new() -> Self {
        Self {
            signals: SlotMap::with_key(),
            derived: SlotMap::with_key(),
            effects: SlotMap::with_key(),
            queued: RefCell::new(Vec::new()),
            batch_depth: Cell::new(0),
            reads: RefCell::new(None),
        }
    }

    pub fn create_signal<T: Send + 'static>(&mut self, initial: T) -> Signal<T> {
        let id = self.signals.insert(SignalSlot {
            value: Box::new(initial),
            observers: SmallVec::new(),
        });
        Signal {
            id,
            _marker: PhantomData,
        }
    }

    /// Read a signal, subscribing the running observer to it
    pub fn get<T: Clone + 'static>(&self, signal: Signal<T>) -> Option<T> {
        if let Some(reads) = self.reads.borrow_mut().as_mut() {
            if !reads.contains(&signal.id) {
                reads.push(signal.id);
            }
        }
        self.get_untracked(signal)
    }

    /// Read a signal without subscribing
    pub fn get_untracked<T: Clone + 'static>(&self, signal: Signal<T>) -> Option<T> {
        let slot = self.signals.get(signal.id)?;
        slot.value.downcast_ref::<T>().cloned()
    }

    /// Write a signal
    ///
    /// Observers are marked stale; effects run now unless a batch is open.
    pub fn set<T: Send + 'static>(&mut self, signal: Signal<T>, value: T) {
        let Some(slot) = self.signals.get_mut(signal.id) else {
            return;
        };
        slot.value = Box::new(value);

        let observers = slot.observers.clone();
        for observer in observers {
            self.invalidate(observer);
        }

        if self.batch_depth.get() == 0 {
            self.run_queued();
        }
    }

    pub fn create_derived<T, F>(&mut self, compute: F) -> Derived<T>
    where
        T: Clone + Send + 'static,
        F: Fn(&ReactiveGraph) -> T + Send + 'static,
    {
        let id = self.derived.insert(DerivedSlot {
            compute: Box::new(move |graph| Box::new(compute(graph)) as Value),
            cached: None,
            inputs: Inputs::new(),
            stale: Cell::new(true),
        });
        Derived {
            id,
            _marker: PhantomData,
        }
    }

    /// Read a derived value, recomputing it if an input changed
    pub fn get_derived<T: Clone + 'static>(&mut self, derived: Derived<T>) -> Option<T> {
        let slot = self.derived.get(derived.id)?;
        if let (false, Some(cached)) = (slot.stale.get(), slot.cached.as_ref()) {
            return cached.downcast_ref::<T>().cloned();
        }

        let (value, inputs) = self.tracked(|graph| (slot.compute)(graph));
        slot.stale.set(false);
        self.relink(Observer::Derived(derived.id), &inputs);

        let slot = self.derived.get_mut(derived.id)?;
        let result = value.downcast_ref::<T>().cloned();
        slot.cached = Some(value);
        slot.inputs = inputs;
        result
    }

    /// Register an effect; it runs once immediately to find its inputs
    pub fn create_effect<F>(&mut self, run: F) -> Effect
    where
        F: FnMut(&ReactiveGraph) + Send + 'static,
    {
        let id = self.effects.insert(EffectSlot {
            run: Box::new(run),
            inputs: Inputs::new(),
            stale: Cell::new(true),
        });
        self.queued.borrow_mut().push(id);
        if self.batch_depth.get() == 0 {
            self.run_queued();
        }
        Effect { id }
    }

    pub fn batch_start(&self) {
        self.batch_depth.set(self.batch_depth.get() + 1);
    }

    /// Close a batch; the outermost close runs queued effects
    pub fn batch_end(&mut self) {
        match self.batch_depth.get() {
            0 => {}
            1 => {
                self.batch_depth.set(0);
                self.run_queued();
            }
            depth => self.batch_depth.set(depth - 1),
        }
    }

    pub fn batch<R>(&mut self, f: impl FnOnce(&mut Self) -> R) -> R {
        self.batch_start();
        let result = f(self);
        self.batch_end();
        result
    }

    /// Run `f` and collect the signals it read
    fn tracked<R>(&self, f: impl FnOnce(&Self) -> R) -> (R, Inputs) {
        let outer = self.reads.replace(Some(Inputs::new()));
        let result = f(self);
        let inputs = self.reads.replace(outer).unwrap_or_default();
        (result, inputs)
    }

    fn invalidate(&self, observer: Observer) {
        match observer {
            Observer::Derived(id) => {
                if let Some(slot) = self.derived.get(id) {
                    slot.stale.set(true);
                }
            }
            Observer::Effect(id) => {
                if let Some(slot) = self.effects.get(id) {
                    if !slot.stale.replace(true) {
                        self.queued.borrow_mut().push(id);
                    }
                }
            }
        }
    }

    /// Point `observer` at exactly `inputs`
    fn relink(&mut self, observer: Observer, inputs: &[SignalId]) {
        let previous = match observer {
            Observer::Derived(id) => self.derived.get(id).map(|s| s.inputs.clone()),
            Observer::Effect(id) => self.effects.get(id).map(|s| s.inputs.clone()),
        }
        .unwrap_or_default();

        for id in previous.iter().filter(|id| !inputs.contains(id)) {
            if let Some(signal) = self.signals.get_mut(*id) {
                signal.observers.retain(|o| *o != observer);
            }
        }
        for id in inputs {
            if let Some(signal) = self.signals.get_mut(*id) {
                if !signal.observers.contains(&observer) {
                    signal.observers.push(observer);
                }
            }
        }
    }

    fn run_queued(&mut self) {
        loop {
            let queued = std::mem::take(&mut *self.queued.borrow_mut());
            if queued.is_empty() {
                break;
            }
            for id in queued {
                self.run_effect(id);
            }
        }
    }

    fn run_effect(&mut self, id: EffectId) {
        // Take the closure out so it can borrow the graph while running
        let mut run = match self.effects.get_mut(id) {
            Some(slot) if slot.stale.replace(false) => {
                std::mem::replace(&mut slot.run, Box::new(|_| {}))
            }
            _ => return,
        };

        let ((), inputs) = self.tracked(|graph| run(graph));
        self.relink(Observer::Effect(id), &inputs);

        if let Some(slot) = self.effects.get_mut(id) {
            slot.run = run;
            slot.inputs = inputs;
        }
    }
}

impl Default for ReactiveGraph {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    #[test]
    fn test_signal_roundtrip() {
        let mut graph = ReactiveGraph::new();
        let max = graph.create_signal(10i32);
        assert_eq!(graph.get(max), Some(10));

        graph.set(max, 25);
        assert_eq!(graph.get_untracked(max), Some(25));
    }

    #[test]
    fn test_derived_follows_both_inputs() {
        let mut graph = ReactiveGraph::new();
        let count = graph.create_signal(5i32);
        let min = graph.create_signal(5i32);
        let at_min = graph.create_derived(move |g| g.get(count) <= g.get(min));

        assert_eq!(graph.get_derived(at_min), Some(true));

        graph.set(count, 7);
        assert_eq!(graph.get_derived(at_min), Some(false));

        graph.set(min, 9);
        assert_eq!(graph.get_derived(at_min), Some(true));
    }

    #[test]
    fn test_derived_is_cached_until_stale() {
        let mut graph = ReactiveGraph::new();
        let runs = Arc::new(Mutex::new(0));

        let count = graph.create_signal(3i32);
        let runs_in = runs.clone();
        let emphasized = graph.create_derived(move |g| {
            *runs_in.lock().unwrap() += 1;
            g.get(count) == Some(18)
        });

        assert_eq!(graph.get_derived(emphasized), Some(false));
        assert_eq!(graph.get_derived(emphasized), Some(false));
        assert_eq!(*runs.lock().unwrap(), 1);

        graph.set(count, 18);
        assert_eq!(graph.get_derived(emphasized), Some(true));
        assert_eq!(*runs.lock().unwrap(), 2);
    }

    #[test]
    fn test_effect_runs_now_and_on_writes() {
        let mut graph = ReactiveGraph::new();
        let seen = Arc::new(Mutex::new(Vec::new()));

        let count = graph.create_signal(0i32);
        let seen_in = seen.clone();
        graph.create_effect(move |g| {
            seen_in.lock().unwrap().push(g.get(count).unwrap_or(0));
        });
        assert_eq!(*seen.lock().unwrap(), vec![0]);

        graph.set(count, 1);
        graph.set(count, 2);
        assert_eq!(*seen.lock().unwrap(), vec![0, 1, 2]);
    }

    #[test]
    fn test_effect_drops_inputs_it_stops_reading() {
        let mut graph = ReactiveGraph::new();
        let runs = Arc::new(Mutex::new(0));

        let use_max = graph.create_signal(true);
        let max = graph.create_signal(10i32);
        let runs_in = runs.clone();
        graph.create_effect(move |g| {
            if g.get(use_max) == Some(true) {
                let _ = g.get(max);
            }
            *runs_in.lock().unwrap() += 1;
        });

        graph.set(use_max, false);
        assert_eq!(*runs.lock().unwrap(), 2);

        graph.set(max, 20);
        assert_eq!(*runs.lock().unwrap(), 2);
    }

    #[test]
    fn test_batch_runs_effect_once() {
        let mut graph = ReactiveGraph::new();
        let runs = Arc::new(Mutex::new(0));

        let count = graph.create_signal(0i32);
        let min = graph.create_signal(0i32);
        let max = graph.create_signal(10i32);
        let runs_in = runs.clone();
        graph.create_effect(move |g| {
            let _ = (g.get(count), g.get(min), g.get(max));
            *runs_in.lock().unwrap() += 1;
        });
        *runs.lock().unwrap() = 0;

        graph.set(min, 2);
        graph.set(max, 20);
        assert_eq!(*runs.lock().unwrap(), 2);

        *runs.lock().unwrap() = 0;
        graph.batch(|g| {
            g.set(count, 3);
            g.batch(|g| g.set(min, 1));
            g.set(max, 30);
        });
        assert_eq!(*runs.lock().unwrap(), 1);
    }
}
