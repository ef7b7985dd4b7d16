use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;

use log::debug;

use crate::detector::{ChangeDetector, Subscriber};

/// Change detectors keyed by whatever they watch.
///
/// This is user-managed state, like scroll offsets or focus: the caller owns
/// the registry and decides when to check it. Watching a fractions value per
/// element and scroller is `Registry<(H, Scroller<H>), Fractions>`.
///
/// Detectors are kept, and checked, in the order their keys were first bound.
pub struct Registry<K, V> {
    detectors: Vec<(K, ChangeDetector<V>)>,
    index: HashMap<K, usize>,
}

impl<K, V> Default for Registry<K, V> {
    fn default() -> Self {
        Self {
            detectors: Vec::new(),
            index: HashMap::new(),
        }
    }
}

impl<K, V> Registry<K, V>
where
    K: Eq + Hash + Clone + Debug,
    V: PartialEq,
{
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind `subscriber` to the detector for `key`, creating the detector
    /// with `make` if there is none yet.
    pub fn bind<F>(&mut self, key: K, subscriber: Subscriber<V>, make: F)
    where
        F: FnOnce() -> ChangeDetector<V>,
    {
        let position = match self.index.get(&key) {
            Some(&position) => position,
            None => {
                debug!("[registry] watching {:?}", key);
                let position = self.detectors.len();
                self.index.insert(key.clone(), position);
                self.detectors.push((key, make()));
                position
            }
        };
        self.detectors[position].1.bind(subscriber);
    }

    /// Unbind `subscriber` (or all subscribers) from the detector for `key`.
    /// A detector left without subscribers is dropped.
    /// Returns true if there was a detector for `key`.
    pub fn unbind(&mut self, key: &K, subscriber: Option<&Subscriber<V>>) -> bool {
        let Some(detector) = self.get_mut(key) else {
            return false;
        };
        detector.unbind(subscriber);
        if !detector.has_subscribers() {
            debug!("[registry] no subscribers left for {:?}, dropping", key);
            self.remove(key);
        }
        true
    }

    /// Check the detector for `key`. Returns true if its value changed;
    /// unknown keys never change.
    pub fn check(&mut self, key: &K) -> bool {
        self.get_mut(key).is_some_and(|detector| detector.check())
    }

    /// Check every detector in bind order. Returns how many changed.
    pub fn check_all(&mut self) -> usize {
        self.detectors
            .iter_mut()
            .map(|(_, detector)| detector.check())
            .filter(|changed| *changed)
            .count()
    }

    /// Re-deliver the current value of the detector for `key`.
    pub fn trigger(&self, key: &K) {
        if let Some(detector) = self.get(key) {
            detector.trigger();
        }
    }

    pub fn get(&self, key: &K) -> Option<&ChangeDetector<V>> {
        let position = *self.index.get(key)?;
        Some(&self.detectors[position].1)
    }

    fn get_mut(&mut self, key: &K) -> Option<&mut ChangeDetector<V>> {
        let position = *self.index.get(key)?;
        Some(&mut self.detectors[position].1)
    }

    pub fn remove(&mut self, key: &K) -> Option<ChangeDetector<V>> {
        let position = self.index.remove(key)?;
        let (_, detector) = self.detectors.remove(position);
        for (key, _) in &self.detectors[position..] {
            if let Some(slot) = self.index.get_mut(key) {
                *slot -= 1;
            }
        }
        Some(detector)
    }

    /// Keys in bind order.
    pub fn keys(&self) -> impl Iterator<Item = &K> {
        self.detectors.iter().map(|(key, _)| key)
    }

    pub fn contains(&self, key: &K) -> bool {
        self.index.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.detectors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.detectors.is_empty()
    }
}
