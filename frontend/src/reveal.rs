//! Scroll reveal: elements tagged `.scroll-animate` get `animate-in` once.
//!
//! [`RevealTracker`] holds the one-shot bookkeeping; [`ScrollReveal`] binds
//! it to an `IntersectionObserver` plus a scroll listener. Both the observer
//! and the listener are released by [`ScrollReveal::stop`] or on drop.

use std::cell::RefCell;
use std::collections::HashSet;
use std::hash::Hash;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Element, Event, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use crate::config::{
    REVEALED_CLASS, REVEAL_INDEX_ATTRIBUTE, REVEAL_ROOT_MARGIN, REVEAL_SCROLL_OFFSET, REVEAL_THRESHOLD,
    SCROLL_TOP_THRESHOLD,
};

/// One-shot visibility bookkeeping for a set of observed elements.
#[derive(Clone, Debug, PartialEq)]
pub struct RevealTracker<K: Eq + Hash> {
    observed: HashSet<K>,
    revealed: HashSet<K>,
    active: bool,
}

impl<K: Eq + Hash> Default for RevealTracker<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Eq + Hash> RevealTracker<K> {
    pub fn new() -> Self {
        Self {
            observed: HashSet::new(),
            revealed: HashSet::new(),
            active: true,
        }
    }

    /// Start watching `key`. Returns `false` if it is already known or stopped.
    pub fn observe(&mut self, key: K) -> bool {
        if !self.active || self.revealed.contains(&key) {
            return false;
        }
        self.observed.insert(key)
    }

    /// Record that `key` became visible.
    ///
    /// Returns `true` only the first time, after which `key` is no longer
    /// observed.
    pub fn mark_visible(&mut self, key: K) -> bool {
        if !self.active || !self.observed.remove(&key) {
            return false;
        }
        self.revealed.insert(key);
        true
    }

    pub fn is_revealed(&self, key: &K) -> bool {
        self.revealed.contains(key)
    }

    /// Keys still waiting to be revealed, in no particular order.
    pub fn pending(&self) -> impl Iterator<Item = &K> {
        self.observed.iter()
    }

    pub fn pending_count(&self) -> usize {
        self.observed.len()
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Drop every observation. Later calls are no-ops.
    pub fn stop(&mut self) {
        self.active = false;
        self.observed.clear();
    }
}

/// Position stored in an element's `data-reveal-index` attribute.
pub fn parse_reveal_index(attribute: Option<String>) -> Option<usize> {
    attribute?.trim().parse().ok()
}

/// Scroll fallback: top edge above the reveal line and bottom edge on screen.
pub fn in_reveal_zone(top: f64, bottom: f64, viewport_height: f64) -> bool {
    top < viewport_height - REVEAL_SCROLL_OFFSET && bottom > 0.0
}

/// Page scroll progress in `[0, 1]`.
pub fn scroll_progress(scroll_top: f64, scroll_height: f64, viewport_height: f64) -> f64 {
    let scrollable = scroll_height - viewport_height;
    if scrollable <= 0.0 {
        return 0.0;
    }
    (scroll_top / scrollable).clamp(0.0, 1.0)
}

pub fn shows_scroll_top(scroll_top: f64) -> bool {
    scroll_top > SCROLL_TOP_THRESHOLD
}

struct RevealTargets {
    elements: Vec<Element>,
    tracker: RevealTracker<usize>,
}

impl RevealTargets {
    /// Reveal `element` (stored at `index`) if it has not been revealed yet.
    fn reveal(&mut self, index: usize, element: &Element, observer: &IntersectionObserver) {
        if !self.tracker.mark_visible(index) {
            return;
        }
        if let Err(e) = element.class_list().add_1(REVEALED_CLASS) {
            log::warn!("Failed to mark element revealed: {:?}", e);
        }
        observer.unobserve(element);
    }
}

/// Live observer over the elements matching a selector.
pub struct ScrollReveal {
    observer: IntersectionObserver,
    targets: Rc<RefCell<RevealTargets>>,
    _on_intersect: Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>,
    on_scroll: Closure<dyn FnMut(Event)>,
}

impl ScrollReveal {
    /// Observe every element matching `selector`.
    ///
    /// Each element is tagged with its position so observer callbacks can
    /// find it without scanning. Returns `None` outside a browser window or
    /// if the observer cannot be created.
    pub fn start(selector: &str) -> Option<Self> {
        let window = web_sys::window()?;
        let document = window.document()?;

        let nodes = document
            .query_selector_all(selector)
            .map_err(|e| log::warn!("Invalid reveal selector {}: {:?}", selector, e))
            .ok()?;
        let elements: Vec<Element> = (0..nodes.length())
            .filter_map(|i| nodes.item(i))
            .filter_map(|node| node.dyn_into::<Element>().ok())
            .collect();

        let targets = Rc::new(RefCell::new(RevealTargets {
            elements,
            tracker: RevealTracker::new(),
        }));

        let intersect_targets = Rc::clone(&targets);
        let on_intersect = Closure::wrap(Box::new(
            move |entries: js_sys::Array, observer: IntersectionObserver| {
                let mut targets = intersect_targets.borrow_mut();
                for entry in entries.iter() {
                    let entry: IntersectionObserverEntry = entry.unchecked_into();
                    if !entry.is_intersecting() {
                        continue;
                    }
                    let target = entry.target();
                    if let Some(index) = parse_reveal_index(target.get_attribute(REVEAL_INDEX_ATTRIBUTE)) {
                        targets.reveal(index, &target, &observer);
                    }
                }
            },
        ) as Box<dyn FnMut(js_sys::Array, IntersectionObserver)>);

        let options = IntersectionObserverInit::new();
        options.set_threshold(&JsValue::from_f64(REVEAL_THRESHOLD));
        options.set_root_margin(REVEAL_ROOT_MARGIN);
        let observer =
            IntersectionObserver::new_with_options(on_intersect.as_ref().unchecked_ref(), &options)
                .map_err(|e| log::warn!("IntersectionObserver unavailable: {:?}", e))
                .ok()?;

        {
            let mut guard = targets.borrow_mut();
            let RevealTargets { elements, tracker } = &mut *guard;
            for (index, element) in elements.iter().enumerate() {
                // Already revealed by an earlier scan
                if element.class_list().contains(REVEALED_CLASS) {
                    continue;
                }
                if let Err(e) = element.set_attribute(REVEAL_INDEX_ATTRIBUTE, &index.to_string()) {
                    log::warn!("Failed to tag reveal target: {:?}", e);
                    continue;
                }
                if tracker.observe(index) {
                    observer.observe(element);
                }
            }
        }

        let scroll_targets = Rc::clone(&targets);
        let scroll_observer = observer.clone();
        let on_scroll = Closure::wrap(Box::new(move |_: Event| {
            let Some(viewport_height) = web_sys::window()
                .and_then(|w| w.inner_height().ok())
                .and_then(|h| h.as_f64())
            else {
                return;
            };
            let mut targets = scroll_targets.borrow_mut();
            let visible: Vec<(usize, Element)> = targets
                .tracker
                .pending()
                .filter_map(|&index| targets.elements.get(index).map(|element| (index, element)))
                .filter(|(_, element)| {
                    let rect = element.get_bounding_client_rect();
                    in_reveal_zone(rect.top(), rect.bottom(), viewport_height)
                })
                .map(|(index, element)| (index, element.clone()))
                .collect();
            for (index, element) in visible {
                targets.reveal(index, &element, &scroll_observer);
            }
        }) as Box<dyn FnMut(Event)>);

        if let Err(e) = window.add_event_listener_with_callback("scroll", on_scroll.as_ref().unchecked_ref()) {
            log::warn!("Failed to listen for scroll: {:?}", e);
        }

        log::debug!(
            "Scroll reveal watching {} elements",
            targets.borrow().tracker.pending_count()
        );

        Some(Self {
            observer,
            targets,
            _on_intersect: on_intersect,
            on_scroll,
        })
    }

    /// Release the observer and the scroll listener. Idempotent.
    pub fn stop(&mut self) {
        let mut targets = self.targets.borrow_mut();
        if !targets.tracker.is_active() {
            return;
        }
        targets.tracker.stop();
        self.observer.disconnect();
        if let Some(window) = web_sys::window() {
            if let Err(e) = window
                .remove_event_listener_with_callback("scroll", self.on_scroll.as_ref().unchecked_ref())
            {
                log::warn!("Failed to remove scroll listener: {:?}", e);
            }
        }
    }
}

impl Drop for ScrollReveal {
    fn drop(&mut self) {
        self.stop();
    }
}
