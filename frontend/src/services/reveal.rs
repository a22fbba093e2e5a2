//! Scroll-triggered reveal animations.
//!
//! An element starts offset and transparent and transitions to its resting
//! state once enough of it enters the viewport. Visibility is observed with
//! `IntersectionObserver`; when the browser refuses to create one the element
//! is shown right away.

use std::cell::RefCell;
use std::rc::Rc;

use leptos::*;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use crate::{AppError, AppResult};

/// Delay added per item in staggered grids (seconds).
pub const STAGGER_STEP: f64 = 0.05;

/// CSS easing shared by every reveal.
const EASING: &str = "cubic-bezier(0.22, 1, 0.36, 1)";

/// Tolerance for ratios reported right at the threshold.
const RATIO_EPSILON: f64 = 1e-3;

/// How and when an element is revealed.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RevealOptions {
    /// Reveal a single time and stop observing
    pub once: bool,
    /// Fraction of the element (0.0..=1.0) that must be visible
    pub amount: f64,
    /// Transition duration in seconds
    pub duration: f64,
    /// Transition delay in seconds
    pub delay: f64,
    /// Initial vertical offset in pixels
    pub offset_y: f64,
    /// Initial scale
    pub scale: f64,
    /// Initial rotation in degrees
    pub rotate: f64,
}

impl Default for RevealOptions {
    fn default() -> Self {
        Self {
            once: true,
            amount: 0.0,
            duration: 0.4,
            delay: 0.0,
            offset_y: 16.0,
            scale: 1.0,
            rotate: 0.0,
        }
    }
}

impl RevealOptions {
    /// Product cards: rise 20px once 40% is visible.
    pub fn card() -> Self {
        Self {
            amount: 0.4,
            duration: 0.5,
            offset_y: 20.0,
            ..Self::default()
        }
    }

    /// Grid item `index`, delayed by [`STAGGER_STEP`] per position.
    pub fn staggered(index: usize) -> Self {
        Self::default().with_delay(index as f64 * STAGGER_STEP)
    }

    pub fn hero_copy() -> Self {
        Self {
            duration: 0.6,
            offset_y: 20.0,
            ..Self::default()
        }
    }

    pub fn hero_media() -> Self {
        Self {
            duration: 0.6,
            delay: 0.1,
            offset_y: 0.0,
            scale: 0.95,
            rotate: -2.0,
            ..Self::default()
        }
    }

    pub fn with_delay(mut self, delay: f64) -> Self {
        self.delay = delay;
        self
    }

    /// Inline style for the hidden or resting state.
    pub fn style(&self, visible: bool) -> String {
        let transition = format!(
            "opacity {d}s {e} {w}s, transform {d}s {e} {w}s",
            d = self.duration,
            e = EASING,
            w = self.delay
        );

        if visible {
            format!("opacity: 1; transform: none; transition: {};", transition)
        } else {
            format!(
                "opacity: 0; transform: translateY({}px) scale({}) rotate({}deg); transition: {};",
                self.offset_y, self.scale, self.rotate, transition
            )
        }
    }
}

/// Visibility after an intersection change.
///
/// With `once` the element latches visible after the first crossing.
pub fn next_visibility(current: bool, intersecting: bool, ratio: f64, options: &RevealOptions) -> bool {
    let crossed = intersecting && ratio + RATIO_EPSILON >= options.amount;
    if options.once {
        current || crossed
    } else {
        crossed
    }
}

// =============================================================================
// IntersectionObserver binding
// =============================================================================

/// Live observer and the JS callback it holds.
struct ObserverHandle {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>,
}

impl ObserverHandle {
    fn observe(
        target: &web_sys::Element,
        options: RevealOptions,
        visible: ReadSignal<bool>,
        set_visible: WriteSignal<bool>,
    ) -> AppResult<Self> {
        let callback = Closure::wrap(Box::new(move |entries: js_sys::Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let entry: IntersectionObserverEntry = entry.unchecked_into();
                let current = visible.get_untracked();
                let next = next_visibility(
                    current,
                    entry.is_intersecting(),
                    entry.intersection_ratio(),
                    &options,
                );

                if next != current {
                    set_visible.set(next);
                }
                if next && options.once {
                    observer.unobserve(&entry.target());
                }
            }
        }) as Box<dyn FnMut(js_sys::Array, IntersectionObserver)>);

        let init = IntersectionObserverInit::new();
        init.set_threshold(&JsValue::from_f64(options.amount));

        let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)
            .map_err(|e| AppError::Browser(format!("IntersectionObserver unavailable: {:?}", e)))?;
        observer.observe(target);

        Ok(Self {
            observer,
            _callback: callback,
        })
    }

    fn disconnect(&self) {
        self.observer.disconnect();
    }
}

/// Observe `node` and report whether it should be shown.
///
/// The observer is disconnected when the owning component is cleaned up.
pub fn use_reveal(node: NodeRef<html::Div>, options: RevealOptions) -> ReadSignal<bool> {
    let (visible, set_visible) = create_signal(false);
    let handle: Rc<RefCell<Option<ObserverHandle>>> = Rc::default();

    {
        let handle = handle.clone();
        create_effect(move |_| {
            let Some(el) = node.get() else {
                return;
            };
            if handle.borrow().is_some() {
                return;
            }

            let target: &web_sys::Element = &el;
            match ObserverHandle::observe(target, options, visible, set_visible) {
                Ok(observer) => *handle.borrow_mut() = Some(observer),
                Err(e) => {
                    log::warn!("⚠️  {}; showing content without animation", e);
                    set_visible.set(true);
                }
            }
        });
    }

    on_cleanup(move || {
        if let Some(observer) = handle.borrow_mut().take() {
            observer.disconnect();
        }
    });

    visible
}

/// Wrapper revealing its children when scrolled into view.
#[component]
pub fn Reveal(
    /// Animation parameters
    #[prop(optional)]
    options: RevealOptions,
    /// Classes for the wrapper element
    #[prop(optional, into)]
    class: String,
    children: Children,
) -> impl IntoView {
    let node = create_node_ref::<html::Div>();
    let visible = use_reveal(node, options);

    view! {
        <div node_ref=node class=class style=move || options.style(visible.get())>
            {children()}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_once_latches_visible() {
        let options = RevealOptions::card();
        let shown = next_visibility(false, true, 0.5, &options);
        assert!(shown);
        // Leaving the viewport does not hide it again.
        assert!(next_visibility(shown, false, 0.0, &options));
    }

    #[test]
    fn test_below_threshold_stays_hidden() {
        let options = RevealOptions::card();
        assert!(!next_visibility(false, true, 0.1, &options));
        assert!(next_visibility(false, true, 0.3995, &options));
    }

    #[test]
    fn test_repeat_follows_intersection() {
        let options = RevealOptions {
            once: false,
            ..RevealOptions::default()
        };
        assert!(next_visibility(false, true, 0.2, &options));
        assert!(!next_visibility(true, false, 0.0, &options));
    }

    #[test]
    fn test_hidden_style_offsets_and_fades() {
        let style = RevealOptions::card().style(false);
        assert!(style.starts_with("opacity: 0;"));
        assert!(style.contains("translateY(20px)"));
        assert!(style.contains("opacity 0.5s"));
    }

    #[test]
    fn test_visible_style_rests() {
        let style = RevealOptions::hero_media().style(true);
        assert!(style.starts_with("opacity: 1; transform: none;"));
        assert!(style.contains("0.1s"));
    }

    #[test]
    fn test_staggered_delay() {
        assert_eq!(RevealOptions::staggered(0).delay, 0.0);
        assert_eq!(RevealOptions::staggered(2).delay, 0.1);
        assert!(RevealOptions::staggered(1).once);
    }
}
