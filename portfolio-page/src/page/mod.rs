//! Page behaviour outside the 3D scene.
//!
//! Menu toggling and scroll-driven section reveal run directly on DOM
//! closures so they keep working when the renderer never starts.

/// DOM lookups, event listeners and the intersection observer (web only).
#[cfg(target_arch = "wasm32")]
pub mod dom;

/// Collapsible menu state and its class reflection.
pub mod navigation;

/// Section visibility tracking and active nav entry selection.
pub mod reveal;

use thiserror::Error;

#[cfg(target_arch = "wasm32")]
pub use dom::install_when_ready;

/// Failures while wiring page behaviour to the DOM.
#[derive(Debug, Error)]
#[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
pub enum PageError {
    #[error("no global window")]
    NoWindow,
    #[error("window has no document")]
    NoDocument,
    #[error("missing element: {0}")]
    MissingElement(String),
    #[error("DOM call rejected: {0}")]
    Js(String),
}

/// Anything whose presentation state is expressed as a set of style classes.
pub trait ClassTarget {
    fn set_class(&self, class: &str, present: bool) -> Result<(), PageError>;
}

#[cfg(test)]
pub(crate) mod testing {
    use super::{ClassTarget, PageError};
    use std::cell::RefCell;
    use std::collections::BTreeSet;

    /// In-memory stand-in for a DOM element's class list.
    #[derive(Default)]
    pub struct FakeElement {
        classes: RefCell<BTreeSet<String>>,
    }

    impl FakeElement {
        pub fn has(&self, class: &str) -> bool {
            self.classes.borrow().contains(class)
        }
    }

    impl ClassTarget for FakeElement {
        fn set_class(&self, class: &str, present: bool) -> Result<(), PageError> {
            let mut classes = self.classes.borrow_mut();
            if present {
                classes.insert(class.to_string());
            } else {
                classes.remove(class);
            }
            Ok(())
        }
    }
}
