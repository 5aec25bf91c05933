use std::cell::RefCell;
use std::rc::Rc;

use bevy::log::{info, warn};
use constants::page::{
    CONTENT_SECTION_SELECTOR, NAV_LINK_SELECTOR, NAV_MENU_ID, NAV_TOGGLE_ID, REVEAL_THRESHOLD,
};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{
    Document, Element, Event, IntersectionObserver, IntersectionObserverEntry,
    IntersectionObserverInit,
};

use super::navigation::NavigationController;
use super::reveal::{IntersectionChange, RevealPolicy, SectionRevealTracker};
use super::{ClassTarget, PageError};

impl ClassTarget for Element {
    fn set_class(&self, class: &str, present: bool) -> Result<(), PageError> {
        let class_list = self.class_list();
        let result = if present {
            class_list.add_1(class)
        } else {
            class_list.remove_1(class)
        };
        result.map_err(js_error)
    }
}

fn js_error(value: JsValue) -> PageError {
    PageError::Js(format!("{value:?}"))
}

fn document() -> Result<Document, PageError> {
    web_sys::window()
        .ok_or(PageError::NoWindow)?
        .document()
        .ok_or(PageError::NoDocument)
}

fn element_by_id(document: &Document, id: &str) -> Result<Element, PageError> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| PageError::MissingElement(format!("#{id}")))
}

fn query_all(document: &Document, selector: &str) -> Result<Vec<Element>, PageError> {
    let list = document.query_selector_all(selector).map_err(js_error)?;
    Ok((0..list.length())
        .filter_map(|index| list.item(index))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect())
}

/// Register a listener that lives for the rest of the page.
fn listen(
    target: &Element,
    event: &str,
    handler: impl FnMut(Event) + 'static,
) -> Result<(), PageError> {
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
    target
        .add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
        .map_err(js_error)?;

    // Ownership passes to JS; the page never removes these listeners.
    closure.forget();
    Ok(())
}

/// Install menu and section behaviour once the document has been parsed.
pub fn install_when_ready(policy: RevealPolicy) {
    let document = match document() {
        Ok(document) => document,
        Err(error) => {
            warn!("Page behaviour disabled: {error}");
            return;
        }
    };

    let ready_state = js_sys::Reflect::get(&document, &JsValue::from_str("readyState"))
        .ok()
        .and_then(|value| value.as_string());

    if ready_state.as_deref() != Some("loading") {
        install(&document, policy);
        return;
    }

    let deferred = document.clone();
    let on_ready = Closure::wrap(Box::new(move || install(&deferred, policy)) as Box<dyn FnMut()>);
    if let Err(error) = document
        .add_event_listener_with_callback("DOMContentLoaded", on_ready.as_ref().unchecked_ref())
    {
        warn!("Page behaviour disabled: {}", js_error(error));
        return;
    }
    on_ready.forget();
}

fn install(document: &Document, policy: RevealPolicy) {
    let nav_links = match query_all(document, NAV_LINK_SELECTOR) {
        Ok(links) => links,
        Err(error) => {
            warn!("Nav links unavailable: {error}");
            Vec::new()
        }
    };

    match wire_navigation(document, &nav_links) {
        Ok(()) => info!("Navigation menu wired ({} links)", nav_links.len()),
        Err(error) => warn!("Navigation menu skipped: {error}"),
    }

    match wire_section_reveal(document, nav_links, policy) {
        Ok(count) => info!("Observing {count} content sections ({policy:?})"),
        Err(error) => warn!("Section reveal skipped: {error}"),
    }
}

fn wire_navigation(document: &Document, links: &[Element]) -> Result<(), PageError> {
    let toggle = element_by_id(document, NAV_TOGGLE_ID)?;
    let menu = element_by_id(document, NAV_MENU_ID)?;
    let controller = Rc::new(RefCell::new(NavigationController::new()));

    {
        let controller = controller.clone();
        let (toggle_el, menu_el) = (toggle.clone(), menu.clone());
        listen(&toggle, "click", move |_| {
            let mut nav = controller.borrow_mut();
            nav.toggle();
            if let Err(error) = nav.apply(&toggle_el, &menu_el) {
                warn!("Menu toggle not reflected: {error}");
            }
        })?;
    }

    for link in links {
        let controller = controller.clone();
        let (toggle_el, menu_el) = (toggle.clone(), menu.clone());
        listen(link, "click", move |_| {
            let mut nav = controller.borrow_mut();
            if !nav.state().is_open() {
                return;
            }
            nav.entry_activated();
            if let Err(error) = nav.apply(&toggle_el, &menu_el) {
                warn!("Menu close not reflected: {error}");
            }
        })?;
    }

    Ok(())
}

fn wire_section_reveal(
    document: &Document,
    links: Vec<Element>,
    policy: RevealPolicy,
) -> Result<usize, PageError> {
    let sections = query_all(document, CONTENT_SECTION_SELECTOR)?;
    if sections.is_empty() {
        return Err(PageError::MissingElement(CONTENT_SECTION_SELECTOR.to_string()));
    }

    let hrefs: Vec<String> = links
        .iter()
        .map(|link| link.get_attribute("href").unwrap_or_default())
        .collect();
    let tracker = SectionRevealTracker::new(sections.iter().map(Element::id), &hrefs, policy);
    let tracker = Rc::new(RefCell::new(tracker));
    let observed = sections.clone();

    let callback = Closure::wrap(Box::new(
        move |entries: js_sys::Array, observer: IntersectionObserver| {
            let mut tracker = tracker.borrow_mut();
            let mut changed = false;

            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                    continue;
                };
                let target = entry.target();
                // Sections need not carry ids, so match by element identity.
                let Some(region) = observed.iter().position(|section| section == &target) else {
                    continue;
                };
                let change = IntersectionChange {
                    region,
                    is_intersecting: entry.is_intersecting(),
                };

                for outcome in tracker.observe(std::slice::from_ref(&change)) {
                    changed = true;
                    if outcome.newly_revealed {
                        if let Err(error) = SectionRevealTracker::apply_revealed(&target) {
                            warn!("Reveal of section {} not reflected: {error}", outcome.region);
                        }
                    }
                    if outcome.unobserve {
                        observer.unobserve(&target);
                    }
                }
            }

            if changed {
                if let Err(error) = tracker.apply_active(&links) {
                    warn!("Active nav link not reflected: {error}");
                }
            }
        },
    )
        as Box<dyn FnMut(js_sys::Array, IntersectionObserver)>);

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(REVEAL_THRESHOLD));
    let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)
        .map_err(js_error)?;

    for section in &sections {
        observer.observe(section);
    }

    callback.forget();
    Ok(sections.len())
}
