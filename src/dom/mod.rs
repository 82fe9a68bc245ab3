//! Browser host: finds the page nodes, forwards DOM events to [`App`] and
//! applies the returned effects.
//!
//! Listeners live for the lifetime of the page, so their closures are
//! leaked with `forget`. Everything runs on the UI thread; `RefCell`
//! borrows are released before effects are applied so that effects which
//! re-enter the host (a synthetic submit click) do not trip a borrow.

mod page;
mod styles;
mod timers;

use std::cell::RefCell;
use std::rc::Rc;

use js_sys::Array;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{Event, EventTarget, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit, Node};

use self::page::{Page, cast};
use self::timers::TimerTable;
use crate::app::{App, Viewport};
use crate::config::PortfolioConfig;
use crate::consts::{REVEAL_ROOT_MARGIN, REVEAL_THRESHOLD};
use crate::effect::{Effect, Timer};
use crate::error::PortfolioError;
use crate::nav::anchor_fragment;

/// Mount now, or once `DOMContentLoaded` fires if the document is still
/// parsing.
pub fn boot() {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        log::error!("no document; portfolio behavior not attached");
        return;
    };
    if document.ready_state() == "loading" {
        let on_ready = Closure::once_into_js(run_mount);
        if let Err(err) = document.add_event_listener_with_callback("DOMContentLoaded", on_ready.unchecked_ref()) {
            log::error!("failed to wait for DOMContentLoaded: {err:?}");
        }
    } else {
        run_mount();
    }
}

fn run_mount() {
    if let Err(err) = mount() {
        log::error!("portfolio setup failed: {err}");
    }
}

/// Wire every behavior onto the current page.
///
/// # Errors
///
/// Returns an error when the document shell is missing or a listener cannot
/// be attached.
pub fn mount() -> Result<(), PortfolioError> {
    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or(PortfolioError::MissingElement("document"))?;
    let config = PortfolioConfig::resolve(Page::config_block(&document).as_deref());
    let page = Page::collect(&config)?;

    page.inject_keyframes()?;
    let scroll_top = page.create_scroll_top()?;

    let recipient = config.recipient.clone();
    let host = Rc::new(Host { app: RefCell::new(App::new(config)), page, timers: RefCell::new(TimerTable::default()) });

    host.wire_navigation()?;
    host.wire_form()?;
    host.wire_window()?;
    host.wire_links()?;
    listen(&scroll_top, "click", {
        let host = Rc::clone(&host);
        move |_| host.dispatch(|app| app.on_scroll_top_click())
    })?;
    host.observe_reveals()?;

    let viewport = Viewport { width: host.page.viewport_width(), scroll_y: host.page.scroll_y() };
    let sections = host.page.sections();
    let reveal_count = host.page.reveal.len();
    let has_typing_target = host.page.hero_subtitle.is_some();
    host.dispatch(|app| app.on_load(viewport, &sections, reveal_count, has_typing_target));

    log::info!("Hello! Thanks for checking out my portfolio website.");
    log::info!("Contact me at: {recipient}");
    Ok(())
}

struct Host {
    app: RefCell<App>,
    page: Page,
    timers: RefCell<TimerTable>,
}

impl Host {
    /// Run a core handler and apply what it returns.
    fn dispatch(self: &Rc<Self>, handler: impl FnOnce(&mut App) -> Vec<Effect>) {
        let effects = handler(&mut self.app.borrow_mut());
        for effect in effects {
            self.apply(effect);
        }
    }

    fn apply(self: &Rc<Self>, effect: Effect) {
        match effect {
            Effect::Schedule { timer, delay_ms } => {
                let host = Rc::clone(self);
                self.timers
                    .borrow_mut()
                    .schedule(timer, delay_ms, move |timer, generation| host.fire(timer, generation));
            }
            Effect::Cancel(timer) => self.timers.borrow_mut().cancel(timer),
            Effect::RequestFrame => self.request_frame(),
            other => {
                if let Err(err) = self.page.apply(&other) {
                    log::debug!("effect {other:?} not applied: {err}");
                }
            }
        }
    }

    fn fire(self: &Rc<Self>, timer: Timer, generation: u64) {
        let claimed = self.timers.borrow_mut().claim(timer, generation);
        if claimed {
            self.dispatch(|app| app.on_timer(timer));
        }
    }

    fn request_frame(self: &Rc<Self>) {
        let host = Rc::clone(self);
        let on_frame = Closure::once_into_js(move || host.run_frame());
        if let Err(err) = self.page.window.request_animation_frame(on_frame.unchecked_ref()) {
            log::debug!("requestAnimationFrame failed, running inline: {err:?}");
            self.run_frame();
        }
    }

    fn run_frame(self: &Rc<Self>) {
        let scroll_y = self.page.scroll_y();
        let sections = self.page.sections();
        self.dispatch(|app| app.on_frame(scroll_y, &sections));
    }

    fn wire_navigation(self: &Rc<Self>) -> Result<(), PortfolioError> {
        if let Some(toggle) = &self.page.nav_toggle {
            let host = Rc::clone(self);
            listen(toggle, "click", move |_| host.dispatch(App::on_nav_toggle))?;
        }

        for anchor in &self.page.anchors {
            let host = Rc::clone(self);
            let href = anchor.get_attribute("href");
            listen(anchor, "click", move |ev| {
                ev.prevent_default();
                let top = href
                    .as_deref()
                    .and_then(anchor_fragment)
                    .and_then(|fragment| host.page.fragment_top(fragment));
                host.dispatch(|app| app.on_anchor_click(top));
            })?;
        }

        let host = Rc::clone(self);
        listen(&self.page.document, "click", move |ev| {
            let (Some(menu), Some(toggle)) = (&host.page.nav_menu, &host.page.nav_toggle) else {
                return;
            };
            let target = ev.target().and_then(cast::<Node>);
            let inside_menu = menu.contains(target.as_ref());
            let inside_toggle = toggle.contains(target.as_ref());
            host.dispatch(|app| app.on_document_click(inside_menu, inside_toggle));
        })
    }

    fn wire_form(self: &Rc<Self>) -> Result<(), PortfolioError> {
        let Some(form) = &self.page.form else {
            log::debug!("no contact form on this page");
            return Ok(());
        };

        let host = Rc::clone(self);
        listen(form, "submit", move |ev| {
            ev.prevent_default();
            let draft = host.page.draft();
            host.dispatch(|app| app.on_submit(draft));
        })?;

        let host = Rc::clone(self);
        listen(&self.page.document, "keydown", move |ev| {
            let Some(key) = ev.dyn_ref::<web_sys::KeyboardEvent>().map(web_sys::KeyboardEvent::key) else {
                return;
            };
            let Some(target) = ev.target().and_then(cast::<web_sys::Element>) else {
                return;
            };
            if key != "Enter" || target.tag_name() != "INPUT" {
                return;
            }
            ev.prevent_default();
            if let Some((controls, index)) = host.page.form_controls(&target) {
                host.dispatch(|app| app.on_enter_key(&controls, index));
            }
        })
    }

    fn wire_window(self: &Rc<Self>) -> Result<(), PortfolioError> {
        let host = Rc::clone(self);
        listen(&self.page.window, "scroll", move |_| {
            let scroll_y = host.page.scroll_y();
            host.dispatch(|app| app.on_scroll(scroll_y));
        })?;

        let host = Rc::clone(self);
        listen(&self.page.window, "resize", move |_| {
            let width = host.page.viewport_width();
            host.dispatch(|app| app.on_resize(width));
        })
    }

    fn wire_links(self: &Rc<Self>) -> Result<(), PortfolioError> {
        for (index, link) in self.page.external_links.iter().enumerate() {
            let host = Rc::clone(self);
            let anchor = link.clone();
            listen(link, "click", move |ev| {
                let Some(clicked) = ev.target().and_then(cast::<web_sys::Element>) else {
                    return;
                };
                let clicked_tag = clicked.tag_name();
                let href = anchor.href();
                let has_target = clicked.has_attribute("target");
                host.dispatch(|app| app.on_link_click(index, &clicked_tag, &href, has_target));
            })?;
        }
        Ok(())
    }

    fn observe_reveals(self: &Rc<Self>) -> Result<(), PortfolioError> {
        if self.page.reveal.is_empty() {
            return Ok(());
        }
        let host = Rc::clone(self);
        let on_entries = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(move |entries: Array, _| {
            for entry in entries.iter().filter_map(cast::<IntersectionObserverEntry>) {
                let target: Node = entry.target().into();
                let index = host.page.reveal.iter().position(|el| el.is_same_node(Some(&target)));
                if let Some(index) = index {
                    let visible = entry.is_intersecting();
                    host.dispatch(|app| app.on_intersect(index, visible));
                }
            }
        });

        let options = IntersectionObserverInit::new();
        options.set_threshold(&REVEAL_THRESHOLD.into());
        options.set_root_margin(REVEAL_ROOT_MARGIN);
        let observer = IntersectionObserver::new_with_options(on_entries.as_ref().unchecked_ref(), &options)?;
        for el in &self.page.reveal {
            observer.observe(el);
        }
        on_entries.forget();
        Ok(())
    }
}

/// Attach a page-lifetime event listener.
fn listen(target: &EventTarget, event: &str, handler: impl FnMut(Event) + 'static) -> Result<(), PortfolioError> {
    let closure = Closure::<dyn FnMut(Event)>::new(handler);
    target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}
