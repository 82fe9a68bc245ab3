//! Handles to the page nodes the controllers address, and the code that
//! applies [`Effect`]s to them.
//!
//! Optional nodes are `None` when the markup lacks them; effects aimed at a
//! missing node are skipped.

use std::cell::RefCell;

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{
    Document, Element, HtmlAnchorElement, HtmlButtonElement, HtmlElement, HtmlFormElement, HtmlInputElement,
    HtmlTextAreaElement, Node, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition, ScrollToOptions, Window,
};

use super::styles::{
    BANNER_EXIT_ANIMATION, BANNER_KEYFRAMES, SCROLL_TOP_CLASS, SCROLL_TOP_CSS, SCROLL_TOP_ICON, SENDING_LABEL,
    TYPING_CLASS, banner_css,
};
use crate::config::{CONFIG_ELEMENT_ID, PortfolioConfig};
use crate::effect::{Effect, Target};
use crate::error::PortfolioError;
use crate::feedback::{BannerId, BannerKind};
use crate::form::ContactDraft;
use crate::keys::ControlKind;
use crate::nav::{ACTIVE_CLASS, Section};

pub struct Page {
    pub window: Window,
    pub document: Document,
    pub body: HtmlElement,
    pub navbar: Option<HtmlElement>,
    pub nav_menu: Option<Element>,
    pub nav_toggle: Option<Element>,
    pub nav_links: Vec<Element>,
    /// Navigation links plus every in-page anchor.
    pub anchors: Vec<Element>,
    pub form: Option<HtmlFormElement>,
    pub submit: Option<HtmlButtonElement>,
    pub reveal: Vec<HtmlElement>,
    pub external_links: Vec<HtmlAnchorElement>,
    pub hero_subtitle: Option<Element>,
    pub scroll_top: RefCell<Option<HtmlElement>>,
    typing_span: RefCell<Option<Element>>,
    banner: RefCell<Option<(BannerId, HtmlElement)>>,
    submit_label: RefCell<Option<String>>,
}

impl Page {
    /// Look up every node the behavior needs.
    ///
    /// # Errors
    ///
    /// Fails only when there is no window, document or body; every other
    /// node is optional.
    pub fn collect(config: &PortfolioConfig) -> Result<Self, PortfolioError> {
        let window = web_sys::window().ok_or(PortfolioError::MissingElement("window"))?;
        let document = window.document().ok_or(PortfolioError::MissingElement("document"))?;
        let body = document.body().ok_or(PortfolioError::MissingElement("body"))?;

        let form = document.get_element_by_id("contact-form").and_then(cast::<HtmlFormElement>);
        let submit = form
            .as_ref()
            .and_then(|f| query_el(f, r#"button[type="submit"]"#))
            .and_then(cast::<HtmlButtonElement>);

        Ok(Self {
            navbar: document.get_element_by_id("navbar").and_then(cast::<HtmlElement>),
            nav_menu: document.get_element_by_id("nav-menu"),
            nav_toggle: document.get_element_by_id("nav-toggle"),
            nav_links: query_all(&document, ".nav-link"),
            anchors: query_all(&document, r##".nav-link, a[href^="#"]"##),
            form,
            submit,
            reveal: query_all(&document, &config.reveal_selector)
                .into_iter()
                .filter_map(cast::<HtmlElement>)
                .collect(),
            external_links: query_all(&document, "a[target]")
                .into_iter()
                .filter_map(cast::<HtmlAnchorElement>)
                .collect(),
            hero_subtitle: query_doc(&document, ".hero-subtitle"),
            scroll_top: RefCell::new(None),
            typing_span: RefCell::new(None),
            banner: RefCell::new(None),
            submit_label: RefCell::new(None),
            window,
            document,
            body,
        })
    }

    /// Text of the inline configuration block, if the page has one.
    #[must_use]
    pub fn config_block(document: &Document) -> Option<String> {
        document.get_element_by_id(CONFIG_ELEMENT_ID).and_then(|el| el.text_content())
    }

    #[must_use]
    pub fn scroll_y(&self) -> f64 {
        self.window.scroll_y().unwrap_or(0.0)
    }

    #[must_use]
    pub fn viewport_width(&self) -> f64 {
        self.window
            .inner_width()
            .map_or(0.0, |w| w.as_f64().unwrap_or(0.0))
    }

    /// Geometry of every `section[id]`, in document order.
    #[must_use]
    pub fn sections(&self) -> Vec<Section> {
        query_all(&self.document, "section[id]")
            .into_iter()
            .filter_map(cast::<HtmlElement>)
            .map(|el| Section::new(el.id(), f64::from(el.offset_top()), f64::from(el.offset_height())))
            .collect()
    }

    /// Offset of the element an in-page href points at.
    #[must_use]
    pub fn fragment_top(&self, fragment: &str) -> Option<f64> {
        query_doc(&self.document, fragment)
            .and_then(cast::<HtmlElement>)
            .map(|el| f64::from(el.offset_top()))
    }

    /// Current values of the four contact fields.
    #[must_use]
    pub fn draft(&self) -> ContactDraft {
        let Some(form) = &self.form else {
            return ContactDraft::default();
        };
        ContactDraft {
            name: field_value(form, "name"),
            email: field_value(form, "email"),
            subject: field_value(form, "subject"),
            message: field_value(form, "message"),
        }
    }

    /// Controls of the contact form in document order, with the position of
    /// `target` among them.
    #[must_use]
    pub fn form_controls(&self, target: &Element) -> Option<(Vec<ControlKind>, usize)> {
        let form = self.form.as_ref()?;
        let target: &Node = target;
        let elements = form.elements();
        let mut kinds = Vec::new();
        let mut position = None;
        for i in 0..elements.length() {
            let Some(el) = elements.item(i) else {
                continue;
            };
            if el.is_same_node(Some(target)) {
                position = Some(kinds.len());
            }
            kinds.push(control_kind(&el));
        }
        position.map(|index| (kinds, index))
    }

    pub fn inject_keyframes(&self) -> Result<(), PortfolioError> {
        let style = self.document.create_element("style")?;
        style.set_text_content(Some(BANNER_KEYFRAMES));
        let head = self.document.head().ok_or(PortfolioError::MissingElement("head"))?;
        head.append_child(&style)?;
        Ok(())
    }

    /// Create the floating scroll-to-top button and append it to `<body>`.
    pub fn create_scroll_top(&self) -> Result<HtmlElement, PortfolioError> {
        let button = self.document.create_element("button")?.unchecked_into::<HtmlElement>();
        button.set_class_name(SCROLL_TOP_CLASS);
        button.set_inner_html(SCROLL_TOP_ICON);
        button.style().set_css_text(SCROLL_TOP_CSS);
        self.body.append_child(&button)?;
        *self.scroll_top.borrow_mut() = Some(button.clone());
        Ok(button)
    }

    /// Apply one effect. Timer and frame effects are handled by the host.
    pub fn apply(&self, effect: &Effect) -> Result<(), PortfolioError> {
        match effect {
            Effect::SetClass { target, class, enabled } => {
                if let Some(el) = self.element(target) {
                    el.class_list().toggle_with_force(class, *enabled)?;
                }
            }
            Effect::SetStyle { target, property, value } => {
                if let Some(el) = self.element(target).and_then(cast::<HtmlElement>) {
                    el.style().set_property(property, value)?;
                }
            }
            Effect::SetActiveLink { section } => self.set_active_link(section)?,
            Effect::ScrollTo { top, smooth } => {
                let options = ScrollToOptions::new();
                options.set_top(*top);
                options.set_behavior(if *smooth { ScrollBehavior::Smooth } else { ScrollBehavior::Auto });
                self.window.scroll_to_with_scroll_to_options(&options);
            }
            Effect::ShowBanner { id, message, kind } => self.show_banner(*id, message, *kind)?,
            Effect::DismissBanner(id) => {
                if let Some((current, el)) = self.banner.borrow().as_ref() {
                    if current == id {
                        el.style().set_property("animation", BANNER_EXIT_ANIMATION)?;
                    }
                }
            }
            Effect::RemoveBanner(id) => {
                let mut banner = self.banner.borrow_mut();
                if banner.as_ref().is_some_and(|(current, _)| current == id) {
                    if let Some((_, el)) = banner.take() {
                        el.remove();
                    }
                }
            }
            Effect::SetSubmitSending => {
                if let Some(submit) = &self.submit {
                    *self.submit_label.borrow_mut() = submit.text_content();
                    submit.set_inner_html(SENDING_LABEL);
                    submit.set_disabled(true);
                }
            }
            Effect::RestoreSubmit => {
                if let Some(submit) = &self.submit {
                    submit.set_text_content(self.submit_label.borrow_mut().take().as_deref());
                    submit.set_disabled(false);
                }
            }
            Effect::ResetForm => {
                if let Some(form) = &self.form {
                    form.reset();
                }
            }
            Effect::Navigate(url) => self.window.location().set_href(url)?,
            Effect::MountTypingTarget { prefix } => self.mount_typing_target(prefix)?,
            Effect::SetTypingText(text) => {
                if let Some(span) = self.typing_span.borrow().as_ref() {
                    span.set_text_content(Some(text));
                }
            }
            Effect::FocusField(index) => {
                let field = self
                    .form
                    .as_ref()
                    .and_then(|form| form.elements().item(u32::try_from(*index).unwrap_or(u32::MAX)))
                    .and_then(cast::<HtmlElement>);
                if let Some(field) = field {
                    field.focus()?;
                }
            }
            Effect::ClickSubmit => {
                if let Some(submit) = &self.submit {
                    submit.click();
                }
            }
            Effect::RequestFrame | Effect::Schedule { .. } | Effect::Cancel(_) => {}
        }
        Ok(())
    }

    fn element(&self, target: &Target) -> Option<Element> {
        match target {
            Target::NavMenu => self.nav_menu.clone(),
            Target::NavToggle => self.nav_toggle.clone(),
            Target::Navbar => self.navbar.clone().map(Into::into),
            Target::ScrollTopButton => self.scroll_top.borrow().clone().map(Into::into),
            Target::Reveal(index) => self.reveal.get(*index).cloned().map(Into::into),
            Target::ExternalLink(index) => self.external_links.get(*index).cloned().map(Into::into),
        }
    }

    fn set_active_link(&self, section: &str) -> Result<(), PortfolioError> {
        for link in &self.nav_links {
            link.class_list().remove_1(ACTIVE_CLASS)?;
        }
        if let Some(link) = query_doc(&self.document, &format!(r##"a[href="#{section}"]"##)) {
            link.class_list().add_1(ACTIVE_CLASS)?;
        }
        Ok(())
    }

    fn show_banner(&self, id: BannerId, message: &str, kind: BannerKind) -> Result<(), PortfolioError> {
        let Some(parent) = self.submit.as_ref().and_then(|s| s.parent_node()) else {
            return Err(PortfolioError::MissingElement("submit button"));
        };
        if let Some((_, previous)) = self.banner.borrow_mut().take() {
            previous.remove();
        }

        let banner = self.document.create_element("div")?.unchecked_into::<HtmlElement>();
        banner.set_class_name(&format!("form-feedback {}", kind.class()));
        banner.style().set_css_text(&banner_css(kind));
        let icon = self.document.create_element("i")?;
        icon.set_class_name(&format!("fas {}", kind.icon()));
        banner.append_child(&icon)?;
        banner.append_child(&self.document.create_text_node(&format!(" {message}")))?;
        parent.append_child(&banner)?;

        let options = ScrollIntoViewOptions::new();
        options.set_behavior(ScrollBehavior::Smooth);
        options.set_block(ScrollLogicalPosition::Nearest);
        banner.scroll_into_view_with_scroll_into_view_options(&options);

        *self.banner.borrow_mut() = Some((id, banner));
        Ok(())
    }

    fn mount_typing_target(&self, prefix: &str) -> Result<(), PortfolioError> {
        let Some(hero) = &self.hero_subtitle else {
            return Err(PortfolioError::MissingElement(".hero-subtitle"));
        };
        hero.set_text_content(Some(prefix));
        let span = self.document.create_element("span")?;
        span.set_class_name(TYPING_CLASS);
        hero.append_child(&span)?;
        *self.typing_span.borrow_mut() = Some(span);
        Ok(())
    }
}

fn control_kind(el: &Element) -> ControlKind {
    let kind = el.get_attribute("type").unwrap_or_default();
    match el.tag_name().as_str() {
        "BUTTON" if kind.is_empty() || kind == "submit" => ControlKind::Submit,
        "INPUT" if kind == "submit" => ControlKind::Submit,
        "INPUT" => ControlKind::Input,
        _ => ControlKind::Other,
    }
}

fn field_value(form: &HtmlFormElement, name: &str) -> String {
    let Some(el) = query_el(form, &format!(r#"[name="{name}"]"#)) else {
        return String::new();
    };
    if let Some(input) = el.dyn_ref::<HtmlInputElement>() {
        input.value()
    } else if let Some(area) = el.dyn_ref::<HtmlTextAreaElement>() {
        area.value()
    } else {
        String::new()
    }
}

/// Downcast a node, yielding `None` when it is some other kind of element.
pub(crate) fn cast<T: JsCast>(value: impl JsCast) -> Option<T> {
    value.dyn_into::<T>().ok()
}

fn selector_miss(selector: &str, err: &JsValue) -> Option<Element> {
    log::debug!("bad selector {selector:?}: {err:?}");
    None
}

/// `querySelector` on the document; an invalid selector counts as a miss.
pub(crate) fn query_doc(document: &Document, selector: &str) -> Option<Element> {
    document
        .query_selector(selector)
        .unwrap_or_else(|err| selector_miss(selector, &err))
}

/// `querySelector` scoped to an element.
pub(crate) fn query_el(root: &Element, selector: &str) -> Option<Element> {
    root.query_selector(selector)
        .unwrap_or_else(|err| selector_miss(selector, &err))
}

fn query_all(document: &Document, selector: &str) -> Vec<Element> {
    let list = match document.query_selector_all(selector) {
        Ok(list) => list,
        Err(err) => {
            log::debug!("bad selector {selector:?}: {err:?}");
            return Vec::new();
        }
    };
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(cast::<Element>)
        .collect()
}
