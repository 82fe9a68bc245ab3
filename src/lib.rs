//! Client-side behavior for the portfolio site.
//!
//! Compiled to WebAssembly and attached to a static page whose markup and
//! styling live elsewhere. The crate owns navigation (mobile menu, anchor
//! scrolling, active-link tracking), the contact form workflow and a few
//! page animations.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`app`] | Page core routing events to the controllers |
//! | [`nav`] | Navigation controller |
//! | [`form`] | Contact form validation and simulated send |
//! | [`feedback`] | Single transient banner under the form |
//! | [`animation`] | Entrance reveals and the scroll-to-top button |
//! | [`typing`] | Hero subtitle typing loop |
//! | [`keys`] | Enter-to-advance and external link press feedback |
//! | [`effect`] | Commands the controllers hand to the host |
//! | [`config`] | Page content settings |
//! | [`consts`] | Timing and geometry constants |
//! | `dom` | Browser host (`hydrate` feature only) |
//!
//! Everything except `dom` is plain Rust and runs under `cargo test`.

pub mod animation;
pub mod app;
pub mod config;
pub mod consts;
pub mod effect;
pub mod error;
pub mod feedback;
pub mod form;
pub mod keys;
pub mod nav;
pub mod typing;

#[cfg(feature = "hydrate")]
pub mod dom;

#[cfg(test)]
mod test_support;

/// WASM entry point: wire the page once the module is instantiated.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if let Err(err) = console_log::init_with_level(log::Level::Info) {
        web_sys::console::warn_1(&format!("logger already initialized: {err}").into());
    }
    dom::boot();
}
