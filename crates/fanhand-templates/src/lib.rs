#![forbid(unsafe_code)]

//! Card rendering for fanhand.
//!
//! Card data ([`CardViewModel`]) is decoupled from its visuals
//! ([`CardTemplate`]). Templates are plain values registered into a
//! [`TemplateRegistry`]; the hand controller asks the registry for the active
//! one and falls back to [`DEFAULT_TEMPLATE_ID`] when the configured id is
//! unknown.
//!
//! # Example
//!
//! ```
//! use fanhand_templates::{CardViewModel, TemplateRegistry};
//!
//! let registry = TemplateRegistry::with_builtin();
//! let template = registry.resolve("improved").unwrap();
//! let card = CardViewModel {
//!     id: "abc".into(),
//!     name: "Torch".into(),
//!     item_type: "loot".into(),
//!     ..CardViewModel::default()
//! };
//! let html = TemplateRegistry::render_card_element(template, &card);
//! assert!(html.starts_with(r#"<div class="dh-card" data-item-id="abc""#));
//! ```

pub mod card;
pub mod default_template;
pub mod improved_template;
pub mod markup;
pub mod registry;
pub mod styles;

pub use card::{CardViewModel, DamageInfo, FALLBACK_IMAGE};
pub use default_template::{DEFAULT_ASSET_ROOT, DefaultTemplate};
pub use improved_template::ImprovedTemplate;
pub use markup::{PanelShellOptions, STYLE_ELEMENT_ID, humanize_key};
pub use registry::{CardTemplate, DEFAULT_TEMPLATE_ID, TemplateError, TemplateRegistry};
