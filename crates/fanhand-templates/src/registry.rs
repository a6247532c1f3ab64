#![forbid(unsafe_code)]

//! Template registry.
//!
//! Templates are registered explicitly (see [`TemplateRegistry::with_builtin`])
//! and are immutable afterwards. Lookups by an unknown id fall back to
//! [`DEFAULT_TEMPLATE_ID`]; only a missing default is an error.

use std::collections::BTreeMap;
use std::fmt;

use tracing::{debug, error, warn};

use crate::card::CardViewModel;
use crate::default_template::DefaultTemplate;
use crate::improved_template::ImprovedTemplate;
use crate::markup::{self, PanelShellOptions};

/// Id every lookup falls back to.
pub const DEFAULT_TEMPLATE_ID: &str = "default";

/// A visual strategy for the panel and its cards.
pub trait CardTemplate: fmt::Debug {
    /// Unique, non-empty identifier.
    fn id(&self) -> &str;

    /// Display name offered in template choices.
    fn name(&self) -> &str;

    /// Markup of the panel shell.
    fn render_panel_shell(&self, options: &PanelShellOptions<'_>) -> String {
        markup::panel_shell(options)
    }

    /// Inner markup of one card. The registry wraps it in the card element.
    fn render_card(&self, card: &CardViewModel) -> String;

    /// Stylesheet text injected while this template is active.
    fn stylesheet(&self) -> String;
}

/// Errors raised by [`TemplateRegistry`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TemplateError {
    /// A template without an id was offered for registration.
    EmptyId,
    /// The id carries leading or trailing whitespace.
    PaddedId { id: String },
    /// Neither the requested template nor the default is registered.
    MissingTemplate { requested: String },
}

impl fmt::Display for TemplateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyId => write!(f, "cannot register a template without an id"),
            Self::PaddedId { id } => write!(f, "template id {id:?} has surrounding whitespace"),
            Self::MissingTemplate { requested } => write!(
                f,
                "template {requested:?} not found and no {DEFAULT_TEMPLATE_ID:?} fallback registered"
            ),
        }
    }
}

impl std::error::Error for TemplateError {}

/// Id-keyed collection of [`CardTemplate`]s.
#[derive(Debug, Default)]
pub struct TemplateRegistry {
    templates: BTreeMap<String, Box<dyn CardTemplate>>,
}

impl TemplateRegistry {
    /// An empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A registry holding the `default` and `improved` templates.
    #[must_use]
    pub fn with_builtin() -> Self {
        let mut registry = Self::new();
        let default = registry.register(DefaultTemplate::default());
        let improved = registry.register(ImprovedTemplate::default());
        debug_assert!(default.is_ok() && improved.is_ok(), "built-in template ids are valid");
        registry
    }

    /// Register a template, replacing any previous one with the same id.
    ///
    /// # Errors
    ///
    /// Returns [`TemplateError::EmptyId`] (and logs it) when the id is empty
    /// and [`TemplateError::PaddedId`] when it is not already trimmed.
    pub fn register<T: CardTemplate + 'static>(&mut self, template: T) -> Result<(), TemplateError> {
        self.register_boxed(Box::new(template))
    }

    /// Boxed variant of [`register`](Self::register).
    ///
    /// # Errors
    ///
    /// Returns [`TemplateError::EmptyId`] or [`TemplateError::PaddedId`].
    pub fn register_boxed(&mut self, template: Box<dyn CardTemplate>) -> Result<(), TemplateError> {
        let id = template.id().trim().to_owned();
        if id.is_empty() {
            error!(target: "fanhand.templates", template = ?template, "cannot register template without id");
            return Err(TemplateError::EmptyId);
        }
        if id != template.id() {
            error!(target: "fanhand.templates", template_id = ?template.id(), "template id is not trimmed");
            return Err(TemplateError::PaddedId {
                id: template.id().to_owned(),
            });
        }
        if self.templates.insert(id.clone(), template).is_some() {
            debug!(target: "fanhand.templates", template_id = %id, "replaced template");
        } else {
            debug!(target: "fanhand.templates", template_id = %id, "registered template");
        }
        Ok(())
    }

    /// Exact lookup.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&dyn CardTemplate> {
        self.templates.get(id).map(|template| &**template)
    }

    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.templates.contains_key(id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.templates.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }

    /// Id → display name, ordered by id.
    #[must_use]
    pub fn choices(&self) -> BTreeMap<String, String> {
        self.templates
            .iter()
            .map(|(id, template)| (id.clone(), template.name().to_owned()))
            .collect()
    }

    /// Lookup with fallback to [`DEFAULT_TEMPLATE_ID`].
    ///
    /// # Errors
    ///
    /// Returns [`TemplateError::MissingTemplate`] (and logs it) when neither
    /// `id` nor the default is registered.
    pub fn resolve(&self, id: &str) -> Result<&dyn CardTemplate, TemplateError> {
        if let Some(template) = self.get(id) {
            return Ok(template);
        }
        if let Some(template) = self.get(DEFAULT_TEMPLATE_ID) {
            warn!(
                target: "fanhand.templates",
                template_id = %id,
                fallback = DEFAULT_TEMPLATE_ID,
                "unknown template, using fallback"
            );
            return Ok(template);
        }
        error!(target: "fanhand.templates", template_id = %id, "no template available");
        Err(TemplateError::MissingTemplate {
            requested: id.to_owned(),
        })
    }

    /// Render a card with `template` and wrap it in the draggable element.
    #[must_use]
    pub fn render_card_element(template: &dyn CardTemplate, card: &CardViewModel) -> String {
        markup::card_element(card, &template.render_card(card))
    }
}
