#![forbid(unsafe_code)]

//! The hand controller.
//!
//! [`HandController`] owns all mutable state of one hand overlay: the visible
//! cards, their drag behaviors, the panel anchor and the cached panel shell.
//! It is driven entirely by the host:
//!
//! 1. [`start`](HandController::start) once the viewport is known,
//! 2. [`handle_host_event`](HandController::handle_host_event) for lifecycle
//!    and data-change hooks, [`tick`](HandController::tick) on every frame or
//!    timer to run debounced refreshes,
//! 3. [`panel_pointer`](HandController::panel_pointer) and
//!    [`card_pointer`](HandController::card_pointer) for pointer input,
//! 4. [`frame`](HandController::frame) to read what should be on screen.
//!
//! Recovered failures never interrupt the UI. They are logged under
//! `fanhand.hand` and queued for [`take_errors`](HandController::take_errors).

use std::time::Duration;

use fanhand_core::clock::MonotonicClock;
use fanhand_core::debounce::{Debouncer, REFRESH_DEBOUNCE};
use fanhand_core::event::RawInput;
use fanhand_layout::{FanSlot, fan_layout_excluding};
use fanhand_templates::markup::{self, PanelShellOptions, format_description};
use fanhand_templates::{CardViewModel, TemplateRegistry};
use fanhand_web::{
    CardDragBehavior, DragDispatch, ElementStyle, HostCommand, PanelDragBehavior, card_style,
    panel_style, wrapper_style,
};
use tracing::{debug, error, trace, warn};

use crate::config::{HandConfig, HandConfigError};
use crate::error::HandError;
use crate::event::{EventReaction, HostEvent};
use crate::filter::visible_items;
use crate::host::{ActorProvider, HostItem, ItemActions, PanelPosition, PositionStore};
use crate::view_model::project;

/// Narrowest container the fan is laid out in, pixels.
pub const MIN_PANEL_WIDTH: f64 = 600.0;

/// What the card container currently shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelContent {
    /// Panel hidden: overlay disabled or no controlled token.
    Hidden,
    /// A token is controlled but has no actor.
    NoActor,
    /// The actor has nothing playable.
    NoItems,
    /// At least one card.
    Cards,
}

/// How a use request ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UseOutcome {
    /// The host ran the item's use action.
    Used,
    /// The item went to chat, either directly or after a failed use.
    PostedToChat,
    /// Nothing reached the host.
    Failed,
}

/// Result of [`HandController::inspect_card`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Inspection {
    SheetOpened,
    /// The host could not open a sheet; show this instead.
    Preview { title: String, body_html: String },
}

/// One card currently in the hand.
#[derive(Debug, Clone)]
pub struct HandCard {
    item: HostItem,
    view: CardViewModel,
    markup: String,
    drag: CardDragBehavior,
    slot: Option<FanSlot>,
}

impl HandCard {
    #[must_use]
    pub fn id(&self) -> &str {
        &self.item.id
    }

    /// Host data the card was built from.
    #[must_use]
    pub const fn item(&self) -> &HostItem {
        &self.item
    }

    #[must_use]
    pub const fn view(&self) -> &CardViewModel {
        &self.view
    }

    /// Rendered card element.
    #[must_use]
    pub fn markup(&self) -> &str {
        &self.markup
    }

    /// Last fan slot assigned by a layout pass.
    #[must_use]
    pub const fn slot(&self) -> Option<FanSlot> {
        self.slot
    }

    #[must_use]
    pub const fn is_dragging(&self) -> bool {
        self.drag.is_dragging()
    }

    #[must_use]
    pub const fn drag(&self) -> &CardDragBehavior {
        &self.drag
    }

    /// Inline style for the card element.
    #[must_use]
    pub fn style(&self) -> ElementStyle {
        card_style(&self.drag.visual(), self.slot.as_ref())
    }
}

/// Result of [`HandController::panel_pointer`].
#[derive(Debug, Clone, PartialEq)]
pub struct PanelPointerResult {
    pub dispatch: DragDispatch,
    /// Panel style after the input.
    pub style: ElementStyle,
    /// Anchor committed by a release.
    pub committed: Option<f64>,
}

/// Result of [`HandController::card_pointer`].
#[derive(Debug, Clone, PartialEq)]
pub struct CardPointerResult {
    pub dispatch: DragDispatch,
    /// Style of the dragged card after the input.
    pub style: ElementStyle,
    /// The card went back to the hand and the fan was re-laid out; restyle
    /// every card from [`HandController::frame`].
    pub settled: bool,
    /// Set when the release used the item.
    pub used: Option<UseOutcome>,
}

/// One card as it should appear on screen.
#[derive(Debug, Clone, PartialEq)]
pub struct CardFrame {
    pub id: String,
    pub markup: String,
    pub style: ElementStyle,
    pub dragging: bool,
}

/// Contents of the card container.
#[derive(Debug, Clone, PartialEq)]
pub enum FrameContent {
    Empty,
    /// Placeholder markup.
    Placeholder(String),
    Cards(Vec<CardFrame>),
}

/// Everything the host needs to paint the overlay.
#[derive(Debug, Clone, PartialEq)]
pub struct HandFrame {
    pub visible: bool,
    /// Cards container and background plate hidden.
    pub collapsed: bool,
    /// Bumped whenever the shell markup changes.
    pub shell_revision: u64,
    pub panel: ElementStyle,
    pub wrapper: ElementStyle,
    pub content: FrameContent,
}

#[derive(Debug, Clone)]
struct PanelShell {
    template_id: String,
    markup: String,
    stylesheet: String,
}

/// Controller of one hand overlay.
#[derive(Debug)]
pub struct HandController<A, I, P> {
    actors: A,
    actions: I,
    positions: P,
    config: HandConfig,
    templates: TemplateRegistry,
    shell: Option<PanelShell>,
    shell_revision: u64,
    panel: PanelDragBehavior,
    /// The anchor came from storage or a drag; viewport resizes keep it.
    anchor_pinned: bool,
    cards: Vec<HandCard>,
    content: PanelContent,
    current_actor_id: Option<String>,
    shown: bool,
    collapsed: bool,
    refresh_debounce: Debouncer,
    errors: Vec<HandError>,
    host_commands: Vec<HostCommand>,
}

impl<A, I, P> HandController<A, I, P>
where
    A: ActorProvider,
    I: ItemActions,
    P: PositionStore,
{
    /// Controller with the built-in templates.
    pub fn new(actors: A, actions: I, positions: P, config: HandConfig) -> Self {
        Self::with_templates(actors, actions, positions, config, TemplateRegistry::with_builtin())
    }

    /// Controller with a caller-supplied template registry.
    pub fn with_templates(
        actors: A,
        actions: I,
        positions: P,
        config: HandConfig,
        templates: TemplateRegistry,
    ) -> Self {
        let mut controller = Self {
            actors,
            actions,
            positions,
            config: HandConfig::default(),
            templates,
            shell: None,
            shell_revision: 0,
            panel: PanelDragBehavior::new(0.0),
            anchor_pinned: false,
            cards: Vec::new(),
            content: PanelContent::Hidden,
            current_actor_id: None,
            shown: true,
            collapsed: false,
            refresh_debounce: Debouncer::new(REFRESH_DEBOUNCE),
            errors: Vec::new(),
            host_commands: Vec::new(),
        };
        controller.config = controller.accept_config(config);
        controller
    }

    /// Build the shell, restore the saved anchor and run the first refresh.
    ///
    /// # Errors
    ///
    /// Returns [`HandError::MissingTemplate`] when no template can render
    /// the panel.
    pub fn start(&mut self, viewport_width: f64) -> Result<(), HandError> {
        self.set_viewport_width(viewport_width);
        self.restore_position();
        self.refresh()
    }

    // --- collaborators & state -----------------------------------------

    #[must_use]
    pub const fn config(&self) -> &HandConfig {
        &self.config
    }

    #[must_use]
    pub const fn templates(&self) -> &TemplateRegistry {
        &self.templates
    }

    #[must_use]
    pub const fn actors(&self) -> &A {
        &self.actors
    }

    pub fn actors_mut(&mut self) -> &mut A {
        &mut self.actors
    }

    #[must_use]
    pub const fn actions(&self) -> &I {
        &self.actions
    }

    pub fn actions_mut(&mut self) -> &mut I {
        &mut self.actions
    }

    #[must_use]
    pub const fn positions(&self) -> &P {
        &self.positions
    }

    pub fn positions_mut(&mut self) -> &mut P {
        &mut self.positions
    }

    #[must_use]
    pub const fn panel(&self) -> &PanelDragBehavior {
        &self.panel
    }

    /// Cards in hand order.
    #[must_use]
    pub fn cards(&self) -> &[HandCard] {
        &self.cards
    }

    #[must_use]
    pub fn card(&self, card_id: &str) -> Option<&HandCard> {
        self.cards.iter().find(|card| card.id() == card_id)
    }

    #[must_use]
    pub const fn content(&self) -> PanelContent {
        self.content
    }

    #[must_use]
    pub fn current_actor_id(&self) -> Option<&str> {
        self.current_actor_id.as_deref()
    }

    /// Panel shell markup, once built.
    #[must_use]
    pub fn shell_markup(&self) -> Option<&str> {
        self.shell.as_ref().map(|shell| shell.markup.as_str())
    }

    /// Stylesheet of the active template, once the shell is built.
    #[must_use]
    pub fn stylesheet(&self) -> Option<&str> {
        self.shell.as_ref().map(|shell| shell.stylesheet.as_str())
    }

    /// Id of the template actually in use (after fallback).
    #[must_use]
    pub fn active_template_id(&self) -> Option<&str> {
        self.shell.as_ref().map(|shell| shell.template_id.as_str())
    }

    #[must_use]
    pub const fn shell_revision(&self) -> u64 {
        self.shell_revision
    }

    #[must_use]
    pub const fn is_collapsed(&self) -> bool {
        self.collapsed
    }

    /// Whether the panel is on screen.
    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.shell.is_some() && self.shown && self.content != PanelContent::Hidden
    }

    #[must_use]
    pub const fn is_refresh_pending(&self) -> bool {
        self.refresh_debounce.is_pending()
    }

    /// When the pending debounced refresh fires.
    #[must_use]
    pub const fn refresh_deadline(&self) -> Option<Duration> {
        self.refresh_debounce.deadline()
    }

    /// Drain recovered failures.
    pub fn take_errors(&mut self) -> Vec<HandError> {
        std::mem::take(&mut self.errors)
    }

    /// Drain host commands produced outside a pointer dispatch, e.g. listener
    /// cleanup of a card that disappeared mid-drag.
    pub fn take_host_commands(&mut self) -> Vec<HostCommand> {
        std::mem::take(&mut self.host_commands)
    }

    // --- visibility -----------------------------------------------------

    pub fn show(&mut self) {
        self.shown = true;
    }

    pub fn hide(&mut self) {
        self.shown = false;
    }

    /// Flip show/hide; returns the new state.
    pub fn toggle(&mut self) -> bool {
        self.shown = !self.shown;
        self.shown
    }

    /// Collapse or expand the card container; returns whether it is now
    /// collapsed. No-op before the shell exists.
    pub fn toggle_collapsed(&mut self) -> bool {
        if self.shell.is_none() {
            return self.collapsed;
        }
        self.collapsed = !self.collapsed;
        if !self.collapsed {
            self.relayout();
        }
        debug!(target: "fanhand.hand", collapsed = self.collapsed, "panel collapse toggled");
        self.collapsed
    }

    // --- configuration --------------------------------------------------

    /// Apply new settings and react to what changed.
    ///
    /// # Errors
    ///
    /// Propagates [`refresh`](Self::refresh) errors.
    pub fn set_config(&mut self, config: HandConfig) -> Result<(), HandError> {
        let config = self.accept_config(config);
        let old = std::mem::replace(&mut self.config, config);
        let new = &self.config;

        let shell_changed = old.template != new.template || old.labels != new.labels;
        let data_changed =
            old.enabled != new.enabled || old.equipped_only != new.equipped_only;
        let geometry_changed = old.arc_angle != new.arc_angle
            || old.width_px != new.width_px
            || old.scale != new.scale;

        if shell_changed {
            self.shell = None;
        }
        if shell_changed || data_changed {
            return self.refresh();
        }
        if geometry_changed {
            self.relayout();
        }
        Ok(())
    }

    fn accept_config(&mut self, config: HandConfig) -> HandConfig {
        let problems = config.validate();
        if problems.is_empty() {
            return config;
        }
        warn!(
            target: "fanhand.hand",
            problems = %problems.join("; "),
            "configuration out of range, clamping"
        );
        let sanitized = config.sanitized();
        self.errors
            .push(HandError::Config(HandConfigError::Validation(problems)));
        sanitized
    }

    // --- panel position -------------------------------------------------

    /// Seed the anchor at the horizontal center unless a saved or dragged
    /// position pins it.
    pub fn set_viewport_width(&mut self, width: f64) {
        if self.anchor_pinned || !width.is_finite() || width <= 0.0 {
            return;
        }
        self.panel.update_position(width / 2.0);
    }

    /// Load the saved anchor. Failures leave the current anchor in place.
    pub fn restore_position(&mut self) {
        match self.positions.load_position() {
            Ok(Some(PanelPosition { left })) if left.is_finite() => {
                self.panel.update_position(left);
                self.anchor_pinned = true;
                debug!(target: "fanhand.hand", left, "panel position restored");
            }
            Ok(_) => {}
            Err(e) => {
                warn!(target: "fanhand.hand", error = %e, "could not restore panel position");
                self.errors.push(HandError::Persistence(e));
            }
        }
    }

    fn persist_position(&mut self, left: f64) {
        match self.positions.save_position(PanelPosition { left }) {
            Ok(()) => debug!(target: "fanhand.hand", left, "panel position saved"),
            Err(e) => {
                warn!(target: "fanhand.hand", left, error = %e, "could not save panel position");
                self.errors.push(HandError::Persistence(e));
            }
        }
    }

    // --- refresh --------------------------------------------------------

    /// Rebuild the hand from the actor collaborator right now. Cancels any
    /// pending debounced refresh.
    ///
    /// # Errors
    ///
    /// Returns [`HandError::MissingTemplate`] when neither the configured nor
    /// the default template is registered; nothing is rendered then.
    pub fn refresh(&mut self) -> Result<(), HandError> {
        self.refresh_debounce.cancel();
        if let Err(e) = self.ensure_shell() {
            error!(target: "fanhand.hand", error = %e, "no template available, rendering skipped");
            return Err(e);
        }

        if !self.config.enabled || !self.actors.has_controlled_token() {
            self.current_actor_id = None;
            self.replace_cards(Vec::new());
            self.content = PanelContent::Hidden;
            return Ok(());
        }
        let Some(actor) = self.actors.current_actor() else {
            self.current_actor_id = None;
            self.replace_cards(Vec::new());
            self.content = PanelContent::NoActor;
            return Ok(());
        };

        let template_id = self.active_template_id().unwrap_or_default().to_owned();
        let template = self.templates.resolve(&template_id)?;
        let mut previous = std::mem::take(&mut self.cards);
        let mut cards = Vec::new();
        for item in visible_items(&actor.items, self.config.equipped_only) {
            let view = project(item, &actor, &self.config.labels);
            let markup = TemplateRegistry::render_card_element(template, &view);
            // A card mid-drag keeps its session and slot across the rebuild.
            let carried = previous
                .iter()
                .position(|card| card.id() == item.id && card.is_dragging())
                .map(|index| previous.swap_remove(index));
            let (drag, slot) = match carried {
                Some(card) => (card.drag, card.slot),
                None => (CardDragBehavior::new(item.id.clone()), None),
            };
            cards.push(HandCard {
                item: item.clone(),
                view,
                markup,
                drag,
                slot,
            });
        }
        self.cards = previous;
        self.replace_cards(cards);

        self.content = if self.cards.is_empty() {
            PanelContent::NoItems
        } else {
            PanelContent::Cards
        };
        debug!(
            target: "fanhand.hand",
            actor_id = %actor.id,
            cards = self.cards.len(),
            template_id = %template_id,
            "hand refreshed"
        );
        self.current_actor_id = Some(actor.id);
        Ok(())
    }

    /// Schedule a debounced refresh. Triggers inside the window coalesce into
    /// one refresh that reads the data available when it runs.
    pub fn request_refresh(&mut self, now: Duration) {
        self.refresh_debounce.trigger(now);
        trace!(target: "fanhand.hand", ?now, "refresh scheduled");
    }

    /// Run the debounced refresh if its deadline has passed. Returns whether
    /// a refresh ran.
    ///
    /// # Errors
    ///
    /// Propagates [`refresh`](Self::refresh) errors.
    pub fn tick(&mut self, now: Duration) -> Result<bool, HandError> {
        let Some(coalesced) = self.refresh_debounce.poll(now) else {
            return Ok(false);
        };
        debug!(target: "fanhand.hand", coalesced, "debounced refresh firing");
        self.refresh()?;
        Ok(true)
    }

    /// [`tick`](Self::tick) at the clock's current reading.
    ///
    /// # Errors
    ///
    /// Same as [`tick`](Self::tick).
    pub fn tick_clock<C: MonotonicClock>(&mut self, clock: &C) -> Result<bool, HandError> {
        self.tick(clock.now_mono())
    }

    fn ensure_shell(&mut self) -> Result<(), HandError> {
        if self.shell.is_some() {
            return Ok(());
        }
        let template = self.templates.resolve(&self.config.template)?;
        let labels = &self.config.labels;
        let markup = template.render_panel_shell(&PanelShellOptions {
            drag_title: &labels.drag_title,
            toggle_title: &labels.toggle_title,
            no_actor_text: &labels.no_actor,
        });
        self.shell = Some(PanelShell {
            template_id: template.id().to_owned(),
            markup,
            stylesheet: template.stylesheet(),
        });
        self.shell_revision += 1;
        debug!(
            target: "fanhand.hand",
            template_id = %template.id(),
            revision = self.shell_revision,
            "panel shell built"
        );
        Ok(())
    }

    /// Swap in a new card list. Cards left over from the old one that are
    /// still being dragged are cancelled; their cleanup commands are queued.
    fn replace_cards(&mut self, cards: Vec<HandCard>) {
        for mut stale in std::mem::replace(&mut self.cards, cards) {
            if stale.is_dragging() {
                let update = stale.drag.cancel();
                self.host_commands.extend(update.dispatch.commands);
            }
        }
        self.relayout();
    }

    /// Re-run the fan layout for every card not owned by a drag session.
    pub fn relayout(&mut self) {
        let width = self.layout_width();
        let slots = fan_layout_excluding(self.cards.len(), width, self.config.arc_angle, |i| {
            self.cards[i].is_dragging()
        });
        for slot in slots {
            if let Some(card) = self.cards.get_mut(slot.index) {
                card.slot = Some(slot);
            }
        }
    }

    fn layout_width(&self) -> f64 {
        self.config.width_px.max(MIN_PANEL_WIDTH)
    }

    // --- host events ----------------------------------------------------

    /// React to a host notification.
    ///
    /// # Errors
    ///
    /// Propagates [`refresh`](Self::refresh) errors.
    pub fn handle_host_event(
        &mut self,
        event: HostEvent,
        now: Duration,
    ) -> Result<EventReaction, HandError> {
        let reaction = match event {
            HostEvent::ControlChanged => {
                self.refresh()?;
                EventReaction::Refreshed
            }
            HostEvent::ActorUpdated { actor_id } => {
                self.schedule_if_current(Some(actor_id.as_str()), now)
            }
            HostEvent::ItemChanged { parent_actor_id } => {
                self.schedule_if_current(parent_actor_id.as_deref(), now)
            }
            HostEvent::ItemDropped { actor_id, item_id } => {
                if !self.is_current_actor(actor_id.as_deref()) {
                    return Ok(EventReaction::Ignored);
                }
                let item = self
                    .actors
                    .current_actor()
                    .and_then(|actor| actor.item(&item_id).cloned());
                match item {
                    Some(item) => EventReaction::ItemUsed(self.use_item(&item)),
                    None => EventReaction::Ignored,
                }
            }
            HostEvent::ViewportResized { width } => {
                if self.anchor_pinned {
                    EventReaction::Ignored
                } else {
                    self.set_viewport_width(width);
                    EventReaction::Repositioned
                }
            }
            HostEvent::Blur => {
                let commands = self.cancel_gestures();
                if commands.is_empty() {
                    EventReaction::Ignored
                } else {
                    self.host_commands.extend(commands);
                    EventReaction::GesturesCancelled
                }
            }
        };
        trace!(target: "fanhand.hand", ?reaction, "host event handled");
        Ok(reaction)
    }

    fn is_current_actor(&self, actor_id: Option<&str>) -> bool {
        actor_id.is_some() && self.current_actor_id.as_deref() == actor_id
    }

    fn schedule_if_current(&mut self, actor_id: Option<&str>, now: Duration) -> EventReaction {
        if self.is_current_actor(actor_id) {
            self.request_refresh(now);
            EventReaction::RefreshScheduled
        } else {
            EventReaction::Ignored
        }
    }

    // --- gestures -------------------------------------------------------

    /// Feed pointer input aimed at the panel's drag plate.
    pub fn panel_pointer(&mut self, input: &RawInput) -> PanelPointerResult {
        let update = self.panel.handle(input);
        if let Some(left) = update.commit {
            self.anchor_pinned = true;
            self.persist_position(left);
        }
        PanelPointerResult {
            style: self.panel_element_style(),
            committed: update.commit,
            dispatch: update.dispatch,
        }
    }

    /// Feed pointer input aimed at a card. `None` when no card has that id.
    pub fn card_pointer(&mut self, card_id: &str, input: &RawInput) -> Option<CardPointerResult> {
        let index = self.cards.iter().position(|card| card.id() == card_id)?;
        let card = &mut self.cards[index];
        let update = card.drag.handle(input, card.slot);

        let settled = update.settled();
        if settled {
            self.relayout();
        }
        let style = self.cards[index].style();
        let used = if update.activated() {
            let item = self.cards[index].item.clone();
            Some(self.use_item(&item))
        } else {
            None
        };
        Some(CardPointerResult {
            dispatch: update.dispatch,
            style,
            settled,
            used,
        })
    }

    /// Abandon every in-flight gesture. Cancelled cards settle without
    /// being used; the panel keeps its pre-drag anchor.
    pub fn cancel_gestures(&mut self) -> Vec<HostCommand> {
        let mut commands = self.panel.cancel().dispatch.commands;
        let mut settled = false;
        for card in &mut self.cards {
            if card.is_dragging() {
                let update = card.drag.cancel();
                settled |= update.settled();
                commands.extend(update.dispatch.commands);
            }
        }
        if settled {
            self.relayout();
        }
        commands
    }

    // --- item actions ---------------------------------------------------

    /// Use a card's item as if it had been flicked.
    pub fn use_card(&mut self, card_id: &str) -> Option<UseOutcome> {
        let item = self.card(card_id)?.item.clone();
        Some(self.use_item(&item))
    }

    fn use_item(&mut self, item: &HostItem) -> UseOutcome {
        let Some(actor_id) = self.current_actor_id.clone() else {
            warn!(target: "fanhand.hand", item_id = %item.id, "no actor to use the item with");
            return UseOutcome::Failed;
        };
        if !item.is_usable() {
            return self.post_to_chat(&actor_id, item);
        }
        match self.actions.use_item(&actor_id, &item.id) {
            Ok(()) => {
                debug!(target: "fanhand.hand", item_id = %item.id, "item used");
                UseOutcome::Used
            }
            Err(source) => {
                warn!(
                    target: "fanhand.hand",
                    item_id = %item.id,
                    error = %source,
                    "item use failed, posting to chat"
                );
                self.errors.push(HandError::ActionInvocation {
                    item_id: item.id.clone(),
                    source,
                });
                self.post_to_chat(&actor_id, item)
            }
        }
    }

    fn post_to_chat(&mut self, actor_id: &str, item: &HostItem) -> UseOutcome {
        match self.actions.post_to_chat(actor_id, &item.id) {
            Ok(()) => {
                debug!(target: "fanhand.hand", item_id = %item.id, "item posted to chat");
                UseOutcome::PostedToChat
            }
            Err(source) => {
                warn!(
                    target: "fanhand.hand",
                    item_id = %item.id,
                    error = %source,
                    "posting item to chat failed"
                );
                self.errors.push(HandError::ActionInvocation {
                    item_id: item.id.clone(),
                    source,
                });
                UseOutcome::Failed
            }
        }
    }

    /// Open the item sheet of a card, or describe a preview when the host
    /// cannot. `None` when no card has that id.
    pub fn inspect_card(&mut self, card_id: &str) -> Option<Inspection> {
        let item = self.card(card_id)?.item.clone();
        let actor_id = self.current_actor_id.clone().unwrap_or_default();
        match self.actions.open_sheet(&actor_id, &item.id) {
            Ok(()) => Some(Inspection::SheetOpened),
            Err(e) => {
                debug!(
                    target: "fanhand.hand",
                    item_id = %item.id,
                    error = %e,
                    "sheet unavailable, using preview"
                );
                let title = if item.name.is_empty() {
                    self.config.labels.untitled_item.clone()
                } else {
                    item.name
                };
                Some(Inspection::Preview {
                    title,
                    body_html: format!(
                        r#"<div class="dh-item-sheet-preview">{}</div>"#,
                        format_description(&item.description_html)
                    ),
                })
            }
        }
    }

    // --- output ---------------------------------------------------------

    fn panel_element_style(&self) -> ElementStyle {
        panel_style(&self.panel.visual()).with_bottom(self.config.bottom_px)
    }

    /// Current state as styles and markup.
    #[must_use]
    pub fn frame(&self) -> HandFrame {
        let labels = &self.config.labels;
        let content = match self.content {
            PanelContent::Hidden => FrameContent::Empty,
            PanelContent::NoActor => {
                FrameContent::Placeholder(markup::placeholder(&labels.no_actor))
            }
            PanelContent::NoItems => {
                FrameContent::Placeholder(markup::placeholder(&labels.no_items))
            }
            PanelContent::Cards => FrameContent::Cards(
                self.cards
                    .iter()
                    .map(|card| CardFrame {
                        id: card.id().to_owned(),
                        markup: card.markup.clone(),
                        style: card.style(),
                        dragging: card.is_dragging(),
                    })
                    .collect(),
            ),
        };
        HandFrame {
            visible: self.is_visible(),
            collapsed: self.collapsed,
            shell_revision: self.shell_revision,
            panel: self.panel_element_style(),
            wrapper: wrapper_style(self.config.scale, self.config.width_px, MIN_PANEL_WIDTH),
            content,
        }
    }
}
