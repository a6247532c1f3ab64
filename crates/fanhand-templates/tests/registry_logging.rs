//! Registry diagnostics: fallbacks and rejected registrations are logged on
//! the `fanhand.templates` target.

use std::sync::{Arc, Mutex};

use fanhand_templates::{
    CardTemplate, CardViewModel, DEFAULT_TEMPLATE_ID, PanelShellOptions, TemplateError,
    TemplateRegistry,
};
use tracing::Level;
use tracing_subscriber::layer::SubscriberExt;

#[derive(Debug, Clone)]
struct Captured {
    level: Level,
    target: String,
    message: String,
}

#[derive(Clone, Default)]
struct Capture {
    events: Arc<Mutex<Vec<Captured>>>,
}

struct MessageVisitor(String);

impl tracing::field::Visit for MessageVisitor {
    fn record_debug(&mut self, field: &tracing::field::Field, value: &dyn std::fmt::Debug) {
        if field.name() == "message" {
            self.0 = format!("{value:?}");
        }
    }
}

impl<S: tracing::Subscriber> tracing_subscriber::Layer<S> for Capture {
    fn on_event(&self, event: &tracing::Event<'_>, _ctx: tracing_subscriber::layer::Context<'_, S>) {
        let mut visitor = MessageVisitor(String::new());
        event.record(&mut visitor);
        self.events.lock().unwrap().push(Captured {
            level: *event.metadata().level(),
            target: event.metadata().target().to_owned(),
            message: visitor.0,
        });
    }
}

fn captured<F: FnOnce()>(f: F) -> Vec<Captured> {
    let capture = Capture::default();
    let subscriber = tracing_subscriber::registry().with(capture.clone());
    tracing::subscriber::with_default(subscriber, f);
    let events = capture.events.lock().unwrap().clone();
    events
}

#[derive(Debug)]
struct Nameless;

impl CardTemplate for Nameless {
    fn id(&self) -> &str {
        ""
    }
    fn name(&self) -> &str {
        "Nameless"
    }
    fn render_card(&self, _card: &CardViewModel) -> String {
        String::new()
    }
    fn stylesheet(&self) -> String {
        String::new()
    }
}

#[test]
fn fallback_is_logged_as_warning() {
    let registry = TemplateRegistry::with_builtin();
    let events = captured(|| {
        let template = registry.resolve("retro").unwrap();
        assert_eq!(template.id(), DEFAULT_TEMPLATE_ID);
    });
    assert!(
        events
            .iter()
            .any(|e| e.level == Level::WARN && e.target == "fanhand.templates"),
        "expected a fallback warning, got {events:?}"
    );
}

#[test]
fn empty_id_is_logged_as_error() {
    let mut registry = TemplateRegistry::new();
    let events = captured(|| {
        assert_eq!(registry.register(Nameless), Err(TemplateError::EmptyId));
    });
    assert!(events.iter().any(|e| e.level == Level::ERROR
        && e.target == "fanhand.templates"
        && e.message.contains("without id")));
}

#[test]
fn exact_hit_raises_no_warnings() {
    let registry = TemplateRegistry::with_builtin();
    let events = captured(|| {
        registry.resolve("improved").unwrap();
    });
    assert!(
        events
            .iter()
            .all(|e| e.level != Level::WARN && e.level != Level::ERROR)
    );
}

#[test]
fn builtin_shells_and_stylesheets() {
    let registry = TemplateRegistry::with_builtin();
    let options = PanelShellOptions {
        drag_title: "Drag the hand",
        toggle_title: "Collapse",
        no_actor_text: "No token selected",
    };
    for id in ["default", "improved"] {
        let template = registry.resolve(id).unwrap();
        let shell = template.render_panel_shell(&options);
        assert!(shell.starts_with(r#"<div id="daggerheart-hand">"#));
        assert!(shell.contains(r#"title="Drag the hand""#));
        let css = template.stylesheet();
        assert!(css.contains("#daggerheart-hand.hidden"));
        assert!(css.contains("body.dragging-active"));
    }
    assert_ne!(
        registry.resolve("default").unwrap().stylesheet(),
        registry.resolve("improved").unwrap().stylesheet()
    );
}
