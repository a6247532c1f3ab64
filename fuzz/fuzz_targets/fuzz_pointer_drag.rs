#![no_main]

use arbitrary::Arbitrary;
use fanhand_core::{MouseButton, Point, RawInput};
use fanhand_web::{CardDragBehavior, HostCommand, PanelDragBehavior};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
enum Step {
    MouseDown { button: u16, x: i16, y: i16 },
    MouseMove { x: i16, y: i16 },
    MouseUp { button: u16, x: i16, y: i16 },
    TouchStart(Vec<(i16, i16)>),
    TouchMove(Vec<(i16, i16)>),
    TouchEnd(Vec<(i16, i16)>),
    TouchCancel,
    Cancel,
}

fn point(x: i16, y: i16) -> Point {
    Point::new(f64::from(x), f64::from(y))
}

fn points(raw: &[(i16, i16)]) -> Vec<Point> {
    raw.iter().take(4).map(|&(x, y)| point(x, y)).collect()
}

fn to_input(step: &Step) -> Option<RawInput> {
    Some(match *step {
        Step::MouseDown { button, x, y } => RawInput::MouseDown {
            button: MouseButton::from_dom(button),
            position: point(x, y),
        },
        Step::MouseMove { x, y } => RawInput::mouse_move(f64::from(x), f64::from(y)),
        Step::MouseUp { button, x, y } => RawInput::MouseUp {
            button: MouseButton::from_dom(button),
            position: point(x, y),
        },
        Step::TouchStart(ref t) => RawInput::TouchStart { touches: points(t) },
        Step::TouchMove(ref t) => RawInput::TouchMove { touches: points(t) },
        Step::TouchEnd(ref t) => RawInput::TouchEnd { changed: points(t) },
        Step::TouchCancel => RawInput::TouchCancel,
        Step::Cancel => return None,
    })
}

/// Net listener count: +1 per add, -1 per remove.
fn listener_balance(commands: &[HostCommand]) -> i32 {
    commands
        .iter()
        .map(|command| match command {
            HostCommand::AddDocumentListener(_) => 1,
            HostCommand::RemoveDocumentListener(_) => -1,
            _ => 0,
        })
        .sum()
}

fuzz_target!(|steps: Vec<Step>| {
    let mut panel = PanelDragBehavior::new(400.0);
    let mut card = CardDragBehavior::new("card");
    let mut panel_listeners = 0i32;
    let mut card_listeners = 0i32;

    for step in steps.iter().take(256) {
        let anchor_before = panel.anchor_left();
        let (panel_update, card_update) = match to_input(step) {
            Some(input) => (panel.handle(&input), card.handle(&input, None)),
            None => (panel.cancel(), card.cancel()),
        };

        panel_listeners += listener_balance(&panel_update.dispatch.commands);
        card_listeners += listener_balance(&card_update.dispatch.commands);

        // Listeners are attached exactly while a session is active.
        let expected = |active: bool| if active { 4 } else { 0 };
        assert_eq!(panel_listeners, expected(panel.is_dragging()));
        assert_eq!(card_listeners, expected(card.is_dragging()));
        assert_eq!(panel.controller().listeners_attached(), panel.is_dragging());

        // Only a release moves the anchor, and it stays finite.
        match panel_update.commit {
            Some(left) => {
                assert!(left.is_finite());
                assert_eq!(panel.anchor_left(), left);
            }
            None => assert_eq!(panel.anchor_left(), anchor_before),
        }

        // Activation implies settling.
        if card_update.activated() {
            assert!(card_update.settled());
        }
    }
});
