use eframe::egui::{Event, InputState, Key};

use crate::action::{Action, ActionRequestQueue};

/// Derives hover transitions from raw pointer events.
///
/// Any pointer movement or button event means the pointer is inside the
/// window; `PointerGone` means it left. Repeated enter requests are absorbed
/// by the hover state machine, so forwarding every movement event is fine.
pub(crate) fn handle_pointer_events(events: &[Event], action_queue: &mut ActionRequestQueue) {
    for event in events {
        match event {
            Event::PointerMoved(_) | Event::PointerButton { .. } => {
                action_queue.request(Action::PointerEntered);
            }
            Event::PointerGone => action_queue.request(Action::PointerLeft),
            _ => {}
        }
    }
}

struct Trigger {
    key: Key,
    command: bool,
    shift: bool,
}

impl Trigger {
    const fn new(key: Key, command: bool, shift: bool) -> Self {
        Self {
            key,
            command,
            shift,
        }
    }
}

struct Shortcut {
    trigger: Trigger,
    action: Action,
}

impl Shortcut {
    const fn command(key: Key, action: Action) -> Self {
        Self {
            trigger: Trigger::new(key, true, false),
            action,
        }
    }

    fn matches(&self, input: &InputState) -> bool {
        input.modifiers.command == self.trigger.command
            && input.modifiers.shift == self.trigger.shift
            && input.key_pressed(self.trigger.key)
    }
}

const SHORTCUTS: [Shortcut; 2] = [
    Shortcut::command(Key::O, Action::PickFile),
    Shortcut::command(Key::Enter, Action::CheckConvergence),
];

pub(crate) fn handle_shortcuts(input: &InputState, action_queue: &mut ActionRequestQueue) {
    for shortcut in &SHORTCUTS {
        if shortcut.matches(input) {
            action_queue.request(shortcut.action.clone());
        }
    }
}

#[cfg(test)]
mod tests {
    use eframe::egui::{PointerButton, pos2};

    use super::*;

    #[test]
    fn pointer_movement_requests_enter() {
        let mut queue = ActionRequestQueue::default();
        handle_pointer_events(&[Event::PointerMoved(pos2(10.0, 20.0))], &mut queue);
        assert_eq!(queue.take_all(), vec![Action::PointerEntered]);
    }

    #[test]
    fn pointer_button_requests_enter() {
        let mut queue = ActionRequestQueue::default();
        let event = Event::PointerButton {
            pos: pos2(5.0, 5.0),
            button: PointerButton::Primary,
            pressed: true,
            modifiers: eframe::egui::Modifiers::default(),
        };
        handle_pointer_events(&[event], &mut queue);
        assert_eq!(queue.take_all(), vec![Action::PointerEntered]);
    }

    #[test]
    fn pointer_gone_requests_leave() {
        let mut queue = ActionRequestQueue::default();
        handle_pointer_events(&[Event::PointerGone], &mut queue);
        assert_eq!(queue.take_all(), vec![Action::PointerLeft]);
    }

    #[test]
    fn unrelated_events_are_ignored() {
        let mut queue = ActionRequestQueue::default();
        handle_pointer_events(&[Event::Text("hi".to_owned())], &mut queue);
        assert!(queue.take_all().is_empty());
    }

    #[test]
    fn move_then_gone_yields_enter_then_leave() {
        let mut queue = ActionRequestQueue::default();
        let events = [
            Event::PointerMoved(pos2(1.0, 1.0)),
            Event::PointerMoved(pos2(2.0, 2.0)),
            Event::PointerGone,
        ];
        handle_pointer_events(&events, &mut queue);
        assert_eq!(
            queue.take_all(),
            vec![
                Action::PointerEntered,
                Action::PointerEntered,
                Action::PointerLeft
            ]
        );
    }
}
