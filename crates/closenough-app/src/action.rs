use std::mem;

use crate::state::ModalKind;

/// Everything the UI or input handling can ask the app to do.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Action {
    Greet,
    PickFile,
    CheckConvergence,
    PointerEntered,
    PointerLeft,
    OpenModal(ModalKind),
    CloseModal,
    ConfirmQuit,
}

/// Actions requested during a frame, drained by the action handler.
#[derive(Debug, Default)]
pub(crate) struct ActionRequestQueue {
    actions: Vec<Action>,
}

impl ActionRequestQueue {
    pub(crate) fn request(&mut self, action: Action) {
        self.actions.push(action);
    }

    pub(crate) fn take_all(&mut self) -> Vec<Action> {
        mem::take(&mut self.actions)
    }
}

#[cfg(test)]
mod tests {
    use super::{Action, ActionRequestQueue};

    #[test]
    fn take_all_returns_actions_and_clears_queue() {
        let mut queue = ActionRequestQueue::default();
        queue.request(Action::Greet);
        queue.request(Action::CheckConvergence);

        let drained = queue.take_all();
        assert_eq!(drained.len(), 2);
        assert!(matches!(drained[0], Action::Greet));
        assert!(matches!(drained[1], Action::CheckConvergence));
        assert!(queue.take_all().is_empty());
    }
}
