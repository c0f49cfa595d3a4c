//! Keyboard shortcuts of the viewer.

use tracing::{debug, warn};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Key {
    ArrowLeft,
    ArrowRight,
    Escape,
    Other,
}

impl Key {
    /// Maps a DOM `KeyboardEvent.key` value.
    pub fn from_key_name(name: &str) -> Key {
        match name {
            "ArrowLeft" => Key::ArrowLeft,
            "ArrowRight" => Key::ArrowRight,
            "Escape" | "Esc" => Key::Escape,
            _ => Key::Other,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ViewerCommand {
    PrevPhoto,
    NextPhoto,
    Close,
}

impl ViewerCommand {
    pub fn for_key(key: Key) -> Option<ViewerCommand> {
        match key {
            Key::ArrowLeft => Some(ViewerCommand::PrevPhoto),
            Key::ArrowRight => Some(ViewerCommand::NextPhoto),
            Key::Escape => Some(ViewerCommand::Close),
            Key::Other => None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

/// Stand-in for the document-level key listener list.
#[derive(Default)]
pub struct KeyListenerRegistry {
    listeners: Vec<ListenerId>,
    next_id: u64,
}

impl KeyListenerRegistry {
    pub fn attach(&mut self) -> ListenerId {
        self.next_id += 1;
        let id = ListenerId(self.next_id);
        self.listeners.push(id);
        debug!("Attached key listener {:?}", id);
        id
    }

    /// Returns false if the listener was not attached.
    pub fn detach(&mut self, id: ListenerId) -> bool {
        match self.listeners.iter().position(|l| *l == id) {
            Some(index) => {
                self.listeners.remove(index);
                debug!("Detached key listener {:?}", id);
                true
            }
            None => {
                warn!("Tried to detach unknown key listener {:?}", id);
                false
            }
        }
    }

    pub fn active_count(&self) -> usize {
        self.listeners.len()
    }

    /// The command a key press triggers, if anybody is listening.
    pub fn dispatch(&self, key: Key) -> Option<ViewerCommand> {
        if self.listeners.is_empty() {
            return None;
        }
        ViewerCommand::for_key(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_dom_key_names() {
        assert_eq!(Key::from_key_name("ArrowLeft"), Key::ArrowLeft);
        assert_eq!(Key::from_key_name("ArrowRight"), Key::ArrowRight);
        assert_eq!(Key::from_key_name("Escape"), Key::Escape);
        assert_eq!(Key::from_key_name("a"), Key::Other);
    }

    #[test]
    fn dispatches_only_while_attached() {
        let mut registry = KeyListenerRegistry::default();
        assert_eq!(registry.dispatch(Key::ArrowRight), None);

        let id = registry.attach();
        assert_eq!(registry.dispatch(Key::ArrowRight), Some(ViewerCommand::NextPhoto));
        assert_eq!(registry.dispatch(Key::ArrowLeft), Some(ViewerCommand::PrevPhoto));
        assert_eq!(registry.dispatch(Key::Escape), Some(ViewerCommand::Close));
        assert_eq!(registry.dispatch(Key::Other), None);

        assert!(registry.detach(id));
        assert_eq!(registry.dispatch(Key::ArrowRight), None);
    }

    #[test]
    fn detaching_twice_is_harmless() {
        let mut registry = KeyListenerRegistry::default();
        let id = registry.attach();
        assert!(registry.detach(id));
        assert!(!registry.detach(id));
        assert_eq!(registry.active_count(), 0);
    }
}
