//! Stage event listeners
//!
//! Listeners are registered per event kind and get back a handle that removes
//! them again. Dispatch iterates over a snapshot of ids, so listeners may add
//! or remove listeners (including themselves) while being called.

use super::Stage;
use super::input::InputEvent;
use crate::surface::Surface;

/// Which events a listener receives
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    Tick,
    MouseMove,
    MouseDown,
    MouseUp,
    KeyDown,
    KeyUp,
}

/// Event delivered to listeners
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum StageEvent {
    /// One animation frame; `dt` in seconds
    Tick { dt: f32, fps: f32 },
    Input(InputEvent),
}

impl StageEvent {
    pub fn kind(&self) -> EventKind {
        match self {
            StageEvent::Tick { .. } => EventKind::Tick,
            StageEvent::Input(InputEvent::MouseMove { .. }) => EventKind::MouseMove,
            StageEvent::Input(InputEvent::MouseDown { .. }) => EventKind::MouseDown,
            StageEvent::Input(InputEvent::MouseUp { .. }) => EventKind::MouseUp,
            StageEvent::Input(InputEvent::KeyDown { .. }) => EventKind::KeyDown,
            StageEvent::Input(InputEvent::KeyUp { .. }) => EventKind::KeyUp,
        }
    }
}

/// Returned by [`Stage::on`]; pass to [`Stage::off`] to unsubscribe
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerHandle(u64);

pub type Listener<S> = Box<dyn FnMut(&mut Stage<S>, &StageEvent)>;

struct Entry<S: Surface> {
    id: u64,
    kind: EventKind,
    /// `None` while the callback is running
    callback: Option<Listener<S>>,
}

pub(crate) struct Listeners<S: Surface> {
    next_id: u64,
    entries: Vec<Entry<S>>,
}

impl<S: Surface> Default for Listeners<S> {
    fn default() -> Self {
        Self {
            next_id: 0,
            entries: Vec::new(),
        }
    }
}

impl<S: Surface> Listeners<S> {
    pub fn add(&mut self, kind: EventKind, callback: Listener<S>) -> ListenerHandle {
        let id = self.next_id;
        self.next_id += 1;
        self.entries.push(Entry {
            id,
            kind,
            callback: Some(callback),
        });
        ListenerHandle(id)
    }

    pub fn remove(&mut self, handle: ListenerHandle) -> bool {
        let before = self.entries.len();
        self.entries.retain(|e| e.id != handle.0);
        self.entries.len() != before
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Ids registered for `kind`, in registration order
    pub fn snapshot(&self, kind: EventKind) -> Vec<u64> {
        self.entries
            .iter()
            .filter(|e| e.kind == kind)
            .map(|e| e.id)
            .collect()
    }

    pub fn take(&mut self, id: u64) -> Option<Listener<S>> {
        self.entries
            .iter_mut()
            .find(|e| e.id == id)
            .and_then(|e| e.callback.take())
    }

    /// Put a callback back unless it was removed while running
    pub fn restore(&mut self, id: u64, callback: Listener<S>) {
        if let Some(entry) = self.entries.iter_mut().find(|e| e.id == id) {
            entry.callback = Some(callback);
        }
    }
}

impl<S: Surface> Stage<S> {
    /// Subscribe to events of `kind`
    pub fn on<F>(&mut self, kind: EventKind, callback: F) -> ListenerHandle
    where
        F: FnMut(&mut Stage<S>, &StageEvent) + 'static,
    {
        self.listeners.add(kind, Box::new(callback))
    }

    /// Subscribe to ticks; the callback gets the frame's delta time in seconds
    pub fn on_tick<F>(&mut self, mut callback: F) -> ListenerHandle
    where
        F: FnMut(&mut Stage<S>, f32) + 'static,
    {
        self.on(EventKind::Tick, move |stage, event| {
            if let StageEvent::Tick { dt, .. } = *event {
                callback(stage, dt);
            }
        })
    }

    /// Unsubscribe; returns false if the handle was already removed
    pub fn off(&mut self, handle: ListenerHandle) -> bool {
        self.listeners.remove(handle)
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    pub(crate) fn dispatch(&mut self, event: StageEvent) {
        for id in self.listeners.snapshot(event.kind()) {
            // A listener that is already running (nested dispatch) is skipped
            let Some(mut callback) = self.listeners.take(id) else {
                continue;
            };
            callback(self, &event);
            self.listeners.restore(id, callback);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::StageOptions;
    use crate::surface::RecordingSurface;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn stage() -> Stage<RecordingSurface> {
        Stage::new(RecordingSurface::new(100.0, 100.0), StageOptions::default())
    }

    #[test]
    fn test_listeners_receive_matching_kind_only() {
        let mut stage = stage();
        let seen = Rc::new(RefCell::new(Vec::new()));

        let log = seen.clone();
        stage.on(EventKind::KeyDown, move |_, ev| log.borrow_mut().push(*ev));

        stage.handle_input(InputEvent::KeyDown { code: 65 });
        stage.handle_input(InputEvent::KeyUp { code: 65 });
        stage.tick(0.0);

        assert_eq!(
            *seen.borrow(),
            vec![StageEvent::Input(InputEvent::KeyDown { code: 65 })]
        );
    }

    #[test]
    fn test_off_stops_delivery() {
        let mut stage = stage();
        let count = Rc::new(RefCell::new(0));

        let c = count.clone();
        let handle = stage.on_tick(move |_, _| *c.borrow_mut() += 1);
        stage.tick(0.0);
        assert!(stage.off(handle));
        assert!(!stage.off(handle));
        stage.tick(16.0);

        assert_eq!(*count.borrow(), 1);
        assert_eq!(stage.listener_count(), 0);
    }

    #[test]
    fn test_listener_can_remove_itself_while_running() {
        let mut stage = stage();
        let count = Rc::new(RefCell::new(0));
        let handle: Rc<RefCell<Option<ListenerHandle>>> = Rc::new(RefCell::new(None));

        let c = count.clone();
        let h = handle.clone();
        let registered = stage.on_tick(move |stage, _| {
            *c.borrow_mut() += 1;
            if let Some(handle) = h.borrow_mut().take() {
                stage.off(handle);
            }
        });
        *handle.borrow_mut() = Some(registered);

        stage.tick(0.0);
        stage.tick(16.0);
        assert_eq!(*count.borrow(), 1);
    }

    #[test]
    fn test_listener_added_during_dispatch_waits_for_next_event() {
        let mut stage = stage();
        let count = Rc::new(RefCell::new(0));

        let c = count.clone();
        stage.on_tick(move |stage, _| {
            let inner = c.clone();
            stage.on_tick(move |_, _| *inner.borrow_mut() += 1);
        });

        stage.tick(0.0);
        assert_eq!(*count.borrow(), 0);
        stage.tick(16.0);
        assert_eq!(*count.borrow(), 1);
    }
}
