use std::cell::RefCell;
use crate::event::{SketchEvent, EventHandler};

/// A simple event bus for broadcasting sketch events to registered handlers
pub struct EventBus {
    handlers: RefCell<Vec<Box<dyn EventHandler>>>,
}

impl Clone for EventBus {
    fn clone(&self) -> Self {
        // When cloning, create a new empty event bus
        Self::new()
    }
}

impl std::fmt::Debug for EventBus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventBus")
            .field("handlers", &format!("<{} handlers>", self.handlers.borrow().len()))
            .finish()
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}

impl EventBus {
    /// Creates a new event bus
    pub fn new() -> Self {
        Self {
            handlers: RefCell::new(Vec::new()),
        }
    }

    /// Subscribe a handler to receive events
    pub fn subscribe(&self, handler: Box<dyn EventHandler>) {
        self.handlers.borrow_mut().push(handler);
    }

    pub fn handler_count(&self) -> usize {
        self.handlers.borrow().len()
    }

    /// Emit an event to all registered handlers, in subscription order
    pub fn emit(&self, event: SketchEvent) {
        for handler in &mut *self.handlers.borrow_mut() {
            handler.handle_event(&event);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::rc::Rc;

    struct Recorder(Rc<RefCell<Vec<SketchEvent>>>);

    impl EventHandler for Recorder {
        fn handle_event(&mut self, event: &SketchEvent) {
            self.0.borrow_mut().push(event.clone());
        }
    }

    #[test]
    fn test_emit_reaches_every_handler() {
        let bus = EventBus::new();
        let first = Rc::new(RefCell::new(Vec::new()));
        let second = Rc::new(RefCell::new(Vec::new()));
        bus.subscribe(Box::new(Recorder(first.clone())));
        bus.subscribe(Box::new(Recorder(second.clone())));

        bus.emit(SketchEvent::BoardReset);

        assert_eq!(*first.borrow(), vec![SketchEvent::BoardReset]);
        assert_eq!(*second.borrow(), vec![SketchEvent::BoardReset]);
    }

    #[test]
    fn test_clone_drops_handlers() {
        let bus = EventBus::new();
        bus.subscribe(Box::new(Recorder(Rc::default())));
        assert_eq!(bus.clone().handler_count(), 0);
    }
}
