//! A group of event listeners acquired together and released together.
//!
//! Dropping the group detaches every listener it holds, so a page that keeps
//! its group in the effect destructor cannot leak handlers past unmount.

use std::fmt;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Event, EventTarget};

use crate::motion::MotionError;

/// Somewhere listeners can be attached to and detached from.
pub trait ListenerHost {
    type Callback;
    type Handle;

    fn listen(&self, event: &'static str, callback: Self::Callback) -> Result<Self::Handle, MotionError>;
    fn unlisten(&self, handle: Self::Handle);
}

pub struct ListenerGroup<H: ListenerHost> {
    host: H,
    handles: Vec<H::Handle>,
}

impl<H: ListenerHost> ListenerGroup<H> {
    pub fn new(host: H) -> Self {
        Self { host, handles: Vec::new() }
    }

    pub fn listen(&mut self, event: &'static str, callback: H::Callback) -> Result<(), MotionError> {
        let handle = self.host.listen(event, callback)?;
        self.handles.push(handle);
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.handles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handles.is_empty()
    }

    /// Detach everything now. Dropping the group does the same.
    pub fn release(&mut self) {
        for handle in self.handles.drain(..) {
            self.host.unlisten(handle);
        }
    }
}

impl<H: ListenerHost> Drop for ListenerGroup<H> {
    fn drop(&mut self) {
        self.release();
    }
}

impl<H: ListenerHost> fmt::Debug for ListenerGroup<H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ListenerGroup")
            .field("listeners", &self.handles.len())
            .finish()
    }
}

/// Listeners on a DOM event target, usually the window.
pub struct DomHost {
    target: EventTarget,
}

impl DomHost {
    pub fn new(target: impl Into<EventTarget>) -> Self {
        Self { target: target.into() }
    }
}

pub struct DomListener {
    event: &'static str,
    closure: Closure<dyn FnMut(Event)>,
}

impl ListenerHost for DomHost {
    type Callback = Box<dyn FnMut(Event)>;
    type Handle = DomListener;

    fn listen(&self, event: &'static str, callback: Self::Callback) -> Result<Self::Handle, MotionError> {
        let closure = Closure::wrap(callback);
        self.target
            .add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
            .map_err(|err| MotionError::Listen {
                event,
                reason: format!("{:?}", err),
            })?;
        Ok(DomListener { event, closure })
    }

    fn unlisten(&self, handle: Self::Handle) {
        if self
            .target
            .remove_event_listener_with_callback(handle.event, handle.closure.as_ref().unchecked_ref())
            .is_err()
        {
            log::warn!("failed to remove `{}` listener", handle.event);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    /// Records attached listeners by event name.
    #[derive(Clone, Default)]
    struct CountingHost {
        attached: Rc<RefCell<Vec<&'static str>>>,
        refuse: Option<&'static str>,
    }

    impl ListenerHost for CountingHost {
        type Callback = Box<dyn Fn()>;
        type Handle = &'static str;

        fn listen(&self, event: &'static str, _callback: Self::Callback) -> Result<Self::Handle, MotionError> {
            if self.refuse == Some(event) {
                return Err(MotionError::Listen { event, reason: "refused".into() });
            }
            self.attached.borrow_mut().push(event);
            Ok(event)
        }

        fn unlisten(&self, handle: Self::Handle) {
            let mut attached = self.attached.borrow_mut();
            if let Some(index) = attached.iter().position(|event| *event == handle) {
                attached.remove(index);
            }
        }
    }

    #[test]
    fn dropping_the_group_detaches_everything() {
        let host = CountingHost::default();
        let attached = host.attached.clone();
        {
            let mut group = ListenerGroup::new(host);
            for event in ["scroll", "resize", "pointermove"] {
                group.listen(event, Box::new(|| ())).unwrap();
            }
            assert_eq!(group.len(), 3);
            assert_eq!(attached.borrow().len(), 3);
        }
        assert!(attached.borrow().is_empty());
    }

    #[test]
    fn release_is_idempotent() {
        let host = CountingHost::default();
        let attached = host.attached.clone();
        let mut group = ListenerGroup::new(host);
        group.listen("scroll", Box::new(|| ())).unwrap();
        group.release();
        group.release();
        assert!(group.is_empty());
        assert!(attached.borrow().is_empty());
        drop(group);
        assert!(attached.borrow().is_empty());
    }

    #[test]
    fn failed_attach_keeps_earlier_listeners_revocable() {
        let host = CountingHost {
            refuse: Some("pointermove"),
            ..CountingHost::default()
        };
        let attached = host.attached.clone();
        let mut group = ListenerGroup::new(host);
        group.listen("scroll", Box::new(|| ())).unwrap();
        let err = group.listen("pointermove", Box::new(|| ())).unwrap_err();
        assert!(matches!(err, MotionError::Listen { event: "pointermove", .. }));
        assert_eq!(group.len(), 1);
        drop(group);
        assert!(attached.borrow().is_empty());
    }
}
