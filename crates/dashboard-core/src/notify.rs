//! Change listener shared by the controllers.

use std::cell::RefCell;

pub(crate) struct Listener<T> {
    callback: RefCell<Option<Box<dyn Fn(&T)>>>,
}

impl<T> Default for Listener<T> {
    fn default() -> Self {
        Self { callback: RefCell::new(None) }
    }
}

impl<T> Listener<T> {
    pub(crate) fn set(&self, callback: impl Fn(&T) + 'static) {
        *self.callback.borrow_mut() = Some(Box::new(callback));
    }

    pub(crate) fn notify(&self, value: &T) {
        if let Some(callback) = self.callback.borrow().as_ref() {
            callback(value);
        }
    }
}
