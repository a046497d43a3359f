use std::{
    cell::{Cell, RefCell},
    rc::Rc,
};

use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Interaction {
    Focus,
    Unfocus,
}

/// Shared handle tracking the focus of one field.
///
/// The host owns it across frames and hands a clone to the field each
/// render. Clones observe the same state.
#[derive(Debug, Clone, Default)]
pub struct InteractionSource {
    inner: Rc<InteractionState>,
}

#[derive(Debug, Default)]
struct InteractionState {
    focused: Cell<bool>,
    log: RefCell<Vec<Interaction>>,
}

impl InteractionSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn focused() -> Self {
        let source = Self::new();
        source.focus();
        source
    }

    pub fn is_focused(&self) -> bool {
        self.inner.focused.get()
    }

    pub fn focus(&self) {
        if !self.inner.focused.replace(true) {
            debug!("field focused");
            self.inner.log.borrow_mut().push(Interaction::Focus);
        }
    }

    pub fn blur(&self) {
        if self.inner.focused.replace(false) {
            debug!("field unfocused");
            self.inner.log.borrow_mut().push(Interaction::Unfocus);
        }
    }

    pub fn interactions(&self) -> Vec<Interaction> {
        self.inner.log.borrow().clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clones_share_focus_and_log() {
        let source = InteractionSource::new();
        let handle = source.clone();
        handle.focus();
        handle.focus();
        source.blur();
        assert!(!handle.is_focused());
        assert_eq!(
            source.interactions(),
            vec![Interaction::Focus, Interaction::Unfocus]
        );
        assert!(Rc::ptr_eq(&source.inner, &handle.inner));
    }
}
