//! Page scroll suppression for open modals.

/// Something with an `overflow` style we can read and overwrite.
pub trait OverflowTarget {
    fn overflow(&self) -> String;
    fn set_overflow(&self, value: &str);
}

/// `document.body` of the current window
#[derive(Debug, Clone, Copy, Default)]
pub struct DocumentBody;

impl DocumentBody {
    fn body() -> Option<web_sys::HtmlElement> {
        web_sys::window()?.document()?.body()
    }
}

impl OverflowTarget for DocumentBody {
    fn overflow(&self) -> String {
        Self::body()
            .and_then(|b| b.style().get_property_value("overflow").ok())
            .unwrap_or_default()
    }

    fn set_overflow(&self, value: &str) {
        if let Some(body) = Self::body() {
            if let Err(e) = body.style().set_property("overflow", value) {
                log::warn!("Failed to set body overflow: {:?}", e);
            }
        }
    }
}

/// Sets `overflow: hidden` while held and puts back the exact prior value
/// on release or drop.
#[derive(Debug)]
pub struct ScrollLock<T: OverflowTarget = DocumentBody> {
    target: T,
    previous: Option<String>,
}

impl<T: OverflowTarget> ScrollLock<T> {
    pub fn acquire(target: T) -> Self {
        let previous = target.overflow();
        target.set_overflow("hidden");
        Self {
            target,
            previous: Some(previous),
        }
    }

    /// Restore now. Later calls and the drop are no-ops.
    pub fn release(&mut self) {
        if let Some(previous) = self.previous.take() {
            self.target.set_overflow(&previous);
        }
    }
}

impl<T: OverflowTarget> Drop for ScrollLock<T> {
    fn drop(&mut self) {
        self.release();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[derive(Clone, Default)]
    struct FakeStyle(Rc<RefCell<String>>);

    impl OverflowTarget for FakeStyle {
        fn overflow(&self) -> String {
            self.0.borrow().clone()
        }

        fn set_overflow(&self, value: &str) {
            *self.0.borrow_mut() = value.to_string();
        }
    }

    #[test]
    fn test_lock_hides_and_restores_on_drop() {
        let style = FakeStyle::default();
        *style.0.borrow_mut() = "auto".to_string();
        {
            let _lock = ScrollLock::acquire(style.clone());
            assert_eq!(style.overflow(), "hidden");
        }
        assert_eq!(style.overflow(), "auto");
    }

    #[test]
    fn test_restores_empty_value() {
        let style = FakeStyle::default();
        let mut lock = ScrollLock::acquire(style.clone());
        lock.release();
        assert_eq!(style.overflow(), "");
    }

    #[test]
    fn test_release_is_idempotent() {
        let style = FakeStyle::default();
        *style.0.borrow_mut() = "scroll".to_string();
        let mut lock = ScrollLock::acquire(style.clone());
        lock.release();
        *style.0.borrow_mut() = "clip".to_string();
        drop(lock);
        assert_eq!(style.overflow(), "clip");
    }

    #[test]
    fn test_nested_locks_unwind_in_order() {
        let style = FakeStyle::default();
        *style.0.borrow_mut() = "visible".to_string();
        let outer = ScrollLock::acquire(style.clone());
        let inner = ScrollLock::acquire(style.clone());
        drop(inner);
        assert_eq!(style.overflow(), "hidden");
        drop(outer);
        assert_eq!(style.overflow(), "visible");
    }
}
