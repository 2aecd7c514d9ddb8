//! Host glue: window scroll subscription and `<html>` locale attributes.
//!
//! Only the browser exposes a window scroll signal; native builds get inert
//! stand-ins so the hooks compile everywhere.

#[cfg(target_arch = "wasm32")]
mod host {
    use wasm_bindgen::closure::Closure;
    use wasm_bindgen::JsCast;

    /// Window `scroll` listener, removed on `detach()` or drop.
    pub struct ScrollSubscription {
        window: web_sys::Window,
        callback: Closure<dyn FnMut(web_sys::Event)>,
        attached: bool,
    }

    impl ScrollSubscription {
        pub fn attach(mut on_offset: impl FnMut(f64) + 'static) -> Option<Self> {
            let window = web_sys::window()?;
            let reader = window.clone();
            let callback = Closure::<dyn FnMut(web_sys::Event)>::new(move |_evt: web_sys::Event| {
                on_offset(reader.scroll_y().unwrap_or(0.0));
            });
            window
                .add_event_listener_with_callback("scroll", callback.as_ref().unchecked_ref())
                .ok()?;
            Some(Self {
                window,
                callback,
                attached: true,
            })
        }

        /// Current offset, used to seed the flag on mount.
        pub fn current_offset() -> f64 {
            web_sys::window()
                .and_then(|w| w.scroll_y().ok())
                .unwrap_or(0.0)
        }

        pub fn detach(&mut self) {
            if !self.attached {
                return;
            }
            let _ = self.window.remove_event_listener_with_callback(
                "scroll",
                self.callback.as_ref().unchecked_ref(),
            );
            self.attached = false;
        }
    }

    impl Drop for ScrollSubscription {
        fn drop(&mut self) {
            self.detach();
        }
    }

    pub fn apply_document_locale(lang: &str, dir: &str) {
        let Some(root) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.document_element())
        else {
            return;
        };
        let _ = root.set_attribute("lang", lang);
        let _ = root.set_attribute("dir", dir);
    }
}

#[cfg(not(target_arch = "wasm32"))]
mod host {
    pub struct ScrollSubscription {
        _private: (),
    }

    impl ScrollSubscription {
        pub fn attach(_on_offset: impl FnMut(f64) + 'static) -> Option<Self> {
            None
        }

        pub fn current_offset() -> f64 {
            0.0
        }

        pub fn detach(&mut self) {}
    }

    pub fn apply_document_locale(_lang: &str, _dir: &str) {}
}

pub use host::{apply_document_locale, ScrollSubscription};

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;

    #[test]
    fn native_builds_have_no_scroll_source() {
        assert!(ScrollSubscription::attach(|_| {}).is_none());
        assert_eq!(ScrollSubscription::current_offset(), 0.0);
    }
}
