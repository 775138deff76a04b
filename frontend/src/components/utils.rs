use gloo_timers::callback::Timeout;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsValue;
use yew::prelude::*;

/// Wraps a click handler so rapid repeat clicks collapse into one
/// invocation after `duration` ms of quiet; each new click cancels the
/// pending one.
pub fn debounce<F>(duration: u32, callback: F) -> Callback<MouseEvent>
where
    F: Fn() + Clone + 'static,
{
    let timeout = Rc::new(RefCell::new(None::<Timeout>));
    let timeout_clone = Rc::clone(&timeout);

    Callback::from(move |_| {
        let mut timeout_ref = timeout_clone.borrow_mut();

        if let Some(old_timeout) = timeout_ref.take() {
            old_timeout.cancel();
        }

        let inner_callback = callback.clone();
        let new_timeout = Timeout::new(duration, move || {
            inner_callback();
        });

        *timeout_ref = Some(new_timeout);
    })
}

/// Locale-formats a record's creation timestamp, "N/A" when it is absent
/// or not something the browser can parse as a date.
pub fn format_timestamp(raw: Option<&str>) -> String {
    let Some(raw) = raw else {
        return "N/A".to_string();
    };
    let date = js_sys::Date::new(&JsValue::from_str(raw));
    if date.get_time().is_nan() {
        return "N/A".to_string();
    }
    String::from(date.to_locale_string("default", &JsValue::UNDEFINED))
}

#[cfg(test)]
#[cfg(target_arch = "wasm32")]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn absent_timestamp_formats_as_na() {
        assert_eq!(format_timestamp(None), "N/A");
    }

    #[wasm_bindgen_test]
    fn unparseable_timestamp_formats_as_na() {
        assert_eq!(format_timestamp(Some("yesterday-ish")), "N/A");
    }

    #[wasm_bindgen_test]
    fn iso_timestamp_formats_to_locale_string() {
        let formatted = format_timestamp(Some("2024-10-05T12:00:00Z"));
        assert_ne!(formatted, "N/A");
        assert!(!formatted.is_empty());
    }
}
