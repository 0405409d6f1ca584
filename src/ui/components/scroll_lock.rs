use dioxus::prelude::*;

/// Window property holding the body overflow from before the lock
const SAVED_OVERFLOW: &str = "__marqueeOverflow";

/// Hides body overflow, saving the previous value on the page. A second lock
/// keeps the first saved value.
pub fn lock_script() -> String {
    format!(
        r#"if (window.{key} === undefined) {{
    window.{key} = document.body.style.overflow;
}}
document.body.style.overflow = "hidden";"#,
        key = SAVED_OVERFLOW
    )
}

/// Puts back the overflow saved by [`lock_script`] and forgets it
pub fn restore_script() -> String {
    format!(
        r#"if (window.{key} !== undefined) {{
    document.body.style.overflow = window.{key};
    delete window.{key};
}}"#,
        key = SAVED_OVERFLOW
    )
}

/// Suppresses document scrolling while the calling component is mounted,
/// restoring the previous overflow style when it unmounts.
pub fn use_scroll_lock(active: bool) {
    use_hook(move || {
        if active {
            let _ = document::eval(&lock_script());
        }
    });

    use_drop(move || {
        if active {
            let _ = document::eval(&restore_script());
        }
    });
}
