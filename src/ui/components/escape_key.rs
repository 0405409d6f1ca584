use dioxus::prelude::*;
use tracing::{debug, warn};

/// Document-wide keydown listener, forwarding the key name back to Rust.
/// Replaces any listener left by a previous overlay.
const LISTEN_SCRIPT: &str = r#"
if (window.__marqueeKeydown) {
    document.removeEventListener("keydown", window.__marqueeKeydown);
}
window.__marqueeKeydown = (event) => dioxus.send(event.key);
document.addEventListener("keydown", window.__marqueeKeydown);
"#;

const UNLISTEN_SCRIPT: &str = r#"
if (window.__marqueeKeydown) {
    document.removeEventListener("keydown", window.__marqueeKeydown);
    delete window.__marqueeKeydown;
}
"#;

/// Key names that dismiss an overlay ("Esc" is the legacy spelling)
pub fn is_dismiss_key(key: &str) -> bool {
    matches!(key, "Escape" | "Esc")
}

/// Calls `on_escape` for every Escape press anywhere in the document while
/// the calling component is mounted, wherever focus is.
pub fn use_escape_key(active: bool, on_escape: EventHandler<()>) {
    use_hook(move || {
        if !active {
            return;
        }
        spawn(async move {
            let mut listener = document::eval(LISTEN_SCRIPT);
            loop {
                match listener.recv::<String>().await {
                    Ok(key) if is_dismiss_key(&key) => {
                        debug!("Escape pressed, dismissing overlay");
                        on_escape.call(());
                    }
                    Ok(_) => {}
                    Err(e) => {
                        warn!("Keydown listener stopped: {:?}", e);
                        break;
                    }
                }
            }
        });
    });

    use_drop(move || {
        if active {
            let _ = document::eval(UNLISTEN_SCRIPT);
        }
    });
}
