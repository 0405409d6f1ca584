use dioxus::prelude::*;

/// Search input with text field and search button.
/// Emits the trimmed query on Enter or on the button.
#[component]
pub fn SearchBar(on_submit: EventHandler<String>) -> Element {
    let mut draft = use_signal(String::new);

    rsx! {
        header { class: "search-header",
            div { class: "search-bar",
                input {
                    class: "search-input",
                    r#type: "text",
                    name: "query",
                    autocomplete: "off",
                    placeholder: "Search movies...",
                    onmounted: move |element| {
                        spawn(async move {
                            let _ = element.set_focus(true).await;
                        });
                    },
                    value: "{draft}",
                    oninput: move |event: FormEvent| {
                        draft.set(event.value());
                    },
                    onkeydown: move |event: KeyboardEvent| {
                        if event.key() == Key::Enter {
                            on_submit.call(submitted_query(&draft.read()));
                        }
                    },
                }
                button {
                    class: "search-button",
                    r#type: "button",
                    onclick: move |_| {
                        on_submit.call(submitted_query(&draft.read()));
                    },
                    "Search"
                }
            }
        }
    }
}

fn submitted_query(draft: &str) -> String {
    draft.trim().to_string()
}
