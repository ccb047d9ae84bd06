//! Typeahead input backed by the backend suggestion vocabulary.

use crate::features::onboarding::client;
use api_contract::SuggestKind;
use leptos::{prelude::*, task::spawn_local};

/// Text input that fetches matching options as the user types. Picking an
/// option fires `on_pick` and resets the field; free text is never submitted
/// on its own.
#[component]
pub fn SuggestInput(
    kind: SuggestKind,
    placeholder: &'static str,
    on_pick: Callback<String>,
) -> impl IntoView {
    let (query, set_query) = signal(String::new());
    let options = RwSignal::new(Vec::<String>::new());

    let on_input = move |ev| {
        let value = event_target_value(&ev);
        set_query.set(value.clone());
        if value.trim().is_empty() {
            options.set(Vec::new());
            return;
        }
        spawn_local(async move {
            // Lookup failures degrade to an empty dropdown; typing is never blocked.
            match client::suggest(kind, &value).await {
                Ok(found) => options.set(found),
                Err(_) => options.set(Vec::new()),
            }
        });
    };

    view! {
        <div class="relative">
            <input
                type="text"
                class="w-full rounded-lg border border-gray-300 dark:border-gray-600 bg-white dark:bg-gray-700 px-3 py-2 text-sm text-gray-900 dark:text-white focus:ring-purple-500 focus:border-purple-500"
                placeholder=placeholder
                prop:value=move || query.get()
                on:input=on_input
            />
            <Show when=move || !options.get().is_empty()>
                <ul class="absolute z-10 mt-1 w-full rounded-lg border border-gray-200 dark:border-gray-700 bg-white dark:bg-gray-800 shadow-lg max-h-48 overflow-y-auto">
                    <For
                        each=move || options.get()
                        key=|option| option.clone()
                        children=move |option: String| {
                            let picked = option.clone();
                            view! {
                                <li>
                                    <button
                                        type="button"
                                        class="w-full text-left px-3 py-2 text-sm text-gray-700 dark:text-gray-200 hover:bg-purple-50 dark:hover:bg-gray-700"
                                        on:click=move |_| {
                                            on_pick.run(picked.clone());
                                            set_query.set(String::new());
                                            options.set(Vec::new());
                                        }
                                    >
                                        {option.clone()}
                                    </button>
                                </li>
                            }
                        }
                    />
                </ul>
            </Show>
        </div>
    }
}
