//! Centered modal overlay used for confirmation moments.

use leptos::prelude::*;

/// Renders children in a centered card over a dimmed backdrop. The caller
/// owns visibility; the dismiss button fires `on_close`.
#[component]
pub fn Modal(
    title: &'static str,
    on_close: Callback<()>,
    children: Children,
) -> impl IntoView {
    view! {
        <div class="fixed inset-0 z-50 flex items-center justify-center bg-gray-900/50 px-4">
            <div class="w-full max-w-md rounded-xl bg-white dark:bg-gray-800 p-6 shadow-xl border border-gray-200 dark:border-gray-700">
                <h2 class="text-xl font-bold text-gray-900 dark:text-white mb-3">{title}</h2>
                <div class="text-sm text-gray-600 dark:text-gray-300 mb-6">{children()}</div>
                <div class="flex justify-end">
                    <button
                        type="button"
                        class="px-5 py-2.5 text-sm font-medium text-white bg-purple-700 rounded-lg hover:bg-purple-800"
                        on:click=move |_| on_close.run(())
                    >
                        "Continue"
                    </button>
                </div>
            </div>
        </div>
    }
}
