//! Side navigation for the signed-in workspace.
//!
//! Organized by flow:
//! 1. Jobs (Recommended Jobs)
//! 2. Tools (AI Resume, Interview Practice, Cover Letter)

use crate::app_lib::GIT_COMMIT_HASH;
use crate::features::auth::state::use_session;
use crate::routes::paths;
use leptos::prelude::*;
use leptos_router::{components::A, hooks::use_location, hooks::use_navigate};

#[component]
pub fn Sidebar() -> impl IntoView {
    let session = use_session();
    let location = use_location();
    let pathname = move || location.pathname.get();
    let navigate = use_navigate();

    let display_name = move || {
        session
            .full_name
            .get()
            .unwrap_or_else(|| "Job Seeker".to_string())
    };

    view! {
        <aside class="w-64 flex-shrink-0 hidden md:flex flex-col border-r border-gray-200 dark:border-gray-800 bg-white dark:bg-gray-900 overflow-y-auto">
            <div class="px-6 py-5 border-b border-gray-100 dark:border-gray-800">
                <A href=paths::JOBS {..} attr:class="text-xl font-bold text-purple-700 dark:text-purple-400">
                    "LaunchHire"
                </A>
            </div>
            <nav class="flex-1 px-4 py-6 space-y-8">
                // --- Section: Jobs ---
                <div>
                    <h3 class="px-2 text-xs font-semibold text-gray-500 dark:text-gray-400 uppercase tracking-wider">
                        "Jobs"
                    </h3>
                    <div class="mt-2 space-y-1">
                        <SidebarLink
                            target=paths::JOBS
                            icon="work"
                            label="Recommended Jobs"
                            active=move || {
                                let path = pathname();
                                path == paths::JOBS
                                    || path.starts_with("/job/")
                                    || path.starts_with("/apply/")
                            }
                        />
                    </div>
                </div>

                // --- Section: Tools ---
                <div>
                    <h3 class="px-2 text-xs font-semibold text-gray-500 dark:text-gray-400 uppercase tracking-wider">
                        "Tools"
                    </h3>
                    <div class="mt-2 space-y-1">
                        <SidebarLink
                            target=paths::AI_RESUME
                            icon="description"
                            label="AI Resume"
                            active=move || {
                                let path = pathname();
                                path == paths::AI_RESUME || path == paths::RESUME_EDITOR
                            }
                        />
                        <SidebarLink
                            target=paths::INTERVIEW
                            icon="record_voice_over"
                            label="AI Interview Practice"
                            active=move || pathname() == paths::INTERVIEW
                        />
                        <SidebarLink
                            target=paths::COVER_LETTER
                            icon="mail"
                            label="Cover Letter"
                            active=move || pathname() == paths::COVER_LETTER
                        />
                    </div>
                </div>
            </nav>

            // User / Logout / Build Info
            <div class="p-4 border-t border-gray-100 dark:border-gray-800 space-y-3">
                <p class="px-2 text-sm font-medium text-gray-700 dark:text-gray-200 truncate">
                    {display_name}
                </p>
                <button
                    type="button"
                    class="w-full text-left px-2 py-2 text-sm font-medium text-gray-600 dark:text-gray-300 rounded-md hover:bg-gray-50 dark:hover:bg-gray-800 hover:text-gray-900 dark:hover:text-white"
                    on:click=move |_| {
                        session.clear_session();
                        navigate(paths::LOGIN, Default::default());
                    }
                >
                    "Logout"
                </button>
                <p class="text-[10px] text-gray-400 font-mono text-center uppercase tracking-tighter">
                    {format!("LaunchHire {}", &GIT_COMMIT_HASH[..GIT_COMMIT_HASH.len().min(7)])}
                </p>
            </div>
        </aside>
    }
}

#[component]
fn SidebarLink<F>(
    target: &'static str,
    icon: &'static str,
    label: &'static str,
    active: F,
) -> impl IntoView
where
    F: Fn() -> bool + Clone + Send + Sync + 'static,
{
    let active_1 = active.clone();
    let active_2 = active.clone();
    let active_3 = active.clone();
    let active_4 = active.clone();
    let active_5 = active.clone();
    let active_6 = active.clone();
    let active_7 = active.clone();
    let active_8 = active.clone();
    let active_9 = active.clone();
    let active_10 = active.clone();
    let active_11 = active.clone();
    let active_12 = active.clone();
    let active_13 = active.clone();
    let active_14 = active.clone();

    view! {
        <A
            href=move || target.to_string()
            {..}
            attr:class="group flex items-center px-2 py-2 text-sm font-medium rounded-md transition-colors"
            class:text-purple-600=move || active_1()
            class:bg-purple-50=move || active_2()
            class:dark:bg-purple-900=move || active_3()
            class:dark:text-purple-400=move || active_4()
            class:text-gray-600=move || !active_5()
            class:dark:text-gray-300=move || !active_6()
            class:hover:bg-gray-50=move || !active_7()
            class:dark:hover:bg-gray-800=move || !active_8()
            class:hover:text-gray-900=move || !active_9()
            class:dark:hover:text-white=move || !active_10()
        >
            <span
                class="material-symbols-outlined mr-3 text-xl transition-colors"
                class:text-purple-600=move || active_11()
                class:dark:text-purple-400=move || active_12()
                class:text-gray-400=move || !active_13()
                class:group-hover:text-gray-900=move || !active_14()
                class:dark:group-hover:text-white=move || {
                    let active = active.clone();
                    !active()
                }
            >
                {icon}
            </span>
            {label}
        </A>
    }
}
