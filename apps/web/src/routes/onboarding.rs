//! 4-step onboarding wizard. The draft lives in one signal across steps, so
//! moving backward never loses entered data. Submission sends the whole
//! draft; a failure keeps the wizard on the last step for a retry.

use crate::app_lib::{storage, AppError};
use crate::components::{Alert, AlertKind, Button, Modal, Spinner, SuggestInput};
use crate::features::{onboarding::client, resume};
use crate::routes::paths;
use api_contract::{OnboardingDraft, SuggestKind, WizardStep, EMPLOYMENT_TYPES};
use leptos::{prelude::*, task::spawn_local};
use leptos_router::hooks::use_navigate;
use wasm_bindgen::JsCast;
use web_sys::HtmlInputElement;

const GOAL_OPTIONS: [&str; 4] = [
    "Find my First Job",
    "Switch Careers",
    "Level Up in my Field",
    "Explore Opportunities",
];

const EDUCATION_OPTIONS: [&str; 4] = ["High School", "Undergraduate", "Graduate", "Bootcamp"];

const FIELD_OPTIONS: [&str; 6] = [
    "Engineering",
    "Computer Science",
    "Business",
    "Design",
    "Data Science",
    "Other",
];

#[component]
pub fn OnboardingPage() -> impl IntoView {
    let navigate = use_navigate();
    let step = RwSignal::new(WizardStep::default());
    let draft = RwSignal::new(OnboardingDraft::default());
    let (error, set_error) = signal::<Option<AppError>>(None);
    let (submitted, set_submitted) = signal(false);
    let (uploading, set_uploading) = signal(false);

    // Prefill from the last submission; `{}` before the first one decodes to
    // the default draft, so a fresh account starts blank.
    Effect::new(move |_| {
        spawn_local(async move {
            if let Ok(previous) = client::fetch().await {
                draft.set(previous);
            }
        });
    });

    let submit_action = Action::new_local(move |payload: &OnboardingDraft| {
        let payload = payload.clone();
        async move { client::submit(&payload).await }
    });

    Effect::new(move |_| {
        if let Some(result) = submit_action.value().get() {
            match result {
                Ok(_) => {
                    storage::set_onboarding_draft(&draft.get_untracked());
                    set_submitted.set(true);
                }
                Err(err) => set_error.set(Some(err)),
            }
        }
    });

    let on_next = move |_| {
        set_error.set(None);
        let current = step.get_untracked();
        if current.is_last() {
            submit_action.dispatch(draft.get_untracked());
        } else {
            step.set(current.next());
        }
    };

    let on_back = move |_| {
        set_error.set(None);
        step.set(step.get_untracked().back());
    };

    let on_file_change = move |ev: leptos::ev::Event| {
        let Some(input) = ev
            .target()
            .and_then(|target| target.dyn_into::<HtmlInputElement>().ok())
        else {
            return;
        };
        let Some(file) = input.files().and_then(|files| files.get(0)) else {
            return;
        };
        set_error.set(None);
        set_uploading.set(true);
        spawn_local(async move {
            match resume::client::upload(&file).await {
                Ok(response) => {
                    storage::set_resume_text(&response.resume_text);
                    draft.update(|d| d.resume_file_name = Some(file.name()));
                }
                Err(err) => set_error.set(Some(err)),
            }
            set_uploading.set(false);
        });
    };

    let on_modal_close = Callback::new(move |()| {
        navigate(paths::JOBS, Default::default());
    });

    let select_class = "bg-gray-50 border border-gray-300 text-gray-900 text-sm rounded-lg focus:ring-purple-500 focus:border-purple-500 block w-full p-2.5 dark:bg-gray-700 dark:border-gray-600 dark:text-white";

    view! {
        <div class="min-h-screen bg-gray-50 dark:bg-gray-950 px-4 py-10">
            <div class="mx-auto max-w-2xl">
                <h1 class="text-2xl font-bold text-gray-900 dark:text-white mb-1">
                    "Set up your job search"
                </h1>
                <p class="text-sm text-gray-500 dark:text-gray-400 mb-6">
                    {move || format!("Step {} of 4", step.get().number())}
                </p>

                <div class="rounded-xl border border-gray-200 dark:border-gray-700 bg-white dark:bg-gray-800 p-6 space-y-6">
                    <Show when=move || step.get() == WizardStep::Intro>
                        <div>
                            <h2 class="text-lg font-semibold text-gray-900 dark:text-white mb-4">
                                "What brings you to LaunchHire?"
                            </h2>
                            <div class="flex flex-wrap gap-2">
                                {GOAL_OPTIONS
                                    .into_iter()
                                    .map(|option| {
                                        view! {
                                            <PillToggle
                                                label=option
                                                selected=Signal::derive(move || {
                                                    draft.get().first_step_selections.iter().any(|s| s == option)
                                                })
                                                on_toggle=Callback::new(move |()| {
                                                    draft.update(|d| {
                                                        OnboardingDraft::toggle(&mut d.first_step_selections, option);
                                                    });
                                                })
                                            />
                                        }
                                    })
                                    .collect_view()}
                            </div>
                        </div>
                    </Show>

                    <Show when=move || step.get() == WizardStep::Goals>
                        <div class="space-y-5">
                            <h2 class="text-lg font-semibold text-gray-900 dark:text-white">
                                "Your background"
                            </h2>
                            <div>
                                <label class="block mb-2 text-sm font-medium text-gray-900 dark:text-white" for="education">
                                    "Education status"
                                </label>
                                <select
                                    id="education"
                                    class=select_class
                                    prop:value=move || draft.get().education_status
                                    on:change=move |event| {
                                        draft.update(|d| d.education_status = event_target_value(&event));
                                    }
                                >
                                    <option value="">"Select one"</option>
                                    {EDUCATION_OPTIONS
                                        .iter()
                                        .map(|option| view! { <option value=*option>{*option}</option> })
                                        .collect_view()}
                                </select>
                            </div>
                            <div>
                                <label class="block mb-2 text-sm font-medium text-gray-900 dark:text-white" for="field">
                                    "Field of study"
                                </label>
                                <select
                                    id="field"
                                    class=select_class
                                    prop:value=move || draft.get().field_of_study
                                    on:change=move |event| {
                                        draft.update(|d| d.field_of_study = event_target_value(&event));
                                    }
                                >
                                    <option value="">"Select one"</option>
                                    {FIELD_OPTIONS
                                        .iter()
                                        .map(|option| view! { <option value=*option>{*option}</option> })
                                        .collect_view()}
                                </select>
                            </div>
                            <div>
                                <label class="block mb-2 text-sm font-medium text-gray-900 dark:text-white" for="resume">
                                    "Upload your resume (PDF)"
                                </label>
                                <input
                                    id="resume"
                                    type="file"
                                    accept=".pdf"
                                    class="block w-full text-sm text-gray-900 dark:text-gray-300 file:mr-4 file:rounded-lg file:border-0 file:bg-purple-50 file:px-4 file:py-2 file:text-sm file:font-medium file:text-purple-700 hover:file:bg-purple-100"
                                    on:change=on_file_change
                                />
                                {move || uploading.get().then_some(view! { <div class="mt-3"><Spinner /></div> })}
                                {move || {
                                    draft
                                        .get()
                                        .resume_file_name
                                        .map(|name| {
                                            view! {
                                                <p class="mt-2 text-sm text-emerald-600 dark:text-emerald-400">
                                                    {format!("Uploaded: {name}")}
                                                </p>
                                            }
                                        })
                                }}
                            </div>
                        </div>
                    </Show>

                    <Show when=move || step.get() == WizardStep::Profile>
                        <div class="space-y-5">
                            <h2 class="text-lg font-semibold text-gray-900 dark:text-white">
                                "Skills and target roles"
                            </h2>
                            <div>
                                <label class="block mb-2 text-sm font-medium text-gray-900 dark:text-white">
                                    "Skills"
                                </label>
                                <SuggestInput
                                    kind=SuggestKind::Skills
                                    placeholder="Start typing a skill"
                                    on_pick=Callback::new(move |picked: String| {
                                        draft.update(|d| OnboardingDraft::toggle(&mut d.skills, &picked));
                                    })
                                />
                                <SelectedPills
                                    items=Signal::derive(move || draft.get().skills)
                                    on_remove=Callback::new(move |item: String| {
                                        draft.update(|d| OnboardingDraft::toggle(&mut d.skills, &item));
                                    })
                                />
                            </div>
                            <div>
                                <label class="block mb-2 text-sm font-medium text-gray-900 dark:text-white">
                                    "Preferred roles"
                                </label>
                                <SuggestInput
                                    kind=SuggestKind::Roles
                                    placeholder="Start typing a role"
                                    on_pick=Callback::new(move |picked: String| {
                                        draft.update(|d| OnboardingDraft::toggle(&mut d.preferred_roles, &picked));
                                    })
                                />
                                <SelectedPills
                                    items=Signal::derive(move || draft.get().preferred_roles)
                                    on_remove=Callback::new(move |item: String| {
                                        draft.update(|d| OnboardingDraft::toggle(&mut d.preferred_roles, &item));
                                    })
                                />
                            </div>
                        </div>
                    </Show>

                    <Show when=move || step.get() == WizardStep::Preferences>
                        <div class="space-y-5">
                            <h2 class="text-lg font-semibold text-gray-900 dark:text-white">
                                "Work preferences"
                            </h2>
                            <div>
                                <label class="block mb-2 text-sm font-medium text-gray-900 dark:text-white">
                                    "Employment types"
                                </label>
                                <div class="flex flex-wrap gap-2">
                                    {EMPLOYMENT_TYPES
                                        .into_iter()
                                        .map(|option| {
                                            view! {
                                                <PillToggle
                                                    label=option
                                                    selected=Signal::derive(move || {
                                                        draft.get().employment_types.iter().any(|s| s == option)
                                                    })
                                                    on_toggle=Callback::new(move |()| {
                                                        draft.update(|d| {
                                                            OnboardingDraft::toggle(&mut d.employment_types, option);
                                                        });
                                                    })
                                                />
                                            }
                                        })
                                        .collect_view()}
                                </div>
                            </div>
                            <div>
                                <label class="block mb-2 text-sm font-medium text-gray-900 dark:text-white">
                                    "Preferred cities"
                                </label>
                                <SuggestInput
                                    kind=SuggestKind::Cities
                                    placeholder="Start typing a city"
                                    on_pick=Callback::new(move |picked: String| {
                                        draft.update(|d| OnboardingDraft::toggle(&mut d.preferred_cities, &picked));
                                    })
                                />
                                <SelectedPills
                                    items=Signal::derive(move || draft.get().preferred_cities)
                                    on_remove=Callback::new(move |item: String| {
                                        draft.update(|d| OnboardingDraft::toggle(&mut d.preferred_cities, &item));
                                    })
                                />
                            </div>
                        </div>
                    </Show>

                    {move || {
                        error
                            .get()
                            .map(|err| view! { <Alert kind=AlertKind::Error message=err.user_message() /> })
                    }}

                    <div class="flex items-center justify-between pt-2">
                        <button
                            type="button"
                            class="text-sm font-medium text-gray-500 dark:text-gray-400 hover:text-gray-900 dark:hover:text-white"
                            class:invisible=move || step.get() == WizardStep::Intro
                            on:click=on_back
                        >
                            "Back"
                        </button>
                        <Button disabled=submit_action.pending() {..} on:click=on_next>
                            {move || if step.get().is_last() { "Finish" } else { "Next" }}
                        </Button>
                    </div>
                </div>
            </div>

            <Show when=move || submitted.get()>
                <Modal title="You're all set" on_close=on_modal_close>
                    "Your profile is saved. We'll use it to match you with jobs."
                </Modal>
            </Show>
        </div>
    }
}

#[component]
fn PillToggle(
    label: &'static str,
    selected: Signal<bool>,
    on_toggle: Callback<()>,
) -> impl IntoView {
    view! {
        <button
            type="button"
            class="rounded-full border px-4 py-1.5 text-sm font-medium transition-colors"
            class:border-purple-600=move || selected.get()
            class:bg-purple-600=move || selected.get()
            class:text-white=move || selected.get()
            class:border-gray-300=move || !selected.get()
            class:text-gray-700=move || !selected.get()
            class:dark:text-gray-200=move || !selected.get()
            class:dark:border-gray-600=move || !selected.get()
            on:click=move |_| on_toggle.run(())
        >
            {label}
        </button>
    }
}

#[component]
fn SelectedPills(items: Signal<Vec<String>>, on_remove: Callback<String>) -> impl IntoView {
    view! {
        <div class="mt-2 flex flex-wrap gap-2">
            <For
                each=move || items.get()
                key=|item| item.clone()
                children=move |item: String| {
                    let removed = item.clone();
                    view! {
                        <span class="inline-flex items-center gap-1 rounded-full bg-purple-100 dark:bg-purple-900/40 px-3 py-1 text-sm text-purple-700 dark:text-purple-300">
                            {item.clone()}
                            <button
                                type="button"
                                class="font-bold hover:text-purple-900 dark:hover:text-purple-100"
                                on:click=move |_| on_remove.run(removed.clone())
                            >
                                "\u{d7}"
                            </button>
                        </span>
                    }
                }
            />
        </div>
    }
}
