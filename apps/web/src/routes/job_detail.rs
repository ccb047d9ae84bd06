//! Job detail view. Loading a job pins its description and posting URL in
//! local storage so the tailoring and apply flows can read them without a
//! refetch.

use crate::app_lib::{storage, AppError};
use crate::components::{Alert, AlertKind, Button, Spinner};
use crate::features::jobs::{client, format_posted};
use crate::features::resume;
use crate::routes::paths;
use api_contract::{Job, TailorRequest};
use leptos::prelude::*;
use leptos_router::hooks::{use_navigate, use_params};
use leptos_router::params::Params;

#[derive(Params, PartialEq, Clone)]
struct JobParams {
    id: Option<String>,
}

#[component]
pub fn JobDetailPage() -> impl IntoView {
    let params = use_params::<JobParams>();

    let job = LocalResource::new(move || {
        let id = params
            .get()
            .ok()
            .and_then(|params| params.id)
            .unwrap_or_default();
        async move {
            let resume = storage::resume_text().unwrap_or_default();
            client::detail(&id, &resume).await
        }
    });

    // Pin the selection for the tailoring and apply flows once per load.
    Effect::new(move |_| {
        if let Some(Ok(found)) = job.get() {
            storage::set_selected_job_jd(&found.jd_text);
            if let Some(url) = &found.url {
                storage::set_selected_job_url(url);
            }
        }
    });

    view! {
        <Suspense fallback=|| {
            view! {
                <div class="flex justify-center items-center min-h-[40vh]">
                    <Spinner />
                </div>
            }
        }>
            {move || {
                job.get()
                    .map(|result| match result {
                        Ok(found) => view! { <JobDetailContent job=found /> }.into_any(),
                        Err(err) => {
                            view! { <Alert kind=AlertKind::Error message=err.user_message() /> }
                                .into_any()
                        }
                    })
            }}
        </Suspense>
    }
}

#[component]
fn JobDetailContent(job: Job) -> impl IntoView {
    let navigate = use_navigate();
    let (error, set_error) = signal::<Option<AppError>>(None);

    let tailor_action = Action::new_local(move |request: &TailorRequest| {
        let request = request.clone();
        async move { resume::client::tailor(&request).await }
    });

    let navigate_editor = navigate.clone();
    Effect::new(move |_| {
        if let Some(result) = tailor_action.value().get() {
            match result {
                Ok(tailored) => {
                    storage::set_tailored_resume_text(&tailored.tailored_resume);
                    navigate_editor(paths::RESUME_EDITOR, Default::default());
                }
                Err(err) => set_error.set(Some(err)),
            }
        }
    });

    let tailor_job = job.clone();
    let on_tailor = move |_| {
        set_error.set(None);
        tailor_action.dispatch(TailorRequest {
            resume: storage::resume_text().unwrap_or_default(),
            jd: tailor_job.jd_text.clone(),
            role: tailor_job.title.clone(),
            company: tailor_job.company.clone(),
        });
    };

    let apply_id = job.id.clone();
    let on_apply = move |_| {
        navigate(&paths::apply(&apply_id), Default::default());
    };

    let original_url = job.url.clone();
    let on_apply_original = move |_| {
        if let (Some(window), Some(url)) = (web_sys::window(), original_url.clone()) {
            let _ = window.open_with_url_and_target(&url, "_blank");
        }
    };
    let has_url = job.url.is_some();

    let match_badge = job.match_score.map(|score| {
        view! {
            <span class="inline-flex items-center rounded-full bg-emerald-100 dark:bg-emerald-900/40 px-3 py-1 text-sm font-semibold text-emerald-700 dark:text-emerald-300">
                {format!("{score:.0}% match")}
            </span>
        }
    });

    view! {
        <div class="max-w-3xl">
            <div class="flex items-start justify-between gap-4 mb-2">
                <div>
                    <h1 class="text-2xl font-bold text-gray-900 dark:text-white">{job.title.clone()}</h1>
                    <p class="text-gray-500 dark:text-gray-400">
                        {format!("{} \u{b7} {}", job.company, job.location)}
                    </p>
                </div>
                {match_badge}
            </div>
            <div class="flex flex-wrap gap-2 text-xs text-gray-500 dark:text-gray-400 mb-6">
                <Show when={
                    let job_type = job.job_type.clone();
                    move || !job_type.is_empty()
                }>
                    <span class="rounded bg-gray-100 dark:bg-gray-700 px-2 py-0.5">{job.job_type.clone()}</span>
                </Show>
                {job.salary.clone().map(|salary| view! {
                    <span class="rounded bg-gray-100 dark:bg-gray-700 px-2 py-0.5">{salary}</span>
                })}
                {job.posted.as_deref().map(|posted| view! {
                    <span class="rounded bg-gray-100 dark:bg-gray-700 px-2 py-0.5">{format_posted(posted)}</span>
                })}
            </div>

            <div class="rounded-xl border border-gray-200 dark:border-gray-700 bg-white dark:bg-gray-800 p-6 mb-6">
                <h2 class="text-lg font-semibold text-gray-900 dark:text-white mb-3">
                    "Job Description"
                </h2>
                <p class="whitespace-pre-wrap text-sm text-gray-700 dark:text-gray-300">
                    {job.jd_text.clone()}
                </p>
            </div>

            {move || {
                error
                    .get()
                    .map(|err| {
                        view! {
                            <div class="mb-4">
                                <Alert kind=AlertKind::Error message=err.user_message() />
                            </div>
                        }
                    })
            }}

            <div class="flex flex-col sm:flex-row gap-3">
                <Button disabled=tailor_action.pending() {..} on:click=on_tailor>
                    {move || {
                        if tailor_action.pending().get() {
                            "Tailoring your resume..."
                        } else {
                            "Tailor Resume for this Job"
                        }
                    }}
                </Button>
                <button
                    type="button"
                    class="px-5 py-2.5 text-sm font-medium text-purple-700 dark:text-purple-400 bg-white dark:bg-gray-800 border border-purple-300 dark:border-purple-700 rounded-lg hover:bg-purple-50 dark:hover:bg-gray-700"
                    on:click=on_apply
                >
                    "Apply Now"
                </button>
                <Show when=move || has_url>
                    <button
                        type="button"
                        class="px-5 py-2.5 text-sm font-medium text-gray-700 dark:text-gray-200 bg-white dark:bg-gray-800 border border-gray-300 dark:border-gray-600 rounded-lg hover:bg-gray-100 dark:hover:bg-gray-700"
                        on:click=on_apply_original.clone()
                    >
                        "Apply with Original Resume"
                    </button>
                </Show>
            </div>
        </div>
    }
}
