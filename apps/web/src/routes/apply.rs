//! Guided apply flow for one job: tailor the résumé, review and edit the
//! result, export it, then apply. Tailoring replaces the working text
//! outright each time; repeating it never accumulates edits.

use crate::app_lib::{storage, AppError};
use crate::components::{Alert, AlertKind, Button, Spinner};
use crate::features::{jobs, resume};
use crate::routes::paths;
use api_contract::{
    AutoApplyRequest, DownloadRequest, ExportFormat, Job, TailorRequest, TailorState,
};
use leptos::{prelude::*, task::spawn_local};
use leptos_router::hooks::use_params;
use leptos_router::params::Params;

#[derive(Params, PartialEq, Clone)]
struct ApplyParams {
    id: Option<String>,
}

#[component]
pub fn ApplyPage() -> impl IntoView {
    let params = use_params::<ApplyParams>();

    let job = LocalResource::new(move || {
        let id = params
            .get()
            .ok()
            .and_then(|params| params.id)
            .unwrap_or_default();
        async move {
            let resume = storage::resume_text().unwrap_or_default();
            jobs::client::detail(&id, &resume).await
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
                        Ok(found) => view! { <ApplyContent job=found /> }.into_any(),
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
fn ApplyContent(job: Job) -> impl IntoView {
    let (error, set_error) = signal::<Option<AppError>>(None);
    let (notice, set_notice) = signal::<Option<String>>(None);
    let tailor_state = RwSignal::new(TailorState::default());
    // Working copy shown in the editor. Starts from the stored résumé and is
    // replaced wholesale when tailoring succeeds.
    let (working_text, set_working_text) =
        signal(storage::resume_text().unwrap_or_default());
    let (downloading, set_downloading) = signal(false);

    let tailor_action = Action::new_local(move |request: &TailorRequest| {
        let request = request.clone();
        async move { resume::client::tailor(&request).await }
    });

    Effect::new(move |_| {
        if let Some(result) = tailor_action.value().get() {
            match result {
                Ok(tailored) => {
                    tailor_state.update(|state| state.apply(&tailored));
                    set_working_text.set(tailored.tailored_resume.clone());
                    storage::set_tailored_resume_text(&tailored.tailored_resume);
                }
                Err(err) => set_error.set(Some(err)),
            }
        }
    });

    let tailor_job = job.clone();
    let on_tailor = move |_| {
        set_error.set(None);
        set_notice.set(None);
        tailor_action.dispatch(TailorRequest {
            resume: storage::resume_text().unwrap_or_default(),
            jd: tailor_job.jd_text.clone(),
            role: tailor_job.title.clone(),
            company: tailor_job.company.clone(),
        });
    };

    let apply_action = Action::new_local(move |request: &AutoApplyRequest| {
        let request = request.clone();
        async move { jobs::client::auto_apply(&request).await }
    });

    let apply_url = job.url.clone();
    Effect::new(move |_| {
        if let Some(result) = apply_action.value().get() {
            match result {
                Ok(_) => {
                    set_notice.set(Some("Application submitted.".to_string()));
                    if let (Some(window), Some(url)) = (web_sys::window(), apply_url.clone()) {
                        let _ = window.open_with_url_and_target(&url, "_blank");
                    }
                }
                Err(err) => set_error.set(Some(err)),
            }
        }
    });

    let apply_job = job.clone();
    let on_apply = move |_| {
        set_error.set(None);
        set_notice.set(None);
        apply_action.dispatch(AutoApplyRequest {
            resume: working_text.get_untracked(),
            job_url: apply_job.url.clone().unwrap_or_default(),
            job_title: apply_job.title.clone(),
            company: apply_job.company.clone(),
        });
    };

    let download = move |format: ExportFormat| {
        set_error.set(None);
        set_downloading.set(true);
        let request = DownloadRequest {
            resume_text: working_text.get_untracked(),
            format,
            file_name: "Tailored_Resume".to_string(),
        };
        spawn_local(async move {
            match resume::client::download(&request).await {
                Ok(bytes) => {
                    if let Err(err) = resume::download::save_bytes(&bytes, format, "Tailored_Resume") {
                        set_error.set(Some(err));
                    }
                }
                Err(err) => set_error.set(Some(err)),
            }
            set_downloading.set(false);
        });
    };

    let scores = move || {
        let state = tailor_state.get();
        match (state.original_match, state.tailored_match) {
            (Some(original), Some(tailored)) => Some(view! {
                <div class="flex gap-4 text-sm">
                    <span class="text-gray-500 dark:text-gray-400">
                        {format!("Original match: {original:.0}%")}
                    </span>
                    <span class="font-semibold text-emerald-600 dark:text-emerald-400">
                        {format!("Tailored match: {tailored:.0}%")}
                    </span>
                </div>
            }),
            _ => None,
        }
    };

    view! {
        <div class="max-w-3xl">
            <h1 class="text-2xl font-bold text-gray-900 dark:text-white mb-1">
                {format!("Apply to {}", job.title)}
            </h1>
            <p class="text-gray-500 dark:text-gray-400 mb-6">{job.company.clone()}</p>

            <div class="rounded-xl border border-gray-200 dark:border-gray-700 bg-white dark:bg-gray-800 p-6 space-y-4">
                <div class="flex items-center justify-between">
                    <h2 class="text-lg font-semibold text-gray-900 dark:text-white">
                        "Your Resume"
                    </h2>
                    {scores}
                </div>
                <textarea
                    rows="16"
                    class="w-full rounded-lg border border-gray-300 dark:border-gray-600 bg-gray-50 dark:bg-gray-700 p-3 text-sm font-mono text-gray-900 dark:text-white focus:ring-purple-500 focus:border-purple-500"
                    prop:value=move || working_text.get()
                    on:input=move |event| set_working_text.set(event_target_value(&event))
                ></textarea>

                {move || {
                    error
                        .get()
                        .map(|err| view! { <Alert kind=AlertKind::Error message=err.user_message() /> })
                }}
                {move || {
                    notice
                        .get()
                        .map(|message| view! { <Alert kind=AlertKind::Success message=message /> })
                }}
                {move || {
                    (tailor_action.pending().get() || apply_action.pending().get() || downloading.get())
                        .then_some(view! { <Spinner /> })
                }}

                <div class="flex flex-wrap gap-3">
                    <Button disabled=tailor_action.pending() {..} on:click=on_tailor>
                        "Tailor for this Job"
                    </Button>
                    <button
                        type="button"
                        class="px-5 py-2.5 text-sm font-medium text-gray-700 dark:text-gray-200 bg-white dark:bg-gray-800 border border-gray-300 dark:border-gray-600 rounded-lg hover:bg-gray-100 dark:hover:bg-gray-700"
                        on:click=move |_| download(ExportFormat::Pdf)
                    >
                        "Download PDF"
                    </button>
                    <button
                        type="button"
                        class="px-5 py-2.5 text-sm font-medium text-gray-700 dark:text-gray-200 bg-white dark:bg-gray-800 border border-gray-300 dark:border-gray-600 rounded-lg hover:bg-gray-100 dark:hover:bg-gray-700"
                        on:click=move |_| download(ExportFormat::Docx)
                    >
                        "Download DOCX"
                    </button>
                    <Button disabled=apply_action.pending() {..} on:click=on_apply>
                        "Submit Application"
                    </Button>
                </div>
            </div>

            <p class="mt-4 text-sm">
                <a
                    href=paths::JOBS
                    class="text-purple-600 dark:text-purple-400 hover:underline"
                >
                    "Back to recommended jobs"
                </a>
            </p>
        </div>
    }
}
