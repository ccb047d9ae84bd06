//! Standalone résumé tailoring workspace. Edits to the base résumé persist
//! as the canonical stored text; tailoring writes a separate tailored copy
//! that the editor page picks up.

use crate::app_lib::{storage, AppError};
use crate::components::{Alert, AlertKind, Button, Spinner};
use crate::features::resume;
use crate::routes::paths;
use api_contract::{DownloadRequest, ExportFormat, MatchRequest, MatchResult, TailorRequest, TailorState};
use leptos::{prelude::*, task::spawn_local};
use leptos_router::components::A;

#[component]
pub fn AiResumePage() -> impl IntoView {
    let (resume_text, set_resume_text) = signal(storage::resume_text().unwrap_or_default());
    let (jd_text, set_jd_text) = signal(storage::selected_job_jd().unwrap_or_default());
    let (error, set_error) = signal::<Option<AppError>>(None);
    let tailor_state = RwSignal::new(TailorState::default());
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
                    storage::set_tailored_resume_text(&tailored.tailored_resume);
                }
                Err(err) => set_error.set(Some(err)),
            }
        }
    });

    let on_tailor = move |_| {
        set_error.set(None);
        tailor_action.dispatch(TailorRequest {
            resume: resume_text.get_untracked(),
            jd: jd_text.get_untracked(),
            role: "Generic".to_string(),
            company: "Unknown".to_string(),
        });
    };

    let (match_result, set_match_result) = signal::<Option<MatchResult>>(None);
    let match_action = Action::new_local(move |request: &MatchRequest| {
        let request = request.clone();
        async move { resume::client::match_score(&request).await }
    });

    Effect::new(move |_| {
        if let Some(result) = match_action.value().get() {
            match result {
                Ok(scored) => set_match_result.set(Some(scored)),
                Err(err) => set_error.set(Some(err)),
            }
        }
    });

    let on_match = move |_| {
        set_error.set(None);
        match_action.dispatch(MatchRequest {
            resume: resume_text.get_untracked(),
            jd: jd_text.get_untracked(),
        });
    };

    let download = move |format: ExportFormat| {
        let text = tailor_state
            .get_untracked()
            .tailored_resume
            .unwrap_or_else(|| resume_text.get_untracked());
        set_error.set(None);
        set_downloading.set(true);
        let request = DownloadRequest {
            resume_text: text,
            format,
            file_name: "AI_Resume".to_string(),
        };
        spawn_local(async move {
            match resume::client::download(&request).await {
                Ok(bytes) => {
                    if let Err(err) = resume::download::save_bytes(&bytes, format, "AI_Resume") {
                        set_error.set(Some(err));
                    }
                }
                Err(err) => set_error.set(Some(err)),
            }
            set_downloading.set(false);
        });
    };

    let textarea_class = "w-full rounded-lg border border-gray-300 dark:border-gray-600 bg-gray-50 dark:bg-gray-700 p-3 text-sm font-mono text-gray-900 dark:text-white focus:ring-purple-500 focus:border-purple-500";

    view! {
        <div class="max-w-5xl">
            <div class="flex items-center justify-between mb-6">
                <h1 class="text-2xl font-bold text-gray-900 dark:text-white">"AI Resume"</h1>
                <A
                    href=paths::RESUME_EDITOR
                    {..}
                    class="text-sm font-medium text-purple-600 dark:text-purple-400 hover:underline"
                >
                    "Open in editor"
                </A>
            </div>

            <div class="grid grid-cols-1 lg:grid-cols-2 gap-6">
                <div class="rounded-xl border border-gray-200 dark:border-gray-700 bg-white dark:bg-gray-800 p-6 space-y-4">
                    <div>
                        <label class="block mb-2 text-sm font-medium text-gray-900 dark:text-white" for="resume-text">
                            "Your resume"
                        </label>
                        <textarea
                            id="resume-text"
                            rows="12"
                            class=textarea_class
                            prop:value=move || resume_text.get()
                            on:input=move |event| {
                                let value = event_target_value(&event);
                                storage::set_resume_text(&value);
                                set_resume_text.set(value);
                            }
                        ></textarea>
                    </div>
                    <div>
                        <label class="block mb-2 text-sm font-medium text-gray-900 dark:text-white" for="jd-text">
                            "Job description"
                        </label>
                        <textarea
                            id="jd-text"
                            rows="8"
                            class=textarea_class
                            placeholder="Paste a job description to tailor against"
                            prop:value=move || jd_text.get()
                            on:input=move |event| set_jd_text.set(event_target_value(&event))
                        ></textarea>
                    </div>
                    <div class="flex flex-wrap gap-3">
                        <Button disabled=tailor_action.pending() {..} on:click=on_tailor>
                            "Tailor Resume"
                        </Button>
                        <button
                            type="button"
                            class="px-5 py-2.5 text-sm font-medium text-gray-700 dark:text-gray-200 bg-white dark:bg-gray-800 border border-gray-300 dark:border-gray-600 rounded-lg hover:bg-gray-100 dark:hover:bg-gray-700"
                            disabled=move || match_action.pending().get()
                            on:click=on_match
                        >
                            "Check Match Score"
                        </button>
                    </div>
                    {move || {
                        (tailor_action.pending().get() || match_action.pending().get() || downloading.get())
                            .then_some(view! { <Spinner /> })
                    }}
                    {move || {
                        match_result
                            .get()
                            .map(|scored| {
                                let mut parts = Vec::new();
                                if let Some(ats) = scored.ats_score {
                                    parts.push(format!("ATS score: {ats:.0}%"));
                                }
                                if let Some(semantic) = scored.semantic_score {
                                    parts.push(format!("Semantic match: {semantic:.0}%"));
                                }
                                if let Some(explanation) = scored.explanation {
                                    parts.push(explanation);
                                }
                                view! {
                                    <Alert kind=AlertKind::Info message=parts.join(" \u{b7} ") />
                                }
                            })
                    }}
                    {move || {
                        error
                            .get()
                            .map(|err| view! { <Alert kind=AlertKind::Error message=err.user_message() /> })
                    }}
                </div>

                <div class="rounded-xl border border-gray-200 dark:border-gray-700 bg-white dark:bg-gray-800 p-6 space-y-4">
                    <div class="flex items-center justify-between">
                        <h2 class="text-lg font-semibold text-gray-900 dark:text-white">
                            "Tailored result"
                        </h2>
                        {move || {
                            let state = tailor_state.get();
                            match (state.original_match, state.tailored_match) {
                                (Some(original), Some(tailored)) => Some(view! {
                                    <span class="text-sm text-gray-500 dark:text-gray-400">
                                        {format!("{original:.0}% \u{2192} {tailored:.0}%")}
                                    </span>
                                }),
                                _ => None,
                            }
                        }}
                    </div>
                    {move || match tailor_state.get().tailored_resume {
                        Some(text) => view! {
                            <p class="whitespace-pre-wrap text-sm text-gray-700 dark:text-gray-300">
                                {text}
                            </p>
                        }
                            .into_any(),
                        None => view! {
                            <p class="text-sm text-gray-400 dark:text-gray-500">
                                "Tailor your resume to see the result here."
                            </p>
                        }
                            .into_any(),
                    }}
                    <div class="flex gap-3">
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
                    </div>
                </div>
            </div>
        </div>
    }
}
