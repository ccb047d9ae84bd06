//! Resume editor. Seeds from a saved editor draft first, then the tailored
//! text, then the base résumé; with none of those it redirects to the
//! tailoring page. Every edit persists so a reload resumes mid-edit.

use crate::app_lib::{
    storage::{self, EditorDraft},
    AppError,
};
use crate::components::{Alert, AlertKind, Spinner};
use crate::features::resume;
use crate::routes::paths;
use api_contract::{DownloadRequest, ExportFormat};
use leptos::{prelude::*, task::spawn_local};
use leptos_router::hooks::use_navigate;

fn seed_draft() -> Option<EditorDraft> {
    if let Some(draft) = storage::editor_draft() {
        return Some(draft);
    }
    let text = storage::tailored_resume_text().or_else(storage::resume_text)?;
    Some(EditorDraft {
        text,
        file_name: "AI_Resume".to_string(),
    })
}

#[component]
pub fn ResumeEditorPage() -> impl IntoView {
    let navigate = use_navigate();
    let seed = seed_draft();

    let redirect = seed.is_none();
    Effect::new(move |_| {
        if redirect {
            navigate(paths::AI_RESUME, Default::default());
        }
    });

    let initial = seed.unwrap_or_default();
    let (text, set_text) = signal(initial.text);
    let (file_name, set_file_name) = signal(initial.file_name);
    let (error, set_error) = signal::<Option<AppError>>(None);
    let (downloading, set_downloading) = signal(false);

    let persist = move || {
        storage::set_editor_draft(&EditorDraft {
            text: text.get_untracked(),
            file_name: file_name.get_untracked(),
        });
    };

    let download = move |format: ExportFormat| {
        set_error.set(None);
        set_downloading.set(true);
        let name = file_name.get_untracked();
        let request = DownloadRequest {
            resume_text: text.get_untracked(),
            format,
            file_name: name.clone(),
        };
        spawn_local(async move {
            match resume::client::download(&request).await {
                Ok(bytes) => {
                    if let Err(err) = resume::download::save_bytes(&bytes, format, &name) {
                        set_error.set(Some(err));
                    }
                }
                Err(err) => set_error.set(Some(err)),
            }
            set_downloading.set(false);
        });
    };

    let apply_url = storage::selected_job_url();
    let apply_button = apply_url.map(|url| {
        view! {
            <button
                type="button"
                class="px-5 py-2.5 text-sm font-medium text-white bg-purple-700 rounded-lg hover:bg-purple-800"
                on:click=move |_| {
                    if let Some(window) = web_sys::window() {
                        let _ = window.open_with_url_and_target(&url, "_blank");
                    }
                }
            >
                "Apply Now"
            </button>
        }
    });

    view! {
        <div class="max-w-3xl">
            <h1 class="text-2xl font-bold text-gray-900 dark:text-white mb-6">
                "Resume Editor"
            </h1>

            <div class="rounded-xl border border-gray-200 dark:border-gray-700 bg-white dark:bg-gray-800 p-6 space-y-4">
                <div>
                    <label class="block mb-2 text-sm font-medium text-gray-900 dark:text-white" for="file-name">
                        "File name"
                    </label>
                    <input
                        id="file-name"
                        type="text"
                        class="bg-gray-50 border border-gray-300 text-gray-900 text-sm rounded-lg focus:ring-purple-500 focus:border-purple-500 block w-full max-w-xs p-2.5 dark:bg-gray-700 dark:border-gray-600 dark:text-white"
                        prop:value=move || file_name.get()
                        on:input=move |event| {
                            set_file_name.set(event_target_value(&event));
                            persist();
                        }
                    />
                </div>
                <textarea
                    rows="18"
                    class="w-full rounded-lg border border-gray-300 dark:border-gray-600 bg-gray-50 dark:bg-gray-700 p-3 text-sm font-mono text-gray-900 dark:text-white focus:ring-purple-500 focus:border-purple-500"
                    prop:value=move || text.get()
                    on:input=move |event| {
                        set_text.set(event_target_value(&event));
                        persist();
                    }
                ></textarea>

                {move || downloading.get().then_some(view! { <Spinner /> })}
                {move || {
                    error
                        .get()
                        .map(|err| view! { <Alert kind=AlertKind::Error message=err.user_message() /> })
                }}

                <div class="flex flex-wrap gap-3">
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
                    {apply_button}
                </div>
            </div>
        </div>
    }
}
