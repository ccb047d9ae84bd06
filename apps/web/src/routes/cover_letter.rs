//! Cover letter generator. Prefills from the stored résumé, selected job
//! description, and session name; company is the only extra required field.

use crate::app_lib::{storage, AppError};
use crate::components::{Alert, AlertKind, Button, Spinner};
use crate::features::auth::state::use_session;
use crate::features::cover_letter::client;
use api_contract::CoverLetterRequest;
use leptos::ev::SubmitEvent;
use leptos::prelude::*;

#[component]
pub fn CoverLetterPage() -> impl IntoView {
    let session = use_session();
    let (resume_text, set_resume_text) = signal(storage::resume_text().unwrap_or_default());
    let (jd_text, set_jd_text) = signal(storage::selected_job_jd().unwrap_or_default());
    let (company, set_company) = signal(String::new());
    let (hiring_manager, set_hiring_manager) = signal(String::new());
    let (industry, set_industry) = signal(String::new());
    let (error, set_error) = signal::<Option<AppError>>(None);
    let (letter, set_letter) = signal::<Option<String>>(None);

    let generate_action = Action::new_local(move |request: &CoverLetterRequest| {
        let request = request.clone();
        async move { client::generate(&request).await }
    });

    Effect::new(move |_| {
        if let Some(result) = generate_action.value().get() {
            match result {
                Ok(generated) => set_letter.set(Some(generated.cover_letter)),
                Err(err) => set_error.set(Some(err)),
            }
        }
    });

    let on_submit = move |event: SubmitEvent| {
        event.prevent_default();
        set_error.set(None);
        set_letter.set(None);

        let resume_value = resume_text.get_untracked();
        let jd_value = jd_text.get_untracked();
        let company_value = company.get_untracked().trim().to_string();
        if resume_value.trim().is_empty()
            || jd_value.trim().is_empty()
            || company_value.is_empty()
        {
            set_error.set(Some(AppError::Validation(
                "Resume, job description, and company are required.".to_string(),
            )));
            return;
        }

        let optional = |value: String| {
            let trimmed = value.trim().to_string();
            (!trimmed.is_empty()).then_some(trimmed)
        };
        generate_action.dispatch(CoverLetterRequest {
            resume_text: resume_value,
            job_description: jd_value,
            user_name: session.full_name.get_untracked().unwrap_or_default(),
            hiring_manager: optional(hiring_manager.get_untracked()),
            company_name: company_value,
            industry: optional(industry.get_untracked()),
        });
    };

    let field_class = "bg-gray-50 border border-gray-300 text-gray-900 text-sm rounded-lg focus:ring-purple-500 focus:border-purple-500 block w-full p-2.5 dark:bg-gray-700 dark:border-gray-600 dark:text-white";
    let label_class = "block mb-2 text-sm font-medium text-gray-900 dark:text-white";
    let textarea_class = "w-full rounded-lg border border-gray-300 dark:border-gray-600 bg-gray-50 dark:bg-gray-700 p-3 text-sm text-gray-900 dark:text-white focus:ring-purple-500 focus:border-purple-500";

    view! {
        <div class="max-w-3xl">
            <h1 class="text-2xl font-bold text-gray-900 dark:text-white mb-6">
                "Cover Letter"
            </h1>

            <form
                class="rounded-xl border border-gray-200 dark:border-gray-700 bg-white dark:bg-gray-800 p-6 space-y-5"
                on:submit=on_submit
            >
                <div>
                    <label class=label_class for="cl-resume">"Your resume"</label>
                    <textarea
                        id="cl-resume"
                        rows="8"
                        class=textarea_class
                        prop:value=move || resume_text.get()
                        on:input=move |event| set_resume_text.set(event_target_value(&event))
                    ></textarea>
                </div>
                <div>
                    <label class=label_class for="cl-jd">"Job description"</label>
                    <textarea
                        id="cl-jd"
                        rows="6"
                        class=textarea_class
                        prop:value=move || jd_text.get()
                        on:input=move |event| set_jd_text.set(event_target_value(&event))
                    ></textarea>
                </div>
                <div class="grid grid-cols-1 sm:grid-cols-3 gap-4">
                    <div>
                        <label class=label_class for="cl-company">"Company"</label>
                        <input
                            id="cl-company"
                            type="text"
                            class=field_class
                            required
                            on:input=move |event| set_company.set(event_target_value(&event))
                        />
                    </div>
                    <div>
                        <label class=label_class for="cl-manager">"Hiring manager (optional)"</label>
                        <input
                            id="cl-manager"
                            type="text"
                            class=field_class
                            on:input=move |event| set_hiring_manager.set(event_target_value(&event))
                        />
                    </div>
                    <div>
                        <label class=label_class for="cl-industry">"Industry (optional)"</label>
                        <input
                            id="cl-industry"
                            type="text"
                            class=field_class
                            on:input=move |event| set_industry.set(event_target_value(&event))
                        />
                    </div>
                </div>

                <Button button_type="submit" disabled=generate_action.pending()>
                    "Generate Cover Letter"
                </Button>
                {move || generate_action.pending().get().then_some(view! { <Spinner /> })}
                {move || {
                    error
                        .get()
                        .map(|err| view! { <Alert kind=AlertKind::Error message=err.user_message() /> })
                }}
            </form>

            {move || {
                letter
                    .get()
                    .map(|text| {
                        view! {
                            <div class="mt-6 rounded-xl border border-gray-200 dark:border-gray-700 bg-white dark:bg-gray-800 p-6">
                                <h2 class="text-lg font-semibold text-gray-900 dark:text-white mb-3">
                                    "Your cover letter"
                                </h2>
                                <p class="whitespace-pre-wrap text-sm text-gray-700 dark:text-gray-300">
                                    {text}
                                </p>
                            </div>
                        }
                    })
            }}
        </div>
    }
}
