//! Mock interview practice. The user picks a round, gets a question
//! generated from the stored résumé and selected job description, answers
//! in text, and receives feedback.

use crate::app_lib::{storage, AppError};
use crate::components::{Alert, AlertKind, Button, Spinner};
use crate::features::interview::client;
use api_contract::{EvaluateRequest, InterviewStartRequest, InterviewStartResponse};
use leptos::prelude::*;

const ROUNDS: [(&str, &str); 3] = [
    ("Coding", "Hands-on questions drawn from the skills on your resume."),
    ("System Design", "Architecture and tradeoff questions for the role."),
    ("Behavioral", "Situation and teamwork questions for the final rounds."),
];

#[component]
pub fn InterviewPracticePage() -> impl IntoView {
    let (error, set_error) = signal::<Option<AppError>>(None);
    let (session, set_session) = signal::<Option<InterviewStartResponse>>(None);
    let (answer, set_answer) = signal(String::new());
    let (feedback, set_feedback) = signal::<Option<String>>(None);

    let start_action = Action::new_local(move |round: &String| {
        let request = InterviewStartRequest {
            resume: storage::resume_text().unwrap_or_default(),
            jd: storage::selected_job_jd().unwrap_or_default(),
            round: round.clone(),
        };
        async move { client::start(&request).await }
    });

    Effect::new(move |_| {
        if let Some(result) = start_action.value().get() {
            match result {
                Ok(started) => {
                    set_session.set(Some(started));
                    set_answer.set(String::new());
                    set_feedback.set(None);
                }
                Err(err) => set_error.set(Some(err)),
            }
        }
    });

    let evaluate_action = Action::new_local(move |request: &EvaluateRequest| {
        let request = request.clone();
        async move { client::evaluate(&request).await }
    });

    Effect::new(move |_| {
        if let Some(result) = evaluate_action.value().get() {
            match result {
                Ok(evaluated) => set_feedback.set(Some(evaluated.feedback)),
                Err(err) => set_error.set(Some(err)),
            }
        }
    });

    let on_evaluate = move |_| {
        set_error.set(None);
        let answer_value = answer.get_untracked();
        if answer_value.trim().is_empty() {
            set_error.set(Some(AppError::Validation(
                "Write an answer before requesting feedback.".to_string(),
            )));
            return;
        }
        evaluate_action.dispatch(EvaluateRequest {
            answer: answer_value,
            jd: storage::selected_job_jd().unwrap_or_default(),
        });
    };

    view! {
        <div class="max-w-3xl">
            <h1 class="text-2xl font-bold text-gray-900 dark:text-white mb-6">
                "AI Interview Practice"
            </h1>

            <div class="grid grid-cols-1 sm:grid-cols-3 gap-4 mb-6">
                {ROUNDS
                    .into_iter()
                    .map(|(round, blurb)| {
                        view! {
                            <button
                                type="button"
                                class="rounded-xl border border-gray-200 dark:border-gray-700 bg-white dark:bg-gray-800 p-5 text-left hover:border-purple-400 dark:hover:border-purple-600 transition-colors"
                                disabled=move || start_action.pending().get()
                                on:click=move |_| {
                                    set_error.set(None);
                                    start_action.dispatch(round.to_string());
                                }
                            >
                                <h3 class="text-base font-semibold text-gray-900 dark:text-white mb-1">
                                    {format!("{round} Round")}
                                </h3>
                                <p class="text-sm text-gray-500 dark:text-gray-400">{blurb}</p>
                            </button>
                        }
                    })
                    .collect_view()}
            </div>

            {move || {
                (start_action.pending().get() || evaluate_action.pending().get())
                    .then_some(view! { <div class="mb-4"><Spinner /></div> })
            }}
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

            {move || {
                session
                    .get()
                    .map(|started| {
                        view! {
                            <div class="rounded-xl border border-gray-200 dark:border-gray-700 bg-white dark:bg-gray-800 p-6 space-y-4">
                                <div>
                                    <h2 class="text-lg font-semibold text-gray-900 dark:text-white mb-2">
                                        "Question"
                                    </h2>
                                    <p class="text-sm text-gray-700 dark:text-gray-300">
                                        {started.question.clone()}
                                    </p>
                                </div>
                                {started.answer.clone().map(|sample| {
                                    view! {
                                        <details class="text-sm text-gray-600 dark:text-gray-400">
                                            <summary class="cursor-pointer font-medium">
                                                "Show a sample answer"
                                            </summary>
                                            <p class="mt-2 whitespace-pre-wrap">{sample}</p>
                                        </details>
                                    }
                                })}
                                {started.video_url.clone().map(|url| {
                                    view! {
                                        <video controls class="w-full rounded-lg" src=url></video>
                                    }
                                })}
                                {started.audio_url.clone().map(|url| {
                                    view! {
                                        <audio controls class="w-full" src=url></audio>
                                    }
                                })}
                                <div>
                                    <label class="block mb-2 text-sm font-medium text-gray-900 dark:text-white" for="answer">
                                        "Your answer"
                                    </label>
                                    <textarea
                                        id="answer"
                                        rows="6"
                                        class="w-full rounded-lg border border-gray-300 dark:border-gray-600 bg-gray-50 dark:bg-gray-700 p-3 text-sm text-gray-900 dark:text-white focus:ring-purple-500 focus:border-purple-500"
                                        prop:value=move || answer.get()
                                        on:input=move |event| set_answer.set(event_target_value(&event))
                                    ></textarea>
                                </div>
                                <Button disabled=evaluate_action.pending() {..} on:click=on_evaluate>
                                    "Get Feedback"
                                </Button>
                                {move || {
                                    feedback
                                        .get()
                                        .map(|text| {
                                            view! {
                                                <Alert kind=AlertKind::Info message=text />
                                            }
                                        })
                                }}
                            </div>
                        }
                    })
            }}
        </div>
    }
}
