use crate::app_lib::AppError;
use crate::components::{Alert, AlertKind, Button, Spinner};
use crate::features::auth::{client, state::use_session};
use crate::routes::paths;
use api_contract::SignupRequest;
use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

const MIN_PASSWORD_LENGTH: usize = 8;

/// Client-side checks before the request leaves the browser. The backend
/// repeats them; these only save a round trip.
fn validate(request: &SignupRequest, confirm: &str) -> Result<(), AppError> {
    if request.first_name.trim().is_empty() || request.last_name.trim().is_empty() {
        return Err(AppError::Validation(
            "First and last name are required.".to_string(),
        ));
    }
    if !request.email.contains('@') {
        return Err(AppError::Validation(
            "Enter a valid email address.".to_string(),
        ));
    }
    if request.password.len() < MIN_PASSWORD_LENGTH {
        return Err(AppError::Validation(format!(
            "Password must be at least {MIN_PASSWORD_LENGTH} characters."
        )));
    }
    if request.password != confirm {
        return Err(AppError::Validation("Passwords do not match.".to_string()));
    }
    Ok(())
}

#[component]
pub fn SignUpPage() -> impl IntoView {
    let session = use_session();
    let navigate = use_navigate();
    let (first_name, set_first_name) = signal(String::new());
    let (last_name, set_last_name) = signal(String::new());
    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (confirm, set_confirm) = signal(String::new());
    let (error, set_error) = signal::<Option<AppError>>(None);

    let signup_action = Action::new_local(move |request: &SignupRequest| {
        let request = request.clone();
        async move { client::signup(&request).await }
    });

    Effect::new(move |_| {
        if let Some(result) = signup_action.value().get() {
            match result {
                Ok(_) => {
                    session.refresh_from_storage();
                    navigate(paths::ONBOARDING, Default::default());
                }
                Err(err) => set_error.set(Some(err)),
            }
        }
    });

    let on_submit = move |event: SubmitEvent| {
        event.prevent_default();
        set_error.set(None);

        let request = SignupRequest {
            first_name: first_name.get_untracked().trim().to_string(),
            last_name: last_name.get_untracked().trim().to_string(),
            email: email.get_untracked().trim().to_string(),
            password: password.get_untracked(),
        };
        if let Err(err) = validate(&request, &confirm.get_untracked()) {
            set_error.set(Some(err));
            return;
        }
        signup_action.dispatch(request);
    };

    let field_class = "bg-gray-50 border border-gray-300 text-gray-900 text-sm rounded-lg focus:ring-purple-500 focus:border-purple-500 block w-full p-2.5 dark:bg-gray-700 dark:border-gray-600 dark:placeholder-gray-400 dark:text-white dark:focus:ring-purple-500 dark:focus:border-purple-500";
    let label_class = "block mb-2 text-sm font-medium text-gray-900 dark:text-white";

    view! {
        <div class="min-h-screen flex items-center justify-center bg-gray-50 dark:bg-gray-950 px-4 py-8">
            <div class="w-full max-w-sm">
                <h1 class="text-3xl font-bold text-center text-purple-700 dark:text-purple-400 mb-2">
                    "LaunchHire"
                </h1>
                <p class="text-center text-sm text-gray-500 dark:text-gray-400 mb-8">
                    "Create your account"
                </p>
                <form on:submit=on_submit>
                    <div class="grid grid-cols-2 gap-4 mb-5">
                        <div>
                            <label class=label_class for="first-name">"First name"</label>
                            <input
                                id="first-name"
                                type="text"
                                class=field_class
                                autocomplete="given-name"
                                required
                                on:input=move |event| set_first_name.set(event_target_value(&event))
                            />
                        </div>
                        <div>
                            <label class=label_class for="last-name">"Last name"</label>
                            <input
                                id="last-name"
                                type="text"
                                class=field_class
                                autocomplete="family-name"
                                required
                                on:input=move |event| set_last_name.set(event_target_value(&event))
                            />
                        </div>
                    </div>
                    <div class="mb-5">
                        <label class=label_class for="email">"Your email"</label>
                        <input
                            id="email"
                            type="email"
                            class=field_class
                            autocomplete="email"
                            placeholder="name@inbox.im"
                            required
                            on:input=move |event| set_email.set(event_target_value(&event))
                        />
                    </div>
                    <div class="mb-5">
                        <label class=label_class for="password">"Password"</label>
                        <input
                            id="password"
                            type="password"
                            class=field_class
                            autocomplete="new-password"
                            required
                            on:input=move |event| set_password.set(event_target_value(&event))
                        />
                    </div>
                    <div class="mb-5">
                        <label class=label_class for="confirm-password">"Confirm password"</label>
                        <input
                            id="confirm-password"
                            type="password"
                            class=field_class
                            autocomplete="new-password"
                            required
                            on:input=move |event| set_confirm.set(event_target_value(&event))
                        />
                    </div>
                    <Button button_type="submit" disabled=signup_action.pending()>
                        "Create Account"
                    </Button>
                    {move || {
                        signup_action
                            .pending()
                            .get()
                            .then_some(view! { <div class="mt-4"><Spinner /></div> })
                    }}
                    {move || {
                        error
                            .get()
                            .map(|err| {
                                view! {
                                    <div class="mt-4">
                                        <Alert kind=AlertKind::Error message=err.user_message() />
                                    </div>
                                }
                            })
                    }}
                </form>
                <p class="mt-6 text-center text-sm text-gray-500 dark:text-gray-400">
                    "Already have an account? "
                    <A
                        href=paths::LOGIN
                        {..}
                        class="font-medium text-purple-600 dark:text-purple-400 hover:underline"
                    >
                        "Sign in"
                    </A>
                </p>
            </div>
        </div>
    }
}
