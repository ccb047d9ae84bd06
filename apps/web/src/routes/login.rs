use crate::app_lib::AppError;
use crate::components::{Alert, AlertKind, Button, Spinner};
use crate::features::auth::{client, state::use_session};
use crate::routes::paths;
use api_contract::LoginRequest;
use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

#[component]
pub fn LoginPage() -> impl IntoView {
    let session = use_session();
    let navigate = use_navigate();
    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (error, set_error) = signal::<Option<AppError>>(None);

    let login_action = Action::new_local(move |request: &LoginRequest| {
        let request = request.clone();
        async move { client::login(&request).await }
    });

    Effect::new(move |_| {
        if let Some(result) = login_action.value().get() {
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

        let email_value = email.get_untracked().trim().to_string();
        let password_value = password.get_untracked();
        if email_value.is_empty() || password_value.trim().is_empty() {
            set_error.set(Some(AppError::Validation(
                "Email and password are required.".to_string(),
            )));
            return;
        }

        login_action.dispatch(LoginRequest {
            email: email_value,
            password: password_value,
        });
    };

    view! {
        <div class="min-h-screen flex items-center justify-center bg-gray-50 dark:bg-gray-950 px-4">
            <div class="w-full max-w-sm">
                <h1 class="text-3xl font-bold text-center text-purple-700 dark:text-purple-400 mb-2">
                    "LaunchHire"
                </h1>
                <p class="text-center text-sm text-gray-500 dark:text-gray-400 mb-8">
                    "Sign in to your job search workspace"
                </p>
                <form on:submit=on_submit>
                    <div class="mb-5">
                        <label
                            class="block mb-2 text-sm font-medium text-gray-900 dark:text-white"
                            for="email"
                        >
                            "Your email"
                        </label>
                        <input
                            id="email"
                            type="email"
                            class="bg-gray-50 border border-gray-300 text-gray-900 text-sm rounded-lg focus:ring-purple-500 focus:border-purple-500 block w-full p-2.5 dark:bg-gray-700 dark:border-gray-600 dark:placeholder-gray-400 dark:text-white dark:focus:ring-purple-500 dark:focus:border-purple-500"
                            autocomplete="email"
                            placeholder="name@inbox.im"
                            required
                            on:input=move |event| set_email.set(event_target_value(&event))
                        />
                    </div>
                    <div class="mb-5">
                        <label
                            class="block mb-2 text-sm font-medium text-gray-900 dark:text-white"
                            for="password"
                        >
                            "Your password"
                        </label>
                        <input
                            id="password"
                            type="password"
                            class="bg-gray-50 border border-gray-300 text-gray-900 text-sm rounded-lg focus:ring-purple-500 focus:border-purple-500 block w-full p-2.5 dark:bg-gray-700 dark:border-gray-600 dark:placeholder-gray-400 dark:text-white dark:focus:ring-purple-500 dark:focus:border-purple-500"
                            autocomplete="current-password"
                            required
                            on:input=move |event| set_password.set(event_target_value(&event))
                        />
                    </div>
                    <Button button_type="submit" disabled=login_action.pending()>
                        "Sign In"
                    </Button>
                    {move || {
                        login_action
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
                    "New here? "
                    <A
                        href=paths::SIGNUP
                        {..}
                        class="font-medium text-purple-600 dark:text-purple-400 hover:underline"
                    >
                        "Create an account"
                    </A>
                </p>
            </div>
        </div>
    }
}
