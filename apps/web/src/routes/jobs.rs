//! Recommended jobs list. The search runs once on entry with the stored
//! résumé and onboarding preferences; scoring is entirely backend work.

use crate::app_lib::storage;
use crate::components::cards::JobCard;
use crate::components::{Alert, AlertKind, Spinner};
use crate::features::jobs::client;
use crate::routes::paths;
use api_contract::JobSearchRequest;
use leptos::prelude::*;
use leptos_router::components::A;

fn build_search_request() -> JobSearchRequest {
    let draft = storage::onboarding_draft().unwrap_or_default();
    JobSearchRequest {
        resume: storage::resume_text().unwrap_or_default(),
        preferred_roles: draft.preferred_roles,
        preferred_cities: draft.preferred_cities,
        employment_types: draft.employment_types,
        sort_by: Some("TopMatched".to_string()),
    }
}

#[component]
pub fn RecommendedJobsPage() -> impl IntoView {
    let jobs = LocalResource::new(move || {
        let request = build_search_request();
        async move { client::search(&request).await }
    });

    view! {
        <div>
            <div class="flex items-center justify-between mb-6">
                <h1 class="text-2xl font-bold text-gray-900 dark:text-white">
                    "Recommended Jobs"
                </h1>
                <A
                    href=paths::ONBOARDING
                    {..}
                    class="text-sm font-medium text-purple-600 dark:text-purple-400 hover:underline"
                >
                    "Edit Preferences"
                </A>
            </div>

            <Suspense fallback=|| {
                view! {
                    <div class="flex justify-center items-center min-h-[40vh]">
                        <Spinner />
                    </div>
                }
            }>
                {move || {
                    jobs.get()
                        .map(|result| match result {
                            Ok(found) if found.is_empty() => {
                                view! {
                                    <Alert
                                        kind=AlertKind::Info
                                        message="No matching jobs right now. Widen your preferences and try again."
                                            .to_string()
                                    />
                                }
                                    .into_any()
                            }
                            Ok(found) => {
                                view! {
                                    <p class="text-sm text-gray-500 dark:text-gray-400 mb-4">
                                        {format!("{} jobs matched to your profile", found.len())}
                                    </p>
                                    <div class="grid grid-cols-1 md:grid-cols-2 xl:grid-cols-3 gap-4">
                                        <For
                                            each=move || found.clone()
                                            key=|job| job.id.clone()
                                            children=move |job| view! { <JobCard job=job /> }
                                        />
                                    </div>
                                }
                                    .into_any()
                            }
                            Err(err) => {
                                view! {
                                    <Alert kind=AlertKind::Error message=err.user_message() />
                                }
                                    .into_any()
                            }
                        })
                }}
            </Suspense>
        </div>
    }
}
