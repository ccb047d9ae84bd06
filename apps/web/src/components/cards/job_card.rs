//! Card for one matched job in the recommended list.

use crate::features::jobs::format_posted;
use crate::routes::paths;
use api_contract::Job;
use leptos::prelude::*;
use leptos_router::components::A;

/// Summary card linking to the job detail page. The match badge only renders
/// when the backend scored this job against the stored résumé.
#[component]
pub fn JobCard(job: Job) -> impl IntoView {
    let detail = paths::job_detail(&job.id);
    let match_badge = job.match_score.map(|score| {
        view! {
            <span class="inline-flex items-center rounded-full bg-emerald-100 dark:bg-emerald-900/40 px-2.5 py-0.5 text-xs font-semibold text-emerald-700 dark:text-emerald-300">
                {format!("{score:.0}% match")}
            </span>
        }
    });

    view! {
        <div class="flex flex-col rounded-xl border border-gray-200 dark:border-gray-700 bg-white dark:bg-gray-800 p-5 shadow-sm hover:shadow-md transition-shadow">
            <div class="flex items-start justify-between gap-2">
                <div>
                    <h3 class="text-base font-semibold text-gray-900 dark:text-white">{job.title.clone()}</h3>
                    <p class="text-sm text-gray-500 dark:text-gray-400">{job.company.clone()}</p>
                </div>
                {match_badge}
            </div>
            <div class="mt-3 flex flex-wrap gap-2 text-xs text-gray-500 dark:text-gray-400">
                <Show when={
                    let location = job.location.clone();
                    move || !location.is_empty()
                }>
                    <span class="rounded bg-gray-100 dark:bg-gray-700 px-2 py-0.5">{job.location.clone()}</span>
                </Show>
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
            <div class="mt-4">
                <A
                    href=detail
                    {..}
                    class="text-sm font-medium text-purple-600 dark:text-purple-400 hover:underline"
                >
                    "View details"
                </A>
            </div>
        </div>
    }
}
