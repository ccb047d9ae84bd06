//! Layout wrapper for the signed-in subtree. Routes render into the content
//! pane next to the sidebar. The guard here is advisory; the backend rejects
//! unauthenticated calls regardless.

use crate::components::layout::Sidebar;
use crate::features::auth::RequireSession;
use leptos::prelude::*;
use leptos_router::components::Outlet;

#[component]
pub fn SidebarLayout() -> impl IntoView {
    view! {
        <RequireSession>
            <div class="min-h-screen flex bg-gray-50 dark:bg-gray-950">
                <Sidebar />
                <main class="flex-1 overflow-y-auto">
                    <div class="container mx-auto p-6">
                        <Outlet />
                    </div>
                </main>
            </div>
        </RequireSession>
    }
}
