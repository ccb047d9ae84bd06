//! Layout components shared across routes.

mod sidebar;
mod sidebar_layout;

pub(crate) use sidebar::Sidebar;
pub(crate) use sidebar_layout::SidebarLayout;
