//! School Health Portal App
//!
//! Router, providers, and the signed-in shell with role-aware navigation.

use leptos::prelude::*;
use leptos_router::components::{Outlet, ParentRoute, Redirect, Route, Router, Routes, A};
use leptos_router::path;
use reactive_stores::Store;

use crate::actions::CampaignKind;
use crate::api::DeclarationKind;
use crate::components::{ChatWidget, ChildSelector, Snackbar};
use crate::config::AppConfig;
use crate::context::{use_app_context, AppContext};
use crate::models::Role;
use crate::pages::{
    BlogDetailPage, BlogListPage, CampaignDetailPage, CampaignListPage, DashboardPage, DeclarationsPage,
    DrugRequestDetailPage, DrugRequestsPage, LoginPage, MedicationTodayPage, ProfilePage, RegistrationsPage,
    ReportPage,
};
use crate::store::{store_logout, store_user, AppState};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavLink {
    pub label: &'static str,
    pub href: &'static str,
}

const fn link(label: &'static str, href: &'static str) -> NavLink {
    NavLink { label, href }
}

/// Sidebar entries for a role, in display order
pub fn nav_links(role: Option<Role>) -> Vec<NavLink> {
    match role {
        Some(Role::Admin) | Some(Role::Nurse) => vec![
            link("Tổng quan", "/"),
            link("Khám sức khỏe", "/checkup-campaigns"),
            link("Tiêm chủng", "/vaccination-campaigns"),
            link("Đơn gửi thuốc", "/drug-requests"),
            link("Uống thuốc hôm nay", "/medication-today"),
            link("Khai báo", "/disease-declarations"),
            link("Góc sức khỏe", "/blog"),
            link("Tài khoản", "/profile"),
        ],
        Some(Role::Parent) => vec![
            link("Tổng quan", "/"),
            link("Khám sức khỏe", "/checkup-campaigns"),
            link("Tiêm chủng", "/vaccination-campaigns"),
            link("Đơn gửi thuốc", "/drug-requests"),
            link("Khai báo", "/disease-declarations"),
            link("Góc sức khỏe", "/blog"),
            link("Tài khoản", "/profile"),
        ],
        None => Vec::new(),
    }
}

#[component]
pub fn App() -> impl IntoView {
    let config = AppConfig::load();
    log::info!("backend at {}", config.api_base_url);

    let reload_trigger = signal(0u32);
    let store = Store::new(AppState::hydrate());
    provide_context(AppContext::new(reload_trigger, store, config));

    view! {
        <Router>
            <Snackbar>
                <Routes fallback=|| view! { <p class="not-found">"Không tìm thấy trang"</p> }>
                    <Route path=path!("/login") view=LoginPage />
                    <ParentRoute path=path!("/") view=Shell>
                        <Route path=path!("") view=DashboardPage />
                        <Route
                            path=path!("checkup-campaigns")
                            view=|| view! { <CampaignListPage kind=CampaignKind::Checkup /> }
                        />
                        <Route
                            path=path!("checkup-campaigns/:id")
                            view=|| view! { <CampaignDetailPage kind=CampaignKind::Checkup /> }
                        />
                        <Route
                            path=path!("checkup-campaigns/:id/registrations")
                            view=|| view! { <StaffOnly><RegistrationsPage kind=CampaignKind::Checkup /></StaffOnly> }
                        />
                        <Route
                            path=path!("checkup-campaigns/:id/report")
                            view=|| view! { <StaffOnly><ReportPage kind=CampaignKind::Checkup /></StaffOnly> }
                        />
                        <Route
                            path=path!("checkup-campaigns/:id/report/edit")
                            view=|| view! { <StaffOnly><ReportPage kind=CampaignKind::Checkup editable=true /></StaffOnly> }
                        />
                        <Route
                            path=path!("vaccination-campaigns")
                            view=|| view! { <CampaignListPage kind=CampaignKind::Vaccination /> }
                        />
                        <Route
                            path=path!("vaccination-campaigns/:id")
                            view=|| view! { <CampaignDetailPage kind=CampaignKind::Vaccination /> }
                        />
                        <Route
                            path=path!("vaccination-campaigns/:id/registrations")
                            view=|| view! { <StaffOnly><RegistrationsPage kind=CampaignKind::Vaccination /></StaffOnly> }
                        />
                        <Route
                            path=path!("vaccination-campaigns/:id/report")
                            view=|| view! { <StaffOnly><ReportPage kind=CampaignKind::Vaccination /></StaffOnly> }
                        />
                        <Route
                            path=path!("vaccination-campaigns/:id/report/edit")
                            view=|| view! { <StaffOnly><ReportPage kind=CampaignKind::Vaccination editable=true /></StaffOnly> }
                        />
                        <Route path=path!("drug-requests") view=DrugRequestsPage />
                        <Route path=path!("drug-requests/:id") view=DrugRequestDetailPage />
                        <Route path=path!("medication-today") view=MedicationTodayPage />
                        <Route
                            path=path!("disease-declarations")
                            view=|| view! { <DeclarationsPage kind=DeclarationKind::Disease /> }
                        />
                        <Route
                            path=path!("vaccination-declarations")
                            view=|| view! { <DeclarationsPage kind=DeclarationKind::Vaccination /> }
                        />
                        <Route path=path!("blog") view=BlogListPage />
                        <Route path=path!("blog/:id") view=BlogDetailPage />
                        <Route path=path!("profile") view=ProfilePage />
                    </ParentRoute>
                </Routes>
            </Snackbar>
        </Router>
    }
}

/// Layout for every signed-in page. Signed-out visitors go to `/login`.
#[component]
fn Shell() -> impl IntoView {
    let ctx = use_app_context();

    view! {
        <Show
            when=move || store_user(&ctx.store).is_some()
            fallback=|| view! { <Redirect path="/login" /> }
        >
            <div class="app-layout">
                <aside class="sidebar">
                    <h1 class="brand">"Y tế học đường"</h1>
                    <nav>
                        {move || {
                            nav_links(ctx.role())
                                .into_iter()
                                .map(|l| view! { <A href=l.href>{l.label}</A> })
                                .collect_view()
                        }}
                    </nav>
                </aside>
                <div class="main-column">
                    <header class="top-bar">
                        <Show when=move || ctx.role() == Some(Role::Parent)>
                            <ChildSelector />
                        </Show>
                        <span class="user-name">
                            {move || store_user(&ctx.store).map(|u| u.display_name()).unwrap_or_default()}
                        </span>
                        <span class="user-role">{move || ctx.role().map(|r| r.label()).unwrap_or_default()}</span>
                        <button class="btn btn-secondary" on:click=move |_| store_logout(&ctx.store)>
                            "Đăng xuất"
                        </button>
                    </header>
                    <main class="main-content">
                        <Outlet />
                    </main>
                </div>
                <Show when=move || ctx.role() == Some(Role::Parent)>
                    <ChatWidget />
                </Show>
            </div>
        </Show>
    }
}

/// Registrations and reports are staff-only; parents may browse campaigns
#[component]
fn StaffOnly(children: ChildrenFn) -> impl IntoView {
    let ctx = use_app_context();
    view! {
        <Show
            when=move || ctx.role().is_some_and(|r| r.is_staff())
            fallback=|| view! { <p class="error-panel">"Bạn không có quyền truy cập trang này"</p> }
        >
            {children()}
        </Show>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parent_nav_browses_campaigns_but_not_medication_today() {
        let links = nav_links(Some(Role::Parent));
        assert!(links.iter().any(|l| l.href == "/checkup-campaigns"));
        assert!(links.iter().any(|l| l.href == "/vaccination-campaigns"));
        assert!(links.iter().all(|l| l.href != "/medication-today"));
        assert_eq!(links[0].href, "/");
    }

    #[test]
    fn test_parent_campaign_rows_are_view_only() {
        use crate::actions::{campaign_actions, CampaignAction};
        use crate::campaign_utils::CampaignStatus;

        for status in [CampaignStatus::Drafted, CampaignStatus::Preparing, CampaignStatus::Ongoing] {
            let actions = campaign_actions(CampaignKind::Checkup, Some(Role::Parent), 3, status, false);
            assert_eq!(actions.len(), 1);
            assert_eq!(actions[0].action, CampaignAction::ViewDetails);
            assert_eq!(actions[0].navigate_to.as_deref(), Some("/checkup-campaigns/3"));
        }
    }

    #[test]
    fn test_staff_nav_matches_for_admin_and_nurse() {
        assert_eq!(nav_links(Some(Role::Admin)), nav_links(Some(Role::Nurse)));
        assert!(nav_links(Some(Role::Nurse)).iter().any(|l| l.href == "/vaccination-campaigns"));
    }

    #[test]
    fn test_signed_out_nav_is_empty() {
        assert!(nav_links(None).is_empty());
    }
}
