use crate::components::Layout;
use crate::pages::{
    ApplicationsPage, ChangePasswordPage, DashboardPage, LoginPage, MyApplicationsPage, NotFoundPage,
    PaymentsPage, PeriodsPage, ReportsPage, ScholarshipTypesPage, StudentsPage,
};
use becas_core::{Access, Redirect, Role};
use becas_frontend_common::{AppConfig, RequireAccess, SessionProvider};
use tracing::debug;
use yew::prelude::*;
use yew_router::AnyRoute;
use yew_router::prelude::*;

#[derive(Debug, Clone, Copy, Routable, PartialEq, Eq)]
pub enum Route {
    #[at("/login")]
    Login,
    #[at("/")]
    Dashboard,
    #[at("/estudiantes")]
    Students,
    #[at("/tipos-beca")]
    ScholarshipTypes,
    #[at("/solicitudes")]
    Applications,
    #[at("/mis-solicitudes")]
    MyApplications,
    #[at("/pagos")]
    Payments,
    #[at("/periodos")]
    Periods,
    #[at("/reportes")]
    Reports,
    #[at("/cambiar-clave")]
    ChangePassword,
    #[not_found]
    #[at("/404")]
    NotFound,
}

impl Route {
    /// Navigation entries, in menu order
    pub const MENU: [Route; 9] = [
        Route::Dashboard,
        Route::Students,
        Route::ScholarshipTypes,
        Route::Applications,
        Route::MyApplications,
        Route::Payments,
        Route::Periods,
        Route::Reports,
        Route::ChangePassword,
    ];

    pub fn access(&self) -> Access {
        match self {
            Route::Login | Route::NotFound => Access::Public,
            Route::Dashboard | Route::Applications | Route::ChangePassword => Access::Authenticated,
            Route::Students
            | Route::ScholarshipTypes
            | Route::Periods
            | Route::Payments
            | Route::Reports => Access::Role(Role::Admin),
            Route::MyApplications => Access::Role(Role::Estudiante),
        }
    }

    /// Whether a user with `role` may see this route in the menu
    pub fn visible_to(&self, role: Role) -> bool {
        match self.access() {
            Access::Public => false,
            Access::Authenticated => true,
            Access::Role(required) => required == role,
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Route::Login => "Iniciar sesión",
            Route::Dashboard => "Inicio",
            Route::Students => "Estudiantes",
            Route::ScholarshipTypes => "Tipos de beca",
            Route::Applications => "Solicitudes",
            Route::MyApplications => "Mis solicitudes",
            Route::Payments => "Pagos",
            Route::Periods => "Periodos académicos",
            Route::Reports => "Reportes",
            Route::ChangePassword => "Cambiar contraseña",
            Route::NotFound => "Página no encontrada",
        }
    }
}

fn switch(route: Route) -> Html {
    let page = match route {
        Route::Login => return html! { <LoginPage /> },
        Route::NotFound => return html! { <NotFoundPage /> },
        Route::Dashboard => html! { <DashboardPage /> },
        Route::Students => html! { <StudentsPage /> },
        Route::ScholarshipTypes => html! { <ScholarshipTypesPage /> },
        Route::Applications => html! { <ApplicationsPage /> },
        Route::MyApplications => html! { <MyApplicationsPage /> },
        Route::Payments => html! { <PaymentsPage /> },
        Route::Periods => html! { <PeriodsPage /> },
        Route::Reports => html! { <ReportsPage /> },
        Route::ChangePassword => html! { <ChangePasswordPage /> },
    };

    html! {
        <Layout>
            <RequireAccess access={route.access()}>
                {page}
            </RequireAccess>
        </Layout>
    }
}

#[function_component(App)]
pub fn app() -> Html {
    html! {
        <BrowserRouter>
            <Shell />
        </BrowserRouter>
    }
}

#[function_component(Shell)]
fn shell() -> Html {
    let config = use_memo((), |_| AppConfig::from_env());
    let navigator = use_navigator();

    let on_redirect = use_memo((), move |_| {
        Callback::from(move |redirect: Redirect| {
            let href = redirect.href();
            debug!(%href, "Redirecting");
            if let Some(navigator) = &navigator {
                navigator.push(&AnyRoute::new(href));
            }
        })
    });

    html! {
        <SessionProvider config={(*config).clone()} on_redirect={(*on_redirect).clone()}>
            <Switch<Route> render={switch} />
        </SessionProvider>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_admin_only_routes() {
        for route in [
            Route::Students,
            Route::ScholarshipTypes,
            Route::Periods,
            Route::Payments,
            Route::Reports,
        ] {
            assert_eq!(route.access(), Access::Role(Role::Admin), "{route:?}");
            assert!(!route.visible_to(Role::Estudiante));
        }
    }

    #[test]
    fn test_student_and_shared_routes() {
        assert_eq!(
            Route::MyApplications.access(),
            Access::Role(Role::Estudiante)
        );
        assert!(!Route::MyApplications.visible_to(Role::Admin));
        for route in [Route::Dashboard, Route::Applications, Route::ChangePassword] {
            assert!(route.visible_to(Role::Admin) && route.visible_to(Role::Estudiante));
        }
        assert_eq!(Route::Login.access(), Access::Public);
    }

    #[test]
    fn test_paths_match_role_home() {
        assert_eq!(Route::recognize(Role::Admin.home_path()), Some(Route::Dashboard));
        assert_eq!(
            Route::recognize(Role::Estudiante.home_path()),
            Some(Route::MyApplications)
        );
        assert_eq!(
            Route::recognize(&becas_core::SessionConfig::default().login_path),
            Some(Route::Login)
        );
    }
}
