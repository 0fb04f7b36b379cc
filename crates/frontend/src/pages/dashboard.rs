use crate::app::Route;
use becas_frontend_common::use_current_user;
use yew::prelude::*;
use yew_router::prelude::*;

#[function_component(DashboardPage)]
pub fn dashboard_page() -> Html {
    let Some(user) = use_current_user() else {
        return html! {};
    };

    let shortcuts = Route::MENU
        .iter()
        .filter(|route| **route != Route::Dashboard && route.visible_to(user.role));

    html! {
        <section class="space-y-6">
            <div>
                <h1 class="text-2xl font-semibold text-gray-900">{format!("Hola, {}", user.name)}</h1>
                <p class="text-gray-600">
                    { if user.is_admin() { "Administración del sistema de becas." } else { "Consulta el estado de tus solicitudes de beca." } }
                </p>
            </div>
            <div class="grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-3 gap-4">
                {for shortcuts.map(|route| html! {
                    <Link<Route> to={*route} classes={classes!("block", "bg-white", "shadow", "rounded-lg", "p-6", "hover:bg-blue-50")}>
                        <span class="text-lg font-medium text-blue-700">{route.title()}</span>
                    </Link<Route>>
                })}
            </div>
        </section>
    }
}
