use crate::app::Route;
use yew::prelude::*;
use yew_router::prelude::*;

#[function_component(NotFoundPage)]
pub fn not_found_page() -> Html {
    html! {
        <div class="min-h-screen flex flex-col items-center justify-center gap-4 bg-gray-50">
            <h1 class="text-4xl font-bold text-gray-900">{"404"}</h1>
            <p class="text-gray-600">{"La página solicitada no existe."}</p>
            <Link<Route> to={Route::Dashboard} classes={classes!("text-blue-600", "hover:underline")}>
                {"Volver al inicio"}
            </Link<Route>>
        </div>
    }
}
