use becas_core::return_target;
use becas_frontend_common::components::ErrorMessage;
use becas_frontend_common::use_session;
use tracing::info;
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::AnyRoute;
use yew_router::prelude::*;

#[function_component(LoginPage)]
pub fn login_page() -> Html {
    let ctx = use_session();
    let navigator = use_navigator();
    let query = use_location()
        .map(|location| location.query_str().to_string())
        .unwrap_or_default();

    let identifier = use_state(String::new);
    let secret = use_state(String::new);
    let error = use_state(|| None::<String>);
    let busy = use_state(|| false);

    // Already signed in: skip the form
    {
        let navigator = navigator.clone();
        let user = ctx.user.clone();
        let config = ctx.session.config().clone();
        let query = query.clone();
        use_effect_with(user, move |user| {
            if let (Some(user), Some(navigator)) = (user, navigator) {
                let target = return_target(&query, &config, user.role.home_path());
                navigator.replace(&AnyRoute::new(target));
            }
        });
    }

    let on_identifier = {
        let identifier = identifier.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            identifier.set(input.value());
        })
    };

    let on_secret = {
        let secret = secret.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            secret.set(input.value());
        })
    };

    let on_submit = {
        let ctx = ctx.clone();
        let identifier = identifier.clone();
        let secret = secret.clone();
        let error = error.clone();
        let busy = busy.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if identifier.trim().is_empty() || secret.is_empty() {
                error.set(Some("Ingrese usuario y contraseña.".to_string()));
                return;
            }

            let ctx = ctx.clone();
            let identifier = identifier.trim().to_string();
            let secret = (*secret).clone();
            let error = error.clone();
            let busy = busy.clone();
            busy.set(true);
            error.set(None);
            spawn_local(async move {
                match ctx.login(&identifier, &secret).await {
                    // The effect above navigates once the new user is rendered
                    Ok(user) => info!(user_id = user.id, "Signed in"),
                    Err(err) => error.set(Some(err.user_message())),
                }
                busy.set(false);
            });
        })
    };

    html! {
        <div class="min-h-screen flex items-center justify-center bg-gray-50">
            <form onsubmit={on_submit} class="w-full max-w-sm bg-white shadow rounded-lg p-8 space-y-4">
                <h1 class="text-2xl font-semibold text-gray-900 text-center">{"Sistema de Becas"}</h1>
                <div>
                    <label for="identifier" class="block text-sm font-medium text-gray-700">{"Usuario o correo"}</label>
                    <input
                        id="identifier"
                        type="text"
                        autocomplete="username"
                        value={(*identifier).clone()}
                        oninput={on_identifier}
                        class="mt-1 w-full border border-gray-300 rounded px-3 py-2"
                    />
                </div>
                <div>
                    <label for="secret" class="block text-sm font-medium text-gray-700">{"Contraseña"}</label>
                    <input
                        id="secret"
                        type="password"
                        autocomplete="current-password"
                        value={(*secret).clone()}
                        oninput={on_secret}
                        class="mt-1 w-full border border-gray-300 rounded px-3 py-2"
                    />
                </div>
                if let Some(message) = (*error).clone() {
                    <ErrorMessage message={message} />
                }
                <button
                    type="submit"
                    disabled={*busy}
                    class="w-full bg-blue-600 hover:bg-blue-700 text-white py-2 rounded disabled:opacity-50"
                >
                    { if *busy { "Ingresando..." } else { "Ingresar" } }
                </button>
            </form>
        </div>
    }
}
