use becas_frontend_common::components::ErrorMessage;
use becas_frontend_common::use_session;
use becas_frontend_common::auth::error_handler::report_auth_error;
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;

const MIN_SECRET_LEN: usize = 6;

/// Checks done before the request goes out
fn validate(current: &str, new: &str, confirm: &str) -> Result<(), &'static str> {
    if current.is_empty() || new.is_empty() {
        return Err("Complete todos los campos.");
    }
    if new.chars().count() < MIN_SECRET_LEN {
        return Err("La nueva contraseña debe tener al menos 6 caracteres.");
    }
    if new != confirm {
        return Err("Las contraseñas no coinciden.");
    }
    if new == current {
        return Err("La nueva contraseña debe ser distinta de la actual.");
    }
    Ok(())
}

#[derive(Clone, PartialEq)]
enum Feedback {
    None,
    Error(String),
    Saved(String),
}

fn password_input(id: &'static str, label: &'static str, value: &UseStateHandle<String>) -> Html {
    let oninput = {
        let value = value.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            value.set(input.value());
        })
    };
    html! {
        <div>
            <label for={id} class="block text-sm font-medium text-gray-700">{label}</label>
            <input
                id={id}
                type="password"
                value={(**value).clone()}
                {oninput}
                class="mt-1 w-full border border-gray-300 rounded px-3 py-2"
            />
        </div>
    }
}

#[function_component(ChangePasswordPage)]
pub fn change_password_page() -> Html {
    let ctx = use_session();
    let current = use_state(String::new);
    let new = use_state(String::new);
    let confirm = use_state(String::new);
    let feedback = use_state(|| Feedback::None);
    let busy = use_state(|| false);

    let on_submit = {
        let ctx = ctx.clone();
        let current = current.clone();
        let new = new.clone();
        let confirm = confirm.clone();
        let feedback = feedback.clone();
        let busy = busy.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if let Err(message) = validate(&current, &new, &confirm) {
                feedback.set(Feedback::Error(message.to_string()));
                return;
            }

            let ctx = ctx.clone();
            let (current, new, confirm) = (current.clone(), new.clone(), confirm.clone());
            let feedback = feedback.clone();
            let busy = busy.clone();
            busy.set(true);
            spawn_local(async move {
                let result = ctx
                    .session
                    .change_secret(ctx.backend.as_ref(), &current, &new)
                    .await;
                busy.set(false);
                match result {
                    Ok(ack) => {
                        current.set(String::new());
                        new.set(String::new());
                        confirm.set(String::new());
                        let message = ack
                            .message
                            .unwrap_or_else(|| "Contraseña actualizada.".to_string());
                        feedback.set(Feedback::Saved(message));
                    }
                    Err(err) => {
                        report_auth_error(&err);
                        feedback.set(Feedback::Error(err.user_message()));
                    }
                }
            });
        })
    };

    html! {
        <section class="max-w-md space-y-4">
            <h1 class="text-2xl font-semibold text-gray-900">{"Cambiar contraseña"}</h1>
            <form onsubmit={on_submit} class="bg-white shadow rounded-lg p-6 space-y-4">
                {password_input("current", "Contraseña actual", &current)}
                {password_input("new", "Nueva contraseña", &new)}
                {password_input("confirm", "Confirmar contraseña", &confirm)}
                {match &*feedback {
                    Feedback::None => html! {},
                    Feedback::Error(message) => html! { <ErrorMessage message={message.clone()} /> },
                    Feedback::Saved(message) => html! {
                        <p class="text-sm text-green-700">{message.clone()}</p>
                    },
                }}
                <button
                    type="submit"
                    disabled={*busy}
                    class="bg-blue-600 hover:bg-blue-700 text-white px-4 py-2 rounded disabled:opacity-50"
                >
                    {"Guardar"}
                </button>
            </form>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_rejects_bad_input() {
        assert!(validate("", "secreto1", "secreto1").is_err());
        assert!(validate("viejo12", "corto", "corto").is_err());
        assert!(validate("viejo12", "secreto1", "secreto2").is_err());
        assert!(validate("secreto1", "secreto1", "secreto1").is_err());
        assert_eq!(validate("viejo12", "secreto1", "secreto1"), Ok(()));
    }
}
