use becas_core::NameLookup;
use becas_frontend_common::use_session;
use becas_frontend_common::components::ErrorMessage;
use std::rc::Rc;
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlSelectElement;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct StatusChangerProps {
    pub application_id: i64,
    pub current: Option<i64>,
    pub statuses: Rc<NameLookup>,
    /// Fired with the new status once the backend accepted it
    pub on_changed: Callback<(i64, i64)>,
}

/// Inline state selector an admin uses to move an application along
#[function_component(StatusChanger)]
pub fn status_changer(props: &StatusChangerProps) -> Html {
    let ctx = use_session();
    let error = use_state(|| None::<String>);
    let busy = use_state(|| false);

    let on_change = {
        let api = ctx.api.clone();
        let error = error.clone();
        let busy = busy.clone();
        let on_changed = props.on_changed.clone();
        let application_id = props.application_id;
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            let Ok(status_id) = select.value().parse::<i64>() else {
                return;
            };
            let api = api.clone();
            let error = error.clone();
            let busy = busy.clone();
            let on_changed = on_changed.clone();
            busy.set(true);
            spawn_local(async move {
                let result = api
                    .run(|client| async move {
                        client
                            .change_application_status(application_id, status_id)
                            .await
                    })
                    .await;
                busy.set(false);
                match result {
                    Ok(()) => {
                        error.set(None);
                        on_changed.emit((application_id, status_id));
                    }
                    Err(err) => error.set(Some(err.user_message())),
                }
            });
        })
    };

    html! {
        <div class="flex items-center gap-2">
            <select onchange={on_change} disabled={*busy} class="border border-gray-300 rounded px-2 py-1 text-sm">
                if props.current.is_none() {
                    <option selected=true value="">{"-"}</option>
                }
                {for props.statuses.entries().into_iter().map(|(id, name)| html! {
                    <option value={id.to_string()} selected={props.current == Some(id)}>{name}</option>
                })}
            </select>
            if let Some(message) = (*error).clone() {
                <ErrorMessage message={message} />
            }
        </div>
    }
}
