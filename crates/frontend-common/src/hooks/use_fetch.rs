use crate::auth::use_session;
use becas_http::{AuthenticatedBecasClient, ClientError};
use std::future::Future;
use std::rc::Rc;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

/// State of a one-shot authenticated request
#[derive(Debug, Clone, PartialEq)]
pub enum Fetch<T> {
    Loading,
    Ready(Rc<T>),
    /// User-facing message of the classified error
    Failed(String),
}

/// Issue `call` once when the component mounts.
///
/// Auth failures are also routed to the global handler, so the page only has to
/// render the message.
#[hook]
pub fn use_fetch<T, F, Fut>(call: F) -> UseStateHandle<Fetch<T>>
where
    T: 'static,
    F: FnOnce(AuthenticatedBecasClient) -> Fut + 'static,
    Fut: Future<Output = Result<T, ClientError>> + 'static,
{
    let api = use_session().api;
    let state = use_state(|| Fetch::Loading);

    {
        let state = state.clone();
        use_effect_with((), move |_| {
            spawn_local(async move {
                match api.run(call).await {
                    Ok(value) => state.set(Fetch::Ready(Rc::new(value))),
                    Err(err) => state.set(Fetch::Failed(err.user_message())),
                }
            });
        });
    }

    state
}
