//! Session context and provider

use super::error_handler::{clear_auth_error_callback, set_auth_error_callback};
use crate::client::ApiClient;
use crate::config::AppConfig;
use crate::storage::LocalStorageTokenStore;
use becas_core::{ApiResult, Redirect, Session, SystemClock, User};
use becas_http::{ClientError, HttpAuthBackend, TypedClientBuilder};
use gloo::events::EventListener;
use gloo::timers::callback::Interval;
use std::rc::Rc;
use tracing::{debug, error};
use wasm_bindgen::JsCast;
use web_sys::StorageEvent;
use yew::prelude::*;

/// Everything a screen needs to talk to the backend as the current user
#[derive(Clone)]
pub struct SessionContext {
    pub session: Rc<Session>,
    /// Identity as of the last session change; drives re-rendering
    pub user: Option<User>,
    pub api: ApiClient,
    pub backend: Rc<HttpAuthBackend>,
    /// Performs a navigation requested by the session (logout, invalidation)
    pub navigate: Callback<Redirect>,
}

impl PartialEq for SessionContext {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.session, &other.session)
            && self.user == other.user
            && self.navigate == other.navigate
    }
}

impl SessionContext {
    /// Log out and navigate to the login page
    pub fn logout(&self) {
        self.navigate.emit(self.session.logout());
    }

    pub async fn login(&self, identifier: &str, secret: &str) -> ApiResult<User> {
        self.session
            .login(self.backend.as_ref(), identifier, secret)
            .await
    }
}

struct Services {
    session: Rc<Session>,
    api: ApiClient,
    backend: Rc<HttpAuthBackend>,
}

fn build_services(config: &AppConfig) -> Result<Services, ClientError> {
    let public = TypedClientBuilder::new()
        .base_url(config.api_base_url.clone())
        .build_public()?;

    let session = Rc::new(Session::new(
        config.session.clone(),
        LocalStorageTokenStore,
        SystemClock,
    ));
    session.initialize();

    Ok(Services {
        api: ApiClient::new(public.clone(), session.clone()),
        backend: Rc::new(HttpAuthBackend::new(public)),
        session,
    })
}

#[derive(Properties, PartialEq)]
pub struct SessionProviderProps {
    pub config: AppConfig,
    /// Router hook-up: where logout and forced re-login should go
    pub on_redirect: Callback<Redirect>,
    pub children: Children,
}

#[function_component(SessionProvider)]
pub fn session_provider(props: &SessionProviderProps) -> Html {
    let services = {
        let config = props.config.clone();
        use_memo((), move |_| build_services(&config))
    };
    let initial_user = services
        .as_ref()
        .as_ref()
        .ok()
        .and_then(|s| s.session.current_user());
    let user = use_state(move || initial_user);

    // Mirror every session change into component state
    {
        let services = services.clone();
        let user = user.clone();
        use_effect_with((), move |_| {
            let subscription = services.as_ref().as_ref().ok().map(|s| {
                let session = s.session.clone();
                let id = session.subscribe(move |current| user.set(current.cloned()));
                (session, id)
            });
            move || {
                if let Some((session, id)) = subscription {
                    session.unsubscribe(id);
                }
            }
        });
    }

    // 401/403 anywhere: drop the session and go to login
    {
        let services = services.clone();
        let on_redirect = props.on_redirect.clone();
        use_effect_with((), move |_| {
            if let Ok(s) = services.as_ref() {
                let session = s.session.clone();
                set_auth_error_callback(Rc::new(move |_| {
                    on_redirect.emit(session.invalidate());
                }));
            }
            clear_auth_error_callback
        });
    }

    // Another tab logged in or out
    {
        let services = services.clone();
        use_effect_with((), move |_| {
            let listener = services.as_ref().as_ref().ok().map(|s| {
                let session = s.session.clone();
                EventListener::new(&gloo::utils::window(), "storage", move |event| {
                    let key = event.dyn_ref::<StorageEvent>().and_then(StorageEvent::key);
                    // A `null` key means the whole storage was cleared
                    if key.is_none_or(|key| key == session.config().token_key) {
                        debug!("Session token changed in another tab");
                        session.sync_from_storage();
                    }
                })
            });
            move || drop(listener)
        });
    }

    // Expire the session while the page sits idle
    {
        let services = services.clone();
        use_effect_with(user.is_some(), move |logged_in| {
            let interval = match services.as_ref() {
                Ok(s) if *logged_in => {
                    let session = s.session.clone();
                    Some(Interval::new(AppConfig::TOKEN_CHECK_INTERVAL_MS, move || {
                        session.is_logged_in();
                    }))
                }
                _ => None,
            };
            move || drop(interval)
        });
    }

    match services.as_ref() {
        Ok(s) => {
            let context = SessionContext {
                session: s.session.clone(),
                user: (*user).clone(),
                api: s.api.clone(),
                backend: s.backend.clone(),
                navigate: props.on_redirect.clone(),
            };
            html! {
                <ContextProvider<SessionContext> context={context}>
                    {props.children.clone()}
                </ContextProvider<SessionContext>>
            }
        }
        Err(err) => {
            error!(error = %err, "API client could not be configured");
            html! {
                <div class="p-8 text-center text-red-700">
                    {"La aplicación no está configurada correctamente."}
                </div>
            }
        }
    }
}

/// Hook to use the session context
#[hook]
pub fn use_session() -> SessionContext {
    use_context::<SessionContext>()
        .expect("SessionContext not found. Make sure to wrap your component with SessionProvider")
}

/// Hook to get the current user
#[hook]
pub fn use_current_user() -> Option<User> {
    use_session().user
}
