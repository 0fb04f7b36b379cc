//! Route guard component for protected pages

use super::context::use_session;
use crate::components::LoadingSpinner;
use becas_core::{Access, GuardDecision, authorize_access};
use yew::prelude::*;
use yew_router::hooks::use_location;

#[derive(Properties, PartialEq)]
pub struct RequireAccessProps {
    pub access: Access,
    pub children: Children,
}

/// Renders its children only when the current session may see them;
/// otherwise asks the router to go to the login page.
///
/// The decision is taken again on every render, so a logout, an expired token
/// or a role change is honored on the next navigation or session update.
#[function_component(RequireAccess)]
pub fn require_access(props: &RequireAccessProps) -> Html {
    let ctx = use_session();
    let requested = use_location()
        .map(|location| format!("{}{}", location.path(), location.query_str()))
        .unwrap_or_else(|| "/".to_string());

    let decision = authorize_access(&ctx.session, &requested, props.access);

    {
        let navigate = ctx.navigate.clone();
        use_effect_with(decision.clone(), move |decision| {
            if let GuardDecision::Deny(redirect) = decision {
                navigate.emit(redirect.clone());
            }
        });
    }

    match decision {
        GuardDecision::Allow => html! { <>{ props.children.clone() }</> },
        GuardDecision::Deny(_) => html! { <LoadingSpinner /> },
    }
}
