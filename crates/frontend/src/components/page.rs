use becas_frontend_common::Fetch;
use becas_frontend_common::components::{ErrorMessage, LoadingSpinner, SearchInput};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ListPageProps {
    pub title: AttrValue,
    pub query: AttrValue,
    pub on_search: Callback<String>,
    pub children: Children,
}

/// Title, free-text filter box and the page's table
#[function_component(ListPage)]
pub fn list_page(props: &ListPageProps) -> Html {
    html! {
        <section class="space-y-4">
            <h1 class="text-2xl font-semibold text-gray-900">{props.title.clone()}</h1>
            <SearchInput value={props.query.clone()} on_search={props.on_search.clone()} />
            {props.children.clone()}
        </section>
    }
}

/// Spinner while loading, the inline error on failure, `render` once ready
pub fn fetched<T>(state: &Fetch<T>, render: impl FnOnce(&T) -> Html) -> Html {
    match state {
        Fetch::Loading => html! { <LoadingSpinner text="Cargando..." /> },
        Fetch::Failed(message) => html! { <ErrorMessage message={message.clone()} /> },
        Fetch::Ready(value) => render(value),
    }
}
