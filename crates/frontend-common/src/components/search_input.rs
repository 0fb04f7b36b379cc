use web_sys::HtmlInputElement;
use yew::prelude::*;

#[derive(Properties, Clone, PartialEq)]
pub struct SearchInputProps {
    pub value: AttrValue,
    pub on_search: Callback<String>,
    #[prop_or(AttrValue::Static("Buscar..."))]
    pub placeholder: AttrValue,
}

#[function_component(SearchInput)]
pub fn search_input(props: &SearchInputProps) -> Html {
    let on_input = {
        let on_search = props.on_search.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            on_search.emit(input.value());
        })
    };

    html! {
        <input
            type="search"
            class="block w-full px-3 py-2 border border-gray-300 rounded-md bg-white text-gray-900
                   placeholder-gray-500 focus:outline-none focus:ring-1 focus:ring-blue-500 sm:text-sm"
            placeholder={props.placeholder.clone()}
            value={props.value.clone()}
            oninput={on_input}
        />
    }
}
