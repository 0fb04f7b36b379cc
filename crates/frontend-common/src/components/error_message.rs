use yew::prelude::*;

#[derive(Properties, Clone, PartialEq)]
pub struct ErrorMessageProps {
    pub message: AttrValue,
}

/// Inline error shown next to the list or form that failed
#[function_component(ErrorMessage)]
pub fn error_message(props: &ErrorMessageProps) -> Html {
    html! {
        <div class="rounded-md bg-red-50 border border-red-200 p-3 text-sm text-red-800" role="alert">
            {props.message.clone()}
        </div>
    }
}
