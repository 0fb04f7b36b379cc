use yew::prelude::*;

#[derive(Properties, Clone, PartialEq)]
pub struct DataTableProps {
    pub headers: Vec<&'static str>,
    /// Pre-rendered cells, one inner vector per row
    pub rows: Vec<Vec<String>>,
    /// Optional trailing column of controls, one entry per row
    #[prop_or_default]
    pub actions: Vec<Html>,
    #[prop_or_default]
    pub actions_header: Option<&'static str>,
    #[prop_or(AttrValue::Static("No hay registros."))]
    pub empty_text: AttrValue,
}

#[function_component(DataTable)]
pub fn data_table(props: &DataTableProps) -> Html {
    if props.rows.is_empty() {
        return html! {
            <p class="p-6 text-center text-gray-500">{props.empty_text.clone()}</p>
        };
    }

    let header_class = "px-4 py-3 text-left text-xs font-medium text-gray-500 uppercase tracking-wider";

    html! {
        <div class="bg-white shadow overflow-x-auto rounded-lg">
            <table class="min-w-full divide-y divide-gray-200">
                <thead class="bg-gray-50">
                    <tr>
                        {for props.headers.iter().map(|header| html! {
                            <th scope="col" class={header_class}>{*header}</th>
                        })}
                        if let Some(header) = props.actions_header {
                            <th scope="col" class={header_class}>{header}</th>
                        }
                    </tr>
                </thead>
                <tbody class="divide-y divide-gray-200">
                    {for props.rows.iter().enumerate().map(|(index, row)| html! {
                        <tr>
                            {for row.iter().map(|cell| html! {
                                <td class="px-4 py-3 whitespace-nowrap text-sm text-gray-900">{cell.clone()}</td>
                            })}
                            if let Some(action) = props.actions.get(index) {
                                <td class="px-4 py-2">{action.clone()}</td>
                            }
                        </tr>
                    })}
                </tbody>
            </table>
        </div>
    }
}
