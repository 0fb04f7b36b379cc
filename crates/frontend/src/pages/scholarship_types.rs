use crate::components::{ListPage, fetched};
use crate::format;
use becas_core::filter::filter;
use becas_core::models::{KnowledgeArea, ScholarshipType};
use becas_frontend_common::components::DataTable;
use becas_frontend_common::use_fetch;
use becas_http::ClientError;
use yew::prelude::*;

#[function_component(ScholarshipTypesPage)]
pub fn scholarship_types_page() -> Html {
    let query = use_state(String::new);
    let data = use_fetch(|client| async move {
        let kinds = client.list::<ScholarshipType>().await?;
        let areas = client.lookup::<KnowledgeArea>().await?;
        Ok::<_, ClientError>((kinds, areas))
    });

    let on_search = {
        let query = query.clone();
        Callback::from(move |value: String| query.set(value))
    };

    let body = fetched(&*data, |(kinds, areas)| {
        let rows: Vec<Vec<String>> = filter(kinds, &query)
            .into_iter()
            .map(|kind| {
                vec![
                    kind.name.clone(),
                    format::text(kind.description.as_deref()),
                    format::money(kind.amount),
                    areas.display(kind.knowledge_area_id),
                    format::yes_no(kind.active),
                ]
            })
            .collect();
        html! {
            <DataTable
                headers={vec!["Nombre", "Descripción", "Monto", "Área", "Activo"]}
                rows={rows}
            />
        }
    });

    html! {
        <ListPage title="Tipos de beca" query={(*query).clone()} on_search={on_search}>
            {body}
        </ListPage>
    }
}
