use crate::components::{ListPage, fetched};
use crate::format;
use becas_core::filter::filter;
use becas_core::models::{Application, ScholarshipType, Status};
use becas_frontend_common::components::DataTable;
use becas_frontend_common::{use_current_user, use_fetch};
use becas_http::ClientError;
use yew::prelude::*;

#[function_component(MyApplicationsPage)]
pub fn my_applications_page() -> Html {
    let student_id = use_current_user().map(|user| user.id).unwrap_or_default();
    let query = use_state(String::new);
    let data = use_fetch(move |client| async move {
        let items = client.applications_by_student(student_id).await?;
        let kinds = client.lookup::<ScholarshipType>().await?;
        let statuses = client.lookup::<Status>().await?;
        Ok::<_, ClientError>((items, kinds, statuses))
    });

    let on_search = {
        let query = query.clone();
        Callback::from(move |value: String| query.set(value))
    };

    let body = fetched(&*data, |(items, kinds, statuses)| {
        let rows: Vec<Vec<String>> = filter(items, &query)
            .into_iter()
            .map(|app| {
                vec![
                    app.scholarship_type_name
                        .clone()
                        .unwrap_or_else(|| kinds.display(Some(app.scholarship_type_id))),
                    format::date(app.submitted_on),
                    app.status_name
                        .clone()
                        .unwrap_or_else(|| statuses.display(app.status_id)),
                    format::opt_money(app.approved_amount),
                    format::text(app.notes.as_deref()),
                ]
            })
            .collect();
        html! {
            <DataTable
                headers={vec!["Tipo de beca", "Fecha", "Estado", "Monto aprobado", "Observaciones"]}
                rows={rows}
                empty_text="Todavía no has presentado solicitudes."
            />
        }
    });

    html! {
        <ListPage title="Mis solicitudes" query={(*query).clone()} on_search={on_search}>
            {body}
        </ListPage>
    }
}
