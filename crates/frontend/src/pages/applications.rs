use crate::components::{ListPage, StatusChanger, fetched};
use crate::format;
use becas_core::NameLookup;
use becas_core::filter::filter;
use becas_core::models::{AcademicPeriod, Application, ScholarshipType, Status};
use becas_frontend_common::components::DataTable;
use becas_frontend_common::{use_current_user, use_fetch};
use becas_http::ClientError;
use std::collections::HashMap;
use std::rc::Rc;
use yew::prelude::*;

struct Applications {
    items: Vec<Application>,
    statuses: Rc<NameLookup>,
    kinds: NameLookup,
    periods: NameLookup,
}

/// Status label, preferring a change made on this page over the loaded value
fn status_label(app: &Application, changed: Option<i64>, statuses: &NameLookup) -> String {
    match changed {
        Some(id) => statuses.display(Some(id)),
        None => app
            .status_name
            .clone()
            .unwrap_or_else(|| statuses.display(app.status_id)),
    }
}

/// All applications for admins; the backend scopes the list for students
#[function_component(ApplicationsPage)]
pub fn applications_page() -> Html {
    let is_admin = use_current_user().is_some_and(|user| user.is_admin());
    let query = use_state(String::new);
    let changed = use_state(HashMap::<i64, i64>::new);
    let data = use_fetch(|client| async move {
        Ok::<_, ClientError>(Applications {
            items: client.list::<Application>().await?,
            statuses: Rc::new(client.lookup::<Status>().await?),
            kinds: client.lookup::<ScholarshipType>().await?,
            periods: client.lookup::<AcademicPeriod>().await?,
        })
    });

    let on_search = {
        let query = query.clone();
        Callback::from(move |value: String| query.set(value))
    };

    let on_changed = {
        let changed = changed.clone();
        Callback::from(move |(application_id, status_id): (i64, i64)| {
            let mut next = (*changed).clone();
            next.insert(application_id, status_id);
            changed.set(next);
        })
    };

    let body = fetched(&*data, |data| {
        let visible = filter(&data.items, &query);
        let rows: Vec<Vec<String>> = visible
            .iter()
            .map(|app| {
                vec![
                    format!("#{}", app.id),
                    app.student_name
                        .clone()
                        .unwrap_or_else(|| format!("#{}", app.student_id)),
                    app.scholarship_type_name
                        .clone()
                        .unwrap_or_else(|| data.kinds.display(Some(app.scholarship_type_id))),
                    data.periods.display(Some(app.period_id)),
                    format::date(app.submitted_on),
                    status_label(app, changed.get(&app.id).copied(), &data.statuses),
                    format::opt_money(app.approved_amount),
                ]
            })
            .collect();

        let actions: Vec<Html> = if is_admin {
            visible
                .iter()
                .map(|app| {
                    html! {
                        <StatusChanger
                            application_id={app.id}
                            current={changed.get(&app.id).copied().or(app.status_id)}
                            statuses={data.statuses.clone()}
                            on_changed={on_changed.clone()}
                        />
                    }
                })
                .collect()
        } else {
            Vec::new()
        };

        html! {
            <DataTable
                headers={vec!["N.º", "Estudiante", "Tipo de beca", "Periodo", "Fecha", "Estado", "Monto aprobado"]}
                rows={rows}
                actions={actions}
                actions_header={is_admin.then_some("Cambiar estado")}
            />
        }
    });

    html! {
        <ListPage title="Solicitudes" query={(*query).clone()} on_search={on_search}>
            {body}
        </ListPage>
    }
}
