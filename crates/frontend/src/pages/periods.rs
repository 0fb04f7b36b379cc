use crate::components::{ListPage, fetched};
use crate::format;
use becas_core::filter::filter;
use becas_core::models::AcademicPeriod;
use becas_frontend_common::components::DataTable;
use becas_frontend_common::use_fetch;
use chrono::Local;
use yew::prelude::*;

#[function_component(PeriodsPage)]
pub fn periods_page() -> Html {
    let query = use_state(String::new);
    let data = use_fetch(|client| async move { client.list::<AcademicPeriod>().await });

    let on_search = {
        let query = query.clone();
        Callback::from(move |value: String| query.set(value))
    };

    let today = Local::now().date_naive();
    let body = fetched(&*data, |periods| {
        let rows: Vec<Vec<String>> = filter(periods, &query)
            .into_iter()
            .map(|period| {
                vec![
                    period.name.clone(),
                    format::date(period.starts_on),
                    format::date(period.ends_on),
                    format::yes_no(period.active),
                    format::yes_no(period.contains(today)),
                ]
            })
            .collect();
        html! {
            <DataTable
                headers={vec!["Periodo", "Inicio", "Fin", "Activo", "En curso"]}
                rows={rows}
            />
        }
    });

    html! {
        <ListPage title="Periodos académicos" query={(*query).clone()} on_search={on_search}>
            {body}
        </ListPage>
    }
}
