use crate::components::{ListPage, fetched};
use crate::format;
use becas_core::filter::filter;
use becas_core::models::{Career, Student};
use becas_frontend_common::components::DataTable;
use becas_frontend_common::use_fetch;
use becas_http::ClientError;
use yew::prelude::*;

#[function_component(StudentsPage)]
pub fn students_page() -> Html {
    let query = use_state(String::new);
    let data = use_fetch(|client| async move {
        let students = client.list::<Student>().await?;
        let careers = client.lookup::<Career>().await?;
        Ok::<_, ClientError>((students, careers))
    });

    let on_search = {
        let query = query.clone();
        Callback::from(move |value: String| query.set(value))
    };

    let body = fetched(&*data, |(students, careers)| {
        let rows: Vec<Vec<String>> = filter(students, &query)
            .into_iter()
            .map(|student| {
                vec![
                    student.national_id.clone(),
                    student.full_name(),
                    student.email.clone(),
                    careers.display(student.career_id),
                    student
                        .semester
                        .map(|s| s.to_string())
                        .unwrap_or_else(|| "-".into()),
                    format::date(student.registered_on),
                ]
            })
            .collect();
        html! {
            <DataTable
                headers={vec!["Cédula", "Nombre", "Correo", "Carrera", "Semestre", "Registro"]}
                rows={rows}
            />
        }
    });

    html! {
        <ListPage title="Estudiantes" query={(*query).clone()} on_search={on_search}>
            {body}
        </ListPage>
    }
}
