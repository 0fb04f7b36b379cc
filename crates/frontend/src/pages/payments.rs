use crate::components::{ListPage, fetched};
use crate::format;
use becas_core::filter::filter;
use becas_core::models::{PaymentDetail, Status};
use becas_frontend_common::components::DataTable;
use becas_frontend_common::use_fetch;
use becas_http::ClientError;
use yew::prelude::*;

#[function_component(PaymentsPage)]
pub fn payments_page() -> Html {
    let query = use_state(String::new);
    let data = use_fetch(|client| async move {
        let payments = client.list::<PaymentDetail>().await?;
        let statuses = client.lookup::<Status>().await?;
        Ok::<_, ClientError>((payments, statuses))
    });

    let on_search = {
        let query = query.clone();
        Callback::from(move |value: String| query.set(value))
    };

    let body = fetched(&*data, |(payments, statuses)| {
        let rows: Vec<Vec<String>> = filter(payments, &query)
            .into_iter()
            .map(|payment| {
                vec![
                    format!("#{}", payment.application_id),
                    format::money(payment.amount),
                    format::date(payment.paid_on),
                    format::text(payment.method.as_deref()),
                    format::text(payment.reference.as_deref()),
                    statuses.display(payment.status_id),
                ]
            })
            .collect();
        html! {
            <DataTable
                headers={vec!["Solicitud", "Monto", "Fecha", "Método", "Referencia", "Estado"]}
                rows={rows}
            />
        }
    });

    html! {
        <ListPage title="Pagos" query={(*query).clone()} on_search={on_search}>
            {body}
        </ListPage>
    }
}
