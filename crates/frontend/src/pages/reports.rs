use crate::components::fetched;
use becas_core::models::{AcademicPeriod, ReportFilter, ReportKind, ReportRow};
use becas_frontend_common::components::{ErrorMessage, LoadingSpinner};
use becas_frontend_common::{use_fetch, use_session};
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlSelectElement;
use yew::prelude::*;

#[derive(Clone, PartialEq)]
enum Outcome {
    Idle,
    Running,
    Done(Vec<ReportRow>),
    Failed(String),
}

/// Column names in first-seen order across all rows
fn columns(rows: &[ReportRow]) -> Vec<String> {
    let mut seen: Vec<String> = Vec::new();
    for column in rows.iter().flat_map(ReportRow::columns) {
        if !seen.iter().any(|c| c == column) {
            seen.push(column.to_string());
        }
    }
    seen
}

fn render_rows(rows: &[ReportRow]) -> Html {
    let columns = columns(rows);
    let cells: Vec<Vec<String>> = rows
        .iter()
        .map(|row| columns.iter().map(|column| row.cell(column)).collect())
        .collect();
    // Columns are only known at runtime, so this cannot use DataTable
    let header = html! {
        <tr>
            {for columns.iter().map(|c| html! {
                <th class="px-4 py-3 text-left text-xs font-medium text-gray-500 uppercase">{c.clone()}</th>
            })}
        </tr>
    };

    if cells.is_empty() {
        return html! {
            <p class="p-6 text-center text-gray-500">{"El reporte no devolvió resultados."}</p>
        };
    }

    html! {
        <div class="bg-white shadow overflow-x-auto rounded-lg">
            <table class="min-w-full divide-y divide-gray-200">
                <thead class="bg-gray-50">{header}</thead>
                <tbody class="divide-y divide-gray-200">
                    {for cells.into_iter().map(|row| html! {
                        <tr>
                            {for row.into_iter().map(|cell| html! {
                                <td class="px-4 py-3 whitespace-nowrap text-sm text-gray-900">{cell}</td>
                            })}
                        </tr>
                    })}
                </tbody>
            </table>
        </div>
    }
}

#[function_component(ReportsPage)]
pub fn reports_page() -> Html {
    let ctx = use_session();
    let kind = use_state(|| ReportKind::ApplicationsByStatus);
    let period = use_state(|| None::<i64>);
    let outcome = use_state(|| Outcome::Idle);
    let periods = use_fetch(|client| async move { client.lookup::<AcademicPeriod>().await });

    let on_kind = {
        let kind = kind.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            if let Some(selected) = ReportKind::ALL.iter().find(|k| k.slug() == select.value()) {
                kind.set(*selected);
            }
        })
    };

    let on_period = {
        let period = period.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            period.set(select.value().parse().ok());
        })
    };

    let on_generate = {
        let api = ctx.api.clone();
        let kind = *kind;
        let period = *period;
        let outcome = outcome.clone();
        Callback::from(move |_: MouseEvent| {
            let api = api.clone();
            let outcome = outcome.clone();
            let filter = ReportFilter {
                period_id: period,
                ..ReportFilter::default()
            };
            outcome.set(Outcome::Running);
            spawn_local(async move {
                let result = api
                    .run(|client| async move { client.report(kind, &filter).await })
                    .await;
                outcome.set(match result {
                    Ok(rows) => Outcome::Done(rows),
                    Err(err) => Outcome::Failed(err.user_message()),
                });
            });
        })
    };

    let period_select = fetched(&*periods, |lookup| {
        html! {
            <select onchange={on_period} class="border border-gray-300 rounded px-3 py-2">
                <option value="" selected={period.is_none()}>{"Todos los periodos"}</option>
                {for lookup.entries().into_iter().map(|(id, name)| html! {
                    <option value={id.to_string()} selected={*period == Some(id)}>{name}</option>
                })}
            </select>
        }
    });

    let result = match &*outcome {
        Outcome::Idle => html! {},
        Outcome::Running => html! { <LoadingSpinner text="Generando reporte..." /> },
        Outcome::Failed(message) => html! { <ErrorMessage message={message.clone()} /> },
        Outcome::Done(rows) => render_rows(rows),
    };

    html! {
        <section class="space-y-4">
            <h1 class="text-2xl font-semibold text-gray-900">{"Reportes"}</h1>
            <div class="flex flex-wrap items-center gap-3">
                <select onchange={on_kind} class="border border-gray-300 rounded px-3 py-2">
                    {for ReportKind::ALL.iter().map(|k| html! {
                        <option value={k.slug()} selected={*kind == *k}>{k.title()}</option>
                    })}
                </select>
                {period_select}
                <button
                    onclick={on_generate}
                    disabled={*outcome == Outcome::Running}
                    class="bg-blue-600 hover:bg-blue-700 text-white px-4 py-2 rounded disabled:opacity-50"
                >
                    {"Generar"}
                </button>
            </div>
            {result}
        </section>
    }
}
