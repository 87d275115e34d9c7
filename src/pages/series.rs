//! Series page: intake list with per-series registration progress.

use leptos::prelude::*;

use crate::net::api;
use crate::net::types::AgencySeries;
use crate::state::queries::QueryVersions;
use crate::util::dates::format_opt_date;

/// Table of intaken series; rows with unregistered assets link straight
/// into the activation flow for that series.
#[component]
pub fn SeriesPage() -> impl IntoView {
    let queries = expect_context::<RwSignal<QueryVersions>>();

    let series = LocalResource::new(move || {
        let _version = queries.get().agency_series;
        async move { api::fetch_agency_series().await.unwrap_or_default() }
    });

    view! {
        <div class="page">
            <div class="page__header">
                <div>
                    <h2>"시리즈"</h2>
                    <p class="page__subtitle">"입고된 시리즈 목록"</p>
                </div>
            </div>

            <div class="panel">
                <table class="table">
                    <thead>
                        <tr>
                            <th>"시리즈명"</th>
                            <th>"총 수량"</th>
                            <th>"등록 수량"</th>
                            <th>"미등록 수량"</th>
                            <th>"입고일"</th>
                            <th>"액션"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || match series.get() {
                            None => view! {
                                <tr>
                                    <td colspan="6" class="table__empty">"불러오는 중..."</td>
                                </tr>
                            }
                                .into_any(),
                            Some(list) if list.is_empty() => view! {
                                <tr>
                                    <td colspan="6" class="table__empty">
                                        "입고된 시리즈가 없습니다."
                                    </td>
                                </tr>
                            }
                                .into_any(),
                            Some(list) => {
                                list.into_iter().map(series_row).collect_view().into_any()
                            }
                        }}
                    </tbody>
                </table>
            </div>
        </div>
    }
}

fn series_row(series: AgencySeries) -> impl IntoView {
    let unregistered = series.unregistered();
    let activation_href = format!("/activation?series={}", series.series_id);
    let unregistered_class = if unregistered > 0 {
        "table__mono table__warn"
    } else {
        "table__mono table__muted"
    };

    view! {
        <tr>
            <td class="table__strong">{series.name.clone()}</td>
            <td class="table__mono">{series.total()}</td>
            <td class="table__mono table__ok">{series.registered()}</td>
            <td class=unregistered_class>{unregistered}</td>
            <td class="table__mono table__muted">
                {format_opt_date(series.shipped_at.as_deref())}
            </td>
            <td>
                <Show when=move || (unregistered > 0)>
                    <a class="btn btn--small" href=activation_href.clone()>
                        "정품등록"
                    </a>
                </Show>
            </td>
        </tr>
    }
}
