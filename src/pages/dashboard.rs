//! Dashboard page: KPI cards plus recent intake and registration activity.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the authenticated landing route. Counts come from the dashboard
//! summary endpoint with the series list length as a fallback when the
//! summary is unavailable.

use leptos::prelude::*;

use crate::net::api;
use crate::net::types::{AgencySeries, RecentActivation};
use crate::state::queries::QueryVersions;
use crate::util::dates::format_opt_date;

/// Dashboard page with aggregate counts and two recent-activity panels.
#[component]
pub fn DashboardPage() -> impl IntoView {
    let queries = expect_context::<RwSignal<QueryVersions>>();

    let series = LocalResource::new(move || {
        let _version = queries.get().agency_series;
        async move { api::fetch_agency_series().await.unwrap_or_default() }
    });

    let summary = LocalResource::new(move || {
        let _version = queries.get().dashboard;
        async move { api::fetch_dashboard().await.unwrap_or_default() }
    });

    view! {
        <div class="page">
            {move || {
                let counts = summary.get().unwrap_or_default();
                let series_len = series.get().map_or(0, |list| list.len() as i64);
                let total = counts.total_series.unwrap_or(series_len);
                view! {
                    <div class="kpi-grid">
                        <KpiCard color="blue" label="입고 시리즈" value=total/>
                        <KpiCard
                            color="yellow"
                            label="미등록 자산"
                            value=counts.unregistered_assets.unwrap_or(0)
                        />
                        <KpiCard
                            color="green"
                            label="등록 완료 자산"
                            value=counts.registered_assets.unwrap_or(0)
                        />
                        <KpiCard
                            color="purple"
                            label="최근 등록 건수"
                            value=counts.recent_registrations.unwrap_or(0)
                            sub="최근 7일"
                        />
                    </div>
                }
            }}

            <div class="panel-grid">
                <div class="panel">
                    <div class="panel__header">
                        <span class="panel__title">"최근 입고 시리즈"</span>
                        <span class="badge badge--blue">
                            {move || format!("{}건", series.get().map_or(0, |list| list.len()))}
                        </span>
                    </div>
                    {move || {
                        series
                            .get()
                            .map(|list| {
                                if list.is_empty() {
                                    view! {
                                        <div class="panel__empty">"입고된 시리즈가 없습니다"</div>
                                    }
                                        .into_any()
                                } else {
                                    list.into_iter()
                                        .take(5)
                                        .map(series_row)
                                        .collect_view()
                                        .into_any()
                                }
                            })
                    }}
                </div>

                <div class="panel">
                    <div class="panel__header">
                        <span class="panel__title">"최근 등록 내역"</span>
                        <span class="badge badge--purple">
                            {move || {
                                format!(
                                    "{}건",
                                    summary.get().and_then(|s| s.recent_registrations).unwrap_or(0),
                                )
                            }}
                        </span>
                    </div>
                    {move || {
                        summary
                            .get()
                            .map(|counts| {
                                if counts.recent_activations.is_empty() {
                                    view! {
                                        <div class="panel__empty">"등록 내역이 없습니다"</div>
                                    }
                                        .into_any()
                                } else {
                                    counts
                                        .recent_activations
                                        .into_iter()
                                        .take(5)
                                        .map(activation_row)
                                        .collect_view()
                                        .into_any()
                                }
                            })
                    }}
                </div>
            </div>
        </div>
    }
}

/// One aggregate-count card with a colored accent bar.
#[component]
fn KpiCard(
    color: &'static str,
    label: &'static str,
    value: i64,
    #[prop(into, optional)] sub: Option<&'static str>,
) -> impl IntoView {
    view! {
        <div class="kpi">
            <div class=format!("kpi__bar kpi__bar--{color}")></div>
            <div class="kpi__label">{label}</div>
            <div class=format!("kpi__value kpi__value--{color}")>{value}</div>
            {sub.map(|s| view! { <div class="kpi__sub">{s}</div> })}
        </div>
    }
}

fn series_row(series: AgencySeries) -> impl IntoView {
    let meta = format!(
        "{}개  {}",
        series.total(),
        format_opt_date(series.shipped_at.as_deref())
    );

    view! {
        <div class="panel__row">
            <div class="panel__row-main">
                <div class="panel__row-icon panel__row-icon--blue">"S"</div>
                <div>
                    <div class="panel__row-title">{series.name.clone()}</div>
                    <div class="panel__row-meta">{meta}</div>
                </div>
            </div>
            <span class="badge badge--green">"입고"</span>
        </div>
    }
}

fn activation_row(row: RecentActivation) -> impl IntoView {
    let meta = format!(
        "{}건  {}",
        row.count.unwrap_or(1),
        format_opt_date(row.activated_at.as_deref())
    );

    view! {
        <div class="panel__row">
            <div class="panel__row-main">
                <div class="panel__row-icon panel__row-icon--purple">"R"</div>
                <div>
                    <div class="panel__row-title">{row.title()}</div>
                    <div class="panel__row-meta">{meta}</div>
                </div>
            </div>
            <span class="badge badge--green">"등록 완료"</span>
        </div>
    }
}
