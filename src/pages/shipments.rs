//! Shipments page: shipment list plus the create/detail modals.

use leptos::prelude::*;

use crate::components::create_shipment_modal::CreateShipmentModal;
use crate::components::shipment_detail_modal::ShipmentDetailModal;
use crate::net::api;
use crate::net::types::Shipment;
use crate::state::queries::QueryVersions;
use crate::util::dates::format_datetime;

/// Shipment list. A row opens the detail modal; the header button opens
/// the two-step creation modal.
#[component]
pub fn ShipmentsPage() -> impl IntoView {
    let queries = expect_context::<RwSignal<QueryVersions>>();

    let shipments = LocalResource::new(move || {
        let _version = queries.get().shipments;
        async move { api::fetch_shipments().await.unwrap_or_default() }
    });

    let show_create = RwSignal::new(false);
    let detail_id = RwSignal::new(None::<String>);

    let on_create_close = Callback::new(move |()| show_create.set(false));
    let on_detail_close = Callback::new(move |()| detail_id.set(None));
    let on_row_open = Callback::new(move |id: String| detail_id.set(Some(id)));

    view! {
        <div class="page">
            <div class="page__header">
                <div>
                    <h2>"출고 관리"</h2>
                    <p class="page__subtitle">"시리즈 자산 출고 내역"</p>
                </div>
                <button class="btn btn--primary" on:click=move |_| show_create.set(true)>
                    "출고 생성"
                </button>
            </div>

            <div class="panel">
                <table class="table">
                    <thead>
                        <tr>
                            <th>"출고 번호"</th>
                            <th>"시리즈"</th>
                            <th>"자산 수"</th>
                            <th>"상태"</th>
                            <th>"생성일시"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || match shipments.get() {
                            None => view! {
                                <tr>
                                    <td colspan="5" class="table__empty">"불러오는 중..."</td>
                                </tr>
                            }
                                .into_any(),
                            Some(list) if list.is_empty() => view! {
                                <tr>
                                    <td colspan="5" class="table__empty">"출고 내역이 없습니다."</td>
                                </tr>
                            }
                                .into_any(),
                            Some(list) => {
                                list.into_iter()
                                    .map(|shipment| shipment_row(shipment, on_row_open))
                                    .collect_view()
                                    .into_any()
                            }
                        }}
                    </tbody>
                </table>
            </div>

            <Show when=move || show_create.get()>
                <CreateShipmentModal on_close=on_create_close/>
            </Show>

            {move || {
                detail_id
                    .get()
                    .map(|id| {
                        view! { <ShipmentDetailModal shipment_id=id on_close=on_detail_close/> }
                    })
            }}
        </div>
    }
}

fn shipment_row(shipment: Shipment, on_open: Callback<String>) -> impl IntoView {
    let id = shipment.shipment_id.clone();
    let status = shipment.status;

    view! {
        <tr class="table__row--clickable" on:click=move |_| on_open.run(id.clone())>
            <td class="table__mono table__strong">{shipment.display_id.clone()}</td>
            <td>{shipment.series_name().to_owned()}</td>
            <td class="table__mono">{format!("{}개", shipment.asset_count)}</td>
            <td>
                <span class=status.badge_class()>{status.label()}</span>
            </td>
            <td class="table__mono table__muted">{format_datetime(&shipment.created_at)}</td>
        </tr>
    }
}
