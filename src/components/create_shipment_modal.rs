//! Two-step shipment creation modal: pick a series, then pick its PRINTED
//! assets.
//!
//! When the asset list loads, every asset starts selected and the user
//! deselects; an intentional opt-out workflow shortcut.

use std::collections::HashSet;

use leptos::prelude::*;

#[cfg(feature = "csr")]
use crate::components::toast::show_toast;
use crate::net::api;
use crate::net::types::{PrintAsset, Series};
use crate::state::queries::QueryVersions;
use crate::state::selection;
#[cfg(feature = "csr")]
use crate::state::toast::Severity;
use crate::state::toast::ToastState;
use crate::util::drag::{DragState, event_target_tag};

#[derive(Clone, Copy, PartialEq, Eq)]
enum Step {
    Series,
    Assets,
}

/// Modal for creating a shipment from a series' PRINTED assets.
#[component]
pub fn CreateShipmentModal(on_close: Callback<()>) -> impl IntoView {
    let toast = expect_context::<RwSignal<ToastState>>();
    let queries = expect_context::<RwSignal<QueryVersions>>();

    let step = RwSignal::new(Step::Series);
    let selected_series = RwSignal::new(None::<Series>);
    let selected = RwSignal::new(HashSet::<String>::new());
    let pending = RwSignal::new(false);
    let drag = RwSignal::new(DragState::default());

    let series_list = LocalResource::new(move || async move {
        api::fetch_series().await.unwrap_or_default()
    });

    // Asset read is gated: only issued on the asset step with a series chosen.
    let assets = LocalResource::new(move || {
        let series_id = selected_series.get().map(|s| s.series_id);
        let on_asset_step = step.get() == Step::Assets;
        async move {
            match series_id {
                Some(id) if on_asset_step => {
                    api::fetch_printed_assets(&id).await.unwrap_or_default()
                }
                _ => Vec::new(),
            }
        }
    });

    // Select everything as soon as the asset list arrives.
    Effect::new(move || {
        if let Some(list) = assets.get() {
            if !list.is_empty() {
                selected.update(|s| {
                    s.clear();
                    s.extend(list.iter().map(|a| a.asset_id.clone()));
                });
            }
        }
    });

    let on_series_select = Callback::new(move |series: Series| {
        selected_series.set(Some(series));
        selected.update(HashSet::clear);
        step.set(Step::Assets);
    });

    let on_toggle_all = move |_| {
        let Some(list) = assets.get_untracked() else {
            return;
        };
        let eligible: Vec<String> = list.iter().map(|a| a.asset_id.clone()).collect();
        selected.update(|s| selection::toggle_all(s, &eligible));
    };

    let all_selected = move || {
        assets.get().is_some_and(|list| {
            let eligible: Vec<String> = list.iter().map(|a| a.asset_id.clone()).collect();
            selection::all_selected(&selected.get(), &eligible)
        })
    };

    let on_create = move |_| {
        let Some(series) = selected_series.get_untracked() else {
            return;
        };
        let asset_ids: Vec<String> = selected.get_untracked().iter().cloned().collect();
        if asset_ids.is_empty() || pending.get_untracked() {
            return;
        }
        pending.set(true);
        #[cfg(feature = "csr")]
        leptos::task::spawn_local(async move {
            match api::create_shipment(&series.series_id, &asset_ids).await {
                Ok(()) => {
                    queries.update(QueryVersions::bump_shipments);
                    show_toast(toast, "출고가 생성되었습니다", Severity::Success);
                    on_close.run(());
                }
                Err(err) => {
                    log::warn!("create shipment failed: {err}");
                    show_toast(toast, &api::create_shipment_error_message(&err), Severity::Error);
                }
            }
            pending.set(false);
        });
        #[cfg(not(feature = "csr"))]
        {
            let _ = (series, toast, queries);
            pending.set(false);
        }
    };

    let on_mouse_down = move |ev: leptos::ev::MouseEvent| {
        let tag = event_target_tag(&ev);
        drag.update(|d| {
            d.press(f64::from(ev.client_x()), f64::from(ev.client_y()), &tag);
        });
    };
    let on_mouse_move = move |ev: leptos::ev::MouseEvent| {
        if drag.get_untracked().is_dragging() {
            drag.update(|d| d.moved(f64::from(ev.client_x()), f64::from(ev.client_y())));
        }
    };
    let on_mouse_up = move |_| drag.update(DragState::release);

    let subtitle = move || match step.get() {
        Step::Series => "시리즈를 선택하세요".to_owned(),
        Step::Assets => {
            let name = selected_series
                .get()
                .map_or_else(|| "시리즈".to_owned(), |s| s.name);
            format!("{name} - 자산 선택")
        }
    };

    view! {
        <div
            class="modal-backdrop"
            on:mousemove=on_mouse_move
            on:mouseup=on_mouse_up
            on:mouseleave=on_mouse_up
        >
            <div
                class="modal modal--wide"
                style:transform=move || drag.get().transform()
                on:mousedown=on_mouse_down
            >
                <div class="modal__header">
                    <h2>"출고 생성"</h2>
                    <p class="modal__subtitle">{subtitle}</p>
                </div>

                <div class="modal__body">
                    <Show when=move || step.get() == Step::Series>
                        {move || {
                            series_list
                                .get()
                                .map(|list| {
                                    if list.is_empty() {
                                        view! {
                                            <p class="modal__empty">"시리즈가 없습니다"</p>
                                        }
                                            .into_any()
                                    } else {
                                        view! {
                                            <div class="series-pick">
                                                {list
                                                    .into_iter()
                                                    .map(|series| {
                                                        let label_code = series.code.clone();
                                                        let label_id = series
                                                            .display_id
                                                            .clone()
                                                            .unwrap_or_else(|| series.series_id.clone());
                                                        let name = series.name.clone();
                                                        view! {
                                                            <button
                                                                class="series-pick__item"
                                                                on:click=move |_| {
                                                                    on_series_select.run(series.clone())
                                                                }
                                                            >
                                                                <span class="series-pick__name">{name}</span>
                                                                {label_code
                                                                    .map(|code| {
                                                                        view! {
                                                                            <span class="series-pick__code">
                                                                                "(" {code} ")"
                                                                            </span>
                                                                        }
                                                                    })}
                                                                <div class="series-pick__id">{label_id}</div>
                                                            </button>
                                                        }
                                                    })
                                                    .collect_view()}
                                            </div>
                                        }
                                            .into_any()
                                    }
                                })
                        }}
                    </Show>

                    <Show when=move || step.get() == Step::Assets>
                        {move || {
                            match assets.get() {
                                None => view! { <p class="modal__empty">"로딩 중..."</p> }.into_any(),
                                Some(list) if list.is_empty() => {
                                    view! {
                                        <p class="modal__empty">
                                            "PRINTED 상태의 자산이 없습니다"
                                        </p>
                                    }
                                        .into_any()
                                }
                                Some(list) => {
                                    let count = list.len();
                                    view! {
                                        <div class="asset-pick__bar">
                                            <span class="asset-pick__count">
                                                {format!("자산 목록 ({count}개)")}
                                            </span>
                                            <button class="asset-pick__toggle-all" on:click=on_toggle_all>
                                                {move || {
                                                    if all_selected() { "전체 해제" } else { "전체 선택" }
                                                }}
                                            </button>
                                        </div>
                                        <div class="asset-pick">
                                            {list
                                                .into_iter()
                                                .map(|asset| asset_row(asset, selected))
                                                .collect_view()}
                                        </div>
                                    }
                                        .into_any()
                                }
                            }
                        }}
                    </Show>
                </div>

                <div class="modal__footer">
                    <Show when=move || step.get() == Step::Assets>
                        <div class="modal__summary">
                            <span>"선택된 자산"</span>
                            <span class="modal__summary-count">
                                {move || format!("{}개", selected.get().len())}
                            </span>
                        </div>
                    </Show>
                    <div class="modal__actions">
                        <Show when=move || step.get() == Step::Assets>
                            <button class="btn" on:click=move |_| step.set(Step::Series)>
                                "이전"
                            </button>
                        </Show>
                        <button
                            class="btn"
                            disabled=move || pending.get()
                            on:click=move |_| on_close.run(())
                        >
                            "취소"
                        </button>
                        <Show when=move || step.get() == Step::Assets>
                            <button
                                class="btn btn--primary"
                                disabled=move || pending.get() || selected.get().is_empty()
                                on:click=on_create
                            >
                                {move || if pending.get() { "생성 중..." } else { "출고 생성" }}
                            </button>
                        </Show>
                    </div>
                </div>
            </div>
        </div>
    }
}

/// One selectable asset row with thumbnail fallback to the edition number.
fn asset_row(asset: PrintAsset, selected: RwSignal<HashSet<String>>) -> impl IntoView {
    let id_for_check = asset.asset_id.clone();
    let id_for_toggle = asset.asset_id.clone();
    let serial = asset.serial.clone().unwrap_or_else(|| asset.asset_id.clone());
    let edition = asset.edition.map_or_else(|| "-".to_owned(), |e| e.to_string());
    let thumb = asset.image_url.clone();
    let edition_fallback = edition.clone();

    view! {
        <label class=move || {
            if selected.get().contains(&id_for_check) {
                "asset-pick__row asset-pick__row--selected"
            } else {
                "asset-pick__row"
            }
        }>
            <input
                type="checkbox"
                prop:checked=move || selected.with(|s| s.contains(&asset.asset_id))
                on:change=move |_| {
                    selected.update(|s| selection::toggle(s, &id_for_toggle));
                }
            />
            <div class="asset-pick__thumb">
                {match thumb {
                    Some(url) => view! { <img src=url alt=serial.clone()/> }.into_any(),
                    None => {
                        view! {
                            <span class="asset-pick__thumb-fallback">
                                "#" {edition_fallback}
                            </span>
                        }
                            .into_any()
                    }
                }}
            </div>
            <div class="asset-pick__meta">
                <div class="asset-pick__serial">{serial.clone()}</div>
                <div class="asset-pick__edition">"에디션: " {edition}</div>
            </div>
        </label>
    }
}
