//! Activation page: register sold assets for a chosen series.
//!
//! The asset read only runs once a series is selected, and the selection
//! set resets whenever the series changes. Only UNREGISTERED assets are
//! selectable.

use std::collections::HashSet;

use leptos::prelude::*;
use leptos_router::hooks::use_query_map;

#[cfg(feature = "csr")]
use crate::components::toast::show_toast;
use crate::net::api;
use crate::net::types::AgencyAsset;
use crate::state::queries::QueryVersions;
use crate::state::selection;
#[cfg(feature = "csr")]
use crate::state::toast::Severity;
use crate::state::toast::ToastState;

/// Activation page: series dropdown, asset checkboxes, bulk registration.
#[component]
pub fn ActivationPage() -> impl IntoView {
    let toast = expect_context::<RwSignal<ToastState>>();
    let queries = expect_context::<RwSignal<QueryVersions>>();

    // A `?series=` query param (from the series page shortcut) pre-selects.
    let query = use_query_map();
    let initial_series = query.get_untracked().get("series").unwrap_or_default();

    let selected_series = RwSignal::new(initial_series);
    let selected = RwSignal::new(HashSet::<String>::new());
    let pending = RwSignal::new(false);

    let series_list = LocalResource::new(move || {
        let _version = queries.get().agency_series;
        async move { api::fetch_agency_series().await.unwrap_or_default() }
    });

    let assets = LocalResource::new(move || {
        let series_id = selected_series.get();
        let _version = queries.get().agency_assets;
        async move {
            if series_id.is_empty() {
                Vec::new()
            } else {
                api::fetch_agency_assets(&series_id).await.unwrap_or_default()
            }
        }
    });

    // Changing series invalidates the current selection.
    Effect::new(move || {
        selected_series.track();
        selected.update(HashSet::clear);
    });

    let unregistered_ids = move || {
        assets.get().map_or_else(Vec::new, |list| {
            list.iter()
                .filter(|a| a.status.is_unregistered())
                .map(|a| a.asset_id.clone())
                .collect::<Vec<_>>()
        })
    };

    let registered_count = move || {
        assets.get().map_or(0, |list| {
            list.iter().filter(|a| !a.status.is_unregistered()).count()
        })
    };

    let on_toggle_all = move |_| {
        let eligible = unregistered_ids();
        selected.update(|s| selection::toggle_all(s, &eligible));
    };

    let on_activate = move |_| {
        let asset_ids: Vec<String> = selected.get_untracked().iter().cloned().collect();
        if asset_ids.is_empty() || pending.get_untracked() {
            return;
        }
        #[cfg(feature = "csr")]
        {
            let prompt = format!("{}개 자산을 정품등록 하시겠습니까?", asset_ids.len());
            let confirmed = web_sys::window()
                .map(|w| w.confirm_with_message(&prompt).unwrap_or(false))
                .unwrap_or(false);
            if !confirmed {
                return;
            }
            pending.set(true);
            leptos::task::spawn_local(async move {
                match api::activate_assets(&asset_ids).await {
                    Ok(()) => {
                        show_toast(toast, "정품등록이 완료되었습니다.", Severity::Success);
                        selected.update(HashSet::clear);
                        queries.update(|q| {
                            q.bump_agency_assets();
                            q.bump_agency_series();
                            q.bump_dashboard();
                        });
                    }
                    Err(err) => {
                        log::warn!("activation failed: {err}");
                        show_toast(toast, "정품등록에 실패했습니다.", Severity::Error);
                    }
                }
                pending.set(false);
            });
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (asset_ids, toast);
        }
    };

    view! {
        <div class="page">
            <div class="page__header">
                <div>
                    <h2>"정품등록"</h2>
                    <p class="page__subtitle">"판매된 수량을 선택하여 등록합니다"</p>
                </div>
                <Show when=move || !selected.get().is_empty()>
                    <button
                        class="btn btn--primary"
                        disabled=move || pending.get()
                        on:click=on_activate
                    >
                        {move || {
                            if pending.get() {
                                "처리중...".to_owned()
                            } else {
                                format!("선택 정품등록 실행 ({}개)", selected.get().len())
                            }
                        }}
                    </button>
                </Show>
            </div>

            <div class="field field--inline">
                <span class="field__label">"시리즈 선택"</span>
                <select
                    class="input input--select"
                    prop:value=move || selected_series.get()
                    on:change=move |ev| selected_series.set(event_target_value(&ev))
                >
                    <option value="">"시리즈를 선택하세요"</option>
                    {move || {
                        series_list
                            .get()
                            .map(|list| {
                                list.into_iter()
                                    .map(|s| {
                                        view! {
                                            <option value=s.series_id.clone()>{s.name.clone()}</option>
                                        }
                                    })
                                    .collect_view()
                            })
                    }}
                </select>
            </div>

            <Show when=move || !selected_series.get().is_empty()>
                <div class="panel">
                    <div class="panel__header">
                        <div class="panel__title-group">
                            <span class="panel__title">"자산 목록"</span>
                            <span class="badge badge--yellow">
                                {move || format!("미등록 {}", unregistered_ids().len())}
                            </span>
                            <span class="badge badge--green">
                                {move || format!("등록 {}", registered_count())}
                            </span>
                        </div>
                    </div>
                    <table class="table">
                        <thead>
                            <tr>
                                <th class="table__checkbox-col">
                                    <input
                                        type="checkbox"
                                        prop:checked=move || {
                                            selection::all_selected(&selected.get(), &unregistered_ids())
                                        }
                                        on:change=on_toggle_all
                                    />
                                </th>
                                <th>"에디션"</th>
                                <th>"상태"</th>
                            </tr>
                        </thead>
                        <tbody>
                            {move || match assets.get() {
                                None => view! {
                                    <tr>
                                        <td colspan="3" class="table__empty">"불러오는 중..."</td>
                                    </tr>
                                }
                                    .into_any(),
                                Some(list) if list.is_empty() => view! {
                                    <tr>
                                        <td colspan="3" class="table__empty">"자산이 없습니다."</td>
                                    </tr>
                                }
                                    .into_any(),
                                Some(list) => {
                                    list.into_iter()
                                        .map(|asset| asset_row(asset, selected))
                                        .collect_view()
                                        .into_any()
                                }
                            }}
                        </tbody>
                    </table>
                </div>
            </Show>
        </div>
    }
}

/// One asset row; only unregistered assets get a checkbox.
fn asset_row(asset: AgencyAsset, selected: RwSignal<HashSet<String>>) -> impl IntoView {
    let status = asset.status;
    let id_for_check = asset.asset_id.clone();
    let id_for_toggle = asset.asset_id.clone();

    view! {
        <tr>
            <td class="table__checkbox-col">
                {if status.is_unregistered() {
                    view! {
                        <input
                            type="checkbox"
                            prop:checked=move || selected.with(|s| s.contains(&id_for_check))
                            on:change=move |_| {
                                selected.update(|s| selection::toggle(s, &id_for_toggle));
                            }
                        />
                    }
                        .into_any()
                } else {
                    view! { <span class="table__muted">"-"</span> }.into_any()
                }}
            </td>
            <td class="table__mono">{asset.edition.clone()}</td>
            <td>
                <span class=status.badge_class()>{status.label()}</span>
            </td>
        </tr>
    }
}
