//! Download page: save registered asset files, singly or as a series ZIP.

use leptos::prelude::*;

#[cfg(feature = "csr")]
use crate::components::toast::show_toast;
use crate::net::api;
use crate::net::types::AgencyAsset;
use crate::state::queries::QueryVersions;
#[cfg(feature = "csr")]
use crate::state::toast::Severity;
use crate::state::toast::ToastState;
#[cfg(feature = "csr")]
use crate::util::download;

/// Which download is currently in flight.
#[derive(Clone, Debug, PartialEq, Eq)]
enum Downloading {
    Asset(String),
    SeriesZip,
}

/// Download page: series dropdown plus a table of registered assets.
#[component]
pub fn DownloadPage() -> impl IntoView {
    let toast = expect_context::<RwSignal<ToastState>>();
    let queries = expect_context::<RwSignal<QueryVersions>>();

    let selected_series = RwSignal::new(String::new());
    let downloading = RwSignal::new(None::<Downloading>);

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

    // Only registered assets are downloadable.
    let registered = move || {
        assets.get().map_or_else(Vec::new, |list| {
            list.into_iter()
                .filter(|a| !a.status.is_unregistered())
                .collect::<Vec<_>>()
        })
    };

    let on_download_asset = Callback::new(move |asset_id: String| {
        if downloading.get_untracked().is_some() {
            return;
        }
        downloading.set(Some(Downloading::Asset(asset_id.clone())));
        #[cfg(feature = "csr")]
        leptos::task::spawn_local(async move {
            let saved = match api::download_asset(&asset_id).await {
                Ok(bytes) => download::save_bytes(&bytes, &format!("{asset_id}.zip")),
                Err(err) => Err(err.to_string()),
            };
            if let Err(err) = saved {
                log::warn!("asset download failed: {err}");
                show_toast(toast, "다운로드에 실패했습니다.", Severity::Error);
            }
            downloading.set(None);
        });
        #[cfg(not(feature = "csr"))]
        {
            let _ = toast;
            downloading.set(None);
        }
    });

    let on_download_all = move |_| {
        let series_id = selected_series.get_untracked();
        if series_id.is_empty() || downloading.get_untracked().is_some() {
            return;
        }
        downloading.set(Some(Downloading::SeriesZip));
        #[cfg(feature = "csr")]
        leptos::task::spawn_local(async move {
            let saved = match api::download_series_zip(&series_id).await {
                Ok(bytes) => download::save_bytes(&bytes, &format!("series-{series_id}.zip")),
                Err(err) => Err(err.to_string()),
            };
            if let Err(err) = saved {
                log::warn!("series download failed: {err}");
                show_toast(toast, "다운로드에 실패했습니다.", Severity::Error);
            }
            downloading.set(None);
        });
        #[cfg(not(feature = "csr"))]
        {
            let _ = series_id;
            downloading.set(None);
        }
    };

    view! {
        <div class="page">
            <div class="page__header">
                <div>
                    <h2>"다운로드"</h2>
                    <p class="page__subtitle">"등록 완료된 자산 파일 다운로드"</p>
                </div>
                <Show when=move || !selected_series.get().is_empty() && !registered().is_empty()>
                    <button
                        class="btn btn--primary"
                        disabled=move || downloading.get() == Some(Downloading::SeriesZip)
                        on:click=on_download_all
                    >
                        {move || {
                            if downloading.get() == Some(Downloading::SeriesZip) {
                                "준비중...".to_owned()
                            } else {
                                format!("시리즈 ZIP 다운로드 ({}개)", registered().len())
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
                        <span class="panel__title">"등록 완료 자산"</span>
                        <span class="badge badge--green">
                            {move || format!("{}개", registered().len())}
                        </span>
                    </div>
                    <table class="table">
                        <thead>
                            <tr>
                                <th>"에디션"</th>
                                <th>"상태"</th>
                                <th>"다운로드"</th>
                            </tr>
                        </thead>
                        <tbody>
                            {move || {
                                if assets.get().is_none() {
                                    return view! {
                                        <tr>
                                            <td colspan="3" class="table__empty">"불러오는 중..."</td>
                                        </tr>
                                    }
                                        .into_any();
                                }
                                let rows = registered();
                                if rows.is_empty() {
                                    view! {
                                        <tr>
                                            <td colspan="3" class="table__empty">
                                                "등록 완료된 자산이 없습니다."
                                            </td>
                                        </tr>
                                    }
                                        .into_any()
                                } else {
                                    rows.into_iter()
                                        .map(|asset| asset_row(asset, downloading, on_download_asset))
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

fn asset_row(
    asset: AgencyAsset,
    downloading: RwSignal<Option<Downloading>>,
    on_download: Callback<String>,
) -> impl IntoView {
    let id_for_state = asset.asset_id.clone();
    let id_for_click = asset.asset_id.clone();
    let busy = move || downloading.get() == Some(Downloading::Asset(id_for_state.clone()));
    let busy_label = busy.clone();

    view! {
        <tr>
            <td class="table__mono">{asset.edition.clone()}</td>
            <td>
                <span class="badge badge--green">"등록"</span>
            </td>
            <td>
                <button
                    class="btn btn--small"
                    disabled=busy
                    on:click=move |_| on_download.run(id_for_click.clone())
                >
                    {move || if busy_label() { "준비중..." } else { "다운로드" }}
                </button>
            </td>
        </tr>
    }
}
