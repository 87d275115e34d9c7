//! Shipment detail modal: info grid, contained assets, confirm / void /
//! download actions.
//!
//! Confirmation opens a nested dialog that collects a recipient email and
//! validates it locally before any network call. Voiding reveals an inline
//! reason input. Both mutations invalidate the shipment list and this
//! shipment's detail on success.

use leptos::prelude::*;

use crate::components::toast::show_toast;
use crate::net::api;
use crate::net::types::{Shipment, ShipmentAsset};
use crate::state::queries::QueryVersions;
use crate::state::toast::{Severity, ToastState};
use crate::util::dates::format_datetime;
use crate::util::download;
use crate::util::drag::{DragState, event_target_tag};
use crate::util::validate::is_valid_email;

/// Modal showing one shipment, keyed by `shipment_id`.
#[component]
pub fn ShipmentDetailModal(shipment_id: String, on_close: Callback<()>) -> impl IntoView {
    let toast = expect_context::<RwSignal<ToastState>>();
    let queries = expect_context::<RwSignal<QueryVersions>>();

    let shipment_id = StoredValue::new(shipment_id);

    let show_void_input = RwSignal::new(false);
    let void_reason = RwSignal::new(String::new());
    let void_pending = RwSignal::new(false);

    let show_confirm = RwSignal::new(false);
    let recipient_email = RwSignal::new(String::new());
    let email_error = RwSignal::new(String::new());
    let confirm_pending = RwSignal::new(false);

    let drag = RwSignal::new(DragState::default());

    let shipment = LocalResource::new(move || {
        let _version = queries.get().shipment_detail;
        let id = shipment_id.get_value();
        async move { api::fetch_shipment(&id).await.ok() }
    });

    let on_confirm_submit = Callback::new(move |()| {
        let email = recipient_email.get_untracked().trim().to_owned();
        if email.is_empty() {
            email_error.set("수신자 이메일을 입력하세요".to_owned());
            return;
        }
        if !is_valid_email(&email) {
            email_error.set("유효한 이메일 주소를 입력하세요".to_owned());
            return;
        }
        email_error.set(String::new());
        if confirm_pending.get_untracked() {
            return;
        }
        confirm_pending.set(true);
        #[cfg(feature = "csr")]
        leptos::task::spawn_local(async move {
            let id = shipment_id.get_value();
            match api::confirm_shipment(&id, &email).await {
                Ok(resp) => {
                    queries.update(|q| {
                        q.bump_shipments();
                        q.bump_shipment_detail();
                    });
                    if resp.email_sent {
                        show_toast(toast, "출고 확정 완료. 이메일이 발송되었습니다.", Severity::Success);
                    } else {
                        show_toast(toast, "출고 확정 완료. (이메일 발송 실패)", Severity::Info);
                    }
                    show_confirm.set(false);
                    recipient_email.set(String::new());
                }
                Err(err) => {
                    log::warn!("confirm shipment failed: {err}");
                    show_toast(toast, &err.user_message("출고 확정 실패"), Severity::Error);
                }
            }
            confirm_pending.set(false);
        });
        #[cfg(not(feature = "csr"))]
        {
            let _ = email;
            confirm_pending.set(false);
        }
    });

    let on_confirm_cancel = Callback::new(move |()| {
        show_confirm.set(false);
        recipient_email.set(String::new());
        email_error.set(String::new());
    });

    let on_void_submit = move |_| {
        let reason = void_reason.get_untracked().trim().to_owned();
        if reason.is_empty() || void_pending.get_untracked() {
            return;
        }
        void_pending.set(true);
        #[cfg(feature = "csr")]
        leptos::task::spawn_local(async move {
            let id = shipment_id.get_value();
            match api::void_shipment(&id, &reason).await {
                Ok(()) => {
                    queries.update(|q| {
                        q.bump_shipments();
                        q.bump_shipment_detail();
                    });
                    show_toast(toast, "출고가 무효화되었습니다", Severity::Success);
                    show_void_input.set(false);
                }
                Err(err) => {
                    log::warn!("void shipment failed: {err}");
                    show_toast(toast, &err.user_message("무효화 실패"), Severity::Error);
                }
            }
            void_pending.set(false);
        });
        #[cfg(not(feature = "csr"))]
        {
            let _ = reason;
            void_pending.set(false);
        }
    };

    let on_download = move |_| {
        #[cfg(feature = "csr")]
        {
            let filename = shipment
                .get_untracked()
                .flatten()
                .map_or_else(|| "shipment".to_owned(), |s| s.display_id);
            leptos::task::spawn_local(async move {
                let id = shipment_id.get_value();
                match api::fetch_shipment_download_url(&id).await {
                    Ok(resp) => {
                        if let Err(err) =
                            download::save_url(&resp.download_url, &format!("{filename}.zip"))
                        {
                            log::warn!("shipment download failed: {err}");
                        }
                    }
                    Err(err) => {
                        show_toast(toast, &err.user_message("다운로드 URL 생성 실패"), Severity::Error);
                    }
                }
            });
        }
    };

    let on_copy_sha = move |_| {
        if let Some(s) = shipment.get_untracked().flatten() {
            download::copy_text(&s.zip_sha256);
            show_toast(toast, "SHA256 복사됨", Severity::Success);
        }
    };

    let on_copy_evidence = move |_| {
        if let Some(s) = shipment.get_untracked().flatten() {
            let text = format!(
                "{} | SHA256: {} | {} | {}",
                s.display_id,
                s.zip_sha256,
                format_datetime(&s.created_at),
                s.series_name()
            );
            download::copy_text(&text);
            show_toast(toast, "복사 완료", Severity::Success);
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

    view! {
        <Show when=move || show_confirm.get()>
            {move || {
                shipment
                    .get()
                    .flatten()
                    .map(|s| {
                        view! {
                            <ConfirmShipmentDialog
                                display_id=s.display_id.clone()
                                series_name=s.series_name().to_owned()
                                asset_count=s.asset_count
                                email=recipient_email
                                error=email_error
                                pending=confirm_pending
                                on_submit=on_confirm_submit
                                on_cancel=on_confirm_cancel
                            />
                        }
                    })
            }}
        </Show>

        <Show when=move || !show_confirm.get()>
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
                    {move || match shipment.get() {
                        None => view! {
                            <div class="modal__body">
                                <p class="modal__empty">"로딩 중..."</p>
                            </div>
                        }
                            .into_any(),
                        Some(None) => view! {
                            <div class="modal__body">
                                <p class="modal__empty">"출고 정보를 불러오지 못했습니다"</p>
                            </div>
                        }
                            .into_any(),
                        Some(Some(s)) => detail_body(
                            s,
                            on_close,
                            show_void_input,
                            void_reason,
                            void_pending,
                            show_confirm,
                            on_void_submit,
                            on_download,
                            on_copy_sha,
                            on_copy_evidence,
                        )
                            .into_any(),
                    }}
                </div>
            </div>
        </Show>
    }
}

/// Header, info grid, asset table, and action footer for a loaded shipment.
#[allow(clippy::too_many_arguments)]
fn detail_body(
    shipment: Shipment,
    on_close: Callback<()>,
    show_void_input: RwSignal<bool>,
    void_reason: RwSignal<String>,
    void_pending: RwSignal<bool>,
    show_confirm: RwSignal<bool>,
    on_void_submit: impl Fn(leptos::ev::MouseEvent) + Copy + Send + Sync + 'static,
    on_download: impl Fn(leptos::ev::MouseEvent) + Copy + Send + Sync + 'static,
    on_copy_sha: impl Fn(leptos::ev::MouseEvent) + Copy + Send + Sync + 'static,
    on_copy_evidence: impl Fn(leptos::ev::MouseEvent) + Copy + Send + Sync + 'static,
) -> impl IntoView {
    let status = shipment.status;
    let asset_rows = shipment.shipment_assets.clone();
    let has_assets = !asset_rows.is_empty();
    let assets_title = format!("포함 자산 ({}개)", asset_rows.len());

    view! {
        <div class="modal__header modal__header--split">
            <div>
                <div class="modal__title-row">
                    <h2>{shipment.display_id.clone()}</h2>
                    <span class=status.badge_class()>{status.label()}</span>
                </div>
                <p class="modal__meta">{shipment.shipment_id.clone()}</p>
            </div>
            <button class="modal__close" on:click=move |_| on_close.run(())>
                "×"
            </button>
        </div>

        <div class="modal__body">
            <div class="detail-grid">
                <div class="detail-grid__cell">
                    <p class="detail-grid__label">"시리즈"</p>
                    <p class="detail-grid__value">{shipment.series_name().to_owned()}</p>
                </div>
                <div class="detail-grid__cell">
                    <p class="detail-grid__label">"자산 수"</p>
                    <p class="detail-grid__value">{format!("{}개", shipment.asset_count)}</p>
                </div>
                <div class="detail-grid__cell">
                    <p class="detail-grid__label">"생성일시"</p>
                    <p class="detail-grid__value">{format_datetime(&shipment.created_at)}</p>
                </div>
                {shipment
                    .shipped_at
                    .as_deref()
                    .map(|shipped| {
                        view! {
                            <div class="detail-grid__cell">
                                <p class="detail-grid__label">"출고 확정일시"</p>
                                <p class="detail-grid__value">{format_datetime(shipped)}</p>
                            </div>
                        }
                    })}
                <div class="detail-grid__cell detail-grid__cell--full">
                    <p class="detail-grid__label">"ZIP SHA256"</p>
                    <div class="detail-grid__sha">
                        <code>{shipment.zip_sha256.clone()}</code>
                        <button class="btn btn--ghost" on:click=on_copy_sha>
                            "복사"
                        </button>
                    </div>
                </div>
                {shipment
                    .void_reason
                    .clone()
                    .map(|reason| {
                        view! {
                            <div class="detail-grid__cell detail-grid__cell--full">
                                <p class="detail-grid__label">"무효화 사유"</p>
                                <p class="detail-grid__value detail-grid__value--danger">{reason}</p>
                            </div>
                        }
                    })}
            </div>

            <div class="evidence">
                <p class="evidence__hint">
                    "출고 증빙 정보(출고번호, SHA256, 자산목록)를 텍스트로 복사합니다."
                </p>
                <button class="btn evidence__copy" on:click=on_copy_evidence>
                    "증빙 텍스트 복사"
                </button>
            </div>

            <Show when=move || has_assets>
                <h3 class="detail-assets__title">{assets_title.clone()}</h3>
                <table class="table table--compact">
                    <thead>
                        <tr>
                            <th>"시리얼"</th>
                            <th>"파일명"</th>
                            <th>"SHA256"</th>
                            <th>"에디션"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {asset_rows.iter().map(shipment_asset_row).collect_view()}
                    </tbody>
                </table>
            </Show>
        </div>

        <div class="modal__footer">
            <Show
                when=move || show_void_input.get()
                fallback=move || {
                    view! {
                        <div class="modal__actions">
                            <button class="btn" on:click=on_download>
                                "다운로드"
                            </button>
                            <Show when=move || status.can_confirm()>
                                <button
                                    class="btn btn--success"
                                    on:click=move |_| show_confirm.set(true)
                                >
                                    "출고 확정"
                                </button>
                            </Show>
                            <Show when=move || status.can_void()>
                                <button
                                    class="btn btn--danger"
                                    on:click=move |_| show_void_input.set(true)
                                >
                                    "무효화"
                                </button>
                            </Show>
                        </div>
                    }
                }
            >
                <div class="void-form">
                    <input
                        class="input"
                        type="text"
                        placeholder="무효화 사유를 입력하세요"
                        prop:value=move || void_reason.get()
                        on:input=move |ev| void_reason.set(event_target_value(&ev))
                    />
                    <div class="modal__actions">
                        <button class="btn" on:click=move |_| show_void_input.set(false)>
                            "취소"
                        </button>
                        <button
                            class="btn btn--danger"
                            disabled=move || {
                                void_reason.get().trim().is_empty() || void_pending.get()
                            }
                            on:click=on_void_submit
                        >
                            {move || if void_pending.get() { "처리 중..." } else { "무효화 확인" }}
                        </button>
                    </div>
                </div>
            </Show>
        </div>
    }
}

/// One contained-asset row with a truncated file hash.
fn shipment_asset_row(row: &ShipmentAsset) -> impl IntoView + use<> {
    let serial = row
        .asset
        .as_ref()
        .and_then(|a| a.serial.clone())
        .unwrap_or_else(|| "-".to_owned());
    let edition = row
        .asset
        .as_ref()
        .and_then(|a| a.edition)
        .map_or_else(|| "-".to_owned(), |e| e.to_string());
    let short_sha = if row.file_sha256.len() > 12 {
        format!("{}...", &row.file_sha256[..12])
    } else {
        row.file_sha256.clone()
    };

    view! {
        <tr>
            <td class="table__mono">{serial}</td>
            <td class="table__small">{row.file_name.clone()}</td>
            <td class="table__mono table__small">{short_sha}</td>
            <td>{edition}</td>
        </tr>
    }
}

/// Nested dialog collecting the recipient email for shipment confirmation.
#[component]
fn ConfirmShipmentDialog(
    display_id: String,
    series_name: String,
    asset_count: i64,
    email: RwSignal<String>,
    error: RwSignal<String>,
    pending: RwSignal<bool>,
    on_submit: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="modal-backdrop">
            <div class="modal">
                <div class="modal__header modal__header--split">
                    <h2>"출고 확정"</h2>
                    <button class="modal__close" on:click=move |_| on_cancel.run(())>
                        "×"
                    </button>
                </div>

                <div class="modal__body">
                    <div class="confirm-summary">
                        <div class="confirm-summary__row">
                            <span>"출고 번호"</span>
                            <span class="table__mono">{display_id}</span>
                        </div>
                        <div class="confirm-summary__row">
                            <span>"시리즈"</span>
                            <span>{series_name}</span>
                        </div>
                        <div class="confirm-summary__row">
                            <span>"자산 수량"</span>
                            <span class="table__mono">{format!("{asset_count}개")}</span>
                        </div>
                    </div>

                    <label class="field">
                        <span class="field__label">
                            "수신자 이메일 " <span class="field__required">"*"</span>
                        </span>
                        <input
                            class=move || {
                                if error.get().is_empty() { "input" } else { "input input--error" }
                            }
                            type="email"
                            placeholder="example@company.com"
                            prop:value=move || email.get()
                            on:input=move |ev| {
                                email.set(event_target_value(&ev));
                                error.set(String::new());
                            }
                            on:keydown=move |ev: leptos::ev::KeyboardEvent| {
                                if ev.key() == "Enter" {
                                    ev.prevent_default();
                                    on_submit.run(());
                                }
                            }
                        />
                        <Show when=move || !error.get().is_empty()>
                            <p class="field__error">{move || error.get()}</p>
                        </Show>
                        <p class="field__hint">
                            "출고 확정 시 위 이메일로 다운로드 링크가 발송됩니다."
                        </p>
                    </label>
                </div>

                <div class="modal__footer">
                    <div class="modal__actions">
                        <button class="btn" on:click=move |_| on_cancel.run(())>
                            "취소"
                        </button>
                        <button
                            class="btn btn--success"
                            disabled=move || pending.get()
                            on:click=move |_| on_submit.run(())
                        >
                            {move || if pending.get() { "처리 중..." } else { "확정 발송" }}
                        </button>
                    </div>
                </div>
            </div>
        </div>
    }
}
