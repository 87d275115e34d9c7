//! Login page: exchanges email/password for a bearer session.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

/// Login form. On success the session is stored and the user lands on the
/// dashboard. Failures surface the server message, or a fallback.
#[component]
pub fn LoginPage() -> impl IntoView {
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error = RwSignal::new(String::new());
    let busy = RwSignal::new(false);
    let navigate = use_navigate();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let email_value = email.get_untracked().trim().to_owned();
        let password_value = password.get_untracked();
        if email_value.is_empty() || password_value.is_empty() {
            return;
        }
        error.set(String::new());
        busy.set(true);

        #[cfg(feature = "csr")]
        {
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                match crate::net::api::login(&email_value, &password_value).await {
                    Ok(resp) => {
                        crate::state::session::login(resp.access_token, resp.user);
                        navigate("/", NavigateOptions::default());
                    }
                    Err(err) => {
                        log::warn!("login failed: {err}");
                        error.set(err.user_message("로그인에 실패했습니다"));
                    }
                }
                busy.set(false);
            });
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (&navigate, email_value, password_value);
            busy.set(false);
        }
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <div class="login-card__mark">"A"</div>
                <h1>"Agency Console"</h1>
                <p class="login-card__subtitle">"콘솔에 로그인하세요"</p>

                <Show when=move || !error.get().is_empty()>
                    <div class="login-card__error">{move || error.get()}</div>
                </Show>

                <form class="login-form" on:submit=on_submit>
                    <label class="field">
                        <span class="field__label">"이메일"</span>
                        <input
                            class="input"
                            type="email"
                            placeholder="admin@agency.example"
                            required
                            prop:value=move || email.get()
                            on:input=move |ev| email.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="field">
                        <span class="field__label">"비밀번호"</span>
                        <input
                            class="input"
                            type="password"
                            placeholder="••••••••"
                            required
                            prop:value=move || password.get()
                            on:input=move |ev| password.set(event_target_value(&ev))
                        />
                    </label>
                    <button class="btn btn--primary login-form__submit" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "로그인 중..." } else { "로그인" }}
                    </button>
                </form>
            </div>
        </div>
    }
}
