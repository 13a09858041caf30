//! Login Page Component
//!
//! Password form in front of the dashboard.

use std::rc::Rc;

use leptos::prelude::*;
use leptos::task::spawn_local;

use dashboard_core::{LoginController, LoginForm};

use crate::api::HttpApi;
use crate::context::use_session;

#[component]
pub fn LoginPage() -> impl IntoView {
    let ctx = use_session();
    let controller = Rc::new(LoginController::new(HttpApi::new(ctx.config()), ctx.gate()));

    let (form, set_form) = signal(LoginForm::default());
    controller.subscribe(move |next| set_form.set(next.clone()));
    let controller = StoredValue::new_local(controller);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let controller = controller.get_value();
        spawn_local(async move {
            if controller.submit().await.is_ok() {
                ctx.authenticated();
            }
        });
    };

    let on_input = move |ev: web_sys::Event| {
        let password = event_target_value(&ev);
        controller.with_value(|c| c.set_password(password));
    };

    view! {
        <div class="login-container">
            <div class="login-card">
                <div class="login-header">
                    <h1>"EPIC Issues Dashboard"</h1>
                    <p>"Please enter the password to access the dashboard"</p>
                </div>

                <form class="login-form" on:submit=on_submit>
                    <div class="form-group">
                        <input
                            type="password"
                            class="password-input"
                            placeholder="Enter password"
                            autofocus=true
                            prop:value=move || form.with(|f| f.password.clone())
                            disabled=move || form.with(|f| f.submitting)
                            on:input=on_input
                        />
                    </div>

                    {move || form.with(|f| f.error.clone()).map(|message| view! {
                        <div class="error-message">{message}</div>
                    })}

                    <button
                        type="submit"
                        class="login-button"
                        disabled=move || form.with(|f| !f.can_submit())
                    >
                        {move || form.with(|f| f.button_label())}
                    </button>
                </form>

                <div class="login-footer">
                    <p>"Protected access • CoverWallet Internal"</p>
                </div>
            </div>
        </div>
    }
}
