//! Loading and Error States

use leptos::prelude::*;

/// Full-screen spinner with a caption
#[component]
pub fn Loading(#[prop(into)] message: String) -> impl IntoView {
    view! {
        <div class="loading-container">
            <div class="spinner"></div>
            <p>{message}</p>
        </div>
    }
}

/// Fetch failure with a retry button
#[component]
pub fn ErrorPanel(
    #[prop(into)] message: String,
    #[prop(into)] on_retry: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="error-container">
            <h2>"Error"</h2>
            <p>{message}</p>
            <button class="retry-button" on:click=move |_| on_retry.run(())>
                "Retry"
            </button>
        </div>
    }
}
