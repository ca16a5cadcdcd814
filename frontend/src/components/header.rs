//! Top bar with navigation between the two screens.

use leptos::*;
use leptos_router::A;

#[component]
pub fn Header() -> impl IntoView {
    view! {
        <header>
            <div class="header-left">
                <A href="/" class="logo">"MEDIADROP"</A>
            </div>
            <nav class="header-right">
                <A href="/" class="nav-link" exact=true>"Upload"</A>
                <A href="/register" class="nav-link">"Register"</A>
            </nav>
        </header>
    }
}
