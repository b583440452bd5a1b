use leptos::prelude::*;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="footer">
            <div class="footer-container">
                <p class="footer-brand">"RecrutPlus"</p>
                <p class="footer-copy">"© 2025 RecrutPlus. Tous droits réservés."</p>
            </div>
        </footer>
    }
}
