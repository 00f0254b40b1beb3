use leptos::*;

use crate::components::accordion::Accordion;
use crate::content::load_controller;

#[component]
pub fn App() -> impl IntoView {
    let controller = load_controller();

    view! {
        <main>
            <Accordion controller=controller />
        </main>
    }
}
