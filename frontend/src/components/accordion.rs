use accordion_shared::markup::{CONTAINER_CLASS, LIST_CLASS};
use accordion_shared::{AccordionController, Activation, ActivationKey};
use leptos::*;

/// Accessible accordion: one heading button per section, at most one section open.
#[component]
pub fn Accordion(controller: AccordionController) -> impl IntoView {
    let label = controller.label().to_string();
    let items = controller.items().to_vec();
    let state = create_rw_signal(controller);

    let sections = items
        .into_iter()
        .enumerate()
        .map(|(index, item)| {
            let ids = state.with_untracked(|c| c.attrs(index));
            let aria_expanded = move || state.with(|c| c.attrs(index).aria_expanded());
            let aria_hidden = move || state.with(|c| c.attrs(index).aria_hidden());

            view! {
                <li>
                    <h3>
                        <button
                            id=ids.control_id.clone()
                            aria-controls=ids.region_id.clone()
                            aria-expanded=aria_expanded
                            on:click=move |_| {
                                state.update(|c| c.activate(index, Activation::Pointer));
                            }
                            on:keydown=move |ev: ev::KeyboardEvent| {
                                // Handled here so Enter and Space toggle exactly once.
                                if let Some(key) = ActivationKey::from_key(&ev.key()) {
                                    ev.prevent_default();
                                    state.update(|c| c.activate(index, Activation::Key(key)));
                                }
                            }
                        >
                            {item.title}
                        </button>
                    </h3>
                    <div
                        id=ids.region_id
                        role="region"
                        aria-labelledby=ids.control_id
                        aria-hidden=aria_hidden
                    >
                        <p>{item.body}</p>
                    </div>
                </li>
            }
        })
        .collect_view();

    view! {
        <div class=CONTAINER_CLASS>
            <ul aria-label=label class=LIST_CLASS>
                {sections}
            </ul>
        </div>
    }
}
