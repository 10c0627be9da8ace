use yew::prelude::*;

#[derive(Properties, Clone, PartialEq)]
pub struct ModalProps {
    pub is_open: bool,
    pub title: String,
    pub on_close: Callback<()>,
    #[prop_or_default]
    pub children: Children,
}

/// Centered dialog over a dimmed overlay; clicking the overlay closes it
#[function_component(Modal)]
pub fn modal(props: &ModalProps) -> Html {
    if !props.is_open {
        return html! {};
    }

    let on_overlay_click = {
        let on_close = props.on_close.clone();
        Callback::from(move |e: MouseEvent| {
            e.stop_propagation();
            on_close.emit(());
        })
    };

    let on_modal_click = {
        Callback::from(|e: MouseEvent| {
            e.stop_propagation();
        })
    };

    html! {
        <div class="fixed inset-0 z-50 flex items-center justify-center">
            <div
                class="absolute inset-0 bg-black bg-opacity-50"
                onclick={on_overlay_click}
            ></div>
            <div
                class="relative bg-white rounded-lg shadow-xl p-6 w-full max-w-lg mx-4"
                onclick={on_modal_click}
            >
                <div class="mb-4">
                    <h3 class="text-lg font-medium text-gray-900">{&props.title}</h3>
                </div>
                {props.children.clone()}
            </div>
        </div>
    }
}
