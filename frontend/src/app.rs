use context_menu_shared::classes::{self, class_names};
use leptos::*;

use crate::components::{ContextMenu, ContextMenuChildren, ContextMenuChildrenProps, MenuContent};

/// Menu shown by the demo areas; every item dismisses the menu when clicked.
fn file_menu(last_action: RwSignal<Option<String>>) -> impl IntoView {
    let actions = [("Open", false), ("Rename", false), ("Delete", true)];

    view! {
        <div class="demo-menu">
            {actions
                .into_iter()
                .map(|(label, danger)| {
                    let class_name = class_names(
                        [Some("demo-menu-item"), Some(classes::POPOVER_DISMISS)],
                        &[("danger", danger)],
                    );
                    view! {
                        <button
                            class=class_name
                            on:click=move |_| last_action.set(Some(label.to_string()))
                        >
                            {label}
                        </button>
                    }
                })
                .collect_view()}
        </div>
    }
}

#[component]
pub fn App() -> impl IntoView {
    let last_action = create_rw_signal(None::<String>);
    let disabled = create_rw_signal(false);

    let button_children = ContextMenuChildren::render(move |props| {
        let ContextMenuChildrenProps {
            class_name,
            content_props,
            on_context_menu,
            popover,
            node_ref,
        } = props;
        view! {
            <span
                class=class_names([Some(class_name.as_str()), Some("demo-button")], &[])
                on:contextmenu=move |event| on_context_menu.call(event)
            >
                {move || {
                    if content_props.with(|props| props.is_open) {
                        "Menu open"
                    } else {
                        "Right-click this button"
                    }
                }}
                {popover}
            </span>
        }
        .into_any()
        .node_ref(node_ref)
        .into_view()
    });

    view! {
        <main class="demo">
            <h1>"Context menu"</h1>

            <label class="demo-toggle">
                <input
                    type="checkbox"
                    prop:checked=move || disabled.get()
                    on:change=move |_| disabled.update(|disabled| *disabled = !*disabled)
                />
                "Disable menus"
            </label>

            <ContextMenu
                content=move || file_menu(last_action)
                disabled=disabled
                class="demo-area"
            >
                "Right-click anywhere in this box"
            </ContextMenu>

            <div
                class=class_names(["demo-transformed", classes::FIXED_POSITIONING_CONTAINING_BLOCK].map(Some), &[])
                style="transform: translateX(40px);"
            >
                <ContextMenu
                    content=MenuContent::render(|props| {
                        let offset = props.target_offset.unwrap_or_default();
                        view! { <p class="demo-menu">{format!("Opened at {}", offset)}</p> }.into_view()
                    })
                    disabled=disabled
                    class="demo-area"
                >
                    "Inside a transformed container"
                </ContextMenu>
            </div>

            <ContextMenu
                content=move || file_menu(last_action)
                disabled=disabled
                children=button_children
            />

            <p class="demo-status">
                {move || last_action.get().map(|action| format!("Last action: {}", action))}
            </p>
        </main>
    }
}
