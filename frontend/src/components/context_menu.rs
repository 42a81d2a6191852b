use std::rc::Rc;

use context_menu_shared::classes::{self, class_names};
use context_menu_shared::{
    evaluate_trigger, popover_key, ContextMenuContentProps, ContextMenuState, Offset,
    PositioningStrategy, TriggerContext, TriggerOutcome, DEFAULT_TAG_NAME,
};
use leptos::*;
use web_sys::MouseEvent;

use crate::components::popover::{Popover, PopoverConfig};
use crate::utils::dom::{containing_block_offset, is_dark_theme};
use crate::utils::refs::{merge_refs, RefSink};

pub type ContentProps = ContextMenuContentProps<MouseEvent>;

/// What the menu panel shows.
#[derive(Clone)]
pub enum MenuContent {
    /// Built once each time the panel mounts.
    Static(ViewFn),
    /// Re-run whenever the menu state changes.
    Render(Rc<dyn Fn(ContentProps) -> View>),
}

impl MenuContent {
    pub fn render(f: impl Fn(ContentProps) -> View + 'static) -> Self {
        MenuContent::Render(Rc::new(f))
    }

    fn view(&self, props: Signal<ContentProps>) -> View {
        match self {
            MenuContent::Static(view) => view.run(),
            MenuContent::Render(render) => {
                let render = Rc::clone(render);
                (move || render(props.get())).into_view()
            }
        }
    }
}

impl<F, IV> From<F> for MenuContent
where
    F: Fn() -> IV + 'static,
    IV: IntoView,
{
    fn from(f: F) -> Self {
        MenuContent::Static(ViewFn::from(f))
    }
}

/// Everything a render-function child needs to wire up its own container.
pub struct ContextMenuChildrenProps {
    pub class_name: String,
    pub content_props: Signal<ContentProps>,
    /// Must be attached as the `contextmenu` handler of the container.
    pub on_context_menu: Callback<MouseEvent>,
    /// `None` when the menu has no content configured.
    pub popover: Option<View>,
    /// Must be attached to the container element.
    pub node_ref: NodeRef<html::AnyElement>,
}

#[derive(Clone)]
pub enum ContextMenuChildren {
    /// Rendered inside an element created by the context menu.
    Static(ChildrenFn),
    /// Renders its own container.
    Render(Rc<dyn Fn(ContextMenuChildrenProps) -> View>),
}

impl ContextMenuChildren {
    pub fn render(f: impl Fn(ContextMenuChildrenProps) -> View + 'static) -> Self {
        ContextMenuChildren::Render(Rc::new(f))
    }
}

impl Default for ContextMenuChildren {
    fn default() -> Self {
        ContextMenuChildren::Static(Rc::new(|| Fragment::new(Vec::new())))
    }
}

impl<F> ToChildren<F> for ContextMenuChildren
where
    F: Fn() -> Fragment + 'static,
{
    fn to_children(f: F) -> Self {
        ContextMenuChildren::Static(Rc::new(f))
    }
}

/// Opens `content` in a floating panel at the pointer when the container is
/// right-clicked.
///
/// Context menus may be nested: the innermost one claims the event by
/// preventing its default action and outer ones leave it alone.
#[component]
pub fn ContextMenu(
    #[prop(optional, into)] content: Option<MenuContent>,
    #[prop(optional)] children: ContextMenuChildren,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
    /// Called with every `contextmenu` event reaching the container,
    /// whether or not the menu opened.
    #[prop(optional, into)]
    on_context_menu: Option<Callback<MouseEvent>>,
    #[prop(optional, into)] on_close: Option<Callback<()>>,
    #[prop(optional)] popover_props: PopoverConfig,
    #[prop(default = DEFAULT_TAG_NAME.to_string(), into)] tag_name: String,
    #[prop(optional, into)] class: Option<String>,
    #[prop(optional)] container_ref: Option<NodeRef<html::AnyElement>>,
    #[prop(attrs)] attributes: Vec<(&'static str, Attribute)>,
) -> impl IntoView {
    let state = create_rw_signal(ContextMenuState::<MouseEvent>::new());
    let disabled = create_memo(move |_| disabled.get());
    let has_content = content.is_some();
    let content = store_value(content);
    let renders_children = matches!(children, ContextMenuChildren::Render(_));

    let container = create_node_ref::<html::AnyElement>();
    let node_ref = merge_refs(
        std::iter::once(RefSink::from(container)).chain(container_ref.map(RefSink::from)),
    );

    // A menu opened before the flag changed must not survive it
    create_effect(move |previous: Option<bool>| {
        let current = disabled.get();
        if previous.is_some() {
            log::debug!("Context menu disabled flag changed to {}", current);
            state.update(|state| state.sync_disabled());
        }
        current
    });

    let handle_context_menu = Callback::new(move |event: MouseEvent| {
        let outcome = evaluate_trigger(TriggerContext {
            default_prevented: event.default_prevented(),
            disabled: disabled.get_untracked(),
            has_content,
            renders_children,
        });
        match outcome {
            TriggerOutcome::Open => {
                event.prevent_default();
                let containing_block = container
                    .get_untracked()
                    .map(|element| containing_block_offset(&element))
                    .unwrap_or(Offset::ZERO);
                let offset = Offset::from_client(
                    f64::from(event.client_x()),
                    f64::from(event.client_y()),
                    containing_block,
                );
                log::debug!("Opening context menu at {}", offset);
                state.update(|state| state.open(event.clone(), offset));
            }
            TriggerOutcome::Skip(reason) => {
                log::trace!("Ignoring context menu trigger: {:?}", reason);
            }
        }
        if let Some(on_context_menu) = on_context_menu {
            on_context_menu.call(event);
        }
    });

    let handle_popover_interaction = Callback::new(move |next_open: bool| {
        if next_open {
            return;
        }
        let closed = state
            .try_update(|state| state.handle_interaction(next_open))
            .unwrap_or(false);
        if closed {
            log::debug!("Context menu closed");
            if let Some(on_close) = on_close {
                on_close.call(());
            }
        }
    });

    let content_props = Signal::derive(move || state.with(|state| state.content_props()));
    let is_open = Signal::derive(move || state.with(|state| state.is_open));
    let key = create_memo(move |_| popover_key(state.with(|state| state.target_offset)));
    let show_popover = create_memo(move |_| has_content && !disabled.get());

    // The target is fixed-positioned, so the panel must be too
    let mut popover_props = popover_props;
    popover_props.options.positioning_strategy = PositioningStrategy::Fixed;
    let popover_props = store_value(popover_props);

    let target_style = move || {
        let offset = state.with(|state| state.target_offset).unwrap_or_default();
        format!("position: fixed; {}", offset.to_style())
    };
    let render_target = Callback::new(move |target_ref: NodeRef<html::Div>| {
        view! {
            <div
                class=classes::CONTEXT_MENU_POPOVER_TARGET
                style=target_style
                node_ref=target_ref
            ></div>
        }
        .into_view()
    });

    let maybe_popover = move || {
        if !show_popover.get() {
            return None;
        }
        // Rebuilt from scratch whenever the anchor moves
        let key = key.get();
        log::trace!("Mounting context menu popover {}", key);

        let dark = container
            .get_untracked()
            .map(|element| is_dark_theme(&element))
            .unwrap_or(false);
        let popover_class = class_names(
            [Some(classes::CONTEXT_MENU_POPOVER)],
            &[(classes::DARK, dark)],
        );
        let menu = ViewFn::from(move || {
            view! {
                <div
                    class=classes::CONTEXT_MENU_CONTENT
                    on:contextmenu=|event: MouseEvent| event.prevent_default()
                >
                    {content.with_value(|content| {
                        content.as_ref().map(|content| content.view(content_props))
                    })}
                </div>
            }
        });

        Some(view! {
            <Popover
                is_open=is_open
                content=menu
                render_target=render_target
                config=popover_props.get_value()
                class=popover_class
                backdrop_class=classes::CONTEXT_MENU_BACKDROP
                on_interaction=handle_popover_interaction
            />
        })
    };

    let class_name = class_names([class.as_deref(), Some(classes::CONTEXT_MENU)], &[]);

    match children {
        ContextMenuChildren::Render(render) => render(ContextMenuChildrenProps {
            class_name,
            content_props,
            on_context_menu: handle_context_menu,
            popover: has_content.then(|| maybe_popover.into_view()),
            node_ref,
        }),
        ContextMenuChildren::Static(children) => {
            let mut element = html::custom(html::Custom::new(tag_name))
                .attr("class", class_name)
                .on(ev::contextmenu, move |event: MouseEvent| {
                    handle_context_menu.call(event)
                });
            for (name, value) in attributes {
                element = element.attr(name, value);
            }
            element
                .child(maybe_popover)
                .child(children())
                .into_any()
                .node_ref(node_ref)
                .into_view()
        }
    }
}
