use context_menu_shared::classes::{self, class_names};
use context_menu_shared::{LifecycleHook, OverlayPhase, PopoverOptions, PositioningStrategy};
use gloo_timers::callback::Timeout;
use leptos::*;
use wasm_bindgen::JsCast;

use crate::utils::dom::{bounding_rect, closest, containing_block_offset, offset_rect};

/// Popover configuration together with its overlay lifecycle hooks.
#[derive(Clone, Default)]
pub struct PopoverConfig {
    pub options: PopoverOptions,
    pub on_opening: Option<Callback<()>>,
    pub on_opened: Option<Callback<()>>,
    pub on_closing: Option<Callback<()>>,
    pub on_closed: Option<Callback<()>>,
}

impl PopoverConfig {
    pub fn new(options: PopoverOptions) -> Self {
        Self {
            options,
            ..Self::default()
        }
    }

    fn fire(&self, hook: LifecycleHook) {
        let callback = match hook {
            LifecycleHook::Opening => self.on_opening,
            LifecycleHook::Opened => self.on_opened,
            LifecycleHook::Closing => self.on_closing,
            LifecycleHook::Closed => self.on_closed,
        };
        if let Some(callback) = callback {
            callback.call(());
        }
    }
}

impl From<PopoverOptions> for PopoverConfig {
    fn from(options: PopoverOptions) -> Self {
        Self::new(options)
    }
}

/// Floating panel attached to a target element.
///
/// `render_target` receives the ref the panel is positioned against and
/// must attach it to the element it renders. The panel stays mounted while
/// its exit transition runs. Dismissal (backdrop press, Escape, a click on
/// a `popover-dismiss` element) is reported through `on_interaction(false)`;
/// the owner decides whether to close.
#[component]
pub fn Popover(
    #[prop(into)] is_open: Signal<bool>,
    #[prop(into)] content: ViewFn,
    render_target: Callback<NodeRef<html::Div>, View>,
    #[prop(optional)] config: PopoverConfig,
    #[prop(optional, into)] class: Option<String>,
    #[prop(optional, into)] backdrop_class: Option<String>,
    #[prop(into)] on_interaction: Callback<bool>,
) -> impl IntoView {
    let PopoverOptions {
        placement,
        positioning_strategy: strategy,
        transition_duration: duration,
        popover_class_name,
        has_backdrop,
        can_escape_key_close,
        minimal,
    } = config.options.clone();
    let config = store_value(config);
    let target_ref = create_node_ref::<html::Div>();
    let phase = create_rw_signal(OverlayPhase::Closed);
    let transition = store_value(None::<Timeout>);

    create_effect(move |_| {
        let open = is_open.get();
        let Some((next, hook)) = phase.get_untracked().request(open) else {
            return;
        };
        phase.set(next);
        config.with_value(|config| config.fire(hook));

        // Replacing the pending timer cancels it
        let timeout = Timeout::new(duration, move || {
            if let Some(Some((done, hook))) = phase.try_get_untracked().map(OverlayPhase::complete) {
                phase.set(done);
                config.with_value(|config| config.fire(hook));
            }
        });
        transition.set_value(Some(timeout));
    });

    // The panel is built before it is inserted into the document, so the
    // target is measured again once the current turn has finished.
    let mounted = create_memo(move |_| phase.get().is_mounted());
    let measure = create_trigger();
    let measure_timer = store_value(None::<Timeout>);
    create_effect(move |_| {
        if mounted.get() {
            measure_timer.set_value(Some(Timeout::new(0, move || measure.notify())));
        }
    });

    // Close on Escape while open
    create_effect(move |_| {
        if !(can_escape_key_close && is_open.get()) {
            return;
        }
        let handler = wasm_bindgen::closure::Closure::wrap(Box::new(move |event: web_sys::KeyboardEvent| {
            if event.key() == "Escape" {
                on_interaction.call(false);
            }
        }) as Box<dyn FnMut(_)>);

        if let Some(document) = web_sys::window().and_then(|window| window.document()) {
            let _ = document.add_event_listener_with_callback("keydown", handler.as_ref().unchecked_ref());

            on_cleanup(move || {
                if let Some(document) = web_sys::window().and_then(|window| window.document()) {
                    let _ = document.remove_event_listener_with_callback(
                        "keydown",
                        handler.as_ref().unchecked_ref(),
                    );
                }
                drop(handler);
            });
        }
    });

    let panel_style = move || {
        measure.track();
        let anchor = target_ref
            .get()
            .map(|target| match strategy {
                PositioningStrategy::Fixed => {
                    bounding_rect(&target).translate(containing_block_offset(&target))
                }
                PositioningStrategy::Absolute => offset_rect(&target),
            })
            .unwrap_or_default();
        let point = placement.anchor_point(anchor);
        format!(
            "position: {}; left: {}px; top: {}px; transform: {}; transition-duration: {}ms;",
            strategy.as_str(),
            point.left,
            point.top,
            placement.transform(),
            duration
        )
    };

    let placement_class = classes::popover_placement(placement.as_str());
    let panel_class = move || {
        let transition_class = match phase.get() {
            OverlayPhase::Opening => Some(classes::POPOVER_ENTER),
            OverlayPhase::Closing => Some(classes::POPOVER_EXIT),
            OverlayPhase::Open | OverlayPhase::Closed => None,
        };
        class_names(
            [
                Some(classes::POPOVER),
                Some(placement_class.as_str()),
                popover_class_name.as_deref(),
                class.as_deref(),
                transition_class,
            ],
            &[(classes::POPOVER_MINIMAL, minimal)],
        )
    };

    let backdrop_class = class_names(
        [Some(classes::POPOVER_BACKDROP), backdrop_class.as_deref()],
        &[],
    );

    let handle_dismiss_click = move |event: web_sys::MouseEvent| {
        let Some(target) = event
            .target()
            .and_then(|target| target.dyn_into::<web_sys::Element>().ok())
        else {
            return;
        };
        match closest(&target, classes::POPOVER_DISMISS) {
            Ok(Some(_)) => on_interaction.call(false),
            Ok(None) => {}
            Err(err) => log::warn!("{}", err),
        }
    };

    let panel = move || {
        if !mounted.get() {
            return None;
        }
        let backdrop = has_backdrop.then(|| {
            view! {
                <div
                    class=backdrop_class.clone()
                    on:mousedown=move |_| on_interaction.call(false)
                    on:contextmenu=move |event: web_sys::MouseEvent| {
                        event.prevent_default();
                        on_interaction.call(false);
                    }
                ></div>
            }
        });
        Some(view! {
            {backdrop}
            <div class=panel_class.clone() style=panel_style on:click=handle_dismiss_click>
                {content.run()}
            </div>
        })
    };

    view! {
        {render_target.call(target_ref)}
        {panel}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{append_element, count, dispatch, key_event, mouse_event, query, remove};
    use context_menu_shared::Placement;
    use gloo_timers::future::TimeoutFuture;
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn target() -> Callback<NodeRef<html::Div>, View> {
        Callback::new(|target_ref: NodeRef<html::Div>| {
            view! {
                <div
                    class="test-target"
                    style="position: fixed; left: 40px; top: 60px; width: 0; height: 0;"
                    node_ref=target_ref
                ></div>
            }
            .into_view()
        })
    }

    fn record(hooks: &Rc<RefCell<Vec<&'static str>>>, name: &'static str) -> Option<Callback<()>> {
        let hooks = Rc::clone(hooks);
        Some(Callback::new(move |_: ()| hooks.borrow_mut().push(name)))
    }

    #[wasm_bindgen_test]
    fn test_popover_closed_renders_only_target() {
        let host = append_element(None, "div", "", "");
        mount_to(host.clone(), || {
            view! {
                <Popover
                    is_open=Signal::derive(|| false)
                    content=|| view! { <p>"Hidden"</p> }
                    render_target=target()
                    on_interaction=|_: bool| {}
                />
            }
        });

        assert_eq!(count(&host, ".test-target"), 1);
        assert_eq!(count(&host, ".ui-popover"), 0);
        assert_eq!(count(&host, ".ui-popover-backdrop"), 0);

        remove(&host);
    }

    #[wasm_bindgen_test]
    async fn test_popover_open_places_panel_at_target() {
        let host = append_element(None, "div", "", "");
        mount_to(host.clone(), || {
            view! {
                <Popover
                    is_open=Signal::derive(|| true)
                    content=|| view! { <p class="test-content">"Shown"</p> }
                    render_target=target()
                    config=PopoverOptions::default().with_class_name("custom").into()
                    class="extra"
                    on_interaction=|_: bool| {}
                />
            }
        });

        TimeoutFuture::new(20).await;

        let panel = query(&host, ".ui-popover").unwrap();
        let class_name = panel.class_name();
        assert!(class_name.contains("custom"));
        assert!(class_name.contains("extra"));
        assert!(class_name.contains(classes::POPOVER_MINIMAL));
        // Still inside the 100ms enter transition
        assert!(class_name.contains(classes::POPOVER_ENTER));
        let style = panel.get_attribute("style").unwrap();
        assert!(style.contains("position: fixed"));
        assert!(style.contains("left: 40px"));
        assert!(style.contains("top: 60px"));
        assert!(style.contains("transition-duration: 100ms"));
        assert_eq!(count(&panel, ".test-content"), 1);
        assert_eq!(count(&host, ".ui-popover-backdrop"), 1);

        remove(&host);
    }

    #[wasm_bindgen_test]
    async fn test_placement_sets_class_and_transform() {
        let host = append_element(None, "div", "", "");
        mount_to(host.clone(), || {
            view! {
                <Popover
                    is_open=Signal::derive(|| true)
                    content=|| view! { <p>"Shown"</p> }
                    render_target=target()
                    config=PopoverOptions::default().with_placement(Placement::LeftEnd).into()
                    on_interaction=|_: bool| {}
                />
            }
        });

        TimeoutFuture::new(20).await;

        let panel = query(&host, ".ui-popover").unwrap();
        assert!(panel.class_name().contains("ui-popover-left-end"));
        assert!(!panel.class_name().contains("ui-popover-right-start"));
        let style = panel.get_attribute("style").unwrap();
        assert!(style.contains("left: 40px"));
        assert!(style.contains("transform: translate(-100%, -100%)"));

        remove(&host);
    }

    #[wasm_bindgen_test]
    async fn test_absolute_strategy_uses_offset_position() {
        let host = append_element(None, "div", "", "position: relative;");
        let options = PopoverOptions {
            positioning_strategy: PositioningStrategy::Absolute,
            ..PopoverOptions::default()
        };
        mount_to(host.clone(), move || {
            view! {
                <Popover
                    is_open=Signal::derive(|| true)
                    content=|| view! { <p>"Shown"</p> }
                    render_target=Callback::new(|target_ref: NodeRef<html::Div>| {
                        view! {
                            <div
                                style="position: absolute; left: 25px; top: 15px; width: 10px; height: 4px;"
                                node_ref=target_ref
                            ></div>
                        }
                        .into_view()
                    })
                    config=options.clone().into()
                    on_interaction=|_: bool| {}
                />
            }
        });

        TimeoutFuture::new(20).await;

        let style = query(&host, ".ui-popover").unwrap().get_attribute("style").unwrap();
        assert!(style.contains("position: absolute"));
        // Default placement attaches to the right edge of the target
        assert!(style.contains("left: 35px"));
        assert!(style.contains("top: 15px"));

        remove(&host);
    }

    #[wasm_bindgen_test]
    fn test_popover_without_backdrop() {
        let host = append_element(None, "div", "", "");
        let options = PopoverOptions {
            has_backdrop: false,
            ..PopoverOptions::default()
        };
        mount_to(host.clone(), move || {
            view! {
                <Popover
                    is_open=Signal::derive(|| true)
                    content=|| view! { <p>"Shown"</p> }
                    render_target=target()
                    config=options.clone().into()
                    on_interaction=|_: bool| {}
                />
            }
        });

        assert_eq!(count(&host, ".ui-popover"), 1);
        assert_eq!(count(&host, ".ui-popover-backdrop"), 0);

        remove(&host);
    }

    #[wasm_bindgen_test]
    fn test_backdrop_and_escape_report_close() {
        let host = append_element(None, "div", "", "");
        let reports = Rc::new(RefCell::new(Vec::new()));
        let on_interaction = {
            let reports = Rc::clone(&reports);
            Callback::new(move |next_open: bool| reports.borrow_mut().push(next_open))
        };
        mount_to(host.clone(), move || {
            view! {
                <Popover
                    is_open=Signal::derive(|| true)
                    content=|| view! { <p>"Shown"</p> }
                    render_target=target()
                    backdrop_class="test-backdrop"
                    on_interaction=on_interaction
                />
            }
        });

        let backdrop = query(&host, ".test-backdrop").unwrap();
        dispatch(&backdrop, &mouse_event("mousedown", 5, 5));
        assert_eq!(*reports.borrow(), vec![false]);

        let right_click = mouse_event("contextmenu", 5, 5);
        dispatch(&backdrop, &right_click);
        assert!(right_click.default_prevented());
        assert_eq!(*reports.borrow(), vec![false, false]);

        let document = leptos::document();
        document.dispatch_event(&key_event("Enter")).unwrap();
        assert_eq!(reports.borrow().len(), 2);
        document.dispatch_event(&key_event("Escape")).unwrap();
        assert_eq!(*reports.borrow(), vec![false, false, false]);

        remove(&host);
    }

    #[wasm_bindgen_test]
    fn test_lifecycle_hooks_fire_on_toggle() {
        let host = append_element(None, "div", "", "");
        let hooks = Rc::new(RefCell::new(Vec::new()));
        let config = PopoverConfig {
            on_opening: record(&hooks, "opening"),
            on_closing: record(&hooks, "closing"),
            ..PopoverConfig::default()
        };
        let is_open = create_rw_signal(false);
        mount_to(host.clone(), move || {
            view! {
                <Popover
                    is_open=is_open
                    content=|| view! { <p>"Shown"</p> }
                    render_target=target()
                    config=config.clone()
                    on_interaction=|_: bool| {}
                />
            }
        });

        assert!(hooks.borrow().is_empty());
        is_open.set(true);
        assert_eq!(*hooks.borrow(), vec!["opening"]);
        is_open.set(false);
        assert_eq!(*hooks.borrow(), vec!["opening", "closing"]);
        // Still mounted until the exit transition completes
        let panel = query(&host, ".ui-popover").unwrap();
        assert!(panel.class_name().contains(classes::POPOVER_EXIT));

        remove(&host);
    }

    #[wasm_bindgen_test]
    async fn test_transitions_complete_after_duration() {
        let host = append_element(None, "div", "", "");
        let hooks = Rc::new(RefCell::new(Vec::new()));
        let config = PopoverConfig {
            options: PopoverOptions::default().with_transition_duration(10),
            on_opened: record(&hooks, "opened"),
            on_closed: record(&hooks, "closed"),
            ..PopoverConfig::default()
        };
        let is_open = create_rw_signal(true);
        mount_to(host.clone(), move || {
            view! {
                <Popover
                    is_open=is_open
                    content=|| view! { <p>"Shown"</p> }
                    render_target=target()
                    config=config.clone()
                    on_interaction=|_: bool| {}
                />
            }
        });

        TimeoutFuture::new(50).await;
        assert_eq!(*hooks.borrow(), vec!["opened"]);
        let panel = query(&host, ".ui-popover").unwrap();
        assert!(!panel.class_name().contains(classes::POPOVER_ENTER));

        is_open.set(false);
        TimeoutFuture::new(50).await;
        assert_eq!(*hooks.borrow(), vec!["opened", "closed"]);
        assert_eq!(count(&host, ".ui-popover"), 0);

        remove(&host);
    }

    #[wasm_bindgen_test]
    fn test_click_on_dismiss_element_reports_close() {
        let host = append_element(None, "div", "", "");
        let reports = Rc::new(RefCell::new(Vec::new()));
        let on_interaction = {
            let reports = Rc::clone(&reports);
            Callback::new(move |next_open: bool| reports.borrow_mut().push(next_open))
        };
        mount_to(host.clone(), move || {
            view! {
                <Popover
                    is_open=Signal::derive(|| true)
                    content=|| view! {
                        <p class="keep">"Stay"</p>
                        <button class="ui-popover-dismiss"><span class="dismiss-label">"Close"</span></button>
                    }
                    render_target=target()
                    on_interaction=on_interaction
                />
            }
        });

        dispatch(&query(&host, ".keep").unwrap(), &mouse_event("click", 1, 1));
        assert!(reports.borrow().is_empty());

        dispatch(&query(&host, ".dismiss-label").unwrap(), &mouse_event("click", 1, 1));
        assert_eq!(*reports.borrow(), vec![false]);

        remove(&host);
    }
}
