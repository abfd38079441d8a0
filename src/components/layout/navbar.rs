//! Top navigation bar. Everything it shows comes from its props; which links
//! appear and which one is active is decided by `features::nav::nav_items`.

use crate::{
    app_lib::theme::Theme,
    features::{
        auth::sign_out::{SignOutAction, SignOutOutcome, run_sign_out},
        nav::{LinkStyle, NavItem, ViewState, nav_items},
    },
    routes::paths,
};
use leptos::{prelude::*, task::spawn_local};
use leptos_router::components::A;

#[component]
pub fn NavBar(
    #[prop(into)] view_state: Signal<ViewState>,
    #[prop(into)] current_path: Signal<String>,
    on_sign_out: SignOutAction,
    #[prop(into)] brand_name: String,
) -> impl IntoView {
    let items = move || {
        let state = view_state.get();
        let path = current_path.get();
        let on_sign_out = on_sign_out.clone();
        let rendered = group_slots(nav_items(&state, &path))
            .into_iter()
            .map(|slot| match slot {
                NavSlot::Item(item) => nav_item_view(item, &on_sign_out),
                NavSlot::ButtonGroup(links) => view! {
                    <div class={Theme::BUTTON_GROUP}>
                        {links
                            .into_iter()
                            .map(|item| nav_item_view(item, &on_sign_out))
                            .collect_view()}
                    </div>
                }
                .into_any(),
            })
            .collect_view();

        match state {
            ViewState::Anonymous => view! { <ul class="flex space-x-1">{rendered}</ul> }.into_any(),
            ViewState::Authenticated { .. } => {
                view! { <div class="flex items-center space-x-2 ml-2">{rendered}</div> }.into_any()
            }
        }
    };

    view! {
        <nav class={Theme::NAV}>
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="flex justify-between h-16 items-center">
                    <div class={Theme::BRAND}>
                        <A href={paths::HOME}>
                            <span class={Theme::BRAND_TEXT}>{brand_name}</span>
                        </A>
                    </div>
                    <div class="flex items-center space-x-1">{items}</div>
                </div>
            </div>
        </nav>
    }
}

/// A rendered slot: either one item, or a run of adjacent button links that
/// share a single hover/tap wrapper.
#[derive(Debug, PartialEq, Eq)]
enum NavSlot {
    Item(NavItem),
    ButtonGroup(Vec<NavItem>),
}

fn is_button_link(item: &NavItem) -> bool {
    matches!(item, NavItem::Link { route, .. } if route.style == LinkStyle::Button)
}

fn group_slots(items: Vec<NavItem>) -> Vec<NavSlot> {
    let mut slots: Vec<NavSlot> = Vec::with_capacity(items.len());
    for item in items {
        if is_button_link(&item) {
            if let Some(NavSlot::ButtonGroup(links)) = slots.last_mut() {
                links.push(item);
                continue;
            }
            slots.push(NavSlot::ButtonGroup(vec![item]));
        } else {
            slots.push(NavSlot::Item(item));
        }
    }
    slots
}

fn nav_item_view(item: NavItem, on_sign_out: &SignOutAction) -> AnyView {
    match item {
        NavItem::Link { route, active } => match route.style {
            LinkStyle::Pill => {
                let icon_class = if active {
                    Theme::PILL_ICON_ACTIVE
                } else {
                    Theme::PILL_ICON_IDLE
                };
                view! {
                    <li class={Theme::PILL_ITEM}>
                        <A
                            href={route.path}
                            {..}
                            class={pill_class(active)}
                            aria-current={active.then_some("page")}
                        >
                            <span class={icon_class}>{route.icon}</span>
                            <span>{route.label}</span>
                            {active.then(|| view! { <div class={Theme::PILL_INDICATOR}></div> })}
                        </A>
                    </li>
                }
                .into_any()
            }
            LinkStyle::Button => {
                let icon_class = if active {
                    Theme::BUTTON_ICON_ACTIVE
                } else {
                    Theme::BUTTON_ICON_IDLE
                };
                view! {
                    <A
                        href={route.path}
                        {..}
                        class={button_class(active)}
                        aria-current={active.then_some("page")}
                    >
                        <span class={icon_class}>{route.icon}</span>
                        <span>{route.label}</span>
                        {active.then(|| view! { <div class={Theme::BUTTON_INDICATOR}></div> })}
                    </A>
                }
                .into_any()
            }
            LinkStyle::Badge => view! {
                <div class={Theme::BADGE_WRAPPER}>
                    <A href={route.path} {..} class={Theme::BADGE}>
                        <span class={Theme::ICON}>{route.icon}</span>
                        {route.label}
                    </A>
                </div>
            }
            .into_any(),
        },
        NavItem::AccountEmail(email) => view! {
            <div class={Theme::ACCOUNT}>
                <span class={Theme::ACCOUNT_TEXT}>
                    <span class={Theme::ACCOUNT_ICON}>"person"</span>
                    {email}
                </span>
            </div>
        }
        .into_any(),
        NavItem::SignOut => {
            let action = on_sign_out.clone();
            view! {
                <button
                    type="button"
                    class={Theme::SIGN_OUT}
                    on:click=move |_| {
                        let action = action.clone();
                        spawn_local(async move {
                            // already logged; the bar re-renders from the session
                            let _outcome: SignOutOutcome = run_sign_out(&action).await;
                        });
                    }
                >
                    <span class={Theme::ICON}>"logout"</span>
                    "Sign Out"
                </button>
            }
            .into_any()
        }
    }
}

fn pill_class(active: bool) -> String {
    let state = if active {
        Theme::PILL_ACTIVE
    } else {
        Theme::PILL_IDLE
    };
    format!("{} {state}", Theme::PILL_BASE)
}

fn button_class(active: bool) -> String {
    let state = if active {
        Theme::BUTTON_ACTIVE
    } else {
        Theme::BUTTON_IDLE
    };
    format!("{} {state}", Theme::BUTTON_BASE)
}
