use claimsite::content::Meta;
use claimsite::nav::{scroll_target, NavState, Section};
use leptos::ev::{self, MouseEvent};
use leptos::prelude::*;

use crate::ui_model::nav_class;

fn smooth_scroll_to(top: f64) {
    let opts = web_sys::ScrollToOptions::new();
    opts.set_top(top);
    opts.set_behavior(web_sys::ScrollBehavior::Smooth);
    window().scroll_to_with_scroll_to_options(&opts);
}

/// Smooth-scroll so the section lands just below the fixed bar.
pub(super) fn scroll_to_section(section: Section) {
    let Some(el) = document().get_element_by_id(section.id()) else {
        return;
    };
    let page_offset = window().page_y_offset().unwrap_or(0.0);
    smooth_scroll_to(scroll_target(el.get_bounding_client_rect().top(), page_offset));
}

#[component]
pub(super) fn NavBar(meta: Meta) -> impl IntoView {
    let (nav, set_nav) = signal(NavState::new());

    let listener = window_event_listener(ev::scroll, move |_| {
        let y = window().scroll_y().unwrap_or(0.0);
        let mut next = nav.get_untracked();
        if next.on_scroll(y) {
            set_nav.set(next);
        }
    });
    let listener = StoredValue::new_local(Some(listener));
    on_cleanup(move || {
        if let Some(Some(handle)) = listener.try_update_value(Option::take) {
            handle.remove();
        }
    });

    let go = move |section: Section| {
        move |e: MouseEvent| {
            e.prevent_default();
            set_nav.update(|n| {
                n.navigate(section);
            });
            scroll_to_section(section);
        }
    };

    let links = Section::nav_links()
        .iter()
        .map(|&s| view! { <a href=s.href() on:click=go(s)>{s.label()}</a> })
        .collect_view();

    let paper_url = meta.paper_url.clone();

    view! {
        <nav class=move || nav_class(nav.get().scrolled())>
            <div class="nav-inner">
                <a
                    class="brand"
                    href="#"
                    on:click=move |e: MouseEvent| {
                        e.prevent_default();
                        set_nav.update(NavState::close_menu);
                        smooth_scroll_to(0.0);
                    }
                >
                    <span class="brand-mark">"C"</span>
                    <span class="brand-text">{meta.title}</span>
                </a>
                <div class="nav-links">
                    {links}
                    <a class="btn small" href=paper_url.clone() target="_blank" rel="noopener noreferrer">
                        "Paper"
                    </a>
                </div>
                <button
                    class="menu-toggle"
                    aria-label="Toggle menu"
                    on:click=move |_| set_nav.update(NavState::toggle_menu)
                >
                    {move || if nav.get().menu_open() { "✕" } else { "☰" }}
                </button>
            </div>
        </nav>
        <Show when=move || nav.get().menu_open()>
            <div class="mobile-menu">
                {Section::nav_links()
                    .iter()
                    .map(|&s| view! { <a href=s.href() on:click=go(s)>{s.label()}</a> })
                    .collect_view()}
                <a
                    class="btn"
                    href=paper_url.clone()
                    target="_blank"
                    rel="noopener noreferrer"
                    on:click=move |_| set_nav.update(NavState::close_menu)
                >
                    "Read Paper"
                </a>
            </div>
        </Show>
    }
}
