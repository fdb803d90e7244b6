use web_sys::MouseEvent;
use yew::prelude::*;

use crate::hooks::use_scroll_flag;

/// Nav gains its solid background once the hero starts leaving the
/// viewport.
const SCROLLED_STYLE_THRESHOLD: f64 = 80.0;

const LINKS: &[(&str, &str)] = &[
    ("about", "Sobre"),
    ("services", "Serviços"),
    ("testimonials", "Depoimentos"),
    ("faq", "Dúvidas"),
    ("contact", "Contato"),
];

fn go_to(id: &'static str, close_menu: Callback<()>) -> Callback<MouseEvent> {
    Callback::from(move |e: MouseEvent| {
        e.prevent_default();
        close_menu.emit(());
        if let Some(element) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(id))
        {
            element.scroll_into_view();
        }
    })
}

#[function_component(Navigation)]
pub fn navigation() -> Html {
    let menu_open = use_state(|| false);
    let is_scrolled = use_scroll_flag(SCROLLED_STYLE_THRESHOLD);

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_| menu_open.set(false))
    };

    html! {
        <nav class={classes!("top-nav", is_scrolled.then_some("scrolled"))}>
            <div class="nav-content">
                <a class="nav-logo" href="#hero" onclick={go_to("hero", close_menu.clone())}>
                    { "Adrielle Benhossi" }
                </a>

                <button class="burger-menu" onclick={toggle_menu} aria-label="Menu">
                    <span></span>
                    <span></span>
                    <span></span>
                </button>

                <div class={classes!("nav-links", (*menu_open).then_some("mobile-menu-open"))}>
                    { for LINKS.iter().map(|&(id, label)| html! {
                        <a
                            class="nav-link"
                            href={format!("#{}", id)}
                            onclick={go_to(id, close_menu.clone())}
                        >
                            { label }
                        </a>
                    }) }
                </div>
            </div>

            <style>
                {r#"
                .top-nav {
                    position: fixed;
                    top: 0;
                    left: 0;
                    right: 0;
                    z-index: 100;
                    padding: 1rem 1.5rem;
                    transition: background 0.3s ease, box-shadow 0.3s ease;
                }

                .top-nav.scrolled {
                    background: rgba(255, 255, 255, 0.92);
                    backdrop-filter: blur(8px);
                    box-shadow: 0 4px 16px rgba(0, 0, 0, 0.06);
                }

                .nav-content {
                    max-width: 1100px;
                    margin: 0 auto;
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                }

                .nav-logo {
                    font-weight: 600;
                    color: #1f2937;
                    text-decoration: none;
                    font-size: 1.1rem;
                }

                .nav-links {
                    display: flex;
                    gap: 1.5rem;
                }

                .nav-link {
                    color: #4b5563;
                    text-decoration: none;
                    font-size: 0.95rem;
                    transition: color 0.3s ease;
                }

                .nav-link:hover {
                    color: #ec4899;
                }

                .burger-menu {
                    display: none;
                    flex-direction: column;
                    gap: 4px;
                    background: none;
                    border: none;
                    cursor: pointer;
                }

                .burger-menu span {
                    width: 22px;
                    height: 2px;
                    background: #4b5563;
                }

                @media (max-width: 768px) {
                    .burger-menu { display: flex; }

                    .nav-links {
                        display: none;
                        position: absolute;
                        top: 100%;
                        left: 0;
                        right: 0;
                        background: rgba(255, 255, 255, 0.97);
                        flex-direction: column;
                        padding: 1.5rem;
                        box-shadow: 0 12px 24px rgba(0, 0, 0, 0.08);
                    }

                    .nav-links.mobile-menu-open { display: flex; }
                }
                "#}
            </style>
        </nav>
    }
}
