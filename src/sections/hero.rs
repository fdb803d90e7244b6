use wasm_bindgen_futures::spawn_local;
use web_sys::MouseEvent;
use yew::prelude::*;

use crate::api::{self, SiteConfig};
use crate::text_gradient::process_text_with_gradient;

const DEFAULT_HEADLINE: &str = "Cuidando da sua (saúde mental) com carinho";
const DEFAULT_TAGLINE: &str =
    "Psicoterapia individual para adultos, em um espaço de escuta e acolhimento";

fn scroll_to_anchor(id: &'static str) -> Callback<MouseEvent> {
    Callback::from(move |e: MouseEvent| {
        e.prevent_default();
        if let Some(element) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(id))
        {
            element.scroll_into_view();
        }
    })
}

#[function_component(HeroSection)]
pub fn hero_section() -> Html {
    let configs = use_state(Vec::<SiteConfig>::new);

    {
        let configs = configs.clone();
        use_effect_with_deps(
            move |_| {
                spawn_local(async move {
                    configs.set(api::fetch_site_config().await);
                });
                || ()
            },
            (),
        );
    }

    let name = api::config_field_str(&configs, "general_info", "name")
        .unwrap_or_else(|| "Dra. Adrielle Benhossi".into());
    let title = api::config_field_str(&configs, "professional_title", "title")
        .unwrap_or_else(|| "Psicóloga Clínica".into());
    let headline = api::config_field_str(&configs, "hero_section", "title")
        .unwrap_or_else(|| DEFAULT_HEADLINE.into());
    let tagline = api::config_field_str(&configs, "hero_section", "subtitle")
        .unwrap_or_else(|| DEFAULT_TAGLINE.into());
    let portrait = api::config_field_str(&configs, "hero_image", "path");

    html! {
        <section id="hero" data-section="hero" class="hero-section">
            <div class="hero-inner">
                <div class="hero-copy">
                    <h1>{ process_text_with_gradient(&headline, None) }</h1>
                    <p class="hero-tagline">{ tagline }</p>
                    <p class="hero-byline">{ name }{ " • " }{ title }</p>
                    <div class="hero-actions">
                        <button class="hero-cta" onclick={scroll_to_anchor("contact")}>
                            { "Agendar consulta" }
                        </button>
                        <button class="hero-cta hero-cta-ghost" onclick={scroll_to_anchor("about")}>
                            { "Conhecer meu trabalho" }
                        </button>
                    </div>
                </div>
                if let Some(path) = portrait {
                    <div class="hero-portrait">
                        <img src={path} alt="Retrato da psicóloga" loading="lazy" />
                    </div>
                }
            </div>

            <style>
                {r#"
                .hero-section {
                    min-height: 85vh;
                    display: flex;
                    align-items: center;
                    padding: 6rem 1.5rem 3rem;
                }

                .hero-inner {
                    max-width: 1100px;
                    margin: 0 auto;
                    display: flex;
                    align-items: center;
                    gap: 3rem;
                    flex-wrap: wrap;
                }

                .hero-copy {
                    flex: 1 1 420px;
                    animation: hero-rise 0.8s ease-out both;
                }

                @keyframes hero-rise {
                    from { opacity: 0; transform: translateY(20px); }
                    to { opacity: 1; transform: translateY(0); }
                }

                .hero-copy h1 {
                    font-size: clamp(2rem, 5vw, 3.2rem);
                    line-height: 1.2;
                    color: #1f2937;
                    margin-bottom: 1.5rem;
                }

                .hero-tagline {
                    font-size: 1.15rem;
                    color: #6b7280;
                    line-height: 1.7;
                    margin-bottom: 0.75rem;
                }

                .hero-byline {
                    font-size: 0.9rem;
                    color: #ec4899;
                    font-weight: 500;
                    margin-bottom: 2rem;
                }

                .hero-actions {
                    display: flex;
                    gap: 1rem;
                    flex-wrap: wrap;
                }

                .hero-cta {
                    border: none;
                    border-radius: 999px;
                    padding: 0.9rem 2rem;
                    font-size: 1rem;
                    cursor: pointer;
                    background: linear-gradient(45deg, #ec4899, #8b5cf6);
                    color: #ffffff;
                    transition: transform 0.3s ease, box-shadow 0.3s ease;
                }

                .hero-cta:hover {
                    transform: translateY(-2px);
                    box-shadow: 0 12px 24px rgba(236, 72, 153, 0.25);
                }

                .hero-cta-ghost {
                    background: transparent;
                    color: #8b5cf6;
                    border: 1px solid #e9d5ff;
                }

                .hero-portrait {
                    flex: 0 1 340px;
                    animation: hero-rise 0.8s ease-out 0.2s both;
                }

                .hero-portrait img {
                    width: 100%;
                    border-radius: 32px;
                    box-shadow: 0 24px 48px rgba(0, 0, 0, 0.12);
                }
                "#}
            </style>
        </section>
    }
}
