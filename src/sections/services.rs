use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::api::{self, SiteConfig, Specialty};
use crate::color;
use crate::hooks::use_visible_once;
use crate::icons::Icon;
use crate::text_gradient::process_text_with_gradient;

const DEFAULT_TITLE: &str = "Como posso (ajudar)";
const DEFAULT_SUBTITLE: &str =
    "Atendimentos pensados para diferentes momentos e necessidades";

/// Service cards reuse the specialty list: same data, different framing.
#[function_component(ServicesSection)]
pub fn services_section() -> Html {
    let configs = use_state(Vec::<SiteConfig>::new);
    let specialties = use_state(Vec::<Specialty>::new);
    let section_ref = use_node_ref();
    let visible = use_visible_once(section_ref.clone());

    {
        let configs = configs.clone();
        let specialties = specialties.clone();
        use_effect_with_deps(
            move |_| {
                spawn_local(async move {
                    configs.set(api::fetch_site_config().await);
                });
                spawn_local(async move {
                    specialties.set(api::fetch_specialties().await);
                });
                || ()
            },
            (),
        );
    }

    let title = api::config_field_str(&configs, "services_section", "title")
        .unwrap_or_else(|| DEFAULT_TITLE.into());
    let subtitle = api::config_field_str(&configs, "services_section", "subtitle")
        .unwrap_or_else(|| DEFAULT_SUBTITLE.into());
    let cards = api::active_specialties(&specialties);

    html! {
        <section id="services" data-section="services" class="services-section" ref={section_ref}>
            <div class="services-inner">
                <h2>{ process_text_with_gradient(&title, None) }</h2>
                <p class="services-subtitle">{ subtitle }</p>
                <div class="services-grid">
                    { for cards.iter().enumerate().map(|(index, specialty)| {
                        let tint = color::soft_tint_or_neutral(&specialty.icon_color);
                        let delay = 0.2 + index as f64 * 0.1;
                        html! {
                            <div
                                class={classes!("service-card", visible.then_some("entered"))}
                                style={format!("transition-delay: {:.1}s; background-color: {};", delay, tint)}
                            >
                                { Icon::resolve(&specialty.icon).render(&specialty.icon_color) }
                                <h3>{ &specialty.title }</h3>
                                <p>{ &specialty.description }</p>
                            </div>
                        }
                    }) }
                </div>
            </div>

            <style>
                {r#"
                .services-section {
                    padding: 3rem 1.5rem;
                }

                .services-inner {
                    max-width: 1100px;
                    margin: 0 auto;
                    text-align: center;
                }

                .services-inner h2 {
                    font-size: 2rem;
                    color: #1f2937;
                    margin-bottom: 0.75rem;
                }

                .services-subtitle {
                    color: #6b7280;
                    margin-bottom: 2.5rem;
                }

                .services-grid {
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(260px, 1fr));
                    gap: 1.5rem;
                }

                .service-card {
                    border-radius: 20px;
                    padding: 2rem 1.5rem;
                    text-align: left;
                    opacity: 0;
                    transform: translateY(20px);
                    transition: opacity 0.6s ease-out, transform 0.6s ease-out;
                }

                .service-card.entered {
                    opacity: 1;
                    transform: translateY(0);
                }

                .service-card h3 {
                    font-size: 1.15rem;
                    color: #1f2937;
                    margin: 0.75rem 0 0.5rem;
                }

                .service-card p {
                    font-size: 0.9rem;
                    color: #4b5563;
                    line-height: 1.6;
                }
                "#}
            </style>
        </section>
    }
}
