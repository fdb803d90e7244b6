use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::api::{self, Credential, SiteConfig, Specialty};
use crate::color;
use crate::hooks::use_visible_once;
use crate::icons::Icon;
use crate::text_gradient::process_text_with_gradient;

const DEFAULT_NAME: &str = "Dra. Adrielle Benhossi";
const DEFAULT_TITLE: &str = "Psicóloga Clínica";
const DEFAULT_CRP: &str = "08/123456";
const DEFAULT_BIO: &str = "Este é o espaço para escrever sobre você no painel administrativo.";
const DEFAULT_SECTION_TITLE: &str = "Minhas (especialidades)";
const DEFAULT_SECTION_SUBTITLE: &str =
    "Áreas especializadas onde posso te ajudar a encontrar equilíbrio e bem-estar emocional";

pub(crate) struct Chip {
    pub title: String,
    pub subtitle: String,
    pub gradient: String,
}

/// Chips shown under the bio. When the admin has no active credential
/// configured, three fixed chips stand in so the panel never renders
/// empty.
pub(crate) fn credential_chips(credentials: &[Credential]) -> Vec<Chip> {
    let active = api::active_credentials(credentials);
    if active.is_empty() {
        return vec![
            Chip {
                title: "Centro Universitário Integrado".into(),
                subtitle: "Formação Acadêmica".into(),
                gradient: "chip-pink-purple".into(),
            },
            Chip {
                title: "Terapia Cognitivo-Comportamental".into(),
                subtitle: "Abordagem Terapêutica".into(),
                gradient: "chip-purple-indigo".into(),
            },
            Chip {
                title: "Mais de 5 anos de experiência".into(),
                subtitle: "Experiência Profissional".into(),
                gradient: "chip-green-teal".into(),
            },
        ];
    }
    active
        .into_iter()
        .map(|c| Chip {
            title: c.title,
            subtitle: c.subtitle,
            gradient: c.gradient,
        })
        .collect()
}

fn specialty_card(specialty: &Specialty, index: usize, visible: bool) -> Html {
    let icon = Icon::resolve(&specialty.icon);
    let circle_style = format!(
        "background-color: {};",
        color::soft_tint_or_neutral(&specialty.icon_color)
    );
    // Cards enter one after another once the section is on screen.
    let delay = 0.4 + index as f64 * 0.1;
    html! {
        <div
            class={classes!("specialty-card", visible.then_some("entered"))}
            style={format!("transition-delay: {:.1}s;", delay)}
        >
            <div class="specialty-icon-circle" style={circle_style}>
                { icon.render(&specialty.icon_color) }
            </div>
            <div>
                <h4>{ &specialty.title }</h4>
                <p>{ &specialty.description }</p>
            </div>
        </div>
    }
}

#[function_component(AboutSection)]
pub fn about_section() -> Html {
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

    let name = api::config_field_str(&configs, "general_info", "name")
        .unwrap_or_else(|| DEFAULT_NAME.into());
    let crp = api::config_field_str(&configs, "general_info", "crp")
        .unwrap_or_else(|| DEFAULT_CRP.into());
    let professional_title = api::config_field_str(&configs, "professional_title", "title")
        .unwrap_or_else(|| DEFAULT_TITLE.into());
    let bio = api::config_field_str(&configs, "about_section", "description")
        .filter(|text| !text.is_empty())
        .unwrap_or_else(|| DEFAULT_BIO.into());
    let section_title = api::config_field_str(&configs, "about_section", "title")
        .unwrap_or_else(|| DEFAULT_SECTION_TITLE.into());
    let section_subtitle = api::config_field_str(&configs, "about_section", "subtitle")
        .unwrap_or_else(|| DEFAULT_SECTION_SUBTITLE.into());

    let chips = credential_chips(&api::credentials_from(&configs));
    let cards = api::active_specialties(&specialties);

    html! {
        <section id="about" data-section="about" class="about-section" ref={section_ref}>
            <div class="about-grid">
                <div class={classes!("about-panel", "profile-panel", visible.then_some("entered"))}>
                    <h3 class="profile-name"><span class="text-gradient">{ name }</span></h3>
                    <p class="profile-title">{ professional_title }{ " • CRP: " }{ crp }</p>
                    <div class="profile-bio">
                        { for bio.split('\n').map(|paragraph| html! { <p>{ paragraph }</p> }) }
                    </div>
                    <div class="credential-chips">
                        { for chips.iter().map(|chip| html! {
                            <div class={classes!("credential-chip", chip.gradient.clone())}>
                                <div class="chip-title">{ &chip.title }</div>
                                <div class="chip-subtitle">{ &chip.subtitle }</div>
                            </div>
                        }) }
                    </div>
                </div>

                <div class="about-divider"></div>

                <div class={classes!("about-panel", "specialties-panel", visible.then_some("entered"))}>
                    <h2 class="specialties-title">
                        { process_text_with_gradient(&section_title, None) }
                    </h2>
                    <p class="specialties-subtitle">{ section_subtitle }</p>
                    <div class="specialty-cards">
                        { for cards.iter().enumerate().map(|(index, specialty)| {
                            specialty_card(specialty, index, visible)
                        }) }
                    </div>
                </div>
            </div>

            <style>
                {r#"
                .about-section {
                    padding: 3rem 1.5rem;
                    position: relative;
                    overflow: hidden;
                }

                .about-grid {
                    max-width: 1100px;
                    margin: 0 auto;
                    display: grid;
                    grid-template-columns: 1fr;
                    gap: 2rem;
                }

                @media (min-width: 1024px) {
                    .about-grid {
                        grid-template-columns: 5fr auto 5fr;
                        gap: 3rem;
                    }
                }

                .about-divider {
                    width: 1px;
                    background: linear-gradient(to bottom, transparent, #fbcfe8, transparent);
                    display: none;
                }

                @media (min-width: 1024px) {
                    .about-divider { display: block; }
                }

                .about-panel {
                    background: rgba(255, 255, 255, 0.85);
                    border-radius: 24px;
                    padding: 2rem;
                    box-shadow: 0 8px 32px rgba(0, 0, 0, 0.06);
                    opacity: 0;
                    transform: translateY(15px);
                    transition: opacity 0.6s ease-out, transform 0.6s ease-out;
                }

                .specialties-panel {
                    transition-duration: 0.8s;
                    transition-delay: 0.2s;
                }

                .about-panel.entered {
                    opacity: 1;
                    transform: translateY(0);
                }

                .profile-name {
                    font-size: 1.8rem;
                    margin-bottom: 0.5rem;
                    color: #1f2937;
                }

                .text-gradient {
                    background: linear-gradient(45deg, #ec4899, #8b5cf6);
                    -webkit-background-clip: text;
                    -webkit-text-fill-color: transparent;
                }

                .profile-title {
                    color: #ec4899;
                    font-size: 0.9rem;
                    font-weight: 500;
                    margin-bottom: 1.5rem;
                }

                .profile-bio p {
                    color: #4b5563;
                    line-height: 1.7;
                    margin-bottom: 1rem;
                }

                .credential-chips {
                    display: grid;
                    gap: 0.75rem;
                    max-width: 320px;
                    margin: 1rem auto 0;
                    text-align: center;
                }

                .credential-chip {
                    padding: 1rem;
                    border-radius: 16px;
                    background: linear-gradient(135deg, #fdf2f8, #faf5ff);
                }

                .chip-pink-purple { background: linear-gradient(135deg, #fdf2f8, #faf5ff); }
                .chip-purple-indigo { background: linear-gradient(135deg, #faf5ff, #eef2ff); }
                .chip-green-teal { background: linear-gradient(135deg, #f0fdf4, #f0fdfa); }

                .chip-title {
                    font-size: 0.9rem;
                    font-weight: 600;
                    color: #374151;
                }

                .chip-subtitle {
                    font-size: 0.75rem;
                    color: #6b7280;
                    margin-top: 0.25rem;
                }

                .specialties-title {
                    font-size: 1.8rem;
                    margin-bottom: 1rem;
                    color: #1f2937;
                }

                .specialties-subtitle {
                    color: #6b7280;
                    line-height: 1.6;
                    margin-bottom: 2rem;
                }

                .specialty-cards {
                    display: grid;
                    grid-template-columns: 1fr;
                    gap: 1.5rem;
                }

                .specialty-card {
                    display: flex;
                    align-items: flex-start;
                    gap: 1rem;
                    background: #ffffff;
                    border-radius: 20px;
                    padding: 1.5rem;
                    box-shadow: 0 4px 16px rgba(0, 0, 0, 0.05);
                    cursor: pointer;
                    opacity: 0;
                    transform: translateY(20px);
                    transition: opacity 0.6s ease-out, transform 0.6s ease-out;
                }

                .specialty-card.entered {
                    opacity: 1;
                    transform: translateY(0);
                }

                .specialty-card:hover {
                    transform: scale(1.05);
                }

                .specialty-icon-circle {
                    width: 48px;
                    height: 48px;
                    border-radius: 50%;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    flex-shrink: 0;
                }

                .specialty-icon {
                    font-size: 1.25rem;
                    line-height: 1;
                }

                .specialty-card h4 {
                    font-size: 1.1rem;
                    color: #1f2937;
                    margin-bottom: 0.5rem;
                }

                .specialty-card p {
                    font-size: 0.9rem;
                    color: #4b5563;
                    line-height: 1.6;
                }
                "#}
            </style>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn inactive(title: &str) -> Credential {
        Credential {
            id: 0,
            title: title.into(),
            subtitle: String::new(),
            gradient: String::new(),
            is_active: Some(false),
            order: None,
        }
    }

    #[test]
    fn empty_credentials_fall_back_to_three_defaults() {
        let chips = credential_chips(&[]);
        assert_eq!(chips.len(), 3);
        assert_eq!(chips[0].subtitle, "Formação Acadêmica");
        assert_eq!(chips[1].subtitle, "Abordagem Terapêutica");
        assert_eq!(chips[2].subtitle, "Experiência Profissional");
    }

    #[test]
    fn all_inactive_credentials_also_fall_back() {
        let credentials = vec![inactive("a"), inactive("b")];
        assert_eq!(credential_chips(&credentials).len(), 3);
    }

    #[test]
    fn configured_credentials_replace_the_defaults() {
        let credentials = vec![Credential {
            id: 1,
            title: "Neuropsicologia".into(),
            subtitle: "Especialização".into(),
            gradient: "chip-pink-purple".into(),
            is_active: None,
            order: None,
        }];
        let chips = credential_chips(&credentials);
        assert_eq!(chips.len(), 1);
        assert_eq!(chips[0].title, "Neuropsicologia");
    }
}
