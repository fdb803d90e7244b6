use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::api::{self, SiteConfig};
use crate::hooks::use_visible_once;
use crate::text_gradient::process_text_with_gradient;

const DEFAULT_PHONE: &str = "(44) 99999-9999";
const DEFAULT_EMAIL: &str = "contato@adriellebenhossi.com.br";
const DEFAULT_ADDRESS: &str = "Campo Mourão, Paraná";
const DEFAULT_HOURS: &str = "Segunda a sexta, das 8h às 19h";

/// WhatsApp deep link from a BR phone number as the admin typed it.
fn whatsapp_link(phone: &str) -> String {
    let digits: String = phone.chars().filter(char::is_ascii_digit).collect();
    format!("https://wa.me/55{}", digits)
}

#[function_component(ContactSection)]
pub fn contact_section() -> Html {
    let configs = use_state(Vec::<SiteConfig>::new);
    let section_ref = use_node_ref();
    let visible = use_visible_once(section_ref.clone());

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

    let phone = api::config_field_str(&configs, "general_info", "phone")
        .unwrap_or_else(|| DEFAULT_PHONE.into());
    let email = api::config_field_str(&configs, "general_info", "email")
        .unwrap_or_else(|| DEFAULT_EMAIL.into());
    let address = api::config_field_str(&configs, "general_info", "address")
        .unwrap_or_else(|| DEFAULT_ADDRESS.into());
    let hours = api::config_field_str(&configs, "general_info", "hours")
        .unwrap_or_else(|| DEFAULT_HOURS.into());

    html! {
        <section id="contact" data-section="contact" class="contact-section" ref={section_ref}>
            <div class={classes!("contact-inner", visible.then_some("entered"))}>
                <h2>{ process_text_with_gradient("Vamos (conversar)?", None) }</h2>
                <p class="contact-subtitle">
                    {"Entre em contato para agendar uma sessão ou tirar dúvidas"}
                </p>

                <div class="contact-cards">
                    <a class="contact-card" href={whatsapp_link(&phone)} target="_blank" rel="noopener">
                        <span class="contact-card-icon">{"💬"}</span>
                        <h3>{"WhatsApp"}</h3>
                        <p>{ phone.clone() }</p>
                    </a>
                    <a class="contact-card" href={format!("mailto:{}", email)}>
                        <span class="contact-card-icon">{"✉️"}</span>
                        <h3>{"E-mail"}</h3>
                        <p>{ email.clone() }</p>
                    </a>
                    <div class="contact-card">
                        <span class="contact-card-icon">{"📍"}</span>
                        <h3>{"Consultório"}</h3>
                        <p>{ address }</p>
                    </div>
                    <div class="contact-card">
                        <span class="contact-card-icon">{"🕐"}</span>
                        <h3>{"Horários"}</h3>
                        <p>{ hours }</p>
                    </div>
                </div>
            </div>

            <style>
                {r#"
                .contact-section {
                    padding: 3rem 1.5rem 4rem;
                }

                .contact-inner {
                    max-width: 900px;
                    margin: 0 auto;
                    text-align: center;
                    opacity: 0;
                    transform: translateY(20px);
                    transition: opacity 0.8s ease-out, transform 0.8s ease-out;
                }

                .contact-inner.entered {
                    opacity: 1;
                    transform: translateY(0);
                }

                .contact-inner h2 {
                    font-size: 2rem;
                    color: #1f2937;
                    margin-bottom: 0.75rem;
                }

                .contact-subtitle {
                    color: #6b7280;
                    margin-bottom: 2.5rem;
                }

                .contact-cards {
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(200px, 1fr));
                    gap: 1.25rem;
                }

                .contact-card {
                    display: block;
                    background: rgba(255, 255, 255, 0.85);
                    border-radius: 20px;
                    padding: 1.75rem 1.25rem;
                    box-shadow: 0 4px 16px rgba(0, 0, 0, 0.05);
                    text-decoration: none;
                    transition: transform 0.3s ease;
                }

                .contact-card:hover {
                    transform: translateY(-4px);
                }

                .contact-card-icon {
                    font-size: 1.75rem;
                }

                .contact-card h3 {
                    color: #1f2937;
                    font-size: 1rem;
                    margin: 0.75rem 0 0.25rem;
                }

                .contact-card p {
                    color: #6b7280;
                    font-size: 0.9rem;
                    word-break: break-word;
                }
                "#}
            </style>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn whatsapp_link_strips_formatting() {
        assert_eq!(
            whatsapp_link("(44) 99999-9999"),
            "https://wa.me/5544999999999"
        );
    }
}
