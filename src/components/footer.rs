use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::api::{self, SiteConfig};

#[function_component(Footer)]
pub fn footer() -> Html {
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
    let crp = api::config_field_str(&configs, "general_info", "crp")
        .unwrap_or_else(|| "08/123456".into());

    html! {
        <footer class="site-footer">
            <div class="footer-content">
                <p class="footer-name">{ name }</p>
                <p class="footer-crp">{ "CRP: " }{ crp }</p>
                <p class="footer-note">
                    {"Psicoterapia não substitui atendimento de emergência. \
                      Em crise, ligue 188 (CVV) ou procure o serviço de saúde mais próximo."}
                </p>
            </div>

            <style>
                {r#"
                .site-footer {
                    position: relative;
                    z-index: 10;
                    width: 100%;
                    background: #1f2937;
                    color: #e5e7eb;
                    padding: 2.5rem 1.5rem;
                    text-align: center;
                }

                .footer-name {
                    font-weight: 600;
                    margin-bottom: 0.25rem;
                }

                .footer-crp {
                    font-size: 0.85rem;
                    color: #9ca3af;
                    margin-bottom: 1rem;
                }

                .footer-note {
                    font-size: 0.8rem;
                    color: #9ca3af;
                    max-width: 480px;
                    margin: 0 auto;
                    line-height: 1.6;
                }
                "#}
            </style>
        </footer>
    }
}
