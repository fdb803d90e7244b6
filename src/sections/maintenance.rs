use yew::prelude::*;

/// Full-page placeholder shown while the site is flagged for maintenance.
/// Nothing else mounts in that mode.
#[function_component(MaintenancePage)]
pub fn maintenance_page() -> Html {
    html! {
        <div class="maintenance-page">
            <div class="maintenance-card">
                <span class="maintenance-glyph" aria-hidden="true">{ "🌱" }</span>
                <h1>{ "Site em manutenção" }</h1>
                <p>
                    {"Estamos cuidando de alguns detalhes. Volte em breve — \
                      ou entre em contato pelo WhatsApp."}
                </p>
            </div>

            <style>
                {r#"
                .maintenance-page {
                    min-height: 100vh;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    background: linear-gradient(135deg, #fdf2f8, #faf5ff);
                    padding: 1.5rem;
                }

                .maintenance-card {
                    max-width: 420px;
                    text-align: center;
                    background: rgba(255, 255, 255, 0.9);
                    border-radius: 24px;
                    padding: 3rem 2rem;
                    box-shadow: 0 16px 40px rgba(0, 0, 0, 0.08);
                }

                .maintenance-glyph {
                    font-size: 2.5rem;
                }

                .maintenance-card h1 {
                    font-size: 1.5rem;
                    color: #1f2937;
                    margin: 1rem 0 0.75rem;
                }

                .maintenance-card p {
                    color: #6b7280;
                    line-height: 1.7;
                }
                "#}
            </style>
        </div>
    }
}
