use serde_json::Value;
use wasm_bindgen_futures::spawn_local;
use web_sys::{MouseEvent, ScrollBehavior, ScrollToOptions};
use yew::prelude::*;

use crate::api::{self, SiteConfig};
use crate::components::footer::Footer;
use crate::components::navigation::Navigation;
use crate::hooks::use_scroll_flag;
use crate::sections::about::AboutSection;
use crate::sections::contact::ContactSection;
use crate::sections::faq::FaqSection;
use crate::sections::hero::HeroSection;
use crate::sections::inspirational::InspirationalQuotes;
use crate::sections::maintenance::MaintenancePage;
use crate::sections::photo_carousel::PhotoCarousel;
use crate::sections::pixels::MarketingPixels;
use crate::sections::services::ServicesSection;
use crate::sections::testimonials::TestimonialsSection;

/// The back-to-top button appears once the visitor has scrolled past this.
const BACK_TO_TOP_THRESHOLD: f64 = 300.0;

/// Top-level blocks of the page, in the order the admin panel lists them.
/// That listing order is also the tie-break when two sections are given
/// the same numeric order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionKind {
    Hero,
    About,
    Services,
    Testimonials,
    Faq,
    Contact,
    PhotoCarousel,
    Inspirational,
}

impl SectionKind {
    pub const ALL: [SectionKind; 8] = [
        SectionKind::Hero,
        SectionKind::About,
        SectionKind::Services,
        SectionKind::Testimonials,
        SectionKind::Faq,
        SectionKind::Contact,
        SectionKind::PhotoCarousel,
        SectionKind::Inspirational,
    ];

    /// Key used in the `sections_order` and `sections_visibility` config
    /// maps.
    pub fn key(self) -> &'static str {
        match self {
            SectionKind::Hero => "hero",
            SectionKind::About => "about",
            SectionKind::Services => "services",
            SectionKind::Testimonials => "testimonials",
            SectionKind::Faq => "faq",
            SectionKind::Contact => "contact",
            SectionKind::PhotoCarousel => "photo-carousel",
            SectionKind::Inspirational => "inspirational",
        }
    }

    /// The photo carousel sits between testimonials and the quotes by
    /// default; fractional orders keep the gaps open for the admin.
    pub fn default_order(self) -> f64 {
        match self {
            SectionKind::Hero => 0.0,
            SectionKind::About => 1.0,
            SectionKind::Services => 2.0,
            SectionKind::Testimonials => 3.0,
            SectionKind::PhotoCarousel => 3.5,
            SectionKind::Inspirational => 4.0,
            SectionKind::Faq => 5.0,
            SectionKind::Contact => 6.0,
        }
    }
}

fn order_for(order_cfg: Option<&Value>, kind: SectionKind) -> f64 {
    order_cfg
        .and_then(|cfg| cfg.get(kind.key()))
        .and_then(Value::as_f64)
        .unwrap_or_else(|| kind.default_order())
}

fn is_visible(visibility_cfg: Option<&Value>, kind: SectionKind) -> bool {
    visibility_cfg
        .and_then(|cfg| cfg.get(kind.key()))
        .and_then(Value::as_bool)
        .unwrap_or(true)
}

/// Sections to mount, in render order. Maintenance mode short-circuits to
/// nothing: the caller renders the placeholder instead. Hidden sections
/// are dropped entirely, not just hidden.
pub fn compose_sections(
    maintenance: bool,
    order_cfg: Option<&Value>,
    visibility_cfg: Option<&Value>,
) -> Vec<SectionKind> {
    if maintenance {
        return Vec::new();
    }
    let mut sections: Vec<(SectionKind, f64)> = SectionKind::ALL
        .into_iter()
        .filter(|kind| is_visible(visibility_cfg, *kind))
        .map(|kind| (kind, order_for(order_cfg, kind)))
        .collect();
    // Stable sort: equal orders keep registry position.
    sections.sort_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(std::cmp::Ordering::Equal));
    sections.into_iter().map(|(kind, _)| kind).collect()
}

fn render_section(kind: SectionKind) -> Html {
    match kind {
        SectionKind::Hero => html! { <HeroSection /> },
        SectionKind::About => html! { <AboutSection /> },
        SectionKind::Services => html! { <ServicesSection /> },
        SectionKind::Testimonials => html! { <TestimonialsSection /> },
        SectionKind::Faq => html! { <FaqSection /> },
        SectionKind::Contact => html! { <ContactSection /> },
        SectionKind::PhotoCarousel => html! { <PhotoCarousel /> },
        SectionKind::Inspirational => html! { <InspirationalQuotes /> },
    }
}

#[function_component(Home)]
pub fn home() -> Html {
    let maintenance = use_state(|| false);
    let configs = use_state(Vec::<SiteConfig>::new);
    let show_top_button = use_scroll_flag(BACK_TO_TOP_THRESHOLD);

    {
        let maintenance = maintenance.clone();
        let configs = configs.clone();
        use_effect_with_deps(
            move |_| {
                spawn_local(async move {
                    maintenance.set(api::fetch_maintenance_enabled().await);
                });
                spawn_local(async move {
                    configs.set(api::fetch_site_config().await);
                });
                || ()
            },
            (),
        );
    }

    let scroll_to_top = Callback::from(|e: MouseEvent| {
        e.prevent_default();
        if let Some(window) = web_sys::window() {
            let options = ScrollToOptions::new();
            options.set_top(0.0);
            options.set_behavior(ScrollBehavior::Smooth);
            window.scroll_to_with_scroll_to_options(&options);
        }
    });

    // While the maintenance check is in flight the site renders normally;
    // the flag flips the whole page over once it resolves.
    if *maintenance {
        return html! {
            <>
                <MarketingPixels />
                <MaintenancePage />
            </>
        };
    }

    let order_cfg = api::config_value(&configs, "sections_order");
    let visibility_cfg = api::config_value(&configs, "sections_visibility");
    let sections = compose_sections(false, order_cfg, visibility_cfg);

    html! {
        <div class="main-page">
            <div class="page-backdrop">
                <div class="backdrop-blob backdrop-blob-top"></div>
                <div class="backdrop-blob backdrop-blob-bottom"></div>
            </div>

            <Navigation />

            <main class="page-sections">
                { for sections.into_iter().map(|kind| html! {
                    <section key={kind.key()} class="page-section">
                        { render_section(kind) }
                    </section>
                }) }
            </main>

            <Footer />

            if show_top_button {
                <button
                    class="back-to-top"
                    onclick={scroll_to_top}
                    aria-label="Voltar ao topo"
                >
                    { "↑" }
                </button>
            }

            <MarketingPixels />

            <style>
                {r#"
                .main-page {
                    min-height: 100vh;
                    display: flex;
                    flex-direction: column;
                    position: relative;
                    overflow-x: hidden;
                    background: linear-gradient(135deg, #f8fafc, #ffffff, #f9fafb);
                    color: #1f2937;
                }

                .page-backdrop {
                    position: fixed;
                    inset: 0;
                    pointer-events: none;
                    overflow: hidden;
                    opacity: 0.3;
                }

                .backdrop-blob {
                    position: absolute;
                    width: 24rem;
                    height: 24rem;
                    border-radius: 50%;
                    filter: blur(64px);
                }

                .backdrop-blob-top {
                    top: 5rem;
                    left: 2.5rem;
                    background: linear-gradient(to right, rgba(219, 234, 254, 0.2), rgba(243, 232, 255, 0.2));
                }

                .backdrop-blob-bottom {
                    bottom: 5rem;
                    right: 2.5rem;
                    background: linear-gradient(to right, rgba(243, 232, 255, 0.15), rgba(219, 234, 254, 0.15));
                }

                .page-sections {
                    position: relative;
                    z-index: 10;
                    width: 100%;
                    flex-grow: 1;
                }

                .page-section {
                    width: 100%;
                }

                .back-to-top {
                    position: fixed;
                    bottom: 6rem;
                    right: 1.5rem;
                    z-index: 120;
                    width: 3rem;
                    height: 3rem;
                    border: none;
                    border-radius: 50%;
                    background: rgba(255, 255, 255, 0.9);
                    box-shadow: 0 8px 24px rgba(0, 0, 0, 0.12);
                    color: #374151;
                    font-size: 1.25rem;
                    cursor: pointer;
                    transition: all 0.3s ease;
                }

                .back-to-top:hover {
                    color: #9333ea;
                    transform: scale(1.1);
                }

                /* Gradient badges are shared by every section title. */
                .text-gradient-badge {
                    -webkit-background-clip: text;
                    -webkit-text-fill-color: transparent;
                    font-weight: 600;
                }

                .gradient-pink-purple { background-image: linear-gradient(to right, #ec4899, #9333ea); }
                .gradient-blue-purple { background-image: linear-gradient(to right, #3b82f6, #9333ea); }
                .gradient-green-blue { background-image: linear-gradient(to right, #22c55e, #2563eb); }
                .gradient-orange-red { background-image: linear-gradient(to right, #f97316, #dc2626); }
                .gradient-teal-cyan { background-image: linear-gradient(to right, #14b8a6, #0891b2); }
                .gradient-indigo-purple { background-image: linear-gradient(to right, #6366f1, #9333ea); }
                .gradient-rose-pink { background-image: linear-gradient(to right, #f43f5e, #db2777); }
                .gradient-emerald-teal { background-image: linear-gradient(to right, #10b981, #0d9488); }
                .gradient-violet-purple { background-image: linear-gradient(to right, #8b5cf6, #9333ea); }
                .gradient-amber-orange { background-image: linear-gradient(to right, #f59e0b, #ea580c); }
                .gradient-sky-blue { background-image: linear-gradient(to right, #0ea5e9, #2563eb); }
                .gradient-lime-green { background-image: linear-gradient(to right, #84cc16, #16a34a); }
                .gradient-fuchsia-pink { background-image: linear-gradient(to right, #d946ef, #db2777); }
                .gradient-cyan-blue { background-image: linear-gradient(to right, #06b6d4, #2563eb); }
                .gradient-yellow-orange { background-image: linear-gradient(to right, #eab308, #ea580c); }
                "#}
            </style>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn keys(sections: &[SectionKind]) -> Vec<&'static str> {
        sections.iter().map(|kind| kind.key()).collect()
    }

    #[test]
    fn default_order_interleaves_carousel_and_quotes() {
        let sections = compose_sections(false, None, None);
        assert_eq!(
            keys(&sections),
            vec![
                "hero",
                "about",
                "services",
                "testimonials",
                "photo-carousel",
                "inspirational",
                "faq",
                "contact",
            ]
        );
    }

    #[test]
    fn order_overrides_move_sections() {
        let order = json!({ "about": 5, "hero": 1 });
        let sections = compose_sections(false, Some(&order), None);
        let listed = keys(&sections);
        let position = |key: &str| listed.iter().position(|k| *k == key).unwrap();
        // about (5) now lands after services (2) and testimonials (3).
        assert!(position("about") > position("services"));
        assert!(position("about") > position("testimonials"));
        assert_eq!(position("hero"), 0);
    }

    #[test]
    fn equal_orders_keep_registry_position() {
        let order = json!({
            "hero": 2, "about": 2, "services": 2, "testimonials": 2,
            "faq": 2, "contact": 2, "photo-carousel": 2, "inspirational": 2
        });
        let sections = compose_sections(false, Some(&order), None);
        assert_eq!(
            keys(&sections),
            vec![
                "hero",
                "about",
                "services",
                "testimonials",
                "faq",
                "contact",
                "photo-carousel",
                "inspirational",
            ]
        );
    }

    #[test]
    fn hidden_sections_are_dropped_not_reordered() {
        let visibility = json!({ "hero": false, "faq": false });
        let sections = compose_sections(false, None, Some(&visibility));
        let listed = keys(&sections);
        assert!(!listed.contains(&"hero"));
        assert!(!listed.contains(&"faq"));
        assert_eq!(listed.len(), 6);
    }

    #[test]
    fn maintenance_mode_mounts_no_sections() {
        let order = json!({ "hero": 0 });
        assert!(compose_sections(true, Some(&order), None).is_empty());
    }

    #[test]
    fn non_boolean_visibility_defaults_to_shown() {
        let visibility = json!({ "hero": "nope" });
        let sections = compose_sections(false, None, Some(&visibility));
        assert_eq!(keys(&sections)[0], "hero");
    }

    #[test]
    fn back_to_top_threshold_is_exclusive() {
        use crate::hooks::past_threshold;

        assert!(!past_threshold(0.0, BACK_TO_TOP_THRESHOLD));
        assert!(!past_threshold(300.0, BACK_TO_TOP_THRESHOLD));
        assert!(past_threshold(300.1, BACK_TO_TOP_THRESHOLD));
    }
}
