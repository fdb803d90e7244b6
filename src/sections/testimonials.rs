use gloo_timers::callback::Timeout;
use yew::prelude::*;

use crate::hooks::use_visible_once;
use crate::text_gradient::process_text_with_gradient;

const ROTATE_AFTER_MS: u32 = 7_000;

struct Testimonial {
    quote: &'static str,
    author: &'static str,
    detail: &'static str,
}

const TESTIMONIALS: &[Testimonial] = &[
    Testimonial {
        quote: "Encontrei um espaço seguro para falar sobre o que eu não conseguia nomear. \
                Hoje entendo muito melhor os meus limites.",
        author: "M. S.",
        detail: "em acompanhamento há 1 ano",
    },
    Testimonial {
        quote: "As sessões me ajudaram a atravessar um período muito difícil com mais calma \
                e clareza.",
        author: "J. P.",
        detail: "em acompanhamento há 8 meses",
    },
    Testimonial {
        quote: "Profissional atenciosa e acolhedora. Cada conversa abre uma porta nova.",
        author: "A. L.",
        detail: "em acompanhamento há 2 anos",
    },
];

fn next_slide(index: usize) -> usize {
    (index + 1) % TESTIMONIALS.len()
}

#[function_component(TestimonialsSection)]
pub fn testimonials_section() -> Html {
    let current = use_state(|| 0usize);
    let section_ref = use_node_ref();
    let visible = use_visible_once(section_ref.clone());

    // Re-armed on every index change; dropping the Timeout cancels it, so
    // unmounting mid-rotation is safe.
    {
        let index_now = *current;
        let current = current.clone();
        use_effect_with_deps(
            move |index: &usize| {
                let next = next_slide(*index);
                let timeout = Timeout::new(ROTATE_AFTER_MS, move || current.set(next));
                move || drop(timeout)
            },
            index_now,
        );
    }

    let testimonial = &TESTIMONIALS[*current % TESTIMONIALS.len()];

    html! {
        <section
            id="testimonials"
            data-section="testimonials"
            class="testimonials-section"
            ref={section_ref}
        >
            <div class={classes!("testimonials-inner", visible.then_some("entered"))}>
                <h2>{ process_text_with_gradient("O que dizem os (pacientes)", None) }</h2>
                <blockquote class="testimonial-quote" key={*current}>
                    <p>{ testimonial.quote }</p>
                    <footer>
                        <span class="testimonial-author">{ testimonial.author }</span>
                        <span class="testimonial-detail">{ testimonial.detail }</span>
                    </footer>
                </blockquote>
                <div class="testimonial-dots">
                    { for (0..TESTIMONIALS.len()).map(|index| {
                        let is_active = index == *current;
                        let current = current.clone();
                        let onclick = Callback::from(move |_| current.set(index));
                        html! {
                            <button
                                class={classes!("dot", is_active.then_some("active"))}
                                {onclick}
                                aria-label={format!("Depoimento {}", index + 1)}
                            />
                        }
                    }) }
                </div>
            </div>

            <style>
                {r#"
                .testimonials-section {
                    padding: 3rem 1.5rem;
                }

                .testimonials-inner {
                    max-width: 720px;
                    margin: 0 auto;
                    text-align: center;
                    opacity: 0;
                    transform: translateY(20px);
                    transition: opacity 0.8s ease-out, transform 0.8s ease-out;
                }

                .testimonials-inner.entered {
                    opacity: 1;
                    transform: translateY(0);
                }

                .testimonials-inner h2 {
                    font-size: 2rem;
                    color: #1f2937;
                    margin-bottom: 2rem;
                }

                .testimonial-quote {
                    background: rgba(255, 255, 255, 0.85);
                    border-radius: 24px;
                    padding: 2.5rem 2rem;
                    box-shadow: 0 8px 32px rgba(0, 0, 0, 0.06);
                    margin: 0 0 1.5rem;
                    animation: quote-fade 0.6s ease-out;
                }

                @keyframes quote-fade {
                    from { opacity: 0; }
                    to { opacity: 1; }
                }

                .testimonial-quote p {
                    font-size: 1.1rem;
                    color: #374151;
                    line-height: 1.8;
                    font-style: italic;
                    margin-bottom: 1.5rem;
                }

                .testimonial-author {
                    font-weight: 600;
                    color: #ec4899;
                    margin-right: 0.5rem;
                }

                .testimonial-detail {
                    font-size: 0.85rem;
                    color: #9ca3af;
                }

                .testimonial-dots {
                    display: flex;
                    justify-content: center;
                    gap: 0.5rem;
                }

                .dot {
                    width: 10px;
                    height: 10px;
                    border-radius: 50%;
                    border: none;
                    background: #e5e7eb;
                    cursor: pointer;
                    transition: background 0.3s ease;
                }

                .dot.active {
                    background: #ec4899;
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
    fn rotation_wraps_back_to_the_first_quote() {
        assert_eq!(next_slide(0), 1);
        assert_eq!(next_slide(TESTIMONIALS.len() - 1), 0);
    }
}
