use gloo_timers::callback::Timeout;
use yew::prelude::*;

use crate::hooks::use_visible_once;

const ROTATE_AFTER_MS: u32 = 9_000;

const QUOTES: &[(&str, &str)] = &[
    (
        "Não é sobre chegar ao topo do mundo, é sobre estar em paz com quem você é.",
        "Autor desconhecido",
    ),
    (
        "O que a gente não nomeia, a gente carrega.",
        "Provérbio popular",
    ),
    (
        "Entre o estímulo e a resposta há um espaço. Nesse espaço está o nosso poder de escolha.",
        "Viktor Frankl",
    ),
];

fn next_quote(index: usize) -> usize {
    (index + 1) % QUOTES.len()
}

#[function_component(InspirationalQuotes)]
pub fn inspirational_quotes() -> Html {
    let current = use_state(|| 0usize);
    let section_ref = use_node_ref();
    let visible = use_visible_once(section_ref.clone());

    {
        let index_now = *current;
        let current = current.clone();
        use_effect_with_deps(
            move |index: &usize| {
                let next = next_quote(*index);
                let timeout = Timeout::new(ROTATE_AFTER_MS, move || current.set(next));
                move || drop(timeout)
            },
            index_now,
        );
    }

    let (quote, author) = QUOTES[*current % QUOTES.len()];

    html! {
        <section
            id="inspirational"
            data-section="inspirational"
            class="inspirational-section"
            ref={section_ref}
        >
            <div class={classes!("inspirational-inner", visible.then_some("entered"))} key={*current}>
                <p class="inspirational-quote">{ format!("“{}”", quote) }</p>
                <p class="inspirational-author">{ format!("— {}", author) }</p>
            </div>

            <style>
                {r#"
                .inspirational-section {
                    padding: 4rem 1.5rem;
                    background: linear-gradient(135deg, #fdf2f8, #faf5ff);
                }

                .inspirational-inner {
                    max-width: 640px;
                    margin: 0 auto;
                    text-align: center;
                    opacity: 0;
                    transform: translateY(20px);
                    transition: opacity 0.8s ease-out, transform 0.8s ease-out;
                }

                .inspirational-inner.entered {
                    opacity: 1;
                    transform: translateY(0);
                }

                .inspirational-quote {
                    font-size: 1.4rem;
                    font-style: italic;
                    color: #374151;
                    line-height: 1.7;
                    margin-bottom: 1rem;
                }

                .inspirational-author {
                    font-size: 0.9rem;
                    color: #9ca3af;
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
        assert_eq!(next_quote(0), 1);
        assert_eq!(next_quote(QUOTES.len() - 1), 0);
    }
}
