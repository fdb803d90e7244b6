use web_sys::MouseEvent;
use yew::prelude::*;

use crate::hooks::use_visible_once;
use crate::text_gradient::process_text_with_gradient;

#[derive(Properties, PartialEq)]
struct FaqItemProps {
    question: String,
    children: Children,
}

#[function_component(FaqItem)]
fn faq_item(props: &FaqItemProps) -> Html {
    let is_open = use_state(|| false);

    let toggle = {
        let is_open = is_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            is_open.set(!*is_open);
        })
    };

    html! {
        <div class={classes!("faq-item", (*is_open).then_some("open"))}>
            <button class="faq-question" onclick={toggle}>
                <span>{ &props.question }</span>
                <span class="toggle-icon">{ if *is_open { "−" } else { "+" } }</span>
            </button>
            <div class="faq-answer">
                { for props.children.iter() }
            </div>
        </div>
    }
}

#[function_component(FaqSection)]
pub fn faq_section() -> Html {
    let section_ref = use_node_ref();
    let visible = use_visible_once(section_ref.clone());

    html! {
        <section id="faq" data-section="faq" class="faq-section" ref={section_ref}>
            <div class={classes!("faq-inner", visible.then_some("entered"))}>
                <h2>{ process_text_with_gradient("Perguntas (frequentes)", None) }</h2>

                <FaqItem question="Como funciona a primeira sessão?">
                    <p>
                        {"A primeira conversa é um espaço para nos conhecermos: você conta o que \
                          te trouxe até aqui e tiramos juntas as dúvidas sobre o processo \
                          terapêutico, frequência e valores."}
                    </p>
                </FaqItem>

                <FaqItem question="Os atendimentos são presenciais ou online?">
                    <p>
                        {"Atendo nas duas modalidades. As sessões online acontecem por \
                          videochamada, com a mesma duração e o mesmo sigilo do atendimento \
                          presencial."}
                    </p>
                </FaqItem>

                <FaqItem question="Qual a duração e a frequência das sessões?">
                    <p>
                        {"Cada sessão dura 50 minutos. Em geral começamos com encontros \
                          semanais, e o ritmo é reavaliado conforme o seu momento."}
                    </p>
                </FaqItem>

                <FaqItem question="Tudo o que eu falar fica em sigilo?">
                    <p>
                        {"Sim. O sigilo é garantido pelo Código de Ética Profissional do \
                          Psicólogo, e tudo o que acontece em sessão permanece entre nós."}
                    </p>
                </FaqItem>
            </div>

            <style>
                {r#"
                .faq-section {
                    padding: 3rem 1.5rem;
                }

                .faq-inner {
                    max-width: 720px;
                    margin: 0 auto;
                    opacity: 0;
                    transform: translateY(20px);
                    transition: opacity 0.8s ease-out, transform 0.8s ease-out;
                }

                .faq-inner.entered {
                    opacity: 1;
                    transform: translateY(0);
                }

                .faq-inner h2 {
                    font-size: 2rem;
                    color: #1f2937;
                    text-align: center;
                    margin-bottom: 2rem;
                }

                .faq-item {
                    background: rgba(255, 255, 255, 0.85);
                    border: 1px solid #f3e8ff;
                    border-radius: 16px;
                    margin-bottom: 1rem;
                    overflow: hidden;
                    transition: border-color 0.3s ease;
                }

                .faq-item:hover {
                    border-color: #e9d5ff;
                }

                .faq-question {
                    width: 100%;
                    padding: 1.25rem 1.5rem;
                    background: none;
                    border: none;
                    color: #1f2937;
                    font-size: 1.05rem;
                    text-align: left;
                    cursor: pointer;
                    display: flex;
                    justify-content: space-between;
                    align-items: center;
                }

                .toggle-icon {
                    color: #8b5cf6;
                    font-size: 1.4rem;
                    transition: transform 0.3s ease;
                }

                .faq-item.open .toggle-icon {
                    transform: rotate(180deg);
                }

                .faq-answer {
                    max-height: 0;
                    overflow: hidden;
                    transition: max-height 0.5s ease;
                    padding: 0 1.5rem;
                }

                .faq-item.open .faq-answer {
                    max-height: 600px;
                    padding: 0 1.5rem 1.25rem;
                }

                .faq-answer p {
                    color: #4b5563;
                    line-height: 1.7;
                }
                "#}
            </style>
        </section>
    }
}
