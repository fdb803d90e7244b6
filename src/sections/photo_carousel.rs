use gloo_timers::callback::Timeout;
use yew::prelude::*;

use crate::hooks::use_visible_once;

const ROTATE_AFTER_MS: u32 = 5_000;

const PHOTOS: &[(&str, &str)] = &[
    ("/assets/consultorio-recepcao.webp", "Recepção do consultório"),
    ("/assets/consultorio-sala.webp", "Sala de atendimento"),
    ("/assets/consultorio-detalhe.webp", "Cantinho de leitura"),
];

fn next_photo(index: usize) -> usize {
    (index + 1) % PHOTOS.len()
}

#[function_component(PhotoCarousel)]
pub fn photo_carousel() -> Html {
    let current = use_state(|| 0usize);
    let section_ref = use_node_ref();
    let visible = use_visible_once(section_ref.clone());

    {
        let index_now = *current;
        let current = current.clone();
        use_effect_with_deps(
            move |index: &usize| {
                let next = next_photo(*index);
                let timeout = Timeout::new(ROTATE_AFTER_MS, move || current.set(next));
                move || drop(timeout)
            },
            index_now,
        );
    }

    let (src, caption) = PHOTOS[*current % PHOTOS.len()];

    html! {
        <section
            id="photo-carousel"
            data-section="photo-carousel"
            class="photo-carousel-section"
            ref={section_ref}
        >
            <div class={classes!("carousel-inner", visible.then_some("entered"))}>
                <figure class="carousel-frame" key={*current}>
                    <img src={src} alt={caption} loading="lazy" />
                    <figcaption>{ caption }</figcaption>
                </figure>
                <div class="carousel-dots">
                    { for (0..PHOTOS.len()).map(|index| {
                        let is_active = index == *current;
                        let current = current.clone();
                        let onclick = Callback::from(move |_| current.set(index));
                        html! {
                            <button
                                class={classes!("dot", is_active.then_some("active"))}
                                {onclick}
                                aria-label={format!("Foto {}", index + 1)}
                            />
                        }
                    }) }
                </div>
            </div>

            <style>
                {r#"
                .photo-carousel-section {
                    padding: 3rem 1.5rem;
                }

                .carousel-inner {
                    max-width: 720px;
                    margin: 0 auto;
                    text-align: center;
                    opacity: 0;
                    transform: translateY(20px);
                    transition: opacity 0.8s ease-out, transform 0.8s ease-out;
                }

                .carousel-inner.entered {
                    opacity: 1;
                    transform: translateY(0);
                }

                .carousel-frame {
                    margin: 0 0 1rem;
                    animation: photo-fade 0.6s ease-out;
                }

                @keyframes photo-fade {
                    from { opacity: 0; }
                    to { opacity: 1; }
                }

                .carousel-frame img {
                    width: 100%;
                    border-radius: 24px;
                    box-shadow: 0 16px 40px rgba(0, 0, 0, 0.1);
                }

                .carousel-frame figcaption {
                    margin-top: 0.75rem;
                    font-size: 0.9rem;
                    color: #6b7280;
                }

                .carousel-dots {
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
                    background: #8b5cf6;
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
    fn rotation_wraps_back_to_the_first_photo() {
        assert_eq!(next_photo(0), 1);
        assert_eq!(next_photo(PHOTOS.len() - 1), 0);
    }
}
