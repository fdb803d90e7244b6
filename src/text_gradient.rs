use yew::prelude::*;

/// Gradients the admin panel offers for highlighted words. Section titles
/// mark the highlighted span with parentheses: "Minhas (especialidades)".
const BADGE_GRADIENTS: &[(&str, &str)] = &[
    ("pink-purple", "gradient-pink-purple"),
    ("blue-purple", "gradient-blue-purple"),
    ("green-blue", "gradient-green-blue"),
    ("orange-red", "gradient-orange-red"),
    ("teal-cyan", "gradient-teal-cyan"),
    ("indigo-purple", "gradient-indigo-purple"),
    ("rose-pink", "gradient-rose-pink"),
    ("emerald-teal", "gradient-emerald-teal"),
    ("violet-purple", "gradient-violet-purple"),
    ("amber-orange", "gradient-amber-orange"),
    ("sky-blue", "gradient-sky-blue"),
    ("lime-green", "gradient-lime-green"),
    ("fuchsia-pink", "gradient-fuchsia-pink"),
    ("cyan-blue", "gradient-cyan-blue"),
    ("yellow-orange", "gradient-yellow-orange"),
];

const DEFAULT_GRADIENT: &str = "gradient-pink-purple";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    Plain(String),
    Badge(String),
}

/// Splits text into plain runs and `(...)` badge spans. Groups are
/// non-nested: the first `)` closes, an empty `()` or an unclosed `(`
/// stays plain text.
pub fn split_segments(text: &str) -> Vec<Segment> {
    let mut segments = Vec::new();
    let mut rest = text;

    while let Some(open) = rest.find('(') {
        match rest[open + 1..].find(')') {
            // Badges need at least one character between the parens.
            Some(close) if close > 0 => {
                if open > 0 {
                    segments.push(Segment::Plain(rest[..open].to_string()));
                }
                let inner = &rest[open + 1..open + 1 + close];
                segments.push(Segment::Badge(inner.to_string()));
                rest = &rest[open + 2 + close..];
            }
            Some(close) => {
                // "()" - keep it as literal text and continue after it.
                segments.push(Segment::Plain(rest[..open + 2 + close].to_string()));
                rest = &rest[open + 2 + close..];
            }
            None => break,
        }
    }
    if !rest.is_empty() {
        segments.push(Segment::Plain(rest.to_string()));
    }
    segments
}

/// CSS class for a named gradient; unknown or absent names use the default.
pub fn gradient_class(name: Option<&str>) -> &'static str {
    name.and_then(|n| {
        BADGE_GRADIENTS
            .iter()
            .find(|(key, _)| *key == n)
            .map(|(_, class)| *class)
    })
    .unwrap_or(DEFAULT_GRADIENT)
}

/// Renders text with `(...)` spans as gradient badges, everything else plain.
pub fn process_text_with_gradient(text: &str, gradient: Option<&str>) -> Html {
    let class = gradient_class(gradient);
    html! {
        <>
            { for split_segments(text).into_iter().map(|segment| match segment {
                Segment::Plain(part) => html! { { part } },
                Segment::Badge(inner) => html! {
                    <span class={classes!("text-gradient-badge", class)}>{ inner }</span>
                },
            }) }
        </>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn flatten(segments: &[Segment]) -> String {
        segments
            .iter()
            .map(|s| match s {
                Segment::Plain(t) | Segment::Badge(t) => t.as_str(),
            })
            .collect()
    }

    #[test]
    fn plain_text_is_one_segment() {
        assert_eq!(
            split_segments("Agende sua consulta"),
            vec![Segment::Plain("Agende sua consulta".into())]
        );
    }

    #[test]
    fn parenthesised_span_becomes_badge() {
        assert_eq!(
            split_segments("Minhas (especialidades)"),
            vec![
                Segment::Plain("Minhas ".into()),
                Segment::Badge("especialidades".into()),
            ]
        );
    }

    #[test]
    fn multiple_badges_keep_order() {
        let segments = split_segments("(Cuidar) de você é (prioridade)");
        assert_eq!(
            segments,
            vec![
                Segment::Badge("Cuidar".into()),
                Segment::Plain(" de você é ".into()),
                Segment::Badge("prioridade".into()),
            ]
        );
    }

    #[test]
    fn concatenation_drops_only_the_parens() {
        let text = "Um (espaço) de (escuta) e acolhimento";
        assert_eq!(flatten(&split_segments(text)), text.replace(['(', ')'], ""));
    }

    #[test]
    fn empty_text_yields_no_segments() {
        assert!(split_segments("").is_empty());
    }

    #[test]
    fn empty_group_stays_literal() {
        assert_eq!(flatten(&split_segments("antes () depois")), "antes () depois");
    }

    #[test]
    fn unclosed_paren_stays_literal() {
        assert_eq!(
            split_segments("um (aberto"),
            vec![Segment::Plain("um (aberto".into())]
        );
    }

    #[test]
    fn nested_group_closes_at_first_paren() {
        // Mirrors a split on \(([^)]+)\): "(a (b)" highlights "a (b".
        assert_eq!(
            split_segments("(a (b) c)"),
            vec![Segment::Badge("a (b".into()), Segment::Plain(" c)".into())]
        );
    }

    #[test]
    fn unknown_gradient_falls_back_to_default() {
        assert_eq!(gradient_class(Some("hot-magenta")), "gradient-pink-purple");
        assert_eq!(gradient_class(None), "gradient-pink-purple");
        assert_eq!(gradient_class(Some("teal-cyan")), "gradient-teal-cyan");
    }
}
