use dioxus::prelude::*;

/// Full-width banner with a background image and optional call-to-action children.
#[component]
pub fn Hero(
    title: String,
    #[props(default)] subtitle: Option<String>,
    image: String,
    #[props(default = false)] compact: bool,
    children: Element,
) -> Element {
    let class = if compact { "hero hero--compact" } else { "hero" };
    rsx! {
        section {
            class: "{class}",
            style: "background-image: url('{image}')",
            div { class: "hero__overlay",
                h1 { class: "hero__title", "{title}" }
                if let Some(subtitle) = subtitle {
                    p { class: "hero__subtitle", "{subtitle}" }
                }
                div { class: "hero__actions", {children} }
            }
        }
    }
}
