use crate::components::LiquidDisplacementFilter;
use crate::styles::{
    CONTENT_STYLE, GLASS_STYLESHEET, HEADER_CLASS, NAV_CLASS, container_style, title_style,
};
use leptos::html;
use leptos::prelude::*;

pub const DEFAULT_TITLE: &str = "LUSSO";

/// Fixed glass banner with a highlight that follows the pointer.
///
/// Children, when given, are placed in a `nav` at the end of the row.
#[component]
pub fn Header(
    #[prop(optional, into)] title: Option<String>,
    #[prop(optional, into)] class: Option<String>,
    #[prop(optional)] children: Option<Children>,
) -> impl IntoView {
    let header_ref = NodeRef::<html::Header>::new();
    use_pointer_highlight(header_ref);

    let title = resolve_title(title);
    let class = header_class(class.as_deref());
    let navigation = children.map(|children| view! { <nav class=NAV_CLASS>{children()}</nav> });

    view! {
        <LiquidDisplacementFilter />
        <header node_ref=header_ref class=class style=container_style()>
            <div style=CONTENT_STYLE>
                <h1 style=title_style()>{title}</h1>
                {navigation}
            </div>
        </header>
        <style id="glassmorphism-header-styles" inner_html=GLASS_STYLESHEET.as_str()></style>
    }
}

fn resolve_title(title: Option<String>) -> String {
    title.unwrap_or_else(|| DEFAULT_TITLE.to_string())
}

fn header_class(extra: Option<&str>) -> String {
    match extra.map(str::trim).filter(|extra| !extra.is_empty()) {
        Some(extra) => format!("{HEADER_CLASS} {extra}"),
        None => HEADER_CLASS.to_string(),
    }
}

fn use_pointer_highlight(header_ref: NodeRef<html::Header>) {
    #[cfg(all(feature = "hydrate", target_arch = "wasm32"))]
    Effect::new(move |_| {
        use crate::pointer::track_pointer;

        let Some(element) = header_ref.get() else {
            tracing::debug!("header not mounted, skipping pointer highlight");
            return;
        };

        match track_pointer(&element) {
            Ok(subscription) => {
                let handle = PointerHighlightHandle(subscription);
                on_cleanup(move || drop(handle));
            }
            Err(err) => tracing::warn!(error = %err, "pointer highlight unavailable"),
        }
    });

    #[cfg(not(all(feature = "hydrate", target_arch = "wasm32")))]
    let _ = header_ref;
}

#[cfg(all(feature = "hydrate", target_arch = "wasm32"))]
struct PointerHighlightHandle(#[allow(dead_code)] crate::pointer::Subscription);

#[cfg(all(feature = "hydrate", target_arch = "wasm32"))]
unsafe impl Send for PointerHighlightHandle {}
#[cfg(all(feature = "hydrate", target_arch = "wasm32"))]
unsafe impl Sync for PointerHighlightHandle {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_title_falls_back_to_brand() {
        assert_eq!(resolve_title(None), "LUSSO");
    }

    #[test]
    fn supplied_title_replaces_brand() {
        assert_eq!(resolve_title(Some("Atelier".to_string())), "Atelier");
        assert_eq!(resolve_title(Some(String::new())), "");
    }

    #[test]
    fn extra_class_is_appended() {
        assert_eq!(header_class(None), "glassmorphism-header");
        assert_eq!(header_class(Some("  ")), "glassmorphism-header");
        assert_eq!(
            header_class(Some("shadow-none")),
            "glassmorphism-header shadow-none"
        );
    }

    #[cfg(feature = "ssr")]
    mod render {
        use super::super::Header;
        use leptos::prelude::*;

        #[test]
        fn renders_default_title_without_navigation() {
            let html = Owner::new().with(|| view! { <Header /> }.to_html());

            assert!(html.contains("LUSSO"));
            assert!(!html.contains("<nav"));
            assert!(html.contains(r#"id="liquidDisplacementFilter""#));
            assert!(html.contains("@layer components"));
        }

        #[test]
        fn renders_children_inside_navigation() {
            let html = Owner::new().with(|| {
                view! {
                    <Header title="Atelier" class="compact">
                        <a href="/collections">"Collections"</a>
                    </Header>
                }
                .to_html()
            });

            assert!(html.contains("Atelier"));
            assert!(!html.contains("LUSSO"));
            assert!(html.contains("<nav"));
            assert!(html.contains(r#"href="/collections""#));
            assert!(html.contains("glassmorphism-header compact"));
        }
    }
}
