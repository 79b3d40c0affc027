use crate::styles::FILTER_HOST_STYLE;
use leptos::prelude::*;

/// Noise-driven displacement referenced by the header's `backdrop-filter`.
pub const LIQUID_FILTER_DEFS: &str = concat!(
    r#"<defs><filter id="liquidDisplacementFilter" x="-50%" y="-50%" width="200%" height="200%">"#,
    r#"<feTurbulence type="fractalNoise" baseFrequency="0.008 0.003" numOctaves="3" result="noise"/>"#,
    r#"<feGaussianBlur in="SourceGraphic" stdDeviation="0.5" result="blur"/>"#,
    r#"<feDisplacementMap in="blur" in2="noise" scale="8" xChannelSelector="R" yChannelSelector="G" result="displacement"/>"#,
    r#"<feColorMatrix in="displacement" type="saturate" values="1.1" result="saturated"/>"#,
    r#"<feComponentTransfer in="saturated" result="final"><feFuncA type="discrete" tableValues="0.95"/></feComponentTransfer>"#,
    r#"</filter></defs>"#,
);

#[component]
pub fn LiquidDisplacementFilter() -> impl IntoView {
    view! {
        <svg style=FILTER_HOST_STYLE aria-hidden="true" inner_html=LIQUID_FILTER_DEFS></svg>
    }
}

#[cfg(test)]
mod tests {
    use super::LIQUID_FILTER_DEFS;
    use crate::styles::DISPLACEMENT_FILTER_ID;

    #[test]
    fn filter_id_matches_backdrop_reference() {
        assert!(LIQUID_FILTER_DEFS.contains(&format!(r#"id="{DISPLACEMENT_FILTER_ID}""#)));
    }

    #[test]
    fn displacement_reads_noise_channels() {
        assert!(LIQUID_FILTER_DEFS.contains(
            r#"in2="noise" scale="8" xChannelSelector="R" yChannelSelector="G""#
        ));
    }
}
