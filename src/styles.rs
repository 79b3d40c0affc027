//! Inline style records and the global stylesheet for the glass header.

use crate::tokens::{Easing, Radius, SemanticColor, Spacing, Speed, transition};
use lazy_static::lazy_static;

pub const HEADER_CLASS: &str = "glassmorphism-header";
pub const DISPLACEMENT_FILTER_ID: &str = "liquidDisplacementFilter";
pub const NAV_CLASS: &str = "flex items-center gap-6";

const NOISE_TEXTURE: &str = "url('data:image/png;base64,iVBORw0KGgoAAAANSUhEUgAAABQAAAAUCAAAAACo4kLRAAABr0lEQVR4nAGkAVv+AO2aSTQXRsMS4XhRiPMIcmkKAsVLAoGu01HYS/Tf9wB1jc4vHsAz1csxANjpYua16gclGsdpRZOWyh8yXg7lApjaVXtmJNtQAVI0fr7qUsZTDRFAAMDPA2Z1Moa6Ao3D+t0k4LtG1+u3AQlKLcBoq+Q3PXNGIvnBllr/bpQRAhVBeMrc4WpQF8izbvMb/MZJqh00APhvspQ07KM+iAKlJHoaHPY2tsO5BC3ypgzu+XY8WutF+uIqNuFk2cBKBC/lmmVwpwCs3eec2+X3GnkAIgMuBK8YxKfkYGO7+IcoWTnUVPwI2wvZAia3LgSttLGnCed2KjK8++WjD8CUAeprVYFOvl3+QuPbtiwXI7f/OXmmAeAuZ3tJnq2bAccQ9Exc9p5VBCj8APnYgQG51Pd/9xjoNmwXL3tXFjKEAjAS+H5SBYW8ZRnE97Ee/Zf3t7fTAkRpPwiIOlDtd3whdb70+uzK/hc8ABTi/hKjaFOAApshQEsinjylvClyAKsEHcy++1eKC2NMIrFBLYskCRL1ApjiVBvzI4Uq0PdKA8+1fbxjAxI3R9nFzDio2/gAAAAASUVORK5CYII=')";

const TRANSITIONED: [&str; 4] = ["backdrop-filter", "transform", "box-shadow", "background-color"];

pub const CONTENT_STYLE: &str = "display: flex; align-items: center; justify-content: space-between; \
     max-width: 1200px; margin: 0 auto; position: relative; z-index: 10;";

/// Keeps the filter host out of layout and out of sight.
pub const FILTER_HOST_STYLE: &str =
    "position: absolute; width: 0; height: 0; visibility: hidden;";

lazy_static! {
    /// Built on first use and shared by every header rendered afterwards.
    pub static ref GLASS_STYLESHEET: String = build_stylesheet();
}

fn declarations(pairs: &[(&str, String)]) -> String {
    pairs
        .iter()
        .map(|(property, value)| format!("{property}: {value};"))
        .collect::<Vec<_>>()
        .join(" ")
}

pub fn container_style() -> String {
    declarations(&[
        ("position", "fixed".into()),
        ("top", "0".into()),
        ("left", "0".into()),
        ("right", "0".into()),
        ("z-index", "50".into()),
        ("width", "calc(100% - 2rem)".into()),
        (
            "padding",
            format!("{} {}", Spacing::S4.value(), Spacing::S6.value()),
        ),
        (
            "backdrop-filter",
            format!("brightness(1.05) blur(16px) saturate(1.8) url(#{DISPLACEMENT_FILTER_ID})"),
        ),
        (
            "-webkit-backdrop-filter",
            "brightness(1.05) blur(16px) saturate(1.8)".into(),
        ),
        ("background-color", "rgba(255, 255, 255, 0.25)".into()),
        ("border", "1px solid rgba(255, 255, 255, 0.4)".into()),
        ("border-radius", Radius::Lg.value().into()),
        ("margin", Spacing::S4.value().into()),
        (
            "box-shadow",
            "inset 2px 2px 0px -2px rgba(255, 255, 255, 0.8), \
             inset 0 0 12px 2px rgba(255, 255, 255, 0.4), \
             0 12px 40px rgba(0, 0, 0, 0.08), \
             0 4px 16px rgba(0, 0, 0, 0.04)"
                .into(),
        ),
        (
            "transition",
            transition(&TRANSITIONED, Speed::Normal, Easing::Out),
        ),
    ])
}

pub fn title_style() -> String {
    declarations(&[
        ("font-size", "1.75rem".into()),
        ("font-weight", "700".into()),
        ("color", SemanticColor::TextPrimary.value().into()),
        ("text-shadow", "0 2px 4px rgba(0, 0, 0, 0.1)".into()),
        ("letter-spacing", "0.05em".into()),
    ])
}

fn build_stylesheet() -> String {
    let radius = Radius::Lg.value();
    let compact_margin = Spacing::S2.value();
    let compact_padding = format!("{} {}", Spacing::S3.value(), Spacing::S4.value());

    format!(
        r#"@layer components {{
  .{HEADER_CLASS}::before {{
    content: '';
    position: absolute;
    inset: 0;
    z-index: 0;
    border-radius: {radius};
    background-image:
      radial-gradient(circle at var(--spec-x,50%) var(--spec-y,0%), rgba(255,255,255,0.2), rgba(255,255,255,0) 60%),
      {NOISE_TEXTURE};
    background-size: cover;
    mix-blend-mode: overlay;
    backdrop-filter: blur(1px) saturate(1.1);
    pointer-events: none;
  }}

  .{HEADER_CLASS}::after {{
    content: '';
    position: absolute;
    inset: 1px;
    z-index: 1;
    border-radius: calc({radius} - 1px);
    background: linear-gradient(45deg, rgba(255, 255, 255, 0.1) 0%, transparent 50%, rgba(255, 255, 255, 0.08) 100%);
    pointer-events: none;
  }}

  .{HEADER_CLASS}:hover {{
    transform: translateY(-0.5px);
    background-color: rgba(255, 255, 255, 0.3);
    backdrop-filter: brightness(1.08) blur(20px) saturate(1.8) url(#{DISPLACEMENT_FILTER_ID});
    box-shadow:
      inset 2px 2px 0px -2px rgba(255, 255, 255, 0.9),
      inset 0 0 16px 3px rgba(255, 255, 255, 0.5),
      0 16px 48px rgba(0, 0, 0, 0.1),
      0 6px 20px rgba(0, 0, 0, 0.06);
  }}

  [data-theme="dark"] .{HEADER_CLASS} {{
    background-color: rgba(0, 0, 0, 0.35) !important;
    border-color: rgba(255, 255, 255, 0.2) !important;
  }}

  [data-theme="dark"] .{HEADER_CLASS}::before {{
    background-image:
      radial-gradient(circle at var(--spec-x,50%) var(--spec-y,0%), rgba(255,255,255,0.1), rgba(255,255,255,0) 60%),
      {NOISE_TEXTURE} !important;
  }}

  [data-theme="dark"] .{HEADER_CLASS}::after {{
    background: linear-gradient(45deg, rgba(255, 255, 255, 0.06) 0%, transparent 50%, rgba(255, 255, 255, 0.04) 100%) !important;
  }}

  [data-theme="dark"] .{HEADER_CLASS}:hover {{
    background-color: rgba(0, 0, 0, 0.4) !important;
    box-shadow:
      inset 2px 2px 0px -2px rgba(255, 255, 255, 0.4),
      inset 0 0 16px 3px rgba(255, 255, 255, 0.25),
      0 16px 48px rgba(0, 0, 0, 0.4),
      0 6px 20px rgba(0, 0, 0, 0.2) !important;
    backdrop-filter: brightness(1.08) blur(20px) saturate(1.8) url(#{DISPLACEMENT_FILTER_ID});
  }}

  @media (max-width: 768px) {{
    .{HEADER_CLASS} {{
      margin: {compact_margin} !important;
      width: calc(100% - 1rem) !important;
      padding: {compact_padding} !important;
    }}
  }}
}}
"#
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn container_is_fixed_above_content() {
        let style = container_style();
        assert!(style.starts_with("position: fixed;"));
        assert!(style.contains("z-index: 50;"));
        assert!(style.contains("padding: 1rem 1.5rem;"));
        assert!(style.contains("url(#liquidDisplacementFilter)"));
    }

    #[test]
    fn container_transitions_glass_properties() {
        let style = container_style();
        for property in TRANSITIONED {
            assert!(
                style.contains(&format!("{property} 300ms")),
                "missing transition for {property}"
            );
        }
    }

    #[test]
    fn title_uses_primary_text_color() {
        assert!(title_style().contains("color: var(--color-text-primary, #1c1917);"));
    }

    #[test]
    fn stylesheet_reads_pointer_properties_with_fallbacks() {
        assert_eq!(
            GLASS_STYLESHEET
                .matches("var(--spec-x,50%) var(--spec-y,0%)")
                .count(),
            2
        );
    }

    #[test]
    fn stylesheet_covers_variants() {
        let sheet = GLASS_STYLESHEET.as_str();
        assert!(sheet.starts_with("@layer components {"));
        assert!(sheet.contains(".glassmorphism-header:hover {"));
        assert!(sheet.contains(r#"[data-theme="dark"] .glassmorphism-header:hover {"#));
        assert!(sheet.contains("@media (max-width: 768px)"));
        assert!(sheet.contains("margin: 0.5rem !important;"));
        assert!(sheet.contains("padding: 0.75rem 1rem !important;"));
    }
}
