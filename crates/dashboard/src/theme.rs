//! Layout theme configuration and derived styles.
//!
//! The page's grid styles are a pure function of this configuration, so the
//! layout can be restyled without touching component logic.

/// Spacing and breakpoint configuration for the page layout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    /// Base spacing unit in pixels.
    pub spacing_unit: u16,
    /// Viewport width in pixels below which the two columns collapse.
    pub small_breakpoint: u16,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            spacing_unit: 8,
            small_breakpoint: 960,
        }
    }
}

/// Style declarations for the page grid.
///
/// Summary column and editor column at 1fr/2fr above the small breakpoint,
/// a single column below it.
pub fn page_grid_css(theme: &Theme) -> String {
    format!(
        "\
.variant-page__grid {{
  display: grid;
  grid-gap: {gap}px;
  grid-template-columns: 1fr 2fr;
}}
.variant-page__grid input {{
  width: 100%;
}}
@media (max-width: {breakpoint}px) {{
  .variant-page__grid {{
    grid-gap: {small_gap}px;
    grid-template-columns: 1fr;
  }}
}}
",
        gap = theme.spacing_unit * 2,
        small_gap = theme.spacing_unit,
        breakpoint = theme.small_breakpoint,
    )
}
