//! Theme context for icon defaults.

use glyphset_core::IconTheme;
use yew::prelude::*;

/// Props for [`IconThemeProvider`].
#[derive(Properties, PartialEq)]
pub struct IconThemeProviderProps {
    /// Defaults applied to every icon below this provider.
    pub theme: IconTheme,
    /// Subtree receiving the theme.
    #[prop_or_default]
    pub children: Children,
}

/// Supplies an [`IconTheme`] to all icons rendered beneath it.
#[function_component(IconThemeProvider)]
pub fn icon_theme_provider(props: &IconThemeProviderProps) -> Html {
    html! {
        <ContextProvider<IconTheme> context={props.theme.clone()}>
            { for props.children.iter() }
        </ContextProvider<IconTheme>>
    }
}

/// The nearest provided theme, or the built-in defaults.
#[hook]
pub fn use_icon_theme() -> IconTheme {
    use_context::<IconTheme>().unwrap_or_default()
}
