use dioxus::prelude::*;
use folio_core::{theme as theme_prefs, Gallery, ModalState, Theme};

use crate::pages::Home;
use crate::theme::GLOBAL_STYLES;

/// Root application component.
///
/// Provides global styles, the shared gallery/modal/theme state, and kicks
/// off the one-shot data load. The page stays fully interactive while the
/// load is outstanding; a failure flips the gallery into its fallback state
/// and nothing else on the page is affected.
#[component]
pub fn App() -> Element {
    // Shared state: one store for the gallery, one state machine for the
    // modal, one theme. Each is mutated only by its owning component tree.
    let mut gallery: Signal<Gallery> = use_signal(Gallery::new);
    let modal: Signal<ModalState> = use_signal(ModalState::default);
    let theme: Signal<Theme> = use_signal(initial_theme);

    use_context_provider(|| gallery);
    use_context_provider(|| modal);
    use_context_provider(|| theme);

    // Load the project data on mount
    use_effect(move || {
        spawn(async move {
            let path = crate::get_data_file();
            match folio_core::load_portfolio(&path).await {
                Ok(data) => {
                    gallery.write().populate(data);
                }
                Err(e) => {
                    tracing::error!(error = %e, path = %path.display(), "failed to load projects");
                    gallery.write().fail();
                }
            }
        });
    });

    let theme_attr = theme().as_str();

    rsx! {
        style { {GLOBAL_STYLES} }
        div { class: "app-root", "data-theme": "{theme_attr}",
            Home {}
        }
    }
}

/// Resolve the theme to start with: command-line override, then saved
/// preference, then time of day (no system signal in the webview shell).
fn initial_theme() -> Theme {
    if let Some(forced) = crate::get_theme_override() {
        tracing::debug!(theme = %forced, "theme forced from command line");
        return forced;
    }
    let saved = theme_prefs::load_preference(&crate::get_theme_file());
    theme_prefs::resolve_initial(saved, None, theme_prefs::local_hour())
}
