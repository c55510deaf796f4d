use leptos::prelude::*;
use koboland_widgets::upload::EMPTY_SELECTION;

/// One row of the upload preview
#[derive(Debug, Clone, PartialEq)]
pub enum PreviewEntry {
    /// Accepted file, shown through an object URL
    Image { src: String, caption: String },
    Invalid { caption: String },
}

#[derive(Debug, Clone, Default, PartialEq)]
pub enum PreviewState {
    /// Nothing rendered yet, or cleared after a submit
    #[default]
    Idle,
    Empty,
    Files(Vec<PreviewEntry>),
}

#[component]
pub fn FilePreview(state: ReadSignal<PreviewState>) -> impl IntoView {
    move || match state.get() {
        PreviewState::Idle => view! { <span></span> }.into_any(),
        PreviewState::Empty => view! { <p>{EMPTY_SELECTION}</p> }.into_any(),
        PreviewState::Files(entries) => view! {
            <ol>
                {entries.into_iter().map(|entry| match entry {
                    PreviewEntry::Image { src, caption } => view! {
                        <li>
                            <img class="img-fluid" src=src />
                            <p>{caption}</p>
                        </li>
                    }.into_any(),
                    PreviewEntry::Invalid { caption } => view! {
                        <li>
                            <p>{caption}</p>
                        </li>
                    }.into_any(),
                }).collect_view()}
            </ol>
        }.into_any(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preview_starts_idle() {
        assert_eq!(PreviewState::default(), PreviewState::Idle);
        assert_ne!(PreviewState::Empty, PreviewState::Files(Vec::new()));
    }
}
