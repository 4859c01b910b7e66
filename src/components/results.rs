//! Results section listing the returned tags.

use leptos::*;

use crate::config::MESSAGES;
use crate::state::UiState;

/// Format a confidence between 0.0 and 1.0 as a percentage with one decimal.
pub fn format_confidence(confidence: f64) -> String {
    format!("{:.1}%", confidence * 100.0)
}

#[component]
pub fn ResultsSection(state: ReadSignal<UiState>) -> impl IntoView {
    view! {
        <Show
            when=move || !state.get().tags.is_empty()
            fallback=|| view! {}
        >
            <div class="results-section">
                <h3>{MESSAGES.results_heading}</h3>
                <ul class="tag-list">
                    <For
                        each=move || state.get().tags.into_iter().enumerate()
                        key=|(idx, _)| *idx
                        children=move |(_, tag)| {
                            view! {
                                <li class="tag-item">
                                    <span class="tag-label">{tag.label}</span>
                                    <span class="tag-confidence">
                                        {format_confidence(tag.confidence)}
                                    </span>
                                </li>
                            }
                        }
                    />
                </ul>
            </div>
        </Show>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_confidence_formats_with_one_decimal() {
        assert_eq!(format_confidence(0.87), "87.0%");
        assert_eq!(format_confidence(0.123), "12.3%");
        assert_eq!(format_confidence(0.54), "54.0%");
    }

    #[test]
    fn test_confidence_bounds() {
        assert_eq!(format_confidence(0.0), "0.0%");
        assert_eq!(format_confidence(1.0), "100.0%");
    }
}
