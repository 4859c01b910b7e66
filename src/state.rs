//! Widget state machine.
//!
//! One immutable [`UiState`] struct, updated exclusively through the pure
//! [`transition`] function: a [`Msg`] goes in, the next state and a list of
//! [`Command`]s come out. Browser side effects (object URL lifecycle, the
//! picker reset, the request task, toast expiry) are carried by commands and
//! interpreted in the app shell, which keeps every rule here testable
//! without a display surface.

use crate::error::{AnalyzeError, ValidationError};
use crate::types::{InfoNotice, Notice, NoticeKind, PreviewRef, SelectedFile, TagEntry};

/// Complete widget state.
///
/// Invariants: `busy` is true only strictly between request start and its
/// completion or failure; `tags` is non-empty only after a successful
/// response arrived since the last file change.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct UiState {
    /// Currently selected file, if any.
    pub selected: Option<SelectedFile>,
    /// Preview handle for the selected file.
    pub preview: Option<PreviewRef>,
    /// Result of the last successful analysis.
    pub tags: Vec<TagEntry>,
    /// Whether an analysis request is in flight.
    pub busy: bool,
    /// Pending notices, oldest first.
    pub notices: Vec<Notice>,
    next_notice_id: u64,
}

/// Everything that can happen to the widget.
#[derive(Clone, Debug)]
pub enum Msg {
    /// A selection passed validation; the preview was already created by
    /// the upload component (absent only if the browser refused the
    /// object URL).
    FileAccepted {
        file: SelectedFile,
        preview: Option<PreviewRef>,
    },
    /// A selection failed validation.
    SelectionRejected(ValidationError),
    /// The analyze control was activated.
    AnalyzePressed,
    /// The request task finished, one way or the other.
    AnalysisFinished(Result<Vec<TagEntry>, AnalyzeError>),
    /// A notice was dismissed (close button or TTL expiry).
    NoticeDismissed(u64),
}

/// Side effects requested by a transition.
#[derive(Clone, Debug, PartialEq)]
pub enum Command {
    /// Release a superseded or unused preview object URL.
    RevokePreview(PreviewRef),
    /// Reset the file input control.
    ClearPicker,
    /// Start the analysis request for the session file.
    SendRequest,
    /// Dismiss the notice after the configured TTL.
    ScheduleNoticeDismiss { id: u64 },
}

/// Advance the state machine by one message.
pub fn transition(state: UiState, msg: Msg) -> (UiState, Vec<Command>) {
    match msg {
        Msg::FileAccepted { file, preview } => {
            if state.busy {
                // The picker is disabled while a request runs; a stray
                // acceptance must not leak its freshly created URL.
                let commands: Vec<Command> =
                    preview.map(Command::RevokePreview).into_iter().collect();
                return (state, commands);
            }

            let mut next = state;
            let superseded = next.preview.take();
            next.selected = Some(file);
            next.preview = preview;
            next.tags.clear();

            let commands: Vec<Command> =
                superseded.map(Command::RevokePreview).into_iter().collect();
            (next, commands)
        }

        Msg::SelectionRejected(reason) => {
            let (next, id) = push_notice(state, NoticeKind::Validation(reason));
            (
                next,
                vec![Command::ClearPicker, Command::ScheduleNoticeDismiss { id }],
            )
        }

        Msg::AnalyzePressed => {
            if state.busy {
                return (state, vec![]);
            }

            if state.selected.is_none() {
                let (next, id) =
                    push_notice(state, NoticeKind::Info(InfoNotice::SelectImageFirst));
                return (next, vec![Command::ScheduleNoticeDismiss { id }]);
            }

            let mut next = state;
            next.busy = true;
            next.tags.clear();
            (next, vec![Command::SendRequest])
        }

        Msg::AnalysisFinished(result) => {
            if !state.busy {
                return (state, vec![]);
            }

            let mut next = state;
            next.busy = false;

            match result {
                Ok(tags) => {
                    next.tags = tags;
                    (next, vec![])
                }
                Err(_) => {
                    next.tags.clear();
                    let (next, id) = push_notice(next, NoticeKind::Failure);
                    (next, vec![Command::ScheduleNoticeDismiss { id }])
                }
            }
        }

        Msg::NoticeDismissed(id) => {
            let mut next = state;
            next.notices.retain(|notice| notice.id != id);
            (next, vec![])
        }
    }
}

fn push_notice(mut state: UiState, kind: NoticeKind) -> (UiState, u64) {
    let id = state.next_notice_id;
    state.next_notice_id += 1;
    state.notices.push(Notice { id, kind });
    (state, id)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn selected_file(name: &str) -> SelectedFile {
        SelectedFile {
            name: name.to_string(),
            size: 256 * 1024,
            media_type: "image/png".to_string(),
        }
    }

    fn tag(label: &str, confidence: f64) -> TagEntry {
        TagEntry {
            label: label.to_string(),
            confidence,
        }
    }

    fn ready_state(name: &str) -> UiState {
        let (state, _) = transition(
            UiState::default(),
            Msg::FileAccepted {
                file: selected_file(name),
                preview: Some(PreviewRef::new(format!("blob:{}", name))),
            },
        );
        state
    }

    #[test]
    fn test_accepting_a_file_replaces_selection_and_clears_tags() {
        let mut previous = ready_state("perro.jpg");
        previous.tags = vec![tag("perro", 0.91)];

        let (state, commands) = transition(
            previous,
            Msg::FileAccepted {
                file: selected_file("gato.png"),
                preview: Some(PreviewRef::new("blob:gato.png".to_string())),
            },
        );

        assert_eq!(state.selected, Some(selected_file("gato.png")));
        assert_eq!(state.preview, Some(PreviewRef::new("blob:gato.png".to_string())));
        assert!(state.tags.is_empty());
        assert!(!state.busy);
        assert_eq!(
            commands,
            vec![Command::RevokePreview(PreviewRef::new(
                "blob:perro.jpg".to_string()
            ))]
        );
    }

    #[test]
    fn test_accepting_while_busy_is_dropped_and_revokes_the_new_preview() {
        let (busy, _) = transition(ready_state("gato.png"), Msg::AnalyzePressed);

        let (state, commands) = transition(
            busy.clone(),
            Msg::FileAccepted {
                file: selected_file("tarde.bmp"),
                preview: Some(PreviewRef::new("blob:tarde.bmp".to_string())),
            },
        );

        assert_eq!(state, busy);
        assert_eq!(
            commands,
            vec![Command::RevokePreview(PreviewRef::new(
                "blob:tarde.bmp".to_string()
            ))]
        );
    }

    #[test]
    fn test_rejection_keeps_prior_selection_and_clears_the_picker() {
        let previous = ready_state("gato.png");

        let (state, commands) = transition(
            previous.clone(),
            Msg::SelectionRejected(ValidationError::NotAnImage("application/pdf".to_string())),
        );

        assert_eq!(state.selected, previous.selected);
        assert_eq!(state.preview, previous.preview);
        assert_eq!(state.notices.len(), 1);
        assert!(matches!(
            state.notices[0].kind,
            NoticeKind::Validation(ValidationError::NotAnImage(_))
        ));
        assert_eq!(
            commands,
            vec![
                Command::ClearPicker,
                Command::ScheduleNoticeDismiss {
                    id: state.notices[0].id
                },
            ]
        );
    }

    #[test]
    fn test_analyze_without_file_prompts_and_sends_nothing() {
        let (state, commands) = transition(UiState::default(), Msg::AnalyzePressed);

        assert!(!state.busy);
        assert_eq!(state.notices.len(), 1);
        assert_eq!(
            state.notices[0].kind,
            NoticeKind::Info(InfoNotice::SelectImageFirst)
        );
        assert!(!commands.contains(&Command::SendRequest));
    }

    #[test]
    fn test_analyze_sends_one_request_and_clears_stale_tags() {
        let mut ready = ready_state("gato.png");
        ready.tags = vec![tag("gato", 0.87)];

        let (state, commands) = transition(ready, Msg::AnalyzePressed);

        assert!(state.busy);
        assert!(state.tags.is_empty());
        assert_eq!(commands, vec![Command::SendRequest]);
    }

    #[test]
    fn test_analyze_while_busy_is_ignored() {
        let (busy, _) = transition(ready_state("gato.png"), Msg::AnalyzePressed);

        let (state, commands) = transition(busy.clone(), Msg::AnalyzePressed);

        assert_eq!(state, busy);
        assert!(commands.is_empty());
    }

    #[test]
    fn test_success_stores_tags_in_service_order() {
        let (busy, _) = transition(ready_state("gato.png"), Msg::AnalyzePressed);

        let (state, commands) = transition(
            busy,
            Msg::AnalysisFinished(Ok(vec![tag("gato", 0.87), tag("animal", 0.54)])),
        );

        assert!(!state.busy);
        assert_eq!(state.tags, vec![tag("gato", 0.87), tag("animal", 0.54)]);
        assert!(state.notices.is_empty());
        assert!(commands.is_empty());
    }

    #[test]
    fn test_failure_clears_tags_and_notifies() {
        let (busy, _) = transition(ready_state("gato.png"), Msg::AnalyzePressed);

        let (state, commands) = transition(
            busy,
            Msg::AnalysisFinished(Err(AnalyzeError::Network(
                "server returned status 500".to_string(),
            ))),
        );

        assert!(!state.busy);
        assert!(state.tags.is_empty());
        assert_eq!(state.notices.len(), 1);
        assert_eq!(state.notices[0].kind, NoticeKind::Failure);
        assert_eq!(
            commands,
            vec![Command::ScheduleNoticeDismiss {
                id: state.notices[0].id
            }]
        );
    }

    #[test]
    fn test_stale_completion_is_ignored() {
        let ready = ready_state("gato.png");

        let (state, commands) = transition(
            ready.clone(),
            Msg::AnalysisFinished(Ok(vec![tag("fantasma", 0.99)])),
        );

        assert_eq!(state, ready);
        assert!(commands.is_empty());
    }

    #[test]
    fn test_dismissing_a_notice_removes_only_that_notice() {
        let (first, _) = transition(UiState::default(), Msg::AnalyzePressed);
        let (both, _) = transition(
            first,
            Msg::SelectionRejected(ValidationError::BadExtension("nota.txt".to_string())),
        );
        assert_eq!(both.notices.len(), 2);
        let first_id = both.notices[0].id;
        let second_id = both.notices[1].id;
        assert_ne!(first_id, second_id);

        let (state, commands) = transition(both, Msg::NoticeDismissed(first_id));

        assert_eq!(state.notices.len(), 1);
        assert_eq!(state.notices[0].id, second_id);
        assert!(commands.is_empty());
    }
}
