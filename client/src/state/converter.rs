//! Converter page state and its reducer.
//!
//! DESIGN
//! ======
//! The page holds one immutable `ConverterState`. Every user interaction and
//! every server response is an [`Action`]; [`reduce`] returns the next state
//! plus the side effects the page must run (REST call, clipboard write, file
//! save). Keeping the reducer pure lets the whole state machine be tested
//! without a browser.
//!
//! Conversion is re-evaluated whenever `input`, `options` or the committed
//! `component` actually change. Each evaluation bumps `generation`; a
//! response is applied only if it carries the current generation, so a slow
//! response can never overwrite a newer one.

use wire::{ComponentState, ConversionRequest, GenerationOptions, OptionFlag, export_file_name, is_svg, pascal_case};

#[cfg(test)]
#[path = "converter_test.rs"]
mod converter_test;

/// Output shown when the input is non-empty but not SVG.
pub const INVALID_SVG_MESSAGE: &str = "This is not a valid svg code!";

/// Notice shown after a copy request.
pub const COPY_NOTICE: &str = "Successfully copied to your clipboard";

/// Component name committed on first load.
pub const DEFAULT_COMPONENT_NAME: &str = "MyComponent";

/// Sample input shown on first load: a Sketch export with editor metadata.
pub const DEFAULT_SVG: &str = r##"<?xml version="1.0" encoding="UTF-8"?>
<svg width="48px" height="1px" viewBox="0 0 48 1" version="1.1" xmlns="http://www.w3.org/2000/svg" xmlns:xlink="http://www.w3.org/1999/xlink">
    <!-- Generator: Sketch 46.2 (44496) - http://www.bohemiancoding.com/sketch -->
    <title>Rectangle 5</title>
    <desc>Created with Sketch.</desc>
    <defs></defs>
    <g id="Page-1" stroke="none" stroke-width="1" fill="none" fill-rule="evenodd">
        <g id="19-Separator" transform="translate(-129.000000, -156.000000)" fill="#063855">
            <g id="Controls/Settings" transform="translate(80.000000, 0.000000)">
                <g id="Content" transform="translate(0.000000, 64.000000)">
                    <g id="Group" transform="translate(24.000000, 56.000000)">
                        <g id="Group-2">
                            <rect id="Rectangle-5" x="25" y="36" width="48" height="1"></rect>
                        </g>
                    </g>
                </g>
            </g>
        </g>
    </g>
</svg>"##;

// =============================================================================
// STATE
// =============================================================================

/// Severity of a transient notice.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

/// Transient snackbar message. `id` distinguishes successive notices so a
/// dismissal timer only clears the notice it was started for.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub id: u64,
    pub kind: NoticeKind,
    pub message: String,
}

/// Coarse view of where the converter is, derived from state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    /// No input.
    Empty,
    /// Input present but not SVG.
    Invalid,
    /// Request in flight.
    Pending,
    /// Last response applied (or its failure reported).
    Ready,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ConverterState {
    pub input: String,
    pub output: String,
    pub options: GenerationOptions,
    /// Last committed component name, always PascalCase.
    pub component: ComponentState,
    /// Name field contents; only committed on submit/blur.
    pub draft_name: String,
    pub loading: bool,
    /// Identifies the most recent evaluation.
    pub generation: u64,
    pub notice: Option<Notice>,
    notice_seq: u64,
}

impl Default for ConverterState {
    fn default() -> Self {
        Self {
            input: DEFAULT_SVG.to_owned(),
            output: String::new(),
            options: GenerationOptions { icon: true, ..GenerationOptions::with_default_plugins() },
            component: ComponentState::named(DEFAULT_COMPONENT_NAME),
            draft_name: DEFAULT_COMPONENT_NAME.to_owned(),
            loading: false,
            generation: 0,
            notice: None,
            notice_seq: 0,
        }
    }
}

impl ConverterState {
    #[must_use]
    pub fn phase(&self) -> Phase {
        if self.input.is_empty() {
            Phase::Empty
        } else if !is_svg(&self.input) {
            Phase::Invalid
        } else if self.loading {
            Phase::Pending
        } else {
            Phase::Ready
        }
    }

    /// Export filename for the committed component name.
    #[must_use]
    pub fn export_file_name(&self) -> String {
        export_file_name(self.component.name_or_default(), self.options.typescript)
    }

    fn push_notice(&mut self, kind: NoticeKind, message: String) {
        self.notice_seq += 1;
        self.notice = Some(Notice { id: self.notice_seq, kind, message });
    }
}

// =============================================================================
// ACTIONS & EFFECTS
// =============================================================================

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Action {
    /// First evaluation after the page mounts.
    Init,
    InputChanged(String),
    OptionToggled(OptionFlag, bool),
    /// Keystroke in the name field; never triggers conversion.
    DraftNameChanged(String),
    /// Submit or blur of the name field.
    CommitName,
    ConversionFinished { generation: u64, result: Result<String, String> },
    Copy,
    Export,
    DismissNotice(u64),
}

/// Work the page performs on behalf of the reducer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SideEffect {
    Convert { generation: u64, request: ConversionRequest },
    CopyToClipboard(String),
    SaveFile { filename: String, contents: String },
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Transition {
    pub state: ConverterState,
    pub effects: Vec<SideEffect>,
}

impl Transition {
    fn unchanged(state: &ConverterState) -> Self {
        Self { state: state.clone(), effects: Vec::new() }
    }
}

// =============================================================================
// REDUCER
// =============================================================================

/// Compute the next state and the effects to run for `action`.
#[must_use]
pub fn reduce(state: &ConverterState, action: Action) -> Transition {
    let mut next = state.clone();
    let mut effects = Vec::new();

    match action {
        Action::Init => effects.extend(evaluate(&mut next)),
        Action::InputChanged(input) => {
            if input == state.input {
                return Transition::unchanged(state);
            }
            next.input = input;
            effects.extend(evaluate(&mut next));
        }
        Action::OptionToggled(flag, value) => {
            let options = state.options.with_flag(flag, value);
            if options == state.options {
                return Transition::unchanged(state);
            }
            next.options = options;
            effects.extend(evaluate(&mut next));
        }
        Action::DraftNameChanged(draft) => next.draft_name = draft,
        Action::CommitName => {
            let canonical = pascal_case(&state.draft_name);
            if canonical.is_empty() {
                next.draft_name = state.component.component_name.clone().unwrap_or_default();
            } else {
                next.draft_name.clone_from(&canonical);
                if state.component.component_name.as_deref() != Some(canonical.as_str()) {
                    next.component = ComponentState::named(canonical);
                    effects.extend(evaluate(&mut next));
                }
            }
        }
        Action::ConversionFinished { generation, result } => {
            if generation != state.generation || !state.loading {
                return Transition::unchanged(state);
            }
            next.loading = false;
            match result {
                Ok(jsx) => next.output = jsx,
                Err(message) => next.push_notice(NoticeKind::Error, message),
            }
        }
        Action::Copy => {
            effects.push(SideEffect::CopyToClipboard(state.output.clone()));
            next.push_notice(NoticeKind::Success, COPY_NOTICE.to_owned());
        }
        Action::Export => {
            let filename = state.export_file_name();
            next.push_notice(NoticeKind::Success, format!("{filename} downloaded successfully"));
            effects.push(SideEffect::SaveFile { filename, contents: state.output.clone() });
        }
        Action::DismissNotice(id) => {
            if next.notice.as_ref().is_some_and(|n| n.id == id) {
                next.notice = None;
            }
        }
    }

    Transition { state: next, effects }
}

/// Re-run the input guard from scratch, starting a new generation.
fn evaluate(state: &mut ConverterState) -> Option<SideEffect> {
    state.generation += 1;
    if state.input.is_empty() {
        state.output.clear();
        state.loading = false;
        return None;
    }
    if !is_svg(&state.input) {
        state.output = INVALID_SVG_MESSAGE.to_owned();
        state.loading = false;
        return None;
    }
    state.loading = true;
    Some(SideEffect::Convert {
        generation: state.generation,
        request: ConversionRequest {
            svg: state.input.clone(),
            config: state.options.clone(),
            state: state.component.clone(),
        },
    })
}
