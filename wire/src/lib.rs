//! Shared request/response model for the SVG to JSX conversion endpoint.
//!
//! This crate owns the JSON shapes exchanged between `server` and `client`,
//! plus the small pure helpers both sides need before talking to each other:
//! the SVG-shape check ([`is_svg`]) and the component-name canonicalizer
//! ([`pascal_case`]).

pub mod name;
pub mod svg;

pub use name::{export_file_name, pascal_case};
pub use svg::is_svg;

use serde::{Deserialize, Serialize};


/// Path of the conversion endpoint.
pub const CONVERT_ENDPOINT: &str = "/api/svg-to-jsx";

/// Plugin chain used when a request does not name one.
pub const DEFAULT_PLUGINS: [&str; 2] = ["@svgr/plugin-svgo", "@svgr/plugin-jsx"];

/// Component name used when the caller did not commit one.
pub const DEFAULT_COMPONENT_NAME: &str = "SvgComponent";

// =============================================================================
// GENERATION OPTIONS
// =============================================================================

/// Toggles controlling how code is generated from the SVG source.
///
/// Missing JSON keys default to `false`/absent and unknown keys are ignored,
/// so partially filled configs like `{"icon": true}` are accepted.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GenerationOptions {
    /// Target `react-native-svg` instead of DOM elements.
    pub native: bool,
    /// Accept `title` / `titleId` props and render a `<title>` element.
    pub title_prop: bool,
    /// Wrap the component in `React.memo`.
    pub memo: bool,
    /// Emit TypeScript (`.tsx`) with typed props.
    pub typescript: bool,
    /// Force `width`/`height` to `1em` on the root element.
    pub icon: bool,
    /// Explicit plugin chain. `None` selects [`DEFAULT_PLUGINS`].
    #[serde(skip_serializing_if = "Option::is_none")]
    pub plugins: Option<Vec<String>>,
}

impl GenerationOptions {
    /// Options with the default plugin chain spelled out.
    #[must_use]
    pub fn with_default_plugins() -> Self {
        Self {
            plugins: Some(DEFAULT_PLUGINS.iter().map(|p| (*p).to_owned()).collect()),
            ..Self::default()
        }
    }

    /// Read a single toggle.
    #[must_use]
    pub fn flag(&self, flag: OptionFlag) -> bool {
        match flag {
            OptionFlag::Native => self.native,
            OptionFlag::TitleProp => self.title_prop,
            OptionFlag::Memo => self.memo,
            OptionFlag::Typescript => self.typescript,
            OptionFlag::Icon => self.icon,
        }
    }

    /// Return a new record with one toggle replaced.
    #[must_use]
    pub fn with_flag(&self, flag: OptionFlag, value: bool) -> Self {
        let mut next = self.clone();
        match flag {
            OptionFlag::Native => next.native = value,
            OptionFlag::TitleProp => next.title_prop = value,
            OptionFlag::Memo => next.memo = value,
            OptionFlag::Typescript => next.typescript = value,
            OptionFlag::Icon => next.icon = value,
        }
        next
    }
}

/// Identifies one boolean toggle of [`GenerationOptions`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum OptionFlag {
    Native,
    TitleProp,
    Memo,
    Typescript,
    Icon,
}

impl OptionFlag {
    /// All toggles in display order.
    pub const ALL: [Self; 5] = [Self::Native, Self::TitleProp, Self::Memo, Self::Typescript, Self::Icon];

    /// Human-readable switch label.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Native => "React Native",
            Self::TitleProp => "Title",
            Self::Memo => "Memo",
            Self::Typescript => "TypeScript",
            Self::Icon => "Icon",
        }
    }
}

// =============================================================================
// COMPONENT STATE
// =============================================================================

/// Partial component state forwarded to the transform pipeline.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ComponentState {
    /// PascalCase component identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub component_name: Option<String>,
}

impl ComponentState {
    #[must_use]
    pub fn named(name: impl Into<String>) -> Self {
        Self { component_name: Some(name.into()) }
    }

    /// Committed name, or [`DEFAULT_COMPONENT_NAME`] when unset.
    #[must_use]
    pub fn name_or_default(&self) -> &str {
        self.component_name
            .as_deref()
            .unwrap_or(DEFAULT_COMPONENT_NAME)
    }
}

// =============================================================================
// REQUEST / RESPONSE
// =============================================================================

/// Body of `POST /api/svg-to-jsx`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversionRequest {
    #[serde(default)]
    pub svg: String,
    #[serde(default)]
    pub config: GenerationOptions,
    #[serde(default)]
    pub state: ComponentState,
}

/// Response body of the conversion endpoint: exactly one of `jsx` / `message`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ConversionResult {
    Success { jsx: String },
    Failure { message: String },
}

impl ConversionResult {
    /// Collapse into a `Result`, keeping the failure text.
    ///
    /// # Errors
    ///
    /// Returns the `message` of a [`ConversionResult::Failure`].
    pub fn into_result(self) -> Result<String, String> {
        match self {
            Self::Success { jsx } => Ok(jsx),
            Self::Failure { message } => Err(message),
        }
    }
}
