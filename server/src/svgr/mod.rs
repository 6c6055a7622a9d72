//! SVG to React component pipeline.
//!
//! DESIGN
//! ======
//! Mirrors the SVGR plugin chain: the source is parsed into an [`ast::Element`]
//! tree, optionally cleaned up by the SVGO-style [`optimize`] pass, lowered to
//! a JSX component by [`jsx`] and optionally run through [`format`]. Which
//! stages run is selected by the request's plugin list. The endpoint talks to
//! the pipeline through the [`Pipeline`] trait so handlers can be exercised
//! with stand-in implementations.

pub mod ast;
pub mod format;
pub mod jsx;
pub mod optimize;
pub mod parse;

use wire::{ComponentState, DEFAULT_PLUGINS, GenerationOptions};

pub use format::FormatError;

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;

// =============================================================================
// ERROR
// =============================================================================

/// Errors produced by the conversion pipeline.
#[derive(Debug, thiserror::Error)]
pub enum ConvertError {
    /// The source is not well-formed XML.
    #[error("invalid SVG: {0}")]
    Parse(String),

    /// The source parsed but its root element is not `<svg>`.
    #[error("expected <svg> root element, found <{0}>")]
    NotSvg(String),

    /// Elements are nested deeper than [`parse::MAX_DEPTH`].
    #[error("SVG nesting exceeds {0} levels")]
    TooDeep(usize),

    /// The request named a plugin the pipeline does not provide.
    #[error("unknown plugin: {0}")]
    UnknownPlugin(String),

    /// The component name is not a usable identifier.
    #[error("invalid component name: {0:?}")]
    InvalidComponentName(String),

    /// The formatter rejected the generated code.
    #[error("format failed: {0}")]
    Format(#[from] FormatError),
}

// =============================================================================
// PIPELINE SEAM
// =============================================================================

/// The two external collaborators the conversion endpoint depends on.
pub trait Pipeline: Send + Sync {
    /// Turn SVG source into component code.
    ///
    /// # Errors
    ///
    /// Returns a [`ConvertError`] describing why the source could not be converted.
    fn transform(&self, svg: &str, options: &GenerationOptions, state: &ComponentState) -> Result<String, ConvertError>;

    /// Format generated code.
    ///
    /// # Errors
    ///
    /// Returns [`ConvertError::Format`] when the code cannot be formatted.
    fn format(&self, code: &str) -> Result<String, ConvertError>;
}

/// Built-in pipeline backed by this module.
#[derive(Debug, Clone, Copy, Default)]
pub struct SvgrPipeline;

impl Pipeline for SvgrPipeline {
    fn transform(&self, svg: &str, options: &GenerationOptions, state: &ComponentState) -> Result<String, ConvertError> {
        transform(svg, options, state)
    }

    fn format(&self, code: &str) -> Result<String, ConvertError> {
        Ok(format::format(code)?)
    }
}

// =============================================================================
// PLUGINS
// =============================================================================

/// Stages selected by a plugin list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Plugins {
    pub svgo: bool,
    pub jsx: bool,
    pub prettier: bool,
}

impl Plugins {
    /// Resolve plugin names; `None` selects [`DEFAULT_PLUGINS`].
    ///
    /// # Errors
    ///
    /// Returns [`ConvertError::UnknownPlugin`] for an unrecognized name.
    pub fn resolve(names: Option<&[String]>) -> Result<Self, ConvertError> {
        let mut plugins = Self::default();
        let mut enable = |name: &str| -> Result<(), ConvertError> {
            match name {
                "@svgr/plugin-svgo" | "svgo" => plugins.svgo = true,
                "@svgr/plugin-jsx" | "jsx" => plugins.jsx = true,
                "@svgr/plugin-prettier" | "prettier" => plugins.prettier = true,
                other => return Err(ConvertError::UnknownPlugin(other.to_owned())),
            }
            Ok(())
        };
        match names {
            Some(names) => names.iter().try_for_each(|n| enable(n.as_str()))?,
            None => DEFAULT_PLUGINS.iter().try_for_each(|n| enable(*n))?,
        }
        Ok(plugins)
    }
}

/// Run the plugin chain selected by `options` over `svg`.
///
/// Without the JSX stage the (optionally optimized) SVG markup is returned.
///
/// # Errors
///
/// Returns a [`ConvertError`] for unknown plugins, malformed or non-SVG input,
/// invalid component names, or formatter failures.
pub fn transform(svg: &str, options: &GenerationOptions, state: &ComponentState) -> Result<String, ConvertError> {
    let plugins = Plugins::resolve(options.plugins.as_deref())?;
    let mut root = parse::parse(svg)?;
    if plugins.svgo {
        optimize::optimize(&mut root);
    }
    let code = if plugins.jsx {
        jsx::generate(&root, options, state.name_or_default())?
    } else {
        root.to_markup()
    };
    if plugins.prettier {
        Ok(format::format(&code)?)
    } else {
        Ok(code)
    }
}
