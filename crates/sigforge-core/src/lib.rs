//! Core library for the sigforge email signature generator.
//!
//! Turns one person's contact record into a self-contained, inline-styled HTML
//! signature using one of 25 table-based templates. The pipeline is:
//!
//! 1. [`form::SignatureForm`]: the raw form, loaded from JSON by [`config`]
//! 2. [`form::SignatureForm::validate`]: the only validation boundary, producing [`SignatureData`]
//! 3. [`templates::Registry`]: looks up a template by id and renders the fragment
//! 4. [`document`]: optionally wraps fragments in standalone pages
//!
//! Rendering is pure and deterministic: the same record and template id always
//! produce byte-identical output. User values are interpolated verbatim unless
//! [`Escaping::Html`] is requested.
//!
//! ```ignore
//! let data = SignatureData::new("Ana Silva", "ana@example.com");
//! let html = sigforge_core::render("modern-card", &data)?;
//! ```

pub mod config;
pub mod document;
pub mod error;
pub mod form;
pub mod format;
pub mod markup;
pub mod signature;
pub mod templates;

pub use error::{Result, SignatureError, ValidationError};
pub use form::SignatureForm;
pub use markup::Escaping;
pub use signature::SignatureData;
pub use templates::{render, render_with, Registry, SignatureTemplate, TemplateInfo};
