//! Host-facing action abstraction.
//!
//! A scaffolder host drives actions through [`TemplateAction`]: it looks one
//! up by id in an [`ActionRegistry`], builds an [`ActionContext`] from the
//! user's JSON input, awaits `handler`, and reads the outputs back from the
//! context.

pub mod action_context;
pub mod action_registry;
pub mod action_schema;
pub mod template_action;
