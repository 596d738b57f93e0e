//! Variant pipeline: token suffix stripping plus post-processing hooks.

mod hooks;
mod pipeline;

pub use hooks::{BodyHook, NestingHook, PARENT_SEPARATOR, SelectorHook};
pub use pipeline::{Rewrite, VariantPipeline, VariantStage};
