//! CarTaylor Core - value types shared by every configurator crate
//!
//! This crate provides the fundamental vocabulary of the configurator:
//! - [`Category`] and [`PartType`], the immutable catalog values
//! - [`Part`] instances produced by a [`PartFactory`], with their properties
//! - [`CarTaylorError`], the error taxonomy surfaced to callers

pub mod domain;
pub mod error;

pub use domain::{
    standard_categories, Category, Part, PartFactory, PartType, PropertyManager, ENGINE, EXTERIOR,
    INTERIOR, TRANSMISSION,
};
pub use error::{CarTaylorError, Result};
