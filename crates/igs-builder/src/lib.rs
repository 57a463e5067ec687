//! IGS builder: turns board settings and placed components into a
//! fully-resolved, validated geometry plan.

pub mod builder;
pub mod validate;

pub use builder::{generate_igs, BuildOptions};
pub use validate::{validate_igs, ValidationError, ValidationReport, ValidationWarning};
