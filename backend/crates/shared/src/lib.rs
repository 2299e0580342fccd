//! Shared Kernel
//!
//! Vocabulary that every crate in the portal agrees on:
//! - [`error::app_error::AppError`] and the [`error::kind::ErrorKind`] classification
//! - Typed identifiers ([`id::Id`])
//!
//! Only things with the same meaning across auth, platform and the binary
//! belong here.

pub mod error {
    pub mod app_error;
    pub mod conversions;
    pub mod kind;
}
pub mod id;
