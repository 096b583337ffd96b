//! Shared status bar contribution registry.
//!
//! Many independent producers contribute small pieces of status
//! information to one linearly ordered bar. [`StatusbarRegistry`] tracks
//! what is shown and in what order (per side, by priority, stable on
//! ties) and hands each producer an [`EntryHandle`] whose disposal
//! removes exactly that contribution. [`StatusMessages`] layers
//! transient messages on top: optionally delayed, optionally
//! self-expiring, cancellable at any point through the returned
//! [`MessageHandle`].
//!
//! Rendering is a collaborator concern. Frontends subscribe to the
//! change feed ([`StatusbarRegistry::subscribe`]) and re-read the
//! ordered sequence for the side that changed; they alone interpret
//! `${icon}` placeholders, theme color tokens, and commands. No
//! operation in this crate fails: inputs are accepted and normalized,
//! and misuse of a handle (double dispose, dispose after auto-removal)
//! is a silent no-op.

mod config;
mod entry;
mod message;
mod registry;

pub use config::MessageConfig;
pub use entry::{Alignment, ColorSpec, DEFAULT_PRIORITY, StatusbarEntry, ThemeColorRef};
pub use message::{MessageHandle, StatusMessages};
pub use registry::{Dispose, EntryHandle, StatusbarChange, StatusbarRegistry};
