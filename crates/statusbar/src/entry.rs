//! Status bar entry model.
//!
//! Plain data shared between producers and the rendering frontend. The
//! registry stores and orders these values but never interprets them:
//! icon placeholders in `text`, theme color tokens, and command ids all
//! pass through verbatim.

use serde::{Deserialize, Serialize};

/// Priority assigned when a producer does not specify one.
///
/// Sorts after every explicit priority, so unprioritized entries line up
/// at the inner end of their side in insertion order.
pub const DEFAULT_PRIORITY: i32 = i32::MIN;

/// Side of the status bar an entry renders on.
///
/// Ordering is maintained independently per side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Alignment {
	/// Left side of the bar.
	Left,
	/// Right side of the bar.
	Right,
}

impl core::fmt::Display for Alignment {
	fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
		match self {
			Alignment::Left => f.write_str("left"),
			Alignment::Right => f.write_str("right"),
		}
	}
}

/// Symbolic reference to a theme color, resolved by the frontend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThemeColorRef {
	/// Theme color identifier, e.g. `statusBar.prominentForeground`.
	pub id: String,
}

impl ThemeColorRef {
	pub fn new(id: impl Into<String>) -> Self {
		Self { id: id.into() }
	}
}

/// Entry color: a literal value or a theme token. Opaque to the core.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ColorSpec {
	/// Literal color value, e.g. `#ffcc00`.
	Literal(String),
	/// Symbolic theme color reference.
	Theme(ThemeColorRef),
}

/// One status bar contribution.
///
/// `text` may embed icons with the `${icon name}` syntax; the syntax is
/// not validated here, malformed placeholders reach the frontend as-is.
/// All fields are fixed once the entry is added; use
/// [`EntryHandle::update`](crate::EntryHandle::update) to swap the whole
/// payload.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StatusbarEntry {
	/// Display text, possibly containing `${icon}` placeholders.
	pub text: String,
	/// Hover tooltip.
	pub tooltip: Option<String>,
	/// Display color.
	pub color: Option<ColorSpec>,
	/// Command id the frontend invokes on activation. Never executed here.
	pub command: Option<String>,
	/// Ordered opaque arguments handed to the command invocation.
	pub arguments: Option<Vec<serde_json::Value>>,
	/// Contributing plugin id, carried for attribution only.
	pub extension_id: Option<String>,
	/// Whether the frontend should draw a beak above the entry.
	pub show_beak: Option<bool>,
}

impl StatusbarEntry {
	/// Creates a text-only entry.
	pub fn new(text: impl Into<String>) -> Self {
		Self {
			text: text.into(),
			..Self::default()
		}
	}

	/// Sets the hover tooltip.
	#[must_use]
	pub fn with_tooltip(mut self, tooltip: impl Into<String>) -> Self {
		self.tooltip = Some(tooltip.into());
		self
	}

	/// Sets the display color.
	#[must_use]
	pub fn with_color(mut self, color: ColorSpec) -> Self {
		self.color = Some(color);
		self
	}

	/// Sets the activation command id.
	#[must_use]
	pub fn with_command(mut self, command: impl Into<String>) -> Self {
		self.command = Some(command.into());
		self
	}

	/// Sets the command arguments.
	#[must_use]
	pub fn with_arguments(mut self, arguments: Vec<serde_json::Value>) -> Self {
		self.arguments = Some(arguments);
		self
	}

	/// Records the contributing plugin id.
	#[must_use]
	pub fn with_extension_id(mut self, extension_id: impl Into<String>) -> Self {
		self.extension_id = Some(extension_id.into());
		self
	}

	/// Sets the beak display hint.
	#[must_use]
	pub fn with_show_beak(mut self, show_beak: bool) -> Self {
		self.show_beak = Some(show_beak);
		self
	}
}

impl From<&str> for StatusbarEntry {
	fn from(text: &str) -> Self {
		Self::new(text)
	}
}

impl From<String> for StatusbarEntry {
	fn from(text: String) -> Self {
		Self::new(text)
	}
}
