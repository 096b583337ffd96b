//! Fixed placement for status messages.

use serde::{Deserialize, Serialize};

use crate::entry::{Alignment, DEFAULT_PRIORITY};

/// Placement used for transient status messages.
///
/// Messages always land at one fixed, documented spot; the default puts
/// them on the left side at [`DEFAULT_PRIORITY`], after every explicit
/// contribution. Hosts that want them elsewhere pass their own config to
/// [`StatusMessages::with_config`](crate::StatusMessages::with_config).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageConfig {
	/// Side message entries are added to.
	pub alignment: Alignment,
	/// Priority of message entries.
	pub priority: i32,
}

impl Default for MessageConfig {
	fn default() -> Self {
		Self {
			alignment: Alignment::Left,
			priority: DEFAULT_PRIORITY,
		}
	}
}
