//! Transient status messages.
//!
//! A thin client of [`StatusbarRegistry`] that contributes one ephemeral
//! entry per call, optionally delaying its appearance and optionally
//! removing it again after a timeout. Each invocation is an explicit
//! three-phase state machine guarded by a lock; timer tasks re-check the
//! phase when they wake, so a fire that lost the race against disposal
//! can never resurrect the message.


use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex;
use tokio_util::sync::CancellationToken;

use crate::config::MessageConfig;
use crate::entry::StatusbarEntry;
use crate::registry::{Dispose, EntryHandle, StatusbarRegistry};

/// Lifecycle of one status message invocation.
#[derive(Debug)]
enum Phase {
	/// Delay timer running; nothing in the registry yet.
	Pending,
	/// Entry present in the registry.
	Visible(EntryHandle),
	/// Terminal. Timer fires and dispose calls are no-ops from here.
	Disposed,
}

#[derive(Debug)]
struct MessageState {
	phase: Mutex<Phase>,
	/// Cancelled on external disposal, before the phase is touched, so
	/// both timer tasks stop waiting instead of firing late.
	cancel: CancellationToken,
}

/// Controller for transient status bar messages.
///
/// Messages land at a fixed, configured spot ([`MessageConfig`]): by
/// default the left side at [`DEFAULT_PRIORITY`], after every explicit
/// contribution. Timer tasks run on the ambient tokio runtime, so calls
/// that pass a delay or auto-dispose duration expect to be made inside
/// one.
///
/// [`DEFAULT_PRIORITY`]: crate::DEFAULT_PRIORITY
#[derive(Debug, Clone)]
pub struct StatusMessages {
	registry: StatusbarRegistry,
	config: MessageConfig,
}

impl StatusMessages {
	/// Creates a controller with the default message placement.
	pub fn new(registry: StatusbarRegistry) -> Self {
		Self::with_config(registry, MessageConfig::default())
	}

	/// Creates a controller with an explicit message placement.
	pub fn with_config(registry: StatusbarRegistry, config: MessageConfig) -> Self {
		Self { registry, config }
	}

	/// Shows `message` in the status bar.
	///
	/// With `delay_by`, the entry appears only once the delay elapsed;
	/// disposing the handle earlier means it never appears at all. With
	/// `auto_dispose_after`, the entry is removed that long after it
	/// became *visible*: the dismiss clock starts at visibility, not at
	/// this call, so a delayed message still gets its full lifetime.
	/// Zero durations degrade to "show immediately" and "never dismiss"
	/// respectively; nothing here fails.
	pub fn set(
		&self,
		message: impl Into<String>,
		auto_dispose_after: Option<Duration>,
		delay_by: Option<Duration>,
	) -> MessageHandle {
		let text = message.into();
		let state = Arc::new(MessageState {
			phase: Mutex::new(Phase::Pending),
			cancel: CancellationToken::new(),
		});

		match delay_by.filter(|delay| !delay.is_zero()) {
			None => self.show(&state, text, auto_dispose_after),
			Some(delay) => {
				tracing::debug!(?delay, "status message pending");
				// Deadline is fixed now; a late first poll of the task
				// must not stretch the delay.
				let deadline = tokio::time::Instant::now() + delay;
				let controller = self.clone();
				let task_state = Arc::clone(&state);
				let token = state.cancel.clone();
				tokio::spawn(async move {
					tokio::select! {
						() = token.cancelled() => {}
						() = tokio::time::sleep_until(deadline) => {
							controller.show(&task_state, text, auto_dispose_after);
						}
					}
				});
			}
		}

		MessageHandle {
			state,
			disposed: false,
		}
	}

	/// Transitions `Pending -> Visible`: adds the entry and arms the
	/// dismiss timer. No-op when disposal won the race.
	fn show(&self, state: &Arc<MessageState>, text: String, auto_dispose_after: Option<Duration>) {
		{
			let mut phase = state.phase.lock();
			if !matches!(*phase, Phase::Pending) {
				return;
			}
			let handle = self.registry.add_entry(
				StatusbarEntry::new(text),
				self.config.alignment,
				Some(self.config.priority),
			);
			*phase = Phase::Visible(handle);
		}

		if let Some(ttl) = auto_dispose_after.filter(|ttl| !ttl.is_zero()) {
			tracing::debug!(?ttl, "status message visible, dismiss armed");
			// The dismiss clock starts at visibility, fixed here.
			let deadline = tokio::time::Instant::now() + ttl;
			let task_state = Arc::clone(state);
			let token = state.cancel.clone();
			tokio::spawn(async move {
				tokio::select! {
					() = token.cancelled() => {}
					() = tokio::time::sleep_until(deadline) => dismiss(&task_state),
				}
			});
		}
	}
}

/// Dismiss timer expiry: removes the entry unless the message was
/// already disposed.
fn dismiss(state: &MessageState) {
	let mut phase = state.phase.lock();
	if let Phase::Visible(handle) = &mut *phase {
		handle.dispose();
		*phase = Phase::Disposed;
		tracing::debug!("status message dismissed");
	}
}

/// Capability to dismiss one status message.
///
/// Disposal cancels any outstanding delay or dismiss timer before
/// returning and removes the entry if it is visible; a message still
/// waiting on its delay never appears at all. Idempotent, and a silent
/// no-op after the dismiss timer already removed the entry.
#[derive(Debug)]
pub struct MessageHandle {
	state: Arc<MessageState>,
	disposed: bool,
}

impl Dispose for MessageHandle {
	fn dispose(&mut self) {
		if self.disposed {
			return;
		}
		self.disposed = true;
		self.state.cancel.cancel();

		let mut phase = self.state.phase.lock();
		match std::mem::replace(&mut *phase, Phase::Disposed) {
			Phase::Visible(mut handle) => handle.dispose(),
			Phase::Pending | Phase::Disposed => {}
		}
	}
}
