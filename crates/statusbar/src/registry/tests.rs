use pretty_assertions::assert_eq;

use super::*;
use crate::entry::{ColorSpec, ThemeColorRef};

fn texts(registry: &StatusbarRegistry, alignment: Alignment) -> Vec<String> {
	registry
		.entries(alignment)
		.into_iter()
		.map(|entry| entry.text)
		.collect()
}

#[test]
fn entries_sort_by_priority_then_insertion() {
	let registry = StatusbarRegistry::new();
	let _a = registry.add_entry("a", Alignment::Left, Some(10));
	let _b = registry.add_entry("b", Alignment::Left, Some(20));
	let _c = registry.add_entry("c", Alignment::Left, Some(10));
	let _d = registry.add_entry("d", Alignment::Left, None);
	let _e = registry.add_entry("e", Alignment::Left, Some(15));

	assert_eq!(texts(&registry, Alignment::Left), ["b", "e", "a", "c", "d"]);
}

#[test]
fn ordering_invariant_holds_after_every_add() {
	let registry = StatusbarRegistry::new();
	let priorities = [3, i32::MIN, 7, 3, 0, 7, i32::MAX, 3];
	let mut handles = Vec::new();

	for (index, priority) in priorities.into_iter().enumerate() {
		handles.push(registry.add_entry(
			format!("entry-{index}"),
			Alignment::Right,
			Some(priority),
		));

		// Stable sort of what was added so far is the expected sequence
		// at every point in time, not just at the end.
		let mut expected: Vec<(usize, i32)> =
			priorities[..=index].iter().copied().enumerate().collect();
		expected.sort_by(|a, b| b.1.cmp(&a.1));
		let expected: Vec<String> = expected
			.into_iter()
			.map(|(added, _)| format!("entry-{added}"))
			.collect();

		assert_eq!(texts(&registry, Alignment::Right), expected);
	}

	// Equal priorities keep insertion order.
	assert_eq!(
		texts(&registry, Alignment::Right),
		["entry-6", "entry-2", "entry-5", "entry-0", "entry-3", "entry-7", "entry-4", "entry-1"],
	);
}

#[test]
fn unprioritized_entries_sort_last_in_insertion_order() {
	let registry = StatusbarRegistry::new();
	let _a = registry.add_entry("first", Alignment::Left, None);
	let _b = registry.add_entry("ranked", Alignment::Left, Some(-1000));
	let _c = registry.add_entry("second", Alignment::Left, None);

	assert_eq!(texts(&registry, Alignment::Left), ["ranked", "first", "second"]);
}

#[test]
fn sides_are_independent() {
	let registry = StatusbarRegistry::new();
	let _l = registry.add_entry("lang", Alignment::Left, Some(1));
	let _r = registry.add_entry("line 3, col 7", Alignment::Right, Some(1));

	assert_eq!(texts(&registry, Alignment::Left), ["lang"]);
	assert_eq!(texts(&registry, Alignment::Right), ["line 3, col 7"]);
	assert_eq!(registry.len(Alignment::Left), 1);
	assert_eq!(registry.len(Alignment::Right), 1);
}

#[test]
fn dispose_removes_exactly_its_own_entry() {
	let registry = StatusbarRegistry::new();
	// Identical text and priority; only the tooltip tells them apart.
	let entry = |tooltip: &str| StatusbarEntry::new("sync").with_tooltip(tooltip);
	let _first = registry.add_entry(entry("one"), Alignment::Left, Some(5));
	let mut second = registry.add_entry(entry("two"), Alignment::Left, Some(5));
	let _third = registry.add_entry(entry("three"), Alignment::Left, Some(5));

	second.dispose();

	let tooltips: Vec<_> = registry
		.entries(Alignment::Left)
		.into_iter()
		.map(|entry| entry.tooltip.unwrap())
		.collect();
	assert_eq!(tooltips, ["one", "three"]);
}

#[test]
fn dispose_is_idempotent() {
	let registry = StatusbarRegistry::new();
	let _keep = registry.add_entry("keep", Alignment::Left, None);
	let mut handle = registry.add_entry("gone", Alignment::Left, None);

	handle.dispose();
	handle.dispose();
	handle.dispose();

	assert_eq!(texts(&registry, Alignment::Left), ["keep"]);
}

#[test]
fn empty_text_is_accepted() {
	let registry = StatusbarRegistry::new();
	let _h = registry.add_entry(StatusbarEntry::default(), Alignment::Left, None);

	assert_eq!(texts(&registry, Alignment::Left), [""]);
}

#[test]
fn update_replaces_payload_in_place() {
	let registry = StatusbarRegistry::new();
	let _a = registry.add_entry("a", Alignment::Left, Some(5));
	let b = registry.add_entry("b", Alignment::Left, Some(5));
	let _c = registry.add_entry("c", Alignment::Left, Some(5));

	b.update(
		StatusbarEntry::new("b2")
			.with_color(ColorSpec::Theme(ThemeColorRef::new("statusBar.warningForeground"))),
	);

	// Same ordering position, new payload.
	assert_eq!(texts(&registry, Alignment::Left), ["a", "b2", "c"]);
}

#[test]
fn update_after_dispose_is_noop() {
	let registry = StatusbarRegistry::new();
	let mut handle = registry.add_entry("x", Alignment::Left, None);
	handle.dispose();

	handle.update("resurrected");

	assert!(registry.is_empty(Alignment::Left));
}

#[test]
fn change_feed_reports_mutations_in_order() {
	let registry = StatusbarRegistry::new();
	let mut changes = registry.subscribe();

	let mut handle = registry.add_entry("x", Alignment::Right, None);
	handle.update("y");
	handle.dispose();
	handle.dispose();

	for _ in 0..3 {
		assert_eq!(
			changes.try_recv().unwrap(),
			StatusbarChange {
				alignment: Alignment::Right
			},
		);
	}
	// Repeat disposal emitted nothing.
	assert!(changes.try_recv().is_err());
}

#[test]
fn icon_placeholders_pass_through_verbatim() {
	let registry = StatusbarRegistry::new();
	let _h = registry.add_entry(
		StatusbarEntry::new("${sync} Synchronizing ${broken")
			.with_command("workbench.action.sync")
			.with_arguments(vec![serde_json::json!({"force": true})]),
		Alignment::Left,
		None,
	);

	let entries = registry.entries(Alignment::Left);
	assert_eq!(entries[0].text, "${sync} Synchronizing ${broken");
}
