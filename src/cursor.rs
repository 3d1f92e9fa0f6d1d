/*!
# Patopt: Cursor.
*/

use crate::{
	Expected,
	OptArg,
	OptArgs,
	Value,
};
use log::{
	debug,
	trace,
};



#[derive(Debug, Clone, Copy, Eq, PartialEq)]
/// # Step.
///
/// This is the result of a single [`Cursor::next_step`] (or [`Session::get`](crate::Session::get))
/// call: an option, its value, and whether or not anything remains to be
/// checked.
///
/// Note that `more` only says the cursor hasn't reached the end of the
/// list; the remaining entries might all turn out to be invalid.
pub struct Step<'a> {
	/// # Option Name.
	pub opt: &'a str,

	/// # Value.
	pub value: Value<'a>,

	/// # More to Come?
	pub more: bool,
}

impl Step<'_> {
	/// # End.
	///
	/// The step returned once there's nothing (valid) left.
	pub const END: Self = Self {
		opt: "",
		value: Value::EMPTY,
		more: false,
	};

	#[must_use]
	/// # Is End?
	pub const fn is_end(&self) -> bool { self.opt.is_empty() }
}



#[derive(Debug, Clone)]
/// # Cursor.
///
/// This walks an [`OptArgs`] list, returning only those pairs that are
/// valid according to the active [`Expected`] table. Unknown options and
/// options missing a required value are skipped over without comment.
///
/// Changing the pattern rewinds the cursor to the start, so results from
/// two different patterns never get mixed together.
///
/// ## Examples
///
/// ```
/// use patopt::{Cursor, OptArgs};
///
/// let opts = OptArgs::new([
///     "app", "-a", "-i", "--infile", "config.in", "--help",
/// ]);
/// let mut cursor = Cursor::with_pattern(opts, "a|i:|-infile:|-help");
///
/// let step = cursor.next_step();
/// assert_eq!((step.opt, step.value.as_str(), step.more), ("a", "", true));
///
/// // -i is skipped; it needs a value.
/// let step = cursor.next_step();
/// assert_eq!((step.opt, step.value.as_str(), step.more), ("-infile", "config.in", true));
///
/// let step = cursor.next_step();
/// assert_eq!((step.opt, step.value.as_str(), step.more), ("-help", "", false));
///
/// assert!(cursor.next_step().is_end());
/// ```
pub struct Cursor {
	/// # Option/Value Pairs.
	opts: OptArgs,

	/// # Expected Options.
	///
	/// This is built the first time a pattern is set.
	expected: Option<Expected>,

	/// # Position.
	pos: usize,
}

impl From<OptArgs> for Cursor {
	#[inline]
	fn from(opts: OptArgs) -> Self { Self::new(opts) }
}

impl Iterator for Cursor {
	type Item = OptArg;

	/// # Next.
	///
	/// Return the next valid pair, if any.
	fn next(&mut self) -> Option<Self::Item> {
		let step = self.next_step();
		if step.is_end() { None }
		else { Some(OptArg::new(step.opt, step.value.as_str())) }
	}

	/// # Size Hint.
	fn size_hint(&self) -> (usize, Option<usize>) {
		(0, Some(self.opts.len().saturating_sub(self.pos)))
	}
}

impl Cursor {
	#[must_use]
	/// # New.
	///
	/// Create a new cursor. The expected options will be compiled the first
	/// time [`Cursor::set_pattern`] is called.
	pub const fn new(opts: OptArgs) -> Self {
		Self {
			opts,
			expected: None,
			pos: 0,
		}
	}

	#[must_use]
	/// # New With Pattern.
	pub fn with_pattern(opts: OptArgs, pattern: &str) -> Self {
		Self {
			opts,
			expected: Some(Expected::new(pattern)),
			pos: 0,
		}
	}

	#[must_use]
	/// # Expected Options.
	///
	/// Return the active table, if a pattern has been set.
	pub const fn expected(&self) -> Option<&Expected> { self.expected.as_ref() }

	#[must_use]
	/// # Option/Value Pairs.
	pub const fn opts(&self) -> &OptArgs { &self.opts }

	#[must_use]
	/// # Position.
	pub const fn pos(&self) -> usize { self.pos }
}

impl Cursor {
	/// # Next Step.
	///
	/// Advance to and return the next valid pair, or [`Step::END`] if the
	/// end of the list has been reached.
	///
	/// If no pattern has been set yet, the default (`h|-help`) is used.
	pub fn next_step(&mut self) -> Step<'_> {
		let expected = self.expected.get_or_insert_with(Expected::default);
		let len = self.opts.len();

		while self.pos < len {
			let oa = &self.opts[self.pos];
			self.pos += 1;

			let value = oa.value();
			if expected.is_valid(oa.name(), value.as_str()) {
				return Step {
					opt: oa.name(),
					value,
					more: self.pos < len,
				};
			}

			trace!("Skipping option {:?} ({:?}).", oa.name(), value.as_str());
		}

		Step::END
	}

	/// # Reset.
	///
	/// Rewind to the start. The expected options are left alone.
	pub fn reset(&mut self) { self.pos = 0; }

	/// # Set Pattern.
	///
	/// Compile `pattern` if no table exists yet, or recompile it if it
	/// differs from the one currently in use. A recompile also rewinds the
	/// cursor.
	pub fn set_pattern(&mut self, pattern: &str) -> &mut Self {
		match self.expected.as_mut() {
			None => { self.expected = Some(Expected::new(pattern)); },
			Some(expected) =>
				if expected.parse(pattern) {
					debug!("Option pattern changed; starting over.");
					self.pos = 0;
				},
		}

		self
	}
}



#[cfg(test)]
mod tests {
	use super::*;

	/// # Test Arguments.
	const ARGS: [&str; 6] = [
		"testingApplication",
		"-a",         // Flag option.
		"-i",         // Missing its value; ignored.
		"--infile", "config.in",
		"--help",     // Flag option.
	];

	/// # Step as Tuple.
	fn tuple(step: Step<'_>) -> (String, String, bool) {
		(step.opt.to_owned(), step.value.to_string(), step.more)
	}

	#[test]
	fn t_next_step() {
		let mut cursor = Cursor::new(OptArgs::new(ARGS));
		cursor.set_pattern("a|i:|-infile:|-help");

		let mut found = Vec::new();
		loop {
			let step = cursor.next_step();
			if step.is_end() { break; }
			let more = step.more;
			found.push(tuple(step));
			if ! more { break; }
		}

		assert_eq!(
			found,
			[
				("a".to_owned(), String::new(), true),
				("-infile".to_owned(), "config.in".to_owned(), true),
				("-help".to_owned(), String::new(), false),
			],
		);
		assert_eq!(cursor.pos(), 4);
		assert!(cursor.next_step().is_end(), "Cursor should be exhausted.");
	}

	#[test]
	fn t_next_step_trailing_invalid() {
		// Everything after "a" is bad.
		let mut cursor = Cursor::with_pattern(
			OptArgs::new(ARGS),
			"a|b:|-celler|d|h|help",
		);
		assert_eq!(tuple(cursor.next_step()), ("a".to_owned(), String::new(), true));
		assert_eq!(cursor.next_step(), Step::END);
		assert_eq!(cursor.pos(), 4, "All remaining entries should have been consumed.");

		// A list with nothing valid at all.
		let mut cursor = Cursor::with_pattern(OptArgs::new(ARGS), "x|y:");
		assert_eq!(cursor.next_step(), Step::END);
	}

	#[test]
	fn t_next_step_long_run() {
		// Lots of junk shouldn't blow anything up.
		let mut raw = vec!["app".to_owned()];
		raw.extend((0..100_000).map(|i| format!("-x{i}")));
		raw.push("-ok".to_owned());

		let mut cursor = Cursor::with_pattern(OptArgs::new(raw), "ok");
		assert_eq!(tuple(cursor.next_step()), ("ok".to_owned(), String::new(), false));
	}

	#[test]
	fn t_lazy_default() {
		// No pattern means h|-help.
		let mut cursor = Cursor::new(OptArgs::new(["app"]));
		assert!(cursor.expected().is_none());
		assert_eq!(tuple(cursor.next_step()), ("h".to_owned(), String::new(), true));
		assert_eq!(tuple(cursor.next_step()), ("-help".to_owned(), String::new(), false));
		assert_eq!(
			cursor.expected().map(Expected::pattern),
			Some(crate::DEFAULT_PATTERN),
		);
	}

	#[test]
	fn t_set_pattern() {
		let mut cursor = Cursor::new(OptArgs::new(ARGS));

		// The first call compiles without touching the position.
		cursor.set_pattern("a|-help");
		assert_eq!(cursor.expected().map(Expected::len), Some(2));
		assert_eq!(cursor.next_step().opt, "a");
		assert_eq!(cursor.pos(), 1);

		// The same pattern again is a no-op.
		cursor.set_pattern("a|-help");
		assert_eq!(cursor.pos(), 1, "Unchanged pattern should not rewind.");
		assert_eq!(cursor.next_step().opt, "-help");

		// A different pattern starts over.
		cursor.set_pattern("-infile:");
		assert_eq!(cursor.pos(), 0, "Changed pattern should rewind.");
		assert_eq!(cursor.next_step().opt, "-infile");

		// Empty is the default, and so is only one change.
		cursor.set_pattern("");
		assert_eq!(cursor.pos(), 0);
		cursor.next_step();
		cursor.set_pattern("");
		assert_eq!(cursor.pos(), 4, "Repeated empty pattern should not rewind.");
	}

	#[test]
	fn t_reset() {
		let mut cursor = Cursor::with_pattern(OptArgs::new(ARGS), "a");
		assert_eq!(cursor.next_step().opt, "a");
		assert!(cursor.next_step().is_end());

		cursor.reset();
		assert_eq!(cursor.pos(), 0);
		assert_eq!(cursor.expected().map(Expected::pattern), Some("a"));
		assert_eq!(cursor.next_step().opt, "a");
	}

	#[test]
	fn t_iter() {
		let cursor = Cursor::with_pattern(OptArgs::new(ARGS), "a|i:|-infile:|-help");
		let all: Vec<OptArg> = cursor.collect();
		assert_eq!(
			all,
			[
				OptArg::new("a", ""),
				OptArg::new("-infile", "config.in"),
				OptArg::new("-help", ""),
			],
		);
	}
}
