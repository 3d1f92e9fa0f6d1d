/*!
# Patopt: Expected Options.

This module compiles option patterns like `a|i:|-infile:|-help` into a
lookup table of known options and whether or not each requires a value.
*/

use log::debug;
use std::{
	collections::BTreeMap,
	fmt,
};



/// # Default Pattern.
///
/// This is what an empty pattern stands in for: `-h` or `--help`, neither
/// taking a value.
pub const DEFAULT_PATTERN: &str = "h|-help";



#[derive(Debug, Clone, Eq, PartialEq)]
/// # Expected Options.
///
/// The compiled form of an option pattern, mapping each known option name
/// to a "requires value" flag.
///
/// Patterns are `|`-separated option names, short ones written without a
/// dash and long ones with a single dash. A trailing `:` means the option
/// needs a value. Stray spaces and colons around a name are ignored,
/// as are entries with nothing left after trimming. If a name is listed
/// twice, the last entry wins.
///
/// The pattern text is remembered so that re-parsing the same string is
/// free. (Equivalent-but-different strings are recompiled.)
///
/// ## Examples
///
/// ```
/// use patopt::Expected;
///
/// let expected = Expected::new("a | i: | -infile: | -help");
/// assert!(expected.contains("a"));
/// assert!(expected.needs_value("i"));
/// assert!(expected.needs_value("-infile"));
/// assert!(! expected.needs_value("-help"));
///
/// // Flags are good as-are, but values must be present if required.
/// assert!(expected.is_valid("a", ""));
/// assert!(! expected.is_valid("i", ""));
/// assert!(expected.is_valid("-infile", "config.in"));
/// assert!(! expected.is_valid("x", ""));
/// ```
pub struct Expected {
	/// # Options and Value Requirements.
	opts: BTreeMap<String, bool>,

	/// # Source Pattern.
	pattern: String,
}

impl Default for Expected {
	#[inline]
	fn default() -> Self { Self::new(DEFAULT_PATTERN) }
}

impl fmt::Display for Expected {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.pattern)
	}
}

impl Expected {
	#[must_use]
	/// # New.
	///
	/// Compile a new table from `pattern`.
	pub fn new(pattern: &str) -> Self {
		let mut out = Self {
			opts: BTreeMap::new(),
			pattern: String::new(),
		};
		out.parse(pattern);
		out
	}

	/// # Parse.
	///
	/// Recompile the table from `pattern`, unless it is the same pattern
	/// the table was last built from. An empty pattern is treated as
	/// [`DEFAULT_PATTERN`].
	///
	/// Returns `true` if the table was rebuilt.
	pub fn parse(&mut self, pattern: &str) -> bool {
		let pattern = normalize(pattern);
		if pattern == self.pattern { return false; }

		self.opts.clear();
		for part in pattern.split('|') {
			let part = part.trim_start_matches(is_noise);
			if part.is_empty() { continue; }

			// The leading trim guarantees something is left.
			let name = part.trim_end_matches(is_noise);
			let value = part[name.len()..].contains(':');
			self.opts.insert(name.to_owned(), value);
		}

		pattern.clone_into(&mut self.pattern);
		debug!("Compiled option pattern {pattern:?} ({} options).", self.opts.len());
		true
	}
}

impl Expected {
	#[must_use]
	/// # Contains Option?
	pub fn contains(&self, opt: &str) -> bool { self.opts.contains_key(opt) }

	#[must_use]
	/// # Is Empty?
	pub fn is_empty(&self) -> bool { self.opts.is_empty() }

	#[must_use]
	/// # Is Current?
	///
	/// Returns `true` if the table was built from `pattern` (or would be,
	/// in the case of an empty pattern).
	pub fn is_current(&self, pattern: &str) -> bool {
		normalize(pattern) == self.pattern
	}

	#[must_use]
	/// # Is Valid?
	///
	/// An option is valid if it is known and, if it requires a value,
	/// `value` isn't empty.
	pub fn is_valid(&self, opt: &str, value: &str) -> bool {
		self.opts.get(opt).is_some_and(|&v| ! v || ! value.is_empty())
	}

	/// # Iterate.
	///
	/// Return an iterator over the options and their value requirements,
	/// ordered by name.
	pub fn iter(&self) -> impl Iterator<Item=(&str, bool)> {
		self.opts.iter().map(|(k, v)| (k.as_str(), *v))
	}

	#[must_use]
	/// # Length.
	pub fn len(&self) -> usize { self.opts.len() }

	#[must_use]
	/// # Needs Value?
	///
	/// Unknown options don't need anything.
	pub fn needs_value(&self, opt: &str) -> bool {
		self.opts.get(opt).copied().unwrap_or(false)
	}

	#[must_use]
	/// # Pattern.
	///
	/// Return the pattern the table was built from.
	pub fn pattern(&self) -> &str { &self.pattern }
}



/// # Noise?
///
/// Spaces and colons are trimmed from either end of a pattern entry.
const fn is_noise(c: char) -> bool { matches!(c, ':' | ' ') }

/// # Normalize Pattern.
const fn normalize(pattern: &str) -> &str {
	if pattern.is_empty() { DEFAULT_PATTERN }
	else { pattern }
}
