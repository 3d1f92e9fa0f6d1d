/*!
# Patopt: Option/Value Pairs.
*/

use crate::Value;
use std::{
	fmt,
	ops::Deref,
};



#[derive(Debug, Clone, Default, Eq, Hash, Ord, PartialEq, PartialOrd)]
/// # Option/Value Pair.
///
/// A single command line option and its (possibly empty) value.
///
/// The name is stored minus its first dash, so short options like `-h`
/// become `h` while long options like `--help` become `-help`. The two
/// forms therefore never collide.
pub struct OptArg {
	/// # Option Name.
	name: String,

	/// # Value.
	value: String,
}

impl fmt::Display for OptArg {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "[{:?}: {:?}]", self.name, self.value)
	}
}

impl OptArg {
	#[must_use]
	/// # New.
	pub fn new(name: &str, value: &str) -> Self {
		Self {
			name: name.to_owned(),
			value: value.to_owned(),
		}
	}

	#[must_use]
	/// # Option Name.
	pub fn name(&self) -> &str { &self.name }

	#[must_use]
	/// # Value.
	pub fn value(&self) -> Value<'_> { Value::from(self.value.as_str()) }
}



#[derive(Debug, Clone, Default, Eq, Hash, PartialEq)]
/// # Option/Value List.
///
/// This is the tokenized form of a command line: every option found, in
/// the order it appeared, paired with its value.
///
/// The first entry of the raw arguments is assumed to be the program path
/// and is skipped. After that, any entry of two or more bytes starting with
/// a dash is an option. Whatever follows it is taken as its value _unless_
/// that too starts with a dash. Anything else is silently dropped; there is
/// no such thing as a positional argument here.
///
/// If there are no arguments at all, the list falls back to `-h --help`.
///
/// ## Examples
///
/// ```
/// use patopt::{OptArg, OptArgs};
///
/// let opts = OptArgs::new([
///     "app", "-a", "-i", "--infile", "config.in", "stray", "--help",
/// ]);
/// assert_eq!(
///     opts.as_slice(),
///     [
///         OptArg::new("a", ""),
///         OptArg::new("i", ""),
///         OptArg::new("-infile", "config.in"),
///         OptArg::new("-help", ""),
///     ],
/// );
/// ```
pub struct OptArgs(Vec<OptArg>);

impl Deref for OptArgs {
	type Target = [OptArg];

	#[inline]
	fn deref(&self) -> &Self::Target { self.0.as_slice() }
}

impl fmt::Display for OptArgs {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		for oa in &self.0 { writeln!(f, "{oa}")?; }
		Ok(())
	}
}

impl<S: AsRef<str>> FromIterator<S> for OptArgs {
	#[inline]
	fn from_iter<I: IntoIterator<Item=S>>(iter: I) -> Self { Self::new(iter) }
}

impl<'a> IntoIterator for &'a OptArgs {
	type Item = &'a OptArg;
	type IntoIter = std::slice::Iter<'a, OptArg>;

	#[inline]
	fn into_iter(self) -> Self::IntoIter { self.0.iter() }
}

impl OptArgs {
	/// # New.
	///
	/// Tokenize the raw arguments. The first entry is taken to be the
	/// program path and is ignored.
	pub fn new<I, S>(args: I) -> Self
	where I: IntoIterator<Item=S>, S: AsRef<str> {
		let mut args = args.into_iter().skip(1).peekable();
		if args.peek().is_none() { return Self::fallback(); }

		let mut out = Vec::new();
		while let Some(raw) = args.next() {
			let raw = raw.as_ref();

			// We need at least a dash and a letter.
			if raw.len() < 2 || ! raw.starts_with('-') { continue; }

			// The next entry is this option's value unless it is also an
			// option. An empty next entry still counts as a value.
			let value: Option<S> =
				if args.peek().is_some_and(|p| p.as_ref().starts_with('-')) { None }
				else { args.next() };

			out.push(OptArg::new(
				&raw[1..],
				value.as_ref().map_or("", AsRef::as_ref),
			));
		}

		Self(out)
	}

	#[must_use]
	/// # Fallback.
	///
	/// The list used when there are no arguments: a help request, both
	/// short and long.
	pub fn fallback() -> Self {
		Self(vec![
			OptArg::new("h", ""),
			OptArg::new("-help", ""),
		])
	}

	#[must_use]
	/// # As Slice.
	pub fn as_slice(&self) -> &[OptArg] { self.0.as_slice() }

	#[must_use]
	/// # Sorted.
	///
	/// Return a snapshot of the pairs ordered by option name. Pairs sharing
	/// a name keep their command line order. The list itself is left alone.
	pub fn sorted(&self) -> Vec<&OptArg> {
		let mut out: Vec<&OptArg> = self.0.iter().collect();
		out.sort_by(|a, b| a.name.cmp(&b.name));
		out
	}
}



#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn t_new() {
		let opts = OptArgs::new([
			"testingApplication",
			"-a",
			"-i",
			"--infile", "config.in",
			"--help",
		]);
		assert_eq!(
			opts.as_slice(),
			[
				OptArg::new("a", ""),
				OptArg::new("i", ""),
				OptArg::new("-infile", "config.in"),
				OptArg::new("-help", ""),
			],
		);

		// Determinism.
		let again = OptArgs::new([
			"testingApplication",
			"-a",
			"-i",
			"--infile", "config.in",
			"--help",
		]);
		assert_eq!(opts, again, "Tokenizing should be deterministic.");
	}

	#[test]
	fn t_new_names() {
		for raw in ["-h", "-x", "-verbose", "--help", "--h", "---x", "--"] {
			let opts = OptArgs::new(["app", raw]);
			assert_eq!(opts.len(), 1, "Expected one pair for {raw:?}.");
			assert_eq!(opts[0].name(), &raw[1..], "Only one dash should be stripped from {raw:?}.");
			assert!(opts[0].value().is_empty(), "Expected no value for {raw:?}.");
		}

		// Short and long versions of the same letter stay distinct.
		let opts = OptArgs::new(["app", "-h", "--h"]);
		assert_ne!(opts[0].name(), opts[1].name());
	}

	#[test]
	fn t_new_values() {
		let opts = OptArgs::new([
			"app",
			"positional", // Dropped.
			"-n", "5",    // Short values can be a single char.
			"-e", "",     // Empty values still get consumed.
			"-x",
			"-",          // Too short to be anything.
			"-o", "out",
			"leftover",   // Dropped.
			"-v",
		]);
		assert_eq!(
			opts.as_slice(),
			[
				OptArg::new("n", "5"),
				OptArg::new("e", ""),
				OptArg::new("x", ""),
				OptArg::new("o", "out"),
				OptArg::new("v", ""),
			],
		);
	}

	#[test]
	fn t_fallback() {
		let expected = [OptArg::new("h", ""), OptArg::new("-help", "")];

		assert_eq!(OptArgs::new(["app"]).as_slice(), expected);
		assert_eq!(OptArgs::new(Vec::<String>::new()).as_slice(), expected);
		assert_eq!(OptArgs::fallback().as_slice(), expected);

		// Arguments without options are _not_ a fallback case.
		assert!(OptArgs::new(["app", "foo", "bar"]).is_empty());
	}

	#[test]
	fn t_collect() {
		let opts: OptArgs = vec![
			String::from("app"),
			String::from("--threads"),
			String::from("4"),
		].into_iter().collect();
		assert_eq!(opts.as_slice(), [OptArg::new("-threads", "4")]);
		assert_eq!(opts[0].value().as_int(), 4);
	}

	#[test]
	fn t_sorted() {
		let opts = OptArgs::new(["app", "-z", "-a", "1", "--m", "-a", "2"]);
		let sorted: Vec<(&str, &str)> = opts.sorted()
			.into_iter()
			.map(|oa| (oa.name(), oa.value().as_str()))
			.collect();
		assert_eq!(
			sorted,
			[("-m", ""), ("a", "1"), ("a", "2"), ("z", "")],
		);

		// The original order is untouched.
		assert_eq!(opts[0].name(), "z");
	}

	#[test]
	fn t_display() {
		let oa = OptArg::new("-infile", "config.in");
		assert_eq!(oa.to_string(), r#"["-infile": "config.in"]"#);

		let opts = OptArgs::new(["app", "-a", "-b", "1"]);
		assert_eq!(opts.to_string(), "[\"a\": \"\"]\n[\"b\": \"1\"]\n");
	}
}
