/*!
# Patopt: Option Values.
*/

use std::{
	fmt,
	ops::Deref,
};



#[derive(Debug, Clone, Copy, Default, Eq, Hash, Ord, PartialEq, PartialOrd)]
/// # Option Value.
///
/// This is a borrowed view of the value attached to a command line option.
/// An empty value means none was given (or needed).
///
/// The conversion helpers never fail; anything that can't be read as the
/// requested type simply comes back as that type's "zero".
///
/// ## Examples
///
/// ```
/// use patopt::Value;
///
/// assert!(Value::from("yes").as_bool());
/// assert_eq!(Value::from("1.23").as_float(), 1.23);
/// assert_eq!(Value::from("-234").as_int(), -234);
/// assert_eq!(Value::from("n.a.").as_int(), 0);
/// ```
pub struct Value<'a>(&'a str);

impl<'a> From<&'a str> for Value<'a> {
	#[inline]
	fn from(src: &'a str) -> Self { Self(src) }
}

impl AsRef<str> for Value<'_> {
	#[inline]
	fn as_ref(&self) -> &str { self.0 }
}

impl Deref for Value<'_> {
	type Target = str;

	#[inline]
	fn deref(&self) -> &Self::Target { self.0 }
}

impl fmt::Display for Value<'_> {
	#[inline]
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.0)
	}
}

impl PartialEq<str> for Value<'_> {
	#[inline]
	fn eq(&self, other: &str) -> bool { self.0 == other }
}

impl PartialEq<&str> for Value<'_> {
	#[inline]
	fn eq(&self, other: &&str) -> bool { self.0 == *other }
}

impl<'a> Value<'a> {
	/// # Empty.
	pub const EMPTY: Self = Self("");

	#[must_use]
	/// # As Bool.
	///
	/// Only the first character is considered, so "True", "yes", "Ja" and
	/// "oui" all work. `1`, `t`, `T`, `y`, `Y`, `j`, `J`, `o`, and `O` are
	/// `true`; everything else, including an empty value, is `false`.
	pub const fn as_bool(&self) -> bool {
		matches!(
			self.0.as_bytes(),
			[b'1' | b't' | b'T' | b'y' | b'Y' | b'j' | b'J' | b'o' | b'O', ..]
		)
	}

	#[must_use]
	/// # As Float.
	///
	/// Parse the value as an `f64`, returning `0.0` if it is empty, invalid,
	/// or `NaN`.
	pub fn as_float(&self) -> f64 {
		match self.0.parse::<f64>() {
			Ok(f) if ! f.is_nan() => f,
			_ => 0.0,
		}
	}

	#[must_use]
	/// # As Integer.
	///
	/// Parse the value as a base-10 `i64`, returning `0` if it is empty or
	/// invalid.
	pub fn as_int(&self) -> i64 { self.0.parse::<i64>().unwrap_or(0) }

	#[must_use]
	/// # As String Slice.
	pub const fn as_str(&self) -> &'a str { self.0 }

	#[must_use]
	/// # Is Empty?
	pub const fn is_empty(&self) -> bool { self.0.is_empty() }
}
