//! Path pattern matching for client-side routes.
//!
//! Patterns follow the Django-style syntax used across the routing crates:
//! - `/compare` - exact match
//! - `/runs/{id}` - single path parameter (one segment, no `/`)
//! - `/files/{path:*}` - wildcard, captures the rest of the path

use super::error::{PatternError, ReverseError};
use std::collections::HashMap;

/// Maximum allowed length for a client-side URL pattern string in bytes.
const MAX_CLIENT_PATTERN_LENGTH: usize = 1024;

/// Maximum allowed number of path segments in a client-side URL pattern.
const MAX_CLIENT_PATH_SEGMENTS: usize = 32;

/// Maximum allowed size for compiled regex in client-side patterns (in bytes).
const MAX_CLIENT_REGEX_SIZE: usize = 1 << 20; // 1 MiB

/// A compiled path pattern.
///
/// Two patterns are equal when their source strings are equal. Use
/// [`ClientPathPattern::shape`] to compare patterns that differ only in
/// parameter names.
#[derive(Debug, Clone)]
pub struct ClientPathPattern {
	pattern: String,
	regex: regex::Regex,
	param_names: Vec<String>,
	shape: String,
	is_exact: bool,
}

impl ClientPathPattern {
	/// Compiles a pattern string.
	///
	/// # Errors
	///
	/// Returns a [`PatternError`] if the pattern:
	/// - does not start with `/`
	/// - exceeds 1024 bytes or 32 segments
	/// - has an unterminated, empty, non-identifier or repeated parameter
	pub fn new(pattern: &str) -> Result<Self, PatternError> {
		if pattern.len() > MAX_CLIENT_PATTERN_LENGTH {
			return Err(PatternError::TooLong {
				length: pattern.len(),
				max: MAX_CLIENT_PATTERN_LENGTH,
			});
		}

		if !pattern.starts_with('/') {
			return Err(PatternError::NotAbsolute(pattern.to_string()));
		}

		let segment_count = pattern.split('/').count();
		if segment_count > MAX_CLIENT_PATH_SEGMENTS {
			return Err(PatternError::TooManySegments {
				count: segment_count,
				max: MAX_CLIENT_PATH_SEGMENTS,
			});
		}

		let compiled = compile_pattern(pattern)?;

		let regex = regex::RegexBuilder::new(&compiled.regex)
			.size_limit(MAX_CLIENT_REGEX_SIZE)
			.build()
			.map_err(|e| PatternError::Regex(e.to_string()))?;

		Ok(Self {
			pattern: pattern.to_string(),
			regex,
			is_exact: compiled.param_names.is_empty(),
			param_names: compiled.param_names,
			shape: compiled.shape,
		})
	}

	/// Returns the original pattern string.
	pub fn pattern(&self) -> &str {
		&self.pattern
	}

	/// Returns the parameter names in pattern order.
	pub fn param_names(&self) -> &[String] {
		&self.param_names
	}

	/// Returns the pattern with parameter names erased.
	///
	/// `/runs/{id}` and `/runs/{run}` share the shape `/runs/{}`; such
	/// patterns match exactly the same paths.
	pub fn shape(&self) -> &str {
		&self.shape
	}

	/// Returns whether this pattern has no parameters.
	pub fn is_exact(&self) -> bool {
		self.is_exact
	}

	/// Matches a path, returning the extracted parameters.
	pub fn matches(&self, path: &str) -> Option<HashMap<String, String>> {
		if self.is_exact {
			return (self.pattern == path).then(HashMap::new);
		}

		self.regex.captures(path).map(|caps| {
			self.param_names
				.iter()
				.filter_map(|name| {
					caps.name(name)
						.map(|m| (name.clone(), m.as_str().to_string()))
				})
				.collect()
		})
	}

	/// Checks if this pattern would match the given path.
	pub fn is_match(&self, path: &str) -> bool {
		if self.is_exact {
			self.pattern == path
		} else {
			self.regex.is_match(path)
		}
	}

	/// Generates a path from this pattern with the given parameters.
	///
	/// Placeholders are filled in a single pass, so a value that itself
	/// looks like `{other}` is inserted verbatim.
	///
	/// # Errors
	///
	/// Returns [`ReverseError::Missing`] for an absent parameter, and
	/// [`ReverseError::InvalidValue`] when a value contains `?` or `#`, or
	/// when a single-segment value is empty or contains `/`.
	pub fn reverse(&self, params: &HashMap<String, String>) -> Result<String, ReverseError> {
		let mut result = String::with_capacity(self.pattern.len());
		let mut rest = self.pattern.as_str();

		while let Some(open) = rest.find('{') {
			result.push_str(&rest[..open]);
			let after = &rest[open + 1..];
			// Patterns are validated on construction, so every `{` is closed.
			let close = after.find('}').unwrap_or(after.len());
			let (name, is_wildcard) = match after[..close].strip_suffix(":*") {
				Some(name) => (name, true),
				None => (&after[..close], false),
			};

			let value = params
				.get(name)
				.ok_or_else(|| ReverseError::Missing(name.to_string()))?;
			let invalid = value.contains(['?', '#'])
				|| (!is_wildcard && (value.is_empty() || value.contains('/')));
			if invalid {
				return Err(ReverseError::InvalidValue {
					param: name.to_string(),
					value: value.clone(),
				});
			}

			result.push_str(value);
			rest = after.get(close + 1..).unwrap_or("");
		}
		result.push_str(rest);

		Ok(result)
	}
}

impl PartialEq for ClientPathPattern {
	fn eq(&self, other: &Self) -> bool {
		self.pattern == other.pattern
	}
}

impl Eq for ClientPathPattern {}

impl std::fmt::Display for ClientPathPattern {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "{}", self.pattern)
	}
}

struct CompiledPattern {
	regex: String,
	param_names: Vec<String>,
	shape: String,
}

fn compile_pattern(pattern: &str) -> Result<CompiledPattern, PatternError> {
	let mut regex = String::from("^");
	let mut shape = String::new();
	let mut param_names: Vec<String> = Vec::new();
	let mut chars = pattern.chars();

	while let Some(c) = chars.next() {
		match c {
			'{' => {
				let mut param = String::new();
				let mut closed = false;
				for next in chars.by_ref() {
					if next == '}' {
						closed = true;
						break;
					}
					param.push(next);
				}
				if !closed {
					return Err(PatternError::UnterminatedParameter(pattern.to_string()));
				}

				let (name, is_wildcard) = match param.strip_suffix(":*") {
					Some(name) => (name.to_string(), true),
					None => (param, false),
				};

				if !is_identifier(&name) || param_names.contains(&name) {
					return Err(PatternError::InvalidParameterName {
						pattern: pattern.to_string(),
						name,
					});
				}

				if is_wildcard {
					regex.push_str(&format!("(?P<{}>.*)", name));
					shape.push_str("{*}");
				} else {
					regex.push_str(&format!("(?P<{}>[^/]+)", name));
					shape.push_str("{}");
				}
				param_names.push(name);
			}
			_ => {
				let mut buf = [0u8; 4];
				regex.push_str(&regex::escape(c.encode_utf8(&mut buf)));
				shape.push(c);
			}
		}
	}

	regex.push('$');
	Ok(CompiledPattern {
		regex,
		param_names,
		shape,
	})
}

fn is_identifier(name: &str) -> bool {
	let mut chars = name.chars();
	match chars.next() {
		Some(first) if first.is_ascii_alphabetic() || first == '_' => {
			chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
		}
		_ => false,
	}
}
