//! Error types for the client-side route table.

use thiserror::Error;

/// Error returned when a path pattern cannot be compiled.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PatternError {
	/// Pattern exceeds the maximum length.
	#[error("Pattern length {length} exceeds maximum allowed length of {max} bytes")]
	TooLong {
		/// Actual length in bytes.
		length: usize,
		/// Maximum length in bytes.
		max: usize,
	},
	/// Pattern has too many path segments.
	#[error("Pattern has {count} path segments, exceeding maximum of {max}")]
	TooManySegments {
		/// Actual segment count.
		count: usize,
		/// Maximum segment count.
		max: usize,
	},
	/// Pattern is not an absolute path.
	#[error("Pattern must start with '/': {0}")]
	NotAbsolute(String),
	/// A `{` was never closed.
	#[error("Unterminated parameter in pattern: {0}")]
	UnterminatedParameter(String),
	/// A parameter name is empty, not an identifier, or repeated.
	#[error("Invalid parameter name '{name}' in pattern {pattern}")]
	InvalidParameterName {
		/// The offending pattern.
		pattern: String,
		/// The offending parameter name.
		name: String,
	},
	/// The compiled regex was rejected.
	#[error("Failed to compile pattern regex: {0}")]
	Regex(String),
}

/// Error returned when a pattern cannot be filled with parameter values.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReverseError {
	/// No value was given for a parameter.
	#[error("Missing parameter '{0}'")]
	Missing(String),
	/// The value would not match its own placeholder.
	#[error("Invalid value '{value}' for parameter '{param}'")]
	InvalidValue {
		/// Parameter name.
		param: String,
		/// The rejected value.
		value: String,
	},
}

/// Error type for route table construction and reverse lookups.
///
/// The duplicate and pattern variants are only produced while building a
/// table; a table that exists is always valid.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RouteTableError {
	/// Two definitions share a path.
	#[error("Duplicate route path '{path}' declared by '{first}' and '{second}'")]
	DuplicatePath {
		/// The shared path.
		path: String,
		/// Name of the first definition.
		first: String,
		/// Name of the second definition.
		second: String,
	},
	/// Two definitions share a name.
	#[error("Duplicate route name '{name}' declared for '{first}' and '{second}'")]
	DuplicateName {
		/// The shared name.
		name: String,
		/// Path of the first definition.
		first: String,
		/// Path of the second definition.
		second: String,
	},
	/// A route pattern failed to compile.
	#[error("Invalid route pattern '{pattern}': {source}")]
	InvalidPattern {
		/// The raw pattern.
		pattern: String,
		/// Why it was rejected.
		#[source]
		source: PatternError,
	},
	/// No route carries the requested name.
	#[error("Invalid route name: {0}")]
	UnknownName(String),
	/// Reverse lookup lacked a parameter.
	#[error("Missing parameter '{param}' for route '{name}'")]
	MissingParameter {
		/// Route name.
		name: String,
		/// Missing parameter name.
		param: String,
	},
	/// Reverse lookup got a value its placeholder cannot hold.
	#[error("Invalid value '{value}' for parameter '{param}' of route '{name}'")]
	InvalidParameter {
		/// Route name.
		name: String,
		/// Parameter name.
		param: String,
		/// The rejected value.
		value: String,
	},
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	fn test_duplicate_path_display() {
		let err = RouteTableError::DuplicatePath {
			path: "/compare".to_string(),
			first: "compare".to_string(),
			second: "compare-again".to_string(),
		};
		assert_eq!(
			err.to_string(),
			"Duplicate route path '/compare' declared by 'compare' and 'compare-again'"
		);
	}

	#[rstest]
	fn test_invalid_pattern_exposes_source() {
		let err = RouteTableError::InvalidPattern {
			pattern: "compare".to_string(),
			source: PatternError::NotAbsolute("compare".to_string()),
		};
		let source = std::error::Error::source(&err).map(ToString::to_string);
		assert_eq!(
			source.as_deref(),
			Some("Pattern must start with '/': compare")
		);
	}

	#[rstest]
	fn test_pattern_error_too_long_display() {
		let err = PatternError::TooLong {
			length: 2000,
			max: 1024,
		};
		assert!(err.to_string().contains("exceeds maximum allowed length"));
	}
}
