use thiserror::Error;

use crate::parse::atoi;

/// Wrong argument count. The only recoverable error in the experiment; the
/// bins print it to stderr and exit 1 without constructing a counter or
/// spawning a worker.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("usage: {program} <loops>")]
pub struct UsageError {
    pub program: String,
}

/// Pull the loop count out of argv. Exactly one positional is required; its
/// text goes through `atoi`, so a malformed number coerces instead of
/// failing.
pub fn loops_from_args(args: &[String]) -> Result<i32, UsageError> {
    let program = args.first().map(String::as_str).unwrap_or("race");
    if args.len() != 2 {
        return Err(UsageError {
            program: program.to_string(),
        });
    }
    Ok(atoi(&args[1]))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn argv(parts: &[&str]) -> Vec<String> {
        parts.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn one_positional_parses() {
        assert_eq!(loops_from_args(&argv(&["racy", "1000"])), Ok(1000));
    }

    #[test]
    fn malformed_numbers_coerce_to_zero() {
        assert_eq!(loops_from_args(&argv(&["racy", "abc"])), Ok(0));
    }

    #[test]
    fn missing_positional_is_a_usage_error() {
        let err = loops_from_args(&argv(&["racy"])).unwrap_err();
        assert_eq!(err.to_string(), "usage: racy <loops>");
    }

    #[test]
    fn extra_positionals_are_a_usage_error() {
        assert!(loops_from_args(&argv(&["racy", "10", "20"])).is_err());
    }

    #[test]
    fn empty_argv_is_a_usage_error() {
        assert!(loops_from_args(&[]).is_err());
    }
}
