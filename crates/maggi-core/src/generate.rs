//! Shell statement generation

use crate::types::Detail;

/// Concatenate the statements for `details` in input order.
///
/// Each detail contributes exactly its own statement (`alias k=v;` or
/// `export k=v;`) with no separator, so the result can be passed to `eval`.
/// An empty slice yields the empty string.
pub fn generate(details: &[Detail]) -> String {
    details.iter().map(Detail::statement).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::DetailType;

    #[test]
    fn test_generate_empty() {
        assert_eq!(generate(&[]), "");
    }

    #[test]
    fn test_generate_keeps_input_order() {
        let details = vec![
            Detail::new(1, "E", "1", DetailType::Env, 1),
            Detail::new(2, "A", "2", DetailType::Alias, 1),
        ];
        assert_eq!(generate(&details), "export E=1;alias A=2;");
    }

    #[test]
    fn test_generate_length_is_sum_of_statements() {
        let details = vec![
            Detail::new(1, "gs", "git status", DetailType::Alias, 1),
            Detail::new(2, "AWS_PROFILE", "staging", DetailType::Env, 1),
            Detail::new(3, "k", "kubectl", DetailType::Alias, 1),
        ];
        let expected: usize = details.iter().map(|d| d.statement().len()).sum();
        assert_eq!(generate(&details).len(), expected);
    }

    #[test]
    fn test_generate_every_statement_is_terminated() {
        let details = vec![
            Detail::new(1, "A", "1", DetailType::Alias, 1),
            Detail::new(2, "B", "2", DetailType::Alias, 1),
        ];
        let output = generate(&details);
        assert_eq!(output.matches(';').count(), details.len());
        assert!(output.ends_with(';'));
    }
}
