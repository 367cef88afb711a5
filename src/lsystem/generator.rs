//! Pattern generation by iterative substitution
//!
//! Every pass replaces each character of the current pattern with its rule,
//! or copies it unchanged when no rule exists. Unchanged characters are how
//! drawing symbols such as `F`, `+` and `[` survive rewriting.

use super::model::{GrammarModel, RuleSet};

/// Run one simultaneous substitution pass over `pattern`
pub fn expand(pattern: &str, rules: &RuleSet) -> String {
    let mut out = String::with_capacity(pattern.len());
    for c in pattern.chars() {
        match rules.get(&c) {
            Some(replacement) => out.push_str(replacement),
            None => out.push(c),
        }
    }
    out
}

/// Expand a model's axiom into its full drawing pattern
///
/// Applies `mapping` `iterations` times, then `final_mapping` once if it has
/// any rules. Output length grows exponentially with the iteration count;
/// bounding it is left to whoever picks the model.
pub fn generate(model: &GrammarModel) -> String {
    let mut pattern = model.initial_value().to_string();
    for _ in 0..model.iterations() {
        pattern = expand(&pattern, model.mapping());
    }
    if !model.final_mapping().is_empty() {
        pattern = expand(&pattern, model.final_mapping());
    }
    pattern
}

#[cfg(test)]
mod tests {
    use super::*;

    fn koch(iterations: u32) -> GrammarModel {
        GrammarModel::builder("Koch")
            .segments(3.0)
            .default_angle_step(60.0)
            .iterations(iterations)
            .mapping('F', "F-F++F-F")
            .build()
            .unwrap()
    }

    #[test]
    fn test_single_iteration() {
        assert_eq!(generate(&koch(1)), "F-F++F-F");
    }

    #[test]
    fn test_two_iterations() {
        assert_eq!(
            generate(&koch(2)),
            "F-F++F-F-F-F++F-F++F-F++F-F-F-F++F-F"
        );
    }

    #[test]
    fn test_zero_iterations_returns_axiom() {
        assert_eq!(generate(&koch(0)), "F");
    }

    #[test]
    fn test_zero_iterations_applies_final_mapping() {
        let model = GrammarModel::builder("Sierpinski")
            .segments(2.0)
            .iterations(0)
            .initial_value("A")
            .mapping('A', "B-A-B")
            .final_mapping('A', "F")
            .build()
            .unwrap();
        assert_eq!(generate(&model), "F");
    }

    #[test]
    fn test_final_mapping_runs_once() {
        let model = GrammarModel::builder("Sierpinski")
            .segments(2.0)
            .iterations(1)
            .initial_value("A")
            .mapping('A', "B-A-B")
            .mapping('B', "A+B+A")
            .final_mapping('A', "F")
            .final_mapping('B', "F")
            .build()
            .unwrap();
        assert_eq!(generate(&model), "F-F-F");
    }

    #[test]
    fn test_empty_replacement_erases_symbol() {
        let model = GrammarModel::builder("Eraser")
            .segments(2.0)
            .iterations(2)
            .initial_value("1F1")
            .mapping('1', "")
            .build()
            .unwrap();
        assert_eq!(generate(&model), "F");
    }

    #[test]
    fn test_unmapped_characters_pass_through() {
        let mut rules = RuleSet::default();
        rules.insert('X', "F[X]".to_string());
        assert_eq!(expand("+X-|f", &rules), "+F[X]-|f");
    }

    #[test]
    fn test_generation_is_deterministic() {
        let model = koch(3);
        assert_eq!(generate(&model), generate(&model));
    }
}
