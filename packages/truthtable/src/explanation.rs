use std::fmt::Display;

use termtree::Tree;

/// A sink for the steps taken while analyzing an expression.
///
/// Steps and descriptions are built lazily, so [`DiscardedExplanation`] costs
/// nothing beyond the calls themselves.
pub trait Explain {
    fn step(&mut self, step: impl FnOnce() -> String);

    fn subexplanation(&mut self, description: impl FnOnce() -> String) -> &mut Self;

    fn with_subexplanation<T>(
        &mut self,
        description: impl FnOnce() -> String,
        function: impl FnOnce(&mut Self) -> T,
    ) -> T {
        let explanation = self.subexplanation(description);
        function(explanation)
    }
}

#[derive(Debug, Clone, Hash, PartialEq, Eq)]
enum ExplanationComponent {
    Step(String),
    Explanation(Explanation),
}

#[derive(Debug, Clone, Hash, PartialEq, Eq, Default)]
pub struct Explanation {
    description: String,
    components: Vec<ExplanationComponent>,
}

impl Explanation {
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            components: Vec::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    pub fn get_tree(&self) -> Tree<String> {
        let leaves = self.components.iter().map(|component| match component {
            ExplanationComponent::Step(step) => Tree::new(step.clone()),
            ExplanationComponent::Explanation(explanation) => explanation.get_tree(),
        });

        Tree::new(self.description.clone()).with_leaves(leaves)
    }
}

impl Explain for Explanation {
    fn step(&mut self, step: impl FnOnce() -> String) {
        let step = ExplanationComponent::Step(step());

        if self.components.last() != Some(&step) {
            self.components.push(step);
        }
    }

    fn subexplanation(&mut self, description: impl FnOnce() -> String) -> &mut Self {
        self.components
            .push(ExplanationComponent::Explanation(Explanation::new(
                description(),
            )));

        match self.components.last_mut() {
            Some(ExplanationComponent::Explanation(explanation)) => explanation,
            _ => unreachable!("A subexplanation was just pushed"),
        }
    }
}

impl Display for Explanation {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.get_tree())
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct DiscardedExplanation;

impl Explain for DiscardedExplanation {
    fn step(&mut self, _step: impl FnOnce() -> String) {}

    fn subexplanation(&mut self, _description: impl FnOnce() -> String) -> &mut Self {
        self
    }
}

#[cfg(test)]
mod tests {
    use test_log::test;

    use super::*;

    #[test]
    fn nested_steps_render_as_tree() {
        let mut explanation = Explanation::new("root");

        explanation.step(|| "first".to_owned());
        explanation.with_subexplanation(
            || "child".to_owned(),
            |explanation| explanation.step(|| "inner".to_owned()),
        );
        explanation.step(|| "last".to_owned());

        let rendered = explanation.to_string();
        let lines = rendered.lines().collect::<Vec<_>>();

        assert_eq!(lines[0], "root");
        assert_eq!(lines.len(), 5);
        assert!(lines[2].ends_with("child"));
        assert!(lines[3].ends_with("inner"));
        assert!(lines[4].ends_with("last"));
    }

    #[test]
    fn repeated_steps_are_collapsed() {
        let mut explanation = Explanation::default();

        explanation.step(|| "same".to_owned());
        explanation.step(|| "same".to_owned());

        assert_eq!(explanation.get_tree().leaves.len(), 1);
    }

    #[test]
    fn discarded_explanation_never_builds_steps() {
        let mut explanation = DiscardedExplanation;

        explanation.step(|| unreachable!());
        explanation.with_subexplanation(|| unreachable!(), |_| ());
    }
}
