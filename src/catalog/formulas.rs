//! Derivative formula catalog
//!
//! A fixed table of differentiation rules grouped by category. Table order
//! is display order, for categories and for entries within a category.

use serde::Serialize;

/// One formula card
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FormulaEntry {
    pub category: &'static str,
    pub name: &'static str,
    /// Plain text or LaTeX markup
    pub formula: &'static str,
    pub example: &'static str,
}

impl FormulaEntry {
    const fn new(
        category: &'static str,
        name: &'static str,
        formula: &'static str,
        example: &'static str,
    ) -> Self {
        Self {
            category,
            name,
            formula,
            example,
        }
    }

    /// Whether the formula is LaTeX rather than plain text
    pub fn is_latex(&self) -> bool {
        self.formula.contains('\\')
    }
}

const FORMULAS: &[FormulaEntry] = &[
    FormulaEntry::new("Basic", "Power Rule", "d/dx(x^n) = n*x^(n-1)", "d/dx(x^3) = 3x^2"),
    FormulaEntry::new("Basic", "Constant", "d/dx(C) = 0", "d/dx(5) = 0"),
    FormulaEntry::new("Basic", "Linear", "d/dx(kx) = k", "d/dx(3x) = 3"),
    FormulaEntry::new("Trigonometric", "Sine", "d/dx(sin x) = cos x", "d/dx(sin 2x) = 2cos 2x"),
    FormulaEntry::new("Trigonometric", "Cosine", "d/dx(cos x) = -sin x", "d/dx(cos 3x) = -3sin 3x"),
    FormulaEntry::new("Trigonometric", "Tangent", "d/dx(tan x) = sec^2 x", "d/dx(tan x^2) = 2x sec^2(x^2)"),
    FormulaEntry::new("Exponential", "e^x", "d/dx(e^x) = e^x", "d/dx(e^2x) = 2e^2x"),
    FormulaEntry::new("Exponential", "a^x", "d/dx(a^x) = a^x * ln a", "d/dx(2^x) = 2^x * ln 2"),
    FormulaEntry::new("Logarithmic", "ln x", "d/dx(ln x) = 1/x", "d/dx(ln 2x) = 1/x"),
    FormulaEntry::new("Logarithmic", "log_a x", "d/dx(log_a x) = 1/(x * ln a)", "d/dx(log_2 x) = 1/(x * ln 2)"),
    FormulaEntry::new(
        "Inverse Trig",
        "arcsin",
        r"\frac{d}{dx}(\arcsin x) = \frac{1}{\sqrt{1-x^2}}",
        r"\frac{d}{dx}(\arcsin 2x) = \frac{2}{\sqrt{1-4x^2}}",
    ),
    FormulaEntry::new(
        "Inverse Trig",
        "arccos",
        r"\frac{d}{dx}(\arccos x) = -\frac{1}{\sqrt{1-x^2}}",
        r"\frac{d}{dx}(\arccos x^2) = -\frac{2x}{\sqrt{1-x^4}}",
    ),
    FormulaEntry::new(
        "Inverse Trig",
        "arctan",
        r"\frac{d}{dx}(\arctan x) = \frac{1}{1+x^2}",
        r"\frac{d}{dx}(\arctan 3x) = \frac{3}{1+9x^2}",
    ),
    FormulaEntry::new(
        "Inverse Trig",
        "arccot",
        r"\frac{d}{dx}(\arccot x) = -\frac{1}{1+x^2}",
        r"\frac{d}{dx}(\arccot \frac{x}{2}) = -\frac{1}{2(1+\frac{x^2}{4})}",
    ),
    FormulaEntry::new("Rules", "Sum Rule", "d/dx(f +/- g) = f' +/- g'", "d/dx(x^2 + sin x) = 2x + cos x"),
    FormulaEntry::new("Rules", "Product Rule", "d/dx(fg) = f'g + fg'", "d/dx(x * sin x) = sin x + x cos x"),
    FormulaEntry::new("Rules", "Quotient Rule", "d/dx(f/g) = (f'g - fg')/g^2", "d/dx(sin x / x) = (x cos x - sin x)/x^2"),
    FormulaEntry::new("Rules", "Chain Rule", "d/dx(f(g(x))) = f'(g) * g'(x)", "d/dx(sin(x^2)) = cos(x^2) * 2x"),
];

/// Read-only view over the formula table
#[derive(Debug, Clone, Copy)]
pub struct FormulaCatalog {
    entries: &'static [FormulaEntry],
}

impl Default for FormulaCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}

impl FormulaCatalog {
    /// The built-in calculus table
    pub fn builtin() -> Self {
        Self { entries: FORMULAS }
    }

    /// A catalog over any static table (entries of a category must be contiguous)
    pub fn from_entries(entries: &'static [FormulaEntry]) -> Self {
        Self { entries }
    }

    /// Categories in display order
    pub fn categories(&self) -> Vec<&'static str> {
        let mut categories: Vec<&'static str> = Vec::new();
        for entry in self.entries {
            if !categories.contains(&entry.category) {
                categories.push(entry.category);
            }
        }
        categories
    }

    /// Entries of one category in display order; empty for unknown categories
    pub fn entries_in(&self, category: &str) -> Vec<&'static FormulaEntry> {
        self.entries
            .iter()
            .filter(|e| e.category == category)
            .collect()
    }

    pub fn get(&self, category: &str, name: &str) -> Option<&'static FormulaEntry> {
        self.entries
            .iter()
            .find(|e| e.category == category && e.name == name)
    }

    pub fn all(&self) -> &'static [FormulaEntry] {
        self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_order() {
        assert_eq!(
            FormulaCatalog::builtin().categories(),
            vec!["Basic", "Trigonometric", "Exponential", "Logarithmic", "Inverse Trig", "Rules"]
        );
    }

    #[test]
    fn test_entry_order_within_category() {
        let names: Vec<&str> = FormulaCatalog::builtin()
            .entries_in("Rules")
            .iter()
            .map(|e| e.name)
            .collect();
        assert_eq!(names, vec!["Sum Rule", "Product Rule", "Quotient Rule", "Chain Rule"]);
    }

    #[test]
    fn test_counts() {
        let catalog = FormulaCatalog::builtin();
        assert_eq!(catalog.len(), 18);
        assert_eq!(catalog.entries_in("Inverse Trig").len(), 4);
        assert!(catalog.entries_in("Integrals").is_empty());
    }

    #[test]
    fn test_get() {
        let catalog = FormulaCatalog::builtin();
        let entry = catalog.get("Exponential", "a^x").unwrap();
        assert_eq!(entry.formula, "d/dx(a^x) = a^x * ln a");
        assert_eq!(entry.example, "d/dx(2^x) = 2^x * ln 2");
        assert!(!entry.is_latex());

        assert!(catalog.get("Inverse Trig", "arcsin").unwrap().is_latex());
        assert!(catalog.get("Basic", "arcsin").is_none());
    }

    #[test]
    fn test_categories_are_contiguous() {
        let catalog = FormulaCatalog::builtin();
        let mut seen: Vec<&str> = Vec::new();
        for pair in catalog.all().windows(2) {
            if pair[0].category != pair[1].category {
                seen.push(pair[0].category);
                assert!(!seen.contains(&pair[1].category));
            }
        }
    }
}
