/// Comparison used by a single-year constraint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Comparison {
    Less,
    Greater,
    Equal,
}

impl Comparison {
    /// Maps `<`, `>` and `=` to a comparison. Anything else has no meaning.
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        match symbol {
            "<" => Some(Comparison::Less),
            ">" => Some(Comparison::Greater),
            "=" => Some(Comparison::Equal),
            _ => None,
        }
    }
}

/// Constraint on a book's release year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum YearFilter {
    #[default]
    None,
    Single { comparison: Comparison, year: i32 },
    Range { start: i32, end: i32 },
}

impl YearFilter {
    /// Builds an inclusive range, swapping the bounds if they arrive reversed.
    pub fn range(a: i32, b: i32) -> Self {
        if a <= b {
            YearFilter::Range { start: a, end: b }
        } else {
            YearFilter::Range { start: b, end: a }
        }
    }

    /// Builds a single comparison from its textual operator.
    /// An unknown operator constrains nothing.
    pub fn single(symbol: &str, year: i32) -> Self {
        match Comparison::from_symbol(symbol) {
            Some(comparison) => YearFilter::Single { comparison, year },
            None => YearFilter::None,
        }
    }

    pub fn is_none(&self) -> bool {
        matches!(self, YearFilter::None)
    }

    pub fn matches(&self, release_year: i32) -> bool {
        match *self {
            YearFilter::None => true,
            YearFilter::Single { comparison, year } => match comparison {
                Comparison::Less => release_year < year,
                Comparison::Greater => release_year > year,
                Comparison::Equal => release_year == year,
            },
            YearFilter::Range { start, end } => start <= release_year && release_year <= end,
        }
    }
}
