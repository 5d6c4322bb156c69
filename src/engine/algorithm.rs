//! Algorithm identifiers and the dispatch table
//!
//! [`Algorithm`] is a closed set of 17 variants. [`TABLE`] maps each one to its
//! names, its instrumented implementation and its uninstrumented benchmark
//! twin. Lookups index the table by discriminant, so the table order must
//! follow the enum order.

use crate::benchmark::bare;
use crate::engine::algorithms::{self, MAX_PIGEONHOLE_SPAN};
use crate::engine::checkpoint::{Checkpoint, Flow};
use crate::engine::errors::SortError;
use crate::sequence::{first_negative, Element};
use std::fmt;
use std::str::FromStr;

/// Instrumented algorithm: reports through the checkpoint and can pause
pub type Instrumented = fn(&mut [Element], &mut Checkpoint<'_>) -> Flow;

/// Uninstrumented twin used for timing estimates
pub type Bare = fn(&mut [Element]);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Algorithm {
    Bubble,
    Selection,
    Insertion,
    Merge,
    Shell,
    CocktailShaker,
    Quick,
    Heap,
    Radix,
    Gnome,
    OddEven,
    DoubleSelection,
    Cycle,
    Pigeonhole,
    Comb,
    Pancake,
    Bogo,
}

/// One row of the dispatch table
pub struct Entry {
    pub algorithm: Algorithm,
    /// Identifier, e.g. `bubble_sort`
    pub name: &'static str,
    /// Display title, e.g. `Bubble Sort`
    pub title: &'static str,
    pub run: Instrumented,
    /// `None` when a timing estimate is meaningless (bogo sort)
    pub bare: Option<Bare>,
}

pub const TABLE: [Entry; 17] = [
    Entry {
        algorithm: Algorithm::Bubble,
        name: "bubble_sort",
        title: "Bubble Sort",
        run: algorithms::bubble,
        bare: Some(bare::bubble),
    },
    Entry {
        algorithm: Algorithm::Selection,
        name: "selection_sort",
        title: "Selection Sort",
        run: algorithms::selection,
        bare: Some(bare::selection),
    },
    Entry {
        algorithm: Algorithm::Insertion,
        name: "insertion_sort",
        title: "Insertion Sort",
        run: algorithms::insertion,
        bare: Some(bare::insertion),
    },
    Entry {
        algorithm: Algorithm::Merge,
        name: "merge_sort",
        title: "Merge Sort",
        run: algorithms::merge,
        bare: Some(bare::merge),
    },
    Entry {
        algorithm: Algorithm::Shell,
        name: "shell_sort",
        title: "Shell Sort",
        run: algorithms::shell,
        bare: Some(bare::shell),
    },
    Entry {
        algorithm: Algorithm::CocktailShaker,
        name: "cocktail_shaker_sort",
        title: "Cocktail Shaker Sort",
        run: algorithms::cocktail_shaker,
        bare: Some(bare::cocktail_shaker),
    },
    Entry {
        algorithm: Algorithm::Quick,
        name: "quick_sort",
        title: "Quick Sort",
        run: algorithms::quick,
        bare: Some(bare::quick),
    },
    Entry {
        algorithm: Algorithm::Heap,
        name: "heap_sort",
        title: "Heap Sort",
        run: algorithms::heap,
        bare: Some(bare::heap),
    },
    Entry {
        algorithm: Algorithm::Radix,
        name: "radix_sort",
        title: "Radix Sort",
        run: algorithms::radix,
        bare: Some(bare::radix),
    },
    Entry {
        algorithm: Algorithm::Gnome,
        name: "gnome_sort",
        title: "Gnome Sort",
        run: algorithms::gnome,
        bare: Some(bare::gnome),
    },
    Entry {
        algorithm: Algorithm::OddEven,
        name: "odd_even_sort",
        title: "Odd-Even Sort",
        run: algorithms::odd_even,
        bare: Some(bare::odd_even),
    },
    Entry {
        algorithm: Algorithm::DoubleSelection,
        name: "double_selection_sort",
        title: "Double Selection Sort",
        run: algorithms::double_selection,
        bare: Some(bare::double_selection),
    },
    Entry {
        algorithm: Algorithm::Cycle,
        name: "cycle_sort",
        title: "Cycle Sort",
        run: algorithms::cycle,
        bare: Some(bare::cycle),
    },
    Entry {
        algorithm: Algorithm::Pigeonhole,
        name: "pigeonhole_sort",
        title: "Pigeonhole Sort",
        run: algorithms::pigeonhole,
        bare: Some(bare::pigeonhole),
    },
    Entry {
        algorithm: Algorithm::Comb,
        name: "comb_sort",
        title: "Comb Sort",
        run: algorithms::comb,
        bare: Some(bare::comb),
    },
    Entry {
        algorithm: Algorithm::Pancake,
        name: "pancake_sort",
        title: "Pancake Sort",
        run: algorithms::pancake,
        bare: Some(bare::pancake),
    },
    Entry {
        algorithm: Algorithm::Bogo,
        name: "bogo_sort",
        title: "Bogo Sort",
        run: algorithms::bogo,
        bare: None,
    },
];

impl Algorithm {
    pub const ALL: [Algorithm; 17] = [
        Algorithm::Bubble,
        Algorithm::Selection,
        Algorithm::Insertion,
        Algorithm::Merge,
        Algorithm::Shell,
        Algorithm::CocktailShaker,
        Algorithm::Quick,
        Algorithm::Heap,
        Algorithm::Radix,
        Algorithm::Gnome,
        Algorithm::OddEven,
        Algorithm::DoubleSelection,
        Algorithm::Cycle,
        Algorithm::Pigeonhole,
        Algorithm::Comb,
        Algorithm::Pancake,
        Algorithm::Bogo,
    ];

    pub fn entry(self) -> &'static Entry {
        &TABLE[self as usize]
    }

    pub fn name(self) -> &'static str {
        self.entry().name
    }

    pub fn title(self) -> &'static str {
        self.entry().title
    }

    /// Whether the same input always produces the same event stream
    pub fn is_deterministic(self) -> bool {
        self != Algorithm::Bogo
    }

    /// Reject input this algorithm cannot sort, before anything is mutated
    pub fn check(self, seq: &[Element]) -> Result<(), SortError> {
        if matches!(self, Algorithm::Radix | Algorithm::Pigeonhole) {
            if let Some((index, value)) = first_negative(seq) {
                return Err(SortError::NegativeElement {
                    algorithm: self,
                    index,
                    value,
                });
            }
        }
        if self == Algorithm::Pigeonhole {
            if let (Some(&min), Some(&max)) = (seq.iter().min(), seq.iter().max()) {
                let span = max.abs_diff(min) + 1;
                if span > MAX_PIGEONHOLE_SPAN {
                    return Err(SortError::SpanTooWide {
                        span,
                        limit: MAX_PIGEONHOLE_SPAN,
                    });
                }
            }
        }
        Ok(())
    }

    /// Run the instrumented implementation
    pub fn run(self, seq: &mut [Element], cp: &mut Checkpoint<'_>) -> Flow {
        (self.entry().run)(seq, cp)
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

impl FromStr for Algorithm {
    type Err = SortError;

    /// Accepts `bubble_sort`, `bubble`, `Bubble Sort`, `odd-even` and so on
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_ascii_lowercase().replace(['-', ' '], "_");
        TABLE
            .iter()
            .find(|entry| entry.name == key || entry.name.strip_suffix("_sort") == Some(key.as_str()))
            .map(|entry| entry.algorithm)
            .ok_or_else(|| SortError::UnknownAlgorithm(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_order_matches_discriminants() {
        for (i, entry) in TABLE.iter().enumerate() {
            assert_eq!(entry.algorithm as usize, i, "{} out of place", entry.name);
            assert_eq!(Algorithm::ALL[i], entry.algorithm);
        }
    }

    #[test]
    fn test_parse_names() {
        assert_eq!("bubble_sort".parse::<Algorithm>(), Ok(Algorithm::Bubble));
        assert_eq!("quick".parse::<Algorithm>(), Ok(Algorithm::Quick));
        assert_eq!("Odd-Even".parse::<Algorithm>(), Ok(Algorithm::OddEven));
        assert_eq!("Cocktail Shaker Sort".parse::<Algorithm>(), Ok(Algorithm::CocktailShaker));
        assert_eq!(
            "stooge".parse::<Algorithm>(),
            Err(SortError::UnknownAlgorithm("stooge".to_string()))
        );
    }

    #[test]
    fn test_names_round_trip() {
        for algorithm in Algorithm::ALL {
            assert_eq!(algorithm.name().parse::<Algorithm>(), Ok(algorithm));
        }
    }

    #[test]
    fn test_check_rejects_negative_for_value_indexed_sorts() {
        let seq = [4, -1, 2];
        assert!(matches!(
            Algorithm::Radix.check(&seq),
            Err(SortError::NegativeElement { index: 1, value: -1, .. })
        ));
        assert!(matches!(
            Algorithm::Pigeonhole.check(&seq),
            Err(SortError::NegativeElement { index: 1, .. })
        ));
        assert!(Algorithm::Quick.check(&seq).is_ok());
    }

    #[test]
    fn test_check_rejects_wide_pigeonhole_span() {
        let seq = [0, MAX_PIGEONHOLE_SPAN as Element];
        assert!(matches!(
            Algorithm::Pigeonhole.check(&seq),
            Err(SortError::SpanTooWide { .. })
        ));
        assert!(Algorithm::Radix.check(&seq).is_ok());
    }

    #[test]
    fn test_only_bogo_lacks_a_benchmark_twin() {
        for entry in TABLE.iter() {
            assert_eq!(entry.bare.is_none(), entry.algorithm == Algorithm::Bogo);
        }
    }
}
