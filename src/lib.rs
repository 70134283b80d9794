//! Bongo Solver
//!
//! Exhaustive parallel search for the highest-scoring letter board: `N` words
//! stacked as rows so that every column is also a word, built from a limited
//! tile inventory and weighted by a grid of cell multipliers.
//!
//! # Quick Start
//!
//! ```rust
//! use bongo_solver::core::{Dictionary, LetterEntry, LetterInventory, Schema, Tile};
//! use bongo_solver::solver::{BoardEvaluator, CandidateGenerator, ParallelSearch, SearchConfig};
//!
//! // A 2x2 puzzle: three A tiles worth 2, two B tiles worth 3, one wildcard
//! let inventory = LetterInventory::new([
//!     LetterEntry::new(Tile::Letter(b'A'), 3, 2),
//!     LetterEntry::new(Tile::Letter(b'B'), 2, 3),
//!     LetterEntry::new(Tile::Wildcard, 1, 0),
//! ])
//! .unwrap();
//! let schema = Schema::<2>::new(&[vec![1, 2], vec![2, 1]]).unwrap();
//! let dictionary = Dictionary::<2>::from_strs(&["AB", "BA", "AA"]);
//!
//! let pool = CandidateGenerator::new(&inventory).generate(&dictionary);
//! let evaluator = BoardEvaluator::new(&inventory, &schema, &dictionary);
//! let report = ParallelSearch::new(evaluator, &pool, SearchConfig::default())
//!     .unwrap()
//!     .run()
//!     .unwrap();
//!
//! let best = report.best.unwrap();
//! assert_eq!(best.score, 16);
//! assert_eq!(best.board.row_strings(), ["AB", "BA"]);
//! ```

// Core domain types
pub mod core;

// Search pipeline
pub mod solver;

// Puzzle configuration
pub mod config;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
