//! Truth tables and principal normal forms of propositional formulas.
//!
//! An expression such as `A & B -> ~C` goes through a fixed pipeline:
//! [`tokenizer`], [`postfix`] (shunting-yard), [`evaluate`] once per row of the
//! [`truth_table`], and finally [`normal_forms`]. [`analyze`] runs all of it.

pub mod analysis;
pub mod error;
pub mod evaluate;
pub mod explanation;
pub mod markdown;
pub mod normal_forms;
pub mod operator;
pub mod postfix;
pub mod tokenizer;
pub mod truth_table;
pub mod types;

pub use analysis::{analyze, analyze_explained, Analysis};
pub use error::Error;
