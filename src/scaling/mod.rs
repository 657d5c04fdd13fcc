//! Quantity scaling engine
//!
//! Proportional rescaling of numbers already present in recipe text.
//! Nothing here fails: unparseable text passes through unchanged.

pub mod amount;
pub mod ingredient;
pub mod macros;

pub use amount::{format_amount, split_leading_number};
pub use ingredient::{parse_quantity, scale_ingredient_line, scale_ingredient_lines, ParsedQuantity};
pub use macros::{
    parse_macro_segment, scale_macros, MacroEntry, MacroSegment, NO_MACROS_PLACEHOLDER,
};
