//! catcorr: Categorical Association Library
//!
//! Pairwise association strength between categorical features
//! (Cramer's V, Tschuprow's T, Pearson contingency coefficient and
//! Theil's U) and extraction of highly associated feature groups.

pub mod cli;
pub mod pipeline;
pub mod report;
pub mod utils;
