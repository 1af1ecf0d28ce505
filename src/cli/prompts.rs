//! Interactive prompts using dialoguer

use anyhow::Result;
use dialoguer::{MultiSelect, Select};

use crate::pipeline::AssociationMethod;

/// Prompt the user to pick an association method
pub fn select_method() -> Result<AssociationMethod> {
    let items: Vec<&str> = AssociationMethod::ALL
        .iter()
        .map(|m| m.display_name())
        .collect();

    let index = Select::new()
        .with_prompt("Association method")
        .items(&items)
        .default(0)
        .interact()?;

    Ok(AssociationMethod::ALL[index])
}

/// Prompt the user to pick the features to analyze (all pre-selected)
pub fn select_features(columns: &[String]) -> Result<Vec<String>> {
    let defaults = vec![true; columns.len()];

    let chosen = MultiSelect::new()
        .with_prompt("Features to analyze (space to toggle, enter to confirm)")
        .items(columns)
        .defaults(&defaults)
        .interact()?;

    Ok(chosen.into_iter().map(|i| columns[i].clone()).collect())
}
