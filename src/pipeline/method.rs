//! Association method selector

use serde::Serialize;

use super::error::AssociationError;

/// Association metric used to build the matrix.
///
/// The first three are symmetric, contingency-table based statistics.
/// `Theil` is the directional uncertainty coefficient.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AssociationMethod {
    /// Cramer's V
    #[default]
    Cramer,
    /// Tschuprow's T
    Tschuprow,
    /// Pearson contingency coefficient
    Pearson,
    /// Theil's U (asymmetric)
    Theil,
}

impl AssociationMethod {
    /// All methods, in the order they are offered to the user.
    pub const ALL: [AssociationMethod; 4] = [
        AssociationMethod::Cramer,
        AssociationMethod::Tschuprow,
        AssociationMethod::Pearson,
        AssociationMethod::Theil,
    ];

    pub fn is_symmetric(&self) -> bool {
        !matches!(self, AssociationMethod::Theil)
    }

    /// Human readable name for reports and prompts
    pub fn display_name(&self) -> &'static str {
        match self {
            AssociationMethod::Cramer => "Cramer's V",
            AssociationMethod::Tschuprow => "Tschuprow's T",
            AssociationMethod::Pearson => "Pearson contingency coefficient",
            AssociationMethod::Theil => "Theil's U (asymmetric)",
        }
    }
}

impl std::fmt::Display for AssociationMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AssociationMethod::Cramer => write!(f, "cramer"),
            AssociationMethod::Tschuprow => write!(f, "tschuprow"),
            AssociationMethod::Pearson => write!(f, "pearson"),
            AssociationMethod::Theil => write!(f, "theil"),
        }
    }
}

impl std::str::FromStr for AssociationMethod {
    type Err = AssociationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "cramer" => Ok(AssociationMethod::Cramer),
            "tschuprow" => Ok(AssociationMethod::Tschuprow),
            "pearson" => Ok(AssociationMethod::Pearson),
            "theil" => Ok(AssociationMethod::Theil),
            _ => Err(AssociationError::UnknownMethod(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_method_from_str() {
        assert_eq!("cramer".parse::<AssociationMethod>().unwrap(), AssociationMethod::Cramer);
        assert_eq!(
            "tschuprow".parse::<AssociationMethod>().unwrap(),
            AssociationMethod::Tschuprow
        );
        assert_eq!("pearson".parse::<AssociationMethod>().unwrap(), AssociationMethod::Pearson);
        assert_eq!("THEIL".parse::<AssociationMethod>().unwrap(), AssociationMethod::Theil);
    }

    #[test]
    fn test_unknown_method_is_rejected() {
        let err = "spearman".parse::<AssociationMethod>().unwrap_err();
        assert!(matches!(err, AssociationError::UnknownMethod(ref m) if m == "spearman"));
        assert!(err.is_invalid_argument());
    }

    #[test]
    fn test_method_display_round_trips() {
        for method in AssociationMethod::ALL {
            assert_eq!(method.to_string().parse::<AssociationMethod>().unwrap(), method);
        }
    }

    #[test]
    fn test_only_theil_is_asymmetric() {
        assert!(AssociationMethod::Cramer.is_symmetric());
        assert!(AssociationMethod::Tschuprow.is_symmetric());
        assert!(AssociationMethod::Pearson.is_symmetric());
        assert!(!AssociationMethod::Theil.is_symmetric());
    }
}
