//! Failure kinds of the nomenclature workflow

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum NomenclatureError {
    #[error("Reference table must contain: {}", .required.join(", "))]
    MissingColumns {
        required: Vec<String>,
        missing: Vec<String>,
    },

    #[error("No Tag Summary sheet found")]
    NoTagSummarySheet,

    #[error("Could not extract {key}-{value} pairs from sheet '{sheet}'")]
    EmptyExtraction {
        sheet: String,
        key: String,
        value: String,
    },

    #[error("No sheet found for equipment '{0}'")]
    MissingSheet(String),

    #[error("Please select at least one equipment")]
    NoEquipmentSelected,

    #[error("Please enter asset numbers for all selected equipments (missing: {})", .0.join(", "))]
    MissingAsset(Vec<String>),

    #[error("No nomenclatures generated. Please check selections and sheet contents.")]
    NoResults,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        let err = NomenclatureError::MissingAsset(vec!["AHU".to_string(), "FCU".to_string()]);
        assert_eq!(
            err.to_string(),
            "Please enter asset numbers for all selected equipments (missing: AHU, FCU)"
        );

        let err = NomenclatureError::EmptyExtraction {
            sheet: "Tag Summary".to_string(),
            key: "Term".to_string(),
            value: "Abbreviation".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Could not extract Term-Abbreviation pairs from sheet 'Tag Summary'"
        );
    }
}
