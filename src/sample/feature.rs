//! Column storage for [`Sample`](crate::Sample).

use serde::{Serialize, Deserialize};

use std::ops::Index;


/// A single column of a sample.
/// Numeric columns store their values directly;
/// categorical columns store integer codes
/// (assigned in first-appearance order) together with the code names.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Feature {
    /// A column of real values.
    Numeric(NumericFeature),
    /// A column of category codes.
    Categorical(CategoricalFeature),
}


/// A column of real values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NumericFeature {
    pub(super) name: String,
    pub(super) values: Vec<f64>,
}


/// A column of category codes with their names.
/// `values[i] as usize` indexes into `categories`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoricalFeature {
    pub(super) name: String,
    pub(super) values: Vec<f64>,
    pub(super) categories: Vec<String>,
}


impl Feature {
    /// Returns the column name.
    pub fn name(&self) -> &str {
        match self {
            Self::Numeric(feat) => &feat.name,
            Self::Categorical(feat) => &feat.name,
        }
    }


    /// Returns the number of rows in this column.
    pub fn len(&self) -> usize {
        match self {
            Self::Numeric(feat) => feat.values.len(),
            Self::Categorical(feat) => feat.values.len(),
        }
    }


    /// Returns `true` when the column has no rows.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }


    /// Returns `true` for categorical columns.
    pub fn is_categorical(&self) -> bool {
        matches!(self, Self::Categorical(_))
    }


    /// Returns the name of the category encoded as `code`, if any.
    /// Numeric columns have no categories.
    pub fn category_name(&self, code: i64) -> Option<&str> {
        match self {
            Self::Numeric(_) => None,
            Self::Categorical(feat) => {
                usize::try_from(code)
                    .ok()
                    .and_then(|k| feat.categories.get(k))
                    .map(String::as_str)
            },
        }
    }


    /// Keep only the rows listed in `indices`, in that order.
    /// Rows may repeat; this is how bootstrap copies are built.
    pub(super) fn take_rows(&self, indices: &[usize]) -> Self {
        let pick = |values: &[f64]| {
            indices.iter().map(|&i| values[i]).collect::<Vec<_>>()
        };
        match self {
            Self::Numeric(feat) => {
                Self::Numeric(NumericFeature {
                    name: feat.name.clone(),
                    values: pick(&feat.values),
                })
            },
            Self::Categorical(feat) => {
                Self::Categorical(CategoricalFeature {
                    name: feat.name.clone(),
                    values: pick(&feat.values),
                    categories: feat.categories.clone(),
                })
            },
        }
    }
}


impl Index<usize> for Feature {
    type Output = f64;

    fn index(&self, row: usize) -> &Self::Output {
        match self {
            Self::Numeric(feat) => &feat.values[row],
            Self::Categorical(feat) => &feat.values[row],
        }
    }
}


/// Builds one column from raw CSV cells:
/// numeric when every cell parses as `f64`,
/// categorical (with codes in first-appearance order) otherwise.
pub(super) fn from_raw_column(name: String, cells: Vec<String>) -> Feature {
    let parsed = cells.iter()
        .map(|cell| cell.trim().parse::<f64>())
        .collect::<Result<Vec<f64>, _>>();

    match parsed {
        Ok(values) => Feature::Numeric(NumericFeature { name, values }),
        Err(_) => {
            let mut categories = Vec::new();
            let values = cells.into_iter()
                .map(|cell| {
                    let cell = cell.trim();
                    let code = categories.iter()
                        .position(|c| c == cell)
                        .unwrap_or_else(|| {
                            categories.push(cell.to_string());
                            categories.len() - 1
                        });
                    code as f64
                })
                .collect();
            Feature::Categorical(
                CategoricalFeature { name, values, categories }
            )
        },
    }
}
