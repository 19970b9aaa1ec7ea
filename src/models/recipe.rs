// ABOUTME: Recipe domain model with embedded ingredients and the closed unit enumeration
// ABOUTME: Defines wire request types, the list projection, and storage-independent validation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Julia Kitchen Project

//! Recipe documents
//!
//! A recipe owns an ordered list of free-text directions and an ordered list
//! of embedded ingredient entries. Ingredients have no lifecycle outside
//! their parent; each entry still receives its own [`DocumentId`] so it is
//! addressable within the parent's list.
//!
//! Validation is decoupled from storage: the request types validate
//! themselves into drafts/patches that the store persists without
//! re-checking.

use crate::errors::{FieldError, ValidationErrors};
use crate::models::document::{DocumentId, Revision};
use serde::{Deserialize, Serialize};

/// Measurement unit for an ingredient amount
///
/// Closed set; the wire strings are fixed and anything else is rejected at
/// validation time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Unit {
    #[serde(rename = "tsp")]
    Teaspoon,
    #[serde(rename = "tbsp")]
    Tablespoon,
    #[serde(rename = "cup")]
    Cup,
    #[serde(rename = "pinch")]
    Pinch,
    #[serde(rename = "oz")]
    Ounce,
    #[serde(rename = "pt")]
    Pint,
    #[serde(rename = "qt")]
    Quart,
    #[serde(rename = "gal")]
    Gallon,
    #[serde(rename = "fl oz")]
    FluidOunce,
}

impl Unit {
    /// Every accepted unit, in canonical order
    pub const ALL: [Self; 9] = [
        Self::Teaspoon,
        Self::Tablespoon,
        Self::Cup,
        Self::Pinch,
        Self::Ounce,
        Self::Pint,
        Self::Quart,
        Self::Gallon,
        Self::FluidOunce,
    ];

    /// Wire string representation
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Teaspoon => "tsp",
            Self::Tablespoon => "tbsp",
            Self::Cup => "cup",
            Self::Pinch => "pinch",
            Self::Ounce => "oz",
            Self::Pint => "pt",
            Self::Quart => "qt",
            Self::Gallon => "gal",
            Self::FluidOunce => "fl oz",
        }
    }

    /// Parse a wire string; `None` for anything outside the enumeration
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|unit| unit.as_str() == s)
    }

    fn allowed_values() -> String {
        Self::ALL
            .iter()
            .map(|unit| unit.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// An ingredient entry embedded in a recipe
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ingredient {
    /// Identifier for addressing this entry within the parent's list
    pub id: DocumentId,
    /// Name of the substance
    pub ingredient: String,
    /// Numeric quantity
    pub amount: f64,
    /// Measurement unit
    pub unit: Unit,
}

/// A stored recipe document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    /// Unique identifier, assigned by the store on creation
    pub id: DocumentId,
    /// Monotonic update counter, observable but never compared
    pub revision: Revision,
    /// Display name
    pub name: String,
    /// Ordered free-text preparation steps
    pub directions: Vec<String>,
    /// Ordered ingredient entries
    pub ingredients: Vec<Ingredient>,
}

impl Recipe {
    /// Merge a validated patch into this document
    ///
    /// Only supplied fields change; omitted fields keep their prior values.
    /// The revision counter is bumped by the store, not here.
    pub fn apply_patch(&mut self, patch: RecipePatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(directions) = patch.directions {
            self.directions = directions;
        }
        if let Some(ingredients) = patch.ingredients {
            self.ingredients = ingredients;
        }
    }
}

/// Summary projection returned by the list operation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeSummary {
    /// Unique identifier
    pub id: DocumentId,
    /// Display name
    pub name: String,
}

/// One ingredient entry as supplied by a client
///
/// All fields are optional at the type level so that presence and value
/// checks produce field-naming validation errors instead of opaque JSON
/// rejections.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IngredientInput {
    /// Name of the substance
    pub ingredient: Option<String>,
    /// Numeric quantity
    pub amount: Option<f64>,
    /// Measurement unit as text, checked against [`Unit`]
    pub unit: Option<String>,
}

impl IngredientInput {
    /// Validate one entry, collecting errors under `ingredients[index].*`
    ///
    /// Returns the validated ingredient with a freshly assigned entry id
    /// when every field passes.
    fn validate(&self, index: usize, errors: &mut ValidationErrors) -> Option<Ingredient> {
        let mut ok = true;

        match self.ingredient.as_deref().map(str::trim) {
            None => {
                errors.push(FieldError::missing(format!(
                    "ingredients[{index}].ingredient"
                )));
                ok = false;
            }
            Some("") => {
                errors.push(FieldError::invalid(
                    format!("ingredients[{index}].ingredient"),
                    "must not be empty",
                ));
                ok = false;
            }
            Some(_) => {}
        }

        if self.amount.is_none() {
            errors.push(FieldError::missing(format!("ingredients[{index}].amount")));
            ok = false;
        }

        let unit = match self.unit.as_deref() {
            None => {
                errors.push(FieldError::missing(format!("ingredients[{index}].unit")));
                ok = false;
                None
            }
            Some(raw) => {
                let unit = Unit::parse(raw);
                if unit.is_none() {
                    errors.push(FieldError::invalid(
                        format!("ingredients[{index}].unit"),
                        format!("must be one of: {}", Unit::allowed_values()),
                    ));
                    ok = false;
                }
                unit
            }
        };

        if !ok {
            return None;
        }

        Some(Ingredient {
            id: DocumentId::new(),
            ingredient: self.ingredient.clone().unwrap_or_default().trim().to_owned(),
            amount: self.amount.unwrap_or_default(),
            unit: unit.unwrap_or(Unit::Pinch),
        })
    }
}

/// Validated recipe content, ready for the store to persist
#[derive(Debug, Clone)]
pub struct RecipeDraft {
    /// Display name
    pub name: String,
    /// Ordered free-text preparation steps
    pub directions: Vec<String>,
    /// Ordered ingredient entries, ids already assigned
    pub ingredients: Vec<Ingredient>,
}

/// Validated partial update; `None` fields stay untouched
#[derive(Debug, Clone, Default)]
pub struct RecipePatch {
    /// Replacement name
    pub name: Option<String>,
    /// Replacement directions
    pub directions: Option<Vec<String>>,
    /// Replacement ingredient entries, ids already assigned
    pub ingredients: Option<Vec<Ingredient>>,
}

/// Request body for creating a recipe
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateRecipeRequest {
    /// Display name (required)
    pub name: Option<String>,
    /// Preparation steps; defaults to empty
    #[serde(default)]
    pub directions: Vec<String>,
    /// Ingredient entries; defaults to empty
    #[serde(default)]
    pub ingredients: Vec<IngredientInput>,
}

impl CreateRecipeRequest {
    /// Validate the request into a persistable draft
    ///
    /// # Errors
    ///
    /// Returns every offending field when `name` is missing or empty, or any
    /// ingredient entry is missing a field or names an unknown unit.
    pub fn validate(&self) -> Result<RecipeDraft, ValidationErrors> {
        let mut errors = ValidationErrors::new();

        let name = match self.name.as_deref().map(str::trim) {
            None => {
                errors.push(FieldError::missing("name"));
                None
            }
            Some("") => {
                errors.push(FieldError::invalid("name", "must not be empty"));
                None
            }
            Some(name) => Some(name.to_owned()),
        };

        let ingredients: Vec<Ingredient> = self
            .ingredients
            .iter()
            .enumerate()
            .filter_map(|(index, input)| input.validate(index, &mut errors))
            .collect();

        if !errors.is_empty() {
            return Err(errors);
        }

        Ok(RecipeDraft {
            name: name.unwrap_or_default(),
            directions: self.directions.clone(),
            ingredients,
        })
    }
}

/// Request body for partially updating a recipe
///
/// Omitted fields keep their stored values. Stored fields are valid by
/// construction, so validating the supplied fields validates the merged
/// document.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateRecipeRequest {
    /// New display name
    pub name: Option<String>,
    /// Replacement preparation steps
    pub directions: Option<Vec<String>>,
    /// Replacement ingredient entries
    pub ingredients: Option<Vec<IngredientInput>>,
}

impl UpdateRecipeRequest {
    /// Validate the supplied fields into a patch
    ///
    /// # Errors
    ///
    /// Returns every offending field under the same rules as create.
    pub fn validate(&self) -> Result<RecipePatch, ValidationErrors> {
        let mut errors = ValidationErrors::new();

        let name = match self.name.as_deref().map(str::trim) {
            Some("") => {
                errors.push(FieldError::invalid("name", "must not be empty"));
                None
            }
            Some(name) => Some(name.to_owned()),
            None => None,
        };

        let ingredients = self.ingredients.as_ref().map(|entries| {
            entries
                .iter()
                .enumerate()
                .filter_map(|(index, input)| input.validate(index, &mut errors))
                .collect::<Vec<_>>()
        });

        if !errors.is_empty() {
            return Err(errors);
        }

        Ok(RecipePatch {
            name,
            directions: self.directions.clone(),
            ingredients,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::FieldErrorKind;

    fn salt_pinch() -> IngredientInput {
        IngredientInput {
            ingredient: Some("Salt".to_owned()),
            amount: Some(1.0),
            unit: Some("pinch".to_owned()),
        }
    }

    #[test]
    fn test_unit_parse_accepts_every_wire_string() {
        for unit in Unit::ALL {
            assert_eq!(Unit::parse(unit.as_str()), Some(unit));
        }
        assert_eq!(Unit::parse("fl oz"), Some(Unit::FluidOunce));
        assert_eq!(Unit::parse("handful"), None);
    }

    #[test]
    fn test_unit_serde_uses_wire_strings() {
        assert_eq!(
            serde_json::to_string(&Unit::FluidOunce).unwrap(),
            "\"fl oz\""
        );
        let unit: Unit = serde_json::from_str("\"tbsp\"").unwrap();
        assert_eq!(unit, Unit::Tablespoon);
    }

    #[test]
    fn test_create_requires_name() {
        let request = CreateRecipeRequest::default();
        let errors = request.validate().unwrap_err();

        assert_eq!(errors.fields().len(), 1);
        assert_eq!(errors.fields()[0].field, "name");
        assert_eq!(errors.fields()[0].kind, FieldErrorKind::Missing);
    }

    #[test]
    fn test_create_rejects_blank_name() {
        let request = CreateRecipeRequest {
            name: Some("   ".to_owned()),
            ..CreateRecipeRequest::default()
        };
        let errors = request.validate().unwrap_err();
        assert_eq!(errors.fields()[0].kind, FieldErrorKind::Invalid);
    }

    #[test]
    fn test_create_with_name_only_defaults_to_empty_sequences() {
        let request = CreateRecipeRequest {
            name: Some("cookies".to_owned()),
            ..CreateRecipeRequest::default()
        };
        let draft = request.validate().unwrap();

        assert_eq!(draft.name, "cookies");
        assert!(draft.directions.is_empty());
        assert!(draft.ingredients.is_empty());
    }

    #[test]
    fn test_create_rejects_unknown_unit_by_field_name() {
        let request = CreateRecipeRequest {
            name: Some("cookies".to_owned()),
            ingredients: vec![
                salt_pinch(),
                IngredientInput {
                    ingredient: Some("Flour".to_owned()),
                    amount: Some(2.0),
                    unit: Some("handful".to_owned()),
                },
            ],
            ..CreateRecipeRequest::default()
        };
        let errors = request.validate().unwrap_err();

        assert_eq!(errors.fields().len(), 1);
        assert_eq!(errors.fields()[0].field, "ingredients[1].unit");
        assert!(errors.fields()[0].message.contains("fl oz"));
    }

    #[test]
    fn test_create_reports_every_missing_ingredient_field() {
        let request = CreateRecipeRequest {
            name: Some("cookies".to_owned()),
            ingredients: vec![IngredientInput::default()],
            ..CreateRecipeRequest::default()
        };
        let errors = request.validate().unwrap_err();

        let fields: Vec<&str> = errors.fields().iter().map(|e| e.field.as_str()).collect();
        assert_eq!(
            fields,
            vec![
                "ingredients[0].ingredient",
                "ingredients[0].amount",
                "ingredients[0].unit"
            ]
        );
    }

    #[test]
    fn test_validated_ingredients_receive_entry_ids() {
        let request = CreateRecipeRequest {
            name: Some("cookies".to_owned()),
            ingredients: vec![salt_pinch(), salt_pinch()],
            ..CreateRecipeRequest::default()
        };
        let draft = request.validate().unwrap();

        assert_eq!(draft.ingredients.len(), 2);
        assert_ne!(draft.ingredients[0].id, draft.ingredients[1].id);
        assert_eq!(draft.ingredients[0].unit, Unit::Pinch);
    }

    #[test]
    fn test_patch_changes_only_supplied_fields() {
        let mut recipe = Recipe {
            id: DocumentId::new(),
            revision: Revision::default(),
            name: "cookies".to_owned(),
            directions: vec!["preheat oven to 375".to_owned()],
            ingredients: Vec::new(),
        };

        let patch = UpdateRecipeRequest {
            name: Some("good cookies".to_owned()),
            ..UpdateRecipeRequest::default()
        }
        .validate()
        .unwrap();
        recipe.apply_patch(patch);

        assert_eq!(recipe.name, "good cookies");
        assert_eq!(recipe.directions, vec!["preheat oven to 375".to_owned()]);
    }

    #[test]
    fn test_update_validates_supplied_ingredients() {
        let request = UpdateRecipeRequest {
            ingredients: Some(vec![IngredientInput {
                ingredient: Some("Salt".to_owned()),
                amount: None,
                unit: Some("pinch".to_owned()),
            }]),
            ..UpdateRecipeRequest::default()
        };
        let errors = request.validate().unwrap_err();
        assert_eq!(errors.fields()[0].field, "ingredients[0].amount");
    }
}
