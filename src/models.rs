use diesel::prelude::*;
use serde::{Deserialize, Serialize};

use crate::schema::food_nutrition;

pub(crate) const VEG: &str = "Veg";
pub(crate) const NON_VEG: &str = "Non-Veg";

/// A row of `food_nutrition`. Nutrition values are free-form text as stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Queryable, Selectable)]
#[diesel(table_name = food_nutrition)]
#[diesel(check_for_backend(diesel::mysql::Mysql))]
pub(crate) struct NutritionRecord {
    pub id: i32,
    pub name: Option<String>,
    pub category: Option<String>,
    pub image_url: Option<String>,
    pub calories: Option<String>,
    pub protein: Option<String>,
    pub total_fat: Option<String>,
    pub saturated_fat: Option<String>,
    pub monounsaturated_fat: Option<String>,
    pub polyunsaturated_fat: Option<String>,
    pub cholesterol: Option<String>,
    pub sodium: Option<String>,
    pub potassium: Option<String>,
    pub carbohydrates: Option<String>,
    pub dietary_fiber: Option<String>,
    pub sugars: Option<String>,
}

#[derive(Debug, Insertable)]
#[diesel(table_name = food_nutrition)]
pub(crate) struct NewNutritionRecord<'a> {
    pub name: &'a str,
}
