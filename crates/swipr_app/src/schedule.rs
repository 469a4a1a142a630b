use chrono::{Days, NaiveDate};

use swipr_core::Recipe;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannedMeal {
    pub emoji: String,
    pub name: String,
    pub time: String,
    pub day: String,
}

/// Assigns accepted recipes to consecutive days starting today, in the
/// order they were accepted: "Today", "Tomorrow", then weekday names.
pub fn meal_plan(accepted: &[Recipe], today: NaiveDate) -> Vec<PlannedMeal> {
    accepted
        .iter()
        .enumerate()
        .map(|(offset, recipe)| PlannedMeal {
            emoji: recipe.emoji.clone(),
            name: recipe.title.clone(),
            time: recipe.time.clone(),
            day: day_label(today, offset as u64),
        })
        .collect()
}

fn day_label(today: NaiveDate, offset: u64) -> String {
    match offset {
        0 => "Today".to_string(),
        1 => "Tomorrow".to_string(),
        _ => today
            .checked_add_days(Days::new(offset))
            .map(|date| date.format("%A").to_string())
            .unwrap_or_else(|| format!("Day {}", offset + 1)),
    }
}
