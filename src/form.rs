//! Add/edit modal form state.
//!
//! Holds the text of each field and which one has focus.

use crate::api::{Food, FoodInput};

/// Fields of the food form, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Image,
    Name,
    Price,
    Description,
}

impl FormField {
    /// All fields in focus order.
    pub const ALL: [FormField; 4] = [
        FormField::Image,
        FormField::Name,
        FormField::Price,
        FormField::Description,
    ];

    pub fn label(self) -> &'static str {
        match self {
            FormField::Image => "Image URL",
            FormField::Name => "Dish name",
            FormField::Price => "Price",
            FormField::Description => "Description",
        }
    }

    pub fn placeholder(self) -> &'static str {
        match self {
            FormField::Image => "Paste the image link here",
            FormField::Name => "Ex: Moda Italiana",
            FormField::Price => "Ex: 19.90",
            FormField::Description => "Describe the dish",
        }
    }

    fn index(self) -> usize {
        match self {
            FormField::Image => 0,
            FormField::Name => 1,
            FormField::Price => 2,
            FormField::Description => 3,
        }
    }
}

/// Text entered in the add/edit modal.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FoodForm {
    values: [String; 4],
    focused: usize,
}

impl FoodForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Form pre-filled with an existing food.
    pub fn from_food(food: &Food) -> Self {
        let mut form = Self::new();
        form.values[FormField::Image.index()] = food.image.clone();
        form.values[FormField::Name.index()] = food.name.clone();
        form.values[FormField::Price.index()] = food.price.clone();
        form.values[FormField::Description.index()] = food.description.clone();
        form
    }

    pub fn value(&self, field: FormField) -> &str {
        &self.values[field.index()]
    }

    pub fn focused_field(&self) -> FormField {
        FormField::ALL[self.focused]
    }

    pub fn insert_char(&mut self, c: char) {
        self.values[self.focused].push(c);
    }

    pub fn delete_char(&mut self) {
        self.values[self.focused].pop();
    }

    /// Move focus to the next field, wrapping to the first.
    pub fn next_field(&mut self) {
        self.focused = (self.focused + 1) % FormField::ALL.len();
    }

    /// Move focus to the previous field, wrapping to the last.
    pub fn previous_field(&mut self) {
        self.focused = if self.focused == 0 {
            FormField::ALL.len() - 1
        } else {
            self.focused - 1
        };
    }

    /// Empty every field and focus the first one.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Trimmed field values as a `FoodInput`.
    pub fn to_input(&self) -> FoodInput {
        FoodInput {
            name: self.value(FormField::Name).trim().to_string(),
            description: self.value(FormField::Description).trim().to_string(),
            price: self.value(FormField::Price).trim().to_string(),
            image: self.value(FormField::Image).trim().to_string(),
        }
    }
}
