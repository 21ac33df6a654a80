//! Dashboard state management.
//!
//! Holds the local copy of the food list and keeps it in sync with the
//! backend after each create, update, toggle and delete. Remote failures are
//! logged and leave the list untouched.

use crate::api::{Food, FoodApi, FoodInput};
use crate::form::FoodForm;
use chrono::{DateTime, Local};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Which part of the dashboard receives key presses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiMode {
    /// Food list
    List,
    /// "New dish" modal
    AddModal,
    /// "Edit dish" modal
    EditModal,
}

/// Main dashboard state.
///
/// Owns the food list mirrored from the backend, the modal forms and the
/// list selection.
pub struct Dashboard {
    /// Backend the list is mirrored from
    api: Box<dyn FoodApi>,
    /// Local copy of the remote food collection
    pub foods: Vec<Food>,
    /// Food opened in the edit modal
    pub editing_food: Option<Food>,
    /// Whether the add modal is open
    pub modal_open: bool,
    /// Whether the edit modal is open
    pub edit_modal_open: bool,
    /// Add modal fields
    pub add_form: FoodForm,
    /// Edit modal fields
    pub edit_form: FoodForm,
    /// Currently selected index in `foods`
    pub selected_index: usize,
    /// Time of the last successful load
    pub last_synced: Option<DateTime<Local>>,
}

impl Dashboard {
    /// Create an empty dashboard backed by `api`.
    pub fn new(api: Box<dyn FoodApi>) -> Self {
        Self {
            api,
            foods: Vec::new(),
            editing_food: None,
            modal_open: false,
            edit_modal_open: false,
            add_form: FoodForm::new(),
            edit_form: FoodForm::new(),
            selected_index: 0,
            last_synced: None,
        }
    }

    /// Current input mode, derived from the modal flags.
    pub fn mode(&self) -> UiMode {
        if self.edit_modal_open {
            UiMode::EditModal
        } else if self.modal_open {
            UiMode::AddModal
        } else {
            UiMode::List
        }
    }

    /// Fetch the whole list from the backend.
    ///
    /// # Returns
    /// * `bool` - True if the local list was replaced
    pub async fn load_foods(&mut self) -> bool {
        match self.api.list_foods().await {
            Ok(foods) => {
                tracing::info!(count = foods.len(), "loaded foods");
                self.foods = foods;
                self.last_synced = Some(Local::now());
                self.clamp_selection();
                true
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to load foods");
                false
            }
        }
    }

    /// Create a food and append the server's record.
    ///
    /// # Arguments
    /// * `input` - Fields entered in the add modal
    ///
    /// # Returns
    /// * `bool` - True if the record was appended
    pub async fn add_food(&mut self, input: FoodInput) -> bool {
        match self.api.create_food(&input).await {
            Ok(created) => {
                tracing::info!(id = created.id, name = %created.name, "food created");
                self.foods.push(created);
                true
            }
            Err(e) => {
                tracing::error!(error = %e, name = %input.name, "failed to create food");
                false
            }
        }
    }

    /// Update the food being edited and replace it with the server's record.
    ///
    /// # Arguments
    /// * `input` - Fields entered in the edit modal
    ///
    /// # Returns
    /// * `bool` - True if a local record was replaced
    ///
    /// # Details
    /// The request carries the editing food's id and availability merged
    /// with `input`. The record whose id equals the response id is replaced.
    pub async fn update_food(&mut self, input: FoodInput) -> bool {
        let Some(editing) = self.editing_food.as_ref() else {
            tracing::warn!("update requested with no food being edited");
            return false;
        };
        let food = editing.merged_with(input);

        match self.api.update_food(&food).await {
            Ok(updated) => {
                tracing::info!(id = updated.id, "food updated");
                self.replace_food(updated)
            }
            Err(e) => {
                tracing::error!(error = %e, id = food.id, "failed to update food");
                false
            }
        }
    }

    /// Delete a food and drop it from the local list.
    ///
    /// # Arguments
    /// * `id` - Identifier of the food to delete
    ///
    /// # Returns
    /// * `bool` - True if the backend accepted the delete
    pub async fn delete_food(&mut self, id: u64) -> bool {
        match self.api.delete_food(id).await {
            Ok(()) => {
                tracing::info!(id, "food deleted");
                self.foods.retain(|food| food.id != id);
                self.clamp_selection();
                true
            }
            Err(e) => {
                tracing::error!(error = %e, id, "failed to delete food");
                false
            }
        }
    }

    /// Flip a food's availability on the backend.
    ///
    /// # Arguments
    /// * `id` - Identifier of the food to toggle
    ///
    /// # Returns
    /// * `bool` - True if the local record was replaced
    pub async fn toggle_available(&mut self, id: u64) -> bool {
        let Some(food) = self.foods.iter().find(|food| food.id == id) else {
            tracing::warn!(id, "availability toggle for unknown food");
            return false;
        };
        let food = food.with_available(!food.available);

        match self.api.update_food(&food).await {
            Ok(updated) => {
                tracing::info!(id = updated.id, available = updated.available, "availability changed");
                self.replace_food(updated)
            }
            Err(e) => {
                tracing::error!(error = %e, id, "failed to change availability");
                false
            }
        }
    }

    /// Replace the local record with the same id as `updated`.
    fn replace_food(&mut self, updated: Food) -> bool {
        match self.foods.iter_mut().find(|food| food.id == updated.id) {
            Some(slot) => {
                *slot = updated;
                true
            }
            None => {
                tracing::warn!(id = updated.id, "server returned a food missing from the list");
                false
            }
        }
    }

    /// Open or close the add modal.
    pub fn toggle_modal(&mut self) {
        self.modal_open = !self.modal_open;
    }

    /// Open or close the edit modal.
    pub fn toggle_edit_modal(&mut self) {
        self.edit_modal_open = !self.edit_modal_open;
    }

    /// Open the edit modal for `food`, pre-filled with its fields.
    pub fn handle_edit_food(&mut self, food: Food) {
        self.edit_form = FoodForm::from_food(&food);
        self.editing_food = Some(food);
        self.edit_modal_open = true;
    }

    /// Submit the add modal: create the food, clear the form, close the modal.
    pub async fn submit_add_modal(&mut self) {
        let input = self.add_form.to_input();
        self.add_food(input).await;
        self.add_form.clear();
        self.toggle_modal();
    }

    /// Submit the edit modal: update the food and close the modal.
    pub async fn submit_edit_modal(&mut self) {
        let input = self.edit_form.to_input();
        self.update_food(input).await;
        self.toggle_edit_modal();
    }

    /// Form of the open modal, if any.
    pub fn active_form_mut(&mut self) -> Option<&mut FoodForm> {
        match self.mode() {
            UiMode::List => None,
            UiMode::AddModal => Some(&mut self.add_form),
            UiMode::EditModal => Some(&mut self.edit_form),
        }
    }

    /// Close whichever modal is open.
    pub fn close_modal(&mut self) {
        match self.mode() {
            UiMode::List => {}
            UiMode::AddModal => self.toggle_modal(),
            UiMode::EditModal => self.toggle_edit_modal(),
        }
    }

    /// Handle a key press on the food list.
    ///
    /// # Returns
    /// * `bool` - False when the user asked to quit
    pub async fn handle_list_key(&mut self, key: KeyEvent) -> bool {
        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => return false,
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => return false,
            KeyCode::Up | KeyCode::Char('k') => self.move_up(),
            KeyCode::Down | KeyCode::Char('j') => self.move_down(),
            KeyCode::Char('n') => self.toggle_modal(),
            KeyCode::Char('e') | KeyCode::Enter => {
                if let Some(food) = self.selected_food().cloned() {
                    self.handle_edit_food(food);
                }
            }
            KeyCode::Char('d') | KeyCode::Delete => {
                if let Some(id) = self.selected_food().map(|food| food.id) {
                    self.delete_food(id).await;
                }
            }
            KeyCode::Char('a') => {
                if let Some(id) = self.selected_food().map(|food| food.id) {
                    self.toggle_available(id).await;
                }
            }
            KeyCode::Char('r') => {
                self.load_foods().await;
            }
            _ => {}
        }
        true
    }

    /// Handle a key press while a modal is open.
    pub async fn handle_modal_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => self.close_modal(),
            KeyCode::Enter => match self.mode() {
                UiMode::AddModal => self.submit_add_modal().await,
                UiMode::EditModal => self.submit_edit_modal().await,
                UiMode::List => {}
            },
            KeyCode::Tab | KeyCode::Down => {
                if let Some(form) = self.active_form_mut() {
                    form.next_field();
                }
            }
            KeyCode::BackTab | KeyCode::Up => {
                if let Some(form) = self.active_form_mut() {
                    form.previous_field();
                }
            }
            KeyCode::Backspace => {
                if let Some(form) = self.active_form_mut() {
                    form.delete_char();
                }
            }
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                if let Some(form) = self.active_form_mut() {
                    form.insert_char(c);
                }
            }
            _ => {}
        }
    }

    /// Get the currently selected food.
    pub fn selected_food(&self) -> Option<&Food> {
        self.foods.get(self.selected_index)
    }

    /// Move selection up, wrapping to the bottom.
    pub fn move_up(&mut self) {
        if self.foods.is_empty() {
            return;
        }
        if self.selected_index == 0 {
            self.selected_index = self.foods.len() - 1;
        } else {
            self.selected_index -= 1;
        }
    }

    /// Move selection down, wrapping to the top.
    pub fn move_down(&mut self) {
        if self.foods.is_empty() {
            return;
        }
        self.selected_index = (self.selected_index + 1) % self.foods.len();
    }

    fn clamp_selection(&mut self) {
        self.selected_index = self
            .selected_index
            .min(self.foods.len().saturating_sub(1));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::ApiError;
    use crate::api::client::MockFoodApi;
    use crate::form::FormField;
    use reqwest::StatusCode;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    async fn type_text(dashboard: &mut Dashboard, text: &str) {
        for c in text.chars() {
            dashboard.handle_modal_key(press(KeyCode::Char(c))).await;
        }
    }

    fn food(id: u64, name: &str) -> Food {
        Food {
            id,
            name: name.to_string(),
            description: format!("{} description", name),
            price: "19.90".to_string(),
            available: true,
            image: format!("https://example.com/{}.png", id),
        }
    }

    fn server_error() -> ApiError {
        ApiError::Status {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            body: "boom".to_string(),
        }
    }

    fn input(name: &str) -> FoodInput {
        FoodInput {
            name: name.to_string(),
            description: "Freshly made".to_string(),
            price: "25.00".to_string(),
            image: "img".to_string(),
        }
    }

    fn dashboard_with(api: MockFoodApi, foods: Vec<Food>) -> Dashboard {
        let mut dashboard = Dashboard::new(Box::new(api));
        dashboard.foods = foods;
        dashboard
    }

    #[tokio::test]
    async fn test_load_replaces_list() {
        let mut api = MockFoodApi::new();
        api.expect_list_foods()
            .times(1)
            .returning(|| Ok(vec![food(1, "Pasta"), food(2, "Salad")]));
        let mut dashboard = dashboard_with(api, vec![food(9, "Stale")]);

        assert!(dashboard.load_foods().await);
        assert_eq!(dashboard.foods, vec![food(1, "Pasta"), food(2, "Salad")]);
        assert!(dashboard.last_synced.is_some());
    }

    #[tokio::test]
    async fn test_load_failure_keeps_list() {
        let mut api = MockFoodApi::new();
        api.expect_list_foods().returning(|| Err(server_error()));
        let mut dashboard = dashboard_with(api, vec![food(1, "Pasta")]);

        assert!(!dashboard.load_foods().await);
        assert_eq!(dashboard.foods, vec![food(1, "Pasta")]);
        assert!(dashboard.last_synced.is_none());
    }

    #[tokio::test]
    async fn test_add_appends_created_record_once() {
        let mut api = MockFoodApi::new();
        api.expect_create_food()
            .withf(|input| input.name == "Ramen")
            .times(1)
            .returning(|input| {
                Ok(Food {
                    id: 3,
                    name: input.name.clone(),
                    description: input.description.clone(),
                    price: input.price.clone(),
                    available: true,
                    image: input.image.clone(),
                })
            });
        let mut dashboard = dashboard_with(api, vec![food(1, "Pasta"), food(2, "Salad")]);

        assert!(dashboard.add_food(input("Ramen")).await);
        assert_eq!(dashboard.foods.len(), 3);
        assert_eq!(dashboard.foods.iter().filter(|f| f.id == 3).count(), 1);
        assert_eq!(dashboard.foods[2].name, "Ramen");
        assert!(dashboard.foods[2].available);
    }

    #[tokio::test]
    async fn test_add_failure_keeps_list() {
        let mut api = MockFoodApi::new();
        api.expect_create_food().returning(|_| Err(server_error()));
        let mut dashboard = dashboard_with(api, vec![food(1, "Pasta")]);

        assert!(!dashboard.add_food(input("Ramen")).await);
        assert_eq!(dashboard.foods, vec![food(1, "Pasta")]);
    }

    #[tokio::test]
    async fn test_update_replaces_only_matching_record() {
        let mut api = MockFoodApi::new();
        api.expect_update_food()
            .withf(|food| food.id == 2 && food.name == "Caesar" && !food.available)
            .times(1)
            .returning(|food| Ok(food.clone()));
        let mut unavailable = food(2, "Salad");
        unavailable.available = false;
        let mut dashboard = dashboard_with(
            api,
            vec![food(1, "Pasta"), unavailable.clone(), food(3, "Soup")],
        );
        dashboard.handle_edit_food(unavailable);

        assert!(dashboard.update_food(input("Caesar")).await);
        assert_eq!(dashboard.foods[0], food(1, "Pasta"));
        assert_eq!(dashboard.foods[1].name, "Caesar");
        assert_eq!(dashboard.foods[1].price, "25.00");
        assert!(!dashboard.foods[1].available);
        assert_eq!(dashboard.foods[2], food(3, "Soup"));
    }

    #[tokio::test]
    async fn test_update_failure_keeps_list() {
        let mut api = MockFoodApi::new();
        api.expect_update_food().returning(|_| Err(server_error()));
        let original = vec![food(1, "Pasta"), food(2, "Salad")];
        let mut dashboard = dashboard_with(api, original.clone());
        dashboard.handle_edit_food(food(2, "Salad"));

        assert!(!dashboard.update_food(input("Caesar")).await);
        assert_eq!(dashboard.foods, original);
    }

    #[tokio::test]
    async fn test_update_without_editing_food_skips_request() {
        let mut api = MockFoodApi::new();
        api.expect_update_food().never();
        let mut dashboard = dashboard_with(api, vec![food(1, "Pasta")]);

        assert!(!dashboard.update_food(input("Caesar")).await);
        assert_eq!(dashboard.foods, vec![food(1, "Pasta")]);
    }

    #[tokio::test]
    async fn test_delete_removes_exactly_matching_record() {
        let mut api = MockFoodApi::new();
        api.expect_delete_food()
            .withf(|id| *id == 2)
            .times(1)
            .returning(|_| Ok(()));
        let mut dashboard =
            dashboard_with(api, vec![food(1, "Pasta"), food(2, "Salad"), food(3, "Soup")]);

        assert!(dashboard.delete_food(2).await);
        assert_eq!(dashboard.foods, vec![food(1, "Pasta"), food(3, "Soup")]);
    }

    #[tokio::test]
    async fn test_delete_failure_keeps_list() {
        let mut api = MockFoodApi::new();
        api.expect_delete_food().returning(|_| Err(server_error()));
        let original = vec![food(1, "Pasta"), food(2, "Salad")];
        let mut dashboard = dashboard_with(api, original.clone());

        assert!(!dashboard.delete_food(2).await);
        assert_eq!(dashboard.foods, original);
    }

    #[tokio::test]
    async fn test_delete_last_clamps_selection() {
        let mut api = MockFoodApi::new();
        api.expect_delete_food().returning(|_| Ok(()));
        let mut dashboard = dashboard_with(api, vec![food(1, "Pasta"), food(2, "Salad")]);
        dashboard.selected_index = 1;

        dashboard.delete_food(2).await;
        assert_eq!(dashboard.selected_index, 0);
        assert_eq!(dashboard.selected_food().map(|f| f.id), Some(1));
    }

    #[tokio::test]
    async fn test_toggle_available_flips_flag() {
        let mut api = MockFoodApi::new();
        api.expect_update_food()
            .withf(|food| food.id == 1 && !food.available)
            .times(1)
            .returning(|food| Ok(food.clone()));
        let mut dashboard = dashboard_with(api, vec![food(1, "Pasta"), food(2, "Salad")]);

        assert!(dashboard.toggle_available(1).await);
        assert!(!dashboard.foods[0].available);
        assert!(dashboard.foods[1].available);
    }

    #[tokio::test]
    async fn test_toggle_available_failure_keeps_list() {
        let mut api = MockFoodApi::new();
        api.expect_update_food().returning(|_| Err(server_error()));
        let mut dashboard = dashboard_with(api, vec![food(1, "Pasta")]);

        assert!(!dashboard.toggle_available(1).await);
        assert!(dashboard.foods[0].available);
    }

    #[tokio::test]
    async fn test_submit_add_modal_clears_and_closes() {
        let mut api = MockFoodApi::new();
        api.expect_create_food().returning(|_| Err(server_error()));
        let mut dashboard = dashboard_with(api, Vec::new());
        dashboard.toggle_modal();
        dashboard.add_form.insert_char('x');
        assert_eq!(dashboard.mode(), UiMode::AddModal);

        dashboard.submit_add_modal().await;
        assert_eq!(dashboard.mode(), UiMode::List);
        assert_eq!(dashboard.add_form, FoodForm::new());
        assert!(dashboard.foods.is_empty());
    }

    #[tokio::test]
    async fn test_submit_edit_modal_closes() {
        let mut api = MockFoodApi::new();
        api.expect_update_food().returning(|food| Ok(food.clone()));
        let mut dashboard = dashboard_with(api, vec![food(1, "Pasta")]);
        dashboard.handle_edit_food(food(1, "Pasta"));
        assert_eq!(dashboard.mode(), UiMode::EditModal);

        dashboard.submit_edit_modal().await;
        assert_eq!(dashboard.mode(), UiMode::List);
        assert_eq!(dashboard.foods[0], food(1, "Pasta"));
    }

    #[test]
    fn test_handle_edit_food_prefills_form() {
        let mut dashboard = dashboard_with(MockFoodApi::new(), vec![food(1, "Pasta")]);
        dashboard.handle_edit_food(food(1, "Pasta"));
        assert!(dashboard.edit_modal_open);
        assert_eq!(dashboard.editing_food.as_ref().map(|f| f.id), Some(1));
        assert_eq!(dashboard.edit_form, FoodForm::from_food(&food(1, "Pasta")));
    }

    #[test]
    fn test_toggle_and_close_modals() {
        let mut dashboard = dashboard_with(MockFoodApi::new(), Vec::new());
        dashboard.toggle_modal();
        assert_eq!(dashboard.mode(), UiMode::AddModal);
        assert!(dashboard.active_form_mut().is_some());
        dashboard.close_modal();
        assert_eq!(dashboard.mode(), UiMode::List);
        assert!(dashboard.active_form_mut().is_none());
    }

    #[test]
    fn test_move_selection_wraps() {
        let mut dashboard = dashboard_with(
            MockFoodApi::new(),
            vec![food(1, "Pasta"), food(2, "Salad"), food(3, "Soup")],
        );
        dashboard.move_down();
        assert_eq!(dashboard.selected_index, 1);
        dashboard.move_up();
        dashboard.move_up();
        assert_eq!(dashboard.selected_index, 2);
        dashboard.move_down();
        assert_eq!(dashboard.selected_index, 0);
    }

    #[tokio::test]
    async fn test_quit_keys() {
        let mut dashboard = dashboard_with(MockFoodApi::new(), Vec::new());
        assert!(!dashboard.handle_list_key(press(KeyCode::Char('q'))).await);
        assert!(!dashboard.handle_list_key(press(KeyCode::Esc)).await);
        assert!(
            !dashboard
                .handle_list_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL))
                .await
        );
        assert!(dashboard.handle_list_key(press(KeyCode::Char('j'))).await);
    }

    #[tokio::test]
    async fn test_new_dish_keys_create_food() {
        let mut api = MockFoodApi::new();
        api.expect_create_food()
            .withf(|input| {
                input.image == "img"
                    && input.name == "Ramen"
                    && input.price == "30"
                    && input.description.is_empty()
            })
            .times(1)
            .returning(|input| {
                Ok(Food {
                    id: 5,
                    name: input.name.clone(),
                    description: input.description.clone(),
                    price: input.price.clone(),
                    available: true,
                    image: input.image.clone(),
                })
            });
        let mut dashboard = dashboard_with(api, Vec::new());

        assert!(dashboard.handle_list_key(press(KeyCode::Char('n'))).await);
        assert_eq!(dashboard.mode(), UiMode::AddModal);
        type_text(&mut dashboard, "img").await;
        dashboard.handle_modal_key(press(KeyCode::Tab)).await;
        type_text(&mut dashboard, "Ramenx").await;
        dashboard.handle_modal_key(press(KeyCode::Backspace)).await;
        dashboard.handle_modal_key(press(KeyCode::Down)).await;
        type_text(&mut dashboard, "30").await;
        assert_eq!(dashboard.add_form.value(FormField::Name), "Ramen");

        dashboard.handle_modal_key(press(KeyCode::Enter)).await;
        assert_eq!(dashboard.mode(), UiMode::List);
        assert_eq!(dashboard.foods.len(), 1);
        assert_eq!(dashboard.foods[0].id, 5);
    }

    #[tokio::test]
    async fn test_edit_keys_update_selected_food() {
        let mut api = MockFoodApi::new();
        api.expect_update_food()
            .withf(|food| food.id == 2 && food.name == "Salad!")
            .times(1)
            .returning(|food| Ok(food.clone()));
        let mut dashboard = dashboard_with(api, vec![food(1, "Pasta"), food(2, "Salad")]);

        dashboard.handle_list_key(press(KeyCode::Down)).await;
        dashboard.handle_list_key(press(KeyCode::Char('e'))).await;
        assert_eq!(dashboard.mode(), UiMode::EditModal);
        dashboard.handle_modal_key(press(KeyCode::BackTab)).await;
        dashboard.handle_modal_key(press(KeyCode::BackTab)).await;
        dashboard.handle_modal_key(press(KeyCode::BackTab)).await;
        assert_eq!(dashboard.edit_form.focused_field(), FormField::Name);
        type_text(&mut dashboard, "!").await;
        dashboard.handle_modal_key(press(KeyCode::Enter)).await;

        assert_eq!(dashboard.mode(), UiMode::List);
        assert_eq!(dashboard.foods[0], food(1, "Pasta"));
        assert_eq!(dashboard.foods[1].name, "Salad!");
    }

    #[tokio::test]
    async fn test_escape_closes_modal_without_request() {
        let mut api = MockFoodApi::new();
        api.expect_create_food().never();
        let mut dashboard = dashboard_with(api, Vec::new());

        dashboard.handle_list_key(press(KeyCode::Char('n'))).await;
        type_text(&mut dashboard, "q").await;
        assert_eq!(dashboard.mode(), UiMode::AddModal);
        dashboard.handle_modal_key(press(KeyCode::Esc)).await;
        assert_eq!(dashboard.mode(), UiMode::List);
        assert!(dashboard.foods.is_empty());
    }

    #[tokio::test]
    async fn test_delete_and_toggle_keys_act_on_selection() {
        let mut api = MockFoodApi::new();
        api.expect_update_food()
            .withf(|food| food.id == 1 && !food.available)
            .times(1)
            .returning(|food| Ok(food.clone()));
        api.expect_delete_food()
            .withf(|id| *id == 2)
            .times(1)
            .returning(|_| Ok(()));
        let mut dashboard = dashboard_with(api, vec![food(1, "Pasta"), food(2, "Salad")]);

        dashboard.handle_list_key(press(KeyCode::Char('a'))).await;
        assert!(!dashboard.foods[0].available);
        dashboard.handle_list_key(press(KeyCode::Char('j'))).await;
        dashboard.handle_list_key(press(KeyCode::Char('d'))).await;
        assert_eq!(dashboard.foods.len(), 1);
        assert_eq!(dashboard.foods[0].id, 1);
    }

    #[tokio::test]
    async fn test_reload_key_fetches_list() {
        let mut api = MockFoodApi::new();
        api.expect_list_foods()
            .times(1)
            .returning(|| Ok(vec![food(4, "Curry")]));
        let mut dashboard = dashboard_with(api, Vec::new());

        assert!(dashboard.handle_list_key(press(KeyCode::Char('r'))).await);
        assert_eq!(dashboard.foods, vec![food(4, "Curry")]);
    }
}
