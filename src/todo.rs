use serde::{Deserialize, Serialize};

/// One entry of the list, stored exactly as it appears in `save.json`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Todo {
    pub text: String,
    pub completed: bool,
}

impl Todo {
    /// Build a todo from raw prompt input. Returns `None` for blank input.
    pub fn from_input(input: &str) -> Option<Self> {
        let text = input.trim();
        if text.is_empty() {
            return None;
        }
        Some(Self { text: text.to_string(), completed: false })
    }

    pub fn toggle(&mut self) {
        self.completed = !self.completed;
    }

    pub fn checkbox(&self) -> &'static str {
        if self.completed { "[x]" } else { "[ ]" }
    }
}

/// Ordered todos plus the row the cursor sits on.
///
/// `selected` is always a valid index while the list is non-empty and `0`
/// once it becomes empty.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct TodoList {
    items: Vec<Todo>,
    selected: usize,
}

impl TodoList {
    pub fn new(items: Vec<Todo>) -> Self {
        Self { items, selected: 0 }
    }

    pub fn items(&self) -> &[Todo] {
        &self.items
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Append a new todo. Blank input is dropped without complaint.
    pub fn create(&mut self, input: &str) -> bool {
        match Todo::from_input(input) {
            Some(todo) => {
                self.items.push(todo);
                true
            }
            None => false,
        }
    }

    pub fn toggle_complete(&mut self, index: usize) {
        if let Some(todo) = self.items.get_mut(index) {
            todo.toggle();
        }
    }

    /// Remove the todo at `index`, keeping the order of the rest.
    pub fn delete(&mut self, index: usize) -> Option<Todo> {
        if index >= self.items.len() {
            return None;
        }
        let removed = self.items.remove(index);
        if self.selected >= self.items.len() {
            self.selected = self.items.len().saturating_sub(1);
        }
        Some(removed)
    }

    /// Move the selection by `delta` rows, clamped to the ends of the list.
    pub fn navigate(&mut self, delta: isize) {
        let last = self.items.len().saturating_sub(1);
        self.selected = self.selected.saturating_add_signed(delta).min(last);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn list_of(texts: &[&str]) -> TodoList {
        let mut list = TodoList::default();
        for t in texts {
            list.create(t);
        }
        list
    }

    #[test]
    fn create_trims_text() {
        let mut list = TodoList::default();
        assert!(list.create("  Buy milk  "));
        assert_eq!(
            list.items(),
            &[Todo { text: "Buy milk".into(), completed: false }]
        );
    }

    #[test]
    fn create_ignores_blank_input() {
        let mut list = list_of(&["one"]);
        assert!(!list.create("   "));
        assert!(!list.create(""));
        assert!(!list.create("\t\n"));
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn create_keeps_duplicates_in_insertion_order() {
        let list = list_of(&["a", "b", "a"]);
        let texts: Vec<&str> = list.items().iter().map(|t| t.text.as_str()).collect();
        assert_eq!(texts, vec!["a", "b", "a"]);
        assert_eq!(list.selected(), 0);
    }

    #[test]
    fn toggle_twice_restores_flag() {
        let mut list = list_of(&["one"]);
        list.toggle_complete(0);
        assert!(list.items()[0].completed);
        list.toggle_complete(0);
        assert!(!list.items()[0].completed);
    }

    #[test]
    fn toggle_out_of_range_is_noop() {
        let mut empty = TodoList::default();
        empty.toggle_complete(0);
        assert!(empty.is_empty());

        let mut list = list_of(&["one"]);
        list.toggle_complete(3);
        assert!(!list.items()[0].completed);
    }

    #[test]
    fn delete_selected_last_item_clamps_selection() {
        let mut list = list_of(&["a", "b", "c"]);
        list.navigate(1);
        list.navigate(1);
        assert_eq!(list.selected(), 2);

        let removed = list.delete(2).unwrap();
        assert_eq!(removed.text, "c");
        assert_eq!(list.len(), 2);
        assert_eq!(list.selected(), 1);
    }

    #[test]
    fn delete_middle_item_shifts_the_rest() {
        let mut list = list_of(&["a", "b", "c"]);
        list.navigate(1);
        list.delete(1);
        let texts: Vec<&str> = list.items().iter().map(|t| t.text.as_str()).collect();
        assert_eq!(texts, vec!["a", "c"]);
        assert_eq!(list.selected(), 1);
    }

    #[test]
    fn delete_only_item_leaves_selection_at_zero() {
        let mut list = list_of(&["a"]);
        list.delete(0);
        assert!(list.is_empty());
        assert_eq!(list.selected(), 0);
    }

    #[test]
    fn delete_on_empty_list_is_noop() {
        let mut list = TodoList::default();
        assert!(list.delete(0).is_none());
        assert_eq!(list.selected(), 0);
    }

    #[test]
    fn navigate_clamps_at_both_ends() {
        let mut list = list_of(&["a", "b", "c"]);
        list.navigate(-1);
        assert_eq!(list.selected(), 0);

        list.navigate(1);
        list.navigate(1);
        list.navigate(1);
        assert_eq!(list.selected(), 2);

        list.navigate(-1);
        assert_eq!(list.selected(), 1);
    }

    #[test]
    fn navigate_on_empty_list_stays_at_zero() {
        let mut list = TodoList::default();
        list.navigate(1);
        assert_eq!(list.selected(), 0);
        list.navigate(-1);
        assert_eq!(list.selected(), 0);
    }

    #[test]
    fn checkbox_glyph_follows_completion() {
        let mut todo = Todo::from_input("x").unwrap();
        assert_eq!(todo.checkbox(), "[ ]");
        todo.toggle();
        assert_eq!(todo.checkbox(), "[x]");
    }
}
