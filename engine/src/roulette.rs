use serde::{Serialize, Deserialize};
use uuid::Uuid;

pub const DEFAULT_ROULETTE_NAME: &str = "New Roulette";

/// A single wedge entry. Identity is the id; the label can be edited freely.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Item {
    pub id: Uuid,
    pub label: String,
}

/// A named, ordered list of items. The order is significant: it determines
/// wedge placement on the wheel and therefore the angle/index mapping.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Roulette {
    pub id: Uuid,
    pub name: String,
    pub items: Vec<Item>,
    pub created_at: u64,
    pub updated_at: u64,
}

impl Roulette {
    pub fn new(name: &str, now_ms: u64) -> Self {
        let name = name.trim();
        Self {
            id: Uuid::new_v4(),
            name: if name.is_empty() {
                DEFAULT_ROULETTE_NAME.to_string()
            } else {
                name.to_string()
            },
            items: Vec::new(),
            created_at: now_ms,
            updated_at: now_ms,
        }
    }

    /// Appends an item with a trimmed label. An empty trimmed label is a
    /// silent no-op (the UI sends those on double-submits).
    pub fn add_item(&mut self, label: &str, now_ms: u64) -> Option<&Item> {
        let label = label.trim();
        if label.is_empty() {
            return None;
        }
        self.items.push(Item {
            id: Uuid::new_v4(),
            label: label.to_string(),
        });
        self.updated_at = now_ms;
        self.items.last()
    }

    /// Removes the item with the given id. Unknown ids are a silent no-op.
    pub fn remove_item(&mut self, id: Uuid, now_ms: u64) -> bool {
        let before = self.items.len();
        self.items.retain(|item| item.id != id);
        if self.items.len() == before {
            return false;
        }
        self.updated_at = now_ms;
        true
    }

    /// Relabels the item with the given id. Empty trimmed labels and
    /// unknown ids are silent no-ops.
    pub fn update_item(&mut self, id: Uuid, label: &str, now_ms: u64) -> bool {
        let label = label.trim();
        if label.is_empty() {
            return false;
        }
        match self.items.iter_mut().find(|item| item.id == id) {
            Some(item) => {
                item.label = label.to_string();
                self.updated_at = now_ms;
                true
            }
            None => false,
        }
    }

    pub fn clear_items(&mut self, now_ms: u64) {
        self.items.clear();
        self.updated_at = now_ms;
    }

    /// Renames the list; a blank name keeps the current one.
    pub fn rename(&mut self, name: &str, now_ms: u64) {
        let name = name.trim();
        if !name.is_empty() {
            self.name = name.to_string();
        }
        self.updated_at = now_ms;
    }

    pub fn contains(&self, id: Uuid) -> bool {
        self.items.iter().any(|item| item.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_item_trims_label_and_bumps_updated_at() {
        let mut roulette = Roulette::new("Lunch", 100);
        let added = roulette.add_item("  Pizza  ", 200).cloned();
        assert_eq!(added.unwrap().label, "Pizza");
        assert_eq!(roulette.items.len(), 1);
        assert_eq!(roulette.updated_at, 200);
    }

    #[test]
    fn add_item_with_blank_label_is_a_no_op() {
        let mut roulette = Roulette::new("Lunch", 100);
        assert!(roulette.add_item("   ", 200).is_none());
        assert!(roulette.items.is_empty());
        assert_eq!(roulette.updated_at, 100);
    }

    #[test]
    fn remove_item_with_unknown_id_is_a_no_op() {
        let mut roulette = Roulette::new("Lunch", 100);
        roulette.add_item("Pizza", 150);
        assert!(!roulette.remove_item(Uuid::new_v4(), 200));
        assert_eq!(roulette.items.len(), 1);
        assert_eq!(roulette.updated_at, 150);
    }

    #[test]
    fn update_item_relabels_in_place() {
        let mut roulette = Roulette::new("Lunch", 100);
        let id = roulette.add_item("Pizza", 150).unwrap().id;
        assert!(roulette.update_item(id, " Sushi ", 200));
        assert_eq!(roulette.items[0].label, "Sushi");
        assert_eq!(roulette.items[0].id, id);
        assert_eq!(roulette.updated_at, 200);
    }

    #[test]
    fn update_item_rejects_blank_labels() {
        let mut roulette = Roulette::new("Lunch", 100);
        let id = roulette.add_item("Pizza", 150).unwrap().id;
        assert!(!roulette.update_item(id, "  ", 200));
        assert_eq!(roulette.items[0].label, "Pizza");
    }

    #[test]
    fn clear_items_empties_the_list() {
        let mut roulette = Roulette::new("Lunch", 100);
        roulette.add_item("Pizza", 150);
        roulette.add_item("Sushi", 160);
        roulette.clear_items(200);
        assert!(roulette.items.is_empty());
        assert_eq!(roulette.updated_at, 200);
    }

    #[test]
    fn blank_name_falls_back_to_default() {
        let roulette = Roulette::new("  ", 100);
        assert_eq!(roulette.name, DEFAULT_ROULETTE_NAME);
    }

    #[test]
    fn rename_keeps_old_name_when_blank() {
        let mut roulette = Roulette::new("Lunch", 100);
        roulette.rename("  ", 200);
        assert_eq!(roulette.name, "Lunch");
        roulette.rename(" Dinner ", 300);
        assert_eq!(roulette.name, "Dinner");
    }
}
