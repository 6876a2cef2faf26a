//! Room entity - The description of a single room in the game world
//!
//! A room starts out with placeholder text and is filled in from the map
//! service, then adjusted on the fly while the room is in use. Custom
//! commands and visible items are optional; their JSON projections go into
//! every location message, so each projection is cached until the underlying
//! collection changes.

use std::collections::{HashMap, HashSet};
use std::fmt;
use std::sync::{Arc, OnceLock};

use once_cell::sync::Lazy;
use serde_json::{Map, Value};

use crate::error::DomainError;
use crate::value_objects::MapData;

/// Short name used until the map says otherwise.
pub const DEFAULT_ROOM_NAME: &str = "nickName";

/// Display name used until the map says otherwise.
pub const DEFAULT_ROOM_FULL_NAME: &str = "A room with no full name";

/// Description used until the map says otherwise.
pub const DEFAULT_ROOM_DESCRIPTION: &str =
    "An undescribed room (or perhaps the data hasn't been fetched from the map)";

static EMPTY_COMMANDS: Lazy<Arc<Value>> = Lazy::new(|| Arc::new(Value::Object(Map::new())));
static EMPTY_INVENTORY: Lazy<Arc<Value>> = Lazy::new(|| Arc::new(Value::Array(Vec::new())));

/// How a room is described to the players in it.
///
/// The cached views are either absent or hold the JSON form of the exact
/// current collection. Every mutating call on a collection drops its view;
/// the next read rebuilds it.
#[derive(Debug, Clone)]
pub struct RoomDescription {
    name: String,
    full_name: String,
    description: String,

    commands: HashMap<String, String>,
    commands_view: OnceLock<Arc<Value>>,

    items: HashSet<String>,
    items_view: OnceLock<Arc<Value>>,
}

impl Default for RoomDescription {
    fn default() -> Self {
        Self::new()
    }
}

impl RoomDescription {
    /// Create a room with placeholder text and no commands or items
    pub fn new() -> Self {
        Self {
            name: DEFAULT_ROOM_NAME.to_string(),
            full_name: DEFAULT_ROOM_FULL_NAME.to_string(),
            description: DEFAULT_ROOM_DESCRIPTION.to_string(),
            commands: HashMap::new(),
            commands_view: OnceLock::new(),
            items: HashSet::new(),
            items_view: OnceLock::new(),
        }
    }

    /// Create a room from data retrieved from the map service
    pub fn from_map_data(data: &MapData) -> Self {
        let mut room = Self::new();
        room.update_from(data);
        room
    }

    /// Merge data retrieved from the map service.
    ///
    /// Only the fields the map actually sent are overwritten.
    pub fn update_from(&mut self, data: &MapData) {
        if let Some(name) = &data.name {
            self.name.clone_from(name);
        }
        if let Some(full_name) = &data.full_name {
            self.full_name.clone_from(full_name);
        }
        if let Some(description) = &data.description {
            self.description.clone_from(description);
        }
    }

    // =========================================================================
    // Names and description
    // =========================================================================

    /// The room's short name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The room's display name
    pub fn full_name(&self) -> &str {
        &self.full_name
    }

    /// The display name for a room can change at any time.
    pub fn set_full_name(&mut self, full_name: impl Into<String>) {
        self.full_name = full_name.into();
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn set_description(&mut self, description: impl Into<String>) {
        self.description = description.into();
    }

    // =========================================================================
    // Custom commands
    // =========================================================================

    pub fn commands(&self) -> &HashMap<String, String> {
        &self.commands
    }

    /// Add (or replace) a custom command.
    ///
    /// A command without a description is rejected and leaves the room as it
    /// was.
    pub fn add_command(
        &mut self,
        command: impl Into<String>,
        description: Option<&str>,
    ) -> Result<(), DomainError> {
        let Some(description) = description else {
            return Err(DomainError::invalid_argument("description is required"));
        };
        self.commands.insert(command.into(), description.to_string());
        self.commands_view.take();
        Ok(())
    }

    /// Remove a custom command. Drops the cached view even if the command
    /// was not there.
    pub fn remove_command(&mut self, command: &str) {
        self.commands.remove(command);
        self.commands_view.take();
    }

    /// JSON object mapping each custom command to what it does.
    ///
    /// Never absent: a room without commands gets an empty object.
    pub fn commands_view(&self) -> Arc<Value> {
        if self.commands.is_empty() {
            return Arc::clone(&EMPTY_COMMANDS);
        }
        let view = self.commands_view.get_or_init(|| {
            let object: Map<String, Value> = self
                .commands
                .iter()
                .map(|(command, description)| (command.clone(), Value::String(description.clone())))
                .collect();
            Arc::new(Value::Object(object))
        });
        Arc::clone(view)
    }

    // =========================================================================
    // Inventory
    // =========================================================================

    pub fn items(&self) -> &HashSet<String> {
        &self.items
    }

    pub fn add_item(&mut self, item: impl Into<String>) {
        self.items.insert(item.into());
        self.items_view.take();
    }

    pub fn remove_item(&mut self, item: &str) {
        self.items.remove(item);
        self.items_view.take();
    }

    /// JSON array listing the items in the room.
    ///
    /// Never absent: an empty room gets an empty array.
    pub fn inventory_view(&self) -> Arc<Value> {
        if self.items.is_empty() {
            return Arc::clone(&EMPTY_INVENTORY);
        }
        let view = self.items_view.get_or_init(|| {
            let items = self.items.iter().cloned().map(Value::String).collect();
            Arc::new(Value::Array(items))
        });
        Arc::clone(view)
    }

    #[cfg(test)]
    fn is_commands_view_cached(&self) -> bool {
        self.commands_view.get().is_some()
    }

    #[cfg(test)]
    fn is_inventory_view_cached(&self) -> bool {
        self.items_view.get().is_some()
    }
}

impl fmt::Display for RoomDescription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "name={}, fullName={}, description={}, commands={:?}, items={:?}",
            self.name, self.full_name, self.description, self.commands, self.items
        )
    }
}
