use crate::domain::common::aggregate_id::uuid_id;
use crate::domain::common::EntityMetadata;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

// ============================================================================
// Limits
// ============================================================================

pub const NAME_MAX: usize = 100;
pub const DESCRIPTION_MAX: usize = 500;
pub const ICON_MAX: usize = 50;
/// Icon input control cap (a single emoji may take several chars)
pub const ICON_INPUT_MAX: usize = 10;

pub const DEFAULT_COLOR: &str = "#3B82F6";

// ============================================================================
// ID Type
// ============================================================================

uuid_id! {
    /// Unique category identifier
    CategoryId
}

// ============================================================================
// Aggregate Root
// ============================================================================

/// Product/spare-part category. Categories form a tree through `parent_id`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub id: CategoryId,
    pub name: String,
    pub description: Option<String>,
    #[serde(rename = "parentId")]
    pub parent_id: Option<CategoryId>,
    pub color: String,
    pub icon: Option<String>,
    #[serde(rename = "isActive")]
    pub is_active: bool,
    #[serde(rename = "sortOrder")]
    pub sort_order: u32,
    pub metadata: EntityMetadata,
}

impl Category {
    /// Build a new category from validated form data.
    pub fn from_dto(id: CategoryId, dto: &CategoryDto) -> Self {
        let dto = dto.normalized();
        Self {
            id,
            name: dto.name,
            description: dto.description,
            parent_id: dto.parent_id,
            color: dto.color,
            icon: dto.icon,
            is_active: dto.is_active,
            sort_order: dto.sort_order,
            metadata: EntityMetadata::new(),
        }
    }

    /// Overwrite editable fields from form data.
    pub fn apply(&mut self, dto: &CategoryDto) {
        let dto = dto.normalized();
        self.name = dto.name;
        self.description = dto.description;
        self.parent_id = dto.parent_id;
        self.color = dto.color;
        self.icon = dto.icon;
        self.is_active = dto.is_active;
        self.sort_order = dto.sort_order;
        self.metadata.touch();
    }
}

// ============================================================================
// Forms / DTOs
// ============================================================================

/// Data entered in the category form
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryDto {
    pub name: String,
    pub description: Option<String>,
    #[serde(rename = "parentId")]
    pub parent_id: Option<CategoryId>,
    pub color: String,
    pub icon: Option<String>,
    #[serde(rename = "isActive")]
    pub is_active: bool,
    #[serde(rename = "sortOrder")]
    pub sort_order: u32,
}

impl Default for CategoryDto {
    fn default() -> Self {
        Self {
            name: String::new(),
            description: None,
            parent_id: None,
            color: DEFAULT_COLOR.to_string(),
            icon: None,
            is_active: true,
            sort_order: 0,
        }
    }
}

impl CategoryDto {
    pub fn from_category(category: &Category) -> Self {
        Self {
            name: category.name.clone(),
            description: category.description.clone(),
            parent_id: category.parent_id,
            color: category.color.clone(),
            icon: category.icon.clone(),
            is_active: category.is_active,
            sort_order: category.sort_order,
        }
    }

    /// Trimmed name, blank optional strings collapsed to `None`.
    pub fn normalized(&self) -> Self {
        Self {
            name: self.name.trim().to_string(),
            description: non_blank(self.description.as_deref()),
            parent_id: self.parent_id,
            color: self.color.trim().to_string(),
            icon: non_blank(self.icon.as_deref()),
            is_active: self.is_active,
            sort_order: self.sort_order,
        }
    }

    /// Check every field and report all failures at once.
    pub fn validate(&self) -> Result<(), CategoryValidationErrors> {
        let mut errors = CategoryValidationErrors::default();

        let name = self.name.trim();
        if name.is_empty() {
            errors.insert("name", "Category name is required");
        } else if name.chars().count() > NAME_MAX {
            errors.insert("name", "Category name must be less than 100 characters");
        }

        if let Some(description) = &self.description {
            if description.chars().count() > DESCRIPTION_MAX {
                errors.insert(
                    "description",
                    "Description must be less than 500 characters",
                );
            }
        }

        if !is_hex_color(self.color.trim()) {
            errors.insert("color", "Invalid color format");
        }

        if let Some(icon) = &self.icon {
            if icon.chars().count() > ICON_MAX {
                errors.insert("icon", "Icon name must be less than 50 characters");
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

fn non_blank(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

/// `#RRGGBB`, case-insensitive
pub fn is_hex_color(value: &str) -> bool {
    match value.strip_prefix('#') {
        Some(hex) => hex.len() == 6 && hex.chars().all(|c| c.is_ascii_hexdigit()),
        None => false,
    }
}

// ============================================================================
// Validation errors
// ============================================================================

/// Field name -> user-facing message
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategoryValidationErrors {
    fields: BTreeMap<String, String>,
}

impl CategoryValidationErrors {
    fn insert(&mut self, field: &str, message: &str) {
        self.fields.insert(field.to_string(), message.to_string());
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.fields.get(field).map(String::as_str)
    }

    pub fn into_map(self) -> BTreeMap<String, String> {
        self.fields
    }
}

impl fmt::Display for CategoryValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let messages: Vec<&str> = self.fields.values().map(String::as_str).collect();
        write!(f, "{}", messages.join("; "))
    }
}

impl std::error::Error for CategoryValidationErrors {}

// ============================================================================
// Palette
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorOption {
    pub value: &'static str,
    pub label: &'static str,
}

pub const COLOR_OPTIONS: &[ColorOption] = &[
    ColorOption { value: "#3B82F6", label: "Blue" },
    ColorOption { value: "#10B981", label: "Green" },
    ColorOption { value: "#F59E0B", label: "Yellow" },
    ColorOption { value: "#EF4444", label: "Red" },
    ColorOption { value: "#8B5CF6", label: "Purple" },
    ColorOption { value: "#EC4899", label: "Pink" },
    ColorOption { value: "#6B7280", label: "Gray" },
    ColorOption { value: "#000000", label: "Black" },
];

#[cfg(test)]
mod tests {
    use super::*;

    fn dto(name: &str) -> CategoryDto {
        CategoryDto {
            name: name.to_string(),
            ..CategoryDto::default()
        }
    }

    #[test]
    fn test_valid_category() {
        assert!(dto("Screens").validate().is_ok());
    }

    #[test]
    fn test_blank_name_rejected() {
        let errors = dto("   ").validate().unwrap_err();
        assert_eq!(errors.get("name"), Some("Category name is required"));
    }

    #[test]
    fn test_name_length_limit() {
        assert!(dto(&"a".repeat(NAME_MAX)).validate().is_ok());
        let errors = dto(&"a".repeat(NAME_MAX + 1)).validate().unwrap_err();
        assert!(errors.get("name").is_some());
    }

    #[test]
    fn test_all_failures_reported() {
        let form = CategoryDto {
            name: String::new(),
            description: Some("x".repeat(DESCRIPTION_MAX + 1)),
            color: "blue".to_string(),
            icon: Some("i".repeat(ICON_MAX + 1)),
            ..CategoryDto::default()
        };
        let errors = form.validate().unwrap_err().into_map();
        assert_eq!(errors.len(), 4);
        assert!(errors.contains_key("description"));
        assert!(errors.contains_key("color"));
        assert!(errors.contains_key("icon"));
    }

    #[test]
    fn test_hex_color() {
        assert!(is_hex_color("#3b82f6"));
        assert!(is_hex_color("#000000"));
        assert!(!is_hex_color("3B82F6"));
        assert!(!is_hex_color("#3B82F"));
        assert!(!is_hex_color("#GGGGGG"));
    }

    #[test]
    fn test_normalized_collapses_blank_optionals() {
        let form = CategoryDto {
            name: "  Batteries ".to_string(),
            description: Some("   ".to_string()),
            icon: Some(String::new()),
            ..CategoryDto::default()
        };
        let n = form.normalized();
        assert_eq!(n.name, "Batteries");
        assert_eq!(n.description, None);
        assert_eq!(n.icon, None);
    }

    #[test]
    fn test_apply_round_trips_through_form() {
        let id = CategoryId::new_v4();
        let mut category = Category::from_dto(id, &dto("Cables"));
        let mut form = CategoryDto::from_category(&category);
        form.name = "USB Cables".to_string();
        form.sort_order = 3;
        category.apply(&form);

        assert_eq!(category.id, id);
        assert_eq!(category.name, "USB Cables");
        assert_eq!(category.sort_order, 3);
        assert_eq!(category.metadata.version, 1);
    }

    #[test]
    fn test_palette_colors_are_valid() {
        for option in COLOR_OPTIONS {
            assert!(is_hex_color(option.value), "{}", option.label);
        }
        assert!(COLOR_OPTIONS.iter().any(|o| o.value == DEFAULT_COLOR));
    }
}
