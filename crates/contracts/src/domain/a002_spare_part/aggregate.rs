use crate::domain::common::aggregate_id::uuid_id;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Cap of the single-line description input
pub const DESCRIPTION_BRIEF_MAX: usize = 200;
/// Cap of the expanded description textarea
pub const DESCRIPTION_EXPANDED_MAX: usize = 500;

uuid_id! {
    /// Unique spare part identifier
    SparePartId
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SparePartCondition {
    #[default]
    New,
    Used,
    Refurbished,
}

impl SparePartCondition {
    pub const ALL: [SparePartCondition; 3] = [Self::New, Self::Used, Self::Refurbished];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::New => "new",
            Self::Used => "used",
            Self::Refurbished => "refurbished",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::New => "New",
            Self::Used => "Used",
            Self::Refurbished => "Refurbished",
        }
    }
}

/// Spare part as seen by the inventory UI
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SparePart {
    pub id: SparePartId,
    pub name: String,
    #[serde(rename = "partNumber")]
    pub part_number: String,
    #[serde(rename = "spareType")]
    pub spare_type: String,
    pub brand: String,
    #[serde(rename = "supplierId")]
    pub supplier_id: Option<String>,
    pub condition: SparePartCondition,
    pub description: String,
    pub quantity: u32,
    #[serde(rename = "minQuantity")]
    pub min_quantity: u32,
    #[serde(rename = "maxQuantity")]
    pub max_quantity: Option<u32>,
}

impl SparePart {
    pub fn stock_status(&self) -> StockStatus {
        StockStatus::classify(self.quantity, self.min_quantity, self.max_quantity)
    }

    /// Copy the information fields back from the form.
    pub fn apply_info(&mut self, info: &SparePartInfoDto) {
        self.name = info.name.trim().to_string();
        self.part_number = info.part_number.trim().to_string();
        self.spare_type = info.spare_type.clone();
        self.brand = info.brand.trim().to_string();
        self.supplier_id = if info.supplier_id.is_empty() {
            None
        } else {
            Some(info.supplier_id.clone())
        };
        self.condition = info.condition;
        self.description = info.description.clone();
    }
}

/// Editable information fields of a spare part.
///
/// Empty strings mean "not selected" for `spare_type` and `supplier_id`,
/// matching what the input controls hold.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SparePartInfoDto {
    pub name: String,
    #[serde(rename = "partNumber")]
    pub part_number: String,
    #[serde(rename = "spareType")]
    pub spare_type: String,
    pub brand: String,
    #[serde(rename = "supplierId")]
    pub supplier_id: String,
    pub condition: SparePartCondition,
    pub description: String,
}

impl SparePartInfoDto {
    /// Required-field checks of the add/edit screen, as field -> message.
    pub fn validate(&self) -> BTreeMap<String, String> {
        let mut errors = BTreeMap::new();
        let name = self.name.trim();
        if name.is_empty() {
            errors.insert("name".to_string(), "Spare part name is required".to_string());
        } else if name.chars().count() < 2 {
            errors.insert(
                "name".to_string(),
                "Name must be at least 2 characters long".to_string(),
            );
        }
        if self.spare_type.is_empty() {
            errors.insert("spareType".to_string(), "Spare type is required".to_string());
        }
        if self.description.chars().count() > DESCRIPTION_EXPANDED_MAX {
            errors.insert(
                "description".to_string(),
                "Description must be at most 500 characters".to_string(),
            );
        }
        errors
    }

    pub fn from_spare_part(part: &SparePart) -> Self {
        Self {
            name: part.name.clone(),
            part_number: part.part_number.clone(),
            spare_type: part.spare_type.clone(),
            brand: part.brand.clone(),
            supplier_id: part.supplier_id.clone().unwrap_or_default(),
            condition: part.condition,
            description: part.description.clone(),
        }
    }
}

/// Option of the spare type type-ahead
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpareTypeOption {
    pub value: String,
    pub label: String,
}

impl SpareTypeOption {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SupplierOption {
    pub id: String,
    pub name: String,
}

/// Narrow the options by case-insensitive substring of the label.
/// A blank query keeps every option.
pub fn filter_spare_types(options: &[SpareTypeOption], query: &str) -> Vec<SpareTypeOption> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return options.to_vec();
    }
    options
        .iter()
        .filter(|opt| opt.label.to_lowercase().contains(&needle))
        .cloned()
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StockStatus {
    Low,
    Normal,
    High,
}

impl StockStatus {
    /// Low wins over high when the bounds overlap.
    pub fn classify(level: u32, min_quantity: u32, max_quantity: Option<u32>) -> Self {
        if level <= min_quantity {
            Self::Low
        } else if max_quantity.is_some_and(|max| level >= max) {
            Self::High
        } else {
            Self::Normal
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Normal => "Normal",
            Self::High => "High",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn types() -> Vec<SpareTypeOption> {
        vec![
            SpareTypeOption::new("screen", "Screen"),
            SpareTypeOption::new("battery", "Battery"),
            SpareTypeOption::new("charging_port", "Charging Port"),
        ]
    }

    #[test]
    fn test_filter_blank_query_keeps_all() {
        assert_eq!(filter_spare_types(&types(), "").len(), 3);
        assert_eq!(filter_spare_types(&types(), "  ").len(), 3);
    }

    #[test]
    fn test_filter_is_case_insensitive_substring() {
        let found = filter_spare_types(&types(), "SCR");
        assert_eq!(found, vec![SpareTypeOption::new("screen", "Screen")]);

        let found = filter_spare_types(&types(), "port");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].value, "charging_port");
    }

    #[test]
    fn test_filter_ignores_value() {
        assert!(filter_spare_types(&types(), "charging_").is_empty());
    }

    #[test]
    fn test_filter_no_match() {
        assert!(filter_spare_types(&types(), "speaker").is_empty());
    }

    #[test]
    fn test_stock_status() {
        assert_eq!(StockStatus::classify(2, 2, Some(50)), StockStatus::Low);
        assert_eq!(StockStatus::classify(0, 0, None), StockStatus::Low);
        assert_eq!(StockStatus::classify(10, 2, Some(50)), StockStatus::Normal);
        assert_eq!(StockStatus::classify(50, 2, Some(50)), StockStatus::High);
        assert_eq!(StockStatus::classify(500, 2, None), StockStatus::Normal);
    }

    #[test]
    fn test_condition_serde_names() {
        let json = serde_json::to_string(&SparePartCondition::Refurbished).unwrap();
        assert_eq!(json, "\"refurbished\"");
        for condition in SparePartCondition::ALL {
            let json = format!("\"{}\"", condition.as_str());
            let back: SparePartCondition = serde_json::from_str(&json).unwrap();
            assert_eq!(back, condition);
        }
    }

    #[test]
    fn test_info_validation() {
        let info = SparePartInfoDto::default();
        let errors = info.validate();
        assert_eq!(errors.get("name").map(String::as_str), Some("Spare part name is required"));
        assert!(errors.contains_key("spareType"));

        let info = SparePartInfoDto {
            name: "X".to_string(),
            spare_type: "screen".to_string(),
            ..SparePartInfoDto::default()
        };
        let errors = info.validate();
        assert_eq!(errors.len(), 1);
        assert!(errors["name"].contains("at least 2"));

        let info = SparePartInfoDto {
            name: "Screen".to_string(),
            spare_type: "screen".to_string(),
            ..SparePartInfoDto::default()
        };
        assert!(info.validate().is_empty());
    }

    #[test]
    fn test_apply_info_blank_supplier() {
        let mut part = SparePart {
            id: SparePartId::new_v4(),
            name: "Old".to_string(),
            part_number: "P-1".to_string(),
            spare_type: "screen".to_string(),
            brand: String::new(),
            supplier_id: Some("s1".to_string()),
            condition: SparePartCondition::New,
            description: String::new(),
            quantity: 4,
            min_quantity: 1,
            max_quantity: None,
        };
        let mut info = SparePartInfoDto::from_spare_part(&part);
        info.name = " iPhone 14 Screen ".to_string();
        info.supplier_id.clear();
        part.apply_info(&info);

        assert_eq!(part.name, "iPhone 14 Screen");
        assert_eq!(part.supplier_id, None);
        assert_eq!(part.quantity, 4);
    }
}
