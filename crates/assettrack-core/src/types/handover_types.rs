//! Handover and signature type definitions

use serde::{Deserialize, Serialize};

/// Who is signing a handover document.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum SignerRole {
    Employee,
    ItRepresentative,
}

/// A single point on a signature pad surface.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

/// One completed pen stroke. The capture widget produces these; the chrome
/// only stores and removes them.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Stroke {
    pub points: Vec<Point>,
}

impl Stroke {
    pub fn new(points: Vec<Point>) -> Self {
        Self { points }
    }
}

/// Asset category, used by rendering code to pick a glyph.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum AssetCategory {
    Laptop,
    Phone,
    Peripheral,
}

/// One asset line in a handover summary.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetLine {
    pub name: String,
    pub serial: String,
    pub category: AssetCategory,
}

impl AssetLine {
    pub fn new(
        name: impl Into<String>,
        serial: impl Into<String>,
        category: AssetCategory,
    ) -> Self {
        Self {
            name: name.into(),
            serial: serial.into(),
            category,
        }
    }
}

/// Summary shown in the signing dialog and encoded into its QR link.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HandoverSummary {
    /// Handover identifier, e.g. `HOV-2023-0065`.
    pub id: String,
    pub employee: String,
    pub department: String,
    pub date: chrono::NaiveDate,
    pub assets: Vec<AssetLine>,
}

impl HandoverSummary {
    pub fn new(
        id: impl Into<String>,
        employee: impl Into<String>,
        department: impl Into<String>,
        date: chrono::NaiveDate,
    ) -> Self {
        Self {
            id: id.into(),
            employee: employee.into(),
            department: department.into(),
            date,
            assets: Vec::new(),
        }
    }

    pub fn with_assets(mut self, assets: Vec<AssetLine>) -> Self {
        self.assets = assets;
        self
    }
}
