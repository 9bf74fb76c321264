//! Validation utilities for BlanketWise
//!
//! Reusable field checks shared by the backend services and the WASM
//! bindings. Enum-valued fields (shelter access, conditions) are enforced
//! by deserialization and need no checks here.

use rust_decimal::Decimal;

// ============================================================================
// Shared Field Validations
// ============================================================================

/// Validate a display name (horses, blankets, liners)
pub fn validate_name(name: &str) -> Result<(), &'static str> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err("Name is required");
    }
    if trimmed.chars().count() > 100 {
        return Err("Name must be at most 100 characters");
    }
    Ok(())
}

/// Validate a hex color swatch like `#9CAF88`
pub fn validate_hex_color(color: &str) -> Result<(), &'static str> {
    let mut chars = color.chars();
    if chars.next() != Some('#') {
        return Err("Color must be a hex value like #9CAF88");
    }
    let digits: Vec<char> = chars.collect();
    if digits.len() != 6 || !digits.iter().all(|c| c.is_ascii_hexdigit()) {
        return Err("Color must be a hex value like #9CAF88");
    }
    Ok(())
}

// ============================================================================
// Horse Validations
// ============================================================================

/// Validate a breed label
pub fn validate_breed(breed: &str) -> Result<(), &'static str> {
    if breed.chars().count() > 100 {
        return Err("Breed must be at most 100 characters");
    }
    Ok(())
}

/// Validate an age in years
pub fn validate_age(age: i32) -> Result<(), &'static str> {
    if !(0..=50).contains(&age) {
        return Err("Age must be between 0 and 50");
    }
    Ok(())
}

/// Validate a 0-100 scale (coat growth, cold tolerance)
pub fn validate_percent_scale(value: i32) -> Result<(), &'static str> {
    if !(0..=100).contains(&value) {
        return Err("Value must be between 0 and 100");
    }
    Ok(())
}

// ============================================================================
// Inventory Validations
// ============================================================================

/// Validate a blanket or liner fill weight in grams
pub fn validate_fill_weight(grams: i32) -> Result<(), &'static str> {
    if !(0..=500).contains(&grams) {
        return Err("Fill weight must be between 0 and 500 grams");
    }
    Ok(())
}

// ============================================================================
// Settings Validations
// ============================================================================

/// Validate the user's temperature buffer preference
pub fn validate_temp_buffer(buffer: i32) -> Result<(), &'static str> {
    if !(0..=15).contains(&buffer) {
        return Err("Temperature buffer must be between 0 and 15");
    }
    Ok(())
}

/// Validate a latitude in degrees
pub fn validate_latitude(latitude: Decimal) -> Result<(), &'static str> {
    if latitude < Decimal::from(-90) || latitude > Decimal::from(90) {
        return Err("Latitude must be between -90 and 90");
    }
    Ok(())
}

/// Validate a longitude in degrees
pub fn validate_longitude(longitude: Decimal) -> Result<(), &'static str> {
    if longitude < Decimal::from(-180) || longitude > Decimal::from(180) {
        return Err("Longitude must be between -180 and 180");
    }
    Ok(())
}

/// Validate a saved location label
pub fn validate_location_name(name: &str) -> Result<(), &'static str> {
    if name.chars().count() > 200 {
        return Err("Location name must be at most 200 characters");
    }
    Ok(())
}
