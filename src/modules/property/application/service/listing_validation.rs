use rust_decimal::Decimal;

use crate::modules::property::application::domain::entities::DEFAULT_COUNTRY;
use crate::modules::property::application::ports::outgoing::property_repository::{
    CreatePropertyData, UpdatePropertyData,
};

/// Trims text fields in place and rejects listings that cannot be stored.
pub fn normalize_new_listing(data: &mut CreatePropertyData) -> Result<(), String> {
    for (field, value) in [
        ("title", &mut data.title),
        ("description", &mut data.description),
        ("address", &mut data.address),
        ("city", &mut data.city),
        ("state", &mut data.state),
        ("zipCode", &mut data.zip_code),
    ] {
        *value = value.trim().to_string();
        if value.is_empty() {
            return Err(format!("{field} is required"));
        }
    }

    data.country = match data.country.trim() {
        "" => DEFAULT_COUNTRY.to_string(),
        c => c.to_string(),
    };

    check_price(data.price)?;
    check_counts(data.bedrooms, data.bathrooms, data.area)?;
    check_coordinates(data.latitude, data.longitude)?;
    data.image_urls = clean_urls(std::mem::take(&mut data.image_urls));

    Ok(())
}

/// Same rules as creation, applied only to the fields that are present.
pub fn normalize_listing_update(data: &mut UpdatePropertyData) -> Result<(), String> {
    for (field, value) in [
        ("title", &mut data.title),
        ("description", &mut data.description),
        ("address", &mut data.address),
        ("city", &mut data.city),
        ("state", &mut data.state),
        ("zipCode", &mut data.zip_code),
        ("country", &mut data.country),
    ] {
        if let Some(v) = value {
            *v = v.trim().to_string();
            if v.is_empty() {
                return Err(format!("{field} cannot be blank"));
            }
        }
    }

    if let Some(price) = data.price {
        check_price(price)?;
    }
    check_counts(data.bedrooms, data.bathrooms, data.area)?;
    check_coordinates(data.latitude, data.longitude)?;
    data.image_urls = clean_urls(std::mem::take(&mut data.image_urls));

    Ok(())
}

fn check_price(price: Decimal) -> Result<(), String> {
    if price <= Decimal::ZERO {
        return Err("price must be greater than zero".to_string());
    }
    Ok(())
}

fn check_counts(
    bedrooms: Option<i32>,
    bathrooms: Option<i32>,
    area: Option<Decimal>,
) -> Result<(), String> {
    if bedrooms.is_some_and(|b| b < 0) {
        return Err("bedrooms cannot be negative".to_string());
    }
    if bathrooms.is_some_and(|b| b < 0) {
        return Err("bathrooms cannot be negative".to_string());
    }
    if area.is_some_and(|a| a < Decimal::ZERO) {
        return Err("area cannot be negative".to_string());
    }
    Ok(())
}

fn check_coordinates(latitude: Option<f64>, longitude: Option<f64>) -> Result<(), String> {
    if latitude.is_some_and(|lat| !(-90.0..=90.0).contains(&lat)) {
        return Err("latitude must be between -90 and 90".to_string());
    }
    if longitude.is_some_and(|lng| !(-180.0..=180.0).contains(&lng)) {
        return Err("longitude must be between -180 and 180".to_string());
    }
    Ok(())
}

fn clean_urls(urls: Vec<String>) -> Vec<String> {
    urls.into_iter()
        .map(|u| u.trim().to_string())
        .filter(|u| !u.is_empty())
        .collect()
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::modules::property::application::domain::entities::PropertyType;
    use uuid::Uuid;

    pub(crate) fn valid_listing() -> CreatePropertyData {
        CreatePropertyData {
            owner_id: Uuid::new_v4(),
            title: "  Sunny Loft ".to_string(),
            description: "Open plan".to_string(),
            price: Decimal::new(2_500, 0),
            property_type: PropertyType::Rent,
            bedrooms: Some(1),
            bathrooms: Some(1),
            area: None,
            address: "5 Main St".to_string(),
            city: "Austin".to_string(),
            state: "TX".to_string(),
            zip_code: "73301".to_string(),
            country: "".to_string(),
            latitude: Some(30.27),
            longitude: Some(-97.74),
            featured: false,
            image_urls: vec![" https://cdn/1.jpg ".to_string(), "  ".to_string()],
            amenity_ids: vec![],
        }
    }

    #[test]
    fn test_new_listing_is_trimmed_and_defaulted() {
        let mut data = valid_listing();

        normalize_new_listing(&mut data).unwrap();

        assert_eq!(data.title, "Sunny Loft");
        assert_eq!(data.country, "USA");
        assert_eq!(data.image_urls, vec!["https://cdn/1.jpg".to_string()]);
    }

    #[test]
    fn test_blank_required_field_is_rejected() {
        let mut data = valid_listing();
        data.zip_code = "   ".to_string();

        assert_eq!(
            normalize_new_listing(&mut data),
            Err("zipCode is required".to_string())
        );
    }

    #[test]
    fn test_price_must_be_positive() {
        let mut data = valid_listing();
        data.price = Decimal::ZERO;

        assert!(normalize_new_listing(&mut data).is_err());
    }

    #[test]
    fn test_coordinates_out_of_range() {
        let mut data = valid_listing();
        data.latitude = Some(91.0);

        assert!(normalize_new_listing(&mut data)
            .unwrap_err()
            .contains("latitude"));
    }

    #[test]
    fn test_update_checks_only_present_fields() {
        let mut data = UpdatePropertyData::default();
        assert!(normalize_listing_update(&mut data).is_ok());

        let mut blank_city = UpdatePropertyData {
            city: Some(" ".to_string()),
            ..Default::default()
        };
        assert_eq!(
            normalize_listing_update(&mut blank_city),
            Err("city cannot be blank".to_string())
        );

        let mut negative = UpdatePropertyData {
            bedrooms: Some(-1),
            ..Default::default()
        };
        assert!(normalize_listing_update(&mut negative).is_err());
    }
}
