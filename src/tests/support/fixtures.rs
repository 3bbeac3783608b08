use chrono::Utc;
use rust_decimal::Decimal;
use uuid::Uuid;

use crate::modules::inquiry::application::domain::entities::InquiryStatus;
use crate::modules::inquiry::application::ports::outgoing::{
    InquiryImageView, InquiryPropertyView, InquiryView,
};
use crate::modules::property::application::domain::entities::{PropertyStatus, PropertyType};
use crate::modules::property::application::ports::outgoing::property_query::{
    PropertyAmenityView, PropertyImageView, PropertyView,
};

pub fn property_view(id: Uuid) -> PropertyView {
    let now = Utc::now();

    PropertyView {
        id,
        title: "Modern Family Home".to_string(),
        description: "Four bedrooms close to the park".to_string(),
        price: Decimal::new(850_000, 0),
        property_type: PropertyType::Sale,
        status: PropertyStatus::Active,
        bedrooms: Some(4),
        bathrooms: Some(3),
        area: Some(Decimal::new(2_400, 0)),
        address: "42 Elm Street".to_string(),
        city: "Denver".to_string(),
        state: "CO".to_string(),
        zip_code: "80202".to_string(),
        country: "USA".to_string(),
        latitude: Some(39.74),
        longitude: Some(-104.99),
        featured: true,
        owner_id: Some(Uuid::new_v4()),
        images: vec![PropertyImageView {
            id: Uuid::new_v4(),
            url: "https://storage.googleapis.com/bucket/properties/1.jpg".to_string(),
            alt: None,
            is_primary: true,
            position: 0,
        }],
        amenities: vec![PropertyAmenityView {
            id: Uuid::new_v4(),
            name: "Garden".to_string(),
            category: "Exterior".to_string(),
            icon: None,
        }],
        created_at: now,
        updated_at: now,
    }
}

pub fn inquiry_view(id: Uuid, status: InquiryStatus) -> InquiryView {
    let now = Utc::now();

    InquiryView {
        id,
        name: "Jane Buyer".to_string(),
        email: "jane@example.com".to_string(),
        phone: None,
        message: "Is the garden south facing?".to_string(),
        status,
        property: InquiryPropertyView {
            id: Uuid::new_v4(),
            title: "Modern Family Home".to_string(),
            price: Decimal::new(850_000, 0),
            property_type: PropertyType::Sale,
            status: PropertyStatus::Active,
            address: "42 Elm Street".to_string(),
            city: "Denver".to_string(),
            state: "CO".to_string(),
            images: vec![InquiryImageView {
                url: "https://storage.googleapis.com/bucket/properties/1.jpg".to_string(),
                is_primary: true,
            }],
        },
        created_at: now,
        updated_at: now,
    }
}
