//! Create/edit form state for an app service.

#[cfg(test)]
#[path = "service_form_test.rs"]
mod service_form_test;

use super::form::{self, FieldErrors, Touched};
use crate::net::types::{Prices, Service, ServiceDraft};

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ServiceField {
    Name,
    ImageLink,
    ServiceId,
    Location,
    PriceSmall,
    PriceMid,
    PriceLarge,
}

impl ServiceField {
    pub const ALL: [Self; 7] = [
        Self::Name,
        Self::ImageLink,
        Self::ServiceId,
        Self::Location,
        Self::PriceSmall,
        Self::PriceMid,
        Self::PriceLarge,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::Name => "Service name",
            Self::ImageLink => "Image link",
            Self::ServiceId => "Service ID",
            Self::Location => "Location",
            Self::PriceSmall => "Small vehicle price",
            Self::PriceMid => "Mid vehicle price",
            Self::PriceLarge => "Large vehicle price",
        }
    }

    pub fn is_price(self) -> bool {
        matches!(self, Self::PriceSmall | Self::PriceMid | Self::PriceLarge)
    }
}

/// Raw input values; prices stay as typed until submit.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ServiceForm {
    pub name: String,
    pub image: String,
    pub service_id: String,
    pub location: String,
    pub price_small: String,
    pub price_mid: String,
    pub price_large: String,
    touched: Touched<ServiceField>,
}

impl ServiceForm {
    pub fn from_service(service: &Service) -> Self {
        Self {
            name: service.name.clone(),
            image: service.image.clone(),
            service_id: service.service_id.clone(),
            location: service.location.clone(),
            price_small: form::format_number(service.prices.small),
            price_mid: form::format_number(service.prices.mid),
            price_large: form::format_number(service.prices.large),
            touched: Touched::default(),
        }
    }

    pub fn value(&self, field: ServiceField) -> &str {
        match field {
            ServiceField::Name => &self.name,
            ServiceField::ImageLink => &self.image,
            ServiceField::ServiceId => &self.service_id,
            ServiceField::Location => &self.location,
            ServiceField::PriceSmall => &self.price_small,
            ServiceField::PriceMid => &self.price_mid,
            ServiceField::PriceLarge => &self.price_large,
        }
    }

    pub fn set(&mut self, field: ServiceField, value: String) {
        let slot = match field {
            ServiceField::Name => &mut self.name,
            ServiceField::ImageLink => &mut self.image,
            ServiceField::ServiceId => &mut self.service_id,
            ServiceField::Location => &mut self.location,
            ServiceField::PriceSmall => &mut self.price_small,
            ServiceField::PriceMid => &mut self.price_mid,
            ServiceField::PriceLarge => &mut self.price_large,
        };
        *slot = value;
    }

    pub fn touch(&mut self, field: ServiceField) {
        self.touched.touch(field);
    }

    pub fn touch_all(&mut self) {
        self.touched.touch_all();
    }

    pub fn errors(&self) -> FieldErrors<ServiceField> {
        let mut errors = FieldErrors::new();
        for field in ServiceField::ALL {
            if field.is_price() {
                form::check_non_negative(&mut errors, field, self.value(field), field.label());
            } else {
                form::require(&mut errors, field, self.value(field));
            }
        }
        errors
    }

    pub fn is_valid(&self) -> bool {
        self.errors().is_empty()
    }

    pub fn visible_error(&self, field: ServiceField) -> Option<String> {
        let errors = self.errors();
        form::visible_error(&errors, &self.touched, &field).map(str::to_owned)
    }

    /// Touch every field and build the request body, or `None` while any error exists.
    pub fn submit(&mut self) -> Option<ServiceDraft> {
        self.touch_all();
        if !self.is_valid() {
            return None;
        }
        let price = |raw: &str| form::parse_non_negative(raw, "").ok();
        Some(ServiceDraft {
            name: self.name.trim().to_owned(),
            image: self.image.trim().to_owned(),
            service_id: self.service_id.trim().to_owned(),
            location: self.location.trim().to_owned(),
            prices: Prices {
                small: price(&self.price_small)?,
                mid: price(&self.price_mid)?,
                large: price(&self.price_large)?,
            },
        })
    }
}
