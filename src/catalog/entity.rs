use crate::domain::{Product, ProductCreate, ProductPatch};
use crate::pipeline::{self, CatalogQuery, Page};
use crate::store::{Entity, StoreError};

// Bounds lifted from the storefront's admin API validation.
const NAME_LEN: std::ops::RangeInclusive<usize> = 2..=200;
const DESCRIPTION_LEN: std::ops::RangeInclusive<usize> = 10..=2000;

fn check_name(name: &str) -> Result<(), StoreError> {
    if !NAME_LEN.contains(&name.trim().chars().count()) {
        return Err(StoreError::Invalid(
            "name must be between 2 and 200 characters".into(),
        ));
    }
    Ok(())
}

fn check_description(description: &str) -> Result<(), StoreError> {
    if !DESCRIPTION_LEN.contains(&description.trim().chars().count()) {
        return Err(StoreError::Invalid(
            "description must be between 10 and 2000 characters".into(),
        ));
    }
    Ok(())
}

fn check_price(label: &str, price: f64) -> Result<(), StoreError> {
    if !price.is_finite() || price < 0.0 {
        return Err(StoreError::Invalid(format!(
            "{} must be a non-negative number",
            label
        )));
    }
    Ok(())
}

fn check_rating(rating: f64) -> Result<(), StoreError> {
    if !rating.is_finite() || !(0.0..=5.0).contains(&rating) {
        return Err(StoreError::Invalid("rating must lie within 0 and 5".into()));
    }
    Ok(())
}

impl Entity for Product {
    type Id = String;
    type CreatePayload = ProductCreate;
    type Patch = ProductPatch;
    type Query = CatalogQuery;
    type QueryResult = Page;

    fn id(&self) -> &String {
        &self.id
    }

    fn from_create(id: String, payload: ProductCreate) -> Result<Self, StoreError> {
        check_name(&payload.name)?;
        check_description(&payload.description)?;
        check_price("price", payload.price)?;
        if let Some(old) = payload.old_price {
            check_price("old price", old)?;
        }
        check_rating(payload.rating)?;

        Ok(Self {
            id,
            name: payload.name,
            description: payload.description,
            category: payload.category,
            brand: payload.brand,
            price: payload.price,
            old_price: payload.old_price,
            in_stock: payload.in_stock,
            is_new: payload.is_new,
            featured: payload.featured,
            rating: payload.rating,
        })
    }

    fn on_update(&mut self, patch: ProductPatch) -> Result<(), StoreError> {
        // Validate the whole patch before touching any field.
        if let Some(name) = &patch.name {
            check_name(name)?;
        }
        if let Some(description) = &patch.description {
            check_description(description)?;
        }
        if let Some(price) = patch.price {
            check_price("price", price)?;
        }
        if let Some(old) = patch.old_price {
            check_price("old price", old)?;
        }
        if let Some(rating) = patch.rating {
            check_rating(rating)?;
        }

        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(description) = patch.description {
            self.description = description;
        }
        if let Some(category) = patch.category {
            self.category = category;
        }
        if let Some(brand) = patch.brand {
            self.brand = brand;
        }
        if let Some(price) = patch.price {
            self.price = price;
        }
        if let Some(old) = patch.old_price {
            self.old_price = Some(old);
        }
        if let Some(in_stock) = patch.in_stock {
            self.in_stock = in_stock;
        }
        if let Some(is_new) = patch.is_new {
            self.is_new = is_new;
        }
        if let Some(featured) = patch.featured {
            self.featured = featured;
        }
        if let Some(rating) = patch.rating {
            self.rating = rating;
        }
        Ok(())
    }

    fn query(items: &[Self], query: CatalogQuery) -> Result<Page, StoreError> {
        pipeline::run(items, &query).map_err(|e| StoreError::Invalid(e.to_string()))
    }
}
