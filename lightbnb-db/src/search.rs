//! Property search query builder
//!
//! Optional filters become a typed list of predicates, each carrying its own
//! bound value. Rendering walks the list once, so placeholder numbers always
//! follow bind order and the row cap gets a placeholder of its own.

use serde::Deserialize;
use sqlx::{Postgres, QueryBuilder};

/// Default number of rows returned by listing operations
pub const DEFAULT_LIMIT: u32 = 10;

const SEARCH_SELECT: &str = "SELECT properties.*, avg(property_reviews.rating)::float8 AS average_rating \
     FROM properties \
     JOIN property_reviews ON properties.id = property_reviews.property_id";

/// Search filters as submitted by the search form. Every field is optional.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct SearchOptions {
    pub city: Option<String>,
    pub owner_id: Option<i32>,
    pub minimum_price_per_night: Option<i32>,
    pub maximum_price_per_night: Option<i32>,
    pub minimum_rating: Option<f64>,
}

/// A single WHERE/AND condition with its parameter value
#[derive(Debug, Clone, PartialEq)]
pub enum Predicate {
    /// Case-sensitive substring match on the city
    CityContains(String),
    /// Exact owner match
    OwnerIs(i32),
    /// Nightly cost strictly above the bound
    CostAbove(i32),
    /// Nightly cost strictly below the bound
    CostBelow(i32),
}

impl Predicate {
    fn push_to(&self, qb: &mut QueryBuilder<'static, Postgres>) {
        match self {
            Self::CityContains(city) => {
                qb.push("properties.city LIKE ").push_bind(format!("%{}%", city));
            }
            Self::OwnerIs(owner_id) => {
                qb.push("properties.owner_id = ").push_bind(*owner_id);
            }
            Self::CostAbove(cost) => {
                qb.push("properties.cost_per_night > ").push_bind(*cost);
            }
            Self::CostBelow(cost) => {
                qb.push("properties.cost_per_night < ").push_bind(*cost);
            }
        }
    }
}

/// A fully resolved property search, ready to render
#[derive(Debug, Clone, PartialEq)]
pub struct PropertySearch {
    predicates: Vec<Predicate>,
    minimum_rating: Option<f64>,
    limit: u32,
}

impl PropertySearch {
    /// Resolve options into predicates in fixed order: city, owner,
    /// minimum price, maximum price.
    pub fn new(options: &SearchOptions, limit: u32) -> Self {
        let mut predicates = Vec::new();

        if let Some(city) = options.city.as_deref().filter(|c| !c.trim().is_empty()) {
            predicates.push(Predicate::CityContains(city.to_string()));
        }
        if let Some(owner_id) = options.owner_id {
            predicates.push(Predicate::OwnerIs(owner_id));
        }
        if let Some(min) = options.minimum_price_per_night {
            predicates.push(Predicate::CostAbove(min));
        }
        if let Some(max) = options.maximum_price_per_night {
            predicates.push(Predicate::CostBelow(max));
        }

        Self {
            predicates,
            minimum_rating: options.minimum_rating,
            limit,
        }
    }

    /// Render the parameterized statement with all values bound.
    pub fn build(&self) -> QueryBuilder<'static, Postgres> {
        let mut qb = QueryBuilder::new(SEARCH_SELECT);

        for (i, predicate) in self.predicates.iter().enumerate() {
            qb.push(if i == 0 { " WHERE " } else { " AND " });
            predicate.push_to(&mut qb);
        }

        qb.push(" GROUP BY properties.id");

        if let Some(rating) = self.minimum_rating {
            qb.push(" HAVING avg(property_reviews.rating) >= ")
                .push_bind(rating);
        }

        qb.push(" ORDER BY properties.cost_per_night LIMIT ")
            .push_bind(i64::from(self.limit));

        qb
    }
}
