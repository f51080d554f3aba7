use crate::database::models::Car;
use crate::types::RentalSearch;

use super::types::{Clause, FilterOp, SqlParam};

/// A single typed condition on a car attribute
#[derive(Debug, Clone, PartialEq)]
pub enum CarPredicate {
    Seats(i32),
    Brand(String),
    Type(String),
    Gearbox(String),
    FuelType(String),
    Doors(i32),
    MinProductionYear(i32),
    MinHorsePower(i32),
    MinTrunk(i32),
    MinPrice(i64),
    MaxPrice(i64),
}

impl CarPredicate {
    pub fn matches(&self, car: &Car) -> bool {
        match self {
            CarPredicate::Seats(n) => car.number_of_seats == *n,
            CarPredicate::Brand(b) => car.brand == *b,
            CarPredicate::Type(t) => car.car_type == *t,
            CarPredicate::Gearbox(g) => car.gearbox == *g,
            CarPredicate::FuelType(f) => car.fuel_type == *f,
            CarPredicate::Doors(n) => car.number_of_doors == *n,
            CarPredicate::MinProductionYear(y) => car.production_year >= *y,
            CarPredicate::MinHorsePower(hp) => car.horse_power >= *hp,
            CarPredicate::MinTrunk(t) => car.trunk >= *t,
            CarPredicate::MinPrice(p) => car.price >= *p,
            CarPredicate::MaxPrice(p) => car.price <= *p,
        }
    }

    pub fn to_clause(&self) -> Clause {
        match self {
            CarPredicate::Seats(n) => Clause::new("number_of_seats", FilterOp::Eq, SqlParam::Int(*n)),
            CarPredicate::Brand(b) => Clause::new("brand", FilterOp::Eq, SqlParam::Text(b.clone())),
            CarPredicate::Type(t) => Clause::new("type", FilterOp::Eq, SqlParam::Text(t.clone())),
            CarPredicate::Gearbox(g) => Clause::new("gearbox", FilterOp::Eq, SqlParam::Text(g.clone())),
            CarPredicate::FuelType(f) => Clause::new("fuel_type", FilterOp::Eq, SqlParam::Text(f.clone())),
            CarPredicate::Doors(n) => Clause::new("number_of_doors", FilterOp::Eq, SqlParam::Int(*n)),
            CarPredicate::MinProductionYear(y) => Clause::new("production_year", FilterOp::Gte, SqlParam::Int(*y)),
            CarPredicate::MinHorsePower(hp) => Clause::new("horse_power", FilterOp::Gte, SqlParam::Int(*hp)),
            CarPredicate::MinTrunk(t) => Clause::new("trunk", FilterOp::Gte, SqlParam::Int(*t)),
            CarPredicate::MinPrice(p) => Clause::new("price", FilterOp::Gte, SqlParam::BigInt(*p)),
            CarPredicate::MaxPrice(p) => Clause::new("price", FilterOp::Lte, SqlParam::BigInt(*p)),
        }
    }
}

/// AND-combined list of predicates; an empty query matches every car
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CarQuery {
    predicates: Vec<CarPredicate>,
}

impl CarQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, predicate: CarPredicate) -> Self {
        self.predicates.push(predicate);
        self
    }

    pub fn from_search(search: &RentalSearch) -> Self {
        let candidates = [
            search.number_of_seats.map(CarPredicate::Seats),
            search.brand.clone().map(CarPredicate::Brand),
            search.car_type.clone().map(CarPredicate::Type),
            search.gearbox.clone().map(CarPredicate::Gearbox),
            search.fuel_type.clone().map(CarPredicate::FuelType),
            search.number_of_doors.map(CarPredicate::Doors),
            search.earliest_production_year.map(CarPredicate::MinProductionYear),
            search.minimal_horse_power.map(CarPredicate::MinHorsePower),
            search.minimal_trunk_size.map(CarPredicate::MinTrunk),
            search.minimal_price.map(CarPredicate::MinPrice),
            search.maximal_price.map(CarPredicate::MaxPrice),
        ];

        Self {
            predicates: candidates.into_iter().flatten().collect(),
        }
    }

    pub fn predicates(&self) -> &[CarPredicate] {
        &self.predicates
    }

    pub fn is_empty(&self) -> bool {
        self.predicates.is_empty()
    }

    pub fn matches(&self, car: &Car) -> bool {
        self.predicates.iter().all(|p| p.matches(car))
    }

    pub fn clauses(&self) -> Vec<Clause> {
        self.predicates.iter().map(CarPredicate::to_clause).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::sample_car;

    fn search(json: serde_json::Value) -> RentalSearch {
        serde_json::from_value(json).unwrap()
    }

    #[test]
    fn empty_search_builds_empty_query() {
        let query = CarQuery::from_search(&search(serde_json::json!({
            "start_date": "2024-01-01",
            "end_date": "2024-01-02"
        })));
        assert!(query.is_empty());
        assert!(query.matches(&sample_car("c1", 50)));
    }

    #[test]
    fn predicates_follow_field_order() {
        let query = CarQuery::from_search(&search(serde_json::json!({
            "minimal_price": 10,
            "brand": "BMW",
            "number_of_seats": 5,
            "maximal_price": 90,
            "start_date": "2024-01-01",
            "end_date": "2024-01-02"
        })));
        assert_eq!(
            query.predicates(),
            &[
                CarPredicate::Seats(5),
                CarPredicate::Brand("BMW".into()),
                CarPredicate::MinPrice(10),
                CarPredicate::MaxPrice(90),
            ]
        );
    }

    #[test]
    fn thresholds_are_inclusive() {
        let mut car = sample_car("c1", 50);
        car.horse_power = 150;
        car.production_year = 2019;
        car.trunk = 400;

        assert!(CarQuery::new().with(CarPredicate::MinHorsePower(150)).matches(&car));
        assert!(!CarQuery::new().with(CarPredicate::MinHorsePower(151)).matches(&car));
        assert!(CarQuery::new().with(CarPredicate::MinProductionYear(2019)).matches(&car));
        assert!(CarQuery::new().with(CarPredicate::MinTrunk(400)).matches(&car));
        assert!(CarQuery::new()
            .with(CarPredicate::MinPrice(50))
            .with(CarPredicate::MaxPrice(50))
            .matches(&car));
    }

    #[test]
    fn all_predicates_must_match() {
        let car = sample_car("c1", 50);
        let query = CarQuery::new()
            .with(CarPredicate::Brand(car.brand.clone()))
            .with(CarPredicate::Gearbox("other".into()));
        assert!(!query.matches(&car));
    }

    #[test]
    fn price_bounds_apply_independently() {
        let car = sample_car("c1", 120);
        assert!(CarQuery::new().with(CarPredicate::MaxPrice(150)).matches(&car));
        assert!(!CarQuery::new().with(CarPredicate::MaxPrice(100)).matches(&car));
        assert!(CarQuery::new().with(CarPredicate::MinPrice(100)).matches(&car));
    }

    #[test]
    fn clauses_are_typed_per_column() {
        let query = CarQuery::new()
            .with(CarPredicate::Type("SUV".into()))
            .with(CarPredicate::MinPrice(30));
        assert_eq!(
            query.clauses(),
            vec![
                Clause::new("type", FilterOp::Eq, SqlParam::Text("SUV".into())),
                Clause::new("price", FilterOp::Gte, SqlParam::BigInt(30)),
            ]
        );
    }
}
