use std::collections::BTreeSet;

use crate::database::models::Car;
use crate::types::FilterParameters;

fn distinct_sorted<T: Ord + Clone>(cars: &[Car], field: impl Fn(&Car) -> &T) -> Vec<T> {
    cars.iter().map(|c| field(c).clone()).collect::<BTreeSet<_>>().into_iter().collect()
}

/// Distinct values of each filterable attribute across the whole catalog
pub fn enumerate(cars: &[Car]) -> FilterParameters {
    FilterParameters {
        cars_brands: distinct_sorted(cars, |c| &c.brand),
        number_of_seats: distinct_sorted(cars, |c| &c.number_of_seats),
        types: distinct_sorted(cars, |c| &c.car_type),
        gearboxes: distinct_sorted(cars, |c| &c.gearbox),
        fuel_types: distinct_sorted(cars, |c| &c.fuel_type),
        number_of_doors: distinct_sorted(cars, |c| &c.number_of_doors),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::sample_car;

    #[test]
    fn brands_are_sorted_and_deduplicated() {
        let cars: Vec<Car> = ["BMW", "Audi", "BMW"]
            .iter()
            .enumerate()
            .map(|(i, brand)| {
                let mut car = sample_car(&format!("c{}", i), 10);
                car.brand = brand.to_string();
                car
            })
            .collect();

        assert_eq!(enumerate(&cars).cars_brands, vec!["Audi", "BMW"]);
    }

    #[test]
    fn numeric_attributes_sort_numerically() {
        let cars: Vec<Car> = [7, 2, 5, 2]
            .iter()
            .enumerate()
            .map(|(i, seats)| {
                let mut car = sample_car(&format!("c{}", i), 10);
                car.number_of_seats = *seats;
                car.number_of_doors = if *seats > 4 { 5 } else { 3 };
                car
            })
            .collect();

        let params = enumerate(&cars);
        assert_eq!(params.number_of_seats, vec![2, 5, 7]);
        assert_eq!(params.number_of_doors, vec![3, 5]);
    }

    #[test]
    fn includes_unavailable_cars() {
        let mut car = sample_car("c1", 10);
        car.available = false;
        car.fuel_type = "electric".to_string();
        let params = enumerate(&[car, sample_car("c2", 10)]);
        assert!(params.fuel_types.contains(&"electric".to_string()));
    }

    #[test]
    fn empty_catalog_yields_empty_lists() {
        assert_eq!(enumerate(&[]), FilterParameters::default());
    }
}
