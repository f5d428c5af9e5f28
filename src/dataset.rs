//! A small car inventory for demos and tests.

use crate::record::Record;

/// Returns the 25-car sample inventory.
///
/// Every price is distinct, and exactly two cars are Hondas.
///
/// ```rust
/// use bubbletea_datatable::dataset::sample_inventory;
///
/// let cars = sample_inventory();
/// assert_eq!(cars.len(), 25);
/// assert_eq!(cars.iter().filter(|c| c.make == "Honda").count(), 2);
/// ```
pub fn sample_inventory() -> Vec<Record> {
    [
        ("Toyota", "Camry", 26420.0),
        ("Ford", "Focus", 18750.0),
        ("Honda", "Civic", 22350.0),
        ("Chevrolet", "Malibu", 24100.0),
        ("Nissan", "Altima", 25300.0),
        ("BMW", "3 Series", 43800.0),
        ("Audi", "A4", 41250.0),
        ("Mazda", "CX-5", 28900.0),
        ("Subaru", "Outback", 29995.0),
        ("Kia", "Sportage", 27150.0),
        ("Hyundai", "Elantra", 19999.99),
        ("Volkswagen", "Jetta", 21485.0),
        ("Tesla", "Model 3", 38990.0),
        ("Jeep", "Wrangler", 33870.0),
        ("Ford", "Mustang", 31620.0),
        ("Toyota", "RAV4", 28675.0),
        ("Lexus", "ES", 42490.0),
        ("Volvo", "XC60", 44350.0),
        ("Chevrolet", "Tahoe", 56200.0),
        ("Honda", "Accord", 27895.0),
        ("Mercedes-Benz", "C-Class", 46950.0),
        ("Dodge", "Charger", 33125.0),
        ("Mitsubishi", "Outlander", 27495.0),
        ("Porsche", "Macan", 61800.0),
        ("Genesis", "G70", 40500.0),
    ]
    .into_iter()
    .map(|(make, model, price)| Record::new(make, model, price))
    .collect()
}
